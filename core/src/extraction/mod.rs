pub mod container;
pub mod locator;
pub mod tags;

pub use container::DecodedContainer;
pub use locator::locate;
pub use tags::*;
