use std::collections::HashSet;

/// Keeps at most one file per imaging series
///
/// The first file offered for a series is admitted and every later file of
/// the same series is rejected. Which file comes first depends on the
/// directory walk order.
#[derive(Debug, Default)]
pub struct SeriesDeduplicator {
    seen: HashSet<String>,
}

impl SeriesDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits a series identifier the first time it is seen
    ///
    /// Returns `false` for a missing or empty identifier, and for an
    /// identifier that was already admitted.
    pub fn admit(&mut self, series_id: Option<&str>) -> bool {
        match series_id {
            Some(id) if !id.is_empty() => {
                if self.seen.contains(id) {
                    false
                } else {
                    self.seen.insert(id.to_string())
                }
            }
            _ => false,
        }
    }
}
