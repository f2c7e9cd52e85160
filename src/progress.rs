/// Progress reporting for multi-game lookups.
/// Front ends implement this to surface status; the default methods do nothing.
pub trait Progress {
    /// Called at the start with the number of game ids requested.
    fn begin(&mut self, _total: usize) {}

    /// One game id finished with a non-empty roster.
    fn item_done(&mut self, _id: &str, _names: usize) {}

    /// One game id finished empty (unknown id, fetch failure, page change).
    fn item_empty(&mut self, _id: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
