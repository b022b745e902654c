//! Progress notification port
//!
//! Defines the interface for reporting progress during batch generation.

/// Callback for progress updates while generating several categories
///
/// Implementations live in the presentation layer.
pub trait GenerationProgress: Send + Sync {
    /// Called before a category is generated
    fn on_category_start(&self, category: &str, index: usize, total: usize);

    /// Called after a category produced its dorks
    fn on_category_complete(&self, category: &str, count: usize);

    /// Called when a category is skipped
    fn on_category_skipped(&self, _category: &str, _reason: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl GenerationProgress for NoProgress {
    fn on_category_start(&self, _category: &str, _index: usize, _total: usize) {}
    fn on_category_complete(&self, _category: &str, _count: usize) {}
}
