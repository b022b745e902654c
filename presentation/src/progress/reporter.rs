//! Progress reporting for batch generation

use colored::Colorize;
use dorkforge_application::GenerationProgress;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress across categories with a progress bar on stderr
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    /// Clear the bar once the batch is done
    pub fn finish(&self) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationProgress for ProgressReporter {
    fn on_category_start(&self, category: &str, _index: usize, total: usize) {
        let Ok(mut bar) = self.bar.lock() else {
            return;
        };
        let pb = bar.get_or_insert_with(|| {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(Self::style());
            pb.set_prefix("Generating");
            pb
        });
        pb.set_message(category.to_string());
    }

    fn on_category_complete(&self, category: &str, count: usize) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(format!("{} {} ({})", "v".green(), category, count));
            pb.inc(1);
        }
    }

    fn on_category_skipped(&self, category: &str, reason: &str) {
        let message = format!("{} {} ({})", "x".red(), category, reason);
        match self.bar.lock().ok().and_then(|bar| bar.clone()) {
            Some(pb) => pb.println(message),
            None => eprintln!("{}", message),
        }
    }
}

/// Simple line-based progress on stderr (no bar)
pub struct SimpleProgress;

impl GenerationProgress for SimpleProgress {
    fn on_category_start(&self, category: &str, index: usize, total: usize) {
        eprintln!("{} [{}/{}] {}", "->".cyan(), index + 1, total, category.bold());
    }

    fn on_category_complete(&self, category: &str, count: usize) {
        eprintln!("  {} {} ({} dorks)", "v".green(), category, count);
    }

    fn on_category_skipped(&self, category: &str, reason: &str) {
        eprintln!("  {} {} ({})", "x".red(), category, reason);
    }
}
