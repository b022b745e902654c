//! Template store adapters
//!
//! Implementations of the application's [`TemplateSource`](dorkforge_application::TemplateSource)
//! port backed by files on disk or the set compiled into the binary.

mod error;
mod schema;
mod store;

pub use error::TemplateStoreError;
pub use store::{BundledTemplateSource, DirectoryTemplateSource, JsonBundleSource, source_for};
