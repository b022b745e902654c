//! Template catalog, generation and post-generation filtering

pub mod catalog;
pub mod entities;
pub mod filter;
pub mod generator;
pub mod refine;

pub use catalog::TemplateCatalog;
pub use entities::{
    Category, CategoryDetail, CategorySummary, Dork, FilterDef, FilterOption, Template,
    TemplateMatch,
};
pub use filter::{DESCRIPTION_CONTAINS, FilterCriterion, filter_dorks};
pub use refine::GenerationRefinements;
