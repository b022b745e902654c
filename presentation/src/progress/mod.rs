//! Progress reporting for batch generation

pub mod reporter;
