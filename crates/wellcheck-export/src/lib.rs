//! wellcheck-export
//!
//! HTML pages for the questionnaire and its result, rendered from
//! embedded Tera templates.

pub mod error;
pub mod render;
pub mod view;
