//! wellcheck-instruments
//!
//! The wellness questionnaire as pure data, plus its scoring rules.
//! No I/O. Defines the five domains, their questions, severity bands,
//! advice text and urgency thresholds, and the `evaluate` function that
//! turns raw answers into an [`AssessmentResult`].

pub mod domains;
pub mod error;
pub mod scoring;
pub mod validation;

pub use domains::{DomainId, DomainSpec, all_domains, domain};
pub use scoring::{AssessmentResult, DomainResponses, DomainResult, Severity, WellnessBand, evaluate};
pub use validation::{ValidationIssue, validate_responses};
