//! Foundation module - Shared domain primitives.
//!
//! Contains the criterion and technology enums plus the error types
//! that form the vocabulary of the decision engine.

mod criterion;
mod errors;
mod technology;

pub use criterion::Criterion;
pub use errors::{ensure_finite, DomainError, ErrorCode, ValidationError};
pub use technology::{TechnologyKind, TechnologyProfile};
