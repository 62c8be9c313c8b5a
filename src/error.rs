//! Internal error taxonomy
//!
//! Errors never escape the dispatcher: a failing estimator is logged and
//! replaced by a zero result so the presentation layer keeps running.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A float field in the input state was NaN or infinite.
    #[error("non-finite value in field `{field}`")]
    NonFiniteInput { field: &'static str },
    /// A category tag from the presentation layer did not match any category.
    #[error("unknown category tag `{0}`")]
    UnknownCategory(String),
}
