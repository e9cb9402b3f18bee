//! # Fault Taxonomy
//!
//! Defines every failure category the drill and the collection can raise.
//!
//! The categories mirror a classic layered-handler design:
//! * [`RuntimeFault`] — the generic runtime family. Division and logic
//!   faults are members, so a handler for the family recovers both.
//! * [`CustomFault`] — a distinct category the runtime-family handlers
//!   must not swallow; only the top-level boundary handles it.
//! * [`Fault`] — the sum of everything a stage can raise. "Catch narrow,
//!   else propagate" is a `match` on one variant plus `return Err` for
//!   the rest.
//! * [`CollectionError`] — bounds violations from [`crate::collection`],
//!   unrelated to the stage categories.

use thiserror::Error;

/// The generic runtime-failure family.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeFault {
    /// The divisor of a guarded division was zero.
    #[error("attempted to divide by zero ({numerator} / {denominator})")]
    DivisionByZero { numerator: f64, denominator: f64 },

    /// A stage violated its own preconditions mid-run.
    #[error("logic fault: {0}")]
    Logic(String),
}

/// A failure category outside the runtime family.
///
/// The message is fixed at construction; handlers may inspect it but
/// never rewrite it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct CustomFault {
    message: String,
}

impl CustomFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for CustomFault {
    fn default() -> Self {
        Self::new("custom fault occurred")
    }
}

/// Everything a drill stage can raise.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Fault {
    #[error(transparent)]
    Runtime(#[from] RuntimeFault),

    #[error(transparent)]
    Custom(#[from] CustomFault),
}

impl Fault {
    /// Short category name, used by transcript lines and assertions.
    pub fn kind(&self) -> &'static str {
        match self {
            Fault::Runtime(RuntimeFault::DivisionByZero { .. }) => "division-by-zero",
            Fault::Runtime(RuntimeFault::Logic(_)) => "logic",
            Fault::Custom(_) => "custom",
        }
    }

    pub fn is_runtime(&self) -> bool {
        matches!(self, Fault::Runtime(_))
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Fault::Custom(_))
    }
}

/// Bounds violations raised by [`crate::collection::Collection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The index is not less than the current length.
    #[error("index {index} out of range for collection of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// The erase range is reversed or ends past the current length.
    #[error("invalid range {start}..{end} for collection of length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },
}
