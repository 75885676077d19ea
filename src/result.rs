//! Error handling and result types for tagship.
//!
//! Failure reporting is built on `color-eyre`, giving readable error reports
//! with context attached via `wrap_err` as errors propagate up to `main`.

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout tagship.
pub type Result<T> = EyreResult<T>;
