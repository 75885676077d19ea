//! Command execution for tagship.
//!
//! Each subcommand is a linear sequence of external tool invocations behind
//! the `CommandRunner` seam. Failures abort the sequence except where the
//! workflow is explicitly best-effort (tag cleanup).

/// Best-effort removal of a tag and its hosted release.
pub mod clean_tag;

/// Semantic-release orchestration with optional build and upload stages.
pub mod release;
