//! Structured logging vocabulary.
//!
//! Every event carries `event` and `component` fields; names and keys are kept
//! here so log consumers can rely on them.

pub mod events;
pub mod fields;
