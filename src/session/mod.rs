//! Per-target orchestration and parallel fan-out.

/// The `Retargeter` session.
pub mod retargeter;
