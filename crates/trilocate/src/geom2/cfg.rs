//! Tolerance defaults for 2D predicates (internal).
//!
//! Policy
//! - A single fixed absolute threshold. Signed areas with magnitude below it
//!   are treated as zero. Not configurable at runtime.

/// Absolute tolerance for signed double-areas (degeneracy, edge and side tests).
pub const EPS: f64 = 1e-12;
