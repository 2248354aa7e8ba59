//! Budget allocation across component categories
//!
//! Splits the resolved ceiling into five sub-budgets according to the usage
//! profile and its detail qualifier. The percentages intentionally do not
//! sum to 100%: the unallocated remainder is slack that selectors absorb by
//! buying below their ceiling, and the power supply draws from whatever is
//! left at the end.

use crate::engine::request::{BuildRequest, Usage};
use serde::Serialize;

/// Per-category sub-budgets for one request. Recomputed per request and
/// never persisted.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BudgetAllocation {
    pub platform: f64,
    pub gpu: f64,
    pub storage: f64,
    pub chassis: f64,
    pub cooler: f64,
}

/// Splits the ceiling into sub-budgets per the usage heuristics.
///
/// Gaming with a heavy/"all types" detail shifts money from the platform to
/// the GPU; work favors the platform; studies and generic use skip the GPU
/// entirely.
pub fn allocate(ceiling: f64, request: &BuildRequest) -> BudgetAllocation {
    let shares: [f64; 5] = match request.usage {
        Usage::Gaming if request.heavy_detail() => [0.35, 0.40, 0.08, 0.08, 0.09],
        Usage::Gaming => [0.40, 0.30, 0.10, 0.10, 0.10],
        Usage::Work => [0.45, 0.20, 0.15, 0.10, 0.10],
        Usage::Studies | Usage::Other => [0.60, 0.0, 0.15, 0.15, 0.10],
    };

    BudgetAllocation {
        platform: ceiling * shares[0],
        gpu: ceiling * shares[1],
        storage: ceiling * shares[2],
        chassis: ceiling * shares[3],
        cooler: ceiling * shares[4],
    }
}
