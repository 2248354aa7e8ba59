//! Ingestion-time component classification
//!
//! Catalog entries arrive with free-text model names. Everything selection
//! logic needs to know about a name (integrated graphics marker, performance
//! tier, radiator size, board format) is derived here exactly once, when the
//! catalog is ingested. Selectors only ever read the resulting attributes,
//! never the raw name, so naming-convention changes stay contained in this
//! module.

use crate::catalog::types::{BoardFormat, PerformanceTier};

/// Model-name markers for CPUs that belong to the upper tier of their family.
const HIGH_END_MARKERS: [&str; 5] = ["RYZEN 7", "RYZEN 9", "I7", "I9", "13600K"];

/// Low-TDP parts that ship with a stock cooler good enough to keep.
const STOCK_COOLER_MARKERS: [&str; 2] = ["I3-12100F", "RYZEN 5 5600"];

/// Radiator sizes (mm) that appear in liquid cooler model names, largest first.
const RADIATOR_SIZES_MM: [u32; 4] = [360, 280, 240, 120];

/// Returns true when a CPU model name carries the integrated-graphics marker
/// (a trailing "G" suffix, e.g. "Ryzen 5 5600G").
pub fn has_integrated_graphics(name: &str) -> bool {
    name.trim().to_uppercase().ends_with('G')
}

/// Classifies a CPU model name into a performance tier.
///
/// The tier decides cooler selection (liquid vs air) and whether a CPU counts
/// as "powerful" for engineering/creative workloads.
pub fn performance_tier(name: &str) -> PerformanceTier {
    let upper = name.to_uppercase();
    if HIGH_END_MARKERS.iter().any(|m| upper.contains(m)) {
        PerformanceTier::HighEnd
    } else {
        PerformanceTier::Mainstream
    }
}

/// Returns true when the CPU's bundled stock cooler is sufficient, meaning
/// the build does not need a separate cooler.
///
/// Integrated-graphics parts and a short list of known low-TDP models are
/// exempt from cooler selection.
pub fn bundled_cooler(name: &str) -> bool {
    let upper = name.trim().to_uppercase();
    if upper.ends_with('G') {
        return true;
    }
    STOCK_COOLER_MARKERS.iter().any(|m| upper.contains(m))
}

/// Extracts the radiator size embedded in a liquid cooler model name
/// (e.g. "Kraken 360 RGB" -> 360). Returns `None` for names without a
/// recognized size, which includes all air coolers.
pub fn radiator_size(name: &str) -> Option<u32> {
    RADIATOR_SIZES_MM
        .iter()
        .copied()
        .find(|size| name.contains(&size.to_string()))
}

/// Parses a motherboard form-factor string into a typed format.
///
/// Matching is by substring, most specific first, so "Micro-ATX" never
/// falls through to the plain ATX arm. Unrecognized strings default to
/// full ATX, the most restrictive case-compatibility rule.
pub fn board_format(form_factor: &str) -> BoardFormat {
    let lower = form_factor.to_lowercase();
    if lower.contains("mini-itx") {
        BoardFormat::MiniItx
    } else if lower.contains("micro-atx") || lower.contains("m-atx") {
        BoardFormat::MicroAtx
    } else {
        BoardFormat::Atx
    }
}
