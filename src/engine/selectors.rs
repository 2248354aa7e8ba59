//! Per-category component selectors
//!
//! Each selector is a pure function from (catalog slice, budget, context)
//! to at most one chosen item. Selectors never backtrack; the search loop
//! either accepts their combined output or moves on to the next platform
//! kit. Ordering inside a selector is stable, so results are deterministic
//! for a given catalog ordering.

use crate::catalog::types::{
    BoardFormat, Chassis, Cooler, CoolerKind, Cpu, Gpu, Motherboard, PerformanceTier, PowerSupply,
    PsuFormFactor, StorageDevice, StorageKind,
};
use crate::engine::request::BuildRequest;
use tracing::debug;

/// GPU sub-budget above which the VRAM-heavy preference kicks in.
const HIGH_END_GPU_BUDGET: f64 = 5000.0;
/// Minimum VRAM (GB) for the high-end GPU preference.
const HIGH_END_GPU_VRAM_GB: u32 = 16;
/// Case sub-budget above which the selector stops buying the cheapest case.
const MID_RANGE_CASE_BUDGET: f64 = 600.0;
/// Overall ceiling at which liquid cooling with a large radiator is preferred.
const LARGE_RADIATOR_CEILING: f64 = 10000.0;
/// Baseline system power draw (watts) before CPU and GPU.
const BASE_LOAD_WATTS: f64 = 150.0;
/// Safety margin multiplier for the PSU sizing formula.
const PSU_SAFETY_MARGIN: f64 = 1.5;

/// Picks a GPU within the sub-budget, most expensive first.
///
/// Above the high-end budget threshold, heavy/all-types/editing workloads
/// prefer the priciest card with at least 16 GB of VRAM, falling back to
/// the top-priced card when none qualifies.
pub fn select_gpu<'a>(gpus: &'a [Gpu], budget: f64, request: &BuildRequest) -> Option<&'a Gpu> {
    let mut affordable: Vec<&Gpu> = gpus.iter().filter(|g| g.price <= budget).collect();
    affordable.sort_by(|a, b| b.price.total_cmp(&a.price));

    if affordable.is_empty() {
        debug!(budget, "No GPU within budget");
        return None;
    }

    let wants_vram = request.heavy_detail() || request.detail.to_lowercase().contains("editing");
    if budget > HIGH_END_GPU_BUDGET && wants_vram {
        let pick = affordable
            .iter()
            .find(|g| g.vram_gb >= HIGH_END_GPU_VRAM_GB)
            .or(affordable.first());
        return pick.copied();
    }

    affordable.first().copied()
}

/// Picks a storage device within the sub-budget.
///
/// NVMe drives are preferred, ranked by capacity descending then price
/// ascending, with a ceiling-scaled capacity floor (2 TB at a 12000+
/// ceiling, 1 TB at 7000+, otherwise the cheapest 500 GB+ drive). Each
/// floor falls back to the top-ranked NVMe. When no NVMe fits the budget
/// at all, the cheapest SATA SSD is the fallback.
pub fn select_storage<'a>(
    devices: &'a [StorageDevice],
    budget: f64,
    ceiling: f64,
) -> Option<&'a StorageDevice> {
    let mut nvmes: Vec<&StorageDevice> = devices
        .iter()
        .filter(|d| d.kind == StorageKind::NvmeSsd && d.price <= budget)
        .collect();
    nvmes.sort_by(|a, b| {
        b.capacity_gb
            .cmp(&a.capacity_gb)
            .then(a.price.total_cmp(&b.price))
    });

    if !nvmes.is_empty() {
        if ceiling >= 12000.0 {
            return nvmes
                .iter()
                .find(|d| d.capacity_gb >= 2000)
                .or(nvmes.first())
                .copied();
        }
        if ceiling >= 7000.0 {
            return nvmes
                .iter()
                .find(|d| d.capacity_gb >= 1000)
                .or(nvmes.first())
                .copied();
        }
        return nvmes
            .iter()
            .filter(|d| d.capacity_gb >= 500)
            .min_by(|a, b| a.price.total_cmp(&b.price))
            .or(nvmes.first())
            .copied();
    }

    devices
        .iter()
        .filter(|d| d.kind == StorageKind::SataSsd && d.price <= budget)
        .min_by(|a, b| a.price.total_cmp(&b.price))
}

fn chassis_fits_board(case: &Chassis, board_format: BoardFormat) -> bool {
    match board_format {
        // Mini-ITX boards mount in anything.
        BoardFormat::MiniItx => true,
        BoardFormat::MicroAtx => {
            case.supports_format("micro-atx")
                || case.supports_format("m-atx")
                || case.supports_format("atx")
        }
        BoardFormat::Atx => case.supports_format("atx"),
    }
}

/// Picks a case compatible with the motherboard format within the
/// sub-budget.
///
/// Once the sub-budget clears the mid-range threshold the selector picks
/// the middle of the price-sorted list instead of the cheapest, so builds
/// with room in the budget don't land in the flimsiest enclosure.
pub fn select_chassis<'a>(
    cases: &'a [Chassis],
    motherboard: &Motherboard,
    budget: f64,
) -> Option<&'a Chassis> {
    let board_format = motherboard.format();
    let mut compatible: Vec<&Chassis> = cases
        .iter()
        .filter(|c| c.price <= budget)
        .filter(|c| chassis_fits_board(c, board_format))
        .collect();
    compatible.sort_by(|a, b| a.price.total_cmp(&b.price));

    if compatible.is_empty() {
        debug!(budget, format = ?board_format, "No compatible case");
        return None;
    }

    if budget > MID_RANGE_CASE_BUDGET {
        let index = (compatible.len() / 2).min(compatible.len() - 1);
        return Some(compatible[index]);
    }
    Some(compatible[0])
}

/// Computes the wattage a power supply must deliver for this CPU/GPU pair.
///
/// `max(1.5 × (150 + cpu + gpu), floor)` with a 650 W floor above a 7000
/// ceiling and 550 W otherwise. A fixed safety margin, not a simulation.
pub fn required_wattage(cpu: &Cpu, gpu: Option<&Gpu>, ceiling: f64) -> f64 {
    let demand = BASE_LOAD_WATTS + cpu.power_draw() + gpu.map_or(0.0, Gpu::power_draw);
    let safe = demand * PSU_SAFETY_MARGIN;
    let floor = if ceiling > 7000.0 { 650.0 } else { 550.0 };
    safe.max(floor)
}

fn psu_fits_formats(psu: &PowerSupply, board_format: BoardFormat, case: &Chassis) -> bool {
    let case_takes_atx = case.supports_format("atx");
    match board_format {
        BoardFormat::MiniItx => match psu.form_factor {
            PsuFormFactor::Sfx => true,
            PsuFormFactor::Atx => case_takes_atx,
        },
        BoardFormat::MicroAtx => {
            // A case advertising only micro-ATX support still "contains"
            // the atx substring, so the explicit micro-atx check keeps
            // such cases on SFX units.
            if !case_takes_atx || case.supports_format("micro-atx") {
                psu.form_factor == PsuFormFactor::Sfx
            } else {
                true
            }
        }
        BoardFormat::Atx => true,
    }
}

/// Picks the cheapest power supply that meets the wattage requirement,
/// fits the remaining budget, and is mountable given the motherboard and
/// case formats.
pub fn select_psu<'a>(
    supplies: &'a [PowerSupply],
    motherboard: &Motherboard,
    case: &Chassis,
    remaining_budget: f64,
    required_watts: f64,
) -> Option<&'a PowerSupply> {
    let board_format = motherboard.format();
    let mut qualifying: Vec<&PowerSupply> = supplies
        .iter()
        .filter(|p| (p.wattage as f64) >= required_watts)
        .filter(|p| p.price <= remaining_budget)
        .filter(|p| psu_fits_formats(p, board_format, case))
        .collect();
    qualifying.sort_by(|a, b| a.price.total_cmp(&b.price));

    if qualifying.is_empty() {
        debug!(
            required_watts,
            remaining_budget, "No qualifying power supply"
        );
    }
    qualifying.first().copied()
}

/// Picks a cooler for a CPU that needs one.
///
/// High-end CPUs on a 10000+ ceiling get the priciest large-radiator
/// (360/280 mm) liquid cooler when one qualifies; any high-end CPU falls
/// back to the cheapest liquid cooler; everything else gets the cheapest
/// air cooler, or the cheapest cooler of any kind when no air cooler
/// matches the socket within budget.
pub fn select_cooler<'a>(
    coolers: &'a [Cooler],
    cpu: &Cpu,
    budget: f64,
    ceiling: f64,
) -> Option<&'a Cooler> {
    let matching: Vec<&Cooler> = coolers
        .iter()
        .filter(|c| c.supports_socket(&cpu.socket))
        .filter(|c| c.price <= budget)
        .collect();

    if matching.is_empty() {
        debug!(socket = %cpu.socket, budget, "No cooler for socket within budget");
        return None;
    }

    let high_end = cpu.tier() == PerformanceTier::HighEnd;

    if high_end && ceiling >= LARGE_RADIATOR_CEILING {
        let big = matching
            .iter()
            .filter(|c| c.has_large_radiator())
            .max_by(|a, b| a.price.total_cmp(&b.price))
            .copied();
        if big.is_some() {
            return big;
        }
    }

    if high_end {
        let liquid = matching
            .iter()
            .filter(|c| c.kind == CoolerKind::Liquid)
            .min_by(|a, b| a.price.total_cmp(&b.price))
            .copied();
        if liquid.is_some() {
            return liquid;
        }
    }

    matching
        .iter()
        .filter(|c| c.kind == CoolerKind::Air)
        .min_by(|a, b| a.price.total_cmp(&b.price))
        .or_else(|| matching.iter().min_by(|a, b| a.price.total_cmp(&b.price)))
        .copied()
}
