//! Assembly search loop
//!
//! The engine walks the ordered platform kit sequence and greedily fills in
//! the remaining categories for each kit: cooler, GPU, storage, case, then
//! power supply from whatever budget is left. The loop is an anytime
//! algorithm: it returns immediately once a candidate clears the budget
//! usage threshold, keeps the best candidate seen otherwise, and is bounded
//! by an attempt cap and a wall-clock deadline against the combinatorial
//! size of the kit sequence. It never backtracks a selector's choice.

use crate::catalog::types::{
    Catalog, Chassis, Cooler, Cpu, Gpu, Motherboard, PowerSupply, RamModule, StorageDevice,
};
use crate::config::RigsmithConfig;
use crate::engine::budget::{allocate, BudgetAllocation};
use crate::engine::kits::{generate_kits, qualifying_cpus, PlatformKit};
use crate::engine::request::BuildRequest;
use crate::engine::selectors;
use serde::Serialize;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that end a recommendation request
#[derive(Debug, Error)]
pub enum EngineError {
    /// No CPU passed the price and usage filters
    #[error("No CPU found for the requested budget and usage")]
    NoQualifyingCpu,

    /// CPUs qualified but no compatible (CPU, motherboard, RAM) triple fit
    #[error("No compatible platform kit found within the platform budget")]
    NoCompatiblePlatform,

    /// The search exhausted its kit sequence, attempt cap, or time budget
    /// without producing a single candidate build
    #[error("No feasible build found after {attempts} attempts")]
    NoFeasibleBuild { attempts: u32 },

    /// The catalog snapshot itself is malformed
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl EngineError {
    /// Caller-facing hint for each failure, so the caller can decide how
    /// to retry (the engine itself never does).
    pub fn help_message(&self) -> String {
        match self {
            EngineError::NoQualifyingCpu => "No CPU fits the platform budget for this usage.\n\
                 Help: try a higher budget tier, or register more CPUs in the catalog."
                .to_string(),
            EngineError::NoCompatiblePlatform => {
                "No compatible CPU + motherboard + RAM combination fits the platform budget.\n\
                 Help: try a higher budget tier, or check that the catalog has matching \
                 sockets and memory types."
                    .to_string()
            }
            EngineError::NoFeasibleBuild { attempts } => format!(
                "Could not assemble a complete build after {} attempts.\n\
                 Help: try a higher budget tier, or register more cases and power supplies.",
                attempts
            ),
            EngineError::InvalidCatalog(reason) => format!(
                "The component catalog contains malformed entries.\n\
                 Details: {}",
                reason
            ),
        }
    }
}

/// The output aggregate: one selection per category. GPU, storage, and
/// cooler are absent when the request did not need them or nothing fit.
/// Immutable once returned.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendedBuild {
    pub cpu: Cpu,
    pub motherboard: Motherboard,
    pub ram: RamModule,
    pub gpu: Option<Gpu>,
    pub storage: Option<StorageDevice>,
    pub chassis: Chassis,
    pub power_supply: PowerSupply,
    pub cooler: Option<Cooler>,
    /// Sum of all selected component prices.
    pub total_price: f64,
    /// Fraction of the budget ceiling consumed.
    pub budget_usage: f64,
}

/// Build recommendation engine. Stateless across requests; holds only the
/// search tunables.
#[derive(Debug, Clone)]
pub struct Engine {
    config: RigsmithConfig,
}

impl Engine {
    pub fn new(config: RigsmithConfig) -> Self {
        Self { config }
    }

    /// Runs one recommendation request against a catalog snapshot.
    ///
    /// Synchronous and single-threaded: the whole generate → search →
    /// select pipeline runs to completion (or failure) before returning.
    /// Identical inputs produce identical outputs.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` when no CPU qualifies, no platform kit can be
    /// formed, or the bounded search produces no candidate build.
    pub fn recommend(
        &self,
        catalog: &Catalog,
        request: &BuildRequest,
    ) -> Result<RecommendedBuild, EngineError> {
        let started = Instant::now();

        catalog.validate().map_err(EngineError::InvalidCatalog)?;

        let ceiling = request.tier.ceiling();
        let allocation = allocate(ceiling, request);
        info!(
            usage = %request.usage,
            tier = %request.tier,
            ceiling,
            platform_budget = allocation.platform,
            gpu_budget = allocation.gpu,
            "Starting recommendation"
        );

        let valid_cpus = qualifying_cpus(&catalog.cpus, allocation.platform, request);
        if valid_cpus.is_empty() {
            warn!("No qualifying CPU");
            return Err(EngineError::NoQualifyingCpu);
        }

        let kits = generate_kits(
            &valid_cpus,
            &catalog.motherboards,
            &catalog.ram_modules,
            allocation.platform,
            request.tier,
        );
        if kits.is_empty() {
            warn!("No compatible platform kit");
            return Err(EngineError::NoCompatiblePlatform);
        }

        let result = self.search(catalog, request, &allocation, ceiling, &kits, started);

        match &result {
            Ok(build) => info!(
                total_price = build.total_price,
                budget_usage = build.budget_usage,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Recommendation complete"
            ),
            Err(err) => warn!(
                error = %err,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Recommendation failed"
            ),
        }
        result
    }

    fn search(
        &self,
        catalog: &Catalog,
        request: &BuildRequest,
        allocation: &BudgetAllocation,
        ceiling: f64,
        kits: &[PlatformKit<'_>],
        started: Instant,
    ) -> Result<RecommendedBuild, EngineError> {
        let mut best: Option<RecommendedBuild> = None;
        let mut best_price = 0.0;
        let mut attempts: u32 = 0;

        for kit in kits {
            if started.elapsed() >= self.config.timeout() {
                warn!(attempts, "Search deadline reached, keeping best build so far");
                break;
            }
            if attempts >= self.config.max_attempts {
                warn!(attempts, "Attempt cap reached, keeping best build so far");
                break;
            }
            attempts += 1;

            let mut remaining = ceiling - kit.total_cost;

            // 1. Cooler, when the CPU's stock cooler is not enough.
            let cooler = if kit.cpu.bundled_cooler() {
                None
            } else {
                let picked =
                    selectors::select_cooler(&catalog.coolers, kit.cpu, allocation.cooler, ceiling);
                if let Some(c) = picked {
                    remaining -= c.price;
                }
                picked
            };

            // 2. GPU. A request that needs one rejects the whole kit when
            //    nothing fits.
            let gpu = if request.requires_gpu() {
                match selectors::select_gpu(&catalog.gpus, allocation.gpu, request) {
                    Some(g) => {
                        remaining -= g.price;
                        Some(g)
                    }
                    None => {
                        debug!(kit_cpu = %kit.cpu.name, "No GPU fits, skipping kit");
                        continue;
                    }
                }
            } else {
                None
            };

            // 3. Storage.
            let storage = selectors::select_storage(&catalog.storage, allocation.storage, ceiling);
            if let Some(s) = storage {
                remaining -= s.price;
            }

            // 4. Case.
            let Some(chassis) =
                selectors::select_chassis(&catalog.chassis, kit.motherboard, allocation.chassis)
            else {
                debug!(kit_board = %kit.motherboard.name, "No compatible case, skipping kit");
                continue;
            };
            remaining -= chassis.price;

            // 5. Power supply, out of whatever budget is left.
            let watts = selectors::required_wattage(kit.cpu, gpu, ceiling);
            let Some(psu) = selectors::select_psu(
                &catalog.power_supplies,
                kit.motherboard,
                chassis,
                remaining,
                watts,
            ) else {
                debug!(required_watts = watts, "No power supply fits, skipping kit");
                continue;
            };
            remaining -= psu.price;

            if remaining < -self.config.overspend_tolerance {
                continue;
            }

            let total_price = ceiling - remaining;
            let budget_usage = total_price / ceiling;
            let candidate = RecommendedBuild {
                cpu: kit.cpu.clone(),
                motherboard: kit.motherboard.clone(),
                ram: kit.ram.clone(),
                gpu: gpu.cloned(),
                storage: storage.cloned(),
                chassis: chassis.clone(),
                power_supply: psu.clone(),
                cooler: cooler.cloned(),
                total_price,
                budget_usage,
            };

            if budget_usage >= self.config.min_budget_usage {
                info!(
                    attempts,
                    budget_usage, "Candidate clears the usage threshold, accepting"
                );
                return Ok(candidate);
            }

            if total_price > best_price {
                best_price = total_price;
                best = Some(candidate);
            }
        }

        best.ok_or(EngineError::NoFeasibleBuild { attempts })
    }
}
