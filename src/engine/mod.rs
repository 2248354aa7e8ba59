//! Build Allocation Engine: budget resolution, allocation, kit generation,
//! selection, and the assembly search loop

pub mod budget;
pub mod kits;
pub mod request;
pub mod search;
pub mod selectors;

pub use budget::{allocate, BudgetAllocation};
pub use kits::{generate_kits, qualifying_cpus, PlatformKit};
pub use request::{BudgetTier, BuildRequest, Usage};
pub use search::{Engine, EngineError, RecommendedBuild};
