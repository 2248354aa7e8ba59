//! rigsmith - budget-aware PC build recommendation engine
//!
//! This library recommends a complete, internally-compatible computer build
//! (CPU, motherboard, RAM, GPU, storage, case, power supply, cooler) for a
//! budget ceiling and usage profile.
//!
//! # Core Concepts
//!
//! - **Catalog snapshot**: immutable per-request lists of candidate
//!   components per category, classified once at ingestion
//! - **Budget allocation**: the ceiling split into per-category sub-budgets
//!   by usage heuristics
//! - **Platform kit**: a compatible (CPU, motherboard, RAM) triple treated
//!   as one atomic unit during search
//! - **Assembly search**: an anytime loop that fills in the remaining
//!   categories per kit, accepts the first build clearing the budget usage
//!   threshold, and falls back to the best candidate seen
//!
//! # Example Usage
//!
//! ```
//! use rigsmith::{BuildRequest, Catalog, Engine, RigsmithConfig};
//!
//! let catalog = Catalog::default().ingest(); // normally loaded from a store
//! let request = BuildRequest::from_raw("gaming", "heavy games", "high");
//! let engine = Engine::new(RigsmithConfig::default());
//!
//! // An empty catalog has no qualifying CPU.
//! assert!(engine.recommend(&catalog, &request).is_err());
//! ```
//!
//! # Project Structure
//!
//! - [`catalog`]: component data model, classification, and loading
//! - [`engine`]: budget resolution/allocation, kit generation, selectors,
//!   and the assembly search loop
//! - [`cli`]: command-line boundary
//! - [`util`]: logging setup

// Public modules
pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod util;

// Re-export key types for convenient access
pub use catalog::loader::{load_catalog, CatalogError};
pub use catalog::types::Catalog;
pub use config::{ConfigError, RigsmithConfig};
pub use engine::request::{BudgetTier, BuildRequest, Usage};
pub use engine::search::{Engine, EngineError, RecommendedBuild};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
