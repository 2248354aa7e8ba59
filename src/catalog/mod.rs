//! Component catalog: data model, name classification, and file loading

pub mod classify;
pub mod loader;
pub mod types;

pub use loader::{load_catalog, CatalogError};
pub use types::{
    BoardFormat, Catalog, Chassis, Cooler, CoolerKind, Cpu, Gpu, Motherboard, PerformanceTier,
    PowerSupply, PsuFormFactor, RamModule, StorageDevice, StorageKind,
};
