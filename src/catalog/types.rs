//! Component data model and catalog snapshot
//!
//! Every component category exposes at minimum a model `name` and a `price`.
//! Category-specific attributes (socket, form factor, wattage, capacity)
//! drive the compatibility checks in the engine. Classification attributes
//! that the original data encodes in model names (integrated graphics,
//! performance tier, radiator size) are explicit optional fields here; the
//! ingestion pass fills them from the name when the input omits them, and
//! accessors fall back to the same classification so hand-built catalogs in
//! tests behave identically.

use crate::catalog::classify;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nominal CPU power draw (watts) assumed when the catalog entry has none.
pub const DEFAULT_CPU_WATTS: f64 = 65.0;

/// Performance tier of a CPU, classified once at catalog ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    Mainstream,
    HighEnd,
}

/// Motherboard physical format, derived from the free-text form factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardFormat {
    MiniItx,
    MicroAtx,
    Atx,
}

/// Power supply mounting standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PsuFormFactor {
    Atx,
    Sfx,
}

/// Storage device interface tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageKind {
    #[serde(rename = "NVMe SSD", alias = "SSD NVMe", alias = "nvme")]
    NvmeSsd,
    #[serde(rename = "SATA SSD", alias = "SSD SATA", alias = "sata")]
    SataSsd,
}

/// Cooler family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoolerKind {
    #[serde(rename = "Air Cooler", alias = "air")]
    Air,
    #[serde(rename = "Water Cooler", alias = "liquid", alias = "Liquid Cooler")]
    Liquid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cpu {
    pub name: String,
    pub price: f64,
    pub socket: String,
    #[serde(default)]
    pub recommended_power_watts: Option<f64>,
    /// Filled from the name at ingestion when absent.
    #[serde(default)]
    pub integrated_graphics: Option<bool>,
    /// Filled from the name at ingestion when absent.
    #[serde(default)]
    pub tier: Option<PerformanceTier>,
}

impl Cpu {
    pub fn has_integrated_graphics(&self) -> bool {
        self.integrated_graphics
            .unwrap_or_else(|| classify::has_integrated_graphics(&self.name))
    }

    pub fn tier(&self) -> PerformanceTier {
        self.tier
            .unwrap_or_else(|| classify::performance_tier(&self.name))
    }

    /// True when the stock cooler is sufficient and no separate cooler is
    /// selected for this CPU.
    pub fn bundled_cooler(&self) -> bool {
        classify::bundled_cooler(&self.name)
    }

    /// True for parts suited to engineering/creative workloads: anything
    /// without integrated graphics, or an upper-tier part even with them.
    pub fn discrete_capable(&self) -> bool {
        !self.has_integrated_graphics() || self.tier() == PerformanceTier::HighEnd
    }

    pub fn power_draw(&self) -> f64 {
        self.recommended_power_watts.unwrap_or(DEFAULT_CPU_WATTS)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Motherboard {
    pub name: String,
    pub price: f64,
    pub cpu_socket: String,
    pub supported_ram_type: String,
    pub form_factor: String,
}

impl Motherboard {
    pub fn format(&self) -> BoardFormat {
        classify::board_format(&self.form_factor)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RamModule {
    pub name: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub ram_type: String,
    pub capacity_gb: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gpu {
    pub name: String,
    pub price: f64,
    pub vram_gb: u32,
    #[serde(default)]
    pub recommended_power_watts: Option<f64>,
}

impl Gpu {
    pub fn power_draw(&self) -> f64 {
        self.recommended_power_watts.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageDevice {
    pub name: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: StorageKind,
    pub capacity_gb: u32,
}

/// PC case. Supported motherboard formats stay free text and are
/// substring-matched, mirroring how vendors advertise them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chassis {
    pub name: String,
    pub price: f64,
    pub supported_board_formats: String,
}

impl Chassis {
    pub fn supports_format(&self, needle: &str) -> bool {
        self.supported_board_formats
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerSupply {
    pub name: String,
    pub price: f64,
    pub wattage: u32,
    pub form_factor: PsuFormFactor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cooler {
    pub name: String,
    pub price: f64,
    pub supported_sockets: String,
    #[serde(rename = "type")]
    pub kind: CoolerKind,
    /// Filled from the name at ingestion when absent (liquid coolers only).
    #[serde(default)]
    pub radiator_mm: Option<u32>,
}

impl Cooler {
    pub fn supports_socket(&self, socket: &str) -> bool {
        self.supported_sockets
            .to_uppercase()
            .contains(&socket.to_uppercase())
    }

    pub fn radiator(&self) -> Option<u32> {
        self.radiator_mm
            .or_else(|| classify::radiator_size(&self.name))
    }

    /// True for liquid coolers with a 360 mm or 280 mm radiator.
    pub fn has_large_radiator(&self) -> bool {
        self.kind == CoolerKind::Liquid && matches!(self.radiator(), Some(360) | Some(280))
    }
}

/// Read-only snapshot of the component store for one recommendation request.
///
/// The engine never mutates a catalog; `ingest` is the one normalization
/// pass, run when the snapshot is constructed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub cpus: Vec<Cpu>,
    #[serde(default)]
    pub motherboards: Vec<Motherboard>,
    #[serde(default)]
    pub ram_modules: Vec<RamModule>,
    #[serde(default)]
    pub gpus: Vec<Gpu>,
    #[serde(default)]
    pub storage: Vec<StorageDevice>,
    #[serde(default)]
    pub chassis: Vec<Chassis>,
    #[serde(default)]
    pub power_supplies: Vec<PowerSupply>,
    #[serde(default)]
    pub coolers: Vec<Cooler>,
}

impl Catalog {
    /// Populates classification attributes that the input left implicit in
    /// model names. Runs once per snapshot; explicit input values win.
    pub fn ingest(mut self) -> Self {
        for cpu in &mut self.cpus {
            if cpu.integrated_graphics.is_none() {
                cpu.integrated_graphics = Some(classify::has_integrated_graphics(&cpu.name));
            }
            if cpu.tier.is_none() {
                cpu.tier = Some(classify::performance_tier(&cpu.name));
            }
        }
        for cooler in &mut self.coolers {
            if cooler.radiator_mm.is_none() {
                cooler.radiator_mm = classify::radiator_size(&cooler.name);
            }
        }
        self
    }

    /// Rejects malformed entries. A negative price or a zero-wattage power
    /// supply means the snapshot itself is broken, which the engine reports
    /// as an internal error rather than a "no build found" failure.
    pub fn validate(&self) -> Result<(), String> {
        let prices = self
            .cpus
            .iter()
            .map(|c| (&c.name, c.price))
            .chain(self.motherboards.iter().map(|m| (&m.name, m.price)))
            .chain(self.ram_modules.iter().map(|r| (&r.name, r.price)))
            .chain(self.gpus.iter().map(|g| (&g.name, g.price)))
            .chain(self.storage.iter().map(|s| (&s.name, s.price)))
            .chain(self.chassis.iter().map(|c| (&c.name, c.price)))
            .chain(self.power_supplies.iter().map(|p| (&p.name, p.price)))
            .chain(self.coolers.iter().map(|c| (&c.name, c.price)));

        for (name, price) in prices {
            if !price.is_finite() || price < 0.0 {
                return Err(format!("invalid price {} for \"{}\"", price, name));
            }
        }
        for psu in &self.power_supplies {
            if psu.wattage == 0 {
                return Err(format!("zero wattage for power supply \"{}\"", psu.name));
            }
        }
        Ok(())
    }

    pub fn total_entries(&self) -> usize {
        self.cpus.len()
            + self.motherboards.len()
            + self.ram_modules.len()
            + self.gpus.len()
            + self.storage.len()
            + self.chassis.len()
            + self.power_supplies.len()
            + self.coolers.len()
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Catalog ({} entries):", self.total_entries())?;
        writeln!(f, "  CPUs: {}", self.cpus.len())?;
        writeln!(f, "  Motherboards: {}", self.motherboards.len())?;
        writeln!(f, "  RAM modules: {}", self.ram_modules.len())?;
        writeln!(f, "  GPUs: {}", self.gpus.len())?;
        writeln!(f, "  Storage devices: {}", self.storage.len())?;
        writeln!(f, "  Cases: {}", self.chassis.len())?;
        writeln!(f, "  Power supplies: {}", self.power_supplies.len())?;
        writeln!(f, "  Coolers: {}", self.coolers.len())?;
        Ok(())
    }
}
