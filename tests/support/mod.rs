//! Shared test fixtures
//!
//! A realistic catalog spanning two platforms (AM4/DDR4 and LGA1700/DDR5)
//! with enough spread in prices and capacities to exercise every selector
//! branch.

use rigsmith::catalog::types::{
    Catalog, Chassis, Cooler, CoolerKind, Cpu, Gpu, Motherboard, PowerSupply, PsuFormFactor,
    RamModule, StorageDevice, StorageKind,
};

pub fn cpu(name: &str, price: f64, socket: &str, watts: f64) -> Cpu {
    Cpu {
        name: name.to_string(),
        price,
        socket: socket.to_string(),
        recommended_power_watts: Some(watts),
        integrated_graphics: None,
        tier: None,
    }
}

pub fn full_catalog() -> Catalog {
    Catalog {
        cpus: vec![
            cpu("Ryzen 5 5600G", 900.0, "AM4", 65.0),
            cpu("Ryzen 5 5600X", 1200.0, "AM4", 65.0),
            cpu("Ryzen 7 5800X", 1800.0, "AM4", 105.0),
            cpu("Core i5-13600K", 2000.0, "LGA1700", 125.0),
            cpu("Core i9-13900K", 3500.0, "LGA1700", 253.0),
        ],
        motherboards: vec![
            Motherboard {
                name: "B550 Tomahawk".to_string(),
                price: 800.0,
                cpu_socket: "AM4".to_string(),
                supported_ram_type: "DDR4".to_string(),
                form_factor: "ATX".to_string(),
            },
            Motherboard {
                name: "B550M Mortar".to_string(),
                price: 600.0,
                cpu_socket: "AM4".to_string(),
                supported_ram_type: "DDR4".to_string(),
                form_factor: "Micro-ATX".to_string(),
            },
            Motherboard {
                name: "Z790 Hero".to_string(),
                price: 1500.0,
                cpu_socket: "LGA1700".to_string(),
                supported_ram_type: "DDR5".to_string(),
                form_factor: "ATX".to_string(),
            },
        ],
        ram_modules: vec![
            RamModule {
                name: "Vengeance 16GB DDR4".to_string(),
                price: 300.0,
                ram_type: "DDR4".to_string(),
                capacity_gb: 16,
            },
            RamModule {
                name: "Vengeance 32GB DDR4".to_string(),
                price: 550.0,
                ram_type: "DDR4".to_string(),
                capacity_gb: 32,
            },
            RamModule {
                name: "Fury 32GB DDR5".to_string(),
                price: 700.0,
                ram_type: "DDR5".to_string(),
                capacity_gb: 32,
            },
            RamModule {
                name: "Dominator 64GB DDR5".to_string(),
                price: 1400.0,
                ram_type: "DDR5".to_string(),
                capacity_gb: 64,
            },
        ],
        gpus: vec![
            Gpu {
                name: "GTX 1650".to_string(),
                price: 900.0,
                vram_gb: 4,
                recommended_power_watts: Some(75.0),
            },
            Gpu {
                name: "RTX 4060".to_string(),
                price: 2000.0,
                vram_gb: 8,
                recommended_power_watts: Some(115.0),
            },
            Gpu {
                name: "RTX 4070 Ti".to_string(),
                price: 4200.0,
                vram_gb: 12,
                recommended_power_watts: Some(285.0),
            },
            Gpu {
                name: "RX 7900 XTX".to_string(),
                price: 6500.0,
                vram_gb: 24,
                recommended_power_watts: Some(355.0),
            },
            Gpu {
                name: "RTX 4090".to_string(),
                price: 11000.0,
                vram_gb: 24,
                recommended_power_watts: Some(450.0),
            },
        ],
        storage: vec![
            StorageDevice {
                name: "NV2 500GB".to_string(),
                price: 300.0,
                kind: StorageKind::NvmeSsd,
                capacity_gb: 500,
            },
            StorageDevice {
                name: "980 Pro 1TB".to_string(),
                price: 700.0,
                kind: StorageKind::NvmeSsd,
                capacity_gb: 1000,
            },
            StorageDevice {
                name: "990 Pro 2TB".to_string(),
                price: 1400.0,
                kind: StorageKind::NvmeSsd,
                capacity_gb: 2000,
            },
            StorageDevice {
                name: "870 Evo 1TB".to_string(),
                price: 450.0,
                kind: StorageKind::SataSsd,
                capacity_gb: 1000,
            },
        ],
        chassis: vec![
            Chassis {
                name: "Budget Mesh".to_string(),
                price: 250.0,
                supported_board_formats: "ATX, Micro-ATX".to_string(),
            },
            Chassis {
                name: "NZXT H5".to_string(),
                price: 450.0,
                supported_board_formats: "ATX, Micro-ATX, Mini-ITX".to_string(),
            },
            Chassis {
                name: "Lian Li O11".to_string(),
                price: 800.0,
                supported_board_formats: "ATX".to_string(),
            },
        ],
        power_supplies: vec![
            PowerSupply {
                name: "CV550".to_string(),
                price: 300.0,
                wattage: 550,
                form_factor: PsuFormFactor::Atx,
            },
            PowerSupply {
                name: "RM750".to_string(),
                price: 600.0,
                wattage: 750,
                form_factor: PsuFormFactor::Atx,
            },
            PowerSupply {
                name: "RM850x".to_string(),
                price: 850.0,
                wattage: 850,
                form_factor: PsuFormFactor::Atx,
            },
            PowerSupply {
                name: "HX1000".to_string(),
                price: 1400.0,
                wattage: 1000,
                form_factor: PsuFormFactor::Atx,
            },
            PowerSupply {
                name: "SF750".to_string(),
                price: 900.0,
                wattage: 750,
                form_factor: PsuFormFactor::Sfx,
            },
        ],
        coolers: vec![
            Cooler {
                name: "Hyper 212".to_string(),
                price: 150.0,
                supported_sockets: "AM4, AM5, LGA1700".to_string(),
                kind: CoolerKind::Air,
                radiator_mm: None,
            },
            Cooler {
                name: "AK620".to_string(),
                price: 350.0,
                supported_sockets: "AM4, AM5, LGA1700".to_string(),
                kind: CoolerKind::Air,
                radiator_mm: None,
            },
            Cooler {
                name: "Kraken 240".to_string(),
                price: 900.0,
                supported_sockets: "AM4, AM5, LGA1700".to_string(),
                kind: CoolerKind::Liquid,
                radiator_mm: None,
            },
            Cooler {
                name: "Kraken 360".to_string(),
                price: 1400.0,
                supported_sockets: "AM4, AM5, LGA1700".to_string(),
                kind: CoolerKind::Liquid,
                radiator_mm: None,
            },
        ],
    }
    .ingest()
}
