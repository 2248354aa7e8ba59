//! Platform kit generation
//!
//! A platform kit is a compatible (CPU, motherboard, RAM) triple treated as
//! one atomic unit during search. Generation filters CPUs by price and
//! usage fit, joins motherboards by socket and RAM by memory type through
//! hash indexes instead of a nested scan, caps RAM capacity by budget tier,
//! and orders the surviving kits cheapest-first for economic builds and
//! most-expensive-first otherwise so the search spends the budget it has.

use crate::catalog::types::{Cpu, Motherboard, RamModule};
use crate::engine::request::{BudgetTier, BuildRequest, Usage};
use std::collections::HashMap;
use tracing::debug;

/// Share of the platform sub-budget a single CPU may consume.
const CPU_BUDGET_SHARE: f64 = 0.6;

/// A compatible (CPU, motherboard, RAM) triple. Transient: created per
/// request, consumed by the search loop, never persisted.
#[derive(Debug, Clone)]
pub struct PlatformKit<'a> {
    pub cpu: &'a Cpu,
    pub motherboard: &'a Motherboard,
    pub ram: &'a RamModule,
    pub total_cost: f64,
}

impl<'a> PlatformKit<'a> {
    fn new(cpu: &'a Cpu, motherboard: &'a Motherboard, ram: &'a RamModule) -> Self {
        Self {
            cpu,
            motherboard,
            ram,
            total_cost: cpu.price + motherboard.price + ram.price,
        }
    }
}

/// Usage-fit predicate for CPUs. Best-effort: it enforces the three rules
/// that have one (heavy gaming avoids integrated graphics, engineering and
/// creative work need a discrete-capable part) and fails open for every
/// other usage/detail combination.
pub fn cpu_fits_usage(cpu: &Cpu, request: &BuildRequest) -> bool {
    match request.usage {
        Usage::Gaming => request.light_detail() || !cpu.has_integrated_graphics(),
        Usage::Studies => !request.engineering_detail() || cpu.discrete_capable(),
        Usage::Work => !request.creative_detail() || cpu.discrete_capable(),
        Usage::Other => true,
    }
}

/// Filters the CPU catalog down to parts that fit the platform budget and
/// the usage profile, most expensive first.
pub fn qualifying_cpus<'a>(
    cpus: &'a [Cpu],
    platform_budget: f64,
    request: &BuildRequest,
) -> Vec<&'a Cpu> {
    let mut valid: Vec<&Cpu> = cpus
        .iter()
        .filter(|cpu| cpu.price <= platform_budget * CPU_BUDGET_SHARE)
        .filter(|cpu| cpu_fits_usage(cpu, request))
        .collect();
    valid.sort_by(|a, b| b.price.total_cmp(&a.price));

    debug!(
        candidates = valid.len(),
        budget = platform_budget,
        "CPUs qualifying for platform budget"
    );
    valid
}

/// Enumerates all compatible platform kits within the platform budget.
///
/// Motherboards are indexed by CPU socket and RAM modules by memory type
/// (both case-insensitive exact matches), so enumeration touches only
/// matching rows. Kits whose RAM exceeds the tier's capacity cap are
/// dropped. The result is ordered ascending by cost for the economic tier
/// and descending otherwise.
pub fn generate_kits<'a>(
    cpus: &[&'a Cpu],
    motherboards: &'a [Motherboard],
    ram_modules: &'a [RamModule],
    platform_budget: f64,
    tier: BudgetTier,
) -> Vec<PlatformKit<'a>> {
    let mut boards_by_socket: HashMap<String, Vec<&Motherboard>> = HashMap::new();
    for board in motherboards {
        boards_by_socket
            .entry(board.cpu_socket.to_lowercase())
            .or_default()
            .push(board);
    }

    let mut ram_by_type: HashMap<String, Vec<&RamModule>> = HashMap::new();
    for ram in ram_modules {
        ram_by_type
            .entry(ram.ram_type.to_lowercase())
            .or_default()
            .push(ram);
    }

    let ram_cap = tier.ram_capacity_cap();
    let mut kits = Vec::new();

    for cpu in cpus {
        let Some(boards) = boards_by_socket.get(&cpu.socket.to_lowercase()) else {
            continue;
        };
        for board in boards {
            let Some(rams) = ram_by_type.get(&board.supported_ram_type.to_lowercase()) else {
                continue;
            };
            for ram in rams {
                if ram_cap.is_some_and(|cap| ram.capacity_gb > cap) {
                    continue;
                }
                let kit = PlatformKit::new(cpu, board, ram);
                if kit.total_cost <= platform_budget {
                    kits.push(kit);
                }
            }
        }
    }

    // Economic builds hunt for value; every other tier spends down from the
    // top so the search reaches the acceptance threshold sooner.
    if tier == BudgetTier::Economic {
        kits.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));
    } else {
        kits.sort_by(|a, b| b.total_cost.total_cmp(&a.total_cost));
    }

    debug!(kits = kits.len(), tier = %tier, "Platform kits generated");
    kits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::Catalog;

    fn cpu(name: &str, price: f64, socket: &str) -> Cpu {
        Cpu {
            name: name.to_string(),
            price,
            socket: socket.to_string(),
            recommended_power_watts: None,
            integrated_graphics: None,
            tier: None,
        }
    }

    fn board(name: &str, price: f64, socket: &str, ram_type: &str) -> Motherboard {
        Motherboard {
            name: name.to_string(),
            price,
            cpu_socket: socket.to_string(),
            supported_ram_type: ram_type.to_string(),
            form_factor: "ATX".to_string(),
        }
    }

    fn ram(name: &str, price: f64, ram_type: &str, capacity_gb: u32) -> RamModule {
        RamModule {
            name: name.to_string(),
            price,
            ram_type: ram_type.to_string(),
            capacity_gb,
        }
    }

    #[test]
    fn test_cpu_price_cap_is_sixty_percent() {
        let cpus = vec![cpu("Expensive", 1300.0, "AM4"), cpu("Cheap", 1100.0, "AM4")];
        let request = BuildRequest::from_raw("other", "", "intermediate");
        let valid = qualifying_cpus(&cpus, 2000.0, &request);
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].name, "Cheap");
    }

    #[test]
    fn test_qualifying_cpus_sorted_descending() {
        let cpus = vec![
            cpu("Mid", 800.0, "AM4"),
            cpu("Top", 1000.0, "AM4"),
            cpu("Low", 500.0, "AM4"),
        ];
        let request = BuildRequest::from_raw("other", "", "intermediate");
        let valid = qualifying_cpus(&cpus, 2000.0, &request);
        let names: Vec<_> = valid.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Top", "Mid", "Low"]);
    }

    #[test]
    fn test_usage_fit_heavy_gaming_excludes_igpu() {
        let apu = cpu("Ryzen 5 5600G", 900.0, "AM4");
        let discrete = cpu("Ryzen 5 5600X", 1000.0, "AM4");
        let heavy = BuildRequest::from_raw("gaming", "heavy games", "high");
        assert!(!cpu_fits_usage(&apu, &heavy));
        assert!(cpu_fits_usage(&discrete, &heavy));

        let light = BuildRequest::from_raw("gaming", "light games", "economic");
        assert!(cpu_fits_usage(&apu, &light));
    }

    #[test]
    fn test_usage_fit_engineering_needs_powerful_part() {
        let apu = cpu("Ryzen 5 5600G", 900.0, "AM4");
        let strong_apu = cpu("Ryzen 7 5700G", 1500.0, "AM4");
        let req = BuildRequest::from_raw("studies", "engineering", "high");
        assert!(!cpu_fits_usage(&apu, &req));
        assert!(cpu_fits_usage(&strong_apu, &req));

        let generic = BuildRequest::from_raw("studies", "literature", "high");
        assert!(cpu_fits_usage(&apu, &generic));
    }

    #[test]
    fn test_usage_fit_fails_open_for_generic_use() {
        let apu = cpu("Ryzen 5 5600G", 900.0, "AM4");
        let req = BuildRequest::from_raw("something else", "unmatched detail", "high");
        assert!(cpu_fits_usage(&apu, &req));
    }

    #[test]
    fn test_kit_join_matches_socket_and_ram_type() {
        let cpus = vec![cpu("Ryzen 5 5600X", 1000.0, "AM4")];
        let boards = vec![
            board("B550", 700.0, "AM4", "DDR4"),
            board("Z690", 900.0, "LGA1700", "DDR5"),
        ];
        let rams = vec![
            ram("Vengeance 16GB", 300.0, "DDR4", 16),
            ram("Fury DDR5", 500.0, "DDR5", 16),
        ];

        let refs: Vec<&Cpu> = cpus.iter().collect();
        let kits = generate_kits(&refs, &boards, &rams, 3000.0, BudgetTier::Intermediate);
        assert_eq!(kits.len(), 1);
        assert_eq!(kits[0].motherboard.name, "B550");
        assert_eq!(kits[0].ram.name, "Vengeance 16GB");
        assert_eq!(kits[0].total_cost, 2000.0);
    }

    #[test]
    fn test_socket_match_is_case_insensitive() {
        let cpus = vec![cpu("Ryzen 5 5600X", 1000.0, "am4")];
        let boards = vec![board("B550", 700.0, "AM4", "ddr4")];
        let rams = vec![ram("Vengeance", 300.0, "DDR4", 16)];

        let refs: Vec<&Cpu> = cpus.iter().collect();
        let kits = generate_kits(&refs, &boards, &rams, 3000.0, BudgetTier::Intermediate);
        assert_eq!(kits.len(), 1);
    }

    #[test]
    fn test_ram_capacity_cap_per_tier() {
        let cpus = vec![cpu("Ryzen 5 5600X", 1000.0, "AM4")];
        let boards = vec![board("B550", 700.0, "AM4", "DDR4")];
        let rams = vec![
            ram("16GB", 300.0, "DDR4", 16),
            ram("32GB", 500.0, "DDR4", 32),
        ];
        let refs: Vec<&Cpu> = cpus.iter().collect();

        let economic = generate_kits(&refs, &boards, &rams, 4000.0, BudgetTier::Economic);
        assert_eq!(economic.len(), 1);
        assert_eq!(economic[0].ram.capacity_gb, 16);

        let intermediate = generate_kits(&refs, &boards, &rams, 4000.0, BudgetTier::Intermediate);
        assert_eq!(intermediate.len(), 2);
    }

    #[test]
    fn test_extreme_tier_is_unrestricted() {
        let cpus = vec![cpu("Ryzen 9 7950X", 1000.0, "AM5")];
        let boards = vec![board("X670E", 800.0, "AM5", "DDR5")];
        let rams = vec![ram("128GB", 1500.0, "DDR5", 128)];
        let refs: Vec<&Cpu> = cpus.iter().collect();

        let kits = generate_kits(&refs, &boards, &rams, 10000.0, BudgetTier::Extreme);
        assert_eq!(kits.len(), 1);
    }

    #[test]
    fn test_kit_ordering_by_tier() {
        let cpus = vec![cpu("A", 500.0, "AM4"), cpu("B", 900.0, "AM4")];
        let boards = vec![board("B550", 500.0, "AM4", "DDR4")];
        let rams = vec![ram("16GB", 200.0, "DDR4", 16)];
        let refs: Vec<&Cpu> = cpus.iter().collect();

        let economic = generate_kits(&refs, &boards, &rams, 4000.0, BudgetTier::Economic);
        assert!(economic[0].total_cost < economic[1].total_cost);

        let high = generate_kits(&refs, &boards, &rams, 4000.0, BudgetTier::High);
        assert!(high[0].total_cost > high[1].total_cost);
    }

    #[test]
    fn test_over_budget_kits_are_dropped() {
        let cpus = vec![cpu("Ryzen 5 5600X", 1000.0, "AM4")];
        let boards = vec![board("B550", 700.0, "AM4", "DDR4")];
        let rams = vec![ram("Vengeance", 300.0, "DDR4", 16)];
        let refs: Vec<&Cpu> = cpus.iter().collect();

        let kits = generate_kits(&refs, &boards, &rams, 1500.0, BudgetTier::Intermediate);
        assert!(kits.is_empty());
    }

    #[test]
    fn test_deterministic_given_same_catalog() {
        let catalog = Catalog {
            cpus: vec![cpu("A", 500.0, "AM4"), cpu("B", 500.0, "AM4")],
            motherboards: vec![
                board("M1", 400.0, "AM4", "DDR4"),
                board("M2", 400.0, "AM4", "DDR4"),
            ],
            ram_modules: vec![ram("R1", 200.0, "DDR4", 16), ram("R2", 200.0, "DDR4", 16)],
            ..Default::default()
        };
        let request = BuildRequest::from_raw("other", "", "high");

        let run = || {
            let valid = qualifying_cpus(&catalog.cpus, 4000.0, &request);
            generate_kits(
                &valid,
                &catalog.motherboards,
                &catalog.ram_modules,
                4000.0,
                BudgetTier::High,
            )
            .iter()
            .map(|k| {
                format!(
                    "{}/{}/{}",
                    k.cpu.name, k.motherboard.name, k.ram.name
                )
            })
            .collect::<Vec<_>>()
        };

        assert_eq!(run(), run());
    }
}
