#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use ironclash_core::enums::{Difficulty, VehicleClass};
    use ironclash_core::error::IronclashError;
    use ironclash_core::vehicle::{VehicleArchetype, VehicleStats};

    use crate::catalog::VehicleCatalog;
    use crate::generator::{generate_opponents, tier_window, OpponentRequest, TierWindow};

    fn custom(id: &str, tier: u32) -> VehicleArchetype {
        VehicleArchetype {
            id: id.into(),
            name: id.to_uppercase(),
            nation: "test".into(),
            tier,
            class: VehicleClass::Medium,
            stats: VehicleStats {
                max_health: 100,
                damage: 10,
                penetration: 10,
                speed: 10,
                reload_steps: 60,
            },
        }
    }

    // ---- Catalog ----

    #[test]
    fn test_standard_catalog_contents() {
        let catalog = VehicleCatalog::standard();
        let ids: Vec<&str> = catalog.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["t1_cunningham", "m2_light", "pz_1c", "ms_1", "bt_2"]);
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());

        let ms1 = catalog.archetype("ms_1").unwrap();
        assert_eq!(ms1.name, "MS-1");
        assert_eq!(ms1.nation, "ussr");
        assert_eq!(ms1.tier, 1);
        assert_eq!(ms1.stats.max_health, 110);
        assert_eq!(ms1.stats.reload_steps, 95);
    }

    #[test]
    fn test_standard_catalog_is_shared() {
        assert!(std::ptr::eq(VehicleCatalog::standard(), VehicleCatalog::standard()));
    }

    #[test]
    fn test_unknown_archetype() {
        let catalog = VehicleCatalog::standard();
        assert_eq!(
            catalog.create_instance("tiger_131").unwrap_err(),
            IronclashError::UnknownArchetype("tiger_131".into())
        );
        assert!(catalog.archetype("").is_err());
    }

    #[test]
    fn test_every_instance_matches_its_archetype() {
        let catalog = VehicleCatalog::standard();
        for archetype in catalog.iter() {
            let instance = catalog.create_instance(&archetype.id).unwrap();
            assert_eq!(instance.archetype_id, archetype.id);
            assert_eq!(instance.stats, archetype.stats);
            assert_eq!(instance.tier, archetype.tier);
        }
    }

    #[test]
    fn test_instances_are_independent() {
        let catalog = VehicleCatalog::standard();
        for archetype in catalog.iter() {
            let mut upgraded = catalog.create_instance(&archetype.id).unwrap();
            let stock = catalog.create_instance(&archetype.id).unwrap();
            upgraded.stats.damage += 50;
            upgraded.stats.reload_steps = 1;
            assert_eq!(stock.stats, archetype.stats);
            assert_eq!(catalog.archetype(&archetype.id).unwrap().stats, archetype.stats);
        }
    }

    #[test]
    fn test_by_nation_in_insertion_order_and_restartable() {
        let catalog = VehicleCatalog::standard();
        let usa = catalog.by_nation("usa");
        let first: Vec<&str> = usa.clone().map(|a| a.id.as_str()).collect();
        let second: Vec<&str> = usa.map(|a| a.id.as_str()).collect();
        assert_eq!(first, vec!["t1_cunningham", "m2_light"]);
        assert_eq!(first, second);
        assert_eq!(catalog.by_nation("france").count(), 0);
    }

    #[test]
    fn test_by_tier() {
        let catalog = VehicleCatalog::standard();
        let tier1: Vec<&str> = catalog.by_tier(1).map(|a| a.id.as_str()).collect();
        assert_eq!(tier1, vec!["t1_cunningham", "ms_1"]);
        let tier2: Vec<&str> = catalog.by_tier(2).map(|a| a.id.as_str()).collect();
        assert_eq!(tier2, vec!["m2_light", "bt_2"]);
        assert_eq!(catalog.by_tier(4).count(), 0);
    }

    #[test]
    fn test_custom_catalog_rejects_duplicates() {
        let err = VehicleCatalog::from_archetypes(vec![custom("a", 1), custom("a", 2)]).unwrap_err();
        assert_eq!(err, IronclashError::DuplicateArchetype("a".into()));
    }

    #[test]
    fn test_custom_catalog_rejects_bad_tiers() {
        assert_eq!(
            VehicleCatalog::from_archetypes(vec![custom("zero", 0)]).unwrap_err(),
            IronclashError::InvalidTier(0)
        );
        assert_eq!(
            VehicleCatalog::from_archetypes(vec![custom("eleven", 11)]).unwrap_err(),
            IronclashError::InvalidTier(11)
        );
        assert!(VehicleCatalog::from_archetypes(vec![custom("ten", 10)]).is_ok());
    }

    #[test]
    fn test_custom_catalog_may_be_empty() {
        let catalog = VehicleCatalog::from_archetypes(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    // ---- Tier windows ----

    #[test]
    fn test_tier_windows() {
        assert_eq!(tier_window(1, Difficulty::Easy), TierWindow { min: 1, max: 1 });
        assert_eq!(tier_window(3, Difficulty::Easy), TierWindow { min: 2, max: 3 });
        assert_eq!(tier_window(2, Difficulty::Medium), TierWindow { min: 2, max: 3 });
        assert_eq!(tier_window(5, Difficulty::Medium), TierWindow { min: 5, max: 5 });
        assert_eq!(tier_window(2, Difficulty::Hard), TierWindow { min: 2, max: 4 });
        assert_eq!(tier_window(5, Difficulty::Hard), TierWindow { min: 5, max: 6 });
        // Above the caps the window collapses.
        let w = tier_window(7, Difficulty::Hard);
        assert!(w.min > w.max);
    }

    #[test]
    fn test_tier_window_saturates_at_u32_max() {
        let medium = tier_window(u32::MAX, Difficulty::Medium);
        assert_eq!(medium, TierWindow { min: u32::MAX, max: 5 });
        let hard = tier_window(u32::MAX - 1, Difficulty::Hard);
        assert_eq!(hard, TierWindow { min: u32::MAX - 1, max: 6 });
        assert!(!hard.contains(6));
    }

    // ---- Request validation ----

    #[test]
    fn test_request_parse_validates() {
        let ok = OpponentRequest::parse(2, "hard", 3).unwrap();
        assert_eq!(ok.player_tier, 2);
        assert_eq!(ok.difficulty, Difficulty::Hard);
        assert_eq!(ok.count, 3);

        assert_eq!(
            OpponentRequest::parse(2, "hard", -1).unwrap_err(),
            IronclashError::InvalidOpponentCount(-1)
        );
        assert_eq!(
            OpponentRequest::parse(2, "insane", 3).unwrap_err(),
            IronclashError::UnknownDifficulty("insane".into())
        );
        assert_eq!(
            OpponentRequest::parse(0, "easy", 3).unwrap_err(),
            IronclashError::InvalidTier(0)
        );
        assert_eq!(
            OpponentRequest::parse(-4, "easy", 3).unwrap_err(),
            IronclashError::InvalidTier(-4)
        );
    }

    // ---- Generation ----

    #[test]
    fn test_generate_count_and_window() {
        let catalog = VehicleCatalog::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let request = OpponentRequest::new(1, Difficulty::Hard, 12).unwrap();
        let roster = generate_opponents(catalog, &request, &mut rng).unwrap();
        assert_eq!(roster.len(), 12);
        for vehicle in &roster {
            assert!((1..=3).contains(&vehicle.tier), "{} out of window", vehicle.archetype_id);
        }
    }

    #[test]
    fn test_generate_zero_opponents() {
        let catalog = VehicleCatalog::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let request = OpponentRequest::new(2, Difficulty::Medium, 0).unwrap();
        assert!(generate_opponents(catalog, &request, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_generate_empty_pool() {
        let catalog = VehicleCatalog::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let request = OpponentRequest::new(5, Difficulty::Easy, 3).unwrap();
        assert_eq!(
            generate_opponents(catalog, &request, &mut rng).unwrap_err(),
            IronclashError::EmptyPool {
                difficulty: Difficulty::Easy,
                min_tier: 4,
                max_tier: 5,
            }
        );
    }

    #[test]
    fn test_generate_allows_duplicates() {
        // Single-entry window: every draw is the same archetype.
        let catalog = VehicleCatalog::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let request = OpponentRequest::new(3, Difficulty::Medium, 4).unwrap();
        let roster = generate_opponents(catalog, &request, &mut rng).unwrap();
        assert!(roster.iter().all(|v| v.archetype_id == "pz_1c"));
    }

    #[test]
    fn test_generate_is_deterministic_for_a_seed() {
        let catalog = VehicleCatalog::standard();
        let request = OpponentRequest::new(1, Difficulty::Hard, 8).unwrap();
        let a = generate_opponents(catalog, &request, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        let b = generate_opponents(catalog, &request, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_draws_from_whole_pool() {
        let catalog = VehicleCatalog::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let request = OpponentRequest::new(1, Difficulty::Hard, 500).unwrap();
        let roster = generate_opponents(catalog, &request, &mut rng).unwrap();
        for archetype in catalog.iter() {
            assert!(
                roster.iter().any(|v| v.archetype_id == archetype.id),
                "{} never drawn",
                archetype.id
            );
        }
    }

    proptest! {
        #[test]
        fn prop_generated_tiers_stay_in_window(
            tier in 1u32..=10,
            difficulty in prop::sample::select(Difficulty::ALL.to_vec()),
            count in 0usize..16,
            seed in any::<u64>(),
        ) {
            let catalog = VehicleCatalog::standard();
            let request = OpponentRequest::new(tier, difficulty, count).unwrap();
            let window = tier_window(tier, difficulty);
            let has_pool = catalog.iter().any(|a| window.contains(a.tier));
            let result = generate_opponents(catalog, &request, &mut ChaCha8Rng::seed_from_u64(seed));
            match result {
                Ok(roster) => {
                    prop_assert!(has_pool);
                    prop_assert_eq!(roster.len(), count);
                    for vehicle in roster {
                        prop_assert!(window.contains(vehicle.tier));
                    }
                }
                Err(IronclashError::EmptyPool { .. }) => prop_assert!(!has_pool),
                Err(other) => prop_assert!(false, "unexpected error {other}"),
            }
        }
    }
}
