#[cfg(test)]
mod tests {
    use ironclash_catalog::VehicleCatalog;
    use ironclash_core::enums::{OutcomeKind, VehicleClass};
    use ironclash_core::error::IronclashError;
    use ironclash_core::outcome::Outcome;
    use ironclash_core::vehicle::{VehicleArchetype, VehicleStats};

    use crate::progression::{PlayerProgression, ProgressionStore};
    use crate::rewards::{reward_for, RewardDelta};

    // ---- Rewards ----

    #[test]
    fn reward_mirrors_outcome() {
        let delta = reward_for(&Outcome::victory(120));
        assert_eq!(
            delta,
            RewardDelta {
                experience: 300,
                credits: 500,
            }
        );
        assert_eq!(
            reward_for(&Outcome::defeat(900)),
            RewardDelta {
                experience: 50,
                credits: 100,
            }
        );
        assert_eq!(
            reward_for(&Outcome::timeout(1801)),
            RewardDelta {
                experience: 100,
                credits: 200,
            }
        );
    }

    #[test]
    fn reward_apply_is_additive_and_saturates() {
        let delta = RewardDelta {
            experience: 10,
            credits: 20,
        };
        let mut experience = 5;
        let mut credits = u32::MAX - 5;
        delta.apply(&mut experience, &mut credits);
        assert_eq!(experience, 15);
        assert_eq!(credits, u32::MAX);
    }

    // ---- Progression ----

    #[test]
    fn new_player_defaults() {
        let player = PlayerProgression::default();
        assert_eq!(player.name, "Commander");
        assert_eq!(player.experience, 0);
        assert_eq!(player.credits, 1000);
        let ids: Vec<&str> = player.garage().iter().map(|slot| slot.id.as_str()).collect();
        assert_eq!(ids, ["t1_cunningham", "ms_1"]);
        assert_eq!(player.selected_id(), "t1_cunningham");
        assert_eq!(player.current_tier(), 1);
    }

    #[test]
    fn starter_tiers_match_standard_catalog() {
        let catalog = VehicleCatalog::standard();
        for slot in PlayerProgression::default().garage() {
            assert_eq!(slot.tier, catalog.archetype(&slot.id).unwrap().tier);
        }
    }

    #[test]
    fn custom_catalog_vehicle_reports_its_tier() {
        let catalog = VehicleCatalog::from_archetypes(vec![VehicleArchetype {
            id: "kv_1".into(),
            name: "KV-1".into(),
            nation: "ussr".into(),
            tier: 5,
            class: VehicleClass::Heavy,
            stats: VehicleStats {
                max_health: 640,
                damage: 110,
                penetration: 86,
                speed: 34,
                reload_steps: 240,
            },
        }])
        .unwrap();

        let mut player = PlayerProgression::default();
        player.unlock(&catalog, "kv_1").unwrap();
        player.select_vehicle("kv_1").unwrap();
        assert_eq!(player.current_tier(), 5);
        assert_eq!(player.selected_vehicle(&catalog).unwrap().archetype_id, "kv_1");

        // The standard catalog does not know it, so the tier is not looked up there.
        assert!(VehicleCatalog::standard().archetype("kv_1").is_err());
    }

    #[test]
    fn apply_reward_accumulates() {
        let mut player = PlayerProgression::default();
        player.apply_reward(&Outcome::victory(100));
        player.apply_reward(&Outcome::defeat(50));
        assert_eq!(player.experience, 350);
        assert_eq!(player.credits, 1600);
    }

    #[test]
    fn select_vehicle_requires_garage() {
        let mut player = PlayerProgression::default();
        player.select_vehicle("ms_1").unwrap();
        assert_eq!(player.selected_id(), "ms_1");

        // In the catalog but still locked.
        let err = player.select_vehicle("pz_1c").unwrap_err();
        assert_eq!(err, IronclashError::UnknownArchetype("pz_1c".into()));
        assert_eq!(player.selected_id(), "ms_1");
    }

    #[test]
    fn unlock_then_select_raises_tier() {
        let catalog = VehicleCatalog::standard();
        let mut player = PlayerProgression::default();
        player.unlock(catalog, "pz_1c").unwrap();
        player.unlock(catalog, "pz_1c").unwrap();
        assert_eq!(player.garage().len(), 3);
        assert!(player.owns("pz_1c"));

        player.select_vehicle("pz_1c").unwrap();
        assert_eq!(player.current_tier(), 3);

        let vehicle = player.selected_vehicle(catalog).unwrap();
        assert_eq!(vehicle.archetype_id, "pz_1c");
        assert_eq!(vehicle.stats.max_health, 180);
    }

    #[test]
    fn unlock_unknown_vehicle_fails() {
        let mut player = PlayerProgression::default();
        let err = player
            .unlock(VehicleCatalog::standard(), "maus")
            .unwrap_err();
        assert_eq!(err, IronclashError::UnknownArchetype("maus".into()));
        assert_eq!(player.garage().len(), 2);
    }

    #[test]
    fn progression_survives_json() {
        let mut player = PlayerProgression::default();
        player.apply_reward(&Outcome {
            kind: OutcomeKind::Timeout,
            victory: false,
            experience: 100,
            credits: 200,
            step: 1801,
        });
        player.select_vehicle("ms_1").unwrap();

        let json = serde_json::to_string(&player).unwrap();
        let restored: PlayerProgression = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, player);
    }
}
