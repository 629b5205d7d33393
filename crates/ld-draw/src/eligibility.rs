//! Eligibility filtering — status and cooldown rules with a relaxation ladder

use ld_core::{Entity, FairnessConfig, HistoryRecord, recently_picked_ids};

/// Narrow the roster to the pool participating in one draw
///
/// Two filtering stages:
/// 1. keep only entities with active status,
/// 2. if a cooldown window is configured, drop entities that appear in the
///    most recent `cooldown_window` history records.
///
/// A thin pool never errors. If fewer than `requested` entities survive,
/// constraints are relaxed on a strict ladder, evaluated once per draw:
/// status+cooldown → status-only → full roster.
///
/// Pure function of its inputs; `history` must be ordered most-recent-first.
pub fn filter_eligible(
    roster: &[Entity],
    fairness: &FairnessConfig,
    history: &[HistoryRecord],
    requested: u32,
) -> Vec<Entity> {
    let active: Vec<Entity> = roster
        .iter()
        .filter(|e| e.status.is_active())
        .cloned()
        .collect();

    let mut pool = active.clone();

    if fairness.cooldown_window > 0 && !history.is_empty() {
        let cooling = recently_picked_ids(history, fairness.cooldown_window);
        pool.retain(|e| !cooling.contains(&e.id));
    }

    if (pool.len() as u32) < requested {
        log::debug!(
            "eligible pool {} below requested {}, dropping cooldown constraint",
            pool.len(),
            requested
        );
        pool = active;
    }

    if (pool.len() as u32) < requested {
        log::debug!(
            "active pool {} still below requested {}, using full roster",
            pool.len(),
            requested
        );
        pool = roster.to_vec();
    }

    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use ld_core::{EntityId, EntityStatus, WinnerRef};

    fn entity(id: &str) -> Entity {
        Entity::new(id, id.to_uppercase())
    }

    fn record(ids: &[&str]) -> HistoryRecord {
        HistoryRecord {
            timestamp_ms: 0,
            pool_id: "g".into(),
            pool_label: "G".into(),
            winners: ids
                .iter()
                .map(|id| WinnerRef {
                    id: EntityId::from(*id),
                    name: id.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_inactive_entities_excluded() {
        let roster = vec![
            entity("a"),
            entity("b").with_status(EntityStatus::Inactive),
        ];
        let pool = filter_eligible(&roster, &FairnessConfig::default(), &[], 1);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].id.as_str(), "a");
    }

    #[test]
    fn test_cooldown_excludes_recent_winners() {
        let roster = vec![entity("a"), entity("b"), entity("c")];
        let history = vec![record(&["a"]), record(&["b"]), record(&["c"])];
        let fairness = FairnessConfig {
            weighted: false,
            cooldown_window: 2,
        };

        // Window covers the two most recent records only
        let pool = filter_eligible(&roster, &fairness, &history, 1);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].id.as_str(), "c");
    }

    #[test]
    fn test_ladder_drops_cooldown_when_pool_too_thin() {
        // A and B both cooling down, pool after stage 2 is empty → ladder
        // falls back to the stage-1 (status-only) pool.
        let roster = vec![entity("a"), entity("b")];
        let history = vec![record(&["a", "b"]), record(&["a"])];
        let fairness = FairnessConfig {
            weighted: false,
            cooldown_window: 2,
        };

        let pool = filter_eligible(&roster, &fairness, &history, 1);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_ladder_falls_back_to_full_roster() {
        let roster = vec![
            entity("a").with_status(EntityStatus::Inactive),
            entity("b").with_status(EntityStatus::Inactive),
        ];
        let pool = filter_eligible(&roster, &FairnessConfig::default(), &[], 1);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_empty_roster_yields_empty_pool() {
        let pool = filter_eligible(&[], &FairnessConfig::default(), &[], 3);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_cooldown_matches_zero_window_when_relaxed() {
        // Property: when exclusion would drop below the requested count the
        // result equals filtering with cooldown 0.
        let roster = vec![entity("a"), entity("b")];
        let history = vec![record(&["a", "b"])];
        let with_cooldown = FairnessConfig {
            weighted: false,
            cooldown_window: 1,
        };
        let without = FairnessConfig::default();

        let relaxed = filter_eligible(&roster, &with_cooldown, &history, 1);
        let baseline = filter_eligible(&roster, &without, &history, 1);
        assert_eq!(relaxed, baseline);
    }
}
