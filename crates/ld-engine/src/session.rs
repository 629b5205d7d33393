//! DrawSession — one group's draw loop, end to end

use std::time::{SystemTime, UNIX_EPOCH};

use ld_audio::{AudioSink, AudioSync};
use ld_core::{
    Entity, HistoryProvider, HistoryRecord, LdError, LdResult, RosterProvider, SettingsProvider,
};
use ld_draw::DrawEngine;
use ld_reel::{AnimationCoordinator, Clock, EmphasisParams, ReelGeometry, ReelTiming, RenderSurface};

/// Orchestrates complete draws against a set of providers
///
/// Explicit, instantiable service: roster, settings, and history come in as
/// constructor parameters, snapshots are taken per draw, and nothing is
/// shared across sessions. Winners are decided before the reveal starts;
/// the animation is playback, never a race.
pub struct DrawSession<R, S, H, A>
where
    R: RosterProvider,
    S: SettingsProvider,
    H: HistoryProvider,
    A: AudioSink,
{
    roster: R,
    settings: S,
    history: H,
    engine: DrawEngine,
    coordinator: AnimationCoordinator,
    audio: AudioSync<A>,
}

impl<R, S, H, A> DrawSession<R, S, H, A>
where
    R: RosterProvider,
    S: SettingsProvider,
    H: HistoryProvider,
    A: AudioSink,
{
    /// Create with default timing, geometry, and emphasis
    pub fn new(roster: R, settings: S, history: H, sink: A) -> Self {
        Self::with_timing(roster, settings, history, sink, ReelTiming::default())
    }

    /// Create with a specific timing profile
    pub fn with_timing(roster: R, settings: S, history: H, sink: A, timing: ReelTiming) -> Self {
        Self {
            roster,
            settings,
            history,
            engine: DrawEngine::new(),
            coordinator: AnimationCoordinator::new(
                timing,
                ReelGeometry::default(),
                EmphasisParams::default(),
            ),
            audio: AudioSync::new(sink),
        }
    }

    /// The selection engine (reseed here for reproducible draws)
    pub fn engine_mut(&mut self) -> &mut DrawEngine {
        &mut self.engine
    }

    /// The audio layer (toggle sound here)
    pub fn audio_mut(&mut self) -> &mut AudioSync<A> {
        &mut self.audio
    }

    /// The history provider
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Whether a reveal is currently in flight
    pub fn is_busy(&self) -> bool {
        self.coordinator.is_busy()
    }

    /// Run one complete draw: decide winners, play the reveal, record it
    ///
    /// Returns the winners once every slot has settled and the surface has
    /// been torn down. An empty roster is a no-op draw: empty winner list,
    /// surface untouched, nothing recorded. Calling while a previous reveal
    /// is unresolved is a caller error ([`LdError::DrawInProgress`]).
    pub fn run_draw<C, Surf>(&mut self, clock: &mut C, surface: &mut Surf) -> LdResult<Vec<Entity>>
    where
        C: Clock,
        Surf: RenderSurface,
    {
        if self.coordinator.is_busy() {
            return Err(LdError::DrawInProgress);
        }

        // Read-only snapshots for the duration of this draw
        let roster = self.roster.roster();
        let config = self.settings.draw_config();
        let history = self
            .history
            .recent(config.fairness.cooldown_window as usize);

        let outcome = self.engine.draw(&roster, &config, &history);
        if outcome.is_no_op() {
            log::debug!("no-op draw for pool {}", self.roster.pool_id());
            return Ok(Vec::new());
        }

        for winner in &outcome.winners {
            self.roster.increment_pick_count(&winner.id);
        }
        self.history.append(HistoryRecord::new(
            now_epoch_ms(),
            self.roster.pool_id(),
            self.roster.pool_label(),
            &outcome.winners,
        ));

        self.coordinator
            .run_to_completion(outcome.tracks, clock, surface, &mut self.audio)?;

        Ok(outcome.winners)
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use ld_audio::NullSink;
    use ld_core::{DrawConfig, EntityId, FairnessConfig};
    use ld_reel::{ManualClock, RecordingSurface};

    struct MemRoster {
        entities: Vec<Entity>,
    }

    impl RosterProvider for MemRoster {
        fn roster(&self) -> Vec<Entity> {
            self.entities.clone()
        }

        fn pool_id(&self) -> String {
            "g1".into()
        }

        fn pool_label(&self) -> String {
            "Group 1".into()
        }

        fn increment_pick_count(&mut self, id: &EntityId) {
            if let Some(e) = self.entities.iter_mut().find(|e| &e.id == id) {
                e.pick_count += 1;
            }
        }
    }

    struct MemSettings {
        config: DrawConfig,
    }

    impl SettingsProvider for MemSettings {
        fn draw_config(&self) -> DrawConfig {
            self.config
        }
    }

    #[derive(Default)]
    struct MemHistory {
        records: Vec<HistoryRecord>,
    }

    impl HistoryProvider for MemHistory {
        fn recent(&self, limit: usize) -> Vec<HistoryRecord> {
            self.records.iter().take(limit).cloned().collect()
        }

        fn append(&mut self, record: HistoryRecord) {
            // Most-recent-first
            self.records.insert(0, record);
        }
    }

    fn session(
        entities: Vec<Entity>,
        config: DrawConfig,
    ) -> DrawSession<MemRoster, MemSettings, MemHistory, NullSink> {
        DrawSession::with_timing(
            MemRoster { entities },
            MemSettings { config },
            MemHistory::default(),
            NullSink,
            // Keep test loops short
            ReelTiming::turbo(),
        )
    }

    fn roster(n: usize) -> Vec<Entity> {
        (0..n).map(|i| Entity::new(format!("e{i}"), format!("E{i}"))).collect()
    }

    #[test]
    fn test_full_draw_records_history_and_counts() {
        let mut session = session(roster(5), DrawConfig::new(2));
        session.engine_mut().set_seed(10);

        let mut clock = ManualClock::new(16.0);
        let mut surface = RecordingSurface::default();

        let winners = session.run_draw(&mut clock, &mut surface).unwrap();
        assert_eq!(winners.len(), 2);
        assert!(surface.finished);

        let records = session.history().recent(10);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].winners.len(), 2);

        // Winner pick counts were bumped on the provider
        for w in &winners {
            let updated = session.roster.entities.iter().find(|e| e.id == w.id).unwrap();
            assert_eq!(updated.pick_count, 1);
        }
    }

    #[test]
    fn test_empty_roster_is_no_op() {
        let mut session = session(Vec::new(), DrawConfig::new(1));
        let mut clock = ManualClock::new(16.0);
        let mut surface = RecordingSurface::default();

        let winners = session.run_draw(&mut clock, &mut surface).unwrap();
        assert!(winners.is_empty());
        assert!(surface.began_with.is_none());
        assert!(session.history().recent(10).is_empty());
    }

    #[test]
    fn test_cooldown_alternates_winners() {
        let config = DrawConfig {
            pick_count: 1,
            max_pick_count: 10,
            fairness: FairnessConfig {
                weighted: false,
                cooldown_window: 1,
            },
        };
        let mut session = session(roster(2), config);
        session.engine_mut().set_seed(3);

        let mut clock = ManualClock::new(16.0);

        let first = session
            .run_draw(&mut clock, &mut RecordingSurface::default())
            .unwrap();
        let second = session
            .run_draw(&mut clock, &mut RecordingSurface::default())
            .unwrap();

        // With two entities and a one-draw cooldown the winner must alternate
        assert_ne!(first[0].id, second[0].id);
    }

    #[test]
    fn test_consecutive_draws_allowed_after_completion() {
        let mut session = session(roster(3), DrawConfig::new(1));
        let mut clock = ManualClock::new(16.0);

        for _ in 0..3 {
            let winners = session
                .run_draw(&mut clock, &mut RecordingSurface::default())
                .unwrap();
            assert_eq!(winners.len(), 1);
        }
        assert_eq!(session.history().recent(10).len(), 3);
    }
}
