//! AnimationCoordinator — shared tick loop, settle barrier, flourish

use ld_core::{LdError, LdResult};
use ld_draw::Track;

use crate::clock::Clock;
use crate::emphasis::EmphasisParams;
use crate::event::{ReelEvent, ReelObserver};
use crate::geometry::ReelGeometry;
use crate::slot::{SlotAnimator, SlotState};
use crate::surface::RenderSurface;
use crate::timing::ReelTiming;

/// Coordinator phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinatorPhase {
    /// No draw loaded
    Idle,
    /// Slots advancing toward their targets
    Spinning,
    /// All settled, waiting out the short pre-pulse delay
    SettleDelay { since_ms: f64 },
    /// Winner pulse and fade-out window
    Flourish { since_ms: f64 },
    /// Draw finished, surface torn down
    Complete,
}

/// Drives all slots from one timing loop and resolves when every slot has
/// settled
///
/// One timestamp per tick is fanned out to every slot, preserving a single
/// notion of "now" across lanes. Slots settle in stagger order; once the
/// last one settles the coordinator waits `settle_delay_ms`, emits
/// [`ReelEvent::AllSettled`], pulses the winners, and completes after the
/// flourish and fade windows.
///
/// Not resumable: starting a new run while one is in flight is a caller
/// error and returns [`LdError::DrawInProgress`].
pub struct AnimationCoordinator {
    timing: ReelTiming,
    geometry: ReelGeometry,
    emphasis: EmphasisParams,
    slots: Vec<SlotAnimator>,
    phase: CoordinatorPhase,
}

impl AnimationCoordinator {
    /// Create with explicit timing, geometry, and emphasis parameters
    pub fn new(timing: ReelTiming, geometry: ReelGeometry, emphasis: EmphasisParams) -> Self {
        Self {
            timing,
            geometry,
            emphasis,
            slots: Vec::new(),
            phase: CoordinatorPhase::Idle,
        }
    }

    /// Whether a run is in flight
    pub fn is_busy(&self) -> bool {
        !matches!(self.phase, CoordinatorPhase::Idle | CoordinatorPhase::Complete)
    }

    /// Current phase
    pub fn phase(&self) -> CoordinatorPhase {
        self.phase
    }

    /// Load tracks and arm the tick loop
    ///
    /// Slot `i` gets duration `base_spin_ms + i × stagger_ms` so the lanes
    /// settle in sequence. Fails if a previous run has not completed.
    pub fn start<S: RenderSurface>(&mut self, tracks: Vec<Track>, surface: &mut S) -> LdResult<()> {
        if self.is_busy() {
            return Err(LdError::DrawInProgress);
        }

        self.slots = tracks
            .into_iter()
            .enumerate()
            .map(|(i, track)| {
                SlotAnimator::new(i, track, self.timing.slot_duration(i), &self.geometry)
            })
            .collect();

        if let Err(e) = surface.begin(self.slots.len()) {
            log::warn!("render surface begin failed: {e}");
        }

        self.phase = CoordinatorPhase::Spinning;
        Ok(())
    }

    /// Advance the whole reveal to `now_ms`
    ///
    /// Fans the timestamp out to every slot, pushes frames to the surface,
    /// and reports crossings/settles to the observer. Returns the phase
    /// after the tick; keep ticking until [`CoordinatorPhase::Complete`].
    pub fn tick<S, O>(&mut self, now_ms: f64, surface: &mut S, observer: &mut O) -> CoordinatorPhase
    where
        S: RenderSurface,
        O: ReelObserver,
    {
        match self.phase {
            CoordinatorPhase::Idle | CoordinatorPhase::Complete => {}

            CoordinatorPhase::Spinning => {
                let mut all_settled = true;
                for slot_anim in &mut self.slots {
                    let slot = slot_anim.tick(now_ms, &self.geometry, &self.emphasis);

                    if let Err(e) = surface.apply(&slot.frame) {
                        log::warn!("render surface apply failed: {e}");
                    }
                    if let Some(index) = slot.crossing {
                        observer.on_event(&ReelEvent::Crossing {
                            slot: slot.frame.slot,
                            index,
                            timestamp_ms: now_ms,
                        });
                    }
                    if slot.settled_now {
                        observer.on_event(&ReelEvent::SlotSettled {
                            slot: slot.frame.slot,
                            timestamp_ms: now_ms,
                        });
                    }
                    all_settled &= slot_anim.state() == SlotState::Settled;
                }

                if all_settled {
                    self.phase = CoordinatorPhase::SettleDelay { since_ms: now_ms };
                }
            }

            CoordinatorPhase::SettleDelay { since_ms } => {
                if now_ms - since_ms >= self.timing.settle_delay_ms {
                    observer.on_event(&ReelEvent::AllSettled { timestamp_ms: now_ms });
                    for slot_anim in &self.slots {
                        let frame = slot_anim.flourish_frame(&self.geometry, &self.emphasis);
                        if let Err(e) = surface.apply(&frame) {
                            log::warn!("render surface apply failed: {e}");
                        }
                    }
                    self.phase = CoordinatorPhase::Flourish { since_ms: now_ms };
                }
            }

            CoordinatorPhase::Flourish { since_ms } => {
                if now_ms - since_ms >= self.timing.flourish_ms + self.timing.fade_ms {
                    if let Err(e) = surface.finish() {
                        log::warn!("render surface finish failed: {e}");
                    }
                    self.slots.clear();
                    self.phase = CoordinatorPhase::Complete;
                }
            }
        }

        self.phase
    }

    /// Start and drive the reveal to completion over an injected clock
    ///
    /// The completion barrier callers suspend on: returns only once every
    /// slot has settled and the flourish has run.
    pub fn run_to_completion<C, S, O>(
        &mut self,
        tracks: Vec<Track>,
        clock: &mut C,
        surface: &mut S,
        observer: &mut O,
    ) -> LdResult<()>
    where
        C: Clock,
        S: RenderSurface,
        O: ReelObserver,
    {
        if tracks.is_empty() {
            return Ok(());
        }
        self.start(tracks, surface)?;

        loop {
            let phase = self.tick(clock.now_ms(), surface, observer);
            if phase == CoordinatorPhase::Complete {
                return Ok(());
            }
            clock.tick();
        }
    }
}
