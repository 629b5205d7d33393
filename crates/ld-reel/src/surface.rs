//! Render surface — the thin adapter the animation talks to
//!
//! The engine computes everything (offsets, emphasis, crossings) and issues
//! declarative frames; the surface only has to display them. No rendering
//! technology is assumed, and surface failures never abort a draw — the
//! coordinator logs and keeps going.

use ld_core::LdResult;

use crate::slot::SlotFrame;

/// Displays N independent scrolling item lists
pub trait RenderSurface {
    /// A draw is starting with `slot_count` lanes
    fn begin(&mut self, slot_count: usize) -> LdResult<()>;

    /// Apply one slot's frame for this tick
    fn apply(&mut self, frame: &SlotFrame) -> LdResult<()>;

    /// The reveal is over; tear the surface down
    fn finish(&mut self) -> LdResult<()>;
}

/// Surface that displays nothing, for headless runs and tests
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn begin(&mut self, _slot_count: usize) -> LdResult<()> {
        Ok(())
    }

    fn apply(&mut self, _frame: &SlotFrame) -> LdResult<()> {
        Ok(())
    }

    fn finish(&mut self) -> LdResult<()> {
        Ok(())
    }
}

/// Surface that records lifecycle calls, for tests
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub began_with: Option<usize>,
    pub frames: Vec<SlotFrame>,
    pub finished: bool,
}

impl RenderSurface for RecordingSurface {
    fn begin(&mut self, slot_count: usize) -> LdResult<()> {
        self.began_with = Some(slot_count);
        Ok(())
    }

    fn apply(&mut self, frame: &SlotFrame) -> LdResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn finish(&mut self) -> LdResult<()> {
        self.finished = true;
        Ok(())
    }
}
