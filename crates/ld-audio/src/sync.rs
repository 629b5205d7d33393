//! AudioSync — maps reel events to sound

use rand::prelude::*;

use ld_reel::{ReelEvent, ReelObserver};

use crate::sink::AudioSink;
use crate::tone::Tone;

/// Plays a tick per item crossing and the chord once everything settles
///
/// The enabled flag gates every call at the entry point; crossings are
/// additionally thinned by `tick_probability` so dense multi-slot spins
/// don't turn into noise. The tick's start frequency is jittered per call
/// for texture. All playback is best-effort through the sink.
pub struct AudioSync<S: AudioSink> {
    sink: S,
    enabled: bool,
    tick_probability: f64,
    rng: StdRng,
}

impl<S: AudioSink> AudioSync<S> {
    /// Create an enabled sync over a sink
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            enabled: true,
            tick_probability: 0.5,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Builder: chance in [0, 1] that a crossing produces a tick
    pub fn with_tick_probability(mut self, p: f64) -> Self {
        self.tick_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Master toggle
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether sound is currently enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Access the underlying sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn play_tick(&mut self) {
        if self.tick_probability < 1.0 && self.rng.random::<f64>() >= self.tick_probability {
            return;
        }
        // 800–1000 Hz start, swept down by the tone itself
        let start_freq = 800.0 + self.rng.random::<f64>() * 200.0;
        self.sink.play(&[Tone::tick(start_freq)]);
    }
}

impl<S: AudioSink> ReelObserver for AudioSync<S> {
    fn on_event(&mut self, event: &ReelEvent) {
        if !self.enabled {
            return;
        }
        match event {
            ReelEvent::Crossing { .. } => self.play_tick(),
            ReelEvent::AllSettled { .. } => self.sink.play(&Tone::settle_chord()),
            ReelEvent::SlotSettled { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::sink::NullSink;

    /// Sink that records batches instead of making sound
    #[derive(Default)]
    struct FakeSink {
        batches: Vec<Vec<Tone>>,
    }

    impl AudioSink for FakeSink {
        fn is_available(&self) -> bool {
            true
        }

        fn play(&mut self, tones: &[Tone]) {
            self.batches.push(tones.to_vec());
        }
    }

    fn crossing(index: u32) -> ReelEvent {
        ReelEvent::Crossing {
            slot: 0,
            index,
            timestamp_ms: f64::from(index) * 16.0,
        }
    }

    #[test]
    fn test_chord_on_all_settled() {
        let mut sync = AudioSync::new(FakeSink::default());
        sync.on_event(&ReelEvent::AllSettled { timestamp_ms: 3000.0 });

        assert_eq!(sync.sink().batches.len(), 1);
        assert_eq!(sync.sink().batches[0].len(), 4);
    }

    #[test]
    fn test_every_crossing_ticks_at_full_probability() {
        let mut sync = AudioSync::new(FakeSink::default()).with_tick_probability(1.0);
        for i in 1..=10 {
            sync.on_event(&crossing(i));
        }
        assert_eq!(sync.sink().batches.len(), 10);
        // Jittered start frequencies stay inside the tick band
        for batch in &sync.sink().batches {
            assert!((800.0..1000.0).contains(&batch[0].start_freq_hz));
        }
    }

    #[test]
    fn test_disabled_sync_is_silent() {
        let mut sync = AudioSync::new(FakeSink::default());
        sync.set_enabled(false);

        sync.on_event(&crossing(1));
        sync.on_event(&ReelEvent::AllSettled { timestamp_ms: 0.0 });
        assert!(sync.sink().batches.is_empty());
    }

    #[test]
    fn test_zero_probability_silences_ticks_only() {
        let mut sync = AudioSync::new(FakeSink::default()).with_tick_probability(0.0);
        for i in 1..=20 {
            sync.on_event(&crossing(i));
        }
        sync.on_event(&ReelEvent::AllSettled { timestamp_ms: 0.0 });
        assert_eq!(sync.sink().batches.len(), 1);
    }

    #[test]
    fn test_unavailable_sink_never_errors() {
        // NullSink is permanently unavailable; nothing should panic
        let mut sync = AudioSync::new(NullSink);
        sync.on_event(&crossing(3));
        sync.on_event(&ReelEvent::SlotSettled { slot: 0, timestamp_ms: 1.0 });
        sync.on_event(&ReelEvent::AllSettled { timestamp_ms: 2.0 });
    }
}
