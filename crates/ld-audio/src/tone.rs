//! Tone descriptions — what to play, independent of how it gets played

use serde::{Deserialize, Serialize};

/// C5/E5/G5/C6, the settle chord
const CHORD_FREQS_HZ: [f64; 4] = [523.25, 659.25, 783.99, 1046.50];
const CHORD_DURATIONS_S: [f64; 4] = [0.4, 0.4, 0.6, 1.0];
const CHORD_STEP_S: f64 = 0.1;

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    Sine,
    Triangle,
}

/// One synthesized tone
///
/// Attack ramps gain linearly from zero, then the level decays
/// exponentially until `duration_s`. A differing `end_freq_hz` sweeps the
/// pitch exponentially over `sweep_s`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub waveform: Waveform,
    /// Start of playback relative to the batch (s)
    pub delay_s: f64,
    pub start_freq_hz: f64,
    pub end_freq_hz: f64,
    /// Pitch sweep duration (s); ignored when start and end match
    pub sweep_s: f64,
    /// Linear attack (s)
    pub attack_s: f64,
    /// Total voice duration including attack (s)
    pub duration_s: f64,
    /// Peak gain
    pub gain: f64,
}

impl Tone {
    /// The spin tick: a soft sine blip sweeping down from `start_freq_hz`
    ///
    /// Callers jitter the start frequency per crossing for texture.
    pub fn tick(start_freq_hz: f64) -> Self {
        Self {
            waveform: Waveform::Sine,
            delay_s: 0.0,
            start_freq_hz,
            end_freq_hz: 100.0,
            sweep_s: 0.03,
            attack_s: 0.0,
            duration_s: 0.05,
            gain: 0.1,
        }
    }

    /// The settle chord: four ascending triangle notes
    pub fn settle_chord() -> Vec<Self> {
        CHORD_FREQS_HZ
            .iter()
            .zip(CHORD_DURATIONS_S)
            .enumerate()
            .map(|(i, (&freq, duration_s))| Self {
                waveform: Waveform::Triangle,
                delay_s: i as f64 * CHORD_STEP_S,
                start_freq_hz: freq,
                end_freq_hz: freq,
                sweep_s: 0.0,
                attack_s: 0.05,
                duration_s,
                gain: 0.1,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_sweeps_down() {
        let t = Tone::tick(900.0);
        assert_eq!(t.waveform, Waveform::Sine);
        assert!(t.end_freq_hz < t.start_freq_hz);
        assert!(t.duration_s > t.sweep_s);
    }

    #[test]
    fn test_chord_ascends_and_staggers() {
        let chord = Tone::settle_chord();
        assert_eq!(chord.len(), 4);
        for pair in chord.windows(2) {
            assert!(pair[1].start_freq_hz > pair[0].start_freq_hz);
            assert!(pair[1].delay_s > pair[0].delay_s);
        }
        // Final note rings longest
        assert_eq!(chord[3].duration_s, 1.0);
    }
}
