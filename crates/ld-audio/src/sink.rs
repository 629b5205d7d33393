//! Audio sinks — the capability that may or may not be there
//!
//! [`AudioSink`] models an output that can render [`Tone`] batches.
//! Availability is queryable; playing through an unavailable sink is a
//! no-op, not an error.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use cpal::SampleFormat;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;

use crate::error::{AudioError, AudioResult};
use crate::tone::{Tone, Waveform};

/// Capability to render tone batches
pub trait AudioSink {
    /// Whether sound can currently be produced
    fn is_available(&self) -> bool;

    /// Render a batch of tones, best-effort
    fn play(&mut self, tones: &[Tone]);
}

/// Sink that produces no sound
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn is_available(&self) -> bool {
        false
    }

    fn play(&mut self, _tones: &[Tone]) {}
}

enum SinkCommand {
    Play(Vec<Tone>),
    Shutdown,
}

/// Synthesizes tones through the default cpal output device
///
/// A dedicated thread owns the stream and receives tone batches over a
/// channel; the stream callback additively mixes the live voices. Any
/// failure (no device, unsupported format, dead stream) downgrades the
/// sink to unavailable with a warning — it never surfaces to the caller.
pub struct CpalSink {
    tx: Sender<SinkCommand>,
    available: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl CpalSink {
    /// Open the default output device
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        let available = Arc::new(AtomicBool::new(true));

        let thread_flag = Arc::clone(&available);
        let handle = std::thread::Builder::new()
            .name("ld-audio-synth".into())
            .spawn(move || {
                if let Err(e) = run_synth(rx) {
                    log::warn!("audio sink unavailable: {e}");
                    thread_flag.store(false, Ordering::Release);
                }
            })
            .ok();

        if handle.is_none() {
            available.store(false, Ordering::Release);
        }

        Self {
            tx,
            available,
            handle,
        }
    }
}

impl Default for CpalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSink for CpalSink {
    fn is_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }

    fn play(&mut self, tones: &[Tone]) {
        if tones.is_empty() || !self.is_available() {
            return;
        }
        if self.tx.send(SinkCommand::Play(tones.to_vec())).is_err() {
            self.available.store(false, Ordering::Release);
        }
    }
}

impl Drop for CpalSink {
    fn drop(&mut self) {
        let _ = self.tx.send(SinkCommand::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Synth thread body: owns the stream, feeds voices from the channel
fn run_synth(rx: Receiver<SinkCommand>) -> AudioResult<()> {
    let host = cpal::default_host();
    let device = host.default_output_device().ok_or(AudioError::NoDevice)?;
    let supported = device
        .default_output_config()
        .map_err(|e| AudioError::StreamError(e.to_string()))?;

    let sample_format = supported.sample_format();
    if sample_format != SampleFormat::F32 {
        return Err(AudioError::UnsupportedFormat(format!("{sample_format:?}")));
    }

    let config: cpal::StreamConfig = supported.into();
    let sample_rate = f64::from(config.sample_rate);
    let channels = config.channels as usize;

    let voices: Arc<Mutex<Vec<Voice>>> = Arc::new(Mutex::new(Vec::new()));
    let callback_voices = Arc::clone(&voices);

    let stream = device
        .build_output_stream(
            &config,
            move |data: &mut [f32], _| {
                let mut voices = callback_voices.lock();
                for frame in data.chunks_mut(channels) {
                    let mut mix = 0.0;
                    voices.retain_mut(|v| match v.next_sample() {
                        Some(s) => {
                            mix += s;
                            true
                        }
                        None => false,
                    });
                    let sample = mix.clamp(-1.0, 1.0) as f32;
                    for out in frame.iter_mut() {
                        *out = sample;
                    }
                }
            },
            |e| log::warn!("audio stream error: {e}"),
            None,
        )
        .map_err(|e| AudioError::StreamError(e.to_string()))?;

    stream
        .play()
        .map_err(|e| AudioError::StreamError(e.to_string()))?;

    loop {
        match rx.recv() {
            Ok(SinkCommand::Play(tones)) => {
                let mut voices = voices.lock();
                for tone in tones {
                    voices.push(Voice::new(tone, sample_rate));
                }
            }
            Ok(SinkCommand::Shutdown) | Err(_) => break,
        }
    }

    Ok(())
}

/// One live oscillator voice
struct Voice {
    tone: Tone,
    sample_rate: f64,
    /// Seconds since the batch was queued
    t: f64,
    /// Oscillator phase in [0, 1)
    phase: f64,
}

impl Voice {
    fn new(tone: Tone, sample_rate: f64) -> Self {
        Self {
            tone,
            sample_rate,
            t: 0.0,
            phase: 0.0,
        }
    }

    /// Next mono sample, or `None` once the voice has run out
    fn next_sample(&mut self) -> Option<f64> {
        let dt = 1.0 / self.sample_rate;
        let t = self.t;
        self.t += dt;

        if t < self.tone.delay_s {
            return Some(0.0);
        }
        let local = t - self.tone.delay_s;
        if local >= self.tone.duration_s {
            return None;
        }

        let freq = self.frequency_at(local);
        self.phase = (self.phase + freq * dt).fract();

        let raw = match self.tone.waveform {
            Waveform::Sine => (self.phase * std::f64::consts::TAU).sin(),
            Waveform::Triangle => 4.0 * (self.phase - 0.5).abs() - 1.0,
        };

        Some(raw * self.envelope_at(local))
    }

    fn frequency_at(&self, local: f64) -> f64 {
        let tone = &self.tone;
        if tone.sweep_s <= 0.0 || tone.start_freq_hz == tone.end_freq_hz {
            return tone.start_freq_hz;
        }
        let x = (local / tone.sweep_s).min(1.0);
        tone.start_freq_hz * (tone.end_freq_hz / tone.start_freq_hz).powf(x)
    }

    fn envelope_at(&self, local: f64) -> f64 {
        let tone = &self.tone;
        if local < tone.attack_s {
            return tone.gain * (local / tone.attack_s);
        }
        let release = (tone.duration_s - tone.attack_s).max(f64::EPSILON);
        let x = ((local - tone.attack_s) / release).clamp(0.0, 1.0);
        // Exponential decay down to -60 dB at the tail
        tone.gain * 0.001f64.powf(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_runs_out() {
        let mut voice = Voice::new(Tone::tick(900.0), 48_000.0);
        let mut produced = 0usize;
        while voice.next_sample().is_some() {
            produced += 1;
        }
        // 50 ms at 48 kHz
        assert_eq!(produced, 2400);
    }

    #[test]
    fn test_voice_respects_delay() {
        let chord = Tone::settle_chord();
        let mut voice = Voice::new(chord[3], 1000.0);
        // First 300 ms are silent padding
        for _ in 0..300 {
            assert_eq!(voice.next_sample(), Some(0.0));
        }
        let mut heard = false;
        while let Some(s) = voice.next_sample() {
            if s.abs() > 0.0 {
                heard = true;
            }
        }
        assert!(heard);
    }

    #[test]
    fn test_envelope_bounded_by_gain() {
        let mut voice = Voice::new(Tone::tick(950.0), 48_000.0);
        while let Some(s) = voice.next_sample() {
            assert!(s.abs() <= 0.1 + 1e-9);
        }
    }

    #[test]
    fn test_null_sink_is_never_available() {
        let mut sink = NullSink;
        assert!(!sink.is_available());
        sink.play(&Tone::settle_chord());
    }
}
