use std::collections::BTreeMap;

use crate::buffer::SampleBuffer;
use crate::config::AudioConfig;
use crate::error::{SignalError, SignalResult};
use crate::generator::Generator;
use crate::timeline::TimeLine;

/*
Keyboard Tone Bank
==================

The keyboard pre-bakes one buffer per named tone so that key presses only
layer and scale existing buffers instead of re-running a generator. The
lifecycle:

  1. Construction loads the tone scale: a frequency table covering levels
     1..=6 of the twelve-note octave, three sub-level seed tones, and the
     fixed top note C8.
  2. apply_generator() bakes one tone_duration-long buffer per frequency
     entry through the supplied generator and keeps the generator for
     later refreshes.
  3. synth() fetches baked buffers by name, scales each layer by
     strength * volume, sums the layers, and optionally truncates.

Baked buffers persist until the generator changes; applying a new
generator (or refresh()) replaces the whole bank at once, so the buffer
table always reflects exactly one generator. Buffer-table keys are always
a subset of frequency-table keys.

Tone naming follows the scale table: note letter, level digit, then the
sharp mark - "C4", "C4#", "A0#". Level frequencies stack harmonically
(base * level), so each level is an overtone row rather than an equal-
tempered octave; the table is what instruments were voiced against and is
kept verbatim.
*/

/// Base frequencies in Hz for the twelve-note octave row, C through B.
const TONE_SCALE: [f32; 12] = [
    32.7032, 34.6478, 36.7081, 38.8909, 41.2034, 43.6535, 46.2493, 48.9994, 51.9131, 55.0,
    58.2705, 61.7354,
];

/// Note stems in scale order; '#' marks go after the level digit.
const OCTAVE_NOTES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Physical key row bound to two octaves of tones, low to high.
const KEY_ROW: &str = "yxcvbnmasdfghjklqwertzuiop";

/// Highest level the scale table covers.
const TOP_LEVEL: u32 = 6;

fn tone_name(note: &str, level: u32) -> String {
    match note.strip_suffix('#') {
        Some(stem) => format!("{stem}{level}#"),
        None => format!("{note}{level}"),
    }
}

/// Per-call synthesis settings.
///
/// `volume` overrides the keyboard's stored volume for this call only;
/// `duration` truncates the result to that many seconds.
#[derive(Debug, Clone, Copy)]
pub struct SynthOptions {
    pub strength: f32,
    pub volume: Option<f32>,
    pub duration: Option<f32>,
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            strength: 0.5,
            volume: None,
            duration: None,
        }
    }
}

/// A virtual keyboard instrument over pre-baked tone buffers.
pub struct Keyboard {
    config: AudioConfig,
    generator: Option<Box<dyn Generator>>,
    tone_duration: f32,
    amplification: f32,
    volume: f32,
    tone_frequencies: BTreeMap<String, f32>,
    tone_buffers: BTreeMap<String, SampleBuffer>,
}

impl Keyboard {
    /// Create a keyboard with its tone scale loaded and no generator.
    pub fn new(config: AudioConfig) -> Self {
        let mut keyboard = Self {
            config,
            generator: None,
            tone_duration: 5.0,
            amplification: 1.0,
            volume: 1.0,
            tone_frequencies: BTreeMap::new(),
            tone_buffers: BTreeMap::new(),
        };
        keyboard.load_key_scale();
        keyboard
    }

    /// Populate the frequency table: seed tones, levels 1..=6, top note.
    fn load_key_scale(&mut self) {
        self.tone_frequencies.insert("A0".into(), 27.5);
        self.tone_frequencies.insert("A0#".into(), 29.1352);
        self.tone_frequencies.insert("B0".into(), 30.8677);

        for level in 1..=TOP_LEVEL {
            for (i, note) in OCTAVE_NOTES.iter().enumerate() {
                self.tone_frequencies
                    .insert(tone_name(note, level), TONE_SCALE[i] * level as f32);
            }
        }

        self.tone_frequencies.insert("C8".into(), 4186.01);
    }

    /// Bake every tone through `generator` and keep it as the active one.
    ///
    /// The bank is replaced wholesale on success; on failure the previous
    /// generator and buffers stay in place.
    pub fn apply_generator(&mut self, generator: Box<dyn Generator>) -> SignalResult<()> {
        let baked = self.bake(&*generator)?;
        self.generator = Some(generator);
        self.tone_buffers = baked;
        Ok(())
    }

    /// Re-bake the bank with the current generator.
    ///
    /// Call after changing amplification or tone duration. Returns whether
    /// the re-bake succeeded; failures are logged rather than propagated so
    /// a live keyboard keeps its previous bank.
    pub fn refresh(&mut self) -> bool {
        let baked = match self.generator.as_deref() {
            Some(generator) => self.bake(generator),
            None => Err(SignalError::NoGeneratorLoaded),
        };

        match baked {
            Ok(buffers) => {
                self.tone_buffers = buffers;
                true
            }
            Err(err) => {
                log::warn!("keyboard refresh failed: {err}");
                false
            }
        }
    }

    fn bake(&self, generator: &dyn Generator) -> SignalResult<BTreeMap<String, SampleBuffer>> {
        let timeline = TimeLine::new(&self.config, self.tone_duration);
        let mut baked = BTreeMap::new();
        for (name, &frequency) in &self.tone_frequencies {
            let buffer = generator
                .sample(frequency, &timeline)?
                .scaled(self.amplification);
            baked.insert(name.clone(), buffer);
        }
        Ok(baked)
    }

    /// Layer the named tones into one playable buffer with default options.
    pub fn synth(&self, tones: &[&str]) -> SignalResult<SampleBuffer> {
        self.synth_with(tones, SynthOptions::default())
    }

    /// Layer the named tones with explicit per-call options.
    ///
    /// Every layer is the tone's baked buffer scaled by
    /// `strength * volume`; layers are summed sample by sample (all are
    /// baked at the same tone duration, so lengths agree).
    pub fn synth_with(&self, tones: &[&str], options: SynthOptions) -> SignalResult<SampleBuffer> {
        if self.generator.is_none() {
            return Err(SignalError::NoGeneratorLoaded);
        }

        let volume = options.volume.unwrap_or(self.volume);
        let gain = options.strength * volume;

        let mut mixed: Vec<f32> = Vec::new();
        for &tone in tones {
            let baked = self
                .tone_buffers
                .get(tone)
                .ok_or_else(|| SignalError::UnknownTone(tone.to_string()))?;

            if mixed.is_empty() {
                mixed = baked.iter().map(|s| s * gain).collect();
            } else {
                for (acc, s) in mixed.iter_mut().zip(baked.iter()) {
                    *acc += s * gain;
                }
            }
        }

        let mut out = SampleBuffer::from_samples(mixed);
        if let Some(duration) = options.duration {
            out = out.truncated(self.config.samples_for(duration));
        }
        Ok(out)
    }

    /// Map the physical key row onto up to two octaves starting at `level`.
    ///
    /// Tone names missing from the scale (levels past the table) are
    /// skipped, so high starting levels yield a shorter map.
    pub fn key_map(&self, level: u32) -> Vec<(char, String)> {
        let mut names = Vec::new();
        for lvl in [level, level + 1] {
            for note in OCTAVE_NOTES {
                let name = tone_name(note, lvl);
                if self.tone_frequencies.contains_key(&name) {
                    names.push(name);
                }
            }
        }

        KEY_ROW.chars().zip(names).collect()
    }

    pub fn config(&self) -> &AudioConfig {
        &self.config
    }

    pub fn tone_frequency(&self, tone: &str) -> Option<f32> {
        self.tone_frequencies.get(tone).copied()
    }

    pub fn tone_names(&self) -> impl Iterator<Item = &str> {
        self.tone_frequencies.keys().map(String::as_str)
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    pub fn tone_duration(&self) -> f32 {
        self.tone_duration
    }

    /// Takes effect at the next apply_generator or refresh.
    pub fn set_tone_duration(&mut self, seconds: f32) {
        self.tone_duration = seconds;
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    pub fn amplification(&self) -> f32 {
        self.amplification
    }

    /// Takes effect at the next apply_generator or refresh.
    pub fn set_amplification(&mut self, amplification: f32) {
        self.amplification = amplification;
    }
}
