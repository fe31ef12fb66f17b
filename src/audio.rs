//! Sound effects and ambience.
//!
//! Every cue is synthesized at startup as a small PCM buffer, so the
//! binary ships no audio files. Cues that fail to decode load as
//! `None` and simply stay silent; audio trouble never stops the game.

use macroquad::audio::{
    PlaySoundParams, Sound, load_sound_from_bytes, play_sound, set_sound_volume, stop_sound,
};

use crate::consts::SAMPLE_RATE;
use crate::settings::Settings;
use crate::sim::SoundCue;

pub struct AudioBank {
    click: Option<Sound>,
    burn: Option<Sound>,
    confirm: Option<Sound>,
    finish: Option<Sound>,
    crackle: Option<Sound>,
    crackle_playing: bool,
}

impl AudioBank {
    /// Synthesizes and decodes all cues. Must run inside the game
    /// window's async context.
    pub async fn load() -> Self {
        Self {
            click: load_cue("click", synth_click()).await,
            burn: load_cue("burn", synth_burn()).await,
            confirm: load_cue("confirm", synth_confirm()).await,
            finish: load_cue("finish", synth_finish()).await,
            crackle: load_cue("crackle", synth_crackle()).await,
            crackle_playing: false,
        }
    }

    /// Plays a one-shot cue at the configured effect volume.
    pub fn play(&self, cue: SoundCue, settings: &Settings) {
        let volume = settings.effective_sfx();
        if volume <= 0.0 {
            return;
        }
        let sound = match cue {
            SoundCue::Click => &self.click,
            SoundCue::Burn => &self.burn,
            SoundCue::Confirm => &self.confirm,
            SoundCue::Finish => &self.finish,
        };
        if let Some(sound) = sound {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume,
                },
            );
        }
    }

    /// Starts, stops, or re-levels the bonfire crackle loop to match
    /// the current settings.
    pub fn update_ambience(&mut self, settings: &Settings) {
        let volume = settings.effective_ambience();
        match (&self.crackle, self.crackle_playing, volume > 0.0) {
            (Some(sound), false, true) => {
                play_sound(
                    sound,
                    PlaySoundParams {
                        looped: true,
                        volume,
                    },
                );
                self.crackle_playing = true;
            }
            (Some(sound), true, false) => {
                stop_sound(sound);
                self.crackle_playing = false;
            }
            (Some(sound), true, true) => set_sound_volume(sound, volume),
            _ => {}
        }
    }
}

async fn load_cue(name: &str, wav: Vec<u8>) -> Option<Sound> {
    match load_sound_from_bytes(&wav).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            log::warn!("Could not load {} cue: {}", name, e);
            None
        }
    }
}

/// Wraps signed 16-bit mono samples in a RIFF/WAVE header.
fn wav_from_samples(samples: &[i16]) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let byte_rate = SAMPLE_RATE * 2;
    let mut out = Vec::with_capacity(44 + data_len as usize);

    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes()); // block align
    out.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        out.extend_from_slice(&sample.to_le_bytes());
    }
    out
}

/// Appends a linearly swept sine with a fade-out envelope.
fn tone(freq_start: f32, freq_end: f32, duration: f32, volume: f32, out: &mut Vec<i16>) {
    let count = (duration * SAMPLE_RATE as f32) as usize;
    let mut phase = 0.0f32;
    for i in 0..count {
        let t = i as f32 / count as f32;
        let freq = freq_start + (freq_end - freq_start) * t;
        phase += std::f32::consts::TAU * freq / SAMPLE_RATE as f32;
        let env = volume * (1.0 - t);
        out.push((phase.sin() * env * i16::MAX as f32) as i16);
    }
}

fn synth_click() -> Vec<u8> {
    let mut samples = Vec::new();
    tone(620.0, 880.0, 0.09, 0.5, &mut samples);
    wav_from_samples(&samples)
}

fn synth_confirm() -> Vec<u8> {
    let mut samples = Vec::new();
    tone(440.0, 440.0, 0.08, 0.5, &mut samples);
    tone(660.0, 660.0, 0.12, 0.5, &mut samples);
    wav_from_samples(&samples)
}

fn synth_finish() -> Vec<u8> {
    let mut samples = Vec::new();
    for freq in [523.0, 659.0, 784.0] {
        tone(freq, freq, 0.15, 0.5, &mut samples);
    }
    wav_from_samples(&samples)
}

/// A short descending rasp for the burnt-marshmallow penalty.
fn synth_burn() -> Vec<u8> {
    let count = (0.35 * SAMPLE_RATE as f32) as usize;
    let mut samples = Vec::with_capacity(count);
    let mut phase = 0.0f32;
    for i in 0..count {
        let t = i as f32 / count as f32;
        let freq = 220.0 - 160.0 * t;
        phase += std::f32::consts::TAU * freq / SAMPLE_RATE as f32;
        let noise = crate::hash01(i as u32) * 2.0 - 1.0;
        let env = (1.0 - t) * 0.6;
        let mixed = phase.sin() * 0.7 + noise * 0.3;
        samples.push((mixed * env * i16::MAX as f32) as i16);
    }
    wav_from_samples(&samples)
}

/// Two seconds of gated noise that loops as the bonfire crackle.
fn synth_crackle() -> Vec<u8> {
    let count = (2.0 * SAMPLE_RATE as f32) as usize;
    let mut samples = Vec::with_capacity(count);
    for i in 0..count {
        let gate = crate::hash01((i / 441) as u32);
        let amp = if gate > 0.82 {
            (gate - 0.82) / 0.18
        } else {
            0.05
        };
        let noise = crate::hash01(i as u32) * 2.0 - 1.0;
        samples.push((noise * amp * 0.4 * i16::MAX as f32) as i16);
    }
    wav_from_samples(&samples)
}
