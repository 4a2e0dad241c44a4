use fastrand::Rng;
use log::debug;

use crate::note::Note;
use crate::style::{StyleProfile, FREQ_RATIOS};

/// Fill one full-duration layer with back-to-back random notes.
///
/// Note durations are drawn uniformly from [0.2, 1.0) seconds, the last one
/// clamped to whatever time remains. Each note's frequency is the style's
/// base frequency times one of the fixed ratios. Samples are added rather
/// than assigned, so neighbouring notes may bleed into each other at their
/// boundaries.
pub fn compose(duration: f32, style: &StyleProfile, sample_rate: u32, rng: &mut Rng) -> Vec<f32> {
    let total_samples = (duration * sample_rate as f32) as usize;
    let mut layer = vec![0.0f32; total_samples];

    let mut cursor = 0.0f32;
    let mut note_count = 0usize;

    while cursor < duration {
        let mut note_duration = 0.2 + rng.f32() * 0.8;
        if cursor + note_duration > duration {
            note_duration = duration - cursor;
        }

        let ratio = FREQ_RATIOS[rng.usize(..FREQ_RATIOS.len())];
        let note = Note {
            frequency: style.base_freq * ratio,
            duration: note_duration,
            start_offset: cursor,
        };

        let start_sample = (note.start_offset * sample_rate as f32) as usize;
        for (i, s) in note.render(sample_rate).iter().enumerate() {
            let sample_idx = start_sample + i;
            if sample_idx >= layer.len() {
                break; // rounding can push the tail one past the end
            }
            layer[sample_idx] += s;
        }

        cursor += note_duration;
        note_count += 1;
    }

    debug!("layer composed: {} notes over {:.1}s", note_count, duration);
    layer
}
