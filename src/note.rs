use crate::envelope;

/// A single scheduled note. The composer creates one, renders it straight
/// into its layer, and throws it away.
#[derive(Debug, Clone, Copy)]
pub struct Note {
    pub frequency: f32, // Hz
    pub duration: f32,  // seconds
    pub start_offset: f32,
}

impl Note {
    /// Render the note as sine samples with the amplitude envelope applied.
    /// Output length is always `floor(duration * sample_rate)`.
    pub fn render(&self, sample_rate: u32) -> Vec<f32> {
        let num_samples = (self.duration * sample_rate as f32) as usize;
        let env = envelope::shape(num_samples);

        let mut samples = Vec::with_capacity(num_samples);
        let mut phase = 0.0f32; // cycles, kept in [0.0, 1.0)
        for e in env {
            samples.push((phase * std::f32::consts::TAU).sin() * e);
            phase += self.frequency / sample_rate as f32;
            if phase >= 1.0 {
                phase -= 1.0;
            }
        }

        samples
    }
}
