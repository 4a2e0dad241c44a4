use fastrand::Rng;
use log::info;

use crate::error::SongError;
use crate::layer;
use crate::mixer;
use crate::style::StyleProfile;
use crate::wav;

/// Drives the whole pipeline: resolve a style, compose the layers, mix them
/// down and write the result to disk.
pub struct SongMachine {
    pub sample_rate: u32,
    pub num_layers: usize,
}

impl Default for SongMachine {
    fn default() -> Self {
        SongMachine {
            sample_rate: 44100,
            num_layers: 3,
        }
    }
}

impl SongMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate one song and write it as a WAV file, returning the path it
    /// was written to. When no output name is given, one is made up as
    /// `friendly_song_<style>_<4 digits>.wav`.
    ///
    /// Re-running with the same seeded `rng` reproduces the file byte for
    /// byte; an unseeded one gives a fresh song each time.
    pub fn generate(
        &self,
        style_name: &str,
        duration: f32,
        output: Option<&str>,
        rng: &mut Rng,
    ) -> Result<String, SongError> {
        if !(duration > 0.0) {
            return Err(SongError::ParameterError(format!(
                "duration must be positive, got {}",
                duration
            )));
        }

        let style = StyleProfile::resolve(style_name);
        let output_file = match output {
            Some(path) => path.to_string(),
            None => format!("friendly_song_{}_{}.wav", style_name, rng.u32(1000..=9999)),
        };

        println!("\n🎵 Creating a {} song...", style_name);

        let mut layers = Vec::with_capacity(self.num_layers);
        for i in 0..self.num_layers {
            println!("Creating layer {}...", i + 1);
            let samples = layer::compose(duration, &style, self.sample_rate, rng);
            info!(
                "layer {}/{}: {} samples at {} Hz base",
                i + 1,
                self.num_layers,
                samples.len(),
                style.base_freq
            );
            layers.push(samples);
        }

        let master = mixer::mix(layers)?;
        let pcm = mixer::quantize(&master);

        wav::write(&output_file, self.sample_rate, &pcm)?;
        info!("wrote {} samples to {}", pcm.len(), output_file);

        println!("\n✨ Song created successfully: {}", output_file);
        Ok(output_file)
    }
}
