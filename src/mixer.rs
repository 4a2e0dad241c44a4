use crate::error::SongError;

/// Gain applied to every layer before summation.
pub const LAYER_GAIN: f32 = 0.3;

/// Sum the layers into a master buffer and rescale it to unit peak.
///
/// All layers are expected to share the first layer's length; anything extra
/// is ignored. An all-zero accumulation cannot be normalized and comes back
/// as `SilentBuffer`.
pub fn mix(layers: Vec<Vec<f32>>) -> Result<Vec<f32>, SongError> {
    let total_samples = layers.first().map(|l| l.len()).unwrap_or(0);
    let mut master = vec![0.0f32; total_samples];

    for layer in &layers {
        for (dst, s) in master.iter_mut().zip(layer) {
            *dst += s * LAYER_GAIN;
        }
    }

    let peak = master.iter().map(|s| s.abs()).fold(0.0f32, f32::max);
    if peak == 0.0 {
        return Err(SongError::SilentBuffer);
    }

    for s in master.iter_mut() {
        *s /= peak;
    }

    Ok(master)
}

/// Convert normalized samples to 16-bit PCM. The cast truncates toward
/// zero, the same rule everywhere a float becomes a sample count.
pub fn quantize(samples: &[f32]) -> Vec<i16> {
    samples.iter().map(|s| (s * 32767.0) as i16).collect()
}
