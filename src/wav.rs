use crate::error::SongError;

/// Write mono 16-bit PCM to `path`. The song pipeline hands its finished
/// buffer here and treats any failure as fatal.
pub fn write(path: &str, sample_rate: u32, samples: &[i16]) -> Result<(), SongError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .map_err(|e| SongError::FileError(e.to_string()))?;

    for &s in samples {
        writer
            .write_sample(s)
            .map_err(|e| SongError::FileError(e.to_string()))?;
    }

    writer
        .finalize()
        .map_err(|e| SongError::FileError(e.to_string()))
}
