use std::fmt;

impl std::error::Error for SongError {}

#[derive(Debug, Clone)]
pub enum SongError {
    ParameterError(String),
    SilentBuffer,
    FileError(String),
}

impl fmt::Display for SongError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SongError::ParameterError(msg) => write!(f, "Parameter Error: {}", msg),
            SongError::SilentBuffer => write!(f, "Mix Error: all layers are silent, nothing to normalize"),
            SongError::FileError(msg) => write!(f, "File Error: {}", msg),
        }
    }
}
