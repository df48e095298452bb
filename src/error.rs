/// Errors that can occur while reading the accelerometer or rotating the
/// display.
#[derive(Debug, thiserror::Error)]
pub enum AutorotateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("short read: got {got} of {expected} samples")]
    ShortRead { got: usize, expected: usize },

    #[error("rotation backend failed: {0}")]
    Backend(String),
}
