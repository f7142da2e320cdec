use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// The underlying source or sink failed. Running out of input in the
    /// middle of a primitive shows up here as `ErrorKind::UnexpectedEof`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Variable-length integer does not fit in 32 bits")]
    VarintOverflow,

    #[error("Byte array of {0} bytes is too long for a 32-bit length prefix")]
    ByteArrayTooLong(usize),
}

impl CodecError {
    /// True when the source ran dry before a primitive was complete.
    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self, CodecError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}
