//! serbench error type

use std::error::Error;
use std::fmt;
use std::io;

use serbench_protocol::{CodecError, CodecKind};

#[derive(Debug)]
pub enum InvariantReason {
    /// Codec could not decode its own output
    DecodeFailed(CodecError),
    /// Decoded record differs from the original
    RecordMismatch,
}

#[derive(Debug)]
pub enum BenchmarkError {
    /// I/O error when writing the report
    IoError(io::Error),
    /// Codec failed to encode or to initialize
    CodecError(CodecError),
    /// Round trip did not reproduce the original record
    InvariantViolation {
        codec: CodecKind,
        reason: InvariantReason,
    },
}

pub type BenchmarkResult<T> = Result<T, BenchmarkError>;

impl BenchmarkError {
    pub fn decode_failed(codec: CodecKind, err: CodecError) -> Self {
        BenchmarkError::InvariantViolation {
            codec,
            reason: InvariantReason::DecodeFailed(err),
        }
    }

    pub fn record_mismatch(codec: CodecKind) -> Self {
        BenchmarkError::InvariantViolation {
            codec,
            reason: InvariantReason::RecordMismatch,
        }
    }
}

impl fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchmarkError::IoError(e) => write!(f, "IO error: {}", e),
            BenchmarkError::CodecError(e) => write!(f, "{}", e),
            BenchmarkError::InvariantViolation { codec, reason } => match reason {
                InvariantReason::DecodeFailed(e) => {
                    write!(f, "{}'s case: invariant failed, {}", codec, e)
                }
                InvariantReason::RecordMismatch => {
                    write!(f, "{}'s case: invariant failed", codec)
                }
            },
        }
    }
}

impl Error for BenchmarkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BenchmarkError::IoError(e) => Some(e),
            BenchmarkError::CodecError(e) => Some(e),
            BenchmarkError::InvariantViolation {
                reason: InvariantReason::DecodeFailed(e),
                ..
            } => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BenchmarkError {
    fn from(err: io::Error) -> Self {
        BenchmarkError::IoError(err)
    }
}

impl From<CodecError> for BenchmarkError {
    fn from(err: CodecError) -> Self {
        BenchmarkError::CodecError(err)
    }
}

#[cfg(test)]
mod test {
    use super::BenchmarkError;
    use serbench_protocol::{CodecError, CodecKind};

    #[test]
    fn test_display() {
        assert_eq!(
            "thrift's case: invariant failed",
            BenchmarkError::record_mismatch(CodecKind::Thrift).to_string()
        );
        assert_eq!(
            "protobuf's case: invariant failed, codec runtime is not initialized",
            BenchmarkError::decode_failed(CodecKind::Protobuf, CodecError::RuntimeNotInitialized)
                .to_string()
        );
    }
}
