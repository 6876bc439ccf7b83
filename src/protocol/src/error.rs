//! serbench-protocol error type

use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum CodecError {
    /// I/O error when reading or writing
    IoError(io::Error),
    /// Protobuf encoder rejected the message
    EncodeFailed(prost::EncodeError),
    /// Protobuf decoder rejected the input
    DecodeFailed(prost::DecodeError),
    /// Thrift protocol error, for both directions
    ThriftFailed(thrift::Error),
    /// Generated message code and the linked codec library disagree on the wire format
    IncompatibleWireFormat { expected: Vec<u8>, actual: Vec<u8> },
    /// Codec runtime must be initialized before this call
    RuntimeNotInitialized,
}

pub type CodecResult<T> = Result<T, CodecError>;

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::IoError(e) => write!(f, "IO error: {}", e),
            CodecError::EncodeFailed(e) => write!(f, "protobuf encode failed: {}", e),
            CodecError::DecodeFailed(e) => write!(f, "protobuf decode failed: {}", e),
            CodecError::ThriftFailed(e) => write!(f, "thrift protocol error: {}", e),
            CodecError::IncompatibleWireFormat { expected, actual } => write!(
                f,
                "incompatible protobuf wire format, expect {:02x?} but got {:02x?}",
                expected, actual
            ),
            CodecError::RuntimeNotInitialized => {
                write!(f, "codec runtime is not initialized")
            }
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CodecError::IoError(e) => Some(e),
            CodecError::EncodeFailed(e) => Some(e),
            CodecError::DecodeFailed(e) => Some(e),
            CodecError::ThriftFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(err: io::Error) -> Self {
        CodecError::IoError(err)
    }
}

impl From<prost::EncodeError> for CodecError {
    fn from(err: prost::EncodeError) -> Self {
        CodecError::EncodeFailed(err)
    }
}

impl From<prost::DecodeError> for CodecError {
    fn from(err: prost::DecodeError) -> Self {
        CodecError::DecodeFailed(err)
    }
}

impl From<thrift::Error> for CodecError {
    fn from(err: thrift::Error) -> Self {
        CodecError::ThriftFailed(err)
    }
}

impl From<CodecError> for io::Error {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::IoError(e) => e,
            e => io::Error::new(io::ErrorKind::Other, Box::new(e)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::CodecError;
    use std::io;

    #[test]
    fn test_into_io_error() {
        let err: io::Error = CodecError::RuntimeNotInitialized.into();
        assert_eq!(io::ErrorKind::Other, err.kind());
        assert_eq!("codec runtime is not initialized", err.to_string());

        let err: io::Error = CodecError::IoError(io::Error::from(io::ErrorKind::UnexpectedEof)).into();
        assert_eq!(io::ErrorKind::UnexpectedEof, err.kind());
    }
}
