// Copyright 2023 atframework
// Licensed under the MIT licenses.

use std::fmt;

use bytes::{Bytes, BytesMut};

use super::error::CodecResult;

mod protobuf;
mod thrift_binary;

pub use self::protobuf::ProtobufCodec;
pub use self::thrift_binary::ThriftBinaryCodec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecKind {
    Thrift,
    Protobuf,
}

impl CodecKind {
    /// Every codec, in benchmark order.
    pub const ALL: [CodecKind; 2] = [CodecKind::Thrift, CodecKind::Protobuf];

    pub fn as_str(&self) -> &'static str {
        match self {
            CodecKind::Thrift => "thrift",
            CodecKind::Protobuf => "protobuf",
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output buffer reused across encode calls.
///
/// `reset` drops the content but keeps the allocation, so a timed loop only
/// pays for growth once.
#[derive(Debug, Default)]
pub struct EncodeBuffer {
    data: BytesMut,
}

impl EncodeBuffer {
    pub fn new() -> EncodeBuffer {
        EncodeBuffer {
            data: BytesMut::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> EncodeBuffer {
        EncodeBuffer {
            data: BytesMut::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.data.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }

    /// Snapshot of the current content, independent of later resets.
    pub fn freeze_copy(&self) -> Bytes {
        Bytes::copy_from_slice(&self.data[..])
    }

    #[inline]
    pub(crate) fn mut_data(&mut self) -> &mut BytesMut {
        &mut self.data
    }
}

impl AsRef<[u8]> for EncodeBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

/// A paired encoder and decoder for the benchmark record.
pub trait Codec {
    type Record: Clone + PartialEq + fmt::Debug + Default;

    fn kind(&self) -> CodecKind;

    fn make_record(&self, ids: Vec<i64>, strings: Vec<String>) -> Self::Record;

    /// Append the binary encoding of `record` to `output`.
    fn encode(&self, record: &Self::Record, output: &mut EncodeBuffer) -> CodecResult<()>;

    /// Replace `target` with the record decoded from `input`.
    fn decode(&self, input: &[u8], target: &mut Self::Record) -> CodecResult<()>;

    fn encode_to_vec(&self, record: &Self::Record) -> CodecResult<Vec<u8>> {
        let mut output = EncodeBuffer::new();
        self.encode(record, &mut output)?;
        Ok(output.as_slice().to_vec())
    }
}
