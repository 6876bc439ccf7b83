// Copyright 2023 atframework
// Licensed under the MIT licenses.

extern crate bytes;
extern crate log;
extern crate once_cell;
extern crate prost;
extern crate thrift;
extern crate xxhash_rust;

pub mod codec;
pub mod error;
pub mod proto;
pub mod record;
pub mod runtime;
pub mod thrift_types;

pub use codec::{Codec, CodecKind, EncodeBuffer, ProtobufCodec, ThriftBinaryCodec};
pub use error::{CodecError, CodecResult};
pub use record::RecordShape;
pub use runtime::CodecRuntime;

pub type ProtobufRecord = proto::serbench::record::Record;
pub type ThriftRecord = thrift_types::Record;

/// xxh3 digest of an encoded record, used to compare encodings cheaply.
#[inline]
pub fn digest<T: AsRef<[u8]>>(encoded: T) -> u64 {
    xxhash_rust::xxh3::xxh3_64(encoded.as_ref())
}
