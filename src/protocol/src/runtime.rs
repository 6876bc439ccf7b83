// Copyright 2023 atframework
// Licensed under the MIT licenses.

use once_cell::sync::OnceCell;
use prost::Message;

use super::codec::{ProtobufCodec, ThriftBinaryCodec};
use super::error::{CodecError, CodecResult};
use super::proto::serbench::record::Record;

static CODEC_RUNTIME: OnceCell<CodecRuntime> = OnceCell::new();

// { ids: [1], strings: ["a"] }, with ids packed.
const PROTOBUF_PROBE_WIRE: [u8; 6] = [0x0a, 0x01, 0x01, 0x12, 0x01, 0x61];

/// Process-wide codec library setup.
///
/// The protobuf codec is only available through an initialized runtime, so
/// nothing can encode before the wire format check ran.
#[derive(Debug)]
pub struct CodecRuntime {
    protobuf_probe_length: usize,
}

impl CodecRuntime {
    /// Run the one-time check. Later calls return the instance created by the
    /// first successful call.
    pub fn initialize() -> CodecResult<&'static CodecRuntime> {
        CODEC_RUNTIME.get_or_try_init(|| {
            let protobuf_probe_length = verify_protobuf_wire_format()?;
            log::debug!(
                "protobuf wire format verified with {} bytes probe",
                protobuf_probe_length
            );
            Ok(CodecRuntime {
                protobuf_probe_length,
            })
        })
    }

    pub fn get() -> CodecResult<&'static CodecRuntime> {
        CODEC_RUNTIME.get().ok_or(CodecError::RuntimeNotInitialized)
    }

    #[inline]
    pub fn protobuf_probe_length(&self) -> usize {
        self.protobuf_probe_length
    }

    pub fn protobuf_codec(&self) -> ProtobufCodec {
        ProtobufCodec::new()
    }

    pub fn thrift_codec(&self) -> ThriftBinaryCodec {
        ThriftBinaryCodec::new()
    }
}

fn verify_protobuf_wire_format() -> CodecResult<usize> {
    let probe = Record {
        ids: vec![1],
        strings: vec!["a".to_string()],
    };

    let actual = probe.encode_to_vec();
    if actual[..] != PROTOBUF_PROBE_WIRE[..] {
        return Err(CodecError::IncompatibleWireFormat {
            expected: PROTOBUF_PROBE_WIRE.to_vec(),
            actual,
        });
    }

    let decoded = Record::decode(&actual[..])?;
    if decoded != probe {
        return Err(CodecError::IncompatibleWireFormat {
            expected: PROTOBUF_PROBE_WIRE.to_vec(),
            actual: decoded.encode_to_vec(),
        });
    }

    Ok(actual.len())
}

#[cfg(test)]
mod test {
    use super::{verify_protobuf_wire_format, CodecRuntime};

    #[test]
    fn test_verify_protobuf_wire_format() {
        assert_eq!(6, verify_protobuf_wire_format().unwrap());
    }

    #[test]
    fn test_initialize_once() {
        let first = CodecRuntime::initialize().unwrap();
        let second = CodecRuntime::initialize().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, CodecRuntime::get().unwrap()));
        assert_eq!(6, first.protobuf_probe_length());
    }
}
