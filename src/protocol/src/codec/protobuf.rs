// Copyright 2023 atframework
// Licensed under the MIT licenses.

use prost::Message;

use super::{Codec, CodecKind, EncodeBuffer};
use crate::error::CodecResult;
use crate::proto::serbench::record::Record;

/// Protobuf codec backed by prost.
///
/// Only handed out by [`crate::runtime::CodecRuntime`], after the wire format
/// check has passed.
#[derive(Debug, Clone, Copy)]
pub struct ProtobufCodec {
    _private: (),
}

impl ProtobufCodec {
    pub(crate) fn new() -> ProtobufCodec {
        ProtobufCodec { _private: () }
    }
}

impl Codec for ProtobufCodec {
    type Record = Record;

    fn kind(&self) -> CodecKind {
        CodecKind::Protobuf
    }

    fn make_record(&self, ids: Vec<i64>, strings: Vec<String>) -> Record {
        Record { ids, strings }
    }

    fn encode(&self, record: &Record, output: &mut EncodeBuffer) -> CodecResult<()> {
        record.encode(output.mut_data())?;
        Ok(())
    }

    fn decode(&self, input: &[u8], target: &mut Record) -> CodecResult<()> {
        target.clear();
        target.merge(input)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::ProtobufCodec;
    use crate::codec::{Codec, EncodeBuffer};
    use crate::error::CodecError;
    use crate::proto::serbench::record::Record;

    #[test]
    fn test_packed_layout() {
        let codec = ProtobufCodec::new();
        let record = codec.make_record(vec![150, 1], vec!["ab".to_string()]);
        assert_eq!(
            vec![0x0a, 0x03, 0x96, 0x01, 0x01, 0x12, 0x02, b'a', b'b'],
            codec.encode_to_vec(&record).unwrap()
        );
    }

    #[test]
    fn test_decode_replaces_target() {
        let codec = ProtobufCodec::new();
        let mut output = EncodeBuffer::new();
        codec
            .encode(&codec.make_record(vec![7], vec![]), &mut output)
            .unwrap();

        let mut target = codec.make_record(vec![1, 2, 3], vec!["stale".to_string()]);
        codec.decode(output.as_slice(), &mut target).unwrap();
        assert_eq!(Record { ids: vec![7], strings: vec![] }, target);
    }

    #[test]
    fn test_decode_truncated() {
        let codec = ProtobufCodec::new();
        let mut target = Record::default();
        match codec.decode(&[0x0a, 0x05, 0x01], &mut target).unwrap_err() {
            CodecError::DecodeFailed(_) => {}
            e => panic!("Expect DecodeFailed: real got {:?}", e),
        }
    }
}
