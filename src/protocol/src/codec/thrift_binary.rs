// Copyright 2023 atframework
// Licensed under the MIT licenses.

use bytes::BufMut;
use thrift::protocol::{TBinaryInputProtocol, TBinaryOutputProtocol, TOutputProtocol};

use super::{Codec, CodecKind, EncodeBuffer};
use crate::error::CodecResult;
use crate::thrift_types::Record;

/// Thrift binary protocol codec.
#[derive(Debug, Clone, Copy)]
pub struct ThriftBinaryCodec {
    strict: bool,
}

impl ThriftBinaryCodec {
    pub fn new() -> ThriftBinaryCodec {
        ThriftBinaryCodec { strict: true }
    }

    pub fn with_strict(strict: bool) -> ThriftBinaryCodec {
        ThriftBinaryCodec { strict }
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl Default for ThriftBinaryCodec {
    fn default() -> Self {
        ThriftBinaryCodec::new()
    }
}

impl Codec for ThriftBinaryCodec {
    type Record = Record;

    fn kind(&self) -> CodecKind {
        CodecKind::Thrift
    }

    fn make_record(&self, ids: Vec<i64>, strings: Vec<String>) -> Record {
        Record::new(ids, strings)
    }

    fn encode(&self, record: &Record, output: &mut EncodeBuffer) -> CodecResult<()> {
        let mut o_prot = TBinaryOutputProtocol::new(output.mut_data().writer(), self.strict);
        record.write_to_out_protocol(&mut o_prot)?;
        o_prot.flush()?;
        Ok(())
    }

    fn decode(&self, input: &[u8], target: &mut Record) -> CodecResult<()> {
        let mut i_prot = TBinaryInputProtocol::new(input, self.strict);
        *target = Record::read_from_in_protocol(&mut i_prot)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::ThriftBinaryCodec;
    use crate::codec::{Codec, EncodeBuffer};
    use crate::error::CodecError;
    use crate::thrift_types::Record;

    #[test]
    fn test_encode_appends() {
        let codec = ThriftBinaryCodec::new();
        let record = codec.make_record(vec![3], vec![]);
        let single = codec.encode_to_vec(&record).unwrap();

        let mut output = EncodeBuffer::new();
        codec.encode(&record, &mut output).unwrap();
        codec.encode(&record, &mut output).unwrap();
        assert_eq!(single.len() * 2, output.len());
        assert_eq!(&single[..], &output.as_slice()[..single.len()]);
        assert_eq!(&single[..], &output.as_slice()[single.len()..]);
    }

    #[test]
    fn test_decode_truncated() {
        let codec = ThriftBinaryCodec::new();
        let encoded = codec
            .encode_to_vec(&codec.make_record(vec![1, 2], vec!["x".to_string()]))
            .unwrap();

        let mut target = Record::default();
        match codec
            .decode(&encoded[..encoded.len() - 3], &mut target)
            .unwrap_err()
        {
            CodecError::ThriftFailed(_) => {}
            e => panic!("Expect ThriftFailed: real got {:?}", e),
        }
    }

    #[test]
    fn test_non_strict_round_trip() {
        let codec = ThriftBinaryCodec::with_strict(false);
        assert!(!codec.is_strict());
        let record = codec.make_record(vec![-1, i64::MAX], vec!["y".to_string()]);
        let encoded = codec.encode_to_vec(&record).unwrap();

        let mut target = Record::default();
        codec.decode(&encoded, &mut target).unwrap();
        assert_eq!(record, target);
    }
}
