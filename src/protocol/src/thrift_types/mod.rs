// Copyright 2023 atframework
// Licensed under the MIT licenses.

//! Generated from `thrift/serbench_record.thrift`, kept in sync by hand.

use thrift::protocol::{
    TFieldIdentifier, TInputProtocol, TListIdentifier, TOutputProtocol, TStructIdentifier, TType,
};
use thrift::{ProtocolError, ProtocolErrorKind};

// Upper bound of elements reserved up front from an untrusted list header.
const LIST_PREALLOC_LIMIT: usize = 4096;

#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Record {
    pub ids: Vec<i64>,
    pub strings: Vec<String>,
}

impl Record {
    pub fn new(ids: Vec<i64>, strings: Vec<String>) -> Record {
        Record { ids, strings }
    }

    pub fn read_from_in_protocol<P: TInputProtocol>(i_prot: &mut P) -> thrift::Result<Record> {
        i_prot.read_struct_begin()?;
        let mut f_1: Vec<i64> = Vec::new();
        let mut f_2: Vec<String> = Vec::new();
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match (field_ident.id, field_ident.field_type) {
                (Some(1), TType::List) => {
                    let size = read_list_size(i_prot)?;
                    let mut val: Vec<i64> = Vec::with_capacity(size.min(LIST_PREALLOC_LIMIT));
                    for _ in 0..size {
                        val.push(i_prot.read_i64()?);
                    }
                    i_prot.read_list_end()?;
                    f_1 = val;
                }
                (Some(2), TType::List) => {
                    let size = read_list_size(i_prot)?;
                    let mut val: Vec<String> = Vec::with_capacity(size.min(LIST_PREALLOC_LIMIT));
                    for _ in 0..size {
                        val.push(i_prot.read_string()?);
                    }
                    i_prot.read_list_end()?;
                    f_2 = val;
                }
                _ => {
                    i_prot.skip(field_ident.field_type)?;
                }
            };
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        Ok(Record {
            ids: f_1,
            strings: f_2,
        })
    }

    pub fn write_to_out_protocol<P: TOutputProtocol>(&self, o_prot: &mut P) -> thrift::Result<()> {
        let struct_ident = TStructIdentifier::new("Record");
        o_prot.write_struct_begin(&struct_ident)?;
        o_prot.write_field_begin(&TFieldIdentifier::new("ids", TType::List, 1i16))?;
        o_prot.write_list_begin(&TListIdentifier::new(
            TType::I64,
            list_size(self.ids.len())?,
        ))?;
        for e in &self.ids {
            o_prot.write_i64(*e)?;
        }
        o_prot.write_list_end()?;
        o_prot.write_field_end()?;
        o_prot.write_field_begin(&TFieldIdentifier::new("strings", TType::List, 2i16))?;
        o_prot.write_list_begin(&TListIdentifier::new(
            TType::String,
            list_size(self.strings.len())?,
        ))?;
        for e in &self.strings {
            o_prot.write_string(e)?;
        }
        o_prot.write_list_end()?;
        o_prot.write_field_end()?;
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

fn read_list_size<P: TInputProtocol>(i_prot: &mut P) -> thrift::Result<usize> {
    let list_ident = i_prot.read_list_begin()?;
    usize::try_from(list_ident.size).map_err(|_| {
        thrift::Error::Protocol(ProtocolError::new(
            ProtocolErrorKind::NegativeSize,
            format!("negative list size {}", list_ident.size),
        ))
    })
}

fn list_size(len: usize) -> thrift::Result<i32> {
    i32::try_from(len).map_err(|_| {
        thrift::Error::Protocol(ProtocolError::new(
            ProtocolErrorKind::SizeLimit,
            format!("list of {} elements exceeds i32", len),
        ))
    })
}
