// Copyright 2023 atframework
// Licensed under the MIT licenses.

pub const INTEGERS_COUNT: usize = 1000;
pub const STRINGS_COUNT: usize = 100;
pub const INTEGER_VALUE: i64 = 26354;
pub const STRING_VALUE: &str =
    "shgfkghsdfjhgsfjhfgjhfgjsffghgsfdhgsfdfkdjhfioukjhkfdljgdfkgvjafdhasgdfwurtjkghfsdjkfg";

/// How a benchmark record is populated: `integers_count` copies of
/// `integer_value` followed by `strings_count` copies of `string_value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordShape {
    pub integers_count: usize,
    pub strings_count: usize,
    pub integer_value: i64,
    pub string_value: String,
}

impl Default for RecordShape {
    fn default() -> Self {
        RecordShape {
            integers_count: INTEGERS_COUNT,
            strings_count: STRINGS_COUNT,
            integer_value: INTEGER_VALUE,
            string_value: STRING_VALUE.to_string(),
        }
    }
}

impl RecordShape {
    pub fn ids(&self) -> Vec<i64> {
        vec![self.integer_value; self.integers_count]
    }

    pub fn strings(&self) -> Vec<String> {
        vec![self.string_value.clone(); self.strings_count]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.integers_count == 0 && self.strings_count == 0
    }

    /// Payload size without any encoding overhead.
    #[inline]
    pub fn raw_payload_size(&self) -> usize {
        std::mem::size_of::<i64>() * self.integers_count
            + self.string_value.len() * self.strings_count
    }
}
