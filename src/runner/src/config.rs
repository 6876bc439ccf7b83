// Copyright 2023 atframework
// Licensed under the MIT licenses.

use serbench_protocol::RecordShape;

pub struct BenchmarkConfigure {
    pub shape: RecordShape,

    // Initial capacity of each codec's encode buffer, 0 to let it grow on the first encode
    pub buffer_capacity: usize,
}

impl Default for BenchmarkConfigure {
    fn default() -> Self {
        BenchmarkConfigure {
            shape: RecordShape::default(),
            buffer_capacity: 0,
        }
    }
}
