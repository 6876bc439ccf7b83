// Copyright 2023 atframework
// Licensed under the MIT licenses.

//! Generated from `proto/serbench_record.proto`.

pub mod serbench {
    pub mod record {
        include!("serbench.record.rs");
    }
}
