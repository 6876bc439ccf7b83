// Copyright 2023 atframework
// Licensed under the MIT licenses.

extern crate criterion;
extern crate log;

#[cfg(target_family = "unix")]
extern crate pprof;

pub mod benchmark;
