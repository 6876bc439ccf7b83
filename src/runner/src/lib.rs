// Copyright 2023 atframework
// Licensed under the MIT licenses.

extern crate clap;
extern crate log;
extern crate serbench_protocol;

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;

pub use error::{BenchmarkError, BenchmarkResult};
pub use runner::{Report, Runner};
