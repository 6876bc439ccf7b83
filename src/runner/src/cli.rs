// Copyright 2023 atframework
// Licensed under the MIT licenses.

use std::env;
use std::io::{self, Write};

use clap::Parser;

use serbench_protocol::CodecRuntime;

use super::config::BenchmarkConfigure;
use super::error::BenchmarkResult;
use super::runner::Runner;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Timed encode and decode repetitions for each codec
    pub iterations: Option<usize>,
}

pub fn program_name() -> String {
    env::args().next().unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

pub fn write_usage<W: Write>(output: &mut W, program: &str) -> io::Result<()> {
    writeln!(output, "Usage: {} iterations", program)
}

/// Run the benchmark for parsed arguments, writing the report to `output`.
///
/// A missing iteration count only prints the usage and still succeeds.
pub fn execute<W: Write>(args: &Args, mut output: W) -> BenchmarkResult<()> {
    let iterations = match args.iterations {
        Some(n) => n,
        None => {
            write_usage(&mut output, &program_name())?;
            return Ok(());
        }
    };

    let runtime = CodecRuntime::initialize()?;
    let mut runner = Runner::new(runtime, BenchmarkConfigure::default(), output);
    let reports = runner.run_all(iterations)?;
    for report in &reports {
        log::info!(
            "{}: {} bytes, {:?} for {} iterations",
            report.codec,
            report.encoded_size,
            report.elapsed,
            iterations
        );
    }

    Ok(())
}
