// Copyright 2023 atframework
// Licensed under the MIT licenses.

use std::io::Write;
use std::time::{Duration, Instant};

use serbench_protocol::{Codec, CodecKind, CodecRuntime, EncodeBuffer};

use super::config::BenchmarkConfigure;
use super::error::{BenchmarkError, BenchmarkResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub codec: CodecKind,
    pub encoded_size: usize,
    pub elapsed: Duration,
    /// xxh3 of the verified encoding
    pub digest: u64,
}

impl Report {
    #[inline]
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Runs the size and round trip benchmark of each codec and writes the
/// results to `output`.
pub struct Runner<W: Write> {
    runtime: &'static CodecRuntime,
    config: BenchmarkConfigure,
    output: W,
}

impl<W: Write> Runner<W> {
    pub fn new(runtime: &'static CodecRuntime, config: BenchmarkConfigure, output: W) -> Self {
        Runner {
            runtime,
            config,
            output,
        }
    }

    pub fn get_configure(&self) -> &BenchmarkConfigure {
        &self.config
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run every codec in [`CodecKind::ALL`] order, stopping at the first failure.
    pub fn run_all(&mut self, iterations: usize) -> BenchmarkResult<Vec<Report>> {
        writeln!(self.output, "performing {} iterations", iterations)?;
        writeln!(self.output)?;
        log::debug!(
            "raw payload size: {} bytes",
            self.config.shape.raw_payload_size()
        );

        let mut reports = Vec::with_capacity(CodecKind::ALL.len());
        for kind in CodecKind::ALL {
            reports.push(self.run(kind, iterations)?);
        }

        Ok(reports)
    }

    pub fn run(&mut self, kind: CodecKind, iterations: usize) -> BenchmarkResult<Report> {
        match kind {
            CodecKind::Thrift => {
                let codec = self.runtime.thrift_codec();
                self.run_codec(&codec, iterations)
            }
            CodecKind::Protobuf => {
                let codec = self.runtime.protobuf_codec();
                self.run_codec(&codec, iterations)
            }
        }
    }

    pub fn run_codec<C: Codec>(&mut self, codec: &C, iterations: usize) -> BenchmarkResult<Report> {
        let kind = codec.kind();
        log::info!("{}: start {} iterations", kind, iterations);

        let shape = &self.config.shape;
        let r1 = codec.make_record(shape.ids(), shape.strings());
        let mut buffer = EncodeBuffer::with_capacity(self.config.buffer_capacity);
        codec.encode(&r1, &mut buffer)?;

        // check if we can decode back
        let mut r2 = C::Record::default();
        codec
            .decode(buffer.as_slice(), &mut r2)
            .map_err(|e| BenchmarkError::decode_failed(kind, e))?;
        if r1 != r2 {
            return Err(BenchmarkError::record_mismatch(kind));
        }

        let encoded_size = buffer.len();
        let digest = serbench_protocol::digest(buffer.as_slice());
        log::debug!("{}: encoded {} bytes, xxh3 {:016x}", kind, encoded_size, digest);
        writeln!(self.output, "{}: size = {} bytes", kind, encoded_size)?;

        let start = Instant::now();
        for _ in 0..iterations {
            buffer.reset();
            codec.encode(&r1, &mut buffer)?;
            codec
                .decode(buffer.as_slice(), &mut r2)
                .map_err(|e| BenchmarkError::decode_failed(kind, e))?;
        }
        let elapsed = start.elapsed();

        let report = Report {
            codec: kind,
            encoded_size,
            elapsed,
            digest,
        };
        writeln!(
            self.output,
            "{}: time = {} milliseconds",
            kind,
            report.elapsed_millis()
        )?;
        writeln!(self.output)?;
        self.output.flush()?;

        Ok(report)
    }
}
