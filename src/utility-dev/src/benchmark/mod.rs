// Copyright 2023 atframework
// Licensed under the MIT licenses.

//! Criterion profilers. On unix every benchmark also writes a
//! `flamegraph.svg` next to its criterion report.

#[cfg(target_family = "unix")]
mod benchmark_flamegraph;

#[cfg(not(target_family = "unix"))]
mod benchmark_normal;

#[cfg(target_family = "unix")]
pub type BenchmarkProfiler<'a> = benchmark_flamegraph::FlamegraphProfiler<'a>;

#[cfg(not(target_family = "unix"))]
pub type BenchmarkProfiler = benchmark_normal::NormalProfiler;
