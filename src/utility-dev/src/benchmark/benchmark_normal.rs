// Copyright 2023 atframework
// Licensed under the MIT licenses.

use std::path::Path;

use criterion::profiler::Profiler;

/// Profiler placeholder for platforms without pprof, only logs the benchmark boundaries.
pub struct NormalProfiler {
    frequency: i32,
}

impl NormalProfiler {
    pub fn new(frequency: i32) -> Self {
        NormalProfiler { frequency }
    }
}

impl Profiler for NormalProfiler {
    fn start_profiling(&mut self, benchmark_id: &str, _benchmark_dir: &Path) {
        log::debug!(
            "profiling of {} not available, frequency {} ignored",
            benchmark_id,
            self.frequency
        );
    }

    fn stop_profiling(&mut self, benchmark_id: &str, _benchmark_dir: &Path) {
        log::debug!("{} finished", benchmark_id);
    }
}
