// Copyright 2023 atframework
// Licensed under the MIT licenses.

use std::fs::{self, File};
use std::os::raw::c_int;
use std::path::Path;

use criterion::profiler::Profiler;
use pprof::ProfilerGuard;

pub struct FlamegraphProfiler<'a> {
    frequency: c_int,
    active_profiler: Option<ProfilerGuard<'a>>,
}

impl<'a> FlamegraphProfiler<'a> {
    pub fn new(frequency: c_int) -> Self {
        FlamegraphProfiler {
            frequency,
            active_profiler: None,
        }
    }
}

impl<'a> Profiler for FlamegraphProfiler<'a> {
    fn start_profiling(&mut self, benchmark_id: &str, _benchmark_dir: &Path) {
        match ProfilerGuard::new(self.frequency) {
            Ok(guard) => self.active_profiler = Some(guard),
            Err(e) => log::error!("start profiling {} failed: {}", benchmark_id, e),
        }
    }

    fn stop_profiling(&mut self, benchmark_id: &str, benchmark_dir: &Path) {
        let profiler = match self.active_profiler.take() {
            Some(p) => p,
            None => return,
        };

        if let Err(e) = fs::create_dir_all(benchmark_dir) {
            log::error!("create {} failed: {}", benchmark_dir.display(), e);
            return;
        }

        let flamegraph_path = benchmark_dir.join("flamegraph.svg");
        let report = match profiler.report().build() {
            Ok(r) => r,
            Err(e) => {
                log::error!("build profiling report of {} failed: {}", benchmark_id, e);
                return;
            }
        };

        let result = File::create(&flamegraph_path)
            .map_err(|e| e.to_string())
            .and_then(|file| report.flamegraph(file).map_err(|e| e.to_string()));
        match result {
            Ok(_) => log::info!("{} written", flamegraph_path.display()),
            Err(e) => log::error!("write {} failed: {}", flamegraph_path.display(), e),
        }
    }
}
