// Copyright 2023 atframework
// Licensed under the MIT licenses.

extern crate env_logger;
extern crate log;
extern crate serbench;

use std::io;
use std::process::ExitCode;

use clap::Parser;

use serbench::cli::{self, Args};

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let stdout = io::stdout();
    match cli::execute(&args, stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:?}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
