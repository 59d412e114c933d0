//! postport: hoist an exported blog post's title into front matter.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use postport::{config, pipeline};
use std::io;
use std::path::Path;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "postport", version)]
#[command(about = "Convert an exported blog post into a front-matter page", long_about = None)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cfg = config::Config::load();
    let stdout = io::stdout();

    match pipeline::convert(
        Path::new(config::INPUT_PATH),
        Path::new(config::OUTPUT_PATH),
        &cfg,
        &mut stdout.lock(),
    ) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
