use crate::args::{ArgumentParseError, Arguments};
use base::error::CreateError;
use log::{debug, error, info};
use std::fs::File;
use std::io::{stdin, stdout, BufRead, BufReader, Write};
use std::process::ExitCode;
use thiserror::Error;
use topk::{BoundedMinHeap, Node};

mod args;
mod read;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Arguments(#[from] ArgumentParseError),
    #[error(transparent)]
    Create(#[from] CreateError),
    #[error("failed to read the input: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode the output: {0}")]
    Json(#[from] serde_json::Error),
}

fn run(args: &Arguments) -> Result<(), CliError> {
    let options = args.get_heap_options()?;
    debug!("heap options: {options:?}");
    let mut heap = BoundedMinHeap::with_options(&options)?;
    let reader: Box<dyn BufRead> = match &args.file {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(stdin().lock()),
    };
    let stats = read::feed(reader, &mut heap)?;
    info!(
        "kept {} of {} records ({} malformed lines skipped)",
        heap.len(),
        stats.records,
        stats.malformed
    );
    let records = heap.into_sorted_vec();
    let mut out = stdout().lock();
    if args.json {
        serde_json::to_writer(&mut out, &records)?;
        writeln!(out)?;
    } else {
        for Node { value, payload } in &records {
            if payload.is_empty() {
                writeln!(out, "{value}")?;
            } else {
                writeln!(out, "{value}\t{payload}")?;
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Arguments = argh::from_env();
    let mut log_builder = env_logger::builder();
    if args.verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();
    debug!("arguments: {args:#?}");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
