use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use fencer::io::ext_repr::ExtFence;
use log::{LevelFilter, info};
use serde::Serialize;
use svg::Document;

use crate::EPOCH;

pub mod cli;
pub mod output;

pub fn read_fence(path: &Path) -> Result<ExtFence> {
    let file = File::open(path).context("could not open fence file")?;
    let reader = BufReader::new(file);
    let ext_fence = serde_json::from_reader(reader).context("not a valid fence file")?;
    Ok(ext_fence)
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)?;
    info!(
        "[IO] plan written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)?;
    info!(
        "[IO] svg written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{:<27}{}", prefix, message))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}
