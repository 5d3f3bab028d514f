use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use fencer::io::svg::layout_to_svg;
use fencer::io::{export, import};
use fencer::placement::Planner;
use fencer_cli::config::FencerCliConfig;
use fencer_cli::io::cli::Cli;
use fencer_cli::io::output::FenceOutput;
use fencer_cli::{EPOCH, io, replay_through_session};
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FencerCliConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed FencerCliConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no usable name")?;

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!("could not create output folder: {:?}", args.output_folder)
        })?;
    }

    let ext_fence = io::read_fence(args.input_file.as_path())?;
    let mut instance = import::import_fence(&ext_fence)?;
    if let Some(session_config) = config.session {
        instance.polyline = replay_through_session(&instance, session_config)?;
    }

    let start = EPOCH.elapsed();
    let layout = Planner::new(config.planner).plan_layout(
        &instance.polyline,
        &instance.element,
        instance.surface.as_ref(),
    )?;
    let run_time = EPOCH.elapsed() - start;

    {
        let output = FenceOutput {
            fence: ext_fence,
            plan: export::export_plan(
                &layout,
                &instance.element,
                &config.planner.heading_reference,
            ),
            config,
            run_time_ms: run_time.as_millis() as u64,
        };

        let plan_path = args.output_folder.join(format!("plan_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&plan_path))?;
    }

    {
        let svg_path = args.output_folder.join(format!("plan_{input_file_stem}.svg"));
        let svg = layout_to_svg(
            &layout,
            &instance.polyline,
            &instance.element,
            &config.planner.heading_reference,
            config.svg_draw_options,
            &instance.name,
        );

        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
