use std::error::Error as _;
use std::process::ExitCode;

use clap::Parser;
use viewsampler::{pipeline, Cli, PreviewRenderer, Result, ViewRequests, ViewSequence};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match try_main(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            let mut source = err.source();
            while let Some(cause) = source {
                log::error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<()> {
    let dry_run = cli.dry_run;
    let config = cli.into_config()?;
    let strategy = pipeline::plan(&config)?;
    let prepared = pipeline::prepare_scene(&config)?;

    if dry_run {
        for request in ViewRequests::new(&strategy, prepared.bounds) {
            let request = request?;
            println!("{}\t{}", request.file_name, request.camera.position);
        }
        println!("{} views ({})", strategy.len(), strategy.name());
        return Ok(());
    }

    let mut backend = PreviewRenderer::new();
    let summary = pipeline::run_prepared(&config, &strategy, &prepared, &mut backend)?;
    println!(
        "{} views written to {}",
        summary.rendered,
        summary.output_dir.display()
    );
    Ok(())
}
