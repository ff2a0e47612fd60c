use clap::Parser;

use schedsim::cli::Cli;
use schedsim::serializer::RunResult;
use schedsim::{engine, loader, metrics};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> schedsim::Result<()> {
    let cli = Cli::parse();
    let config = cli.algorithm_config()?;

    let mut processes = loader::load(&cli.input)?;
    log::info!("loaded {} processes from {}", processes.len(), cli.input.display());

    let timeline = engine::run(&mut processes, &config, cli.context_switch)?;
    let metrics = metrics::compute(&processes);

    let result = RunResult { timeline: timeline.into_segments(), metrics };
    let out = cli.output_path();
    result.write_to_file(&out)?;
    log::info!("wrote result to {}", out.display());

    Ok(())
}
