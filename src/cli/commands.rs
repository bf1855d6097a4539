use crate::cli::args::{Cli, Commands};
use crate::cli::logging::init_logging;
use crate::error::Result;
use crate::processors::{CoverageChecker, Pipeline, PipelineOutcome};
use crate::settings::PipelineConfig;
use crate::writers::OutputLabels;

pub fn run(cli: Cli) -> Result<()> {
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    let config = PipelineConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Rank {
            input,
            output_ranking,
            output_map,
            top,
        } => {
            let mut config = input.apply(config);
            if let Some(path) = output_ranking {
                config = config.with_output_ranking(path);
            }
            if let Some(path) = output_map {
                config = config.with_output_map(path);
            }
            if let Some(top) = top {
                config = config.with_top_n(top);
            }
            config.check()?;

            let labels = OutputLabels::new(&config.pollutant, &config.winter_months);
            println!("Ranking cities by {}...", labels.value_label());
            let pipeline = Pipeline::new(config).with_silent(cli.quiet);
            let outcome = pipeline.run()?;

            println!("\n{}", CoverageChecker::new().generate_summary(&outcome.coverage));

            pipeline.write_outputs(&outcome)?;
            print_summary(&outcome, pipeline.config());
        }

        Commands::Inspect { input } => {
            let config = input.apply(config);
            config.check()?;

            let pipeline = Pipeline::new(config).with_silent(cli.quiet);
            let inputs = pipeline.load_inputs()?;

            println!("Data files: {}", inputs.files.len());
            for path in &inputs.files {
                println!("  • {}", path.display());
            }
            println!("Stations in metadata: {}", inputs.stations.len());
            println!("Tracked stations: {}", inputs.dataset.station_count());

            let checker = CoverageChecker::new();
            let report = checker.check_coverage(&inputs.dataset, &inputs.stations);
            println!("\n{}", checker.generate_summary(&report));
        }
    }

    Ok(())
}

fn print_summary(outcome: &PipelineOutcome, config: &PipelineConfig) {
    let analysis = &outcome.analysis;

    println!(
        "Collected {} in-scope hours across {} stations",
        outcome.hours,
        analysis.station_statistics.len()
    );
    println!("Gap-filled readings: {}", analysis.filled_slots);

    let undefined: Vec<&str> = analysis
        .undefined_stations()
        .map(|s| s.code.as_str())
        .collect();
    if !undefined.is_empty() {
        println!(
            "Stations without data (excluded): {} [{}]",
            undefined.len(),
            undefined.join(", ")
        );
    }

    println!("Cities ranked: {}", analysis.ranking.len());
    println!("Ranking saved to {}", config.output_ranking.display());
    println!("Map saved to {}", config.output_map.display());

    if analysis.ranking.is_empty() {
        println!("No city has any in-scope reading");
        return;
    }

    println!("\nTop {}:", config.top_n.min(analysis.ranking.len()));
    for entry in analysis.ranking.iter().take(config.top_n) {
        println!(
            "{}. {} - 平均{}: {:.2}",
            entry.rank, entry.city, config.pollutant, entry.value
        );
    }
}
