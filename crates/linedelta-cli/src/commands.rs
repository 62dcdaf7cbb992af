use anyhow::{bail, Context};
use colored::Colorize;
use serde_json::json;

use linedelta_sdk::{compare_batch, pair_directories, Comparator, LinedeltaConfig};
use linedelta_types::DiffSummary;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    match cli.command {
        Command::Diff(args) => cmd_diff(config, args, &cli.format),
        Command::Summary(args) => cmd_summary(config, args, &cli.format),
        Command::Batch(args) => cmd_batch(config, args, &cli.format),
        Command::Config => cmd_config(&config),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<LinedeltaConfig> {
    match &cli.config {
        Some(path) => LinedeltaConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(LinedeltaConfig::default()),
    }
}

fn cmd_diff(config: LinedeltaConfig, args: PairArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let mut comparator = Comparator::new(config);
    let comparison = comparator
        .compare_files(&args.before, &args.after)
        .with_context(|| format!("cannot compare {} and {}", args.before.display(), args.after.display()))?;
    match format {
        OutputFormat::Text => print!("{}", comparator.render(&comparison.report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&comparison)?),
    }
    Ok(())
}

fn cmd_summary(config: LinedeltaConfig, args: PairArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let mut comparator = Comparator::new(config);
    let comparison = comparator
        .compare_files(&args.before, &args.after)
        .with_context(|| format!("cannot compare {} and {}", args.before.display(), args.after.display()))?;
    match format {
        OutputFormat::Text => println!("{}", comparator.summary_line(&comparison.summary)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&comparison.summary)?),
    }
    Ok(())
}

fn cmd_batch(config: LinedeltaConfig, args: BatchArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let pairing = pair_directories(&args.before_dir, &args.after_dir)?;
    let parallel = config.batch.parallel && !args.sequential;
    let results = compare_batch(&pairing.pairs, parallel);
    let comparator = Comparator::new(config);

    let mut total = DiffSummary::default();
    let mut failed = 0usize;
    match format {
        OutputFormat::Text => {
            for (pair, result) in pairing.pairs.iter().zip(&results) {
                match result {
                    Ok(c) if c.is_identical() => {
                        println!("  {} {}", pair.name, comparator.summary_line(&c.summary).dimmed());
                    }
                    Ok(c) => {
                        total += c.summary;
                        println!("  {} {}", pair.name.bold(), comparator.summary_line(&c.summary).yellow());
                    }
                    Err(e) => {
                        failed += 1;
                        eprintln!("  {} {}: {}", "✗".red().bold(), pair.name, e);
                    }
                }
            }
            for name in &pairing.only_before {
                println!("  {} {}", "removed:".red(), name);
            }
            for name in &pairing.only_after {
                println!("  {} {}", "added:".green(), name);
            }
            println!("{}", comparator.summary_line(&total).bold());
        }
        OutputFormat::Json => {
            let mut entries = Vec::with_capacity(results.len());
            for (pair, result) in pairing.pairs.iter().zip(&results) {
                match result {
                    Ok(c) => {
                        total += c.summary;
                        entries.push(json!({ "name": pair.name, "comparison": c }));
                    }
                    Err(e) => {
                        failed += 1;
                        entries.push(json!({ "name": pair.name, "error": e.to_string() }));
                    }
                }
            }
            let doc = json!({
                "files": entries,
                "only_before": pairing.only_before,
                "only_after": pairing.only_after,
                "total": total,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }

    if failed > 0 {
        bail!("{failed} of {} comparisons failed", results.len());
    }
    Ok(())
}

fn cmd_config(config: &LinedeltaConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
