//! Command line entry point for the block-packing simulator.

mod args;

use std::path::Path;

use anyhow::Context;
use blocksim_config::SimConfig;
use blocksim_csv_io::{read_records, write_results, write_summary, SummaryRow};
use blocksim_mempool::Mempool;
use blocksim_sim::Simulation;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::{parse_strategy, Args, SubcReport, SubcSimulate, Subcommand};

fn main() {
    init_logging();

    let args: Args = argh::from_env();
    let result = match args.subc {
        Subcommand::Simulate(subc) => exec_simulate(subc),
        Subcommand::Report(subc) => exec_report(subc),
    };
    if let Err(e) = result {
        eprintln!("ERROR\n{e:?}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().compact().with_env_filter(filter).init();
}

fn load_config(subc: &SubcSimulate) -> anyhow::Result<SimConfig> {
    let mut config = match &subc.config {
        Some(path) => SimConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimConfig::default(),
    };

    if let Some(v) = subc.block_interval_secs {
        config.block_interval_secs = v;
    }
    if let Some(v) = subc.gas_target {
        config.gas_target = v;
    }
    if let Some(v) = subc.gas_hard_cap {
        config.gas_hard_cap = v;
    }
    if let Some(v) = subc.max_extra_blocks {
        config.max_extra_blocks = v;
    }

    // Flag overrides can break the invariants a file-loaded config already
    // passed, so validate the final values.
    config.validate()?;
    Ok(config)
}

fn exec_simulate(subc: SubcSimulate) -> anyhow::Result<()> {
    let policy = parse_strategy(&subc.strategy)?;
    let config = load_config(&subc)?;

    let records = read_records(&subc.input)
        .with_context(|| format!("reading {}", subc.input.display()))?;
    let (pool, stats) = Mempool::load(&records, config.gas_hard_cap)?;
    info!(
        accepted = stats.accepted,
        dropped = stats.dropped(),
        strategy = %subc.strategy,
        "starting simulation"
    );

    let outcome = Simulation::new(pool, policy, config.clone()).run();
    write_results(&subc.output, &records, &outcome.blocks)
        .with_context(|| format!("writing {}", subc.output.display()))?;

    let summary = outcome.summary;
    info!(
        blocks = summary.blocks_built(),
        window_blocks = summary.window_blocks,
        overflow_blocks = summary.overflow_blocks,
        included = summary.included_txs,
        discarded = summary.discarded_txs,
        total_gas = summary.total_gas,
        total_reward = summary.total_reward,
        mean_utilization = summary.mean_utilization(config.gas_hard_cap),
        "simulation finished"
    );

    if let Some(path) = &subc.summary {
        let row = SummaryRow {
            strategy: subc.strategy.clone(),
            window_blocks: summary.window_blocks,
            overflow_blocks: summary.overflow_blocks,
            included_txs: summary.included_txs,
            discarded_txs: summary.discarded_txs,
            total_gas: summary.total_gas,
            total_reward: summary.total_reward,
            mean_gas_utilization: summary.mean_utilization(config.gas_hard_cap),
        };
        write_summary(path, &[row])
            .with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}

/// Aggregates recomputed from a result file's last-row block stamps.
struct ResultStats {
    blocks: usize,
    txs: usize,
    total_gas: u64,
    total_reward: u128,
}

fn scan_results(path: &Path) -> anyhow::Result<ResultStats> {
    let rows = read_records(path).with_context(|| format!("reading {}", path.display()))?;

    let mut stats = ResultStats {
        blocks: 0,
        txs: rows.len(),
        total_gas: 0,
        total_reward: 0,
    };
    for row in &rows {
        // Aggregates appear once per block, on its last row.
        if row.block_gas.is_empty() {
            continue;
        }
        stats.blocks += 1;
        stats.total_gas += row
            .block_gas
            .parse::<u64>()
            .with_context(|| format!("bad BlockGas '{}' in {}", row.block_gas, path.display()))?;
        stats.total_reward += row.block_reward.parse::<u128>().with_context(|| {
            format!("bad BlockReward '{}' in {}", row.block_reward, path.display())
        })?;
    }
    Ok(stats)
}

fn exec_report(subc: SubcReport) -> anyhow::Result<()> {
    anyhow::ensure!(
        !subc.results.is_empty(),
        "at least one result file is required"
    );

    println!(
        "{:<30} {:>8} {:>10} {:>14} {:>20} {:>12}",
        "run", "blocks", "txs", "total gas", "total reward", "utilization"
    );
    for path in &subc.results {
        let stats = scan_results(path)?;
        let utilization = if stats.blocks == 0 {
            0.0
        } else {
            stats.total_gas as f64 / (stats.blocks as f64 * subc.gas_hard_cap as f64)
        };
        println!(
            "{:<30} {:>8} {:>10} {:>14} {:>20} {:>11.1}%",
            path.display(),
            stats.blocks,
            stats.txs,
            stats.total_gas,
            stats.total_reward,
            utilization * 100.0
        );
    }
    Ok(())
}
