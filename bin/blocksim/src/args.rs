//! Command line arguments for the `blocksim` binary.

use std::path::PathBuf;

use argh::FromArgs;
use blocksim_block_assembly::SelectionPolicy;

/// Mempool block-packing simulator.
#[derive(FromArgs, PartialEq, Debug)]
pub(crate) struct Args {
    #[argh(subcommand)]
    pub(crate) subc: Subcommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub(crate) enum Subcommand {
    Simulate(SubcSimulate),
    Report(SubcReport),
}

/// Run one packing simulation over a mempool snapshot.
#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "simulate",
    description = "packs a mempool snapshot into blocks and writes the result CSV"
)]
pub(crate) struct SubcSimulate {
    #[argh(option, description = "input mempool snapshot CSV", short = 'i')]
    pub(crate) input: PathBuf,

    #[argh(option, description = "output results CSV", short = 'o')]
    pub(crate) output: PathBuf,

    #[argh(
        option,
        description = "selection strategy [priority, arrival]",
        short = 's',
        default = "\"priority\".to_owned()"
    )]
    pub(crate) strategy: String,

    #[argh(option, description = "TOML config file (defaults apply if omitted)", short = 'c')]
    pub(crate) config: Option<PathBuf>,

    #[argh(option, description = "override: window length in simulated seconds")]
    pub(crate) block_interval_secs: Option<u64>,

    #[argh(option, description = "override: soft gas target per block")]
    pub(crate) gas_target: Option<u64>,

    #[argh(option, description = "override: hard gas cap per block")]
    pub(crate) gas_hard_cap: Option<u64>,

    #[argh(option, description = "override: max overflow blocks after the windowed phase")]
    pub(crate) max_extra_blocks: Option<usize>,

    #[argh(option, description = "also write a one-row aggregate summary CSV")]
    pub(crate) summary: Option<PathBuf>,
}

/// Compare two result files produced by `simulate`.
#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "report",
    description = "prints aggregate metrics for one or two result CSVs"
)]
pub(crate) struct SubcReport {
    #[argh(positional, description = "result CSV from a simulate run")]
    pub(crate) results: Vec<PathBuf>,

    #[argh(
        option,
        description = "hard gas cap the runs used, for utilization",
        default = "60_000_000"
    )]
    pub(crate) gas_hard_cap: u64,
}

pub(crate) fn parse_strategy(raw: &str) -> anyhow::Result<SelectionPolicy> {
    match raw {
        "priority" => Ok(SelectionPolicy::PriorityFee),
        "arrival" => Ok(SelectionPolicy::ArrivalOrder),
        other => anyhow::bail!("unknown strategy '{other}', expected 'priority' or 'arrival'"),
    }
}
