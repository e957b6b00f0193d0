use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cribcargo::solver::ScoreTable;
use cribcargo::{parse_deal, solve, PlayState, Solver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TableOpt {
    /// Flat array over the whole key space (~10 GiB, fastest).
    Dense,
    /// Hash map of visited keys only.
    Sparse,
}

#[derive(Debug, Parser)]
#[command(
    name = "cribcargo",
    about = "Optimal cribbage play-phase score for a fixed four-pile deal"
)]
struct Args {
    /// Deal file: 52 whitespace-separated rank tokens (A,2..10,J,Q,K), four
    /// piles of 13, each listed top to bottom. Reads stdin when omitted.
    #[arg(long)]
    deal: Option<PathBuf>,

    /// Memo table backing.
    #[arg(long, value_enum, default_value_t = TableOpt::Dense)]
    table: TableOpt,

    /// Emit the outcome as JSON instead of the human-readable trace.
    #[arg(long)]
    json: bool,
}

fn read_input(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let input = read_input(args.deal.as_ref()).map_err(|e| format!("deal read error: {e}"))?;
    let deal = parse_deal(&input).map_err(|e| format!("deal error: {e}"))?;
    eprintln!("[solve] deal parsed, solving with {:?} table", args.table);

    let outcome = match args.table {
        TableOpt::Dense => solve(&deal)?,
        TableOpt::Sparse => {
            let mut solver = Solver::new_sparse(&deal);
            let outcome = solver.solve_from(&PlayState::new())?;
            eprintln!("[solve] {} states memoized", solver.table().len());
            outcome
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("Best possible score: {}", outcome.best_score);
        for event in &outcome.log {
            println!("{event}");
        }
    }

    Ok(())
}
