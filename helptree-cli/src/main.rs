//! helptree binary: walk a decision-tree graph file or validate it.
//!
//! Subcommands: `run` (interactive walk, default when a file is given),
//! `check` (parse + integrity validation).

mod logging;
mod repl;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use helptree_cli::{check_graph, load_graph};

#[derive(Parser, Debug)]
#[command(name = "helptree")]
#[command(about = "helptree — walk a decision-tree graph from the command line")]
struct Args {
    #[command(subcommand)]
    cmd: Option<Command>,

    /// Graph file (.json, .yaml, .yml) when no subcommand is given
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Walk the graph interactively
    Run(FileArg),
    /// Parse the graph file and validate referential integrity
    Check(FileArg),
}

#[derive(clap::Args, Debug, Clone)]
struct FileArg {
    /// Graph file (.json, .yaml, .yml)
    file: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    logging::init()?;

    let args = Args::parse();
    let (check, file) = match (args.cmd, args.file) {
        (Some(Command::Run(f)), _) => (false, f.file),
        (Some(Command::Check(f)), _) => (true, f.file),
        (None, Some(file)) => (false, file),
        (None, None) => {
            eprintln!("helptree: provide a graph file or a subcommand (run/check)");
            std::process::exit(1);
        }
    };

    if check {
        match check_graph(&file) {
            Ok(graph) => {
                println!(
                    "ok: {} nodes, root {:?}",
                    graph.nodes.len(),
                    graph.root_id
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    } else {
        let graph = match load_graph(&file) {
            Ok(graph) => graph,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };
        repl::run_walk(graph)
    }
}
