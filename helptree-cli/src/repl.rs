//! Interactive walk: print the active prompt and options, read the choice,
//! repeat until a leaf, a quit, or EOF.
//!
//! The loop is the presentation adapter for a terminal: numbered options for
//! a non-terminal node, the outcome for a leaf, a fallback line for a
//! missing node. `r`/`restart` resets the walk to the root; `q`/`quit`
//! exits.

use std::io::{BufRead, Write};

use helptree::{Edge, Graph, Session, View};

use helptree_cli::render_prompt;

enum Input {
    Choice(usize),
    Restart,
    Quit,
    Invalid,
}

fn parse_input(line: &str, option_count: usize) -> Input {
    let trimmed = line.trim().to_lowercase();
    match trimmed.as_str() {
        "q" | "quit" | "exit" => return Input::Quit,
        "r" | "restart" => return Input::Restart,
        _ => {}
    }
    match trimmed.parse::<usize>() {
        Ok(n) if n >= 1 && n <= option_count => Input::Choice(n - 1),
        _ => Input::Invalid,
    }
}

fn print_options(options: &[Edge]) {
    for (i, edge) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, edge.label);
    }
}

/// Runs the interactive walk over `graph`. Exits on quit, EOF, or when the
/// user declines to restart after an outcome.
pub fn run_walk(graph: Graph) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(graph);
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    let mut step = session.evaluate();
    loop {
        match step.view {
            View::Prompt {
                ref prompt,
                ref options,
                ..
            } => {
                println!("{}", render_prompt(prompt));
                print_options(options);
                print!("> ");
                std::io::stdout().flush()?;

                let line = match lines.next() {
                    None => break,
                    Some(line) => line?,
                };
                match parse_input(&line, options.len()) {
                    Input::Quit => break,
                    Input::Restart => step = session.reset(),
                    Input::Choice(i) => {
                        let target = options[i].target.clone();
                        step = session.select_edge(&target)?;
                    }
                    Input::Invalid => {
                        println!("Enter an option number, r to restart, or q to quit.");
                        // Re-evaluate so the prompt is shown again.
                        step = session.evaluate();
                    }
                }
            }
            View::Terminal {
                ref prompt,
                ref value,
                ..
            } => {
                println!("{}", render_prompt(prompt));
                if !value.is_null() {
                    println!("Outcome: {}", value);
                }
                print!("r to restart, anything else to quit > ");
                std::io::stdout().flush()?;

                let line = match lines.next() {
                    None => break,
                    Some(line) => line?,
                };
                if line.trim().eq_ignore_ascii_case("r") {
                    step = session.reset();
                } else {
                    break;
                }
            }
            View::Missing { ref node_id } => {
                println!("No such step: {} (the graph may be malformed)", node_id);
                print!("r to restart, anything else to quit > ");
                std::io::stdout().flush()?;

                let line = match lines.next() {
                    None => break,
                    Some(line) => line?,
                };
                if line.trim().eq_ignore_ascii_case("r") {
                    step = session.reset();
                } else {
                    break;
                }
            }
        }
    }

    println!("Bye.");
    Ok(())
}
