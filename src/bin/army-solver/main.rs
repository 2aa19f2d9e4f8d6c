//! army-solver - maximum-value non-attacking army on the standard board
//!
//! Prints every improved board as the search finds it, followed by the final
//! best board. The board size and piece values are fixed.
//!
//! Usage: army-solver [--quiet] [--bounds] [--no-pruning] [--perf]

use army_solver::{format_score, set_show_perf, Board, PrintReporter, Solution, Solver};
use clap::Parser;

#[derive(Parser)]
#[command(name = "army-solver")]
#[command(about = "Maximum-value placement of mutually non-attacking knights, bishops, rooks and kings")]
#[command(version)]
struct Args {
    /// Only print the final board, not every improvement
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Print the suffix bound table after solving
    #[arg(short = 'b', long = "bounds")]
    bounds: bool,

    /// Disable bound pruning (debugging; very slow on the full board)
    #[arg(short = 'P', long = "no-pruning")]
    no_pruning: bool,

    /// Show node count and timing on stderr
    #[arg(short = 'V', long = "perf")]
    perf: bool,
}

fn main() {
    let args = Args::parse();

    if args.perf {
        set_show_perf(true);
    }

    let solver = Solver::standard().with_pruning(!args.no_pruning);
    let solution = if args.quiet {
        solver.solve()
    } else {
        solver.solve_with_reporter(&mut PrintReporter)
    };

    print_final(&solution.board);

    if args.bounds {
        print_bounds(&solution);
    }
}

/// Print the best board with its score
fn print_final(board: &Board) {
    println!("Best:");
    println!("{}", board);
    println!("{}", format_score(board.score()));
}

/// Print the bound table one board row per line
fn print_bounds(solution: &Solution) {
    let dims = solution.board.dims();
    println!();
    println!("Suffix bounds:");
    for row in 0..dims.height() {
        let line: Vec<String> = (0..dims.width())
            .map(|column| format!("{:4}", solution.bounds[dims.index_of(row, column)]))
            .collect();
        println!("{}", line.join(""));
    }
}
