use clap::Parser;

use branch_sweep::cli::{execute_command, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = execute_command(cli) {
        eprintln!("branch-sweep: {}", e);
        std::process::exit(1);
    }
}
