pub mod commands;
pub mod parser;

pub use parser::Cli;

use crate::utils::error::Result;

pub fn execute_command(cli: Cli) -> Result<()> {
    commands::sweep::execute(cli)
}
