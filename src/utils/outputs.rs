use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::utils::error::Result;

/// Emit a key/value output for the CI host.
///
/// Newer runners publish a `GITHUB_OUTPUT` file to append to; older ones
/// read the `::set-output` workflow command from stdout.
pub fn emit(name: &str, value: &str) -> Result<()> {
    match env::var_os("GITHUB_OUTPUT") {
        Some(path) => append_file_output(Path::new(&path), name, value),
        None => {
            println!("::set-output name={}::{}", name, value);
            Ok(())
        }
    }
}

fn append_file_output(path: &Path, name: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}={}", name, value)?;
    Ok(())
}

/// Branch lists are published as `[a,b,c]`.
pub fn format_branch_list(branches: &[String]) -> String {
    format!("[{}]", branches.join(","))
}
