use std::path::Path;

use crate::commands::{CliError, process};

pub fn run(manifest: &Path, erase_package: bool) -> i32 {
    match execute(manifest, erase_package) {
        Ok(had_errors) => {
            if had_errors {
                1
            } else {
                0
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

fn execute(manifest: &Path, erase_package: bool) -> Result<bool, CliError> {
    let outcome = process(manifest, erase_package)?;
    eprint!("{}", outcome.diagnostics.render());
    println!(
        "{} declaration(s) ready, {} error(s)",
        outcome.files.len(),
        outcome.diagnostics.error_count()
    );
    Ok(outcome.diagnostics.has_errors())
}
