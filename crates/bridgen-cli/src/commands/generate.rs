use std::path::Path;

use crate::commands::{CliError, output_path, process};

pub fn run(manifest: &Path, out: &Path, erase_package: bool) -> i32 {
    match execute(manifest, out, erase_package) {
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

fn execute(manifest: &Path, out: &Path, erase_package: bool) -> Result<bool, CliError> {
    let outcome = process(manifest, erase_package)?;

    for (file, sources) in &outcome.files {
        let path = output_path(out, file);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| CliError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&path, file.render()).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;

        if sources.is_empty() {
            println!("{}", path.display());
        } else {
            println!("{} <- {}", path.display(), sources.join(", "));
        }
    }

    eprint!("{}", outcome.diagnostics.render());
    Ok(outcome.diagnostics.has_errors())
}
