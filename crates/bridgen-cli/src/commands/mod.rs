pub mod check;
pub mod generate;


use std::path::{Path, PathBuf};

use bridgen_ast::File;
use bridgen_engine::{DiagnosticKind, Diagnostics, ExportConfig, Exporter};

use crate::manifest;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub(crate) struct Outcome {
    /// Generated files with the source locations they depend on.
    pub files: Vec<(File, Vec<String>)>,
    pub diagnostics: Diagnostics,
}

/// Runs the whole pipeline over one manifest. Every failure past manifest
/// JSON parsing is local to one declaration.
pub(crate) fn process(manifest_path: &Path, erase_package: bool) -> Result<Outcome, CliError> {
    let text = std::fs::read_to_string(manifest_path).map_err(|source| CliError::Read {
        path: manifest_path.to_path_buf(),
        source,
    })?;
    let origin = manifest_path.display().to_string();
    let (manifest, mut diagnostics) =
        manifest::parse(&text, &origin).map_err(|source| CliError::Manifest {
            path: manifest_path.to_path_buf(),
            source,
        })?;

    let exporter = Exporter::new(ExportConfig { erase_package });
    let mut files = Vec::new();

    for request in &manifest.requests {
        let (file, request_diagnostics) = match &request.type_arguments {
            Some(arguments) => {
                match exporter.export_instantiated(
                    &request.descriptor,
                    arguments,
                    request.export_name.as_deref(),
                ) {
                    Ok(result) => result,
                    Err(err) => {
                        diagnostics
                            .report(DiagnosticKind::GenericArityMismatch, err.to_string())
                            .at(request.descriptor.location().clone())
                            .emit();
                        continue;
                    }
                }
            }
            None => exporter.export(&request.descriptor),
        };
        diagnostics.extend(request_diagnostics);
        if let Some(file) = file {
            files.push((file, request.sources.clone()));
        }
    }

    Ok(Outcome { files, diagnostics })
}

/// `<out>/<package-as-path>/<Name>.kt`
pub(crate) fn output_path(out: &Path, file: &File) -> PathBuf {
    let mut path = out.to_path_buf();
    if !file.package.is_empty() {
        for segment in file.package.split('.') {
            path.push(segment);
        }
    }
    path.push(format!("{}.kt", file.name));
    path
}
