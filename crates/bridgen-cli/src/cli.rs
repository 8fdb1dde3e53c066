use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bridgen", bin_name = "bridgen")]
#[command(about = "Generates JS-friendly facade declarations from a declaration manifest")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate facade sources from a manifest
    #[command(after_help = r#"EXAMPLES:
  bridgen generate -m declarations.json -o build/generated
  bridgen generate -m declarations.json -o build/generated --erase-package"#)]
    Generate {
        /// Declaration manifest produced by the discovery tool
        #[arg(long, short = 'm', value_name = "FILE")]
        manifest: PathBuf,

        /// Output directory for generated sources
        #[arg(long, short = 'o', value_name = "DIR")]
        out: PathBuf,

        /// Flatten facades into a single namespace
        #[arg(long)]
        erase_package: bool,
    },

    /// Validate a manifest and report diagnostics without writing anything
    Check {
        /// Declaration manifest produced by the discovery tool
        #[arg(long, short = 'm', value_name = "FILE")]
        manifest: PathBuf,

        /// Flatten facades into a single namespace
        #[arg(long)]
        erase_package: bool,
    },
}
