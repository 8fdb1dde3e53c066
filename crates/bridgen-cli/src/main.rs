mod cli;
mod commands;
mod manifest;

#[cfg(test)]
mod manifest_tests;

use clap::Parser;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    let code = match cli.command {
        Command::Generate {
            manifest,
            out,
            erase_package,
        } => commands::generate::run(&manifest, &out, erase_package),
        Command::Check {
            manifest,
            erase_package,
        } => commands::check::run(&manifest, erase_package),
    };
    std::process::exit(code);
}
