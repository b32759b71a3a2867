//! The protomig command-line interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::path::Path;
use std::{fs, process};

use clap::Parser;

use crate::cli::args::{Command, DialectArgs, ProtomigArgs};
use crate::discovery::UnitDiscoverer;
use crate::errors::MigrationError;
use crate::pipeline::{Migration, MigrationOptions, MigrationReport};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = ProtomigArgs::parse();

    let result = match args.command {
        Command::Migrate {
            path,
            out_dir,
            dialect,
        } => handle_migrate(&path, out_dir.as_deref(), dialect),
        Command::Diff { path, dialect } => handle_diff(&path, dialect),
        Command::Report { path, dialect } => handle_report(&path, dialect),
    };

    if let Err(e) = result {
        eprintln!("{:?}", miette::Report::new(e));
        process::exit(1);
    }
}

fn migrate_tree(path: &Path, dialect: DialectArgs) -> Result<MigrationReport, MigrationError> {
    let units = UnitDiscoverer::load_units(path)?;
    let migration = Migration::new(MigrationOptions {
        namespace: dialect.namespace,
        root_unit: dialect.root_unit,
    });
    Ok(migration.run(&units))
}

fn handle_migrate(
    path: &Path,
    out_dir: Option<&Path>,
    dialect: DialectArgs,
) -> Result<(), MigrationError> {
    let report = migrate_tree(path, dialect)?;
    output::print_diagnostics(&report.diagnostics);

    match out_dir {
        Some(dir) => {
            fs::create_dir_all(dir).map_err(|e| MigrationError::OutputFailed {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;
            for unit in &report.outputs {
                let dest = dir.join(format!("{}.js", unit.name));
                fs::write(&dest, &unit.text).map_err(|e| MigrationError::OutputFailed {
                    path: dest.display().to_string(),
                    reason: e.to_string(),
                })?;
            }
        }
        None => {
            for unit in &report.outputs {
                println!("// {}.js", unit.name);
                print!("{}", unit.text);
                println!();
            }
        }
    }
    Ok(())
}

fn handle_diff(path: &Path, dialect: DialectArgs) -> Result<(), MigrationError> {
    let units = UnitDiscoverer::load_units(path)?;
    let migration = Migration::new(MigrationOptions {
        namespace: dialect.namespace,
        root_unit: dialect.root_unit,
    });
    let report = migration.run(&units);
    output::print_diagnostics(&report.diagnostics);
    for (before, after) in units.iter().zip(&report.outputs) {
        output::print_unit_diff(&before.name, &before.text, &after.text);
    }
    Ok(())
}

fn handle_report(path: &Path, dialect: DialectArgs) -> Result<(), MigrationError> {
    let report = migrate_tree(path, dialect)?;
    output::print_diagnostics(&report.diagnostics);
    let json = serde_json::to_string_pretty(&report.model).expect("model serializes");
    println!("{}", json);
    Ok(())
}
