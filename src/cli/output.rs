//! Handles all user-facing output for the CLI.
//!
//! Diagnostics go to stderr so the transformed sources and JSON reports on
//! stdout stay machine-readable; diffs are colorized per line.

use difference::Changeset;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::diagnostics::Diagnostic;

/// Prints the pipeline's diagnostic list to stderr, color-coded by kind.
pub fn print_diagnostics(diags: &[Diagnostic]) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    for diag in diags {
        let color = match diag {
            Diagnostic::UnitStarted { .. } => ColorSpec::new().set_fg(Some(Color::Cyan)).clone(),
            _ => ColorSpec::new().set_fg(Some(Color::Yellow)).clone(),
        };
        let _ = stderr.set_color(&color);
        eprintln!("{}", diag);
        let _ = stderr.reset();
    }
}

/// Prints a colored before/after diff for one unit.
pub fn print_unit_diff(name: &str, before: &str, after: &str) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
    println!("--- {} ---", name);
    let _ = stdout.reset();

    let changeset = Changeset::new(before, after, "\n");
    print_diff(&mut stdout, &changeset.diffs);
    println!();
}

fn print_diff(stdout: &mut StandardStream, diffs: &[difference::Difference]) {
    for diff in diffs {
        match diff {
            difference::Difference::Same(ref x) => {
                let _ = stdout.reset();
                println!(" {}", x);
            }
            difference::Difference::Add(ref x) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                println!("+{}", x);
            }
            difference::Difference::Rem(ref x) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
                println!("-{}", x);
            }
        }
    }
}
