//! Class assembly: the final pipeline step.
//!
//! A single forward sweep over the fully rewritten unit, expressed as an
//! explicit two-state scanner:
//!
//! - `Searching`: looking for the first column-zero constructor marker left
//!   behind by the constructor stage. A documentation comment immediately
//!   above the marker is pulled inside the class body with it.
//! - `InsideClassBlock`: every remaining line is body text, reindented one
//!   level; end of input closes the block.
//!
//! At most one class block is opened per unit; a later marker inside the
//! open block is ordinary body text. A unit with no marker passes through
//! unchanged, which is the expected outcome for units holding only free
//! functions, constants, or plain factories.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Model;
use crate::source::SourceUnit;

const INDENT: &str = "    ";

/// The marker must sit at column zero: the constructor stage emits it there,
/// and requiring it keeps an already-assembled class body from being wrapped
/// a second time.
static CONSTRUCTOR_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^constructor[ \t]*\(").expect("constructor marker pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Searching,
    InsideClassBlock,
}

/// Wraps the unit's tagged constructor and everything after it into a class
/// block named after the unit, with an inheritance clause when the model
/// records a parent.
pub fn assemble(unit: &SourceUnit, text: &str, model: &Model) -> String {
    let mut state = ScanState::Searching;
    let mut out: Vec<String> = Vec::new();
    // Doc-comment lines held back until the next line decides whether they
    // lead a constructor marker.
    let mut held: Vec<&str> = Vec::new();
    let mut in_comment = false;

    for line in text.lines() {
        if state == ScanState::InsideClassBlock {
            out.push(reindent(line));
            continue;
        }
        if in_comment {
            held.push(line);
            if line.trim_end().ends_with("*/") {
                in_comment = false;
            }
            continue;
        }
        if CONSTRUCTOR_MARKER.is_match(line) {
            out.push(class_header(unit, model));
            for comment_line in held.drain(..) {
                out.push(reindent(comment_line));
            }
            out.push(reindent(line));
            state = ScanState::InsideClassBlock;
            continue;
        }
        // Anything other than the marker breaks the comment's adjacency.
        flush_held(&mut out, &mut held);
        if line.trim_start().starts_with("/**") {
            held.push(line);
            in_comment = !line.trim_end().ends_with("*/");
        } else {
            out.push(line.to_string());
        }
    }

    match state {
        ScanState::InsideClassBlock => out.push("}".to_string()),
        ScanState::Searching => flush_held(&mut out, &mut held),
    }

    let mut result = out.join("\n");
    if text.ends_with('\n') {
        result.push('\n');
    }
    result
}

fn class_header(unit: &SourceUnit, model: &Model) -> String {
    match model.symbols.parent_of(&unit.name) {
        Some(parent) => format!("class {} extends {} {{", unit.name, parent),
        None => format!("class {} {{", unit.name),
    }
}

fn reindent(line: &str) -> String {
    if line.trim().is_empty() {
        line.to_string()
    } else {
        format!("{}{}", INDENT, line)
    }
}

fn flush_held(out: &mut Vec<String>, held: &mut Vec<&str>) {
    for line in held.drain(..) {
        out.push(line.to_string());
    }
}
