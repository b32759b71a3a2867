//! Dependency extraction and namespace stripping.
//!
//! A qualified reference `NS.Name` in read position becomes a dependency
//! edge (unit -> Name) and is rewritten to the bare `Name`. A reference is
//! in read position when no assignment operator follows it in the same
//! statement, which keeps assignment left-hand sides out of the graph and
//! leaves them for the later stages that own those statement shapes.

use std::ops::Range;

use regex::Regex;

use crate::diagnostics::Diagnostic;
use crate::model::Model;
use crate::pipeline::MigrationOptions;
use crate::source::SourceUnit;
use crate::stages::Stage;

pub struct DependencyStage {
    qualified: Regex,
}

impl DependencyStage {
    pub fn new(options: &MigrationOptions) -> Self {
        let ns = regex::escape(&options.namespace);
        // Class-like symbols are capitalized in the legacy dialect; lowercase
        // members like `NS.extend` are namespace utilities, not symbols.
        let qualified = Regex::new(&format!(r"\b{ns}\.([A-Z]\w*)"))
            .expect("qualified reference pattern");
        Self { qualified }
    }

    /// All qualified read-references in one line, as (byte range, name).
    fn reads_in<'a>(&self, line: &'a str) -> Vec<(Range<usize>, &'a str)> {
        let mut hits = Vec::new();
        for caps in self.qualified.captures_iter(line) {
            let whole = caps.get(0).unwrap();
            let rest = &line[whole.end()..];
            let stmt_end = rest.find(';').unwrap_or(rest.len());
            if contains_assignment(&rest[..stmt_end]) {
                continue;
            }
            hits.push((whole.range(), caps.get(1).unwrap().as_str()));
        }
        hits
    }
}

impl Stage for DependencyStage {
    fn discover(&self, unit: &SourceUnit, model: &mut Model, _diags: &mut Vec<Diagnostic>) {
        for line in unit.text.split_inclusive('\n') {
            for (_, name) in self.reads_in(line) {
                model.symbols.observe(name);
                model.dependencies.record(&unit.name, name);
            }
        }
    }

    fn rewrite(
        &self,
        _unit: &SourceUnit,
        text: String,
        _model: &Model,
        _diags: &mut Vec<Diagnostic>,
    ) -> String {
        let mut out = String::with_capacity(text.len());
        for line in text.split_inclusive('\n') {
            let hits = self.reads_in(line);
            if hits.is_empty() {
                out.push_str(line);
                continue;
            }
            let mut last = 0;
            for (range, name) in hits {
                out.push_str(&line[last..range.start]);
                out.push_str(name);
                last = range.end;
            }
            out.push_str(&line[last..]);
        }
        out
    }
}

/// Whether `rest` (the statement tail after a reference) contains an
/// assignment operator. Comparison operators and arrows do not count.
fn contains_assignment(rest: &str) -> bool {
    let bytes = rest.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'=' {
            continue;
        }
        let prev = if i > 0 { bytes[i - 1] } else { 0 };
        let next = bytes.get(i + 1).copied().unwrap_or(0);
        // ==, ===, !=, <=, >= and => are not assignments; a '=' preceded by
        // '=' is the tail of one of those.
        if matches!(prev, b'=' | b'!' | b'<' | b'>') {
            continue;
        }
        if next == b'=' || next == b'>' {
            continue;
        }
        return true;
    }
    false
}
