// src/presentation.rs
use file_manifest_engine::compare::ManifestDiff;
use file_manifest_engine::{ModeResult, RunOutcome};
use std::fmt::Write;
use std::io;

/// Print the result of a run to stdout.
///
/// A closed stdout (for example `| head -c1`) is not an error.
///
/// # Errors
///
/// Returns any other I/O error raised while writing.
pub fn print_outcome(outcome: &RunOutcome) -> io::Result<()> {
    emit(&mut io::stdout().lock(), outcome)
}

fn emit<W: io::Write>(out: &mut W, outcome: &RunOutcome) -> io::Result<()> {
    let result = out
        .write_all(render_outcome(outcome).as_bytes())
        .and_then(|()| out.flush());
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed early");
            Ok(())
        }
        other => other,
    }
}

/// Text shown on stdout for `outcome`, newline-terminated.
#[must_use]
pub fn render_outcome(outcome: &RunOutcome) -> String {
    let path = outcome.path.display();
    match &outcome.result {
        ModeResult::Written => {
            format!("Generated {path} with {} entries\n", outcome.entries)
        }
        ModeResult::Printed(json) => format!("{json}\n"),
        ModeResult::Checked { missing: true, .. } => {
            format!("{path} is missing ({} entries expected)\n", outcome.entries)
        }
        ModeResult::Checked { diff, .. } if diff.is_empty() => {
            format!("{path} is up to date ({} entries)\n", outcome.entries)
        }
        ModeResult::Checked { diff, .. } => {
            let mut out = format!("{path} is stale\n");
            render_diff(&mut out, diff);
            out
        }
    }
}

fn render_diff(out: &mut String, diff: &ManifestDiff) {
    for p in &diff.added {
        let _ = writeln!(out, "  + {p}");
    }
    for p in &diff.removed {
        let _ = writeln!(out, "  - {p}");
    }
    for p in &diff.changed {
        let _ = writeln!(out, "  ~ {p}");
    }
    for p in &diff.duplicates {
        let _ = writeln!(out, "  * {p} (listed more than once)");
    }
    if diff.unsorted {
        let _ = writeln!(out, "  entries are not sorted by birthtime");
    }
}
