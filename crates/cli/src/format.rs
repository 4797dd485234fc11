//! Output formatting: human, raw and JSON modes.

use tracesort_core::{ApiError, Number, SearchOutcome, SortStep, TraceStats};
use tracesort_executor::{Error, Output};
use tracesort_wire::{encode_api_error, encode_output};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Annotated, one step per line
    Human,
    /// Bare values only
    Raw,
    /// Wire-format JSON
    Json,
}

/// Render a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => encode_output(output),
        OutputMode::Raw => format_raw(output),
        OutputMode::Human => format_human(output),
    }
}

/// Render an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    let api = ApiError::from(err.clone());
    match mode {
        OutputMode::Json => encode_api_error(&api),
        _ => format!("(error) {}", api.message()),
    }
}

fn join(values: &[Number]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn list(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn format_raw(output: &Output) -> String {
    match output {
        Output::SortTrace { steps, .. } => steps
            .iter()
            .map(|s| join(&s.array))
            .collect::<Vec<_>>()
            .join("\n"),
        Output::SearchTrace(outcome) => outcome
            .steps
            .iter()
            .map(|s| format!("{} {} {} {}", s.low, s.high, s.mid, s.found))
            .collect::<Vec<_>>()
            .join("\n"),
        Output::Sequence(values) => join(values),
        Output::Algorithms(ids) => ids
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn format_human(output: &Output) -> String {
    match output {
        Output::SortTrace { algorithm, steps } => {
            let mut lines = vec![format!("{}: {} steps", algorithm.display_name(), steps.len())];
            lines.extend(steps.iter().enumerate().map(|(i, s)| format_step(i, s)));
            let stats = TraceStats::from_steps(steps);
            lines.push(format!(
                "comparisons: {}, swaps: {}, array accesses: {}",
                stats.comparisons, stats.swaps, stats.accesses
            ));
            lines.join("\n")
        }
        Output::SearchTrace(outcome) => format_search(outcome),
        Output::Sequence(values) => format!("[{}]", join(values)),
        Output::Algorithms(ids) => ids
            .iter()
            .map(|id| format!("{:<10} {}", id.as_str(), id.display_name()))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn format_step(i: usize, step: &SortStep) -> String {
    let mut line = format!("{:>4}  [{}]", i + 1, join(&step.array));
    if let Some(c) = &step.comparing {
        line.push_str(&format!("  compare {}", list(c)));
    }
    if let Some(s) = &step.swapping {
        line.push_str(&format!("  swap {}", list(s)));
    }
    if !step.sorted.is_empty() {
        line.push_str(&format!("  sorted {}", list(&step.sorted)));
    }
    line
}

fn format_search(outcome: &SearchOutcome) -> String {
    let mut lines = vec![format!("sorted: [{}]", join(&outcome.sorted_array))];
    for (i, s) in outcome.steps.iter().enumerate() {
        let probed = outcome
            .sorted_array
            .get(s.mid)
            .map_or_else(String::new, |v| format!(" ({})", v));
        lines.push(format!(
            "{:>4}  low={} high={} mid={}{}",
            i + 1,
            s.low,
            s.high,
            s.mid,
            probed
        ));
    }
    lines.push(match outcome.found_index() {
        Some(idx) => format!("found at index {}", idx),
        None => "not found".to_string(),
    });
    lines.join("\n")
}
