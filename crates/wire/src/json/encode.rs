//! JSON response encoding
//!
//! | Output | Body |
//! |--------|------|
//! | SortTrace | `{"steps": [...]}` |
//! | SearchTrace | `{"steps": [...], "sorted_array": [...]}` |
//! | Sequence | `{"array": [...]}` |
//! | Algorithms | `{"algorithms": ["bubble", ...]}` |
//!
//! Sort steps omit `comparing` / `swapping` when absent.

use serde_json::{json, Value};
use tracesort_executor::Output;

/// Build the JSON body for an output.
pub fn output_to_json(output: &Output) -> Value {
    match output {
        Output::SortTrace { steps, .. } => json!({ "steps": steps }),
        Output::SearchTrace(outcome) => json!({
            "steps": outcome.steps,
            "sorted_array": outcome.sorted_array,
        }),
        Output::Sequence(values) => json!({ "array": values }),
        Output::Algorithms(ids) => json!({ "algorithms": ids }),
    }
}

/// Encode an output as a compact JSON string.
pub fn encode_output(output: &Output) -> String {
    output_to_json(output).to_string()
}
