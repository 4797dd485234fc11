//! `serve-json` mode: one JSON request per input line, one JSON response
//! per output line.

use std::io::{BufRead, Write};

use tracesort_core::ApiError;
use tracesort_executor::Executor;
use tracesort_wire::{encode_api_error, handle, Endpoint};
use tracing::debug;

/// Answer every non-blank line of `input`. Returns the process exit code:
/// 0 if every request succeeded, 1 otherwise.
pub fn run_serve_json<R: BufRead, W: Write>(
    executor: &Executor,
    input: R,
    mut out: W,
) -> std::io::Result<i32> {
    let mut exit_code = 0;

    for line in input.lines() {
        let line = line?;
        let body = line.trim();
        if body.is_empty() {
            continue;
        }

        let response = match Endpoint::infer(body) {
            Ok(endpoint) => {
                debug!(route = endpoint.path(), "request");
                let resp = handle(executor, endpoint, body);
                if resp.status != 200 {
                    exit_code = 1;
                }
                resp.body
            }
            Err(e) => {
                exit_code = 1;
                encode_api_error(&ApiError::from(e))
            }
        };
        writeln!(out, "{}", response)?;
    }

    out.flush()?;
    Ok(exit_code)
}
