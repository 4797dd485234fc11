//! Search command handler.

use tracesort_core::Number;
use tracesort_engine::run_search;

use crate::options::ExecutorOptions;
use crate::validate::{check_target, check_values};
use crate::{Error, Output, Result};

/// Handle Search command: sort a copy, then binary-search it.
pub fn search(opts: &ExecutorOptions, values: Vec<Number>, target: Option<Number>) -> Result<Output> {
    let target = target.ok_or(Error::MissingTarget)?;
    check_values(&values, None, opts)?;
    check_target(&target, opts)?;

    let outcome = run_search(&values, Some(target))?;
    Ok(Output::SearchTrace(outcome))
}
