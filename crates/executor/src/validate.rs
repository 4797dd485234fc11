//! Input validation performed before any engine call.

use tracesort_core::{AlgorithmId, Number};

use crate::options::{ExecutorOptions, ValidationMode};
use crate::{Error, Result};

/// Reject sequences longer than the configured limit.
pub fn check_len(len: usize, opts: &ExecutorOptions) -> Result<()> {
    match opts.max_input_len {
        Some(limit) if len > limit => Err(Error::InputTooLarge { len, limit }),
        _ => Ok(()),
    }
}

/// Check the elements of a sequence about to be sorted or searched.
///
/// `algorithm` is `None` for search requests.
pub fn check_values(
    values: &[Number],
    algorithm: Option<AlgorithmId>,
    opts: &ExecutorOptions,
) -> Result<()> {
    check_len(values.len(), opts)?;
    if opts.validation == ValidationMode::Permissive {
        return Ok(());
    }

    if let Some(i) = values.iter().position(|v| !v.is_finite()) {
        return Err(Error::InvalidInput {
            reason: format!("element {} is not a finite number", i),
        });
    }

    if algorithm == Some(AlgorithmId::Radix) {
        if let Some(i) = values.iter().position(|v| !v.is_non_negative_integer()) {
            return Err(Error::InvalidInput {
                reason: format!(
                    "radix sort requires non-negative integers, element {} is {}",
                    i, values[i]
                ),
            });
        }
    }

    Ok(())
}

/// Check a search target.
pub fn check_target(target: &Number, opts: &ExecutorOptions) -> Result<()> {
    if opts.validation == ValidationMode::Strict && !target.is_finite() {
        return Err(Error::InvalidInput {
            reason: "search target is not a finite number".to_string(),
        });
    }
    Ok(())
}
