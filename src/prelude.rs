//! Convenient imports for tracesort.
//!
//! ```
//! use tracesort::prelude::*;
//!
//! let ts = TraceSort::new();
//! let steps = ts.sort("quick", ints(&[2, 1])).unwrap();
//! assert!(steps.last().unwrap().is_fully_sorted());
//! ```

// Typed front end
pub use crate::types::{Executor, ExecutorOptions, TraceSort, ValidationMode};

// Error handling
pub use crate::error::{Error, Result};

// Data model
pub use crate::types::{ints, AlgorithmId, Number, SearchOutcome, SearchStep, SortStep, TraceStats};
