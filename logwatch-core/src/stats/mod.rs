//! Per-interval traffic summaries.
//!
//! A batch of records is folded into frequency tables for sections, methods and status
//! classes, each reduced to its top-K entries. Everything here is pure.

mod aggregation;
mod format;


pub use aggregation::{Pair, StatRecord, aggregate, status_class, top_k};
pub use format::format_byte_count;
