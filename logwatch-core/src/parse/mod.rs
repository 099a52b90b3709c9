//! Access log line parsing.
//!
//! Lines follow the common log format:
//!
//! `<host> <ident> <user> [<timestamp>] "<METHOD> <section>/<rest> <protocol>" <status> <bytes>`
//!
//! optionally followed by extra fields (a quoted user agent, for example) that are ignored.
//! Only the first path segment of the request target is kept.

mod error;
mod grammar;
mod record;


pub use error::ParseError;
pub use grammar::parse_line;
pub use record::LogRecord;
