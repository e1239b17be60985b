//! Directory tool plumbing.
//!
//! - `command` - builds and runs one `dscl` command line (`Dscl`)
//! - `classify` - turns a raw `CommandResult` into stdout or a `GroupError`
//! - `parse` - line-oriented parsers for `list` and `read` output

mod classify;
mod command;
pub mod parse;

pub use classify::{NO_SUCH_KEY, RECORD_NOT_FOUND, classify};
pub use command::Dscl;
