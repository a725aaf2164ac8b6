//! tc2md — Markdown scenario docs from annotated Go test functions.
//!
//! Test bodies carry their own description as line comments:
//!
//! ```text
//! func TestOpen(t *testing.T) {
//!     // > Doors, Smoke
//!     // # Opening a closed door
//!     // ## GIVEN a closed door
//!     // - the door is unlocked
//!     // -- and nobody holds it
//!     ...
//! }
//! ```
//!
//! [`parser::parse`] turns the lines of a file into a [`Document`],
//! [`render::format`] turns a Document into Markdown lines, and
//! [`convert::convert`] does both. Comments that don't follow the
//! `// <marker> <text>` shape exactly are ignored.

pub mod convert;
pub mod error;
pub mod grammar;
pub mod model;
pub mod parser;
pub mod render;

pub use convert::{convert, convert_flat};
pub use error::{InvalidInput, Result};
pub use model::{Document, Method, Step, StepKind};
pub use parser::parse;
pub use render::format;
