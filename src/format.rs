//! Textual graph definition.
//!
//! ```text
//! Karlsruhe
//! Ettlingen
//! Rastatt
//! --
//! Karlsruhe;Ettlingen;9;14
//! Ettlingen;Rastatt;18;20
//! ```
//!
//! The first part lists one town per line, the second part one path per line as
//! `start;destination;length;time`. The two parts are separated by a line containing exactly `--`.

pub mod reader;
pub mod writer;

/// Line separating the towns from the paths.
pub const SEPARATOR: &str = "--";

/// Separator of the fields of a path line.
pub const FIELD_SEPARATOR: char = ';';
