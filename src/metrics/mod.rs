//! Pure derivations over raw repository data.
//!
//! Nothing here runs git; the collector feeds these functions the text it
//! gathered, which keeps every rule testable with plain strings.

pub mod age;
pub mod branches;
pub mod code;
pub mod deps;
pub mod hot_files;
pub mod project;
pub mod remote;
pub mod status;
pub mod velocity;
