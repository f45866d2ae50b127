//! The conversation node model: the closed set of variants, default
//! construction, validity rules, and copy-on-write edits.

pub mod content;
pub mod kind;
pub mod patch;
pub mod validation;

pub use content::*;
pub use kind::*;
pub use patch::*;
pub use validation::*;
