pub mod merge;
pub mod types;

pub use merge::MergedFactSet;
pub use types::*;
