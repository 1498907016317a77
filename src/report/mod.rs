//! Reporting utilities: efficiency aggregation and formatted terminal output.

pub mod efficiency;
pub mod format;

pub use efficiency::*;
pub use format::*;
