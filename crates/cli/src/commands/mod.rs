pub mod report;
pub mod show;
pub mod skipped;
pub mod util;

pub use report::*;
pub use show::*;
pub use skipped::*;
pub use util::*;
