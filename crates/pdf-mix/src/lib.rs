pub mod io;
mod page_range;
mod partition;
pub mod selection;
mod types;
pub mod validation;

pub use io::{LopdfPageCounter, PageCounter, count_pages};
pub use page_range::{PageRange, PageRangeSet};
pub use partition::{Partition, partition};
pub use selection::{MixPlan, SelectionRow, SkippedRow, build_mix_inputs, plan};
#[cfg(feature = "serde")]
pub use selection::table::{SelectionRecord, SelectionTable};
pub use types::*;
