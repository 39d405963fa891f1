pub mod collector;
pub mod merge;
pub mod metadata;
pub mod pipeline;
pub mod report;
pub mod scan;
pub mod stats;
pub mod urllist;

pub use pipeline::run;
pub use stats::DigestStats;
