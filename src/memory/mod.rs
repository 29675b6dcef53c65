//! Long-term memory — cross-session digest and proactive insights

pub mod aggregator;
pub mod insight;

pub use aggregator::MemoryAggregator;
pub use insight::{InsightEngine, Observation};
