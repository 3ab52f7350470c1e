//! Search orchestrator: concurrent fan-out, merge, rank and window.
//!
//! This module plans upstream terms, queries them concurrently, merges
//! results first-writer-wins by item identity, then either ranks them by
//! popularity (application batches) or slices an emulated page window
//! (icons) before shaping the response envelope.

pub mod assemble;
pub mod dedup;
pub mod scoring;
pub mod search;
pub mod window;
