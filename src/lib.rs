//! Course advisor: prerequisite-aware course recommendations.
//!
//! [`recommend::recommend`] is the core filter. [`catalog`] loads and queries the
//! stored course/professor documents and assembles filter input, and
//! [`request`] validates student requests and windows the results.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod fmt;
pub mod logging;
pub mod recommend;
pub mod request;
pub mod utils;
