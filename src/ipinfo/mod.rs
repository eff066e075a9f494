//! IP intelligence module.
//!
//! This module provides the visitor metadata half of the dashboard:
//! - Upstream provider client
//! - Raw-record reshaping into the dashboard's report type

pub mod client;
pub mod types;

pub use client::{IpInfoClient, DEFAULT_PROVIDER};
pub use types::*;
