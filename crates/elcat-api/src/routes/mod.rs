//! # API Route Modules
//!
//! - `elections`: catalog listing and byte-exact retrieval by identifier.
//! - `svgs`: the SVG asset bundle with placeholder fallback.

pub mod elections;
pub mod svgs;
