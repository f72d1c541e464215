//! # elcat-cli — Command Line for the Election Catalog
//!
//! Provides the `elcat` binary.
//!
//! ## Subcommands
//!
//! - `elcat serve`: Run the HTTP service. Flags override the environment.
//! - `elcat scan`: Scan an elections directory once and report the records
//!   it would publish and the files it would skip.
//!
//! ```bash
//! elcat serve --port 8080 --elections-dir /srv/elections
//! elcat scan ./elections --json
//! ```

pub mod scan;
pub mod serve;
