//! Command line front end for `allowlist-merkle-tree`.
//!
//! Usage:
//!   allowlist-tree build  - Build a tree from an address list, write its dump
//!   allowlist-tree root   - Print the root of a dump
//!   allowlist-tree proof  - Print the proof of an address from a dump
//!   allowlist-tree verify - Check a proof against a root
//!   allowlist-tree leaf   - Print the leaf digest of an address

pub mod cli;
mod error;
pub mod handler;
pub mod input;

pub use cli::{Cli, Commands, HasherKind};
pub use error::CliError;
