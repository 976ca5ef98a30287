//! Argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Build allow-list Merkle trees and inclusion proofs.
#[derive(Parser, Debug)]
#[command(name = "allowlist-tree")]
#[command(about = "Build allow-list Merkle trees, dumps and inclusion proofs")]
#[command(version)]
pub struct Cli {
    /// Digest used for leaves and internal nodes
    #[arg(
        long,
        value_enum,
        default_value_t = HasherKind::Keccak256,
        env = "ALLOWLIST_HASHER",
        global = true
    )]
    pub hasher: HasherKind,

    /// Log debug output to stderr (filter with RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Supported digest primitives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum HasherKind {
    /// Keccak-256, compatible with EVM verifiers
    Keccak256,
    /// Blake3
    Blake3,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a tree from a list of addresses and print its root
    Build {
        /// Address list: one address per line, or a JSON array of strings
        #[arg(short, long)]
        input: PathBuf,
        /// Write the tree dump (JSON) to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Keep repeated addresses instead of failing (last occurrence wins)
        #[arg(long)]
        allow_duplicates: bool,
    },

    /// Print the root of a tree dump
    Root {
        /// Tree dump file
        #[arg(short, long)]
        dump: PathBuf,
    },

    /// Print the inclusion proof of an address as a JSON array
    Proof {
        /// Tree dump file
        #[arg(short, long)]
        dump: PathBuf,
        /// Address to prove
        #[arg(short, long)]
        address: String,
    },

    /// Check an inclusion proof against a root
    Verify {
        /// Expected root (0x-hex)
        #[arg(short, long)]
        root: String,
        /// Address being proved
        #[arg(short, long)]
        address: String,
        /// Sibling digests, innermost first, comma separated
        #[arg(short, long, value_delimiter = ',')]
        proof: Vec<String>,
    },

    /// Print the leaf digest of an address
    Leaf {
        /// Address to hash
        #[arg(short, long)]
        address: String,
    },
}
