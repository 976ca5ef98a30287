//! Command execution.

use std::{fs, io::Write, path::Path};

use allowlist_merkle_tree::{
    Address, Blake3, BuildOptions, Digest, DuplicatePolicy, Keccak256, MerkleHasher, MerkleTree,
    TreeDump, digest_from_hex, digest_to_hex, leaf_digest, verify_value,
};
use tracing::info;

use crate::{Cli, CliError, Commands, HasherKind, input};

/// Run the parsed command, writing results to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), CliError> {
    match cli.hasher {
        HasherKind::Keccak256 => run_with::<Keccak256, W>(&cli.command, out),
        HasherKind::Blake3 => run_with::<Blake3, W>(&cli.command, out),
    }
}

fn run_with<H: MerkleHasher, W: Write>(command: &Commands, out: &mut W) -> Result<(), CliError> {
    match command {
        Commands::Build {
            input,
            output,
            allow_duplicates,
        } => {
            let addresses = input::read_addresses(input)?;
            let options = BuildOptions {
                duplicates: if *allow_duplicates {
                    DuplicatePolicy::LastWriteWins
                } else {
                    DuplicatePolicy::Reject
                },
            };
            let tree = MerkleTree::<Address, H>::build_with(addresses, options)?;
            info!(
                input = %input.display(),
                leaves = tree.leaf_count(),
                hasher = H::NAME,
                "built tree"
            );

            if let Some(output) = output {
                let json = tree.to_dump().to_json_pretty()?;
                fs::write(output, json).map_err(|source| CliError::Io {
                    path: output.clone(),
                    source,
                })?;
                info!(output = %output.display(), "wrote tree dump");
            }

            write_line(out, &tree.root_hex())
        }

        Commands::Root { dump } => {
            let tree = load_dump::<H>(dump)?;
            write_line(out, &tree.root_hex())
        }

        Commands::Proof { dump, address } => {
            let tree = load_dump::<H>(dump)?;
            let address: Address = address.parse()?;
            let proof = tree.proof_hex(&address)?;
            write_line(out, &serde_json::to_string_pretty(&proof)?)
        }

        Commands::Verify {
            root,
            address,
            proof,
        } => {
            let root = digest_from_hex(root)?;
            let address: Address = address.parse()?;
            let siblings = proof
                .iter()
                .filter(|text| !text.trim().is_empty())
                .map(|text| digest_from_hex(text))
                .collect::<Result<Vec<Digest>, _>>()?;
            verify_value::<Address, H>(&address, &siblings, &root)?;
            write_line(out, "valid")
        }

        Commands::Leaf { address } => {
            let address: Address = address.parse()?;
            write_line(out, &digest_to_hex(&leaf_digest::<Address, H>(&address)))
        }
    }
}

fn load_dump<H: MerkleHasher>(path: &Path) -> Result<MerkleTree<Address, H>, CliError> {
    let text = input::read_to_string(path)?;
    let dump = TreeDump::from_json(&text)?;
    Ok(MerkleTree::from_dump(&dump)?)
}

fn write_line<W: Write>(out: &mut W, line: &str) -> Result<(), CliError> {
    writeln!(out, "{}", line).map_err(|source| CliError::Io {
        path: "<stdout>".into(),
        source,
    })
}
