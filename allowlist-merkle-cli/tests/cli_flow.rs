use std::{fs, path::Path};

use allowlist_merkle_cli::{Cli, CliError, handler};
use allowlist_merkle_tree::{AllowlistTreeError, TreeDump};
use assert_matches::assert_matches;
use clap::Parser;

const ADDRESSES: &str = "\
# allow-list
0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa01
0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa02

0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA03  # upper-case is fine
0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa04
0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa05
";

fn run(args: &[&str]) -> Result<String, CliError> {
    let cli = Cli::try_parse_from(std::iter::once("allowlist-tree").chain(args.iter().copied()))
        .expect("arguments should parse");
    let mut out = Vec::new();
    handler::run(&cli, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output").trim().to_string())
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

#[test]
fn build_proof_verify_flow() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("addresses.txt");
    let dump = dir.path().join("tree.json");
    fs::write(&input, ADDRESSES).expect("write input");

    let root = run(&[
        "--hasher",
        "keccak256",
        "build",
        "--input",
        path_str(&input),
        "--output",
        path_str(&dump),
    ])
    .expect("build");
    assert!(root.starts_with("0x"));
    assert_eq!(root.len(), 66);

    let parsed = TreeDump::from_json(&fs::read_to_string(&dump).expect("read dump"))
        .expect("valid dump");
    assert_eq!(parsed.tree.len(), 9);
    assert_eq!(parsed.tree[0], root);
    assert_eq!(parsed.values.len(), 5);

    assert_eq!(
        run(&["--hasher", "keccak256", "root", "--dump", path_str(&dump)]).expect("root"),
        root
    );

    let address = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa03";
    let proof_json = run(&[
        "--hasher",
        "keccak256",
        "proof",
        "--dump",
        path_str(&dump),
        "--address",
        address,
    ])
    .expect("proof");
    let proof: Vec<String> = serde_json::from_str(&proof_json).expect("json array");
    assert!(!proof.is_empty());

    let joined = proof.join(",");
    assert_eq!(
        run(&[
            "--hasher",
            "keccak256",
            "verify",
            "--root",
            &root,
            "--address",
            address,
            "--proof",
            &joined,
        ])
        .expect("verify"),
        "valid"
    );

    let other = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa04";
    let err = run(&[
        "--hasher",
        "keccak256",
        "verify",
        "--root",
        &root,
        "--address",
        other,
        "--proof",
        &joined,
    ])
    .expect_err("proof is for a different address");
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn unknown_address_has_exit_code_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("addresses.txt");
    let dump = dir.path().join("tree.json");
    fs::write(&input, ADDRESSES).expect("write input");
    run(&["build", "-i", path_str(&input), "-o", path_str(&dump)]).expect("build");

    let err = run(&[
        "proof",
        "--dump",
        path_str(&dump),
        "--address",
        "0x00000000000000000000000000000000000000ff",
    ])
    .expect_err("not in the tree");
    assert_matches!(err, CliError::Tree(AllowlistTreeError::UnknownValue(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn json_input_matches_text_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let text_input = dir.path().join("addresses.txt");
    let json_input = dir.path().join("addresses.json");
    fs::write(&text_input, ADDRESSES).expect("write text");
    fs::write(
        &json_input,
        r#"[
            "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa05",
            "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa04",
            "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa03",
            "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa02",
            "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa01"
        ]"#,
    )
    .expect("write json");

    assert_eq!(
        run(&["build", "--input", path_str(&text_input)]).expect("text"),
        run(&["build", "--input", path_str(&json_input)]).expect("json")
    );
}

#[test]
fn duplicates_need_opt_in() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("addresses.txt");
    fs::write(
        &input,
        "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa01\n0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa01\n",
    )
    .expect("write input");

    let err = run(&["build", "--input", path_str(&input)]).expect_err("duplicates rejected");
    assert_matches!(err, CliError::Tree(AllowlistTreeError::DuplicateValue(_)));
    assert_eq!(err.exit_code(), 2);

    run(&["build", "--input", path_str(&input), "--allow-duplicates"]).expect("duplicates kept");
}

#[test]
fn bad_input_reports_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("addresses.txt");
    fs::write(
        &input,
        "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa01\n\nnot-an-address\n",
    )
    .expect("write input");

    let err = run(&["build", "--input", path_str(&input)]).expect_err("bad line");
    assert_matches!(err, CliError::Input { line: 3, .. });
}

#[test]
fn empty_input_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("addresses.txt");
    fs::write(&input, "# nothing here\n").expect("write input");

    let err = run(&["build", "--input", path_str(&input)]).expect_err("empty");
    assert_matches!(err, CliError::Tree(AllowlistTreeError::EmptyInput));
}

#[test]
fn hasher_must_match_dump() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("addresses.txt");
    let dump = dir.path().join("tree.json");
    fs::write(&input, ADDRESSES).expect("write input");

    let blake_root = run(&[
        "--hasher",
        "blake3",
        "build",
        "-i",
        path_str(&input),
        "-o",
        path_str(&dump),
    ])
    .expect("build");
    let keccak_root = run(&["--hasher", "keccak256", "build", "-i", path_str(&input)])
        .expect("build keccak");
    assert_ne!(blake_root, keccak_root);

    let err = run(&["--hasher", "keccak256", "root", "--dump", path_str(&dump)])
        .expect_err("dump was built with blake3");
    assert_matches!(err, CliError::Tree(AllowlistTreeError::InvalidDump(_)));
}

#[test]
fn leaf_command_prints_digest() {
    let leaf = run(&["leaf", "--address", "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa01"])
        .expect("leaf");
    assert!(leaf.starts_with("0x"));
    assert_eq!(leaf.len(), 66);
}
