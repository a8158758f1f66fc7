mod common;
use crate::common::{data_path, extract};
use tempfile::NamedTempFile;

#[test]
fn dssp_directory_skips_repeated_molecule() {
    let out = NamedTempFile::new().unwrap();
    let dataset = extract("dssp", &[], &[&data_path("dssp")], out.path()).unwrap();

    // hemoglobin, lysozyme; lysozyme_dup repeats the molecule name
    assert_eq!(dataset.len(), 2);
    let ids: Vec<_> = dataset.iter().map(|p| p.id.as_deref()).collect();
    assert_eq!(ids, vec![Some("4HHB"), Some("1LYZ")]);

    let lysozyme = &dataset.entries()[1];
    assert_eq!(lysozyme.observed, vec![0, 1, 2]);
    assert_eq!(lysozyme.hidden, vec![0, 2, 1]);
}

#[test]
fn dssp_without_unames_keeps_every_file() {
    let out = NamedTempFile::new().unwrap();
    let dataset = extract(
        "dssp",
        &["--unames", "false"],
        &[&data_path("dssp")],
        out.path(),
    )
    .unwrap();
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.entries()[2].id.as_deref(), Some("2LYZ"));
}

#[test]
fn dssp_breaks_and_bridges() {
    let input = data_path("dssp").join("hemoglobin.dssp");

    let out = NamedTempFile::new().unwrap();
    let dataset = extract("dssp", &[], &[&input], out.path()).unwrap();
    let pair = &dataset.entries()[0];
    assert_eq!(dataset.decode_observed(pair), "VLASP");
    assert_eq!(dataset.decode_hidden(pair), " HHET");

    let out = NamedTempFile::new().unwrap();
    let dataset = extract("dssp", &["--breaks"], &[&input], out.path()).unwrap();
    let pair = &dataset.entries()[0];
    assert_eq!(dataset.decode_observed(pair), "VLA?SP");
    assert_eq!(pair.hidden.len(), 6);
}

#[test]
fn dssp_prefix_deduplication() {
    let dir = data_path("dssp");
    let lysozyme = dir.join("lysozyme.dssp");
    let out = NamedTempFile::new().unwrap();

    // Names off, so only the prefix check can drop the second copy
    let dataset = extract(
        "dssp",
        &["--unames", "false", "--prefix", "--prefix-length", "3"],
        &[&lysozyme, &lysozyme],
        out.path(),
    )
    .unwrap();
    assert_eq!(dataset.len(), 1);
}

#[test]
fn dssp_missing_input_fails() {
    let out = NamedTempFile::new().unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("seqlabel").unwrap();
    cmd.args(["-q", "dssp", "-o"])
        .arg(out.path())
        .arg("does-not-exist.dssp");
    cmd.assert().failure();
}
