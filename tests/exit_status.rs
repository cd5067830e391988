use std::{fs, path::Path, process::Command};

fn allele_freq(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_allele-freq"))
        .args(args)
        .output()
        .expect("failed to run allele-freq")
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn occurrence_succeeds_with_zero_exit() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("allele_data.txt");
    let output = dir.path().join("freq.tsv");
    fs::write(&input, "Locus\tASV\nL1\tA\nL1\tA\nL1\tB\nL2\tA\n").unwrap();

    let out = allele_freq(&[
        "--quiet",
        "occurrence",
        "--input",
        path_str(&input),
        "--output",
        path_str(&output),
    ]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Locus\tASV\tFreq\nL1\tA\t2\nL1\tB\t1\nL2\tA\t1\n"
    );
}

#[test]
fn depth_schema_error_exits_nonzero_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("allele_data.txt");
    let output = dir.path().join("freq.tsv");
    fs::write(&input, "Locus\tASV\nL1\tA\n").unwrap();

    let out = allele_freq(&[
        "depth",
        "-i",
        path_str(&input),
        "-o",
        path_str(&output),
    ]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("'Reads'"));
    assert!(!output.exists());
}

#[test]
fn missing_input_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("freq.tsv");

    let out = allele_freq(&[
        "occurrence",
        "--input",
        path_str(&dir.path().join("absent.tsv")),
        "--output",
        path_str(&output),
    ]);

    assert!(!out.status.success());
    assert!(!output.exists());
}
