//! End-to-end tests of the plasidome binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const NOT_FOUND: &str = "no alignments met required parameters";

fn plasidome() -> Command {
    Command::cargo_bin("plasidome").expect("binary should build")
}

fn write_fasta(dir: &Path, name: &str, records: &[(&str, usize)]) -> PathBuf {
    let mut content = String::new();
    for (id, length) in records {
        content.push_str(&format!(">{id} test record\n{}\n", "ACGT".repeat(length / 4)));
    }
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_classify_alignment_table() {
    let dir = TempDir::new().unwrap();
    let table = dir.path().join("alignment_results.tsv");
    std::fs::write(
        &table,
        format!(
            "contig\tstaxids\ttitle\tpercent_ident\tquery_coverage\tqcovhsp\tlength\te_value\n\
             \n\
             c1\t100\tplasmid pXYZ\t99\t100\t100\t500\t0.0\n\
             c1\t200\tchromosome 1\t99\t100\t100\t500\t0.0\n\
             c1\t300\tchromosome 2\t99\t100\t100\t500\t0.0\n\
             \n\
             c2\t9606\tHomo sapiens\t100\t100\t100\t500\t0.0\n\
             c2\t9606\tHomo sapiens\t100\t100\t100\t500\t0.0\n\
             c2\t9606\tHomo sapiens\t100\t100\t100\t500\t0.0\n\
             \n\
             c3\t{NOT_FOUND}\n"
        ),
    )
    .unwrap();
    let report = dir.path().join("report.tsv");

    plasidome()
        .args(["--format", "tsv", "classify"])
        .arg(&table)
        .arg("--report")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("c1\tchromosome\tfalse\t2\t1\t0\t0"))
        .stdout(predicate::str::contains("c2\tcontamination\ttrue\t0\t0\t0\t3"))
        .stdout(predicate::str::contains(
            "c3\tno_significant_hits\tfalse\t0\t0\t0\t0",
        ));

    let written = std::fs::read_to_string(&report).unwrap();
    assert!(written.starts_with(
        "contig\tclassification\tcontaminated\tchromosome\tplasmid\tundetermined\thuman\n"
    ));
    assert_eq!(written.lines().count(), 4);
}

#[test]
fn test_classify_json_output() {
    let dir = TempDir::new().unwrap();
    let table = dir.path().join("hits.tsv");
    std::fs::write(&table, "c1\t562\tplasmid pA\nc1\t562\tchromosome\n").unwrap();

    let output = plasidome()
        .args(["--format", "json", "classify"])
        .arg(&table)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["contig"], "c1");
    assert_eq!(json[0]["classification"], "undetermined");
    assert_eq!(json[0]["is_contaminated"], false);
    assert_eq!(json[0]["plasmid_hits"], 1);
    assert_eq!(json[0]["chromosome_hits"], 1);
}

#[test]
fn test_classify_rejects_mixed_sentinel() {
    let dir = TempDir::new().unwrap();
    let table = dir.path().join("hits.tsv");
    std::fs::write(&table, format!("c1\t562\tplasmid pA\nc1\t{NOT_FOUND}\n")).unwrap();

    plasidome()
        .arg("classify")
        .arg(&table)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-hit marker"));
}

#[test]
fn test_run_with_no_short_contigs_succeeds() {
    let dir = TempDir::new().unwrap();
    let fasta = write_fasta(dir.path(), "assembly.fasta", &[("big_1", 400), ("big_2", 800)]);

    plasidome()
        .args(["run", "-l", "100", "-b", "/nonexistent/blastn", "-i"])
        .arg(&fasta)
        .arg("-p")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "No contigs met the length requirement",
        ));

    assert!(!dir.path().join("contig_assignments").exists());
}

#[test]
fn test_run_rejects_non_fasta_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("assembly.txt");
    std::fs::write(&input, ">c1\nACGT\n").unwrap();

    plasidome()
        .args(["run", "-i"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in FASTA format"));
}

#[test]
fn test_run_rejects_missing_input() {
    plasidome()
        .args(["run", "-i", "/nonexistent/assembly.fasta"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find file"));
}

#[test]
fn test_run_rejects_zero_length_threshold() {
    plasidome()
        .args(["run", "-i", "assembly.fasta", "-l", "0"])
        .assert()
        .failure();
}

#[test]
fn test_run_fails_when_blastn_missing() {
    let dir = TempDir::new().unwrap();
    let fasta = write_fasta(dir.path(), "assembly.fa", &[("c1", 40)]);

    plasidome()
        .args(["run", "-b", "/nonexistent/blastn", "-i"])
        .arg(&fasta)
        .arg("-p")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("c1"));
}

#[test]
fn test_select_stages_short_contigs() {
    let dir = TempDir::new().unwrap();
    let fasta = write_fasta(
        dir.path(),
        "assembly.fna",
        &[("short_1", 100), ("long_1", 1_000), ("short_2", 200)],
    );

    plasidome()
        .args(["--format", "tsv", "select", "-l", "200", "-o", "staged", "-i"])
        .arg(&fasta)
        .arg("-p")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("short_1\t100\t"))
        .stdout(predicate::str::contains("short_2\t200\t"))
        .stdout(predicate::str::contains("long_1").not());

    let staging = dir.path().join("staged").join("single_contigs");
    assert!(staging.join("contig_short_1.fasta").is_file());
    assert!(staging.join("contig_short_2.fasta").is_file());
    assert!(!staging.join("contig_long_1.fasta").exists());
}

#[test]
fn test_select_has_no_report_flag() {
    let dir = TempDir::new().unwrap();
    let fasta = write_fasta(dir.path(), "assembly.fasta", &[("c1", 40)]);

    plasidome()
        .args(["select", "-r", "summary", "-i"])
        .arg(&fasta)
        .arg("-p")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));

    assert!(!dir.path().join("contig_assignments").exists());
}

/// A stand-in for blastn that answers from the query's identifier
#[cfg(unix)]
fn write_stub_blastn(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = r#"#!/bin/sh
while [ $# -gt 0 ]; do
    if [ "$1" = "-query" ]; then query="$2"; fi
    shift
done
id=$(head -n 1 "$query" | cut -c 2- | cut -d ' ' -f 1)
case "$id" in
    plas*|contig)
        printf '%s\t562\tEscherichia coli plasmid pO157\t99.9\t100\t100\t40\t1e-20\n' "$id"
        printf '%s\t562\tEscherichia coli plasmid F\t99.1\t100\t100\t40\t1e-18\n' "$id"
        ;;
    human*)
        printf '%s\t9606\tHomo sapiens chromosome 1\t100\t100\t100\t40\t1e-20\n' "$id"
        ;;
esac
"#;
    let path = dir.join("blastn");
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn test_run_with_stub_blastn() {
    let dir = TempDir::new().unwrap();
    let blastn = write_stub_blastn(dir.path());
    let fasta = write_fasta(
        dir.path(),
        "assembly.fasta",
        &[
            ("plas_1", 40),
            ("big_1", 400),
            ("contig", 40),
            ("human_1", 40),
            ("orphan_1", 40),
        ],
    );

    plasidome()
        .args(["run", "-l", "100", "-r", "summary", "-i"])
        .arg(&fasta)
        .arg("-p")
        .arg(dir.path())
        .arg("-b")
        .arg(&blastn)
        .assert()
        .success()
        .stderr(predicate::str::contains("There are 4 contigs to align"));

    let base = dir.path().join("contig_assignments");
    let report = std::fs::read_to_string(base.join("summary.tsv")).unwrap();
    assert_eq!(
        report,
        "contig\tclassification\tcontaminated\tchromosome\tplasmid\tundetermined\thuman\n\
         plas_1\tplasmid\tfalse\t0\t2\t0\t0\n\
         contig\tplasmid\tfalse\t0\t2\t0\t0\n\
         human_1\tcontamination\ttrue\t0\t0\t0\t1\n\
         orphan_1\tno_significant_hits\tfalse\t0\t0\t0\t0\n"
    );

    let table = std::fs::read_to_string(base.join("alignment_results.tsv")).unwrap();
    assert!(table.contains(&format!("orphan_1\t{NOT_FOUND}")));
    assert!(!table.contains("big_1"));
}
