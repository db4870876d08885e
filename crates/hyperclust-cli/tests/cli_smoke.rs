use std::fs;
use std::process::Command;

use serde_json::Value;
use tempfile::tempdir;

fn write_toy(dir: &std::path::Path) {
    fs::write(dir.join("toy-nverts.txt"), "3\n2\n2\n").unwrap();
    fs::write(dir.join("toy-simplices.txt"), "1\n2\n3\n1\n2\n2\n3\n").unwrap();
}

#[test]
fn clustering_command_prints_json() {
    let dir = tempdir().unwrap();
    write_toy(dir.path());
    let output = Command::new(env!("CARGO_BIN_EXE_hyperclust"))
        .args(["clustering", "--dataset"])
        .arg(dir.path())
        .args(["--name", "toy", "--node", "2"])
        .output()
        .expect("run hyperclust clustering");
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).expect("json");
    let rows = value["rows"].as_array().expect("rows");
    assert_eq!(rows.len(), 1);
    let clustering = rows[0]["clustering"].as_f64().unwrap();
    assert!((clustering - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn fill_command_writes_csv_file() {
    let dir = tempdir().unwrap();
    write_toy(dir.path());
    let out = dir.path().join("reports/fill.csv");
    let status = Command::new(env!("CARGO_BIN_EXE_hyperclust"))
        .args(["fill", "--name", "toy", "--format", "csv", "--dataset"])
        .arg(dir.path())
        .arg("--out")
        .arg(&out)
        .status()
        .expect("run hyperclust fill");
    assert!(status.success());
    let text = fs::read_to_string(out).unwrap();
    assert!(text.starts_with("nodes,size,fill\n1 2 3,3,"));
}

#[test]
fn missing_dataset_fails() {
    let dir = tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_hyperclust"))
        .args(["summary", "--name", "absent", "--dataset"])
        .arg(dir.path())
        .output()
        .expect("run hyperclust summary");
    assert!(!output.status.success());
}
