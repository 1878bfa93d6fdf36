use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Generates icons of `sizes` into `dir/assets`
fn generate(dir: &Path, sizes: &str) {
    let output = Command::new(env!("CARGO_BIN_EXE_choco-icons"))
        .args(["--sizes", sizes])
        .current_dir(dir)
        .output()
        .expect("Failed to run choco-icons");
    assert!(output.status.success(), "choco-icons failed for sizes {sizes}");
}

fn verify(path: &Path) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_verify_icon"))
        .arg(path)
        .output()
        .expect("Failed to run verify_icon");

    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("verify_icon failed on {}", path.display());
    }
    output
}

#[test]
fn test_verify_default_icon() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    generate(temp_dir.path(), "128");

    let output = verify(&temp_dir.path().join("assets/icon-128.png"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Image dimensions: 128x128"));
    assert!(stdout.contains("88 text-colored pixels"));
    assert!(stdout.contains("✓ Frame and body colors detected!"));
}

/// Icons smaller than the sampled positions are reported, not a crash
#[test]
fn test_verify_tiny_icons() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    generate(temp_dir.path(), "1,2,4,5");

    for size in [1, 2, 4, 5] {
        let output = verify(&temp_dir.path().join(format!("assets/icon-{size}.png")));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("too small to sample"), "size {size}: {stdout}");
    }
}
