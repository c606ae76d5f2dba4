//! Build script for saanvika-authz
//!
//! Stamps the build time, git revision and compiler version into the crate
//! as `BUILD_TIME`, `GIT_HASH` and `RUST_VERSION`.

use std::process::Command;

const UNKNOWN: &str = "unknown";

fn main() {
    let build_time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);

    // docs.rs builds without a checkout or a predictable toolchain
    let on_docs_rs = std::env::var("DOCS_RS").is_ok();
    let git_hash = if on_docs_rs {
        "docs-rs-build".to_string()
    } else {
        first_line_of("git", &["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| UNKNOWN.into())
    };
    let rust_version = if on_docs_rs {
        "stable".to_string()
    } else {
        first_line_of("rustc", &["--version"]).unwrap_or_else(|| UNKNOWN.into())
    };

    for (key, value) in [
        ("BUILD_TIME", build_time.to_string()),
        ("GIT_HASH", git_hash),
        ("RUST_VERSION", rust_version),
    ] {
        println!("cargo:rustc-env={}={}", key, value);
    }

    for path in [".git/HEAD", ".git/refs/heads/", "Cargo.toml", "Cargo.lock"] {
        println!("cargo:rerun-if-changed={}", path);
    }
}

/// Trimmed first line of a successful command's stdout
fn first_line_of(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8(output.stdout).ok()?;
    stdout.lines().next().map(|line| line.trim().to_string())
}
