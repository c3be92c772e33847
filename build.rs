//! Generates `build_info.rs` for `gridsnake --version`.
//!
//! `BUILD_COMMIT` and `BUILD_DATE` override the values taken from git and the
//! clock, so release builds are reproducible.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const UNKNOWN_COMMIT: &str = "unknown";

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}

fn build_commit() -> String {
    env::var("BUILD_COMMIT")
        .ok()
        .or_else(git_short_hash)
        .unwrap_or_else(|| UNKNOWN_COMMIT.to_string())
}

fn build_date() -> String {
    env::var("BUILD_DATE").unwrap_or_else(|_| chrono::Utc::now().date_naive().to_string())
}

fn main() {
    let mut dest = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    dest.push("build_info.rs");

    let source = format!(
        "pub const BUILD_COMMIT: &str = {:?};\npub const BUILD_DATE: &str = {:?};\n",
        build_commit(),
        build_date()
    );
    fs::write(&dest, source).expect("write build_info.rs");

    for var in ["BUILD_COMMIT", "BUILD_DATE"] {
        println!("cargo:rerun-if-env-changed={var}");
    }
    println!("cargo:rerun-if-changed=.git/HEAD");
}
