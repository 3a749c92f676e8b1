//! Build script that records the compiler version for the report header.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok());

    match version {
        Some(v) => println!("cargo:rustc-env=RUSTC_VERSION={}", v.trim()),
        None => println!("cargo:warning=Could not determine rustc version."),
    }
}
