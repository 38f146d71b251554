//! Stamps each compile with a build counter and a UTC timestamp.
//!
//! The counter lives in `.fuelforge-build` next to Cargo.toml and is read
//! back by `src/build_info.rs` through `FUELFORGE_BUILD_*` variables.

use std::fs;
use std::path::Path;

const COUNTER_FILE: &str = ".fuelforge-build";

fn read_counter(path: &Path) -> u64 {
    fs::read_to_string(path)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0)
}

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=Cargo.toml");

    let counter_path = Path::new(COUNTER_FILE);
    let build = read_counter(counter_path) + 1;
    if let Err(e) = fs::write(counter_path, build.to_string()) {
        // a read-only checkout still builds, it just keeps its number
        println!("cargo:warning=could not update {}: {}", COUNTER_FILE, e);
    }

    let stamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

    println!("cargo:rustc-env=FUELFORGE_BUILD_NUMBER={}", build);
    println!("cargo:rustc-env=FUELFORGE_BUILD_TIMESTAMP={}", stamp);
}
