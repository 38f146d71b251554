//! Version stamp for the binaries
//!
//! `build.rs` hands the build counter and compile time over as environment
//! variables; they are baked in here as constants.

use serde::Serialize;

pub const BUILD_NUMBER: u64 = match option_env!("FUELFORGE_BUILD_NUMBER") {
    Some(raw) => match parse_counter(raw) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// UTC compile time, RFC 3339
pub const BUILD_TIMESTAMP: &str = match option_env!("FUELFORGE_BUILD_TIMESTAMP") {
    Some(raw) => raw,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Decimal digits only; `str::parse` is not usable in a const
const fn parse_counter(raw: &str) -> Option<u64> {
    let bytes = raw.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut value: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        if !digit.is_ascii_digit() {
            return None;
        }
        value = value * 10 + (digit - b'0') as u64;
        i += 1;
    }
    Some(value)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
        }
    }

    /// e.g. "fuelforge 1.0.0 (build 42)"
    pub fn label(&self) -> String {
        format!("{} {} (build {})", self.name, self.version, self.build_number)
    }

    fn banner_lines(&self) -> [String; 3] {
        [
            format!("FuelForge nutrition & training log v{}", self.version),
            format!("build #{} compiled {}", self.build_number, self.build_timestamp),
            format!("data dir: set {} to override", crate::config::DATABASE_PATH_VAR),
        ]
    }
}

/// Startup banner on stderr, so stdout stays clean for JSON output
pub fn print_startup_banner() {
    for line in BuildInfo::current().banner_lines() {
        eprintln!("[fuelforge] {}", line);
    }
}
