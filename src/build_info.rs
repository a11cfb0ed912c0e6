//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Version line printed by `--version`.
pub fn version_line() -> String {
    let mut line = format!(
        "flappy {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    );
    if BUILD_PROFILE != "release" {
        line.push_str(&format!(" [{}]", BUILD_PROFILE));
    }
    line
}
