//! Shared fixtures for driving full logtally runs over temp files.

use std::fs;
use std::path::{Path, PathBuf};

/// Write an access log fixture and return its path.
pub fn write_log(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, lines.join("\n") + "\n").unwrap();
    path
}

/// One well-formed access log line for `host` on the given April 2005 day
/// and hour.
pub fn access_line(host: &str, day: u32, hour: u32) -> String {
    format!(r#"{host} - - [{day:02}/Apr/2005:{hour:02}:15:00 +0900] "GET / HTTP/1.1" 200 512"#)
}
