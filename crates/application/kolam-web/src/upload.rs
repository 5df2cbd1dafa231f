//! Write-once storage for uploaded images

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Strip any directory components a client put in the filename.
///
/// Returns `None` when nothing usable is left.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let name = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    match name {
        "" | "." | ".." => None,
        _ => Some(name.to_string()),
    }
}

/// `YYYYmmdd_HHMMSS_<name>`, or `YYYYmmdd_HHMMSS_<n>_<name>` for the n-th
/// collision within the same second
pub fn stored_name(name: &str, at: DateTime<Local>, attempt: u32) -> String {
    let stamp = at.format("%Y%m%d_%H%M%S");
    match attempt {
        0 => format!("{stamp}_{name}"),
        n => format!("{stamp}_{n}_{name}"),
    }
}

/// Save `bytes` under a timestamp-prefixed name in `dir`.
///
/// Never replaces an existing file: a name already taken gets a counter.
pub async fn save(dir: &Path, name: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let at = Local::now();

    let mut attempt = 0;
    let (path, mut file) = loop {
        let path = dir.join(stored_name(name, at, attempt));
        match OpenOptions::new().write(true).create_new(true).open(&path).await {
            Ok(file) => break (path, file),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e),
        }
    };

    file.write_all(bytes).await?;
    file.flush().await?;
    Ok(path)
}
