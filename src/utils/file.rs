//! File utilities for capture input.

use sha2::{Digest, Sha256};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Calculate SHA-256 checksum of content.
pub fn calculate_checksum(content: &str) -> String {
    let hash = Sha256::digest(content.as_bytes());
    hex::encode(hash)
}

/// Check if a file is likely a text capture file.
pub fn is_text_file(path: &Path) -> bool {
    // Check by extension
    if let Some(ext) = path.extension() {
        let ext = ext.to_string_lossy().to_lowercase();
        if is_binary_extension(&ext) {
            return false;
        }
        if is_text_extension(&ext) {
            return true;
        }
    }

    // Check by reading first bytes
    if let Ok(file) = fs::File::open(path) {
        let mut buffer = [0u8; 512];
        let mut reader = std::io::BufReader::new(file);
        if let Ok(n) = reader.read(&mut buffer) {
            if n == 0 {
                return true; // Empty file is text
            }
            // Null bytes indicate a binary file
            if buffer[..n].contains(&0) {
                return false;
            }
            return true;
        }
    }

    false
}

/// Read file content with size limit.
pub fn read_file_content(path: &Path, max_size: u64) -> std::io::Result<String> {
    let metadata = fs::metadata(path)?;

    if metadata.len() > max_size {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!(
                "file exceeds maximum size: {} > {}",
                metadata.len(),
                max_size
            ),
        ));
    }

    fs::read_to_string(path)
}

/// Check if extension indicates a binary file.
fn is_binary_extension(ext: &str) -> bool {
    matches!(
        ext,
        "so" | "dll"
            | "dylib"
            | "apk"
            | "dex"
            | "png"
            | "jpg"
            | "jpeg"
            | "webp"
            | "mp3"
            | "ogg"
            | "wav"
            | "zip"
            | "gz"
            | "xz"
            | "7z"
            | "db"
            | "sqlite"
            | "bin"
            | "dat"
            | "pak"
            | "bundle"
            | "assets"
    )
}

/// Check if extension indicates a text file.
fn is_text_extension(ext: &str) -> bool {
    matches!(
        ext,
        "txt" | "log" | "cs" | "csv" | "tsv" | "json" | "jsonl" | "yaml" | "yml" | "toml"
            | "xml" | "ini" | "cfg" | "conf" | "md"
    )
}
