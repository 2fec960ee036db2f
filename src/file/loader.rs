//! YAML input loading.
//!
//! This module provides functions to load YAML documents from files or
//! stdin, parsing them into `YamlNode` trees ready to be flattened.
//! Gzip-compressed input is decompressed transparently.

use crate::document::node::YamlNode;
use crate::document::parser::parse_yaml_documents;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads and parses a YAML file from the filesystem.
///
/// Files ending in `.gz` are decompressed first. `document` selects which
/// document of a multi-document stream to return (0 for the first).
///
/// # Examples
///
/// ```no_run
/// use yamlflat::file::loader::load_yaml_file;
///
/// let root = load_yaml_file("values.yaml", 0).unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read (doesn't exist, permission denied, etc.)
/// - The file is gzipped but corrupted
/// - The contents are not valid YAML
/// - The stream has no document at index `document`
pub fn load_yaml_file<P: AsRef<Path>>(path: P, document: usize) -> Result<YamlNode> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    log::debug!(
        "loaded {} bytes from {}",
        content.len(),
        path_ref.display()
    );
    parse_content(&content, document)
}

/// Loads and parses YAML from standard input.
///
/// Reads until EOF. Input starting with the gzip magic bytes is
/// decompressed first.
///
/// # Errors
///
/// This function will return an error if:
/// - Reading from stdin fails
/// - The input is not valid UTF-8 or valid YAML
/// - The stream has no document at index `document`
pub fn load_yaml_from_stdin(document: usize) -> Result<YamlNode> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    log::debug!("loaded {} bytes from stdin", buffer.len());
    load_yaml_from_bytes(&buffer, document)
}

/// Parses YAML from raw bytes, decompressing gzip data when detected.
pub fn load_yaml_from_bytes(bytes: &[u8], document: usize) -> Result<YamlNode> {
    // Check for gzip magic bytes (0x1f 0x8b)
    let content = if bytes.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(bytes)?
    } else {
        String::from_utf8(bytes.to_vec()).context("Invalid UTF-8 in input")?
    };

    parse_content(&content, document)
}

/// Parses a YAML stream and picks one document.
///
/// An empty stream counts as a single empty document.
fn parse_content(content: &str, document: usize) -> Result<YamlNode> {
    let mut documents = parse_yaml_documents(content)?;
    if documents.is_empty() {
        documents.push(YamlNode::plain(""));
    }

    let count = documents.len();
    if document >= count {
        anyhow::bail!(
            "Document index {} out of range: input has {} document(s)",
            document,
            count
        );
    }
    Ok(documents.swap_remove(document))
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
