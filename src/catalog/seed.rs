use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::core::library::{LibraryError, LibraryResult};

// CatalogSeedEntry is one (title, author) pair of the initial collection.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CatalogSeedEntry {
    pub title: String,
    pub author: String,
}

impl CatalogSeedEntry {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

/// Parses the collection text format: one book per line, e.g. `(The Yellow Wallpaper,Charlotte Perkins Gilman)`.
///
/// Surrounding parentheses or quotes are optional. Title and author are split at the last
/// comma so titles may contain commas themselves. Blank lines are skipped.
pub fn parse_collection(text: &str) -> LibraryResult<Vec<CatalogSeedEntry>> {
    let mut entries = vec![];
    for (number, line) in text.lines().enumerate() {
        let line = strip_wrapping(line.trim());
        if line.is_empty() {
            continue;
        }
        let (title, author) = line.rsplit_once(',').ok_or_else(|| LibraryError::validation(
            format!("collection line {} has no title/author separator: {}", number + 1, line).as_str(),
            Some("400".to_string())))?;
        entries.push(CatalogSeedEntry::new(title.trim(), author.trim()));
    }
    Ok(entries)
}

pub fn parse_json_collection(text: &str) -> LibraryResult<Vec<CatalogSeedEntry>> {
    Ok(serde_json::from_str(text)?)
}

pub fn load_collection<P: AsRef<Path>>(path: P) -> LibraryResult<Vec<CatalogSeedEntry>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let entries = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json_collection(text.as_str())?,
        _ => parse_collection(text.as_str())?,
    };
    debug!(path = %path.display(), books = entries.len(), "loaded collection");
    Ok(entries)
}

fn strip_wrapping(line: &str) -> &str {
    let line = line.strip_prefix('(').and_then(|l| l.strip_suffix(')')).unwrap_or(line).trim();
    line.strip_prefix('"').and_then(|l| l.strip_suffix('"')).unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use crate::catalog::seed::{CatalogSeedEntry, load_collection, parse_collection, parse_json_collection};
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_parse_collection_lines() {
        let text = "(Pride and Prejudice,Jane Austen)\n\n(A Doll's House : a play,Henrik Ibsen)\r\n";
        let entries = parse_collection(text).expect("should parse");
        assert_eq!(vec![
            CatalogSeedEntry::new("Pride and Prejudice", "Jane Austen"),
            CatalogSeedEntry::new("A Doll's House : a play", "Henrik Ibsen"),
        ], entries);
    }

    #[tokio::test]
    async fn test_should_split_at_last_comma() {
        let entries = parse_collection("\"Oh, the Places You'll Go!, Dr. Seuss\"").expect("should parse");
        assert_eq!(CatalogSeedEntry::new("Oh, the Places You'll Go!", "Dr. Seuss"), entries[0]);
    }

    #[tokio::test]
    async fn test_should_reject_line_without_author() {
        let res = parse_collection("(Emma,Jane Austen)\n(Untitled)");
        assert!(matches!(res, Err(LibraryError::Validation { ref message, .. }) if message.contains("line 2")));
    }

    #[tokio::test]
    async fn test_should_parse_json_collection() {
        let entries = parse_json_collection(r#"[{"title": "Emma", "author": "Jane Austen"}]"#).expect("should parse");
        assert_eq!(vec![CatalogSeedEntry::new("Emma", "Jane Austen")], entries);
        assert!(matches!(parse_json_collection("[{"), Err(LibraryError::Serialization { .. })));
    }

    #[tokio::test]
    async fn test_should_load_collection_file() {
        let path = std::env::temp_dir().join(format!("collection-{}.txt", uuid::Uuid::new_v4()));
        std::fs::write(&path, "(Emma,Jane Austen)\n(Walden,Henry David Thoreau)\n").expect("should write seed");
        let entries = load_collection(&path).expect("should load");
        let _ = std::fs::remove_file(&path);
        assert_eq!(2, entries.len());
        assert!(matches!(load_collection(&path), Err(LibraryError::Runtime { .. })));
    }

    #[tokio::test]
    async fn test_should_load_json_collection_file() {
        let path = std::env::temp_dir().join(format!("collection-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, r#"[{"title": "Walden, or Life in the Woods", "author": "Henry David Thoreau"}]"#)
            .expect("should write seed");
        let entries = load_collection(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(vec![CatalogSeedEntry::new("Walden, or Life in the Woods", "Henry David Thoreau")],
                   entries.expect("should load"));
    }
}
