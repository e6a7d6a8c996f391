// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML file value source.
//!
//! This module provides a source that serves values from a YAML document,
//! keeping the document's native types intact.

use crate::domain::{RawValue, SourceError};
use crate::ports::{ValueParser, ValueSource};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for YAML documents (10MB)
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

const SOURCE_NAME: &str = "yaml-file";

/// YAML parser producing a `RawValue` tree.
///
/// Integers stay integers, sequences stay lists, and mapping keys keep their
/// YAML type, so `{1: a}` is a map with an integer key.
///
/// # Examples
///
/// ```rust
/// use typed_registry::adapters::YamlParser;
/// use typed_registry::domain::RawValue;
/// use typed_registry::ports::ValueParser;
///
/// let parser = YamlParser::new();
/// let root = parser.parse("port: 5432\nhosts: [a, b]").unwrap();
/// assert_eq!(root.get_entry("port"), Some(&RawValue::Int(5432)));
/// assert_eq!(root.get_entry("hosts"), Some(&RawValue::from(vec!["a", "b"])));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }
}

impl ValueParser for YamlParser {
    fn parse(&self, content: &str) -> Result<RawValue, SourceError> {
        serde_yaml::from_str(content).map_err(|e| SourceError::Parse {
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Value source backed by a YAML document.
///
/// A key first matches a top-level entry by name. If there is none and the key
/// contains dots, it is resolved as a path through nested mappings, with
/// numeric segments indexing into lists (`servers.0.host`).
///
/// # Examples
///
/// ```rust
/// use typed_registry::adapters::YamlFileSource;
/// use typed_registry::domain::RawValue;
/// use typed_registry::ports::ValueSource;
///
/// let source = YamlFileSource::from_str("database:\n  port: 5432").unwrap();
/// assert_eq!(source.get("database.port"), Some(RawValue::Int(5432)));
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileSource {
    /// Path to the YAML file, if the document came from disk
    file_path: Option<PathBuf>,
    /// Document root
    document: RawValue,
    parser: YamlParser,
}

impl YamlFileSource {
    /// Loads a YAML file.
    ///
    /// Fails if the file cannot be read, exceeds 10MB, or is not a YAML mapping.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let file_path = path
            .as_ref()
            .canonicalize()
            .map_err(|e| io_error(path.as_ref(), "Invalid or inaccessible path", e))?;

        let parser = YamlParser::new();
        let document = load_document(&parser, &file_path)?;

        Ok(Self {
            file_path: Some(file_path),
            document,
            parser,
        })
    }

    /// Parses a YAML document held in memory.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, SourceError> {
        let parser = YamlParser::new();
        let document = root_mapping(parser.parse(content)?)?;

        Ok(Self {
            file_path: None,
            document,
            parser,
        })
    }

    /// Loads `config.yaml` from the OS-appropriate configuration directory.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use typed_registry::adapters::YamlFileSource;
    ///
    /// let source = YamlFileSource::from_default_location("myapp", "com.example").unwrap();
    /// ```
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self, SourceError> {
        Self::with_filename(app_name, qualifier, "config.yaml")
    }

    /// Loads `filename` from the OS-appropriate configuration directory.
    pub fn with_filename(
        app_name: &str,
        qualifier: &str,
        filename: &str,
    ) -> Result<Self, SourceError> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            SourceError::NoProjectDirs {
                app_name: app_name.to_string(),
            }
        })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns the path of the backing file, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Re-reads the backing file.
    ///
    /// Sources parsed from memory have nothing to reload and return `Ok(())`.
    pub fn reload(&mut self) -> Result<(), SourceError> {
        if let Some(path) = &self.file_path {
            self.document = load_document(&self.parser, path)?;
        }
        Ok(())
    }

    fn lookup(&self, key: &str) -> Option<&RawValue> {
        if let Some(value) = self.document.get_entry(key) {
            return Some(value);
        }
        if !key.contains('.') {
            return None;
        }

        key.split('.').try_fold(&self.document, |node, segment| match node {
            RawValue::Map(_) => node.get_entry(segment),
            RawValue::List(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }
}

impl ValueSource for YamlFileSource {
    fn get(&self, key: &str) -> Option<RawValue> {
        self.lookup(key).cloned()
    }

    fn name(&self) -> &str {
        SOURCE_NAME
    }
}

fn io_error(path: &Path, what: &str, source: std::io::Error) -> SourceError {
    SourceError::Io {
        source_name: SOURCE_NAME.to_string(),
        message: format!(
            "{}: {}",
            what,
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("<unknown>")
        ),
        source,
    }
}

fn load_document(parser: &YamlParser, path: &Path) -> Result<RawValue, SourceError> {
    let metadata =
        fs::metadata(path).map_err(|e| io_error(path, "Failed to read file metadata", e))?;

    if metadata.len() > MAX_YAML_FILE_SIZE {
        return Err(SourceError::TooLarge {
            size: metadata.len(),
            max: MAX_YAML_FILE_SIZE,
        });
    }

    let content = fs::read_to_string(path)
        .map_err(|e| io_error(path, "Failed to read configuration file", e))?;

    let document = root_mapping(parser.parse(&content)?)?;
    tracing::debug!(
        "Loaded YAML document from {} ({} bytes)",
        path.display(),
        metadata.len()
    );
    Ok(document)
}

// An empty document is an empty mapping; anything else must be a mapping.
fn root_mapping(document: RawValue) -> Result<RawValue, SourceError> {
    match document {
        RawValue::Null => Ok(RawValue::Map(Vec::new())),
        RawValue::Map(_) => Ok(document),
        other => Err(SourceError::Parse {
            message: format!("YAML root must be a mapping, got {}", other.type_name()),
            source: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_parser_native_types() {
        let parser = YamlParser::new();
        let yaml = r#"
string_value: hello
quoted_number: "42"
number_value: 42
negative: -7
float_value: 1.5
bool_value: true
null_value: null
"#;
        let root = parser.parse(yaml).unwrap();

        assert_eq!(root.get_entry("string_value"), Some(&RawValue::from("hello")));
        assert_eq!(root.get_entry("quoted_number"), Some(&RawValue::from("42")));
        assert_eq!(root.get_entry("number_value"), Some(&RawValue::Int(42)));
        assert_eq!(root.get_entry("negative"), Some(&RawValue::Int(-7)));
        assert_eq!(root.get_entry("float_value"), Some(&RawValue::Float(1.5)));
        assert_eq!(root.get_entry("bool_value"), Some(&RawValue::Bool(true)));
        assert_eq!(root.get_entry("null_value"), Some(&RawValue::Null));
    }

    #[test]
    fn test_yaml_parser_non_string_keys() {
        let root = YamlParser::new().parse("codes:\n  1: one\n  two: 2").unwrap();
        let codes = root.get_entry("codes").unwrap().clone();
        assert_eq!(
            codes,
            RawValue::Map(vec![
                (RawValue::Int(1), RawValue::from("one")),
                (RawValue::from("two"), RawValue::Int(2)),
            ])
        );
    }

    #[test]
    fn test_yaml_parser_invalid() {
        let result = YamlParser::new().parse("invalid: yaml: content:");
        assert!(matches!(result, Err(SourceError::Parse { .. })));
    }

    #[test]
    fn test_yaml_parser_u64_overflow() {
        let result = YamlParser::new().parse("big: 18446744073709551615");
        assert!(result.is_err());
    }

    #[test]
    fn test_yaml_parser_supported_extensions() {
        let parser = YamlParser::default();
        let extensions = parser.supported_extensions().to_vec();
        assert_eq!(extensions, vec!["yaml", "yml"]);
    }

    #[test]
    fn test_yaml_source_top_level_key() {
        let source = YamlFileSource::from_str("app.name: flat\napp:\n  name: nested").unwrap();
        assert_eq!(source.get("app.name"), Some(RawValue::from("flat")));
    }

    #[test]
    fn test_yaml_source_dotted_path() {
        let yaml = r#"
app:
  database:
    port: 5432
servers:
  - host: a
  - host: b
"#;
        let source = YamlFileSource::from_str(yaml).unwrap();
        assert_eq!(source.get("app.database.port"), Some(RawValue::Int(5432)));
        assert_eq!(source.get("servers.1.host"), Some(RawValue::from("b")));
        assert_eq!(source.get("servers.2.host"), None);
        assert_eq!(source.get("app.missing"), None);
        assert_eq!(source.get("app.database.port.extra"), None);
    }

    #[test]
    fn test_yaml_source_whole_subtree() {
        let source = YamlFileSource::from_str("hosts:\n  - a\n  - b").unwrap();
        assert_eq!(source.get("hosts"), Some(RawValue::from(vec!["a", "b"])));
    }

    #[test]
    fn test_yaml_source_empty_document() {
        let source = YamlFileSource::from_str("").unwrap();
        assert_eq!(source.get("anything"), None);
    }

    #[test]
    fn test_yaml_source_rejects_scalar_root() {
        let result = YamlFileSource::from_str("just a string");
        assert!(matches!(result, Err(SourceError::Parse { .. })));
    }

    #[test]
    fn test_yaml_source_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "database:\n  host: localhost\n  port: 5432").unwrap();

        let source = YamlFileSource::from_file(temp_file.path()).unwrap();
        assert_eq!(source.name(), "yaml-file");
        assert_eq!(source.get("database.host"), Some(RawValue::from("localhost")));
        assert_eq!(
            source.file_path(),
            Some(temp_file.path().canonicalize().unwrap().as_path())
        );
    }

    #[test]
    fn test_yaml_source_reload() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();
        fs::write(&path, "key: initial_value\n").unwrap();

        let mut source = YamlFileSource::from_file(&path).unwrap();
        assert_eq!(source.get("key"), Some(RawValue::from("initial_value")));

        fs::write(&path, "key: 7\n").unwrap();
        source.reload().unwrap();
        assert_eq!(source.get("key"), Some(RawValue::Int(7)));
    }

    #[test]
    fn test_yaml_source_reload_in_memory() {
        let mut source = YamlFileSource::from_str("key: value").unwrap();
        assert!(source.reload().is_ok());
        assert_eq!(source.file_path(), None);
    }

    #[test]
    fn test_yaml_source_nonexistent_file() {
        let result = YamlFileSource::from_file("/nonexistent/path/to/config.yaml");
        assert!(matches!(result, Err(SourceError::Io { .. })));
    }
}
