use crate::error::Result;
use crate::registry::TagSource;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Tag source backed by a fixed list of names
///
/// Used for `--tags-file` and for driving workflows in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedTagSource {
    tags: Vec<String>,
}

impl FixedTagSource {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FixedTagSource {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Read one tag name per line; blank lines are ignored and surrounding
    /// whitespace is trimmed.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut tags = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let name = line.trim();
            if !name.is_empty() {
                tags.push(name.to_string());
            }
        }
        Ok(FixedTagSource { tags })
    }

    /// Read tag names from `path`, or from stdin when `path` is `-`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path == Path::new("-") {
            let stdin = io::stdin();
            return Self::from_reader(stdin.lock());
        }
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Add a tag name to the list
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }
}

impl TagSource for FixedTagSource {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_reader_trims_and_skips_blank_lines() {
        let input = "v1.0.0\n\n  v1.0.1-rc.2  \r\nlatest\n";
        let source = FixedTagSource::from_reader(Cursor::new(input)).unwrap();
        assert_eq!(
            source.list_tags().unwrap(),
            vec!["v1.0.0", "v1.0.1-rc.2", "latest"]
        );
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "v0.1.0-dev.1").unwrap();
        writeln!(file, "v0.1.0-dev.2").unwrap();
        file.flush().unwrap();

        let source = FixedTagSource::from_path(file.path()).unwrap();
        assert_eq!(source.list_tags().unwrap(), vec!["v0.1.0-dev.1", "v0.1.0-dev.2"]);
    }

    #[test]
    fn test_from_missing_path() {
        let err = FixedTagSource::from_path("/nonexistent/harbor-tags.txt").unwrap_err();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_add_tag() {
        let mut source = FixedTagSource::default();
        source.add_tag("v2.0.0");
        assert_eq!(source.list_tags().unwrap(), vec!["v2.0.0"]);
    }
}
