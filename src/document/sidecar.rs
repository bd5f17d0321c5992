use std::{fs::File, io::{self, BufReader, BufWriter, Write}, path::Path};

use tracing::info;

use crate::{document::{JsonLayout, QueryDocument}, parser::ParsedQuery};

/// JSON file written next to a run. Each write replaces the previous one.
pub struct Sidecar;

impl Sidecar {
    pub fn write(path: &Path, query: &ParsedQuery, layout: JsonLayout) -> io::Result<()> {
        let file = File::create(path)?;
        let mut w = BufWriter::new(file);

        QueryDocument::from(query).to_writer(&mut w, layout)?;
        w.flush()?;

        info!(path = %path.display(), ?layout, "sidecar written");
        Ok(())
    }

    pub fn read(path: &Path) -> io::Result<QueryDocument> {
        let file = File::open(path)?;
        let document = serde_json::from_reader(BufReader::new(file))?;
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::document::{JsonLayout, Sidecar};
    use crate::parser::ParsedQuery;

    #[test]
    pub fn test_write_and_read() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("output.json");

        let query = ParsedQuery::try_from("SELECT a FROM t WHERE a > 1").expect("Failed to parse query");
        Sidecar::write(&path, &query, JsonLayout::Pretty).expect("Failed to write sidecar");

        let document = Sidecar::read(&path).expect("Failed to read sidecar");
        assert_eq!(document.output, vec!["a"]);
        assert_eq!(document.table_name.as_deref(), Some("PAR_DATA"));
        assert_eq!(document.subfunctions, Some(1));
    }

    #[test]
    pub fn test_write_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("parsed_query.json");

        let first = ParsedQuery::try_from("SELECT a FROM t WHERE a > 1").unwrap();
        let second = ParsedQuery::try_from("SELECT b FROM t").unwrap();
        Sidecar::write(&path, &first, JsonLayout::Compact).unwrap();
        Sidecar::write(&path, &second, JsonLayout::Compact).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"Output":["b"]}"#);
    }

    #[test]
    pub fn test_write_into_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("output.json");

        let query = ParsedQuery::try_from("SELECT a FROM t").unwrap();
        assert!(Sidecar::write(&path, &query, JsonLayout::Compact).is_err());
    }

    #[test]
    pub fn test_read_invalid_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        fs::write(&path, "not json").unwrap();

        assert!(Sidecar::read(&path).is_err());
    }
}
