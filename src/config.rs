use std::path::{Path, PathBuf};

pub const PARSE_FILE: &str = "parsed_query.json";
pub const SAVE_FILE: &str = "output.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub output_dir: PathBuf,
    /// Compact sidecar written on every parse.
    pub parse_file: String,
    /// Pretty sidecar written by the save action.
    pub save_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            parse_file: PARSE_FILE.to_string(),
            save_file: SAVE_FILE.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_dir(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn with_parse_file(mut self, name: &str) -> Self { self.parse_file = name.to_string(); self }
    pub fn with_save_file(mut self, name: &str) -> Self { self.save_file = name.to_string(); self }

    pub fn parse_path(&self) -> PathBuf {
        self.output_dir.join(&self.parse_file)
    }

    pub fn save_path(&self) -> PathBuf {
        self.output_dir.join(&self.save_file)
    }
}
