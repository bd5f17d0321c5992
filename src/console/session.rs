use std::io::Write;

use tracing::debug;

use crate::{
    Config,
    console::{HELP_TEXT, Report, SessionError},
    document::{JsonLayout, Sidecar},
    parser::{ParsedQuery, QueryParser},
};

/// Front-end actions. Every call receives the query text and the sink to
/// print to; nothing is kept between calls besides the configuration.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Prints the report and refreshes the compact parse sidecar.
    pub fn parse_query<W: Write>(&self, query: &str, sink: &mut W) -> Result<ParsedQuery, SessionError> {
        let parsed = self.parse_or_report(query, sink)?;

        write!(sink, "{}", Report(&parsed))?;
        Sidecar::write(&self.config.parse_path(), &parsed, JsonLayout::Compact)?;

        Ok(parsed)
    }

    /// Writes the pretty save file and confirms it on the sink.
    pub fn save_query<W: Write>(&self, query: &str, sink: &mut W) -> Result<ParsedQuery, SessionError> {
        let parsed = self.parse_or_report(query, sink)?;

        Sidecar::write(&self.config.save_path(), &parsed, JsonLayout::Pretty)?;
        writeln!(sink, "Save Successful: Parsed query has been saved to {}.", self.config.save_file)?;

        Ok(parsed)
    }

    pub fn help<W: Write>(&self, sink: &mut W) -> Result<(), SessionError> {
        writeln!(sink, "{}", HELP_TEXT)?;
        Ok(())
    }

    fn parse_or_report<W: Write>(&self, query: &str, sink: &mut W) -> Result<ParsedQuery, SessionError> {
        let query = query.trim();
        debug!(query, "session input");

        match QueryParser::parse(query) {
            Ok(parsed) => Ok(parsed),
            Err(err) => {
                writeln!(sink, "Error: {}", err)?;
                Err(err.into())
            },
        }
    }
}
