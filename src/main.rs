use std::{io::{self, BufRead, Write}, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use qparse::{Config, Session, SessionError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qparse")]
#[command(about = "Parses SELECT ... FROM ... WHERE queries into JSON", version = "0.1.0")]
struct Cli {
    /// Parse this query and exit instead of starting the prompt.
    #[arg(short, long)]
    query: Option<String>,

    /// With --query, write the save file instead of the parse report.
    #[arg(short, long, requires = "query")]
    save: bool,

    /// Directory the JSON files are written to.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let session = Session::new(Config::in_dir(&cli.output_dir));
    let mut stdout = io::stdout().lock();

    if let Some(query) = cli.query {
        let result = if cli.save {
            session.save_query(&query, &mut stdout)
        } else {
            session.parse_query(&query, &mut stdout)
        };

        return match result {
            Ok(_) => Ok(()),
            // the message is already on stdout
            Err(SessionError::Parse(_)) => std::process::exit(1),
            Err(err) => Err(err.into()),
        };
    }

    prompt(&session, &mut stdout)
}

fn prompt<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        write!(out, "qparse> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        let result = match input {
            "" => continue,
            "exit" | "quit" => break,
            "help" => session.help(out),
            _ => match input.strip_prefix("save ") {
                Some(query) => session.save_query(query, out).map(|_| ()),
                None => session.parse_query(input, out).map(|_| ()),
            },
        };

        match result {
            // already printed by the session
            Ok(()) | Err(SessionError::Parse(_)) => {},
            Err(err) => writeln!(out, "Error: {}", err)?,
        }
    }

    Ok(())
}
