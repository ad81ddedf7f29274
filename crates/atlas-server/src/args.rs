use std::path::PathBuf;

use clap::Parser;

/// Command-line interface for the Atlas planet registry server
///
/// Atlas serves a small JSON REST API over a SQLite-backed registry of
/// planets. All state lives in a single database file; everything else is
/// configured on the command line.
#[derive(Parser)]
#[command(version, about, name = "atlas")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/atlas/atlas.db
    #[arg(long)]
    pub database_file: Option<PathBuf>,

    /// Address to bind the HTTP listener to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP listener to
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}
