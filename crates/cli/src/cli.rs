use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "dayplan",
    version,
    about = "Lay out a day's tasks into side-by-side lanes"
)]
pub struct Cli {
    /// Schedule file: a JSON task array, or an object with `tasks` and
    /// optional `params` / `options`
    pub schedule: PathBuf,
    /// Layout parameters JSON, replacing any in the schedule file
    #[arg(long)]
    pub params: Option<PathBuf>,
    /// Output format
    #[arg(long, short, value_enum, default_value_t = Format::Json)]
    pub format: Format,
    /// Current time as HH:MM (now line, late tasks)
    #[arg(long)]
    pub now: Option<String>,
    /// Use the dark palette for SVG output
    #[arg(long)]
    pub dark: bool,
    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Laid-out tasks as pretty JSON
    Json,
    /// Timeline as a standalone SVG document
    Svg,
    /// Plain-text agenda grouped by overlap cluster
    Agenda,
}
