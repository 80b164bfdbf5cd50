pub mod children;
pub mod filter;
pub mod journal;
pub mod machines;
pub mod shapes;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use solid_common::models::product::{Color, Size};

#[derive(Parser)]
#[command(name = "solid")]
#[command(about = "The SOLID principles, one small program each.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (repeat for less)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show debug logs (repeat for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter the product catalog (Open/Closed)
    #[command(alias = "f")]
    Filter {
        /// Keep products of this color
        #[arg(short, long)]
        color: Option<Color>,
        /// Keep products of this size
        #[arg(short, long)]
        size: Option<Size>,
        /// Use the per-criterion filter instead of specifications
        #[arg(long)]
        legacy: bool,
    },
    /// List someone's children through the browser abstraction (Dependency Inversion)
    #[command(alias = "c")]
    Children {
        #[arg(default_value = "John")]
        name: String,
    },
    /// Drive printers, scanners and copiers (Interface Segregation)
    #[command(alias = "m")]
    Machines,
    /// Compute rectangle and square areas (Liskov Substitution)
    #[command(alias = "s")]
    Shapes {
        #[arg(long, default_value_t = 2)]
        width: u32,
        #[arg(long, default_value_t = 3)]
        height: u32,
        #[arg(long, default_value_t = 4)]
        side: u32,
    },
    /// Write, save and reload a journal (Single Responsibility)
    #[command(alias = "j")]
    Journal {
        /// Where to save the journal [default: <temp dir>/solid-journal.txt]
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Replace the file if it already exists
        #[arg(long)]
        overwrite: bool,
        /// Entries to add
        entries: Vec<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
