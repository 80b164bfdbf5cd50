use std::path::PathBuf;

use anyhow::Context;
use solid_common::config::Config;
use solid_common::success;
use solid_core::journal::Journal;
use solid_core::persistence::Persistence;
use tracing::warn;

use crate::terminal::print;

const DEFAULT_FILE: &str = "solid-journal.txt";
const DEFAULT_ENTRIES: [&str; 2] = ["I was crying today", "I ate a bug"];

pub fn journal(
    file: Option<PathBuf>,
    overwrite: bool,
    entries: Vec<String>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let path: PathBuf = file.unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_FILE));

    let journal = build_journal(&entries)?;

    print::section("journal", cfg);
    print_journal(&journal);

    let written = Persistence::save_to_file(&path, &journal.to_string(), overwrite)
        .with_context(|| format!("saving journal to {}", path.display()))?;
    if written {
        success!("journal saved to {}", path.display());
    } else {
        warn!("{} already exists, pass --overwrite to replace it", path.display());
    }

    let saved: String = Persistence::load_from_file(&path)
        .with_context(|| format!("loading journal from {}", path.display()))?;
    let restored: Journal = Journal::restore(&saved);

    print::section("reloaded journal", cfg);
    print_journal(&restored);
    Ok(())
}

fn build_journal(entries: &[String]) -> anyhow::Result<Journal> {
    let mut journal = Journal::new();
    if entries.is_empty() {
        for entry in DEFAULT_ENTRIES {
            journal.add_entry(entry)?;
        }
    } else {
        for entry in entries {
            journal
                .add_entry(entry)
                .with_context(|| format!("adding entry {entry:?}"))?;
        }
    }
    Ok(journal)
}

fn print_journal(journal: &Journal) {
    if journal.is_empty() {
        print::bullet("(empty)");
        return;
    }
    for entry in journal.entries() {
        print::bullet(entry);
    }
}
