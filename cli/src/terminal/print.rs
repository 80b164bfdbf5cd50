//! Terminal layout. Every line goes out as a `solid::print` event so the
//! subscriber decides where it lands.

use colored::*;
use solid_common::config::Config;
use solid_common::success;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{banner, colors, logging::PRINT_TARGET};

/// Width every rule and centred line is laid out against.
const LINE_WIDTH: usize = 60;

pub type Field<'a> = (&'a str, ColoredString);

pub fn emit(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn blank() {
    emit("");
}

fn rule(fill: &str) -> ColoredString {
    fill.repeat(LINE_WIDTH).color(colors::SEPARATOR)
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 {
        return;
    }
    banner::print();
    let version = format!("v{}", env!("CARGO_PKG_VERSION"));
    centred(&version.color(colors::ACCENT).to_string());
}

/// Opens a section: `──── ⟦ TITLE ⟧ ────`. Suppressed from `-q` on.
pub fn section(title: &str, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    let label = format!(" {} ", title.to_uppercase());
    let pad = LINE_WIDTH.saturating_sub(UnicodeWidthStr::width(label.as_str()));
    emit(&format!(
        "{}{}{}",
        "─".repeat(pad / 2).color(colors::SEPARATOR),
        label.color(colors::PRIMARY).bold(),
        "─".repeat(pad - pad / 2).color(colors::SEPARATOR)
    ));
}

fn centred(msg: &str) {
    let indent = LINE_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2;
    emit(&format!("{}{}", " ".repeat(indent), msg));
}

/// Closing line of a command: centred under a rule, or a plain success log when quiet.
pub fn summary(msg: &str, cfg: &Config) {
    if cfg.quiet > 0 {
        success!("{msg}");
        return;
    }
    emit(&rule("═").to_string());
    centred(msg);
}

pub fn bullet<T: AsRef<str>>(msg: T) {
    emit(&format!("{} {}", "•".color(colors::SEPARATOR), msg.as_ref()));
}

/// Key/value pairs with keys padded by dots to a shared column.
pub fn fields(fields: &[Field<'_>]) {
    let width = key_width(fields);
    for (key, value) in fields {
        emit(&format!("  {} {}", dotted(key, width), value));
    }
}

/// A numbered heading with its fields drawn as one level of tree branches.
pub fn entry(idx: usize, name: &str, fields: &[Field<'_>]) {
    emit(&format!(
        "{}{}{} {}",
        "#".color(colors::SEPARATOR),
        (idx + 1).to_string().color(colors::ACCENT),
        ":".color(colors::SEPARATOR),
        name.color(colors::PRIMARY).bold()
    ));

    let width = key_width(fields);
    for (i, (key, value)) in fields.iter().enumerate() {
        let branch = if i + 1 == fields.len() { "└─" } else { "├─" };
        emit(&format!(
            "   {} {} {}",
            branch.color(colors::SEPARATOR),
            dotted(key, width),
            value
        ));
    }
}

fn key_width(fields: &[Field<'_>]) -> usize {
    fields
        .iter()
        .map(|(key, _)| UnicodeWidthStr::width(*key))
        .max()
        .unwrap_or(0)
}

fn dotted(key: &str, width: usize) -> String {
    let dots = ".".repeat(width.saturating_sub(UnicodeWidthStr::width(key)) + 1);
    format!(
        "{}{}{}",
        key.color(colors::TEXT_DEFAULT),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    )
}

pub fn no_results(what: &str) {
    emit(&format!("{} {}", "∅".red().bold(), what.red()));
}

pub fn footer(cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }
    emit(&rule("─").to_string());
}
