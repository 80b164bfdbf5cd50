use colored::*;
use solid_common::config::Config;
use solid_common::models::document::Document;
use solid_core::machines::{
    Copier, DelegatingMachine, FlatbedScanner, OldPrinter, Photocopier, Printer, Scanner,
};

use crate::terminal::{colors, format, print};

pub fn machines(cfg: &Config) -> anyhow::Result<()> {
    let doc = Document::new("quarterly report", "revenue\ncosts\noutlook");

    let mut old_printer = OldPrinter::new();
    let mut photocopier = Photocopier::new();
    let mut flatbed = FlatbedScanner::new();
    flatbed.place(Document::new("receipt", "total: 42"));
    let mut combined = DelegatingMachine::new(Box::new(OldPrinter::new()), Box::new(flatbed));

    print::section("printing", cfg);
    let printers: [(&str, &mut dyn Printer); 3] = [
        ("old printer", &mut old_printer),
        ("photocopier", &mut photocopier),
        ("combined machine", &mut combined),
    ];
    let jobs: Vec<print::Field<'_>> = printers
        .into_iter()
        .map(|(name, printer)| {
            let job = printer.print(&doc);
            let line = format!("'{}', {} pages", job.title, format::count(job.pages));
            (name, line.color(colors::TEXT_DEFAULT))
        })
        .collect();
    print::fields(&jobs);

    print::section("scanning and copying", cfg);
    let scanned: Document = combined.scan();
    let copy: Document = photocopier.copy(&scanned);
    print::fields(&[
        ("combined machine scanned", title(&scanned)),
        ("photocopier copied", title(&copy)),
    ]);

    print::section("page counters", cfg);
    print::fields(&[
        ("old printer printed", format::count(old_printer.pages_printed())),
        ("photocopier printed", format::count(photocopier.pages_printed())),
        ("photocopier scanned", format::count(photocopier.pages_scanned())),
    ]);
    Ok(())
}

fn title(doc: &Document) -> ColoredString {
    format!("'{}'", doc.title).color(colors::TEXT_DEFAULT)
}
