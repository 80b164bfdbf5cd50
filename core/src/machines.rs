//! # Office Machines
//!
//! Each capability is its own narrow trait, so a device only implements what
//! it can actually do. An [`OldPrinter`] is a [`Printer`] and nothing else.
//! Devices that combine capabilities either implement several traits
//! ([`Photocopier`]) or delegate to single-purpose parts ([`DelegatingMachine`]).

use solid_common::models::document::Document;
use tracing::debug;

/// Result of printing a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintJob {
    pub title: String,
    pub pages: usize,
}

impl PrintJob {
    fn of(doc: &Document) -> Self {
        Self {
            title: doc.title.clone(),
            pages: doc.pages(),
        }
    }
}

pub trait Printer {
    fn print(&mut self, doc: &Document) -> PrintJob;
}

pub trait Scanner {
    /// Scans whatever is on the glass. Scanning an empty glass yields a blank document.
    fn scan(&mut self) -> Document;
}

pub trait Copier {
    fn copy(&mut self, doc: &Document) -> Document;
}

/// A device able to both print and scan.
pub trait MultiFunctionDevice: Printer + Scanner {}

impl<T: Printer + Scanner + ?Sized> MultiFunctionDevice for T {}

/// Prints. That is all it does.
#[derive(Debug, Default)]
pub struct OldPrinter {
    pages_printed: usize,
}

impl OldPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages_printed(&self) -> usize {
        self.pages_printed
    }
}

impl Printer for OldPrinter {
    fn print(&mut self, doc: &Document) -> PrintJob {
        let job = PrintJob::of(doc);
        self.pages_printed += job.pages;
        debug!(title = %job.title, pages = job.pages, "old printer printed");
        job
    }
}

/// Scans the document placed on its glass.
#[derive(Debug, Default)]
pub struct FlatbedScanner {
    glass: Option<Document>,
    pages_scanned: usize,
}

impl FlatbedScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, doc: Document) {
        self.glass = Some(doc);
    }

    pub fn pages_scanned(&self) -> usize {
        self.pages_scanned
    }
}

impl Scanner for FlatbedScanner {
    fn scan(&mut self) -> Document {
        let doc = self.glass.clone().unwrap_or_default();
        self.pages_scanned += doc.pages();
        debug!(title = %doc.title, "flatbed scanned");
        doc
    }
}

/// Prints, scans and copies.
#[derive(Debug, Default)]
pub struct Photocopier {
    glass: Option<Document>,
    pages_printed: usize,
    pages_scanned: usize,
}

impl Photocopier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, doc: Document) {
        self.glass = Some(doc);
    }

    pub fn pages_printed(&self) -> usize {
        self.pages_printed
    }

    pub fn pages_scanned(&self) -> usize {
        self.pages_scanned
    }
}

impl Printer for Photocopier {
    fn print(&mut self, doc: &Document) -> PrintJob {
        let job = PrintJob::of(doc);
        self.pages_printed += job.pages;
        job
    }
}

impl Scanner for Photocopier {
    fn scan(&mut self) -> Document {
        let doc = self.glass.clone().unwrap_or_default();
        self.pages_scanned += doc.pages();
        doc
    }
}

impl Copier for Photocopier {
    fn copy(&mut self, doc: &Document) -> Document {
        self.place(doc.clone());
        let scanned = self.scan();
        self.print(&scanned);
        debug!(title = %scanned.title, "photocopier copied");
        scanned
    }
}

/// A multifunction device assembled from a separate printer and scanner.
pub struct DelegatingMachine {
    printer: Box<dyn Printer>,
    scanner: Box<dyn Scanner>,
}

impl DelegatingMachine {
    pub fn new(printer: Box<dyn Printer>, scanner: Box<dyn Scanner>) -> Self {
        Self { printer, scanner }
    }
}

impl Printer for DelegatingMachine {
    fn print(&mut self, doc: &Document) -> PrintJob {
        self.printer.print(doc)
    }
}

impl Scanner for DelegatingMachine {
    fn scan(&mut self) -> Document {
        self.scanner.scan()
    }
}
