/// A document handed between printers, scanners and copiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub body: String,
}

impl Document {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Number of printed pages, one per body line. Empty documents still take a page.
    pub fn pages(&self) -> usize {
        self.body.lines().count().max(1)
    }
}
