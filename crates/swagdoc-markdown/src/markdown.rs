//! A small tree of Markdown blocks, rendered to text once a page is assembled.

/// Separator row under a table header.
const TABLE_ALIGNMENT: &str = "---";

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: usize, text: String },
    Paragraph(String),
    /// A fenced code block; `info` is the fence's info string.
    Code { info: String, body: String },
    Table(Table),
}

impl Block {
    pub fn heading(level: usize, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn code(info: impl Into<String>, body: impl Into<String>) -> Self {
        Block::Code {
            info: info.into(),
            body: body.into(),
        }
    }

    /// Empty paragraphs carry nothing and are skipped on render.
    fn is_blank(&self) -> bool {
        matches!(self, Block::Paragraph(text) if text.trim().is_empty())
    }

    pub fn render(&self) -> String {
        match self {
            Block::Heading { level, text } => format!("{} {}", "#".repeat(*level), text),
            Block::Paragraph(text) => text.clone(),
            Block::Code { info, body } => format!("```{info}\n{body}\n```"),
            Block::Table(table) => table.render(),
        }
    }
}

/// A pipe table. Cells are written verbatim, so callers add their own backticks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.header.join(" | "));
        lines.push(vec![TABLE_ALIGNMENT; self.header.len()].join("|"));
        lines.extend(self.rows.iter().map(|row| row.join("|")));
        lines.join("\n")
    }
}

/// An ordered list of blocks making up one page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Blocks separated by one blank line, with a trailing newline.
    pub fn render(&self) -> String {
        let rendered: Vec<String> = self
            .blocks
            .iter()
            .filter(|b| !b.is_blank())
            .map(Block::render)
            .collect();
        if rendered.is_empty() {
            return String::new();
        }
        let mut out = rendered.join("\n\n");
        out.push('\n');
        out
    }
}

impl Extend<Block> for Document {
    fn extend<T: IntoIterator<Item = Block>>(&mut self, iter: T) {
        self.blocks.extend(iter);
    }
}
