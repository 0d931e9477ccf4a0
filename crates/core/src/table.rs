/// Relative width hint for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnWidth {
    Small,
    #[default]
    Medium,
    Large,
}

impl ColumnWidth {
    /// Class name suffix used by the stylesheet (`col-small`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnWidth::Small => "small",
            ColumnWidth::Medium => "medium",
            ColumnWidth::Large => "large",
        }
    }
}

/// Per-column presentation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub width: ColumnWidth,
    pub help_text: Option<String>,
}

impl ColumnDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            width: ColumnWidth::default(),
            help_text: None,
        }
    }

    #[must_use]
    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }
}

/// A rendered table: column descriptors plus cell text, row by row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<Vec<String>>,
    pub show_index: bool,
}

impl Table {
    #[must_use]
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            show_index: false,
        }
    }

    /// Appends a row. Short rows are padded with empty cells and long rows are
    /// truncated so every row matches the column count.
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.columns.len(), String::new());
        self.rows.push(cells);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
