use profile_core::Table;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnVm {
    pub name: String,
    pub class: String,
    pub help: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRowVm {
    pub key: usize,
    pub cells: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableVm {
    pub columns: Vec<ColumnVm>,
    pub rows: Vec<TableRowVm>,
    pub show_index: bool,
}

impl From<&Table> for TableVm {
    fn from(table: &Table) -> Self {
        Self {
            columns: table
                .columns
                .iter()
                .map(|col| ColumnVm {
                    name: col.name.clone(),
                    class: format!("col-{}", col.width.as_str()),
                    help: col.help_text.clone(),
                })
                .collect(),
            rows: table
                .rows
                .iter()
                .enumerate()
                .map(|(key, cells)| TableRowVm {
                    key,
                    cells: cells.clone(),
                })
                .collect(),
            show_index: table.show_index,
        }
    }
}
