use profile_core::DisplayRow;
use profile_core::model::ProgressValue;

#[derive(Clone, Debug, PartialEq)]
pub struct RowVm {
    pub title: String,
    pub emphasis: bool,
    pub progress: Option<ProgressValue>,
    pub caption: Option<String>,
    pub caption_class: String,
    pub row_class: &'static str,
}

impl From<&DisplayRow> for RowVm {
    fn from(row: &DisplayRow) -> Self {
        Self {
            title: row.title.clone(),
            emphasis: row.emphasis,
            progress: row.progress,
            caption: row.caption.clone(),
            caption_class: format!("row-caption {}", row.tone.css_class()),
            row_class: if row.degraded {
                "display-row display-row--degraded"
            } else {
                "display-row"
            },
        }
    }
}

#[must_use]
pub fn map_rows(rows: &[DisplayRow]) -> Vec<RowVm> {
    rows.iter().map(RowVm::from).collect()
}
