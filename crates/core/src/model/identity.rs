use chrono::NaiveDate;

/// A labelled value in the identity block, e.g. `Student ID: NO2023-001`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityField {
    pub label: String,
    pub value: String,
}

impl IdentityField {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Who the profile belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentIdentity {
    pub display_name: String,
    pub student_id: String,
    pub gender: String,
    pub registered_on: NaiveDate,
    pub wellbeing: String,
    pub access_level: String,
}

impl StudentIdentity {
    /// Identity fields in display order. The display name is the page title and is
    /// not repeated here.
    #[must_use]
    pub fn fields(&self) -> Vec<IdentityField> {
        vec![
            IdentityField::new("Student ID", &self.student_id),
            IdentityField::new("Gender", &self.gender),
            IdentityField::new(
                "Registered",
                self.registered_on.format("%Y-%m-%d").to_string(),
            ),
            IdentityField::new("Wellbeing", &self.wellbeing),
            IdentityField::new("Level", &self.access_level),
        ]
    }
}
