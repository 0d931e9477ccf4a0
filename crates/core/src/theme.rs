use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ThemeError {
    #[error("{option} must be a #RRGGBB color, got `{raw}`")]
    InvalidColor { option: &'static str, raw: String },
}

/// Page-wide colors, passed explicitly to the renderer and the UI root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    background_color: String,
    text_color: String,
    accent_color: String,
}

/// Unvalidated theme input. Missing options fall back to the dark defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeDraft {
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub accent_color: Option<String>,
}

impl ThemeDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills unset options from `other`. Options already set here win.
    #[must_use]
    pub fn or(self, other: ThemeDraft) -> Self {
        Self {
            background_color: self.background_color.or(other.background_color),
            text_color: self.text_color.or(other.text_color),
            accent_color: self.accent_color.or(other.accent_color),
        }
    }

    /// Validate and normalize the draft.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError::InvalidColor` naming the first option that is not a
    /// `#RRGGBB` hex color.
    pub fn validate(self) -> Result<ThemeConfig, ThemeError> {
        let defaults = ThemeConfig::default();
        Ok(ThemeConfig {
            background_color: resolve_color(
                "backgroundColor",
                self.background_color,
                defaults.background_color,
            )?,
            text_color: resolve_color("textColor", self.text_color, defaults.text_color)?,
            accent_color: resolve_color("accentColor", self.accent_color, defaults.accent_color)?,
        })
    }
}

impl ThemeConfig {
    #[must_use]
    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    #[must_use]
    pub fn text_color(&self) -> &str {
        &self.text_color
    }

    #[must_use]
    pub fn accent_color(&self) -> &str {
        &self.accent_color
    }

    /// CSS custom properties for the page root, e.g. `--profile-bg: #1E1E1E; ...`.
    #[must_use]
    pub fn css_variables(&self) -> String {
        format!(
            "--profile-bg: {}; --profile-text: {}; --profile-accent: {};",
            self.background_color, self.text_color, self.accent_color
        )
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_color: "#1E1E1E".to_string(),
            text_color: "#FFFFFF".to_string(),
            accent_color: "#2196F3".to_string(),
        }
    }
}

fn resolve_color(
    option: &'static str,
    value: Option<String>,
    fallback: String,
) -> Result<String, ThemeError> {
    let Some(raw) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
        return Ok(fallback);
    };

    let is_hex = raw.len() == 7
        && raw.starts_with('#')
        && raw[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !is_hex {
        return Err(ThemeError::InvalidColor { option, raw });
    }

    Ok(raw.to_ascii_uppercase())
}
