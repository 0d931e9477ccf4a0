use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while parsing a proficiency string such as `"87%"`.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum FormatError {
    #[error("proficiency `{raw}` is missing a trailing `%`")]
    MissingPercent { raw: String },

    #[error("proficiency `{raw}` is not a number")]
    NotNumeric { raw: String },

    #[error("proficiency `{raw}` is outside 0-100")]
    OutOfRange { raw: String, value: f64 },
}

//
// ─── PROGRESS VALUE ───────────────────────────────────────────────────────────
//

/// Fractional completion in `[0.0, 1.0]`, as drawn by a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ProgressValue(f64);

impl ProgressValue {
    pub const ZERO: Self = Self(0.0);
    pub const FULL: Self = Self(1.0);

    /// Builds a progress value, clamping into `[0.0, 1.0]`.
    ///
    /// `NaN` is treated as no progress.
    #[must_use]
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self::ZERO;
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    /// Parses a proficiency string like `"95%"`.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` when the string is not a `<digits>%` literal in 0-100.
    pub fn from_percent_str(raw: &str) -> Result<Self, FormatError> {
        normalize_proficiency(raw).map(Self)
    }

    #[must_use]
    pub fn fraction(self) -> f64 {
        self.0
    }

    /// Whole percent for labels, rounded to the nearest integer.
    #[must_use]
    pub fn percent(self) -> u8 {
        // Range is [0, 100] after clamping, so the cast cannot truncate.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = (self.0 * 100.0).round() as u8;
        pct
    }
}

//
// ─── NORMALIZATION ────────────────────────────────────────────────────────────
//

/// Converts a proficiency literal (`"87%"`, `"12.5%"`) into a fraction in `[0.0, 1.0]`.
///
/// # Errors
///
/// - `FormatError::MissingPercent` if the string does not end in `%`.
/// - `FormatError::NotNumeric` if the prefix is empty or not a plain decimal.
/// - `FormatError::OutOfRange` if the number exceeds 100.
pub fn normalize_proficiency(raw: &str) -> Result<f64, FormatError> {
    let Some(digits) = raw.strip_suffix('%') else {
        return Err(FormatError::MissingPercent {
            raw: raw.to_string(),
        });
    };

    if !is_plain_decimal(digits) {
        return Err(FormatError::NotNumeric {
            raw: raw.to_string(),
        });
    }

    let value: f64 = digits.parse().map_err(|_| FormatError::NotNumeric {
        raw: raw.to_string(),
    })?;

    if value > 100.0 {
        return Err(FormatError::OutOfRange {
            raw: raw.to_string(),
            value,
        });
    }

    Ok(value / 100.0)
}

// Digits with at most one decimal point. Rejects signs, exponents and whitespace,
// all of which `f64::from_str` would otherwise accept.
fn is_plain_decimal(s: &str) -> bool {
    let mut seen_digit = false;
    let mut seen_dot = false;
    for ch in s.chars() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
