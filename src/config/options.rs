//! Options resolver: turns raw stack attributes into validated [`Options`].
//!
//! Attribute text is read as a number and rounded up, so `"2.1"` becomes 3.
//! Out-of-range or unparseable values never fail resolution; they fall back
//! to the documented default and produce an [`OptionsWarning`].

use thiserror::Error;

pub const DEFAULT_START: i64 = 1;
pub const DEFAULT_MIN: i64 = 1;
pub const DEFAULT_MAX: i64 = 99;

/// Bounds and initial value of one widget.
///
/// `max == 0` means the counter is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    start: i64,
    min: i64,
    max: i64,
}

/// Attribute text as supplied by the host, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions {
    pub start: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
}

/// Non-fatal problems found while resolving options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsWarning {
    #[error("start '{raw}' is not a number, falling back to default {default}", default = DEFAULT_START)]
    InvalidStart { raw: String },

    #[error("min '{raw}' is lower than 1, falling back to default {default}", default = DEFAULT_MIN)]
    InvalidMin { raw: String },

    #[error("max '{raw}' is lower than 0, falling back to default {default}", default = DEFAULT_MAX)]
    InvalidMax { raw: String },

    #[error("max {max} is lower than min {min}, raising max to {min}")]
    MaxBelowMin { min: i64, max: i64 },
}

/// Result of resolving raw attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub options: Options,
    pub warnings: Vec<OptionsWarning>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl Options {
    /// Resolves attribute text, logging every warning.
    pub fn resolve(raw: &RawOptions) -> Resolved {
        let mut warnings = Vec::new();

        let start = match parse_attr(raw.start.as_deref()) {
            Attr::Missing => DEFAULT_START,
            Attr::Value(value) => value,
            Attr::Invalid(raw) => {
                warnings.push(OptionsWarning::InvalidStart { raw });
                DEFAULT_START
            }
        };

        let min = match parse_attr(raw.min.as_deref()) {
            Attr::Missing => DEFAULT_MIN,
            Attr::Value(value) if value >= 1 => value,
            Attr::Value(_) | Attr::Invalid(_) => {
                warnings.push(OptionsWarning::InvalidMin {
                    raw: raw.min.clone().unwrap_or_default(),
                });
                DEFAULT_MIN
            }
        };

        let max = match parse_attr(raw.max.as_deref()) {
            Attr::Missing => DEFAULT_MAX,
            Attr::Value(value) if value >= 0 => value,
            Attr::Value(_) | Attr::Invalid(_) => {
                warnings.push(OptionsWarning::InvalidMax {
                    raw: raw.max.clone().unwrap_or_default(),
                });
                DEFAULT_MAX
            }
        };

        let mut resolved = Self::from_values(start, min, max);
        warnings.append(&mut resolved.warnings);

        for warning in &warnings {
            tracing::warn!(target: "stack_icon::options", "{warning}");
        }

        Resolved {
            options: resolved.options,
            warnings,
        }
    }

    /// Builds options from numbers, applying the same clamping as
    /// [`Options::resolve`]. Does not log.
    pub fn from_values(start: i64, min: i64, max: i64) -> Resolved {
        let mut warnings = Vec::new();
        let min = min.max(1);
        let mut max = max.max(0);

        if max != 0 && max < min {
            warnings.push(OptionsWarning::MaxBelowMin { min, max });
            max = min;
        }

        let mut start = start.max(1).max(min);
        if max != 0 {
            start = start.min(max);
        }

        Resolved {
            options: Self { start, min, max },
            warnings,
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound, `0` when unbounded.
    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn is_unbounded(&self) -> bool {
        self.max == 0
    }

    /// Whether `value` is an acceptable quantity under these bounds.
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min.max(1) && (self.is_unbounded() || value <= self.max)
    }
}

enum Attr {
    Missing,
    Value(i64),
    Invalid(String),
}

/// Reads attribute text as a number rounded up. Blank text counts as missing.
fn parse_attr(raw: Option<&str>) -> Attr {
    let Some(text) = raw else {
        return Attr::Missing;
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Attr::Missing;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Attr::Value(value.ceil() as i64),
        _ => Attr::Invalid(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(start: Option<&str>, min: Option<&str>, max: Option<&str>) -> RawOptions {
        RawOptions {
            start: start.map(str::to_string),
            min: min.map(str::to_string),
            max: max.map(str::to_string),
        }
    }

    #[test]
    fn missing_attributes_use_defaults() {
        let resolved = Options::resolve(&RawOptions::default());
        assert_eq!(resolved.options, Options::default());
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn fractional_values_round_up() {
        let resolved = Options::resolve(&raw(Some("2.1"), Some("1.5"), Some("9.2")));
        assert_eq!(resolved.options.start(), 3);
        assert_eq!(resolved.options.min(), 2);
        assert_eq!(resolved.options.max(), 10);
    }

    #[test]
    fn start_is_floored_to_one() {
        let resolved = Options::resolve(&raw(Some("-4"), None, None));
        assert_eq!(resolved.options.start(), 1);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn start_is_clamped_into_bounds() {
        let resolved = Options::resolve(&raw(Some("500"), Some("3"), Some("10")));
        assert_eq!(resolved.options.start(), 10);

        let resolved = Options::resolve(&raw(Some("1"), Some("3"), Some("10")));
        assert_eq!(resolved.options.start(), 3);
    }

    #[test]
    fn non_positive_min_falls_back_with_warning() {
        let resolved = Options::resolve(&raw(None, Some("-1"), None));
        assert_eq!(resolved.options.min(), DEFAULT_MIN);
        assert_eq!(
            resolved.warnings,
            vec![OptionsWarning::InvalidMin {
                raw: "-1".to_string()
            }]
        );

        let resolved = Options::resolve(&raw(None, Some("0"), None));
        assert_eq!(resolved.options.min(), DEFAULT_MIN);
        assert_eq!(resolved.warnings.len(), 1);
    }

    #[test]
    fn negative_max_falls_back_with_warning() {
        let resolved = Options::resolve(&raw(None, None, Some("-5")));
        assert_eq!(resolved.options.max(), DEFAULT_MAX);
        assert!(matches!(
            resolved.warnings.as_slice(),
            [OptionsWarning::InvalidMax { .. }]
        ));
    }

    #[test]
    fn zero_max_means_unbounded() {
        let resolved = Options::resolve(&raw(Some("1000"), None, Some("0")));
        assert!(resolved.options.is_unbounded());
        assert_eq!(resolved.options.start(), 1000);
        assert!(resolved.options.contains(i64::MAX));
    }

    #[test]
    fn garbage_text_is_reported() {
        let resolved = Options::resolve(&raw(Some("many"), Some("abc"), Some("NaN")));
        assert_eq!(resolved.options, Options::default());
        assert_eq!(resolved.warnings.len(), 3);
    }

    #[test]
    fn blank_attribute_is_treated_as_missing() {
        let resolved = Options::resolve(&raw(Some(""), Some("  "), None));
        assert_eq!(resolved.options, Options::default());
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn max_below_min_is_raised() {
        let resolved = Options::resolve(&raw(None, Some("5"), Some("2")));
        assert_eq!(resolved.options.max(), 5);
        assert_eq!(
            resolved.warnings,
            vec![OptionsWarning::MaxBelowMin { min: 5, max: 2 }]
        );
    }

    #[test]
    fn contains_respects_bounds() {
        let options = Options::from_values(1, 2, 4).options;
        assert!(!options.contains(1));
        assert!(options.contains(2));
        assert!(options.contains(4));
        assert!(!options.contains(5));
    }

    #[test]
    fn warning_messages_name_the_fallback() {
        let warning = OptionsWarning::InvalidMax {
            raw: "-3".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "max '-3' is lower than 0, falling back to default 99"
        );
    }
}
