#![forbid(unsafe_code)]

//! Table-wide defaults.
//!
//! Cells that leave a field unset inherit it from [`TableConfig`] when the
//! table is rendered.
//!
//! # Environment
//!
//! - `BOXGRID_BORDER_STYLE` = ascii|single|double
//! - `BOXGRID_MARGIN` = `n` | `h,v` | `l,t,r,b`
//! - `BOXGRID_BORDERS` = weight | `l,t,r,b` weights (none|normal|bold)
//! - `BOXGRID_ALIGN` = left|center|right
//! - `BOXGRID_VALIGN` = top|center|bottom
//! - `BOXGRID_LINE_ENDING` = lf|crlf|native

use std::env;
use std::fmt;

use boxgrid_core::geometry::Sides;
use boxgrid_core::style::{BorderStyle, BorderWeight, HorizontalAlignment, VerticalAlignment};

const ENV_BORDER_STYLE: &str = "BOXGRID_BORDER_STYLE";
const ENV_MARGIN: &str = "BOXGRID_MARGIN";
const ENV_BORDERS: &str = "BOXGRID_BORDERS";
const ENV_ALIGN: &str = "BOXGRID_ALIGN";
const ENV_VALIGN: &str = "BOXGRID_VALIGN";
const ENV_LINE_ENDING: &str = "BOXGRID_LINE_ENDING";

/// Terminator placed between rendered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// The platform terminator.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) { Self::CrLf } else { Self::Lf }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lf" | "unix" | "\\n" => Some(Self::Lf),
            "crlf" | "windows" | "dos" | "\\r\\n" => Some(Self::CrLf),
            "native" | "platform" | "auto" => Some(Self::native()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lf => "lf",
            Self::CrLf => "crlf",
        })
    }
}

/// Table-wide rendering defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub border_style: BorderStyle,
    pub margin: Sides<usize>,
    pub borders: Sides<BorderWeight>,
    pub h_align: HorizontalAlignment,
    pub v_align: VerticalAlignment,
    pub line_ending: LineEnding,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            border_style: BorderStyle::Ascii,
            margin: Sides::symmetric(1, 0),
            borders: Sides::all(BorderWeight::Normal),
            h_align: HorizontalAlignment::Left,
            v_align: VerticalAlignment::Top,
            line_ending: LineEnding::native(),
        }
    }
}

/// Configuration parse diagnostics.
#[derive(Debug, Clone)]
pub struct TableConfigParse {
    pub config: TableConfig,
    pub errors: Vec<ConfigError>,
}

/// A rejected configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl TableConfig {
    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> TableConfig {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> TableConfigParse {
        from_env_with(|key| env::var(key).ok())
    }

    /// Short human-readable summary.
    #[must_use]
    pub fn summary_short(&self) -> String {
        let m = self.margin;
        format!(
            "boxgrid: {} borders · margin {},{},{},{} · {}/{} · {}",
            self.border_style,
            m.left,
            m.top,
            m.right,
            m.bottom,
            self.h_align,
            self.v_align,
            self.line_ending
        )
    }
}

/// Read config through `get`, collecting an error per rejected variable.
///
/// Rejected variables leave the corresponding default in place.
pub fn from_env_with<F>(mut get: F) -> TableConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = TableConfig::default();
    let mut errors = Vec::new();

    if let Some(value) = get(ENV_BORDER_STYLE) {
        match BorderStyle::parse(&value) {
            Some(parsed) => config.border_style = parsed,
            None => errors.push(ConfigError::new(
                "border_style",
                value,
                "expected ascii|single|double",
            )),
        }
    }

    if let Some(value) = get(ENV_MARGIN) {
        match parse_sides(&value, parse_usize) {
            Some(parsed) => config.margin = parsed,
            None => errors.push(ConfigError::new(
                "margin",
                value,
                "expected n, h,v or l,t,r,b non-negative integers",
            )),
        }
    }

    if let Some(value) = get(ENV_BORDERS) {
        match parse_sides(&value, BorderWeight::parse) {
            Some(parsed) => config.borders = parsed,
            None => errors.push(ConfigError::new(
                "borders",
                value,
                "expected none|normal|bold, or four comma-separated weights",
            )),
        }
    }

    if let Some(value) = get(ENV_ALIGN) {
        match HorizontalAlignment::parse(&value) {
            Some(parsed) => config.h_align = parsed,
            None => errors.push(ConfigError::new(
                "h_align",
                value,
                "expected left|center|right",
            )),
        }
    }

    if let Some(value) = get(ENV_VALIGN) {
        match VerticalAlignment::parse(&value) {
            Some(parsed) => config.v_align = parsed,
            None => errors.push(ConfigError::new(
                "v_align",
                value,
                "expected top|center|bottom",
            )),
        }
    }

    if let Some(value) = get(ENV_LINE_ENDING) {
        match LineEnding::parse(&value) {
            Some(parsed) => config.line_ending = parsed,
            None => errors.push(ConfigError::new(
                "line_ending",
                value,
                "expected lf|crlf|native",
            )),
        }
    }

    #[cfg(feature = "tracing")]
    for err in &errors {
        tracing::warn!(field = err.field, value = %err.value, "ignoring invalid boxgrid config");
    }

    TableConfigParse { config, errors }
}

/// Parse `n`, `h,v` or `l,t,r,b`.
fn parse_sides<T: Copy>(value: &str, parse: impl Fn(&str) -> Option<T>) -> Option<Sides<T>> {
    let parts = value
        .split(',')
        .map(|part| parse(part))
        .collect::<Option<Vec<T>>>()?;
    match parts.as_slice() {
        [all] => Some(Sides::all(*all)),
        [horizontal, vertical] => Some(Sides::symmetric(*horizontal, *vertical)),
        [left, top, right, bottom] => Some(Sides::new(*left, *top, *right, *bottom)),
        _ => None,
    }
}

#[inline]
fn parse_usize(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse_from(vars: &[(&str, &str)]) -> TableConfigParse {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        from_env_with(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_match_ascii_table_conventions() {
        let config = TableConfig::default();
        assert_eq!(config.border_style, BorderStyle::Ascii);
        assert_eq!(config.margin, Sides::new(1, 0, 1, 0));
        assert_eq!(config.borders, Sides::all(BorderWeight::Normal));
        assert_eq!(config.h_align, HorizontalAlignment::Left);
        assert_eq!(config.v_align, VerticalAlignment::Top);
    }

    #[test]
    fn empty_env_yields_defaults() {
        let parsed = parse_from(&[]);
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.config, TableConfig::default());
    }

    #[test]
    fn env_overrides_every_field() {
        let parsed = parse_from(&[
            (ENV_BORDER_STYLE, "double"),
            (ENV_MARGIN, "2,1"),
            (ENV_BORDERS, "none,bold,none,normal"),
            (ENV_ALIGN, "right"),
            (ENV_VALIGN, "center"),
            (ENV_LINE_ENDING, "crlf"),
        ]);
        assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
        let config = parsed.config;
        assert_eq!(config.border_style, BorderStyle::UnicodeDouble);
        assert_eq!(config.margin, Sides::new(2, 1, 2, 1));
        assert_eq!(
            config.borders,
            Sides::new(
                BorderWeight::None,
                BorderWeight::Bold,
                BorderWeight::None,
                BorderWeight::Normal
            )
        );
        assert_eq!(config.h_align, HorizontalAlignment::Right);
        assert_eq!(config.v_align, VerticalAlignment::Center);
        assert_eq!(config.line_ending, LineEnding::CrLf);
    }

    #[test]
    fn invalid_values_are_reported_not_defaulted_silently() {
        let parsed = parse_from(&[
            (ENV_BORDER_STYLE, "rounded"),
            (ENV_MARGIN, "1,2,3"),
            (ENV_BORDERS, "bold"),
        ]);
        let fields: Vec<_> = parsed.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["border_style", "margin"]);
        assert_eq!(parsed.config.border_style, BorderStyle::Ascii);
        assert_eq!(parsed.config.borders, Sides::all(BorderWeight::Bold));
        assert_eq!(
            parsed.errors[0].to_string(),
            "border_style=rounded (expected ascii|single|double)"
        );
    }

    #[test]
    fn negative_margin_is_rejected() {
        let parsed = parse_from(&[(ENV_MARGIN, "-1")]);
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.config.margin, TableConfig::default().margin);
    }

    #[test]
    fn line_endings() {
        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
        assert_eq!(LineEnding::parse("native"), Some(LineEnding::native()));
    }

    #[test]
    fn summary_mentions_style_and_margin() {
        let summary = TableConfig::default().summary_short();
        assert!(summary.contains("ascii"));
        assert!(summary.contains("margin 1,0,1,0"));
    }
}
