use std::env;

/// ANSI styling tokens used by the pretty printers.
///
/// [`Style::plain`] replaces every token with an empty string, which leaves the
/// report text unchanged apart from the colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub bold: &'static str,
    pub red: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub normal: &'static str,
}

impl Style {
    /// Returns the colorized terminal palette.
    #[must_use]
    pub const fn ansi() -> Self {
        Self {
            bold: "\x1b[1m",
            red: "\x1b[31m",
            green: "\x1b[32m",
            yellow: "\x1b[33m",
            normal: "\x1b[0m",
        }
    }

    /// Returns a palette that emits no escape codes.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            bold: "",
            red: "",
            green: "",
            yellow: "",
            normal: "",
        }
    }

    /// Returns [`Style::plain`] if `NO_COLOR` is set to a non-empty value,
    /// and [`Style::ansi`] otherwise.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_no_color(env::var_os("NO_COLOR").as_deref())
    }

    fn from_no_color(value: Option<&std::ffi::OsStr>) -> Self {
        match value {
            Some(value) if !value.is_empty() => Self::plain(),
            _ => Self::ansi(),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::from_env()
    }
}
