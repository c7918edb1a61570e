//! Fixed option enumerations offered as checkbox groups.

use serde::{Deserialize, Serialize};

use productdesk_core::{DomainError, DomainResult, ValueObject};

/// One selectable option as stored (`value`) and as shown (`title`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
    pub title: &'static str,
    pub value: &'static str,
}

/// A closed set of option values.
pub trait OptionDomain: ValueObject + Copy + Eq + 'static {
    /// Every value, in the order the form offers them.
    fn all() -> &'static [Self];

    /// Value as stored in documents.
    fn value(self) -> &'static str;

    /// Value as shown to the user.
    fn label(self) -> &'static str {
        self.value()
    }

    /// Parse a stored value or a label, ignoring ASCII case.
    fn parse(s: &str) -> DomainResult<Self> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|v| v.value().eq_ignore_ascii_case(s) || v.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::validation(format!("unknown option {s:?}")))
    }

    fn entries() -> Vec<OptionEntry> {
        Self::all()
            .iter()
            .map(|v| OptionEntry {
                title: v.label(),
                value: v.value(),
            })
            .collect()
    }
}

/// Garment size.
///
/// `XL` is stored as `"Xl"`; existing product documents use that spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "Xl", alias = "XL")]
    XL,
    L,
    M,
    S,
    XS,
}

impl ValueObject for Size {}

impl OptionDomain for Size {
    fn all() -> &'static [Self] {
        &[Size::XL, Size::L, Size::M, Size::S, Size::XS]
    }

    fn value(self) -> &'static str {
        match self {
            Size::XL => "Xl",
            Size::L => "L",
            Size::M => "M",
            Size::S => "S",
            Size::XS => "XS",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Size::XL => "XL",
            other => other.value(),
        }
    }
}

/// Product color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Purple,
    Black,
    Gold,
}

impl Color {
    /// Swatch shown next to the checkbox.
    pub fn hex(self) -> &'static str {
        match self {
            Color::Purple => "#8B5CF6",
            Color::Black => "#000000",
            Color::Gold => "#D4AF37",
        }
    }
}

impl ValueObject for Color {}

impl OptionDomain for Color {
    fn all() -> &'static [Self] {
        &[Color::Purple, Color::Black, Color::Gold]
    }

    fn value(self) -> &'static str {
        match self {
            Color::Purple => "Purple",
            Color::Black => "Black",
            Color::Gold => "Gold",
        }
    }
}

impl core::str::FromStr for Size {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Size as OptionDomain>::parse(s)
    }
}

impl core::str::FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Color as OptionDomain>::parse(s)
    }
}
