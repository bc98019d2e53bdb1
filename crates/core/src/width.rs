//! Column width vocabulary.
//!
//! A row's `columns` attribute is a comma-joined list of width tokens
//! (`"1_3,1_3,1_3"`). Only the fixed fractions below are valid.

use serde::{Deserialize, Serialize};

/// Tolerance used when checking that a row's widths fill it exactly.
pub const WIDTH_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ColumnWidth {
    Full,
    Half,
    Third,
    TwoThirds,
    Quarter,
    ThreeQuarters,
    Fifth,
    TwoFifths,
    ThreeFifths,
    FourFifths,
    Sixth,
    FiveSixths,
}

const ALL: [ColumnWidth; 12] = [
    ColumnWidth::Full,
    ColumnWidth::Half,
    ColumnWidth::Third,
    ColumnWidth::TwoThirds,
    ColumnWidth::Quarter,
    ColumnWidth::ThreeQuarters,
    ColumnWidth::Fifth,
    ColumnWidth::TwoFifths,
    ColumnWidth::ThreeFifths,
    ColumnWidth::FourFifths,
    ColumnWidth::Sixth,
    ColumnWidth::FiveSixths,
];

impl ColumnWidth {
    pub fn token(self) -> &'static str {
        match self {
            Self::Full => "1",
            Self::Half => "1_2",
            Self::Third => "1_3",
            Self::TwoThirds => "2_3",
            Self::Quarter => "1_4",
            Self::ThreeQuarters => "3_4",
            Self::Fifth => "1_5",
            Self::TwoFifths => "2_5",
            Self::ThreeFifths => "3_5",
            Self::FourFifths => "4_5",
            Self::Sixth => "1_6",
            Self::FiveSixths => "5_6",
        }
    }

    pub fn fraction(self) -> f64 {
        match self {
            Self::Full => 1.0,
            Self::Half => 1.0 / 2.0,
            Self::Third => 1.0 / 3.0,
            Self::TwoThirds => 2.0 / 3.0,
            Self::Quarter => 1.0 / 4.0,
            Self::ThreeQuarters => 3.0 / 4.0,
            Self::Fifth => 1.0 / 5.0,
            Self::TwoFifths => 2.0 / 5.0,
            Self::ThreeFifths => 3.0 / 5.0,
            Self::FourFifths => 4.0 / 5.0,
            Self::Sixth => 1.0 / 6.0,
            Self::FiveSixths => 5.0 / 6.0,
        }
    }

    /// Strict lookup of a vocabulary token. `"full"` is accepted as `"1"`.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.eq_ignore_ascii_case("full") {
            return Some(Self::Full);
        }
        ALL.into_iter().find(|w| w.token() == token)
    }

    /// Lenient lookup: unrecognized tokens fall back to full width.
    pub fn normalize(token: &str) -> Self {
        Self::parse(token).unwrap_or(Self::Full)
    }

    /// Match a numeric fraction (`0.5`, `1`) against the vocabulary.
    pub fn from_fraction(value: f64) -> Option<Self> {
        ALL.into_iter()
            .find(|w| (w.fraction() - value).abs() < WIDTH_TOLERANCE)
    }

    /// `n` equal widths, for `1..=6` columns.
    pub fn equal(n: usize) -> Option<Vec<Self>> {
        let width = match n {
            1 => Self::Full,
            2 => Self::Half,
            3 => Self::Third,
            4 => Self::Quarter,
            5 => Self::Fifth,
            6 => Self::Sixth,
            _ => return None,
        };
        Some(vec![width; n])
    }

    pub fn join(widths: &[Self]) -> String {
        widths
            .iter()
            .map(|w| w.token())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parse a comma-joined `columns` attribute leniently.
    pub fn parse_list(columns: &str) -> Vec<Self> {
        columns
            .split(',')
            .filter(|t| !t.trim().is_empty())
            .map(Self::normalize)
            .collect()
    }

    pub fn fills_row(widths: &[Self]) -> bool {
        let total: f64 = widths.iter().map(|w| w.fraction()).sum();
        (total - 1.0).abs() < WIDTH_TOLERANCE
    }
}

impl From<ColumnWidth> for String {
    fn from(width: ColumnWidth) -> Self {
        width.token().to_string()
    }
}

impl From<String> for ColumnWidth {
    fn from(value: String) -> Self {
        Self::normalize(&value)
    }
}

impl std::fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tokens_fall_back_to_full() {
        assert_eq!(ColumnWidth::normalize("7_8"), ColumnWidth::Full);
        assert_eq!(ColumnWidth::normalize("full"), ColumnWidth::Full);
        assert_eq!(ColumnWidth::parse("7_8"), None);
    }

    #[test]
    fn asymmetric_pairs_fill_a_row() {
        for pair in ["2_5,3_5", "2_3,1_3", "1_4,3_4", "1_6,5_6", "1_5,4_5"] {
            let widths = ColumnWidth::parse_list(pair);
            assert_eq!(widths.len(), 2);
            assert!(ColumnWidth::fills_row(&widths), "{pair} should fill a row");
        }
    }

    #[test]
    fn equal_widths_round_trip_through_join() {
        let widths = ColumnWidth::equal(3).unwrap();
        let joined = ColumnWidth::join(&widths);
        assert_eq!(joined, "1_3,1_3,1_3");
        assert!(ColumnWidth::fills_row(&ColumnWidth::parse_list(&joined)));
        assert!(ColumnWidth::equal(7).is_none());
    }

    #[test]
    fn numeric_fractions_match() {
        assert_eq!(ColumnWidth::from_fraction(0.5), Some(ColumnWidth::Half));
        assert_eq!(ColumnWidth::from_fraction(1.0), Some(ColumnWidth::Full));
        assert_eq!(ColumnWidth::from_fraction(0.42), None);
    }

    #[test]
    fn overfull_row_is_detected() {
        let widths = ColumnWidth::parse_list("1_2,1_2,1_3");
        assert!(!ColumnWidth::fills_row(&widths));
    }
}
