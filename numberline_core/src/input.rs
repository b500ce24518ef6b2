// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input fields and their validation.
//!
//! Each field only ever holds text matching `-?[0-9]*`. Edits that would leave
//! anything else in the field are refused and the field keeps its previous
//! text. Parsing is separate from filtering: `""` and `"-"` are acceptable
//! field contents but do not parse to a number.

use alloc::string::String;
use core::fmt;

/// Largest magnitude a field value may have.
///
/// Values and sums within this bound keep distinct, strictly increasing
/// coordinates in `f64`. Larger literals parse as absent.
pub const MAX_MAGNITUDE: i64 = 1_000_000_000_000;

/// Returns `true` if `text` is allowed to sit in an input field.
///
/// Accepted: the empty string, or an optional single leading `-` followed by
/// zero or more ASCII digits.
#[must_use]
pub fn is_acceptable(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses field text into a signed integer.
///
/// Returns `None` for the empty string, for a lone `-`, for anything outside
/// `-?[0-9]*`, and for literals beyond [`MAX_MAGNITUDE`]. Leading zeros and
/// the sign follow standard base-10 parsing, so `"-0"` is `0` and `"007"` is
/// `7`.
#[must_use]
pub fn parse_value(text: &str) -> Option<i64> {
    if !is_acceptable(text) {
        return None;
    }
    // `str::parse` also accepts a leading `+`, which `is_acceptable` already ruled out.
    text.parse::<i64>()
        .ok()
        .filter(|value| value.unsigned_abs() <= MAX_MAGNITUDE.unsigned_abs())
}

/// An edit that was refused because it would put invalid text in a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedEdit {
    /// The field the edit targeted.
    pub field: Option<FieldId>,
    /// The text the edit would have produced.
    pub proposed: String,
}

impl fmt::Display for RejectedEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(
                f,
                "rejected edit {:?} to the {field} field: only an optional leading '-' followed by digits is allowed",
                self.proposed
            ),
            None => write!(
                f,
                "rejected edit {:?}: only an optional leading '-' followed by digits is allowed",
                self.proposed
            ),
        }
    }
}

impl core::error::Error for RejectedEdit {}

/// Identifies one of the two input fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FieldId {
    /// Where the walk starts.
    Start,
    /// How far to move.
    Delta,
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Delta => "delta",
        })
    }
}

/// A single text field that only holds `-?[0-9]*`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Field {
    text: String,
}

impl Field {
    /// Creates an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a field holding `text`, or refuses if `text` is not acceptable.
    pub fn with_text(text: &str) -> Result<Self, RejectedEdit> {
        let mut field = Self::new();
        field.apply_edit(text)?;
        Ok(field)
    }

    /// Current raw text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parsed value of the current text, if any.
    #[must_use]
    pub fn value(&self) -> Option<i64> {
        parse_value(&self.text)
    }

    /// Replaces the whole text with `proposed`.
    ///
    /// Returns `Ok(true)` if the text changed, `Ok(false)` if `proposed` equals
    /// the current text, and an error (leaving the field untouched) if
    /// `proposed` is not acceptable.
    pub fn apply_edit(&mut self, proposed: &str) -> Result<bool, RejectedEdit> {
        if !is_acceptable(proposed) {
            return Err(RejectedEdit {
                field: None,
                proposed: proposed.into(),
            });
        }
        if self.text == proposed {
            return Ok(false);
        }
        self.text.clear();
        self.text.push_str(proposed);
        Ok(true)
    }

    /// Appends a typed character.
    pub fn push_char(&mut self, c: char) -> Result<bool, RejectedEdit> {
        let mut proposed = self.text.clone();
        proposed.push(c);
        self.apply_edit(&proposed)
    }

    /// Removes the last character. Returns `false` if the field was empty.
    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Empties the field. Returns `false` if it was already empty.
    pub fn clear(&mut self) -> bool {
        let changed = !self.text.is_empty();
        self.text.clear();
        changed
    }
}

/// The two raw text fields. This is the only state the logic layer keeps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RawInput {
    /// Starting position text.
    pub start: Field,
    /// Movement text.
    pub delta: Field,
}

impl RawInput {
    /// Creates two empty fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the pair from two texts, refusing the first unacceptable one.
    pub fn from_texts(start: &str, delta: &str) -> Result<Self, RejectedEdit> {
        let mut raw = Self::new();
        raw.edit(FieldId::Start, start)?;
        raw.edit(FieldId::Delta, delta)?;
        Ok(raw)
    }

    /// Borrows a field by id.
    #[must_use]
    pub fn field(&self, id: FieldId) -> &Field {
        match id {
            FieldId::Start => &self.start,
            FieldId::Delta => &self.delta,
        }
    }

    /// Mutably borrows a field by id.
    pub fn field_mut(&mut self, id: FieldId) -> &mut Field {
        match id {
            FieldId::Start => &mut self.start,
            FieldId::Delta => &mut self.delta,
        }
    }

    /// Replaces the text of one field, tagging any rejection with the field id.
    pub fn edit(&mut self, id: FieldId, proposed: &str) -> Result<bool, RejectedEdit> {
        self.field_mut(id).apply_edit(proposed).map_err(|mut err| {
            err.field = Some(id);
            err
        })
    }

    /// Parses both fields.
    #[must_use]
    pub fn inputs(&self) -> Inputs {
        Inputs::new(self.start.value(), self.delta.value())
    }
}

/// The parsed pair of values; either may be absent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Inputs {
    /// Parsed starting position.
    pub start: Option<i64>,
    /// Parsed movement.
    pub delta: Option<i64>,
}

impl Inputs {
    /// Creates a pair of parsed values.
    #[must_use]
    pub const fn new(start: Option<i64>, delta: Option<i64>) -> Self {
        Self { start, delta }
    }

    /// The complete addition, when both values are present and the sum fits.
    #[must_use]
    pub fn addition(&self) -> Option<Addition> {
        let (start, delta) = (self.start?, self.delta?);
        let sum = start.checked_add(delta)?;
        Some(Addition { start, delta, sum })
    }

    /// Whether both values are present (and their sum is representable).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.addition().is_some()
    }

    /// `start + delta`, only when valid.
    #[must_use]
    pub fn sum(&self) -> Option<i64> {
        self.addition().map(|a| a.sum)
    }
}

/// A fully specified addition `start + delta = sum`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Addition {
    /// Starting position.
    pub start: i64,
    /// Movement.
    pub delta: i64,
    /// Landing position.
    pub sum: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acceptable_texts() {
        for ok in ["", "-", "0", "-0", "42", "-7", "007", "-0012"] {
            assert!(is_acceptable(ok), "{ok:?} should be acceptable");
        }
        for bad in ["+1", "--1", "1-", "4 2", "1.5", "abc", "-a", " 1", "١"] {
            assert!(!is_acceptable(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn parse_follows_base_ten_rules() {
        assert_eq!(parse_value("42"), Some(42));
        assert_eq!(parse_value("-7"), Some(-7));
        assert_eq!(parse_value("-0"), Some(0));
        assert_eq!(parse_value("007"), Some(7));
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("-"), None);
        assert_eq!(parse_value("1000000000000"), Some(MAX_MAGNITUDE));
        assert_eq!(parse_value("-1000000000000"), Some(-MAX_MAGNITUDE));
        assert_eq!(parse_value("1000000000001"), None);
        assert_eq!(parse_value("1152921504606846976"), None);
        assert_eq!(parse_value("+5"), None);
        assert_eq!(parse_value("99999999999999999999"), None);
    }

    #[test]
    fn rejected_edit_keeps_previous_text() {
        let mut field = Field::with_text("12").unwrap();
        let err = field.push_char('x').unwrap_err();
        assert_eq!(err.proposed, "12x");
        assert_eq!(field.text(), "12");

        assert_eq!(field.push_char('3'), Ok(true));
        assert_eq!(field.value(), Some(123));

        // Sign only goes first.
        assert!(field.push_char('-').is_err());
        assert_eq!(field.text(), "123");
    }

    #[test]
    fn backspace_to_lone_minus_is_absent() {
        let mut field = Field::with_text("-4").unwrap();
        assert!(field.backspace());
        assert_eq!(field.text(), "-");
        assert_eq!(field.value(), None);
        assert!(field.backspace());
        assert!(!field.backspace());
    }

    #[test]
    fn same_text_edit_reports_no_change() {
        let mut field = Field::with_text("5").unwrap();
        assert_eq!(field.apply_edit("5"), Ok(false));
        assert!(field.clear());
        assert!(!field.clear());
    }

    #[test]
    fn raw_input_tags_rejections_with_field() {
        let mut raw = RawInput::new();
        let err = raw.edit(FieldId::Delta, "3a").unwrap_err();
        assert_eq!(err.field, Some(FieldId::Delta));
        assert!(raw.delta.text().is_empty());
    }

    #[test]
    fn validity_requires_both_values() {
        assert!(!Inputs::new(None, Some(4)).is_valid());
        assert!(!Inputs::new(Some(4), None).is_valid());
        assert_eq!(Inputs::new(None, None).sum(), None);

        let inputs = Inputs::new(Some(3), Some(-5));
        assert!(inputs.is_valid());
        assert_eq!(
            inputs.addition(),
            Some(Addition {
                start: 3,
                delta: -5,
                sum: -2
            })
        );
    }

    #[test]
    fn overflowing_sum_is_incomplete() {
        let inputs = Inputs::new(Some(i64::MAX), Some(1));
        assert!(!inputs.is_valid());
        assert_eq!(inputs.sum(), None);
    }
}
