//! Display formatting for Brazilian mobile numbers.
//!
//! Formatting is presentation only: it never writes back into a
//! [`crate::PhoneSlot`] or into a record.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

static MOBILE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})(\d{5})(\d{4})$").expect("valid regex"));

/// What [`PhoneFormatter`] returns when the digits are not an 11-digit number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoMatchPolicy {
    /// Return the input with every non-digit removed.
    #[default]
    StrippedDigits,
    /// Return the input exactly as given.
    OriginalInput,
}

impl FromStr for NoMatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "digits" => Ok(Self::StrippedDigits),
            "original" => Ok(Self::OriginalInput),
            other => Err(format!("expected digits or original, got \"{other}\"")),
        }
    }
}

/// One phone value or several; lets callers format a slot or a whole record
/// through the same entry point.
#[derive(Debug, Clone, Copy)]
pub enum PhoneInput<'a> {
    One(&'a str),
    Many(&'a [String]),
}

impl<'a> From<&'a str> for PhoneInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::One(value)
    }
}

impl<'a> From<&'a String> for PhoneInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::One(value)
    }
}

impl<'a> From<&'a [String]> for PhoneInput<'a> {
    fn from(value: &'a [String]) -> Self {
        Self::Many(value)
    }
}

impl<'a> From<&'a Vec<String>> for PhoneInput<'a> {
    fn from(value: &'a Vec<String>) -> Self {
        Self::Many(value.as_slice())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhoneFormatter {
    policy: NoMatchPolicy,
}

impl PhoneFormatter {
    #[must_use]
    pub const fn new(policy: NoMatchPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> NoMatchPolicy {
        self.policy
    }

    /// Formats one value or several; several are joined with `", "`.
    #[must_use]
    pub fn format<'a>(&self, input: impl Into<PhoneInput<'a>>) -> String {
        match input.into() {
            PhoneInput::One(raw) => self.format_one(raw),
            PhoneInput::Many(raws) => self.format_many(raws),
        }
    }

    /// `11987654321` → `(11) 98765-4321`. Anything that is not exactly 11
    /// digits after stripping falls back to the configured [`NoMatchPolicy`].
    #[must_use]
    pub fn format_one(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }

        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if let Some(caps) = MOBILE_NUMBER.captures(&digits) {
            return format!("({}) {}-{}", &caps[1], &caps[2], &caps[3]);
        }

        match self.policy {
            NoMatchPolicy::StrippedDigits => digits,
            NoMatchPolicy::OriginalInput => raw.to_string(),
        }
    }

    #[must_use]
    pub fn format_many<S: AsRef<str>>(&self, raws: &[S]) -> String {
        raws.iter()
            .map(|raw| self.format_one(raw.as_ref()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
