#![forbid(unsafe_code)]

//! Localized string resolution for display text.

use std::borrow::Cow;

/// A string that may be a localization key or plain display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSpec {
    /// Display verbatim.
    Plain(String),
    /// Resolve through the localizer before display.
    Localized(String),
}

impl TextSpec {
    /// Plain empty text.
    #[must_use]
    pub const fn empty() -> Self {
        TextSpec::Plain(String::new())
    }
}

impl From<&str> for TextSpec {
    fn from(s: &str) -> Self {
        TextSpec::Plain(s.to_owned())
    }
}

impl From<String> for TextSpec {
    fn from(s: String) -> Self {
        TextSpec::Plain(s)
    }
}

/// Resolves possibly-localized strings to display text.
pub trait Localizer {
    /// Resolve `text` for display. Unknown keys resolve to the key itself.
    fn resolve<'a>(&'a self, text: &'a TextSpec) -> Cow<'a, str>;
}

/// Localizer that treats every key as its own translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughLocalizer;

impl Localizer for PassthroughLocalizer {
    fn resolve<'a>(&'a self, text: &'a TextSpec) -> Cow<'a, str> {
        match text {
            TextSpec::Plain(s) | TextSpec::Localized(s) => Cow::Borrowed(s),
        }
    }
}
