//! Title detection for header-band text.
//!
//! Case folding is script dependent, so the test for "this header is a
//! title" is a trait. [`UppercaseTitle`] is the default used by
//! [`classify`](crate::classify).

/// Decides whether a header block's text is also a title.
pub trait TitlePredicate {
    /// Returns `true` if the trimmed, un-normalized header text is a title.
    fn is_title(&self, text: &str) -> bool;
}

impl<F> TitlePredicate for F
where
    F: Fn(&str) -> bool,
{
    fn is_title(&self, text: &str) -> bool {
        self(text)
    }
}

/// Titles are all-caps headers of more than three words.
///
/// Text without cased letters (e.g. `"1 2 3 4"`) equals its upper-case form
/// and therefore counts as a title when it has enough words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UppercaseTitle;

impl UppercaseTitle {
    /// A header needs strictly more words than this to be a title.
    pub const MIN_WORDS_EXCLUSIVE: usize = 3;
}

impl TitlePredicate for UppercaseTitle {
    fn is_title(&self, text: &str) -> bool {
        text.split_whitespace().count() > Self::MIN_WORDS_EXCLUSIVE && text == text.to_uppercase()
    }
}
