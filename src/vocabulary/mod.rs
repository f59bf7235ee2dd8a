//! Readable names for every fragment operation.
//!
//! Singular items stand for exactly one occurrence (`digit` is `\d`), plural
//! items for one or more (`digits` is `\d+`). Items never fail; modifiers
//! return a [`FragmentResult`] because they need a preceding term.

mod exclude;

pub use exclude::Exclude;

use crate::flags::Flags;
use crate::fragment::{AnchorKind, ClassKind, Fragment, FragmentResult, Quantifier, Repeat};

impl Fragment {
    pub fn digit(&self) -> Fragment {
        self.append_class(ClassKind::Digit, Repeat::Once)
    }

    pub fn digits(&self) -> Fragment {
        self.append_class(ClassKind::Digit, Repeat::OneOrMore)
    }

    pub fn word(&self) -> Fragment {
        self.append_class(ClassKind::Word, Repeat::Once)
    }

    pub fn words(&self) -> Fragment {
        self.append_class(ClassKind::Word, Repeat::OneOrMore)
    }

    /// An ASCII letter, `[a-zA-Z]`.
    pub fn letter(&self) -> Fragment {
        self.append_class(ClassKind::Letter, Repeat::Once)
    }

    pub fn letters(&self) -> Fragment {
        self.append_class(ClassKind::Letter, Repeat::OneOrMore)
    }

    pub fn whitespace(&self) -> Fragment {
        self.append_class(ClassKind::Whitespace, Repeat::Once)
    }

    pub fn whitespaces(&self) -> Fragment {
        self.append_class(ClassKind::Whitespace, Repeat::OneOrMore)
    }

    /// Any character except a newline.
    pub fn any_char(&self) -> Fragment {
        self.append_class(ClassKind::AnyChar, Repeat::Once)
    }

    pub fn any_chars(&self) -> Fragment {
        self.append_class(ClassKind::AnyChar, Repeat::OneOrMore)
    }

    /// Appends `text` literally.
    pub fn then(&self, text: &str) -> Fragment {
        self.append_literal(text)
    }

    /// One of `alternatives`, each taken literally. All-single-character
    /// alternatives become a bracket class, anything else a non-capturing
    /// alternation.
    pub fn any_of<I, S>(&self, alternatives: I) -> FragmentResult<Fragment>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.append_alternatives(alternatives)
    }

    /// Appends `inner` as a numbered capture group.
    pub fn capture(&self, inner: &Fragment) -> Fragment {
        self.append_group(inner)
    }

    /// Anchors the start of the whole pattern, optionally followed by `text`.
    pub fn starts_with<'a>(&self, text: impl Into<Option<&'a str>>) -> Fragment {
        self.apply_anchor(AnchorKind::Start, text.into())
    }

    /// Anchors the end of the whole pattern, optionally preceded by `text`.
    pub fn ends_with<'a>(&self, text: impl Into<Option<&'a str>>) -> Fragment {
        self.apply_anchor(AnchorKind::End, text.into())
    }

    pub fn exactly(&self, n: u32) -> FragmentResult<Fragment> {
        self.apply_quantifier(Quantifier::Exactly(n))
    }

    pub fn between(&self, min: u32, max: u32) -> FragmentResult<Fragment> {
        self.apply_quantifier(Quantifier::Between { min, max })
    }

    pub fn optional(&self) -> FragmentResult<Fragment> {
        self.apply_quantifier(Quantifier::Optional)
    }

    pub fn zero_or_more(&self) -> FragmentResult<Fragment> {
        self.apply_quantifier(Quantifier::ZeroOrMore)
    }

    pub fn one_or_more(&self) -> FragmentResult<Fragment> {
        self.apply_quantifier(Quantifier::OneOrMore)
    }

    pub fn ignore_case(&self) -> Fragment {
        self.set_flag(Flags::IGNORE_CASE)
    }

    pub fn multiline(&self) -> Fragment {
        self.set_flag(Flags::MULTILINE)
    }

    /// The negated counterparts of the class items: `exclude().digits()` is
    /// `\D+`.
    pub fn exclude(&self) -> Exclude<'_> {
        Exclude::new(self)
    }

    /// Narrows the preceding class so it also rejects every char in `chars`:
    /// `words().excluding("_")` is `[^\W_]+`.
    pub fn excluding(&self, chars: &str) -> FragmentResult<Fragment> {
        self.apply_exclusion(chars)
    }
}
