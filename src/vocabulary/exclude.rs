use crate::fragment::{ClassKind, Fragment, Repeat};

/// Negated class items, returned by [`Fragment::exclude`].
///
/// The item call both negates and appends; nothing is stored on the base
/// fragment.
#[derive(Debug, Clone, Copy)]
pub struct Exclude<'a> {
    base: &'a Fragment,
}

impl<'a> Exclude<'a> {
    pub(crate) fn new(base: &'a Fragment) -> Self {
        Self { base }
    }

    pub fn class(self, kind: ClassKind, repeat: Repeat) -> Fragment {
        self.base.append_negated_class(kind, repeat)
    }

    pub fn digit(self) -> Fragment {
        self.class(ClassKind::Digit, Repeat::Once)
    }

    pub fn digits(self) -> Fragment {
        self.class(ClassKind::Digit, Repeat::OneOrMore)
    }

    pub fn word(self) -> Fragment {
        self.class(ClassKind::Word, Repeat::Once)
    }

    pub fn words(self) -> Fragment {
        self.class(ClassKind::Word, Repeat::OneOrMore)
    }

    pub fn letter(self) -> Fragment {
        self.class(ClassKind::Letter, Repeat::Once)
    }

    pub fn letters(self) -> Fragment {
        self.class(ClassKind::Letter, Repeat::OneOrMore)
    }

    pub fn whitespace(self) -> Fragment {
        self.class(ClassKind::Whitespace, Repeat::Once)
    }

    pub fn whitespaces(self) -> Fragment {
        self.class(ClassKind::Whitespace, Repeat::OneOrMore)
    }

    /// Matches nothing; kept so every positive item has a counterpart.
    pub fn any_char(self) -> Fragment {
        self.class(ClassKind::AnyChar, Repeat::Once)
    }

    pub fn any_chars(self) -> Fragment {
        self.class(ClassKind::AnyChar, Repeat::OneOrMore)
    }
}
