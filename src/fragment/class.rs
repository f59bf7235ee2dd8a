use serde::{Deserialize, Serialize};

/// Predefined character classes exposed by the vocabulary.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Digit = 0,
    Word = 1,
    Whitespace = 2,
    AnyChar = 3,
    Letter = 4,
}

/// How many occurrences a freshly appended class stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Repeat {
    #[default]
    Once,
    OneOrMore,
}

impl ClassKind {
    pub fn token(self) -> &'static str {
        match self {
            Self::Digit => r"\d",
            Self::Word => r"\w",
            Self::Whitespace => r"\s",
            Self::AnyChar => ".",
            Self::Letter => "[a-zA-Z]",
        }
    }

    /// The complementary class. `AnyChar` negates to a class matching nothing.
    pub fn negated_token(self) -> &'static str {
        match self {
            Self::Digit => r"\D",
            Self::Word => r"\W",
            Self::Whitespace => r"\S",
            Self::AnyChar => r"[^\s\S]",
            Self::Letter => "[^a-zA-Z]",
        }
    }

    /// Items that, placed inside `[^…]`, reject everything this class does
    /// not accept. In CRLF mode `.` also rejects `\r`.
    pub(crate) fn exclusion_body(self, crlf: bool) -> &'static str {
        match self {
            Self::Digit => r"\D",
            Self::Word => r"\W",
            Self::Whitespace => r"\S",
            Self::AnyChar if crlf => r"\n\r",
            Self::AnyChar => r"\n",
            Self::Letter => "[^a-zA-Z]",
        }
    }
}
