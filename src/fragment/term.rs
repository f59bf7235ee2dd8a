use serde::{Deserialize, Serialize};

use super::escape::escape_into;
use super::{ClassKind, Quantifier};
use crate::engine::CompileOptions;
use crate::types::Alternatives;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorKind {
    Start,
    End,
}

impl AnchorKind {
    pub fn token(self) -> char {
        match self {
            Self::Start => '^',
            Self::End => '$',
        }
    }
}

/// A completed, independently quantifiable unit of a pattern (anchors aside).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Literal(Box<str>),
    Class { kind: ClassKind, negated: bool },
    /// A positive class narrowed so that it also rejects `excluded`.
    Filtered { kind: ClassKind, excluded: Box<str> },
    AnyOf(Alternatives),
    Group(Box<[Term]>),
    Anchor(AnchorKind),
    Quantified(Box<Term>, Quantifier),
}

impl Term {
    pub fn is_quantifiable(&self) -> bool {
        !matches!(self, Self::Anchor(_))
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Class { negated: false, .. } => "character class",
            Self::Class { negated: true, .. } => "negated character class",
            Self::Filtered { .. } => "filtered character class",
            Self::AnyOf(_) => "alternation",
            Self::Group(_) => "capture group",
            Self::Anchor(_) => "anchor",
            Self::Quantified(inner, _) => inner.describe(),
        }
    }

    /// Attaches `quantifier`, replacing any quantifier already present.
    pub fn quantified(self, quantifier: Quantifier) -> Term {
        match self {
            Self::Quantified(inner, _) => Self::Quantified(inner, quantifier),
            other => Self::Quantified(Box::new(other), quantifier),
        }
    }

    pub fn capture_count(&self) -> u32 {
        match self {
            Self::Group(inner) => 1 + inner.iter().map(Term::capture_count).sum::<u32>(),
            Self::Quantified(inner, _) => inner.capture_count(),
            _ => 0,
        }
    }

    // A quantifier suffix binds to exactly one atom of the rendered text.
    fn is_single_atom(&self) -> bool {
        match self {
            Self::Literal(text) => {
                let mut chars = text.chars();
                chars.next().is_some() && chars.next().is_none()
            }
            Self::Class { .. } | Self::Filtered { .. } | Self::AnyOf(_) | Self::Group(_) => true,
            Self::Anchor(_) | Self::Quantified(..) => false,
        }
    }

    /// Renders this term. `options` decide what the engine treats as a line
    /// terminator, which narrowed any-char classes must keep rejecting.
    pub fn write_to(&self, options: &CompileOptions, out: &mut String) {
        match self {
            Self::Literal(text) => escape_into(text, out),
            Self::Class { kind, negated } => out.push_str(if *negated {
                kind.negated_token()
            } else {
                kind.token()
            }),
            Self::Filtered { kind, excluded } => {
                out.push_str("[^");
                out.push_str(kind.exclusion_body(options.crlf));
                escape_into(excluded, out);
                out.push(']');
            }
            Self::AnyOf(alternatives) => write_alternatives(alternatives, out),
            Self::Group(inner) => {
                out.push('(');
                write_terms(inner, options, out);
                out.push(')');
            }
            Self::Anchor(kind) => out.push(kind.token()),
            Self::Quantified(inner, quantifier) => {
                if inner.is_single_atom() {
                    inner.write_to(options, out);
                } else {
                    out.push_str("(?:");
                    inner.write_to(options, out);
                    out.push(')');
                }
                quantifier.write_suffix(out);
            }
        }
    }
}

fn write_alternatives(alternatives: &Alternatives, out: &mut String) {
    let single_chars = alternatives.iter().all(|alt| {
        let mut chars = alt.chars();
        chars.next().is_some() && chars.next().is_none()
    });

    if single_chars {
        out.push('[');
        for alt in alternatives {
            escape_into(alt, out);
        }
        out.push(']');
        return;
    }

    out.push_str("(?:");
    for (idx, alt) in alternatives.iter().enumerate() {
        if idx > 0 {
            out.push('|');
        }
        escape_into(alt, out);
    }
    out.push(')');
}

pub fn write_terms(terms: &[Term], options: &CompileOptions, out: &mut String) {
    for term in terms {
        term.write_to(options, out);
    }
}
