use std::fmt;

use super::term::write_terms;
use super::{AnchorKind, ClassKind, FragmentError, FragmentResult, Quantifier, Repeat, Term};
use crate::engine::{CompileOptions, CompiledCache};
use crate::flags::Flags;
use crate::types::Alternatives;

/// An immutable, partially or fully built regular expression.
///
/// Every operation borrows `self` and returns a new `Fragment`, so a base
/// fragment can be shared and extended along independent branches.
#[derive(Clone)]
pub struct Fragment {
    terms: Vec<Term>,
    flags: Flags,
    last_term: Option<usize>,
    capture_count: u32,
    options: CompileOptions,
    compiled: CompiledCache,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// A root fragment whose compiled forms use `options`. Derived fragments
    /// inherit them.
    pub fn with_options(options: CompileOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn capture_count(&self) -> u32 {
        self.capture_count
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The term a modifier would rewrite, if any.
    pub fn last_term(&self) -> Option<&Term> {
        self.last_term.and_then(|idx| self.terms.get(idx))
    }

    /// The raw pattern text. Never compiles.
    pub fn pattern(&self) -> String {
        let mut out = String::new();
        write_terms(&self.terms, &self.options, &mut out);
        out
    }

    pub(crate) fn compiled_cache(&self) -> &CompiledCache {
        &self.compiled
    }

    fn derive(&self, terms: Vec<Term>, last_term: Option<usize>) -> Self {
        let capture_count: u32 = terms.iter().map(Term::capture_count).sum();
        debug_assert!(capture_count >= self.capture_count);
        Self {
            terms,
            flags: self.flags,
            last_term,
            capture_count,
            options: self.options.clone(),
            compiled: CompiledCache::default(),
        }
    }

    fn push(&self, term: Term) -> Self {
        let mut terms = Vec::with_capacity(self.terms.len() + 1);
        terms.extend_from_slice(&self.terms);
        terms.push(term);
        let last = terms.len() - 1;
        self.derive(terms, Some(last))
    }

    fn target_index(&self, operation: &'static str) -> FragmentResult<usize> {
        match self.last_term {
            Some(idx) if self.terms.get(idx).is_some_and(Term::is_quantifiable) => Ok(idx),
            _ => {
                tracing::trace!(operation, pattern = %self, "modifier rejected: no target term");
                Err(FragmentError::NoTargetTerm { operation })
            }
        }
    }

    /// Appends `text` verbatim; every metacharacter is escaped when rendered.
    /// Empty text leaves the fragment as it is.
    pub fn append_literal(&self, text: &str) -> Self {
        if text.is_empty() {
            return self.clone();
        }
        self.push(Term::Literal(text.into()))
    }

    pub fn append_class(&self, kind: ClassKind, repeat: Repeat) -> Self {
        self.push(with_repeat(
            Term::Class {
                kind,
                negated: false,
            },
            repeat,
        ))
    }

    pub fn append_negated_class(&self, kind: ClassKind, repeat: Repeat) -> Self {
        self.push(with_repeat(
            Term::Class {
                kind,
                negated: true,
            },
            repeat,
        ))
    }

    /// Wraps `inner` in a capturing group. Flags of `inner` are not carried
    /// over; flags always apply to the whole pattern.
    pub fn append_group(&self, inner: &Fragment) -> Self {
        self.push(Term::Group(inner.terms.clone().into_boxed_slice()))
    }

    pub fn append_alternatives<I, S>(&self, alternatives: I) -> FragmentResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives: Alternatives = alternatives
            .into_iter()
            .map(|alt| Box::<str>::from(alt.as_ref()))
            .collect();

        if alternatives.is_empty() {
            return Err(FragmentError::EmptyAlternatives);
        }

        Ok(self.push(Term::AnyOf(alternatives)))
    }

    /// Rewrites the most recent term with `quantifier`, replacing any
    /// quantifier it already carries.
    pub fn apply_quantifier(&self, quantifier: Quantifier) -> FragmentResult<Self> {
        quantifier.validate()?;
        let idx = self.target_index(quantifier.name())?;

        let mut terms = self.terms.clone();
        terms[idx] = self.terms[idx].clone().quantified(quantifier);

        Ok(self.derive(terms, Some(idx)))
    }

    /// Anchors a pattern boundary. `Start` goes in front of the whole pattern
    /// and `End` after it; an optional literal sits on the inner side of the
    /// anchor and becomes the modifier target. Repeated anchors accumulate.
    pub fn apply_anchor(&self, kind: AnchorKind, literal: Option<&str>) -> Self {
        let literal = literal
            .filter(|text| !text.is_empty())
            .map(|text| Term::Literal(text.into()));
        let added = 1 + usize::from(literal.is_some());

        let mut terms = Vec::with_capacity(self.terms.len() + added);
        let last_term = match kind {
            AnchorKind::Start => {
                terms.push(Term::Anchor(kind));
                let last = literal.as_ref().map(|_| terms.len());
                terms.extend(literal);
                terms.extend_from_slice(&self.terms);
                last
            }
            AnchorKind::End => {
                terms.extend_from_slice(&self.terms);
                let last = literal.as_ref().map(|_| terms.len());
                terms.extend(literal);
                terms.push(Term::Anchor(kind));
                last
            }
        };

        self.derive(terms, last_term)
    }

    /// Narrows the most recent character class so it also rejects every
    /// character in `chars`, keeping its quantifier.
    pub fn apply_exclusion(&self, chars: &str) -> FragmentResult<Self> {
        const OPERATION: &str = "excluding";

        let idx = self.target_index(OPERATION)?;
        let narrowed = match &self.terms[idx] {
            Term::Class {
                kind,
                negated: false,
            } => Term::Filtered {
                kind: *kind,
                excluded: chars.into(),
            },
            Term::Quantified(inner, quantifier) => match inner.as_ref() {
                Term::Class {
                    kind,
                    negated: false,
                } => Term::Quantified(
                    Box::new(Term::Filtered {
                        kind: *kind,
                        excluded: chars.into(),
                    }),
                    *quantifier,
                ),
                other => {
                    return Err(FragmentError::NotAClass {
                        operation: OPERATION,
                        found: other.describe(),
                    });
                }
            },
            other => {
                return Err(FragmentError::NotAClass {
                    operation: OPERATION,
                    found: other.describe(),
                });
            }
        };

        let mut terms = self.terms.clone();
        terms[idx] = narrowed;
        Ok(self.derive(terms, Some(idx)))
    }

    /// Adds `flag` to the whole-pattern flags. Leaves no modifier target.
    pub fn set_flag(&self, flag: Flags) -> Self {
        let mut next = self.derive(self.terms.clone(), None);
        next.flags = self.flags | flag;
        next
    }
}

fn with_repeat(term: Term, repeat: Repeat) -> Term {
    match repeat {
        Repeat::Once => term,
        Repeat::OneOrMore => term.quantified(Quantifier::OneOrMore),
    }
}

impl Default for Fragment {
    fn default() -> Self {
        Self {
            terms: Vec::new(),
            flags: Flags::empty(),
            last_term: None,
            capture_count: 0,
            options: CompileOptions::default(),
            compiled: CompiledCache::default(),
        }
    }
}

impl PartialEq for Fragment {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
            && self.flags == other.flags
            && self.last_term == other.last_term
            && self.options == other.options
    }
}

impl Eq for Fragment {}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern())
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fragment")
            .field("pattern", &self.pattern())
            .field("flags", &self.flags)
            .field("last_term", &self.last_term)
            .field("capture_count", &self.capture_count)
            .finish_non_exhaustive()
    }
}
