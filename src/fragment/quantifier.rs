use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::{FragmentError, FragmentResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantifier {
    Exactly(u32),
    Between { min: u32, max: u32 },
    Optional,
    ZeroOrMore,
    OneOrMore,
}

impl Quantifier {
    pub fn between(min: u32, max: u32) -> FragmentResult<Self> {
        let quantifier = Self::Between { min, max };
        quantifier.validate()?;
        Ok(quantifier)
    }

    pub fn validate(&self) -> FragmentResult<()> {
        match *self {
            Self::Between { min, max } if min > max => {
                Err(FragmentError::InvalidRange { min, max })
            }
            _ => Ok(()),
        }
    }

    pub fn write_suffix(&self, out: &mut String) {
        match *self {
            Self::Exactly(n) => {
                let _ = write!(out, "{{{n}}}");
            }
            Self::Between { min, max } => {
                let _ = write!(out, "{{{min},{max}}}");
            }
            Self::Optional => out.push('?'),
            Self::ZeroOrMore => out.push('*'),
            Self::OneOrMore => out.push('+'),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Exactly(_) => "exactly",
            Self::Between { .. } => "between",
            Self::Optional => "optional",
            Self::ZeroOrMore => "zero_or_more",
            Self::OneOrMore => "one_or_more",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffix(quantifier: Quantifier) -> String {
        let mut out = String::new();
        quantifier.write_suffix(&mut out);
        out
    }

    #[test]
    fn suffix_renders_engine_syntax() {
        assert_eq!(suffix(Quantifier::Exactly(3)), "{3}");
        assert_eq!(suffix(Quantifier::Between { min: 1, max: 3 }), "{1,3}");
        assert_eq!(suffix(Quantifier::Optional), "?");
        assert_eq!(suffix(Quantifier::ZeroOrMore), "*");
        assert_eq!(suffix(Quantifier::OneOrMore), "+");
    }

    #[test]
    fn between_when_min_exceeds_max_then_invalid_range() {
        let err = Quantifier::between(4, 2).expect_err("4 > 2 must be rejected");
        assert_eq!(err, FragmentError::InvalidRange { min: 4, max: 2 });
    }

    #[test]
    fn between_when_bounds_equal_then_accepted() {
        let quantifier = Quantifier::between(0, 0).expect("0..=0 is a valid range");
        assert_eq!(quantifier, Quantifier::Between { min: 0, max: 0 });
        assert_eq!(suffix(quantifier), "{0,0}");
    }
}
