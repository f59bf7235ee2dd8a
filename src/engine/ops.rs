use std::borrow::Cow;
use std::sync::Arc;

use regex::{Captures, NoExpand, Regex, RegexBuilder};

use super::cache::Anchoring;
use super::{EngineError, EngineResult};
use crate::fragment::Fragment;
use crate::types::MatchList;

fn build_regex(fragment: &Fragment, anchoring: Anchoring) -> EngineResult<Regex> {
    let body = fragment.pattern();
    let source = match anchoring {
        Anchoring::Unanchored => body,
        Anchoring::Start => format!(r"\A(?:{body})"),
    };
    let flags = fragment.flags();
    let options = fragment.options();

    let regex = RegexBuilder::new(&source)
        .case_insensitive(flags.ignore_case())
        .multi_line(flags.multiline())
        .crlf(options.crlf)
        .size_limit(options.size_limit)
        .dfa_size_limit(options.dfa_size_limit)
        .nest_limit(options.nest_limit)
        .build()
        .map_err(|source_err| EngineError::Compile {
            pattern: source.clone(),
            source: source_err,
        })?;

    tracing::debug!(pattern = %source, ?flags, ?anchoring, "compiled fragment");
    Ok(regex)
}

impl Fragment {
    /// The engine's compiled form of this fragment, built on first use and
    /// shared by every later call on the same instance.
    #[tracing::instrument(level = "trace", skip(self), fields(pattern = %self))]
    pub fn compile(&self) -> EngineResult<Arc<Regex>> {
        self.compiled_cache()
            .get_or_compile(Anchoring::Unanchored, || {
                build_regex(self, Anchoring::Unanchored)
            })
    }

    fn compile_anchored(&self) -> EngineResult<Arc<Regex>> {
        self.compiled_cache()
            .get_or_compile(Anchoring::Start, || build_regex(self, Anchoring::Start))
    }

    /// True when the pattern matches anywhere in `input`.
    pub fn test(&self, input: &str) -> EngineResult<bool> {
        Ok(self.compile()?.is_match(input))
    }

    /// The first match anywhere in `input`.
    pub fn search<'t>(&self, input: &'t str) -> EngineResult<Option<Captures<'t>>> {
        Ok(self.compile()?.captures(input))
    }

    /// The match beginning at the very start of `input`, if any. Unaffected
    /// by the multiline flag.
    pub fn match_start<'t>(&self, input: &'t str) -> EngineResult<Option<Captures<'t>>> {
        Ok(self.compile_anchored()?.captures(input))
    }

    /// Every non-overlapping matched substring, left to right.
    pub fn find_all<'t>(&self, input: &'t str) -> EngineResult<MatchList<'t>> {
        let regex = self.compile()?;
        let matches = regex.find_iter(input).map(|m| m.as_str()).collect();
        Ok(matches)
    }

    /// Every non-overlapping match together with its capture groups.
    pub fn find_all_captures<'t>(&self, input: &'t str) -> EngineResult<Vec<Captures<'t>>> {
        let regex = self.compile()?;
        let captures = regex.captures_iter(input).collect();
        Ok(captures)
    }

    /// Substitutes every match with `replacement` taken literally; `$1` and
    /// friends are not expanded.
    pub fn replace<'t>(&self, input: &'t str, replacement: &str) -> EngineResult<Cow<'t, str>> {
        let regex = self.compile()?;
        let replaced = regex.replace_all(input, NoExpand(replacement));
        Ok(replaced)
    }

    /// Splits `input` at every match. Empty segments are kept.
    pub fn split<'t>(&self, input: &'t str) -> EngineResult<MatchList<'t>> {
        let regex = self.compile()?;
        let parts = regex.split(input).collect();
        Ok(parts)
    }
}
