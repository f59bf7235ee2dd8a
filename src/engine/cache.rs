use regex::Regex;
use std::sync::{Arc, OnceLock};

use super::EngineResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Anchoring {
    Unanchored,
    Start,
}

/// Write-once compiled forms of one fragment.
#[derive(Debug, Clone, Default)]
pub struct CompiledCache {
    unanchored: OnceLock<Arc<Regex>>,
    start: OnceLock<Arc<Regex>>,
}

impl CompiledCache {
    fn slot(&self, anchoring: Anchoring) -> &OnceLock<Arc<Regex>> {
        match anchoring {
            Anchoring::Unanchored => &self.unanchored,
            Anchoring::Start => &self.start,
        }
    }

    pub(crate) fn get_or_compile<F>(
        &self,
        anchoring: Anchoring,
        build: F,
    ) -> EngineResult<Arc<Regex>>
    where
        F: FnOnce() -> EngineResult<Regex>,
    {
        let slot = self.slot(anchoring);
        if let Some(regex) = slot.get() {
            tracing::trace!(?anchoring, "compiled pattern reused");
            return Ok(Arc::clone(regex));
        }

        let regex = Arc::new(build()?);
        // racing first uses may both compile; the first stored value wins
        Ok(Arc::clone(slot.get_or_init(|| regex)))
    }
}
