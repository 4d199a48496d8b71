use sm_core::{Strassen, StrassenConfig};

/// Opaque context handle owning a Strassen engine.
///
/// The engine keeps its scratch pool between calls, so callers multiplying
/// many matrices of one size should reuse a single context.
pub struct SMContext {
    pub engine: Strassen,
}

impl Default for SMContext {
    fn default() -> Self {
        Self::new(StrassenConfig::default())
    }
}

impl SMContext {
    pub fn new(config: StrassenConfig) -> Self {
        Self {
            engine: Strassen::new(config),
        }
    }
}
