//! Page readiness and the once-per-load trigger.

/// Document readiness, in the order a page load goes through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

/// Fires exactly once: the first time readiness reaches `Complete`.
#[derive(Debug, Default)]
pub struct LoadTrigger {
    fired: bool,
}

impl LoadTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a readiness change; returns true when the loader should run now.
    pub fn observe(&mut self, state: ReadyState) -> bool {
        if self.fired || state != ReadyState::Complete {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_on_complete() {
        let mut t = LoadTrigger::new();
        assert!(!t.observe(ReadyState::Loading));
        assert!(!t.observe(ReadyState::Interactive));
        assert!(t.observe(ReadyState::Complete));
        assert!(t.has_fired());
    }

    #[test]
    fn fires_once_per_load() {
        let mut t = LoadTrigger::new();
        assert!(t.observe(ReadyState::Complete));
        assert!(!t.observe(ReadyState::Complete));
        assert!(!t.observe(ReadyState::Interactive));
        assert!(!t.observe(ReadyState::Complete));
    }
}
