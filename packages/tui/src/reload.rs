/// Tags list loads with a generation number so that only the most recently
/// issued load may replace the list it targets.
#[derive(Debug, Default, Clone)]
pub struct ReloadGuard {
    latest: u64,
}

impl ReloadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new generation, superseding every earlier one.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_generation_is_current() {
        let mut guard = ReloadGuard::new();
        let first = guard.begin();
        let second = guard.begin();

        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
        assert_eq!(guard.latest(), 2);
    }

    #[test]
    fn test_nothing_is_current_before_first_load() {
        let guard = ReloadGuard::new();
        assert!(!guard.is_current(1));
    }
}
