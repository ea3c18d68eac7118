//! Round configuration

/// Guesses allowed per round unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Largest attempt limit a round accepts
pub const MAX_ATTEMPTS_LIMIT: usize = 20;

/// Rules for a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    /// Whether an already-submitted guess may be submitted again
    pub allow_repeats: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            allow_repeats: true,
        }
    }

    /// Override the attempt limit, clamped to `1..=MAX_ATTEMPTS_LIMIT`
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = if max_attempts == 0 {
            1
        } else if max_attempts > MAX_ATTEMPTS_LIMIT {
            MAX_ATTEMPTS_LIMIT
        } else {
            max_attempts
        };
        self
    }

    #[must_use]
    pub const fn with_repeats(mut self, allow_repeats: bool) -> Self {
        self.allow_repeats = allow_repeats;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts, 5);
        assert!(config.allow_repeats);
    }

    #[test]
    fn builder_overrides() {
        let config = GameConfig::new().with_max_attempts(6).with_repeats(false);
        assert_eq!(config.max_attempts, 6);
        assert!(!config.allow_repeats);
    }

    #[test]
    fn zero_attempts_clamped() {
        assert_eq!(GameConfig::new().with_max_attempts(0).max_attempts, 1);
    }

    #[test]
    fn huge_attempts_clamped() {
        assert_eq!(
            GameConfig::new().with_max_attempts(usize::MAX).max_attempts,
            MAX_ATTEMPTS_LIMIT
        );
        assert_eq!(
            GameConfig::new().with_max_attempts(MAX_ATTEMPTS_LIMIT).max_attempts,
            MAX_ATTEMPTS_LIMIT
        );
    }
}
