/// Countdown driven by an external one-second tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    limit: u32,
    remaining: u32,
}

impl Countdown {
    pub fn new(limit_seconds: u32) -> Self {
        Self {
            limit: limit_seconds,
            remaining: limit_seconds,
        }
    }

    /// Take one second off the clock. Saturates at zero.
    pub fn decrement(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    pub fn reset(&mut self) {
        self.remaining = self.limit;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_runs_to_zero() {
        let mut countdown = Countdown::new(3);
        assert_eq!(countdown.decrement(), 2);
        assert_eq!(countdown.decrement(), 1);
        assert!(!countdown.is_expired());
        assert_eq!(countdown.decrement(), 0);
        assert!(countdown.is_expired());
        assert_eq!(countdown.decrement(), 0, "countdown should saturate at zero");
    }

    #[test]
    fn test_reset_restores_limit() {
        let mut countdown = Countdown::new(60);
        countdown.decrement();
        countdown.decrement();
        assert_eq!(countdown.remaining(), 58);
        countdown.reset();
        assert_eq!(countdown.remaining(), 60);
    }
}
