//! Cooldown accumulator shared by every timed ability.

/// Elapsed-time counter that gates a repeatable action.
///
/// Every timed ability (attacks, jumps, stomps, reloads, boss specials)
/// follows the same accumulate-and-reset pattern, so it lives here as one
/// value type instead of scattered float pairs.
///
/// A zero or negative period disables the cooldown entirely: it never
/// reports ready, so a misconfigured ability goes inert instead of
/// dividing by zero somewhere upstream.
#[derive(Clone, Copy, Debug)]
pub struct Cooldown {
    elapsed: f32,
    period: f32,
}

impl Cooldown {
    /// Cooldown that becomes ready every `period` seconds.
    pub fn from_period(period: f32) -> Self {
        Self {
            elapsed: 0.0,
            period,
        }
    }

    /// Cooldown from an actions-per-second rate.
    pub fn from_rate(rate: f32) -> Self {
        if rate > 0.0 {
            Self::from_period(1.0 / rate)
        } else {
            // Rate of zero or less means the ability never fires.
            Self::from_period(0.0)
        }
    }

    /// Advance by `dt` seconds. Returns true when the period has elapsed,
    /// resetting the accumulator for the next cycle.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.period <= 0.0 {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.period {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    /// Make the cooldown ready on the next tick, regardless of elapsed time.
    pub fn prime(&mut self) {
        self.elapsed = self.period;
    }

    /// Clear accumulated time without changing the period.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    /// True when the cooldown can never fire (bad configuration).
    pub fn is_disabled(&self) -> bool {
        self.period <= 0.0
    }
}
