//! Restart guard — keeps at most one restart in flight.

use std::cell::Cell;

/// Flag preventing overlapping restart operations.
///
/// Meant for a single-threaded UI loop: it is `!Sync` on purpose and uses a
/// plain [`Cell`]. Acquisition hands out a [`RestartPermit`] which clears the
/// flag when dropped, so every exit path of a restart releases it.
#[derive(Debug, Default)]
pub struct RestartGuard {
    in_flight: Cell<bool>,
}

impl RestartGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a restart currently holds the guard.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.in_flight.get()
    }

    /// Take the guard, or `None` if a restart is already in flight.
    #[must_use]
    pub fn try_acquire(&self) -> Option<RestartPermit<'_>> {
        if self.in_flight.replace(true) {
            return None;
        }
        Some(RestartPermit { guard: self })
    }
}

/// Proof that the holder owns the [`RestartGuard`]. Releases it on drop.
#[derive(Debug)]
#[must_use = "dropping the permit releases the guard immediately"]
pub struct RestartPermit<'a> {
    guard: &'a RestartGuard,
}

impl Drop for RestartPermit<'_> {
    fn drop(&mut self) {
        self.guard.in_flight.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_released() {
        assert!(!RestartGuard::new().is_held());
    }

    #[test]
    fn should_refuse_second_acquire_while_held() {
        let guard = RestartGuard::new();
        let permit = guard.try_acquire();
        assert!(permit.is_some());
        assert!(guard.is_held());
        assert!(guard.try_acquire().is_none());
    }

    #[test]
    fn should_release_when_permit_dropped() {
        let guard = RestartGuard::new();
        let permit = guard.try_acquire().unwrap();
        drop(permit);
        assert!(!guard.is_held());
        assert!(guard.try_acquire().is_some());
    }

    #[test]
    fn should_keep_guard_held_after_refused_acquire() {
        let guard = RestartGuard::new();
        let _permit = guard.try_acquire().unwrap();
        let refused = guard.try_acquire();
        drop(refused);
        assert!(guard.is_held());
    }
}
