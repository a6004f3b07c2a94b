//! Shift and caps-lock tracking.

use tracing::debug;

/// Which table a key press is looked up in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseState {
    Lower,
    Upper,
}

/// Lock and modifier flags for one input session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    caps_lock_on: bool,
    shift_on: bool,
}

impl InputState {
    /// Start a session with the caps-lock state reported by the host.
    pub fn new(caps_lock_on: bool) -> Self {
        Self {
            caps_lock_on,
            shift_on: false,
        }
    }

    pub fn caps_lock_on(&self) -> bool {
        self.caps_lock_on
    }

    pub fn shift_on(&self) -> bool {
        self.shift_on
    }

    pub fn toggle_caps_lock(&mut self) {
        self.caps_lock_on = !self.caps_lock_on;
        debug!(caps_lock = self.caps_lock_on, "caps lock toggled");
    }

    pub fn set_shift(&mut self, on: bool) {
        if self.shift_on != on {
            debug!(shift = on, "shift changed");
        }
        self.shift_on = on;
    }

    /// Either flag alone selects upper case; both together cancel out.
    pub fn is_upper_case(&self) -> bool {
        self.caps_lock_on != self.shift_on
    }

    pub fn case_state(&self) -> CaseState {
        if self.is_upper_case() {
            CaseState::Upper
        } else {
            CaseState::Lower
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sequence() {
        let mut state = InputState::new(false);
        assert!(!state.is_upper_case());

        state.set_shift(true);
        assert!(state.is_upper_case());

        state.set_shift(false);
        assert!(!state.is_upper_case());

        state.toggle_caps_lock();
        assert!(state.is_upper_case());

        state.set_shift(true);
        assert!(!state.is_upper_case());
        assert_eq!(state.case_state(), CaseState::Lower);
    }

    #[test]
    fn test_caps_lock_double_toggle_restores_case() {
        for initial in [false, true] {
            let mut state = InputState::new(initial);
            let before = state.case_state();
            state.toggle_caps_lock();
            assert_ne!(state.case_state(), before);
            state.toggle_caps_lock();
            assert_eq!(state.case_state(), before);
        }
    }

    #[test]
    fn test_initial_caps_lock_from_host() {
        let state = InputState::new(true);
        assert!(state.caps_lock_on());
        assert!(!state.shift_on());
        assert_eq!(state.case_state(), CaseState::Upper);
    }

    #[test]
    fn test_repeated_shift_down_is_idempotent() {
        let mut state = InputState::default();
        state.set_shift(true);
        state.set_shift(true);
        assert!(state.shift_on());
        state.set_shift(false);
        assert!(!state.is_upper_case());
    }
}
