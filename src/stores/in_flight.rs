// ============================================================================
// IN FLIGHT - one request of a kind at a time
// ============================================================================
// Clones share the flag, so a guard captured by a callback and by the
// future it spawns sees the same state.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct InFlight {
    busy: Rc<Cell<bool>>,
}

impl InFlight {
    /// Marks the guard busy; false if something is already running
    pub fn try_begin(&self) -> bool {
        !self.busy.replace(true)
    }

    pub fn finish(&self) {
        self.busy.set(false);
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_is_refused_until_finish() {
        let guard = InFlight::default();
        assert!(!guard.is_busy());

        assert!(guard.try_begin());
        assert!(guard.is_busy());
        assert!(!guard.try_begin());

        guard.finish();
        assert!(!guard.is_busy());
        assert!(guard.try_begin());
    }

    #[test]
    fn test_clones_share_the_flag() {
        let guard = InFlight::default();
        let in_future = guard.clone();

        assert!(guard.try_begin());
        assert!(!in_future.try_begin());

        in_future.finish();
        assert!(guard.try_begin());
    }

    #[test]
    fn test_independent_guards_do_not_block_each_other() {
        let fetch = InFlight::default();
        let action = InFlight::default();

        assert!(fetch.try_begin());
        assert!(action.try_begin());
        assert!(!action.try_begin());
    }
}
