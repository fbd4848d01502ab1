// Transition
//
// the exit/enter animation played across a page swap.  a link click starts
// the exit while the outgoing page is still mounted; only once the exit has
// finished does the router swap pages, and the new page then plays its enter.
// a route change that did not come through a link (back/forward) skips the
// exit and goes straight to the enter.
//
// every started transition bumps the generation, and the timer callbacks carry
// the generation they were scheduled for.  a callback from a transition that
// has since been superseded is ignored
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    // outgoing page fading out
    Exiting,
    // exit done, waiting for the router to swap pages
    Hidden,
    // incoming page fading in
    Entering,
}

impl Phase {
    pub fn class(self) -> &'static str {
        match self {
            Phase::Idle => "page",
            Phase::Exiting => "page page-exit",
            Phase::Hidden => "page page-hidden",
            Phase::Entering => "page page-enter",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    phase: Phase,
    generation: u64,
}

impl Transition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    // returns the generation the exit timer must report back with
    pub fn begin_exit(&mut self) -> u64 {
        self.generation += 1;
        self.phase = Phase::Exiting;
        debug!(generation = self.generation, "page exit started");
        self.generation
    }

    // true exactly once per exit: the caller swaps the route when it sees it
    pub fn exit_finished(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != Phase::Exiting {
            return false;
        }
        self.phase = Phase::Hidden;
        true
    }

    // the router has swapped pages.  returns the generation for the enter timer
    pub fn route_changed(&mut self) -> u64 {
        self.generation += 1;
        self.phase = Phase::Entering;
        self.generation
    }

    pub fn enter_finished(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != Phase::Entering {
            return false;
        }
        self.phase = Phase::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_navigation_exits_before_the_swap() {
        let mut t = Transition::new();
        assert_eq!(t.phase(), Phase::Idle);

        let exit = t.begin_exit();
        assert_eq!(t.phase(), Phase::Exiting);

        // the route only changes once the exit reports finished
        assert!(t.exit_finished(exit));
        assert_eq!(t.phase(), Phase::Hidden);

        let enter = t.route_changed();
        assert_eq!(t.phase(), Phase::Entering);

        assert!(t.enter_finished(enter));
        assert_eq!(t.phase(), Phase::Idle);
    }

    #[test]
    fn exit_finishes_only_once() {
        let mut t = Transition::new();
        let exit = t.begin_exit();
        assert!(t.exit_finished(exit));
        assert!(!t.exit_finished(exit));
    }

    #[test]
    fn history_navigation_enters_without_exit() {
        let mut t = Transition::new();
        let enter = t.route_changed();
        assert_eq!(t.phase(), Phase::Entering);
        assert!(t.enter_finished(enter));
        assert_eq!(t.phase(), Phase::Idle);
    }

    #[test]
    fn stale_exit_timer_does_not_swap() {
        let mut t = Transition::new();
        let first = t.begin_exit();
        let second = t.begin_exit();
        assert_ne!(first, second);

        assert!(!t.exit_finished(first));
        assert_eq!(t.phase(), Phase::Exiting);
        assert!(t.exit_finished(second));
    }

    #[test]
    fn route_change_mid_exit_cancels_the_pending_swap() {
        let mut t = Transition::new();
        let exit = t.begin_exit();

        // back button pressed while the exit is still running
        let enter = t.route_changed();
        assert!(!t.exit_finished(exit));
        assert_eq!(t.phase(), Phase::Entering);
        assert!(t.enter_finished(enter));
    }

    #[test]
    fn stale_enter_timer_is_ignored() {
        let mut t = Transition::new();
        let first = t.route_changed();
        let second = t.route_changed();
        assert!(!t.enter_finished(first));
        assert_eq!(t.phase(), Phase::Entering);
        assert!(t.enter_finished(second));
    }

    #[test]
    fn phase_classes() {
        assert_eq!(Phase::Idle.class(), "page");
        assert!(Phase::Exiting.class().contains("page-exit"));
        assert!(Phase::Hidden.class().contains("page-hidden"));
        assert!(Phase::Entering.class().contains("page-enter"));
    }
}
