use std::collections::HashSet;
use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// Negative bottom margin fires the reveal slightly before the element
    /// is fully on screen.
    pub root_margin: &'static str,
}

/// Keys of the elements that have entered the viewport at least once.
/// Keys are only ever added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealSet {
    revealed: HashSet<String>,
}

impl RevealSet {
    /// Returns true the first time a key is revealed.
    pub fn reveal(&mut self, key: &str) -> bool {
        if self.revealed.contains(key) {
            return false;
        }
        self.revealed.insert(key.to_string())
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }
}

pub struct Reveal(pub String);

impl Reducible for RevealSet {
    type Action = Reveal;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.is_revealed(&action.0) {
            return self;
        }
        let mut next = (*self).clone();
        next.reveal(&action.0);
        Rc::new(next)
    }
}

/// Inline style giving list items a staggered entrance.
pub fn stagger_delay(index: usize) -> String {
    format!("animation-delay: {:.1}s;", index as f64 * 0.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_one_way() {
        let mut set = RevealSet::default();
        assert!(!set.is_revealed("hero"));
        assert!(set.reveal("hero"));
        assert!(!set.reveal("hero"));
        assert!(set.is_revealed("hero"));
        assert!(!set.is_revealed("contact"));
    }

    #[test]
    fn reducer_keeps_same_rc_for_repeat_reveal() {
        let state = Rc::new(RevealSet::default());
        let once = state.reduce(Reveal("card-1".into()));
        let twice = once.clone().reduce(Reveal("card-1".into()));
        assert!(Rc::ptr_eq(&once, &twice));
        assert!(twice.is_revealed("card-1"));
    }

    #[test]
    fn stagger_steps_by_a_tenth() {
        assert_eq!(stagger_delay(0), "animation-delay: 0.0s;");
        assert_eq!(stagger_delay(3), "animation-delay: 0.3s;");
    }
}
