use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationMode {
    Autoplaying,
    /// Set by a manual selection. Never goes back to autoplaying.
    Pinned,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
    mode: RotationMode,
}

impl Rotation {
    pub fn new(len: usize, autoplay: bool) -> Self {
        Self {
            index: 0,
            len,
            mode: if autoplay {
                RotationMode::Autoplaying
            } else {
                RotationMode::Pinned
            },
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    pub fn is_autoplaying(&self) -> bool {
        self.mode == RotationMode::Autoplaying
    }

    pub fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    /// Timer callback. Moves only while autoplaying.
    pub fn tick(&mut self) -> bool {
        if !self.is_autoplaying() || self.is_empty() {
            return false;
        }
        self.advance();
        true
    }

    pub fn select(&mut self, index: usize) {
        self.mode = RotationMode::Pinned;
        if self.is_empty() {
            return;
        }
        self.index = index % self.len;
    }

    pub fn next(&mut self) {
        self.select(self.index + 1);
    }

    pub fn previous(&mut self) {
        if self.is_empty() {
            self.mode = RotationMode::Pinned;
            return;
        }
        self.select(self.index + self.len - 1);
    }
}

pub enum RotationAction {
    Tick,
    Select(usize),
    Next,
    Previous,
}

impl Reducible for Rotation {
    type Action = RotationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            RotationAction::Tick => {
                next.tick();
            }
            RotationAction::Select(index) => next.select(index),
            RotationAction::Next => next.next(),
            RotationAction::Previous => next.previous(),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_exactly_once() {
        let mut rotation = Rotation::new(5, true);
        for _ in 0..5 {
            rotation.advance();
        }
        assert_eq!(rotation.index(), 0);
        rotation.advance();
        assert_eq!(rotation.index(), 1);
    }

    #[test]
    fn manual_selection_pins_for_good() {
        let mut rotation = Rotation::new(5, true);
        rotation.select(2);
        assert_eq!(rotation.index(), 2);
        assert_eq!(rotation.mode(), RotationMode::Pinned);

        assert!(!rotation.tick());
        assert!(!rotation.tick());
        assert_eq!(rotation.index(), 2);
    }

    #[test]
    fn select_takes_index_modulo_len() {
        let mut rotation = Rotation::new(4, true);
        rotation.select(6);
        assert_eq!(rotation.index(), 2);
    }

    #[test]
    fn previous_wraps_to_last_and_pins() {
        let mut rotation = Rotation::new(4, true);
        rotation.previous();
        assert_eq!(rotation.index(), 3);
        assert!(!rotation.is_autoplaying());
        rotation.next();
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn autoplay_off_never_ticks() {
        let mut rotation = Rotation::new(3, false);
        assert!(!rotation.tick());
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn empty_rotation_stays_put() {
        let mut rotation = Rotation::new(0, true);
        assert!(rotation.is_empty());
        assert!(!rotation.tick());
        rotation.advance();
        rotation.next();
        rotation.previous();
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn stale_tick_after_pin_is_ignored_by_reducer() {
        let state = Rc::new(Rotation::new(5, true));
        let state = state.reduce(RotationAction::Tick);
        assert_eq!(state.index(), 1);
        let pinned = state.reduce(RotationAction::Select(3));
        let after = pinned.clone().reduce(RotationAction::Tick);
        assert!(Rc::ptr_eq(&pinned, &after));
        assert_eq!(after.index(), 3);
    }
}
