/// Expand/collapse state where at most one item is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accordion<Id> {
    open: Option<Id>,
}

impl<Id> Default for Accordion<Id> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<Id: Copy + PartialEq> Accordion<Id> {
    pub fn toggle(&mut self, id: Id) {
        self.open = if self.open == Some(id) { None } else { Some(id) };
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, id: Id) -> bool {
        self.open == Some(id)
    }

    pub fn open_id(&self) -> Option<Id> {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let accordion = Accordion::<u32>::default();
        assert_eq!(accordion.open_id(), None);
    }

    #[test]
    fn toggling_same_id_closes_it() {
        let mut accordion = Accordion::default();
        accordion.toggle(3u32);
        assert!(accordion.is_open(3));
        accordion.toggle(3);
        assert_eq!(accordion.open_id(), None);
    }

    #[test]
    fn opening_another_closes_previous() {
        let mut accordion = Accordion::default();
        accordion.toggle(3u32);
        accordion.toggle(5);
        assert!(!accordion.is_open(3));
        assert!(accordion.is_open(5));
        assert_eq!(accordion.open_id(), Some(5));
    }

    #[test]
    fn close_clears() {
        let mut accordion = Accordion::default();
        accordion.toggle(1u32);
        accordion.close();
        assert_eq!(accordion.open_id(), None);
    }
}
