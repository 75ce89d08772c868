use std::fmt;

/// In-page sections reachable from the header. The ids are the anchor
/// contract with the rendered sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Portfolio,
    Services,
    Process,
    About,
    Contact,
}

/// Header links. Home is reached through the logo.
pub const NAV_SECTIONS: [Section; 5] = [
    Section::Portfolio,
    Section::Services,
    Section::Process,
    Section::About,
    Section::Contact,
];

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Portfolio => "portfolio",
            Section::Services => "services",
            Section::Process => "process",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Portfolio => "Portfolio",
            Section::Services => "Services",
            Section::Process => "Process",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Accepts `contact` or `#contact`.
    pub fn from_anchor(anchor: &str) -> Option<Section> {
        let id = anchor.strip_prefix('#').unwrap_or(anchor);
        [Section::Home]
            .into_iter()
            .chain(NAV_SECTIONS)
            .find(|section| section.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    pub scroll_offset: f64,
    pub menu_open: bool,
}

impl NavState {
    pub fn is_compact(&self, threshold: f64) -> bool {
        self.scroll_offset > threshold
    }

    pub fn open(&mut self) {
        self.menu_open = true;
    }

    pub fn close(&mut self) {
        self.menu_open = false;
    }

    pub fn toggle(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Closes the menu and returns the element id to scroll to.
    pub fn navigate_to(&mut self, anchor: &str) -> String {
        self.close();
        anchor.strip_prefix('#').unwrap_or(anchor).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::COMPACT_HEADER_THRESHOLD;

    #[test]
    fn compact_only_past_threshold() {
        let mut nav = NavState::default();
        assert!(!nav.is_compact(COMPACT_HEADER_THRESHOLD));
        nav.scroll_offset = 20.0;
        assert!(!nav.is_compact(COMPACT_HEADER_THRESHOLD));
        nav.scroll_offset = 20.5;
        assert!(nav.is_compact(COMPACT_HEADER_THRESHOLD));
    }

    #[test]
    fn menu_open_close_toggle() {
        let mut nav = NavState::default();
        nav.toggle();
        assert!(nav.menu_open);
        nav.toggle();
        assert!(!nav.menu_open);
        nav.open();
        nav.close();
        assert!(!nav.menu_open);
    }

    #[test]
    fn navigating_closes_menu() {
        let mut nav = NavState::default();
        nav.open();
        assert_eq!(nav.navigate_to("#services"), "services");
        assert!(!nav.menu_open);
        assert_eq!(nav.navigate_to("contact"), "contact");
    }

    #[test]
    fn anchors_resolve_to_sections() {
        assert_eq!(Section::from_anchor("#home"), Some(Section::Home));
        assert_eq!(Section::from_anchor("about"), Some(Section::About));
        assert_eq!(Section::from_anchor("#careers"), None);
        assert_eq!(Section::Process.href(), "#process");
    }

    #[test]
    fn header_links_skip_home() {
        assert!(!NAV_SECTIONS.contains(&Section::Home));
        let ids: Vec<_> = NAV_SECTIONS.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["portfolio", "services", "process", "about", "contact"]);
    }
}
