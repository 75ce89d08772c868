use log::Level;

use crate::state::reveal::RevealOptions;

pub const THEME_STORAGE_KEY: &str = "pacific-softwares-theme";

pub const THEME_COLOR_DARK: &str = "#0A0F1C";
pub const THEME_COLOR_LIGHT: &str = "#ffffff";

/// Scroll offset (px) past which the header switches to its compact look.
pub const COMPACT_HEADER_THRESHOLD: f64 = 20.0;

pub const HERO_ROTATION_MS: u32 = 3000;
pub const TESTIMONIAL_ROTATION_MS: u32 = 5000;
pub const PROCESS_ROTATION_MS: u32 = 8000;

pub const CONTACT_RESET_DELAY_MS: u32 = 3000;

pub const SCHEDULING_URL: &str = "https://cal.com/khushal-sharma-txi5n5";

pub const WHATSAPP_PHONE: &str = "919549020892";
pub const WHATSAPP_MESSAGE: &str =
    "Hi! I'm interested in your web development services. Can we discuss my project?";

pub const CONTACT_EMAIL: &str = "hello@pacificsoftwares.com";

pub const DEFAULT_REVEAL: RevealOptions = RevealOptions {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
};

pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(message))
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_message() {
        let link = whatsapp_link("15550001111", "Hi there, can we talk?");
        assert_eq!(
            link,
            "https://wa.me/15550001111?text=Hi%20there%2C%20can%20we%20talk%3F"
        );
    }

    #[test]
    fn default_whatsapp_link_has_no_raw_spaces() {
        let link = whatsapp_link(WHATSAPP_PHONE, WHATSAPP_MESSAGE);
        assert!(link.starts_with("https://wa.me/919549020892?text=Hi%21"));
        assert!(!link.contains(' '));
    }
}
