pub const BUSINESS_NAME: &str = "Aaliya";
pub const BUSINESS_NAME_ACCENT: &str = "Events";

pub const PHONE_DISPLAY: &str = "+91 9847980324";
pub const EMAIL: &str = "aaliyacaterin@gmail.com";
pub const LOCATION: &str = "Muzhappilangad, Thalassery";

pub const WHATSAPP_GREETING: &str = "Hi AaliyaEvents, I'd like to plan an event.";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3905.523393138921!2d75.44532430000002!3d11.798570699999996!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3ba417ec544db07b%3A0x2f6b0be222fb10d4!2sAaliya%20Events!5e0!3m2!1sen!2sin!4v1763908400363!5m2!1sen!2sin";

/// Scroll distance in px after which the navbar switches to its opaque style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 20.0;
/// Height of the fixed navbar, subtracted when scrolling to a section.
pub const NAVBAR_OFFSET: f64 = 80.0;
/// Distance from the bottom of the viewport at which `reveal` elements animate in.
pub const REVEAL_MARGIN: f64 = 100.0;
pub const TOAST_DURATION_MS: u32 = 4_000;

fn phone_digits() -> String {
    PHONE_DISPLAY
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

pub fn tel_href() -> String {
    format!("tel:{}", phone_digits())
}

pub fn whatsapp_href() -> String {
    let number = phone_digits().trim_start_matches('+').to_string();
    format!(
        "https://wa.me/{}?text={}",
        number,
        urlencoding::encode(WHATSAPP_GREETING)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_href_strips_spaces() {
        assert_eq!(tel_href(), "tel:+919847980324");
    }

    #[test]
    fn whatsapp_href_drops_plus_and_encodes_greeting() {
        let href = whatsapp_href();
        assert!(href.starts_with("https://wa.me/919847980324?text="));
        assert!(!href.contains(' '));
        assert!(href.contains("Hi%20AaliyaEvents"));
    }
}
