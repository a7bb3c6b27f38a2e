use log::Level;

use crate::countdown::Countdown;

pub const PAYMENT_LINK: &str = "https://go.hotmart.com/A103952710T";

pub const WHATSAPP_PHONE: &str = "3113423740";
pub const WHATSAPP_MESSAGE: &str = "Hola Diego tengo preguntas sobre el curso";

pub const VIDEO_ID: &str = "DfugZeziq-Q";

pub const INSTRUCTOR_PHOTO: &str = "/assets/jaime-jaramillo.png";

/// Value the offer clock starts from on every mount. Illustrative, not tied to
/// a real campaign deadline, so a reload starts it over.
pub const INITIAL_COUNTDOWN: Countdown = Countdown::new(2, 14, 45, 0);

pub const TICK_PERIOD_MS: u32 = 1_000;

/// Fraction of the viewport height, measured from the bottom, that an element
/// has to clear before it is revealed.
pub const REVEAL_OFFSET: f64 = 0.1;

pub fn whatsapp_link() -> String {
    format!(
        "https://api.whatsapp.com/send?phone={}&text={}",
        WHATSAPP_PHONE,
        urlencoding::encode(WHATSAPP_MESSAGE)
    )
}

pub fn video_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}?rel=0&modestbranding=1", video_id)
}

pub fn avatar_url(seed: u32) -> String {
    format!("https://i.pravatar.cc/100?u={}", seed)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally with `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_the_prefilled_message() {
        assert_eq!(
            whatsapp_link(),
            "https://api.whatsapp.com/send?phone=3113423740&text=Hola%20Diego%20tengo%20preguntas%20sobre%20el%20curso"
        );
    }

    #[test]
    fn video_embed_url_uses_the_fixed_template() {
        assert_eq!(
            video_embed_url(VIDEO_ID),
            "https://www.youtube.com/embed/DfugZeziq-Q?rel=0&modestbranding=1"
        );
    }

    #[test]
    fn initial_countdown_is_two_days_fourteen_hours_forty_five_minutes() {
        assert_eq!(INITIAL_COUNTDOWN, Countdown::new(2, 14, 45, 0));
    }
}
