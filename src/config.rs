use log::Level;

/// Phone number shown in the contact form's success message.
pub const CONTACT_PHONE: &str = "591902479";

/// Delays driving the contact form and the small page effects, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    /// Stand-in for network latency of the simulated submission.
    pub submit_delay_ms: u32,
    pub auto_hide_ms: u32,
    /// Gap between rendering the status message hidden and fading it in.
    pub reveal_delay_ms: u32,
    pub press_effect_ms: u32,
    pub counter_tick_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1_500,
            auto_hide_ms: 8_000,
            reveal_delay_ms: 10,
            press_effect_ms: 150,
            counter_tick_ms: 1,
        }
    }
}

pub const NAVBAR_SOLID_AFTER_PX: f64 = 100.0;
pub const NAV_SCROLL_OFFSET_PX: f64 = 80.0;
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 100.0;
pub const SCROLL_INDICATOR_HIDE_AFTER_PX: f64 = 100.0;
pub const PARALLAX_SPEED: f64 = 0.5;
/// Higher is slower.
pub const COUNTER_SPEED: u32 = 200;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const CARD_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const SECTION_REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const COUNTER_TRIGGER_THRESHOLD: f64 = 0.5;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
