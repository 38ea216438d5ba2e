//! Scroll, hover and counter arithmetic behind the page's visual effects.
//!
//! Components feed these with raw browser measurements and apply the result
//! as inline styles or classes.

use crate::config;

pub fn navbar_background(scroll_y: f64) -> &'static str {
    if scroll_y > config::NAVBAR_SOLID_AFTER_PX {
        "rgba(15, 23, 42, 0.98)"
    } else {
        "rgba(15, 23, 42, 0.95)"
    }
}

/// Where a nav link click scrolls to, leaving room for the fixed navbar.
pub fn anchor_scroll_top(section_offset_top: f64) -> f64 {
    section_offset_top - config::NAV_SCROLL_OFFSET_PX
}

/// Measured position of a `section[id]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

/// Section whose nav link should be highlighted, if any. The last section
/// containing the scroll position wins.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|section| {
            let top = section.offset_top - config::ACTIVE_SECTION_OFFSET_PX;
            scroll_y > top && scroll_y <= top + section.height
        })
        .last()
        .map(|section| section.id.as_str())
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * config::PARALLAX_SPEED)
}

pub fn scroll_indicator_opacity(scroll_y: f64) -> &'static str {
    if scroll_y > config::SCROLL_INDICATOR_HIDE_AFTER_PX {
        "0"
    } else {
        "1"
    }
}

/// Inline style of a card that fades in on scroll and optionally lifts on hover.
pub fn card_style(revealed: bool, hovered: bool) -> String {
    let opacity = if revealed { "1" } else { "0" };
    let transform = match (revealed, hovered) {
        (_, true) => "translateY(-10px) scale(1.02)",
        (true, false) => "translateY(0) scale(1)",
        (false, false) => "translateY(30px)",
    };
    format!("opacity: {opacity}; transform: {transform}; transition: all 0.6s ease-out;")
}

pub fn section_class(visible: bool) -> &'static str {
    if visible {
        "section-hidden section-visible"
    } else {
        "section-hidden"
    }
}

/// Next value shown by a stat counter climbing towards `target`.
pub fn counter_step(current: u32, target: u32) -> u32 {
    if current >= target {
        return target;
    }
    let increment = f64::from(target) / f64::from(config::COUNTER_SPEED);
    let next = (f64::from(current) + increment).ceil() as u32;
    next.min(target)
}

pub fn counter_label(value: u32) -> String {
    format!("{value}+")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, offset_top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            offset_top,
            height,
        }
    }

    #[test]
    fn navbar_turns_solid_past_threshold() {
        assert_eq!(navbar_background(0.0), "rgba(15, 23, 42, 0.95)");
        assert_eq!(navbar_background(100.0), "rgba(15, 23, 42, 0.95)");
        assert_eq!(navbar_background(100.5), "rgba(15, 23, 42, 0.98)");
    }

    #[test]
    fn anchor_scroll_clears_navbar() {
        assert_eq!(anchor_scroll_top(900.0), 820.0);
    }

    #[test]
    fn highlights_section_under_scroll_position() {
        let sections = [
            section("home", 0.0, 800.0),
            section("about", 800.0, 600.0),
            section("contact", 1400.0, 700.0),
        ];
        assert_eq!(active_section(50.0, &sections), Some("home"));
        assert_eq!(active_section(700.0, &sections), Some("home"));
        assert_eq!(active_section(701.0, &sections), Some("about"));
        assert_eq!(active_section(1350.0, &sections), Some("contact"));
        assert_eq!(active_section(5000.0, &sections), None);
    }

    #[test]
    fn last_overlapping_section_wins() {
        let sections = [section("a", 0.0, 1000.0), section("b", 300.0, 400.0)];
        assert_eq!(active_section(400.0, &sections), Some("b"));
    }

    #[test]
    fn parallax_moves_at_half_speed() {
        assert_eq!(parallax_transform(0.0), "translateY(0px)");
        assert_eq!(parallax_transform(240.0), "translateY(120px)");
    }

    #[test]
    fn indicator_fades_once_scrolled() {
        assert_eq!(scroll_indicator_opacity(10.0), "1");
        assert_eq!(scroll_indicator_opacity(101.0), "0");
    }

    #[test]
    fn card_styles() {
        assert!(card_style(false, false).contains("translateY(30px)"));
        assert!(card_style(false, false).contains("opacity: 0"));
        assert!(card_style(true, false).contains("translateY(0) scale(1)"));
        assert!(card_style(true, true).contains("translateY(-10px) scale(1.02)"));
    }

    #[test]
    fn counter_reaches_target_exactly() {
        let target = 150;
        let mut value = 0;
        let mut ticks = 0;
        while value < target {
            let next = counter_step(value, target);
            assert!(next > value);
            value = next;
            ticks += 1;
        }
        assert_eq!(value, target);
        assert_eq!(ticks, 150);
        assert_eq!(counter_label(value), "150+");
    }

    #[test]
    fn counter_with_large_target_takes_bigger_steps() {
        assert_eq!(counter_step(0, 1000), 5);
        assert_eq!(counter_step(998, 1000), 1000);
        assert_eq!(counter_step(1200, 1000), 1000);
    }
}
