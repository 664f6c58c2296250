//! Scroll-driven page helpers
//!
//! The decision logic for the back-to-top button and the skill-bar animation
//! lives here so it can be tested off-browser; the listeners are in `main.rs`.

use crate::consts::BACK_TO_TOP_SHOW_AT;

/// Whether the back-to-top button should be visible at a given scroll depth.
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_SHOW_AT
}

/// Turn a skill bar's `data-percent` attribute into its target CSS width.
///
/// Accepts plain numbers (`"85"`, `"72.5"`), clamps to 0-100, and yields
/// `None` for a missing or non-numeric attribute (the bar then simply stays
/// unanimated).
pub fn skill_bar_width(data_percent: Option<&str>) -> Option<String> {
    let percent: f64 = data_percent?.trim().parse().ok()?;
    if !percent.is_finite() {
        return None;
    }
    let percent = percent.clamp(0.0, 100.0);
    Some(format!("{percent}%"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_to_top_threshold() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(300.5));
        assert!(back_to_top_visible(2000.0));
    }

    #[test]
    fn test_skill_bar_width_parses_and_clamps() {
        assert_eq!(skill_bar_width(Some("85")), Some("85%".to_string()));
        assert_eq!(skill_bar_width(Some(" 72.5 ")), Some("72.5%".to_string()));
        assert_eq!(skill_bar_width(Some("140")), Some("100%".to_string()));
        assert_eq!(skill_bar_width(Some("-3")), Some("0%".to_string()));
    }

    #[test]
    fn test_skill_bar_width_rejects_junk() {
        assert_eq!(skill_bar_width(None), None);
        assert_eq!(skill_bar_width(Some("")), None);
        assert_eq!(skill_bar_width(Some("lots")), None);
        assert_eq!(skill_bar_width(Some("NaN")), None);
        assert_eq!(skill_bar_width(Some("inf")), None);
    }
}
