//! Image carousel state
//!
//! Pure index arithmetic; the DOM (track transform, indicator classes,
//! autoplay interval) is driven from the wiring in `main.rs`.

/// Current position within a fixed set of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    current: usize,
    total: usize,
}

impl Slider {
    /// A slider over `total` slides, starting at the first. `total` of zero
    /// yields an inert slider on which every operation is a no-op.
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Jump to `index`, wrapping in either direction so `go_to(-1)` lands on
    /// the last slide and `go_to(total)` on the first.
    pub fn go_to(&mut self, index: isize) {
        if self.total == 0 {
            return;
        }
        self.current = index.rem_euclid(self.total as isize) as usize;
    }

    pub fn next(&mut self) {
        self.go_to(self.current as isize + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.current as isize - 1);
    }

    /// Horizontal track offset as a CSS percentage (each slide is 100% wide).
    pub fn offset_percent(&self) -> f32 {
        -100.0 * self.current as f32
    }

    /// Whether the indicator at `index` should carry the active class.
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_forward() {
        let mut slider = Slider::new(3);
        assert_eq!(slider.total(), 3);
        slider.next();
        slider.next();
        assert_eq!(slider.current(), 2);
        slider.next();
        assert_eq!(slider.current(), 0);
    }

    #[test]
    fn test_prev_wraps_backward() {
        let mut slider = Slider::new(3);
        slider.prev();
        assert_eq!(slider.current(), 2);
        assert_eq!(slider.offset_percent(), -200.0);
    }

    #[test]
    fn test_go_to_wraps_both_directions() {
        let mut slider = Slider::new(4);
        slider.go_to(-1);
        assert_eq!(slider.current(), 3);
        slider.go_to(4);
        assert_eq!(slider.current(), 0);
        slider.go_to(6);
        assert_eq!(slider.current(), 2);
    }

    #[test]
    fn test_active_indicator_tracks_current() {
        let mut slider = Slider::new(3);
        slider.go_to(1);
        assert!(slider.is_active(1));
        assert!(!slider.is_active(0));
        assert_eq!(slider.offset_percent(), -100.0);
    }

    #[test]
    fn test_empty_slider_is_inert() {
        let mut slider = Slider::new(0);
        slider.next();
        slider.prev();
        slider.go_to(5);
        assert_eq!(slider.current(), 0);
        assert_eq!(slider.offset_percent(), 0.0);
    }
}
