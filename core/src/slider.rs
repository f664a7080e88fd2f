//! Testimonial slider state
//!
//! A wrapping index over a fixed-length slide deck. The frontend advances
//! it from autoplay ticks and arrow/dot clicks; an empty deck is inert.

/// Current position within a slide deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderState {
    len: usize,
    index: usize,
}

impl SliderState {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance to the next slide, wrapping past the end.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Step back to the previous slide, wrapping past the start.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to a slide. Out-of-range targets are ignored.
    pub fn set(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_past_the_end() {
        let mut slider = SliderState::new(3);
        slider.next();
        slider.next();
        assert_eq!(slider.index(), 2);
        slider.next();
        assert_eq!(slider.index(), 0, "Advancing from the last slide wraps");
    }

    #[test]
    fn prev_wraps_past_the_start() {
        let mut slider = SliderState::new(3);
        slider.prev();
        assert_eq!(slider.index(), 2, "Stepping back from the first slide wraps");
        slider.prev();
        assert_eq!(slider.index(), 1);
    }

    #[test]
    fn set_jumps_within_range() {
        let mut slider = SliderState::new(4);
        slider.set(2);
        assert_eq!(slider.index(), 2);
        slider.set(9);
        assert_eq!(slider.index(), 2, "Out-of-range jump is ignored");
    }

    #[test]
    fn empty_deck_is_inert() {
        let mut slider = SliderState::new(0);
        slider.next();
        slider.prev();
        slider.set(0);
        assert_eq!(slider.index(), 0);
        assert!(slider.is_empty());
    }

    #[test]
    fn single_slide_stays_put() {
        let mut slider = SliderState::new(1);
        slider.next();
        assert_eq!(slider.index(), 0);
        slider.prev();
        assert_eq!(slider.index(), 0);
    }
}
