pub const ACTIVE_DOT_CLASS: &str = "active";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    paused: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Option<Self> {
        if len <= 1 {
            return None;
        }
        Some(Self {
            index: 0,
            len,
            paused: false,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn tick(&mut self) -> Option<usize> {
        if self.paused {
            return None;
        }
        Some(self.advance())
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn jump_to(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.index = index;
        Some(self.index)
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_active_dot(&self, dot: usize) -> bool {
        dot == self.index
    }

    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_dots(carousel: &Carousel) -> Vec<usize> {
        (0..carousel.len()).filter(|dot| carousel.is_active_dot(*dot)).collect()
    }

    fn current(carousel: &Carousel) -> usize {
        let dots = active_dots(carousel);
        assert_eq!(dots.len(), 1);
        dots[0]
    }

    #[test]
    fn single_slide_has_no_carousel() {
        assert!(Carousel::new(0).is_none());
        assert!(Carousel::new(1).is_none());
    }

    #[test]
    fn starts_on_first_slide_with_one_active_dot() {
        for len in 2..6 {
            let carousel = Carousel::new(len).expect("two or more slides");
            assert_eq!(current(&carousel), 0);
            assert_eq!(active_dots(&carousel), vec![0]);
            assert_eq!(carousel.track_transform(), "translateX(-0%)");
        }
    }

    #[test]
    fn jumping_lands_on_the_clicked_dot_from_anywhere() {
        let len = 4;
        for start in 0..len {
            for target in 0..len {
                let mut carousel = Carousel::new(len).expect("carousel");
                carousel.jump_to(start);
                assert_eq!(carousel.jump_to(target), Some(target));
                assert_eq!(current(&carousel), target);
                assert_eq!(active_dots(&carousel), vec![target]);
            }
        }
    }

    #[test]
    fn out_of_range_jump_is_ignored() {
        let mut carousel = Carousel::new(3).expect("carousel");
        carousel.jump_to(1);
        assert_eq!(carousel.jump_to(3), None);
        assert_eq!(current(&carousel), 1);
    }

    #[test]
    fn ticks_cycle_back_after_len_periods() {
        for len in 2..7 {
            let mut carousel = Carousel::new(len).expect("carousel");
            carousel.jump_to(len / 2);
            let start = current(&carousel);
            for _ in 0..len {
                carousel.tick();
            }
            assert_eq!(current(&carousel), start);
        }
    }

    #[test]
    fn pause_and_resume_alone_keep_the_index() {
        let mut carousel = Carousel::new(3).expect("carousel");
        carousel.tick();
        carousel.pause();
        assert_eq!(carousel.tick(), None);
        carousel.resume();
        assert_eq!(current(&carousel), 1);
        assert_eq!(carousel.tick(), Some(2));
    }

    #[test]
    fn track_offset_follows_index() {
        let mut carousel = Carousel::new(3).expect("carousel");
        carousel.jump_to(2);
        assert_eq!(carousel.track_transform(), "translateX(-200%)");
    }
}
