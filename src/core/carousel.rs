use crate::domain::view::{CarouselId, Patch};

/// Horizontal slide strip with wrapping navigation and dot indicators.
/// Instances are plain values and share nothing.
pub struct Carousel {
    id: CarouselId,
    items: usize,
    item_width: u32,
    current: usize,
}

impl Carousel {
    pub fn new(id: CarouselId, items: usize, item_width: u32) -> Self {
        Self {
            id,
            items,
            item_width,
            current: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Selects a slide, wrapping on both ends: -1 lands on the last item,
    /// `items` on the first. Silently no-ops for an empty instance (the
    /// page may not have this carousel at all).
    pub fn show(&mut self, index: isize) -> Vec<Patch> {
        if self.items == 0 {
            return Vec::new();
        }

        self.current = if index < 0 {
            self.items - 1
        } else if index as usize >= self.items {
            0
        } else {
            index as usize
        };

        vec![Patch::CarouselSlide {
            carousel: self.id,
            translate_px: -(self.current as i64) * self.item_width as i64,
            active_dot: self.current,
        }]
    }

    pub fn prev(&mut self) -> Vec<Patch> {
        self.show(self.current as isize - 1)
    }

    pub fn next(&mut self) -> Vec<Patch> {
        self.show(self.current as isize + 1)
    }

    pub fn select(&mut self, dot: usize) -> Vec<Patch> {
        self.show(dot as isize)
    }

    /// Viewport resize changed the item width; re-derive the translation
    /// for the current slide.
    pub fn set_item_width(&mut self, width: u32) -> Vec<Patch> {
        self.item_width = width;
        self.show(self.current as isize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(patches: &[Patch]) -> (i64, usize) {
        match patches {
            [Patch::CarouselSlide {
                translate_px,
                active_dot,
                ..
            }] => (*translate_px, *active_dot),
            other => panic!("expected one slide patch, got {other:?}"),
        }
    }

    #[test]
    fn negative_index_wraps_to_last() {
        let mut carousel = Carousel::new(CarouselId::About, 3, 400);
        let (translate, dot) = slide(&carousel.show(-1));
        assert_eq!(dot, 2);
        assert_eq!(translate, -800);
    }

    #[test]
    fn overflow_wraps_to_first() {
        let mut carousel = Carousel::new(CarouselId::About, 3, 400);
        carousel.show(2);
        let (translate, dot) = slide(&carousel.show(3));
        assert_eq!(dot, 0);
        assert_eq!(translate, 0);
    }

    #[test]
    fn prev_and_next_walk_the_ring() {
        let mut carousel = Carousel::new(CarouselId::Projects, 3, 250);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current(), 2);
        carousel.next();
        assert_eq!(carousel.current(), 0);
        carousel.prev();
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn dot_selection_translates_by_item_width() {
        let mut carousel = Carousel::new(CarouselId::Projects, 4, 320);
        let (translate, dot) = slide(&carousel.select(2));
        assert_eq!(dot, 2);
        assert_eq!(translate, -640);
    }

    #[test]
    fn resize_recomputes_translation_for_current_slide() {
        let mut carousel = Carousel::new(CarouselId::About, 3, 400);
        carousel.show(1);
        let (translate, dot) = slide(&carousel.set_item_width(300));
        assert_eq!(dot, 1);
        assert_eq!(translate, -300);
    }

    #[test]
    fn empty_carousel_is_silent() {
        let mut carousel = Carousel::new(CarouselId::About, 0, 400);
        assert!(carousel.show(0).is_empty());
        assert!(carousel.next().is_empty());
    }

    #[test]
    fn instances_do_not_share_state() {
        let mut about = Carousel::new(CarouselId::About, 3, 400);
        let mut projects = Carousel::new(CarouselId::Projects, 5, 400);
        about.next();
        assert_eq!(about.current(), 1);
        assert_eq!(projects.current(), 0);
        projects.select(4);
        assert_eq!(about.current(), 1);
    }
}
