/// Wrap-around position arithmetic for a project image gallery.
///
/// Indices wrap modulo the image count in both directions: advancing
/// past the last image lands on the first, stepping back from the
/// first lands on the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bring an arbitrary index back into range.
    pub fn clamp(&self, index: usize) -> usize {
        if self.len == 0 {
            return 0;
        }
        index % self.len
    }

    pub fn next(&self, index: usize) -> usize {
        if self.len == 0 {
            return 0;
        }
        (self.clamp(index) + 1) % self.len
    }

    pub fn prev(&self, index: usize) -> usize {
        if self.len == 0 {
            return 0;
        }
        (self.clamp(index) + self.len - 1) % self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_first() {
        let carousel = Carousel::new(4);
        assert_eq!(carousel.next(2), 3);
        assert_eq!(carousel.next(3), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let carousel = Carousel::new(4);
        assert_eq!(carousel.prev(1), 0);
        assert_eq!(carousel.prev(0), 3);
    }

    #[test]
    fn test_single_image_stays_put() {
        let carousel = Carousel::new(1);
        assert_eq!(carousel.next(0), 0);
        assert_eq!(carousel.prev(0), 0);
    }

    #[test]
    fn test_clamp_out_of_range() {
        let carousel = Carousel::new(3);
        assert_eq!(carousel.clamp(7), 1);
        assert_eq!(carousel.next(7), 2);
    }

    #[test]
    fn test_empty_gallery() {
        let carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.next(0), 0);
        assert_eq!(carousel.prev(5), 0);
    }
}
