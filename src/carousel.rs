//! Image carousel index for the listing preview.

/// Zero-based position in a listing's image list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
}

impl Carousel {
    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Controls are only shown for two or more images
    pub fn has_controls(len: usize) -> bool {
        len > 1
    }

    pub fn next(&mut self, len: usize) {
        if Self::has_controls(len) {
            self.index = (self.index + 1) % len;
        }
    }

    pub fn previous(&mut self, len: usize) {
        if Self::has_controls(len) {
            self.index = (self.index + len - 1) % len;
        }
    }

    /// Clamp to a possibly shorter image list (e.g. after a new listing)
    pub fn current(&self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.index.min(len - 1))
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}
