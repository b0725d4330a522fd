/// Position within a product's image list. Indices wrap in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCarousel {
    len: usize,
    index: usize,
}

impl ImageCarousel {
    pub fn new(len: usize, requested: usize) -> Self {
        let index = if len == 0 { 0 } else { requested % len };
        Self { len, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn next(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.index + 1) % self.len
        }
    }

    pub fn prev(&self) -> usize {
        if self.len == 0 {
            0
        } else if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        }
    }
}
