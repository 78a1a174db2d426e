use crate::geometry::point::Point64;

/// One vertex of an output contour. `idx` is the owning record; `next`/`prev`
/// close the chain into a ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutPt {
    pub idx: usize,
    pub pt: Point64,
    pub next: usize,
    pub prev: usize,
}

impl OutPt {
    /// A single-vertex ring at arena slot `index`.
    pub fn new(index: usize, idx: usize, pt: Point64) -> Self {
        Self {
            idx,
            pt,
            next: index,
            prev: index,
        }
    }
}
