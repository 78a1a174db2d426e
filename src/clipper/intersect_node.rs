use crate::geometry::point::Point64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectNode {
    pub edge1: usize,
    pub edge2: usize,
    pub pt: Point64,
}

/// Crossings found inside one scanbeam.
pub struct IntersectList {
    nodes: Vec<IntersectNode>,
}

impl IntersectList {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn add(&mut self, edge1: usize, edge2: usize, pt: Point64) {
        self.nodes.push(IntersectNode { edge1, edge2, pt });
    }

    /// Bottom-most first. Stable, so equal rows keep discovery order.
    pub fn sort(&mut self) {
        self.nodes.sort_by(|a, b| b.pt.y.cmp(&a.pt.y));
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> IntersectNode {
        self.nodes[index]
    }

    pub fn swap(&mut self, index1: usize, index2: usize) {
        self.nodes.swap(index1, index2);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, IntersectNode> {
        self.nodes.drain(..)
    }
}

impl Default for IntersectList {
    fn default() -> Self {
        Self::new()
    }
}
