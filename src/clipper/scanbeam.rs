use std::collections::BinaryHeap;

/// Pending scanline ordinates, popped from the largest y down. Duplicates
/// collapse on pop.
pub struct Scanbeam {
    values: BinaryHeap<i64>,
}

impl Scanbeam {
    pub fn new() -> Self {
        Self {
            values: BinaryHeap::new(),
        }
    }

    pub fn insert(&mut self, y: i64) {
        self.values.push(y);
    }

    pub fn pop(&mut self) -> Option<i64> {
        let y = self.values.pop()?;

        while self.values.peek() == Some(&y) {
            self.values.pop();
        }

        Some(y)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clean(&mut self) {
        self.values.clear();
    }
}

impl Default for Scanbeam {
    fn default() -> Self {
        Self::new()
    }
}
