use crate::clipper::constants::UNASSIGNED;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum {
    pub y: i64,
    pub x: i64,
    pub left_bound: usize,
    pub right_bound: usize,
}

/// Local minima of every added path, consumed in a single pass from the
/// bottom of the plane (largest y) upwards.
pub struct LocalMinima {
    items: Vec<Minimum>,
    cursor: usize,
}

impl LocalMinima {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
        }
    }

    pub fn insert(&mut self, y: i64, x: i64, left_bound: usize, right_bound: usize) {
        self.items.push(Minimum {
            y,
            x,
            left_bound,
            right_bound,
        });
    }

    /// Orders by descending y then ascending x and rewinds the cursor.
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| b.y.cmp(&a.y).then(a.x.cmp(&b.x)));
        self.cursor = 0;
    }

    pub fn pop(&mut self, y: i64) -> Option<Minimum> {
        match self.items.get(self.cursor) {
            Some(minimum) if minimum.y == y => {
                self.cursor += 1;
                Some(*minimum)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.cursor < self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Minimum> {
        self.items.iter()
    }

    pub fn bounds(&self) -> impl Iterator<Item = usize> + '_ {
        self.items
            .iter()
            .flat_map(|minimum| [minimum.left_bound, minimum.right_bound])
            .filter(|&bound| bound != UNASSIGNED)
    }
}

impl Default for LocalMinima {
    fn default() -> Self {
        Self::new()
    }
}
