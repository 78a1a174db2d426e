use crate::clipper::constants::{HORIZONTAL, SKIP, UNASSIGNED};
use crate::clipper::enums::{ClipType, Direction, FillRule, PolyType};
use crate::clipper::local_minima::LocalMinima;
use crate::clipper::utils::{pt2_is_between_pt1_and_pt3, slopes_equal3, slopes_equal4};
use crate::geometry::point::Point64;
use crate::utils::round::round_to_i64;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone)]
pub struct Edge {
    pub bot: Point64,
    pub curr: Point64,
    pub top: Point64,
    pub dx: f64,
    pub poly_type: PolyType,
    pub side: Direction,
    pub wind_delta: i32,
    pub wind_cnt: i32,
    pub wind_cnt2: i32,
    pub out_idx: usize,
    pub next: usize,
    pub prev: usize,
    pub next_in_lml: usize,
    pub next_in_ael: usize,
    pub prev_in_ael: usize,
    pub next_in_sel: usize,
    pub prev_in_sel: usize,
}

impl Edge {
    fn new(curr: Point64, next: usize, prev: usize) -> Self {
        Self {
            bot: Point64::default(),
            curr,
            top: Point64::default(),
            dx: 0.0,
            poly_type: PolyType::Subject,
            side: Direction::Left,
            wind_delta: 0,
            wind_cnt: 0,
            wind_cnt2: 0,
            out_idx: UNASSIGNED,
            next,
            prev,
            next_in_lml: UNASSIGNED,
            next_in_ael: UNASSIGNED,
            prev_in_ael: UNASSIGNED,
            next_in_sel: UNASSIGNED,
            prev_in_sel: UNASSIGNED,
        }
    }
}

/// Arena of every input edge plus the heads of the active edge list (AEL)
/// and the sorted edge list (SEL). Edges of one path form a ring through
/// `next`/`prev`; the two sweep lists are threaded through the remaining links.
pub struct TEdge {
    edges: Vec<Edge>,
    pub active: usize,
    pub sorted: usize,
    clip_type: ClipType,
    fill_rule: FillRule,
}

impl Index<usize> for TEdge {
    type Output = Edge;

    #[inline(always)]
    fn index(&self, index: usize) -> &Edge {
        &self.edges[index]
    }
}

impl IndexMut<usize> for TEdge {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Edge {
        &mut self.edges[index]
    }
}

impl TEdge {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            active: UNASSIGNED,
            sorted: UNASSIGNED,
            clip_type: ClipType::Intersection,
            fill_rule: FillRule::EvenOdd,
        }
    }

    pub fn init(&mut self, clip_type: ClipType, fill_rule: FillRule) {
        self.clip_type = clip_type;
        self.fill_rule = fill_rule;
        self.active = UNASSIGNED;
        self.sorted = UNASSIGNED;
    }

    pub fn clip_type(&self) -> ClipType {
        self.clip_type
    }

    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Builds the edge ring of one path, dropping duplicate vertices and, for
    /// closed paths, collinear ones. Returns the first surviving edge and
    /// whether the whole path lies on a single row, or `None` when nothing
    /// usable remains.
    pub fn create_path(
        &mut self,
        path: &[Point64],
        poly_type: PolyType,
        is_closed: bool,
        preserve_collinear: bool,
    ) -> Option<(usize, bool)> {
        let mut high = path.len() as isize - 1;

        if is_closed {
            while high > 0 && path[high as usize] == path[0] {
                high -= 1;
            }
        }
        while high > 0 && path[high as usize] == path[high as usize - 1] {
            high -= 1;
        }
        if (is_closed && high < 2) || (!is_closed && high < 1) {
            return None;
        }

        let offset = self.edges.len();
        let count = high as usize + 1;

        for (i, point) in path.iter().take(count).enumerate() {
            let next = offset + (i + 1) % count;
            let prev = offset + (i + count - 1) % count;
            self.edges.push(Edge::new(*point, next, prev));
        }

        let mut e_start = offset;
        let mut e = e_start;
        let mut e_loop_stop = e_start;

        loop {
            let next = self[e].next;
            let prev = self[e].prev;

            // open paths may start and end on the same point
            if self[e].curr == self[next].curr && (is_closed || next != e_start) {
                if e == next {
                    break;
                }
                if e == e_start {
                    e_start = next;
                }
                e = self.remove_edge(e);
                e_loop_stop = e;
                continue;
            }

            if prev == next {
                break;
            }

            if is_closed
                && slopes_equal3(&self[prev].curr, &self[e].curr, &self[next].curr)
                && (!preserve_collinear
                    || !pt2_is_between_pt1_and_pt3(
                        &self[prev].curr,
                        &self[e].curr,
                        &self[next].curr,
                    ))
            {
                if e == e_start {
                    e_start = next;
                }
                e = self.remove_edge(e);
                e = self[e].prev;
                e_loop_stop = e;
                continue;
            }

            e = self[e].next;
            if e == e_loop_stop || (!is_closed && self[e].next == e_start) {
                break;
            }
        }

        if (!is_closed && e == self[e].next) || (is_closed && self[e].prev == self[e].next) {
            self.edges.truncate(offset);
            return None;
        }

        if !is_closed {
            let last = self[e_start].prev;
            self[last].out_idx = SKIP;
        }

        let mut is_flat = true;
        e = e_start;
        loop {
            self.init_edge(e, poly_type);
            e = self[e].next;
            if is_flat && self[e].curr.y != self[e_start].curr.y {
                is_flat = false;
            }
            if e == e_start {
                break;
            }
        }

        if is_flat && is_closed {
            self.edges.truncate(offset);
            return None;
        }

        Some((e_start, is_flat))
    }

    fn remove_edge(&mut self, edge: usize) -> usize {
        let prev = self[edge].prev;
        let next = self[edge].next;

        self[prev].next = next;
        self[next].prev = prev;
        self[edge].prev = UNASSIGNED;

        next
    }

    fn init_edge(&mut self, edge: usize, poly_type: PolyType) {
        let curr = self[edge].curr;
        let next_curr = self[self[edge].next].curr;

        if curr.y >= next_curr.y {
            self[edge].bot = curr;
            self[edge].top = next_curr;
        } else {
            self[edge].top = curr;
            self[edge].bot = next_curr;
        }

        self.set_dx(edge);
        self[edge].poly_type = poly_type;
    }

    fn set_dx(&mut self, edge: usize) {
        let e = &self[edge];
        let dy = e.top.y - e.bot.y;
        let dx = if dy == 0 {
            HORIZONTAL
        } else {
            (e.top.x - e.bot.x) as f64 / dy as f64
        };

        self[edge].dx = dx;
    }

    #[inline(always)]
    pub fn is_horizontal(&self, edge: usize) -> bool {
        self[edge].dx == HORIZONTAL
    }

    pub fn reverse_horizontal(&mut self, edge: usize) {
        let e = &mut self[edge];
        std::mem::swap(&mut e.top.x, &mut e.bot.x);
    }

    /// Walks forward to the next vertex where the ring turns upwards on
    /// both sides. Horizontal runs are resolved to their left end.
    pub fn find_next_loc_min(&self, edge: usize) -> usize {
        let mut e = edge;

        loop {
            while self[e].bot != self[self[e].prev].bot || self[e].curr == self[e].top {
                e = self[e].next;
            }

            if !self.is_horizontal(e) && !self.is_horizontal(self[e].prev) {
                break;
            }

            while self.is_horizontal(self[e].prev) {
                e = self[e].prev;
            }

            let e2 = e;

            while self.is_horizontal(e) {
                e = self[e].next;
            }

            // an intermediate horizontal
            if self[e].top.y == self[self[e].prev].bot.y {
                continue;
            }

            if self[self[e2].prev].bot.x < self[e].bot.x {
                e = e2;
            }

            break;
        }

        e
    }

    /// Links one ascending bound through `next_in_lml` and returns the first
    /// edge beyond it. A bound interrupted by an open path's closing edge is
    /// split into an extra local minimum.
    pub fn process_bound(
        &mut self,
        edge: usize,
        next_is_forward: bool,
        minima: &mut LocalMinima,
    ) -> usize {
        let mut e = edge;
        let mut result = edge;

        if self[e].out_idx == SKIP {
            if next_is_forward {
                while self[e].top.y == self[self[e].next].bot.y {
                    e = self[e].next;
                }
                while e != result && self.is_horizontal(e) {
                    e = self[e].prev;
                }
            } else {
                while self[e].top.y == self[self[e].prev].bot.y {
                    e = self[e].prev;
                }
                while e != result && self.is_horizontal(e) {
                    e = self[e].next;
                }
            }

            if e == result {
                result = if next_is_forward {
                    self[e].next
                } else {
                    self[e].prev
                };
            } else {
                e = if next_is_forward {
                    self[result].next
                } else {
                    self[result].prev
                };

                let bot = self[e].bot;
                self[e].wind_delta = 0;
                result = self.process_bound(e, next_is_forward, minima);
                minima.insert(bot.y, bot.x, UNASSIGNED, e);
            }

            return result;
        }

        if self.is_horizontal(e) {
            let start = if next_is_forward {
                self[e].prev
            } else {
                self[e].next
            };

            if self.is_horizontal(start) {
                if self[start].bot.x != self[e].bot.x && self[start].top.x != self[e].bot.x {
                    self.reverse_horizontal(e);
                }
            } else if self[start].bot.x != self[e].bot.x {
                self.reverse_horizontal(e);
            }
        }

        let start = e;

        if next_is_forward {
            while self[result].top.y == self[self[result].next].bot.y
                && self[self[result].next].out_idx != SKIP
            {
                result = self[result].next;
            }

            if self.is_horizontal(result) && self[self[result].next].out_idx != SKIP {
                let mut horz = result;

                while self.is_horizontal(self[horz].prev) {
                    horz = self[horz].prev;
                }
                if self[self[horz].prev].top.x > self[self[result].next].top.x {
                    result = self[horz].prev;
                }
            }

            while e != result {
                self[e].next_in_lml = self[e].next;
                self.align_horizontal(e, start, true);
                e = self[e].next;
            }

            self.align_horizontal(e, start, true);
            result = self[result].next;
        } else {
            while self[result].top.y == self[self[result].prev].bot.y
                && self[self[result].prev].out_idx != SKIP
            {
                result = self[result].prev;
            }

            if self.is_horizontal(result) && self[self[result].prev].out_idx != SKIP {
                let mut horz = result;

                while self.is_horizontal(self[horz].next) {
                    horz = self[horz].next;
                }
                if self[self[horz].next].top.x >= self[self[result].prev].top.x {
                    result = self[horz].next;
                }
            }

            while e != result {
                self[e].next_in_lml = self[e].prev;
                self.align_horizontal(e, start, false);
                e = self[e].prev;
            }

            self.align_horizontal(e, start, false);
            result = self[result].prev;
        }

        result
    }

    /// Makes a horizontal inside a bound start where the previous bound edge ends.
    fn align_horizontal(&mut self, edge: usize, start: usize, is_forward: bool) {
        if edge == start || !self.is_horizontal(edge) {
            return;
        }

        let before = if is_forward {
            self[edge].prev
        } else {
            self[edge].next
        };

        if self[edge].bot.x != self[before].top.x {
            self.reverse_horizontal(edge);
        }
    }

    pub fn reset_bound(&mut self, edge: usize, side: Direction) {
        let e = &mut self[edge];

        e.curr = e.bot;
        e.side = side;
        e.out_idx = UNASSIGNED;
    }

    #[inline(always)]
    pub fn is_assigned(&self, edge: usize) -> bool {
        self[edge].out_idx < SKIP
    }

    pub fn top_x(&self, edge: usize, y: i64) -> i64 {
        let e = &self[edge];

        if y == e.top.y {
            e.top.x
        } else {
            e.bot.x + round_to_i64(e.dx * (y - e.bot.y) as f64)
        }
    }

    pub fn slopes_equal(&self, edge1: usize, edge2: usize) -> bool {
        let (e1, e2) = (&self[edge1], &self[edge2]);

        slopes_equal4(&e1.top, &e1.bot, &e2.top, &e2.bot)
    }

    /// Crossing point of two active edges, clamped into the current scanbeam.
    pub fn intersect_point(&self, edge1: usize, edge2: usize) -> Point64 {
        let (e1, e2) = (&self[edge1], &self[edge2]);
        let mut ip = Point64::default();

        if e1.dx == e2.dx {
            ip.y = e1.curr.y;
            ip.x = self.top_x(edge1, ip.y);
            return ip;
        }

        if e1.dx == 0.0 {
            ip.x = e1.bot.x;
            ip.y = if self.is_horizontal(edge2) {
                e2.bot.y
            } else {
                let b2 = e2.bot.y as f64 - e2.bot.x as f64 / e2.dx;
                round_to_i64(ip.x as f64 / e2.dx + b2)
            };
        } else if e2.dx == 0.0 {
            ip.x = e2.bot.x;
            ip.y = if self.is_horizontal(edge1) {
                e1.bot.y
            } else {
                let b1 = e1.bot.y as f64 - e1.bot.x as f64 / e1.dx;
                round_to_i64(ip.x as f64 / e1.dx + b1)
            };
        } else {
            let b1 = e1.bot.x as f64 - e1.bot.y as f64 * e1.dx;
            let b2 = e2.bot.x as f64 - e2.bot.y as f64 * e2.dx;
            let q = (b2 - b1) / (e1.dx - e2.dx);

            ip.y = round_to_i64(q);
            ip.x = if e1.dx.abs() < e2.dx.abs() {
                round_to_i64(e1.dx * q + b1)
            } else {
                round_to_i64(e2.dx * q + b2)
            };
        }

        if ip.y < e1.top.y || ip.y < e2.top.y {
            ip.y = e1.top.y.max(e2.top.y);
            ip.x = if e1.dx.abs() < e2.dx.abs() {
                self.top_x(edge1, ip.y)
            } else {
                self.top_x(edge2, ip.y)
            };
        }

        // never below the bottom of the scanbeam
        if ip.y > e1.curr.y {
            ip.y = e1.curr.y;
            ip.x = if e1.dx.abs() > e2.dx.abs() {
                self.top_x(edge2, ip.y)
            } else {
                self.top_x(edge1, ip.y)
            };
        }

        ip
    }

    fn e2_inserts_before_e1(&self, edge1: usize, edge2: usize) -> bool {
        let (e1, e2) = (&self[edge1], &self[edge2]);

        if e2.curr.x == e1.curr.x {
            if e2.top.y > e1.top.y {
                e2.top.x < self.top_x(edge1, e2.top.y)
            } else {
                e1.top.x > self.top_x(edge2, e1.top.y)
            }
        } else {
            e2.curr.x < e1.curr.x
        }
    }

    pub fn insert_edge_into_ael(&mut self, edge: usize, start_edge: usize) {
        if self.active == UNASSIGNED {
            self[edge].prev_in_ael = UNASSIGNED;
            self[edge].next_in_ael = UNASSIGNED;
            self.active = edge;
            return;
        }

        if start_edge == UNASSIGNED && self.e2_inserts_before_e1(self.active, edge) {
            self[edge].prev_in_ael = UNASSIGNED;
            self[edge].next_in_ael = self.active;
            let active = self.active;
            self[active].prev_in_ael = edge;
            self.active = edge;
            return;
        }

        let mut start = if start_edge == UNASSIGNED {
            self.active
        } else {
            start_edge
        };

        while self[start].next_in_ael != UNASSIGNED
            && !self.e2_inserts_before_e1(self[start].next_in_ael, edge)
        {
            start = self[start].next_in_ael;
        }

        let next = self[start].next_in_ael;
        self[edge].next_in_ael = next;
        if next != UNASSIGNED {
            self[next].prev_in_ael = edge;
        }
        self[edge].prev_in_ael = start;
        self[start].next_in_ael = edge;
    }

    #[inline(always)]
    pub fn neighbour(&self, edge: usize, is_ael: bool, is_next: bool) -> usize {
        let e = &self[edge];

        match (is_ael, is_next) {
            (true, true) => e.next_in_ael,
            (true, false) => e.prev_in_ael,
            (false, true) => e.next_in_sel,
            (false, false) => e.prev_in_sel,
        }
    }

    #[inline(always)]
    pub fn set_neighbour(&mut self, edge: usize, is_ael: bool, is_next: bool, value: usize) {
        let e = &mut self[edge];

        match (is_ael, is_next) {
            (true, true) => e.next_in_ael = value,
            (true, false) => e.prev_in_ael = value,
            (false, true) => e.next_in_sel = value,
            (false, false) => e.prev_in_sel = value,
        }
    }

    fn set_head(&mut self, is_ael: bool, edge: usize) {
        if is_ael {
            self.active = edge;
        } else {
            self.sorted = edge;
        }
    }

    fn head(&self, is_ael: bool) -> usize {
        if is_ael {
            self.active
        } else {
            self.sorted
        }
    }

    pub fn delete_from_list(&mut self, edge: usize, is_ael: bool) {
        let prev = self.neighbour(edge, is_ael, false);
        let next = self.neighbour(edge, is_ael, true);

        // already removed
        if prev == UNASSIGNED && next == UNASSIGNED && edge != self.head(is_ael) {
            return;
        }

        if prev != UNASSIGNED {
            self.set_neighbour(prev, is_ael, true, next);
        } else {
            self.set_head(is_ael, next);
        }
        if next != UNASSIGNED {
            self.set_neighbour(next, is_ael, false, prev);
        }

        self.set_neighbour(edge, is_ael, true, UNASSIGNED);
        self.set_neighbour(edge, is_ael, false, UNASSIGNED);
    }

    pub fn swap_positions_in_list(&mut self, edge1: usize, edge2: usize, is_ael: bool) {
        let next1 = self.neighbour(edge1, is_ael, true);
        let prev1 = self.neighbour(edge1, is_ael, false);
        let next2 = self.neighbour(edge2, is_ael, true);
        let prev2 = self.neighbour(edge2, is_ael, false);

        // one of them has already left the list
        if next1 == prev1 || next2 == prev2 {
            return;
        }

        if next1 == edge2 {
            if next2 != UNASSIGNED {
                self.set_neighbour(next2, is_ael, false, edge1);
            }
            if prev1 != UNASSIGNED {
                self.set_neighbour(prev1, is_ael, true, edge2);
            }
            self.set_neighbour(edge2, is_ael, false, prev1);
            self.set_neighbour(edge2, is_ael, true, edge1);
            self.set_neighbour(edge1, is_ael, false, edge2);
            self.set_neighbour(edge1, is_ael, true, next2);
        } else if next2 == edge1 {
            if next1 != UNASSIGNED {
                self.set_neighbour(next1, is_ael, false, edge2);
            }
            if prev2 != UNASSIGNED {
                self.set_neighbour(prev2, is_ael, true, edge1);
            }
            self.set_neighbour(edge1, is_ael, false, prev2);
            self.set_neighbour(edge1, is_ael, true, edge2);
            self.set_neighbour(edge2, is_ael, false, edge1);
            self.set_neighbour(edge2, is_ael, true, next1);
        } else {
            self.set_neighbour(edge1, is_ael, true, next2);
            if next2 != UNASSIGNED {
                self.set_neighbour(next2, is_ael, false, edge1);
            }
            self.set_neighbour(edge1, is_ael, false, prev2);
            if prev2 != UNASSIGNED {
                self.set_neighbour(prev2, is_ael, true, edge1);
            }
            self.set_neighbour(edge2, is_ael, true, next1);
            if next1 != UNASSIGNED {
                self.set_neighbour(next1, is_ael, false, edge2);
            }
            self.set_neighbour(edge2, is_ael, false, prev1);
            if prev1 != UNASSIGNED {
                self.set_neighbour(prev1, is_ael, true, edge2);
            }
        }

        if self.neighbour(edge1, is_ael, false) == UNASSIGNED {
            self.set_head(is_ael, edge1);
        } else if self.neighbour(edge2, is_ael, false) == UNASSIGNED {
            self.set_head(is_ael, edge2);
        }
    }

    /// SEL order is irrelevant for horizontals, so they are pushed at the head.
    pub fn add_edge_to_sel(&mut self, edge: usize) {
        self[edge].prev_in_sel = UNASSIGNED;
        self[edge].next_in_sel = self.sorted;
        if self.sorted != UNASSIGNED {
            let sorted = self.sorted;
            self[sorted].prev_in_sel = edge;
        }
        self.sorted = edge;
    }

    pub fn pop_edge_from_sel(&mut self) -> Option<usize> {
        if self.sorted == UNASSIGNED {
            return None;
        }

        let edge = self.sorted;
        self.delete_from_list(edge, false);

        Some(edge)
    }

    pub fn copy_ael_to_sel(&mut self) {
        let mut e = self.active;

        self.sorted = e;
        while e != UNASSIGNED {
            self[e].prev_in_sel = self[e].prev_in_ael;
            self[e].next_in_sel = self[e].next_in_ael;
            e = self[e].next_in_ael;
        }
    }

    /// Copies the AEL into the SEL and moves every edge's current x to `top_y`.
    pub fn prepare_for_intersections(&mut self, top_y: i64) -> bool {
        if self.active == UNASSIGNED {
            return false;
        }

        self.copy_ael_to_sel();

        let mut e = self.active;
        while e != UNASSIGNED {
            self[e].curr.x = self.top_x(e, top_y);
            e = self[e].next_in_ael;
        }

        true
    }

    /// Replaces `edge` in the AEL by the next edge of its bound. The caller
    /// schedules the new edge's top.
    pub fn update_edge_into_ael(&mut self, edge: usize) -> usize {
        let next = self[edge].next_in_lml;

        debug_assert!(next != UNASSIGNED, "update_edge_into_ael: no next bound edge");

        let prev_ael = self[edge].prev_in_ael;
        let next_ael = self[edge].next_in_ael;

        self[next].out_idx = self[edge].out_idx;
        if prev_ael != UNASSIGNED {
            self[prev_ael].next_in_ael = next;
        } else {
            self.active = next;
        }
        if next_ael != UNASSIGNED {
            self[next_ael].prev_in_ael = next;
        }

        self[next].side = self[edge].side;
        self[next].wind_delta = self[edge].wind_delta;
        self[next].wind_cnt = self[edge].wind_cnt;
        self[next].wind_cnt2 = self[edge].wind_cnt2;
        self[next].curr = self[next].bot;
        self[next].prev_in_ael = prev_ael;
        self[next].next_in_ael = next_ael;

        next
    }

    pub fn set_winding_count(&mut self, edge: usize) {
        let poly_type = self[edge].poly_type;
        let wind_delta = self[edge].wind_delta;
        let mut e = self[edge].prev_in_ael;

        // nearest preceding closed edge of the same polytype
        while e != UNASSIGNED && (self[e].poly_type != poly_type || self[e].wind_delta == 0) {
            e = self[e].prev_in_ael;
        }

        if e == UNASSIGNED {
            self[edge].wind_cnt = if wind_delta != 0 {
                wind_delta
            } else if self.fill_rule == FillRule::Negative {
                -1
            } else {
                1
            };
            self[edge].wind_cnt2 = 0;
            e = self.active;
        } else if wind_delta == 0 && self.clip_type != ClipType::Union {
            self[edge].wind_cnt = 1;
            self[edge].wind_cnt2 = self[e].wind_cnt2;
            e = self[e].next_in_ael;
        } else if self.fill_rule == FillRule::EvenOdd {
            self[edge].wind_cnt = if wind_delta == 0 {
                // open path: is it inside a closed path of its own type?
                let mut is_inside = true;
                let mut e2 = self[e].prev_in_ael;

                while e2 != UNASSIGNED {
                    if self[e2].poly_type == self[e].poly_type && self[e2].wind_delta != 0 {
                        is_inside = !is_inside;
                    }
                    e2 = self[e2].prev_in_ael;
                }

                if is_inside {
                    0
                } else {
                    1
                }
            } else {
                wind_delta
            };
            self[edge].wind_cnt2 = self[e].wind_cnt2;
            e = self[e].next_in_ael;
        } else {
            let prev_cnt = self[e].wind_cnt;
            let prev_delta = self[e].wind_delta;

            self[edge].wind_cnt = if prev_cnt * prev_delta < 0 {
                // the previous edge moves the count towards zero
                if prev_cnt.abs() > 1 {
                    if prev_delta * wind_delta < 0 {
                        prev_cnt
                    } else {
                        prev_cnt + wind_delta
                    }
                } else if wind_delta == 0 {
                    1
                } else {
                    wind_delta
                }
            } else if wind_delta == 0 {
                if prev_cnt < 0 {
                    prev_cnt - 1
                } else {
                    prev_cnt + 1
                }
            } else if prev_delta * wind_delta < 0 {
                prev_cnt
            } else {
                prev_cnt + wind_delta
            };
            self[edge].wind_cnt2 = self[e].wind_cnt2;
            e = self[e].next_in_ael;
        }

        if self.fill_rule == FillRule::EvenOdd {
            while e != edge {
                if self[e].wind_delta != 0 {
                    self[edge].wind_cnt2 = if self[edge].wind_cnt2 == 0 { 1 } else { 0 };
                }
                e = self[e].next_in_ael;
            }
        } else {
            while e != edge {
                self[edge].wind_cnt2 += self[e].wind_delta;
                e = self[e].next_in_ael;
            }
        }
    }

    /// True when the opposite polytype's winding count marks the region as filled.
    fn is_inside_other(&self, wind_cnt2: i32) -> bool {
        match self.fill_rule {
            FillRule::EvenOdd | FillRule::NonZero => wind_cnt2 != 0,
            FillRule::Positive => wind_cnt2 > 0,
            FillRule::Negative => wind_cnt2 < 0,
        }
    }

    pub fn is_contributing(&self, edge: usize) -> bool {
        let e = &self[edge];

        let is_own_edge = match self.fill_rule {
            FillRule::EvenOdd => e.wind_delta != 0 || e.wind_cnt == 1,
            FillRule::NonZero => e.wind_cnt.abs() == 1,
            FillRule::Positive => e.wind_cnt == 1,
            FillRule::Negative => e.wind_cnt == -1,
        };

        if !is_own_edge {
            return false;
        }

        let is_inside_other = self.is_inside_other(e.wind_cnt2);

        match self.clip_type {
            ClipType::Intersection => is_inside_other,
            ClipType::Union => !is_inside_other,
            ClipType::Difference => {
                if e.poly_type == PolyType::Subject {
                    !is_inside_other
                } else {
                    is_inside_other
                }
            }
            ClipType::Xor => e.wind_delta != 0 || !is_inside_other,
        }
    }

    pub fn get_maxima_pair(&self, edge: usize) -> usize {
        let e = &self[edge];

        if self[e.next].top == e.top && self[e.next].next_in_lml == UNASSIGNED {
            e.next
        } else if self[e.prev].top == e.top && self[e.prev].next_in_lml == UNASSIGNED {
            e.prev
        } else {
            UNASSIGNED
        }
    }

    /// As `get_maxima_pair`, but only a pair that is still active (or horizontal).
    pub fn get_maxima_pair_ex(&self, edge: usize) -> usize {
        let result = self.get_maxima_pair(edge);

        if result != UNASSIGNED
            && (self[result].out_idx == SKIP
                || (self[result].next_in_ael == self[result].prev_in_ael
                    && !self.is_horizontal(result)))
        {
            UNASSIGNED
        } else {
            result
        }
    }

    #[inline(always)]
    pub fn is_maxima(&self, edge: usize, y: i64) -> bool {
        edge != UNASSIGNED && self[edge].top.y == y && self[edge].next_in_lml == UNASSIGNED
    }

    #[inline(always)]
    pub fn is_intermediate(&self, edge: usize, y: i64) -> bool {
        self[edge].top.y == y && self[edge].next_in_lml != UNASSIGNED
    }

    pub fn swap_sides(&mut self, edge1: usize, edge2: usize) {
        let side = self[edge1].side;
        self[edge1].side = self[edge2].side;
        self[edge2].side = side;
    }

    pub fn swap_poly_indexes(&mut self, edge1: usize, edge2: usize) {
        let out_idx = self[edge1].out_idx;
        self[edge1].out_idx = self[edge2].out_idx;
        self[edge2].out_idx = out_idx;
    }

    pub fn horz_direction(&self, edge: usize) -> (Direction, i64, i64) {
        let e = &self[edge];

        if e.bot.x < e.top.x {
            (Direction::Right, e.bot.x, e.top.x)
        } else {
            (Direction::Left, e.top.x, e.bot.x)
        }
    }

    #[inline(always)]
    pub fn next_in_ael_dir(&self, edge: usize, direction: Direction) -> usize {
        if direction == Direction::Right {
            self[edge].next_in_ael
        } else {
            self[edge].prev_in_ael
        }
    }
}

impl Default for TEdge {
    fn default() -> Self {
        Self::new()
    }
}
