use crate::clipper::constants::UNASSIGNED;
use crate::clipper::out_rec::OutRec;
use crate::clipper::utils::{get_overlap, slopes_equal3};
use crate::geometry::point::Point64;

/// Two output vertices whose chains share an edge and should be spliced
/// once the sweep has finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Join {
    pub out_pt1: usize,
    pub out_pt2: usize,
    pub off_pt: Point64,
}

impl Join {
    pub fn new(out_pt1: usize, out_pt2: usize, off_pt: Point64) -> Self {
        Self {
            out_pt1,
            out_pt2,
            off_pt,
        }
    }

    fn horizontal_reverse(&self, out_rec: &OutRec, op: usize) -> bool {
        let mut opb = out_rec.next(op);

        while opb != op && out_rec.pt(opb) == self.off_pt {
            opb = out_rec.next(opb);
        }

        out_rec.pt(opb).y > self.off_pt.y
    }

    fn unique_neighbour(out_rec: &OutRec, op: usize, is_next: bool) -> usize {
        let step = |i: usize| if is_next { out_rec.next(i) } else { out_rec.prev(i) };
        let mut result = step(op);

        while out_rec.pt(result) == out_rec.pt(op) && result != op {
            result = step(result);
        }

        result
    }

    fn leaves_join_line(&self, out_rec: &OutRec, op: usize, opb: usize) -> bool {
        let (pt, ptb) = (out_rec.pt(op), out_rec.pt(opb));

        ptb.y > pt.y || !slopes_equal3(&pt, &ptb, &self.off_pt)
    }

    /// Picks the neighbour of `op` that runs along the join line. Returns
    /// it, whether it was found backwards, and whether no such neighbour exists.
    fn join_stats(&self, out_rec: &OutRec, op: usize) -> (usize, bool, bool) {
        let mut opb = Self::unique_neighbour(out_rec, op, true);
        let reverse = self.leaves_join_line(out_rec, op, opb);

        if reverse {
            opb = Self::unique_neighbour(out_rec, op, false);

            if self.leaves_join_line(out_rec, op, opb) {
                return (opb, reverse, true);
            }
        }

        (opb, reverse, false)
    }

    /// Extends `op` backwards and forwards along its horizontal run without
    /// stepping onto `stop_back` or `stop_forward`.
    fn horizontal_run(
        out_rec: &OutRec,
        op: usize,
        stop_back: usize,
        stop_forward: usize,
    ) -> (usize, usize) {
        let mut start = op;
        let mut end = op;

        while out_rec.pt(out_rec.prev(start)).y == out_rec.pt(start).y
            && out_rec.prev(start) != end
            && out_rec.prev(start) != stop_back
        {
            start = out_rec.prev(start);
        }

        while out_rec.pt(out_rec.next(end)).y == out_rec.pt(end).y
            && out_rec.next(end) != start
            && out_rec.next(end) != stop_forward
        {
            end = out_rec.next(end);
        }

        (start, end)
    }

    /// Splices the two chains. Returns false when the geometry does not allow
    /// it; `out_pt1`/`out_pt2` then stay untouched.
    pub fn join_points(&mut self, out_rec: &mut OutRec, is_same_rec: bool) -> bool {
        let op1 = self.out_pt1;
        let op2 = self.out_pt2;
        let is_horizontal = out_rec.pt(op1).y == self.off_pt.y;

        if is_horizontal && self.off_pt == out_rec.pt(op1) && self.off_pt == out_rec.pt(op2) {
            // both chains touch at the offset point
            if !is_same_rec {
                return false;
            }

            let reverse1 = self.horizontal_reverse(out_rec, op1);
            let reverse2 = self.horizontal_reverse(out_rec, op2);

            if reverse1 == reverse2 {
                return false;
            }

            self.out_pt2 = out_rec.apply_join(op1, op2, reverse1);

            return true;
        }

        if is_horizontal {
            // the overlap may be anywhere along the two horizontal runs
            let (op1, op1b) = Self::horizontal_run(out_rec, op1, op2, op2);

            if out_rec.next(op1b) == op1 || out_rec.next(op1b) == op2 {
                return false;
            }

            let (op2, op2b) = Self::horizontal_run(out_rec, op2, op1b, op1);

            if out_rec.next(op2b) == op2 || out_rec.next(op2b) == op1 {
                return false;
            }

            let (pt1, pt1b) = (out_rec.pt(op1), out_rec.pt(op1b));
            let (pt2, pt2b) = (out_rec.pt(op2), out_rec.pt(op2b));

            let (left, right) = match get_overlap(pt1.x, pt1b.x, pt2.x, pt2b.x) {
                Some(overlap) => overlap,
                None => return false,
            };

            // keep op1/op2 off the discarded side, later joins may need them
            let (pt, discard_left) = if pt1.x >= left && pt1.x <= right {
                (pt1, pt1.x > pt1b.x)
            } else if pt2.x >= left && pt2.x <= right {
                (pt2, pt2.x > pt2b.x)
            } else if pt1b.x >= left && pt1b.x <= right {
                (pt1b, pt1b.x > pt1.x)
            } else {
                (pt2b, pt2b.x > pt2.x)
            };

            self.out_pt1 = op1;
            self.out_pt2 = op2;

            return out_rec.join_horz(op1, op1b, op2, op2b, &pt, discard_left);
        }

        let (op1b, reverse1, is_blocked1) = self.join_stats(out_rec, op1);

        if is_blocked1 {
            return false;
        }

        let (op2b, reverse2, is_blocked2) = self.join_stats(out_rec, op2);

        if is_blocked2
            || op1b == op1
            || op2b == op2
            || op1b == op2b
            || (is_same_rec && reverse1 == reverse2)
        {
            return false;
        }

        self.out_pt2 = out_rec.apply_join(op1, op2, reverse1);

        true
    }

    /// Applies this join to the output arena, splitting one record in two or
    /// merging two records into one.
    pub fn join_common_edges(&mut self, out_rec: &mut OutRec) {
        let rec1 = out_rec.get_out_rec(out_rec.point(self.out_pt1).idx);
        let rec2 = out_rec.get_out_rec(out_rec.point(self.out_pt2).idx);

        if out_rec.record(rec1).pts == UNASSIGNED || out_rec.record(rec2).pts == UNASSIGNED {
            return;
        }
        if out_rec.record(rec1).is_open || out_rec.record(rec2).is_open {
            return;
        }

        let hole_state_rec = if rec1 == rec2 {
            rec1
        } else {
            out_rec.hole_state_rec(rec1, rec2)
        };

        if !self.join_points(out_rec, rec1 == rec2) {
            log::trace!(
                "join: skipped join of records {} and {} at {}",
                rec1,
                rec2,
                self.off_pt
            );
            return;
        }

        if rec1 == rec2 {
            self.split(out_rec, rec1);
        } else {
            self.merge(out_rec, rec1, rec2, hole_state_rec);
        }
    }

    /// One chain has become two: decide which (if any) now encloses the other.
    fn split(&self, out_rec: &mut OutRec, rec1: usize) {
        let reverse_solution = out_rec.reverse_solution();

        out_rec.record_mut(rec1).pts = self.out_pt1;
        out_rec.record_mut(rec1).bottom_pt = UNASSIGNED;

        let rec2 = out_rec.split_rec(self.out_pt2);
        let pts1 = out_rec.record(rec1).pts;
        let pts2 = out_rec.record(rec2).pts;

        if out_rec.poly2_contains_poly1(pts2, pts1) {
            let is_hole = !out_rec.record(rec1).is_hole;

            out_rec.record_mut(rec2).is_hole = is_hole;
            out_rec.record_mut(rec2).first_left = rec1;
            out_rec.fixup_first_lefts2(rec2, rec1);

            if (is_hole ^ reverse_solution) == (out_rec.area(rec2) > 0.0) {
                out_rec.reverse_links(pts2);
            }
        } else if out_rec.poly2_contains_poly1(pts1, pts2) {
            let is_hole = out_rec.record(rec1).is_hole;
            let first_left = out_rec.record(rec1).first_left;

            out_rec.record_mut(rec2).is_hole = is_hole;
            out_rec.record_mut(rec1).is_hole = !is_hole;
            out_rec.record_mut(rec2).first_left = first_left;
            out_rec.record_mut(rec1).first_left = rec2;
            out_rec.fixup_first_lefts2(rec1, rec2);

            if (!is_hole ^ reverse_solution) == (out_rec.area(rec1) > 0.0) {
                out_rec.reverse_links(pts1);
            }
        } else {
            let is_hole = out_rec.record(rec1).is_hole;
            let first_left = out_rec.record(rec1).first_left;

            out_rec.record_mut(rec2).is_hole = is_hole;
            out_rec.record_mut(rec2).first_left = first_left;
            out_rec.fixup_first_lefts1(rec1, rec2);
        }
    }

    fn merge(&self, out_rec: &mut OutRec, rec1: usize, rec2: usize, hole_state_rec: usize) {
        let survivor = out_rec.record(rec1).idx;
        let is_hole = out_rec.record(hole_state_rec).is_hole;

        {
            let record = out_rec.record_mut(rec2);

            record.pts = UNASSIGNED;
            record.bottom_pt = UNASSIGNED;
            record.idx = survivor;
        }

        out_rec.record_mut(rec1).is_hole = is_hole;

        if hole_state_rec == rec2 {
            let first_left = out_rec.record(rec2).first_left;
            out_rec.record_mut(rec1).first_left = first_left;
        }

        out_rec.record_mut(rec2).first_left = rec1;
        out_rec.fixup_first_lefts3(rec2, rec1);
    }
}

/// Pending joins plus the "ghost" joins of horizontal edges that may still
/// turn into real joins within the current scanbeam.
pub struct JoinList {
    joins: Vec<Join>,
    ghosts: Vec<Join>,
}

impl JoinList {
    pub fn new() -> Self {
        Self {
            joins: Vec::new(),
            ghosts: Vec::new(),
        }
    }

    pub fn add_join(&mut self, out_pt1: usize, out_pt2: usize, off_pt: Point64) {
        self.joins.push(Join::new(out_pt1, out_pt2, off_pt));
    }

    pub fn add_ghost(&mut self, out_pt: usize, off_pt: Point64) {
        self.ghosts.push(Join::new(out_pt, UNASSIGNED, off_pt));
    }

    pub fn ghosts(&self) -> &[Join] {
        &self.ghosts
    }

    pub fn clear_ghosts(&mut self) {
        self.ghosts.clear();
    }

    pub fn len(&self) -> usize {
        self.joins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joins.is_empty()
    }

    pub fn clear(&mut self) {
        self.joins.clear();
        self.ghosts.clear();
    }

    /// Resolves every join in the order it was recorded.
    pub fn join_common_edges(&mut self, out_rec: &mut OutRec) {
        for join in self.joins.iter_mut() {
            join.join_common_edges(out_rec);
        }
    }
}

impl Default for JoinList {
    fn default() -> Self {
        Self::new()
    }
}
