use crate::clipper::constants::UNASSIGNED;
use crate::clipper::enums::Direction;
use crate::clipper::out_pt::OutPt;
use crate::clipper::poly_tree::PolyTree;
use crate::clipper::utils::{get_dx, pt2_is_between_pt1_and_pt3, slopes_equal3};
use crate::constants::TOL_F64;
use crate::geometry::point::{Path64, Paths64, Point64};
use crate::geometry::polygon::{classify_point, PointInPolygonResult};

/// An output contour. `idx` points at itself until the record is merged
/// into another one, after which it forwards to the survivor.
#[derive(Debug, Clone, PartialEq)]
pub struct OutRecord {
    pub idx: usize,
    pub is_hole: bool,
    pub is_open: bool,
    pub first_left: usize,
    pub pts: usize,
    pub bottom_pt: usize,
}

impl OutRecord {
    fn new(idx: usize, is_open: bool) -> Self {
        Self {
            idx,
            is_hole: false,
            is_open,
            first_left: UNASSIGNED,
            pts: UNASSIGNED,
            bottom_pt: UNASSIGNED,
        }
    }
}

/// Arena of output records and their vertex rings.
pub struct OutRec {
    records: Vec<OutRecord>,
    points: Vec<OutPt>,
    reverse_solution: bool,
    preserve_collinear: bool,
}

impl OutRec {
    pub fn new(reverse_solution: bool, preserve_collinear: bool) -> Self {
        Self {
            records: Vec::new(),
            points: Vec::new(),
            reverse_solution,
            preserve_collinear,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn reverse_solution(&self) -> bool {
        self.reverse_solution
    }

    pub fn record(&self, index: usize) -> &OutRecord {
        &self.records[index]
    }

    pub fn record_mut(&mut self, index: usize) -> &mut OutRecord {
        &mut self.records[index]
    }

    pub fn point(&self, index: usize) -> &OutPt {
        &self.points[index]
    }

    #[inline(always)]
    pub fn pt(&self, index: usize) -> Point64 {
        self.points[index].pt
    }

    #[inline(always)]
    pub fn next(&self, index: usize) -> usize {
        self.points[index].next
    }

    #[inline(always)]
    pub fn prev(&self, index: usize) -> usize {
        self.points[index].prev
    }

    #[inline(always)]
    fn set_next(&mut self, index: usize, value: usize) {
        self.points[index].next = value;
    }

    #[inline(always)]
    fn set_prev(&mut self, index: usize, value: usize) {
        self.points[index].prev = value;
    }

    /// Starts a new record whose chain holds only `pt`. Returns the record
    /// and its first vertex.
    pub fn create(&mut self, pt: Point64, is_open: bool) -> (usize, usize) {
        let rec_index = self.create_rec(is_open);
        let point_index = self.create_out_pt(rec_index, pt);

        self.records[rec_index].pts = point_index;

        (rec_index, point_index)
    }

    fn create_rec(&mut self, is_open: bool) -> usize {
        let index = self.records.len();

        self.records.push(OutRecord::new(index, is_open));

        index
    }

    fn create_out_pt(&mut self, rec_index: usize, pt: Point64) -> usize {
        let index = self.points.len();

        self.points.push(OutPt::new(index, rec_index, pt));

        index
    }

    /// Adds `pt` at the front (left bound) or back (right bound) of the chain.
    /// A point equal to the current end is not duplicated.
    pub fn add_out_pt(&mut self, rec_index: usize, pt: Point64, to_front: bool) -> usize {
        let first = self.records[rec_index].pts;
        let last = self.prev(first);

        if to_front && pt == self.pt(first) {
            return first;
        }
        if !to_front && pt == self.pt(last) {
            return last;
        }

        let index = self.create_out_pt(rec_index, pt);

        self.set_next(index, first);
        self.set_prev(index, last);
        self.set_next(last, index);
        self.set_prev(first, index);

        if to_front {
            self.records[rec_index].pts = index;
        }

        index
    }

    pub fn last_out_pt(&self, rec_index: usize, side: Direction) -> usize {
        let first = self.records[rec_index].pts;

        if side == Direction::Left {
            first
        } else {
            self.prev(first)
        }
    }

    /// Follows merge forwarding to the live record.
    pub fn get_out_rec(&self, index: usize) -> usize {
        let mut result = index;

        while result != self.records[result].idx {
            result = self.records[result].idx;
        }

        result
    }

    pub fn param1_right_of_param2(&self, rec1: usize, rec2: usize) -> bool {
        let mut rec = rec1;

        loop {
            rec = self.records[rec].first_left;

            if rec == rec2 {
                return true;
            }
            if rec == UNASSIGNED {
                return false;
            }
        }
    }

    /// The record whose FirstLeft/hole state survives when `rec1` and `rec2` merge.
    pub fn hole_state_rec(&mut self, rec1: usize, rec2: usize) -> usize {
        if self.param1_right_of_param2(rec1, rec2) {
            rec2
        } else if self.param1_right_of_param2(rec2, rec1) {
            rec1
        } else {
            self.get_lowermost_rec(rec1, rec2)
        }
    }

    fn get_lowermost_rec(&mut self, rec1: usize, rec2: usize) -> usize {
        if self.records[rec1].bottom_pt == UNASSIGNED {
            self.records[rec1].bottom_pt = self.get_bottom_pt(self.records[rec1].pts);
        }
        if self.records[rec2].bottom_pt == UNASSIGNED {
            self.records[rec2].bottom_pt = self.get_bottom_pt(self.records[rec2].pts);
        }

        let bottom1 = self.records[rec1].bottom_pt;
        let bottom2 = self.records[rec2].bottom_pt;
        let (pt1, pt2) = (self.pt(bottom1), self.pt(bottom2));

        if pt1.y != pt2.y {
            return if pt1.y > pt2.y { rec1 } else { rec2 };
        }
        if pt1.x != pt2.x {
            return if pt1.x < pt2.x { rec1 } else { rec2 };
        }

        if self.next(bottom1) == bottom1 {
            rec2
        } else if self.next(bottom2) == bottom2 || self.first_is_bottom_pt(bottom1, bottom2) {
            rec1
        } else {
            rec2
        }
    }

    fn get_bottom_pt(&self, start: usize) -> usize {
        let mut dups = UNASSIGNED;
        let mut bottom = start;
        let mut p = self.next(start);

        while p != bottom {
            let (curr, best) = (self.pt(p), self.pt(bottom));

            if curr.y > best.y {
                bottom = p;
                dups = UNASSIGNED;
            } else if curr.y == best.y && curr.x <= best.x {
                if curr.x < best.x {
                    dups = UNASSIGNED;
                    bottom = p;
                } else if self.next(p) != bottom && self.prev(p) != bottom {
                    dups = p;
                }
            }

            p = self.next(p);
        }

        if dups != UNASSIGNED {
            // several vertices share the bottom point
            while dups != p {
                if !self.first_is_bottom_pt(p, dups) {
                    bottom = dups;
                }

                dups = self.next(dups);
                while self.pt(dups) != self.pt(bottom) {
                    dups = self.next(dups);
                }
            }
        }

        bottom
    }

    fn unique_neighbour(&self, index: usize, is_next: bool) -> usize {
        let pt = self.pt(index);
        let step = |i: usize| if is_next { self.next(i) } else { self.prev(i) };
        let mut result = step(index);

        while self.pt(result) == pt && result != index {
            result = step(result);
        }

        result
    }

    fn first_is_bottom_pt(&self, bottom1: usize, bottom2: usize) -> bool {
        let pt1 = self.pt(bottom1);
        let pt2 = self.pt(bottom2);

        let dx1p = get_dx(&pt1, &self.pt(self.unique_neighbour(bottom1, false))).abs();
        let dx1n = get_dx(&pt1, &self.pt(self.unique_neighbour(bottom1, true))).abs();
        let dx2p = get_dx(&pt2, &self.pt(self.unique_neighbour(bottom2, false))).abs();
        let dx2n = get_dx(&pt2, &self.pt(self.unique_neighbour(bottom2, true))).abs();

        if dx1p.max(dx1n) == dx2p.max(dx2n) && dx1p.min(dx1n) == dx2p.min(dx2n) {
            // identical corners, fall back to orientation
            return self.chain_area(bottom1) > 0.0;
        }

        (dx1p >= dx2p && dx1p >= dx2n) || (dx1n >= dx2p && dx1n >= dx2n)
    }

    /// Signed area of a chain walked through `next`. Positive when the
    /// exported (reversed) path is counter-clockwise.
    pub fn chain_area(&self, start: usize) -> f64 {
        if start == UNASSIGNED {
            return 0.0;
        }

        let mut result = 0.0;
        let mut op = start;

        loop {
            let prev = self.pt(self.prev(op));
            let curr = self.pt(op);

            result += (prev.x as f64 + curr.x as f64) * (prev.y as f64 - curr.y as f64);
            op = self.next(op);

            if op == start {
                break;
            }
        }

        result * 0.5
    }

    pub fn area(&self, rec_index: usize) -> f64 {
        self.chain_area(self.records[rec_index].pts)
    }

    pub fn reverse_links(&mut self, start: usize) {
        if start == UNASSIGNED {
            return;
        }

        let mut op = start;

        loop {
            let next = self.next(op);
            let prev = self.prev(op);

            self.set_next(op, prev);
            self.set_prev(op, next);
            op = next;

            if op == start {
                break;
            }
        }
    }

    pub fn point_count(&self, start: usize) -> usize {
        if start == UNASSIGNED {
            return 0;
        }

        let mut result = 0;
        let mut op = start;

        loop {
            result += 1;
            op = self.next(op);

            if op == start {
                break;
            }
        }

        result
    }

    fn chain_edges(&self, start: usize) -> impl Iterator<Item = (Point64, Point64)> + '_ {
        let mut op = start;
        let mut is_done = false;

        std::iter::from_fn(move || {
            if is_done {
                return None;
            }

            let curr = self.pt(op);

            op = self.next(op);
            is_done = op == start;

            Some((curr, self.pt(op)))
        })
    }

    pub fn point_in_chain(&self, pt: &Point64, start: usize) -> PointInPolygonResult {
        classify_point(pt, self.chain_edges(start))
    }

    /// True when the ring at `inner` lies inside the ring at `outer`, judged
    /// by the first vertex that is not on the boundary.
    pub fn poly2_contains_poly1(&self, inner: usize, outer: usize) -> bool {
        let mut op = inner;

        loop {
            match self.point_in_chain(&self.pt(op), outer) {
                PointInPolygonResult::Inside => return true,
                PointInPolygonResult::Outside => return false,
                PointInPolygonResult::OnBoundary => {}
            }

            op = self.next(op);

            if op == inner {
                return true;
            }
        }
    }

    /// Splices the chain of `rec2` onto `rec1` according to the sides of
    /// the two bounds meeting at a local maximum, then retires `rec2`.
    pub fn append_polygon(&mut self, rec1: usize, rec2: usize, side1: Direction, side2: Direction) {
        let hole_state_rec = self.hole_state_rec(rec1, rec2);

        let p1_lft = self.records[rec1].pts;
        let p1_rt = self.prev(p1_lft);
        let p2_lft = self.records[rec2].pts;
        let p2_rt = self.prev(p2_lft);

        match (side1, side2) {
            (Direction::Left, Direction::Left) => {
                self.reverse_links(p2_lft);
                self.set_next(p2_lft, p1_lft);
                self.set_prev(p1_lft, p2_lft);
                self.set_next(p1_rt, p2_rt);
                self.set_prev(p2_rt, p1_rt);
                self.records[rec1].pts = p2_rt;
            }
            (Direction::Left, Direction::Right) => {
                self.set_next(p2_rt, p1_lft);
                self.set_prev(p1_lft, p2_rt);
                self.set_prev(p2_lft, p1_rt);
                self.set_next(p1_rt, p2_lft);
                self.records[rec1].pts = p2_lft;
            }
            (Direction::Right, Direction::Right) => {
                self.reverse_links(p2_lft);
                self.set_next(p1_rt, p2_rt);
                self.set_prev(p2_rt, p1_rt);
                self.set_next(p2_lft, p1_lft);
                self.set_prev(p1_lft, p2_lft);
            }
            (Direction::Right, Direction::Left) => {
                self.set_next(p1_rt, p2_lft);
                self.set_prev(p2_lft, p1_rt);
                self.set_prev(p1_lft, p2_rt);
                self.set_next(p2_rt, p1_lft);
            }
        }

        self.records[rec1].bottom_pt = UNASSIGNED;

        if hole_state_rec == rec2 {
            if self.records[rec2].first_left != rec1 {
                self.records[rec1].first_left = self.records[rec2].first_left;
            }
            self.records[rec1].is_hole = self.records[rec2].is_hole;
        }

        let rec1_idx = self.records[rec1].idx;
        let rec2_data = &mut self.records[rec2];

        rec2_data.pts = UNASSIGNED;
        rec2_data.bottom_pt = UNASSIGNED;
        rec2_data.first_left = rec1;
        rec2_data.idx = rec1_idx;
    }

    pub fn parse_first_left(&self, first_left: usize) -> usize {
        let mut result = first_left;

        while result != UNASSIGNED && self.records[result].pts == UNASSIGNED {
            result = self.records[result].first_left;
        }

        result
    }

    /// Moves owners from `old_rec` to `new_rec` for every record that
    /// `new_rec` now contains.
    pub fn fixup_first_lefts1(&mut self, old_rec: usize, new_rec: usize) {
        for i in 0..self.records.len() {
            let first_left = self.parse_first_left(self.records[i].first_left);
            let pts = self.records[i].pts;

            if pts != UNASSIGNED
                && first_left == old_rec
                && self.poly2_contains_poly1(pts, self.records[new_rec].pts)
            {
                self.records[i].first_left = new_rec;
            }
        }
    }

    /// After a split where `inner_rec` ended up inside `outer_rec`, re-homes
    /// the records that either of them may now wrap.
    pub fn fixup_first_lefts2(&mut self, inner_rec: usize, outer_rec: usize) {
        let outer_first_left = self.records[outer_rec].first_left;

        for i in 0..self.records.len() {
            let pts = self.records[i].pts;

            if pts == UNASSIGNED || i == outer_rec || i == inner_rec {
                continue;
            }

            let first_left = self.parse_first_left(self.records[i].first_left);

            if first_left != outer_first_left && first_left != inner_rec && first_left != outer_rec {
                continue;
            }

            if self.poly2_contains_poly1(pts, self.records[inner_rec].pts) {
                self.records[i].first_left = inner_rec;
            } else if self.poly2_contains_poly1(pts, self.records[outer_rec].pts) {
                self.records[i].first_left = outer_rec;
            } else if self.records[i].first_left == inner_rec
                || self.records[i].first_left == outer_rec
            {
                self.records[i].first_left = outer_first_left;
            }
        }
    }

    pub fn fixup_first_lefts3(&mut self, old_rec: usize, new_rec: usize) {
        for i in 0..self.records.len() {
            let first_left = self.parse_first_left(self.records[i].first_left);

            if self.records[i].pts != UNASSIGNED && first_left == old_rec {
                self.records[i].first_left = new_rec;
            }
        }
    }

    pub fn update_out_pt_idxs(&mut self, rec_index: usize) {
        let start = self.records[rec_index].pts;
        let mut op = start;

        loop {
            self.points[op].idx = rec_index;
            op = self.prev(op);

            if op == start {
                break;
            }
        }
    }

    /// A new record holding the second half of a split chain.
    pub fn split_rec(&mut self, pts: usize) -> usize {
        let index = self.create_rec(false);

        self.records[index].pts = pts;
        self.update_out_pt_idxs(index);

        index
    }

    pub fn dup_out_pt(&mut self, index: usize, insert_after: bool) -> usize {
        let rec_index = self.points[index].idx;
        let result = self.create_out_pt(rec_index, self.pt(index));

        if insert_after {
            let next = self.next(index);

            self.set_next(result, next);
            self.set_prev(result, index);
            self.set_prev(next, result);
            self.set_next(index, result);
        } else {
            let prev = self.prev(index);

            self.set_prev(result, prev);
            self.set_next(result, index);
            self.set_next(prev, result);
            self.set_prev(index, result);
        }

        result
    }

    /// Cross-links two chains at `op1` and `op2`, duplicating both vertices
    /// so each side keeps a closed ring. Returns the duplicate of `op1`.
    pub fn apply_join(&mut self, op1: usize, op2: usize, reverse: bool) -> usize {
        let op1b = self.dup_out_pt(op1, !reverse);
        let op2b = self.dup_out_pt(op2, reverse);

        if reverse {
            self.set_prev(op1, op2);
            self.set_next(op2, op1);
            self.set_next(op1b, op2b);
            self.set_prev(op2b, op1b);
        } else {
            self.set_next(op1, op2);
            self.set_prev(op2, op1);
            self.set_prev(op1b, op2b);
            self.set_next(op2b, op1b);
        }

        op1b
    }

    fn horz_direction(&self, op: usize, opb: usize) -> Direction {
        if self.pt(op).x > self.pt(opb).x {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    fn prepare_horz_end(
        &mut self,
        op: usize,
        direction: Direction,
        pt: &Point64,
        discard_left: bool,
    ) -> (usize, usize) {
        let mut op = op;
        let insert_after = if direction == Direction::Right {
            loop {
                let next = self.pt(self.next(op));

                if next.x <= pt.x && next.x >= self.pt(op).x && next.y == pt.y {
                    op = self.next(op);
                } else {
                    break;
                }
            }
            if discard_left && self.pt(op).x != pt.x {
                op = self.next(op);
            }
            !discard_left
        } else {
            loop {
                let next = self.pt(self.next(op));

                if next.x >= pt.x && next.x <= self.pt(op).x && next.y == pt.y {
                    op = self.next(op);
                } else {
                    break;
                }
            }
            if !discard_left && self.pt(op).x != pt.x {
                op = self.next(op);
            }
            discard_left
        };

        let mut opb = self.dup_out_pt(op, insert_after);

        if self.pt(opb) != *pt {
            op = opb;
            self.points[op].pt = *pt;
            opb = self.dup_out_pt(op, insert_after);
        }

        (op, opb)
    }

    /// Joins two overlapping horizontal runs at `pt`. Fails when both run
    /// in the same direction.
    pub fn join_horz(
        &mut self,
        op1: usize,
        op1b: usize,
        op2: usize,
        op2b: usize,
        pt: &Point64,
        discard_left: bool,
    ) -> bool {
        let dir1 = self.horz_direction(op1, op1b);
        let dir2 = self.horz_direction(op2, op2b);

        if dir1 == dir2 {
            return false;
        }

        let (op1, op1b) = self.prepare_horz_end(op1, dir1, pt, discard_left);
        let (op2, op2b) = self.prepare_horz_end(op2, dir2, pt, discard_left);

        if (dir1 == Direction::Right) == discard_left {
            self.set_prev(op1, op2);
            self.set_next(op2, op1);
            self.set_next(op1b, op2b);
            self.set_prev(op2b, op1b);
        } else {
            self.set_next(op1, op2);
            self.set_prev(op2, op1);
            self.set_prev(op1b, op2b);
            self.set_next(op2b, op1b);
        }

        true
    }

    /// Reverses every closed chain whose winding disagrees with its hole state.
    pub fn fix_orientations(&mut self) {
        for i in 0..self.records.len() {
            let rec = &self.records[i];

            if rec.pts == UNASSIGNED || rec.is_open {
                continue;
            }

            if (rec.is_hole ^ self.reverse_solution) == (self.area(i) > 0.0) {
                self.reverse_links(self.records[i].pts);
            }
        }
    }

    pub fn fixup_outputs(&mut self) {
        for i in 0..self.records.len() {
            if self.records[i].pts == UNASSIGNED {
                continue;
            }

            if self.records[i].is_open {
                self.fixup_out_polyline(i);
            } else {
                self.fixup_out_polygon(i);
            }
        }
    }

    /// Drops duplicate vertices, collinear vertices and spikes from a closed chain.
    fn fixup_out_polygon(&mut self, rec_index: usize) {
        let mut last_ok = UNASSIGNED;
        let mut pp = self.records[rec_index].pts;

        self.records[rec_index].bottom_pt = UNASSIGNED;

        loop {
            let prev = self.prev(pp);
            let next = self.next(pp);

            if prev == pp || prev == next {
                self.records[rec_index].pts = UNASSIGNED;
                return;
            }

            let (prev_pt, curr_pt, next_pt) = (self.pt(prev), self.pt(pp), self.pt(next));

            if curr_pt == next_pt
                || curr_pt == prev_pt
                || (slopes_equal3(&prev_pt, &curr_pt, &next_pt)
                    && (!self.preserve_collinear
                        || !pt2_is_between_pt1_and_pt3(&prev_pt, &curr_pt, &next_pt)))
            {
                last_ok = UNASSIGNED;
                self.set_next(prev, next);
                self.set_prev(next, prev);
                pp = prev;
            } else if pp == last_ok {
                break;
            } else {
                if last_ok == UNASSIGNED {
                    last_ok = pp;
                }
                pp = next;
            }
        }

        self.records[rec_index].pts = pp;
    }

    /// Drops repeated vertices from an open chain. The head stays where it
    /// was so the export still runs from one end of the line to the other.
    fn fixup_out_polyline(&mut self, rec_index: usize) {
        let mut head = self.records[rec_index].pts;
        let mut pp = head;
        let last_pp = self.prev(pp);

        while pp != last_pp {
            pp = self.next(pp);

            if self.pt(pp) == self.pt(self.prev(pp)) {
                let removed = self.prev(pp);
                let before = self.prev(removed);

                self.set_next(before, pp);
                self.set_prev(pp, before);

                if removed == head {
                    head = pp;
                }
            }
        }

        self.records[rec_index].pts = if pp == self.prev(pp) { UNASSIGNED } else { head };
    }

    /// Materializes a chain by walking `prev` from the last vertex, which
    /// yields outer contours with positive area.
    pub fn export(&self, rec_index: usize) -> Path64 {
        let start = self.records[rec_index].pts;
        let count = self.point_count(start);
        let mut result = Vec::with_capacity(count);

        if count == 0 {
            return result;
        }

        let mut op = self.prev(start);

        for _ in 0..count {
            result.push(self.pt(op));
            op = self.prev(op);
        }

        result
    }

    /// Fills `tree` with the closed contours and `open_paths` with the open
    /// ones. The sweep's owners only settle winding; the tree is nested from
    /// the finished geometry.
    pub fn build_result(&self, tree: &mut PolyTree, open_paths: &mut Paths64) {
        for i in 0..self.records.len() {
            let count = self.point_count(self.records[i].pts);

            if self.records[i].is_open {
                if count >= 2 {
                    open_paths.push(self.export(i));
                }
                continue;
            }

            if count < 3 || self.area(i).abs() < TOL_F64 {
                continue;
            }

            tree.create_node(self.export(i));
        }

        tree.nest();
    }
}
