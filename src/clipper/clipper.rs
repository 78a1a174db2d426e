use crate::{
    clipper::{
        constants::{SKIP, UNASSIGNED},
        enums::{ClipType, Direction, FillRule, PolyType},
        intersect_node::{IntersectList, IntersectNode},
        join::JoinList,
        local_minima::LocalMinima,
        out_rec::OutRec,
        poly_tree::PolyTree,
        scanbeam::Scanbeam,
        t_edge::TEdge,
        utils::{horz_segments_overlap, range_test, slopes_equal4},
    },
    clipper_config::ClipperConfig,
    error::{ClipperError, ClipperResult},
    geometry::point::{Paths64, Point64},
};

/// Sweep-line Boolean engine. Paths are turned into edge bounds when added;
/// `execute` sweeps them from the largest y to the smallest.
pub struct Clipper {
    local_minima: LocalMinima,
    intersections: IntersectList,
    scanbeam: Scanbeam,
    t_edge: TEdge,
    joins: JoinList,
    out_rec: OutRec,
    config: ClipperConfig,
    has_open_paths: bool,
}

impl Clipper {
    pub fn new(config: ClipperConfig) -> Self {
        Self {
            local_minima: LocalMinima::new(),
            intersections: IntersectList::new(),
            scanbeam: Scanbeam::new(),
            t_edge: TEdge::new(),
            joins: JoinList::new(),
            out_rec: OutRec::new(config.reverse_solution, config.preserve_collinear),
            config,
            has_open_paths: false,
        }
    }

    pub fn has_open_paths(&self) -> bool {
        self.has_open_paths
    }

    /// Registers one path. Returns `Ok(false)` when the path degenerates to
    /// nothing after duplicate and collinear vertices are dropped.
    pub fn add_path(
        &mut self,
        path: &[Point64],
        poly_type: PolyType,
        is_closed: bool,
    ) -> ClipperResult<bool> {
        if !is_closed && poly_type == PolyType::Clip {
            return Err(ClipperError::OpenClipPath);
        }

        if let Some(err) = path.iter().find_map(|pt| range_test(pt).err()) {
            log::warn!("clipper: rejected path of {} points: {}", path.len(), err);
            return Err(err);
        }

        let (start, is_flat) = match self.t_edge.create_path(
            path,
            poly_type,
            is_closed,
            self.config.preserve_collinear,
        ) {
            Some(result) => result,
            None => return Ok(false),
        };

        if !is_closed {
            self.has_open_paths = true;
        }

        if is_flat {
            self.add_flat_open_path(start);
            return Ok(true);
        }

        let mut e = start;
        let prev = self.t_edge[e].prev;

        // open paths whose ends coincide would never reach a minimum
        if self.t_edge[prev].bot == self.t_edge[prev].top {
            e = self.t_edge[e].next;
        }

        let mut e_min = UNASSIGNED;

        loop {
            e = self.t_edge.find_next_loc_min(e);

            if e == e_min {
                break;
            }
            if e_min == UNASSIGNED {
                e_min = e;
            }

            let prev = self.t_edge[e].prev;
            let bot = self.t_edge[e].bot;
            let (mut left, mut right, left_is_forward) =
                if self.t_edge[e].dx < self.t_edge[prev].dx {
                    (prev, e, false)
                } else {
                    (e, prev, true)
                };

            let wind_delta = if !is_closed {
                0
            } else if self.t_edge[left].next == right {
                -1
            } else {
                1
            };

            self.t_edge[left].wind_delta = wind_delta;
            self.t_edge[right].wind_delta = -wind_delta;

            e = self
                .t_edge
                .process_bound(left, left_is_forward, &mut self.local_minima);
            if self.t_edge[e].out_idx == SKIP {
                e = self
                    .t_edge
                    .process_bound(e, left_is_forward, &mut self.local_minima);
            }

            let mut e2 = self
                .t_edge
                .process_bound(right, !left_is_forward, &mut self.local_minima);
            if self.t_edge[e2].out_idx == SKIP {
                e2 = self
                    .t_edge
                    .process_bound(e2, !left_is_forward, &mut self.local_minima);
            }

            if self.t_edge[left].out_idx == SKIP {
                left = UNASSIGNED;
            } else if self.t_edge[right].out_idx == SKIP {
                right = UNASSIGNED;
            }

            self.local_minima.insert(bot.y, bot.x, left, right);

            if !left_is_forward {
                e = e2;
            }
        }

        Ok(true)
    }

    /// An open path on a single row becomes one right bound of horizontals.
    fn add_flat_open_path(&mut self, start: usize) {
        let bot = self.t_edge[start].bot;
        let mut e = start;

        self.t_edge[e].side = Direction::Right;
        self.t_edge[e].wind_delta = 0;

        loop {
            let prev = self.t_edge[e].prev;

            if self.t_edge[e].bot.x != self.t_edge[prev].top.x {
                self.t_edge.reverse_horizontal(e);
            }

            let next = self.t_edge[e].next;

            if self.t_edge[next].out_idx == SKIP {
                break;
            }

            self.t_edge[e].next_in_lml = next;
            e = next;
        }

        self.local_minima.insert(bot.y, bot.x, UNASSIGNED, start);
    }

    pub fn add_paths(
        &mut self,
        paths: &[Vec<Point64>],
        poly_type: PolyType,
        is_closed: bool,
    ) -> ClipperResult<bool> {
        let mut result = false;

        for path in paths {
            if self.add_path(path, poly_type, is_closed)? {
                result = true;
            }
        }

        Ok(result)
    }

    /// Runs the sweep and returns the closed result as a tree plus the
    /// clipped open paths.
    pub fn execute(
        &mut self,
        clip_type: ClipType,
        fill_rule: FillRule,
    ) -> ClipperResult<(PolyTree, Paths64)> {
        self.t_edge.init(clip_type, fill_rule);
        self.out_rec = OutRec::new(self.config.reverse_solution, self.config.preserve_collinear);
        self.joins.clear();
        self.intersections.clear();

        log::debug!(
            "clipper: {:?} under {:?} with {} edges and {} local minima",
            clip_type,
            fill_rule,
            self.t_edge.len(),
            self.local_minima.len()
        );

        let succeeded = self.execute_internal();

        self.joins.clear();
        self.intersections.clear();
        succeeded?;

        let mut tree = PolyTree::with_orientation(self.config.reverse_solution);
        let mut open_paths = Vec::new();

        self.out_rec.build_result(&mut tree, &mut open_paths);

        if self.config.check_containment {
            tree.check_containment();
        }

        log::debug!(
            "clipper: {} output records, {} polygons, {} open paths",
            self.out_rec.len(),
            tree.total_count(),
            open_paths.len()
        );

        Ok((tree, open_paths))
    }

    fn execute_internal(&mut self) -> ClipperResult<()> {
        self.reset();

        let bot_y = match self.scanbeam.pop() {
            Some(y) => y,
            None => return Ok(()),
        };

        self.insert_local_minima_into_ael(bot_y);

        while let Some(top_y) = self.scanbeam.pop() {
            self.process_horizontals();
            self.joins.clear_ghosts();
            self.process_intersections(top_y)?;
            self.process_edges_at_top_of_scanbeam(top_y)?;
            self.insert_local_minima_into_ael(top_y);
        }

        self.out_rec.fix_orientations();
        self.joins.join_common_edges(&mut self.out_rec);
        self.out_rec.fixup_outputs();

        Ok(())
    }

    fn reset(&mut self) {
        self.local_minima.sort();
        self.scanbeam.clean();

        for minimum in self.local_minima.iter() {
            self.scanbeam.insert(minimum.y);

            if minimum.left_bound != UNASSIGNED {
                self.t_edge.reset_bound(minimum.left_bound, Direction::Left);
            }
            if minimum.right_bound != UNASSIGNED {
                self.t_edge.reset_bound(minimum.right_bound, Direction::Right);
            }
        }
    }

    fn update_edge_into_ael(&mut self, edge: usize) -> usize {
        let result = self.t_edge.update_edge_into_ael(edge);

        if !self.t_edge.is_horizontal(result) {
            self.scanbeam.insert(self.t_edge[result].top.y);
        }

        result
    }

    fn insert_local_minima_into_ael(&mut self, bot_y: i64) {
        while let Some(minimum) = self.local_minima.pop(bot_y) {
            let lb = minimum.left_bound;
            let rb = minimum.right_bound;
            let mut op1 = UNASSIGNED;

            if lb == UNASSIGNED {
                self.t_edge.insert_edge_into_ael(rb, UNASSIGNED);
                self.t_edge.set_winding_count(rb);

                if self.t_edge.is_contributing(rb) {
                    let bot = self.t_edge[rb].bot;
                    op1 = self.add_out_pt(rb, bot);
                }
            } else if rb == UNASSIGNED {
                self.t_edge.insert_edge_into_ael(lb, UNASSIGNED);
                self.t_edge.set_winding_count(lb);

                if self.t_edge.is_contributing(lb) {
                    let bot = self.t_edge[lb].bot;
                    op1 = self.add_out_pt(lb, bot);
                }

                self.scanbeam.insert(self.t_edge[lb].top.y);
            } else {
                self.t_edge.insert_edge_into_ael(lb, UNASSIGNED);
                self.t_edge.insert_edge_into_ael(rb, lb);
                self.t_edge.set_winding_count(lb);
                self.t_edge[rb].wind_cnt = self.t_edge[lb].wind_cnt;
                self.t_edge[rb].wind_cnt2 = self.t_edge[lb].wind_cnt2;

                if self.t_edge.is_contributing(lb) {
                    let bot = self.t_edge[lb].bot;
                    op1 = self.add_local_min_poly(lb, rb, bot);
                }

                self.scanbeam.insert(self.t_edge[lb].top.y);
            }

            if rb != UNASSIGNED {
                if self.t_edge.is_horizontal(rb) {
                    self.t_edge.add_edge_to_sel(rb);

                    let next = self.t_edge[rb].next_in_lml;
                    if next != UNASSIGNED {
                        self.scanbeam.insert(self.t_edge[next].top.y);
                    }
                } else {
                    self.scanbeam.insert(self.t_edge[rb].top.y);
                }
            }

            if lb == UNASSIGNED || rb == UNASSIGNED {
                continue;
            }

            if op1 != UNASSIGNED
                && self.t_edge.is_horizontal(rb)
                && self.t_edge[rb].wind_delta != 0
            {
                self.convert_ghost_joins(op1, rb);
            }

            let prev = self.t_edge[lb].prev_in_ael;

            if op1 != UNASSIGNED
                && self.t_edge.is_assigned(lb)
                && prev != UNASSIGNED
                && self.t_edge[prev].curr.x == self.t_edge[lb].bot.x
                && self.t_edge.is_assigned(prev)
                && slopes_equal4(
                    &self.t_edge[prev].bot,
                    &self.t_edge[prev].top,
                    &self.t_edge[lb].curr,
                    &self.t_edge[lb].top,
                )
                && self.t_edge[lb].wind_delta != 0
                && self.t_edge[prev].wind_delta != 0
            {
                let bot = self.t_edge[lb].bot;
                let top = self.t_edge[lb].top;
                let op2 = self.add_out_pt(prev, bot);

                self.joins.add_join(op1, op2, top);
            }

            if self.t_edge[lb].next_in_ael == rb {
                continue;
            }

            let prev = self.t_edge[rb].prev_in_ael;

            if op1 != UNASSIGNED
                && self.t_edge.is_assigned(rb)
                && self.t_edge.is_assigned(prev)
                && slopes_equal4(
                    &self.t_edge[prev].curr,
                    &self.t_edge[prev].top,
                    &self.t_edge[rb].curr,
                    &self.t_edge[rb].top,
                )
                && self.t_edge[rb].wind_delta != 0
                && self.t_edge[prev].wind_delta != 0
            {
                let bot = self.t_edge[rb].bot;
                let top = self.t_edge[rb].top;
                let op2 = self.add_out_pt(prev, bot);

                self.joins.add_join(op1, op2, top);
            }

            // rb must end up right of every edge between the two bounds
            let pt = self.t_edge[lb].curr;
            let mut e = self.t_edge[lb].next_in_ael;

            while e != UNASSIGNED && e != rb {
                self.intersect_edges(rb, e, pt);
                e = self.t_edge[e].next_in_ael;
            }
        }
    }

    /// Ghost joins overlapping the new horizontal right bound become real joins.
    fn convert_ghost_joins(&mut self, op1: usize, rb: usize) {
        let bot_x = self.t_edge[rb].bot.x;
        let top_x = self.t_edge[rb].top.x;
        let matches: Vec<(usize, Point64)> = self
            .joins
            .ghosts()
            .iter()
            .filter(|ghost| {
                horz_segments_overlap(
                    self.out_rec.pt(ghost.out_pt1).x,
                    ghost.off_pt.x,
                    bot_x,
                    top_x,
                )
            })
            .map(|ghost| (ghost.out_pt1, ghost.off_pt))
            .collect();

        for (op, off_pt) in matches {
            self.joins.add_join(op, op1, off_pt);
        }
    }

    fn add_out_pt(&mut self, edge: usize, pt: Point64) -> usize {
        if !self.t_edge.is_assigned(edge) {
            let is_open = self.t_edge[edge].wind_delta == 0;
            let (rec_index, point_index) = self.out_rec.create(pt, is_open);

            if !is_open {
                self.set_hole_state(edge, rec_index);
            }

            self.t_edge[edge].out_idx = rec_index;

            return point_index;
        }

        let to_front = self.t_edge[edge].side == Direction::Left;

        self.out_rec
            .add_out_pt(self.t_edge[edge].out_idx, pt, to_front)
    }

    fn get_last_out_pt(&self, edge: usize) -> usize {
        self.out_rec
            .last_out_pt(self.t_edge[edge].out_idx, self.t_edge[edge].side)
    }

    /// The owner is the nearest contour to the left that is still open at
    /// this scanline; a contour with an odd number of such edges is a hole.
    fn set_hole_state(&mut self, edge: usize, rec_index: usize) {
        let mut e2 = self.t_edge[edge].prev_in_ael;
        let mut e_tmp = UNASSIGNED;

        while e2 != UNASSIGNED {
            if self.t_edge.is_assigned(e2) && self.t_edge[e2].wind_delta != 0 {
                if e_tmp == UNASSIGNED {
                    e_tmp = e2;
                } else if self.t_edge[e_tmp].out_idx == self.t_edge[e2].out_idx {
                    e_tmp = UNASSIGNED;
                }
            }

            e2 = self.t_edge[e2].prev_in_ael;
        }

        if e_tmp == UNASSIGNED {
            let record = self.out_rec.record_mut(rec_index);

            record.first_left = UNASSIGNED;
            record.is_hole = false;
        } else {
            let owner = self.t_edge[e_tmp].out_idx;
            let is_hole = !self.out_rec.record(owner).is_hole;
            let record = self.out_rec.record_mut(rec_index);

            record.first_left = owner;
            record.is_hole = is_hole;
        }
    }

    fn add_local_min_poly(&mut self, e1: usize, e2: usize, pt: Point64) -> usize {
        let (result, e, prev_e) =
            if self.t_edge.is_horizontal(e2) || self.t_edge[e1].dx > self.t_edge[e2].dx {
                let result = self.add_out_pt(e1, pt);

                self.t_edge[e2].out_idx = self.t_edge[e1].out_idx;
                self.t_edge[e1].side = Direction::Left;
                self.t_edge[e2].side = Direction::Right;

                let prev_e = if self.t_edge[e1].prev_in_ael == e2 {
                    self.t_edge[e2].prev_in_ael
                } else {
                    self.t_edge[e1].prev_in_ael
                };

                (result, e1, prev_e)
            } else {
                let result = self.add_out_pt(e2, pt);

                self.t_edge[e1].out_idx = self.t_edge[e2].out_idx;
                self.t_edge[e1].side = Direction::Right;
                self.t_edge[e2].side = Direction::Left;

                let prev_e = if self.t_edge[e2].prev_in_ael == e1 {
                    self.t_edge[e1].prev_in_ael
                } else {
                    self.t_edge[e2].prev_in_ael
                };

                (result, e2, prev_e)
            };

        if prev_e != UNASSIGNED
            && self.t_edge.is_assigned(prev_e)
            && self.t_edge[prev_e].top.y < pt.y
            && self.t_edge[e].top.y < pt.y
        {
            let x_prev = self.t_edge.top_x(prev_e, pt.y);
            let x_e = self.t_edge.top_x(e, pt.y);

            if x_prev == x_e
                && self.t_edge[e].wind_delta != 0
                && self.t_edge[prev_e].wind_delta != 0
                && slopes_equal4(
                    &Point64::new(x_prev, pt.y),
                    &self.t_edge[prev_e].top,
                    &Point64::new(x_e, pt.y),
                    &self.t_edge[e].top,
                )
            {
                let out_pt = self.add_out_pt(prev_e, pt);
                let top = self.t_edge[e].top;

                self.joins.add_join(result, out_pt, top);
            }
        }

        result
    }

    fn add_local_max_poly(&mut self, e1: usize, e2: usize, pt: Point64) {
        self.add_out_pt(e1, pt);

        if self.t_edge[e2].wind_delta == 0 {
            self.add_out_pt(e2, pt);
        }

        let idx1 = self.t_edge[e1].out_idx;
        let idx2 = self.t_edge[e2].out_idx;

        if idx1 == idx2 {
            self.t_edge[e1].out_idx = UNASSIGNED;
            self.t_edge[e2].out_idx = UNASSIGNED;
        } else if idx1 < idx2 {
            self.append_polygon(e1, e2);
        } else {
            self.append_polygon(e2, e1);
        }
    }

    fn append_polygon(&mut self, e1: usize, e2: usize) {
        let ok_idx = self.t_edge[e1].out_idx;
        let obsolete_idx = self.t_edge[e2].out_idx;
        let side = self.t_edge[e1].side;

        self.out_rec
            .append_polygon(ok_idx, obsolete_idx, side, self.t_edge[e2].side);

        self.t_edge[e1].out_idx = UNASSIGNED;
        self.t_edge[e2].out_idx = UNASSIGNED;

        let mut e = self.t_edge.active;

        while e != UNASSIGNED {
            if self.t_edge[e].out_idx == obsolete_idx {
                self.t_edge[e].out_idx = ok_idx;
                self.t_edge[e].side = side;
                break;
            }

            e = self.t_edge[e].next_in_ael;
        }
    }

    /// Crossing of an open edge with anything: toggles the open path's output.
    fn intersect_open_edges(&mut self, e1: usize, e2: usize, pt: Point64) {
        let e1_contributing = self.t_edge.is_assigned(e1);
        let e2_contributing = self.t_edge.is_assigned(e2);
        let (wd1, wd2) = (self.t_edge[e1].wind_delta, self.t_edge[e2].wind_delta);
        let is_union = self.t_edge.clip_type() == ClipType::Union;

        if wd1 == 0 && wd2 == 0 {
            return;
        }

        if self.t_edge[e1].poly_type == self.t_edge[e2].poly_type {
            // subject line against subject polygon, only relevant for union
            if wd1 == wd2 || !is_union {
                return;
            }

            if wd1 == 0 {
                if e2_contributing {
                    self.add_out_pt(e1, pt);
                    if e1_contributing {
                        self.t_edge[e1].out_idx = UNASSIGNED;
                    }
                }
            } else if e1_contributing {
                self.add_out_pt(e2, pt);
                if e2_contributing {
                    self.t_edge[e2].out_idx = UNASSIGNED;
                }
            }

            return;
        }

        if wd1 == 0
            && self.t_edge[e2].wind_cnt.abs() == 1
            && (!is_union || self.t_edge[e2].wind_cnt2 == 0)
        {
            self.add_out_pt(e1, pt);
            if e1_contributing {
                self.t_edge[e1].out_idx = UNASSIGNED;
            }
        } else if wd2 == 0
            && self.t_edge[e1].wind_cnt.abs() == 1
            && (!is_union || self.t_edge[e1].wind_cnt2 == 0)
        {
            self.add_out_pt(e2, pt);
            if e2_contributing {
                self.t_edge[e2].out_idx = UNASSIGNED;
            }
        }
    }

    /// Updates winding counts of two edges crossing at `pt` and emits the
    /// output this causes. `e1` must be right of `e2` above the crossing.
    fn intersect_edges(&mut self, e1: usize, e2: usize, pt: Point64) {
        if self.t_edge[e1].wind_delta == 0 || self.t_edge[e2].wind_delta == 0 {
            self.intersect_open_edges(e1, e2, pt);
            return;
        }

        let e1_contributing = self.t_edge.is_assigned(e1);
        let e2_contributing = self.t_edge.is_assigned(e2);
        let fill_rule = self.t_edge.fill_rule();
        let clip_type = self.t_edge.clip_type();
        let is_even_odd = fill_rule == FillRule::EvenOdd;

        if self.t_edge[e1].poly_type == self.t_edge[e2].poly_type {
            if is_even_odd {
                let wind_cnt = self.t_edge[e1].wind_cnt;
                self.t_edge[e1].wind_cnt = self.t_edge[e2].wind_cnt;
                self.t_edge[e2].wind_cnt = wind_cnt;
            } else {
                let (wd1, wd2) = (self.t_edge[e1].wind_delta, self.t_edge[e2].wind_delta);

                if self.t_edge[e1].wind_cnt + wd2 == 0 {
                    self.t_edge[e1].wind_cnt = -self.t_edge[e1].wind_cnt;
                } else {
                    self.t_edge[e1].wind_cnt += wd2;
                }

                if self.t_edge[e2].wind_cnt - wd1 == 0 {
                    self.t_edge[e2].wind_cnt = -self.t_edge[e2].wind_cnt;
                } else {
                    self.t_edge[e2].wind_cnt -= wd1;
                }
            }
        } else if is_even_odd {
            self.t_edge[e1].wind_cnt2 = if self.t_edge[e1].wind_cnt2 == 0 { 1 } else { 0 };
            self.t_edge[e2].wind_cnt2 = if self.t_edge[e2].wind_cnt2 == 0 { 1 } else { 0 };
        } else {
            self.t_edge[e1].wind_cnt2 += self.t_edge[e2].wind_delta;
            self.t_edge[e2].wind_cnt2 -= self.t_edge[e1].wind_delta;
        }

        let e1_wc = fill_rule.effective_count(self.t_edge[e1].wind_cnt);
        let e2_wc = fill_rule.effective_count(self.t_edge[e2].wind_cnt);
        let is_unit = |wc: i32| wc == 0 || wc == 1;

        if e1_contributing && e2_contributing {
            if !is_unit(e1_wc)
                || !is_unit(e2_wc)
                || (self.t_edge[e1].poly_type != self.t_edge[e2].poly_type
                    && clip_type != ClipType::Xor)
            {
                self.add_local_max_poly(e1, e2, pt);
            } else {
                self.add_out_pt(e1, pt);
                self.add_out_pt(e2, pt);
                self.t_edge.swap_sides(e1, e2);
                self.t_edge.swap_poly_indexes(e1, e2);
            }
        } else if e1_contributing {
            if is_unit(e2_wc) {
                self.add_out_pt(e1, pt);
                self.t_edge.swap_sides(e1, e2);
                self.t_edge.swap_poly_indexes(e1, e2);
            }
        } else if e2_contributing {
            if is_unit(e1_wc) {
                self.add_out_pt(e2, pt);
                self.t_edge.swap_sides(e1, e2);
                self.t_edge.swap_poly_indexes(e1, e2);
            }
        } else if is_unit(e1_wc) && is_unit(e2_wc) {
            // neither edge is contributing yet
            let e1_wc2 = fill_rule.effective_count(self.t_edge[e1].wind_cnt2);
            let e2_wc2 = fill_rule.effective_count(self.t_edge[e2].wind_cnt2);
            let poly_type = self.t_edge[e1].poly_type;

            if poly_type != self.t_edge[e2].poly_type {
                self.add_local_min_poly(e1, e2, pt);
            } else if e1_wc == 1 && e2_wc == 1 {
                let is_new_contour = match clip_type {
                    ClipType::Intersection => e1_wc2 > 0 && e2_wc2 > 0,
                    ClipType::Union => e1_wc2 <= 0 && e2_wc2 <= 0,
                    ClipType::Difference => {
                        (poly_type == PolyType::Clip && e1_wc2 > 0 && e2_wc2 > 0)
                            || (poly_type == PolyType::Subject && e1_wc2 <= 0 && e2_wc2 <= 0)
                    }
                    ClipType::Xor => true,
                };

                if is_new_contour {
                    self.add_local_min_poly(e1, e2, pt);
                }
            } else {
                self.t_edge.swap_sides(e1, e2);
            }
        }
    }

    fn process_horizontals(&mut self) {
        while let Some(horz_edge) = self.t_edge.pop_edge_from_sel() {
            self.process_horizontal(horz_edge);
        }
    }

    /// Joins `op1` with every other output horizontal overlapping `horz_edge`
    /// and leaves a ghost join at `ghost_pt` for the next minima.
    fn add_horz_joins(&mut self, horz_edge: usize, op1: usize, ghost_pt: Point64) {
        let (bot_x, top_x) = (self.t_edge[horz_edge].bot.x, self.t_edge[horz_edge].top.x);
        let mut e = self.t_edge.sorted;

        while e != UNASSIGNED {
            if self.t_edge.is_assigned(e)
                && horz_segments_overlap(bot_x, top_x, self.t_edge[e].bot.x, self.t_edge[e].top.x)
            {
                let op2 = self.get_last_out_pt(e);
                let top = self.t_edge[e].top;

                self.joins.add_join(op2, op1, top);
            }

            e = self.t_edge[e].next_in_sel;
        }

        self.joins.add_ghost(op1, ghost_pt);
    }

    /// True when `other` touches the bottom of `edge`, runs collinear with it
    /// and both are part of closed output.
    fn can_join_adjacent(&self, edge: usize, other: usize) -> bool {
        if other == UNASSIGNED {
            return false;
        }

        let (e, o) = (&self.t_edge[edge], &self.t_edge[other]);

        o.curr.x == e.bot.x
            && o.curr.y == e.bot.y
            && o.wind_delta != 0
            && self.t_edge.is_assigned(other)
            && o.curr.y > o.top.y
            && slopes_equal4(&e.curr, &e.top, &o.curr, &o.top)
    }

    fn join_with_adjacent(&mut self, edge: usize, op1: usize) {
        let prev = self.t_edge[edge].prev_in_ael;
        let next = self.t_edge[edge].next_in_ael;
        let other = if self.can_join_adjacent(edge, prev) {
            prev
        } else if self.can_join_adjacent(edge, next) {
            next
        } else {
            return;
        };

        let bot = self.t_edge[edge].bot;
        let top = self.t_edge[edge].top;
        let op2 = self.add_out_pt(other, bot);

        self.joins.add_join(op1, op2, top);
    }

    /// Sweeps a horizontal edge (and any horizontals chained after it)
    /// across the edges it spans, intersecting each one.
    fn process_horizontal(&mut self, horz_edge: usize) {
        let mut horz = horz_edge;
        let is_open = self.t_edge[horz].wind_delta == 0;
        let (mut dir, mut horz_left, mut horz_right) = self.t_edge.horz_direction(horz);

        let mut last_horz = horz;

        while self.t_edge[last_horz].next_in_lml != UNASSIGNED
            && self.t_edge.is_horizontal(self.t_edge[last_horz].next_in_lml)
        {
            last_horz = self.t_edge[last_horz].next_in_lml;
        }

        let max_pair = if self.t_edge[last_horz].next_in_lml == UNASSIGNED {
            self.t_edge.get_maxima_pair(last_horz)
        } else {
            UNASSIGNED
        };

        let mut op1 = UNASSIGNED;

        loop {
            let is_last_horz = horz == last_horz;
            let mut e = self.t_edge.next_in_ael_dir(horz, dir);

            while e != UNASSIGNED {
                let curr_x = self.t_edge[e].curr.x;

                if (dir == Direction::Right && curr_x > horz_right)
                    || (dir == Direction::Left && curr_x < horz_left)
                {
                    break;
                }

                // end of an intermediate horizontal: smaller dx lies to the right above it
                let next_lml = self.t_edge[horz].next_in_lml;

                if curr_x == self.t_edge[horz].top.x
                    && next_lml != UNASSIGNED
                    && self.t_edge[e].dx < self.t_edge[next_lml].dx
                {
                    break;
                }

                if self.t_edge.is_assigned(horz) && !is_open {
                    let curr = self.t_edge[e].curr;
                    let bot = self.t_edge[horz].bot;

                    op1 = self.add_out_pt(horz, curr);
                    self.add_horz_joins(horz, op1, bot);
                }

                if e == max_pair && is_last_horz {
                    if self.t_edge.is_assigned(horz) {
                        let top = self.t_edge[horz].top;
                        self.add_local_max_poly(horz, max_pair, top);
                    }

                    self.t_edge.delete_from_list(horz, true);
                    self.t_edge.delete_from_list(max_pair, true);

                    return;
                }

                let pt = Point64::new(curr_x, self.t_edge[horz].curr.y);

                if dir == Direction::Right {
                    self.intersect_edges(horz, e, pt);
                } else {
                    self.intersect_edges(e, horz, pt);
                }

                let next = self.t_edge.next_in_ael_dir(e, dir);

                self.t_edge.swap_positions_in_list(horz, e, true);
                e = next;
            }

            let next_lml = self.t_edge[horz].next_in_lml;

            if next_lml == UNASSIGNED || !self.t_edge.is_horizontal(next_lml) {
                break;
            }

            horz = self.update_edge_into_ael(horz);

            if self.t_edge.is_assigned(horz) {
                let bot = self.t_edge[horz].bot;
                self.add_out_pt(horz, bot);
            }

            (dir, horz_left, horz_right) = self.t_edge.horz_direction(horz);
        }

        if self.t_edge.is_assigned(horz) && op1 == UNASSIGNED {
            let top = self.t_edge[horz].top;

            op1 = self.get_last_out_pt(horz);
            self.add_horz_joins(horz, op1, top);
        }

        if self.t_edge[horz].next_in_lml == UNASSIGNED {
            if self.t_edge.is_assigned(horz) {
                let top = self.t_edge[horz].top;
                self.add_out_pt(horz, top);
            }

            self.t_edge.delete_from_list(horz, true);

            return;
        }

        if !self.t_edge.is_assigned(horz) {
            self.update_edge_into_ael(horz);
            return;
        }

        let top = self.t_edge[horz].top;
        let op1 = self.add_out_pt(horz, top);

        horz = self.update_edge_into_ael(horz);

        if self.t_edge[horz].wind_delta != 0 {
            self.join_with_adjacent(horz, op1);
        }
    }

    fn process_intersections(&mut self, top_y: i64) -> ClipperResult<()> {
        if self.t_edge.active == UNASSIGNED {
            return Ok(());
        }

        self.build_intersect_list(top_y);

        let count = self.intersections.len();
        let result = if count == 0 {
            Ok(())
        } else if count == 1 || self.fixup_intersection_order() {
            self.process_intersect_list();
            Ok(())
        } else {
            self.intersections.clear();
            Err(ClipperError::IntersectionOrder { y: top_y })
        };

        self.t_edge.sorted = UNASSIGNED;

        result
    }

    /// Bubble-sorts a copy of the AEL by x at `top_y`; every swap is a crossing.
    fn build_intersect_list(&mut self, top_y: i64) {
        if !self.t_edge.prepare_for_intersections(top_y) {
            return;
        }

        loop {
            let mut is_modified = false;
            let mut e = self.t_edge.sorted;

            while self.t_edge[e].next_in_sel != UNASSIGNED {
                let next = self.t_edge[e].next_in_sel;

                if self.t_edge[e].curr.x > self.t_edge[next].curr.x {
                    let mut pt = self.t_edge.intersect_point(e, next);

                    if pt.y < top_y {
                        pt = Point64::new(self.t_edge.top_x(e, top_y), top_y);
                    }

                    self.intersections.add(e, next, pt);
                    self.t_edge.swap_positions_in_list(e, next, false);
                    is_modified = true;
                } else {
                    e = next;
                }
            }

            // the last edge is in place, shrink the list
            let prev = self.t_edge[e].prev_in_sel;

            if prev == UNASSIGNED {
                break;
            }

            self.t_edge[prev].next_in_sel = UNASSIGNED;

            if !is_modified {
                break;
            }
        }

        self.t_edge.sorted = UNASSIGNED;
    }

    fn edges_adjacent(&self, node: &IntersectNode) -> bool {
        self.t_edge[node.edge1].next_in_sel == node.edge2
            || self.t_edge[node.edge1].prev_in_sel == node.edge2
    }

    /// Reorders crossings so each one swaps two edges that are adjacent at
    /// the time it is processed.
    fn fixup_intersection_order(&mut self) -> bool {
        self.t_edge.copy_ael_to_sel();
        self.intersections.sort();

        let count = self.intersections.len();

        for i in 0..count {
            if !self.edges_adjacent(&self.intersections.get(i)) {
                let mut j = i + 1;

                while j < count && !self.edges_adjacent(&self.intersections.get(j)) {
                    j += 1;
                }

                if j == count {
                    return false;
                }

                self.intersections.swap(i, j);
            }

            let node = self.intersections.get(i);

            self.t_edge
                .swap_positions_in_list(node.edge1, node.edge2, false);
        }

        true
    }

    fn process_intersect_list(&mut self) {
        let nodes: Vec<IntersectNode> = self.intersections.drain().collect();

        for node in nodes {
            self.intersect_edges(node.edge1, node.edge2, node.pt);
            self.t_edge
                .swap_positions_in_list(node.edge1, node.edge2, true);
        }
    }

    fn process_edges_at_top_of_scanbeam(&mut self, top_y: i64) -> ClipperResult<()> {
        let mut e = self.t_edge.active;

        while e != UNASSIGNED {
            // maxima are handled like bent horizontals, unless paired with a real one
            let mut is_maxima_edge = self.t_edge.is_maxima(e, top_y);

            if is_maxima_edge {
                let max_pair = self.t_edge.get_maxima_pair_ex(e);
                is_maxima_edge = max_pair == UNASSIGNED || !self.t_edge.is_horizontal(max_pair);
            }

            if is_maxima_edge {
                let prev = self.t_edge[e].prev_in_ael;

                self.do_maxima(e)?;

                e = if prev == UNASSIGNED {
                    self.t_edge.active
                } else {
                    self.t_edge[prev].next_in_ael
                };

                continue;
            }

            if self.t_edge.is_intermediate(e, top_y)
                && self.t_edge.is_horizontal(self.t_edge[e].next_in_lml)
            {
                e = self.update_edge_into_ael(e);

                if self.t_edge.is_assigned(e) {
                    let bot = self.t_edge[e].bot;
                    self.add_out_pt(e, bot);
                }

                self.t_edge.add_edge_to_sel(e);
            } else {
                let x = self.t_edge.top_x(e, top_y);
                self.t_edge[e].curr = Point64::new(x, top_y);
            }

            e = self.t_edge[e].next_in_ael;
        }

        self.process_horizontals();

        e = self.t_edge.active;

        while e != UNASSIGNED {
            if self.t_edge.is_intermediate(e, top_y) {
                let op = if self.t_edge.is_assigned(e) {
                    let top = self.t_edge[e].top;
                    self.add_out_pt(e, top)
                } else {
                    UNASSIGNED
                };

                e = self.update_edge_into_ael(e);

                if op != UNASSIGNED && self.t_edge[e].wind_delta != 0 {
                    self.join_with_adjacent(e, op);
                }
            }

            e = self.t_edge[e].next_in_ael;
        }

        Ok(())
    }

    fn do_maxima(&mut self, edge: usize) -> ClipperResult<()> {
        let max_pair = self.t_edge.get_maxima_pair_ex(edge);
        let top = self.t_edge[edge].top;

        if max_pair == UNASSIGNED {
            if self.t_edge.is_assigned(edge) {
                self.add_out_pt(edge, top);
            }

            self.t_edge.delete_from_list(edge, true);

            return Ok(());
        }

        let mut next = self.t_edge[edge].next_in_ael;

        while next != UNASSIGNED && next != max_pair {
            self.intersect_edges(edge, next, top);
            self.t_edge.swap_positions_in_list(edge, next, true);
            next = self.t_edge[edge].next_in_ael;
        }

        let is_assigned = self.t_edge.is_assigned(edge);
        let is_pair_assigned = self.t_edge.is_assigned(max_pair);

        if !is_assigned && !is_pair_assigned {
            self.t_edge.delete_from_list(edge, true);
            self.t_edge.delete_from_list(max_pair, true);
        } else if is_assigned && is_pair_assigned {
            self.add_local_max_poly(edge, max_pair, top);
            self.t_edge.delete_from_list(edge, true);
            self.t_edge.delete_from_list(max_pair, true);
        } else if self.t_edge[edge].wind_delta == 0 {
            if is_assigned {
                self.add_out_pt(edge, top);
                self.t_edge[edge].out_idx = UNASSIGNED;
            }

            self.t_edge.delete_from_list(edge, true);

            if is_pair_assigned {
                self.add_out_pt(max_pair, top);
                self.t_edge[max_pair].out_idx = UNASSIGNED;
            }

            self.t_edge.delete_from_list(max_pair, true);
        } else {
            return Err(ClipperError::MaximaPairing { x: top.x, y: top.y });
        }

        Ok(())
    }
}
