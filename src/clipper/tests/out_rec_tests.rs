use crate::clipper::constants::UNASSIGNED;
use crate::clipper::enums::Direction;
use crate::clipper::out_rec::OutRec;
use crate::clipper::poly_tree::PolyTree;
use crate::geometry::point::Point64;
use crate::geometry::polygon::{area, make_path, PointInPolygonResult};

/// Builds a record whose chain follows `coords` through `next`.
fn chain(out_rec: &mut OutRec, coords: &[i64], is_open: bool) -> usize {
    let path = make_path(coords);
    let (rec, _) = out_rec.create(path[0], is_open);

    for pt in path.iter().skip(1) {
        out_rec.add_out_pt(rec, *pt, false);
    }

    rec
}

#[test]
fn test_add_out_pt_skips_repeated_ends() {
    let mut out_rec = OutRec::new(false, false);
    let (rec, first) = out_rec.create(Point64::new(0, 0), false);

    assert_eq!(out_rec.add_out_pt(rec, Point64::new(0, 0), false), first);

    let front = out_rec.add_out_pt(rec, Point64::new(10, 0), true);

    assert_eq!(out_rec.record(rec).pts, front);
    assert_eq!(out_rec.add_out_pt(rec, Point64::new(10, 0), true), front);
    assert_eq!(out_rec.point_count(out_rec.record(rec).pts), 2);
    assert_eq!(out_rec.last_out_pt(rec, Direction::Left), front);
    assert_eq!(out_rec.last_out_pt(rec, Direction::Right), first);
}

#[test]
fn test_chain_area_matches_exported_path() {
    let mut out_rec = OutRec::new(false, false);
    let rec = chain(&mut out_rec, &[0, 0, 100, 0, 100, 100, 0, 100], false);

    assert_eq!(out_rec.area(rec), -10000.0);

    let exported = out_rec.export(rec);

    assert_eq!(exported, make_path(&[0, 100, 100, 100, 100, 0, 0, 0]));
    assert_eq!(area(&exported), out_rec.area(rec));

    out_rec.reverse_links(out_rec.record(rec).pts);

    assert_eq!(out_rec.area(rec), 10000.0);
    assert_eq!(out_rec.chain_area(UNASSIGNED), 0.0);
}

#[test]
fn test_point_in_chain() {
    let mut out_rec = OutRec::new(false, false);
    let rec = chain(&mut out_rec, &[0, 0, 100, 0, 100, 100, 0, 100], false);
    let pts = out_rec.record(rec).pts;

    assert_eq!(
        out_rec.point_in_chain(&Point64::new(50, 50), pts),
        PointInPolygonResult::Inside
    );
    assert_eq!(
        out_rec.point_in_chain(&Point64::new(150, 50), pts),
        PointInPolygonResult::Outside
    );
    assert_eq!(
        out_rec.point_in_chain(&Point64::new(100, 50), pts),
        PointInPolygonResult::OnBoundary
    );
}

#[test]
fn test_poly2_contains_poly1() {
    let mut out_rec = OutRec::new(false, false);
    let outer = chain(&mut out_rec, &[0, 0, 100, 0, 100, 100, 0, 100], false);
    let inner = chain(&mut out_rec, &[0, 0, 50, 25, 25, 50], false);
    let apart = chain(&mut out_rec, &[200, 0, 300, 0, 300, 100], false);

    let outer_pts = out_rec.record(outer).pts;

    // the shared corner is skipped, the next vertex decides
    assert!(out_rec.poly2_contains_poly1(out_rec.record(inner).pts, outer_pts));
    assert!(!out_rec.poly2_contains_poly1(out_rec.record(apart).pts, outer_pts));
}

#[test]
fn test_fixup_removes_collinear_vertices() {
    let coords = [0, 0, 50, 0, 100, 0, 100, 100, 0, 100];

    let mut out_rec = OutRec::new(false, false);
    let rec = chain(&mut out_rec, &coords, false);
    out_rec.fixup_outputs();
    assert_eq!(out_rec.point_count(out_rec.record(rec).pts), 4);

    let mut out_rec = OutRec::new(false, true);
    let rec = chain(&mut out_rec, &coords, false);
    out_rec.fixup_outputs();
    assert_eq!(out_rec.point_count(out_rec.record(rec).pts), 5);
}

#[test]
fn test_fixup_drops_degenerate_chains() {
    let mut out_rec = OutRec::new(false, false);
    let flat = chain(&mut out_rec, &[0, 0, 10, 10, 20, 20], false);
    let line = chain(&mut out_rec, &[0, 0, 10, 0, 20, 5], true);

    out_rec.fixup_outputs();

    assert_eq!(out_rec.record(flat).pts, UNASSIGNED);
    assert_eq!(out_rec.point_count(out_rec.record(line).pts), 3);
}

#[test]
fn test_fixup_keeps_polyline_ends() {
    let mut out_rec = OutRec::new(false, false);
    let line = chain(&mut out_rec, &[0, 0, 10, 0, 20, 5, 30, 5], true);
    let head = out_rec.record(line).pts;
    let tail = out_rec.prev(head);

    out_rec.dup_out_pt(head, true);
    out_rec.dup_out_pt(tail, true);

    assert_eq!(out_rec.point_count(out_rec.record(line).pts), 6);

    out_rec.fixup_outputs();

    assert_eq!(out_rec.point_count(out_rec.record(line).pts), 4);
    assert_eq!(out_rec.export(line), make_path(&[30, 5, 20, 5, 10, 0, 0, 0]));
}

#[test]
fn test_fixup_drops_collapsed_polyline() {
    let mut out_rec = OutRec::new(false, false);
    let line = chain(&mut out_rec, &[5, 5], true);

    out_rec.dup_out_pt(out_rec.record(line).pts, true);
    out_rec.fixup_outputs();

    assert_eq!(out_rec.record(line).pts, UNASSIGNED);
}

#[test]
fn test_append_polygon_forwards_merged_record() {
    let mut out_rec = OutRec::new(false, false);
    let rec1 = chain(&mut out_rec, &[0, 0, 10, 0], false);
    let rec2 = chain(&mut out_rec, &[0, 10, 10, 10], false);

    out_rec.append_polygon(rec1, rec2, Direction::Left, Direction::Right);

    assert_eq!(out_rec.get_out_rec(rec2), rec1);
    assert_eq!(out_rec.record(rec2).pts, UNASSIGNED);
    assert_eq!(out_rec.record(rec2).first_left, rec1);
    assert_eq!(out_rec.point_count(out_rec.record(rec1).pts), 4);
}

#[test]
fn test_fix_orientations_follows_hole_state() {
    let mut out_rec = OutRec::new(false, false);
    let outer = chain(&mut out_rec, &[0, 0, 100, 0, 100, 100, 0, 100], false);
    let hole = chain(&mut out_rec, &[25, 25, 25, 75, 75, 75, 75, 25], false);

    out_rec.record_mut(hole).is_hole = true;
    out_rec.fix_orientations();

    assert!(out_rec.area(outer) > 0.0);
    assert!(out_rec.area(hole) < 0.0);
}

#[test]
fn test_build_result_nests_holes() {
    let mut out_rec = OutRec::new(false, false);

    chain(&mut out_rec, &[0, 0, 0, 100, 100, 100, 100, 0], false);

    let hole = chain(&mut out_rec, &[25, 25, 75, 25, 75, 75, 25, 75], false);
    let far = chain(&mut out_rec, &[500, 0, 500, 200, 700, 200, 700, 0], false);

    chain(&mut out_rec, &[300, 0, 310, 0], false);
    chain(&mut out_rec, &[-10, -10, 20, 20], true);

    // a stale owner from the sweep does not decide the parent
    out_rec.record_mut(hole).is_hole = true;
    out_rec.record_mut(hole).first_left = far;

    let mut tree = PolyTree::new();
    let mut open_paths = Vec::new();

    out_rec.build_result(&mut tree, &mut open_paths);

    assert_eq!(tree.total_count(), 3);
    assert_eq!(tree.area(), 47500.0);
    assert_eq!(open_paths, vec![make_path(&[20, 20, -10, -10])]);
    assert_eq!(tree.root().child_count(), 2);

    let top = tree.root().get_child(0).unwrap();

    assert!(!top.is_hole());
    assert_eq!(top.child_count(), 1);
    assert!(top.get_child(0).unwrap().is_hole());
    assert_eq!(tree.root().get_child(1).unwrap().child_count(), 0);
}

#[test]
fn test_build_result_never_leaves_a_hole_at_the_root() {
    let mut out_rec = OutRec::new(false, false);

    // wound as a hole but enclosed by nothing
    chain(&mut out_rec, &[0, 0, 100, 0, 100, 100, 0, 100], false);

    let mut tree = PolyTree::new();

    out_rec.build_result(&mut tree, &mut Vec::new());

    let top = tree.root().get_child(0).unwrap();

    assert!(!top.is_hole());
    assert_eq!(top.area(), 10000.0);
}
