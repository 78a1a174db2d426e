use crate::clipper::clipper_wrapper::union;
use crate::clipper::enums::FillRule;
use crate::clipper::join::{Join, JoinList};
use crate::clipper::out_rec::OutRec;
use crate::geometry::point::Point64;
use crate::geometry::polygon::{area, make_path};

#[test]
fn test_join_list_bookkeeping() {
    let mut joins = JoinList::new();

    joins.add_join(0, 1, Point64::new(5, 5));
    joins.add_ghost(2, Point64::new(7, 7));

    assert_eq!(joins.len(), 1);
    assert_eq!(joins.ghosts().len(), 1);
    assert_eq!(joins.ghosts()[0].off_pt, Point64::new(7, 7));

    joins.clear_ghosts();

    assert!(joins.ghosts().is_empty());
    assert!(!joins.is_empty());

    joins.clear();

    assert!(joins.is_empty());
}

#[test]
fn test_touching_records_stay_apart() {
    let mut out_rec = OutRec::new(false, false);
    let (rec1, _) = out_rec.create(Point64::new(0, 0), false);
    let op1 = out_rec.add_out_pt(rec1, Point64::new(100, 0), false);
    out_rec.add_out_pt(rec1, Point64::new(50, 50), false);

    let (rec2, _) = out_rec.create(Point64::new(200, 0), false);
    let op2 = out_rec.add_out_pt(rec2, Point64::new(100, 0), false);
    out_rec.add_out_pt(rec2, Point64::new(150, 50), false);

    let mut join = Join::new(op1, op2, Point64::new(100, 0));

    // a single shared vertex is not a common edge
    join.join_common_edges(&mut out_rec);

    assert_eq!(out_rec.get_out_rec(rec2), rec2);
    assert_eq!(out_rec.point_count(out_rec.record(rec1).pts), 3);
    assert_eq!(out_rec.point_count(out_rec.record(rec2).pts), 3);
}

#[test]
fn test_shared_vertical_edge_merges() {
    let subjects = vec![make_path(&[0, 0, 100, 0, 100, 100, 0, 100])];
    let clips = vec![make_path(&[100, 0, 200, 0, 200, 100, 100, 100])];
    let result = union(&subjects, &clips, FillRule::NonZero).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].len(), 4);
    assert_eq!(area(&result[0]), 20000.0);
}

#[test]
fn test_shared_horizontal_edge_merges() {
    let subjects = vec![make_path(&[0, 0, 100, 0, 100, 100, 0, 100])];
    let clips = vec![make_path(&[0, 100, 100, 100, 100, 200, 0, 200])];
    let result = union(&subjects, &clips, FillRule::NonZero).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].len(), 4);
    assert_eq!(area(&result[0]), 20000.0);
}

#[test]
fn test_partially_shared_edge_merges() {
    let subjects = vec![make_path(&[0, 0, 100, 0, 100, 100, 0, 100])];
    let clips = vec![make_path(&[100, 50, 200, 50, 200, 150, 100, 150])];
    let result = union(&subjects, &clips, FillRule::NonZero).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].len(), 8);
    assert_eq!(area(&result[0]), 20000.0);
}
