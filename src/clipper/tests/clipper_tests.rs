use crate::clipper::clipper::Clipper;
use crate::clipper::enums::{ClipType, FillRule, PolyType};
use crate::clipper::poly_tree::PolyTree;
use crate::clipper_config::ClipperConfig;
use crate::error::ClipperError;
use crate::geometry::point::{Path64, Paths64, Point64};
use crate::geometry::polygon::{area_paths, make_path};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestInput {
    subjects: Vec<Vec<i64>>,
    open_subjects: Vec<Vec<i64>>,
    clips: Vec<Vec<i64>>,
    clip_type: u8,
    fill_rule: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestOutput {
    area: f64,
    count: Option<usize>,
    open_count: usize,
}

#[derive(Debug, Deserialize)]
struct TestCase {
    id: String,
    input: TestInput,
    output: TestOutput,
}

#[derive(Debug, Deserialize)]
struct TestSuite {
    id: String,
    data: Vec<TestCase>,
}

#[derive(Debug, Deserialize)]
struct TestDataStructure {
    suites: Vec<TestSuite>,
}

fn load_test_data() -> TestDataStructure {
    serde_json::from_str(include_str!("../__data__/clipper.json"))
        .expect("Failed to parse clipper test data")
}

fn to_paths(coords: &[Vec<i64>]) -> Paths64 {
    coords.iter().map(|path| make_path(path)).collect()
}

fn run_case(case: &TestCase, config: ClipperConfig) -> (PolyTree, Paths64) {
    let input = &case.input;
    let mut clipper = Clipper::new(config);

    clipper
        .add_paths(&to_paths(&input.subjects), PolyType::Subject, true)
        .unwrap();
    clipper
        .add_paths(&to_paths(&input.open_subjects), PolyType::Subject, false)
        .unwrap();
    clipper
        .add_paths(&to_paths(&input.clips), PolyType::Clip, true)
        .unwrap();

    let clip_type = ClipType::try_from(input.clip_type).unwrap();
    let fill_rule = FillRule::try_from(input.fill_rule).unwrap();

    clipper.execute(clip_type, fill_rule).unwrap()
}

fn run_suite(suite_id: &str) {
    let test_data = load_test_data();
    let suite = test_data
        .suites
        .iter()
        .find(|s| s.id == suite_id)
        .unwrap_or_else(|| panic!("{} suite not found", suite_id));

    for case in suite.data.iter() {
        let (tree, open_paths) = run_case(case, ClipperConfig::default());
        let flattened = tree.to_paths();

        assert_eq!(tree.area(), case.output.area, "{}: tree area", case.id);
        assert_eq!(area_paths(&flattened), case.output.area, "{}: path area", case.id);
        assert_eq!(open_paths.len(), case.output.open_count, "{}: open paths", case.id);
        assert_eq!(tree.containment_failures(), 0, "{}: containment", case.id);

        if let Some(count) = case.output.count {
            assert_eq!(tree.total_count(), count, "{}: polygon count", case.id);
        }
    }
}

#[test]
fn test_overlapping_squares() {
    run_suite("overlapping-squares");
}

#[test]
fn test_fill_rules() {
    run_suite("fill-rules");
}

#[test]
fn test_topology() {
    run_suite("topology");
}

#[test]
fn test_slanted_crossings() {
    run_suite("slanted-crossings");
}

#[test]
fn test_open_subjects() {
    run_suite("open-subjects");
}

#[test]
fn test_reverse_solution_flips_every_sign() {
    let test_data = load_test_data();
    let config = ClipperConfig {
        reverse_solution: true,
        ..ClipperConfig::default()
    };

    for case in test_data.suites.iter().flat_map(|suite| suite.data.iter()) {
        let (tree, _) = run_case(case, config);

        assert_eq!(tree.area(), -case.output.area, "{}: reversed area", case.id);
    }
}

#[test]
fn test_hole_is_nested_under_its_outer() {
    let test_data = load_test_data();
    let case = test_data
        .suites
        .iter()
        .flat_map(|suite| suite.data.iter())
        .find(|case| case.id == "difference-makes-hole")
        .unwrap();
    let (tree, _) = run_case(case, ClipperConfig::default());

    assert_eq!(tree.root().child_count(), 1);

    let outer = tree.root().get_child(0).unwrap();
    let hole = outer.get_child(0).unwrap();

    assert!(!outer.is_hole());
    assert!(hole.is_hole());
    assert_eq!(hole.level(), 2);
    assert!(!tree.contains_point(&Point64::new(50, 50)));
    assert!(tree.contains_point(&Point64::new(10, 10)));
}

#[test]
fn test_open_line_is_cut_at_the_clip_boundary() {
    let mut clipper = Clipper::new(ClipperConfig::default());

    clipper
        .add_path(&make_path(&[-100, 20, 200, 80]), PolyType::Subject, false)
        .unwrap();
    clipper
        .add_path(&make_path(&[0, 0, 100, 0, 100, 100, 0, 100]), PolyType::Clip, true)
        .unwrap();

    assert!(clipper.has_open_paths());

    let (tree, open_paths) = clipper.execute(ClipType::Intersection, FillRule::NonZero).unwrap();
    let mut ends: Path64 = open_paths[0].clone();

    ends.sort_by_key(|pt| (pt.x, pt.y));

    assert!(tree.is_empty());
    assert_eq!(ends, make_path(&[0, 40, 100, 60]));
}

fn clip_open_path(line: &[i64], clip_type: ClipType) -> Paths64 {
    let mut clipper = Clipper::new(ClipperConfig::default());

    clipper.add_path(&make_path(line), PolyType::Subject, false).unwrap();
    clipper
        .add_path(&make_path(&[0, 0, 100, 0, 100, 100, 0, 100]), PolyType::Clip, true)
        .unwrap();

    let (_, open_paths) = clipper.execute(clip_type, FillRule::NonZero).unwrap();

    open_paths
}

/// Open results may run either way along the input but must keep its vertex order.
fn assert_same_polyline(actual: &Path64, expected: &Path64) {
    let mut reversed = expected.clone();

    reversed.reverse();

    assert!(
        actual == expected || *actual == reversed,
        "{:?} is not {:?} in either direction",
        actual,
        expected
    );
}

#[test]
fn test_open_polyline_keeps_vertex_order() {
    let outside = clip_open_path(&[-50, -50, 150, 150, 150, 300], ClipType::Difference);

    let tail: Vec<&Path64> = outside.iter().filter(|path| path.len() > 2).collect();

    assert_eq!(tail.len(), 1);
    assert_same_polyline(tail[0], &make_path(&[100, 100, 150, 150, 150, 300]));

    let inside = clip_open_path(&[-50, 50, 50, 50, 50, 150], ClipType::Intersection);

    assert_eq!(inside.len(), 1);
    assert_same_polyline(&inside[0], &make_path(&[0, 50, 50, 50, 50, 100]));
}

#[test]
fn test_open_clip_is_rejected() {
    let mut clipper = Clipper::new(ClipperConfig::default());
    let result = clipper.add_path(&make_path(&[0, 0, 10, 10]), PolyType::Clip, false);

    assert_eq!(result, Err(ClipperError::OpenClipPath));
}

#[test]
fn test_out_of_range_coordinate_is_rejected() {
    let mut clipper = Clipper::new(ClipperConfig::default());
    let huge = i64::MAX / 2 + 1;
    let result = clipper.add_path(&make_path(&[0, 0, huge, 0, 0, 10]), PolyType::Subject, true);

    assert_eq!(result, Err(ClipperError::CoordinateOutOfRange { x: huge, y: 0 }));
}

#[test]
fn test_degenerate_paths_are_ignored() {
    let mut clipper = Clipper::new(ClipperConfig::default());

    assert_eq!(
        clipper.add_path(&make_path(&[0, 0, 10, 10, 20, 20]), PolyType::Subject, true),
        Ok(false)
    );
    assert_eq!(clipper.add_path(&[], PolyType::Subject, true), Ok(false));

    let (tree, open_paths) = clipper.execute(ClipType::Union, FillRule::NonZero).unwrap();

    assert!(tree.is_empty());
    assert!(open_paths.is_empty());
}

#[test]
fn test_engine_can_execute_repeatedly() {
    let mut clipper = Clipper::new(ClipperConfig::default());

    clipper
        .add_path(&make_path(&[0, 0, 100, 0, 100, 100, 0, 100]), PolyType::Subject, true)
        .unwrap();
    clipper
        .add_path(&make_path(&[50, 50, 150, 50, 150, 150, 50, 150]), PolyType::Clip, true)
        .unwrap();

    let (first, _) = clipper.execute(ClipType::Intersection, FillRule::NonZero).unwrap();
    let (second, _) = clipper.execute(ClipType::Union, FillRule::NonZero).unwrap();
    let (third, _) = clipper.execute(ClipType::Intersection, FillRule::NonZero).unwrap();

    assert_eq!(first.area(), 2500.0);
    assert_eq!(second.area(), 17500.0);
    assert_eq!(first, third);
}
