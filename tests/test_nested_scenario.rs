use approx::assert_abs_diff_eq;
use serde::Deserialize;
use wasm_clipper::{
    area_paths, make_path, point_in_polygon, ClipType, ClipperConfig, ClipperWrapper, FillRule,
    Path64, PolyPath, Point64, PointInPolygonResult,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioInput {
    subjects: Vec<Vec<i64>>,
    clips: Vec<Vec<i64>>,
    clip_type: u8,
    fill_rule: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioOutput {
    area: f64,
    min_area: f64,
    count: usize,
    levels: Vec<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubjectPoint {
    point: [i64; 2],
    inside_count: usize,
}

#[derive(Debug, Deserialize)]
struct ResultPoint {
    point: [i64; 2],
    inside: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Scenario {
    input: ScenarioInput,
    output: ScenarioOutput,
    subject_points: Vec<SubjectPoint>,
    result_points: Vec<ResultPoint>,
}

fn load_scenario() -> Scenario {
    serde_json::from_str(include_str!("__data__/nested_scenario.json"))
        .expect("Failed to parse scenario data")
}

fn to_paths(coords: &[Vec<i64>]) -> Vec<Path64> {
    coords.iter().map(|path| make_path(path)).collect()
}

fn collect_levels(path: PolyPath<'_>, result: &mut Vec<usize>) {
    for child in path.children() {
        result.push(child.level());
        collect_levels(child, result);
    }
}

#[test]
fn test_nested_subjects_against_clip() {
    let scenario = load_scenario();
    let subjects = to_paths(&scenario.input.subjects);
    let mut wrapper = ClipperWrapper::new(ClipperConfig::default());

    wrapper.add_subject(&subjects).unwrap();
    wrapper.add_clip(&to_paths(&scenario.input.clips)).unwrap();

    let clip_type = ClipType::try_from(scenario.input.clip_type).unwrap();
    let fill_rule = FillRule::try_from(scenario.input.fill_rule).unwrap();
    let (tree, open_paths) = wrapper.execute(clip_type, fill_rule).unwrap();

    assert!(open_paths.is_empty());
    assert_eq!(tree.containment_failures(), 0);
    assert_eq!(tree.total_count(), scenario.output.count);
    assert!(tree.area() > scenario.output.min_area);
    assert_abs_diff_eq!(tree.area(), scenario.output.area, epsilon = 1e-4);
    assert_abs_diff_eq!(tree.area(), area_paths(&tree.to_paths()), epsilon = 1e-4);

    let mut levels = Vec::new();

    collect_levels(tree.root(), &mut levels);

    assert_eq!(levels, scenario.output.levels);

    for sample in scenario.subject_points.iter() {
        let pt = Point64::new(sample.point[0], sample.point[1]);
        let count = subjects
            .iter()
            .filter(|path| point_in_polygon(&pt, path) == PointInPolygonResult::Inside)
            .count();

        assert_eq!(count, sample.inside_count, "subjects at {}", pt);
    }

    for sample in scenario.result_points.iter() {
        let pt = Point64::new(sample.point[0], sample.point[1]);

        assert!(tree.containment_count(&pt) >= 0, "count at {}", pt);
        assert_eq!(tree.contains_point(&pt), sample.inside, "result at {}", pt);
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let scenario = load_scenario();
    let subjects = to_paths(&scenario.input.subjects);
    let clips = to_paths(&scenario.input.clips);

    let run = || {
        let mut wrapper = ClipperWrapper::default();

        wrapper.add_subject(&subjects).unwrap();
        wrapper.add_clip(&clips).unwrap();
        wrapper
            .execute(ClipType::Intersection, FillRule::NonZero)
            .unwrap()
    };

    let (first, _) = run();

    for _ in 0..5 {
        let (tree, _) = run();

        assert_eq!(tree, first);
        assert_eq!(tree.to_paths(), first.to_paths());
        assert_eq!(tree.area().to_bits(), first.area().to_bits());
    }
}

#[test]
fn test_packed_buffers_are_identical() {
    let subjects = wasm_clipper::pack_paths(&[
        wasm_clipper::make_path_d(&[0.0, 0.0, 7.0, 0.0, 7.0, 7.0, 0.0, 7.0]),
        wasm_clipper::make_path_d(&[2.0, 2.0, 2.0, 5.0, 5.0, 5.0, 5.0, 2.0]),
    ]);
    let clips = wasm_clipper::pack_paths(&[wasm_clipper::make_path_d(&[
        -0.5, -0.5, 7.5, -0.5, 7.5, 6.5, -0.5, 6.5,
    ])]);
    let config = ClipperConfig::default().serialize();
    let first = wasm_clipper::boolean_op_f64(config, 0, 1, &subjects, &clips);

    assert!(!first.is_empty());

    for _ in 0..5 {
        let next = wasm_clipper::boolean_op_f64(config, 0, 1, &subjects, &clips);
        let first_bits: Vec<u64> = first.iter().map(|value| value.to_bits()).collect();
        let next_bits: Vec<u64> = next.iter().map(|value| value.to_bits()).collect();

        assert_eq!(next_bits, first_bits);
    }

    let paths = wasm_clipper::unpack_paths(&first).unwrap();

    assert_eq!(paths.len(), 2);
    assert_abs_diff_eq!(wasm_clipper::area_paths(&paths), 45.5 - 9.0, epsilon = 1e-6);
}
