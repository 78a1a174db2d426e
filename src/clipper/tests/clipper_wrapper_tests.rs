use crate::clipper::clipper_wrapper::{
    boolean_op, difference, intersect, union, xor, ClipperWrapper, ClipperWrapperD,
};
use crate::clipper::enums::{ClipType, FillRule};
use crate::clipper_config::ClipperConfig;
use crate::error::ClipperError;
use crate::geometry::point::Path64;
use crate::geometry::polygon::{area, area_paths, make_path, make_path_d};
use approx::assert_abs_diff_eq;

fn square(x: i64, y: i64, size: i64) -> Path64 {
    make_path(&[x, y, x + size, y, x + size, y + size, x, y + size])
}

#[test]
fn test_boolean_functions() {
    let subjects = vec![square(0, 0, 100)];
    let clips = vec![square(50, 50, 100)];

    assert_eq!(area_paths(&intersect(&subjects, &clips, FillRule::NonZero).unwrap()), 2500.0);
    assert_eq!(area_paths(&union(&subjects, &clips, FillRule::NonZero).unwrap()), 17500.0);
    assert_eq!(area_paths(&difference(&subjects, &clips, FillRule::NonZero).unwrap()), 7500.0);
    assert_eq!(area_paths(&xor(&subjects, &clips, FillRule::NonZero).unwrap()), 15000.0);
    assert_eq!(
        boolean_op(ClipType::Union, FillRule::EvenOdd, &subjects, &[]).unwrap(),
        union(&subjects, &[], FillRule::EvenOdd).unwrap()
    );
}

#[test]
fn test_wrapper_runs_several_operations() {
    let mut wrapper = ClipperWrapper::default();

    wrapper.add_subject(&[square(0, 0, 100)]).unwrap();
    wrapper.add_clip(&[square(50, 50, 100)]).unwrap();

    let (tree, open_paths) = wrapper.execute(ClipType::Intersection, FillRule::NonZero).unwrap();

    assert_eq!(tree.area(), 2500.0);
    assert!(open_paths.is_empty());

    let (paths, _) = wrapper.execute_paths(ClipType::Difference, FillRule::NonZero).unwrap();

    assert_eq!(paths.len(), 1);
    assert_eq!(area(&paths[0]), 7500.0);

    wrapper.clear();

    let (tree, _) = wrapper.execute(ClipType::Union, FillRule::NonZero).unwrap();

    assert!(tree.is_empty());
}

#[test]
fn test_wrapper_open_subjects() {
    let mut wrapper = ClipperWrapper::default();

    wrapper.add_open_subject(&[make_path(&[-100, 20, 200, 80])]).unwrap();
    wrapper.add_clip(&[square(0, 0, 100)]).unwrap();

    let (closed, open_paths) = wrapper.execute_paths(ClipType::Difference, FillRule::NonZero).unwrap();

    assert!(closed.is_empty());
    assert_eq!(open_paths.len(), 2);
}

#[test]
fn test_wrapper_open_subject_with_bends() {
    let line = make_path(&[50, -50, 50, 50, 150, 40, 160, 90, 60, 95, 60, 250]);
    let mut wrapper = ClipperWrapper::default();

    wrapper.add_open_subject(&[line]).unwrap();
    wrapper.add_clip(&[square(0, 0, 100)]).unwrap();

    let (_, outside) = wrapper.execute_paths(ClipType::Difference, FillRule::NonZero).unwrap();
    let mut expected = make_path(&[100, 45, 150, 40, 160, 90, 100, 93]);

    assert_eq!(outside.len(), 3);

    let bend = outside.iter().find(|path| path.len() == 4).unwrap();

    if bend[0] != expected[0] {
        expected.reverse();
    }

    assert_eq!(bend, &expected);
}

#[test]
fn test_wrapper_from_packed_config() {
    let config = ClipperConfig {
        reverse_solution: true,
        preserve_collinear: true,
        check_containment: false,
        precision: -3,
    };
    let wrapper = ClipperWrapper::from_packed(config.serialize());

    assert_eq!(wrapper.configuration(), &config);
}

#[test]
fn test_rejected_path_keeps_earlier_ones() {
    let mut wrapper = ClipperWrapper::default();
    let huge = i64::MAX / 2 + 1;
    let result = wrapper.add_subject(&[
        square(0, 0, 100),
        make_path(&[0, 0, huge, 0, 0, 10]),
        square(500, 500, 100),
    ]);

    assert_eq!(result, Err(ClipperError::CoordinateOutOfRange { x: huge, y: 0 }));

    let (paths, _) = wrapper.execute_paths(ClipType::Union, FillRule::NonZero).unwrap();

    assert_eq!(paths.len(), 1);
    assert_eq!(area(&paths[0]), 10000.0);
}

#[test]
fn test_precision_bounds() {
    let config = ClipperConfig {
        precision: 9,
        ..ClipperConfig::default()
    };

    assert_eq!(
        ClipperWrapperD::new(config).err(),
        Some(ClipperError::PrecisionOutOfRange { precision: 9 })
    );

    let config = ClipperConfig {
        precision: -8,
        ..ClipperConfig::default()
    };

    assert_abs_diff_eq!(ClipperWrapperD::new(config).unwrap().scale(), 1e-8, epsilon = 1e-20);
}

#[test]
fn test_float_wrapper_scales_both_ways() {
    let mut wrapper = ClipperWrapperD::new(ClipperConfig::default()).unwrap();

    assert_eq!(wrapper.scale(), 100.0);

    wrapper
        .add_subject(&[make_path_d(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0])])
        .unwrap();
    wrapper
        .add_clip(&[make_path_d(&[0.5, 0.5, 1.5, 0.5, 1.5, 1.5, 0.5, 1.5])])
        .unwrap();

    let (tree, _) = wrapper.execute(ClipType::Intersection, FillRule::NonZero).unwrap();

    // the tree stays in engine units
    assert_eq!(tree.area(), 2500.0);

    let (paths, _) = wrapper.execute_paths(ClipType::Intersection, FillRule::NonZero).unwrap();

    assert_eq!(paths.len(), 1);
    assert_abs_diff_eq!(area(&paths[0]), 0.25, epsilon = 1e-9);
}

#[test]
fn test_float_wrapper_open_paths() {
    let mut wrapper = ClipperWrapperD::new(ClipperConfig::default()).unwrap();

    wrapper
        .add_open_subject(&[make_path_d(&[-1.0, 0.2, 2.0, 0.8])])
        .unwrap();
    wrapper
        .add_clip(&[make_path_d(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0])])
        .unwrap();

    let (_, open_paths) = wrapper.execute_paths(ClipType::Intersection, FillRule::NonZero).unwrap();
    let mut ends = open_paths[0].clone();

    ends.sort_by(|a, b| a.x.total_cmp(&b.x));

    assert_eq!(ends.len(), 2);
    assert_abs_diff_eq!(ends[0].x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ends[0].y, 0.4, epsilon = 1e-9);
    assert_abs_diff_eq!(ends[1].x, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ends[1].y, 0.6, epsilon = 1e-9);
}

#[test]
fn test_float_wrapper_rejects_huge_values() {
    let mut wrapper = ClipperWrapperD::new(ClipperConfig::default()).unwrap();
    let result = wrapper.add_subject(&[make_path_d(&[0.0, 0.0, 1e300, 0.0, 0.0, 1.0])]);

    assert_eq!(result, Err(ClipperError::ScaledCoordinateOutOfRange { value: 1e300 }));
}
