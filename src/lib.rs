use wasm_bindgen::prelude::*;

pub mod clipper;
pub mod clipper_config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod utils;

pub use crate::clipper::{
    boolean_op, difference, intersect, poly_tree_to_paths, union, xor, ClipType, ClipperWrapper,
    ClipperWrapperD, FillRule, PolyPath, PolyTree, PolyType,
};
pub use crate::clipper_config::ClipperConfig;
pub use crate::error::{ClipperError, ClipperResult};
pub use crate::geometry::point::{Path64, PathD, Paths64, PathsD, Point, Point64, PointD};
pub use crate::geometry::polygon::{
    area, area_paths, is_positive, make_path, make_path_d, orientation, point_in_polygon,
    reverse_path, reverse_paths, scale_paths_to_64, scale_paths_to_d, translate_path,
    translate_paths, Orientation, PointInPolygonResult,
};
pub use crate::geometry::rect::{bounds, Rect, Rect64, RectD};
pub use crate::utils::logger::init_logger;

#[wasm_bindgen]
pub fn polygon_area(points: &[f64]) -> f64 {
    area(&make_path_d(points))
}

#[wasm_bindgen]
pub fn init_logger_wasm(level: u8) {
    let filter = match level {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    init_logger(filter);
}

/// A header entry as an index no larger than `limit`. Negative, fractional
/// and non-finite values are rejected.
fn read_index(value: f64, limit: usize) -> Option<usize> {
    let is_valid =
        value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= limit as f64;

    is_valid.then_some(value as usize)
}

/// Reads `[m, offset_0, .., offset_m-1, x0, y0, x1, y1, ..]`, offsets being
/// relative to the start of the coordinate section.
pub fn unpack_paths(mem_seg: &[f64]) -> Option<PathsD> {
    let count = read_index(*mem_seg.first()?, mem_seg.len() - 1)?;
    let data = &mem_seg[1 + count..];
    let mut result = Vec::with_capacity(count);

    for i in 0..count {
        let start = read_index(mem_seg[1 + i], data.len())?;
        let end = if i + 1 < count {
            read_index(mem_seg[2 + i], data.len())?
        } else {
            data.len()
        };

        if start > end || (end - start) % 2 != 0 {
            return None;
        }

        result.push(make_path_d(&data[start..end]));
    }

    Some(result)
}

pub fn pack_paths(paths: &[PathD]) -> Vec<f64> {
    let count = paths.len();
    let total_points: usize = paths.iter().map(|path| path.len()).sum();
    let header_len = 1 + count;
    let mut out = Vec::with_capacity(header_len + total_points * 2);

    out.push(count as f64);

    let mut running: usize = 0;

    for path in paths {
        out.push(running as f64);
        running += path.len() * 2;
    }

    for path in paths {
        for point in path {
            out.push(point.x);
            out.push(point.y);
        }
    }

    out
}

/// Runs one Boolean operation over packed float paths and returns the packed
/// closed result (solids and holes). Malformed input yields an empty buffer.
#[wasm_bindgen]
pub fn boolean_op_f64(
    packed_config: u32,
    clip_type: u8,
    fill_rule: u8,
    subjects: &[f64],
    clips: &[f64],
) -> Vec<f64> {
    let run = || -> Option<PathsD> {
        let clip_type = ClipType::try_from(clip_type).ok()?;
        let fill_rule = FillRule::try_from(fill_rule).ok()?;
        let subjects = unpack_paths(subjects)?;
        let clips = unpack_paths(clips)?;

        let result = (|| -> ClipperResult<PathsD> {
            let mut wrapper = ClipperWrapperD::new(ClipperConfig::from_packed(packed_config))?;

            wrapper.add_subject(&subjects)?;
            wrapper.add_clip(&clips)?;

            Ok(wrapper.execute_paths(clip_type, fill_rule)?.0)
        })();

        match result {
            Ok(paths) => Some(paths),
            Err(err) => {
                log::warn!("boolean_op_f64: {}", err);
                None
            }
        }
    };

    run().map(|paths| pack_paths(&paths)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_and_unpack_paths() {
        let paths = vec![
            make_path_d(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0]),
            make_path_d(&[5.0, 5.0, 6.0, 5.0, 6.0, 6.0, 5.0, 6.0]),
        ];
        let packed = pack_paths(&paths);

        assert_eq!(&packed[..3], &[2.0, 0.0, 6.0]);
        assert_eq!(unpack_paths(&packed), Some(paths));
    }

    #[test]
    fn test_unpack_rejects_bad_offsets() {
        assert_eq!(unpack_paths(&[]), None);
        assert_eq!(unpack_paths(&[1.0, 3.0, 0.0, 0.0]), None);
        assert_eq!(unpack_paths(&[0.0]), Some(Vec::new()));
    }

    #[test]
    fn test_unpack_rejects_bad_headers() {
        assert_eq!(unpack_paths(&[f64::INFINITY]), None);
        assert_eq!(unpack_paths(&[f64::NEG_INFINITY, 0.0]), None);
        assert_eq!(unpack_paths(&[f64::NAN, 0.0]), None);
        assert_eq!(unpack_paths(&[-1.0, 0.0]), None);
        assert_eq!(unpack_paths(&[1.5, 0.0, 0.0, 0.0]), None);
        assert_eq!(unpack_paths(&[1e300, 0.0]), None);
        assert_eq!(unpack_paths(&[usize::MAX as f64]), None);
        assert_eq!(unpack_paths(&[2.0, 0.0]), None);
        assert_eq!(unpack_paths(&[2.0, f64::NAN, 2.0, 0.0, 0.0, 1.0, 1.0]), None);
        assert_eq!(unpack_paths(&[2.0, 0.0, 0.5, 0.0, 0.0, 1.0, 1.0]), None);
        assert_eq!(unpack_paths(&[2.0, 0.0, 1e300, 0.0, 0.0, 1.0, 1.0]), None);
        assert_eq!(
            unpack_paths(&[2.0, 0.0, 2.0, 0.0, 0.0, 1.0, 1.0]),
            Some(vec![make_path_d(&[0.0, 0.0]), make_path_d(&[1.0, 1.0])])
        );
    }

    #[test]
    fn test_boolean_op_f64_rejects_bad_headers() {
        let config = ClipperConfig::default().serialize();
        let subject = pack_paths(&[make_path_d(&[0.0, 0.0, 10.0, 0.0, 10.0, 10.0])]);

        for header in [f64::INFINITY, f64::NAN, -1.0, 1e300] {
            let mut broken = subject.clone();

            broken[0] = header;

            assert!(boolean_op_f64(config, 0, 0, &broken, &subject).is_empty());
            assert!(boolean_op_f64(config, 0, 0, &subject, &broken).is_empty());
        }
    }

    #[test]
    fn test_boolean_op_f64_intersection() {
        let config = ClipperConfig::default().serialize();
        let subject = pack_paths(&[make_path_d(&[0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0])]);
        let clip = pack_paths(&[make_path_d(&[5.0, 5.0, 15.0, 5.0, 15.0, 15.0, 5.0, 15.0])]);
        let result = boolean_op_f64(
            config,
            ClipType::Intersection as u8,
            FillRule::NonZero as u8,
            &subject,
            &clip,
        );
        let paths = unpack_paths(&result).unwrap_or_default();

        assert_eq!(paths.len(), 1);
        assert!((area(&paths[0]) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_boolean_op_f64_rejects_unknown_clip_type() {
        let config = ClipperConfig::default().serialize();
        let subject = pack_paths(&[make_path_d(&[0.0, 0.0, 10.0, 0.0, 10.0, 10.0])]);

        assert!(boolean_op_f64(config, 9, 0, &subject, &subject).is_empty());
    }
}
