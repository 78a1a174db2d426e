use crate::clipper::constants::HI_RANGE;
use crate::error::{ClipperError, ClipperResult};
use crate::geometry::point::{Path64, PathD, Paths64, PathsD, Point, Point64, PointD};
use crate::geometry::rect::path_bounds;
use crate::utils::number::Number;
use crate::utils::round::round_to_i64;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum PointInPolygonResult {
    Inside,
    Outside,
    OnBoundary,
}

/// Winding of a closed path in a y-up frame.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Degenerate,
}

pub fn area<T: Number>(path: &[Point<T>]) -> f64 {
    T::polygon_area(path)
}

pub fn area_paths<T: Number>(paths: &[Vec<Point<T>>]) -> f64 {
    paths.iter().map(|path| T::polygon_area(path)).sum()
}

pub fn orientation<T: Number>(path: &[Point<T>]) -> Orientation {
    let value = T::polygon_area(path);

    if value > 0.0 {
        Orientation::CounterClockwise
    } else if value < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Degenerate
    }
}

#[inline(always)]
pub fn is_positive<T: Number>(path: &[Point<T>]) -> bool {
    T::polygon_area(path) > 0.0
}

/// Crossing-number classification over a closed ring of edges. Points on an
/// edge or vertex are reported as `OnBoundary`.
pub fn classify_point<T, I>(point: &Point<T>, edges: I) -> PointInPolygonResult
where
    T: Number,
    I: Iterator<Item = (Point<T>, Point<T>)>,
{
    let mut is_inside = false;

    for (curr, next) in edges {
        if next.y == point.y
            && (next.x == point.x
                || (curr.y == point.y && ((next.x > point.x) == (curr.x < point.x))))
        {
            return PointInPolygonResult::OnBoundary;
        }

        if (curr.y < point.y) == (next.y < point.y) {
            continue;
        }

        if curr.x >= point.x && next.x > point.x {
            is_inside = !is_inside;
        } else if curr.x >= point.x || next.x > point.x {
            let side = T::cross_sign(point, &curr, &next);

            if side == 0 {
                return PointInPolygonResult::OnBoundary;
            }

            if (side > 0) == (next.y > curr.y) {
                is_inside = !is_inside;
            }
        }
    }

    if is_inside {
        PointInPolygonResult::Inside
    } else {
        PointInPolygonResult::Outside
    }
}

pub fn point_in_polygon<T: Number>(point: &Point<T>, path: &[Point<T>]) -> PointInPolygonResult {
    let count = path.len();

    if count < 3 {
        return PointInPolygonResult::Outside;
    }

    let edges = (0..count).map(|i| (path[i], path[(i + 1) % count]));

    classify_point(point, edges)
}

/// Whether `inner` lies within `outer`, for two paths that may touch but do
/// not cross. A rounded vertex can stray to the wrong side of a nearby edge,
/// so a single vertex never decides: two more Outside than Inside (or the
/// reverse) does, and a tie falls back to the middle of `inner`'s bounds.
pub fn path_inside_path(inner: &[Point64], outer: &[Point64]) -> bool {
    let mut outside_count: i32 = 0;

    for point in inner.iter() {
        match point_in_polygon(point, outer) {
            PointInPolygonResult::Outside => outside_count += 1,
            PointInPolygonResult::Inside => outside_count -= 1,
            PointInPolygonResult::OnBoundary => continue,
        }

        if outside_count.abs() > 1 {
            return outside_count < 0;
        }
    }

    let mid_point = path_bounds(inner).mid_point();

    point_in_polygon(&mid_point, outer) != PointInPolygonResult::Outside
}

fn distance_sq_to_segment(point: &Point64, start: &Point64, end: &Point64) -> f64 {
    let (px, py) = (point.x as f64, point.y as f64);
    let (sx, sy) = (start.x as f64, start.y as f64);
    let (dx, dy) = (end.x as f64 - sx, end.y as f64 - sy);
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq == 0.0 {
        0.0
    } else {
        (((px - sx) * dx + (py - sy) * dy) / length_sq).clamp(0.0, 1.0)
    };
    let (ex, ey) = (sx + t * dx - px, sy + t * dy - py);

    ex * ex + ey * ey
}

/// Squared distance from `point` to the nearest edge of the closed `path`.
pub fn distance_sq_to_path(point: &Point64, path: &[Point64]) -> f64 {
    let count = path.len();

    (0..count)
        .map(|i| distance_sq_to_segment(point, &path[i], &path[(i + 1) % count]))
        .fold(f64::INFINITY, f64::min)
}

pub fn reverse_path<T: Number>(path: &[Point<T>]) -> Vec<Point<T>> {
    path.iter().rev().copied().collect()
}

pub fn reverse_paths<T: Number>(paths: &[Vec<Point<T>>]) -> Vec<Vec<Point<T>>> {
    paths.iter().map(|path| reverse_path(path)).collect()
}

pub fn translate_path<T: Number>(path: &[Point<T>], dx: T, dy: T) -> Vec<Point<T>> {
    path.iter().map(|point| point.translated(dx, dy)).collect()
}

pub fn translate_paths<T: Number>(paths: &[Vec<Point<T>>], dx: T, dy: T) -> Vec<Vec<Point<T>>> {
    paths
        .iter()
        .map(|path| translate_path(path, dx, dy))
        .collect()
}

/// Builds a path from `x0, y0, x1, y1, ...`. A trailing odd value is ignored.
pub fn make_path(coords: &[i64]) -> Path64 {
    coords
        .chunks_exact(2)
        .map(|pair| Point64::new(pair[0], pair[1]))
        .collect()
}

pub fn make_path_d(coords: &[f64]) -> PathD {
    coords
        .chunks_exact(2)
        .map(|pair| PointD::new(pair[0], pair[1]))
        .collect()
}

fn scale_value(value: f64, scale: f64) -> ClipperResult<i64> {
    let scaled = value * scale;

    if !scaled.is_finite() || scaled.abs() > HI_RANGE as f64 {
        return Err(ClipperError::ScaledCoordinateOutOfRange { value });
    }

    Ok(round_to_i64(scaled))
}

pub fn scale_path_to_64(path: &[PointD], scale: f64) -> ClipperResult<Path64> {
    path.iter()
        .map(|point| {
            Ok(Point64::new(
                scale_value(point.x, scale)?,
                scale_value(point.y, scale)?,
            ))
        })
        .collect()
}

pub fn scale_paths_to_64(paths: &[PathD], scale: f64) -> ClipperResult<Paths64> {
    paths
        .iter()
        .map(|path| scale_path_to_64(path, scale))
        .collect()
}

pub fn scale_path_to_d(path: &[Point64], scale: f64) -> PathD {
    let inv_scale = 1.0 / scale;

    path.iter()
        .map(|point| PointD::new(point.x as f64 * inv_scale, point.y as f64 * inv_scale))
        .collect()
}

pub fn scale_paths_to_d(paths: &[Path64], scale: f64) -> PathsD {
    paths
        .iter()
        .map(|path| scale_path_to_d(path, scale))
        .collect()
}
