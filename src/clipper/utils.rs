use crate::clipper::constants::{HI_RANGE, HORIZONTAL};
use crate::error::{ClipperError, ClipperResult};
use crate::geometry::point::Point64;

#[inline(always)]
fn delta(a: i64, b: i64) -> i128 {
    a as i128 - b as i128
}

/// True when segments `pt1-pt2` and `pt2-pt3` are collinear.
pub fn slopes_equal3(pt1: &Point64, pt2: &Point64, pt3: &Point64) -> bool {
    delta(pt1.y, pt2.y) * delta(pt2.x, pt3.x) == delta(pt1.x, pt2.x) * delta(pt2.y, pt3.y)
}

/// True when segments `pt1-pt2` and `pt3-pt4` are parallel.
pub fn slopes_equal4(pt1: &Point64, pt2: &Point64, pt3: &Point64, pt4: &Point64) -> bool {
    delta(pt1.y, pt2.y) * delta(pt3.x, pt4.x) == delta(pt1.x, pt2.x) * delta(pt3.y, pt4.y)
}

pub fn pt2_is_between_pt1_and_pt3(pt1: &Point64, pt2: &Point64, pt3: &Point64) -> bool {
    if pt1 == pt3 || pt1 == pt2 || pt3 == pt2 {
        false
    } else if pt1.x != pt3.x {
        (pt2.x > pt1.x) == (pt2.x < pt3.x)
    } else {
        (pt2.y > pt1.y) == (pt2.y < pt3.y)
    }
}

pub fn horz_segments_overlap(seg1a: i64, seg1b: i64, seg2a: i64, seg2b: i64) -> bool {
    let (seg1a, seg1b) = (seg1a.min(seg1b), seg1a.max(seg1b));
    let (seg2a, seg2b) = (seg2a.min(seg2b), seg2a.max(seg2b));

    seg1a < seg2b && seg2a < seg1b
}

/// Common open interval of `[a1, a2]` and `[b1, b2]`, either end order.
pub fn get_overlap(a1: i64, a2: i64, b1: i64, b2: i64) -> Option<(i64, i64)> {
    let (left, right) = if a1 < a2 {
        if b1 < b2 {
            (a1.max(b1), a2.min(b2))
        } else {
            (a1.max(b2), a2.min(b1))
        }
    } else if b1 < b2 {
        (a2.max(b1), a1.min(b2))
    } else {
        (a2.max(b2), a1.min(b1))
    };

    if left < right {
        Some((left, right))
    } else {
        None
    }
}

pub fn get_dx(pt1: &Point64, pt2: &Point64) -> f64 {
    if pt1.y == pt2.y {
        HORIZONTAL
    } else {
        (pt2.x - pt1.x) as f64 / (pt2.y - pt1.y) as f64
    }
}

pub fn range_test(point: &Point64) -> ClipperResult<()> {
    if point.x.unsigned_abs() > HI_RANGE as u64 || point.y.unsigned_abs() > HI_RANGE as u64 {
        return Err(ClipperError::CoordinateOutOfRange {
            x: point.x,
            y: point.y,
        });
    }

    Ok(())
}
