use crate::geometry::point::Point;
use crate::utils::round::ClipperRound;
use num_traits::{Bounded, FromPrimitive, Num, Signed, ToPrimitive};
use std::fmt::Debug;

pub trait Number:
    Num + Copy + PartialOrd + Bounded + FromPrimitive + ToPrimitive + Signed + ClipperRound + Debug
{
    fn min_num(self, other: Self) -> Self;
    fn max_num(self, other: Self) -> Self;
    /// Signed shoelace area, positive for counter-clockwise paths in a y-up frame.
    fn polygon_area(path: &[Point<Self>]) -> f64;
    /// Sign of `(b - a) x (c - a)`; zero when the three points are collinear.
    fn cross_sign(a: &Point<Self>, b: &Point<Self>, c: &Point<Self>) -> i8;
}

impl Number for i64 {
    #[inline(always)]
    fn min_num(self, other: Self) -> Self {
        self.min(other)
    }

    #[inline(always)]
    fn max_num(self, other: Self) -> Self {
        self.max(other)
    }

    fn polygon_area(path: &[Point<Self>]) -> f64 {
        let count = path.len();

        if count < 3 {
            return 0.0;
        }

        let mut acc: i128 = 0;
        let mut spill = 0.0;
        let mut prev = &path[count - 1];

        for curr in path.iter() {
            let term = (prev.y as i128 + curr.y as i128) * (prev.x as i128 - curr.x as i128);

            acc = match acc.checked_add(term) {
                Some(value) => value,
                None => {
                    spill += acc as f64;
                    term
                }
            };
            prev = curr;
        }

        (spill + acc as f64) * 0.5
    }

    fn cross_sign(a: &Point<Self>, b: &Point<Self>, c: &Point<Self>) -> i8 {
        let value = (b.x as i128 - a.x as i128) * (c.y as i128 - a.y as i128)
            - (b.y as i128 - a.y as i128) * (c.x as i128 - a.x as i128);

        value.signum() as i8
    }
}

impl Number for f64 {
    #[inline(always)]
    fn min_num(self, other: Self) -> Self {
        self.min(other)
    }

    #[inline(always)]
    fn max_num(self, other: Self) -> Self {
        self.max(other)
    }

    fn polygon_area(path: &[Point<Self>]) -> f64 {
        let count = path.len();

        if count < 3 {
            return 0.0;
        }

        let mut acc = 0.0;
        let mut prev = &path[count - 1];

        for curr in path.iter() {
            acc += (prev.y + curr.y) * (prev.x - curr.x);
            prev = curr;
        }

        acc * 0.5
    }

    fn cross_sign(a: &Point<Self>, b: &Point<Self>, c: &Point<Self>) -> i8 {
        let value = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);

        if value > 0.0 {
            1
        } else if value < 0.0 {
            -1
        } else {
            0
        }
    }
}
