use crate::geometry::point::Point;
use crate::utils::number::Number;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T> {
    pub left: T,
    pub top: T,
    pub right: T,
    pub bottom: T,
}

pub type Rect64 = Rect<i64>;
pub type RectD = Rect<f64>;

impl<T: Number> Rect<T> {
    pub fn new(left: T, top: T, right: T, bottom: T) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// An inverted rectangle that any point will grow.
    pub fn invalid() -> Self {
        Self::new(T::max_value(), T::max_value(), T::min_value(), T::min_value())
    }

    pub fn width(&self) -> T {
        self.right - self.left
    }

    pub fn height(&self) -> T {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.bottom <= self.top || self.right <= self.left
    }

    pub fn contains(&self, point: &Point<T>) -> bool {
        point.x > self.left && point.x < self.right && point.y > self.top && point.y < self.bottom
    }

    /// True when `other` lies within this rectangle, edges included.
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }

    pub fn include(&mut self, point: &Point<T>) {
        self.left = self.left.min_num(point.x);
        self.top = self.top.min_num(point.y);
        self.right = self.right.max_num(point.x);
        self.bottom = self.bottom.max_num(point.y);
    }
}

impl Rect64 {
    pub fn mid_point(&self) -> Point<i64> {
        Point::new(
            self.left + (self.right - self.left) / 2,
            self.top + (self.bottom - self.top) / 2,
        )
    }
}

pub fn bounds<T: Number>(paths: &[Vec<Point<T>>]) -> Rect<T> {
    let mut result = Rect::invalid();

    for point in paths.iter().flatten() {
        result.include(point);
    }

    if result.left > result.right {
        Rect::new(T::zero(), T::zero(), T::zero(), T::zero())
    } else {
        result
    }
}

pub fn path_bounds<T: Number>(path: &[Point<T>]) -> Rect<T> {
    let mut result = Rect::invalid();

    for point in path.iter() {
        result.include(point);
    }

    if result.left > result.right {
        Rect::new(T::zero(), T::zero(), T::zero(), T::zero())
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::{Point64, PointD};

    #[test]
    fn test_bounds_of_paths() {
        let paths = vec![
            vec![Point64::new(10, 20), Point64::new(-5, 4)],
            vec![Point64::new(3, 40)],
        ];
        let rect = bounds(&paths);

        assert_eq!(rect, Rect64::new(-5, 4, 10, 40));
        assert_eq!(rect.width(), 15);
        assert_eq!(rect.height(), 36);
        assert!(rect.contains(&Point64::new(0, 10)));
        assert!(!rect.contains(&Point64::new(10, 10)));
    }

    #[test]
    fn test_rect_contains_rect() {
        let outer = Rect64::new(0, 0, 100, 50);

        assert!(outer.contains_rect(&outer));
        assert!(outer.contains_rect(&Rect64::new(10, 0, 20, 50)));
        assert!(!outer.contains_rect(&Rect64::new(-1, 10, 20, 20)));
        assert!(!outer.contains_rect(&Rect64::new(10, 10, 20, 51)));
        assert_eq!(outer.mid_point(), Point64::new(50, 25));
        assert_eq!(Rect64::new(-5, -5, 0, 0).mid_point(), Point64::new(-3, -3));
    }

    #[test]
    fn test_bounds_of_nothing_is_empty() {
        let rect = bounds::<f64>(&[]);

        assert!(rect.is_empty());
        assert_eq!(path_bounds(&[PointD::new(1.5, 2.5)]).width(), 0.0);
    }
}
