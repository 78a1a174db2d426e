#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum FillRule {
    EvenOdd = 0,
    NonZero = 1,
    Positive = 2,
    Negative = 3,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum PolyType {
    Subject = 0,
    Clip = 1,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum ClipType {
    Intersection = 0,
    Union = 1,
    Difference = 2,
    Xor = 3,
}

/// Bound side of an edge in its output contour, or the sweep direction of a
/// horizontal edge (`Right` is left-to-right).
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Right = 1,
}

impl FillRule {
    /// Maps a raw winding count onto the count this rule compares against 0 and 1.
    pub fn effective_count(self, wind_cnt: i32) -> i32 {
        match self {
            FillRule::Positive => wind_cnt,
            FillRule::Negative => -wind_cnt,
            _ => wind_cnt.abs(),
        }
    }
}

impl TryFrom<u8> for FillRule {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FillRule::EvenOdd),
            1 => Ok(FillRule::NonZero),
            2 => Ok(FillRule::Positive),
            3 => Ok(FillRule::Negative),
            _ => Err(value),
        }
    }
}

impl TryFrom<u8> for ClipType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ClipType::Intersection),
            1 => Ok(ClipType::Union),
            2 => Ok(ClipType::Difference),
            3 => Ok(ClipType::Xor),
            _ => Err(value),
        }
    }
}
