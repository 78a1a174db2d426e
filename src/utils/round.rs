/// Rounds half away from zero, the rule used for every coordinate the
/// engine derives from floating point math.
pub trait ClipperRound {
    fn clipper_rounded(self) -> Self;
}

impl ClipperRound for f64 {
    #[inline(always)]
    fn clipper_rounded(self) -> Self {
        if self < 0.0 {
            (self - 0.5).ceil()
        } else {
            (self + 0.5).floor()
        }
    }
}

impl ClipperRound for i64 {
    #[inline(always)]
    fn clipper_rounded(self) -> Self {
        self
    }
}

#[inline(always)]
pub fn round_to_i64(value: f64) -> i64 {
    value.clipper_rounded() as i64
}
