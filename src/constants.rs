pub const TOL_F64: f64 = 1e-9;

pub const MAX_PRECISION: i8 = 8;

pub const DEFAULT_PRECISION: i8 = 2;
