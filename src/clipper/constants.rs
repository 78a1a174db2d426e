/// Sentinel for an unset arena index.
pub const UNASSIGNED: usize = usize::MAX;

/// Marks the edge closing an open path; it never enters the active list.
pub const SKIP: usize = usize::MAX - 1;

/// `dx` value of an edge with no vertical extent.
pub const HORIZONTAL: f64 = -1.0e40;

/// Largest accepted coordinate magnitude. Differences of two coordinates fit in
/// an `i64` and products of differences fit in an `i128`.
pub const HI_RANGE: i64 = 0x3FFF_FFFF_FFFF_FFFF;
