use crate::constants::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::utils::bit_ops::{get_bits, get_flag, set_bits, set_flag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipperConfig {
    pub reverse_solution: bool,
    pub preserve_collinear: bool,
    pub check_containment: bool,
    pub precision: i8,
}

const CONFIG_OFFSETS: [u8; 4] = [0, 1, 2, 3];

const PRECISION_BITS: u8 = 5;

impl ClipperConfig {
    pub fn new() -> ClipperConfig {
        ClipperConfig {
            reverse_solution: false,
            preserve_collinear: false,
            check_containment: true,
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn deserialize(&mut self, packed: u32) {
        self.reverse_solution = get_flag(packed, CONFIG_OFFSETS[0]);
        self.preserve_collinear = get_flag(packed, CONFIG_OFFSETS[1]);
        self.check_containment = get_flag(packed, CONFIG_OFFSETS[2]);
        self.precision =
            get_bits(packed, CONFIG_OFFSETS[3], PRECISION_BITS) as i8 - MAX_PRECISION;
    }

    pub fn serialize(&self) -> u32 {
        let mut result: u32 = 0;

        result = set_flag(result, self.reverse_solution, CONFIG_OFFSETS[0]);
        result = set_flag(result, self.preserve_collinear, CONFIG_OFFSETS[1]);
        result = set_flag(result, self.check_containment, CONFIG_OFFSETS[2]);
        result = set_bits(
            result,
            (self.precision + MAX_PRECISION) as u16,
            CONFIG_OFFSETS[3],
            PRECISION_BITS,
        );

        result
    }

    pub fn from_packed(packed: u32) -> ClipperConfig {
        let mut result = ClipperConfig::new();

        result.deserialize(packed);

        result
    }
}

impl Default for ClipperConfig {
    fn default() -> Self {
        Self::new()
    }
}
