pub mod bit_ops;
pub mod logger;
pub mod number;
pub mod round;
