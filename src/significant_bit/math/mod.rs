pub mod bit_math;
pub mod constants;
