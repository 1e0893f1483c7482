pub mod significant_bit;
