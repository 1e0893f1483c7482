use alloy::primitives::U256;

/// Value queried when the caller does not supply one.
pub const U256_83: U256 = U256::from_limbs([83, 0, 0, 0]);
