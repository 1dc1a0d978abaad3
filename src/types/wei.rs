//! Wei to ETH decimal conversion
//!
//! Balances and gas prices arrive from the chain as wei (the smallest native
//! currency unit). The service reports them as fixed-precision decimal
//! strings with 18 fractional digits, computed with exact integer
//! arithmetic. Floats are never involved, so no precision is lost for any
//! representable wei amount.

use alloy_primitives::U256;

/// Number of wei in one ETH (10^18).
pub const WEI_PER_ETH: U256 = U256::from_limbs([1_000_000_000_000_000_000u64, 0, 0, 0]);

/// Converts a wei amount into an ETH decimal string with exactly 18
/// fractional digits.
///
/// The conversion truncates: it is a plain integer division by 10^18 with
/// the remainder zero-padded into the fractional part. No rounding is
/// performed.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use etherstats::wei_to_eth_string;
///
/// let one_eth = U256::from(1_000_000_000_000_000_000u64);
/// assert_eq!(wei_to_eth_string(one_eth), "1.000000000000000000");
/// assert_eq!(wei_to_eth_string(U256::ZERO), "0.000000000000000000");
/// ```
pub fn wei_to_eth_string(wei: U256) -> String {
    let (whole, frac) = wei.div_rem(WEI_PER_ETH);
    // The remainder is < 10^18, so it always fits in a u128.
    let frac = frac.to::<u128>();
    format!("{whole}.{frac:018}")
}
