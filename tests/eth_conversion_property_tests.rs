//! Property tests for the wei to ETH decimal conversion
//!
//! The conversion feeds both the balance and the gas price strings, so its
//! shape invariants are pinned down over arbitrary inputs: exactly 18
//! fractional digits, pure digits on both sides of the point, and an exact
//! round trip back to wei.

use alloy_primitives::U256;
use etherstats::types::wei::WEI_PER_ETH;
use etherstats::wei_to_eth_string;
use proptest::prelude::*;

proptest! {
    #[test]
    fn eth_string_always_has_18_fractional_digits(wei in any::<u128>()) {
        let s = wei_to_eth_string(U256::from(wei));
        let (whole, frac) = s.split_once('.').expect("decimal point present");

        prop_assert_eq!(frac.len(), 18);
        prop_assert!(frac.chars().all(|c| c.is_ascii_digit()));
        prop_assert!(!whole.is_empty());
        prop_assert!(whole.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn eth_string_round_trips_to_wei(wei in any::<u128>()) {
        let wei = U256::from(wei);
        let s = wei_to_eth_string(wei);
        let (whole, frac) = s.split_once('.').unwrap();

        let whole: U256 = whole.parse().unwrap();
        let frac = frac.trim_start_matches('0');
        let frac: U256 = if frac.is_empty() {
            U256::ZERO
        } else {
            frac.parse().unwrap()
        };

        prop_assert_eq!(whole * WEI_PER_ETH + frac, wei);
    }

    #[test]
    fn whole_part_has_no_leading_zero_padding(wei in 1u128..) {
        let s = wei_to_eth_string(U256::from(wei));
        let (whole, _) = s.split_once('.').unwrap();

        // Plain integer formatting: "0" only for amounts under one ETH
        if whole != "0" {
            prop_assert!(!whole.starts_with('0'));
        }
    }
}
