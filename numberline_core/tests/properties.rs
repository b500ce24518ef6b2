// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for parsing and the coordinate mapping.

use numberline_core::center::scroll_target;
use numberline_core::input::{Inputs, MAX_MAGNITUDE, is_acceptable, parse_value};
use numberline_core::path::{Direction, plan_path};
use numberline_core::ruler::RulerConfig;
use proptest::prelude::*;

proptest! {
    #[test]
    fn parse_matches_base_ten(value in -MAX_MAGNITUDE..=MAX_MAGNITUDE) {
        let text = value.to_string();
        prop_assert!(is_acceptable(&text));
        prop_assert_eq!(parse_value(&text), Some(value));
    }

    #[test]
    fn huge_literals_parse_as_absent(value in any::<i64>()) {
        prop_assume!(value.unsigned_abs() > MAX_MAGNITUDE.unsigned_abs());
        let text = value.to_string();
        prop_assert!(is_acceptable(&text));
        prop_assert_eq!(parse_value(&text), None);
    }

    #[test]
    fn extreme_jumps_keep_direction(start in -MAX_MAGNITUDE..=MAX_MAGNITUDE, delta in -3_i64..=3) {
        prop_assume!(delta != 0);
        let config = RulerConfig::default();
        let plan = plan_path(&config, &Inputs::new(Some(start), Some(delta)));
        let plan = plan.expect("non-zero delta");
        let expected = if delta > 0 { Direction::Right } else { Direction::Left };
        prop_assert_eq!(plan.direction, expected);
        prop_assert!(config.to_coordinate(start) != config.to_coordinate(start + delta));
    }

    #[test]
    fn leading_zeros_do_not_matter(value in 0_i64..1_000_000, zeros in 0_usize..5, negative in any::<bool>()) {
        let sign = if negative { "-" } else { "" };
        let text = format!("{sign}{}{value}", "0".repeat(zeros));
        let expected = if negative { -value } else { value };
        prop_assert_eq!(parse_value(&text), Some(expected));
    }

    #[test]
    fn acceptable_text_never_has_stray_characters(text in "\\PC{0,8}") {
        let body = text.strip_prefix('-').unwrap_or(&text);
        prop_assert_eq!(is_acceptable(&text), body.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn coordinates_strictly_increase(a in -1_000_000_i64..1_000_000, b in -1_000_000_i64..1_000_000) {
        prop_assume!(a != b);
        let config = RulerConfig::default();
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(config.to_coordinate(lo) < config.to_coordinate(hi));
    }

    #[test]
    fn path_direction_matches_sign(start in -500_i64..500, delta in -500_i64..500) {
        let config = RulerConfig::default();
        let plan = plan_path(&config, &Inputs::new(Some(start), Some(delta)));
        match plan {
            None => prop_assert_eq!(delta, 0),
            Some(plan) => {
                let expected = if delta > 0 { Direction::Right } else { Direction::Left };
                prop_assert_eq!(plan.direction, expected);
                prop_assert_eq!(plan.is_positive(), delta >= 0);
            }
        }
    }

    #[test]
    fn jump_target_lies_between_endpoints(start in -500_i64..500, delta in -500_i64..500) {
        let config = RulerConfig::default();
        let t = scroll_target(&config, &Inputs::new(Some(start), Some(delta)));
        let (a, b) = (config.to_coordinate(start), config.to_coordinate(start + delta));
        prop_assert!(t.x >= a.min(b) && t.x <= a.max(b));
    }
}
