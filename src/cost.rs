/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::OnceLock;
use std::time::Duration;

use crate::SALT_BIN_LEN;

/// Smallest valid cost factor. The key setup runs 2^cost rekeyings.
pub const COST_MIN: u32 = 4;
/// Largest valid cost factor.
pub const COST_MAX: u32 = 31;
/// Lower bound applied to the self-adjusted cost used by [`hash`](crate::hash).
pub const COST_AUTO_MIN: u32 = 11;

const CALIBRATION_COST: u32 = 8;
const TARGET_WALL_TIME: Duration = Duration::from_millis(1000);

static AUTO_COST: OnceLock<u32> = OnceLock::new();

/// The self-adjusted cost for this machine, in `[COST_AUTO_MIN, COST_MAX]`.
///
/// One timed key setup at a small calibration cost is extrapolated along the
/// doubling curve until the estimated wall time would pass
/// `TARGET_WALL_TIME`. Calibration runs once per process.
pub fn auto_cost() -> u32 {
    *AUTO_COST.get_or_init(calibrate)
}

fn calibrate() -> u32 {
    let salt = [0x55u8; SALT_BIN_LEN];

    let start = std::time::Instant::now();
    let _ = crate::hash::bcrypt_digest(CALIBRATION_COST, &salt, b"autocost calibration\0");
    let mut estimate = start.elapsed();

    let mut cost = CALIBRATION_COST;
    while cost < COST_MAX && estimate * 2 <= TARGET_WALL_TIME {
        estimate *= 2;
        cost += 1;
    }
    cost.clamp(COST_AUTO_MIN, COST_MAX)
}
