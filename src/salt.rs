/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use openssl::rand;

use crate::SALT_BIN_LEN;
use crate::error::BcryptResult;

/// Draw 16 fresh bytes from the platform CSPRNG.
pub fn generate_salt() -> BcryptResult<[u8; SALT_BIN_LEN]> {
    let mut salt = [0u8; SALT_BIN_LEN];
    rand::rand_bytes(&mut salt)?;
    Ok(salt)
}
