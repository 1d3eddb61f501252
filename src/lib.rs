/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod error;
pub use error::{BcryptError, BcryptParseError, BcryptParseResult, BcryptResult};

mod b64;
mod blowfish;

mod cost;
pub use cost::{COST_AUTO_MIN, COST_MAX, COST_MIN, auto_cost};

mod salt;
pub use salt::generate_salt;

mod hash;
pub use hash::{BcryptHash, hash, hash_raw, hash_with, verify, verify_raw};

/// The number of bytes in a bcrypt salt.
pub const SALT_BIN_LEN: usize = 16;
/// The number of radix-64 characters encoding a salt.
pub const SALT_STR_LEN: usize = 22;
/// The number of digest bytes carried by a hash string.
pub const HASH_BIN_LEN: usize = 23;
/// The number of radix-64 characters encoding the digest.
pub const HASH_STR_LEN: usize = 31;
/// The full raw digest size, before the last byte is dropped for encoding.
pub const RAW_DIGEST_LEN: usize = 24;
/// The maximum number of key bytes, including the trailing NUL.
pub const KEY_LEN_MAX: usize = 72;
/// The maximum number of password bytes fed into the key.
pub const PHRASE_LEN_MAX: usize = 71;
