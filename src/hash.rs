/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

use constant_time_eq::constant_time_eq_n;

use crate::b64::{B64CryptDecoder, B64CryptEncoder};
use crate::blowfish::Blowfish;
use crate::cost::{COST_MAX, COST_MIN};
use crate::error::{BcryptParseError, BcryptParseResult, BcryptResult};
use crate::{HASH_BIN_LEN, HASH_STR_LEN, PHRASE_LEN_MAX, RAW_DIGEST_LEN, SALT_BIN_LEN, SALT_STR_LEN};

const PREFIX: &str = "$2a$";
const PREFIX_LEGACY: &str = "$2$";

// prefix + 2 cost digits + '$' + encoded salt, without any hash payload
const STR_LEN_MIN: usize = 28;

// "OrpheanBeholderScryDoubt" as six big-endian words
const MAGIC_WORDS: [u32; 6] = [
    0x4f727068, 0x65616e42, 0x65686f6c, 0x64657253, 0x63727944, 0x6f756274,
];

/// Run the bcrypt hash function proper: derive the expensive key schedule,
/// then encrypt the magic block 64 times in ECB. The round count is fixed by
/// the algorithm, only the key setup scales with cost.
pub(crate) fn bcrypt_digest(
    cost: u32,
    salt: &[u8],
    key: &[u8],
) -> BcryptResult<[u8; RAW_DIGEST_LEN]> {
    let state = Blowfish::eks_setup(cost, salt, key)?;

    let mut ct = MAGIC_WORDS;
    for _ in 0..64 {
        for i in (0..ct.len()).step_by(2) {
            (ct[i], ct[i + 1]) = state.encipher(ct[i], ct[i + 1]);
        }
    }

    let mut digest = [0u8; RAW_DIGEST_LEN];
    for (chunk, w) in digest.chunks_exact_mut(4).zip(ct) {
        chunk.copy_from_slice(&w.to_be_bytes());
    }
    Ok(digest)
}

/// Normalise a password to bcrypt key bytes: truncate to 71 bytes and append
/// one NUL, so an empty password becomes the 1-byte key `[0x00]`.
fn phrase_to_key(phrase: &[u8]) -> Vec<u8> {
    let n = phrase.len().min(PHRASE_LEN_MAX);
    let mut key = Vec::with_capacity(n + 1);
    key.extend_from_slice(&phrase[..n]);
    key.push(0);
    key
}

/// A parsed `$2a$cc$salt22hash31` composite hash.
///
/// Verification recomputes the digest under the parsed cost and salt and
/// compares digest bytes, so legacy `$2$` strings verify the same as `$2a$`
/// ones even though [`Display`](fmt::Display) always emits `$2a$`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BcryptHash {
    cost: u32,
    salt: [u8; SALT_BIN_LEN],
    hash_bin: [u8; HASH_BIN_LEN],
}

impl BcryptHash {
    pub fn parse(v: &str) -> BcryptParseResult<Self> {
        if v.len() < STR_LEN_MIN {
            return Err(BcryptParseError::TooShort);
        }

        let rem = if let Some(r) = v.strip_prefix(PREFIX) {
            r
        } else if let Some(r) = v.strip_prefix(PREFIX_LEGACY) {
            r
        } else {
            return Err(BcryptParseError::UnknownVersion);
        };

        let Some(d) = memchr::memchr(b'$', rem.as_bytes()) else {
            return Err(BcryptParseError::NoSaltFound);
        };
        let cc = &rem[0..d];
        if cc.len() != 2 || !cc.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BcryptParseError::InvalidCost);
        }
        let cost = u32::from_str(cc).map_err(|_| BcryptParseError::InvalidCost)?;
        if !(COST_MIN..=COST_MAX).contains(&cost) {
            return Err(BcryptParseError::OutOfRangeCost);
        }

        let s = rem[d + 1..].as_bytes();
        if s.len() < SALT_STR_LEN {
            return Err(BcryptParseError::InvalidSaltSize);
        }
        if s.len() != SALT_STR_LEN + HASH_STR_LEN {
            return Err(BcryptParseError::InvalidHashSize);
        }

        let mut salt = [0u8; SALT_BIN_LEN];
        B64CryptDecoder::decode(&s[..SALT_STR_LEN], &mut salt)?;
        let mut hash_bin = [0u8; HASH_BIN_LEN];
        B64CryptDecoder::decode(&s[SALT_STR_LEN..], &mut hash_bin)?;

        Ok(BcryptHash {
            cost,
            salt,
            hash_bin,
        })
    }

    #[inline]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    #[inline]
    pub fn salt(&self) -> &[u8; SALT_BIN_LEN] {
        &self.salt
    }

    /// The stored digest, 23 bytes. The 24th raw-digest byte is dropped by
    /// the hash string format.
    #[inline]
    pub fn digest(&self) -> &[u8; HASH_BIN_LEN] {
        &self.hash_bin
    }

    pub fn verify(&self, phrase: &[u8]) -> bool {
        let mut key = phrase_to_key(phrase);
        let r = bcrypt_digest(self.cost, &self.salt, &key);
        for b in &mut key {
            *b = 0;
        }
        match r {
            Ok(digest) => {
                let mut computed = [0u8; HASH_BIN_LEN];
                computed.copy_from_slice(&digest[..HASH_BIN_LEN]);
                constant_time_eq_n(&self.hash_bin, &computed)
            }
            Err(_) => false,
        }
    }
}

impl FromStr for BcryptHash {
    type Err = BcryptParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BcryptHash::parse(s)
    }
}

impl fmt::Display for BcryptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut encoder = B64CryptEncoder::new(SALT_STR_LEN + HASH_STR_LEN);
        encoder.push(&self.salt);
        encoder.push(&self.hash_bin);
        let b64: String = encoder.into();
        write!(f, "{PREFIX}{:02}${b64}", self.cost)
    }
}

/// Hash with a fresh random salt and the self-adjusted cost, which never goes
/// below [`COST_AUTO_MIN`](crate::COST_AUTO_MIN).
pub fn hash(phrase: &[u8]) -> BcryptResult<String> {
    hash_with(phrase, crate::cost::auto_cost())
}

/// Hash with a fresh random salt and an explicit cost.
pub fn hash_with(phrase: &[u8], cost: u32) -> BcryptResult<String> {
    let salt = crate::salt::generate_salt()?;
    let digest = hash_raw(phrase, &salt, cost)?;

    let mut hash_bin = [0u8; HASH_BIN_LEN];
    hash_bin.copy_from_slice(&digest[..HASH_BIN_LEN]);
    Ok(BcryptHash {
        cost,
        salt,
        hash_bin,
    }
    .to_string())
}

/// The deterministic raw-digest primitive: all 24 digest bytes, before the
/// hash string format drops the last one.
pub fn hash_raw(phrase: &[u8], salt: &[u8], cost: u32) -> BcryptResult<[u8; RAW_DIGEST_LEN]> {
    let mut key = phrase_to_key(phrase);
    let r = bcrypt_digest(cost, salt, &key);
    for b in &mut key {
        *b = 0;
    }
    r
}

/// Check a password against a stored composite hash string. A mismatched
/// password is `Ok(false)`; a malformed expected string is an error.
pub fn verify(phrase: &[u8], hash_str: &str) -> BcryptParseResult<bool> {
    let parsed = BcryptHash::parse(hash_str)?;
    Ok(parsed.verify(phrase))
}

/// Check a password against a raw 24-byte digest.
pub fn verify_raw(
    phrase: &[u8],
    salt: &[u8],
    digest: &[u8; RAW_DIGEST_LEN],
    cost: u32,
) -> BcryptResult<bool> {
    let computed = hash_raw(phrase, salt, cost)?;
    Ok(constant_time_eq_n(digest, &computed))
}
