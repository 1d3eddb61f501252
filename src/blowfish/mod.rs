/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use crate::cost::{COST_MAX, COST_MIN};
use crate::error::{BcryptError, BcryptResult};
use crate::{KEY_LEN_MAX, SALT_BIN_LEN};

mod consts;
use consts::{P_INIT, S_INIT};

/// Blowfish cipher state: 18 P subkeys and four 256-entry S-boxes.
///
/// A fresh state holds the canonical pi-derived seed constants. Key and salt
/// material is absorbed with [`expand_key`](Self::expand_key) and
/// [`expand_key_nosalt`](Self::expand_key_nosalt); each hashing call owns its
/// own state.
pub(crate) struct Blowfish {
    p: [u32; 18],
    s: [[u32; 256]; 4],
}

impl Blowfish {
    fn new() -> Self {
        Blowfish {
            p: P_INIT,
            s: S_INIT,
        }
    }

    fn f(&self, x: u32) -> u32 {
        let [b0, b1, b2, b3] = x.to_be_bytes();
        (self.s[0][b0 as usize].wrapping_add(self.s[1][b1 as usize]) ^ self.s[2][b2 as usize])
            .wrapping_add(self.s[3][b3 as usize])
    }

    /// Encrypt one 8-byte block given as two big-endian words.
    pub(crate) fn encipher(&self, mut l: u32, mut r: u32) -> (u32, u32) {
        for i in (0..16).step_by(2) {
            l ^= self.p[i];
            r ^= self.f(l);
            r ^= self.p[i + 1];
            l ^= self.f(r);
        }
        l ^= self.p[16];
        r ^= self.p[17];
        (r, l)
    }

    /// XOR the key, treated as cyclic at byte granularity, big-endian word by
    /// big-endian word into the P-array.
    fn fold_key(&mut self, key: &[u8]) {
        let mut cursor = 0;
        for p in self.p.iter_mut() {
            let mut word = 0u32;
            for _ in 0..4 {
                word = (word << 8) | u32::from(key[cursor]);
                cursor += 1;
                if cursor == key.len() {
                    cursor = 0;
                }
            }
            *p ^= word;
        }
    }

    /// Key/salt absorption. Folds the key into P, then rolls an 8-byte zero
    /// block through the P-array and all four S-boxes, XORing alternating
    /// salt halves before each encryption. The toggle starts at salt bytes
    /// 0..8 and ripples continuously from the P-array into the S-boxes.
    fn expand_key(&mut self, salt: &[u32; 4], key: &[u8]) {
        self.fold_key(key);

        let mut l = 0u32;
        let mut r = 0u32;
        let mut h = 0;

        for i in (0..18).step_by(2) {
            l ^= salt[h];
            r ^= salt[h + 1];
            h = (h + 2) & 0x3;
            (l, r) = self.encipher(l, r);
            self.p[i] = l;
            self.p[i + 1] = r;
        }

        for j in 0..4 {
            for i in (0..256).step_by(2) {
                l ^= salt[h];
                r ^= salt[h + 1];
                h = (h + 2) & 0x3;
                (l, r) = self.encipher(l, r);
                self.s[j][i] = l;
                self.s[j][i + 1] = r;
            }
        }
    }

    /// The salt-less absorption used by the rekeying loop. Equivalent to
    /// [`expand_key`](Self::expand_key) with an all-zero salt, which is also
    /// exactly the standard Blowfish key schedule.
    fn expand_key_nosalt(&mut self, key: &[u8]) {
        self.fold_key(key);

        let mut l = 0u32;
        let mut r = 0u32;

        for i in (0..18).step_by(2) {
            (l, r) = self.encipher(l, r);
            self.p[i] = l;
            self.p[i + 1] = r;
        }

        for j in 0..4 {
            for i in (0..256).step_by(2) {
                (l, r) = self.encipher(l, r);
                self.s[j][i] = l;
                self.s[j][i + 1] = r;
            }
        }
    }

    /// Expensive key setup: absorb (salt, key) once, then rekey 2^cost times
    /// with alternating (key) and (salt-as-key) passes.
    pub(crate) fn eks_setup(cost: u32, salt: &[u8], key: &[u8]) -> BcryptResult<Self> {
        if !(COST_MIN..=COST_MAX).contains(&cost) {
            return Err(BcryptError::CostOutOfRange);
        }
        if salt.len() != SALT_BIN_LEN {
            return Err(BcryptError::SaltLengthInvalid);
        }
        if key.is_empty() || key.len() > KEY_LEN_MAX {
            return Err(BcryptError::KeyLengthInvalid);
        }

        let mut salt_words = [0u32; 4];
        for (i, w) in salt_words.iter_mut().enumerate() {
            *w = u32::from_be_bytes([
                salt[4 * i],
                salt[4 * i + 1],
                salt[4 * i + 2],
                salt[4 * i + 3],
            ]);
        }

        let mut state = Blowfish::new();
        state.expand_key(&salt_words, key);

        // cost 31 needs 2^31 iterations, which a signed 32-bit counter
        // cannot represent
        let rounds = 1u64 << cost;
        for _ in 0..rounds {
            state.expand_key_nosalt(key);
            state.expand_key_nosalt(salt);
        }

        Ok(state)
    }
}
