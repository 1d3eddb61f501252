/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

const BCRYPT_HASH64: &[u8] = b"./ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub(crate) struct B64CryptEncoder {
    buf: Vec<u8>,
}

impl B64CryptEncoder {
    pub(crate) fn new(capacity: usize) -> Self {
        B64CryptEncoder {
            buf: Vec::<u8>::with_capacity(capacity),
        }
    }

    /// Encode `data` without padding. A 1-byte tail emits 2 characters and a
    /// 2-byte tail emits 3; unused low bits of the final character are zero.
    pub(crate) fn push(&mut self, data: &[u8]) {
        let mut i = 0;
        while i < data.len() {
            let b0 = data[i];
            i += 1;
            self.buf.push(BCRYPT_HASH64[(b0 >> 2) as usize]);
            let mut c = (b0 & 0x03) << 4;
            if i >= data.len() {
                self.buf.push(BCRYPT_HASH64[c as usize]);
                break;
            }

            let b1 = data[i];
            i += 1;
            c |= b1 >> 4;
            self.buf.push(BCRYPT_HASH64[c as usize]);
            let mut c = (b1 & 0x0f) << 2;
            if i >= data.len() {
                self.buf.push(BCRYPT_HASH64[c as usize]);
                break;
            }

            let b2 = data[i];
            i += 1;
            c |= b2 >> 6;
            self.buf.push(BCRYPT_HASH64[c as usize]);
            self.buf.push(BCRYPT_HASH64[(b2 & 0x3f) as usize]);
        }
    }
}

impl From<B64CryptEncoder> for String {
    fn from(encoder: B64CryptEncoder) -> Self {
        unsafe { String::from_utf8_unchecked(encoder.buf) }
    }
}
