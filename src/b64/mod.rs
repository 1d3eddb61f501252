/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

//! The OpenBSD bcrypt radix-64 alphabet. `.` and `/` take positions 0 and 1
//! and digits come last, which is not compatible with RFC 4648 base64.

mod decode;
mod encode;

pub(crate) use decode::B64CryptDecoder;
pub(crate) use encode::B64CryptEncoder;
