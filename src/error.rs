/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use openssl::error::ErrorStack;
use thiserror::Error;

#[derive(Debug, Eq, PartialEq, Error)]
pub enum BcryptParseError {
    #[error("hash string too short")]
    TooShort,
    #[error("unknown version prefix")]
    UnknownVersion,
    #[error("invalid cost field")]
    InvalidCost,
    #[error("out of range cost")]
    OutOfRangeCost,
    #[error("no salt found")]
    NoSaltFound,
    #[error("invalid salt size")]
    InvalidSaltSize,
    #[error("invalid hash size")]
    InvalidHashSize,
    #[error("invalid base64 character")]
    InvalidBase64,
}

pub type BcryptParseResult<T> = Result<T, BcryptParseError>;

#[derive(Debug, Error)]
pub enum BcryptError {
    #[error("out of range cost")]
    CostOutOfRange,
    #[error("invalid salt length")]
    SaltLengthInvalid,
    #[error("invalid key length")]
    KeyLengthInvalid,
    #[error("platform randomness failed: {0}")]
    PlatformRandomnessFailed(#[from] ErrorStack),
}

impl PartialEq for BcryptError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::CostOutOfRange, Self::CostOutOfRange) => true,
            (Self::SaltLengthInvalid, Self::SaltLengthInvalid) => true,
            (Self::KeyLengthInvalid, Self::KeyLengthInvalid) => true,
            (Self::PlatformRandomnessFailed(a), Self::PlatformRandomnessFailed(b)) => {
                a.to_string() == b.to_string()
            }
            _ => false,
        }
    }
}

pub type BcryptResult<T> = Result<T, BcryptError>;
