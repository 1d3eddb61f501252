/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use g3_bcrypt::{BcryptError, BcryptHash, HASH_BIN_LEN};

// password, expected composite hash string
const KNOWN_ANSWERS: &[(&[u8], &str)] = &[
    (b"", "$2a$06$DCq7YPn5Rq63x1Lad4cll.TV4S6ytwfsfvkgY8jIucDrjc8deX1s."),
    (b"a", "$2a$08$cfcvVd2aQ8CMvoMpP2EBfeodLEkkFJ9umNEfPD18.hUF62qqlC/V."),
    (
        b"abc",
        "$2a$10$WvvTPHKwdBJ3uk0Z37EMR.hLA2W6N9AEBhEgrAOljy2Ae5MtaSIUi",
    ),
    (
        b"abcdefghijklmnopqrstuvwxyz",
        "$2a$12$D4G5f18o7aMMfwasBL7GpuQWuP3pkrZrOAnqP.bmezbMng.QwJ/pG",
    ),
    (
        b"~!@#$%^&*()      ~!@#$%^&*()PNBFRD",
        "$2a$10$LgfYWkbzEvQ4JakH7rOvHe0y8pHKF9OaFgwUZ2q7W2FFZmZzJYlfS",
    ),
];

#[test]
fn known_answer_digests() {
    for &(password, expected) in KNOWN_ANSWERS {
        let parsed = BcryptHash::parse(expected).unwrap();
        let digest = g3_bcrypt::hash_raw(password, parsed.salt(), parsed.cost()).unwrap();
        assert_eq!(&digest[..HASH_BIN_LEN], parsed.digest(), "{expected}");
    }
}

#[test]
fn known_answer_strings_verify() {
    for &(password, expected) in KNOWN_ANSWERS {
        assert_eq!(g3_bcrypt::verify(password, expected), Ok(true), "{expected}");
    }
}

#[test]
fn known_answer_format_round_trip() {
    for &(_, expected) in KNOWN_ANSWERS {
        let parsed = BcryptHash::parse(expected).unwrap();
        assert_eq!(parsed.to_string(), *expected);
    }
}

#[test]
fn stored_password_checks() {
    let stored = "$2a$12$mACnM5lzNigHMaf7O1py1O3vlf6.BA8k8x3IoJ.Tq3IB/2e7g61Km";
    assert_eq!(
        g3_bcrypt::verify(b"correctbatteryhorsestapler", stored),
        Ok(true)
    );
    assert_eq!(
        g3_bcrypt::verify(b"incorrecthorsebatterystaple", stored),
        Ok(false)
    );
}

#[test]
fn hash_then_verify() {
    let hash = g3_bcrypt::hash_with(b"open sesame", 5).unwrap();
    assert!(hash.starts_with("$2a$05$"));
    assert_eq!(hash.len(), 60);
    assert_eq!(g3_bcrypt::verify(b"open sesame", &hash), Ok(true));
    assert_eq!(g3_bcrypt::verify(b"open sesam", &hash), Ok(false));
}

#[test]
fn empty_password_round_trip() {
    let hash = g3_bcrypt::hash_with(b"", 5).unwrap();
    assert_eq!(g3_bcrypt::verify(b"", &hash), Ok(true));
    assert_eq!(g3_bcrypt::verify(b"x", &hash), Ok(false));
}

#[test]
fn raw_verify() {
    let salt = [0x5au8; 16];
    let digest = g3_bcrypt::hash_raw(b"secret", &salt, 4).unwrap();
    assert_eq!(
        g3_bcrypt::verify_raw(b"secret", &salt, &digest, 4),
        Ok(true)
    );
    assert_eq!(
        g3_bcrypt::verify_raw(b"Secret", &salt, &digest, 4),
        Ok(false)
    );
}

#[test]
fn distinct_passwords_distinct_digests() {
    let salt = [0x11u8; 16];
    let a = g3_bcrypt::hash_raw(b"password-a", &salt, 4).unwrap();
    let b = g3_bcrypt::hash_raw(b"password-b", &salt, 4).unwrap();
    assert_ne!(a, b);
}

#[test]
fn long_passwords_differ_below_truncation() {
    let salt = [0x42u8; 16];
    let base = [b'q'; 57];
    let h55 = g3_bcrypt::hash_raw(&base[..55], &salt, 4).unwrap();
    let h56 = g3_bcrypt::hash_raw(&base[..56], &salt, 4).unwrap();
    let h57 = g3_bcrypt::hash_raw(&base[..57], &salt, 4).unwrap();
    assert_ne!(h55, h56);
    assert_ne!(h56, h57);
    assert_ne!(h55, h57);
}

#[test]
fn truncation_law_at_71_bytes() {
    let salt = [0x42u8; 16];
    let base = [b'q'; 80];
    let h71 = g3_bcrypt::hash_raw(&base[..71], &salt, 4).unwrap();
    let h72 = g3_bcrypt::hash_raw(&base[..72], &salt, 4).unwrap();
    let h73 = g3_bcrypt::hash_raw(&base[..73], &salt, 4).unwrap();
    let h80 = g3_bcrypt::hash_raw(&base, &salt, 4).unwrap();
    assert_eq!(h71, h72);
    assert_eq!(h72, h73);
    assert_eq!(h73, h80);

    let h70 = g3_bcrypt::hash_raw(&base[..70], &salt, 4).unwrap();
    assert_ne!(h70, h71);
}

#[test]
fn cost_bounds_rejected() {
    let salt = [0u8; 16];
    assert!(matches!(
        g3_bcrypt::hash_raw(b"pw", &salt, 3),
        Err(BcryptError::CostOutOfRange)
    ));
    assert!(matches!(
        g3_bcrypt::hash_raw(b"pw", &salt, 32),
        Err(BcryptError::CostOutOfRange)
    ));
}

#[test]
fn salt_length_rejected() {
    assert!(matches!(
        g3_bcrypt::hash_raw(b"pw", &[0u8; 15], 4),
        Err(BcryptError::SaltLengthInvalid)
    ));
    assert!(matches!(
        g3_bcrypt::hash_raw(b"pw", &[0u8; 17], 4),
        Err(BcryptError::SaltLengthInvalid)
    ));
}

#[test]
fn generated_salts_unique() {
    let s1 = g3_bcrypt::generate_salt().unwrap();
    let s2 = g3_bcrypt::generate_salt().unwrap();
    assert_ne!(s1, s2);
}
