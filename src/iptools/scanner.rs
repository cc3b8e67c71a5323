// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::TOO_BIG;

/**
Scan a maximal run of ASCII decimal digits from the start of `s`.

### Returns
- `Some((value, consumed))` if at least one digit was read
- `None` if `s` does not start with a digit, or the run would exceed the
  scanner ceiling (far above any octet, hextet or prefix length)
*/
pub fn decimal(s: &[u8]) -> Option<(u32, usize)> {
    scan(s, 10)
}

/// Same as [decimal], but for a case-insensitive run of `0-9a-fA-F`.
pub fn hexadecimal(s: &[u8]) -> Option<(u32, usize)> {
    scan(s, 16)
}

#[inline]
fn scan(s: &[u8], radix: u32) -> Option<(u32, usize)> {
    let mut n: u32 = 0;
    let mut used: usize = 0;

    for &b in s {
        let Some(digit) = char::from(b).to_digit(radix) else {
            break;
        };
        n = n * radix + digit;
        if n >= TOO_BIG {
            return None;
        }
        used += 1;
    }

    match used {
        0 => None,
        _ => Some((n, used)),
    }
}

/* -------------------------------------------------------------------------- */
