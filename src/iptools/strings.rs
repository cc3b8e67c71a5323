// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) const DOT: u8 = b'.';
pub(crate) const COLON: u8 = b':';
pub(crate) const COMMA: u8 = b',';
pub(crate) const DASH: u8 = b'-';
pub(crate) const SLASH: u8 = b'/';
pub(crate) const UNDERSCORE: u8 = b'_';

// parse.rs
pub(crate) static ERR_NO_FAMILY: &str = "no '.' or ':' found, cannot tell IPv4 from IPv6";
pub(crate) static ERR_NUMBER: &str = "expected a number at";
pub(crate) static ERR_V4_OCTET: &str = "IPv4 octet must be <= 255, got";
pub(crate) static ERR_V6_HEXTET: &str = "IPv6 hextet must be <= 0xffff, got";
pub(crate) static ERR_DASHES: &str = "more than one '-' in a single term at";
pub(crate) static ERR_MISSING: &str = "too few address groups";
pub(crate) static ERR_ELISION_TWICE: &str = "more than one '::' in address at";
pub(crate) static ERR_ELISION_EMPTY: &str = "'::' must stand for at least one zero group";
pub(crate) static ERR_EMBEDDED_V4: &str = "misplaced embedded IPv4 address at";
pub(crate) static ERR_PREFIX: &str = "invalid prefix length";
pub(crate) static ERR_SUFFIX: &str = "suffix not allowed after an address with ranges";
pub(crate) static ERR_RNG_ORDER: &str = "start IP is greater than end IP";
pub(crate) static ERR_MISMATCH: &str = "cannot mix IPv4 and IPv6 in range";
pub(crate) static ERR_TRAILING: &str = "unexpected trailing input";
