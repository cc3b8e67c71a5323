// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsing, counting, membership testing and enumeration of compact
//! IPv4/IPv6 range expressions.

mod addresses;
mod bounds;
mod iter;
mod parse;
mod range;
mod scanner;
mod strings;
mod structs;

use std::{error, fmt, net::IpAddr};
use strings::*;

pub use addresses::{groups_to_ip, increment, ip_to_big, ip_to_groups};
pub use bounds::{Bound, GroupBounds};
pub use iter::RangeIter;
pub use parse::{parse, parse_many};
pub use range::Range;
pub use scanner::{decimal, hexadecimal};
pub use structs::{IpFam, IpRange};

pub(crate) const IPV4_LEN: usize = 4;
pub(crate) const IPV6_LEN: usize = 16;
pub(crate) const IPV4_GROUPS: usize = 4;
pub(crate) const IPV6_GROUPS: usize = 8;
pub(crate) const IPV4_BITS: u8 = 32;
pub(crate) const IPV6_BITS: u8 = 128;
pub(crate) const IPV4_GROUP_MAX: u16 = 0xFF;
pub(crate) const IPV6_GROUP_MAX: u16 = 0xFFFF;

/// Scanner ceiling: larger than any octet, hextet or prefix length, small
/// enough that accumulating one more digit cannot overflow a [u32].
pub(crate) const TOO_BIG: u32 = 0xFF_FFFF;

/// Reasons a range expression was rejected.
///
/// Callers normally only care that parsing failed; the variant and its
/// payload are there for diagnostics.
#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// neither '.' nor ':' anywhere in the input
    NoFamily(String),
    /// a decimal/hex number was expected where the payload begins
    Number(String),
    InvalidV4Octet(u32),
    InvalidV6Hextet(u32),
    TooManyDashes(String),
    MissingGroups { fam: IpFam, got: usize },
    ElisionTwice(String),
    /// '::' used where all 8 groups are already explicit
    ElisionEmpty,
    EmbeddedV4(String),
    Prefix(String),
    /// CIDR or min_max suffix on a literal that already carries ranges
    SuffixOnRange(char),
    RangeOrder(IpAddr, IpAddr),
    /// start and end are not the same IP family (v4 vs v6).
    Mismatch(IpAddr, IpAddr),
    Trailing(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NoFamily(s) => {
                write!(f, "{ERR_NO_FAMILY}: '{s}'")
            }
            ParseError::Number(rest) => {
                write!(f, "{ERR_NUMBER} '{rest}'")
            }
            ParseError::InvalidV4Octet(val) => {
                write!(f, "{ERR_V4_OCTET} {val}")
            }
            ParseError::InvalidV6Hextet(val) => {
                write!(f, "{ERR_V6_HEXTET} {val:#x}")
            }
            ParseError::TooManyDashes(rest) => {
                write!(f, "{ERR_DASHES} '{rest}'")
            }
            ParseError::MissingGroups { fam, got } => {
                write!(f, "{ERR_MISSING}: {fam:?} needs {}, got {got}", fam.groups())
            }
            ParseError::ElisionTwice(rest) => {
                write!(f, "{ERR_ELISION_TWICE} '{rest}'")
            }
            ParseError::ElisionEmpty => {
                write!(f, "{ERR_ELISION_EMPTY}")
            }
            ParseError::EmbeddedV4(rest) => {
                write!(f, "{ERR_EMBEDDED_V4} '{rest}'")
            }
            ParseError::Prefix(val) => {
                write!(f, "{ERR_PREFIX}: '{val}'")
            }
            ParseError::SuffixOnRange(c) => {
                write!(f, "{ERR_SUFFIX}: '{c}'")
            }
            ParseError::RangeOrder(beg, end) => {
                write!(f, "{ERR_RNG_ORDER} ({beg} > {end})")
            }
            ParseError::Mismatch(a, b) => {
                write!(f, "{ERR_MISMATCH}: {a} - {b}")
            }
            ParseError::Trailing(rest) => {
                write!(f, "{ERR_TRAILING}: '{rest}'")
            }
        }
    }
}

impl error::Error for ParseError {}
