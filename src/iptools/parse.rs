// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    addresses::groups_to_ip,
    bounds::{Bound, GroupBounds},
    range::Range,
    scanner::{decimal, hexadecimal},
    strings::*,
    structs::{IpFam, IpRange},
    ParseError, IPV4_GROUPS, IPV4_GROUP_MAX, IPV6_GROUPS, IPV6_GROUP_MAX,
};
use ipnet::IpNet;
use std::{net::IpAddr, str::FromStr};
use tracing::{debug, trace};

/**
Parse a range expression for either IP family.

Supported formats:
- Single IP: `192.0.2.1`, `2001:db8::68`
- CIDR: `192.168.1.0/24`, `2001:db8::68/120`
- Min/max: `192.168.1.1_192.168.1.10`, `2001:db8::68_2001:db8::80`
- Per-position ranges: `192.168.1,3,5.1-10`, `2001:db8::0,1:68-80`

The family is chosen by whichever of `.` or `:` appears first. Any input
that is not one of the above, as a whole, is an error.
*/
pub fn parse(s: &str) -> Result<Range, ParseError> {
    let result: Result<Range, ParseError> = match sniff_family(s.as_bytes()) {
        Some(fam) => parse_family(s.as_bytes(), fam),
        None => Err(ParseError::NoFamily(s.into())),
    };

    match &result {
        Ok(range) => trace!(input = s, ?range, "parsed range"),
        Err(err) => debug!(input = s, %err, "rejected range"),
    }
    result
}

/**
Parse every expression in `input` and union them, in order, into one
composite [Range]. Stops at the first expression that fails to parse.
*/
pub fn parse_many(input: &[impl AsRef<str>]) -> Result<Range, ParseError> {
    input
        .iter()
        .map(|s| parse(s.as_ref()))
        .collect::<Result<Vec<Range>, ParseError>>()
        .map(Range::union)
}

impl FromStr for Range {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/* ---------------------------------- */

fn sniff_family(s: &[u8]) -> Option<IpFam> {
    s.iter().find_map(|&b| match b {
        DOT => Some(IpFam::V4),
        COLON => Some(IpFam::V6),
        _ => None,
    })
}

/// Address literal of the given family. Returns its bounds and the number of bytes consumed.
fn parse_literal(s: &[u8], fam: IpFam) -> Result<(GroupBounds, usize), ParseError> {
    match fam {
        IpFam::V4 => parse_v4(s),
        IpFam::V6 => parse_v6(s),
    }
}

/// Decide which kind of range `s` is: single, CIDR, min/max or per-position ranges.
fn parse_family(s: &[u8], fam: IpFam) -> Result<Range, ParseError> {
    let (mut ip, used) = parse_literal(s, fam)?;
    let rest: &[u8] = &s[used..];

    match rest.first() {
        Some(&UNDERSCORE) => {
            if ip.has_ranges() {
                return Err(ParseError::SuffixOnRange(char::from(UNDERSCORE)));
            }
            let rest: &[u8] = &rest[1..];
            let (max, used) = parse_literal(rest, fam)?;
            if max.has_ranges() {
                return Err(ParseError::SuffixOnRange(char::from(UNDERSCORE)));
            }
            expect_end(&rest[used..])?;

            let beg: IpAddr = groups_to_ip(&ip.min());
            let end: IpAddr = groups_to_ip(&max.min());
            Ok(Range::MinMax(IpRange::new(beg, end)?))
        }

        Some(&SLASH) => {
            if ip.has_ranges() {
                return Err(ParseError::SuffixOnRange(char::from(SLASH)));
            }
            let rest: &[u8] = &rest[1..];
            let prefix: u8 = match decimal(rest) {
                Some((n, used)) if n <= u32::from(fam.bits()) => {
                    expect_end(&rest[used..])?;
                    n as u8
                }
                _ => return Err(ParseError::Prefix(lossy(rest))),
            };

            let net: IpNet = IpNet::new(groups_to_ip(&ip.min()), prefix)
                .map_err(|_| ParseError::Prefix(prefix.to_string()))?;
            Ok(Range::MinMax(IpRange::from(net)))
        }

        _ => {
            expect_end(rest)?;
            if !ip.has_ranges() {
                return Ok(Range::Single(groups_to_ip(&ip.min())));
            }
            ip.sort();
            Ok(Range::Octets(ip))
        }
    }
}

/* ---------------------------------- */

/**
Parse an IPv4 literal from the start of `s`. Every octet is a decimal
number, a `lo-hi` pair or a comma separated list of those.

Stops at the first byte that cannot continue the literal, so the caller
can look at whatever follows (e.g. a `/` or `_` suffix).
*/
fn parse_v4(s: &[u8]) -> Result<(GroupBounds, usize), ParseError> {
    let mut ip = GroupBounds::new(IpFam::V4);
    let mut pos: usize = 0;
    let mut i: usize = 0; // octet idx
    let mut lo: u16 = 0;
    let mut hi: Option<u16> = None;
    let mut dash: bool = false; // next number is the high end of a term

    loop {
        let Some((n, used)) = decimal(&s[pos..]) else {
            return Err(ParseError::Number(lossy(&s[pos..])));
        };
        if n > u32::from(IPV4_GROUP_MAX) {
            return Err(ParseError::InvalidV4Octet(n));
        }
        match dash {
            true => hi = Some(n as u16),
            false => lo = n as u16,
        }
        pos += used;

        match s.get(pos) {
            Some(&DASH) => {
                if dash {
                    return Err(ParseError::TooManyDashes(lossy(&s[pos..])));
                }
                dash = true;
            }
            Some(&COMMA) => {
                ip.push(i, lo, hi.take());
                dash = false;
            }
            Some(&DOT) if i + 1 < IPV4_GROUPS => {
                ip.push(i, lo, hi.take());
                dash = false;
                i += 1;
            }
            _ => {
                ip.push(i, lo, hi.take());
                i += 1;
                break;
            }
        }
        pos += 1;
    }

    if i < IPV4_GROUPS {
        return Err(ParseError::MissingGroups { fam: IpFam::V4, got: i });
    }
    Ok((ip, pos))
}

/**
Parse an IPv6 literal from the start of `s`. Groups are hexadecimal, with
the same `lo-hi` and comma forms as IPv4, plus:
- a single `::` anywhere, standing for one or more zero groups
- a trailing dotted IPv4 literal filling the last two groups

Like [parse_v4], stops at the first byte that cannot continue the literal.
*/
fn parse_v6(s: &[u8]) -> Result<(GroupBounds, usize), ParseError> {
    let mut ip = GroupBounds::new(IpFam::V6);
    let mut pos: usize = 0;
    let mut i: usize = 0; // group idx
    let mut elision: Option<usize> = None;
    let mut lo: u16 = 0;
    let mut hi: Option<u16> = None;
    let mut dash: bool = false;

    if s.starts_with(&[COLON, COLON]) {
        elision = Some(0);
        pos = 2;
    }

    // a leading '::' may be the whole address
    let mut more: bool = elision.is_none() || starts_number(s, pos);

    while more {
        let Some((n, used)) = hexadecimal(&s[pos..]) else {
            return Err(ParseError::Number(lossy(&s[pos..])));
        };

        // followed by a dot: the rest of the address is dotted IPv4
        if s.get(pos + used) == Some(&DOT) {
            if dash || !ip.is_empty_at(i) || i + 2 > IPV6_GROUPS {
                return Err(ParseError::EmbeddedV4(lossy(&s[pos..])));
            }
            let (v4, used) = parse_v4(&s[pos..])?;
            ip.merge_v4(i, &v4);
            pos += used;
            i += 2;
            break;
        }

        if n > u32::from(IPV6_GROUP_MAX) {
            return Err(ParseError::InvalidV6Hextet(n));
        }
        match dash {
            true => hi = Some(n as u16),
            false => lo = n as u16,
        }
        pos += used;

        match s.get(pos) {
            Some(&DASH) => {
                if dash {
                    return Err(ParseError::TooManyDashes(lossy(&s[pos..])));
                }
                dash = true;
                pos += 1;
            }
            Some(&COMMA) => {
                ip.push(i, lo, hi.take());
                dash = false;
                pos += 1;
            }
            Some(&COLON) if i + 1 < IPV6_GROUPS => {
                ip.push(i, lo, hi.take());
                dash = false;
                i += 1;
                pos += 1;

                if s.get(pos) == Some(&COLON) {
                    if elision.is_some() {
                        return Err(ParseError::ElisionTwice(lossy(&s[pos - 1..])));
                    }
                    elision = Some(i);
                    pos += 1;
                    // may also end the address
                    more = starts_number(s, pos);
                }
            }
            _ => {
                ip.push(i, lo, hi.take());
                i += 1;
                more = false;
            }
        }
    }

    match (elision, i < IPV6_GROUPS) {
        (Some(at), true) => expand_elision(&mut ip, at, i),
        (None, true) => return Err(ParseError::MissingGroups { fam: IpFam::V6, got: i }),
        (Some(_), false) => return Err(ParseError::ElisionEmpty),
        (None, false) => {}
    }
    Ok((ip, pos))
}

/// Move the `parsed - at` groups after the elision to the end and zero the gap.
fn expand_elision(ip: &mut GroupBounds, at: usize, parsed: usize) {
    let gap: usize = IPV6_GROUPS - parsed;
    let groups: &mut Vec<Vec<Bound>> = ip.groups_mut();
    groups.truncate(parsed);
    groups.splice(at..at, std::iter::repeat(vec![Bound::ZERO]).take(gap));
}

/* ---------------------------------- */

#[inline]
fn starts_number(s: &[u8], pos: usize) -> bool {
    s.get(pos).is_some_and(u8::is_ascii_hexdigit)
}

#[inline]
fn expect_end(rest: &[u8]) -> Result<(), ParseError> {
    match rest.is_empty() {
        true => Ok(()),
        false => Err(ParseError::Trailing(lossy(rest))),
    }
}

#[inline]
fn lossy(s: &[u8]) -> String {
    String::from_utf8_lossy(s).into_owned()
}

/* -------------------------------------------------------------------------- */
