// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    bounds::GroupBounds,
    iter::RangeIter,
    structs::{IpFam, IpRange},
};
use ipnet::IpNet;
use num_bigint::BigUint;
use std::net::IpAddr;

/**
A parsed set of IP addresses.

Produced by [parse](super::parse) and immutable afterwards. Any number of
independent [RangeIter]s can be taken from the same range.
*/
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Range {
    /// exactly one address
    Single(IpAddr),
    /// contiguous interval, from CIDR or `min_max` notation
    MinMax(IpRange),
    /// cartesian product of per-position bounds, e.g. `10.0.1-2.1,5`
    Octets(GroupBounds),
    /**
    Union of ranges, in order. Counting is additive, so addresses covered
    by more than one member are counted (and enumerated) once per member.
    */
    Multi(Vec<Range>),
}

impl Range {
    /// Combine `ranges` into a single composite range.
    pub fn union(ranges: Vec<Range>) -> Self {
        Range::Multi(ranges)
    }

    /// Whether `ip` is in the range. An address of the wrong family is never contained.
    pub fn contains(&self, ip: &IpAddr) -> bool {
        match self {
            Range::Single(addr) => addr == ip,
            Range::MinMax(r) => r.contains(ip),
            Range::Octets(b) => b.contains(ip),
            Range::Multi(rr) => rr.iter().any(|r| r.contains(ip)),
        }
    }

    /**
    Number of addresses in the range. Always equal to the number of items
    a fresh [Range::iter] yields.

    Cannot be a [u128]: a `::/0` range alone holds `2^128` addresses, and
    unions or overlapping per-position lists can go beyond that.
    */
    pub fn count(&self) -> BigUint {
        match self {
            Range::Single(_) => BigUint::from(1u8),
            Range::MinMax(r) => r.count(),
            Range::Octets(b) => b.count(),
            Range::Multi(rr) => rr.iter().map(Range::count).sum(),
        }
    }

    /**
    Returns an iterator over all [IpAddr]s in the range.

    NOTE: large ranges (e.g. an IPv6 /64) produce an enormous number of
    addresses. Check [Range::count] first if that matters.
    */
    pub fn iter(&self) -> RangeIter<'_> {
        RangeIter::new(self)
    }

    /// Address family, or None for an empty or mixed-family union.
    pub fn family(&self) -> Option<IpFam> {
        match self {
            Range::Single(ip) => Some(IpFam::of(ip)),
            Range::MinMax(r) => Some(r.family()),
            Range::Octets(b) => Some(b.family()),
            Range::Multi(rr) => {
                let mut fams = rr.iter().map(Range::family);
                let first: IpFam = fams.next()??;
                fams.all(|f| f == Some(first)).then_some(first)
            }
        }
    }

    /// True if the range holds no addresses, e.g. an empty union.
    pub fn is_empty(&self) -> bool {
        match self {
            Range::Single(_) => false,
            Range::MinMax(r) => r.is_empty(),
            Range::Octets(b) => b.is_empty(),
            Range::Multi(rr) => rr.iter().all(Range::is_empty),
        }
    }
}

impl From<IpAddr> for Range {
    fn from(ip: IpAddr) -> Self {
        Range::Single(ip)
    }
}

impl From<IpNet> for Range {
    fn from(net: IpNet) -> Self {
        Range::MinMax(IpRange::from(net))
    }
}

impl FromIterator<Range> for Range {
    fn from_iter<I: IntoIterator<Item = Range>>(iter: I) -> Self {
        Range::union(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Range {
    type Item = IpAddr;
    type IntoIter = RangeIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/* -------------------------------------------------------------------------- */
