// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    addresses::{groups_to_ip, increment},
    bounds::GroupBounds,
    range::Range,
    structs::IpRange,
};
use num_bigint::BigUint;
use std::{iter::FusedIterator, net::IpAddr};

/**
Iterator over all [IpAddr]s of a [Range], in order.

Borrows the range and keeps its own position, so any number of iterators
over the same range run independently. Once exhausted it keeps returning
`None` until [RangeIter::reset] is called.
*/
pub struct RangeIter<'a> {
    range: &'a Range,
    cursor: Cursor<'a>,
}

enum Cursor<'a> {
    Single { ip: IpAddr, done: bool },
    MinMax(MinMaxCursor<'a>),
    Octets(OctetsCursor<'a>),
    Multi(MultiCursor<'a>),
}

impl<'a> RangeIter<'a> {
    pub(crate) fn new(range: &'a Range) -> Self {
        let cursor: Cursor<'a> = match range {
            Range::Single(ip) => Cursor::Single { ip: *ip, done: false },
            Range::MinMax(r) => Cursor::MinMax(MinMaxCursor::new(r)),
            Range::Octets(b) => Cursor::Octets(OctetsCursor::new(b)),
            Range::Multi(rr) => Cursor::Multi(MultiCursor::new(rr)),
        };
        Self { range, cursor }
    }

    /// Rewind to the first address. Calling it more than once is harmless.
    pub fn reset(&mut self) {
        match &mut self.cursor {
            Cursor::Single { done, .. } => *done = false,
            Cursor::MinMax(c) => c.reset(),
            Cursor::Octets(c) => c.reset(),
            Cursor::Multi(c) => c.reset(),
        }
    }

    /// Total number of addresses in the underlying range, regardless of position.
    pub fn total(&self) -> BigUint {
        self.range.count()
    }

    /// Whether `ip` is in the underlying range.
    pub fn contains(&self, ip: &IpAddr) -> bool {
        self.range.contains(ip)
    }
}

impl Iterator for RangeIter<'_> {
    type Item = IpAddr;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.cursor {
            Cursor::Single { ip, done } => {
                if *done {
                    return None;
                }
                *done = true;
                Some(*ip)
            }
            Cursor::MinMax(c) => c.next(),
            Cursor::Octets(c) => c.next(),
            Cursor::Multi(c) => c.next(),
        }
    }
}

impl FusedIterator for RangeIter<'_> {}

/* ---------------------------------- */

/// Walks `beg..=end` by incrementing the whole address.
struct MinMaxCursor<'a> {
    range: &'a IpRange,
    current: IpAddr,
    done: bool,
}

impl<'a> MinMaxCursor<'a> {
    fn new(range: &'a IpRange) -> Self {
        Self {
            range,
            current: range.beg,
            done: range.is_empty(),
        }
    }

    fn reset(&mut self) {
        self.current = self.range.beg;
        self.done = self.range.is_empty();
    }

    fn next(&mut self) -> Option<IpAddr> {
        if self.done {
            return None;
        }

        let result: IpAddr = self.current;

        if self.current == self.range.end {
            self.done = true;
        } else {
            increment(&mut self.current);
        }

        Some(result)
    }
}

/* ---------------------------------- */

/**
Odometer over the cartesian product of per-position bounds.

The last position turns fastest. When a position runs past its active
bound it moves to its next bound, and past its last bound it starts over
from the first one and carries into the position to its left. A carry out
of the first position means every combination has been produced.
*/
struct OctetsCursor<'a> {
    bounds: &'a GroupBounds,
    /// active bound of each position
    indexes: Vec<usize>,
    current: Vec<u16>,
    done: bool,
}

impl<'a> OctetsCursor<'a> {
    fn new(bounds: &'a GroupBounds) -> Self {
        let len: usize = bounds.groups().len();
        let mut cursor = Self {
            bounds,
            indexes: vec![0; len],
            current: vec![0; len],
            done: false,
        };
        cursor.reset();
        cursor
    }

    fn reset(&mut self) {
        for (i, g) in self.bounds.groups().iter().enumerate() {
            self.indexes[i] = 0;
            self.current[i] = g.first().map_or(0, |b| b.lo);
        }
        self.done = self.bounds.is_empty();
    }

    fn next(&mut self) -> Option<IpAddr> {
        if self.done {
            return None;
        }

        let result: IpAddr = groups_to_ip(&self.current);
        self.done = !self.advance();

        Some(result)
    }

    /// Step to the next combination. Returns false on carry out of the first position.
    fn advance(&mut self) -> bool {
        for (i, g) in self.bounds.groups().iter().enumerate().rev() {
            let j: usize = self.indexes[i];

            if self.current[i] < g[j].hi {
                self.current[i] += 1;
                return true;
            }
            if let Some(next) = g.get(j + 1) {
                self.indexes[i] = j + 1;
                self.current[i] = next.lo;
                return true;
            }

            self.indexes[i] = 0;
            self.current[i] = g[0].lo;
        }
        false
    }
}

/* ---------------------------------- */

/// Drains the member ranges one after the other, creating each iterator when its turn comes.
struct MultiCursor<'a> {
    ranges: &'a [Range],
    idx: usize,
    active: Option<Box<RangeIter<'a>>>,
}

impl<'a> MultiCursor<'a> {
    fn new(ranges: &'a [Range]) -> Self {
        Self {
            ranges,
            idx: 0,
            active: None,
        }
    }

    fn reset(&mut self) {
        self.idx = 0;
        self.active = None;
    }

    fn next(&mut self) -> Option<IpAddr> {
        let ranges: &'a [Range] = self.ranges;

        while let Some(range) = ranges.get(self.idx) {
            let it: &mut RangeIter<'a> = self.active.get_or_insert_with(|| Box::new(range.iter()));
            if let Some(ip) = it.next() {
                return Some(ip);
            }
            self.active = None;
            self.idx += 1;
        }
        None
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iptools::parse;

    const CIDR_29: &str = "192.168.1.0/29";
    const OCTETS: &str = "104.16.99-100.52-55";
    const OCTETS_LIST: &str = "10.0.1,3-4,9.7";
    const V6_CIDR: &str = "2001:db8::1/126";

    fn ips(list: &[&str]) -> Vec<IpAddr> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_single_iter() {
        let r: Range = parse("192.168.1.1").unwrap();
        let mut it = r.iter();
        assert_eq!(it.next(), Some("192.168.1.1".parse().unwrap()));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_cidr_iter() {
        let r: Range = parse(CIDR_29).unwrap();
        let got: Vec<IpAddr> = r.iter().collect();
        #[rustfmt::skip]
        let expected = ips(&[
            "192.168.1.0", "192.168.1.1", "192.168.1.2", "192.168.1.3",
            "192.168.1.4", "192.168.1.5", "192.168.1.6", "192.168.1.7",
        ]);
        assert_eq!(got, expected);
    }

    #[test]
    fn test_v6_cidr_iter() {
        let r: Range = parse(V6_CIDR).unwrap();
        let got: Vec<IpAddr> = r.iter().collect();
        let expected = ips(&["2001:db8::", "2001:db8::1", "2001:db8::2", "2001:db8::3"]);
        assert_eq!(got, expected);
    }

    #[test]
    fn test_minmax_carries_across_octets() {
        let r: Range = parse("10.0.0.254_10.0.1.1").unwrap();
        let got: Vec<IpAddr> = r.iter().collect();
        let expected = ips(&["10.0.0.254", "10.0.0.255", "10.0.1.0", "10.0.1.1"]);
        assert_eq!(got, expected);
    }

    #[test]
    fn test_minmax_top_of_space() {
        // the last address must not wrap around to 0.0.0.0
        let r: Range = parse("255.255.255.254/31").unwrap();
        let got: Vec<IpAddr> = r.iter().collect();
        assert_eq!(got, ips(&["255.255.255.254", "255.255.255.255"]));
    }

    #[test]
    fn test_octets_iter() {
        let r: Range = parse(OCTETS).unwrap();
        let got: Vec<IpAddr> = r.iter().collect();
        #[rustfmt::skip]
        let expected = ips(&[
            "104.16.99.52",  "104.16.99.53",  "104.16.99.54",  "104.16.99.55",
            "104.16.100.52", "104.16.100.53", "104.16.100.54", "104.16.100.55",
        ]);
        assert_eq!(got, expected);
    }

    #[test]
    fn test_octets_list_iter() {
        // bounds are visited in ascending order regardless of how they were written
        let r: Range = parse(OCTETS_LIST).unwrap();
        let got: Vec<IpAddr> = r.iter().collect();
        let expected = ips(&["10.0.1.7", "10.0.3.7", "10.0.4.7", "10.0.9.7"]);
        assert_eq!(got, expected);

        let r: Range = parse("10.0.9,3-4,1.7").unwrap();
        assert_eq!(r.iter().collect::<Vec<IpAddr>>(), expected);
    }

    #[test]
    fn test_octets_top_values() {
        // 0xffff must not overflow the position counter
        let r: Range = parse("::fffe-ffff").unwrap();
        let got: Vec<IpAddr> = r.iter().collect();
        assert_eq!(got, ips(&["::fffe", "::ffff"]));

        let r: Range = parse("10.0.255.254-255").unwrap();
        assert_eq!(r.iter().count(), 2);
    }

    #[test]
    fn test_octets_overlapping_bounds() {
        // duplicate and overlapping alternatives are enumerated once per alternative
        let r: Range = parse("10.0.0.1,1").unwrap();
        assert_eq!(r.iter().collect::<Vec<IpAddr>>(), ips(&["10.0.0.1", "10.0.0.1"]));
        assert_eq!(r.count(), BigUint::from(2u8));

        let r: Range = parse("10.0.0.1-10,2").unwrap();
        assert_eq!(r.iter().count(), 11);
        assert_eq!(r.count(), BigUint::from(11u8));
    }

    #[test]
    fn test_reset() {
        for s in ["192.168.1.1", CIDR_29, OCTETS, OCTETS_LIST, V6_CIDR] {
            let r: Range = parse(s).unwrap();
            let mut it = r.iter();
            let first: Vec<IpAddr> = it.by_ref().collect();
            assert_eq!(it.next(), None, "Failed: '{s}'");

            it.reset();
            it.reset();
            let second: Vec<IpAddr> = it.by_ref().collect();
            assert_eq!(first, second, "Failed: '{s}'");
        }
    }

    #[test]
    fn test_reset_midway() {
        let r: Range = parse(OCTETS).unwrap();
        let mut it = r.iter();
        it.next();
        it.next();
        it.next();
        it.reset();
        assert_eq!(it.next(), Some("104.16.99.52".parse().unwrap()));
        assert_eq!(it.count(), 7);
    }

    #[test]
    fn test_independent_iterators() {
        let r: Range = parse(OCTETS).unwrap();
        let mut a = r.iter();
        let mut b = r.iter();
        a.next();
        a.next();
        assert_eq!(b.next(), Some("104.16.99.52".parse().unwrap()));
        assert_eq!(a.next(), Some("104.16.99.54".parse().unwrap()));
    }

    #[test]
    fn test_multi_iter() {
        let rr = Range::union(vec![
            parse("10.0.0.1").unwrap(),
            Range::union(Vec::new()),
            parse("10.0.0.8/31").unwrap(),
            parse("::1").unwrap(),
        ]);
        let mut it = rr.iter();
        let expected = ips(&["10.0.0.1", "10.0.0.8", "10.0.0.9", "::1"]);
        assert_eq!(it.by_ref().collect::<Vec<IpAddr>>(), expected);

        it.reset();
        assert_eq!(it.by_ref().collect::<Vec<IpAddr>>(), expected);
        assert_eq!(it.total(), BigUint::from(4u8));
        assert!(it.contains(&"10.0.0.9".parse().unwrap()));
        assert!(!it.contains(&"10.0.0.10".parse().unwrap()));
    }

    #[test]
    fn test_hand_built_empty() {
        let r = Range::MinMax(IpRange {
            beg: "10.0.0.5".parse().unwrap(),
            end: "10.0.0.1".parse().unwrap(),
        });
        assert_eq!(r.iter().next(), None);
        assert_eq!(r.count(), BigUint::default());

        let r = Range::Octets(GroupBounds::new(crate::iptools::IpFam::V4));
        assert_eq!(r.iter().next(), None);
        assert_eq!(r.count(), BigUint::default());
    }
}
