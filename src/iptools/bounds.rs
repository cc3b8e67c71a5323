// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{addresses::ip_to_groups, IpFam, IPV4_GROUP_MAX};
use num_bigint::BigUint;
use std::net::IpAddr;

/// Inclusive `[lo, hi]` bound for a single octet or 16-bit group.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bound {
    pub lo: u16,
    pub hi: u16,
}

impl Bound {
    pub const ZERO: Bound = Bound { lo: 0, hi: 0 };

    /// Number of values in the bound.
    #[inline]
    pub fn len(&self) -> u32 {
        u32::from(self.hi - self.lo) + 1
    }

    #[inline]
    pub fn contains(&self, v: u16) -> bool {
        self.lo <= v && v <= self.hi
    }
}

/**
An address written as a list of bounds for every position.

A single IP `192.168.1.1` is `[192 192] [168 168] [1 1] [1 1]`, while
`192.168.1,2.1-10` is `[192 192] [168 168] [1 1],[2 2] [1 10]`. The set of
addresses is the cartesian product of the positions.
*/
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupBounds {
    fam: IpFam,
    groups: Vec<Vec<Bound>>,
}

impl GroupBounds {
    /// Empty model, every position still waiting for its first bound.
    pub fn new(fam: IpFam) -> Self {
        Self {
            fam,
            groups: vec![Vec::new(); fam.groups()],
        }
    }

    pub fn family(&self) -> IpFam {
        self.fam
    }

    /// Per-position bound lists, most significant position first.
    pub fn groups(&self) -> &[Vec<Bound>] {
        &self.groups
    }

    /// Append a bound to position `i`. A missing `hi` means a single value,
    /// and a reversed pair is swapped.
    pub fn push(&mut self, i: usize, lo: u16, hi: Option<u16>) {
        let hi: u16 = hi.unwrap_or(lo);
        let (lo, hi) = if lo > hi { (hi, lo) } else { (lo, hi) };
        self.groups[i].push(Bound { lo, hi });
    }

    pub(crate) fn groups_mut(&mut self) -> &mut Vec<Vec<Bound>> {
        &mut self.groups
    }

    pub(crate) fn is_empty_at(&self, i: usize) -> bool {
        self.groups[i].is_empty()
    }

    /// True if some position has no bounds at all, so no address can match.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().any(Vec::is_empty)
    }

    /// True if any position holds more than one value.
    pub fn has_ranges(&self) -> bool {
        self.groups
            .iter()
            .any(|g| g.len() > 1 || g.iter().any(|b| b.lo != b.hi))
    }

    /// Stable sort of every position's bounds by ascending `lo`.
    pub fn sort(&mut self) {
        for g in self.groups.iter_mut() {
            g.sort_by_key(|b| b.lo);
        }
    }

    /// Lowest `lo` of every position. Not necessarily a member of the set.
    pub fn min(&self) -> Vec<u16> {
        self.groups
            .iter()
            .map(|g| g.iter().map(|b| b.lo).min().unwrap_or(0))
            .collect()
    }

    /// Highest `hi` of every position. Not necessarily a member of the set.
    pub fn max(&self) -> Vec<u16> {
        self.groups
            .iter()
            .map(|g| g.iter().map(|b| b.hi).max().unwrap_or(0))
            .collect()
    }

    /// Every position of `ip` falls inside some bound of that position.
    pub fn contains(&self, ip: &IpAddr) -> bool {
        if IpFam::of(ip) != self.fam {
            return false;
        }
        ip_to_groups(ip)
            .iter()
            .zip(&self.groups)
            .all(|(&v, g)| g.iter().any(|b| b.contains(v)))
    }

    /// Product over positions of the number of values each position admits.
    pub fn count(&self) -> BigUint {
        self.groups
            .iter()
            .map(|g| g.iter().map(|b| BigUint::from(b.len())).sum::<BigUint>())
            .product()
    }

    /**
    Fold an embedded dotted IPv4 tail into **v6** positions `i` and `i + 1`.

    Each **v6** group is two **v4** octets; the octet bound lists are combined
    so that the group admits exactly `hi_octet << 8 | lo_octet` for every
    admissible pair.
    */
    pub(crate) fn merge_v4(&mut self, i: usize, v4: &GroupBounds) {
        debug_assert_eq!(self.fam, IpFam::V6);
        debug_assert_eq!(v4.fam, IpFam::V4);

        for (pos, pair) in v4.groups.chunks(2).enumerate() {
            self.groups[i + pos] = combine_octets(&pair[0], &pair[1]);
        }
    }
}

/// All 16-bit bounds formed by a high octet bound list and a low one.
fn combine_octets(high: &[Bound], low: &[Bound]) -> Vec<Bound> {
    let mut out: Vec<Bound> = Vec::new();
    for h in high {
        for l in low {
            if l.lo == 0 && l.hi == IPV4_GROUP_MAX {
                // whole low octet: the high octets are contiguous
                out.push(Bound {
                    lo: h.lo << 8,
                    hi: (h.hi << 8) | IPV4_GROUP_MAX,
                });
                continue;
            }
            for v in h.lo..=h.hi {
                out.push(Bound {
                    lo: (v << 8) | l.lo,
                    hi: (v << 8) | l.hi,
                });
            }
        }
    }
    out
}

/* -------------------------------------------------------------------------- */
