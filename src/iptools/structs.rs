// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    addresses::ip_to_big, ParseError, IPV4_BITS, IPV4_GROUPS, IPV4_GROUP_MAX, IPV4_LEN, IPV6_BITS,
    IPV6_GROUPS, IPV6_GROUP_MAX, IPV6_LEN,
};
use ipnet::IpNet;
use num_bigint::BigUint;
use std::net::IpAddr;

/// IP address family
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IpFam {
    V4,
    V6,
}

impl IpFam {
    pub fn of(ip: &IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => IpFam::V4,
            IpAddr::V6(_) => IpFam::V6,
        }
    }

    /// Address width in bytes.
    pub const fn width(self) -> usize {
        match self {
            IpFam::V4 => IPV4_LEN,
            IpFam::V6 => IPV6_LEN,
        }
    }

    pub const fn bits(self) -> u8 {
        match self {
            IpFam::V4 => IPV4_BITS,
            IpFam::V6 => IPV6_BITS,
        }
    }

    /// Number of positions: octets for **v4**, 16-bit groups for **v6**.
    pub const fn groups(self) -> usize {
        match self {
            IpFam::V4 => IPV4_GROUPS,
            IpFam::V6 => IPV6_GROUPS,
        }
    }

    /// Largest value a single position can hold.
    pub const fn group_max(self) -> u16 {
        match self {
            IpFam::V4 => IPV4_GROUP_MAX,
            IpFam::V6 => IPV6_GROUP_MAX,
        }
    }
}

/* -------------------------------------------------------------------------- */

/// Inclusive range of IP addresses (endpoints are included).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct IpRange {
    pub beg: IpAddr,
    pub end: IpAddr,
}

impl IpRange {
    /// Create a new [IpRange]. Ensures that IP families match and order is correct.
    pub fn new(beg: IpAddr, end: IpAddr) -> Result<Self, ParseError> {
        if IpFam::of(&beg) != IpFam::of(&end) {
            return Err(ParseError::Mismatch(beg, end));
        }
        if beg > end {
            return Err(ParseError::RangeOrder(beg, end));
        }
        Ok(Self { beg, end })
    }

    pub fn family(&self) -> IpFam {
        IpFam::of(&self.beg)
    }

    /// True for a hand-built range with `beg > end` or mixed families. [IpRange::new] never returns one.
    pub fn is_empty(&self) -> bool {
        IpFam::of(&self.beg) != IpFam::of(&self.end) || self.beg > self.end
    }

    /// `beg <= ip <= end`, false for an address of the other family.
    pub fn contains(&self, ip: &IpAddr) -> bool {
        !self.is_empty() && IpFam::of(ip) == self.family() && self.beg <= *ip && *ip <= self.end
    }

    /// Number of addresses in the range, `end - beg + 1`.
    pub fn count(&self) -> BigUint {
        if self.is_empty() {
            return BigUint::default();
        }
        ip_to_big(&self.end) - ip_to_big(&self.beg) + 1u32
    }
}

/// Whole network block of a CIDR, host bits of the address are ignored.
impl From<IpNet> for IpRange {
    fn from(net: IpNet) -> Self {
        Self {
            beg: net.network(),
            end: net.broadcast(),
        }
    }
}

/* -------------------------------------------------------------------------- */
