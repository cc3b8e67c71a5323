// Copyright (c) 2025 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::IPV4_GROUPS;
use num_bigint::BigUint;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Big-endian integer value of an address.
pub fn ip_to_big(ip: &IpAddr) -> BigUint {
    match ip {
        IpAddr::V4(v4) => BigUint::from(u32::from(*v4)),
        IpAddr::V6(v6) => BigUint::from(u128::from(*v6)),
    }
}

/**
Split an address into its positions: one group per octet for **v4**
(values `0..=255`), one group per big-endian 16-bit pair for **v6**.
*/
pub fn ip_to_groups(ip: &IpAddr) -> Vec<u16> {
    match ip {
        IpAddr::V4(v4) => v4.octets().iter().map(|&o| u16::from(o)).collect(),
        IpAddr::V6(v6) => v6.segments().to_vec(),
    }
}

/**
Inverse of [ip_to_groups]. Four groups make an IPv4 address, anything
else is taken as IPv6: missing trailing groups are zero, extra ones are
ignored, and **v4** groups are truncated to their low byte.
*/
pub fn groups_to_ip(groups: &[u16]) -> IpAddr {
    if groups.len() == IPV4_GROUPS {
        let mut octets: [u8; 4] = [0; 4];
        for (o, &g) in octets.iter_mut().zip(groups) {
            *o = g as u8;
        }
        return IpAddr::V4(Ipv4Addr::from(octets));
    }

    let mut segments: [u16; 8] = [0; 8];
    for (s, &g) in segments.iter_mut().zip(groups) {
        *s = g;
    }
    IpAddr::V6(Ipv6Addr::from(segments))
}

/// Increment in place, carrying across the whole width. Wraps to zero past the top.
#[inline]
pub fn increment(ip: &mut IpAddr) {
    *ip = match *ip {
        IpAddr::V4(v4) => IpAddr::V4(Ipv4Addr::from(u32::from(v4).wrapping_add(1))),
        IpAddr::V6(v6) => IpAddr::V6(Ipv6Addr::from(u128::from(v6).wrapping_add(1))),
    };
}

/* -------------------------------------------------------------------------- */
