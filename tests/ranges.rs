// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use iprange::{increment, ip_to_big, parse, BigUint, Range};
use std::net::IpAddr;

/// Small enough to enumerate exhaustively in a test.
#[rustfmt::skip]
const FINITE: &[&str] = &[
    "192.168.1.1",
    "192.168.1.10/24",
    "87.240.129.133/32",
    "10.0.0.250_10.0.1.5",
    "104.16.99-100.52-55",
    "192.168.1,2-5.1,2,3",
    "10.0.0-1.0-255",
    "10.3-1,7.2,2,9-8.0",
    "2001:db8::1/126",
    "1:2:3:4::1-10:1,2,ffff",
    "::ffff:10.0.1-2.250-255",
    "::fff0-ffff",
    "1::_1::2:0",
];

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

fn drain(r: &Range) -> Vec<IpAddr> {
    r.iter().collect()
}

#[test]
fn count_matches_enumeration() {
    for s in FINITE {
        let r: Range = parse(s).unwrap();
        let all: Vec<IpAddr> = drain(&r);
        assert_eq!(BigUint::from(all.len()), r.count(), "Failed: '{s}'");
    }
}

#[test]
fn reset_replays_same_sequence() {
    for s in FINITE {
        let r: Range = parse(s).unwrap();
        let mut it = r.iter();
        let first: Vec<IpAddr> = it.by_ref().collect();
        it.reset();
        let second: Vec<IpAddr> = it.by_ref().collect();
        assert_eq!(first, second, "Failed: '{s}'");
    }
}

#[test]
fn enumerated_addresses_are_contained() {
    for s in FINITE {
        let r: Range = parse(s).unwrap();
        for x in r.iter() {
            assert!(r.contains(&x), "'{s}' does not contain {x}");
        }
    }
}

#[test]
fn neighbours_outside_are_not_contained() {
    // walk a window around each small range, anything not enumerated must be rejected
    for s in ["104.16.99-100.52-55", "10.3-1,7.2,2,9-8.0", "10.0.0.250_10.0.1.5"] {
        let r: Range = parse(s).unwrap();
        let all: Vec<IpAddr> = drain(&r);

        let mut probe: IpAddr = all[0];
        let last: BigUint = ip_to_big(&all[all.len() - 1]);
        while ip_to_big(&probe) <= last {
            assert_eq!(r.contains(&probe), all.contains(&probe), "'{s}' vs {probe}");
            increment(&mut probe);
        }
    }
}

#[test]
fn wrong_family_is_never_contained() {
    let r: Range = parse("0.0.0.0/0").unwrap();
    assert!(r.contains(&ip("10.0.0.1")));
    assert!(!r.contains(&ip("::ffff:10.0.0.1")));

    let r: Range = parse("::/0").unwrap();
    assert!(r.contains(&ip("::ffff:10.0.0.1")));
    assert!(!r.contains(&ip("10.0.0.1")));
}

#[test]
fn union_semantics() {
    let r1: Range = parse("192.168.1.0/30").unwrap();
    let r2: Range = parse("192.168.1.2-5").unwrap();
    let rr = Range::union(vec![r1.clone(), r2.clone()]);

    // overlap is counted twice: union counting is additive
    assert_eq!(rr.count(), r1.count() + r2.count());
    assert_eq!(rr.count(), BigUint::from(8u32));
    assert_eq!(BigUint::from(drain(&rr).len()), rr.count());

    for last in 0..=8u8 {
        let x: IpAddr = IpAddr::from([192, 168, 1, last]);
        assert_eq!(rr.contains(&x), r1.contains(&x) || r2.contains(&x), "{x}");
    }
}

#[test]
fn boundary_endpoints() {
    let r: Range = parse("192.168.1.1").unwrap();
    assert_eq!(drain(&r), vec![ip("192.168.1.1")]);
    assert_eq!(r.count(), BigUint::from(1u8));

    let r: Range = parse("192.168.1.10/24").unwrap();
    let all: Vec<IpAddr> = drain(&r);
    assert_eq!(all.first(), Some(&ip("192.168.1.0")));
    assert_eq!(all.last(), Some(&ip("192.168.1.255")));
    assert_eq!(r.count(), BigUint::from(256u32));

    let r: Range = parse("87.240.129.133/32").unwrap();
    assert_eq!(drain(&r), vec![ip("87.240.129.133")]);

    let r: Range = parse("87.240.129.133/0").unwrap();
    assert_eq!(r.count(), BigUint::from(1u64 << 32));

    let r: Range = parse("2001:db8::1/126").unwrap();
    let expected = vec![ip("2001:db8::"), ip("2001:db8::1"), ip("2001:db8::2"), ip("2001:db8::3")];
    assert_eq!(drain(&r), expected);
}

#[test]
fn huge_counts() {
    let r: Range = parse("::/0").unwrap();
    assert_eq!(r.count(), BigUint::from(1u8) << 128);

    // every group fully listed twice: beyond 2^128
    let r: Range = parse("0-ffff,0-ffff:0:0:0:0:0:0:0").unwrap();
    assert_eq!(r.count(), BigUint::from(0x20000u32));

    let full: &str = "0-ffff,0-ffff:0-ffff,0-ffff:0-ffff,0-ffff:0-ffff,0-ffff:0-ffff,0-ffff:0-ffff,0-ffff:0-ffff,0-ffff:0-ffff,0-ffff";
    let r: Range = parse(full).unwrap();
    assert_eq!(r.count(), BigUint::from(1u8) << 136);
}

#[test]
fn bound_list_order() {
    let r: Range = parse("104.16.99-100.52-55").unwrap();
    #[rustfmt::skip]
    let expected: Vec<IpAddr> = [
        "104.16.99.52",  "104.16.99.53",  "104.16.99.54",  "104.16.99.55",
        "104.16.100.52", "104.16.100.53", "104.16.100.54", "104.16.100.55",
    ]
    .iter()
    .map(|s| ip(s))
    .collect();
    assert_eq!(drain(&r), expected);
    assert_eq!(r.count(), BigUint::from(8u8));
}

#[test]
fn rejections() {
    for s in ["192.168.1.1/33", "192.168.1-2.1/24", "1::abab:dead/1/1", ""] {
        assert!(parse(s).is_err(), "Accepted: '{s}'");
        assert!(s.parse::<Range>().is_err(), "Accepted: '{s}'");
    }
}
