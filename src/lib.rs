// Copyright (c) 2024-2026 Mikko Tanner. All rights reserved.

/*!
Compact IPv4/IPv6 range expressions: parse once, then count, test
membership and enumerate.

```
use iprange::{parse, BigUint};
use std::net::IpAddr;

let r = parse("192.168.1-2,4.1-10").unwrap();
assert_eq!(r.count(), BigUint::from(30u32));
assert!(r.contains(&"192.168.2.5".parse::<IpAddr>().unwrap()));
assert_eq!(r.iter().next(), Some("192.168.1.1".parse().unwrap()));
```

Accepted notations, for both families:
- single address: `10.0.0.1`, `2001:db8::68`
- CIDR: `10.0.0.0/8`, `2001:db8::/120`
- min/max: `10.0.0.1_10.0.0.9`, `::ffff:1.2.3.4_::ffff:1.2.3.8`
- per-position ranges and lists: `10.0.1,3,5.1-10`, `2001:db8::0,1:68-80`
*/

mod iptools;

pub use iptools::{
    decimal, groups_to_ip, hexadecimal, increment, ip_to_big, ip_to_groups, parse, parse_many,
    Bound, GroupBounds, IpFam, IpRange, ParseError, Range, RangeIter,
};
pub use num_bigint::BigUint;
