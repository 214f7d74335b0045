use ferrous_doh_domain::RecordType;
use std::fmt::Write;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Parses A/AAAA payloads. Unparseable literals are kept as the unspecified
/// address of the queried family so the output stays index-aligned with the
/// provider's answer.
pub(crate) fn parse_ips(datas: Vec<String>, record_type: RecordType) -> Vec<IpAddr> {
    datas
        .iter()
        .map(|data| {
            data.trim()
                .parse::<IpAddr>()
                .unwrap_or_else(|_| unspecified(record_type))
        })
        .collect()
}

fn unspecified(record_type: RecordType) -> IpAddr {
    match record_type {
        RecordType::AAAA => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
        _ => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
    }
}

/// Name to put in a PTR query: IP literals become their `in-addr.arpa` /
/// `ip6.arpa` form, anything else is queried as given.
pub(crate) fn reverse_name(addr: &str) -> String {
    match addr.parse::<IpAddr>() {
        Ok(IpAddr::V4(v4)) => {
            let [a, b, c, d] = v4.octets();
            format!("{}.{}.{}.{}.in-addr.arpa.", d, c, b, a)
        }
        Ok(IpAddr::V6(v6)) => {
            let mut name = String::with_capacity(73);
            for byte in v6.octets().iter().rev() {
                let _ = write!(name, "{:x}.{:x}.", byte & 0x0f, byte >> 4);
            }
            name.push_str("ip6.arpa.");
            name
        }
        Err(_) => addr.to_string(),
    }
}
