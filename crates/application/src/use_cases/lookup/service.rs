use ferrous_doh_domain::SrvRecord;

/// RFC 2782 owner name. Both parts empty means `name` is queried as is, for
/// services published under non-standard names.
pub(crate) fn srv_target_name(service: &str, proto: &str, name: &str) -> String {
    if service.is_empty() && proto.is_empty() {
        name.to_string()
    } else {
        format!("_{}._{}.{}", service, proto, name)
    }
}

/// Parses `"priority weight port target"` payloads, dropping malformed ones,
/// ordered by priority then weight.
pub(crate) fn parse_srv(datas: &[String]) -> Vec<SrvRecord> {
    let mut records: Vec<SrvRecord> = datas.iter().filter_map(|d| parse_one(d)).collect();
    records.sort_by_key(|r| (r.priority, r.weight));
    records
}

fn parse_one(data: &str) -> Option<SrvRecord> {
    let mut fields = data.split_whitespace();
    let priority = fields.next()?.parse().ok()?;
    let weight = fields.next()?.parse().ok()?;
    let port = fields.next()?.parse().ok()?;
    let target = fields.next()?;
    Some(SrvRecord::new(target, port, priority, weight))
}
