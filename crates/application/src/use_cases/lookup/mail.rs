use ferrous_doh_domain::MxRecord;

/// Parses `"preference host"` payloads, dropping malformed ones, ordered by
/// preference.
pub(crate) fn parse_mx(datas: &[String]) -> Vec<MxRecord> {
    let mut records: Vec<MxRecord> = datas
        .iter()
        .filter_map(|data| {
            let mut fields = data.split_whitespace();
            let pref = fields.next()?.parse().ok()?;
            let host = fields.next()?;
            Some(MxRecord::new(host, pref))
        })
        .collect();
    records.sort_by_key(|r| r.pref);
    records
}
