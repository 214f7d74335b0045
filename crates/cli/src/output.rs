use ferrous_doh_domain::{MxRecord, NsRecord, SrvRecord};
use serde::Serialize;
use std::fmt::Write as _;
use std::net::IpAddr;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Answers {
    Addrs(Vec<IpAddr>),
    Names(Vec<String>),
    Ns(Vec<NsRecord>),
    Srv(Vec<SrvRecord>),
    Mx(Vec<MxRecord>),
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: &'static str,
    /// Owner name actually queried, set for SRV lookups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cname: Option<String>,
    pub answers: Answers,
}

impl Report {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// One line per answer.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if let Some(cname) = &self.cname {
            let _ = writeln!(out, ";; {}", cname);
        }
        match &self.answers {
            Answers::Addrs(ips) => ips.iter().for_each(|ip| {
                let _ = writeln!(out, "{}", ip);
            }),
            Answers::Names(names) => names.iter().for_each(|n| {
                let _ = writeln!(out, "{}", n);
            }),
            Answers::Ns(ns) => ns.iter().for_each(|ns| {
                let _ = writeln!(out, "{}", ns.host);
            }),
            Answers::Srv(records) => records.iter().for_each(|r| {
                let _ = writeln!(out, "{} {} {} {}", r.priority, r.weight, r.port, r.target);
            }),
            Answers::Mx(records) => records.iter().for_each(|mx| {
                let _ = writeln!(out, "{} {}", mx.pref, mx.host);
            }),
        }
        out
    }
}
