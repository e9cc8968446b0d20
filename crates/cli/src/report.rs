//! dig-style rendering of a lookup.

use ferrous_dig_application::use_cases::Lookup;
use ferrous_dig_domain::{Message, ResourceRecord};
use std::fmt::Write;

pub fn render_banner(version: &str, targets: &[String]) -> String {
    format!("; <<>> ferrous-dig {} <<>> {}\n", version, targets.join(" "))
}

pub fn render_lookup(lookup: &Lookup) -> String {
    let mut out = String::new();
    render_message(&mut out, &lookup.response);

    let server = lookup.server;
    let _ = writeln!(out, ";; Query time: {} msec", lookup.elapsed.as_millis());
    let _ = writeln!(out, ";; SERVER: {}#{}({})", server.ip(), server.port(), server.ip());
    let _ = writeln!(out, ";; MSG SIZE  rcvd: {}", lookup.response_size);
    out
}

pub fn render_failure(error: &anyhow::Error) -> String {
    format!(";; {:#}\n", error)
}

fn render_message(out: &mut String, message: &Message) {
    let header = &message.header;
    let status = header
        .rcode
        .as_status()
        .map(str::to_string)
        .unwrap_or_else(|| header.rcode.to_string());

    let _ = writeln!(out, ";; Got answer:");
    let _ = writeln!(
        out,
        ";; ->>HEADER<<- opcode: {}, status: {}, id: {}",
        header.opcode, status, header.id
    );
    let _ = writeln!(
        out,
        ";; flags: {}; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
        header.flag_names().join(" "),
        header.qdcount,
        header.ancount,
        header.nscount,
        header.arcount
    );
    out.push('\n');

    if !message.questions.is_empty() {
        let _ = writeln!(out, ";; QUESTION SECTION:");
        for question in &message.questions {
            let _ = writeln!(
                out,
                ";{}\t\t\t{}\t{}",
                question.name, question.qclass, question.qtype
            );
        }
        out.push('\n');
    }

    render_section(out, "ANSWER", &message.answers, true);
    render_section(out, "AUTHORITY", &message.authorities, false);
    render_section(out, "ADDITIONAL", &message.additionals, false);
}

fn render_section(out: &mut String, title: &str, records: &[ResourceRecord], always: bool) {
    if records.is_empty() && !always {
        return;
    }
    let _ = writeln!(out, ";; {} SECTION:", title);
    for record in records {
        let _ = writeln!(
            out,
            "{}\t\t{}\t{}\t{}\t{}",
            record.name,
            record.ttl,
            record.class,
            record.rtype,
            rdata_text(record)
        );
    }
    out.push('\n');
}

/// IPv4 for address records, RFC 3597 generic form for everything else.
fn rdata_text(record: &ResourceRecord) -> String {
    if let Some(addr) = record.ipv4() {
        return addr.to_string();
    }
    if record.rdata.is_empty() {
        return "\\# 0".to_string();
    }
    let hex: String = record.rdata.iter().map(|b| format!("{:02x}", b)).collect();
    format!("\\# {} {}", record.rdata.len(), hex)
}
