use dnstrace_api::dto::{RecordResponse, ServerResponse, StepResponse, TraceResponse};
use std::fmt::Write;

/// Plain-text rendering of a trace, one "Searching for" line per step
/// followed by the record tables of the final answer.
pub fn render_text(trace: &TraceResponse) -> String {
    let mut out = String::new();

    for step in &trace.steps {
        let _ = write!(
            out,
            "Searching for {} at {}: ",
            trace.query,
            server_label(&step.server)
        );
        render_step(&mut out, step);
    }

    let verb = if trace.outcome == "answered" {
        "resolved in"
    } else {
        "ended after"
    };
    let _ = writeln!(
        out,
        "\n{} {} {} {} across {} referral(s): {}",
        trace.query, trace.record_type, verb, trace.total_elapsed, trace.referrals, trace.outcome
    );
    out
}

fn render_step(out: &mut String, step: &StepResponse) {
    let took = step.elapsed.as_deref().unwrap_or("-");

    match step.kind {
        "referral" => {
            let next = step
                .next_server
                .as_ref()
                .map(server_label)
                .unwrap_or_default();
            let _ = writeln!(out, "Got referral to {} [took {}]", next, took);
        }
        "answered" => {
            let _ = writeln!(out, "[took {}]", took);
            render_section(out, "Answer", &step.answers);
            render_section(out, "Authority", &step.authority);
            render_section(out, "Additional", &step.additional);
        }
        "no_such_record" => {
            let _ = writeln!(out, "Failed: No results [took {}]", took);
        }
        "too_many_referrals" => {
            let _ = writeln!(
                out,
                "Failed: gave up after {} referrals [took {}]",
                step.limit.unwrap_or_default(),
                took
            );
        }
        _ => {
            let _ = writeln!(
                out,
                "Failed: {}",
                step.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
}

fn render_section(out: &mut String, title: &str, records: &[RecordResponse]) {
    if records.is_empty() {
        return;
    }

    let name_width = records.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let type_width = records
        .iter()
        .map(|r| r.record_type.len())
        .max()
        .unwrap_or(0);

    let _ = writeln!(out, "\n{}:", title);
    for record in records {
        let _ = writeln!(
            out,
            "  {:<nw$}  {:<tw$}  {:>6}  {}",
            record.name,
            record.record_type,
            record.ttl,
            record.data,
            nw = name_width,
            tw = type_width,
        );
    }
}

fn server_label(server: &ServerResponse) -> String {
    match &server.address {
        Some(address) => format!("{} ({})", server.name, address),
        None => server.name.clone(),
    }
}
