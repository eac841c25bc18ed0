use std::fmt::Write;

use crate::content::{Contribution, MetricsTable};
use crate::render::html::escape;

const TABLE_CLASS: &str = "contribution-table";

fn open_table(out: &mut String, headers: &[&str]) {
    let _ = write!(out, r#"<table class="{TABLE_CLASS}"><thead><tr>"#);
    for header in headers {
        let _ = write!(out, "<th>{}</th>", escape(header));
    }
    out.push_str("</tr></thead><tbody>");
}

/// `Metric | <columns>` table, values printed with four decimals.
pub fn metrics(table: &MetricsTable) -> String {
    let mut out = String::new();
    let _ = write!(out, "<p><strong>{}:</strong></p>", escape(&table.title));

    let mut headers = vec!["Metric"];
    headers.extend(table.columns.iter().map(String::as_str));
    open_table(&mut out, &headers);

    for row in &table.rows {
        let _ = write!(out, "<tr><td>{}</td>", escape(&row.metric));
        for value in &row.values {
            let _ = write!(out, "<td>{value:.4}</td>");
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

/// `Team Member | Contribution` table, one bullet line per item.
pub fn contributions(rows: &[Contribution]) -> String {
    let mut out = String::new();
    open_table(&mut out, &["Team Member", "Contribution"]);
    for row in rows {
        let items: Vec<String> = row.items.iter().map(|item| format!("• {}", escape(item))).collect();
        let _ = write!(out, "<tr><td>{}</td><td>{}</td></tr>", escape(&row.member), items.join("<br>"));
    }
    out.push_str("</tbody></table>");
    out
}
