//! Self-contained HTML page with a monthly bar chart and an author pie chart,
//! drawn client side by ECharts.

use crate::model::{AggregateResult, AuthorDistribution, MonthlyPoint};
use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::path::Path;

const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

pub fn bar_options(result: &AggregateResult, months: &[MonthlyPoint]) -> Value {
    let labels: Vec<&str> = months.iter().map(|m| m.month.as_str()).collect();
    let commits: Vec<u64> = months.iter().map(|m| m.commit_count).collect();
    let authors: Vec<usize> = months.iter().map(|m| m.author_count).collect();

    json!({
        "title": {
            "text": format!("Git commits per month ({} in total)", result.total_commits),
            "subtext": result.time_frame,
        },
        "tooltip": { "trigger": "axis" },
        "legend": { "data": ["Commits", "Authors"], "top": "bottom" },
        "xAxis": { "type": "category", "data": labels },
        "yAxis": { "type": "value" },
        "series": [
            { "name": "Commits", "type": "bar", "data": commits },
            { "name": "Authors", "type": "bar", "data": authors },
        ],
    })
}

pub fn pie_options(result: &AggregateResult, authors: &AuthorDistribution) -> Value {
    let data: Vec<Value> = authors
        .entries
        .iter()
        .map(|entry| json!({ "name": entry.name, "value": entry.commits }))
        .collect();

    json!({
        "title": {
            "text": format!("Commits per author ({} in total)", result.total_commits),
            "subtext": result.time_frame,
        },
        "tooltip": { "trigger": "item", "formatter": "{b}: {c} ({d}%)" },
        "series": [
            { "name": "Commits", "type": "pie", "radius": "60%", "data": data },
        ],
    })
}

pub fn render_page(result: &AggregateResult, months: &[MonthlyPoint], authors: &AuthorDistribution) -> Result<String> {
    let bar = script_json(&bar_options(result, months))?;
    let pie = script_json(&pie_options(result, authors))?;
    let title = escape_html(&format!("Commit activity ({})", result.time_frame));

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{ECHARTS_URL}"></script>
</head>
<body>
<div id="monthly" style="width:960px;height:500px;margin:24px auto;"></div>
<div id="authors" style="width:960px;height:500px;margin:24px auto;"></div>
<script>
echarts.init(document.getElementById("monthly")).setOption({bar});
echarts.init(document.getElementById("authors")).setOption({pie});
</script>
</body>
</html>
"#
    ))
}

pub fn write_page(
    path: &Path,
    result: &AggregateResult,
    months: &[MonthlyPoint],
    authors: &AuthorDistribution,
) -> Result<()> {
    let page = render_page(result, months, authors)?;
    std::fs::write(path, page).with_context(|| format!("Failed to write chart to {}", path.display()))
}

/// Serializes `value` so it can be embedded in a script element verbatim.
fn script_json(value: &Value) -> Result<String> {
    let raw = serde_json::to_string(value)?;
    Ok(raw
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
