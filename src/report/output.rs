use crate::config::RunConfig;
use crate::git::GitRepo;
use crate::model::{AggregateResult, AuthorDistribution, MonthAuthors, MonthlyPoint, ReportOutput, SCHEMA_VERSION};
use crate::util::month_key;
use anyhow::Result;
use chrono::Utc;
use console::style;

pub fn build_report(
    result: &AggregateResult,
    months: &[MonthlyPoint],
    authors: &AuthorDistribution,
    repo: &GitRepo,
    config: &RunConfig,
) -> ReportOutput {
    let buckets = result
        .buckets
        .iter()
        .enumerate()
        .map(|(index, bucket)| MonthAuthors {
            month: result
                .range
                .month_start(index as u32)
                .map(|start| month_key(&start))
                .unwrap_or_default(),
            authors: bucket.author_counts.clone(),
        })
        .collect();

    ReportOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo.path().to_string_lossy().to_string(),
        start: result.range.start(),
        end: result.range.end(),
        time_frame: result.time_frame.clone(),
        threshold: config.threshold,
        total_commits: result.total_commits,
        excluded_commits: result.excluded_commits,
        months: months.to_vec(),
        buckets,
        authors: authors.clone(),
    }
}

pub fn output_json(report: &ReportOutput) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn output_ndjson(months: &[MonthlyPoint]) -> Result<()> {
    for point in months {
        println!("{}", serde_json::to_string(point)?);
    }
    Ok(())
}

/// Short plain summary for `export` without a format flag.
pub fn output_text(result: &AggregateResult, authors: &AuthorDistribution) -> Result<()> {
    println!("{}", style("Export Summary").bold());
    println!("{}", "─".repeat(50));
    println!("Time frame: {}", style(&result.time_frame).dim());
    println!("Months: {}", style(result.buckets.len()).cyan());
    println!("Total commits: {}", style(result.total_commits).cyan());
    println!("Unique authors: {}", style(authors.total_authors).yellow());
    println!("\nUse --json or --ndjson flags to export the raw data.");
    Ok(())
}

pub fn output_summary(result: &AggregateResult, months: &[MonthlyPoint], authors: &AuthorDistribution) -> Result<()> {
    println!(
        "{}",
        style(format!(
            "Git commits per month ({} in total) ({})",
            result.total_commits, result.time_frame
        ))
        .bold()
    );
    println!("{}", "─".repeat(50));

    if months.is_empty() {
        println!("No data to display");
        return Ok(());
    }

    let max_commits = months.iter().map(|m| m.commit_count).max().unwrap_or(0).max(1);

    for point in months {
        let intensity = ((point.commit_count as f64 / max_commits as f64) * 5.0) as u32;
        let glyph = match intensity {
            0 if point.commit_count > 0 => "▁",
            0 => " ",
            1 => "▁",
            2 => "▃",
            3 => "▅",
            4 => "▇",
            _ => "█",
        };
        println!(
            "{} {} commits: {:>5}, authors: {:>3}",
            point.month,
            style(glyph).green(),
            point.commit_count,
            point.author_count
        );
    }

    println!(
        "\n{}",
        style(format!(
            "Commits per author ({} in total, {} authors)",
            authors.total_commits(),
            authors.total_authors
        ))
        .bold()
    );
    println!("{}", "─".repeat(50));

    let total = authors.total_commits().max(1);
    for entry in &authors.entries {
        let share = entry.commits as f64 * 100.0 / total as f64;
        let name = if entry.grouped {
            style(format!("{} ({} authors)", entry.name, authors.grouped_authors)).dim()
        } else {
            style(entry.name.clone())
        };
        println!("{:<40} {:>6} {:>5.1}%", name, entry.commits, share);
    }

    Ok(())
}
