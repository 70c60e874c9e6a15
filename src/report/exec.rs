use super::{fetch_aggregate, output_json, output_ndjson, output_summary, output_text, write_page};
use crate::config::RunConfig;
use crate::git::GitRepo;
use crate::model::AggregateResult;
use crate::project::{project_author_distribution, project_monthly};
use anyhow::Context;
use std::path::Path;
use std::time::Instant;
use tracing::info;

fn collect(config: &RunConfig) -> anyhow::Result<(GitRepo, AggregateResult)> {
    let repo = GitRepo::open(config.repo.as_ref()).context("Failed to open git repository")?;
    info!("opened repository {}", repo.path().display());

    let result = fetch_aggregate(&repo, config)?;
    Ok((repo, result))
}

fn finished(started: Instant) {
    let elapsed = std::time::Duration::from_millis(started.elapsed().as_millis() as u64);
    info!("finished in {}", humantime::format_duration(elapsed));
}

pub fn chart(config: &RunConfig, output: &Path) -> anyhow::Result<()> {
    let started = Instant::now();
    let (_, result) = collect(config)?;

    let months = project_monthly(&result);
    let authors = project_author_distribution(&result, config.threshold);
    write_page(output, &result, &months, &authors)?;

    info!("output in {}", output.display());
    finished(started);
    Ok(())
}

pub fn summary(config: &RunConfig) -> anyhow::Result<()> {
    let started = Instant::now();
    let (_, result) = collect(config)?;

    let months = project_monthly(&result);
    let authors = project_author_distribution(&result, config.threshold);
    output_summary(&result, &months, &authors)?;

    finished(started);
    Ok(())
}

pub fn export(config: &RunConfig, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let started = Instant::now();
    let (repo, result) = collect(config)?;

    let months = project_monthly(&result);
    let authors = project_author_distribution(&result, config.threshold);

    if json {
        let report = super::output::build_report(&result, &months, &authors, &repo, config);
        output_json(&report)?;
    } else if ndjson {
        output_ndjson(&months)?;
    } else {
        output_text(&result, &authors)?;
    }

    finished(started);
    Ok(())
}
