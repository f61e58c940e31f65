//! Command implementations behind the CLI surface.
//!
//! Exit code convention: 0 success, 1 validation failure (the submission is
//! wrong), 2 internal failure (template, storage, or a hard clause error).

use std::path::Path;

use anyhow::Context;
use serde_json::json;
use tracing::info;

use mietwerk_core::{Decisions, Facts, build_render_context, normalize};
use mietwerk_store::{StoreError, shared_store};

fn load_submissions(
    facts_path: &Path,
    decisions_path: &Path,
) -> anyhow::Result<(Facts, Decisions)> {
    let facts = normalize::facts(&load_json(facts_path)?);
    let decisions = normalize::decisions(&load_json(decisions_path)?);
    Ok((facts, decisions))
}

fn load_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

pub fn validate(facts_path: &Path, decisions_path: &Path) -> anyhow::Result<i32> {
    let (facts, decisions) = load_submissions(facts_path, decisions_path)?;

    let report = mietwerk_core::validate(&facts, &decisions);
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({ "ok": report.ok, "errors": report.errors }))?
    );
    Ok(if report.ok { 0 } else { 1 })
}

pub async fn generate(
    facts_path: &Path,
    decisions_path: &Path,
    template_path: &Path,
    out: Option<&Path>,
) -> anyhow::Result<i32> {
    let (facts, decisions) = load_submissions(facts_path, decisions_path)?;

    let report = mietwerk_core::validate(&facts, &decisions);
    if !report.ok {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "ok": false, "errors": report.errors }))?
        );
        return Ok(1);
    }

    let ctx = build_render_context(&facts, &decisions).context("building render context")?;

    let template = std::fs::read(template_path)
        .with_context(|| format!("reading template {}", template_path.display()))?;
    let document = mietwerk_docx::render(&template, &ctx).context("merging template")?;

    if let Some(path) = out {
        std::fs::write(path, &document)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "contract written");
    }

    let store = shared_store();
    let id = store.save(&document).await.context("storing contract")?;
    let url = store.url(&id);

    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "ok": true,
            "fileId": id,
            "downloadUrl": url,
        }))?
    );
    Ok(0)
}

pub async fn download(id: &str, out: Option<&Path>) -> anyhow::Result<i32> {
    let store = shared_store();
    let data = match store.read(id).await {
        Ok(data) => data,
        Err(StoreError::NotFound(id)) => {
            eprintln!("contract not found: {id}");
            return Ok(1);
        }
        Err(e) => return Err(e).context("fetching contract"),
    };

    let target = out.map(Path::to_path_buf).unwrap_or_else(|| id.into());
    std::fs::write(&target, &data)
        .with_context(|| format!("writing {}", target.display()))?;
    info!(path = %target.display(), bytes = data.len(), "contract downloaded");
    Ok(0)
}
