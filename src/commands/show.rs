//! Show command - Loads the public config and prints the result.

use serde::Serialize;

use crate::cli::args::ShowArgs;
use crate::config::{Config, Timing};
use crate::domain::FileConstraints;
use crate::errors::{AppError, AppResult};
use crate::services::{LoadOutcome, Services};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    source: &'static str,
    max_size_mb: f64,
    max_size_bytes: u64,
    supported_extensions: &'a [String],
    supported_mime_types: &'a [String],
}

/// Execute the show command
pub async fn execute(args: ShowArgs) -> AppResult<()> {
    let services = if args.offline {
        Services::offline(Timing::default())
    } else {
        // Fails before any request when the base URL is missing.
        let config = Config::from_env()?;
        tracing::debug!(?config, "Configuration loaded");
        Services::from_config(&config)?
    };

    let outcome = services.load_constraints(None).await;
    let constraints = services.registry().constraints();

    println!("{}", render(&outcome, &constraints, args.json)?);
    Ok(())
}

fn render(outcome: &LoadOutcome, constraints: &FileConstraints, json: bool) -> AppResult<String> {
    let report = Report {
        source: match outcome {
            LoadOutcome::Applied(applied) if applied.any() => "backend",
            _ => "defaults",
        },
        max_size_mb: constraints.max_size_mb(),
        max_size_bytes: constraints.max_size_bytes(),
        supported_extensions: constraints.supported_extensions(),
        supported_mime_types: constraints.supported_mime_types(),
    };

    if json {
        return serde_json::to_string_pretty(&report).map_err(|e| AppError::internal(e.to_string()));
    }

    Ok(format!(
        "source:          {}\n\
         max size:        {} MB ({} bytes)\n\
         extensions:      {}\n\
         mime types:      {}",
        report.source,
        report.max_size_mb,
        report.max_size_bytes,
        report.supported_extensions.join(", "),
        report.supported_mime_types.join(", "),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AppliedFields;

    #[test]
    fn table_reports_defaults_after_failure() {
        let out = render(
            &LoadOutcome::KeptDefaults(AppError::Timeout),
            &FileConstraints::default(),
            false,
        )
        .unwrap();
        assert!(out.starts_with("source:          defaults"));
        assert!(out.contains("10 MB (10485760 bytes)"));
        assert!(out.contains("pdf, doc, docx, txt"));
        assert_eq!(out.lines().count(), 4);
        assert!(out.lines().nth(1).unwrap().starts_with("max size:        10 MB"));
    }

    #[test]
    fn json_reports_backend_source() {
        let applied = AppliedFields {
            max_size: true,
            ..Default::default()
        };
        let out = render(&LoadOutcome::Applied(applied), &FileConstraints::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["source"], "backend");
        assert_eq!(value["maxSizeBytes"], 10485760);
    }
}
