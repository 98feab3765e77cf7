//! Stat file import command.

use std::path::Path;

use crate::{
    ingest::{import_period, read_stat_lines, ImportSummary},
    storage::Period,
    PeriodId, Result, Season,
};

use super::common::CommandContext;

/// Parameters for `import`
#[derive(Debug)]
pub struct ImportParams<'a> {
    pub period: PeriodId,
    pub season: Season,
    pub label: Option<String>,
    pub file: &'a Path,
    pub replace: bool,
}

/// Handle `import`
pub fn handle_import(ctx: &mut CommandContext, params: ImportParams<'_>) -> Result<ImportSummary> {
    let file = read_stat_lines(params.file)?;
    println!(
        "Importing {} stat lines into period {} ({})...",
        file.lines.len(),
        params.period,
        params.season
    );

    let period = Period {
        period_id: params.period,
        season: params.season,
        label: params.label,
    };
    let mut summary = import_period(&mut ctx.db, &period, file.lines, params.replace)?;
    summary.malformed = file.malformed;

    println!("✓ Imported {} team stat lines", summary.imported);
    if !summary.unmatched.is_empty() {
        println!("⚠ No matching team for: {}", summary.unmatched.join(", "));
    }
    if !summary.ambiguous.is_empty() {
        println!("⚠ Ambiguous team names: {}", summary.ambiguous.join(", "));
    }
    if !summary.duplicates.is_empty() {
        println!("⚠ Skipped repeated lines for: {}", summary.duplicates.join(", "));
    }
    if summary.malformed > 0 {
        println!("⚠ Skipped {} malformed entries", summary.malformed);
    }

    Ok(summary)
}
