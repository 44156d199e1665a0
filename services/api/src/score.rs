use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{scoring, PointsBreakdown, Receipt};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt in the same JSON shape accepted by POST /receipts/process
    #[arg(long)]
    pub(crate) receipt: PathBuf,
    /// Print the points awarded by each rule
    #[arg(long)]
    pub(crate) breakdown: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let breakdown = score_file(&args.receipt)?;
    if args.breakdown {
        print!("{}", render_breakdown(&breakdown));
    }
    println!("points: {}", breakdown.total());
    Ok(())
}

pub(crate) fn score_file(path: &Path) -> Result<PointsBreakdown, AppError> {
    let raw = fs::read_to_string(path)?;
    let receipt: Receipt = serde_json::from_str(&raw)?;
    Ok(scoring::breakdown(&receipt)?)
}

pub(crate) fn render_breakdown(breakdown: &PointsBreakdown) -> String {
    breakdown
        .awards
        .iter()
        .map(|award| {
            format!(
                "- {}: {} ({})\n",
                award.rule.label(),
                award.points,
                award.note
            )
        })
        .collect()
}
