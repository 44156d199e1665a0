//! Reward points scoring.
//!
//! A receipt's points are the sum of independent rule awards. Every rule is evaluated
//! for every receipt; a field that cannot be parsed fails the whole computation with a
//! [`ScoringError`] instead of contributing zero.

mod amount;
mod rules;

use serde::Serialize;

use super::domain::Receipt;

/// Identifies the rule behind an award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    RetailerName,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    ItemDescriptions,
    OddPurchaseDay,
    AfternoonPurchaseTime,
}

impl ScoringRule {
    pub fn label(&self) -> &'static str {
        match self {
            ScoringRule::RetailerName => "Retailer name",
            ScoringRule::RoundDollarTotal => "Round dollar total",
            ScoringRule::QuarterMultipleTotal => "Total is a multiple of 0.25",
            ScoringRule::ItemPairs => "Item pairs",
            ScoringRule::ItemDescriptions => "Item descriptions",
            ScoringRule::OddPurchaseDay => "Odd purchase day",
            ScoringRule::AfternoonPurchaseTime => "Purchased between 14:00 and 16:00",
        }
    }
}

/// Points granted by one rule, with a short explanation for audit output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleAward {
    pub rule: ScoringRule,
    pub points: u64,
    pub note: String,
}

/// Per-rule awards for a receipt, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub awards: Vec<RuleAward>,
}

impl PointsBreakdown {
    pub fn total(&self) -> u64 {
        self.awards
            .iter()
            .fold(0u64, |total, award| total.saturating_add(award.points))
    }

    pub fn points_for(&self, rule: ScoringRule) -> u64 {
        self.awards
            .iter()
            .filter(|award| award.rule == rule)
            .map(|award| award.points)
            .sum()
    }
}

/// A receipt field could not be read in its expected format, or scored within range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("{field} '{value}' is not a decimal currency amount")]
    InvalidAmount { field: String, value: String },
    #[error("points awarded for {field} exceed the supported range")]
    PointsOverflow { field: String },
    #[error("purchaseDate '{value}' is not a YYYY-MM-DD date")]
    InvalidPurchaseDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("purchaseTime '{value}' is not a 24-hour HH:MM time")]
    InvalidPurchaseTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Evaluates every rule against the receipt.
pub fn breakdown(receipt: &Receipt) -> Result<PointsBreakdown, ScoringError> {
    let [round_dollar, quarter_multiple] = rules::total_awards(&receipt.total)?;

    let awards = vec![
        rules::retailer_name(&receipt.retailer),
        round_dollar,
        quarter_multiple,
        rules::item_pairs(&receipt.items),
        rules::item_descriptions(&receipt.items)?,
        rules::purchase_day(&receipt.purchase_date)?,
        rules::purchase_time(&receipt.purchase_time)?,
    ];

    Ok(PointsBreakdown { awards })
}

/// Total reward points for the receipt.
pub fn score(receipt: &Receipt) -> Result<u64, ScoringError> {
    breakdown(receipt).map(|breakdown| breakdown.total())
}
