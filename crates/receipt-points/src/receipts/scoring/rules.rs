use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use super::super::domain::Item;
use super::amount::parse_amount;
use super::{RuleAward, ScoringError, ScoringRule};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

// Exclusive bounds, minutes after midnight.
const AFTERNOON_START_MINUTE: u32 = 14 * 60;
const AFTERNOON_END_MINUTE: u32 = 16 * 60;

const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";
const PURCHASE_TIME_FORMAT: &str = "%H:%M";

pub(crate) fn retailer_name(retailer: &str) -> RuleAward {
    let count = retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64;
    RuleAward {
        rule: ScoringRule::RetailerName,
        points: count,
        note: format!("{count} alphanumeric characters in '{retailer}'"),
    }
}

/// Both total bonuses. They are additive: `100.00` earns the round-dollar and the quarter bonus.
pub(crate) fn total_awards(total: &str) -> Result<[RuleAward; 2], ScoringError> {
    let amount = parse_amount("total", total)?;

    // Scale is fixed at 2, so the mantissa is the total in cents.
    let cents = amount.mantissa();
    let round_dollar = cents % 100 == 0;
    let quarter_multiple = cents % 25 == 0;

    Ok([
        RuleAward {
            rule: ScoringRule::RoundDollarTotal,
            points: if round_dollar { ROUND_DOLLAR_POINTS } else { 0 },
            note: if round_dollar {
                format!("total {total} has no cents")
            } else {
                format!("total {total} has cents")
            },
        },
        RuleAward {
            rule: ScoringRule::QuarterMultipleTotal,
            points: if quarter_multiple {
                QUARTER_MULTIPLE_POINTS
            } else {
                0
            },
            note: if quarter_multiple {
                format!("total {total} is a multiple of 0.25")
            } else {
                format!("total {total} is not a multiple of 0.25")
            },
        },
    ])
}

pub(crate) fn item_pairs(items: &[Item]) -> RuleAward {
    let pairs = (items.len() / 2) as u64;
    RuleAward {
        rule: ScoringRule::ItemPairs,
        points: pairs * POINTS_PER_ITEM_PAIR,
        note: format!("{pairs} pair(s) across {} item(s)", items.len()),
    }
}

/// Every price is parsed, including prices of items whose description does not qualify.
pub(crate) fn item_descriptions(items: &[Item]) -> Result<RuleAward, ScoringError> {
    let price_factor = Decimal::new(2, 1);
    let mut points: u64 = 0;
    let mut qualifying = 0usize;

    for (index, item) in items.iter().enumerate() {
        let field = format!("items[{index}].price");
        let price = parse_amount(&field, &item.price)?;

        let description = item.short_description.trim();
        let length = description.chars().count();
        if length == 0 || length % 3 != 0 {
            continue;
        }

        let item_points = price
            .checked_mul(price_factor)
            .and_then(|product| product.ceil().to_u64())
            .ok_or(ScoringError::PointsOverflow { field })?;
        debug!(description, price = %item.price, item_points, "item description qualifies");

        qualifying += 1;
        points = points.saturating_add(item_points);
    }

    Ok(RuleAward {
        rule: ScoringRule::ItemDescriptions,
        points,
        note: format!(
            "{qualifying} of {} description(s) have a trimmed length divisible by 3",
            items.len()
        ),
    })
}

pub(crate) fn purchase_day(purchase_date: &str) -> Result<RuleAward, ScoringError> {
    let date = NaiveDate::parse_from_str(purchase_date, PURCHASE_DATE_FORMAT).map_err(|source| {
        ScoringError::InvalidPurchaseDate {
            value: purchase_date.to_string(),
            source,
        }
    })?;

    let day = date.day();
    let odd = day % 2 == 1;
    Ok(RuleAward {
        rule: ScoringRule::OddPurchaseDay,
        points: if odd { ODD_DAY_POINTS } else { 0 },
        note: format!("purchased on day {day}"),
    })
}

pub(crate) fn purchase_time(purchase_time: &str) -> Result<RuleAward, ScoringError> {
    let time = NaiveTime::parse_from_str(purchase_time, PURCHASE_TIME_FORMAT).map_err(|source| {
        ScoringError::InvalidPurchaseTime {
            value: purchase_time.to_string(),
            source,
        }
    })?;

    let minute_of_day = time.hour() * 60 + time.minute();
    let in_window = minute_of_day > AFTERNOON_START_MINUTE && minute_of_day < AFTERNOON_END_MINUTE;
    Ok(RuleAward {
        rule: ScoringRule::AfternoonPurchaseTime,
        points: if in_window { AFTERNOON_POINTS } else { 0 },
        note: format!("purchased at {}", time.format(PURCHASE_TIME_FORMAT)),
    })
}
