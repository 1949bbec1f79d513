//! Tuition rate form: a grade/subject pair with one or more price tiers.

#[cfg(test)]
#[path = "tuition_rate_test.rs"]
mod tuition_rate_test;

use serde::Serialize;

use super::{EntityForm, FieldErrors, required};
use crate::net::entities::{RateTier, TuitionRate};

/// One editable tier row; rates stay as typed until validation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TierInput {
    pub category: String,
    pub min_rate: String,
    pub max_rate: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TuitionRateForm {
    pub grade: String,
    pub subject: String,
    pub tiers: Vec<TierInput>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TuitionRatePayload {
    pub grade: String,
    pub subject: String,
    pub tiers: Vec<RateTier>,
}

impl EntityForm for TuitionRateForm {
    type Record = TuitionRate;
    type Payload = TuitionRatePayload;

    const REQUIRE_DIRTY_EDIT: bool = true;

    /// A fresh form starts with one blank tier row.
    fn blank() -> Self {
        Self { tiers: vec![TierInput::default()], ..Self::default() }
    }

    fn from_record(record: &TuitionRate) -> Self {
        Self {
            grade: record.grade.id.clone(),
            subject: record.subject.id.clone(),
            tiers: record
                .tiers
                .iter()
                .map(|t| TierInput {
                    category: t.category.clone(),
                    min_rate: t.min_rate.to_string(),
                    max_rate: t.max_rate.to_string(),
                })
                .collect(),
        }
    }

    fn validate(&self) -> Result<TuitionRatePayload, FieldErrors> {
        let mut errors = FieldErrors::default();
        let grade = required(&mut errors, "grade", &self.grade, "Grade is required");
        let subject = required(&mut errors, "subject", &self.subject, "Subject is required");
        if self.tiers.is_empty() {
            errors.insert("tiers", "At least one rate tier is required");
        }
        let tiers: Vec<RateTier> = self
            .tiers
            .iter()
            .enumerate()
            .filter_map(|(index, tier)| match validate_tier(tier) {
                Ok(tier) => Some(tier),
                Err(message) => {
                    errors.insert("tiers", format!("Tier {}: {message}", index + 1));
                    None
                }
            })
            .collect();
        errors.finish(|| TuitionRatePayload { grade, subject, tiers })
    }
}

fn validate_tier(tier: &TierInput) -> Result<RateTier, &'static str> {
    let category = tier.category.trim();
    if category.is_empty() {
        return Err("category is required");
    }
    let min_rate = tier.min_rate.trim().parse::<u32>().map_err(|_| "enter a minimum rate")?;
    let max_rate = tier.max_rate.trim().parse::<u32>().map_err(|_| "enter a maximum rate")?;
    if min_rate > max_rate {
        return Err("minimum rate exceeds maximum");
    }
    Ok(RateTier { category: category.to_owned(), min_rate, max_rate })
}
