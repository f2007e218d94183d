//! Durations (membership periods and passes) and their prices

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::PricingConfig;

/// A purchasable access period or pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum DurationOption {
    #[serde(rename = "1 Month")]
    OneMonth,
    #[serde(rename = "3 Months")]
    ThreeMonths,
    #[serde(rename = "6 Months")]
    SixMonths,
    #[serde(rename = "Yearly")]
    Yearly,
    #[serde(rename = "Single Slot pass")]
    SingleSlotPass,
    #[serde(rename = "Full Day pass")]
    FullDayPass,
}

impl DurationOption {
    /// Options in the order of the duration dropdown
    pub const ALL: [DurationOption; 6] = [
        DurationOption::OneMonth,
        DurationOption::ThreeMonths,
        DurationOption::SixMonths,
        DurationOption::Yearly,
        DurationOption::SingleSlotPass,
        DurationOption::FullDayPass,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DurationOption::OneMonth => "1 Month",
            DurationOption::ThreeMonths => "3 Months",
            DurationOption::SixMonths => "6 Months",
            DurationOption::Yearly => "Yearly",
            DurationOption::SingleSlotPass => "Single Slot pass",
            DurationOption::FullDayPass => "Full Day pass",
        }
    }

    /// Exact label match
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.label() == label)
    }
}

impl std::fmt::Display for DurationOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Price of one duration, in minor currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PriceEntry {
    pub duration: DurationOption,
    pub amount: u64,
}

/// Fixed duration to price lookup, one entry per option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PriceTable {
    pub currency: String,
    pub entries: Vec<PriceEntry>,
}

impl PriceTable {
    pub fn amount_for(&self, duration: DurationOption) -> u64 {
        self.entries
            .iter()
            .find(|entry| entry.duration == duration)
            .map(|entry| entry.amount)
            .unwrap_or_else(|| self.first_amount())
    }

    /// Price for a label as selected on screen. Unknown labels get the
    /// first tier's price.
    pub fn amount_for_label(&self, label: &str) -> u64 {
        match DurationOption::from_label(label) {
            Some(duration) => self.amount_for(duration),
            None => {
                tracing::warn!("Unknown duration '{}', using first tier price", label);
                self.first_amount()
            }
        }
    }

    fn first_amount(&self) -> u64 {
        self.entries.first().map(|entry| entry.amount).unwrap_or_default()
    }
}

impl From<&PricingConfig> for PriceTable {
    fn from(config: &PricingConfig) -> Self {
        let amount = |duration| match duration {
            DurationOption::OneMonth => config.one_month,
            DurationOption::ThreeMonths => config.three_months,
            DurationOption::SixMonths => config.six_months,
            DurationOption::Yearly => config.yearly,
            DurationOption::SingleSlotPass => config.single_slot_pass,
            DurationOption::FullDayPass => config.full_day_pass,
        };

        Self {
            currency: config.currency.clone(),
            entries: DurationOption::ALL
                .into_iter()
                .map(|duration| PriceEntry {
                    duration,
                    amount: amount(duration),
                })
                .collect(),
        }
    }
}
