// ABOUTME: Domain model for the quote wizard
// Enums for the fixed property attributes, the working form record, and the computed quote

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lawn-size tier of the property. Pricing and duration are keyed off this
/// enum, never off display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LawnSize {
    Small,
    Medium,
    Large,
    Estate,
}

impl LawnSize {
    /// All tiers in display order
    pub fn all() -> &'static [LawnSize] {
        &[Self::Small, Self::Medium, Self::Large, Self::Estate]
    }

    /// Label shown in the wizard and sent in the lead payload
    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small (under 100m²)",
            Self::Medium => "Medium (100-300m²)",
            Self::Large => "Large (300-600m²)",
            Self::Estate => "Estate (600m²+)",
        }
    }

    /// Estimated job duration for this tier, in minutes
    pub fn duration_minutes(&self) -> u32 {
        match self {
            Self::Small => 30,
            Self::Medium => 45,
            Self::Large => 90,
            Self::Estate => 180,
        }
    }

    /// Classify a free-text size label. Matching is keyword containment in
    /// fixed priority order (Small, Medium, Large, Estate); anything that
    /// matches no keyword falls back to Medium.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("small") {
            Self::Small
        } else if lower.contains("medium") {
            Self::Medium
        } else if lower.contains("large") {
            Self::Large
        } else if lower.contains("estate") {
            Self::Estate
        } else {
            Self::Medium
        }
    }
}

/// Service frequency selected by the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    OneOff,
    Weekly,
    Fortnightly,
    Monthly,
}

impl Frequency {
    pub fn all() -> &'static [Frequency] {
        &[Self::OneOff, Self::Weekly, Self::Fortnightly, Self::Monthly]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneOff => "One-off",
            Self::Weekly => "Weekly",
            Self::Fortnightly => "Fortnightly",
            Self::Monthly => "Monthly",
        }
    }

    /// Parse a free-text frequency label; anything unrecognized is One-off
    /// (which carries no discount).
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("fortnight") {
            Self::Fortnightly
        } else if lower.contains("week") {
            Self::Weekly
        } else if lower.contains("month") {
            Self::Monthly
        } else {
            Self::OneOff
        }
    }
}

/// Property type of the customer's address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Detached,
    SemiDetached,
    Terraced,
    Apartment,
}

impl PropertyType {
    pub fn all() -> &'static [PropertyType] {
        &[
            Self::Detached,
            Self::SemiDetached,
            Self::Terraced,
            Self::Apartment,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Detached => "Detached House",
            Self::SemiDetached => "Semi-Detached",
            Self::Terraced => "Terraced",
            Self::Apartment => "Apartment",
        }
    }
}

/// Recognized extra-service categories. Configured extras are free-text
/// labels; each one is classified into a category (or none) exactly once, and
/// pricing looks costs up by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraKind {
    Fertilizer,
    Edging,
    Weeding,
    LeafCleanup,
}

impl ExtraKind {
    /// Classify a configured extra label by keyword containment. A label
    /// matching no keyword has no priced category and contributes zero cost.
    pub fn from_label(label: &str) -> Option<Self> {
        let lower = label.to_lowercase();
        if lower.contains("fertilizer") || lower.contains("fertiliser") {
            Some(Self::Fertilizer)
        } else if lower.contains("edging") {
            Some(Self::Edging)
        } else if lower.contains("weeding") {
            Some(Self::Weeding)
        } else if lower.contains("leaf") {
            Some(Self::LeafCleanup)
        } else {
            None
        }
    }
}

/// The single mutable working record behind the wizard. Created once with
/// defaults and mutated in place by every user interaction until submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    pub service_id: String,
    pub service_name: String,
    pub address: String,
    pub postcode: String,
    pub property_type: PropertyType,
    pub lawn_size: LawnSize,
    pub frequency: Frequency,
    /// Selected extra labels, order of selection preserved, no duplicates
    pub extras: Vec<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            service_id: String::new(),
            service_name: String::new(),
            address: String::new(),
            postcode: String::new(),
            property_type: PropertyType::Detached,
            lawn_size: LawnSize::Medium,
            frequency: Frequency::OneOff,
            extras: Vec::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
        }
    }
}

impl FormData {
    /// Toggle membership of an extra label in the selection set
    pub fn toggle_extra(&mut self, label: &str) {
        if let Some(pos) = self.extras.iter().position(|e| e == label) {
            self.extras.remove(pos);
        } else {
            self.extras.push(label.to_string());
        }
    }

    pub fn has_extra(&self, label: &str) -> bool {
        self.extras.iter().any(|e| e == label)
    }
}

/// A computed quote. Always a pure function of (form data, configuration) at
/// the moment it was computed; never persisted independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub price: Decimal,
    pub duration_minutes: u32,
    pub base: Decimal,
    pub extras_total: Decimal,
    pub discount: Decimal,
}
