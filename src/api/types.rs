// ABOUTME: Wire types for the widget backend
// Config arrives camelCase; the lead payload is posted snake_case

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ExtraKind, FormData, Frequency, LawnSize, Quote};

/// Organization configuration, fetched once at startup and read-only after.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgConfig {
    pub business_name: String,
    /// Currency symbol, e.g. "£"
    pub currency: String,
    pub services: Vec<Service>,
    /// Extra-service labels offered by this organization, order-preserving
    #[serde(default)]
    pub extras: Vec<String>,
    pub pricing: PricingTable,
}

/// One offered service in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Per-organization pricing rules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTable {
    pub small: Decimal,
    pub medium: Decimal,
    pub large: Decimal,
    pub estate: Decimal,
    pub extra_fertilizer: Decimal,
    pub extra_edging: Decimal,
    pub extra_weeding: Decimal,
    pub extra_leaf_cleanup: Decimal,
    /// Discount percentages per recurring frequency; One-off has none
    pub weekly_discount: Decimal,
    pub fortnightly_discount: Decimal,
    pub monthly_discount: Decimal,
}

impl PricingTable {
    /// Base price for a lawn-size tier
    pub fn base_for(&self, size: LawnSize) -> Decimal {
        match size {
            LawnSize::Small => self.small,
            LawnSize::Medium => self.medium,
            LawnSize::Large => self.large,
            LawnSize::Estate => self.estate,
        }
    }

    /// Additive cost of a recognized extra category
    pub fn extra_cost(&self, kind: ExtraKind) -> Decimal {
        match kind {
            ExtraKind::Fertilizer => self.extra_fertilizer,
            ExtraKind::Edging => self.extra_edging,
            ExtraKind::Weeding => self.extra_weeding,
            ExtraKind::LeafCleanup => self.extra_leaf_cleanup,
        }
    }

    /// Discount percentage for a frequency (zero for One-off)
    pub fn discount_percent(&self, frequency: Frequency) -> Decimal {
        match frequency {
            Frequency::OneOff => Decimal::ZERO,
            Frequency::Weekly => self.weekly_discount,
            Frequency::Fortnightly => self.fortnightly_discount,
            Frequency::Monthly => self.monthly_discount,
        }
    }
}

/// The POST body for a completed lead: the full form plus the computed quote
#[derive(Debug, Clone, Serialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub postcode: String,
    pub service_name: String,
    pub property_type: String,
    pub lawn_size: String,
    pub frequency: String,
    pub extras: Vec<String>,
    pub estimated_price: Decimal,
    pub estimated_duration: u32,
    pub source_url: String,
}

impl LeadSubmission {
    pub fn from_parts(form: &FormData, quote: &Quote, source_url: &str) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            address: form.address.clone(),
            postcode: form.postcode.clone(),
            service_name: form.service_name.clone(),
            property_type: form.property_type.label().to_string(),
            lawn_size: form.lawn_size.label().to_string(),
            frequency: form.frequency.label().to_string(),
            extras: form.extras.clone(),
            estimated_price: quote.price,
            estimated_duration: quote.duration_minutes,
            source_url: source_url.to_string(),
        }
    }
}

/// Submission response body. Any 2xx body without an `error` field is
/// success; a present `error` field is a failure with that message.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn sample_config_json() -> &'static str {
        r#"{
            "businessName": "GreenBlade Lawn Care",
            "currency": "£",
            "services": [
                {"id": "mow", "name": "Lawn Mowing", "description": "Regular cut and trim"},
                {"id": "treat", "name": "Lawn Treatment"}
            ],
            "extras": ["Fertilizer Treatment", "Edging", "Weeding", "Leaf Cleanup"],
            "pricing": {
                "small": 25, "medium": 40, "large": 60, "estate": 120,
                "extraFertilizer": 10, "extraEdging": 8,
                "extraWeeding": 12, "extraLeafCleanup": 15,
                "weeklyDiscount": 15, "fortnightlyDiscount": 12, "monthlyDiscount": 10
            }
        }"#
    }

    #[test]
    fn test_org_config_deserializes_from_camel_case() {
        let config: OrgConfig = serde_json::from_str(sample_config_json()).unwrap();

        assert_eq!(config.business_name, "GreenBlade Lawn Care");
        assert_eq!(config.currency, "£");
        assert_eq!(config.services.len(), 2);
        assert_eq!(config.services[0].id, "mow");
        assert_eq!(config.services[1].description, None);
        assert_eq!(config.extras.len(), 4);
        assert_eq!(config.pricing.large, dec!(60));
        assert_eq!(config.pricing.extra_leaf_cleanup, dec!(15));
        assert_eq!(config.pricing.monthly_discount, dec!(10));
    }

    #[test]
    fn test_missing_extras_defaults_to_empty() {
        let json = r#"{
            "businessName": "B", "currency": "$",
            "services": [],
            "pricing": {
                "small": 1, "medium": 2, "large": 3, "estate": 4,
                "extraFertilizer": 0, "extraEdging": 0,
                "extraWeeding": 0, "extraLeafCleanup": 0,
                "weeklyDiscount": 0, "fortnightlyDiscount": 0, "monthlyDiscount": 0
            }
        }"#;
        let config: OrgConfig = serde_json::from_str(json).unwrap();
        assert!(config.extras.is_empty());
    }

    #[test]
    fn test_submit_response_error_field() {
        let ok: SubmitResponse = serde_json::from_str(r#"{"id": "lead-1"}"#).unwrap();
        assert_eq!(ok.error, None);

        let failed: SubmitResponse = serde_json::from_str(r#"{"error": "rate limited"}"#).unwrap();
        assert_eq!(failed.error.as_deref(), Some("rate limited"));
    }

    #[test]
    fn test_lead_submission_payload_shape() {
        use crate::models::{FormData, LawnSize, Quote};

        let form = FormData {
            service_id: "mow".into(),
            service_name: "Lawn Mowing".into(),
            address: "12 Meadow Lane".into(),
            postcode: "LS1 4AB".into(),
            lawn_size: LawnSize::Large,
            extras: vec!["Edging".into()],
            name: "Sam Field".into(),
            email: "sam@example.com".into(),
            phone: "07700 900000".into(),
            ..FormData::default()
        };
        let quote = Quote {
            price: dec!(68.00),
            duration_minutes: 90,
            base: dec!(60),
            extras_total: dec!(8),
            discount: dec!(0),
        };

        let lead = LeadSubmission::from_parts(&form, &quote, "terminal://mowquote");
        let value = serde_json::to_value(&lead).unwrap();

        assert_eq!(value["service_name"], "Lawn Mowing");
        assert_eq!(value["lawn_size"], "Large (300-600m²)");
        assert_eq!(value["property_type"], "Detached House");
        assert_eq!(value["frequency"], "One-off");
        assert_eq!(value["extras"], serde_json::json!(["Edging"]));
        assert_eq!(value["estimated_duration"], 90);
        assert_eq!(value["source_url"], "terminal://mowquote");
    }
}
