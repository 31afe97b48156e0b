use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Structured selection metadata for a catalog product.
///
/// Replaces free-text name matching: a recommendation carries the typed
/// dimensions it derived (plan, tier, amount, period, daily benefit) and a
/// product matches when every dimension it declares equals the
/// corresponding derived value. Dimensions a product leaves unset are
/// wildcards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSelector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefit_period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_benefit: Option<String>,
}

impl ProductSelector {
    pub fn matches(&self, derived: &ProductSelector) -> bool {
        fn dim(own: &Option<String>, derived: &Option<String>) -> bool {
            match own {
                Some(value) => derived.as_deref() == Some(value.as_str()),
                None => true,
            }
        }

        dim(&self.plan, &derived.plan)
            && dim(&self.tier, &derived.tier)
            && dim(&self.coverage_amount, &derived.coverage_amount)
            && dim(&self.benefit_period, &derived.benefit_period)
            && dim(&self.daily_benefit, &derived.daily_benefit)
    }
}

/// A sellable catalog entry. `price` is a display placeholder; the
/// authoritative premium always comes from the rate tables and is written
/// over this field on the recommendation copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: u64,
    pub name: String,
    pub price: Decimal,
    pub sku: String,
    pub sku_id: u64,
    pub variant_id: u64,
    #[serde(default)]
    pub product_benefits: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<ProductSelector>,
}

/// Products grouped by insurance line. `name` is the dispatch join key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductCollection {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub common_benefits: Vec<String>,
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::ProductSelector;

    fn selector(plan: Option<&str>, tier: Option<&str>) -> ProductSelector {
        ProductSelector {
            plan: plan.map(str::to_owned),
            tier: tier.map(str::to_owned),
            ..ProductSelector::default()
        }
    }

    #[test]
    fn selector_requires_every_declared_dimension_to_match() {
        let product = selector(Some("Plan A"), Some("Individual"));

        assert!(product.matches(&selector(Some("Plan A"), Some("Individual"))));
        assert!(!product.matches(&selector(Some("Plan B"), Some("Individual"))));
        assert!(!product.matches(&selector(Some("Plan A"), Some("Family"))));
    }

    #[test]
    fn undeclared_dimensions_are_wildcards() {
        let product = selector(None, Some("Family"));

        assert!(product.matches(&selector(Some("Plan B"), Some("Family"))));
        assert!(!product.matches(&selector(Some("Plan B"), Some("Individual"))));
    }
}
