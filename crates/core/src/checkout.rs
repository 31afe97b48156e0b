//! Checkout hand-off: the cart payload the downstream commerce service
//! accepts, built from a recommendation. The service itself stays behind
//! the [`CheckoutGateway`] port; this module owns only the data contract.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::recommendation::ProductRecommendation;
use crate::errors::ApplicationError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub quantity: u32,
    pub product_id: u64,
    pub variant_id: u64,
}

/// Line for products that only exist on our side (the synthesized
/// fallback recommendation has no commerce-side id), priced explicitly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCustomItem {
    pub name: String,
    pub sku: String,
    pub quantity: u32,
    pub list_price: Decimal,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDraft {
    pub line_items: Vec<CartLineItem>,
    pub custom_items: Vec<CartCustomItem>,
}

impl CartDraft {
    /// One cart line per recommendation. Catalog-backed products go in as
    /// regular line items; a synthesized placeholder (no commerce id)
    /// becomes a custom item carrying the rated price.
    pub fn from_recommendation(recommendation: &ProductRecommendation) -> Self {
        let product = &recommendation.product;

        if product.product_id == 0 {
            return CartDraft {
                line_items: Vec::new(),
                custom_items: vec![CartCustomItem {
                    name: product.name.clone(),
                    sku: product.sku.clone(),
                    quantity: 1,
                    list_price: recommendation.price,
                }],
            };
        }

        CartDraft {
            line_items: vec![CartLineItem {
                quantity: 1,
                product_id: product.product_id,
                variant_id: product.variant_id,
            }],
            custom_items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty() && self.custom_items.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartReceipt {
    pub cart_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_url: Option<String>,
}

/// Port to the remote cart/checkout service. Implementations live at the
/// application edge; failures surface as integration errors.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn create_cart(&self, draft: &CartDraft) -> Result<CartReceipt, ApplicationError>;
}
