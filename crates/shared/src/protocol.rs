//! Commands sent from the catalog controller to a rendering surface.

use serde::{Deserialize, Serialize};

use crate::domain::ProductId;

pub const NO_PRODUCTS_TEXT: &str = "No products found.";
pub const LOAD_FAILED_TEXT: &str = "Error loading products. Please try again later.";
pub const BUY_ACTION_LABEL: &str = "Buy Now";

/// The rendered visual unit for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub product_id: ProductId,
    pub image: String,
    pub image_alt: String,
    pub title: String,
    pub description: String,
    pub price_label: String,
    pub action_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum GridContent {
    Cards(Vec<Card>),
    NoProducts,
    LoadFailed,
}

impl GridContent {
    /// Text shown in place of the grid, if any.
    pub fn placeholder_text(&self) -> Option<&'static str> {
        match self {
            Self::Cards(_) => None,
            Self::NoProducts => Some(NO_PRODUCTS_TEXT),
            Self::LoadFailed => Some(LOAD_FAILED_TEXT),
        }
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            Self::Cards(cards) => cards,
            Self::NoProducts | Self::LoadFailed => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ViewUpdate {
    Grid(GridContent),
    Loading(bool),
    CategoryOptions(Vec<String>),
    DarkMode(bool),
    ThemeLabel(String),
}
