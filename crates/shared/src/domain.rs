use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ProductId);

/// Category selector value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// One catalog item as returned by the remote catalog. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    None,
    AscendingPrice,
    DescendingPrice,
}

impl SortOrder {
    /// Maps a sort selector value: `low` and `high` pick a price order, anything
    /// else leaves the catalog order untouched.
    pub fn from_selector_value(value: &str) -> Self {
        match value {
            "low" => Self::AscendingPrice,
            "high" => Self::DescendingPrice,
            _ => Self::None,
        }
    }

    pub fn selector_value(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::AscendingPrice => "low",
            Self::DescendingPrice => "high",
        }
    }
}

/// Current selections of the storefront controls.
///
/// Each handler records the value it was invoked with. The grid itself is
/// re-derived from the full catalog by whichever handler ran last; the
/// selections are not composed into one filter pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub selected_category: String,
    pub sort_order: SortOrder,
    pub search_text: String,
    pub theme_is_dark: bool,
    pub categories: Vec<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected_category: ALL_CATEGORIES.to_string(),
            sort_order: SortOrder::None,
            search_text: String::new(),
            theme_is_dark: false,
            categories: Vec::new(),
        }
    }
}

impl ViewState {
    /// Label of the theme toggle, naming the action the next press performs.
    pub fn theme_toggle_label(&self) -> &'static str {
        if self.theme_is_dark {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }
}
