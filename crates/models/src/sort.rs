use serde::Serialize;
use strum::{AsRefStr, EnumIter, EnumProperty, EnumString, IntoEnumIterator};

/// Teacher list orderings offered by the catalog page. `Random` is the
/// default when no `sort_by` query value is given.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    EnumString,
    EnumIter,
    AsRefStr,
    EnumProperty,
)]
pub enum SortOrder {
    #[default]
    #[strum(serialize = "random", props(label = "в случайном порядке"))]
    Random,
    #[strum(serialize = "rating_desc", props(label = "сначала лучшие по рейтингу"))]
    RatingDesc,
    #[strum(serialize = "price_desc", props(label = "сначала дорогие"))]
    PriceDesc,
    #[strum(serialize = "price_asc", props(label = "сначала недорогие"))]
    PriceAsc,
}

impl SortOrder {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn label(&self) -> &'static str {
        self.get_str("label").unwrap_or_default()
    }

    pub fn all() -> Vec<SortOrder> {
        SortOrder::iter().collect()
    }
}
