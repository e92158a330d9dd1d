use crate::models::TradeType;
use crate::pricing::AmountRange;
use serde::{Deserialize, Serialize};

/// Trade type axis of the filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeTypeFilter {
    #[default]
    All,
    Only(TradeType),
}

impl TradeTypeFilter {
    /// Parse the trade type selector text. Empty, `all`/`전체` and anything
    /// unrecognised all mean no constraint.
    pub fn from_text(text: &str) -> Self {
        TradeType::parse_known(text).map_or(TradeTypeFilter::All, TradeTypeFilter::Only)
    }

    pub fn admits(&self, trade: &TradeType) -> bool {
        match self {
            TradeTypeFilter::All => true,
            TradeTypeFilter::Only(wanted) => wanted == trade,
        }
    }
}

/// Tri-state requirement for a boolean attribute (parking, pets)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    #[default]
    Any,
    Required,
    Excluded,
}

impl Requirement {
    pub fn admits(self, flag: bool) -> bool {
        match self {
            Requirement::Any => true,
            Requirement::Required => flag,
            Requirement::Excluded => !flag,
        }
    }
}

/// Filter configuration for one pass over the listings.
///
/// Every axis defaults to "no constraint". Build with the consuming setters:
///
/// ```
/// use listing_scout::filters::{FilterConfig, Requirement};
/// use listing_scout::pricing::AmountRange;
///
/// let config = FilterConfig::new()
///     .trade_type_text("매매")
///     .parking(Requirement::Required)
///     .price_range(AmountRange::parse("", "400,000,000"));
/// assert!(!config.is_unconstrained());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub fixed_room_counts: Vec<i64>,
    pub fixed_usage_categories: Vec<String>,
    pub selected_usage_categories: Vec<String>,
    pub trade_type: TradeTypeFilter,
    pub parking: Requirement,
    pub pets: Requirement,
    pub price_range: Option<AmountRange>,
    pub deposit_range: Option<AmountRange>,
    pub monthly_range: Option<AmountRange>,
    pub search_text: String,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fixed_room_counts(mut self, counts: impl IntoIterator<Item = i64>) -> Self {
        self.fixed_room_counts = counts.into_iter().collect();
        self
    }

    pub fn fixed_usage_categories<S: Into<String>>(
        mut self,
        categories: impl IntoIterator<Item = S>,
    ) -> Self {
        self.fixed_usage_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn selected_usage_categories<S: Into<String>>(
        mut self,
        categories: impl IntoIterator<Item = S>,
    ) -> Self {
        self.selected_usage_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn trade_type(mut self, trade_type: TradeTypeFilter) -> Self {
        self.trade_type = trade_type;
        self
    }

    pub fn trade_type_text(self, text: &str) -> Self {
        self.trade_type(TradeTypeFilter::from_text(text))
    }

    pub fn parking(mut self, requirement: Requirement) -> Self {
        self.parking = requirement;
        self
    }

    pub fn pets(mut self, requirement: Requirement) -> Self {
        self.pets = requirement;
        self
    }

    pub fn price_range(mut self, range: AmountRange) -> Self {
        self.price_range = Some(range);
        self
    }

    pub fn deposit_range(mut self, range: AmountRange) -> Self {
        self.deposit_range = Some(range);
        self
    }

    pub fn monthly_range(mut self, range: AmountRange) -> Self {
        self.monthly_range = Some(range);
        self
    }

    pub fn search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Toggle a free usage category on or off, keeping selection order.
    pub fn toggle_usage(mut self, category: &str) -> Self {
        if let Some(pos) = self
            .selected_usage_categories
            .iter()
            .position(|c| c == category)
        {
            self.selected_usage_categories.remove(pos);
        } else {
            self.selected_usage_categories.push(category.to_string());
        }
        self
    }

    /// True when no axis would exclude anything.
    pub fn is_unconstrained(&self) -> bool {
        self.fixed_room_counts.is_empty()
            && self.fixed_usage_categories.is_empty()
            && self.selected_usage_categories.is_empty()
            && self.trade_type == TradeTypeFilter::All
            && self.parking == Requirement::Any
            && self.pets == Requirement::Any
            && [self.price_range, self.deposit_range, self.monthly_range]
                .iter()
                .all(|r| r.map_or(true, |r| r.is_unbounded()))
            && self.search_text.trim().is_empty()
    }
}

/// Key the result set is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Listing title, collated
    #[value(alias = "name")]
    Title,
    /// Sale price, jeonse deposit or monthly rent depending on trade type
    Price,
    /// Registration sequence number
    #[default]
    #[value(alias = "id_num")]
    Sequence,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[value(alias = "asc")]
    Ascending,
    #[default]
    #[value(alias = "desc")]
    Descending,
}

/// Sort key plus direction. Defaults to newest registration first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Ascending)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Descending)
    }
}
