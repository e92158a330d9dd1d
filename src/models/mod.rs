mod de;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Usage label for apartments (아파트)
pub const USAGE_APARTMENT: &str = "아파트";
/// Usage label for multi-unit dwellings (다세대)
pub const USAGE_MULTI_UNIT: &str = "다세대";
/// Usage label for detached houses (단독주택)
pub const USAGE_DETACHED_HOUSE: &str = "단독주택";

/// How a property is being offered
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TradeType {
    /// 매매
    Sale,
    /// 전세
    DepositLease,
    /// 월세
    MonthlyLease,
    /// Anything the backend stored that we don't recognise
    Other(String),
}

impl TradeType {
    pub fn label(&self) -> &str {
        match self {
            TradeType::Sale => "매매",
            TradeType::DepositLease => "전세",
            TradeType::MonthlyLease => "월세",
            TradeType::Other(raw) => raw,
        }
    }

    /// Parse a known trade type, accepting the Korean labels and a few
    /// romanised aliases. Returns `None` for anything else.
    pub fn parse_known(text: &str) -> Option<Self> {
        match text.trim() {
            "매매" | "sale" | "Sale" => Some(TradeType::Sale),
            "전세" | "jeonse" | "deposit" | "deposit-lease" => Some(TradeType::DepositLease),
            "월세" | "monthly" | "monthly-lease" => Some(TradeType::MonthlyLease),
            _ => None,
        }
    }
}

impl From<String> for TradeType {
    fn from(raw: String) -> Self {
        TradeType::parse_known(&raw).unwrap_or(TradeType::Other(raw))
    }
}

impl From<TradeType> for String {
    fn from(trade: TradeType) -> Self {
        match trade {
            TradeType::Other(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Usage categories of a listing, normalized to a list at ingestion.
///
/// The backend stores either a single string or an array of strings; both
/// deserialize into the same shape so nothing downstream has to branch on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "de::UsageField", into = "Vec<String>")]
pub struct UsageCategories(Vec<String>);

impl UsageCategories {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            items
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.trim().is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.iter().any(|c| c == category)
    }

    /// True when any of `categories` is present.
    pub fn intersects<S: AsRef<str>>(&self, categories: &[S]) -> bool {
        categories.iter().any(|c| self.contains(c.as_ref()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for UsageCategories {
    fn from(single: &str) -> Self {
        Self::new([single])
    }
}

impl From<Vec<String>> for UsageCategories {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

impl From<UsageCategories> for Vec<String> {
    fn from(usage: UsageCategories) -> Self {
        usage.0
    }
}

/// One property listing as returned by the backend's `listings` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    #[serde(rename = "id_num", default, deserialize_with = "de::loose_amount")]
    pub sequence_number: Option<i64>,
    #[serde(default, deserialize_with = "de::nullable_string")]
    pub title: String,
    #[serde(
        rename = "type",
        default = "de::unknown_trade_type",
        deserialize_with = "de::loose_trade_type"
    )]
    pub trade_type: TradeType,
    #[serde(default)]
    pub usage: UsageCategories,
    #[serde(default, deserialize_with = "de::loose_amount")]
    pub price: Option<i64>,
    #[serde(default, deserialize_with = "de::loose_amount")]
    pub deposit: Option<i64>,
    #[serde(rename = "monthly", default, deserialize_with = "de::loose_amount")]
    pub monthly_rent: Option<i64>,
    #[serde(default, deserialize_with = "de::loose_amount")]
    pub room_count: Option<i64>,
    #[serde(rename = "parking", default, deserialize_with = "de::loose_flag")]
    pub has_parking: bool,
    #[serde(rename = "pet_allowed", default, deserialize_with = "de::loose_flag")]
    pub pets_allowed: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Descriptive columns (address, images, floor, ...) passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Listing {
    /// Minimal listing, mostly useful for tests and fixtures
    pub fn new(id: impl Into<String>, title: impl Into<String>, trade_type: TradeType) -> Self {
        Self {
            id: id.into(),
            sequence_number: None,
            title: title.into(),
            trade_type,
            usage: UsageCategories::default(),
            price: None,
            deposit: None,
            monthly_rent: None,
            room_count: None,
            has_parking: false,
            pets_allowed: false,
            created_at: None,
            extra: serde_json::Map::new(),
        }
    }

    /// The amount that represents this listing's price for its trade type:
    /// sale price, jeonse deposit, or monthly rent.
    pub fn headline_amount(&self) -> Option<i64> {
        match self.trade_type {
            TradeType::Sale => self.price,
            TradeType::DepositLease => self.deposit,
            TradeType::MonthlyLease => self.monthly_rent,
            TradeType::Other(_) => None,
        }
    }
}
