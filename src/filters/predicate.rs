use super::categories;
use super::types::{FilterConfig, TradeTypeFilter};
use crate::models::{Listing, TradeType};
use crate::pricing::AmountRange;

/// Decide whether `listing` survives `config`. Every active axis must pass.
pub fn matches(listing: &Listing, config: &FilterConfig) -> bool {
    usage_axis(listing, config)
        && config.trade_type.admits(&listing.trade_type)
        && config.parking.admits(listing.has_parking)
        && config.pets.admits(listing.pets_allowed)
        && amount_axes(listing, config)
        && search_axis(listing, &config.search_text)
}

/// Fixed room counts win over fixed usage, which wins over free selection.
fn usage_axis(listing: &Listing, config: &FilterConfig) -> bool {
    if !config.fixed_room_counts.is_empty() {
        config
            .fixed_room_counts
            .contains(&listing.room_count.unwrap_or(0))
    } else if !config.fixed_usage_categories.is_empty() {
        listing.usage.intersects(&config.fixed_usage_categories)
    } else {
        categories::matches_any(listing, &config.selected_usage_categories)
    }
}

/// Which ranges apply depends on the selected trade type, not the listing's.
fn amount_axes(listing: &Listing, config: &FilterConfig) -> bool {
    match &config.trade_type {
        TradeTypeFilter::All | TradeTypeFilter::Only(TradeType::Sale) => {
            within(config.price_range, listing.price)
        }
        TradeTypeFilter::Only(TradeType::DepositLease) => {
            within(config.deposit_range, listing.deposit)
        }
        TradeTypeFilter::Only(TradeType::MonthlyLease) => {
            within(config.deposit_range, listing.deposit)
                && within(config.monthly_range, listing.monthly_rent)
        }
        TradeTypeFilter::Only(TradeType::Other(_)) => true,
    }
}

fn within(range: Option<AmountRange>, value: Option<i64>) -> bool {
    range.map_or(true, |r| r.admits(value))
}

fn search_axis(listing: &Listing, search_text: &str) -> bool {
    let needle = search_text.trim();
    needle.is_empty() || listing.title.contains(needle)
}
