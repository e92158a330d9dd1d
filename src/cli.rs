use crate::filters::{FilterConfig, Preset, Requirement, SortKey, SortOrder, SortSpec, TradeTypeFilter};
use crate::pricing::AmountRange;
use crate::sources::BackendConfig;
use crate::tools::InvestmentInput;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "listing-scout")]
#[command(about = "Browse, filter and sort real-estate listings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch listings and print the filtered, sorted view
    List(ListArgs),

    /// Draw lottery numbers
    Lotto {
        /// Number of sets to draw (at most 5)
        #[arg(short, long, default_value = "1")]
        count: usize,
    },

    /// Estimate yearly rental return on a purchase
    Invest(InvestArgs),
}

#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Read listings from a JSON export; wins over a configured backend
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Backend base URL
    #[arg(long, env = "LISTINGS_API_URL")]
    pub api_url: Option<String>,

    /// Backend API key
    #[arg(long, env = "LISTINGS_API_KEY", hide_env_values = true, default_value = "")]
    pub api_key: String,

    /// Table holding the listings
    #[arg(long, env = "LISTINGS_TABLE", default_value = "listings")]
    pub table: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,
}

impl SourceArgs {
    pub fn backend_config(&self) -> Option<BackendConfig> {
        self.api_url.as_ref().map(|url| BackendConfig {
            base_url: url.clone(),
            api_key: self.api_key.clone(),
            table: self.table.clone(),
            timeout_secs: self.timeout,
        })
    }
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Category page to start from
    #[arg(long, value_enum, default_value = "all")]
    pub preset: Preset,

    /// Trade type: 매매, 전세, 월세 (or sale, jeonse, monthly); anything else means all
    #[arg(long, default_value = "")]
    pub trade_type: String,

    /// Usage category to include; repeat for several (all-listings preset only)
    #[arg(long = "usage")]
    pub usage: Vec<String>,

    #[arg(long, value_enum, default_value = "any")]
    pub parking: Requirement,

    #[arg(long, value_enum, default_value = "any")]
    pub pets: Requirement,

    #[arg(long, default_value = "")]
    pub min_price: String,
    #[arg(long, default_value = "")]
    pub max_price: String,
    #[arg(long, default_value = "")]
    pub min_deposit: String,
    #[arg(long, default_value = "")]
    pub max_deposit: String,
    #[arg(long, default_value = "")]
    pub min_monthly: String,
    #[arg(long, default_value = "")]
    pub max_monthly: String,

    /// Substring the title must contain
    #[arg(short, long, default_value = "")]
    pub search: String,

    #[arg(long, value_enum, default_value = "sequence")]
    pub sort: SortKey,

    #[arg(long, value_enum, default_value = "descending")]
    pub order: SortOrder,

    /// Also write the result as JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ListArgs {
    /// Build the filter for this invocation on top of the preset's fixed axes
    pub fn filter_config(&self) -> FilterConfig {
        let mut config = self
            .preset
            .filter()
            .trade_type(TradeTypeFilter::from_text(&self.trade_type))
            .parking(self.parking)
            .pets(self.pets)
            .price_range(AmountRange::parse(&self.min_price, &self.max_price))
            .deposit_range(AmountRange::parse(&self.min_deposit, &self.max_deposit))
            .monthly_range(AmountRange::parse(&self.min_monthly, &self.max_monthly))
            .search_text(self.search.clone());

        if self.preset.allows_usage_selection() {
            config = config.selected_usage_categories(self.usage.iter().cloned());
        }
        config
    }

    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::new(self.sort, self.order)
    }
}

#[derive(Args, Debug)]
pub struct InvestArgs {
    /// Purchase price (won, separators allowed)
    #[arg(long, default_value = "")]
    pub price: String,
    /// Monthly rent income
    #[arg(long, default_value = "")]
    pub rent: String,
    /// Monthly management fee
    #[arg(long, default_value = "")]
    pub management_fee: String,
    #[arg(long, default_value = "")]
    pub loan: String,
    /// Loan interest rate, percent
    #[arg(long, default_value = "0")]
    pub interest: f64,
    /// Vacancy rate, percent
    #[arg(long, default_value = "0")]
    pub vacancy: f64,
    /// Other yearly costs
    #[arg(long, default_value = "")]
    pub other_cost: String,
}

impl InvestArgs {
    pub fn input(&self) -> InvestmentInput {
        let amount = |text: &str| crate::pricing::parse_digits_only(text) as f64;
        InvestmentInput {
            purchase_price: amount(&self.price),
            monthly_rent: amount(&self.rent),
            monthly_management_fee: amount(&self.management_fee),
            loan_amount: amount(&self.loan),
            loan_interest_rate: self.interest,
            vacancy_rate: self.vacancy,
            other_annual_cost: amount(&self.other_cost),
        }
    }
}
