use anyhow::{Context, Result};
use clap::Parser;
use listing_scout::cli::{Cli, Commands, InvestArgs, ListArgs};
use listing_scout::filters::categories::SELECTABLE_CATEGORIES;
use listing_scout::filters::ListingBoard;
use listing_scout::pricing::{format_abbreviated_magnitude, format_with_thousands_separators};
use listing_scout::sources::{JsonFileSource, ListingSource, RestListingSource};
use listing_scout::tools::DrawHistory;
use listing_scout::{Listing, TradeType};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::List(args) => list(args).await,
        Commands::Lotto { count } => {
            lotto(count);
            Ok(())
        }
        Commands::Invest(args) => {
            invest(&args);
            Ok(())
        }
    }
}

async fn list(args: ListArgs) -> Result<()> {
    let source: Box<dyn ListingSource> = match (&args.source.file, args.source.backend_config()) {
        (Some(path), _) => Box::new(JsonFileSource::new(path)),
        (None, Some(config)) => Box::new(RestListingSource::new(config)?),
        (None, None) => anyhow::bail!("Pass --file or set LISTINGS_API_URL"),
    };

    info!("🏠 {} - {}", args.preset.title(), args.preset.description());
    for usage in &args.usage {
        if !args.preset.allows_usage_selection() {
            warn!("--usage {} ignored: the {:?} preset fixes its categories", usage, args.preset);
        } else if !SELECTABLE_CATEGORIES.contains(&usage.as_str()) {
            warn!("Usage category {} is not one of {:?}", usage, SELECTABLE_CATEGORIES);
        }
    }
    let listings = source.fetch_all().await?;
    info!("Loaded {} listings via {}", listings.len(), source.source_name());

    let board = ListingBoard::new(listings)
        .with_filter(args.filter_config())
        .with_sort(args.sort_spec());
    let visible = board.visible();

    if visible.is_empty() {
        warn!("검색 조건에 맞는 매물이 없습니다. (no listings match)");
    } else {
        info!("✅ {} of {} listings match\n", visible.len(), board.listings().len());
    }

    for (i, listing) in visible.iter().enumerate() {
        println!(
            "{}. [no. {}] {} ({})",
            i + 1,
            listing
                .sequence_number
                .map_or_else(|| "-".to_string(), |n| n.to_string()),
            listing.title,
            price_label(listing)
        );
        if !listing.usage.is_empty() {
            println!("   {}", listing.usage.as_slice().join(", "));
        }
        println!(
            "   방 {} · 주차 {} · 반려동물 {}",
            listing.room_count.map_or_else(|| "-".to_string(), |n| n.to_string()),
            if listing.has_parking { "가능" } else { "불가" },
            if listing.pets_allowed { "가능" } else { "불가" },
        );
        println!("   ID: {}", listing.id);
        println!();
    }

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&visible)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("💾 Saved {} listings to {}", visible.len(), path.display());
    }

    Ok(())
}

fn price_label(listing: &Listing) -> String {
    let amount = format_abbreviated_magnitude;
    match listing.trade_type {
        TradeType::Sale => format!("매매 {}", amount(listing.price)),
        TradeType::DepositLease => format!("전세 {}", amount(listing.deposit)),
        TradeType::MonthlyLease => format!(
            "월세 {} / {}",
            amount(listing.deposit),
            amount(listing.monthly_rent)
        ),
        TradeType::Other(ref raw) => raw.clone(),
    }
}

fn lotto(count: usize) {
    let mut rng = rand::thread_rng();
    let mut history = DrawHistory::new();

    for _ in 0..count {
        if history.draw(&mut rng).is_none() {
            warn!("Draw history is full, stopping after {} sets", history.draws().len());
            break;
        }
    }

    // newest first, so print in draw order
    for (i, draw) in history.draws().iter().rev().enumerate() {
        let numbers: Vec<String> = draw
            .numbers()
            .iter()
            .zip(draw.colors())
            .map(|(n, color)| format!("{n:>2}({})", color.label()))
            .collect();
        println!("{}회: {}", i + 1, numbers.join(" "));
    }
}

fn invest(args: &InvestArgs) {
    let result = args.input().calculate();
    let won = |value: f64| {
        let rounded = value.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        format!(
            "{sign}{}원",
            format_with_thousands_separators(&(rounded.abs() as u64).to_string())
        )
    };

    println!("월세수입 (연): {}", won(result.annual_rent));
    println!("관리비 (연):   {}", won(result.annual_management));
    println!("대출이자 (연): {}", won(result.annual_loan_interest));
    println!("기타비용 (연): {}", won(result.other_cost));
    println!("순수익 (연):   {}", won(result.net_income));
    println!("수익률:        {:.2}% ({:?})", result.return_rate, result.outlook());
}
