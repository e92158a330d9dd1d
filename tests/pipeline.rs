use listing_scout::filters::{
    apply, FilterConfig, Requirement, SortKey, SortSpec, TradeTypeFilter,
};
use listing_scout::pricing::{
    format_abbreviated_magnitude, format_with_thousands_separators, parse_digits_only,
    AmountRange, PLACEHOLDER,
};
use listing_scout::{Listing, TradeType, UsageCategories};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const USAGES: [&str; 8] = ["아파트", "원룸", "다세대", "단독주택", "오피스텔", "상가", "토지", "사무실"];
const SELECTABLE: [&str; 6] = ["아파트", "원/투룸", "주택", "오피스텔", "상가", "토지"];
const TITLES: [&str; 5] = ["강남 아파트", "역세권 원룸", "성수 상가", "Riverside", "하남 토지"];

fn ids<'a>(rows: &[&'a Listing]) -> Vec<&'a str> {
    rows.iter().map(|l| l.id.as_str()).collect()
}

fn trade_type() -> impl Strategy<Value = TradeType> {
    prop_oneof![
        Just(TradeType::Sale),
        Just(TradeType::DepositLease),
        Just(TradeType::MonthlyLease),
        Just(TradeType::Other("경매".to_string())),
    ]
}

fn amount() -> impl Strategy<Value = Option<i64>> {
    proptest::option::of(0i64..2_000_000_000)
}

fn listing(idx: usize) -> impl Strategy<Value = Listing> {
    (
        trade_type(),
        amount(),
        amount(),
        amount(),
        proptest::option::of(0i64..5),
        proptest::sample::subsequence(USAGES.to_vec(), 0..3),
        any::<bool>(),
        any::<bool>(),
        proptest::sample::select(TITLES.to_vec()),
    )
        .prop_map(
            move |(trade, price, deposit, monthly, rooms, usage, parking, pets, title)| {
                // each trade type carries only its own amount fields
                let is_sale = trade == TradeType::Sale;
                let is_lease = matches!(trade, TradeType::DepositLease | TradeType::MonthlyLease);
                let is_monthly = trade == TradeType::MonthlyLease;
                let mut listing = Listing::new(format!("L{idx}"), title, trade);
                listing.sequence_number = Some(idx as i64);
                listing.price = price.filter(|_| is_sale);
                listing.deposit = deposit.filter(|_| is_lease);
                listing.monthly_rent = monthly.filter(|_| is_monthly);
                listing.room_count = rooms;
                listing.usage = UsageCategories::new(usage);
                listing.has_parking = parking;
                listing.pets_allowed = pets;
                listing
            },
        )
}

fn listings() -> impl Strategy<Value = Vec<Listing>> {
    (0usize..12).prop_flat_map(|n| (0..n).map(listing).collect::<Vec<_>>())
}

fn requirement() -> impl Strategy<Value = Requirement> {
    prop_oneof![
        Just(Requirement::Any),
        Just(Requirement::Required),
        Just(Requirement::Excluded)
    ]
}

fn range() -> impl Strategy<Value = Option<AmountRange>> {
    proptest::option::of(
        (0i64..1_000_000_000, proptest::option::of(0i64..2_000_000_000))
            .prop_map(|(min, max)| AmountRange::new(min, max)),
    )
}

fn config() -> impl Strategy<Value = FilterConfig> {
    (
        proptest::sample::subsequence(vec![0i64, 1, 2, 3], 0..2),
        proptest::sample::subsequence(USAGES.to_vec(), 0..2),
        proptest::sample::subsequence(SELECTABLE.to_vec(), 0..3),
        proptest::sample::select(vec!["", "전체", "매매", "전세", "월세"]),
        requirement(),
        requirement(),
        (range(), range(), range()),
        proptest::sample::select(vec!["", "아파트", "상가", " 원룸 ", "x"]),
    )
        .prop_map(
            |(rooms, fixed, selected, trade, parking, pets, (price, deposit, monthly), search)| {
                FilterConfig {
                    fixed_room_counts: rooms,
                    fixed_usage_categories: fixed.into_iter().map(String::from).collect(),
                    selected_usage_categories: selected.into_iter().map(String::from).collect(),
                    trade_type: TradeTypeFilter::from_text(trade),
                    parking,
                    pets,
                    price_range: price,
                    deposit_range: deposit,
                    monthly_range: monthly,
                    search_text: search.to_string(),
                }
            },
        )
}

/// Each axis reset to "no constraint", one at a time, plus the trade type
/// reset together with its amount ranges
fn relaxations(config: &FilterConfig) -> Vec<FilterConfig> {
    let mut out = Vec::new();
    let mut c = config.clone();
    c.fixed_room_counts.clear();
    c.fixed_usage_categories.clear();
    c.selected_usage_categories.clear();
    out.push(c);
    out.push(config.clone().trade_type(TradeTypeFilter::All));
    let mut c = config.clone();
    c.trade_type = TradeTypeFilter::All;
    c.price_range = None;
    c.deposit_range = None;
    c.monthly_range = None;
    out.push(c);
    out.push(config.clone().parking(Requirement::Any));
    out.push(config.clone().pets(Requirement::Any));
    let mut c = config.clone();
    c.price_range = None;
    c.deposit_range = None;
    c.monthly_range = None;
    out.push(c);
    out.push(config.clone().search_text(""));
    out
}

proptest! {
    #[test]
    fn filter_result_is_a_subset(listings in listings(), config in config()) {
        let result = apply(&listings, &config, SortSpec::default());
        prop_assert!(result.len() <= listings.len());
        for row in &result {
            prop_assert!(listings.iter().any(|l| std::ptr::eq(l, *row)));
        }
        let mut seen: Vec<&str> = ids(&result);
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), result.len());
    }

    #[test]
    fn relaxing_an_axis_never_shrinks_the_result(listings in listings(), config in config()) {
        let strict = apply(&listings, &config, SortSpec::default());
        for relaxed in relaxations(&config) {
            let loose = apply(&listings, &relaxed, SortSpec::default());
            for row in &strict {
                prop_assert!(loose.iter().any(|l| l.id == row.id));
            }
        }
    }

    #[test]
    fn fixed_room_counts_silence_usage_filters(
        listings in listings(),
        config in config(),
        rooms in proptest::sample::subsequence(vec![0i64, 1, 2, 3, 4], 1..3),
    ) {
        let with_usage = FilterConfig { fixed_room_counts: rooms.clone(), ..config.clone() };
        let without_usage = FilterConfig {
            fixed_room_counts: rooms,
            fixed_usage_categories: Vec::new(),
            selected_usage_categories: Vec::new(),
            ..config
        };
        let a = apply(&listings, &with_usage, SortSpec::default());
        let b = apply(&listings, &without_usage, SortSpec::default());
        prop_assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn sort_is_a_permutation(listings in listings(), key in prop_oneof![
        Just(SortKey::Title), Just(SortKey::Price), Just(SortKey::Sequence)
    ], asc in any::<bool>()) {
        let spec = if asc { SortSpec::ascending(key) } else { SortSpec::descending(key) };
        let sorted = apply(&listings, &FilterConfig::default(), spec);
        let mut sorted_ids = ids(&sorted);
        let mut original: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
        sorted_ids.sort_unstable();
        original.sort_unstable();
        prop_assert_eq!(sorted_ids, original);
    }

    #[test]
    fn thousands_separator_round_trip(n in 0u64..u64::MAX) {
        let formatted = format_with_thousands_separators(&n.to_string());
        prop_assert_eq!(parse_digits_only(&formatted), n);
        prop_assert_eq!(format_with_thousands_separators(&formatted), formatted);
    }
}

fn with_usage(id: &str, rooms: i64, usage: &str) -> Listing {
    let mut listing = Listing::new(id, "매물", TradeType::Sale);
    listing.room_count = Some(rooms);
    listing.usage = UsageCategories::from(usage);
    listing
}

#[test]
fn studio_bucket_excludes_one_room_apartments() {
    let config = FilterConfig::new().selected_usage_categories(["원/투룸"]);
    let apartment = [with_usage("apt", 1, "아파트")];
    let studio = [with_usage("studio", 1, "원룸")];
    assert!(apply(&apartment, &config, SortSpec::default()).is_empty());
    assert_eq!(ids(&apply(&studio, &config, SortSpec::default())), vec!["studio"]);
}

#[test]
fn null_price_survives_any_price_range() {
    let listings = [Listing::new("s", "매물", TradeType::Sale)];
    for range in [
        AmountRange::new(0, Some(0)),
        AmountRange::new(1_000, Some(2_000)),
        AmountRange::new(i64::MAX, None),
    ] {
        let config = FilterConfig::new().trade_type_text("매매").price_range(range);
        assert_eq!(apply(&listings, &config, SortSpec::default()).len(), 1);
    }
}

#[test]
fn title_sort_keeps_equal_titles_in_order() {
    let mut listings = Vec::new();
    for (title, seq) in [("B", 1), ("A", 2), ("A", 3)] {
        let mut listing = Listing::new(format!("seq{seq}"), title, TradeType::Sale);
        listing.sequence_number = Some(seq);
        listings.push(listing);
    }
    let sorted = apply(&listings, &FilterConfig::default(), SortSpec::ascending(SortKey::Title));
    assert_eq!(ids(&sorted), vec!["seq2", "seq3", "seq1"]);
}

#[test]
fn price_sort_uses_the_trade_specific_field() {
    let mut sale = Listing::new("price5", "a", TradeType::Sale);
    sale.price = Some(5);
    let mut jeonse = Listing::new("deposit10", "b", TradeType::DepositLease);
    jeonse.deposit = Some(10);
    let mut monthly = Listing::new("rent3", "c", TradeType::MonthlyLease);
    monthly.deposit = Some(1);
    monthly.monthly_rent = Some(3);

    let listings = [sale, jeonse, monthly];
    let sorted = apply(&listings, &FilterConfig::default(), SortSpec::descending(SortKey::Price));
    assert_eq!(ids(&sorted), vec!["deposit10", "price5", "rent3"]);
}

#[test]
fn currency_helpers() {
    assert_eq!(parse_digits_only(&format_with_thousands_separators("1234567")), 1_234_567);
    assert_eq!(format_abbreviated_magnitude(None), PLACEHOLDER);
    assert_eq!(format_abbreviated_magnitude(Some(0)), PLACEHOLDER);
}

#[test]
fn sale_scenario() {
    let mut a = Listing::new("A", "강남 아파트", TradeType::Sale);
    a.sequence_number = Some(1);
    a.price = Some(500_000_000);
    a.room_count = Some(1);
    a.usage = UsageCategories::from("apartment");

    let mut b = Listing::new("B", "역세권 원룸", TradeType::MonthlyLease);
    b.sequence_number = Some(2);
    b.deposit = Some(10_000_000);
    b.monthly_rent = Some(500_000);
    b.room_count = Some(2);
    b.usage = UsageCategories::from("studio");

    let mut c = Listing::new("C", "하남 주택", TradeType::Sale);
    c.sequence_number = Some(3);
    c.price = Some(300_000_000);
    c.room_count = Some(3);
    c.usage = UsageCategories::from("house");

    let listings = vec![a, b, c];

    let config = FilterConfig::new()
        .trade_type_text("매매")
        .price_range(AmountRange::new(0, Some(400_000_000)));
    assert_eq!(ids(&apply(&listings, &config, SortSpec::default())), vec!["C"]);

    let all = apply(&listings, &FilterConfig::default(), SortSpec::ascending(SortKey::Sequence));
    assert_eq!(ids(&all), vec!["A", "B", "C"]);
}

#[test]
fn rows_from_backend_json_flow_through_the_pipeline() {
    let rows = serde_json::json!([
        {"id": "1", "id_num": 1, "title": "마포 오피스텔", "type": "전세",
         "usage": "오피스텔", "deposit": 200000000, "parking": "O", "pet_allowed": "X"},
        {"id": "2", "id_num": 2, "title": "망원 투룸", "type": "월세",
         "usage": ["다세대"], "deposit": 10000000, "monthly": 700000, "room_count": 2},
        {"id": "3", "id_num": 3, "title": "연남 단독주택", "type": "매매",
         "usage": "단독주택", "price": null, "room_count": "4"}
    ]);
    let listings: Vec<Listing> = serde_json::from_value(rows).unwrap();

    let houses = FilterConfig::new().selected_usage_categories(["주택"]);
    assert_eq!(ids(&apply(&listings, &houses, SortSpec::default())), vec!["3", "2"]);

    let rooms = FilterConfig::new().selected_usage_categories(["원/투룸"]);
    assert_eq!(ids(&apply(&listings, &rooms, SortSpec::default())), vec!["2"]);

    let cheap_rent = FilterConfig::new()
        .trade_type_text("월세")
        .monthly_range(AmountRange::parse("", "500,000"));
    assert!(apply(&listings, &cheap_rent, SortSpec::default()).is_empty());
}
