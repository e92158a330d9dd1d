use super::types::FilterConfig;
use serde::{Deserialize, Serialize};

/// Fixed-category listing pages of the site
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Every listing, free usage selection available
    #[default]
    All,
    Apartment,
    /// One- and two-room units
    OneTwoRoom,
    House,
    Officetel,
    Land,
    Shop,
}

impl Preset {
    pub fn title(self) -> &'static str {
        match self {
            Preset::All => "전체 매물",
            Preset::Apartment => "아파트 매물",
            Preset::OneTwoRoom => "원 / 투룸 매물 리스트",
            Preset::House => "주택 매물 리스트",
            Preset::Officetel => "오피스텔 매물 리스트",
            Preset::Land => "토지 및 건물 매물 리스트",
            Preset::Shop => "상가 / 사무실 매물 리스트",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preset::All => "보유한 모든 매물입니다.",
            Preset::Apartment => "보유한 아파트 매물입니다.",
            Preset::OneTwoRoom => "방 1~2개짜리 매물입니다.",
            Preset::House => "다세대 및 단독주택 매물만 보여줍니다.",
            Preset::Officetel => "오피스텔 용도만 보여줍니다.",
            Preset::Land => "토지와 건물 용도 매물만 보여줍니다.",
            Preset::Shop => "상가 또는 사무실 용도만 보여줍니다.",
        }
    }

    /// Whether the free usage selector makes sense on this page
    pub fn allows_usage_selection(self) -> bool {
        self == Preset::All
    }

    /// Base configuration with this page's fixed axes filled in
    pub fn filter(self) -> FilterConfig {
        let config = FilterConfig::new();
        match self {
            Preset::All => config,
            Preset::Apartment => config.fixed_usage_categories(["아파트"]),
            Preset::OneTwoRoom => config.fixed_room_counts([1, 2]),
            Preset::House => config.fixed_usage_categories(["다세대", "단독주택"]),
            Preset::Officetel => config.fixed_usage_categories(["오피스텔"]),
            Preset::Land => config.fixed_usage_categories(["토지", "건물"]),
            Preset::Shop => config.fixed_usage_categories(["상가", "사무실"]),
        }
    }
}
