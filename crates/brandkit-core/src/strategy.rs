use std::fmt;

use serde_json::{json, Map, Value};

use crate::types::{BusinessType, ContentFormat, Goal};

/// Lookup key for the strategy catalog: business type × primary goal.
///
/// One variant per catalog entry, so adding a combination is a
/// compile-checked change instead of a string-concatenation typo risk.
/// Combinations without an entry resolve to [`StrategyKey::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKey {
    ProductAwareness,
    ProductSales,
    ServiceAwareness,
    ServiceSales,
    ContentEngagement,
    ContentCommunity,
    CoachingAwareness,
    CoachingCommunity,
}

impl StrategyKey {
    /// Fallback entry for combinations the catalog does not cover.
    pub const DEFAULT: StrategyKey = StrategyKey::ProductAwareness;

    /// Match a business type / goal pair to a catalog entry, if any.
    pub fn from_pair(business_type: &BusinessType, goal: &Goal) -> Option<Self> {
        match (business_type, goal) {
            (BusinessType::Product, Goal::Awareness) => Some(Self::ProductAwareness),
            (BusinessType::Product, Goal::Sales) => Some(Self::ProductSales),
            (BusinessType::Service, Goal::Awareness) => Some(Self::ServiceAwareness),
            (BusinessType::Service, Goal::Sales) => Some(Self::ServiceSales),
            (BusinessType::Content, Goal::Engagement) => Some(Self::ContentEngagement),
            (BusinessType::Content, Goal::Community) => Some(Self::ContentCommunity),
            (BusinessType::Coaching, Goal::Awareness) => Some(Self::CoachingAwareness),
            (BusinessType::Coaching, Goal::Community) => Some(Self::CoachingCommunity),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProductAwareness => "product_awareness",
            Self::ProductSales => "product_sales",
            Self::ServiceAwareness => "service_awareness",
            Self::ServiceSales => "service_sales",
            Self::ContentEngagement => "content_engagement",
            Self::ContentCommunity => "content_community",
            Self::CoachingAwareness => "coaching_awareness",
            Self::CoachingCommunity => "coaching_community",
        }
    }

    pub fn all() -> &'static [StrategyKey] {
        &[
            Self::ProductAwareness,
            Self::ProductSales,
            Self::ServiceAwareness,
            Self::ServiceSales,
            Self::ContentEngagement,
            Self::ContentCommunity,
            Self::CoachingAwareness,
            Self::CoachingCommunity,
        ]
    }
}

impl fmt::Display for StrategyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A static, hand-authored strategy record. Fixed at build time, never
/// mutated at run time; the whole catalog is safely shared as `&'static`.
#[derive(Debug, PartialEq, Eq)]
pub struct StrategyTemplate {
    pub key: StrategyKey,
    pub brand_type: &'static str,
    pub strategy_name: &'static str,
    pub content_pillars: &'static [&'static str],
    /// Posts per week, by format.
    pub posting_frequency: &'static [(ContentFormat, u8)],
    /// Share of output per format, in percent; sums to 100.
    pub content_mix: &'static [(ContentFormat, u8)],
    pub recommended_tools: &'static [&'static str],
    /// Target percentages in priority order; the first entry is the
    /// weekly KPI focus.
    pub kpi_targets: &'static [(&'static str, u8)],
}

impl StrategyTemplate {
    /// Total posts per week across all formats.
    pub fn weekly_posts(&self) -> u32 {
        self.posting_frequency
            .iter()
            .map(|(_, n)| u32::from(*n))
            .sum()
    }

    /// First KPI name, or the fixed fallback when the map is empty.
    pub fn kpi_focus(&self) -> &'static str {
        self.kpi_targets
            .first()
            .map(|(name, _)| *name)
            .unwrap_or("follower growth")
    }

    /// JSON view with display labels, for `bk strategy --json`.
    pub fn as_json(&self) -> Value {
        let mut frequency = Map::new();
        for (format, count) in self.posting_frequency {
            frequency.insert(format.label().to_string(), json!(count));
        }
        let mut mix = Map::new();
        for (format, pct) in self.content_mix {
            mix.insert(format.label().to_string(), json!(pct));
        }
        let mut kpis = Map::new();
        for (name, pct) in self.kpi_targets {
            kpis.insert((*name).to_string(), json!(pct));
        }
        json!({
            "key": self.key.as_str(),
            "brand_type": self.brand_type,
            "strategy_name": self.strategy_name,
            "content_pillars": self.content_pillars,
            "posting_frequency": frequency,
            "content_mix": mix,
            "recommended_tools": self.recommended_tools,
            "kpi_targets": kpis,
        })
    }
}

// ── Catalog ─────────────────────────────────────────────────────

const PRODUCT_AWARENESS: StrategyTemplate = StrategyTemplate {
    key: StrategyKey::ProductAwareness,
    brand_type: "Product-First Visual Brand",
    strategy_name: "제품 비주얼 각인 전략",
    content_pillars: &["제품 연출 컷", "사용 전후 비교", "고객 후기", "브랜드 스토리"],
    posting_frequency: &[
        (ContentFormat::Reels, 8),
        (ContentFormat::Carousel, 3),
        (ContentFormat::SinglePost, 1),
    ],
    content_mix: &[
        (ContentFormat::Reels, 70),
        (ContentFormat::Carousel, 25),
        (ContentFormat::SinglePost, 5),
    ],
    recommended_tools: &["Canva", "CapCut", "미리캔버스", "Later"],
    kpi_targets: &[("팔로워 증가율", 15), ("도달률", 30), ("프로필 방문 전환율", 8)],
};

const PRODUCT_SALES: StrategyTemplate = StrategyTemplate {
    key: StrategyKey::ProductSales,
    brand_type: "Conversion-Driven Product Brand",
    strategy_name: "구매 전환 퍼널 전략",
    content_pillars: &["제품 데모", "한정 프로모션", "고객 후기", "구매 FAQ"],
    posting_frequency: &[
        (ContentFormat::Reels, 5),
        (ContentFormat::Carousel, 4),
        (ContentFormat::Story, 5),
    ],
    content_mix: &[
        (ContentFormat::Reels, 45),
        (ContentFormat::Carousel, 35),
        (ContentFormat::Story, 20),
    ],
    recommended_tools: &["Canva", "CapCut", "Linktree"],
    kpi_targets: &[("구매 전환율", 3), ("링크 클릭률", 12), ("저장수 증가율", 20)],
};

const SERVICE_AWARENESS: StrategyTemplate = StrategyTemplate {
    key: StrategyKey::ServiceAwareness,
    brand_type: "Trust-Building Service Brand",
    strategy_name: "전문성 노출 전략",
    content_pillars: &["서비스 과정 공개", "전문 지식 팁", "고객 사례"],
    posting_frequency: &[
        (ContentFormat::Reels, 4),
        (ContentFormat::Carousel, 4),
        (ContentFormat::SinglePost, 2),
    ],
    content_mix: &[
        (ContentFormat::Reels, 40),
        (ContentFormat::Carousel, 40),
        (ContentFormat::SinglePost, 20),
    ],
    recommended_tools: &["Canva", "미리캔버스", "Notion"],
    kpi_targets: &[("팔로워 증가율", 10), ("도달률", 25)],
};

const SERVICE_SALES: StrategyTemplate = StrategyTemplate {
    key: StrategyKey::ServiceSales,
    brand_type: "Lead-Generating Service Brand",
    strategy_name: "상담 전환 전략",
    content_pillars: &["문제 해결 사례", "상담 후기", "서비스 비교 가이드"],
    posting_frequency: &[
        (ContentFormat::Carousel, 4),
        (ContentFormat::Reels, 3),
        (ContentFormat::Story, 7),
    ],
    content_mix: &[
        (ContentFormat::Carousel, 45),
        (ContentFormat::Reels, 30),
        (ContentFormat::Story, 25),
    ],
    recommended_tools: &["Canva", "Calendly", "Linktree"],
    kpi_targets: &[("상담 신청 전환율", 5), ("DM 문의 증가율", 15)],
};

const CONTENT_ENGAGEMENT: StrategyTemplate = StrategyTemplate {
    key: StrategyKey::ContentEngagement,
    brand_type: "Conversation-First Creator Brand",
    strategy_name: "참여 루프 전략",
    content_pillars: &["질문형 콘텐츠", "비하인드 스토리", "팔로워 참여 챌린지", "큐레이션"],
    posting_frequency: &[
        (ContentFormat::Reels, 6),
        (ContentFormat::Story, 10),
        (ContentFormat::SinglePost, 2),
    ],
    content_mix: &[
        (ContentFormat::Reels, 50),
        (ContentFormat::Story, 35),
        (ContentFormat::SinglePost, 15),
    ],
    recommended_tools: &["CapCut", "Instagram 설문 스티커", "Canva"],
    kpi_targets: &[("참여율", 6), ("댓글 증가율", 25), ("공유수 증가율", 18)],
};

const CONTENT_COMMUNITY: StrategyTemplate = StrategyTemplate {
    key: StrategyKey::ContentCommunity,
    brand_type: "Community-Led Creator Brand",
    strategy_name: "팬덤 빌딩 전략",
    content_pillars: &["멤버 스포트라이트", "정기 라이브", "공동 제작 콘텐츠"],
    posting_frequency: &[
        (ContentFormat::Story, 8),
        (ContentFormat::Reels, 4),
        (ContentFormat::Live, 1),
    ],
    content_mix: &[
        (ContentFormat::Story, 45),
        (ContentFormat::Reels, 35),
        (ContentFormat::Live, 20),
    ],
    recommended_tools: &["Instagram Live", "Discord", "CapCut"],
    kpi_targets: &[("커뮤니티 가입률", 10), ("라이브 시청 유지율", 40)],
};

const COACHING_AWARENESS: StrategyTemplate = StrategyTemplate {
    key: StrategyKey::CoachingAwareness,
    brand_type: "Authority Coaching Brand",
    strategy_name: "권위 구축 전략",
    content_pillars: &["수강생 변화 사례", "코칭 철학", "무료 미니 클래스"],
    posting_frequency: &[
        (ContentFormat::Reels, 5),
        (ContentFormat::Carousel, 3),
        (ContentFormat::SinglePost, 2),
    ],
    content_mix: &[
        (ContentFormat::Reels, 55),
        (ContentFormat::Carousel, 30),
        (ContentFormat::SinglePost, 15),
    ],
    recommended_tools: &["Canva", "CapCut", "Notion"],
    kpi_targets: &[("팔로워 증가율", 12), ("저장수 증가율", 22)],
};

const COACHING_COMMUNITY: StrategyTemplate = StrategyTemplate {
    key: StrategyKey::CoachingCommunity,
    brand_type: "Mentorship Community Brand",
    strategy_name: "동반 성장 커뮤니티 전략",
    content_pillars: &["수강생 Q&A", "그룹 챌린지", "성장 일지"],
    posting_frequency: &[
        (ContentFormat::Story, 9),
        (ContentFormat::Carousel, 3),
        (ContentFormat::Live, 1),
    ],
    content_mix: &[
        (ContentFormat::Story, 40),
        (ContentFormat::Carousel, 30),
        (ContentFormat::Live, 30),
    ],
    recommended_tools: &["Instagram Live", "카카오 오픈채팅", "Canva"],
    kpi_targets: &[("커뮤니티 가입률", 8), ("챌린지 완주율", 35)],
};

/// Fetch the catalog entry for a key.
pub fn template_for(key: StrategyKey) -> &'static StrategyTemplate {
    match key {
        StrategyKey::ProductAwareness => &PRODUCT_AWARENESS,
        StrategyKey::ProductSales => &PRODUCT_SALES,
        StrategyKey::ServiceAwareness => &SERVICE_AWARENESS,
        StrategyKey::ServiceSales => &SERVICE_SALES,
        StrategyKey::ContentEngagement => &CONTENT_ENGAGEMENT,
        StrategyKey::ContentCommunity => &CONTENT_COMMUNITY,
        StrategyKey::CoachingAwareness => &COACHING_AWARENESS,
        StrategyKey::CoachingCommunity => &COACHING_COMMUNITY,
    }
}

/// (key, brand-type label) pairs for `bk strategies`.
pub fn list_strategies() -> Vec<(&'static str, &'static str)> {
    StrategyKey::all()
        .iter()
        .map(|k| {
            let t = template_for(*k);
            (k.as_str(), t.brand_type)
        })
        .collect()
}
