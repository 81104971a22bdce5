use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A tone slider value constrained to 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ToneScore(u8);

impl ToneScore {
    pub fn new(v: u8) -> Option<Self> {
        if (1..=5).contains(&v) {
            Some(Self(v))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for ToneScore {
    /// Middle of the scale, the form's initial slider position.
    fn default() -> Self {
        Self(3)
    }
}

impl fmt::Display for ToneScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

impl Serialize for ToneScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ToneScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = u8::deserialize(deserializer)?;
        ToneScore::new(v).ok_or_else(|| serde::de::Error::custom(format!("{v} not in 1..=5")))
    }
}

/// How far along the business is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessStage {
    Idea,
    Launch,
    Growth,
    Established,
}

impl BusinessStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::Launch => "launch",
            Self::Growth => "growth",
            Self::Established => "established",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idea => "아이디어 단계",
            Self::Launch => "런칭 초기",
            Self::Growth => "성장기",
            Self::Established => "안정기",
        }
    }

    pub fn all() -> &'static [BusinessStage] {
        &[Self::Idea, Self::Launch, Self::Growth, Self::Established]
    }
}

/// What the account sells. Unknown values are kept as `Other` so a
/// submission never fails here; they resolve to the default strategy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BusinessType {
    Product,
    Service,
    Content,
    Coaching,
    Other(String),
}

impl BusinessType {
    pub fn label(&self) -> &str {
        match self {
            Self::Product => "제품 판매",
            Self::Service => "서비스",
            Self::Content => "콘텐츠 크리에이터",
            Self::Coaching => "코칭·컨설팅",
            Self::Other(name) => name,
        }
    }

    pub fn known() -> &'static [BusinessType] {
        &[Self::Product, Self::Service, Self::Content, Self::Coaching]
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Product => write!(f, "product"),
            Self::Service => write!(f, "service"),
            Self::Content => write!(f, "content"),
            Self::Coaching => write!(f, "coaching"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for BusinessType {
    fn from(s: &str) -> Self {
        match s {
            "product" => Self::Product,
            "service" => Self::Service,
            "content" => Self::Content,
            "coaching" => Self::Coaching,
            other => Self::Other(other.to_string()),
        }
    }
}

impl FromStr for BusinessType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Serialize for BusinessType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BusinessType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// A branding goal. Same forward-compat shape as [`BusinessType`]:
/// unknown goals deserialize as `Other` and never match a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Goal {
    Awareness,
    Engagement,
    Sales,
    Community,
    Other(String),
}

impl Goal {
    pub fn label(&self) -> &str {
        match self {
            Self::Awareness => "인지도 확보",
            Self::Engagement => "참여 유도",
            Self::Sales => "판매 전환",
            Self::Community => "커뮤니티 구축",
            Self::Other(name) => name,
        }
    }

    pub fn known() -> &'static [Goal] {
        &[
            Self::Awareness,
            Self::Engagement,
            Self::Sales,
            Self::Community,
        ]
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Awareness => write!(f, "awareness"),
            Self::Engagement => write!(f, "engagement"),
            Self::Sales => write!(f, "sales"),
            Self::Community => write!(f, "community"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for Goal {
    fn from(s: &str) -> Self {
        match s {
            "awareness" => Self::Awareness,
            "engagement" => Self::Engagement,
            "sales" => Self::Sales,
            "community" => Self::Community,
            other => Self::Other(other.to_string()),
        }
    }
}

impl FromStr for Goal {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Serialize for Goal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Goal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// Target audience age band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Teens,
    Twenties,
    Thirties,
    Forties,
    FiftyPlus,
}

impl AgeGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Teens => "teens",
            Self::Twenties => "twenties",
            Self::Thirties => "thirties",
            Self::Forties => "forties",
            Self::FiftyPlus => "fifty_plus",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Teens => "10대",
            Self::Twenties => "20대",
            Self::Thirties => "30대",
            Self::Forties => "40대",
            Self::FiftyPlus => "50대 이상",
        }
    }

    pub fn all() -> &'static [AgeGroup] {
        &[
            Self::Teens,
            Self::Twenties,
            Self::Thirties,
            Self::Forties,
            Self::FiftyPlus,
        ]
    }
}

/// Jungian brand archetypes offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandArchetype {
    Sage,
    Hero,
    Creator,
    Caregiver,
    Explorer,
    Ruler,
}

impl BrandArchetype {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sage => "sage",
            Self::Hero => "hero",
            Self::Creator => "creator",
            Self::Caregiver => "caregiver",
            Self::Explorer => "explorer",
            Self::Ruler => "ruler",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sage => "현자",
            Self::Hero => "영웅",
            Self::Creator => "창조자",
            Self::Caregiver => "양육자",
            Self::Explorer => "탐험가",
            Self::Ruler => "지배자",
        }
    }

    /// Persona tagline used in the rendered guide.
    pub fn persona_label(self) -> &'static str {
        match self {
            Self::Sage => "Empowering Sage",
            Self::Hero => "Bold Hero",
            Self::Creator => "Visionary Creator",
            Self::Caregiver => "Warm Caregiver",
            Self::Explorer => "Curious Explorer",
            Self::Ruler => "Confident Ruler",
        }
    }

    pub fn all() -> &'static [BrandArchetype] {
        &[
            Self::Sage,
            Self::Hero,
            Self::Creator,
            Self::Caregiver,
            Self::Explorer,
            Self::Ruler,
        ]
    }
}

/// Content formats the catalog plans around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentFormat {
    Reels,
    Carousel,
    SinglePost,
    Story,
    Live,
}

impl ContentFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reels => "reels",
            Self::Carousel => "carousel",
            Self::SinglePost => "single_post",
            Self::Story => "story",
            Self::Live => "live",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Reels => "릴스",
            Self::Carousel => "캐러셀",
            Self::SinglePost => "싱글포스트",
            Self::Story => "스토리",
            Self::Live => "라이브",
        }
    }
}
