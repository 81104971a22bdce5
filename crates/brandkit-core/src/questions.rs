use crate::types::{AgeGroup, BrandArchetype, BusinessStage, BusinessType, Goal};

/// One intake question: the answers-file field it fills, the prompt
/// shown by a form layer, and what kind of answer it takes.
pub struct Question {
    pub field: &'static str,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub required: bool,
}

pub enum QuestionKind {
    Text,
    Choice(Vec<String>),
    MultiChoice { options: Vec<String>, max: usize },
    List { max: usize },
    Scale { min: u8, max: u8 },
}

impl QuestionKind {
    /// Short form-hint for `bk fields` output.
    pub fn describe(&self) -> String {
        match self {
            Self::Text => "text".to_string(),
            Self::Choice(options) => format!("one of: {}", options.join(", ")),
            Self::MultiChoice { options, max } => {
                format!("up to {max} of: {}", options.join(", "))
            }
            Self::List { max } => format!("up to {max} text entries"),
            Self::Scale { min, max } => format!("integer {min}..{max}"),
        }
    }
}

/// The rich variant's question set, in form order.
pub fn intake_questions() -> Vec<Question> {
    vec![
        Question {
            field: "business_stage",
            prompt: "사업 단계를 선택하세요",
            kind: QuestionKind::Choice(
                BusinessStage::all().iter().map(|s| s.as_str().into()).collect(),
            ),
            required: true,
        },
        Question {
            field: "business_type",
            prompt: "비즈니스 유형을 선택하세요",
            kind: QuestionKind::Choice(
                BusinessType::known().iter().map(|t| t.to_string()).collect(),
            ),
            required: true,
        },
        Question {
            field: "target_age_group",
            prompt: "타겟 연령대를 선택하세요 (e.g., '30-40대 여성')",
            kind: QuestionKind::Choice(
                AgeGroup::all().iter().map(|a| a.as_str().into()).collect(),
            ),
            required: true,
        },
        Question {
            field: "brand_archetype",
            prompt: "브랜드 아키타입을 선택하세요",
            kind: QuestionKind::Choice(
                BrandArchetype::all().iter().map(|a| a.as_str().into()).collect(),
            ),
            required: true,
        },
        Question {
            field: "primary_goals",
            prompt: "브랜딩 목표를 선택하세요 (최대 3개)",
            kind: QuestionKind::MultiChoice {
                options: Goal::known().iter().map(|g| g.to_string()).collect(),
                max: 3,
            },
            required: false,
        },
        Question {
            field: "tone.friendliness",
            prompt: "톤: 친근함",
            kind: QuestionKind::Scale { min: 1, max: 5 },
            required: false,
        },
        Question {
            field: "tone.expertise",
            prompt: "톤: 전문성",
            kind: QuestionKind::Scale { min: 1, max: 5 },
            required: false,
        },
        Question {
            field: "tone.humor",
            prompt: "톤: 유머",
            kind: QuestionKind::Scale { min: 1, max: 5 },
            required: false,
        },
        Question {
            field: "competitors",
            prompt: "경쟁 계정 (최대 3개)",
            kind: QuestionKind::List { max: 3 },
            required: false,
        },
        Question {
            field: "differentiation",
            prompt: "차별화 포인트",
            kind: QuestionKind::Text,
            required: false,
        },
    ]
}

/// The simple variant's seven questions, wording from the original form.
pub fn quick_questions() -> Vec<Question> {
    let text = |field, prompt| Question {
        field,
        prompt,
        kind: QuestionKind::Text,
        required: true,
    };
    vec![
        text("mission", "브랜드 미션 (e.g., '선배로서 코칭')"),
        text("passion", "열정 분야 (e.g., '뉴스킨 제품')"),
        text("expertise", "전문성 (e.g., '출산 후 자기관리')"),
        text("values", "핵심 가치 (e.g., '신뢰, 성실')"),
        text("target", "타겟 고객 (e.g., '30-40대 여성')"),
        text("pain", "타겟 고민 (e.g., '뱃살')"),
        text("gain", "타겟 욕망 (e.g., '자신감 회복')"),
    ]
}

/// Field names a submission must fill, in form order.
pub fn required_fields() -> Vec<&'static str> {
    intake_questions()
        .iter()
        .filter(|q| q.required)
        .map(|q| q.field)
        .collect()
}
