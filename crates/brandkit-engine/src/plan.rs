use serde::{Deserialize, Serialize};

use brandkit_core::profile::Profile;
use brandkit_core::strategy::StrategyTemplate;

/// Length of the generated plan sequence.
pub const TOTAL_WEEKS: u8 = 12;

/// Plan phase, assigned purely by week number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Foundation,
    Execution,
    Growth,
}

impl Phase {
    /// Weeks 1-2 build, 3-8 execute, 9 onward grow.
    pub fn for_week(week: u8) -> Phase {
        match week {
            0..=2 => Phase::Foundation,
            3..=8 => Phase::Execution,
            _ => Phase::Growth,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Foundation => "Foundation",
            Self::Execution => "Execution",
            Self::Growth => "Growth",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One week of the plan. Derived and transient, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub week: u8,
    pub phase: Phase,
    pub tasks: Vec<String>,
    pub kpi_focus: String,
}

/// Expand a profile + template pair into the fixed 12-week sequence.
///
/// Deterministic: no randomness, no dependency between weeks. Each week
/// carries its phase's task list and the template's KPI focus.
pub fn generate_weekly_plans(profile: &Profile, template: &StrategyTemplate) -> Vec<WeeklyPlan> {
    (1..=TOTAL_WEEKS)
        .map(|week| {
            let phase = Phase::for_week(week);
            WeeklyPlan {
                week,
                phase,
                tasks: tasks_for(phase, profile, template),
                kpi_focus: template.kpi_focus().to_string(),
            }
        })
        .collect()
}

fn tasks_for(phase: Phase, profile: &Profile, template: &StrategyTemplate) -> Vec<String> {
    match phase {
        Phase::Foundation => {
            let benchmarking = if profile.competitors.is_empty() {
                "경쟁 계정 벤치마킹".to_string()
            } else {
                format!("경쟁 계정 벤치마킹: {}", profile.competitors.join(", "))
            };
            vec![
                "계정 셋업 및 프로필 최적화".to_string(),
                "브랜드 아이덴티티 가이드 작성".to_string(),
                benchmarking,
                format!("콘텐츠 필라 확정: {}", template.content_pillars.join(" / ")),
            ]
        }
        Phase::Execution => vec![
            format!("주 {}개 콘텐츠 제작 및 발행", template.weekly_posts()),
            "댓글·DM 응대로 초기 팬층 관리".to_string(),
            "주간 인사이트 리뷰 및 소재 발굴".to_string(),
        ],
        Phase::Growth => vec![
            "소액 유료 광고 테스트".to_string(),
            "인플루언서 협업 제안".to_string(),
            "UGC 캠페인 운영".to_string(),
            "타 플랫폼 확장 론칭".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandkit_core::profile::{build_profile, Answers};
    use brandkit_core::strategy::{template_for, StrategyKey, StrategyTemplate};
    use brandkit_core::types::{AgeGroup, BrandArchetype, BusinessStage, BusinessType, Goal};

    fn sample_profile() -> Profile {
        let answers = Answers {
            business_stage: Some(BusinessStage::Launch),
            business_type: Some(BusinessType::Product),
            target_age_group: Some(AgeGroup::Thirties),
            brand_archetype: Some(BrandArchetype::Sage),
            primary_goals: vec![Goal::Awareness],
            competitors: vec!["@glow_kr".into()],
            ..Answers::default()
        };
        build_profile(&answers).unwrap()
    }

    #[test]
    fn always_twelve_weeks_in_order() {
        let template = template_for(StrategyKey::ProductAwareness);
        let plans = generate_weekly_plans(&sample_profile(), template);
        assert_eq!(plans.len(), 12);
        for (i, plan) in plans.iter().enumerate() {
            assert_eq!(plan.week, (i + 1) as u8);
        }
    }

    #[test]
    fn phase_ranges() {
        assert_eq!(Phase::for_week(1), Phase::Foundation);
        assert_eq!(Phase::for_week(2), Phase::Foundation);
        assert_eq!(Phase::for_week(3), Phase::Execution);
        assert_eq!(Phase::for_week(8), Phase::Execution);
        assert_eq!(Phase::for_week(9), Phase::Growth);
        assert_eq!(Phase::for_week(12), Phase::Growth);
    }

    #[test]
    fn week_five_interpolates_weekly_post_total() {
        let template = template_for(StrategyKey::ProductAwareness);
        let plans = generate_weekly_plans(&sample_profile(), template);
        let week5 = &plans[4];
        assert_eq!(week5.phase, Phase::Execution);
        assert!(
            week5.tasks.iter().any(|t| t.contains("12")),
            "execution tasks: {:?}",
            week5.tasks
        );
    }

    #[test]
    fn foundation_names_competitors_and_pillars() {
        let template = template_for(StrategyKey::ProductAwareness);
        let plans = generate_weekly_plans(&sample_profile(), template);
        let week1 = &plans[0];
        assert!(week1.tasks.iter().any(|t| t.contains("@glow_kr")));
        assert!(week1.tasks.iter().any(|t| t.contains("제품 연출 컷")));
    }

    #[test]
    fn kpi_focus_comes_from_template() {
        let template = template_for(StrategyKey::ProductAwareness);
        let plans = generate_weekly_plans(&sample_profile(), template);
        assert!(plans.iter().all(|p| p.kpi_focus == "팔로워 증가율"));
    }

    #[test]
    fn kpi_focus_falls_back_when_map_is_empty() {
        let bare = StrategyTemplate {
            kpi_targets: &[],
            ..*template_for(StrategyKey::ProductAwareness)
        };
        let plans = generate_weekly_plans(&sample_profile(), &bare);
        assert_eq!(plans[0].kpi_focus, "follower growth");
    }

    #[test]
    fn generation_is_deterministic() {
        let profile = sample_profile();
        let template = template_for(StrategyKey::ProductAwareness);
        let a = generate_weekly_plans(&profile, template);
        let b = generate_weekly_plans(&profile, template);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
