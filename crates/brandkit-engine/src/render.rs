use brandkit_core::profile::Profile;
use brandkit_core::strategy::StrategyTemplate;

use crate::plan::WeeklyPlan;

/// How many weekly plans the long-form text includes.
pub const GUIDE_PREVIEW_WEEKS: usize = 4;

/// Placeholder printed for empty optional lists.
const EMPTY_PLACEHOLDER: &str = "none specified";

/// Assemble the guide text from its parts.
///
/// Pure string assembly: fixed section headers, values substituted
/// verbatim, lists joined with fixed separators. `sections` filters the
/// output (empty = all); names: identity, profile, strategy, content,
/// kpi, plan, tools.
pub fn render_guide(
    profile: &Profile,
    template: &StrategyTemplate,
    plans: &[WeeklyPlan],
    sections: &[String],
) -> String {
    let mut out = String::with_capacity(2048);
    let all = sections.is_empty();
    let wants = |name: &str| all || sections.iter().any(|s| s == name);

    out.push_str("# 브랜딩 전략 가이드\n\n");
    out.push_str(&format!(
        "_profile {} · {}_\n\n",
        profile.id,
        profile.created_at.format("%Y-%m-%d")
    ));

    if wants("identity") {
        emit_identity(&mut out, profile, template);
    }
    if wants("profile") {
        emit_profile(&mut out, profile);
    }
    if wants("strategy") {
        emit_strategy(&mut out, template);
    }
    if wants("content") {
        emit_content(&mut out, template);
    }
    if wants("kpi") {
        emit_kpi(&mut out, template);
    }
    if wants("plan") {
        emit_plan(&mut out, plans);
    }
    if wants("tools") {
        emit_tools(&mut out, template);
    }
    out
}

fn hashtag(text: &str) -> String {
    format!("#{}", text.replace(' ', ""))
}

fn emit_identity(out: &mut String, profile: &Profile, template: &StrategyTemplate) {
    out.push_str("## Brand Identity\n\n");
    out.push_str(&format!(
        "**페르소나:** {} — {} 전문\n",
        profile.brand_archetype.persona_label(),
        profile.business_type.label()
    ));
    out.push_str(&format!(
        "**BIO:** {}✨ | {} 타겟 {} | DM으로 상담!\n",
        template.strategy_name,
        profile.target_age_group.label(),
        profile.business_type.label()
    ));

    let mut tags: Vec<String> = vec![hashtag("브랜드변신"), hashtag("개인브랜딩")];
    tags.extend(template.content_pillars.iter().map(|p| hashtag(p)));
    tags.extend(profile.primary_goals.iter().map(|g| hashtag(g.label())));
    out.push_str(&format!("**해시태그:** {}\n\n", tags.join(" ")));
}

fn emit_profile(out: &mut String, profile: &Profile) {
    out.push_str("## Profile\n\n");
    out.push_str(&format!("- 사업 단계: {}\n", profile.business_stage.label()));
    out.push_str(&format!("- 비즈니스 유형: {}\n", profile.business_type.label()));
    out.push_str(&format!(
        "- 타겟 연령대: {}\n",
        profile.target_age_group.label()
    ));
    out.push_str(&format!(
        "- 브랜드 아키타입: {}\n",
        profile.brand_archetype.label()
    ));

    let goals = if profile.primary_goals.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        profile
            .primary_goals
            .iter()
            .map(|g| g.label().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    out.push_str(&format!("- 목표: {goals}\n"));

    out.push_str(&format!(
        "- 톤: 친근함 {} · 전문성 {} · 유머 {}\n",
        profile.tone.friendliness, profile.tone.expertise, profile.tone.humor
    ));

    let competitors = if profile.competitors.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        profile.competitors.join(", ")
    };
    out.push_str(&format!("- 경쟁 계정: {competitors}\n"));

    out.push_str(&format!(
        "- 차별화 포인트: {}\n\n",
        profile.differentiation.as_deref().unwrap_or(EMPTY_PLACEHOLDER)
    ));
}

fn emit_strategy(out: &mut String, template: &StrategyTemplate) {
    out.push_str("## Strategy\n\n");
    out.push_str(&format!(
        "**전략:** {} ({})\n",
        template.strategy_name, template.brand_type
    ));
    out.push_str(&format!(
        "**콘텐츠 필라:** {}\n\n",
        template.content_pillars.join(" / ")
    ));
}

fn emit_content(out: &mut String, template: &StrategyTemplate) {
    out.push_str("## Content Plan\n\n");
    let mix: Vec<String> = template
        .content_mix
        .iter()
        .map(|(format, pct)| format!("{} {pct}%", format.label()))
        .collect();
    out.push_str(&format!("**콘텐츠 믹스:** {}\n", mix.join(" · ")));

    let frequency: Vec<String> = template
        .posting_frequency
        .iter()
        .map(|(format, count)| format!("{} {count}", format.label()))
        .collect();
    out.push_str(&format!(
        "**발행 빈도(주):** {} (총 {}개)\n\n",
        frequency.join(" · "),
        template.weekly_posts()
    ));
}

fn emit_kpi(out: &mut String, template: &StrategyTemplate) {
    out.push_str("## KPI Targets\n\n");
    if template.kpi_targets.is_empty() {
        out.push_str(&format!("{EMPTY_PLACEHOLDER}\n"));
    }
    for (name, target) in template.kpi_targets {
        out.push_str(&format!("- {name}: +{target}%\n"));
    }
    out.push('\n');
}

fn emit_plan(out: &mut String, plans: &[WeeklyPlan]) {
    out.push_str("## Weekly Plan\n\n");
    for plan in plans.iter().take(GUIDE_PREVIEW_WEEKS) {
        out.push_str(&format!("### {}주차 — {}\n", plan.week, plan.phase));
        for task in &plan.tasks {
            out.push_str(&format!("- {task}\n"));
        }
        out.push_str(&format!("- KPI focus: {}\n\n", plan.kpi_focus));
    }
}

fn emit_tools(out: &mut String, template: &StrategyTemplate) {
    out.push_str("## Recommended Tools\n\n");
    out.push_str(&format!("{}\n", template.recommended_tools.join(", ")));
}
