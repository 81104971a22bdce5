use rand::seq::SliceRandom;
use rand::Rng;

use brandkit_core::profile::QuickAnswers;

/// Cosmetic pools for the quick variant. One element of each is drawn
/// per render through the injected RNG.
const EMOJIS: &[&str] = &["✨", "🔥", "🌱", "💪"];
const MENTOR_SYNONYMS: &[&str] = &["멘토", "코치", "가이드"];
const CALL_TO_ACTIONS: &[&str] = &["DM으로 상담!", "프로필 링크 클릭!", "지금 바로 문의!"];

/// The Instagram bio keeps only this many characters of the mission line.
const BIO_MISSION_CHARS: usize = 50;

/// Single-shot interpolation over the seven raw answers.
///
/// The RNG only picks cosmetic elements (emoji, synonym, call-to-action);
/// everything else is fixed template substitution, so output is
/// deterministic under a seeded RNG.
pub fn render_quick<R: Rng + ?Sized>(answers: &QuickAnswers, rng: &mut R) -> String {
    let synonym = pick(MENTOR_SYNONYMS, rng);
    let emoji = pick(EMOJIS, rng);
    let cta = pick(CALL_TO_ACTIONS, rng);

    let mission = format!(
        "재정의된 미션: {}을 넘어, {}으로 {}을 실현하는 {}한 {synonym}.",
        answers.mission, answers.passion, answers.gain, answers.values
    );
    let persona = format!(
        "페르소나: Empowering Sage - {} 전문, 취약점 공유로 공감 유도 (e.g., '나도 {} 겪었어').",
        answers.expertise, answers.pain
    );
    // char-based truncation: Hangul never splits mid-codepoint
    let mission_teaser: String = mission.chars().take(BIO_MISSION_CHARS).collect();
    let bio = format!(
        "인스타 BIO: {mission_teaser}{emoji} | {}을 위한 {} 코치 | {cta}",
        answers.target, answers.passion
    );
    let hashtags = [
        "#브랜드변신".to_string(),
        "#개인브랜딩".to_string(),
        format!("#{}극복", answers.pain),
        "#자기관리".to_string(),
        "#여성성공".to_string(),
    ];

    let mut out = String::with_capacity(1024);
    out.push_str("[브랜드 재창조 결과]\n");
    out.push_str(&mission);
    out.push('\n');
    out.push_str(&persona);
    out.push('\n');
    out.push_str(&bio);
    out.push('\n');
    out.push_str(&format!("핵심 해시태그: {}\n", hashtags.join(", ")));
    out.push('\n');
    out.push_str("[장기 플랜: 초창기(강점 발굴), 중간(콘텐츠 빌드), 수익화(파트너십)]\n");
    out.push_str("1. 초창기: 주 3회 스토리 공유로 공감 쌓기.\n");
    out.push_str("2. 중간: 취약점 에피소드 포스트로 충성도 높이기.\n");
    out.push_str("3. 연결: 관계 마케팅으로 콜라보 유도 (e.g., Daria Astanaeva 방법).\n");
    out
}

fn pick<'a, R: Rng + ?Sized>(pool: &'a [&'a str], rng: &mut R) -> &'a str {
    pool.choose(rng).copied().unwrap_or("")
}
