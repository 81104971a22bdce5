use chrono::{DateTime, Utc};

use brandkit_core::errors::MissingFieldError;
use brandkit_core::profile::{build_profile, Answers, Profile};
use brandkit_core::strategy::StrategyTemplate;

use crate::plan::{generate_weekly_plans, WeeklyPlan};
use crate::render::render_guide;
use crate::resolve::resolve_strategy;

/// Strategy and plans derived from one submission.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub template: &'static StrategyTemplate,
    pub plans: Vec<WeeklyPlan>,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no completed submission in this session")]
    NoSubmission,
}

/// Explicit per-caller session state: the submission handler writes it,
/// the display layer reads it. One value per caller; nothing global.
#[derive(Debug, Default)]
pub struct Session {
    profile: Option<Profile>,
    resolved: Option<Resolved>,
    submitted_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate answers and, on success, replace the previous submission
    /// with a fresh profile, strategy, and plan sequence. On a
    /// [`MissingFieldError`] the previous submission is left untouched so
    /// the caller can re-prompt.
    pub fn submit(&mut self, answers: &Answers) -> Result<&Profile, MissingFieldError> {
        let profile = build_profile(answers)?;
        let template = resolve_strategy(&profile);
        let plans = generate_weekly_plans(&profile, template);

        self.resolved = Some(Resolved { template, plans });
        self.submitted_at = Some(Utc::now());
        Ok(self.profile.insert(profile))
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn resolved(&self) -> Option<&Resolved> {
        self.resolved.as_ref()
    }

    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.submitted_at
    }

    pub fn has_submission(&self) -> bool {
        self.profile.is_some()
    }

    /// Render the current submission's guide.
    pub fn render(&self, sections: &[String]) -> Result<String, SessionError> {
        match (&self.profile, &self.resolved) {
            (Some(profile), Some(resolved)) => Ok(render_guide(
                profile,
                resolved.template,
                &resolved.plans,
                sections,
            )),
            _ => Err(SessionError::NoSubmission),
        }
    }

    /// Drop the current submission.
    pub fn clear(&mut self) {
        self.profile = None;
        self.resolved = None;
        self.submitted_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandkit_core::types::{AgeGroup, BrandArchetype, BusinessStage, BusinessType, Goal};

    fn full_answers() -> Answers {
        Answers {
            business_stage: Some(BusinessStage::Growth),
            business_type: Some(BusinessType::Coaching),
            target_age_group: Some(AgeGroup::Forties),
            brand_archetype: Some(BrandArchetype::Ruler),
            primary_goals: vec![Goal::Community],
            ..Answers::default()
        }
    }

    #[test]
    fn render_before_submit_fails() {
        let session = Session::new();
        assert!(matches!(
            session.render(&[]),
            Err(SessionError::NoSubmission)
        ));
    }

    #[test]
    fn submit_populates_profile_and_resolution() {
        let mut session = Session::new();
        session.submit(&full_answers()).unwrap();
        assert!(session.has_submission());
        let resolved = session.resolved().unwrap();
        assert_eq!(resolved.plans.len(), 12);
        assert!(session.render(&[]).is_ok());
    }

    #[test]
    fn failed_submit_keeps_previous_submission() {
        let mut session = Session::new();
        session.submit(&full_answers()).unwrap();
        let first_id = session.profile().unwrap().id;

        let err = session.submit(&Answers::default()).unwrap_err();
        assert!(!err.fields.is_empty());
        assert_eq!(session.profile().unwrap().id, first_id);
    }

    #[test]
    fn resubmission_replaces_the_previous_one() {
        let mut session = Session::new();
        session.submit(&full_answers()).unwrap();
        let first_id = session.profile().unwrap().id;

        session.submit(&full_answers()).unwrap();
        assert_ne!(session.profile().unwrap().id, first_id);
    }

    #[test]
    fn clear_discards_state() {
        let mut session = Session::new();
        session.submit(&full_answers()).unwrap();
        session.clear();
        assert!(!session.has_submission());
        assert!(session.submitted_at().is_none());
    }
}
