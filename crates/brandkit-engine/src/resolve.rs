use brandkit_core::profile::Profile;
use brandkit_core::strategy::{template_for, StrategyKey, StrategyTemplate};
use brandkit_core::types::Goal;

/// Pick the catalog entry for a profile.
///
/// The key is business type × first selected goal (`awareness` when the
/// goal list is empty). Only the first goal participates; the other
/// selected goals and every remaining profile field are display-only.
/// Combinations without a catalog entry resolve to the default entry —
/// a miss is policy here, not an error.
pub fn resolve_strategy(profile: &Profile) -> &'static StrategyTemplate {
    let goal = profile
        .primary_goals
        .first()
        .cloned()
        .unwrap_or(Goal::Awareness);
    let key =
        StrategyKey::from_pair(&profile.business_type, &goal).unwrap_or(StrategyKey::DEFAULT);
    template_for(key)
}
