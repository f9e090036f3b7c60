//! GenerateRecommendationsHandler - the recommendation engine itself.
//!
//! Fetches provider data, assembles the per-pass context, runs every rule
//! generator, prioritizes the combined candidates, and persists the result.
//! A store failure after successful generation is logged and swallowed; the
//! generated list is still returned.

use std::sync::{Arc, Mutex};

use rand::SeedableRng;
use rand_pcg::Pcg64;
use thiserror::Error;

use crate::config::EngineConfig;
use crate::domain::context::RecommendationContext;
use crate::domain::foundation::{Clock, UserId};
use crate::domain::recommendation::StudyRecommendation;
use crate::domain::rules::{default_generators, prioritize, RuleGenerator};
use crate::ports::{
    ActivityProvider, PerformanceProvider, ProfileProvider, ProviderError, RecommendationStore,
};

/// Command to run a full generation pass for one user.
#[derive(Debug, Clone)]
pub struct GenerateRecommendationsCommand {
    pub user_id: UserId,
}

/// Errors fatal to a generation pass.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("required data unavailable from the {provider} provider: {source}")]
    DataUnavailable {
        provider: &'static str,
        #[source]
        source: ProviderError,
    },
}

impl GenerateError {
    fn unavailable(provider: &'static str) -> impl FnOnce(ProviderError) -> Self {
        move |source| GenerateError::DataUnavailable { provider, source }
    }
}

/// The recommendation engine.
///
/// Stateless between invocations apart from the PRNG used for template
/// selection; independent users' passes may run concurrently.
pub struct GenerateRecommendationsHandler {
    performance: Arc<dyn PerformanceProvider>,
    profiles: Arc<dyn ProfileProvider>,
    activity: Arc<dyn ActivityProvider>,
    store: Arc<dyn RecommendationStore>,
    clock: Arc<dyn Clock>,
    generators: Vec<Box<dyn RuleGenerator>>,
    rng: Mutex<Pcg64>,
    session_window_days: u32,
}

impl GenerateRecommendationsHandler {
    pub fn new(
        performance: Arc<dyn PerformanceProvider>,
        profiles: Arc<dyn ProfileProvider>,
        activity: Arc<dyn ActivityProvider>,
        store: Arc<dyn RecommendationStore>,
        clock: Arc<dyn Clock>,
        engine: &EngineConfig,
    ) -> Self {
        let seed = engine.rng_seed.unwrap_or_else(rand::random);
        Self {
            performance,
            profiles,
            activity,
            store,
            clock,
            generators: default_generators(&engine.rules),
            rng: Mutex::new(Pcg64::seed_from_u64(seed)),
            session_window_days: engine.recent_session_window_days,
        }
    }

    pub async fn handle(
        &self,
        command: GenerateRecommendationsCommand,
    ) -> Result<Vec<StudyRecommendation>, GenerateError> {
        let user_id = &command.user_id;

        let (performance, profile, preferences, active_goals, recent_sessions, analytics) =
            tokio::try_join!(
                async {
                    self.performance
                        .analyze_all_subjects(user_id)
                        .await
                        .map_err(GenerateError::unavailable("performance"))
                },
                async {
                    self.profiles
                        .get_learning_profile(user_id)
                        .await
                        .map_err(GenerateError::unavailable("profile"))
                },
                async {
                    self.profiles
                        .get_study_preferences(user_id)
                        .await
                        .map_err(GenerateError::unavailable("profile"))
                },
                async {
                    self.profiles
                        .get_active_goals(user_id)
                        .await
                        .map_err(GenerateError::unavailable("profile"))
                },
                async {
                    self.activity
                        .get_recent_sessions(user_id, self.session_window_days)
                        .await
                        .map_err(GenerateError::unavailable("activity"))
                },
                async {
                    self.activity
                        .get_study_analytics(user_id)
                        .await
                        .map_err(GenerateError::unavailable("activity"))
                },
            )?;

        let ctx = RecommendationContext {
            user_id: command.user_id.clone(),
            profile,
            preferences,
            performance,
            analytics,
            recent_sessions,
            active_goals,
            generated_at: self.clock.now(),
        };

        let mut candidates = Vec::new();
        {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            for generator in &self.generators {
                let produced = generator.generate(&ctx, &mut *rng);
                tracing::debug!(
                    generator = generator.name(),
                    count = produced.len(),
                    "rule generator finished"
                );
                candidates.extend(produced);
            }
        }

        let ranked = prioritize(candidates);

        if let Err(error) = self.store.upsert(&ranked).await {
            tracing::warn!(
                user_id = %ctx.user_id,
                %error,
                "failed to persist generated recommendations; returning them anyway"
            );
        }

        Ok(ranked)
    }
}
