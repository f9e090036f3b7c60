//! Fixture providers serving canned payloads.
//!
//! These replace the module-level mock-data singletons of the original
//! platform service: every fixture is explicitly constructed and injected,
//! and each can be flipped into a failing state to exercise the
//! data-unavailable path.

use async_trait::async_trait;

use crate::domain::context::{
    GoalSummary, LearningProfile, StudyAnalytics, StudyPreferences, StudySession,
    SubjectPerformance,
};
use crate::domain::foundation::UserId;
use crate::ports::{ActivityProvider, PerformanceProvider, ProfileProvider, ProviderError};

/// Performance provider backed by a fixed subject list.
pub struct FixturePerformanceProvider {
    subjects: Vec<SubjectPerformance>,
    error: Option<String>,
}

impl FixturePerformanceProvider {
    pub fn with_subjects(subjects: Vec<SubjectPerformance>) -> Self {
        Self {
            subjects,
            error: None,
        }
    }

    /// A provider whose calls always fail.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            subjects: Vec::new(),
            error: Some(message.into()),
        }
    }
}

#[async_trait]
impl PerformanceProvider for FixturePerformanceProvider {
    async fn analyze_all_subjects(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<SubjectPerformance>, ProviderError> {
        match &self.error {
            Some(message) => Err(ProviderError::Unavailable(message.clone())),
            None => Ok(self.subjects.clone()),
        }
    }
}

/// Profile provider backed by fixed profile, preferences, and goals.
pub struct FixtureProfileProvider {
    profile: LearningProfile,
    preferences: StudyPreferences,
    goals: Vec<GoalSummary>,
    error: Option<String>,
}

impl FixtureProfileProvider {
    pub fn new(
        profile: LearningProfile,
        preferences: StudyPreferences,
        goals: Vec<GoalSummary>,
    ) -> Self {
        Self {
            profile,
            preferences,
            goals,
            error: None,
        }
    }

    /// Defaults everywhere: no styles, no goals, default preferences.
    pub fn empty() -> Self {
        Self::new(LearningProfile::default(), StudyPreferences::default(), Vec::new())
    }

    /// A provider whose calls always fail.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            profile: LearningProfile::default(),
            preferences: StudyPreferences::default(),
            goals: Vec::new(),
            error: Some(message.into()),
        }
    }

    fn check(&self) -> Result<(), ProviderError> {
        match &self.error {
            Some(message) => Err(ProviderError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProfileProvider for FixtureProfileProvider {
    async fn get_learning_profile(
        &self,
        _user_id: &UserId,
    ) -> Result<LearningProfile, ProviderError> {
        self.check()?;
        Ok(self.profile.clone())
    }

    async fn get_study_preferences(
        &self,
        _user_id: &UserId,
    ) -> Result<StudyPreferences, ProviderError> {
        self.check()?;
        Ok(self.preferences.clone())
    }

    async fn get_active_goals(&self, _user_id: &UserId) -> Result<Vec<GoalSummary>, ProviderError> {
        self.check()?;
        Ok(self.goals.clone())
    }
}

/// Activity provider backed by fixed sessions and analytics.
pub struct FixtureActivityProvider {
    sessions: Vec<StudySession>,
    analytics: StudyAnalytics,
    error: Option<String>,
}

impl FixtureActivityProvider {
    pub fn new(sessions: Vec<StudySession>, analytics: StudyAnalytics) -> Self {
        Self {
            sessions,
            analytics,
            error: None,
        }
    }

    /// No history at all, as for a brand-new user.
    pub fn empty() -> Self {
        Self::new(Vec::new(), StudyAnalytics::default())
    }

    /// A provider whose calls always fail.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            sessions: Vec::new(),
            analytics: StudyAnalytics::default(),
            error: Some(message.into()),
        }
    }

    fn check(&self) -> Result<(), ProviderError> {
        match &self.error {
            Some(message) => Err(ProviderError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ActivityProvider for FixtureActivityProvider {
    async fn get_recent_sessions(
        &self,
        _user_id: &UserId,
        _days: u32,
    ) -> Result<Vec<StudySession>, ProviderError> {
        self.check()?;
        Ok(self.sessions.clone())
    }

    async fn get_study_analytics(
        &self,
        _user_id: &UserId,
    ) -> Result<StudyAnalytics, ProviderError> {
        self.check()?;
        Ok(self.analytics.clone())
    }
}
