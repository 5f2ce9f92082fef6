use dashboard_core::{SURVEY_OPTIONS, SURVEY_QUESTION_COUNT, SURVEY_QUESTIONS, SurveyAnswer};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::services::SharedConfig;
use crate::survey::SurveyStore;

/// Static survey definition served to the form UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyDefinition {
    pub questions: Vec<String>,
    pub options: Vec<Vec<String>>,
}

#[derive(Clone)]
pub struct SurveyService {
    config: SharedConfig,
}

impl SurveyService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    fn store(&self) -> SurveyStore {
        SurveyStore::new(self.config.survey_path())
    }

    pub fn definition(&self) -> SurveyDefinition {
        SurveyDefinition {
            questions: SURVEY_QUESTIONS.iter().map(|q| q.to_string()).collect(),
            options: SURVEY_OPTIONS
                .iter()
                .map(|row| row.iter().map(|option| option.to_string()).collect())
                .collect(),
        }
    }

    /// Records a new respondent. One survey per key; resubmissions go
    /// through `edit`.
    pub fn submit(&self, answer: &SurveyAnswer) -> Result<()> {
        if answer.key.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Please enter a user name.".to_string(),
            ));
        }
        if answer.answers.iter().any(|value| value.trim().is_empty()) {
            return Err(AppError::InvalidInput(
                "Please answer all questions.".to_string(),
            ));
        }
        let store = self.store();
        if store.answers_by_key()?.contains_key(&answer.key) {
            return Err(AppError::Conflict(format!(
                "User '{}' already has a survey.",
                answer.key
            )));
        }
        store.append(answer)
    }

    pub fn answers(&self) -> Result<Vec<SurveyAnswer>> {
        self.store().load()
    }

    pub fn edit(&self, key: &str, answers: &[String; SURVEY_QUESTION_COUNT]) -> Result<()> {
        if answers.iter().any(|value| value.trim().is_empty()) {
            return Err(AppError::InvalidInput(
                "Please answer all questions.".to_string(),
            ));
        }
        if !self.store().edit(key, answers)? {
            return Err(AppError::NotFound(format!("no survey for {}", key)));
        }
        Ok(())
    }

    pub fn delete(&self, key: &str) -> Result<()> {
        if !self.store().delete(key)? {
            return Err(AppError::NotFound(format!("no survey for {}", key)));
        }
        Ok(())
    }
}
