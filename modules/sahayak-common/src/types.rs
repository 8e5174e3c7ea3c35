use serde::{Deserialize, Serialize};

use crate::error::SahayakError;

// --- Video generation ---

/// Request for an AI-generated video. Immutable once accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRequest {
    pub prompt: String,
    /// Desired duration in seconds. Defaults to 8.
    #[serde(default = "default_duration_seconds")]
    pub duration_seconds: Option<f64>,
    /// Desired frames per second.
    #[serde(default)]
    pub fps: Option<u32>,
}

fn default_duration_seconds() -> Option<f64> {
    Some(8.0)
}

impl VideoRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            duration_seconds: default_duration_seconds(),
            fps: None,
        }
    }

    pub fn with_duration_seconds(mut self, seconds: f64) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = Some(fps);
        self
    }

    pub fn validate(&self) -> Result<(), SahayakError> {
        if let Some(d) = self.duration_seconds {
            if d <= 0.0 {
                return Err(SahayakError::Validation(
                    "duration_seconds must be greater than 0".to_string(),
                ));
            }
        }
        if let Some(fps) = self.fps {
            if fps == 0 {
                return Err(SahayakError::Validation(
                    "fps must be greater than 0".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// A completed video generation, returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedVideo {
    pub suggested_title: String,
    pub video_uri: String,
    pub status: VideoStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoStatus {
    Completed,
}

// --- Curriculum and planning ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumRequest {
    pub target_class: u32,
    pub subject: String,
    pub topics: Vec<String>,
}

impl CurriculumRequest {
    pub fn validate(&self) -> Result<(), SahayakError> {
        if self.subject.trim().is_empty() {
            return Err(SahayakError::Validation(
                "subject must not be empty".to_string(),
            ));
        }
        if self.topics.is_empty() {
            return Err(SahayakError::Validation(
                "at least one topic is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonPlanRequest {
    pub target_class: u32,
    pub subject: String,
}

impl LessonPlanRequest {
    pub fn validate(&self) -> Result<(), SahayakError> {
        if self.subject.trim().is_empty() {
            return Err(SahayakError::Validation(
                "subject must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableRequest {
    pub teacher_classes: Vec<String>,
    pub hours_required: u32,
    pub rules: Option<Vec<String>>,
}

impl TimetableRequest {
    pub fn validate(&self) -> Result<(), SahayakError> {
        if self.teacher_classes.is_empty() {
            return Err(SahayakError::Validation(
                "at least one class assignment is required".to_string(),
            ));
        }
        Ok(())
    }
}

// --- Assessment ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizType {
    Objective,
    Subjective,
    Both,
}

impl QuizType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizType::Objective => "objective",
            QuizType::Subjective => "subjective",
            QuizType::Both => "both",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Medium => "medium",
            DifficultyLevel::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub quiz_type: QuizType,
    pub total_questions: u32,
    pub subject: String,
    pub difficulty: DifficultyLevel,
    pub topics: Option<Vec<String>>,
}

impl QuizRequest {
    pub fn validate(&self) -> Result<(), SahayakError> {
        if self.total_questions == 0 {
            return Err(SahayakError::Validation(
                "total_questions must be greater than 0".to_string(),
            ));
        }
        if self.subject.trim().is_empty() {
            return Err(SahayakError::Validation(
                "subject must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRequest {
    pub target_class: u32,
    pub topic: String,
    pub activity_type: String,
}

impl ActivityRequest {
    pub fn validate(&self) -> Result<(), SahayakError> {
        if self.topic.trim().is_empty() {
            return Err(SahayakError::Validation(
                "topic must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
