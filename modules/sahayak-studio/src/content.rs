//! Text-content generation: validate, render the prompt, forward to the
//! model, return its text.

use sahayak_common::types::{
    ActivityRequest, CurriculumRequest, LessonPlanRequest, QuizRequest, TimetableRequest,
};
use sahayak_common::SahayakError;
use tracing::debug;

use crate::prompts;
use crate::traits::TextGenerator;

pub struct ContentStudio<G> {
    generator: G,
}

impl<G: TextGenerator> ContentStudio<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Generate a curriculum, optionally styled after a sample document.
    pub async fn curriculum(
        &self,
        req: &CurriculumRequest,
        sample: Option<&str>,
    ) -> Result<String, SahayakError> {
        req.validate()?;
        debug!(class = req.target_class, subject = %req.subject, "Generating curriculum");
        Ok(self
            .generator
            .generate(&prompts::curriculum_prompt(req, sample))
            .await?)
    }

    pub async fn lesson_plan(&self, req: &LessonPlanRequest) -> Result<String, SahayakError> {
        req.validate()?;
        debug!(class = req.target_class, subject = %req.subject, "Generating lesson plan");
        Ok(self
            .generator
            .generate(&prompts::lesson_plan_prompt(req))
            .await?)
    }

    pub async fn timetable(&self, req: &TimetableRequest) -> Result<String, SahayakError> {
        req.validate()?;
        debug!(hours = req.hours_required, "Generating timetable");
        Ok(self
            .generator
            .generate(&prompts::timetable_prompt(req))
            .await?)
    }

    pub async fn quiz(&self, req: &QuizRequest) -> Result<String, SahayakError> {
        req.validate()?;
        debug!(
            questions = req.total_questions,
            subject = %req.subject,
            "Generating quiz"
        );
        Ok(self.generator.generate(&prompts::quiz_prompt(req)).await?)
    }

    pub async fn activity(&self, req: &ActivityRequest) -> Result<String, SahayakError> {
        req.validate()?;
        debug!(class = req.target_class, topic = %req.topic, "Generating activity");
        Ok(self
            .generator
            .generate(&prompts::activity_prompt(req))
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTextGenerator;
    use sahayak_common::types::{DifficultyLevel, QuizType};

    #[tokio::test]
    async fn quiz_returns_the_generated_text() {
        let studio = ContentStudio::new(MockTextGenerator::new().reply(r#"{"questions": []}"#));
        let req = QuizRequest {
            quiz_type: QuizType::Objective,
            total_questions: 5,
            subject: "Math".to_string(),
            difficulty: DifficultyLevel::Easy,
            topics: None,
        };
        let quiz = studio.quiz(&req).await.unwrap();
        assert_eq!(quiz, r#"{"questions": []}"#);
    }

    #[tokio::test]
    async fn invalid_request_never_reaches_the_generator() {
        // A mock with an empty script fails if called at all.
        let studio = ContentStudio::new(MockTextGenerator::new());
        let req = CurriculumRequest {
            target_class: 8,
            subject: "Science".to_string(),
            topics: vec![],
        };
        let err = studio.curriculum(&req, None).await.unwrap_err();
        assert!(matches!(err, SahayakError::Validation(_)));
    }

    #[tokio::test]
    async fn generator_failure_propagates_as_error() {
        let studio = ContentStudio::new(MockTextGenerator::new().fail("model overloaded"));
        let req = LessonPlanRequest {
            target_class: 6,
            subject: "English".to_string(),
        };
        let err = studio.lesson_plan(&req).await.unwrap_err();
        assert!(err.to_string().contains("model overloaded"));
    }
}
