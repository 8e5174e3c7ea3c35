//! Prompt templates for the text-generation endpoints.
//!
//! Wording here is product content. The templates only interpolate request
//! fields; all validation happens before rendering.

use sahayak_common::types::{
    ActivityRequest, CurriculumRequest, LessonPlanRequest, QuizRequest, QuizType, TimetableRequest,
};

pub fn curriculum_prompt(req: &CurriculumRequest, sample: Option<&str>) -> String {
    let mut prompt = format!(
        "Act as an expert curriculum designer for Indian schools.\n\
         Generate a detailed curriculum for:\n\
         - Class: {}\n\
         - Subject: {}\n\
         - Topics to include: {}\n\n\
         The output should be a structured markdown format with columns for:\n\
         'Topic', 'Sub-topics', 'Learning Objectives', 'Estimated Hours', and 'Suggested Activities'.",
        req.target_class,
        req.subject,
        req.topics.join(", ")
    );
    if let Some(sample) = sample {
        prompt.push_str(&format!(
            "\n\nUse the following sample curriculum as a reference for style and structure:\n\
             ---SAMPLE---\n{sample}\n---END SAMPLE---"
        ));
    }
    prompt
}

pub fn lesson_plan_prompt(req: &LessonPlanRequest) -> String {
    format!(
        "Create a detailed lesson plan for Class {} for the subject {}.\n\
         Break it down week-by-week for a month. Include subtopics, content to be covered, \
         and the hours required for each part.\n\
         Output in a clean, easy-to-read markdown format.",
        req.target_class, req.subject
    )
}

pub fn timetable_prompt(req: &TimetableRequest) -> String {
    let rules = match &req.rules {
        Some(rules) if !rules.is_empty() => rules.join("\n  - "),
        _ => "No specific rules provided.".to_string(),
    };
    format!(
        "Design a weekly teacher's timetable.\n\
         - Teacher's assigned classes and batches: {}\n\
         - Total syllabus completion hours required: {}\n\
         - Follow these rules:\n  - {}\n\n\
         Generate a timetable in a markdown table format for a 5-day week (Monday to Friday).",
        req.teacher_classes.join(", "),
        req.hours_required,
        rules
    )
}

pub fn quiz_prompt(req: &QuizRequest) -> String {
    let mut prompt = format!(
        "Generate a quiz with a total of {} questions for the subject '{}' \
         with a difficulty level of '{}'.\n\
         The quiz type is '{}'.\n\n\
         Your response MUST be a single valid JSON object.\n\
         The JSON object should have a key \"questions\" which is an array of question objects.\n",
        req.total_questions,
        req.subject,
        req.difficulty.as_str(),
        req.quiz_type.as_str()
    );

    if let Some(topics) = &req.topics {
        prompt.push_str(&format!(
            "The quiz must specifically cover the following topics: {}.\n",
            topics.join(", ")
        ));
    }

    if matches!(req.quiz_type, QuizType::Objective | QuizType::Both) {
        prompt.push_str(
            "\nFor each multiple-choice (objective) question, provide:\n\
             - \"question_text\": The question itself.\n\
             - \"options\": An array of 4 strings.\n\
             - \"correct_answer\": The exact string of the correct option.\n\
             - \"explanation\": A brief explanation for the correct answer.\n",
        );
    }

    if matches!(req.quiz_type, QuizType::Subjective | QuizType::Both) {
        prompt.push_str(
            "\nFor each subjective question, provide:\n\
             - \"question_text\": The question itself.\n\
             - \"reference_answer\": A concise, ideal answer for comparison and grading.\n",
        );
    }

    prompt
}

pub fn activity_prompt(req: &ActivityRequest) -> String {
    format!(
        "Design a creative and engaging {} for Class {} students on the topic of '{}'.\n\
         Provide a clear, step-by-step set of instructions on how to conduct this activity.\n\
         Include materials needed, objectives, and evaluation criteria.",
        req.activity_type, req.target_class, req.topic
    )
}

pub fn video_title_prompt(prompt: &str) -> String {
    format!(
        "Suggest a short, educational title for a video based on this prompt: '{prompt}'. \
         Only return the title text."
    )
}
