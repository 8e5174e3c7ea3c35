// End-to-end video generation scenarios through the VideoStudio orchestrator,
// with both trait boundaries mocked.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

use sahayak_common::types::{VideoRequest, VideoStatus};
use sahayak_studio::testing::{
    done_operation, running_operation, MockTextGenerator, MockVideoJobApi, RecordingSleeper,
};
use sahayak_studio::{VideoError, VideoJobDriver, VideoStudio};

static CAT_URI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^gs://test-bucket/cat_piano_fun_[0-9a-f]{8}\.mp4$").unwrap()
});

fn studio(
    text: MockTextGenerator,
    api: MockVideoJobApi,
) -> VideoStudio<MockTextGenerator, MockVideoJobApi> {
    let driver =
        VideoJobDriver::new(api, "test-bucket").with_sleeper(Box::new(RecordingSleeper::new()));
    VideoStudio::new(text, driver)
}

#[tokio::test]
async fn happy_path_returns_title_and_slugged_uri() {
    let text = MockTextGenerator::new().reply("Cat Piano Fun");
    let api = MockVideoJobApi::new().on_submit(done_operation(json!({"generatedVideos": []})));
    let studio = studio(text, api);

    let req = VideoRequest::new("a cat playing piano")
        .with_duration_seconds(5.0)
        .with_fps(24);
    let video = studio.generate(&req).await.unwrap();

    assert_eq!(video.suggested_title, "Cat Piano Fun");
    assert_eq!(video.status, VideoStatus::Completed);
    assert!(
        CAT_URI_RE.is_match(&video.video_uri),
        "unexpected uri: {}",
        video.video_uri
    );
}

#[tokio::test]
async fn submitted_job_carries_prompt_and_present_optionals() {
    let text = MockTextGenerator::new().reply("Cat Piano Fun");
    let api = std::sync::Arc::new(
        MockVideoJobApi::new().on_submit(done_operation(json!({}))),
    );
    let driver = VideoJobDriver::new(std::sync::Arc::clone(&api), "test-bucket")
        .with_sleeper(Box::new(RecordingSleeper::new()));
    let studio = VideoStudio::new(text, driver);

    let req = VideoRequest::new("a cat playing piano")
        .with_duration_seconds(5.0)
        .with_fps(24);
    let video = studio.generate(&req).await.unwrap();

    let submitted = api.submitted();
    assert_eq!(submitted.len(), 1);
    let (prompt, config) = &submitted[0];
    assert_eq!(prompt, "a cat playing piano");
    assert_eq!(config.aspect_ratio, "16:9");
    assert_eq!(config.duration_seconds, Some(5.0));
    assert_eq!(config.fps, Some(24));
    // The submitted config targets the same location the caller gets back.
    assert_eq!(config.storage_uri, video.video_uri);
}

#[tokio::test]
async fn title_failure_falls_back_without_failing_the_call() {
    let text = MockTextGenerator::new().fail("model unavailable");
    let api = MockVideoJobApi::new().on_submit(done_operation(json!({})));
    let studio = studio(text, api);

    let video = studio
        .generate(&VideoRequest::new("a cat playing piano"))
        .await
        .unwrap();

    assert_eq!(video.suggested_title, "Generated Video");
    assert!(
        video.video_uri.starts_with("gs://test-bucket/generated_video_"),
        "unexpected uri: {}",
        video.video_uri
    );
    assert_eq!(video.status, VideoStatus::Completed);
}

#[tokio::test]
async fn suggested_title_is_trimmed_and_unquoted() {
    let text = MockTextGenerator::new().reply("  \"Cat Piano Fun\"\n");
    let api = MockVideoJobApi::new().on_submit(done_operation(json!({})));
    let studio = studio(text, api);

    let video = studio
        .generate(&VideoRequest::new("a cat playing piano"))
        .await
        .unwrap();

    assert_eq!(video.suggested_title, "Cat Piano Fun");
    assert!(CAT_URI_RE.is_match(&video.video_uri));
}

#[tokio::test]
async fn submission_failure_surfaces_as_submission_error() {
    let text = MockTextGenerator::new().reply("Cat Piano Fun");
    let api = MockVideoJobApi::new().submit_error("invalid model");
    let studio = studio(text, api);

    let err = studio
        .generate(&VideoRequest::new("a cat playing piano"))
        .await
        .unwrap_err();

    assert!(matches!(err, VideoError::Submission(_)));
    let chain = format!("{err}: {}", std::error::Error::source(&err).unwrap());
    assert!(chain.contains("invalid model"), "chain was: {chain}");
}

#[tokio::test]
async fn polling_runs_to_terminal_state_before_returning() {
    let sleeper = RecordingSleeper::new();
    let text = MockTextGenerator::new().reply("Cat Piano Fun");
    let api = MockVideoJobApi::new()
        .on_submit(running_operation())
        .on_poll(running_operation())
        .on_poll(done_operation(json!({})));
    let driver =
        VideoJobDriver::new(api, "test-bucket").with_sleeper(Box::new(sleeper.clone()));
    let studio = VideoStudio::new(text, driver);

    let video = studio
        .generate(&VideoRequest::new("a cat playing piano"))
        .await
        .unwrap();

    assert!(CAT_URI_RE.is_match(&video.video_uri));
    // Two not-done statuses, so exactly two fixed-interval naps.
    assert_eq!(sleeper.naps().len(), 2);
}

#[tokio::test]
async fn terminal_job_error_fails_the_call() {
    let text = MockTextGenerator::new().reply("Cat Piano Fun");
    let api = MockVideoJobApi::new().on_submit({
        let mut op = done_operation(json!({}));
        op.error = Some(genai_client::OperationError {
            code: Some(13),
            message: Some("rendering failed".to_string()),
        });
        op
    });
    let studio = studio(text, api);

    let err = studio
        .generate(&VideoRequest::new("a cat playing piano"))
        .await
        .unwrap_err();

    match err {
        VideoError::Execution(payload) => {
            assert_eq!(payload.message.as_deref(), Some("rendering failed"));
        }
        other => panic!("expected Execution, got {other:?}"),
    }
}
