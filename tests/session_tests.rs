// Session state machine tests against a scripted stand-in model

use gouache_studio::error::{Result, StudioError};
use gouache_studio::gemini::ImageModel;
use gouache_studio::image::ImagePayload;
use gouache_studio::session::{Phase, Session};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Model stand-in that replays a scripted sequence of outcomes and records
/// every instruction it receives.
#[derive(Default)]
struct ScriptedModel {
    responses: Mutex<VecDeque<Result<ImagePayload>>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedModel {
    fn with_responses(responses: Vec<Result<ImagePayload>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Default::default()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next(&self, instruction: &str) -> Result<ImagePayload> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(instruction.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(StudioError::Remote("unexpected call".to_string())))
    }
}

impl ImageModel for &ScriptedModel {
    async fn generate(&self, prompt: &str, _aspect_ratio: &str) -> Result<ImagePayload> {
        self.next(prompt)
    }

    async fn edit(&self, _source: &ImagePayload, instruction: &str) -> Result<ImagePayload> {
        self.next(instruction)
    }
}

fn payload(data: &str) -> ImagePayload {
    ImagePayload::new("image/png", data)
}

#[tokio::test]
async fn test_generate_then_edit_replaces_image() {
    let model = ScriptedModel::with_responses(vec![Ok(payload("P1")), Ok(payload("P2"))]);
    let mut session = Session::new(&model, "1:1");

    session.set_subject("a red fox");
    session.submit_generate().await;
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.current_image().unwrap().data, "P1");
    assert!(session.error().is_none());

    session.set_refinement("add snow");
    session.submit_edit().await;
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.current_image().unwrap().data, "P2");
    assert_eq!(session.refinement(), "");
    assert!(session.error().is_none());
    assert_eq!(model.calls(), 2);
}

#[tokio::test]
async fn test_generate_uses_composed_prompt() {
    let model = ScriptedModel::with_responses(vec![Ok(payload("P1"))]);
    let mut session = Session::new(&model, "1:1");

    session.set_subject("  a red fox  ");
    session.submit_generate().await;

    let prompts = model.prompts.lock().unwrap();
    assert!(prompts[0].contains("a red fox"));
    assert!(prompts[0].contains("gouache illustration"));
}

#[tokio::test]
async fn test_blank_subject_dispatches_nothing() {
    let model = ScriptedModel::default();
    let mut session = Session::new(&model, "1:1");

    session.set_subject("   ");
    session.submit_generate().await;

    assert_eq!(model.calls(), 0);
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.current_image().is_none());
    assert!(session.error().is_none());
}

#[tokio::test]
async fn test_edit_unreachable_without_image() {
    let model = ScriptedModel::default();
    let mut session = Session::new(&model, "1:1");

    session.set_refinement("add snow");
    session.submit_edit().await;

    assert_eq!(model.calls(), 0);
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.refinement(), "add snow");
}

#[tokio::test]
async fn test_failed_generate_records_error() {
    let model = ScriptedModel::with_responses(vec![Err(StudioError::Remote(
        "quota exceeded".to_string(),
    ))]);
    let mut session = Session::new(&model, "1:1");

    session.set_subject("a red fox");
    session.submit_generate().await;

    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.error(), Some("quota exceeded"));
    assert!(session.current_image().is_none());
}

#[tokio::test]
async fn test_no_image_returned_message() {
    let model = ScriptedModel::with_responses(vec![Err(StudioError::NoImageReturned)]);
    let mut session = Session::new(&model, "1:1");

    session.set_subject("a red fox");
    session.submit_generate().await;

    assert_eq!(
        session.error(),
        Some("No image was returned by the model.")
    );
}

#[tokio::test]
async fn test_blank_remote_message_gets_fallback() {
    let model = ScriptedModel::with_responses(vec![Err(StudioError::Remote(String::new()))]);
    let mut session = Session::new(&model, "1:1");

    session.set_subject("a red fox");
    session.submit_generate().await;

    assert_eq!(
        session.error(),
        Some("Failed to generate image. Please try again.")
    );
}

#[tokio::test]
async fn test_failed_edit_keeps_image_and_refinement() {
    let model = ScriptedModel::with_responses(vec![
        Ok(payload("P1")),
        Err(StudioError::Remote("model overloaded".to_string())),
    ]);
    let mut session = Session::new(&model, "1:1");

    session.set_subject("a red fox");
    session.submit_generate().await;
    session.set_refinement("add snow");
    session.submit_edit().await;

    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.error(), Some("model overloaded"));
    assert_eq!(session.current_image().unwrap().data, "P1");
    assert_eq!(session.refinement(), "add snow");
}

#[tokio::test]
async fn test_new_attempt_clears_previous_error() {
    let model = ScriptedModel::with_responses(vec![
        Err(StudioError::Remote("quota exceeded".to_string())),
        Ok(payload("P1")),
    ]);
    let mut session = Session::new(&model, "1:1");

    session.set_subject("a red fox");
    session.submit_generate().await;
    assert!(session.error().is_some());

    session.submit_generate().await;
    assert!(session.error().is_none());
    assert_eq!(session.current_image().unwrap().data, "P1");
}

#[tokio::test]
async fn test_current_image_url_is_transport_string() {
    let model = ScriptedModel::with_responses(vec![Ok(payload("AAAA"))]);
    let mut session = Session::new(&model, "1:1");

    assert!(session.current_image_url().is_none());
    session.set_subject("a red fox");
    session.submit_generate().await;
    assert_eq!(
        session.current_image_url().unwrap(),
        "data:image/png;base64,AAAA"
    );
}
