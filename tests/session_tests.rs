//! 翻译会话状态测试

use async_trait::async_trait;
use libretrans::{
    Language, LibreClient, SessionState, TranslateError, Translation, TranslationApi,
    TranslationSession, DEFAULT_SOURCE_LANGUAGE,
};
use serde_json::json;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session_for(server: &MockServer) -> TranslationSession {
    let client = LibreClient::new(reqwest::Client::new(), &server.uri()).unwrap();
    TranslationSession::new(Arc::new(client))
}

fn spanish() -> Language {
    Language::new("es", "Spanish")
}

async fn mount_languages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"code": "en", "name": "English"},
            {"code": "es", "name": "Spanish"}
        ])))
        .mount(server)
        .await;
}

/// Records every call and answers from a fixed script.
#[derive(Default)]
struct StubApi {
    calls: AtomicUsize,
    sources: Mutex<Vec<Language>>,
    fail_translate: bool,
}

#[async_trait]
impl TranslationApi for StubApi {
    async fn list_languages(&self) -> Result<Vec<Language>, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![Language::new("en", "English"), spanish()])
    }

    async fn translate(
        &self,
        text: &str,
        source: &Language,
        _target: &Language,
    ) -> Result<Translation, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sources.lock().unwrap().push(source.clone());
        if self.fail_translate {
            return Err(TranslateError::Api {
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok(Translation {
            translated_text: text.to_uppercase(),
        })
    }
}

#[tokio::test]
async fn test_initial_state_is_empty() {
    let session = TranslationSession::new(Arc::new(StubApi::default()));
    assert_eq!(session.snapshot(), SessionState::default());
}

#[tokio::test]
async fn test_initialize_loads_languages() {
    let server = MockServer::start().await;
    mount_languages(&server).await;
    let session = session_for(&server);

    session.initialize().await;

    let state = session.snapshot();
    assert_eq!(
        state.languages,
        vec![Language::new("en", "English"), spanish()]
    );
    assert!(!state.is_loading);
    assert!(!state.has_error);
    assert_eq!(session.find_language("ES"), Some(spanish()));
    assert_eq!(session.find_language("fr"), None);
}

#[tokio::test]
async fn test_translate_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"translatedText": "hola"})))
        .expect(1)
        .mount(&server)
        .await;
    let session = session_for(&server);

    session.translate("hello", &spanish()).await;

    let state = session.snapshot();
    assert_eq!(state.translated_text, "hola");
    assert!(!state.is_loading);
    assert!(!state.has_error);
}

#[tokio::test]
async fn test_translate_uses_default_source_language() {
    let api = Arc::new(StubApi::default());
    let session = TranslationSession::new(api.clone());

    session.translate("hello", &spanish()).await;

    let sources = api.sources.lock().unwrap();
    assert_eq!(sources.as_slice(), &[Language::new("en", "English")]);
    assert_eq!(*DEFAULT_SOURCE_LANGUAGE, Language::new("en", "English"));
}

#[tokio::test]
async fn test_empty_text_is_a_no_op() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"translatedText": "x"})))
        .expect(0)
        .mount(&server)
        .await;
    let session = session_for(&server);

    session.translate("", &spanish()).await;

    let state = session.snapshot();
    assert!(!state.is_loading);
    assert!(!state.has_error);
    assert_eq!(state.error_message, "");
}

#[tokio::test]
async fn test_empty_text_clears_previous_result() {
    let api = Arc::new(StubApi::default());
    let session = TranslationSession::new(api.clone());

    session.translate("hello", &spanish()).await;
    assert_eq!(session.snapshot().translated_text, "HELLO");

    session.translate("", &spanish()).await;

    let state = session.snapshot();
    assert_eq!(state.translated_text, "");
    assert_eq!(api.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_rate_limited_translation_surfaces_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({"error": "Slowdown, too many requests"})),
        )
        .mount(&server)
        .await;
    let session = session_for(&server);

    session.translate("hello", &spanish()).await;

    let state = session.snapshot();
    assert_eq!(state.error_message, "Slowdown, too many requests");
    assert!(!state.is_loading);
    assert!(state.has_error);
    assert_eq!(state.translated_text, "");
}

/// Delegates to a live server until `down` is set, then to a dead port.
struct FlakyNetwork {
    online: LibreClient,
    offline: LibreClient,
    down: AtomicBool,
}

impl FlakyNetwork {
    fn current(&self) -> &LibreClient {
        if self.down.load(Ordering::SeqCst) {
            &self.offline
        } else {
            &self.online
        }
    }
}

#[async_trait]
impl TranslationApi for FlakyNetwork {
    async fn list_languages(&self) -> Result<Vec<Language>, TranslateError> {
        self.current().list_languages().await
    }

    async fn translate(
        &self,
        text: &str,
        source: &Language,
        target: &Language,
    ) -> Result<Translation, TranslateError> {
        self.current().translate(text, source, target).await
    }
}

#[tokio::test]
async fn test_transport_failure_keeps_previous_data() {
    let server = MockServer::start().await;
    mount_languages(&server).await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"translatedText": "hola"})))
        .mount(&server)
        .await;

    let network = Arc::new(FlakyNetwork {
        online: LibreClient::new(reqwest::Client::new(), &server.uri()).unwrap(),
        // Nothing listens on port 1
        offline: LibreClient::new(reqwest::Client::new(), "http://127.0.0.1:1").unwrap(),
        down: AtomicBool::new(false),
    });
    let session = TranslationSession::new(network.clone());
    session.initialize().await;
    session.translate("hello", &spanish()).await;
    let before = session.snapshot();

    network.down.store(true, Ordering::SeqCst);
    session.refresh_languages().await;

    let state = session.snapshot();
    assert!(!state.is_loading);
    assert!(state.has_error);
    assert!(!state.error_message.is_empty());
    assert_eq!(state.languages, before.languages);
    assert_eq!(state.translated_text, "hola");
}

#[tokio::test]
async fn test_loading_toggles_once_per_operation() {
    let session = TranslationSession::new(Arc::new(StubApi::default()));
    let mut rx = session.subscribe();

    let recorder = tokio::spawn(async move {
        let mut seen = Vec::new();
        while rx.changed().await.is_ok() {
            seen.push(rx.borrow_and_update().is_loading);
        }
        seen
    });

    session.refresh_languages().await;
    drop(session);

    let seen = recorder.await.unwrap();
    // A watch receiver may coalesce updates but always ends on the final value
    assert_eq!(seen.last(), Some(&false));
    assert!(seen.len() <= 2);
}

/// Holds every call at a gate until the test releases it.
#[derive(Default)]
struct GatedApi {
    entered: Notify,
    release: Notify,
}

impl GatedApi {
    async fn hold(&self) {
        self.entered.notify_one();
        self.release.notified().await;
    }
}

#[async_trait]
impl TranslationApi for GatedApi {
    async fn list_languages(&self) -> Result<Vec<Language>, TranslateError> {
        self.hold().await;
        Ok(vec![spanish()])
    }

    async fn translate(
        &self,
        _text: &str,
        _source: &Language,
        _target: &Language,
    ) -> Result<Translation, TranslateError> {
        self.hold().await;
        Ok(Translation {
            translated_text: "hola".to_string(),
        })
    }
}

#[tokio::test]
async fn test_translate_is_loading_while_in_flight() {
    let api = Arc::new(GatedApi::default());
    let session = TranslationSession::new(api.clone());
    let target = spanish();

    let op = session.translate("hello", &target);
    tokio::pin!(op);
    tokio::select! {
        _ = &mut op => panic!("translate finished before the gate opened"),
        _ = api.entered.notified() => {}
    }

    let state = session.snapshot();
    assert!(state.is_loading);
    assert_eq!(state.translated_text, "");

    api.release.notify_one();
    op.await;

    let state = session.snapshot();
    assert!(!state.is_loading);
    assert_eq!(state.translated_text, "hola");
}

#[tokio::test]
async fn test_refresh_languages_is_loading_while_in_flight() {
    let api = Arc::new(GatedApi::default());
    let session = TranslationSession::new(api.clone());

    let op = session.refresh_languages();
    tokio::pin!(op);
    tokio::select! {
        _ = &mut op => panic!("refresh finished before the gate opened"),
        _ = api.entered.notified() => {}
    }

    let state = session.snapshot();
    assert!(state.is_loading);
    assert!(state.languages.is_empty());

    api.release.notify_one();
    op.await;

    let state = session.snapshot();
    assert!(!state.is_loading);
    assert_eq!(state.languages, vec![spanish()]);
}

#[tokio::test]
async fn test_dismiss_error_resets_flag_and_message() {
    let api = Arc::new(StubApi {
        fail_translate: true,
        ..Default::default()
    });
    let session = TranslationSession::new(api);
    session.initialize().await;

    session.translate("hello", &spanish()).await;
    assert!(session.snapshot().has_error);
    assert_eq!(session.snapshot().error_message, "boom");

    session.dismiss_error();

    let state = session.snapshot();
    assert!(!state.has_error);
    assert_eq!(state.error_message, "");
    assert_eq!(state.languages.len(), 2);
}

#[tokio::test]
async fn test_dismiss_error_without_error_is_harmless() {
    let session = TranslationSession::new(Arc::new(StubApi::default()));
    session.dismiss_error();
    assert_eq!(session.snapshot(), SessionState::default());
}

// Known inconsistency: a later success does not clear a surfaced error.
#[tokio::test]
async fn test_success_does_not_clear_previous_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/languages"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"error": "Down for maintenance"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"translatedText": "hola"})))
        .mount(&server)
        .await;
    let session = session_for(&server);

    session.initialize().await;
    session.translate("hello", &spanish()).await;

    let state = session.snapshot();
    assert_eq!(state.translated_text, "hola");
    assert!(state.has_error);
    assert_eq!(state.error_message, "Down for maintenance");
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// The alert already shows the message; the session only logs it at debug.
#[tokio::test]
async fn test_surfaced_error_is_not_logged_at_warn() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let session = TranslationSession::new(Arc::new(StubApi {
        fail_translate: true,
        ..Default::default()
    }));
    session.translate("hello", &spanish()).await;

    assert!(session.snapshot().has_error);
    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(!output.contains("boom"), "unexpected warn output: {}", output);
}
