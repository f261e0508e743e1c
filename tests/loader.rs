//! Quiz loading against a stub quiz provider on a local socket.

use std::time::Duration;

use class_quiz::{App, ClientConfig, LoadError, Loader, Phase, QuizClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::time::timeout;

const QUIZ_JSON: &str = r#"{"quiz": {"Questions": [
    {"Question": "Capital of France?", "Options": ["London", "Paris"], "Answer": "Paris"},
    {"Question": "Capital of France, again?", "Options": ["Paris", "Berlin"], "Answer": "Paris"}
]}}"#;

/// Serves `status` and `body` to every connection and reports each request line.
async fn spawn_provider(status: &'static str, body: &'static str) -> (String, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            let text = String::from_utf8_lossy(&request);
            let request_line = text.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(request_line);

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    (format!("http://{addr}"), rx)
}

/// Accepts connections and never answers.
async fn spawn_silent_provider() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    format!("http://{addr}")
}

fn client(base_url: &str) -> QuizClient {
    QuizClient::new(&ClientConfig::default().with_base_url(base_url)).unwrap()
}

#[tokio::test]
async fn test_fetch_quiz_success() {
    let (base_url, mut requests) = spawn_provider("200 OK", QUIZ_JSON).await;

    let quiz = client(&base_url).fetch_quiz("cs101").await.unwrap();
    assert_eq!(quiz.len(), 2);
    assert_eq!(quiz.questions[0].text, "Capital of France?");
    assert_eq!(quiz.questions[1].answer, "Paris");

    let request_line = requests.recv().await.unwrap();
    assert_eq!(request_line, "GET /class/cs101/quiz HTTP/1.1");
}

#[tokio::test]
async fn test_fetch_quiz_encodes_class_id() {
    let (base_url, mut requests) = spawn_provider("200 OK", QUIZ_JSON).await;

    client(&base_url).fetch_quiz("intro 101").await.unwrap();

    let request_line = requests.recv().await.unwrap();
    assert_eq!(request_line, "GET /class/intro%20101/quiz HTTP/1.1");
}

#[tokio::test]
async fn test_non_success_status_is_load_failure() {
    let (base_url, _requests) =
        spawn_provider("500 Internal Server Error", r#"{"detail": "boom"}"#).await;

    let err = client(&base_url).fetch_quiz("cs101").await.unwrap_err();
    match err {
        LoadError::Status(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_is_load_failure() {
    let (base_url, _requests) = spawn_provider("404 Not Found", "").await;

    let err = client(&base_url).fetch_quiz("missing").await.unwrap_err();
    assert!(matches!(err, LoadError::Status(_)));
}

#[tokio::test]
async fn test_malformed_body_is_load_failure() {
    let (base_url, _requests) = spawn_provider("200 OK", "```json {not json").await;

    let err = client(&base_url).fetch_quiz("cs101").await.unwrap_err();
    assert!(matches!(err, LoadError::Malformed(_)));
}

#[tokio::test]
async fn test_wrong_shape_is_load_failure() {
    let (base_url, _requests) = spawn_provider("200 OK", r#"{"notes": "nothing"}"#).await;

    let err = client(&base_url).fetch_quiz("cs101").await.unwrap_err();
    assert!(matches!(err, LoadError::Malformed(_)));
}

#[tokio::test]
async fn test_empty_quiz_is_load_failure() {
    let (base_url, _requests) = spawn_provider("200 OK", r#"{"quiz": {"Questions": []}}"#).await;

    let err = client(&base_url).fetch_quiz("cs101").await.unwrap_err();
    assert!(matches!(err, LoadError::InvalidQuiz(_)));
}

#[tokio::test]
async fn test_unreachable_provider_is_load_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}"))
        .fetch_quiz("cs101")
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Request(_)));
}

#[tokio::test]
async fn test_configured_timeout_fails_the_load() {
    let base_url = spawn_silent_provider().await;
    let config = ClientConfig::default()
        .with_base_url(base_url)
        .with_timeout(Some(Duration::from_millis(200)));

    let err = QuizClient::new(&config)
        .unwrap()
        .fetch_quiz("cs101")
        .await
        .unwrap_err();
    match err {
        LoadError::Request(e) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_loader_delivers_outcome_to_app() {
    let (base_url, _requests) = spawn_provider("200 OK", QUIZ_JSON).await;
    let (mut loader, mut outcomes) = Loader::new(client(&base_url));
    let mut app = App::new("cs101");

    let generation = loader.start(app.class_id());
    app.begin_loading(generation);
    assert_eq!(app.phase(), Some(Phase::Loading));

    let outcome = timeout(Duration::from_secs(5), outcomes.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(app.apply_load(outcome));
    assert_eq!(app.phase(), Some(Phase::InProgress));
    assert_eq!(app.session().unwrap().total_questions(), 2);
}

#[tokio::test]
async fn test_failed_load_leaves_no_session() {
    let (base_url, _requests) = spawn_provider("503 Service Unavailable", "").await;
    let (mut loader, mut outcomes) = Loader::new(client(&base_url));
    let mut app = App::new("cs101");

    app.begin_loading(loader.start("cs101"));
    let outcome = timeout(Duration::from_secs(5), outcomes.recv())
        .await
        .unwrap()
        .unwrap();
    app.apply_load(outcome);

    assert_eq!(app.phase(), Some(Phase::Error));
    assert!(app.session().is_none());
}

#[tokio::test]
async fn test_restarted_load_supersedes_previous() {
    let (base_url, _requests) = spawn_provider("200 OK", QUIZ_JSON).await;
    let (mut loader, mut outcomes) = Loader::new(client(&base_url));

    let first = loader.start("cs101");
    let second = loader.start("cs101");
    assert!(second > first);
    assert_eq!(loader.generation(), second);

    let outcome = timeout(Duration::from_secs(5), outcomes.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(outcome.generation, second);
}

#[tokio::test]
async fn test_dropping_loader_discards_pending_load() {
    let base_url = spawn_silent_provider().await;
    let (mut loader, mut outcomes) = Loader::new(client(&base_url));

    loader.start("cs101");
    drop(loader);

    let closed = timeout(Duration::from_secs(5), outcomes.recv()).await.unwrap();
    assert!(closed.is_none());
}
