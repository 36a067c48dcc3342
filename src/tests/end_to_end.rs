use super::TestUtils;
use crate::cache::{MemoryCache, PersistenceCache};
use crate::config::{FallbackTexts, GitHubConfig};
use crate::fields::{FieldName, FieldStore};
use crate::github::GitHubClient;
use crate::session::Session;
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde_json::json;

const URL: &str = "https://github.com/octocat/Hello-World";

#[tokio::test]
async fn test_hello_world_populates_fields() {
    let mut session = TestUtils::memory_session();

    session.on_repository_url(URL).await.unwrap();
    let fields = session.fields();

    assert_eq!(fields.get(FieldName::ProjectName), "Hello-World");
    assert_eq!(
        fields.get(FieldName::Description),
        "A Python project to automate tasks with Python."
    );
    assert_eq!(
        fields.get(FieldName::Installation),
        "Clone the repo:\ngit clone https://github.com/octocat/Hello-World\npip install -r requirements.txt"
    );
    assert_eq!(fields.get(FieldName::Usage), "python main.py");
    assert_eq!(
        fields.get(FieldName::Dependencies),
        "See requirements.txt (if present)"
    );
    assert_eq!(fields.get(FieldName::License), "MIT");
    assert_eq!(fields.get(FieldName::Authors), "octocat");
    assert_eq!(
        *session.source().lookups.lock().unwrap(),
        vec!["octocat/Hello-World".to_string()]
    );
    assert_eq!(
        fields.get(FieldName::Acknowledgments),
        "Shoutout to [P.D.R.G.] for pimping this README!"
    );
}

#[tokio::test]
async fn test_rendered_document_reflects_populated_fields() {
    let mut session = TestUtils::memory_session();

    let rendered = session.on_repository_url(URL).await.unwrap();

    assert!(rendered.starts_with("# Hello-World\n\n## Description\nA Python project"));
    assert!(rendered.contains("## Usage\npython main.py\n\n## License\nMIT\n"));
    assert_eq!(rendered, session.rendered());
}

#[tokio::test]
async fn test_edit_after_fetch_rerenders() {
    let mut session = TestUtils::memory_session();
    session.on_repository_url(URL).await.unwrap();

    let rendered = session.on_edit("usage", "python main.py --help").unwrap();

    assert!(rendered.contains("## Usage\npython main.py --help\n"));
    assert_eq!(
        session.store().cache().get("usage").as_deref(),
        Some("python main.py --help")
    );
}

#[tokio::test]
async fn test_blank_url_does_not_fetch() {
    let mut session = TestUtils::memory_session();
    session.on_edit("project_name", "manual").unwrap();

    session.on_repository_url("   ").await.unwrap();

    assert_eq!(session.fields().get(FieldName::ProjectName), "manual");
    assert!(session.source().lookups.lock().unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_hello_world_over_http() {
    let mut server = Server::new_async().await;

    let _info = server
        .mock("GET", "/repos/octocat/Hello-World")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"name": "Hello-World", "description": null, "license": {"name": "MIT"}})
                .to_string(),
        )
        .create_async()
        .await;
    let _languages = server
        .mock("GET", "/repos/octocat/Hello-World/languages")
        .with_status(200)
        .with_body(json!({"Python": 100}).to_string())
        .create_async()
        .await;
    let _contents = server
        .mock("GET", "/repos/octocat/Hello-World/contents")
        .with_status(200)
        .with_body(json!([{"name": "main.py"}, {"name": "requirements.txt"}]).to_string())
        .create_async()
        .await;
    let _commits = server
        .mock("GET", "/repos/octocat/Hello-World/commits")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!([{"commit": {"message": "init"}}]).to_string())
        .create_async()
        .await;

    let config = GitHubConfig {
        api_url: server.url(),
        ..GitHubConfig::default()
    };
    let client = GitHubClient::new(&config).unwrap();
    let mut session = Session::new(
        client,
        FieldStore::load(MemoryCache::new()),
        FallbackTexts::default(),
    );

    session.on_repository_url(URL).await.unwrap();

    let fields = session.fields();
    assert_eq!(
        fields.get(FieldName::Description),
        "A Python project to automate tasks with Python."
    );
    assert_eq!(fields.get(FieldName::Usage), "python main.py");
    // ownerless payload falls back instead of failing
    assert_eq!(fields.get(FieldName::Authors), "You!");
}
