mod common;

use common::mock_directory::{closed_port_url, MockDirectory, MockReply};
use unibrowse::config::SourceConfig;
use unibrowse::source::{FailureKind, FetchError, HttpSource, ItemSource};

const PAYLOAD: &str = r#"[
    {"name": "Universitas Indonesia", "web_pages": ["http://www.ui.ac.id/"], "domains": ["ui.ac.id"], "country": "Indonesia", "alpha_two_code": "ID", "state-province": null},
    {"name": "", "web_pages": ["http://nameless.example/"]},
    {"name": "Institut Teknologi Bandung", "web_pages": ["http://www.itb.ac.id/", "http://itb.ac.id/"], "domains": ["itb.ac.id"]}
]"#;

fn source_for(base_url: &str) -> HttpSource {
    let config = SourceConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 1,
        connect_timeout_seconds: 1,
        ..SourceConfig::default()
    };
    HttpSource::new(&config).expect("client builds")
}

#[tokio::test]
async fn fetch_returns_valid_items_in_order() {
    let mock = MockDirectory::start(MockReply::json(PAYLOAD)).await;
    let items = source_for(&mock.base_url()).fetch().await.unwrap();

    let names: Vec<&str> = items.iter().map(|item| item.name()).collect();
    assert_eq!(names, vec!["Universitas Indonesia", "Institut Teknologi Bandung"]);
    assert_eq!(items[1].primary_link(), "http://www.itb.ac.id/");
}

#[tokio::test]
async fn fetch_sends_country_query() {
    let mock = MockDirectory::start(MockReply::json("[]")).await;
    let config = SourceConfig {
        base_url: mock.base_url(),
        country: "New Zealand".to_string(),
        name: Some("Otago".to_string()),
        ..SourceConfig::default()
    };
    let items = HttpSource::new(&config).unwrap().fetch().await.unwrap();
    assert!(items.is_empty());

    let queries = mock.queries().await;
    assert_eq!(
        queries,
        vec![Some("country=New+Zealand&name=Otago".to_string())]
    );
}

#[tokio::test]
async fn server_error_is_generic() {
    let mock = MockDirectory::start(MockReply::error(500)).await;
    let err = source_for(&mock.base_url()).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 500 }));
    assert_eq!(err.kind(), FailureKind::Generic);
}

#[tokio::test]
async fn malformed_payload_is_generic() {
    let mock = MockDirectory::start(MockReply::json("<html>not json</html>")).await;
    let err = source_for(&mock.base_url()).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
    assert_eq!(err.kind(), FailureKind::Generic);
}

#[tokio::test]
async fn refused_connection_is_io() {
    let err = source_for(&closed_port_url()).fetch().await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Io, "unexpected error: {err}");
}

#[tokio::test]
async fn slow_server_times_out_as_io() {
    let mock = MockDirectory::start(MockReply::json("[]").delayed(3_000)).await;
    let err = source_for(&mock.base_url()).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Timeout { seconds: 1 }), "got {err}");
    assert_eq!(err.kind(), FailureKind::Io);
}
