use super::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
    <channel>
        <title>Test Podcast</title>
        <link>https://example.com</link>
        <description>A test podcast</description>
        <item>
            <title>Episode Two</title>
            <pubDate>Tue, 02 Jan 2024 08:00:00 +0000</pubDate>
            <media:content url="https://example.com/ep2.mp3" type="audio/mpeg"/>
            <media:content url="https://example.com/ep2.jpg" type="image/jpeg"/>
        </item>
        <item>
            <title>Episode One</title>
            <pubDate>Mon, 01 Jan 2024 08:00:00 +0000</pubDate>
            <media:content url="https://example.com/ep1.mp3" type="audio/mpeg"/>
        </item>
    </channel>
</rss>"#;

#[test]
fn test_parse_preserves_document_order() {
    let episodes = parse(SAMPLE_FEED).expect("Failed to parse feed");

    assert_eq!(episodes.len(), 2);
    assert_eq!(episodes[0].title, "Episode Two");
    assert_eq!(episodes[1].title, "Episode One");
    assert_eq!(
        episodes[0].pub_date.as_deref(),
        Some("Tue, 02 Jan 2024 08:00:00 +0000")
    );
}

#[test]
fn test_parse_extracts_media_variants_in_order() {
    let episodes = parse(SAMPLE_FEED).unwrap();

    assert_eq!(episodes[0].media.len(), 2);
    assert_eq!(
        episodes[0].media[0],
        MediaVariant {
            url: "https://example.com/ep2.mp3".to_string(),
            mime_type: "audio/mpeg".to_string(),
        }
    );
    assert_eq!(episodes[0].media[1].mime_type, "image/jpeg");

    assert_eq!(episodes[1].media.len(), 1);
    assert_eq!(episodes[1].media[0].url, "https://example.com/ep1.mp3");
}

#[test]
fn test_parse_resolves_namespace_by_uri_not_prefix() {
    // Same namespace URI bound to a different prefix
    let feed = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:mrss="http://search.yahoo.com/mrss/">
    <channel>
        <title>Test</title>
        <item>
            <title>Renamed Prefix</title>
            <mrss:content url="https://example.com/a.mp3" type="audio/mpeg"/>
        </item>
    </channel>
</rss>"#;

    let episodes = parse(feed).unwrap();
    assert_eq!(episodes.len(), 1);
    assert_eq!(episodes[0].media.len(), 1);
    assert_eq!(episodes[0].media[0].url, "https://example.com/a.mp3");
}

#[test]
fn test_parse_ignores_foreign_namespaces() {
    // A content element under an unrelated namespace is not an enclosure
    let feed = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:other="http://example.com/not-mrss/">
    <channel>
        <title>Test</title>
        <item>
            <title>No Real Media</title>
            <other:content url="https://example.com/a.mp3" type="audio/mpeg"/>
        </item>
    </channel>
</rss>"#;

    let episodes = parse(feed).unwrap();
    assert_eq!(episodes.len(), 1);
    assert!(episodes[0].media.is_empty());
}

#[test]
fn test_parse_empty_channel_yields_no_episodes() {
    let feed = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
    <channel>
        <title>Empty Feed</title>
        <description>No items yet</description>
    </channel>
</rss>"#;

    let episodes = parse(feed).expect("Empty channel should parse");
    assert!(episodes.is_empty());
}

#[test]
fn test_parse_malformed_xml_is_an_error() {
    let result = parse("This is not XML at all!");
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn test_parse_variant_without_type_attribute() {
    let feed = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
    <channel>
        <title>Test</title>
        <item>
            <title>Untyped</title>
            <media:content url="https://example.com/a.bin"/>
        </item>
    </channel>
</rss>"#;

    let episodes = parse(feed).unwrap();
    assert_eq!(episodes[0].media.len(), 1);
    assert_eq!(episodes[0].media[0].mime_type, "");
}

#[tokio::test]
async fn test_fetch_returns_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/podcast.rss"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_FEED))
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/podcast.rss", mock_server.uri());
    let body = fetch(&client, &url).await.expect("Fetch should succeed");

    assert_eq!(body, SAMPLE_FEED);
}

#[tokio::test]
async fn test_fetch_non_success_status_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/podcast.rss"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/podcast.rss", mock_server.uri());
    let err = fetch(&client, &url).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_fetch_connection_refused_is_a_network_error() {
    // Nothing is listening on this address
    let client = reqwest::Client::new();
    let err = fetch(&client, "http://127.0.0.1:1/podcast.rss")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network(_)));
}
