use stacks::library::{BookSearch, Category, PyxisClient, SearchError, SearchWindow};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// One charted title in the catalog's wire shape.
fn book_json(id: u64, title: &str) -> String {
    format!(
        r#"{{"id":{id},"titleStatement":"{title}","author":"지은이 {id}","publisher":"시험 출판사","thumbnailUrl":"https://cover.test/{id}.jpg"}}"#
    )
}

/// A successful chart envelope wrapping the given JSON book records.
fn chart_body(books: &[String]) -> String {
    format!(
        r#"{{"success":true,"code":"success.retrieved","message":"조회가 완료되었습니다.","data":{{"totalCount":{},"list":[{}]}}}}"#,
        books.len(),
        books.join(",")
    )
}

// ============================================================================
// Chart Request Tests
// ============================================================================

#[tokio::test]
async fn test_chart_request_matches_catalog_contract() {
    let mock_server = MockServer::start().await;

    let body = chart_body(&[book_json(101, "불편한 편의점"), book_json(102, "달러구트 꿈 백화점")]);

    // The endpoint ignores unknown parameters, so every expected one is
    // matched explicitly to pin the full query contract.
    Mock::given(method("GET"))
        .and(path("/pyxis-api/1/biblio-type-popular-charged-books"))
        .and(query_param("max", "10"))
        .and(query_param("biblioType", "1,5,6,9,10,19,25,26,13,14"))
        .and(query_param("classNo", "7"))
        .and(query_param("fromDateReceived", "202302"))
        .and(query_param("toDateReceived", "202304"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PyxisClient::new(Some(mock_server.uri()), SearchWindow::default());
    let result = client.search_top_books(Category::Literature).await;

    assert!(result.is_ok());

    let books = result.unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].id, 101);
    assert_eq!(books[0].title_statement, "불편한 편의점");
    assert_eq!(books[0].author, "지은이 101");
    assert_eq!(books[0].publisher, "시험 출판사");
    assert_eq!(books[0].thumbnail_url, "https://cover.test/101.jpg");
    assert_eq!(books[1].id, 102);
}

#[tokio::test]
async fn test_class_no_follows_selected_category() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pyxis-api/1/biblio-type-popular-charged-books"))
        .and(query_param("classNo", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_string(chart_body(&[])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PyxisClient::new(Some(mock_server.uri()), SearchWindow::default());
    let result = client.search_top_books(Category::NaturalScience).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_configured_window_reaches_the_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pyxis-api/1/biblio-type-popular-charged-books"))
        .and(query_param("fromDateReceived", "202009"))
        .and(query_param("toDateReceived", "202012"))
        .respond_with(ResponseTemplate::new(200).set_body_string(chart_body(&[])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let window = SearchWindow {
        from: "202009".to_string(),
        to: "202012".to_string(),
    };
    let client = PyxisClient::new(Some(mock_server.uri()), window);
    let result = client.search_top_books(Category::History).await;

    assert!(result.is_ok());
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_api_error_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pyxis-api/1/biblio-type-popular-charged-books"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = PyxisClient::new(Some(mock_server.uri()), SearchWindow::default());
    let result = client.search_top_books(Category::GeneralWorks).await;

    assert!(matches!(result, Err(SearchError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pyxis-api/1/biblio-type-popular-charged-books"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance page</html>"))
        .mount(&mock_server)
        .await;

    let client = PyxisClient::new(Some(mock_server.uri()), SearchWindow::default());
    let result = client.search_top_books(Category::Arts).await;

    assert!(matches!(result, Err(SearchError::Decode(_))));
}

#[tokio::test]
async fn test_network_failure_is_a_network_error() {
    // Bind an ephemeral port, then release it so nothing is listening when
    // the client connects. A dropped MockServer won't do here: wiremock
    // pools servers, so its port keeps answering (with 404) after the drop.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = PyxisClient::new(
        Some(format!("http://127.0.0.1:{port}")),
        SearchWindow::default(),
    );
    let result = client.search_top_books(Category::Philosophy).await;

    assert!(matches!(result, Err(SearchError::Network(_))));
}

// ============================================================================
// Envelope Edge Cases
// ============================================================================

#[tokio::test]
async fn test_unknown_record_fields_are_ignored() {
    let mock_server = MockServer::start().await;

    // Real chart records carry dozens of keys the screen never reads.
    let body = r#"{
        "success": true,
        "code": "success.retrieved",
        "message": "조회가 완료되었습니다.",
        "data": {
            "totalCount": 1,
            "list": [{
                "id": 7,
                "titleStatement": "물고기는 존재하지 않는다",
                "author": "룰루 밀러 지음",
                "publisher": "곰출판",
                "thumbnailUrl": "https://cover.test/7.jpg",
                "isbn": "9791189327156",
                "branchVolumes": [{"id": 1, "name": "상허기념도서관", "volume": "3"}],
                "biblioType": {"id": 1, "name": "단행본"}
            }]
        },
        "generatedAt": "2023-05-01T00:00:00"
    }"#;

    Mock::given(method("GET"))
        .and(path("/pyxis-api/1/biblio-type-popular-charged-books"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = PyxisClient::new(Some(mock_server.uri()), SearchWindow::default());
    let result = client.search_top_books(Category::NaturalScience).await;

    assert!(result.is_ok());

    let books = result.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title_statement, "물고기는 존재하지 않는다");
}

#[tokio::test]
async fn test_empty_chart_decodes_to_empty_vec() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pyxis-api/1/biblio-type-popular-charged-books"))
        .respond_with(ResponseTemplate::new(200).set_body_string(chart_body(&[])))
        .mount(&mock_server)
        .await;

    let client = PyxisClient::new(Some(mock_server.uri()), SearchWindow::default());
    let result = client.search_top_books(Category::Language).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

#[tokio::test]
async fn test_failure_flag_with_data_still_returns_the_chart() {
    let mock_server = MockServer::start().await;

    // The catalog has been seen flagging success=false while still serving a
    // usable chart. The flag is logged, not acted on.
    let body = format!(
        r#"{{"success":false,"code":"error.degraded","message":"일시적인 오류","data":{{"totalCount":1,"list":[{}]}}}}"#,
        book_json(55, "아몬드")
    );

    Mock::given(method("GET"))
        .and(path("/pyxis-api/1/biblio-type-popular-charged-books"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = PyxisClient::new(Some(mock_server.uri()), SearchWindow::default());
    let result = client.search_top_books(Category::Literature).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap()[0].title_statement, "아몬드");
}
