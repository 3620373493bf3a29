//! End-to-end scrape tests against a mocked directory server

use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use taxateur_core::{
    ClientConfig, DirectoryScraper, ScrapeProgress, TaxateurError, select_expertise,
};

/// Matches requests without a `page` query parameter (the page-count
/// fetch posts to the bare landing path)
struct NoPageParam;

impl wiremock::Match for NoPageParam {
    fn matches(&self, request: &Request) -> bool {
        !request.url.query_pairs().any(|(key, _)| key == "page")
    }
}

fn landing_page() -> String {
    r#"
    <html><body>
    <form>
        <div class="search-expertise">
            <select name="expertise">
                <option value="">Maak een keuze</option>
                <option value="A">Cat A</option>
                <option value="B">Cat B</option>
            </select>
        </div>
    </form>
    </body></html>
    "#
    .to_string()
}

fn counting_page(pages: usize) -> String {
    let links: String = (1..=pages)
        .map(|p| format!(r#"<a href="?page={0}"><p>{0}</p></a>"#, p))
        .chain(std::iter::once(r#"<a href=""><p>&gt;</p></a>"#.to_string()))
        .collect();
    format!(
        r#"<html><body><div class="pagination">{}</div></body></html>"#,
        links
    )
}

fn results_page(rows: &[(&str, &str, &str)]) -> String {
    let rows: String = rows
        .iter()
        .map(|(initials, last_name, company)| {
            format!(
                r#"
                <div class="result-row">
                    <div class="col first"> {} </div>
                    <div class="col second">{}</div>
                    <div class="col third">{}</div>
                </div>
                "#,
                initials, last_name, company
            )
        })
        .collect();
    format!(
        r#"<html><body><div id="search-results">{}</div></body></html>"#,
        rows
    )
}

fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: server.uri(),
        base_path: "/vind-een-taxateur".to_string(),
        timeout_secs: 5,
        page_delay_ms: 10,
    }
}

#[tokio::test]
async fn lists_expertises_from_landing_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vind-een-taxateur"))
        .respond_with(ResponseTemplate::new(200).set_body_string(landing_page()))
        .mount(&server)
        .await;

    let scraper = DirectoryScraper::with_config(test_config(&server)).unwrap();
    let expertises = scraper.expertises().await.unwrap();

    assert_eq!(expertises.len(), 2);
    assert_eq!(expertises[0].value, "A");
    assert_eq!(expertises[0].name, "Cat A");
    assert_eq!(expertises[1].value, "B");
    assert_eq!(expertises[1].name, "Cat B");
}

#[tokio::test]
async fn full_run_exports_pages_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vind-een-taxateur"))
        .respond_with(ResponseTemplate::new(200).set_body_string(landing_page()))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/vind-een-taxateur"))
        .and(NoPageParam)
        .and(body_string_contains("expertise=A"))
        .and(body_string_contains("choose=persoon"))
        .respond_with(ResponseTemplate::new(200).set_body_string(counting_page(2)))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/vind-een-taxateur"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(&[
            ("A.", "Aalders", "Aalders BV"),
            ("B.", "Bakker", "Bakker Taxaties"),
            ("C.", "Claes", "Claes & Zn"),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/vind-een-taxateur"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(&[
            ("D.", "Dekker", "Dekker Vastgoed"),
            ("E.", "Evers", "Evers & Co"),
        ])))
        .mount(&server)
        .await;

    let scraper = DirectoryScraper::with_config(test_config(&server)).unwrap();
    let expertises = scraper.expertises().await.unwrap();
    let chosen = select_expertise(&expertises, "1").unwrap();

    let output_dir = tempfile::tempdir().unwrap();
    let mut progress = Vec::new();
    let outcome = scraper
        .run(chosen, output_dir.path(), |event| progress.push(event))
        .await
        .unwrap();

    assert_eq!(outcome.record_count, 5);

    // Page count, then pages 1..=2 in order, then the export
    assert_eq!(progress[0], ScrapeProgress::ComputingPageCount);
    assert_eq!(progress[1], ScrapeProgress::RetrievingPage { page: 1, total: 2 });
    assert_eq!(progress[2], ScrapeProgress::RetrievingPage { page: 2, total: 2 });
    match &progress[3] {
        ScrapeProgress::Exporting { filename } => assert!(filename.starts_with("Cat A_")),
        other => panic!("Expected Exporting, got {:?}", other),
    }
    assert_eq!(progress.len(), 4);

    let content = std::fs::read_to_string(&outcome.csv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Initials,LastName,Company",
            "A.,Aalders,Aalders BV",
            "B.,Bakker,Bakker Taxaties",
            "C.,Claes,Claes & Zn",
            "D.,Dekker,Dekker Vastgoed",
            "E.,Evers,Evers & Co",
        ]
    );
}

#[tokio::test]
async fn failure_mid_pagination_writes_no_file() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/vind-een-taxateur"))
        .and(NoPageParam)
        .respond_with(ResponseTemplate::new(200).set_body_string(counting_page(2)))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/vind-een-taxateur"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(&[(
            "A.", "Aalders", "Aalders BV",
        )])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/vind-een-taxateur"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let scraper = DirectoryScraper::with_config(test_config(&server)).unwrap();
    let expertise = taxateur_core::Expertise {
        value: "A".to_string(),
        name: "Cat A".to_string(),
    };

    let output_dir = tempfile::tempdir().unwrap();
    let result = scraper.run(&expertise, output_dir.path(), |_| {}).await;

    match result {
        Err(TaxateurError::StatusError(reason)) => {
            assert_eq!(reason, "Internal Server Error");
        }
        other => panic!("Expected StatusError, got {:?}", other),
    }

    // Pages fetched before the failure are discarded, nothing is written
    let leftover = std::fs::read_dir(output_dir.path()).unwrap().count();
    assert_eq!(leftover, 0);
}

#[tokio::test]
async fn missing_pager_scrapes_single_page() {
    let server = MockServer::start().await;

    // Count fetch returns markup without any pagination control
    Mock::given(method("POST"))
        .and(path("/vind-een-taxateur"))
        .and(NoPageParam)
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<html><body><div id="search-results"></div></body></html>"#),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/vind-een-taxateur"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(&[(
            "F.", "Fransen", "Fransen Makelaardij",
        )])))
        .mount(&server)
        .await;

    let scraper = DirectoryScraper::with_config(test_config(&server)).unwrap();
    let expertise = taxateur_core::Expertise {
        value: "B".to_string(),
        name: "Cat B".to_string(),
    };

    let records = scraper.scrape(&expertise).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].last_name, "Fransen");
}

#[tokio::test]
async fn invalid_selection_issues_no_search_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vind-een-taxateur"))
        .respond_with(ResponseTemplate::new(200).set_body_string(landing_page()))
        .mount(&server)
        .await;

    // The category listing must be the only request
    Mock::given(method("POST"))
        .and(path("/vind-een-taxateur"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let scraper = DirectoryScraper::with_config(test_config(&server)).unwrap();
    let expertises = scraper.expertises().await.unwrap();

    assert!(select_expertise(&expertises, "0").is_err());
    assert!(select_expertise(&expertises, "99").is_err());
}

#[tokio::test]
async fn unreachable_server_surfaces_http_error() {
    // Bind and drop a listener to get a port nothing is serving on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = ClientConfig {
        base_url: format!("http://127.0.0.1:{}", port),
        base_path: "/vind-een-taxateur".to_string(),
        timeout_secs: 2,
        page_delay_ms: 10,
    };
    let scraper = DirectoryScraper::with_config(config).unwrap();

    match scraper.expertises().await {
        Err(TaxateurError::HttpError(_)) => {}
        other => panic!("Expected HttpError, got {:?}", other),
    }
}
