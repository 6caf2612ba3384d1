//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a mock release download tree and run the
//! full crawl end-to-end over HTTP.

use openwrt_job_matrix::config::{CrawlConfig, FileConfig};
use openwrt_job_matrix::crawler::{run_crawl, Coordinator, HttpFetcher};
use openwrt_job_matrix::output::{emit_job_config, GithubActionsReporter};
use openwrt_job_matrix::MatrixError;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RELEASE: &str = "23.05.0";

/// Renders a directory listing the way the downloads server does
fn listing(entries: &[&str]) -> String {
    let rows: String = entries
        .iter()
        .map(|entry| {
            format!(
                r#"<tr><td class="n"><a href="{0}">{0}</a></td><td class="s">-</td><td class="d">Mon Nov 13 12:00:00 2023</td></tr>"#,
                entry
            )
        })
        .collect();
    format!(
        r#"<html><head><title>Index</title></head><body><h1>Index of /releases/{}/</h1><hr><table><tr><th class="n">File Name</th><th class="s">File Size</th><th class="d">Date</th></tr>{}</table></body></html>"#,
        RELEASE, rows
    )
}

async fn mount_listing(server: &MockServer, url_path: &str, entries: &[&str]) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing(entries)))
        .mount(server)
        .await;
}

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str, targets: Option<&str>, subtargets: Option<&str>) -> CrawlConfig {
    let mut file = FileConfig::default();
    file.source.base_url = format!("{}/releases/", base_url);
    CrawlConfig::from_args(Some(RELEASE), targets, subtargets, file)
        .expect("Failed to build config")
}

/// Mounts targets {ath79, x86}; ath79 has {generic}, x86 has {64}
async fn mount_release_root(server: &MockServer) {
    mount_listing(server, "/releases/23.05.0/targets/", &["ath79/", "x86/"]).await;
}

async fn mount_x86(server: &MockServer) {
    mount_listing(server, "/releases/23.05.0/targets/x86/", &["64/"]).await;
    mount_listing(
        server,
        "/releases/23.05.0/targets/x86/64/packages/",
        &[
            "base-files_1519-r23630-842932a63d_x86_64.ipk",
            "kernel_5.15.137-1-47964456485559d992fe6f536131fc64_x86_64.ipk",
            "kmod-e1000_5.15.137-1_x86_64.ipk",
        ],
    )
    .await;
}

async fn mount_ath79(server: &MockServer) {
    mount_listing(server, "/releases/23.05.0/targets/ath79/", &["generic/"]).await;
    mount_listing(
        server,
        "/releases/23.05.0/targets/ath79/generic/packages/",
        &["kernel_5.15.137-1-b7a1d2c3e4f5a6b7c8d9e0f1a2b3c4d5_mips_24kc.ipk"],
    )
    .await;
}

#[tokio::test]
async fn test_automatic_mode_full_tree() {
    let mock_server = MockServer::start().await;
    mount_release_root(&mock_server).await;
    mount_ath79(&mock_server).await;
    mount_x86(&mock_server).await;

    let config = create_test_config(&mock_server.uri(), None, None);
    let outcome = run_crawl(config).await.expect("Crawl failed");

    assert_eq!(outcome.jobs.len(), 2);
    assert_eq!(outcome.jobs[0].target, "ath79");
    assert_eq!(outcome.jobs[0].subtarget, "generic");
    assert_eq!(outcome.jobs[0].vermagic, "b7a1d2c3e4f5a6b7c8d9e0f1a2b3c4d5");
    assert_eq!(outcome.jobs[0].pkgarch, "mips_24kc");
    assert_eq!(outcome.jobs[1].target, "x86");
    assert_eq!(outcome.jobs[1].subtarget, "64");
    assert_eq!(outcome.jobs[1].vermagic, "47964456485559d992fe6f536131fc64");
    assert_eq!(outcome.jobs[1].pkgarch, "x86_64");
    assert!(outcome.jobs.iter().all(|job| job.tag == RELEASE));
}

#[tokio::test]
async fn test_manual_mode_never_fetches_pruned_target() {
    let mock_server = MockServer::start().await;
    mount_release_root(&mock_server).await;
    mount_x86(&mock_server).await;

    // ath79 must not be visited at any level
    Mock::given(method("GET"))
        .and(path_regex(r"^/releases/23\.05\.0/targets/ath79/.*"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing(&["generic/"])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), Some("x86"), Some("64"));
    let outcome = run_crawl(config).await.expect("Crawl failed");

    assert_eq!(outcome.jobs.len(), 1);
    assert_eq!(outcome.jobs[0].target, "x86");
    assert_eq!(outcome.jobs[0].subtarget, "64");
    assert_eq!(outcome.stats.targets_pruned, 1);

    // Wiremock verifies the expect(0) when mock_server drops
}

#[tokio::test]
async fn test_mixed_mode_yields_empty_output() {
    let mock_server = MockServer::start().await;
    mount_release_root(&mock_server).await;
    mount_listing(&mock_server, "/releases/23.05.0/targets/x86/", &["64/"]).await;

    Mock::given(method("GET"))
        .and(path_regex(r"/packages/$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing(&[])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), Some("x86"), None);
    let outcome = run_crawl(config).await.expect("Crawl failed");

    assert!(outcome.jobs.is_empty());
}

#[tokio::test]
async fn test_metadata_fetch_failure_aborts_run() {
    let mock_server = MockServer::start().await;
    mount_release_root(&mock_server).await;
    mount_ath79(&mock_server).await;
    mount_listing(&mock_server, "/releases/23.05.0/targets/x86/", &["64/"]).await;

    Mock::given(method("GET"))
        .and(path("/releases/23.05.0/targets/x86/64/packages/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), None, None);
    let result = run_crawl(config).await;

    match result {
        Err(MatrixError::Fetch { url, reason }) => {
            assert!(url.ends_with("/releases/23.05.0/targets/x86/64/packages/"));
            assert!(reason.contains("500"));
        }
        other => panic!("expected fetch error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_release_is_fetch_error() {
    let mock_server = MockServer::start().await;

    let config = create_test_config(&mock_server.uri(), None, None);
    let result = run_crawl(config).await;

    assert!(matches!(result, Err(MatrixError::Fetch { .. })));
}

#[tokio::test]
async fn test_job_config_written_to_github_output() {
    let mock_server = MockServer::start().await;
    mount_release_root(&mock_server).await;
    mount_ath79(&mock_server).await;
    mount_x86(&mock_server).await;

    let config = create_test_config(&mock_server.uri(), None, None);
    let fetcher = HttpFetcher::from_config(&config.http, &config.user_agent).unwrap();
    let outcome = Coordinator::new(config, fetcher)
        .run()
        .await
        .expect("Crawl failed");

    let output_file = tempfile::NamedTempFile::new().unwrap();
    let mut reporter =
        GithubActionsReporter::new(Some(output_file.path().to_path_buf()), Vec::new());
    emit_job_config(&mut reporter, &outcome.jobs).expect("Failed to emit");

    let content = std::fs::read_to_string(output_file.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines[0].starts_with("job-config<<"));

    let jobs: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    let jobs = jobs.as_array().unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0]["tag"], RELEASE);
    assert_eq!(jobs[0]["target"], "ath79");
    assert_eq!(jobs[0]["subtarget"], "generic");
    assert_eq!(jobs[0]["pkgarch"], "mips_24kc");
    assert_eq!(jobs[1]["target"], "x86");
    assert_eq!(jobs[1]["vermagic"], "47964456485559d992fe6f536131fc64");
}
