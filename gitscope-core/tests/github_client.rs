use gitscope_core::{FeedError, GitHubClient, GithubConfig};
use graph::{build_dashboard, DashboardOptions, FixedConflictFiles};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn repository_payload() -> serde_json::Value {
    json!({
        "id": 7,
        "name": "demo",
        "full_name": "octo/demo",
        "owner": {"login": "octo", "avatar_url": "https://avatars.example.com/octo"},
        "description": "Demo repository",
        "stargazers_count": 42,
        "forks_count": 3,
        "language": "Rust",
        "default_branch": "main",
        "open_issues_count": 5
    })
}

fn page_of(shas: std::ops::Range<usize>) -> serde_json::Value {
    let commits: Vec<serde_json::Value> = shas
        .map(|i| {
            json!({
                "sha": format!("c{i}"),
                "commit": {
                    "author": {"name": "Ana", "email": "ana@example.com", "date": "2024-05-01T09:00:00Z"},
                    "message": format!("chore: step {i}")
                },
                "author": null,
                "parents": []
            })
        })
        .collect();
    json!(commits)
}

fn config_for(server: &MockServer) -> GithubConfig {
    GithubConfig {
        api_base: server.uri(),
        timeout_secs: 5,
        token_env: "GITSCOPE_TEST_UNSET_TOKEN".to_string(),
        ..GithubConfig::default()
    }
}

fn commits_payload() -> serde_json::Value {
    json!([
        {
            "sha": "b2",
            "commit": {
                "author": {"name": "Bia", "email": "bia@example.com", "date": "2024-05-02T10:00:00Z"},
                "message": "Merge conflict resolve"
            },
            "author": null,
            "parents": [{"sha": "a1"}, {"sha": "c9"}],
            "stats": {"additions": 40, "deletions": 10, "total": 50}
        },
        {
            "sha": "a1",
            "commit": {
                "author": {"name": "Ana", "email": "ana@example.com", "date": "2024-05-01T09:00:00Z"},
                "message": "feat: init"
            },
            "author": {"login": "ana", "avatar_url": "https://avatars.example.com/ana"},
            "parents": []
        }
    ])
}

#[tokio::test]
async fn snapshot_joins_four_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repository_payload()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/demo/commits"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(commits_payload()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/demo/contributors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"login": "ana", "id": 1, "avatar_url": "", "contributions": 12}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/demo/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Rust": 1200, "Shell": 40})))
        .mount(&server)
        .await;

    let client = GitHubClient::new(&config_for(&server)).unwrap();
    let snapshot = client.snapshot("octo", "demo", 100).await.unwrap();

    assert_eq!(snapshot.repository.full_name, "octo/demo");
    assert_eq!(snapshot.repository.stargazers_count, 42);
    assert_eq!(snapshot.repository.default_branch, "main");
    assert_eq!(snapshot.commits.len(), 2);
    assert_eq!(snapshot.contributors[0].contributions, 12);
    assert_eq!(snapshot.languages["Rust"], 1200);

    let records = gitscope_core::feed::normalize(snapshot.commits).unwrap();
    let dashboard = build_dashboard(&records, &DashboardOptions::default(), FixedConflictFiles::prefix(1));
    let ids: Vec<&str> = dashboard.alerts.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["conflict-b2"]);
    assert_eq!(dashboard.nodes[0].sha, "a1");
    assert_eq!(dashboard.nodes[0].rank, 0);
}

#[tokio::test]
async fn error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let client = GitHubClient::new(&config_for(&server)).unwrap();
    let err = client.repository("octo", "missing").await.unwrap_err();
    assert!(matches!(err, FeedError::Status { status: 404, .. }));
}

#[tokio::test]
async fn commit_window_follows_pages_up_to_limit() {
    let server = MockServer::start().await;
    for (page, range) in [("1", 0..2), ("2", 2..4), ("3", 4..5)] {
        Mock::given(method("GET"))
            .and(path("/repos/octo/demo/commits"))
            .and(query_param("page", page))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_of(range)))
            .mount(&server)
            .await;
    }

    let config = GithubConfig {
        per_page: 2,
        ..config_for(&server)
    };
    let client = GitHubClient::new(&config).unwrap();

    let window = client.commit_window("octo", "demo", 3).await.unwrap();
    let shas: Vec<&str> = window.iter().map(|c| c.sha.as_str()).collect();
    assert_eq!(shas, vec!["c0", "c1", "c2"]);

    // A short page ends the walk before the limit is reached
    let all = client.commit_window("octo", "demo", 50).await.unwrap();
    assert_eq!(all.len(), 5);
}
