//! Fake API server and payload builders

use serde_json::json;
use solution_dl::UserConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "abc123";
pub const TRACK: &str = "rust";
pub const SLUG: &str = "hello-world";

/// Who owns the solution served by the fake API
pub struct Owner<'a> {
    pub team: &'a str,
    pub handle: &'a str,
    pub is_requester: bool,
}

/// A solution record in the shape the API sends
pub fn solution_payload(file_base_url: &str, owner: &Owner<'_>, files: &[&str]) -> String {
    json!({
        "solution": {
            "id": "solution-1",
            "url": format!("https://exercism.io/tracks/{TRACK}/exercises/{SLUG}"),
            "team": { "name": owner.team, "slug": owner.team },
            "user": { "handle": owner.handle, "is_requester": owner.is_requester },
            "exercise": {
                "id": SLUG,
                "instructions_url": "https://exercism.io/instructions",
                "auto_approve": true,
                "track": { "id": TRACK, "language": "Rust" }
            },
            "file_download_base_url": file_base_url,
            "files": files,
            "iteration": { "submitted_at": "2024-03-01T10:00:00Z" }
        }
    })
    .to_string()
}

/// Start a fake API that serves the latest solution and the given files
///
/// Files with `None` content answer 404.
pub async fn start_api(owner: &Owner<'_>, files: &[(&str, Option<&str>)]) -> MockServer {
    let server = MockServer::start().await;
    let file_base_url = format!("{}/files/", server.uri());
    let names: Vec<&str> = files.iter().map(|(name, _)| *name).collect();

    Mock::given(method("GET"))
        .and(path("/solutions/latest"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(solution_payload(
                &file_base_url,
                owner,
                &names,
            )),
        )
        .mount(&server)
        .await;

    for (name, content) in files {
        let response = match content {
            Some(body) => ResponseTemplate::new(200).set_body_string(*body),
            None => ResponseTemplate::new(404),
        };
        Mock::given(method("GET"))
            .and(path(format!("/files/{name}")))
            .respond_with(response)
            .mount(&server)
            .await;
    }

    server
}

/// User config pointing at `server` with `workspace` as the workspace root
pub fn config_for(server: &MockServer, workspace: &std::path::Path) -> UserConfig {
    UserConfig::new(TOKEN, workspace.to_string_lossy(), server.uri())
}
