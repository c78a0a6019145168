//! GitHub contents API client for the snapshot object.
//!
//! One fixed path in one repository holds at most one live snapshot. Each
//! push either creates it (genuine 404 on the existence check) or replaces
//! it in place using the blob sha as a compare-and-swap token. A sha that
//! moved between read and write surfaces as a 409, or as a 422 when a
//! sha-less create lost the race; either way it is refetched and the
//! write retried once.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::json;

use crate::config::RemoteConfig;
use crate::errors::SyncError;

const API_ROOT: &str = "https://api.github.com";
const CONNECT_TIMEOUT_MS: u64 = 5_000;
const REQUEST_TIMEOUT_MS: u64 = 15_000;

/// The `[skip ci]` tag keeps repository automation from reacting to
/// snapshot commits.
const COMMIT_MESSAGE: &str = "[skip ci] rollcall: attendance snapshot";
const COMMITTER_NAME: &str = "rollcall-bot";
const COMMITTER_EMAIL: &str = "rollcall-bot@users.noreply.github.com";

/// Remote coordinates plus credential, injected by the caller. Never read
/// from ambient process configuration.
#[derive(Debug, Clone)]
pub struct RemoteTarget {
    pub repository: String,
    pub branch: String,
    pub path: String,
    pub token: String,
}

impl RemoteTarget {
    /// Build a target from the config block; `None` when the credential is
    /// missing, which disables backup without being an error.
    pub fn from_config(remote: &RemoteConfig) -> Option<Self> {
        let token = remote.token.as_ref()?.trim().to_string();
        if token.is_empty() {
            return None;
        }
        Some(Self {
            repository: remote.repository.clone(),
            branch: remote.branch.clone(),
            path: remote.path.clone(),
            token,
        })
    }

    fn contents_url(&self) -> String {
        format!("{}/repos/{}/contents/{}", API_ROOT, self.repository, self.path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteWrite {
    Created,
    Updated,
}

pub struct RemoteClient {
    agent: ureq::Agent,
    target: RemoteTarget,
}

impl RemoteClient {
    pub fn new(target: RemoteTarget) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_millis(CONNECT_TIMEOUT_MS))
            .timeout_read(Duration::from_millis(REQUEST_TIMEOUT_MS))
            .timeout_write(Duration::from_millis(REQUEST_TIMEOUT_MS))
            .build();
        Self { agent, target }
    }

    /// Create-or-update the snapshot, with a single compare-and-swap retry
    /// when the remote revision moved under us.
    pub fn push(&self, content: &str) -> Result<RemoteWrite, SyncError> {
        let sha = self.fetch_sha()?;
        match self.put_content(content, sha.as_deref()) {
            Err(SyncError::Conflict) => {
                // revision moved between read and write; refetch once
                let sha = self.fetch_sha()?;
                self.put_content(content, sha.as_deref())
            }
            other => other,
        }
    }

    /// Blob sha of the existing snapshot, or `None` on a genuine 404.
    /// Any other failure is an error: a transient fault during the existence
    /// check must not fall through to "create".
    pub fn fetch_sha(&self) -> Result<Option<String>, SyncError> {
        let url = format!("{}?ref={}", self.target.contents_url(), self.target.branch);
        match self.request("GET", &url).call() {
            Ok(resp) => {
                let body: serde_json::Value = resp
                    .into_json()
                    .map_err(|e| SyncError::Transport(e.to_string()))?;
                match body["sha"].as_str() {
                    Some(sha) => Ok(Some(sha.to_string())),
                    None => Err(SyncError::Transport(
                        "existence check response carried no sha".to_string(),
                    )),
                }
            }
            Err(ureq::Error::Status(404, _)) => Ok(None),
            Err(ureq::Error::Status(code, resp)) => Err(SyncError::Http {
                status: code,
                message: read_body(resp),
            }),
            Err(ureq::Error::Transport(e)) => Err(SyncError::Transport(e.to_string())),
        }
    }

    /// PUT the content; `sha: None` creates, `sha: Some` replaces in place.
    fn put_content(&self, content: &str, sha: Option<&str>) -> Result<RemoteWrite, SyncError> {
        let body = upload_body(&self.target, content, sha);
        match self.request("PUT", &self.target.contents_url()).send_json(body) {
            Ok(resp) => {
                if resp.status() == 201 {
                    Ok(RemoteWrite::Created)
                } else {
                    Ok(RemoteWrite::Updated)
                }
            }
            // GitHub answers 409 when the sha no longer matches the head blob
            Err(ureq::Error::Status(409, _)) => Err(SyncError::Conflict),
            Err(ureq::Error::Status(422, resp)) => {
                let message = read_body(resp);
                if is_sha_conflict(&message) {
                    Err(SyncError::Conflict)
                } else {
                    Err(SyncError::Http {
                        status: 422,
                        message,
                    })
                }
            }
            Err(ureq::Error::Status(code, resp)) => Err(SyncError::Http {
                status: code,
                message: read_body(resp),
            }),
            Err(ureq::Error::Transport(e)) => Err(SyncError::Transport(e.to_string())),
        }
    }

    fn request(&self, method: &str, url: &str) -> ureq::Request {
        self.agent
            .request(method, url)
            .set("accept", "application/vnd.github+json")
            .set("authorization", &format!("Bearer {}", self.target.token))
            .set("user-agent", "rollcall-backup")
            .set("x-github-api-version", "2022-11-28")
    }
}

/// Build the PUT payload: message, base64 content, branch, bot committer,
/// and the compare-and-swap sha when updating.
pub(crate) fn upload_body(
    target: &RemoteTarget,
    content: &str,
    sha: Option<&str>,
) -> serde_json::Value {
    let mut body = json!({
        "message": COMMIT_MESSAGE,
        "content": BASE64.encode(content.as_bytes()),
        "branch": target.branch,
        "committer": {
            "name": COMMITTER_NAME,
            "email": COMMITTER_EMAIL,
        },
    });
    if let Some(sha) = sha {
        body["sha"] = json!(sha);
    }
    body
}

/// A 422 whose message talks about the blob sha is a lost write race:
/// "\"sha\" wasn't supplied" when a create raced a concurrent first writer,
/// "does not match" when an update raced a newer commit. Other 422s are
/// genuine request errors and must not be retried.
pub(crate) fn is_sha_conflict(body: &str) -> bool {
    body.to_ascii_lowercase().contains("sha")
}

fn read_body(resp: ureq::Response) -> String {
    let body = resp.into_string().unwrap_or_default();
    if body.len() > 256 {
        body.chars().take(256).collect()
    } else {
        body
    }
}
