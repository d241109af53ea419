//! JSON document loader.
//!
//! Client-side (csr): real HTTP GETs via `gloo-net`, relative to the page.
//! Native builds: every load fails with [`LoadError::Unavailable`] so page
//! controllers take their failure path instead of panicking.
//!
//! ERROR HANDLING
//! ==============
//! One attempt per call: no retry, no cache, no timeout. A non-success status
//! is an error carrying the path and status code; callers decide whether to
//! log and abort.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde::de::DeserializeOwned;

use super::types::{ContactInfo, ExperienceEntry, Project, Tool};
use crate::config::SiteConfig;

/// Failure while loading one data document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The server answered with a non-2xx status.
    #[error("failed to load {path}: {status}")]
    Status { path: String, status: u16 },
    /// The request never produced a response.
    #[error("failed to load {path}: {message}")]
    Transport { path: String, message: String },
    /// The body was not the expected JSON shape.
    #[error("failed to decode {path}: {message}")]
    Decode { path: String, message: String },
    /// No browser fetch in this build.
    #[error("cannot load {path}: fetch unavailable outside the browser")]
    Unavailable { path: String },
}

/// Fetch `path` and decode its JSON body as `T`.
///
/// # Errors
///
/// Returns [`LoadError`] when the request fails, the status is not a success,
/// or the body does not decode.
pub async fn load_json<T: DeserializeOwned>(path: &str) -> Result<T, LoadError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(path)
            .send()
            .await
            .map_err(|e| LoadError::Transport { path: path.to_owned(), message: e.to_string() })?;
        if !resp.ok() {
            return Err(LoadError::Status { path: path.to_owned(), status: resp.status() });
        }
        let body = resp
            .text()
            .await
            .map_err(|e| LoadError::Transport { path: path.to_owned(), message: e.to_string() })?;
        decode_json(path, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(LoadError::Unavailable { path: path.to_owned() })
    }
}

/// Decode an already-fetched body. Shares error mapping with [`load_json`].
///
/// # Errors
///
/// Returns [`LoadError::Decode`] if `body` is not valid JSON for `T`.
pub fn decode_json<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Decode { path: path.to_owned(), message: e.to_string() })
}

/// Await both futures concurrently; fail as a whole if either fails.
///
/// # Errors
///
/// Returns the first [`LoadError`] produced by either future.
pub async fn load_both<A, B, FA, FB>(first: FA, second: FB) -> Result<(A, B), LoadError>
where
    FA: Future<Output = Result<A, LoadError>>,
    FB: Future<Output = Result<B, LoadError>>,
{
    futures::future::try_join(first, second).await
}

/// Load `experience.json` as configured.
///
/// # Errors
///
/// See [`load_json`].
pub async fn fetch_experience(config: &SiteConfig) -> Result<Vec<ExperienceEntry>, LoadError> {
    load_json(&config.experience_path()).await
}

/// Load `tools.json` as configured.
///
/// # Errors
///
/// See [`load_json`].
pub async fn fetch_tools(config: &SiteConfig) -> Result<Vec<Tool>, LoadError> {
    load_json(&config.tools_path()).await
}

/// Load `projects.json` as configured.
///
/// # Errors
///
/// See [`load_json`].
pub async fn fetch_projects(config: &SiteConfig) -> Result<Vec<Project>, LoadError> {
    load_json(&config.projects_path()).await
}

/// Load `contact.json` as configured.
///
/// # Errors
///
/// See [`load_json`].
pub async fn fetch_contact(config: &SiteConfig) -> Result<ContactInfo, LoadError> {
    load_json(&config.contact_path()).await
}
