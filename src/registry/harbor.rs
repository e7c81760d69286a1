use crate::error::{HarborTagError, Result};
use crate::registry::{tag_names, Artifact, TagSource};
use reqwest::blocking::Client;
use tracing::debug;

pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Location of an image repository in a Harbor registry, plus the basic-auth
/// credentials used to read it
#[derive(Debug, Clone, PartialEq)]
pub struct HarborCoordinates {
    /// Base URL, e.g. "https://harbor.example.com"
    pub registry: String,
    pub project: String,
    pub repository: String,
    pub username: String,
    pub password: String,
    pub page_size: u32,
}

/// Lists tags through the Harbor v2.0 artifacts API
///
/// Only the first page is read, as one request of `page_size` artifacts.
pub struct HarborRegistry {
    coordinates: HarborCoordinates,
    client: Client,
}

impl HarborRegistry {
    pub fn new(coordinates: HarborCoordinates) -> Self {
        HarborRegistry {
            coordinates,
            client: Client::new(),
        }
    }

    /// Artifacts endpoint of the configured repository
    pub fn artifacts_url(&self) -> String {
        format!(
            "{}/api/v2.0/projects/{}/repositories/{}/artifacts",
            self.coordinates.registry.trim_end_matches('/'),
            self.coordinates.project,
            self.coordinates.repository
        )
    }

    fn fetch_artifacts(&self) -> Result<Vec<Artifact>> {
        let url = self.artifacts_url();
        let page_size = self.coordinates.page_size.to_string();
        debug!(%url, page_size = %page_size, "GET artifacts");

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.coordinates.username, Some(&self.coordinates.password))
            .query(&[
                ("page", "1"),
                ("page_size", page_size.as_str()),
                ("with_tag", "true"),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarborTagError::registry(format!(
                "GET {} returned {}",
                url, status
            )));
        }

        let artifacts: Vec<Artifact> = response.json().map_err(|e| {
            HarborTagError::registry(format!("Cannot decode artifacts from {}: {}", url, e))
        })?;
        debug!(count = artifacts.len(), "received artifacts");
        Ok(artifacts)
    }
}

impl TagSource for HarborRegistry {
    fn list_tags(&self) -> Result<Vec<String>> {
        let artifacts = self.fetch_artifacts()?;
        Ok(tag_names(&artifacts))
    }
}
