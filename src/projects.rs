//! Project feed built from a source-control host's repository listing.
//!
//! [`fetch_projects`] turns every failure into an empty list; a host outage
//! hides the projects section instead of failing the page.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::PROJECTS_API_BASE;

/// Description used when a repository has none.
pub const MISSING_DESCRIPTION: &str = "No description available";
/// Language used when the host reports none.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Failures while retrieving the repository listing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The host answered with a non-success status.
    #[error("host responded with HTTP {0}")]
    Status(u16),
    /// The response body was not the expected JSON.
    #[error("malformed repository listing: {0}")]
    Decode(String),
}

/// Repository metadata as returned by the hosting API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRecord {
    /// Numeric repository id.
    pub id: u64,
    /// Repository name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Web page of the repository.
    pub html_url: String,
    /// Project homepage, often a live demo.
    #[serde(default)]
    pub homepage: Option<String>,
    /// Dominant language.
    #[serde(default)]
    pub language: Option<String>,
    /// Star count.
    #[serde(default)]
    pub stargazers_count: u32,
    /// Fork count.
    #[serde(default)]
    pub forks_count: u32,
    /// Topic tags.
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    /// RFC 3339 timestamp of the last update.
    pub updated_at: String,
}

/// Display model for one project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Repository id.
    pub id: u64,
    /// Lower-cased repository name.
    pub slug: String,
    /// Title-cased name with separators replaced by spaces.
    pub title: String,
    /// Description or [`MISSING_DESCRIPTION`].
    pub description: String,
    /// Repository web page.
    pub url: String,
    /// Live demo, if any.
    pub demo_url: Option<String>,
    /// Language or [`UNKNOWN_LANGUAGE`].
    pub language: String,
    /// Star count.
    pub star_count: u32,
    /// Fork count.
    pub fork_count: u32,
    /// Topic tags.
    pub topics: Vec<String>,
    /// RFC 3339 timestamp of the last update.
    pub updated_at: String,
    /// Whether the project is pinned to the front.
    pub featured: bool,
    /// Screenshot path, if one is configured.
    pub screenshot_url: Option<String>,
}

/// Which account to list and how to decorate its projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectCatalog {
    /// Account whose public repositories are listed.
    pub username: String,
    /// API root, without a trailing slash.
    pub api_base: String,
    /// Repository names shown first.
    pub featured: Vec<String>,
    /// Screenshot path per repository name.
    pub screenshots: BTreeMap<String, String>,
    /// Demo URL per repository name; overrides the homepage.
    pub demos: BTreeMap<String, String>,
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        let owned = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|&(k, v)| (k.to_owned(), v.to_owned()))
                .collect::<BTreeMap<_, _>>()
        };
        Self {
            username: "Marxz13".to_owned(),
            api_base: PROJECTS_API_BASE.to_owned(),
            featured: ["Car-Rental", "property_price_prediction", "Personal-website-react"]
                .map(str::to_owned)
                .to_vec(),
            screenshots: owned(&[
                ("Car-Rental", "/images/projects/car-rental.png"),
                (
                    "property_price_prediction",
                    "/images/projects/property-prediction.png",
                ),
                (
                    "Personal-website-react",
                    "/images/projects/personal-website.png",
                ),
            ]),
            demos: owned(&[(
                "property_price_prediction",
                "https://propvalue.marzallan.com",
            )]),
        }
    }
}

impl ProjectCatalog {
    /// Listing endpoint for the configured account.
    #[must_use]
    pub fn listing_url(&self) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page=100",
            self.api_base.trim_end_matches('/'),
            self.username
        )
    }

    fn is_featured(&self, name: &str) -> bool {
        self.featured.iter().any(|f| f == name)
    }
}

/// Anything able to produce a repository listing.
#[cfg_attr(test, mockall::automock)]
pub trait RepoSource {
    /// Retrieve the listing described by `catalog`.
    ///
    /// # Errors
    /// Returns a [`FetchError`] when the listing cannot be retrieved or
    /// decoded.
    fn fetch(&self, catalog: &ProjectCatalog) -> Result<Vec<RepoRecord>, FetchError>;
}

/// Upper-case the first character of each space-separated word after
/// turning `-` and `_` into spaces.
///
/// # Examples
/// ```
/// use wander::projects::title_case;
/// assert_eq!(title_case("property_price-prediction"), "Property Price Prediction");
/// ```
#[must_use]
pub fn title_case(name: &str) -> String {
    name.replace(['-', '_'], " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn to_project(repo: RepoRecord, catalog: &ProjectCatalog) -> Project {
    let demo_url = catalog
        .demos
        .get(&repo.name)
        .cloned()
        .or_else(|| non_empty(repo.homepage));
    Project {
        id: repo.id,
        slug: repo.name.to_lowercase(),
        title: title_case(&repo.name),
        description: non_empty(repo.description)
            .unwrap_or_else(|| MISSING_DESCRIPTION.to_owned()),
        url: repo.html_url,
        demo_url,
        language: non_empty(repo.language).unwrap_or_else(|| UNKNOWN_LANGUAGE.to_owned()),
        star_count: repo.stargazers_count,
        fork_count: repo.forks_count,
        topics: repo.topics.unwrap_or_default(),
        updated_at: repo.updated_at,
        featured: catalog.is_featured(&repo.name),
        screenshot_url: catalog.screenshots.get(&repo.name).cloned(),
    }
}

fn display_order(a: &Project, b: &Project) -> Ordering {
    b.featured
        .cmp(&a.featured)
        .then_with(|| b.updated_at.cmp(&a.updated_at))
}

/// Project repositories into display cards: drop profile repositories,
/// decorate from `catalog`, and order featured first then newest first.
#[must_use]
pub fn to_projects(repos: Vec<RepoRecord>, catalog: &ProjectCatalog) -> Vec<Project> {
    let mut projects: Vec<Project> = repos
        .into_iter()
        .filter(|repo| !repo.name.contains(".github"))
        .map(|repo| to_project(repo, catalog))
        .collect();
    projects.sort_by(display_order);
    projects
}

/// Fetch and project the listing, yielding an empty list on any failure.
pub fn fetch_projects(source: &dyn RepoSource, catalog: &ProjectCatalog) -> Vec<Project> {
    match source.fetch(catalog) {
        Ok(repos) => {
            let projects = to_projects(repos, catalog);
            info!("loaded {} projects for {}", projects.len(), catalog.username);
            projects
        }
        Err(e) => {
            warn!("error fetching projects for {}: {e}", catalog.username);
            Vec::new()
        }
    }
}

#[cfg(feature = "projects")]
pub use http::HttpRepoSource;

#[cfg(feature = "projects")]
mod http {
    use std::time::Duration;

    use reqwest::blocking::Client;
    use reqwest::header::ACCEPT;

    use super::{FetchError, ProjectCatalog, RepoRecord, RepoSource};

    /// Blocking HTTP client for the hosting API.
    #[derive(Debug, Clone)]
    pub struct HttpRepoSource {
        client: Client,
    }

    impl HttpRepoSource {
        /// Build a client with a ten second timeout.
        ///
        /// # Errors
        /// Returns [`FetchError::Transport`] if the TLS backend cannot be
        /// initialised.
        pub fn new() -> Result<Self, FetchError> {
            let client = Client::builder()
                .timeout(Duration::from_secs(10))
                .user_agent(concat!("wander/", env!("CARGO_PKG_VERSION")))
                .build()
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            Ok(Self { client })
        }
    }

    impl RepoSource for HttpRepoSource {
        fn fetch(&self, catalog: &ProjectCatalog) -> Result<Vec<RepoRecord>, FetchError> {
            let response = self
                .client
                .get(catalog.listing_url())
                .header(ACCEPT, "application/vnd.github.v3+json")
                .send()
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }
            response
                .json::<Vec<RepoRecord>>()
                .map_err(|e| FetchError::Decode(e.to_string()))
        }
    }
}
