//! Project feed shaping against a canned repository listing.

use rstest::{fixture, rstest};
use wander::projects::{
    fetch_projects, to_projects, FetchError, ProjectCatalog, RepoRecord, RepoSource,
    MISSING_DESCRIPTION, UNKNOWN_LANGUAGE,
};

/// Source replaying a fixed response.
struct CannedSource(Result<Vec<RepoRecord>, FetchError>);

impl RepoSource for CannedSource {
    fn fetch(&self, _catalog: &ProjectCatalog) -> Result<Vec<RepoRecord>, FetchError> {
        self.0.clone()
    }
}

const LISTING: &str = r#"[
  {"id": 1, "name": "old-tool", "description": "", "html_url": "https://example.com/old-tool",
   "homepage": "", "language": null, "stargazers_count": 2, "forks_count": 0,
   "topics": ["cli"], "updated_at": "2023-01-01T00:00:00Z"},
  {"id": 2, "name": "Car-Rental", "description": "Rent cars", "html_url": "https://example.com/car",
   "homepage": "https://car.example.com", "language": "TypeScript", "stargazers_count": 5,
   "forks_count": 1, "updated_at": "2022-06-01T00:00:00Z"},
  {"id": 3, "name": "Marxz13.github.io", "html_url": "https://example.com/site",
   "updated_at": "2024-01-01T00:00:00Z"},
  {"id": 4, "name": "fresh_idea", "description": "New", "html_url": "https://example.com/fresh",
   "language": "Rust", "updated_at": "2024-05-01T00:00:00Z"}
]"#;

#[fixture]
fn listing() -> Vec<RepoRecord> {
    serde_json::from_str(LISTING).expect("valid listing")
}

#[rstest]
fn featured_first_then_newest(listing: Vec<RepoRecord>) {
    let projects = to_projects(listing, &ProjectCatalog::default());
    let slugs: Vec<_> = projects.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["car-rental", "fresh_idea", "old-tool"]);
}

#[rstest]
fn blank_fields_fall_back(listing: Vec<RepoRecord>) {
    let projects = to_projects(listing, &ProjectCatalog::default());
    let old = projects.iter().find(|p| p.id == 1).expect("old-tool kept");
    assert_eq!(old.description, MISSING_DESCRIPTION);
    assert_eq!(old.language, UNKNOWN_LANGUAGE);
    assert_eq!(old.demo_url, None);
    assert_eq!(old.title, "Old Tool");
    assert_eq!(old.topics, vec!["cli".to_owned()]);
}

#[rstest]
fn catalog_decorates_featured_projects(listing: Vec<RepoRecord>) {
    let projects = to_projects(listing, &ProjectCatalog::default());
    let car = projects.iter().find(|p| p.id == 2).expect("car kept");
    assert!(car.featured);
    assert_eq!(car.demo_url.as_deref(), Some("https://car.example.com"));
    assert_eq!(
        car.screenshot_url.as_deref(),
        Some("/images/projects/car-rental.png")
    );
}

#[rstest]
fn projects_serialise_in_camel_case(listing: Vec<RepoRecord>) {
    let projects = to_projects(listing, &ProjectCatalog::default());
    let json = serde_json::to_value(&projects[0]).expect("serialise project");
    assert!(json.get("starCount").is_some());
    assert!(json.get("demoUrl").is_some());
}

#[rstest]
#[case::status(FetchError::Status(403))]
#[case::transport(FetchError::Transport("connection reset".to_owned()))]
fn failures_yield_an_empty_feed(#[case] error: FetchError) {
    let source = CannedSource(Err(error));
    assert!(fetch_projects(&source, &ProjectCatalog::default()).is_empty());
}

#[rstest]
fn successful_fetch_is_projected(listing: Vec<RepoRecord>) {
    let source = CannedSource(Ok(listing));
    assert_eq!(fetch_projects(&source, &ProjectCatalog::default()).len(), 3);
}
