//! Test fixtures and cache data for officers tests
//!
//! Cache files are written into a temporary directory laid out the same way
//! as the production cache.

use serde_json::{Map, Value, json};
use shared::CacheConfig;
use tempfile::TempDir;

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const COMPANY: &'static str = "Acme Ltd";
    pub const OTHER_COMPANY: &'static str = "Globex Corp";
    pub const UNKNOWN_COMPANY: &'static str = "Nobody Inc";

    /// World Registry document: authoritative record second
    pub fn world_registry_document() -> Value {
        json!({
            "result": [
                {"people": [{"primaryName": {"fullName": "Stale Entry"}, "title": "CEO"}]},
                {"people": [
                    {"primaryName": {"fullName": "Jane Doe"}, "title": "CFO"},
                    {"primaryName": {"fullName": "John Roe"}, "title": "CEO"},
                    {"primaryName": {"fullName": "John Roe"}, "title": "Director"},
                    {"primaryName": {"fullName": "Sam Poe"}},
                    {"primaryName": null, "title": "Secretary"}
                ]}
            ]
        })
    }

    /// PDS document: first Company record holds the directors
    pub fn pds_document() -> Value {
        json!({
            "result": [
                {"kind": "Person", "directors": [{"name": "Not Included"}]},
                {"kind": "Company", "directors": [
                    {"name": "Jane Doe", "relType": "executive_director"},
                    {"primaryName": {"fullName": "Ann Lee"}, "relType": "non_executive_director"},
                    {"name": "Bo Chen", "title": "company_secretary"},
                    {"name": "Cy Park"},
                    {"relType": "director"}
                ]}
            ]
        })
    }

    /// Globex has three officers in each source, none shared
    pub fn other_world_registry_document() -> Value {
        json!({"result": [{"people": [
            {"primaryName": {"fullName": "W One"}, "title": "CEO"},
            {"primaryName": {"fullName": "W Two"}, "title": "CFO"},
            {"primaryName": {"fullName": "W Three"}, "title": "COO"}
        ]}]})
    }

    pub fn other_pds_document() -> Value {
        json!({"result": [{"kind": "Company", "directors": [
            {"name": "P One", "relType": "director"},
            {"name": "P Two", "relType": "director"},
            {"name": "P Three", "relType": "director"}
        ]}]})
    }

    /// Temporary cache directory holding both source files
    pub fn cache_dir() -> (TempDir, CacheConfig) {
        let dir = TempDir::new().expect("create temp cache dir");
        let config = CacheConfig::default().with_cache_dir(dir.path());

        let mut world_registry = Map::new();
        world_registry.insert(Self::COMPANY.to_string(), Self::world_registry_document());
        world_registry.insert(Self::OTHER_COMPANY.to_string(), Self::other_world_registry_document());

        let mut pds = Map::new();
        pds.insert(Self::COMPANY.to_string(), Self::pds_document());
        pds.insert(Self::OTHER_COMPANY.to_string(), Self::other_pds_document());

        std::fs::write(config.world_registry_path(), Value::Object(world_registry).to_string())
            .expect("write world registry cache");
        std::fs::write(config.pds_path(), Value::Object(pds).to_string()).expect("write pds cache");

        (dir, config)
    }

    /// Temporary cache directory with no files at all
    pub fn empty_cache_dir() -> (TempDir, CacheConfig) {
        let dir = TempDir::new().expect("create temp cache dir");
        let config = CacheConfig::default().with_cache_dir(dir.path());
        (dir, config)
    }
}
