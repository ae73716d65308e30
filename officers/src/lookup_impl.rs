//! Key officers lookup service
//!
//! Wires the cache reader into the pure transforms: read both sources,
//! normalize each, merge, and render the capped payload. Each call is
//! self-contained; the service holds only the reader.

use std::sync::Arc;
use std::time::{Duration, Instant};

use shared::{ProcessId, RequestId, process_debug, process_info};

use crate::core::{
    assemble_response, document_len, merge_officers, normalize_pds, normalize_world_registry,
};
use crate::traits::CacheReader;
use crate::types::{KeyOfficersResponse, PING_MESSAGE, Source};

/// Lookup service with an injected cache reader
pub struct KeyOfficersService<R: CacheReader> {
    reader: Arc<R>,
}

impl<R: CacheReader> Clone for KeyOfficersService<R> {
    fn clone(&self) -> Self {
        Self {
            reader: Arc::clone(&self.reader),
        }
    }
}

impl<R: CacheReader> KeyOfficersService<R> {
    /// Create a service over a cache reader
    pub fn new(reader: R) -> Self {
        Self {
            reader: Arc::new(reader),
        }
    }

    /// Look up, merge and summarise the key officers of a company
    ///
    /// Per-source lists hold at most `top_n` rows, the combined list twice
    /// that. Unavailable sources contribute empty lists and zero counts.
    pub async fn get_key_officers(&self, company_name: &str, top_n: usize) -> KeyOfficersResponse {
        let request_id = RequestId::new();
        process_info!(ProcessId::current(), request_id = %request_id, "company={}", company_name);

        let started = Instant::now();
        let (wr_doc, pds_doc) = tokio::join!(
            self.reader.fetch(Source::WorldRegistry, company_name),
            self.reader.fetch(Source::Pds, company_name),
        );
        let load_caches_ms = round_millis(started.elapsed());

        process_debug!(
            ProcessId::current(),
            request_id = %request_id,
            "document sizes: wr={} pds={}",
            document_len(&wr_doc),
            document_len(&pds_doc)
        );
        process_info!(
            ProcessId::current(),
            request_id = %request_id,
            "loaded caches in {:.1} ms",
            load_caches_ms
        );

        let world_registry = normalize_world_registry(&wr_doc);
        let pds = normalize_pds(&pds_doc);
        let combined = merge_officers(&[&world_registry, &pds]);
        process_info!(
            ProcessId::current(),
            request_id = %request_id,
            "merged combined={}",
            combined.len()
        );

        assemble_response(company_name, &world_registry, &pds, &combined, top_n, load_caches_ms)
    }

    /// Liveness check
    pub fn ping(&self) -> &'static str {
        PING_MESSAGE
    }
}

/// Milliseconds rounded to two decimals
fn round_millis(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockCacheReader;
    use crate::types::{OfficerCounts, OfficerRecord, RawDocument};
    use serde_json::json;

    fn world_registry_doc() -> RawDocument {
        json!({"result": [
            {"people": []},
            {"people": [{"primaryName": {"fullName": "Jane Doe"}, "title": "CFO"}]}
        ]})
    }

    fn pds_doc() -> RawDocument {
        json!({"result": [{
            "kind": "Company",
            "directors": [{"name": "Jane Doe", "relType": "executive_director"}]
        }]})
    }

    fn service_with(wr: RawDocument, pds: RawDocument) -> KeyOfficersService<MockCacheReader> {
        let mut reader = MockCacheReader::new();
        reader
            .expect_fetch()
            .times(2)
            .returning(move |source, _| match source {
                Source::WorldRegistry => wr.clone(),
                Source::Pds => pds.clone(),
            });
        KeyOfficersService::new(reader)
    }

    #[tokio::test]
    async fn test_merges_both_sources() {
        let service = service_with(world_registry_doc(), pds_doc());

        let response = service.get_key_officers("Acme Ltd", 10).await;

        assert_eq!(response.company, "Acme Ltd");
        assert_eq!(
            response.key_officers.world_registry,
            vec![OfficerRecord { name: "Jane Doe".into(), title: "CFO".into() }]
        );
        assert_eq!(
            response.key_officers.pds,
            vec![OfficerRecord { name: "Jane Doe".into(), title: "Executive Director".into() }]
        );
        assert_eq!(
            response.key_officers.combined,
            vec![OfficerRecord {
                name: "Jane Doe".into(),
                title: "CFO, Executive Director".into()
            }]
        );
        assert_eq!(response.counts, OfficerCounts { wr: 1, pds: 1, combined: 1 });
        assert!(response.timing_ms.load_caches >= 0.0);
    }

    #[tokio::test]
    async fn test_missing_documents_give_empty_payload() {
        let service = service_with(json!({}), json!({}));

        let response = service.get_key_officers("Nobody Inc", 10).await;

        assert!(response.key_officers.world_registry.is_empty());
        assert!(response.key_officers.pds.is_empty());
        assert!(response.key_officers.combined.is_empty());
        assert_eq!(response.counts, OfficerCounts::default());
    }

    #[tokio::test]
    async fn test_top_n_caps_lists_not_counts() {
        let people: Vec<_> = ["A One", "B Two", "C Three"]
            .iter()
            .map(|name| json!({"primaryName": {"fullName": name}, "title": "Officer"}))
            .collect();
        let directors: Vec<_> = ["D Four", "E Five", "F Six"]
            .iter()
            .map(|name| json!({"name": name, "relType": "director"}))
            .collect();
        let service = service_with(
            json!({"result": [{"people": people}]}),
            json!({"result": [{"kind": "Company", "directors": directors}]}),
        );

        let response = service.get_key_officers("Acme Ltd", 1).await;

        assert_eq!(response.key_officers.world_registry.len(), 1);
        assert_eq!(response.key_officers.pds.len(), 1);
        assert_eq!(response.key_officers.combined.len(), 2);
        assert_eq!(response.counts, OfficerCounts { wr: 3, pds: 3, combined: 6 });
    }

    #[tokio::test]
    async fn test_passes_company_to_reader() {
        let mut reader = MockCacheReader::new();
        reader
            .expect_fetch()
            .withf(|_, company| company.to_string() == "Acme Ltd")
            .times(2)
            .returning(|_, _| json!({}));
        let service = KeyOfficersService::new(reader);

        let _ = service.get_key_officers("Acme Ltd", 10).await;
    }

    #[test]
    fn test_ping() {
        let service = KeyOfficersService::new(MockCacheReader::new());
        assert_eq!(service.ping(), "key_officers_agent ok");
    }

    #[test]
    fn test_round_millis() {
        assert_eq!(round_millis(Duration::from_micros(1234)), 1.23);
        assert_eq!(round_millis(Duration::from_micros(1235_600)), 1235.6);
        assert_eq!(round_millis(Duration::ZERO), 0.0);
    }
}
