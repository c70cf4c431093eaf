//! Per-user availability filtering.
//!
//! Checks run concurrently up to a configured limit. Results come back in
//! input order, so the filter is stable regardless of which check finishes
//! first. The first error (in input order) aborts the filter and in-flight
//! checks are dropped.

use super::ToolRef;
use crate::credentials::CredentialStore;
use crate::types::{Result, User};
use futures::stream::{self, StreamExt, TryStreamExt};

/// Keep the tools whose `dynamic_available` check passes for `user`.
pub async fn filter_available(
    candidates: Vec<ToolRef>,
    user: &User,
    store: &dyn CredentialStore,
    max_concurrent: usize,
) -> Result<Vec<ToolRef>> {
    let verdicts: Vec<bool> = stream::iter(candidates.iter())
        .map(|tool| tool.dynamic_available(user, store))
        .buffered(max_concurrent.max(1))
        .try_collect()
        .await?;

    let total = candidates.len();
    let kept: Vec<ToolRef> = candidates
        .into_iter()
        .zip(verdicts)
        .filter_map(|(tool, available)| {
            if !available {
                tracing::debug!("Tool {} unavailable for user={}", tool.name(), user.id);
            }
            available.then_some(tool)
        })
        .collect();

    tracing::debug!(
        "Availability filter for user={}: kept={} dropped={}",
        user.id,
        kept.len(),
        total - kept.len()
    );

    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{MemoryCredentialStore, OAuthProvider};
    use crate::tools::Tool;
    use crate::types::{Error, UserId};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    /// Test tool with a scripted verdict, delay and in-flight tracking.
    #[derive(Debug)]
    struct Scripted {
        name: &'static str,
        verdict: std::result::Result<bool, &'static str>,
        delay_ms: u64,
        in_flight: Arc<AtomicUsize>,
        peak: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Tool for Scripted {
        fn display_name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "scripted"
        }

        async fn dynamic_available(
            &self,
            _user: &User,
            _store: &dyn CredentialStore,
        ) -> Result<bool> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            self.verdict.map_err(Error::credential)
        }
    }

    struct Harness {
        in_flight: Arc<AtomicUsize>,
        peak: Arc<AtomicUsize>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                in_flight: Arc::new(AtomicUsize::new(0)),
                peak: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn tool(
            &self,
            name: &'static str,
            verdict: std::result::Result<bool, &'static str>,
            delay_ms: u64,
        ) -> ToolRef {
            Arc::new(Scripted {
                name,
                verdict,
                delay_ms,
                in_flight: self.in_flight.clone(),
                peak: self.peak.clone(),
            })
        }
    }

    fn user() -> User {
        User::new(UserId::from_string("user-1".to_string()).unwrap())
    }

    fn names(tools: &[ToolRef]) -> Vec<String> {
        tools.iter().map(|t| t.name()).collect()
    }

    #[tokio::test]
    async fn test_preserves_input_order() {
        let h = Harness::new();
        // Later tools finish first.
        let candidates = vec![
            h.tool("A", Ok(true), 40),
            h.tool("B", Ok(false), 30),
            h.tool("C", Ok(true), 20),
            h.tool("D", Ok(true), 0),
        ];
        let store = MemoryCredentialStore::new();

        let kept = filter_available(candidates, &user(), &store, 4).await.unwrap();
        assert_eq!(names(&kept), vec!["a", "c", "d"]);
    }

    #[tokio::test]
    async fn test_keeps_duplicates() {
        let h = Harness::new();
        let search = h.tool("Search", Ok(true), 0);
        let candidates = vec![search.clone(), search];
        let store = MemoryCredentialStore::new();

        let kept = filter_available(candidates, &user(), &store, 2).await.unwrap();
        assert_eq!(names(&kept), vec!["search", "search"]);
    }

    #[tokio::test]
    async fn test_concurrency_is_bounded() {
        let h = Harness::new();
        let candidates: Vec<ToolRef> = ["A", "B", "C", "D", "E", "F"]
            .into_iter()
            .map(|n| h.tool(n, Ok(true), 20))
            .collect();
        let store = MemoryCredentialStore::new();

        filter_available(candidates, &user(), &store, 2).await.unwrap();
        assert!(h.peak.load(Ordering::SeqCst) <= 2);
        assert!(h.peak.load(Ordering::SeqCst) >= 1);
    }

    #[tokio::test]
    async fn test_zero_limit_runs_sequentially() {
        let h = Harness::new();
        let candidates = vec![h.tool("A", Ok(true), 5), h.tool("B", Ok(true), 5)];
        let store = MemoryCredentialStore::new();

        filter_available(candidates, &user(), &store, 0).await.unwrap();
        assert_eq!(h.peak.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_error_aborts() {
        let h = Harness::new();
        let candidates = vec![
            h.tool("A", Ok(true), 0),
            h.tool("B", Err("oauth table unavailable"), 0),
            h.tool("C", Ok(true), 0),
        ];
        let store = MemoryCredentialStore::new();

        let err = filter_available(candidates, &user(), &store, 1).await.unwrap_err();
        assert!(matches!(err, Error::Credential(ref m) if m == "oauth table unavailable"));
    }

    #[tokio::test]
    async fn test_empty_input() {
        let store = MemoryCredentialStore::new();
        let kept = filter_available(Vec::new(), &user(), &store, 4).await.unwrap();
        assert!(kept.is_empty());
    }

    #[tokio::test]
    async fn test_uses_credential_store() {
        let store = MemoryCredentialStore::new();
        let alice = user();
        let candidates: Vec<ToolRef> = vec![Arc::new(crate::tools::builtin::Sid)];

        let kept = filter_available(candidates.clone(), &alice, &store, 1).await.unwrap();
        assert!(kept.is_empty());

        store.install(alice.id.clone(), OAuthProvider::Sid).await;
        let kept = filter_available(candidates, &alice, &store, 1).await.unwrap();
        assert_eq!(names(&kept), vec!["sid"]);
    }
}
