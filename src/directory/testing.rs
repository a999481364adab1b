//! Scripted in-memory directory for unit tests.

use super::backend::CountryDirectory;
use crate::domain::{Country, CountryError, Operation, Result};
use crate::infrastructure::CancellationToken;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Search(String),
    FetchSelected,
    Persist(String),
    Delete(String),
}

#[derive(Default)]
struct Script {
    results: HashMap<String, Vec<Country>>,
    search_delay: Duration,
    ignore_cancel: bool,
    failing: HashSet<Operation>,
    selected: Vec<Country>,
    persist_reply: Option<Country>,
    calls: Vec<Call>,
}

#[derive(Default)]
pub(crate) struct FakeDirectory {
    script: Mutex<Script>,
}

impl FakeDirectory {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_results(self, query: &str, results: Vec<Country>) -> Self {
        self.edit(|s| {
            s.results.insert(query.to_string(), results);
        });
        self
    }

    pub(crate) fn with_search_delay(self, delay: Duration) -> Self {
        self.edit(|s| s.search_delay = delay);
        self
    }

    /// Keeps answering searches even after the token fires, like a transport
    /// that completes before it notices cancellation.
    pub(crate) fn ignoring_cancel(self) -> Self {
        self.edit(|s| s.ignore_cancel = true);
        self
    }

    pub(crate) fn with_selected(self, selected: Vec<Country>) -> Self {
        self.edit(|s| s.selected = selected);
        self
    }

    pub(crate) fn with_persist_reply(self, reply: Country) -> Self {
        self.edit(|s| s.persist_reply = Some(reply));
        self
    }

    pub(crate) fn failing(self, operation: Operation) -> Self {
        self.fail(operation);
        self
    }

    pub(crate) fn fail(&self, operation: Operation) {
        self.edit(|s| {
            s.failing.insert(operation);
        });
    }

    pub(crate) fn recover(&self, operation: Operation) {
        self.edit(|s| {
            s.failing.remove(&operation);
        });
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.edit(|s| s.calls.clone())
    }

    pub(crate) fn search_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Search(query) => Some(query),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn persisted(&self) -> Vec<Country> {
        self.edit(|s| s.selected.clone())
    }

    fn edit<T>(&self, f: impl FnOnce(&mut Script) -> T) -> T {
        let mut script = self.script.lock().unwrap();
        f(&mut script)
    }

    fn check(&self, operation: Operation, call: Call) -> Result<()> {
        self.edit(|s| {
            s.calls.push(call);
            if s.failing.contains(&operation) {
                Err(CountryError::network(operation, Some(500), "scripted failure"))
            } else {
                Ok(())
            }
        })
    }
}

#[async_trait]
impl CountryDirectory for FakeDirectory {
    async fn search_by_name(&self, query: &str, cancel: &CancellationToken) -> Result<Vec<Country>> {
        let (delay, ignore_cancel) = self.edit(|s| (s.search_delay, s.ignore_cancel));
        self.check(Operation::Search, Call::Search(query.to_string()))?;

        if ignore_cancel {
            tokio::time::sleep(delay).await;
        } else {
            tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(CountryError::Cancelled),
                () = tokio::time::sleep(delay) => {}
            }
        }

        Ok(self.edit(|s| s.results.get(query).cloned().unwrap_or_default()))
    }

    async fn fetch_selected(&self) -> Result<Vec<Country>> {
        self.check(Operation::LoadSelected, Call::FetchSelected)?;
        Ok(self.persisted())
    }

    async fn persist_selected(&self, country: &Country) -> Result<Country> {
        self.check(Operation::SaveSelected, Call::Persist(country.code.clone()))?;
        Ok(self.edit(|s| {
            let stored = s.persist_reply.clone().unwrap_or_else(|| country.clone());
            match s.selected.iter_mut().find(|c| c.code == stored.code) {
                Some(existing) => *existing = stored.clone(),
                None => s.selected.push(stored.clone()),
            }
            stored
        }))
    }

    async fn delete_selected(&self, country: &Country) -> Result<()> {
        self.check(Operation::RemoveSelected, Call::Delete(country.code.clone()))?;
        self.edit(|s| s.selected.retain(|c| c.code != country.code));
        Ok(())
    }
}
