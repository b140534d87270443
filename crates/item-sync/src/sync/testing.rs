//! In-memory fakes for controller tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{DomainError, DomainResult, Item};
use crate::repository::Repository;
use super::notifier::Notifier;

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    prompts: Mutex<Vec<String>>,
    errors: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub(crate) fn errors(&self) -> Vec<(String, String)> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn prompt(&self, message: &str) {
        self.prompts.lock().unwrap().push(message.to_string());
    }

    fn notify_error(&self, title: &str, message: &str) {
        self.errors
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    List,
    Create(Item),
    Update(Item),
    Delete(u32),
}

/// Collection kept in memory; every call is logged and either side can be
/// made to fail.
#[derive(Default)]
pub(crate) struct RecordingResource {
    items: Mutex<Vec<Item>>,
    calls: Mutex<Vec<Call>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl RecordingResource {
    pub(crate) fn with_items(items: Vec<Item>) -> Self {
        let resource = Self::default();
        *resource.items.lock().unwrap() = items;
        resource
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn items(&self) -> Vec<Item> {
        self.items.lock().unwrap().clone()
    }

    pub(crate) fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_write(&self) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(DomainError::Network("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Repository<Item> for RecordingResource {
    async fn list(&self) -> DomainResult<Vec<Item>> {
        self.record(Call::List);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::Network("connection refused".to_string()));
        }
        Ok(self.items())
    }

    async fn create(&self, entity: &Item) -> DomainResult<()> {
        self.record(Call::Create(entity.clone()));
        self.check_write()?;
        self.items.lock().unwrap().push(entity.clone());
        Ok(())
    }

    async fn update(&self, entity: &Item) -> DomainResult<()> {
        self.record(Call::Update(entity.clone()));
        self.check_write()?;
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|item| item.id == entity.id) {
            Some(item) => {
                *item = entity.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound(format!("item {}", entity.id))),
        }
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        self.record(Call::Delete(id));
        self.check_write()?;
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() < before {
            Ok(())
        } else {
            Err(DomainError::NotFound(format!("item {}", id)))
        }
    }
}
