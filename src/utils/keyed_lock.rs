use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::OwnedMutexGuard;

type Slot = Arc<tokio::sync::Mutex<()>>;

// A slot stays in the map while any caller holds or awaits it; users counts those callers.
#[derive(Debug)]
struct Entry {
    slot: Slot,
    users: usize,
}

// KeyedLocks hands out one async mutex per key, so operations on the same key run in
// the order they asked for the lock while operations on other keys proceed untouched.
#[derive(Debug, Default)]
pub(crate) struct KeyedLocks {
    slots: Mutex<HashMap<String, Entry>>,
}

impl KeyedLocks {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn lock(&self, key: &str) -> KeyGuard<'_> {
        // registered before the wait, so a caller cancelled mid-wait still releases its entry
        let lease = SlotLease::register(self, key);
        let guard = lease.slot.clone().lock_owned().await;
        KeyGuard {
            _guard: guard,
            _lease: lease,
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[derive(Debug)]
struct SlotLease<'a> {
    owner: &'a KeyedLocks,
    key: String,
    slot: Slot,
}

impl<'a> SlotLease<'a> {
    fn register(owner: &'a KeyedLocks, key: &str) -> Self {
        let mut slots = owner.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let entry = slots.entry(key.to_string()).or_insert_with(|| Entry {
            slot: Slot::default(),
            users: 0,
        });
        entry.users += 1;
        SlotLease {
            owner,
            key: key.to_string(),
            slot: entry.slot.clone(),
        }
    }
}

impl Drop for SlotLease<'_> {
    fn drop(&mut self) {
        let mut slots = self.owner.slots.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = slots.get_mut(&self.key) {
            entry.users -= 1;
            if entry.users == 0 {
                slots.remove(&self.key);
            }
        }
    }
}

// Fields drop in order: the mutex is released before the lease gives up the entry.
#[derive(Debug)]
pub(crate) struct KeyGuard<'a> {
    _guard: OwnedMutexGuard<()>,
    _lease: SlotLease<'a>,
}
