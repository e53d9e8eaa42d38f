//! Per-container router registration.
//!
//! A page may register several scroll containers. Each gets its own router
//! and adapter, keyed by a host-chosen container key, so a gesture in one
//! container never touches another container's session.

use crate::input_adapter::{InputAdapter, InputCapabilities};
use std::collections::HashMap;
use std::hash::Hash;
use swerve_foundation::{GestureIntentRouter, HorizontalRegionResolver};

pub struct RegisteredContainer<R: HorizontalRegionResolver> {
    pub router: GestureIntentRouter<R>,
    pub adapter: InputAdapter,
}

pub struct RouterSet<K, R: HorizontalRegionResolver> {
    containers: HashMap<K, RegisteredContainer<R>>,
    capabilities: InputCapabilities,
}

impl<K: Eq + Hash, R: HorizontalRegionResolver> RouterSet<K, R> {
    pub fn new(capabilities: InputCapabilities) -> Self {
        Self {
            containers: HashMap::new(),
            capabilities,
        }
    }

    /// Registers `router` under `key`, replacing any previous registration.
    pub fn register(
        &mut self,
        key: K,
        router: GestureIntentRouter<R>,
    ) -> Option<RegisteredContainer<R>> {
        let adapter = InputAdapter::select(self.capabilities);
        self.containers
            .insert(key, RegisteredContainer { router, adapter })
    }

    pub fn unregister(&mut self, key: &K) -> Option<RegisteredContainer<R>> {
        self.containers.remove(key)
    }

    pub fn get(&self, key: &K) -> Option<&RegisteredContainer<R>> {
        self.containers.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut RegisteredContainer<R>> {
        self.containers.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Number of containers with a gesture in progress.
    pub fn active_sessions(&self) -> usize {
        self.containers
            .values()
            .filter(|container| container.router.has_session())
            .count()
    }

    /// Cancels every in-progress gesture, e.g. when the page loses focus.
    pub fn cancel_all(&mut self) {
        for container in self.containers.values_mut() {
            container.router.on_gesture_cancel();
            container.adapter = InputAdapter::select(self.capabilities);
        }
    }
}
