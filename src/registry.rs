use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use log::debug;

/// A registered concrete type with the capability names it provides.
#[derive(Debug, Clone)]
struct Registration {
    type_name: String,
    capabilities: Vec<String>,
}

/// Lookup service answering "which registered types provide this
/// capability?", memoizing each answer until invalidated.
///
/// Construct one instance and hand it by reference to consumers; there is
/// no process-global registry.
#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    registrations: Mutex<Vec<Registration>>,
    memo: Mutex<HashMap<String, Vec<String>>>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        CapabilityRegistry::default()
    }

    /// Declares a concrete type and the capabilities it provides. Every
    /// memoized lookup is invalidated.
    pub fn register(
        &self,
        type_name: impl Into<String>,
        capabilities: impl IntoIterator<Item = impl Into<String>>,
    ) {
        let registration = Registration {
            type_name: type_name.into(),
            capabilities: capabilities.into_iter().map(Into::into).collect(),
        };
        debug!(
            "Registering type {:?} with {} capability name(s).",
            registration.type_name,
            registration.capabilities.len()
        );
        self.lock_registrations().push(registration);
        self.invalidate();
    }

    /// All type names providing `capability`, in registration order.
    /// Computed on the first request and memoized afterwards. Two racing
    /// first requests may both compute; they arrive at the same answer.
    pub fn types_of(&self, capability: &str) -> Vec<String> {
        if let Some(hit) = self.lock_memo().get(capability) {
            return hit.clone();
        }

        let computed: Vec<String> = self
            .lock_registrations()
            .iter()
            .filter(|registration| {
                registration
                    .capabilities
                    .iter()
                    .any(|name| name == capability)
            })
            .map(|registration| registration.type_name.clone())
            .collect();

        debug!(
            "Capability {:?} resolved to {} type(s).",
            capability,
            computed.len()
        );
        self.lock_memo()
            .insert(capability.to_string(), computed.clone());
        computed
    }

    /// Drops every memoized lookup; registrations are kept.
    pub fn invalidate(&self) {
        self.lock_memo().clear();
    }

    pub fn len(&self) -> usize {
        self.lock_registrations().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_registrations().is_empty()
    }

    fn lock_registrations(&self) -> MutexGuard<'_, Vec<Registration>> {
        self.registrations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_memo(&self) -> MutexGuard<'_, HashMap<String, Vec<String>>> {
        self.memo
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
