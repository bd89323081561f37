// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::entropy::CostEntropy;
use crate::l1::CostL1;
use crate::l2::CostL2;
use crate::model::Cost;
use crate::rbf::CostRbf;
use shiftpoint_core::{Error, Result};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

/// Constructor stored in the registry: returns a fresh unfitted cost.
pub type CostConstructor = fn() -> Cost;

static REGISTRY: OnceLock<RwLock<HashMap<String, CostConstructor>>> = OnceLock::new();

fn registry() -> &'static RwLock<HashMap<String, CostConstructor>> {
    REGISTRY.get_or_init(|| {
        let mut map: HashMap<String, CostConstructor> = HashMap::new();
        map.insert("l1".to_string(), || Cost::L1(CostL1::new()));
        map.insert("l2".to_string(), || Cost::L2(CostL2::new()));
        map.insert("rbf".to_string(), || Cost::Rbf(CostRbf::new(None)));
        map.insert("entropy".to_string(), || Cost::Entropy(CostEntropy::new()));
        RwLock::new(map)
    })
}

/// Creates a fresh unfitted cost for a registered model name.
///
/// Fails with `NoSuchModel` for unknown names. Takes only a read lock, so
/// concurrent creation is uncontended once the registry is populated.
pub fn new_cost(model: &str) -> Result<Cost> {
    let map = registry().read().expect("cost registry lock poisoned");
    match map.get(model) {
        Some(constructor) => Ok(constructor()),
        None => Err(Error::no_such_model(format!(
            "cost function model '{model}' is not registered"
        ))),
    }
}

/// Registers an additional cost constructor under `model`.
///
/// Registering a name twice is a programming fault and panics with the
/// `DuplicateModel` message; the built-in names (`l1`, `l2`, `rbf`,
/// `entropy`) are claimed on first registry access.
pub fn register_cost_function(model: &str, constructor: CostConstructor) {
    let mut map = registry().write().expect("cost registry lock poisoned");
    if map.contains_key(model) {
        // Release the guard first so the panic cannot poison the registry.
        drop(map);
        panic!(
            "{}",
            Error::duplicate_model(format!(
                "cost function model '{model}' is already registered"
            ))
        );
    }
    map.insert(model.to_string(), constructor);
}
