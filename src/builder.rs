//! Configuration of the k-per-cluster selector.
//!
//! `SelectKFromClusters` is built once with `with_*` methods and stays fixed
//! for the lifetime of the instance; the selection itself lives in
//! `crate::selector`.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectKFromClusters {
    /// Items requested per cluster (default 1).
    pub(crate) k: usize,
    /// Keep repeated row indices in the output (default false).
    pub(crate) allow_duplicate: bool,
    /// Seed for the random fallback when no centers are available.
    /// `None` draws a fresh seed on every selection.
    pub(crate) seed: Option<u64>,
    /// Process clusters with rayon (default false).
    pub(crate) parallel: bool,
}

impl Default for SelectKFromClusters {
    fn default() -> Self {
        debug!("Creating SelectKFromClusters with default parameters");
        Self {
            k: 1,
            allow_duplicate: false,
            seed: None,
            parallel: false,
        }
    }
}

impl SelectKFromClusters {
    pub fn new() -> Self {
        info!("Initializing new SelectKFromClusters");
        Self::default()
    }

    /// Select `k` items from each cluster.
    ///
    /// `k` has to be positive; a zero is rejected when selecting.
    pub fn with_k(mut self, k: usize) -> Self {
        info!("Setting items per cluster: k={}", k);
        if k == 0 {
            warn!("k=0 selects nothing and will be rejected at selection time");
        }
        self.k = k;
        self
    }

    /// Whether the same item may be selected more than once.
    pub fn with_allow_duplicate(mut self, allow_duplicate: bool) -> Self {
        info!("Setting allow_duplicate: {}", allow_duplicate);
        self.allow_duplicate = allow_duplicate;
        self
    }

    /// Set a seed for reproducible random selection.
    pub fn with_seed(mut self, seed: u64) -> Self {
        info!("Setting custom selection seed: {}", seed);
        self.seed = Some(seed);
        self
    }

    /// Select clusters in parallel. Output is identical to the sequential
    /// path for the same seed.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        info!("Setting parallel cluster processing: {}", parallel);
        self.parallel = parallel;
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn allow_duplicate(&self) -> bool {
        self.allow_duplicate
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn config_typed(&self) -> HashMap<String, ConfigValue> {
        let mut config = HashMap::new();

        config.insert("k".to_string(), ConfigValue::Usize(self.k));
        config.insert(
            "allow_duplicate".to_string(),
            ConfigValue::Bool(self.allow_duplicate),
        );
        config.insert("seed".to_string(), ConfigValue::OptionU64(self.seed));
        config.insert("parallel".to_string(), ConfigValue::Bool(self.parallel));

        config
    }
}

impl fmt::Display for SelectKFromClusters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SelectKFromClusters(k={}, allow_duplicate={}, seed={}, parallel={})",
            self.k,
            self.allow_duplicate,
            self.seed.map_or("None".to_string(), |v| v.to_string()),
            self.parallel
        )
    }
}

/// Configuration value that can hold different types while preserving type information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigValue {
    Bool(bool),
    Usize(usize),
    OptionU64(Option<u64>),
}

impl ConfigValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_usize(&self) -> Option<usize> {
        match self {
            ConfigValue::Usize(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            ConfigValue::OptionU64(v) => *v,
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(v) => write!(f, "{}", v),
            ConfigValue::Usize(v) => write!(f, "{}", v),
            ConfigValue::OptionU64(opt) => match opt {
                Some(v) => write!(f, "{}", v),
                None => write!(f, "None"),
            },
        }
    }
}
