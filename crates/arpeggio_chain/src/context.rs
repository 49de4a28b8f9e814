//! Shared execution context for chain runs.

use arpeggio_error::{ArpeggioResult, ChainError, ChainErrorKind};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// The mutable key-value state shared across all steps of one chain run.
///
/// Keys hold arbitrary JSON values and are only ever added or overwritten
/// during a run; the type deliberately exposes no removal operation. Every
/// step handler receives a mutable reference and may read or write any key,
/// declared or not. The well-known keys the built-in handlers use are
/// documented on each handler.
///
/// # Examples
///
/// ```
/// use arpeggio_chain::ChainContext;
/// use serde_json::json;
///
/// let mut context = ChainContext::new();
/// context.insert("puzzle", json!({"size": 3}));
///
/// assert!(context.contains_key("puzzle"));
/// assert_eq!(context.get("puzzle").unwrap()["size"], json!(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ChainContext {
    entries: Map<String, Value>,
}

impl ChainContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context seeded with caller-supplied variables.
    pub fn seeded(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Store `value` under `key`, returning the previous value if the key
    /// was already present. Later steps may overwrite earlier keys; nothing
    /// is protected.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up a key and deserialize it into the shape a handler expects.
    ///
    /// A missing key is a [`ChainErrorKind::MissingContextKey`] error; a
    /// present key of the wrong shape is
    /// [`ChainErrorKind::InvalidContextValue`].
    pub fn require<T: DeserializeOwned>(&self, key: &str) -> ArpeggioResult<T> {
        let value = self
            .entries
            .get(key)
            .ok_or_else(|| ChainError::new(ChainErrorKind::MissingContextKey(key.to_string())))?;
        serde_json::from_value(value.clone()).map_err(|e| {
            ChainError::new(ChainErrorKind::InvalidContextValue {
                key: key.to_string(),
                message: e.to_string(),
            })
            .into()
        })
    }

    /// Whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate the keys currently in the context.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Number of keys in the context.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the context holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// View the context as a template variable mapping.
    pub fn vars(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Consume the context, returning the underlying mapping.
    pub fn into_inner(self) -> Map<String, Value> {
        self.entries
    }
}

impl From<Map<String, Value>> for ChainContext {
    fn from(entries: Map<String, Value>) -> Self {
        Self::seeded(entries)
    }
}
