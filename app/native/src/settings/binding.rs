//! Generic "set field by path" updates.
//!
//! A [`Binding`] names a field by its camelCase snapshot path (`windowGap`,
//! `activeWindowBorderColor.alpha`) and carries the new value as JSON. Applying
//! it round-trips the record through `serde_json`, so any field reachable in
//! the snapshot can be bound without a dedicated command.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A single field assignment addressed by path.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    path: String,
    value: Value,
}

impl Binding {
    /// Creates a binding for the dot-separated `path`.
    #[must_use]
    pub fn new(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { path: path.into(), value: value.into() }
    }

    /// The dot-separated field path.
    #[must_use]
    pub fn path(&self) -> &str { &self.path }

    /// The value to assign.
    #[must_use]
    pub const fn value(&self) -> &Value { &self.value }

    /// Converts the dot-separated path into a JSON pointer.
    fn pointer(&self) -> String {
        self.path.split('.').map(str::trim).fold(String::new(), |mut acc, segment| {
            acc.push('/');
            acc.push_str(segment);
            acc
        })
    }

    /// Applies the binding to `state`.
    ///
    /// Never fails: an unknown path or a value of the wrong type returns
    /// `state` unchanged and logs a warning.
    #[must_use]
    pub fn apply<S>(&self, state: S) -> S
    where
        S: Serialize + DeserializeOwned,
    {
        if self.path.trim().is_empty() {
            tracing::warn!("binding: ignoring binding with an empty path");
            return state;
        }

        let mut tree = match serde_json::to_value(&state) {
            Ok(tree) => tree,
            Err(err) => {
                tracing::warn!(path = %self.path, error = %err, "binding: state is not bindable");
                return state;
            }
        };

        let Some(slot) = tree.pointer_mut(&self.pointer()) else {
            tracing::warn!(path = %self.path, "binding: unknown field path");
            return state;
        };
        *slot = self.value.clone();

        match serde_json::from_value(tree) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(
                    path = %self.path,
                    value = %self.value,
                    error = %err,
                    "binding: value does not fit field"
                );
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        window_gap: u32,
        nested: Nested,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Nested {
        alpha: u8,
    }

    fn sample() -> Sample {
        Sample {
            window_gap: 0,
            nested: Nested { alpha: 255 },
        }
    }

    #[test]
    fn test_binding_sets_top_level_field() {
        let next = Binding::new("windowGap", 12).apply(sample());
        assert_eq!(next.window_gap, 12);
    }

    #[test]
    fn test_binding_sets_nested_field() {
        let next = Binding::new("nested.alpha", 128).apply(sample());
        assert_eq!(next.nested.alpha, 128);
    }

    #[test]
    fn test_unknown_path_is_noop() {
        let next = Binding::new("doesNotExist", 1).apply(sample());
        assert_eq!(next, sample());
    }

    #[test]
    fn test_type_mismatch_is_noop() {
        let next = Binding::new("windowGap", json!("wide")).apply(sample());
        assert_eq!(next, sample());

        let next = Binding::new("nested.alpha", 1000).apply(sample());
        assert_eq!(next, sample());
    }

    #[test]
    fn test_empty_path_is_noop() {
        let next = Binding::new("", json!({ "windowGap": 3 })).apply(sample());
        assert_eq!(next, sample());
    }
}
