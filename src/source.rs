//! Read-only key-value sources backing the typed accessors.
//!
//! The accessor never reads the process environment directly; it goes through
//! a [`Source`] so tests can inject a synthetic map instead of mutating real
//! process state.

use std::collections::{BTreeMap, HashMap};

/// A read-only mapping from variable name to raw string value.
pub trait Source {
    /// Look up the raw value for `name`, or `None` when the variable is not
    /// present in the source.
    fn get(&self, name: &str) -> Option<String>;
}

/// The live process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl Source for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        // A value that is not valid Unicode is treated as absent.
        std::env::var(name).ok()
    }
}

impl Source for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl Source for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use parking_lot::Mutex;

    use super::*;

    // The process environment is global; tests that touch it take this lock.
    static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

    #[test]
    fn process_env_reads_live_variables() {
        let _guard = ENV_LOCK.lock();
        std::env::set_var("TYPENV_SOURCE_TEST", "value");
        assert_eq!(
            ProcessEnv.get("TYPENV_SOURCE_TEST"),
            Some("value".to_string())
        );

        std::env::remove_var("TYPENV_SOURCE_TEST");
        assert_eq!(ProcessEnv.get("TYPENV_SOURCE_TEST"), None);
    }

    #[test]
    fn map_sources_return_owned_values() {
        let mut hash = HashMap::new();
        hash.insert("KEY".to_string(), "hash".to_string());
        assert_eq!(Source::get(&hash, "KEY"), Some("hash".to_string()));
        assert_eq!(Source::get(&hash, "MISSING"), None);

        let mut tree = BTreeMap::new();
        tree.insert("KEY".to_string(), "tree".to_string());
        assert_eq!(Source::get(&tree, "KEY"), Some("tree".to_string()));
        assert_eq!(Source::get(&tree, "MISSING"), None);
    }

    #[test]
    fn reference_to_source_is_a_source() {
        fn lookup(source: impl Source, name: &str) -> Option<String> {
            source.get(name)
        }

        let mut map = HashMap::new();
        map.insert("KEY".to_string(), "value".to_string());
        assert_eq!(lookup(&map, "KEY"), Some("value".to_string()));
    }
}
