use crate::operation::Fragment;
use std::collections::HashMap;
use std::sync::OnceLock;

fn empty_fragment_registry() -> &'static FragmentRegistry {
    static EMPTY_FRAGMENT_REGISTRY: OnceLock<FragmentRegistry> = OnceLock::new();
    EMPTY_FRAGMENT_REGISTRY.get_or_init(|| {
        FragmentRegistry {
            fragments: HashMap::new(),
        }
    })
}

/// An immutable name -> [`Fragment`] lookup.
///
/// Build one with
/// [`FragmentRegistryBuilder`](crate::operation::FragmentRegistryBuilder).
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentRegistry {
    pub(super) fragments: HashMap<String, Fragment>,
}

impl FragmentRegistry {
    pub fn empty() -> &'static FragmentRegistry {
        empty_fragment_registry()
    }

    pub fn fragments(&self) -> &HashMap<String, Fragment> {
        &self.fragments
    }

    pub fn get(&self, fragment_name: &str) -> Option<&Fragment> {
        self.fragments.get(fragment_name)
    }
}
