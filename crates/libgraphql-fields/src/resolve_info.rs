use crate::operation::Fragment;
use crate::operation::FragmentRegistry;
use indexmap::IndexMap;
use std::sync::OnceLock;

/// Already-resolved runtime values for an operation's variables, keyed by
/// variable name (without the leading `$`).
pub type VariableValues = IndexMap<String, serde_json::Value>;

fn empty_variable_values() -> &'static VariableValues {
    static EMPTY_VARIABLE_VALUES: OnceLock<VariableValues> = OnceLock::new();
    EMPTY_VARIABLE_VALUES.get_or_init(IndexMap::new)
}

/// The read-only lookups [`flatten()`](crate::flatten::flatten) needs from
/// the host engine.
///
/// Implement this directly on a host's own resolve-info type to avoid copying
/// fragments or variables into a [`ResolveInfo`].
pub trait FlattenContext {
    /// Looks up a fragment definition by name.
    fn fragment(&self, fragment_name: &str) -> Option<&Fragment>;

    /// Looks up the runtime value of a variable by name.
    ///
    /// `None` is read as `null`.
    fn variable_value(&self, variable_name: &str) -> Option<&serde_json::Value>;
}

/// A [`FlattenContext`] that borrows a [`FragmentRegistry`] and a set of
/// [`VariableValues`].
///
/// Both are borrowed immutably, so a single registry can back any number of
/// concurrent flattens.
#[derive(Clone, Copy, Debug)]
pub struct ResolveInfo<'a> {
    fragments: &'a FragmentRegistry,
    variable_values: &'a VariableValues,
}
impl<'a> ResolveInfo<'a> {
    pub fn new(
        fragments: &'a FragmentRegistry,
        variable_values: &'a VariableValues,
    ) -> Self {
        Self {
            fragments,
            variable_values,
        }
    }

    pub fn without_variables(fragments: &'a FragmentRegistry) -> Self {
        Self::new(fragments, empty_variable_values())
    }

    pub fn fragments(&self) -> &'a FragmentRegistry {
        self.fragments
    }

    pub fn variable_values(&self) -> &'a VariableValues {
        self.variable_values
    }
}
impl FlattenContext for ResolveInfo<'_> {
    fn fragment(&self, fragment_name: &str) -> Option<&Fragment> {
        self.fragments.get(fragment_name)
    }

    fn variable_value(&self, variable_name: &str) -> Option<&serde_json::Value> {
        self.variable_values.get(variable_name)
    }
}
