use crate::ValueKind;
use indexmap::IndexMap;

/// The key under which a field's decoded arguments appear when a
/// [`FieldMap`] is serialized.
pub const ARGUMENTS_KEY: &str = "__arguments";

/// One decoded argument: `{ <argumentName>: { kind, value } }`.
///
/// Always holds exactly one entry. A sequence of single-entry maps (rather
/// than one map) is the shape resolvers written against other GraphQL
/// field-projection tools already consume.
pub type ArgumentEntry = IndexMap<String, DecodedArgument>;

/// An argument literal after decoding.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DecodedArgument {
    /// The syntactic category of the literal as written in the document.
    pub kind: ValueKind,

    /// The decoded value. Variables are replaced with their runtime values.
    pub value: serde_json::Value,
}

/// The flattened set of fields requested beneath one field.
///
/// Maps each output key (a field name, or `alias:name` when alias keys are
/// enabled) to the [`FieldMap`] of that field's own sub-selections. Leaf
/// fields map to an empty [`FieldMap`]. Keys keep the order in which they
/// were first seen.
///
/// When argument decoding is enabled, a field's arguments are stored
/// alongside its sub-fields and serialize under [`ARGUMENTS_KEY`]:
///
/// ```json
/// { "hobbies": { "name": {}, "__arguments": [{ "first": { "kind": "IntValue", "value": 2 } }] } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct FieldMap {
    #[serde(flatten)]
    pub(crate) fields: IndexMap<String, FieldMap>,

    #[serde(rename = "__arguments", skip_serializing_if = "Option::is_none")]
    pub(crate) arguments: Option<Vec<ArgumentEntry>>,
}
impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert()`](Self::insert), handy for seeding a flatten
    /// or writing out an expected map.
    pub fn with_field(mut self, key: impl Into<String>, nested: FieldMap) -> Self {
        self.insert(key, nested);
        self
    }

    /// The decoded arguments of the last occurrence of this field that
    /// carried arguments, if argument decoding was enabled.
    pub fn arguments(&self) -> Option<&[ArgumentEntry]> {
        self.arguments.as_deref()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn fields(&self) -> &IndexMap<String, FieldMap> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&FieldMap> {
        self.fields.get(key)
    }

    /// Follows `path` down through nested maps.
    pub fn get_path(&self, path: &[&str]) -> Option<&FieldMap> {
        path.iter().try_fold(self, |map, key| map.get(key))
    }

    pub fn insert(&mut self, key: impl Into<String>, nested: FieldMap) -> Option<FieldMap> {
        self.fields.insert(key.into(), nested)
    }

    /// True when no fields (and no arguments) are recorded.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.arguments.is_none()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, FieldMap> {
        self.fields.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, FieldMap> {
        self.fields.keys()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn to_json(&self) -> serde_json::Value {
        // A FieldMap only contains string keys and JSON values, so this
        // conversion cannot fail.
        serde_json::to_value(self).unwrap_or_default()
    }
}
impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a String, &'a FieldMap);
    type IntoIter = indexmap::map::Iter<'a, String, FieldMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
