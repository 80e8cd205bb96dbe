use indexmap::IndexSet;

/// Configuration for a single [`flatten()`](crate::flatten::flatten) call.
///
/// Deserializes from the camelCase keys hosts commonly pass around as JSON:
///
/// ```
/// use libgraphql_fields::flatten::FlattenOptions;
///
/// let options: FlattenOptions = serde_json::from_str(
///     r#"{ "decodeArguments": true, "excludedFieldNames": ["__typename"] }"#,
/// ).unwrap();
///
/// assert!(options.decode_arguments);
/// assert!(options.excluded_field_names.contains("__typename"));
/// assert!(!options.use_alias_as_key);
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlattenOptions {
    /// Record each field's decoded arguments under `__arguments`.
    pub decode_arguments: bool,

    /// Output keys which are dropped, along with everything beneath them.
    pub excluded_field_names: IndexSet<String>,

    /// Key aliased fields as `alias:name` instead of `name`.
    pub use_alias_as_key: bool,
}
impl FlattenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decode_arguments(mut self, decode_arguments: bool) -> Self {
        self.decode_arguments = decode_arguments;
        self
    }

    pub fn with_excluded_field_names<I, S>(mut self, field_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_field_names.extend(field_names.into_iter().map(Into::into));
        self
    }

    pub fn with_use_alias_as_key(mut self, use_alias_as_key: bool) -> Self {
        self.use_alias_as_key = use_alias_as_key;
        self
    }
}
