use crate::ast;
use indexmap::IndexMap;

/// A GraphQL input literal exactly as it was written in an executable
/// document.
///
/// [`Value::Int`] and [`Value::Float`] keep the literal's raw text. Turning
/// that text into a number happens when arguments are decoded, so a malformed
/// numeric literal surfaces as a parse error at that point rather than being
/// silently coerced here.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(String),
    Int(String),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
    Variable(String),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// The syntactic category of this literal.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Boolean(_) => ValueKind::BooleanValue,
            Self::Enum(_) => ValueKind::EnumValue,
            Self::Float(_) => ValueKind::FloatValue,
            Self::Int(_) => ValueKind::IntValue,
            Self::List(_) => ValueKind::ListValue,
            Self::Null => ValueKind::NullValue,
            Self::Object(_) => ValueKind::ObjectValue,
            Self::String(_) => ValueKind::StringValue,
            Self::Variable(_) => ValueKind::Variable,
        }
    }

    pub(crate) fn from_ast(ast_value: &ast::Value) -> Self {
        match ast_value {
            ast::Value::Variable(var_name) =>
                Value::Variable(var_name.clone()),

            ast::Value::Int(number) =>
                Value::Int(
                    number.as_i64()
                        .map(|int| int.to_string())
                        .unwrap_or_default(),
                ),

            ast::Value::Float(value) =>
                Value::Float(value.to_string()),

            ast::Value::String(value) =>
                Value::String(value.clone()),

            ast::Value::Boolean(value) =>
                Value::Boolean(*value),

            ast::Value::Null =>
                Value::Null,

            ast::Value::Enum(value) =>
                Value::Enum(value.clone()),

            ast::Value::List(values) =>
                Value::List(values.iter().map(Value::from_ast).collect()),

            // graphql_parser stores object fields in a BTreeMap, so the
            // original field order is already lost by this point.
            ast::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, ast_value)|
                    (key.clone(), Value::from_ast(ast_value))
                ).collect()),
        }
    }
}

/// The syntactic category of a [`Value`].
///
/// Serializes using the node-kind names GraphQL execution engines use for
/// value nodes (`"IntValue"`, `"Variable"`, `"ListValue"`, ...).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ValueKind {
    BooleanValue,
    EnumValue,
    FloatValue,
    IntValue,
    ListValue,
    NullValue,
    ObjectValue,
    StringValue,
    Variable,
}
impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BooleanValue => "BooleanValue",
            Self::EnumValue => "EnumValue",
            Self::FloatValue => "FloatValue",
            Self::IntValue => "IntValue",
            Self::ListValue => "ListValue",
            Self::NullValue => "NullValue",
            Self::ObjectValue => "ObjectValue",
            Self::StringValue => "StringValue",
            Self::Variable => "Variable",
        }
    }
}
impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
