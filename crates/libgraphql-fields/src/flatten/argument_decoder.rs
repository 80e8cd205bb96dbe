use crate::ArgumentEntry;
use crate::DecodedArgument;
use crate::FlattenContext;
use crate::flatten::FlattenError;
use crate::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, FlattenError>;

/// Decodes every argument of a field into its `{ name: { kind, value } }`
/// entry, preserving argument order.
pub(crate) fn decode_arguments<C: FlattenContext + ?Sized>(
    arguments: &IndexMap<String, Value>,
    context: &C,
) -> Result<Vec<ArgumentEntry>> {
    arguments.iter().map(|(arg_name, arg_value)| -> Result<ArgumentEntry> {
        let decoded = DecodedArgument {
            kind: arg_value.kind(),
            value: decode_value(arg_value, context)?,
        };
        Ok(IndexMap::from([(arg_name.to_string(), decoded)]))
    }).collect()
}

/// Turns a literal into the runtime value it denotes.
///
/// Decoding is driven purely by the literal's syntax. No argument types are
/// known here, so e.g. a string literal passed to an `ID` argument stays a
/// string.
pub(crate) fn decode_value<C: FlattenContext + ?Sized>(
    value: &Value,
    context: &C,
) -> Result<serde_json::Value> {
    Ok(match value {
        Value::Int(literal) => {
            let int = literal.parse::<i64>().map_err(|source| {
                FlattenError::InvalidIntLiteral {
                    literal: literal.to_string(),
                    source,
                }
            })?;
            serde_json::Value::from(int)
        },

        Value::Float(literal) => {
            let float = literal.parse::<f64>().map_err(|source| {
                FlattenError::InvalidFloatLiteral {
                    literal: literal.to_string(),
                    source,
                }
            })?;
            serde_json::Number::from_f64(float)
                .map(serde_json::Value::Number)
                .ok_or_else(|| FlattenError::NonFiniteFloatLiteral {
                    literal: literal.to_string(),
                })?
        },

        Value::String(str) => serde_json::Value::String(str.to_string()),
        Value::Boolean(bool) => serde_json::Value::Bool(*bool),
        Value::Enum(enum_value) => serde_json::Value::String(enum_value.to_string()),

        Value::Variable(var_name) =>
            context.variable_value(var_name)
                .cloned()
                .unwrap_or(serde_json::Value::Null),

        Value::List(values) =>
            serde_json::Value::Array(
                values.iter()
                    .map(|value| decode_value(value, context))
                    .collect::<Result<Vec<_>>>()?,
            ),

        Value::Object(entries) =>
            serde_json::Value::Object(
                entries.iter()
                    .map(|(key, value)| -> Result<(String, serde_json::Value)> {
                        Ok((key.to_string(), decode_value(value, context)?))
                    })
                    .collect::<Result<serde_json::Map<_, _>>>()?,
            ),

        Value::Null => serde_json::Value::Null,
    })
}
