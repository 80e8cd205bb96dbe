//! Turns the selection nodes a GraphQL engine hands to a resolver into a
//! [`FieldMap`] describing exactly which nested fields were requested.
//!
//! Fragment spreads and inline fragments are inlined, `@include`/`@skip` are
//! applied, repeated fields are merged, and (optionally) field arguments are
//! decoded. No schema is needed: the result is a purely structural projection
//! of the request.
//!
//! Start with [`flatten()`](crate::flatten::flatten).

pub mod ast;
mod directive_annotation;
mod field_map;
mod file_reader;
pub mod flatten;
pub mod loc;
pub mod operation;
mod resolve_info;
mod value;

pub use directive_annotation::DirectiveAnnotation;
pub use field_map::ArgumentEntry;
pub use field_map::ARGUMENTS_KEY;
pub use field_map::DecodedArgument;
pub use field_map::FieldMap;
pub use file_reader::ReadContentError;
pub use flatten::FlattenError;
pub use flatten::FlattenOptions;
pub use resolve_info::FlattenContext;
pub use resolve_info::ResolveInfo;
pub use resolve_info::VariableValues;
pub use value::Value;
pub use value::ValueKind;

#[cfg(test)]
mod tests;
