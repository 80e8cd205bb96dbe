use crate::DirectiveAnnotation;
use crate::FlattenContext;
use crate::flatten::argument_decoder;
use crate::flatten::FlattenError;
use crate::Value;

type Result<T> = std::result::Result<T, FlattenError>;

/// The combined effect of the `@include` and `@skip` annotations on one
/// selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DirectiveResults {
    pub should_include: bool,
    pub should_skip: bool,
}
impl DirectiveResults {
    /// A selection is excluded when `@skip` is true or `@include` is false.
    ///
    /// <https://spec.graphql.org/October2021/#sec--include>
    pub fn is_excluded(&self) -> bool {
        self.should_skip || !self.should_include
    }
}
impl Default for DirectiveResults {
    fn default() -> Self {
        Self {
            should_include: true,
            should_skip: false,
        }
    }
}

/// Evaluates every `@include`/`@skip` annotation in order; a later annotation
/// with the same name overrides an earlier one. Other directives are ignored.
pub(crate) fn evaluate_directives<C: FlattenContext + ?Sized>(
    directives: &[DirectiveAnnotation],
    context: &C,
) -> Result<DirectiveResults> {
    let mut results = DirectiveResults::default();
    for directive in directives {
        match directive.name() {
            "include" => results.should_include = evaluate_condition(directive, context)?,
            "skip" => results.should_skip = evaluate_condition(directive, context)?,
            _ => (),
        }
    }
    Ok(results)
}

fn evaluate_condition<C: FlattenContext + ?Sized>(
    directive: &DirectiveAnnotation,
    context: &C,
) -> Result<bool> {
    let condition = directive.arguments().get("if").ok_or_else(|| {
        FlattenError::MissingDirectiveCondition {
            directive_name: directive.name().to_string(),
            location: directive.def_location().clone(),
        }
    })?;

    Ok(match condition {
        Value::Variable(var_name) =>
            context.variable_value(var_name).is_some_and(is_truthy),

        Value::List(_) | Value::Object(_) | Value::Null => false,

        literal => is_truthy(&argument_decoder::decode_value(literal, context)?),
    })
}

/// Loose boolean coercion for condition values that aren't booleans.
pub(crate) fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(bool) => *bool,
        serde_json::Value::Number(number) =>
            number.as_f64().is_some_and(|number| number != 0.0),
        serde_json::Value::String(str) => !str.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}
