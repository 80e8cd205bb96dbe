//! Flattening of a resolver's requested selection tree into a [`FieldMap`].

mod argument_decoder;
mod directive_evaluator;
mod flatten_error;
mod flatten_options;

pub use flatten_error::FlattenError;
pub use flatten_options::FlattenOptions;

use crate::FieldMap;
use crate::FlattenContext;
use crate::operation::FieldSelection;
use crate::operation::Fragment;
use crate::operation::FragmentSpread;
use crate::operation::Selection;
use std::borrow::Cow;

type Result<T> = std::result::Result<T, FlattenError>;

/// Flattens the sub-selections of the field currently being resolved into a
/// [`FieldMap`].
///
/// `root_selections` are the selection nodes the execution engine handed to
/// the resolver (usually one [`Selection::Field`] per time the field was
/// requested). The sub-selections of each are merged, in order, into `seed`
/// (or a fresh map):
///
/// * `@include`/`@skip` annotations are evaluated against the context's
///   variables and excluded selections are dropped with their subtree.
/// * Fragment spreads and inline fragments are inlined at the level they
///   appear. Inline fragments are inlined regardless of type condition.
/// * A field requested more than once gets a single entry holding the union
///   of everything requested beneath it.
/// * With [`FlattenOptions::decode_arguments`], each field's arguments are
///   decoded into its `__arguments` entry. When a field is requested more
///   than once, the last occurrence with arguments wins; argument lists are
///   not merged.
///
/// ```
/// use libgraphql_fields::flatten::flatten;
/// use libgraphql_fields::flatten::FlattenOptions;
/// use libgraphql_fields::operation::ExecutableDocument;
/// use libgraphql_fields::ResolveInfo;
///
/// let doc = ExecutableDocument::from_str(r#"
///     query { user { name ...F } }
///     fragment F on User { name friends { name } }
/// "#, None).unwrap();
///
/// let field_nodes = doc.field_nodes(None, &["user"]).unwrap();
/// let info = ResolveInfo::without_variables(doc.fragment_registry());
/// let fields = flatten(&field_nodes, &info, None, &FlattenOptions::default()).unwrap();
///
/// assert_eq!(
///     fields.to_json(),
///     serde_json::json!({ "name": {}, "friends": { "name": {} } }),
/// );
/// ```
pub fn flatten<C: FlattenContext + ?Sized>(
    root_selections: &[Selection],
    context: &C,
    seed: Option<FieldMap>,
    options: &FlattenOptions,
) -> Result<FieldMap> {
    log::debug!(
        "Flattening {} root selection(s) (decode_arguments={}, use_alias_as_key={}, \
        {} excluded field name(s)).",
        root_selections.len(),
        options.decode_arguments,
        options.use_alias_as_key,
        options.excluded_field_names.len(),
    );

    let mut field_map = seed.unwrap_or_default();
    let mut flattener = Flattener {
        context,
        fragment_path: vec![],
        options,
    };

    for root_selection in root_selections {
        match root_selection {
            Selection::Field(field) => {
                if let Some(selection_set) = field.selection_set() {
                    flattener.flatten_selections(selection_set.selections(), &mut field_map)?;
                }
            },

            Selection::FragmentSpread(spread) => {
                let fragment = flattener.resolve_fragment(spread)?;
                flattener.flatten_fragment(fragment, &mut field_map)?;
            },

            Selection::InlineFragment(inline) => {
                flattener.flatten_selections(
                    inline.selection_set().selections(),
                    &mut field_map,
                )?;
            },
        }
    }

    Ok(field_map)
}

struct Flattener<'a, C: FlattenContext + ?Sized> {
    context: &'a C,
    /// Names of the fragments currently being expanded, outermost first.
    fragment_path: Vec<&'a str>,
    options: &'a FlattenOptions,
}
impl<'a, C: FlattenContext + ?Sized> Flattener<'a, C> {
    fn flatten_selections(
        &mut self,
        selections: &[Selection],
        field_map: &mut FieldMap,
    ) -> Result<()> {
        for selection in selections {
            let directive_results = directive_evaluator::evaluate_directives(
                selection.directives(),
                self.context,
            )?;
            if directive_results.is_excluded() {
                log::trace!(
                    "Dropping selection at {} ({directive_results:?}).",
                    selection.def_location(),
                );
                continue;
            }

            match selection {
                Selection::Field(field) =>
                    self.flatten_field(field, field_map)?,

                Selection::FragmentSpread(spread) => {
                    let fragment = self.resolve_fragment(spread)?;
                    self.flatten_fragment(fragment, field_map)?;
                },

                Selection::InlineFragment(inline) =>
                    self.flatten_selections(
                        inline.selection_set().selections(),
                        field_map,
                    )?,
            }
        }

        Ok(())
    }

    fn flatten_field(
        &mut self,
        field: &FieldSelection,
        field_map: &mut FieldMap,
    ) -> Result<()> {
        let output_key = self.output_key(field);
        if self.options.excluded_field_names.contains(output_key.as_ref()) {
            log::trace!("Excluding field `{output_key}`.");
            return Ok(());
        }

        let nested = field_map.fields.entry(output_key.into_owned()).or_default();
        if let Some(selection_set) = field.selection_set() {
            self.flatten_selections(selection_set.selections(), nested)?;
        }

        if self.options.decode_arguments && !field.arguments().is_empty() {
            nested.arguments = Some(argument_decoder::decode_arguments(
                field.arguments(),
                self.context,
            )?);
        }

        Ok(())
    }

    fn flatten_fragment(
        &mut self,
        fragment: &'a Fragment,
        field_map: &mut FieldMap,
    ) -> Result<()> {
        let fragment_name = fragment.name();
        if let Some(cycle_start) = self.fragment_path.iter().position(|name| *name == fragment_name) {
            let mut cycle_path: Vec<String> = self.fragment_path[cycle_start..]
                .iter()
                .map(|name| name.to_string())
                .collect();
            cycle_path.push(fragment_name.to_string());
            return Err(FlattenError::FragmentCycleDetected { cycle_path });
        }

        log::trace!("Inlining fragment `{fragment_name}`.");
        self.fragment_path.push(fragment_name);
        self.flatten_selections(fragment.selection_set().selections(), field_map)?;
        self.fragment_path.pop();

        Ok(())
    }

    fn output_key<'f>(&self, field: &'f FieldSelection) -> Cow<'f, str> {
        match field.alias() {
            Some(alias) if self.options.use_alias_as_key =>
                Cow::Owned(format!("{alias}:{}", field.name())),
            _ => Cow::Borrowed(field.name()),
        }
    }

    fn resolve_fragment(&self, spread: &FragmentSpread) -> Result<&'a Fragment> {
        let context: &'a C = self.context;
        context.fragment(spread.fragment_name()).ok_or_else(|| {
            FlattenError::UndefinedFragment {
                fragment_name: spread.fragment_name().to_string(),
                location: spread.def_location().clone(),
            }
        })
    }
}

#[cfg(test)]
mod tests;
