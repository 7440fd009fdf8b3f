use std::fmt::{Display, Formatter, Result as FmtResult, Write};

use parser::types::{
    Directive, DocumentOperations, ExecutableDocument, Field, FragmentDefinition, FragmentSpread,
    InlineFragment, OperationDefinition, OperationType, Selection, SelectionSet,
    VariableDefinition,
};
use parser::Positioned;
use value::{Name, Value};

/// Serializes a parsed document back to canonical query text.
///
/// Operations and fragments are emitted in sorted name order so that two
/// documents with the same definitions always print identically. An
/// anonymous single query prints in selection-set shorthand.
pub fn print(document: &ExecutableDocument) -> String {
    DocumentDisplay(document).to_string()
}

struct DocumentDisplay<'a>(&'a ExecutableDocument);

impl<'a> Display for DocumentDisplay<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;

        match &self.0.operations {
            DocumentOperations::Single(operation) => {
                write_operation(f, None, &operation.node)?;
                first = false;
            }
            DocumentOperations::Multiple(operations) => {
                let mut operations = operations.iter().collect::<Vec<_>>();
                operations.sort_by(|(a, _), (b, _)| a.as_str().cmp(b.as_str()));
                for (name, operation) in operations {
                    if !first {
                        f.write_char(' ')?;
                    }
                    write_operation(f, Some(name), &operation.node)?;
                    first = false;
                }
            }
        }

        let mut fragments = self.0.fragments.iter().collect::<Vec<_>>();
        fragments.sort_by(|(a, _), (b, _)| a.as_str().cmp(b.as_str()));
        for (name, fragment) in fragments {
            if !first {
                f.write_char(' ')?;
            }
            write_fragment(f, name, &fragment.node)?;
            first = false;
        }

        Ok(())
    }
}

fn write_operation(
    f: &mut Formatter<'_>,
    name: Option<&Name>,
    operation: &OperationDefinition,
) -> FmtResult {
    let shorthand = name.is_none()
        && operation.ty == OperationType::Query
        && operation.variable_definitions.is_empty()
        && operation.directives.is_empty();

    if !shorthand {
        write!(f, "{}", operation.ty)?;
        if let Some(name) = name {
            write!(f, " {}", name)?;
        }
        if !operation.variable_definitions.is_empty() {
            f.write_char('(')?;
            for (idx, variable) in operation.variable_definitions.iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write_variable_definition(f, &variable.node)?;
            }
            f.write_char(')')?;
        }
        write_directives(f, &operation.directives)?;
        f.write_char(' ')?;
    }

    write_selection_set(f, &operation.selection_set.node)
}

fn write_variable_definition(f: &mut Formatter<'_>, variable: &VariableDefinition) -> FmtResult {
    write!(f, "${}: {}", variable.name.node, variable.var_type.node)?;
    if let Some(default_value) = &variable.default_value {
        write!(f, " = {}", default_value.node)?;
    }
    Ok(())
}

fn write_directives(f: &mut Formatter<'_>, directives: &[Positioned<Directive>]) -> FmtResult {
    for directive in directives {
        write!(f, " @{}", directive.node.name.node)?;
        write_arguments(f, &directive.node.arguments)?;
    }
    Ok(())
}

fn write_arguments(
    f: &mut Formatter<'_>,
    arguments: &[(Positioned<Name>, Positioned<Value>)],
) -> FmtResult {
    if arguments.is_empty() {
        return Ok(());
    }
    f.write_char('(')?;
    for (idx, (name, value)) in arguments.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}: {}", name.node, value.node)?;
    }
    f.write_char(')')
}

fn write_selection_set(f: &mut Formatter<'_>, selection_set: &SelectionSet) -> FmtResult {
    f.write_char('{')?;
    for item in &selection_set.items {
        f.write_char(' ')?;
        match &item.node {
            Selection::Field(field) => write_field(f, &field.node)?,
            Selection::FragmentSpread(spread) => write_fragment_spread(f, &spread.node)?,
            Selection::InlineFragment(fragment) => write_inline_fragment(f, &fragment.node)?,
        }
    }
    f.write_str(" }")
}

fn write_field(f: &mut Formatter<'_>, field: &Field) -> FmtResult {
    if let Some(alias) = &field.alias {
        write!(f, "{}: ", alias.node)?;
    }
    write!(f, "{}", field.name.node)?;
    write_arguments(f, &field.arguments)?;
    write_directives(f, &field.directives)?;
    if !field.selection_set.node.items.is_empty() {
        f.write_char(' ')?;
        write_selection_set(f, &field.selection_set.node)?;
    }
    Ok(())
}

fn write_fragment_spread(f: &mut Formatter<'_>, spread: &FragmentSpread) -> FmtResult {
    write!(f, "...{}", spread.fragment_name.node)?;
    write_directives(f, &spread.directives)
}

fn write_inline_fragment(f: &mut Formatter<'_>, fragment: &InlineFragment) -> FmtResult {
    f.write_str("...")?;
    if let Some(type_condition) = &fragment.type_condition {
        write!(f, " on {}", type_condition.node.on.node)?;
    }
    write_directives(f, &fragment.directives)?;
    f.write_char(' ')?;
    write_selection_set(f, &fragment.selection_set.node)
}

fn write_fragment(f: &mut Formatter<'_>, name: &Name, fragment: &FragmentDefinition) -> FmtResult {
    write!(f, "fragment {} on {}", name, fragment.type_condition.node.on.node)?;
    write_directives(f, &fragment.directives)?;
    f.write_char(' ')?;
    write_selection_set(f, &fragment.selection_set.node)
}
