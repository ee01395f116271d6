//! Projection of struct-shaped values into name-keyed mappings.

use alloc::string::{String, ToString};

use indexmap::IndexMap;

use crate::{Inspect, IntrospectError, Kind, ValueHandle, try_inspect};

/// Field values of a struct, keyed by field name or tag, in declaration order.
pub type Projection<'mem> = IndexMap<String, ValueHandle<'mem>>;

/// Projects the fields of a struct-shaped `value` into a mapping.
///
/// Each field's key is its name, or, when `use_tag` is set and the field
/// declares a non-empty `tag_key` tag, that tag's value. Fields whose keys
/// collide keep the value of the last one, at the position of the first.
///
/// This never fails: a value that is not struct-shaped yields an empty
/// mapping, and a field that cannot be inspected ends the projection with
/// whatever was collected before it. Use [`try_project`] to see why.
///
/// ```
/// use kdebug::{Inspect, format_field, project};
///
/// #[derive(Inspect)]
/// struct Row {
///     #[inspect(tag(db = "row_id"))]
///     id: u32,
///     name: &'static str,
/// }
///
/// let row = Row { id: 7, name: "seven" };
/// let mapping = project(&row, true, "db");
/// let keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["row_id", "name"]);
/// assert_eq!(format_field(&mapping["row_id"]), "7");
/// ```
pub fn project<'mem>(value: &'mem dyn Inspect, use_tag: bool, tag_key: &str) -> Projection<'mem> {
    let mut projection = Projection::new();
    if let Err(error) = project_into(value, use_tag, tag_key, &mut projection) {
        tracing::debug!(%error, fields = projection.len(), "projection incomplete");
    }
    projection
}

/// Like [`project`], but reports a non-struct input or a faulting field
/// instead of degrading.
pub fn try_project<'mem>(
    value: &'mem dyn Inspect,
    use_tag: bool,
    tag_key: &str,
) -> Result<Projection<'mem>, IntrospectError> {
    let mut projection = Projection::new();
    project_into(value, use_tag, tag_key, &mut projection)?;
    Ok(projection)
}

fn project_into<'mem>(
    value: &'mem dyn Inspect,
    use_tag: bool,
    tag_key: &str,
    projection: &mut Projection<'mem>,
) -> Result<(), IntrospectError> {
    let handle = try_inspect(value)?;
    if handle.kind() != Kind::Struct {
        return Err(IntrospectError::NonStructInput {
            type_name: handle.type_name().to_string(),
        });
    }

    for field in handle.fields() {
        let key = match field.tag(tag_key) {
            Some(tag) if use_tag && !tag.is_empty() => tag,
            _ => field.name(),
        };
        let value = try_inspect(field.value())?;
        projection.insert(key.to_string(), value);
    }
    Ok(())
}
