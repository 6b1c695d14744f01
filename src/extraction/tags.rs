/// Build a PLC tag as `<ObjectType>_<extension>_<index>`.
///
/// Only the first `;`-separated segment of the object type is used. The index
/// is truncated to an integer. An absent or non-finite index yields an empty
/// tag, which callers drop from their output.
pub fn plc_tag(object_type: Option<&str>, extension: &str, index: Option<f64>) -> String {
    let Some(index) = index.filter(|value| value.is_finite()) else {
        return String::new();
    };
    let first_type = object_type
        .and_then(|types| types.split(';').next())
        .map(str::trim)
        .unwrap_or("");
    format!("{}_{}_{}", first_type, extension, index.trunc() as i64)
}

/// Join non-empty tags with commas
pub fn join_tags<'a, I>(tags: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    tags.into_iter()
        .filter(|tag| !tag.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
