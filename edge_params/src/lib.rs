//! The "required parameter" rule shared by every sdk operation.
//!
//! A parameter is missing when it is absent, JSON `null`, an empty string or an empty collection.


/// Returned when a required parameter is missing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Can't find required parameter \"{0}\".")]
pub struct MissingParam(pub &'static str);

impl MissingParam {
    /// name of the missing parameter
    pub fn name(&self) -> &'static str {
        self.0
    }
}

/// Returns the value if it is present, otherwise a [MissingParam] naming `name`.
///
/// ```
/// use edge_params::required;
///
/// assert_eq!(required("topic", Some("/hello/world")).unwrap(), "/hello/world");
/// assert!(required("topic", Some("")).is_err());
/// assert!(required::<String>("topic", None).is_err());
/// ```
pub fn required<T>(name: &'static str, value: Option<T>) -> Result<T, MissingParam>
where
    T: IsMissing,
{
    match value {
        Some(v) if !v.is_missing() => Ok(v),
        _ => Err(MissingParam(name)),
    }
}

/// For parameters where absence is legal: JSON `null` collapses to `None`.
pub fn optional_json(value: Option<serde_json::Value>) -> Option<serde_json::Value> {
    value.filter(|v| !v.is_null())
}

/// Trait for values which can be checked for being "missing"
pub trait IsMissing {
    fn is_missing(&self) -> bool;
}

impl IsMissing for String {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl IsMissing for &str {
    fn is_missing(&self) -> bool {
        str::is_empty(self)
    }
}

impl<T> IsMissing for Vec<T> {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsMissing for &[T] {
    fn is_missing(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<K, V> IsMissing for std::collections::HashMap<K, V> {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl IsMissing for serde_json::Value {
    fn is_missing(&self) -> bool {
        use serde_json::Value;
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(o) => o.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }
}

impl<T: IsMissing> IsMissing for Option<T> {
    fn is_missing(&self) -> bool {
        self.as_ref().is_none_or(IsMissing::is_missing)
    }
}
