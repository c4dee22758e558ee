use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::GantryError;

/// An argument value that is itself a remote resource. The identifier is
/// looked up when the query is rendered, not when the argument is appended,
/// so references may be passed around before they have ever been executed.
#[async_trait]
pub trait NodeReference: Send + Sync {
    async fn resolved_identifier(&self) -> Result<String, GantryError>;
}

/// The closed set of argument types the query language can carry.
#[derive(Clone)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Boolean(bool),
    Null,
    List(Vec<Value>),
    /// String-keyed pairs, rendered in insertion order.
    Object(Vec<(String, Value)>),
    /// Already-rendered query text, passed through untouched. Used for
    /// variable references embedded in nested structures.
    Raw(String),
    Node(Arc<dyn NodeReference>),
}

impl Value {
    pub fn node(reference: impl NodeReference + 'static) -> Self {
        Value::Node(Arc::new(reference))
    }

    /// Renders the value into its query-text literal form. Node references
    /// are resolved here, which may cost a round trip per unresolved node.
    pub async fn format(&self) -> Result<String, GantryError> {
        match self {
            Value::String(s) => {
                // A leading sigil marks a bound variable reference, not a literal.
                if s.starts_with('$') {
                    Ok(s.clone())
                } else {
                    Ok(format!("\"{}\"", escape_string(s)))
                }
            }
            Value::Int(i) => Ok(i.to_string()),
            Value::Float(f) => {
                if !f.is_finite() {
                    return Err(GantryError::UnsupportedValue(format!(
                        "non-finite float {f} has no query literal"
                    )));
                }
                Ok(f.to_string())
            }
            Value::Boolean(b) => Ok(b.to_string()),
            Value::Null => Ok("null".to_string()),
            Value::List(items) => {
                let mut parts = Vec::with_capacity(items.len());
                for item in items {
                    parts.push(Box::pin(item.format()).await?);
                }
                Ok(format!("[{}]", parts.join(", ")))
            }
            Value::Object(pairs) => {
                let mut parts = Vec::with_capacity(pairs.len());
                for (key, value) in pairs {
                    parts.push(format!("{}: {}", key, Box::pin(value.format()).await?));
                }
                Ok(format!("{{{}}}", parts.join(", ")))
            }
            Value::Raw(text) => Ok(text.clone()),
            Value::Node(reference) => {
                let id = reference.resolved_identifier().await?;
                Ok(format!("\"{}\"", escape_string(&id)))
            }
        }
    }
}

/// Renders an ordered argument map as `(k1: v1, k2: v2)`. An empty map
/// renders as nothing at all, not as empty parentheses.
pub async fn format_args(args: &[(String, Value)]) -> Result<String, GantryError> {
    if args.is_empty() {
        return Ok(String::new());
    }

    let mut parts = Vec::with_capacity(args.len());
    for (name, value) in args {
        parts.push(format!("{}: {}", name, value.format().await?));
    }

    Ok(format!("({})", parts.join(", ")))
}

fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(value: Vec<V>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_string_quoting_and_escaping() {
        let val = Value::from("contains \"quotes\" \\backslash\nand a newline");
        assert_eq!(
            val.format().await.unwrap(),
            r#""contains \"quotes\" \\backslash\nand a newline""#
        );
    }

    #[tokio::test]
    async fn test_variable_reference_passthrough() {
        let val = Value::from("$image");
        assert_eq!(val.format().await.unwrap(), "$image");
    }

    #[tokio::test]
    async fn test_scalars() {
        assert_eq!(Value::Int(42).format().await.unwrap(), "42");
        assert_eq!(Value::Float(1.5).format().await.unwrap(), "1.5");
        assert_eq!(Value::Boolean(true).format().await.unwrap(), "true");
        assert_eq!(Value::Null.format().await.unwrap(), "null");
    }

    #[tokio::test]
    async fn test_non_finite_float_is_unsupported() {
        let err = Value::Float(f64::NAN).format().await.unwrap_err();
        assert!(matches!(err, GantryError::UnsupportedValue(_)));
    }

    #[tokio::test]
    async fn test_list() {
        let val = Value::from(vec!["echo", "hi"]);
        assert_eq!(val.format().await.unwrap(), r#"["echo", "hi"]"#);

        assert_eq!(Value::List(vec![]).format().await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_object_preserves_insertion_order() {
        let val = Value::Object(vec![
            ("name".to_string(), Value::from("CACHE")),
            ("value".to_string(), Value::from("/cache")),
        ]);
        assert_eq!(
            val.format().await.unwrap(),
            r#"{name: "CACHE", value: "/cache"}"#
        );
    }

    #[tokio::test]
    async fn test_raw_passthrough_inside_object() {
        let val = Value::Object(vec![("ref".to_string(), Value::Raw("$ref".to_string()))]);
        assert_eq!(val.format().await.unwrap(), "{ref: $ref}");
    }

    struct FixedId(&'static str);

    #[async_trait]
    impl NodeReference for FixedId {
        async fn resolved_identifier(&self) -> Result<String, GantryError> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_node_reference_formats_as_quoted_identifier() {
        let val = Value::node(FixedId("dir-abc123"));
        assert_eq!(val.format().await.unwrap(), r#""dir-abc123""#);
    }

    #[tokio::test]
    async fn test_format_args() {
        let args = vec![
            ("path".to_string(), Value::from("/app")),
            ("permissions".to_string(), Value::Int(420)),
        ];
        assert_eq!(
            format_args(&args).await.unwrap(),
            r#"(path: "/app", permissions: 420)"#
        );

        assert_eq!(format_args(&[]).await.unwrap(), "");
    }
}
