use std::sync::Arc;

use serde::Deserialize;

use crate::core::graphql_client::DynGraphQLClient;
use crate::errors::GantryError;
use crate::value::{format_args, Value};

/// A chain with no root field; the first appended operation becomes the
/// top-level selection.
pub fn query() -> Chain {
    Chain::default()
}

/// A chain rooted at a named top-level field, e.g. `host` or `directory`.
pub fn query_with_root(root_field: impl Into<String>) -> Chain {
    Chain {
        root_field: Some(root_field.into()),
        ..Chain::default()
    }
}

struct Step {
    field: String,
    args: Vec<(String, Value)>,
    prev: Option<Arc<Step>>,
}

/// An immutable pipeline of operations against the engine's graph. Appending
/// never mutates; the step list is a persistent list so branching pipelines
/// share their common prefix.
#[derive(Clone, Default)]
pub struct Chain {
    root_field: Option<String>,
    tail: Option<Arc<Step>>,
    variables: Vec<(String, String)>,
}

impl Chain {
    /// Appends one operation, producing a new chain. The original is untouched.
    pub fn append(&self, field: impl Into<String>, args: Vec<(String, Value)>) -> Chain {
        Chain {
            root_field: self.root_field.clone(),
            tail: Some(Arc::new(Step {
                field: field.into(),
                args,
                prev: self.tail.clone(),
            })),
            variables: self.variables.clone(),
        }
    }

    /// Rehydrates a chain from a previously obtained identifier, without
    /// replaying the construction that produced it.
    pub fn load_from_id(&self, id: impl Into<String>) -> Chain {
        self.append("loadFromId", vec![("id".to_string(), Value::from(id.into()))])
    }

    /// Declares a query variable. Later declarations never remove earlier
    /// ones; re-declaring a name updates its type in place.
    pub fn declare_variable(&self, name: impl Into<String>, typ: impl Into<String>) -> Chain {
        let name = name.into();
        let typ = typ.into();

        let mut variables = self.variables.clone();
        match variables.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = typ,
            None => variables.push((name, typ)),
        }

        Chain {
            root_field: self.root_field.clone(),
            tail: self.tail.clone(),
            variables,
        }
    }

    fn steps(&self) -> Vec<&Step> {
        let mut steps = Vec::new();
        let mut cur = self.tail.as_deref();

        while let Some(step) = cur {
            steps.push(step);
            cur = step.prev.as_deref();
        }

        steps.reverse();
        steps
    }

    /// Renders the full query text around a terminal selection. The terminal
    /// may itself carry rendered arguments or a sub-selection, e.g.
    /// `envVariable(name: "PATH")` or `exposedPorts { id }`.
    pub async fn build(&self, terminal: &str) -> Result<String, GantryError> {
        let mut parts = Vec::with_capacity(2);

        if self.variables.is_empty() {
            parts.push("query".to_string());
        } else {
            let decls = self
                .variables
                .iter()
                .map(|(name, typ)| format!("${name}: {typ}"))
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!("query({decls})"));
        }

        let steps = self.steps();
        match (&self.root_field, steps.is_empty()) {
            (Some(root), true) => parts.push(format!("{{ {root} {{ {terminal} }} }}")),
            (Some(root), false) => {
                let ops = render_steps(&steps, terminal).await?;
                parts.push(format!("{{ {root} {{ {ops} }} }}"));
            }
            (None, false) => {
                let ops = render_steps(&steps, terminal).await?;
                parts.push(format!("{{ {ops} }}"));
            }
            (None, true) => parts.push(format!("{{ {terminal} }}")),
        }

        Ok(parts.join(" "))
    }

    /// Walks the response data back down the chain's declared path and reads
    /// the terminal key from the innermost scope. A null or missing value at
    /// any intermediate step means the engine pruned that branch; the result
    /// is null, not an error.
    pub fn extract(&self, data: &serde_json::Value, terminal: &str) -> serde_json::Value {
        let mut current = data;

        if let Some(root) = &self.root_field {
            current = match current.get(root) {
                Some(v) if !v.is_null() => v,
                _ => return serde_json::Value::Null,
            };
        }

        for step in self.steps() {
            current = match current.get(&step.field) {
                Some(v) if !v.is_null() => v,
                _ => return serde_json::Value::Null,
            };
        }

        current
            .get(terminal)
            .cloned()
            .unwrap_or(serde_json::Value::Null)
    }

    /// One compile+execute+extract round trip for a plain terminal field.
    pub async fn execute<D>(
        &self,
        terminal: &str,
        graphql_client: DynGraphQLClient,
    ) -> Result<D, GantryError>
    where
        D: for<'de> Deserialize<'de>,
    {
        let value = self.run(terminal, terminal, graphql_client).await?;

        serde_json::from_value(value).map_err(GantryError::Decode)
    }

    /// Like [`Chain::execute`], for scalar leaves that take arguments of
    /// their own, e.g. `export(path: "/out")`.
    pub async fn execute_with_args<D>(
        &self,
        terminal: &str,
        args: Vec<(String, Value)>,
        graphql_client: DynGraphQLClient,
    ) -> Result<D, GantryError>
    where
        D: for<'de> Deserialize<'de>,
    {
        let selection = format!("{}{}", terminal, format_args(&args).await?);
        let value = self.run(&selection, terminal, graphql_client).await?;

        serde_json::from_value(value).map_err(GantryError::Decode)
    }

    /// Like [`Chain::execute`], for terminal fields that need an explicit
    /// sub-selection, e.g. `envVariables { name value }`. The extracted value
    /// still lives under the bare field name.
    pub async fn execute_selection<D>(
        &self,
        selection: &str,
        terminal: &str,
        graphql_client: DynGraphQLClient,
    ) -> Result<D, GantryError>
    where
        D: for<'de> Deserialize<'de>,
    {
        let value = self.run(selection, terminal, graphql_client).await?;

        serde_json::from_value(value).map_err(GantryError::Decode)
    }

    /// Expands an array-shaped terminal field into the identifiers of its
    /// elements, by selecting `field { id }` and reading each element's id.
    pub async fn execute_id_list(
        &self,
        terminal: &str,
        graphql_client: DynGraphQLClient,
    ) -> Result<Vec<String>, GantryError> {
        let selection = format!("{terminal} {{ id }}");
        let value = self.run(&selection, terminal, graphql_client).await?;

        let items = match value {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Null => return Ok(Vec::new()),
            other => {
                return Err(GantryError::Protocol(format!(
                    "expected an array at {terminal}, got {other}"
                )))
            }
        };

        items
            .into_iter()
            .map(|item| {
                item.get("id")
                    .and_then(|id| id.as_str())
                    .map(str::to_string)
                    .ok_or_else(|| {
                        GantryError::Protocol(format!("element of {terminal} has no id"))
                    })
            })
            .collect()
    }

    async fn run(
        &self,
        selection: &str,
        terminal: &str,
        graphql_client: DynGraphQLClient,
    ) -> Result<serde_json::Value, GantryError> {
        let query = self.build(selection).await?;

        tracing::trace!(query = query.as_str(), "gantry-query");

        let data = graphql_client.query(&query).await?;

        Ok(self.extract(&data, terminal))
    }
}

async fn render_steps(steps: &[&Step], terminal: &str) -> Result<String, GantryError> {
    let first = steps[0];
    let mut out = format!("{}{}", first.field, format_args(&first.args).await?);

    if steps.len() > 1 {
        out.push_str(" { ");
        for step in &steps[1..] {
            out.push_str(&format!("{}{} {{ ", step.field, format_args(&step.args).await?));
        }
        out.push_str(terminal);
        out.push_str(&" }".repeat(steps.len()));
    } else {
        out.push_str(&format!(" {{ {terminal} }}"));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{query, query_with_root};
    use crate::value::Value;

    fn args(pairs: &[(&str, Value)]) -> Vec<(String, Value)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[tokio::test]
    async fn test_empty_chain_with_root() {
        let chain = query_with_root("container");
        let text = chain.build("id").await.unwrap();

        assert_eq!(text, "query { container { id } }");
    }

    #[tokio::test]
    async fn test_empty_chain_without_root() {
        let chain = query();
        let text = chain.build("version").await.unwrap();

        assert_eq!(text, "query { version }");
    }

    #[tokio::test]
    async fn test_single_step() {
        let chain = query_with_root("container")
            .append("from", args(&[("address", Value::from("alpine:latest"))]));
        let text = chain.build("id").await.unwrap();

        assert_eq!(
            text,
            r#"query { container { from(address: "alpine:latest") { id } } }"#
        );
    }

    #[tokio::test]
    async fn test_nested_steps() {
        let chain = query_with_root("container")
            .append("from", args(&[("address", Value::from("alpine:latest"))]))
            .append("withExec", args(&[("args", Value::from(vec!["echo", "hi"]))]));
        let text = chain.build("stdout").await.unwrap();

        assert_eq!(
            text,
            r#"query { container { from(address: "alpine:latest") { withExec(args: ["echo", "hi"]) { stdout } } } }"#
        );
    }

    #[tokio::test]
    async fn test_rootless_chain() {
        let chain = query().append("container", vec![]);
        let text = chain.build("id").await.unwrap();

        assert_eq!(text, "query { container { id } }");
    }

    #[tokio::test]
    async fn test_empty_args_render_without_parentheses() {
        let chain = query_with_root("host").append("tunnel", vec![]);
        let text = chain.build("id").await.unwrap();

        assert_eq!(text, "query { host { tunnel { id } } }");
    }

    #[tokio::test]
    async fn test_load_from_id() {
        let chain = query_with_root("container").load_from_id("test_id");
        let text = chain.build("id").await.unwrap();

        assert_eq!(
            text,
            r#"query { container { loadFromId(id: "test_id") { id } } }"#
        );
    }

    #[tokio::test]
    async fn test_variable_declaration_ordering() {
        let chain = query_with_root("container")
            .declare_variable("image", "String!")
            .declare_variable("tag", "String!")
            .append("from", args(&[("address", Value::from("$image"))]));
        let text = chain.build("id").await.unwrap();

        assert_eq!(
            text,
            "query($image: String!, $tag: String!) { container { from(address: $image) { id } } }"
        );
    }

    #[tokio::test]
    async fn test_redeclaring_a_variable_keeps_its_position() {
        let chain = query_with_root("container")
            .declare_variable("image", "String!")
            .declare_variable("tag", "String!")
            .declare_variable("image", "ID!");
        let text = chain.build("id").await.unwrap();

        assert_eq!(
            text,
            "query($image: ID!, $tag: String!) { container { id } }"
        );
    }

    #[tokio::test]
    async fn test_append_immutability() {
        let base = query_with_root("container")
            .append("from", args(&[("address", Value::from("alpine:latest"))]));

        let a = base.append("withWorkdir", args(&[("path", Value::from("/a"))]));
        let b = base.append("withWorkdir", args(&[("path", Value::from("/b"))]));

        assert_eq!(
            base.build("id").await.unwrap(),
            r#"query { container { from(address: "alpine:latest") { id } } }"#
        );
        assert_eq!(
            a.build("id").await.unwrap(),
            r#"query { container { from(address: "alpine:latest") { withWorkdir(path: "/a") { id } } } }"#
        );
        assert_eq!(
            b.build("id").await.unwrap(),
            r#"query { container { from(address: "alpine:latest") { withWorkdir(path: "/b") { id } } } }"#
        );
    }

    #[tokio::test]
    async fn test_build_is_deterministic() {
        let chain = query_with_root("container")
            .append("from", args(&[("address", Value::from("alpine:latest"))]))
            .append("withExec", args(&[("args", Value::from(vec!["ls"]))]));

        let first = chain.build("stdout").await.unwrap();
        let second = chain.build("stdout").await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_brace_balance() {
        let chain = query_with_root("container")
            .append("from", args(&[("address", Value::from("a"))]))
            .append("withExec", args(&[("args", Value::from(vec!["x"]))]))
            .append("withWorkdir", args(&[("path", Value::from("/"))]));
        let text = chain.build("stdout").await.unwrap();

        let opens = text.matches('{').count();
        let closes = text.matches('}').count();
        // three steps, one root field, one query scope
        assert_eq!(opens, 5);
        assert_eq!(opens, closes);
    }

    #[test]
    fn test_extract_terminal_value() {
        let chain = query_with_root("container")
            .append("from", vec![])
            .append("withExec", vec![]);

        let data = json!({
            "container": { "from": { "withExec": { "stdout": "hi\n" } } }
        });

        assert_eq!(chain.extract(&data, "stdout"), json!("hi\n"));
    }

    #[test]
    fn test_extract_short_circuits_on_null_step() {
        let chain = query_with_root("container")
            .append("from", vec![])
            .append("withExec", vec![]);

        let data = json!({ "container": { "from": { "withExec": null } } });

        assert_eq!(chain.extract(&data, "stdout"), serde_json::Value::Null);
    }

    #[test]
    fn test_extract_short_circuits_on_missing_root() {
        let chain = query_with_root("container").append("from", vec![]);

        assert_eq!(
            chain.extract(&json!({}), "id"),
            serde_json::Value::Null
        );
    }

    #[test]
    fn test_extract_without_root_field() {
        let chain = query().append("container", vec![]);

        let data = json!({ "container": { "id": "abc" } });

        assert_eq!(chain.extract(&data, "id"), json!("abc"));
    }
}
