use std::collections::BTreeMap;

use tera::{Context, Value};

/// Build a Tera context from a per-file variable map.
pub fn build_context(variables: &BTreeMap<String, Value>) -> Context {
    let mut context = Context::new();
    for (key, value) in variables {
        context.insert(key, value);
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_contains_all_variables() {
        let mut vars = BTreeMap::new();
        vars.insert("entity".to_string(), Value::String("Blog.Post".into()));
        vars.insert("route_prefix".to_string(), Value::String("/post".into()));

        let context = build_context(&vars);
        assert_eq!(
            context.get("entity"),
            Some(&Value::String("Blog.Post".into()))
        );
        assert_eq!(
            context.get("route_prefix"),
            Some(&Value::String("/post".into()))
        );
    }
}
