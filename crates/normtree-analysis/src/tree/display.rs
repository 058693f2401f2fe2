//! Text and JSON renderings of a normalized tree.

use std::fmt;

use serde_json::{Map, Value};

use super::node::NormalizedTree;

impl NormalizedTree {
    /// Nested JSON of the whole tree: `{type, printable?, resolved?, token | children}`.
    /// An empty tree renders as `null`.
    ///
    /// Objects are assembled leaves first, so deep trees need no recursion.
    pub fn to_json_value(&self) -> Value {
        let mut built: Vec<Option<Value>> = vec![None; self.nodes.len()];
        // Pre-order storage: every child sits after its parent.
        for (index, node) in self.nodes.iter().enumerate().rev() {
            let mut object = Map::new();
            object.insert("type".to_string(), Value::from(node.type_label()));
            if let Some(printable) = node.printable_type() {
                object.insert("printable".to_string(), Value::from(printable));
            }
            if let Some(resolved) = node.resolved_type() {
                object.insert("resolved".to_string(), Value::from(resolved));
            }
            match node.token() {
                Some(token) => {
                    object.insert("token".to_string(), Value::from(token));
                }
                None => {
                    let children = node
                        .children()
                        .iter()
                        .map(|c| built[c.index()].take().unwrap_or(Value::Null))
                        .collect();
                    object.insert("children".to_string(), Value::Array(children));
                }
            }
            built[index] = Some(Value::Object(object));
        }
        built
            .get_mut(self.root().index())
            .and_then(Option::take)
            .unwrap_or(Value::Null)
    }
}

/// Indented rendering, one node per line: `LABEL [printable] <resolved> : token`.
impl fmt::Display for NormalizedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.node(id);
            write!(f, "{:indent$}{}", "", node.type_label(), indent = depth * 2)?;
            if let Some(printable) = node.printable_type() {
                write!(f, " [{printable}]")?;
            }
            if let Some(resolved) = node.resolved_type() {
                write!(f, " <{resolved}>")?;
            }
            if let Some(token) = node.token() {
                write!(f, " : {token}")?;
            }
            writeln!(f)?;
            for &child in node.children().iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        Ok(())
    }
}
