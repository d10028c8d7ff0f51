//! JSON 格式化與結構樹。

use crate::utils::error::{Result, ToolError};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct FormattedJson {
    pub value: Value,
    pub pretty: String,
}

/// Parses and pretty-prints JSON with 2-space indentation, keeping key order.
///
/// Blank input yields `Ok(None)`.
pub fn format_json(input: &str) -> Result<Option<FormattedJson>> {
    if input.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(input).map_err(|e| ToolError::InvalidJson {
        message: e.to_string(),
    })?;
    let pretty = serde_json::to_string_pretty(&value)?;

    Ok(Some(FormattedJson { value, pretty }))
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Object(usize),
    Array(usize),
    String(String),
    Number(String),
    Bool(bool),
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsonTreeNode {
    pub label: String,
    pub kind: NodeKind,
    pub children: Vec<JsonTreeNode>,
}

impl JsonTreeNode {
    /// Builds the tree for a document root.
    pub fn root(value: &Value) -> Self {
        let label = match value {
            Value::Object(_) => "root{}",
            Value::Array(_) => "root[]",
            _ => "root",
        };
        Self::from_value(label, value)
    }

    pub fn from_value(label: impl Into<String>, value: &Value) -> Self {
        let label = label.into();
        match value {
            Value::Object(map) => Self {
                label,
                kind: NodeKind::Object(map.len()),
                children: map.iter().map(|(k, v)| Self::from_value(k.as_str(), v)).collect(),
            },
            Value::Array(items) => Self {
                label,
                kind: NodeKind::Array(items.len()),
                children: items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| Self::from_value(i.to_string(), v))
                    .collect(),
            },
            Value::String(s) => Self::leaf(label, NodeKind::String(s.clone())),
            Value::Number(n) => Self::leaf(label, NodeKind::Number(n.to_string())),
            Value::Bool(b) => Self::leaf(label, NodeKind::Bool(*b)),
            Value::Null => Self::leaf(label, NodeKind::Null),
        }
    }

    fn leaf(label: String, kind: NodeKind) -> Self {
        Self {
            label,
            kind,
            children: Vec::new(),
        }
    }

    fn summary(&self, expanded: bool) -> String {
        let marker = if expanded { "▾" } else { "▸" };
        match &self.kind {
            NodeKind::Object(n) => format!("{{ ({} keys) {}", n, marker),
            NodeKind::Array(n) => format!("[ ({} items) {}", n, marker),
            NodeKind::String(s) => format!("\"{}\"", s),
            NodeKind::Number(n) => n.clone(),
            NodeKind::Bool(b) => b.to_string(),
            NodeKind::Null => "null".to_string(),
        }
    }

    /// Renders the tree as indented lines. Containers deeper than
    /// `max_depth` are shown collapsed.
    pub fn render(&self, max_depth: Option<usize>) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_into(0, max_depth, &mut lines);
        lines
    }

    fn render_into(&self, depth: usize, max_depth: Option<usize>, lines: &mut Vec<String>) {
        let is_container = matches!(self.kind, NodeKind::Object(_) | NodeKind::Array(_));
        let expanded = is_container && max_depth.is_none_or(|max| depth < max);
        lines.push(format!(
            "{}{}: {}",
            "  ".repeat(depth),
            self.label,
            self.summary(expanded)
        ));
        if expanded {
            for child in &self.children {
                child.render_into(depth + 1, max_depth, lines);
            }
        }
    }
}
