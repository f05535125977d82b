// file: src/extractor/label.rs
// description: group name lookup over a leniently parsed html tree
// reference: https://docs.rs/html5ever

use crate::config::ExtractionConfig;
use crate::error::{HarvestError, Result};
use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tracing::debug;

pub const DEFAULT_LABEL_ID: &str = "groupTit";

#[derive(Debug, Clone)]
pub struct LabelExtractor {
    element_id: String,
    tag: Option<String>,
}

impl LabelExtractor {
    pub fn new() -> Self {
        Self {
            element_id: DEFAULT_LABEL_ID.to_string(),
            tag: None,
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            element_id: config.label_element_id.clone(),
            tag: config.label_tag.clone(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Returns the text of the first child of the first element carrying the
    /// configured id. The walk stops at that element even when it has no text
    /// child, in which case the label is reported as missing.
    pub fn extract(&self, html: &str) -> Result<String> {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);

        let label = match self.find_element(&dom.document) {
            Some(element) => first_child_text(&element),
            None => {
                debug!("No element with id={} found", self.element_id);
                None
            }
        };

        match label {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(HarvestError::LabelNotFound),
        }
    }

    // Pre-order walk with an explicit stack; deeply nested markup cannot
    // exhaust the call stack.
    fn find_element(&self, root: &Handle) -> Option<Handle> {
        let mut stack: Vec<Handle> = vec![root.clone()];

        while let Some(node) = stack.pop() {
            if self.is_label_element(&node) {
                return Some(node);
            }

            // Template contents live in a separate fragment; they follow the
            // element's own children in document order.
            if let NodeData::Element {
                template_contents, ..
            } = &node.data
                && let Some(fragment) = template_contents.borrow().as_ref()
            {
                stack.push(fragment.clone());
            }

            let children = node.children.borrow();
            stack.extend(children.iter().rev().cloned());
        }

        None
    }

    fn is_label_element(&self, node: &Handle) -> bool {
        let NodeData::Element { name, attrs, .. } = &node.data else {
            return false;
        };

        if let Some(tag) = &self.tag
            && &*name.local != tag.as_str()
        {
            return false;
        }

        attrs
            .borrow()
            .iter()
            .any(|attr| &*attr.name.local == "id" && &*attr.value == self.element_id)
    }
}

impl Default for LabelExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn first_child_text(element: &Handle) -> Option<String> {
    element
        .children
        .borrow()
        .first()
        .and_then(|child| match &child.data {
            NodeData::Text { contents } => Some(contents.borrow().to_string()),
            _ => None,
        })
}

pub fn extract_label(html: &str) -> Result<String> {
    LabelExtractor::new().extract(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_not_found(result: Result<String>) {
        assert!(
            matches!(result, Err(HarvestError::LabelNotFound)),
            "expected LabelNotFound, got {:?}",
            result
        );
    }

    #[test]
    fn test_label_from_span() {
        let html = r#"<span id="groupTit">Test Group</span> contact 123456 or 123456 again"#;
        assert_eq!(extract_label(html).unwrap(), "Test Group");
    }

    #[test]
    fn test_label_is_literal_text() {
        let html = r#"<html><body><div><h2 id="groupTit"> Team A </h2></div></body></html>"#;
        assert_eq!(extract_label(html).unwrap(), " Team A ");
    }

    #[test]
    fn test_entities_are_decoded() {
        let html = r#"<span id="groupTit">R&amp;D 群</span>"#;
        assert_eq!(extract_label(html).unwrap(), "R&D 群");
    }

    #[test]
    fn test_missing_element() {
        let html = r#"<html><body><span id="other">Nope</span> 123456</body></html>"#;
        assert_not_found(extract_label(html));
    }

    #[test]
    fn test_empty_document() {
        assert_not_found(extract_label(""));
    }

    #[test]
    fn test_first_match_wins() {
        let html = r#"<p id="groupTit">First<span id="groupTit">Nested</span></p>
<p id="groupTit">Second</p>"#;
        assert_eq!(extract_label(html).unwrap(), "First");
    }

    #[test]
    fn test_match_without_text_child_stops_search() {
        let html = r#"<div id="groupTit"><b>Bold</b></div><span id="groupTit">Later</span>"#;
        assert_not_found(extract_label(html));
    }

    #[test]
    fn test_empty_match_stops_search() {
        let html = r#"<span id="groupTit"></span><span id="groupTit">Later</span>"#;
        assert_not_found(extract_label(html));
    }

    #[test]
    fn test_attribute_value_is_case_sensitive() {
        let html = r#"<span id="grouptit">Lower</span>"#;
        assert_not_found(extract_label(html));
    }

    #[test]
    fn test_malformed_markup_is_repaired() {
        let html = r#"<table><tr><td><span id="groupTit">Broken Table<td>55555"#;
        assert_eq!(extract_label(html).unwrap(), "Broken Table");
    }

    #[test]
    fn test_tag_filter_skips_other_elements() {
        let html = r#"<div id="groupTit">Div Title</div><span id="groupTit">Span Title</span>"#;
        let extractor = LabelExtractor::new().with_tag("span");
        assert_eq!(extractor.extract(html).unwrap(), "Span Title");
    }

    #[test]
    fn test_custom_element_id() {
        let config = ExtractionConfig {
            label_element_id: "title".to_string(),
            label_tag: None,
        };
        let extractor = LabelExtractor::from_config(&config);
        let html = r#"<h1 id="title">Custom</h1>"#;
        assert_eq!(extractor.extract(html).unwrap(), "Custom");
    }

    #[test]
    fn test_template_contents_are_searched_in_order() {
        let html = r#"<template><span id="groupTit">InTemplate</span></template><b id="groupTit">After</b>"#;
        assert_eq!(extract_label(html).unwrap(), "InTemplate");
    }

    #[test]
    fn test_label_after_template_still_found() {
        let html = r#"<template><i>no id</i></template><b id="groupTit">After</b>"#;
        assert_eq!(extract_label(html).unwrap(), "After");
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let depth = 2_000;
        let mut html = "<div>".repeat(depth);
        html.push_str(r#"<span id="groupTit">Deep</span>"#);
        html.push_str(&"</div>".repeat(depth));
        assert_eq!(extract_label(&html).unwrap(), "Deep");
    }
}
