//! Labeled section builder.
//!
//! Every capability on the landing page shares one frame: a title, an
//! optional subtitle and an ordered run of children.

use showcase_core::{CapabilityKind, Section};

use crate::node::{Element, Node};

/// Builder for a titled capability block.
#[derive(Debug, Clone)]
pub struct LabeledSection {
    kind: CapabilityKind,
    title: String,
    subtitle: String,
    class: Option<String>,
    children: Vec<Node>,
}

impl LabeledSection {
    /// Start from explicit values.
    pub fn new(kind: CapabilityKind, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            subtitle: subtitle.into(),
            class: None,
            children: Vec::new(),
        }
    }

    /// Seed title, subtitle and anchor from a section record.
    pub fn from_section<S: Section>(section: &S) -> Self {
        Self::new(S::KIND, section.title(), section.subtitle())
    }

    /// Class of the inner `<section>`.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Render each child with `render`, keeping stored order.
    #[must_use]
    pub fn items<'a, T, F, N>(mut self, items: &'a [T], render: F) -> Self
    where
        T: 'a,
        F: FnMut(&'a T) -> N,
        N: Into<Node>,
    {
        self.children
            .extend(items.iter().map(render).map(Into::into));
        self
    }

    /// Append an arbitrary node after the children added so far.
    #[must_use]
    pub fn body(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn build(self) -> Element {
        let mut header = Element::new("header").child(Element::new("h2").text(self.title));
        if !self.subtitle.is_empty() {
            header = header.child(Element::new("h4").text(self.subtitle));
        }

        let mut inner = Element::new("section");
        if let Some(class) = self.class {
            inner = inner.class(class);
        }

        Element::new("article")
            .id(self.kind.as_str())
            .class("capability")
            .child(header)
            .child(inner.children(self.children))
    }
}
