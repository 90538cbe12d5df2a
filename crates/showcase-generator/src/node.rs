//! Document tree.
//!
//! Pages are built as a tree of generic markup nodes and serialized once at
//! the end. Text is escaped on output; `Raw` carries HTML that was already
//! rendered, such as Markdown bodies.

/// A markup node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with attributes and children.
    Element(Element),
    /// Escaped text.
    Text(String),
    /// Pre-rendered HTML, written verbatim.
    Raw(String),
    /// A fragment without markup of its own.
    Group(Vec<Node>),
}

impl Node {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a raw HTML node.
    pub fn raw(html: impl Into<String>) -> Self {
        Self::Raw(html.into())
    }

    /// Create a fragment.
    pub fn group(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self::Group(nodes.into_iter().collect())
    }

    /// An empty fragment.
    pub fn empty() -> Self {
        Self::Group(Vec::new())
    }

    /// Whether serializing this node produces nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Element(_) => false,
            Self::Text(text) | Self::Raw(text) => text.is_empty(),
            Self::Group(nodes) => nodes.iter().all(Node::is_empty),
        }
    }

    /// Serialize to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Append the HTML serialization to `out`.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Element(element) => element.write_html(out),
            Self::Text(text) => escape_text(text, out),
            Self::Raw(html) => out.push_str(html),
            Self::Group(nodes) => {
                for node in nodes {
                    node.write_html(out);
                }
            }
        }
    }

    fn collect_elements<'a>(&'a self, found: &mut Vec<&'a Element>) {
        match self {
            Self::Element(element) => {
                found.push(element);
                for child in &element.children {
                    child.collect_elements(found);
                }
            }
            Self::Group(nodes) => {
                for node in nodes {
                    node.collect_elements(found);
                }
            }
            Self::Text(_) | Self::Raw(_) => {}
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Self::Text(text) => out.push_str(text),
            Self::Group(nodes) => {
                for node in nodes {
                    node.collect_text(out);
                }
            }
            Self::Raw(_) => {}
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<N: Into<Node>> From<Option<N>> for Node {
    fn from(node: Option<N>) -> Self {
        node.map_or_else(Node::empty, Into::into)
    }
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
    void: bool,
}

impl Element {
    /// Create an element with a closing tag.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            void: false,
        }
    }

    /// Create a void element (`<img>`, `<meta>`, ...), which has no children.
    pub fn void(name: impl Into<String>) -> Self {
        Self {
            void: true,
            ..Self::new(name)
        }
    }

    /// Set an attribute. Setting an existing attribute replaces its value in place.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((key, value)),
        }
        self
    }

    #[must_use]
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    #[must_use]
    pub fn href(self, href: impl Into<String>) -> Self {
        self.attr("href", href)
    }

    /// Append a child node. Ignored on void elements.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        if !self.void {
            self.children.push(node.into());
        }
        self
    }

    /// Append several children in iteration order.
    #[must_use]
    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        if !self.void {
            self.children.extend(nodes.into_iter().map(Into::into));
        }
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    /// Tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value by name.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Direct children.
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Direct child elements, looking through fragments.
    pub fn child_elements(&self) -> Vec<&Element> {
        fn walk<'a>(nodes: &'a [Node], found: &mut Vec<&'a Element>) {
            for node in nodes {
                match node {
                    Node::Element(element) => found.push(element),
                    Node::Group(inner) => walk(inner, found),
                    Node::Text(_) | Node::Raw(_) => {}
                }
            }
        }

        let mut found = Vec::new();
        walk(&self.children, &mut found);
        found
    }

    /// Whether the class attribute contains `class` as a whole token.
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|value| value.split_whitespace().any(|c| c == class))
    }

    /// All descendant elements in document order, excluding `self`.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        for child in &self.children {
            child.collect_elements(&mut found);
        }
        found
    }

    /// Descendant elements with the given tag name.
    pub fn find_all(&self, name: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.name == name)
            .collect()
    }

    /// Descendant elements carrying the given class.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    /// First descendant element with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.descendants()
            .into_iter()
            .find(|e| e.attribute("id") == Some(id))
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Serialize to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            escape_attribute(value, out);
            out.push('"');
        }
        out.push('>');

        if self.void {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

/// A complete HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Assemble `<html lang=..>` with the given head and body.
    pub fn new(lang: &str, head: Element, body: Element) -> Self {
        Self {
            root: Element::new("html").attr("lang", lang).child(head).child(body),
        }
    }

    /// The `<html>` element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The `<head>` element.
    pub fn head(&self) -> Option<&Element> {
        self.root
            .child_elements()
            .into_iter()
            .find(|e| e.name() == "head")
    }

    /// The `<body>` element.
    pub fn body(&self) -> Option<&Element> {
        self.root
            .child_elements()
            .into_iter()
            .find(|e| e.name() == "body")
    }

    /// Text of the `<title>` element.
    pub fn title(&self) -> Option<String> {
        self.head()
            .and_then(|head| head.find_all("title").into_iter().next())
            .map(Element::text_content)
    }

    /// Serialize with a doctype.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>");
        self.root.write_html(&mut out);
        out
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
