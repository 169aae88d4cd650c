// src/core/dom.rs
//! Read-only view of a rendered page.
//!
//! The extraction engine never touches a concrete HTML library. It walks the page
//! through [`DomNode`], a small capability interface (tag, attributes, element
//! children, rendered text). One backend ships with the crate: `scraper`'s
//! [`ElementRef`], owned by a [`Page`] snapshot.

use scraper::{ElementRef, Html};

/// Elements whose text never reaches the output.
const SKIPPED: &[&str] = &["script", "style", "noscript", "template", "head"];

/// Elements that start and end a line when rendered as text.
const BLOCK: &[&str] = &[
    "address", "article", "aside", "blockquote", "caption", "dd", "div", "dl", "dt",
    "figcaption", "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "tbody", "tfoot",
    "thead", "tr", "ul",
];

/// Capability interface over one structural node of a rendered page.
pub trait DomNode: Clone {
    /// Lower-case element name (`table`, `tr`, `a`, …).
    fn tag_name(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<&str>;

    /// Element children in document order. Text and comments are not nodes here.
    fn child_elements(&self) -> Vec<Self>;

    /// Rendered plain text. `<br>` and block boundaries become `'\n'`;
    /// callers collapse whitespace themselves.
    fn plain_text(&self) -> String;

    fn is(&self, tag: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(tag)
    }

    /// `class` is a whitespace separated token list.
    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|c| c.split_whitespace().any(|t| t == class))
    }

    /// All element descendants, pre-order, `self` excluded.
    fn all_descendants(&self) -> Vec<Self> {
        let mut out = Vec::new();
        let mut stack: Vec<Self> = self.child_elements().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            stack.extend(node.child_elements().into_iter().rev());
            out.push(node);
        }
        out
    }

    fn find_first(&self, tag: &str) -> Option<Self> {
        let mut stack: Vec<Self> = self.child_elements().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            if node.is(tag) { return Some(node); }
            stack.extend(node.child_elements().into_iter().rev());
        }
        None
    }

    fn find_all(&self, tag: &str) -> Vec<Self> {
        self.all_descendants().into_iter().filter(|n| n.is(tag)).collect()
    }

    fn children_tagged(&self, tag: &str) -> Vec<Self> {
        self.child_elements().into_iter().filter(|n| n.is(tag)).collect()
    }
}

impl<'a> DomNode for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn child_elements(&self) -> Vec<Self> {
        (**self).children().filter_map(ElementRef::wrap).collect()
    }

    fn plain_text(&self) -> String {
        let mut out = String::new();
        render_into(*self, &mut out);
        out
    }
}

fn render_into(el: ElementRef<'_>, out: &mut String) {
    for child in (*el).children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            continue;
        }
        let Some(child_el) = ElementRef::wrap(child) else { continue };
        let name = child_el.value().name();

        if SKIPPED.contains(&name) { continue; }
        if name == "br" { out.push('\n'); continue; }

        let block = BLOCK.contains(&name);
        let cell = name == "td" || name == "th";
        if block { out.push('\n'); } else if cell { out.push(' '); }
        render_into(child_el, out);
        if block { out.push('\n'); } else if cell { out.push(' '); }
    }
}

/// One immutable DOM snapshot. Everything the engine reads borrows from it.
pub struct Page {
    html: Html,
}

impl Page {
    pub fn parse(source: &str) -> Self {
        Self { html: Html::parse_document(source) }
    }

    /// Parse a fragment (fixtures, partial captures).
    pub fn parse_fragment(source: &str) -> Self {
        Self { html: Html::parse_fragment(source) }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}
