// crates/atlas-core/src/markup.rs

//! # Markup builder
//!
//! Panel content is assembled as an HTML string, but never by formatting
//! untrusted values straight into it. [`Markup`] only accepts:
//!
//! - `&'static str` literals through [`Markup::raw`] (the fixed structure)
//! - arbitrary text through [`Markup::text`] and [`Markup::attr`], which escape
//!
//! State names come from GeoJSON properties and the remote data file, so
//! both are treated as untrusted.

use crate::text::escape_html;
use std::fmt;

/// An HTML fragment whose dynamic parts have all been escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    buf: String,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append trusted, compile-time markup.
    pub fn raw(&mut self, literal: &'static str) -> &mut Self {
        self.buf.push_str(literal);
        self
    }

    /// Append text content, escaped.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape_html(text));
        self
    }

    /// Append ` name="value"` with the value escaped.
    pub fn attr(&mut self, name: &'static str, value: &str) -> &mut Self {
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        self.buf.push_str(&escape_html(value));
        self.buf.push('"');
        self
    }

    /// Open `<tag` so attributes can follow; close it with [`Markup::raw`].
    pub fn open(&mut self, tag: &'static str) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        self
    }

    /// `<tag>text</tag>` with the text escaped.
    pub fn element(&mut self, tag: &'static str, text: &str) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.buf.push('>');
        self.text(text);
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    /// Render a component into this fragment.
    pub fn component<C: Render + ?Sized>(&mut self, c: &C) -> &mut Self {
        c.render(self);
        self
    }

    /// Render every component of an iterator in order.
    pub fn each<'a, C, I>(&mut self, items: I) -> &mut Self
    where
        C: Render + 'a,
        I: IntoIterator<Item = &'a C>,
    {
        for item in items {
            item.render(self);
        }
        self
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.buf
    }
}

/// A piece of UI that knows how to write itself into [`Markup`].
pub trait Render {
    fn render(&self, out: &mut Markup);

    /// Convenience: render into a fresh fragment.
    fn to_markup(&self) -> Markup {
        let mut m = Markup::new();
        self.render(&mut m);
        m
    }
}

impl Render for Markup {
    fn render(&self, out: &mut Markup) {
        out.buf.push_str(&self.buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Badge<'a>(&'a str);

    impl Render for Badge<'_> {
        fn render(&self, out: &mut Markup) {
            out.open("span").attr("title", self.0).raw(">").text(self.0).raw("</span>");
        }
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let m = Badge(r#"<b onclick="x">"#).to_markup();
        assert_eq!(
            m.as_str(),
            "<span title=\"&lt;b onclick=&quot;x&quot;&gt;\">&lt;b onclick=&quot;x&quot;&gt;</span>"
        );
    }

    #[test]
    fn element_wraps_escaped_text() {
        let mut m = Markup::new();
        m.element("li", "Fish & Chips");
        assert_eq!(m.to_string(), "<li>Fish &amp; Chips</li>");
    }

    #[test]
    fn each_renders_in_order() {
        let items = [Badge("a"), Badge("b")];
        let mut m = Markup::new();
        m.each(items.iter());
        assert!(m.as_str().find(">a<").unwrap() < m.as_str().find(">b<").unwrap());
    }
}
