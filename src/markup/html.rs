// HTML host - serializes a Node tree to markup
//
// Output is compact (no indentation) so it can be compared in tests and piped
// into other tools. Event handlers have no textual form and are dropped.

use super::{Attributes, Element, Node};
use tracing::warn;

/// Render a tree to an HTML string
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text { text } => out.push_str(&escape(text)),
        Node::Fragment { children } => {
            for child in children {
                write_node(child, out);
            }
        }
        Node::Element(el) => write_element(el, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    let tag = el.tag.as_str();
    out.push('<');
    out.push_str(tag);

    if let Some(class) = &el.class {
        push_attr(out, "class", class);
    }
    write_attributes(&el.attrs, out);
    out.push('>');
    if el.tag.is_void() {
        return;
    }

    for child in &el.children {
        write_node(child, out);
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_attributes(attrs: &Attributes, out: &mut String) {
    if let Some(button_type) = attrs.button_type {
        push_attr(out, "type", button_type.as_str());
    }
    if let Some(role) = &attrs.role {
        push_attr(out, "role", role);
    }
    if let Some(label) = &attrs.aria_label {
        push_attr(out, "aria-label", label);
    }
    if attrs.aria_modal {
        push_attr(out, "aria-modal", "true");
    }
    // `extra` is a public map, so it may hold names `set` would have refused
    for (name, value) in &attrs.extra {
        if attrs.writes_extra(name) {
            push_attr(out, name, value);
        } else {
            warn!(name = name.as_str(), "skipping attribute that cannot be written");
        }
    }
    // Boolean attribute: presence means true
    if attrs.disabled {
        out.push_str(" disabled");
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{ButtonType, Tag};

    #[test]
    fn renders_nested_elements() {
        let node: Node = Element::new(Tag::Ul)
            .class("list")
            .child(Element::new(Tag::Li).class("list__item").child("One"))
            .into();

        assert_eq!(
            to_html(&node),
            r#"<ul class="list"><li class="list__item">One</li></ul>"#
        );
    }

    #[test]
    fn renders_typed_and_extra_attributes() {
        let node: Node = Element::new(Tag::Button)
            .class("button")
            .attrs(
                Attributes::new()
                    .button_type(ButtonType::Submit)
                    .aria_label("Send")
                    .disabled(true)
                    .set("data-x", "1"),
            )
            .into();

        assert_eq!(
            to_html(&node),
            r#"<button class="button" type="submit" aria-label="Send" data-x="1" disabled></button>"#
        );
    }

    #[test]
    fn escapes_text_and_attribute_values() {
        let node: Node = Element::new(Tag::Span)
            .attrs(Attributes::new().set("title", "a\"b"))
            .child("<b> & 'c'")
            .into();

        assert_eq!(
            to_html(&node),
            r#"<span title="a&quot;b">&lt;b&gt; &amp; &#39;c&#39;</span>"#
        );
    }

    #[test]
    fn void_elements_are_not_closed() {
        let node: Node = Element::new(Tag::Input)
            .attrs(Attributes::new().set("placeholder", "Name"))
            .into();
        assert_eq!(to_html(&node), r#"<input placeholder="Name">"#);
    }

    #[test]
    fn malformed_attribute_names_cannot_break_out_of_the_tag() {
        let mut attrs = Attributes::new().set("x\" onmouseover=\"alert(1)", "v");
        attrs
            .extra
            .insert("y\" onclick=\"alert(2)".to_string(), "v".to_string());
        let node: Node = Element::new(Tag::Button)
            .attrs(attrs)
            .child("ok")
            .into();

        assert_eq!(to_html(&node), "<button>ok</button>");
    }

    #[test]
    fn reserved_names_are_written_once() {
        let mut attrs = Attributes::new()
            .button_type(ButtonType::Button)
            .set("class", "b")
            .set("role", "note");
        attrs.extra.insert("type".to_string(), "reset".to_string());
        attrs.extra.insert("disabled".to_string(), "".to_string());
        let node: Node = Element::new(Tag::Button).class("a").attrs(attrs).into();

        let html = to_html(&node);
        assert_eq!(
            html,
            r#"<button class="a" type="button" role="note"></button>"#
        );
        assert_eq!(html.matches("type=").count(), 1);
        assert_eq!(html.matches("class=").count(), 1);
    }

    #[test]
    fn input_type_is_written_from_pass_through() {
        let node: Node = Element::new(Tag::Input)
            .attrs(Attributes::new().set("type", "email"))
            .into();
        assert_eq!(to_html(&node), r#"<input type="email">"#);
    }

    #[test]
    fn fragments_have_no_wrapper() {
        let node = Node::fragment(vec![Node::text("a"), Node::text("b")]);
        assert_eq!(to_html(&node), "ab");
    }
}
