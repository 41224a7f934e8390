// Showcase content - the sample components the gallery and CLI display
//
// Kept separate from the components themselves: these are consumers of the
// design system (fixed labels, sample items, the four demo dialogs), not part
// of it.

use crate::components::{Button, Component, DialogProps, Form, ItemDecoration, List};
use crate::config::GalleryConfig;
use crate::markup::{Attributes, ButtonType, Callback, Element, Node, Tag};
use crate::style::{ButtonVariant, DialogVariant, FormVariant, ListVariant, Size};

pub const PAGE_TITLE: &str = "Design System Components";

pub const SAMPLE_ITEMS: [&str; 4] = ["First Item", "Second Item", "Third Item", "Fourth Item"];

/// Key that opens each demo dialog in the gallery
pub fn dialog_key(variant: DialogVariant) -> char {
    match variant {
        DialogVariant::Default => '1',
        DialogVariant::Info => '2',
        DialogVariant::Warning => '3',
        DialogVariant::Error => '4',
    }
}

pub fn dialog_for_key(key: char) -> Option<DialogVariant> {
    DialogVariant::all()
        .iter()
        .copied()
        .find(|v| dialog_key(*v) == key)
}

fn section(title: &str, body: Vec<Node>) -> Node {
    Element::new(Tag::Section)
        .class("component-section")
        .child(Element::new(Tag::H2).child(title))
        .children(body)
        .into()
}

fn row(class: &str, items: Vec<Node>) -> Node {
    Element::new(Tag::Div).class(class).children(items).into()
}

fn heading(text: &str) -> Node {
    Element::new(Tag::H3).child(text).into()
}

/// Every button variant at every size, plus the disabled row
pub fn buttons_section(size: Size) -> Node {
    let mut body = Vec::new();

    for variant in ButtonVariant::all() {
        let title = format!("{} Buttons", capitalize(variant.as_str()));
        let buttons = Size::all()
            .iter()
            .map(|s| {
                Button::label(capitalize(s.as_str()))
                    .variant(variant)
                    .size(s)
                    .render()
            })
            .collect();
        body.push(heading(&title));
        body.push(row("button-row", buttons));
    }

    let disabled = ButtonVariant::all()
        .iter()
        .map(|variant| {
            Button::label(capitalize(variant.as_str()))
                .variant(variant)
                .size(size)
                .attrs(Attributes::new().disabled(true))
                .render()
        })
        .collect();
    body.push(heading("Disabled State"));
    body.push(row("button-row", disabled));

    section("Button Examples", body)
}

/// Default, bordered and card lists, then card lists at each size
pub fn lists_section(size: Size, decoration: &ItemDecoration) -> Node {
    let mut body = Vec::new();

    for (title, variant) in [
        ("Default List", ListVariant::Default),
        ("Bordered List", ListVariant::Bordered),
        ("Card List", ListVariant::Card),
    ] {
        body.push(heading(title));
        body.push(
            List::of(SAMPLE_ITEMS)
                .variant(variant)
                .size(size)
                .decoration(decoration.clone())
                .render(),
        );
    }

    body.push(heading("Different Sizes"));
    for s in Size::all() {
        body.push(Element::new(Tag::P).child(capitalize(s.as_str())).into());
        body.push(
            List::of(SAMPLE_ITEMS.iter().take(2).copied())
                .variant(ListVariant::Card)
                .size(s)
                .decoration(decoration.clone())
                .render(),
        );
    }

    section("List Examples", body)
}

/// Primary and secondary forms with a field and a submit button each
pub fn forms_section(size: Size, on_submit: Callback) -> Node {
    let primary = Form::new()
        .size(size)
        .on_submit(on_submit.clone())
        .child(input("text", "Enter your name"))
        .child(
            Button::label("Submit")
                .attrs(Attributes::new().button_type(ButtonType::Submit))
                .render(),
        );

    let secondary = Form::new()
        .variant(FormVariant::Secondary)
        .size(Size::Large)
        .on_submit(on_submit)
        .child(input("email", "Enter your email"))
        .child(
            Button::label("Subscribe")
                .variant(ButtonVariant::Secondary)
                .attrs(Attributes::new().button_type(ButtonType::Submit))
                .render(),
        );

    section(
        "Form Examples",
        vec![
            heading("Primary Form"),
            primary.render(),
            heading("Secondary Form"),
            secondary.render(),
        ],
    )
}

fn input(kind: &str, placeholder: &str) -> Node {
    Element::new(Tag::Input)
        .attrs(
            Attributes::new()
                .set("type", kind)
                .set("placeholder", placeholder),
        )
        .into()
}

/// Buttons that open the four demo dialogs
pub fn dialogs_section(open: impl Fn(DialogVariant) -> Callback) -> Node {
    let triggers = DialogVariant::all()
        .iter()
        .map(|variant| {
            let style = match variant {
                DialogVariant::Warning => ButtonVariant::Secondary,
                DialogVariant::Info | DialogVariant::Error => ButtonVariant::Outline,
                DialogVariant::Default => ButtonVariant::Primary,
            };
            Button::label(format!(
                "Open {} Dialog ({})",
                capitalize(variant.as_str()),
                dialog_key(*variant)
            ))
            .variant(style)
            .attrs(Attributes::new().on_click(open(*variant)))
            .render()
        })
        .collect();

    section("Dialog Examples", vec![row("button-row", triggers)])
}

/// Props for one of the demo dialogs (closed; callers set `is_open`)
///
/// `on_confirm` is bound to the primary action, every other action closes.
pub fn dialog_props(variant: DialogVariant, on_close: Callback, on_confirm: Callback) -> DialogProps {
    let cancel = |label: &str| {
        Button::label(label)
            .variant(ButtonVariant::Outline)
            .attrs(Attributes::new().on_click(on_close.clone()))
            .render()
    };
    let confirm = |label: &str| {
        Button::label(label)
            .attrs(Attributes::new().on_click(on_confirm.clone()))
            .render()
    };
    let paragraph = |text: &str| -> Node { Element::new(Tag::P).child(text).into() };

    let props = DialogProps::new(dialog_title(variant), on_close.clone()).variant(variant);
    match variant {
        DialogVariant::Default => props
            .child(paragraph("This is a default dialog with standard actions."))
            .action(cancel("Cancel"))
            .action(confirm("Confirm")),
        DialogVariant::Info => props
            .size(Size::Small)
            .child(paragraph("This is an informational message in a small dialog."))
            .action(confirm("Got it")),
        DialogVariant::Warning => props
            .child(paragraph(
                "This action might have consequences. Are you sure you want to proceed?",
            ))
            .action(cancel("Cancel"))
            .action(confirm("Proceed")),
        DialogVariant::Error => props
            .size(Size::Large)
            .child(paragraph("An error occurred while processing your request."))
            .child(
                List::of(["Error detail 1", "Error detail 2", "Error detail 3"])
                    .variant(ListVariant::Bordered)
                    .size(Size::Small)
                    .render(),
            )
            .action(cancel("Close")),
    }
}

pub fn dialog_title(variant: DialogVariant) -> &'static str {
    match variant {
        DialogVariant::Default => "Default Dialog",
        DialogVariant::Info => "Information",
        DialogVariant::Warning => "Warning",
        DialogVariant::Error => "Error",
    }
}

/// The whole gallery page with every dialog closed
pub fn page(gallery: &GalleryConfig) -> Node {
    Element::new(Tag::Div)
        .class("app")
        .child(Element::new(Tag::H1).child(PAGE_TITLE))
        .child(buttons_section(gallery.default_size))
        .child(lists_section(gallery.default_size, &gallery.list_decoration))
        .child(dialogs_section(|_| Callback::noop()))
        .child(forms_section(gallery.default_size, Callback::noop()))
        .into()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
