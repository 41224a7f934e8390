//! Variant class resolver
//!
//! Every component funnels its `{kind, variant, size, extra}` tuple through
//! here so the BEM naming convention lives in exactly one place:
//!
//! ```text
//! <kind> <kind>--<variant> <kind>--<size> <extra>
//! ```
//!
//! Values are taken literally. The resolver never validates membership in a
//! family's variant set and never fails.

use super::variants::{ComponentKind, Size};

/// Compose the class string for a component.
///
/// Leading/trailing whitespace is trimmed. Internal tokens are not
/// de-duplicated: callers own any conflicts they pass in `extra`.
pub fn resolve(kind: &str, variant: &str, size: &str, extra: Option<&str>) -> String {
    let classes = format!(
        "{kind} {kind}--{variant} {kind}--{size} {}",
        extra.unwrap_or("")
    );
    classes.trim().to_string()
}

/// The resolver input as a value
///
/// Built per render and thrown away once the class string exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSpec<'a> {
    pub kind: &'a str,
    pub variant: &'a str,
    pub size: &'a str,
    pub extra_classes: Option<&'a str>,
}

impl<'a> VariantSpec<'a> {
    pub fn new(kind: ComponentKind, variant: &'a str, size: Size) -> Self {
        Self {
            kind: kind.as_str(),
            variant,
            size: size.as_str(),
            extra_classes: None,
        }
    }

    /// Attach caller-supplied classes (appended after the generated tokens)
    pub fn with_extra(mut self, extra: Option<&'a str>) -> Self {
        self.extra_classes = extra;
        self
    }

    pub fn resolve(&self) -> String {
        resolve(self.kind, self.variant, self.size, self.extra_classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn composes_button_tokens_with_extra() {
        assert_eq!(
            resolve("button", "secondary", "small", Some("x")),
            "button button--secondary button--small x"
        );
    }

    #[test]
    fn omits_trailing_space_without_extra() {
        assert_eq!(
            resolve("list", "default", "medium", None),
            "list list--default list--medium"
        );
        assert_eq!(
            resolve("list", "default", "medium", Some("")),
            "list list--default list--medium"
        );
    }

    #[test]
    fn unknown_values_pass_through_literally() {
        assert_eq!(
            resolve("dialog", "neon", "huge", None),
            "dialog dialog--neon dialog--huge"
        );
    }

    #[test]
    fn duplicate_extra_tokens_are_kept() {
        assert_eq!(
            resolve("form", "primary", "large", Some("form form--primary")),
            "form form--primary form--large form form--primary"
        );
    }

    #[test]
    fn struct_form_matches_free_function() {
        let spec = VariantSpec::new(ComponentKind::Button, "outline", Size::Large)
            .with_extra(Some("wide"));
        assert_eq!(spec.resolve(), "button button--outline button--large wide");
        assert_eq!(
            spec.resolve(),
            resolve("button", "outline", "large", Some("wide"))
        );
    }

    fn token() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_-]{0,11}"
    }

    proptest! {
        #[test]
        fn resolving_is_deterministic(
            kind in token(),
            variant in token(),
            size in token(),
            extra in proptest::option::of("[ a-z0-9_-]{0,24}"),
        ) {
            let first = resolve(&kind, &variant, &size, extra.as_deref());
            let second = resolve(&kind, &variant, &size, extra.as_deref());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn output_starts_with_block_and_modifiers(
            kind in token(),
            variant in token(),
            size in token(),
        ) {
            let classes = resolve(&kind, &variant, &size, None);
            let tokens: Vec<&str> = classes.split_whitespace().collect();
            prop_assert_eq!(tokens.len(), 3);
            prop_assert_eq!(tokens[0], kind.as_str());
            prop_assert_eq!(tokens[1].to_string(), format!("{kind}--{variant}"));
            prop_assert_eq!(tokens[2].to_string(), format!("{kind}--{size}"));
        }

        #[test]
        fn output_is_trimmed(
            kind in token(),
            extra in "[ ]{0,3}[a-z]{0,6}[ ]{0,3}",
        ) {
            let classes = resolve(&kind, "primary", "medium", Some(&extra));
            prop_assert_eq!(classes.trim(), classes.as_str());
        }
    }
}
