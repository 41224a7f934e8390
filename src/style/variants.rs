// Variant and size vocabulary
//
// Typed names for the component families and their style buckets. These are
// caller conveniences: the resolver still works on plain strings, so a name
// outside these sets is styled literally rather than rejected.

/// Component families known to the design system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Button,
    List,
    Form,
    Dialog,
}

impl ComponentKind {
    /// BEM block name
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Button => "button",
            ComponentKind::List => "list",
            ComponentKind::Form => "form",
            ComponentKind::Dialog => "dialog",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "button" => Some(Self::Button),
            "list" => Some(Self::List),
            "form" => Some(Self::Form),
            "dialog" | "modal" => Some(Self::Dialog),
            _ => None,
        }
    }

    /// Whether `variant` names one of this family's built-in styles
    pub fn has_variant(&self, variant: &str) -> bool {
        match self {
            ComponentKind::Button => ButtonVariant::parse(variant).is_some(),
            ComponentKind::List => ListVariant::parse(variant).is_some(),
            ComponentKind::Form => FormVariant::parse(variant).is_some(),
            ComponentKind::Dialog => DialogVariant::parse(variant).is_some(),
        }
    }
}

/// Scale bucket shared by every family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    pub fn all() -> &'static [Size] {
        &[Size::Small, Size::Medium, Size::Large]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "small" | "sm" => Some(Self::Small),
            "medium" | "md" => Some(Self::Medium),
            "large" | "lg" => Some(Self::Large),
            _ => None,
        }
    }
}

/// Declares a family's variant enum with its string table.
///
/// The first listed variant is the family default.
macro_rules! variant_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $default:ident => $default_str:literal $(, $variant:ident => $str:literal)* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            $default,
            $($variant,)*
        }

        impl $name {
            pub fn all() -> &'static [$name] {
                &[$name::$default, $($name::$variant,)*]
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $name::$default => $default_str,
                    $($name::$variant => $str,)*
                }
            }

            /// Case-insensitive lookup
            pub fn parse(s: &str) -> Option<Self> {
                let lowered = s.to_lowercase();
                Self::all().iter().copied().find(|v| v.as_str() == lowered)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

variant_enum! {
    /// Button styles (default: primary)
    ButtonVariant { Primary => "primary", Secondary => "secondary", Outline => "outline" }
}

variant_enum! {
    /// List styles (default: the neutral "default" look)
    ListVariant {
        Default => "default",
        Bordered => "bordered",
        Card => "card",
        Primary => "primary",
        Secondary => "secondary",
    }
}

variant_enum! {
    /// Form styles (default: primary)
    FormVariant { Primary => "primary", Secondary => "secondary" }
}

variant_enum! {
    /// Dialog severities (default: the neutral "default" look)
    DialogVariant { Default => "default", Info => "info", Warning => "warning", Error => "error" }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ListVariant::default(), ListVariant::Default);
        assert_eq!(FormVariant::default(), FormVariant::Primary);
        assert_eq!(DialogVariant::default(), DialogVariant::Default);
        assert_eq!(Size::default(), Size::Medium);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ButtonVariant::parse("Outline"), Some(ButtonVariant::Outline));
        assert_eq!(DialogVariant::parse("WARNING"), Some(DialogVariant::Warning));
        assert_eq!(Size::parse("LG"), Some(Size::Large));
        assert_eq!(ComponentKind::parse("Modal"), Some(ComponentKind::Dialog));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(ButtonVariant::parse("ghost"), None);
        assert_eq!(Size::parse("xl"), None);
        assert_eq!(ComponentKind::parse("table"), None);
    }

    #[test]
    fn variants_belong_to_their_family() {
        assert!(ComponentKind::Form.has_variant("Secondary"));
        assert!(!ComponentKind::Form.has_variant("outline"));
        assert!(ComponentKind::Button.has_variant("outline"));
        assert!(ComponentKind::List.has_variant("card"));
        assert!(!ComponentKind::Dialog.has_variant("card"));
    }

    #[test]
    fn every_variant_round_trips_through_its_name() {
        for v in ListVariant::all() {
            assert_eq!(ListVariant::parse(v.as_str()), Some(*v));
        }
        for s in Size::all() {
            assert_eq!(Size::parse(&s.to_string()), Some(*s));
        }
    }
}
