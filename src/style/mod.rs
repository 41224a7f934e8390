// Style module - class naming and terminal styling
//
// - resolver: the BEM class string every component is classed with
// - variants: typed variant/size vocabulary per component family
// - stylesheet: class tokens -> ratatui styles for the terminal host

pub mod resolver;
pub mod stylesheet;
pub mod variants;

pub use resolver::{resolve, VariantSpec};
pub use stylesheet::{SheetKind, Stylesheet};
pub use variants::{ButtonVariant, ComponentKind, DialogVariant, FormVariant, ListVariant, Size};
