//! Design system components
//!
//! Every component follows the same contract: take props, fill in the family
//! defaults, resolve the class string and return a [`Node`] tree. None of them
//! hold state except [`Dialog`], which owns a modal lifecycle controller.
//!
//! # Traits
//!
//! - [`Component`] - stateless props-to-markup rendering, used by the
//!   presentational components and the CLI `render` command

mod button;
pub mod dialog;
mod form;
pub mod list;

pub use button::Button;
pub use dialog::{dialog_markup, Dialog, DialogProps};
pub use form::Form;
pub use list::{ItemDecoration, List};

use crate::markup::Node;
use crate::style::ComponentKind;

/// Stateless component: props in, markup out
///
/// Rendering is pure. Calling `render` twice on the same props yields the
/// same tree, and nothing outside the returned node is touched.
pub trait Component {
    /// Family this component belongs to (the BEM block)
    fn kind(&self) -> ComponentKind;

    /// Full class string after defaults are applied
    fn class_name(&self) -> String;

    fn render(&self) -> Node;
}
