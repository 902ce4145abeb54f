//! HTML output: context-aware escaping and the edit form renderer

mod escape;
mod render;
mod style;

pub use escape::{Escaper, HtmlEscaper};
pub use render::FormRenderer;
pub use style::EDITOR_STYLES;
