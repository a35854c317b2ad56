/// Renderers turning grouped tables and diffs into output text.
///
/// A [`Renderer`] produces its output as a lazy sequence of chunks; each
/// chunk is a complete piece of output ending with a newline, and chunks are
/// meant to be written to the sink in order. Renderers are selected by
/// [`RenderFormat`], never by name lookup.
mod html;
mod json;
mod layout;
mod palette;
mod text;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use layout::{COLUMN_WIDTH, Cell, format_line};
pub use palette::{Palette, Role};
pub use text::TextRenderer;

use crate::diff::DatasetDiff;
use crate::group::LanguageGroups;

/// Lazily produced output chunks, each ending with `\n`.
pub type Chunks<'a> = Box<dyn Iterator<Item = String> + 'a>;

/// Captions threaded into a rendered report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderLabels {
    /// Report title.
    pub title: String,
    /// Label of the primary (A) image, usually its pattern.
    pub image: String,
    /// Label of the secondary (B) image; empty in flat mode.
    pub diff_image: String,
}

/// Output format of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    /// XHTML document.
    Html,
    /// Column-aligned text, optionally colored.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

impl RenderFormat {
    /// Builds the renderer for this format.
    ///
    /// `palette` only affects [`RenderFormat::Text`].
    pub fn renderer(self, labels: RenderLabels, palette: Palette) -> Box<dyn Renderer> {
        match self {
            RenderFormat::Html => Box::new(HtmlRenderer::new(labels)),
            RenderFormat::Text => Box::new(TextRenderer::new(labels, palette)),
            RenderFormat::Json => Box::new(JsonRenderer::new(labels)),
        }
    }
}

/// Turns grouped data into output chunks.
///
/// The returned iterators borrow both the renderer and the rendered data.
pub trait Renderer {
    /// Renders the flat, single-dataset table.
    fn render_table<'a>(&'a self, groups: &'a LanguageGroups) -> Chunks<'a>;

    /// Renders the comparison of two datasets.
    fn render_diff<'a>(&'a self, diff: &'a DatasetDiff) -> Chunks<'a>;
}
