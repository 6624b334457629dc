//! The collection of sprite and widget definitions loaded from one or more documents.

use std::path::Path;

use ov2txt::{ParseError, Source, Warning};
use serde::Serialize;

use crate::parser::{DocumentKind, parse_document};
use crate::sprite::Sprite;
use crate::widget::Widget;

/// Database of parsed interface definitions, in load order.
#[derive(Debug, Default, Serialize)]
pub struct Interface {
    pub sprites: Vec<Sprite>,
    /// Top-level widgets; nested widgets live in their container's children.
    pub widgets: Vec<Widget>,
    /// Non-fatal diagnostics from every document parsed so far.
    #[serde(skip)]
    pub warnings: Vec<Warning>,
}

impl Interface {
    pub fn new() -> Interface {
        Interface::default()
    }

    /// Parses a `.gfx` or `.gui` file and appends its definitions.
    ///
    /// On error nothing from the file is kept.
    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P) -> Result<DocumentKind, ParseError> {
        let mut src = Source::open(path)?;
        self.parse_source(&mut src)
    }

    /// Like [`Interface::parse_file`] for text already in memory. `name` is used in
    /// diagnostics.
    pub fn parse_text(&mut self, name: &str, text: &str) -> Result<DocumentKind, ParseError> {
        let mut src = Source::from_text(name, text);
        self.parse_source(&mut src)
    }

    fn parse_source(&mut self, src: &mut Source) -> Result<DocumentKind, ParseError> {
        let mut sprites = Vec::new();
        let mut widgets = Vec::new();
        let result = parse_document(src, &mut sprites, &mut widgets);
        self.warnings.extend(src.take_warnings());
        let kind = result?;

        log::debug!("{}: {:?}", src.name(), kind);
        self.sprites.append(&mut sprites);
        self.widgets.append(&mut widgets);
        Ok(kind)
    }

    /// Get a sprite by name. The first definition wins.
    pub fn sprite(&self, name: &str) -> Option<&Sprite> {
        self.sprites
            .iter()
            .find(|sprite| sprite.name.as_deref() == Some(name))
    }

    /// Get a top-level widget by name. The first definition wins.
    pub fn widget(&self, name: &str) -> Option<&Widget> {
        self.widgets
            .iter()
            .find(|widget| widget.name.as_deref() == Some(name))
    }

    /// Searches every widget tree, depth-first in load order, for a widget named `name`.
    pub fn find_widget(&self, name: &str) -> Option<&Widget> {
        self.widgets.iter().find_map(|widget| widget.find(name))
    }

    /// Total number of widgets, counting nested children.
    pub fn widget_node_count(&self) -> usize {
        self.widgets.iter().map(Widget::node_count).sum()
    }

    /// Merge another database into this one. Its definitions go after ours.
    pub fn merge(&mut self, mut other: Interface) {
        self.sprites.append(&mut other.sprites);
        self.widgets.append(&mut other.widgets);
        self.warnings.append(&mut other.warnings);
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty() && self.widgets.is_empty()
    }
}
