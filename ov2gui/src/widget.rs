//! Widget definitions from `.gui` files.
//!
//! A [`Widget`] carries the fields every GUI element has (name, position, size) and a
//! [`WidgetKind`] payload. Windows, scrollbars and EU3 dialogs own child widgets: inside
//! their blocks any key that is not one of their own properties is read as a nested
//! widget declaration keyed by its type name.

use ov2txt::{ParseError, Source, SyntaxErrorKind, Vec2i};
use serde::Serialize;

use crate::parser::{click_sound, parse_block, read_orientation, text_format};
use crate::types::{ClickSound, Orientation, TextFormat};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Widget {
    pub name: Option<String>,
    /// Offset from the anchor given by the widget's orientation.
    pub position: Vec2i,
    /// Only read for types that accept a `size` property; `(0, 0)` otherwise.
    pub size: Vec2i,
    #[serde(flatten)]
    pub kind: WidgetKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum WidgetKind {
    #[serde(rename = "windowType")]
    Window(Window),
    #[serde(rename = "iconType")]
    Icon(Icon),
    #[serde(rename = "guiButtonType")]
    Button(Button),
    #[serde(rename = "textBoxType")]
    TextBox(TextBox),
    #[serde(rename = "instantTextBoxType")]
    InstantTextBox(InstantTextBox),
    #[serde(rename = "OverlappingElementsBoxType")]
    OverlappingElementsBox(OverlappingElementsBox),
    #[serde(rename = "scrollbarType")]
    Scrollbar(Scrollbar),
    #[serde(rename = "checkboxType")]
    Checkbox(Checkbox),
    #[serde(rename = "editBoxType")]
    EditBox(EditBox),
    #[serde(rename = "listBoxType")]
    ListBox(ListBox),
    #[serde(rename = "eu3dialogtype")]
    Eu3Dialog(Eu3Dialog),
    #[serde(rename = "shieldtype")]
    Shield(Shield),
    /// A bare named position, used by code to place dynamically created elements.
    #[serde(rename = "positionType")]
    Position,
}

impl WidgetKind {
    /// Looks up a type keyword (any case) and returns that variant with default fields.
    pub fn from_keyword(keyword: &str) -> Option<WidgetKind> {
        let kind = match keyword.to_ascii_lowercase().as_str() {
            "windowtype" => WidgetKind::Window(Window::default()),
            "icontype" => WidgetKind::Icon(Icon::default()),
            "guibuttontype" => WidgetKind::Button(Button::default()),
            "textboxtype" => WidgetKind::TextBox(TextBox::default()),
            "instanttextboxtype" => WidgetKind::InstantTextBox(InstantTextBox::default()),
            "overlappingelementsboxtype" => {
                WidgetKind::OverlappingElementsBox(OverlappingElementsBox::default())
            }
            "scrollbartype" => WidgetKind::Scrollbar(Scrollbar::default()),
            "checkboxtype" => WidgetKind::Checkbox(Checkbox::default()),
            "editboxtype" => WidgetKind::EditBox(EditBox::default()),
            "listboxtype" => WidgetKind::ListBox(ListBox::default()),
            "eu3dialogtype" => WidgetKind::Eu3Dialog(Eu3Dialog::default()),
            "shieldtype" => WidgetKind::Shield(Shield::default()),
            "positiontype" => WidgetKind::Position,
            _ => return None,
        };
        Some(kind)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            WidgetKind::Window(_) => "windowType",
            WidgetKind::Icon(_) => "iconType",
            WidgetKind::Button(_) => "guiButtonType",
            WidgetKind::TextBox(_) => "textBoxType",
            WidgetKind::InstantTextBox(_) => "instantTextBoxType",
            WidgetKind::OverlappingElementsBox(_) => "OverlappingElementsBoxType",
            WidgetKind::Scrollbar(_) => "scrollbarType",
            WidgetKind::Checkbox(_) => "checkboxType",
            WidgetKind::EditBox(_) => "editBoxType",
            WidgetKind::ListBox(_) => "listBoxType",
            WidgetKind::Eu3Dialog(_) => "eu3dialogtype",
            WidgetKind::Shield(_) => "shieldtype",
            WidgetKind::Position => "positionType",
        }
    }

    /// Whether `size` is one of this type's properties.
    fn accepts_size(&self) -> bool {
        matches!(
            self,
            WidgetKind::Window(_)
                | WidgetKind::Button(_)
                | WidgetKind::OverlappingElementsBox(_)
                | WidgetKind::Scrollbar(_)
                | WidgetKind::EditBox(_)
                | WidgetKind::ListBox(_)
                | WidgetKind::Eu3Dialog(_)
        )
    }

    fn read_property(
        &mut self,
        src: &mut Source,
        key: &str,
        raw: &str,
    ) -> Result<bool, ParseError> {
        match self {
            WidgetKind::Window(w) => w.read_property(src, key, raw),
            WidgetKind::Icon(w) => w.read_property(src, key),
            WidgetKind::Button(w) => w.read_property(src, key),
            WidgetKind::TextBox(w) => w.read_property(src, key),
            WidgetKind::InstantTextBox(w) => w.read_property(src, key),
            WidgetKind::OverlappingElementsBox(w) => w.read_property(src, key),
            WidgetKind::Scrollbar(w) => w.read_property(src, key, raw),
            WidgetKind::Checkbox(w) => w.read_property(src, key),
            WidgetKind::EditBox(w) => w.read_property(src, key),
            WidgetKind::ListBox(w) => w.read_property(src, key),
            WidgetKind::Eu3Dialog(w) => w.read_property(src, key, raw),
            WidgetKind::Shield(w) => w.read_property(src, key),
            WidgetKind::Position => Ok(false),
        }
    }
}

impl Widget {
    pub fn new(kind: WidgetKind) -> Widget {
        Widget {
            name: None,
            position: Vec2i::default(),
            size: Vec2i::default(),
            kind,
        }
    }

    /// The canonical type keyword, e.g. `guiButtonType`.
    pub fn type_name(&self) -> &'static str {
        self.kind.keyword()
    }

    /// Child widgets in source order. Empty for types that cannot contain others.
    pub fn children(&self) -> &[Widget] {
        match &self.kind {
            WidgetKind::Window(w) => &w.children,
            WidgetKind::Scrollbar(w) => &w.children,
            WidgetKind::Eu3Dialog(w) => &w.children,
            _ => &[],
        }
    }

    /// Number of widgets in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Widget::node_count).sum::<usize>()
    }

    /// Depth-first, pre-order search of this subtree for a widget named `name`.
    pub fn find(&self, name: &str) -> Option<&Widget> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(name))
    }

    /// Visits this subtree depth-first, pre-order, with each widget's depth below `self`.
    pub fn walk<F: FnMut(&Widget, usize)>(&self, f: &mut F) {
        self.walk_at(0, f);
    }

    fn walk_at<F: FnMut(&Widget, usize)>(&self, depth: usize, f: &mut F) {
        f(self, depth);
        for child in self.children() {
            child.walk_at(depth + 1, f);
        }
    }

    fn read_property(
        &mut self,
        src: &mut Source,
        key: &str,
        raw: &str,
    ) -> Result<bool, ParseError> {
        match key {
            "name" => self.name = Some(src.string_literal()?),
            "position" => src.read_vec2i(&mut self.position)?,
            "size" if self.kind.accepts_size() => src.read_vec2i(&mut self.size)?,
            _ => return self.kind.read_property(src, key, raw),
        }
        Ok(true)
    }
}

/// Parses the `{ ... }` block of a widget whose type keyword is `type_name`.
pub fn parse_widget(src: &mut Source, type_name: &str) -> Result<Widget, ParseError> {
    let kind = WidgetKind::from_keyword(type_name).ok_or_else(|| {
        src.error(SyntaxErrorKind::UnknownType {
            type_name: type_name.to_string(),
            dialect: "gui",
        })
    })?;
    let owner = kind.keyword();
    let mut widget = Widget::new(kind);

    parse_block(src, owner, |src, key, raw| widget.read_property(src, key, raw))?;

    Ok(widget)
}

fn parse_child(
    src: &mut Source,
    type_name: &str,
    children: &mut Vec<Widget>,
) -> Result<bool, ParseError> {
    children.push(parse_widget(src, type_name)?);
    Ok(true)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Window {
    pub background: Option<String>,
    pub moveable: bool,
    /// Widgets named here are not drawn.
    pub dont_render: Option<String>,
    pub horizontal_border: Option<String>,
    pub vertical_border: Option<String>,
    pub full_screen: bool,
    pub orientation: Orientation,
    pub up_sound: Option<String>,
    pub down_sound: Option<String>,
    pub children: Vec<Widget>,
}

impl Window {
    fn read_property(
        &mut self,
        src: &mut Source,
        key: &str,
        raw: &str,
    ) -> Result<bool, ParseError> {
        match key {
            "background" => self.background = Some(src.string_literal()?),
            "moveable" => self.moveable = src.bool_literal()?,
            "dontrender" => self.dont_render = Some(src.string_literal()?),
            "horizontalborder" => self.horizontal_border = Some(src.string_literal()?),
            "verticalborder" => self.vertical_border = Some(src.string_literal()?),
            "fullscreen" => self.full_screen = src.bool_literal()?,
            "orientation" => read_orientation(src, &mut self.orientation)?,
            "upsound" => self.up_sound = Some(src.string_literal()?),
            "downsound" => self.down_sound = Some(src.string_literal()?),
            _ => return parse_child(src, raw, &mut self.children),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Icon {
    pub sprite_type: Option<String>,
    pub orientation: Orientation,
    pub frame: i64,
    pub button_mesh: Option<String>,
    pub rotation: f64,
    pub scale: f64,
}

impl Icon {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "spritetype" => self.sprite_type = Some(src.string_literal()?),
            "orientation" => read_orientation(src, &mut self.orientation)?,
            "frame" => self.frame = src.int_literal()?,
            "buttonmesh" => self.button_mesh = Some(src.string_literal()?),
            "rotation" => self.rotation = src.float_literal()?,
            "scale" => self.scale = src.float_literal()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Button {
    pub quad_texture_sprite: Option<String>,
    pub sprite_type: Option<String>,
    pub button_text: Option<String>,
    pub button_font: Option<String>,
    pub shortcut: Option<String>,
    pub click_sound: ClickSound,
    pub orientation: Orientation,
    pub tooltip: Option<String>,
    pub tooltip_text: Option<String>,
    pub delayed_tooltip_text: Option<String>,
    pub parent: Option<String>,
    pub rotation: f64,
    pub format: TextFormat,
}

impl Button {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "quadtexturesprite" => self.quad_texture_sprite = Some(src.string_literal()?),
            "buttontext" => self.button_text = Some(src.string_literal()?),
            "buttonfont" => self.button_font = Some(src.string_literal()?),
            "shortcut" => self.shortcut = Some(src.string_literal()?),
            "clicksound" => self.click_sound = click_sound(src)?,
            "orientation" => read_orientation(src, &mut self.orientation)?,
            "tooltip" => self.tooltip = Some(src.string_literal()?),
            "tooltiptext" => self.tooltip_text = Some(src.string_literal()?),
            "delayedtooltiptext" => self.delayed_tooltip_text = Some(src.string_literal()?),
            "spritetype" => self.sprite_type = Some(src.string_literal()?),
            "parent" => self.parent = Some(src.string_literal()?),
            "rotation" => self.rotation = src.float_literal()?,
            "format" => self.format = text_format(src)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextBox {
    pub font: Option<String>,
    pub border_size: Vec2i,
    pub text: Option<String>,
    pub max_width: i64,
    pub max_height: i64,
    pub format: TextFormat,
    pub fixed_size: bool,
    pub texture_file: Option<String>,
    pub orientation: Orientation,
}

impl TextBox {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "font" => self.font = Some(src.string_literal()?),
            "bordersize" => src.read_vec2i(&mut self.border_size)?,
            "text" => self.text = Some(src.string_literal()?),
            "maxwidth" => self.max_width = src.int_literal()?,
            "maxheight" => self.max_height = src.int_literal()?,
            "format" => self.format = text_format(src)?,
            "fixedsize" => self.fixed_size = src.bool_literal()?,
            "texturefile" => self.texture_file = Some(src.string_literal()?),
            "orientation" => read_orientation(src, &mut self.orientation)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// A text box redrawn every frame instead of cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InstantTextBox {
    #[serde(flatten)]
    pub text_box: TextBox,
    pub always_transparent: bool,
}

impl InstantTextBox {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "allwaystransparent" => self.always_transparent = src.bool_literal()?,
            _ => return self.text_box.read_property(src, key),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverlappingElementsBox {
    pub orientation: Orientation,
    pub format: TextFormat,
    pub spacing: f64,
}

impl OverlappingElementsBox {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "orientation" => read_orientation(src, &mut self.orientation)?,
            "format" => self.format = text_format(src)?,
            "spacing" => self.spacing = src.float_literal()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scrollbar {
    pub slider: Option<String>,
    pub track: Option<String>,
    pub left_button: Option<String>,
    pub right_button: Option<String>,
    pub priority: i64,
    pub border_size: Vec2i,
    pub max_value: f64,
    pub min_value: f64,
    pub step_size: f64,
    pub start_value: f64,
    pub horizontal: bool,
    pub use_range_limit: bool,
    pub range_limit_min: f64,
    pub range_limit_max: f64,
    pub range_limit_min_icon: Option<String>,
    pub range_limit_max_icon: Option<String>,
    pub lockable: bool,
    pub children: Vec<Widget>,
}

impl Scrollbar {
    fn read_property(
        &mut self,
        src: &mut Source,
        key: &str,
        raw: &str,
    ) -> Result<bool, ParseError> {
        match key {
            "slider" => self.slider = Some(src.string_literal()?),
            "track" => self.track = Some(src.string_literal()?),
            "leftbutton" => self.left_button = Some(src.string_literal()?),
            "rightbutton" => self.right_button = Some(src.string_literal()?),
            "priority" => self.priority = src.int_literal()?,
            "bordersize" => src.read_vec2i(&mut self.border_size)?,
            "maxvalue" => self.max_value = src.float_literal()?,
            "minvalue" => self.min_value = src.float_literal()?,
            "stepsize" => self.step_size = src.float_literal()?,
            "startvalue" => self.start_value = src.float_literal()?,
            "horizontal" => self.horizontal = src.bool_literal()?,
            "userangelimit" => self.use_range_limit = src.bool_literal()?,
            "rangelimitmin" => self.range_limit_min = src.float_literal()?,
            "rangelimitmax" => self.range_limit_max = src.float_literal()?,
            "rangelimitminicon" => self.range_limit_min_icon = Some(src.string_literal()?),
            "rangelimitmaxicon" => self.range_limit_max_icon = Some(src.string_literal()?),
            "lockable" => self.lockable = src.bool_literal()?,
            _ => return parse_child(src, raw, &mut self.children),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Checkbox {
    pub quad_texture_sprite: Option<String>,
    pub tooltip: Option<String>,
    pub tooltip_text: Option<String>,
    pub delayed_tooltip_text: Option<String>,
    pub button_text: Option<String>,
    pub button_font: Option<String>,
    pub orientation: Orientation,
    pub shortcut: Option<String>,
}

impl Checkbox {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "quadtexturesprite" => self.quad_texture_sprite = Some(src.string_literal()?),
            "tooltip" => self.tooltip = Some(src.string_literal()?),
            "tooltiptext" => self.tooltip_text = Some(src.string_literal()?),
            "delayedtooltiptext" => self.delayed_tooltip_text = Some(src.string_literal()?),
            "buttontext" => self.button_text = Some(src.string_literal()?),
            "buttonfont" => self.button_font = Some(src.string_literal()?),
            "orientation" => read_orientation(src, &mut self.orientation)?,
            "shortcut" => self.shortcut = Some(src.string_literal()?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EditBox {
    pub texture_file: Option<String>,
    pub font: Option<String>,
    pub border_size: Vec2i,
    pub text: Option<String>,
    pub orientation: Orientation,
}

impl EditBox {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "texturefile" => self.texture_file = Some(src.string_literal()?),
            "font" => self.font = Some(src.string_literal()?),
            "bordersize" => src.read_vec2i(&mut self.border_size)?,
            "text" => self.text = Some(src.string_literal()?),
            "orientation" => read_orientation(src, &mut self.orientation)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListBox {
    pub background: Option<String>,
    pub orientation: Orientation,
    pub spacing: i64,
    pub scrollbar_type: Option<String>,
    pub border_size: Vec2i,
    pub priority: i64,
    pub step: i64,
    pub horizontal: bool,
    pub offset: Vec2i,
    pub always_transparent: bool,
}

impl ListBox {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "background" => self.background = Some(src.string_literal()?),
            "orientation" => read_orientation(src, &mut self.orientation)?,
            "spacing" => self.spacing = src.int_literal()?,
            "scrollbartype" => self.scrollbar_type = Some(src.string_literal()?),
            "bordersize" => src.read_vec2i(&mut self.border_size)?,
            "priority" => self.priority = src.int_literal()?,
            "step" => self.step = src.int_literal()?,
            "horizontal" => self.horizontal = src.bool_literal()?,
            "offset" => src.read_vec2i(&mut self.offset)?,
            "allwaystransparent" => self.always_transparent = src.bool_literal()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Dialog container carried over from EU3. Like a window, without sounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Eu3Dialog {
    pub background: Option<String>,
    pub moveable: bool,
    pub dont_render: Option<String>,
    pub horizontal_border: Option<String>,
    pub vertical_border: Option<String>,
    pub full_screen: bool,
    pub orientation: Orientation,
    pub children: Vec<Widget>,
}

impl Eu3Dialog {
    fn read_property(
        &mut self,
        src: &mut Source,
        key: &str,
        raw: &str,
    ) -> Result<bool, ParseError> {
        match key {
            "background" => self.background = Some(src.string_literal()?),
            "moveable" => self.moveable = src.bool_literal()?,
            "dontrender" => self.dont_render = Some(src.string_literal()?),
            "horizontalborder" => self.horizontal_border = Some(src.string_literal()?),
            "verticalborder" => self.vertical_border = Some(src.string_literal()?),
            "fullscreen" => self.full_screen = src.bool_literal()?,
            "orientation" => read_orientation(src, &mut self.orientation)?,
            _ => return parse_child(src, raw, &mut self.children),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Shield {
    pub sprite_type: Option<String>,
    pub rotation: f64,
}

impl Shield {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "spritetype" => self.sprite_type = Some(src.string_literal()?),
            "rotation" => self.rotation = src.float_literal()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
