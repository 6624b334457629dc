//! Sprite definitions from `.gfx` files.
//!
//! Every entry of a `spriteTypes` table becomes a [`Sprite`]: an optional name plus one
//! of ten [`SpriteKind`] payloads. Fields that the source never sets keep the defaults
//! below.

use ov2txt::{ParseError, Rgb, Source, SyntaxErrorKind, Vec2i};
use serde::Serialize;

use crate::parser::{click_sound, load_type, parse_block};
use crate::types::{ClickSound, LoadType};

/// A named sprite definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sprite {
    /// Sprite name (e.g., "GFX_speed_indicator"). No definition is required to have one.
    pub name: Option<String>,
    #[serde(flatten)]
    pub kind: SpriteKind,
}

impl Sprite {
    /// The canonical type keyword, e.g. `spriteType`.
    pub fn type_name(&self) -> &'static str {
        self.kind.keyword()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum SpriteKind {
    #[serde(rename = "spriteType")]
    Simple(SimpleSprite),
    #[serde(rename = "lineChartType")]
    LineChart(LineChart),
    #[serde(rename = "maskedShieldType")]
    MaskedShield(MaskedShield),
    #[serde(rename = "progressbartype")]
    ProgressBar(ProgressBar),
    #[serde(rename = "corneredTileSpriteType")]
    CorneredTile(CorneredTileSprite),
    #[serde(rename = "textSpriteType")]
    Text(TextSprite),
    #[serde(rename = "barChartType")]
    BarChart(BarChart),
    #[serde(rename = "pieChartType")]
    PieChart(PieChart),
    #[serde(rename = "tileSpriteType")]
    Tile(TileSprite),
    #[serde(rename = "scrollingSprite")]
    Scrolling(ScrollingSprite),
}

impl SpriteKind {
    /// Looks up a type keyword (any case) and returns that variant with default fields.
    pub fn from_keyword(keyword: &str) -> Option<SpriteKind> {
        let kind = match keyword.to_ascii_lowercase().as_str() {
            "linecharttype" => SpriteKind::LineChart(LineChart::default()),
            "spritetype" => SpriteKind::Simple(SimpleSprite::default()),
            "maskedshieldtype" => SpriteKind::MaskedShield(MaskedShield::default()),
            "progressbartype" => SpriteKind::ProgressBar(ProgressBar::default()),
            "corneredtilespritetype" => SpriteKind::CorneredTile(CorneredTileSprite::default()),
            "textspritetype" => SpriteKind::Text(TextSprite::default()),
            "barcharttype" => SpriteKind::BarChart(BarChart::default()),
            "piecharttype" => SpriteKind::PieChart(PieChart::default()),
            "tilespritetype" => SpriteKind::Tile(TileSprite::default()),
            "scrollingsprite" => SpriteKind::Scrolling(ScrollingSprite::default()),
            _ => return None,
        };
        Some(kind)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            SpriteKind::Simple(_) => "spriteType",
            SpriteKind::LineChart(_) => "lineChartType",
            SpriteKind::MaskedShield(_) => "maskedShieldType",
            SpriteKind::ProgressBar(_) => "progressbartype",
            SpriteKind::CorneredTile(_) => "corneredTileSpriteType",
            SpriteKind::Text(_) => "textSpriteType",
            SpriteKind::BarChart(_) => "barChartType",
            SpriteKind::PieChart(_) => "pieChartType",
            SpriteKind::Tile(_) => "tileSpriteType",
            SpriteKind::Scrolling(_) => "scrollingSprite",
        }
    }

    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match self {
            SpriteKind::Simple(s) => s.read_property(src, key),
            SpriteKind::LineChart(s) => s.read_property(src, key),
            SpriteKind::MaskedShield(s) => s.read_property(src, key),
            SpriteKind::ProgressBar(s) => s.read_property(src, key),
            SpriteKind::CorneredTile(s) => s.read_property(src, key),
            SpriteKind::Text(s) => s.read_property(src, key),
            SpriteKind::BarChart(s) => s.read_property(src, key),
            SpriteKind::PieChart(s) => s.read_property(src, key),
            SpriteKind::Tile(s) => s.read_property(src, key),
            SpriteKind::Scrolling(s) => s.read_property(src, key),
        }
    }
}

/// Parses the `{ ... }` block of a sprite whose type keyword is `type_name`.
pub fn parse_sprite(src: &mut Source, type_name: &str) -> Result<Sprite, ParseError> {
    let mut kind = SpriteKind::from_keyword(type_name).ok_or_else(|| {
        src.error(SyntaxErrorKind::UnknownType {
            type_name: type_name.to_string(),
            dialect: "sprite",
        })
    })?;
    let mut name = None;

    parse_block(src, kind.keyword(), |src, key, _| {
        if key == "name" {
            name = Some(src.string_literal()?);
            return Ok(true);
        }
        kind.read_property(src, key)
    })?;

    Ok(Sprite { name, kind })
}

/// `spriteType`: a single texture, optionally split into a strip of frames.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleSprite {
    pub texture_file: Option<String>,
    pub effect_file: Option<String>,
    /// Number of frames in the texture strip (1 = single image).
    pub no_of_frames: i64,
    pub always_transparent: bool,
    pub transparency_check: bool,
    pub no_refcount: bool,
    pub click_sound: ClickSound,
    pub load_type: LoadType,
}

impl Default for SimpleSprite {
    fn default() -> Self {
        SimpleSprite {
            texture_file: None,
            effect_file: None,
            no_of_frames: 1,
            always_transparent: false,
            transparency_check: false,
            no_refcount: false,
            click_sound: ClickSound::default(),
            load_type: LoadType::default(),
        }
    }
}

impl SimpleSprite {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "texturefile" => self.texture_file = Some(src.string_literal()?),
            "noofframes" => self.no_of_frames = src.int_literal()?,
            "allwaystransparent" => self.always_transparent = src.bool_literal()?,
            "transparencecheck" => self.transparency_check = src.bool_literal()?,
            "norefcount" => self.no_refcount = src.bool_literal()?,
            "effectfile" => self.effect_file = Some(src.string_literal()?),
            "clicksound" => self.click_sound = click_sound(src)?,
            "loadtype" => self.load_type = load_type(src)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub size: Vec2i,
    pub line_width: i64,
    pub always_transparent: bool,
}

impl Default for LineChart {
    fn default() -> Self {
        LineChart {
            size: Vec2i::default(),
            line_width: 1,
            always_transparent: false,
        }
    }
}

impl LineChart {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "size" => src.read_vec2i(&mut self.size)?,
            "linewidth" => self.line_width = src.int_literal()?,
            "allwaystransparent" => self.always_transparent = src.bool_literal()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// A shield texture masked by a second texture (country flags).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MaskedShield {
    pub texture_file1: Option<String>,
    pub texture_file2: Option<String>,
    pub effect_file: Option<String>,
    pub always_transparent: bool,
    pub flipv: bool,
}

impl MaskedShield {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "texturefile1" => self.texture_file1 = Some(src.string_literal()?),
            "texturefile2" => self.texture_file2 = Some(src.string_literal()?),
            "effectfile" => self.effect_file = Some(src.string_literal()?),
            "allwaystransparent" => self.always_transparent = src.bool_literal()?,
            "flipv" => self.flipv = src.bool_literal()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProgressBar {
    /// Fill color (`color`).
    pub color1: Rgb,
    /// Background color (`colortwo`).
    pub color2: Rgb,
    pub texture_file1: Option<String>,
    pub texture_file2: Option<String>,
    pub size: Vec2i,
    pub effect_file: Option<String>,
    pub always_transparent: bool,
    pub horizontal: bool,
    pub load_type: LoadType,
}

impl ProgressBar {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "color" => self.color1 = src.rgb()?,
            "colortwo" => self.color2 = src.rgb()?,
            "texturefile1" => self.texture_file1 = Some(src.string_literal()?),
            "texturefile2" => self.texture_file2 = Some(src.string_literal()?),
            "size" => src.read_vec2i(&mut self.size)?,
            "effectfile" => self.effect_file = Some(src.string_literal()?),
            "allwaystransparent" => self.always_transparent = src.bool_literal()?,
            "horizontal" => self.horizontal = src.bool_literal()?,
            "loadtype" => self.load_type = load_type(src)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// 9-slice sprite: corners keep their size, edges and center stretch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CorneredTileSprite {
    pub size: Vec2i,
    pub texture_file: Option<String>,
    /// Width/height of the fixed corner regions.
    pub border_size: Vec2i,
    pub load_type: LoadType,
    pub always_transparent: bool,
}

impl CorneredTileSprite {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "size" => src.read_vec2i(&mut self.size)?,
            "texturefile" => self.texture_file = Some(src.string_literal()?),
            "bordersize" => src.read_vec2i(&mut self.border_size)?,
            "loadtype" => self.load_type = load_type(src)?,
            "allwaystransparent" => self.always_transparent = src.bool_literal()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextSprite {
    pub texture_file: Option<String>,
    pub no_of_frames: i64,
    pub effect_file: Option<String>,
    pub no_refcount: bool,
    pub load_type: LoadType,
    pub click_sound: ClickSound,
}

impl TextSprite {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "texturefile" => self.texture_file = Some(src.string_literal()?),
            "noofframes" => self.no_of_frames = src.int_literal()?,
            "effectfile" => self.effect_file = Some(src.string_literal()?),
            "norefcount" => self.no_refcount = src.bool_literal()?,
            "loadtype" => self.load_type = load_type(src)?,
            "clicksound" => self.click_sound = click_sound(src)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BarChart {
    pub size: Vec2i,
}

impl BarChart {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "size" => src.read_vec2i(&mut self.size)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PieChart {
    /// Diameter; a single integer, unlike every other `size`.
    pub size: i64,
}

impl PieChart {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "size" => self.size = src.int_literal()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TileSprite {
    pub texture_file: Option<String>,
    pub effect_file: Option<String>,
    pub load_type: LoadType,
    pub no_refcount: bool,
    pub size: Vec2i,
}

impl TileSprite {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "texturefile" => self.texture_file = Some(src.string_literal()?),
            "effectfile" => self.effect_file = Some(src.string_literal()?),
            "loadtype" => self.load_type = load_type(src)?,
            "norefcount" => self.no_refcount = src.bool_literal()?,
            "size" => src.read_vec2i(&mut self.size)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScrollingSprite {
    pub texture_file1: Option<String>,
    pub size: Vec2i,
    pub effect_file: Option<String>,
    pub step: i64,
    pub always_transparent: bool,
}

impl ScrollingSprite {
    fn read_property(&mut self, src: &mut Source, key: &str) -> Result<bool, ParseError> {
        match key {
            "texturefile1" => self.texture_file1 = Some(src.string_literal()?),
            "size" => src.read_vec2i(&mut self.size)?,
            "effectfile" => self.effect_file = Some(src.string_literal()?),
            "step" => self.step = src.int_literal()?,
            "allwaystransparent" => self.always_transparent = src.bool_literal()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
