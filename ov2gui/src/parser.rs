//! Parser for Victoria II .gfx and .gui documents.
//!
//! A document is a single `spriteTypes = { ... }` or `guiTypes = { ... }` table.
//! Each table entry is `<typeName> = { <property> = <value> ... }`, dispatched on the
//! case-insensitive type name to the per-type parsers in [`crate::sprite`] and
//! [`crate::widget`].

use ov2txt::{ParseError, Source, SyntaxErrorKind};

use crate::sprite::{Sprite, parse_sprite};
use crate::types::{ClickSound, LoadType, Orientation, TextFormat};
use crate::widget::{Widget, parse_widget};

/// What a document turned out to contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    /// The file holds nothing but whitespace and comments.
    Empty,
    /// A `spriteTypes` table with this many definitions.
    Sprites(usize),
    /// A `guiTypes` table with this many top-level widgets.
    Widgets(usize),
    /// An unrecognised top-level keyword; the contents were skipped.
    Ignored(String),
}

/// Parses one document, appending its definitions to `sprites` or `widgets`.
pub fn parse_document(
    src: &mut Source,
    sprites: &mut Vec<Sprite>,
    widgets: &mut Vec<Widget>,
) -> Result<DocumentKind, ParseError> {
    if src.peek(true).is_none() {
        return Ok(DocumentKind::Empty);
    }

    let keyword = src.identifier()?;
    src.expect_char('=')?;
    let kind = match keyword.to_ascii_lowercase().as_str() {
        "spritetypes" => DocumentKind::Sprites(parse_sprites(src, sprites)?),
        "guitypes" => DocumentKind::Widgets(parse_widgets(src, widgets)?),
        _ => {
            src.warn(format!("Ignoring unknown file type '{}'.", keyword));
            return Ok(DocumentKind::Ignored(keyword));
        }
    };

    if src.peek(true).is_some() {
        log::debug!(
            "{}:{}: ignoring content after the '{}' table",
            src.name(),
            src.location(),
            keyword
        );
    }
    Ok(kind)
}

/// Parses the body of a `spriteTypes` table. Returns the number of definitions read.
pub fn parse_sprites(src: &mut Source, sprites: &mut Vec<Sprite>) -> Result<usize, ParseError> {
    parse_table(src, |src, type_name| {
        sprites.push(parse_sprite(src, type_name)?);
        Ok(())
    })
}

/// Parses the body of a `guiTypes` table. Returns the number of widgets read.
pub fn parse_widgets(src: &mut Source, widgets: &mut Vec<Widget>) -> Result<usize, ParseError> {
    parse_table(src, |src, type_name| {
        widgets.push(parse_widget(src, type_name)?);
        Ok(())
    })
}

/// `{ (<typeName> = <definition>)* }`
fn parse_table<F>(src: &mut Source, mut entry: F) -> Result<usize, ParseError>
where
    F: FnMut(&mut Source, &str) -> Result<(), ParseError>,
{
    let mut count = 0;
    src.expect_char('{')?;
    while src.peek_required("'}'")? != '}' {
        let type_name = src.identifier()?;
        src.expect_char('=')?;
        entry(src, &type_name)?;
        count += 1;
    }
    src.expect_char('}')?;
    Ok(count)
}

/// `{ (<property> = <value>)* }`
///
/// `property` is called with the lower-cased property name and the name as written,
/// and must consume the value. Returning `Ok(false)` rejects the property as unknown
/// for `owner`.
pub(crate) fn parse_block<F>(
    src: &mut Source,
    owner: &'static str,
    mut property: F,
) -> Result<(), ParseError>
where
    F: FnMut(&mut Source, &str, &str) -> Result<bool, ParseError>,
{
    src.expect_char('{')?;
    while src.peek_required("'}'")? != '}' {
        let name = src.identifier()?;
        src.expect_char('=')?;
        let key = name.to_ascii_lowercase();
        if !property(src, &key, &name)? {
            return Err(src.error(SyntaxErrorKind::UnknownProperty {
                property: name,
                owner,
            }));
        }
    }
    src.expect_char('}')
}

fn unknown_value(src: &Source, kind: &'static str, value: String) -> ParseError {
    src.error(SyntaxErrorKind::UnknownValue { kind, value })
}

/// Reads an orientation into `orientation`.
///
/// The known misspelling `upperl_left` is reported as a warning and leaves the
/// current value in place.
pub(crate) fn read_orientation(
    src: &mut Source,
    orientation: &mut Orientation,
) -> Result<(), ParseError> {
    let value = src.string_literal()?;
    if let Some(parsed) = Orientation::from_keyword(&value) {
        *orientation = parsed;
    } else if value.eq_ignore_ascii_case(Orientation::MISSPELLED_UPPER_LEFT) {
        src.warn(format!("Ignoring misspelled orientation '{}'.", value));
    } else {
        return Err(unknown_value(src, "orientation", value));
    }
    Ok(())
}

pub(crate) fn text_format(src: &mut Source) -> Result<TextFormat, ParseError> {
    let value = src.identifier()?;
    TextFormat::from_keyword(&value).ok_or_else(|| unknown_value(src, "text box format", value))
}

pub(crate) fn click_sound(src: &mut Source) -> Result<ClickSound, ParseError> {
    let value = src.identifier()?;
    ClickSound::from_keyword(&value).ok_or_else(|| unknown_value(src, "click sound", value))
}

pub(crate) fn load_type(src: &mut Source) -> Result<LoadType, ParseError> {
    let value = src.string_literal()?;
    LoadType::from_keyword(&value).ok_or_else(|| unknown_value(src, "load type", value))
}
