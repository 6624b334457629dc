//! Victoria II interface definitions: sprites (`.gfx`) and widget layouts (`.gui`).
//!
//! [`Interface`] is the entry point. It parses documents into owned sprite and widget
//! trees and answers name lookups over them.
//!
//! ```no_run
//! use ov2gui::{Interface, LoadOptions};
//!
//! let mut interface = Interface::new();
//! interface.load_dir("interface", &LoadOptions::default())?;
//! if let Some(sprite) = interface.sprite("GFX_topbar_bg") {
//!     println!("{:?}", sprite.kind);
//! }
//! # Ok::<(), ov2gui::LoadError>(())
//! ```

pub mod interface;
pub mod loader;
pub mod parser;
pub mod sprite;
pub mod types;
pub mod widget;

pub use interface::Interface;
pub use loader::{ErrorPolicy, LoadError, LoadOptions, LoadReport, is_interface_file};
pub use parser::DocumentKind;
pub use sprite::{Sprite, SpriteKind};
pub use types::{ClickSound, LoadType, Orientation, TextFormat};
pub use widget::{Widget, WidgetKind};

pub use ov2txt::{Location, ParseError, Rgb, SyntaxError, SyntaxErrorKind, Vec2i, Warning};
