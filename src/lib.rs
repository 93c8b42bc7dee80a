//! Terminal menu bar with keyboard and mouse navigation, nested dropdowns, and an
//! ANSI-aware compositor that draws those dropdowns over existing styled output.
//!
//! The crate never touches the terminal itself. A host feeds [`InputEvent`]s into
//! [`MenuNode::update`], acts on any returned [`MenuCommand`], and draws the strings
//! produced by [`MenuNode::render_bar`] and [`MenuNode::dropdown_layers`] (or the
//! all-in-one [`MenuNode::view`]).
//!
//! The [`ansi`] module is public too: [`ansi::display_width`], [`ansi::measure`] and
//! [`ansi::strip`] let a host size or log the styled strings it gets back.

pub mod ansi;
pub mod input;
pub mod menu;
pub mod overlay;
pub mod style;
pub mod theme;

pub use input::{InputEvent, Key, PointerEvent, PointerKind};
pub use menu::{entries_from_json, DropdownLayer, DropdownLayers, MenuCommand, MenuEntry, MenuNode};
pub use overlay::composite;
pub use style::{BorderSet, Color, Style};
pub use theme::{MenuStyles, Theme};
