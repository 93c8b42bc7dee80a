//! Recursive menu bar: entries, navigation state, hit-testing, and rendering.
//!
//! The root [`MenuNode`] is the horizontal bar. Opening an entry with a submenu creates
//! a child node drawn as a dropdown; children can open their own children, so the open
//! menus always form one chain from the bar down.

mod entry;
mod node;
mod pointer;
mod render;

pub use entry::{entries_from_json, MenuCommand, MenuEntry};
pub use node::MenuNode;
pub use render::{DropdownLayer, DropdownLayers};
