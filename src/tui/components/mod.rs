//! # TUI Components
//!
//! Stateless, props-based display components. Each one receives all of
//! its data as struct fields and renders into the `Rect` it is given:
//!
//! - `MenuBar`: the static banner on the top row
//! - `StatusLine`: a line of text at a fixed cell (loading status, key echo)
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── menu_bar.rs      (Top banner)
//! └── status_line.rs   (Text at a cell)
//! ```

pub mod menu_bar;
pub mod status_line;

pub use menu_bar::MenuBar;
pub use status_line::StatusLine;
