//! # euler-rs: Euler diagrams for truth tables
//!
//! **`euler-rs`** draws the Euler (Venn) diagram of a boolean function of one to four variables.
//! Every variable becomes a circle, and every point of the canvas whose inside/outside pattern
//! equals a true row of the truth table is shaded.
//!
//! ## Basic Usage
//!
//! ```rust
//! use euler_rs::canvas::Canvas;
//! use euler_rs::layout::CanvasSize;
//! use euler_rs::render::render;
//! use euler_rs::table::TruthTable;
//! use euler_rs::theme::Theme;
//!
//! // 1. Build the truth table of A XOR B
//! let table = TruthTable::from_fn(["A", "B"], |row| row[0] ^ row[1]);
//!
//! // 2. Render it onto an in-memory canvas
//! let size = CanvasSize::new(640, 480);
//! let mut canvas = Canvas::new(size.width, size.height);
//! let stats = render(&mut canvas, &table, size, Theme::Light).unwrap();
//!
//! // 3. The two crescents are shaded, the lens in the middle is not
//! assert!(stats.shaded > 0);
//! let middle = canvas.pixel(320, 240).unwrap();
//! assert_eq!(middle.0[3], 0);
//! ```
//!
//! ## Core Components
//!
//! - **[`layout`]**: circle centers and label positions for 1 to 4 variables.
//! - **[`region`]**: classification of canvas points against the circles and the table.
//! - **[`render`]**: the drawing pass, on top of any [`Surface`][crate::surface::Surface].
//! - **[`canvas`]**: an in-memory raster surface with PNG export.

pub mod canvas;
pub mod error;
pub mod layout;
pub mod region;
pub mod render;
pub mod surface;
pub mod table;
pub mod theme;
pub mod types;

pub use error::{Error, Result};
