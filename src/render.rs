//! Diagram rendering.
//!
//! [`render`] draws the Euler diagram of a truth table onto a [`Surface`]:
//!
//! 1. lays out one circle per variable (see [`layout`][crate::layout]),
//! 2. strokes every circle and writes the variable name next to it,
//! 3. classifies the sampled pixels (see [`region`][crate::region]) and fills those matching a
//!    true row with the theme accent color,
//! 4. flushes pending outlines.
//!
//! The whole table is validated before anything is drawn, so a failed render leaves the surface
//! untouched. Style changes made while rendering are undone before returning.
//!
//! # Examples
//!
//! ```
//! use euler_rs::canvas::Canvas;
//! use euler_rs::layout::CanvasSize;
//! use euler_rs::render::render;
//! use euler_rs::table::TruthTable;
//! use euler_rs::theme::Theme;
//!
//! let table = TruthTable::from_fn(["A", "B"], |row| row[0] && row[1]);
//! let mut canvas = Canvas::new(600, 400);
//! let stats = render(&mut canvas, &table, CanvasSize::new(600, 400), Theme::Light).unwrap();
//! assert_eq!(stats.circles, 2);
//! assert!(stats.shaded > 0);
//! assert_eq!(canvas.labels().len(), 2);
//! ```

use log::debug;

use crate::error::Result;
use crate::layout::{layout_circles, CanvasSize, Circle};
use crate::region::{sample_count, shaded_points};
use crate::surface::{StyleScope, Surface};
use crate::table::TruthTable;
use crate::theme::Theme;

/// Pixel stride of the classification pass on both axes. Visual tuning: a stride of 2
/// classifies a quarter of the pixels and leaves a dotted fill.
pub const SAMPLE_STRIDE: usize = 2;

/// Rendering options.
///
/// ```
/// use euler_rs::render::RenderConfig;
///
/// let config = RenderConfig {
///     radius: 120.0,
///     ..RenderConfig::default()
/// };
/// assert_eq!(config.label_font_size, 40.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
    /// Width of circle outlines (default: 1)
    pub line_width: f64,
    /// Radius shared by all circles, in pixels (default: 165)
    pub radius: f64,
    /// Font size of variable names, in pixels (default: 40)
    pub label_font_size: f64,
    /// Sampling stride of the classification pass (default: [`SAMPLE_STRIDE`])
    pub sample_stride: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            radius: 165.0,
            label_font_size: 40.0,
            sample_stride: SAMPLE_STRIDE,
        }
    }
}

/// Summary of a render pass.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RenderStats {
    /// Circles drawn.
    pub circles: usize,
    /// Points classified.
    pub sampled: usize,
    /// Points filled.
    pub shaded: usize,
}

/// Renders `table` with the default [`RenderConfig`].
pub fn render<S>(surface: &mut S, table: &TruthTable, size: CanvasSize, theme: Theme) -> Result<RenderStats>
where
    S: Surface + ?Sized,
{
    render_with_config(surface, table, size, theme, &RenderConfig::default())
}

/// Renders `table` onto `surface`, which is `size` pixels large.
///
/// A table without variables draws nothing. Fails with
/// [`Error::MalformedRow`][crate::error::Error::MalformedRow] for a malformed table and with
/// [`Error::UnsupportedVariableCount`][crate::error::Error::UnsupportedVariableCount] for more
/// than four variables, in both cases before drawing.
pub fn render_with_config<S>(
    surface: &mut S,
    table: &TruthTable,
    size: CanvasSize,
    theme: Theme,
    config: &RenderConfig,
) -> Result<RenderStats>
where
    S: Surface + ?Sized,
{
    table.validate()?;
    if table.is_empty() {
        debug!("render: no variables, nothing to draw");
        return Ok(RenderStats::default());
    }

    let circles = layout_circles(
        &table.variables,
        size.width as f64,
        size.height as f64,
        config.radius,
        config.label_font_size,
    )?;
    debug!(
        "render(vars = {}, rows = {}, size = {}x{}, theme = {})",
        table.num_vars(),
        table.body.len(),
        size.width,
        size.height,
        theme
    );

    let mut surface = StyleScope::new(surface);
    surface.style_mut().stroke = theme.stroke();
    surface.style_mut().line_width = config.line_width;

    for circle in circles.iter() {
        surface.stroke_circle(circle.center, circle.radius);
        draw_label(&mut *surface, circle, config.label_font_size, theme);
    }

    surface.style_mut().fill = theme.accent();
    let mut stats = RenderStats {
        circles: circles.len(),
        sampled: sample_count(size, config.sample_stride),
        shaded: 0,
    };
    for (x, y) in shaded_points(table, &circles, size, config.sample_stride)? {
        surface.fill_rect(x as f64, y as f64, 1.0, 1.0);
        stats.shaded += 1;
    }

    surface.flush();
    debug!("render: {:?}", stats);
    Ok(stats)
}

/// Writes the variable name of `circle` at its label position.
fn draw_label<S>(surface: &mut S, circle: &Circle, font_size: f64, theme: Theme)
where
    S: Surface + ?Sized,
{
    let mut surface = StyleScope::new(surface);
    surface.style_mut().fill = theme.text();
    surface.style_mut().font_size = font_size;
    surface.fill_text(circle.variable.name(), circle.label);
}
