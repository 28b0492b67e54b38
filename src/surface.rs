//! Drawing surface abstraction.
//!
//! The renderer only talks to a [`Surface`]: it strokes circle outlines, writes labels and
//! fills single pixels. Style state (colors, line width, font size) lives in the surface and can
//! be saved and restored. [`StyleScope`] ties a save to the lifetime of a guard, so the previous
//! style comes back on every exit path.

use std::ops::{Deref, DerefMut};

use image::Rgba;

use crate::theme::BLACK;
use crate::types::Point;

/// Current drawing style of a surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Style {
    pub stroke: Rgba<u8>,
    pub fill: Rgba<u8>,
    pub line_width: f64,
    /// Font size in pixels.
    pub font_size: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: BLACK,
            fill: BLACK,
            line_width: 1.0,
            font_size: 10.0,
        }
    }
}

pub trait Surface {
    fn style(&self) -> &Style;
    fn style_mut(&mut self) -> &mut Style;

    /// Pushes the current style on the style stack.
    fn save(&mut self);
    /// Pops the last saved style. Does nothing if the stack is empty.
    fn restore(&mut self);

    /// Strokes a full circle outline with the current stroke color and line width.
    fn stroke_circle(&mut self, center: Point, radius: f64);
    /// Draws `text` with its left baseline at `at`, in the current fill color and font size.
    fn fill_text(&mut self, text: &str, at: Point);
    /// Fills an axis-aligned rectangle with the current fill color.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Commits pending outline paths.
    fn flush(&mut self) {}
}

/// Scoped style state: saves on creation, restores on drop.
///
/// ```
/// use euler_rs::canvas::Canvas;
/// use euler_rs::surface::{StyleScope, Surface};
/// use euler_rs::theme::WHITE;
///
/// let mut canvas = Canvas::new(10, 10);
/// {
///     let mut scope = StyleScope::new(&mut canvas);
///     scope.style_mut().fill = WHITE;
/// }
/// assert_ne!(canvas.style().fill, WHITE);
/// ```
pub struct StyleScope<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> StyleScope<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for StyleScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &Self::Target {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for StyleScope<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for StyleScope<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
