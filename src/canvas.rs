//! In-memory raster surface.
//!
//! [`Canvas`] draws into an [`RgbaImage`] that starts fully transparent, so untouched pixels can
//! be told apart from drawn ones. Outlines and fills are rasterized without anti-aliasing. Text
//! is not rasterized: each `fill_text` call is recorded as a [`Label`], which the caller can draw
//! with a font renderer of its choice.

use std::ops::Range;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use log::debug;

use crate::error::Result;
use crate::layout::CanvasSize;
use crate::surface::{Style, Surface};
use crate::types::Point;

/// A piece of text placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    /// Left baseline of the text.
    pub position: Point,
    pub color: Rgba<u8>,
    pub font_size: f64,
}

/// Last stroked circle, re-stroked by [`Surface::flush`].
#[derive(Debug, Copy, Clone, PartialEq)]
struct Outline {
    center: Point,
    radius: f64,
}

#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
    style: Style,
    saved: Vec<Style>,
    labels: Vec<Label>,
    path: Option<Outline>,
}

impl Canvas {
    /// Creates a transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            style: Style::default(),
            saved: Vec::new(),
            labels: Vec::new(),
            path: None,
        }
    }

    /// Creates a canvas filled with `color`.
    pub fn with_background(width: u32, height: u32, color: Rgba<u8>) -> Self {
        let mut canvas = Self::new(width, height);
        canvas.image = RgbaImage::from_pixel(width, height, color);
        canvas
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.width(), self.height())
    }

    /// Returns the pixel at `(x, y)`, or `None` if it is outside of the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Labels recorded so far, in drawing order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Writes the canvas as a PNG file. Recorded labels are not part of the image.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!("save_png({})", path.display());
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    /// Integer pixel range `[lo, hi)` covering `[from, to]`, clipped to `0..limit`.
    fn span(from: f64, to: f64, limit: u32) -> Range<u32> {
        let lo = from.floor().max(0.0);
        let hi = to.ceil().min(limit as f64);
        if lo.is_nan() || hi.is_nan() || lo >= hi {
            return 0..0;
        }
        lo as u32..hi as u32
    }

    fn draw_outline(&mut self, outline: Outline) {
        let half = (self.style.line_width / 2.0).max(0.5);
        let color = self.style.stroke;
        let Outline { center, radius } = outline;
        let outer = radius + half;
        let xs = Self::span(center.x - outer, center.x + outer, self.width());
        let ys = Self::span(center.y - outer, center.y + outer, self.height());
        for y in ys {
            for x in xs.clone() {
                let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if (p.distance(center) - radius).abs() <= half {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }
}

impl Surface for Canvas {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn save(&mut self) {
        self.saved.push(self.style);
    }

    fn restore(&mut self) {
        if let Some(style) = self.saved.pop() {
            self.style = style;
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f64) {
        let outline = Outline { center, radius };
        self.draw_outline(outline);
        self.path = Some(outline);
    }

    fn fill_text(&mut self, text: &str, at: Point) {
        self.labels.push(Label {
            text: text.to_string(),
            position: at,
            color: self.style.fill,
            font_size: self.style.font_size,
        });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if !(width > 0.0 && height > 0.0) {
            return;
        }
        let color = self.style.fill;
        let xs = Self::span(x, x + width, self.width());
        for py in Self::span(y, y + height, self.height()) {
            for px in xs.clone() {
                self.image.put_pixel(px, py, color);
            }
        }
    }

    /// Strokes the last circle path again, on top of everything drawn since.
    fn flush(&mut self) {
        if let Some(outline) = self.path {
            self.draw_outline(outline);
        }
    }
}
