//! 2D draw surfaces.
//!
//! The engine never touches a canvas. Everything that draws goes through the
//! [`DrawSurface`] trait; the stock implementation, [`DrawList`], records
//! serializable commands that the host replays onto the matching canvas layer.

use glam::Vec2;
use serde::Serialize;

use super::layer::SurfaceLayer;
use crate::api::types::{TextureHandle, TextureId};

/// Font and fill for a `draw_text` call, in CSS notation (e.g. `"16px m5x7"`, `"#55f"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub font: String,
    pub color: String,
}

impl TextStyle {
    pub fn new(font: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            font: font.into(),
            color: color.into(),
        }
    }
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Clear the whole layer.
    Clear,
    /// Blit a texture with its top-left corner at (x, y), stretched to width x height.
    Image {
        texture: TextureId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// Fill text with its baseline starting at (x, y).
    Text {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: String,
    },
}

/// A 2D drawing surface.
pub trait DrawSurface {
    /// Clear the whole surface.
    fn clear(&mut self);

    /// Blit `texture` at `pos`, stretched to `size`.
    fn draw_image(&mut self, texture: TextureHandle, pos: Vec2, size: Vec2);

    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);

    /// Blit `texture` at its natural size.
    fn draw_texture(&mut self, texture: TextureHandle, pos: Vec2) {
        self.draw_image(texture, pos, texture.size());
    }
}

/// Records draw commands for one layer during a frame.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(64),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Number of image blits recorded (ignores clears and text).
    pub fn image_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Image { .. }))
            .count()
    }

    /// Forget everything recorded; called by the runner at the start of each frame.
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for DrawList {
    fn clear(&mut self) {
        // Anything recorded earlier this frame would be wiped by the clear anyway.
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_image(&mut self, texture: TextureHandle, pos: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::Image {
            texture: texture.id,
            x: pos.x,
            y: pos.y,
            width: size.x,
            height: size.y,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x: pos.x,
            y: pos.y,
            font: style.font.clone(),
            color: style.color.clone(),
        });
    }
}

/// One [`DrawList`] per [`SurfaceLayer`], in compositing order.
#[derive(Debug, Clone, Default)]
pub struct LayerStack {
    layers: [DrawList; SurfaceLayer::COUNT],
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer(&self, layer: SurfaceLayer) -> &DrawList {
        &self.layers[layer as usize]
    }

    pub fn layer_mut(&mut self, layer: SurfaceLayer) -> &mut DrawList {
        &mut self.layers[layer as usize]
    }

    /// Reset every layer at the start of a frame.
    pub fn reset(&mut self) {
        for list in &mut self.layers {
            list.reset();
        }
    }

    /// Iterate back-to-front, skipping layers nothing drew to this frame.
    pub fn iter_touched(&self) -> impl Iterator<Item = (SurfaceLayer, &DrawList)> {
        SurfaceLayer::ALL
            .into_iter()
            .zip(self.layers.iter())
            .filter(|(_, list)| !list.is_empty())
    }
}
