use log::{debug, info};

use crate::gfx::geometry::GeometryData;

/// RGB display colour, components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const GREY: Color = Color::new(0.5, 0.5, 0.5);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::GREY
    }
}

/// A transformed geometry copy ready for display
#[derive(Debug, Clone)]
pub struct RenderItem {
    pub name: String,
    pub geometry: GeometryData,
    pub color: Color,
}

/// A labelled line from the origin, used for the world axes
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLine {
    pub end: [f64; 3],
    pub color: Color,
    pub label: &'static str,
    pub line_width: f32,
}

/// Axis and camera decoration for the one-shot scene
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pub axes: Vec<AxisLine>,
    pub camera_position: [f64; 3],
    pub focal_point: [f64; 3],
}

impl Decoration {
    /// World axes of the given length: X red, Y green, Z blue
    pub fn with_axes(length: f64) -> Self {
        let axis = |end, color, label| AxisLine {
            end,
            color,
            label,
            line_width: 3.0,
        };
        Self {
            axes: vec![
                axis([length, 0.0, 0.0], Color::RED, "X"),
                axis([0.0, length, 0.0], Color::GREEN, "Y"),
                axis([0.0, 0.0, length], Color::BLUE, "Z"),
            ],
            ..Self::default()
        }
    }
}

impl Default for Decoration {
    fn default() -> Self {
        Self {
            axes: Vec::new(),
            camera_position: [10.0, 6.0, 10.0],
            focal_point: [0.0, 0.0, 0.0],
        }
    }
}

/// Presentation collaborator.
///
/// Both calls are fire-and-forget. Items handed to `draw_frame` belong to that
/// frame only; the renderer shows them and then drops them before the next
/// frame arrives.
pub trait Renderer {
    /// Display the fully assembled scene once
    fn draw_scene(&mut self, items: &[RenderItem], decoration: &Decoration);

    /// Display one animation frame
    fn draw_frame(&mut self, step: usize, items: &[RenderItem]);
}

/// Reports what would be drawn through the `log` facade
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames_drawn: usize,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }
}

impl Renderer for LogRenderer {
    fn draw_scene(&mut self, items: &[RenderItem], decoration: &Decoration) {
        info!(
            "Scene: {} parts, {} axes, camera at {:?} looking at {:?}",
            items.len(),
            decoration.axes.len(),
            decoration.camera_position,
            decoration.focal_point
        );
        for item in items {
            info!(
                "  {:<12} {:>6} triangles, centroid {}",
                item.name,
                item.geometry.triangle_count(),
                format_point(item.geometry.centroid())
            );
        }
    }

    fn draw_frame(&mut self, step: usize, items: &[RenderItem]) {
        self.frames_drawn += 1;
        for item in items {
            debug!(
                "Frame {:>4}: {:<12} centroid {}",
                step,
                item.name,
                format_point(item.geometry.centroid())
            );
        }
    }
}

fn format_point(p: Option<[f64; 3]>) -> String {
    match p {
        Some([x, y, z]) => format!("({:.5}, {:.5}, {:.5})", x, y, z),
        None => "(empty)".to_string(),
    }
}

/// Keeps the centroid of every drawn item, frame by frame
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub scene: Vec<(String, Option<[f64; 3]>)>,
    pub frames: Vec<(usize, Vec<(String, Option<[f64; 3]>)>)>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

fn summarize(items: &[RenderItem]) -> Vec<(String, Option<[f64; 3]>)> {
    items
        .iter()
        .map(|item| (item.name.clone(), item.geometry.centroid()))
        .collect()
}

impl Renderer for FrameRecorder {
    fn draw_scene(&mut self, items: &[RenderItem], _decoration: &Decoration) {
        self.scene = summarize(items);
    }

    fn draw_frame(&mut self, step: usize, items: &[RenderItem]) {
        self.frames.push((step, summarize(items)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_cube;

    fn item(name: &str) -> RenderItem {
        RenderItem {
            name: name.to_string(),
            geometry: generate_cube(),
            color: Color::CYAN,
        }
    }

    #[test]
    fn test_default_decoration() {
        let decoration = Decoration::with_axes(5.0);
        assert_eq!(decoration.axes.len(), 3);
        assert_eq!(decoration.axes[2].end, [0.0, 0.0, 5.0]);
        assert_eq!(decoration.axes[0].color, Color::RED);
        assert_eq!(decoration.camera_position, [10.0, 6.0, 10.0]);
        assert_eq!(decoration.focal_point, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_log_renderer_counts_frames() {
        let mut renderer = LogRenderer::new();
        renderer.draw_scene(&[item("a")], &Decoration::default());
        renderer.draw_frame(0, &[item("a")]);
        renderer.draw_frame(1, &[item("a")]);
        assert_eq!(renderer.frames_drawn(), 2);
    }

    #[test]
    fn test_frame_recorder() {
        let mut recorder = FrameRecorder::new();
        recorder.draw_frame(3, &[item("lid")]);
        assert_eq!(recorder.frames.len(), 1);
        assert_eq!(recorder.frames[0].0, 3);
        assert_eq!(recorder.frames[0].1[0].0, "lid");
    }
}
