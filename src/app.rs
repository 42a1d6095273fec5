//! Application driver
//!
//! [`TipperApp`] assembles the dump-truck scene, shows it once, then pulls the
//! lift animation frame by frame: place copies of the driven parts, hand them
//! to the renderer, wait out the frame delay, move on.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use cgmath::{Deg, Rad, Vector3};
use log::info;

use crate::gfx::geometry::{GeometryLoader, ObjLoader, ProceduralLoader};
use crate::gfx::rendering::{Decoration, LogRenderer, Renderer};
use crate::gfx::scene::Scene;
use crate::gfx::transform::Axis;
use crate::simulation::dump_truck::{dump_truck_parts, lift_plan, LiftMotion};
use crate::simulation::Animator;

/// Run configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding the OBJ assets; procedural boxes when `None`
    pub asset_dir: Option<PathBuf>,
    pub steps: usize,
    pub lift: Vector3<f64>,
    pub axis: Axis,
    pub angle: Deg<f64>,
    /// Pause after each animation frame
    pub frame_delay: Duration,
    /// Length of the decoration axes
    pub axis_length: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_dir: None,
            steps: 100,
            lift: Vector3::new(0.0, 0.0, 1.0),
            axis: Axis::Z,
            angle: Deg(90.0),
            frame_delay: Duration::from_millis(50),
            axis_length: 5.0,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = Some(dir.into());
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_lift(mut self, lift: Vector3<f64>) -> Self {
        self.lift = lift;
        self
    }

    pub fn with_rotation(mut self, axis: Axis, angle: Deg<f64>) -> Self {
        self.axis = axis;
        self.angle = angle;
        self
    }

    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    /// Lift parameters in the units the animator works in
    pub fn motion(&self) -> LiftMotion {
        let Rad(angle) = Rad::from(self.angle);
        LiftMotion {
            lift: self.lift,
            axis: self.axis,
            angle,
            steps: self.steps,
        }
    }

    fn loader(&self) -> Box<dyn GeometryLoader> {
        match &self.asset_dir {
            Some(dir) => Box::new(ObjLoader::new(dir.clone())),
            None => Box::new(ProceduralLoader::new()),
        }
    }
}

/// Scene assembly plus the paced animation loop
pub struct TipperApp {
    config: AppConfig,
    loader: Box<dyn GeometryLoader>,
    renderer: Box<dyn Renderer>,
}

impl TipperApp {
    /// App with the loader chosen by `config` and a [`LogRenderer`]
    pub fn new(config: AppConfig) -> Self {
        let loader = config.loader();
        Self {
            config,
            loader,
            renderer: Box::new(LogRenderer::new()),
        }
    }

    /// Replace the renderer (builder pattern)
    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Replace the geometry loader (builder pattern)
    pub fn with_loader(mut self, loader: Box<dyn GeometryLoader>) -> Self {
        self.loader = loader;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build and show the scene, then play the lift animation.
    ///
    /// Returns the number of animation frames drawn.
    pub fn run(&mut self) -> Result<usize> {
        let scene = Scene::build(&dump_truck_parts(), self.loader.as_ref())
            .context("Failed to assemble the dump-truck scene")?;

        let items = scene.initial_render_items()?;
        self.renderer
            .draw_scene(&items, &Decoration::with_axes(self.config.axis_length));

        let plan = lift_plan(scene.poses(), &self.config.motion())
            .context("Failed to plan the container lift")?;
        let animation = Animator::prepare(&plan, scene.poses())
            .context("Failed to prepare the container lift")?;

        info!(
            "Lifting {:?} by {:?} and turning {:?} about {} over {} frames",
            plan.target_parts,
            self.config.lift,
            self.config.angle,
            self.config.axis,
            animation.len()
        );

        let mut drawn = 0;
        for frame in animation.iter() {
            let names = plan.target_parts.iter().map(String::as_str);
            let items = scene.render_items(names, &frame.poses)?;
            self.renderer.draw_frame(frame.step, &items);
            drawn += 1;

            if !self.config.frame_delay.is_zero() {
                thread::sleep(self.config.frame_delay);
            }
        }

        info!("Animation finished after {} frames", drawn);
        Ok(drawn)
    }
}
