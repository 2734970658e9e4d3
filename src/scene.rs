use std::ops::ControlFlow;

use log::debug;

use crate::{
    camera::Camera,
    config::Config,
    geometry,
    input::{Key, UserInput},
    pipeline::{LineRenderer, Pipeline},
    sphere::Sphere,
    ui::Ui,
};

/// Everything the frame loop mutates: the camera, both spheres and the last
/// collision result.
pub struct Scene {
    pub camera: Camera,
    pub spheres: [Sphere; 2],
    colliding: bool,
    config: Config,
}

impl Scene {
    pub fn new(config: Config) -> Self {
        let colliding = config.spheres[0].intersects(&config.spheres[1]);
        Scene {
            camera: Camera::new(&config.camera),
            spheres: config.spheres,
            colliding,
            config,
        }
    }

    pub fn is_colliding(&self) -> bool {
        self.colliding
    }

    /// Runs one frame against an already polled input snapshot. Breaks when
    /// Escape was pressed this frame.
    pub fn frame<U, R>(
        &mut self,
        input: &UserInput,
        ui: &mut U,
        renderer: &mut R,
    ) -> ControlFlow<()>
    where
        U: Ui + ?Sized,
        R: LineRenderer + ?Sized,
    {
        self.camera.update(input);
        self.control_panel(ui);
        self.draw(renderer);

        if input.is_key_pressed(Key::Escape) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    /// Declares the editing widgets and re-evaluates the collision with the
    /// edited values.
    pub fn control_panel<U: Ui + ?Sized>(&mut self, ui: &mut U) {
        let speed = self.config.ui.drag_speed;
        let min_radius = self.config.ui.min_radius;

        ui.begin("Control");
        ui.text("Camera");
        ui.drag_float3("Pos", &mut self.camera.position, speed);
        ui.drag_float3("Rot", &mut self.camera.rotation, speed);
        ui.separator();
        ui.text("Sphere 1");
        ui.drag_float3("S1 Ctr", &mut self.spheres[0].center, speed);
        ui.drag_float("S1 Rad", &mut self.spheres[0].radius, speed, min_radius);
        ui.text("Sphere 2");
        ui.drag_float3("S2 Ctr", &mut self.spheres[1].center, speed);
        ui.drag_float("S2 Rad", &mut self.spheres[1].radius, speed, min_radius);

        self.update_collision();
        ui.separator();
        ui.text(if self.colliding {
            "Collision : YES"
        } else {
            "Collision : NO"
        });
        ui.end();
    }

    fn update_collision(&mut self) {
        let colliding = self.spheres[0].intersects(&self.spheres[1]);
        if colliding != self.colliding {
            debug!("sphere collision {}", if colliding { "started" } else { "ended" });
        }
        self.colliding = colliding;
    }

    /// Ground grid and both sphere wireframes, highlighted while colliding.
    pub fn draw<R: LineRenderer + ?Sized>(&self, renderer: &mut R) {
        let config = &self.config;
        let pipeline = Pipeline::for_camera(&self.camera, config);

        pipeline.draw(
            geometry::grid(config.grid.half_extent, config.grid.divisions),
            config.grid.color,
            renderer,
        );

        for (sphere, color) in self.spheres.iter().zip(config.palette.spheres) {
            let color = if self.colliding { config.palette.hit } else { color };
            pipeline.draw(
                geometry::sphere_wireframe(
                    *sphere,
                    config.wireframe.latitude_divisions,
                    config.wireframe.longitude_divisions,
                ),
                color,
                renderer,
            );
        }
    }
}
