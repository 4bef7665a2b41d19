//! Prisma sample: four hard-coded primitives, one animated fill.
//!
//! A rainbow triangle, a blue square, a red rectangle, and a pulsing
//! yellow circle. The circle's radius mutation exercises the
//! regenerate-and-re-upload path every frame; the other shapes upload
//! their vertices once.

use anyhow::Result;

use prisma_engine::appearance::{Appearance, ShapeColor};
use prisma_engine::coords::Vec2;
use prisma_engine::core::{App, AppControl, FrameCtx};
use prisma_engine::device::GpuInit;
use prisma_engine::logging::{init_logging, LoggingConfig};
use prisma_engine::render::ShapeRenderer;
use prisma_engine::shape::{Circle, Rectangle, Shape, Square, Triangle};
use prisma_engine::window::{Runtime, RuntimeConfig};

/// Background clear color (deep violet).
const CLEAR: wgpu::Color = wgpu::Color {
    r: 0.3,
    g: 0.1,
    b: 0.7,
    a: 0.8,
};

const CIRCLE_BASE_RADIUS: f32 = 0.25;

/// A static shape paired with its appearance and lazily-built GPU state.
struct Sample {
    shape: Box<dyn Shape>,
    look: Appearance,
    gpu: Option<ShapeRenderer>,
}

impl Sample {
    fn new(shape: impl Shape + 'static, color: ShapeColor) -> Self {
        Self {
            shape: Box::new(shape),
            look: Appearance::new(color),
            gpu: None,
        }
    }
}

struct DemoApp {
    samples: Vec<Sample>,

    // The circle is kept as a concrete type so its radius can be mutated.
    circle: Circle,
    circle_look: Appearance,
    circle_gpu: Option<ShapeRenderer>,
}

impl DemoApp {
    fn new() -> Self {
        let triangle = Triangle::with_points([
            Vec2::new(-0.8, -0.2),
            Vec2::new(0.4, -0.8),
            Vec2::new(0.0, 0.4),
        ]);
        let square = Square::at(Vec2::new(-0.55, 0.55), 0.35);
        let rectangle = Rectangle::at(Vec2::new(0.55, 0.6), 0.7, 0.4);
        let circle = Circle::at(Vec2::new(0.55, -0.5), CIRCLE_BASE_RADIUS, 48);

        Self {
            samples: vec![
                Sample::new(triangle, ShapeColor::Rainbow),
                Sample::new(square, ShapeColor::Blue),
                Sample::new(rectangle, ShapeColor::Red),
            ],
            circle,
            circle_look: Appearance::new(ShapeColor::Yellow),
            circle_gpu: None,
        }
    }
}

impl App for DemoApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let secs = ctx.time.elapsed;

        // Gentle breathing animation on the circle.
        self.circle
            .set_radius(CIRCLE_BASE_RADIUS + 0.06 * (secs * 2.0).sin());

        let samples = &mut self.samples;
        let (circle, circle_look, circle_gpu) =
            (&self.circle, &self.circle_look, &mut self.circle_gpu);

        ctx.render(CLEAR, |rctx, target| {
            for sample in samples.iter_mut() {
                let renderer = sample
                    .gpu
                    .get_or_insert_with(|| {
                        ShapeRenderer::new(rctx, sample.shape.as_ref(), &sample.look)
                    });
                renderer.render(rctx, target, sample.shape.as_ref(), secs);
            }

            let renderer = circle_gpu
                .get_or_insert_with(|| ShapeRenderer::new(rctx, circle, circle_look));
            renderer.render(rctx, target, circle, secs);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("prisma demo starting");

    Runtime::run(
        RuntimeConfig {
            title: "Prisma".to_string(),
            ..Default::default()
        },
        GpuInit::default(),
        DemoApp::new(),
    )
}
