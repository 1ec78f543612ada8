use super::config::FieldParams;
use glam::Vec2;
use rand::prelude::*;

/// One drifting glow point. Coordinates are centred: x in
/// `[-width/2, width/2]`, y in `[-height/2, height/2]`, +y up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldPoint {
    pub pos: Vec2,
    pub speed: f32,
    pub alpha: f32,
    pub size: f32,
    pub phase: f32,
}

/// Decorative starfield behind the cards. Fixed pool, recycled in place.
pub struct FieldState {
    params: FieldParams,
    points: Vec<FieldPoint>,
    half_width: f32,
    elapsed: f32,
    rng: StdRng,
}

impl FieldState {
    pub fn new(params: FieldParams, viewport_width: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let half_width = viewport_width.max(0.0) * 0.5;
        let half_height = params.height * 0.5;
        let points = (0..params.point_count)
            .map(|i| {
                let x = (rng.gen::<f32>() - 0.5) * viewport_width * 2.0;
                let y = (rng.gen::<f32>() - 0.5) * 2.0 * half_height;
                let orbit = rng.gen::<f32>() * 200.0 + 100.0;
                FieldPoint {
                    pos: Vec2::new(x, y),
                    speed: rng.gen::<f32>() * params.speed_span + params.speed_min,
                    alpha: (rng.gen::<f32>() * 8.0 + 2.0) / 10.0,
                    size: (rng.gen::<f32>() * (orbit - 60.0) + 60.0) / 8.0,
                    phase: i as f32 * params.bob_phase_step,
                }
            })
            .collect();
        Self {
            params,
            points,
            half_width,
            elapsed: 0.0,
            rng,
        }
    }

    pub fn points(&self) -> &[FieldPoint] {
        &self.points
    }

    pub fn half_extent(&self) -> Vec2 {
        Vec2::new(self.half_width, self.params.height * 0.5)
    }

    /// Only the projection bounds change; points keep their positions.
    pub fn resize(&mut self, viewport_width: f32) {
        self.half_width = viewport_width.max(0.0) * 0.5;
    }

    pub fn step(&mut self, dt: f32) {
        self.elapsed += dt;
        let right = self.half_width + self.params.edge_margin;
        let left = -self.half_width - self.params.edge_margin;
        let half_height = self.params.height * 0.5;
        let p = self.params.twinkle_probability;

        for pt in &mut self.points {
            pt.pos.x += pt.speed * dt;
            if pt.pos.x > right {
                pt.pos.x = left;
                pt.pos.y = (self.rng.gen::<f32>() - 0.5) * 2.0 * half_height;
            }

            pt.pos.y += (self.elapsed + pt.phase).sin() * self.params.bob_amplitude;

            let roll = self.rng.gen::<f32>();
            if roll < p {
                pt.alpha -= self.params.twinkle_step;
            } else if roll < 2.0 * p {
                pt.alpha += self.params.twinkle_step;
            }
            pt.alpha = pt.alpha.clamp(0.0, 1.0);
        }
    }

    /// Drop the pool. Safe to call more than once.
    pub fn release(&mut self) {
        self.points.clear();
        self.points.shrink_to_fit();
    }
}
