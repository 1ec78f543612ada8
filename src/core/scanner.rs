use super::config::{RegimePreset, ScannerParams};
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

/// Extra emission roll that opens once the intensity ratio passes `above`,
/// firing with probability `(ratio - offset) * gain`.
#[derive(Clone, Copy, Debug)]
struct BurstRoll {
    above: f32,
    offset: f32,
    gain: f32,
}

const BURST_ROLLS: [BurstRoll; 4] = [
    BurstRoll { above: 1.1, offset: 1.0, gain: 1.2 },
    BurstRoll { above: 1.3, offset: 1.3, gain: 1.4 },
    BurstRoll { above: 1.5, offset: 1.5, gain: 1.8 },
    BurstRoll { above: 2.0, offset: 2.0, gain: 2.0 },
];

// Spawn-shape multipliers relative to how far intensity sits above idle.
const SPEED_GAIN: f32 = 1.2;
const SIZE_GAIN: f32 = 0.7;
const DECAY_RATIO_WEIGHT: f32 = 0.5;

/// Canvas-space particle (y down, origin top-left). Units are per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub base_alpha: f32,
    pub alpha: f32,
    pub decay: f32,
    pub life: f32,
    pub time: f32,
    pub twinkle_speed: f32,
    pub twinkle_amount: f32,
}

impl ScanParticle {
    /// Opacity after the vertical fade near the canvas top and bottom.
    pub fn draw_alpha(&self, fade_zone: f32, height: f32) -> f32 {
        if self.life <= 0.0 {
            return 0.0;
        }
        let fade = if fade_zone <= 0.0 {
            1.0
        } else if self.pos.y < fade_zone {
            self.pos.y / fade_zone
        } else if self.pos.y > height - fade_zone {
            (height - self.pos.y) / fade_zone
        } else {
            1.0
        };
        (self.alpha * fade.clamp(0.0, 1.0)).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassKind {
    /// Narrow white core with a five-stop horizontal gradient.
    Core,
    /// Wider, fainter halo with a three-stop gradient.
    Halo,
}

/// One additive layer of the light bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowPass {
    pub kind: PassKind,
    pub half_width: f32,
    pub corner_radius: f32,
    /// Alpha at the gradient centre; may exceed 1 and is clamped when drawn.
    pub peak_alpha: f32,
    /// `globalAlpha` applied to the whole pass.
    pub layer_alpha: f32,
}

/// Everything needed to draw the bar for the current frame.
#[derive(Clone, Debug, PartialEq)]
pub struct LightBar {
    pub x: f32,
    pub top: f32,
    pub height: f32,
    /// Vertical mask stops as fractions of `height`: opaque between them.
    pub fade_top: f32,
    pub fade_bottom: f32,
    pub passes: SmallVec<[GlowPass; 4]>,
}

/// Light bar plus particle burst, blending between the idle and active
/// presets. The only outside input is `set_active`.
pub struct ScannerState {
    params: ScannerParams,
    active: bool,
    emission: bool,
    current: RegimePreset,
    particles: Vec<ScanParticle>,
    width: f32,
    height: f32,
    bar_x: f32,
    rng: StdRng,
}

impl ScannerState {
    pub fn new(params: ScannerParams, width: f32, seed: u64) -> Self {
        let idle = params.idle;
        let mut s = Self {
            height: params.height,
            width: width.max(0.0),
            bar_x: width.max(0.0) * 0.5,
            active: false,
            emission: true,
            current: idle,
            particles: Vec::with_capacity(idle.max_particles.max(0.0) as usize),
            rng: StdRng::seed_from_u64(seed),
            params,
        };
        for _ in 0..s.ceiling() {
            let p = s.spawn();
            s.particles.push(p);
        }
        s
    }

    /// Level-set the regime. Idempotent; no transition happens here, the
    /// blend toward the new targets runs in `step`.
    #[inline]
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Turning emission off (reduced motion) also clears live particles.
    pub fn set_emission(&mut self, enabled: bool) {
        self.emission = enabled;
        if !enabled {
            self.particles.clear();
        }
    }

    pub fn resize(&mut self, width: f32) {
        self.width = width.max(0.0);
        self.bar_x = self.width * 0.5;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn current(&self) -> &RegimePreset {
        &self.current
    }

    pub fn target(&self) -> &RegimePreset {
        if self.active {
            &self.params.active
        } else {
            &self.params.idle
        }
    }

    pub fn particles(&self) -> &[ScanParticle] {
        &self.particles
    }

    /// Current population ceiling, floored.
    pub fn ceiling(&self) -> usize {
        self.current.max_particles.max(0.0) as usize
    }

    /// How far the current intensity sits above the idle baseline.
    pub fn intensity_ratio(&self) -> f32 {
        self.current.intensity / self.params.idle.intensity
    }

    /// Blend factor toward the active glow, 0 at idle and 1 at active.
    pub fn regime_progress(&self) -> f32 {
        let span = self.params.active.glow - self.params.idle.glow;
        if span.abs() < f32::EPSILON {
            return if self.active { 1.0 } else { 0.0 };
        }
        ((self.current.glow - self.params.idle.glow) / span).clamp(0.0, 1.0)
    }

    /// One animation frame: blend presets, move particles, emit, trim.
    pub fn step(&mut self) {
        let target = *self.target();
        let k = self.params.blend;
        let c = &mut self.current;
        c.intensity += (target.intensity - c.intensity) * k;
        c.max_particles += (target.max_particles - c.max_particles) * k;
        c.fade_zone += (target.fade_zone - c.fade_zone) * k;
        c.glow += (target.glow - c.glow) * k;
        c.bar_height += (target.bar_height - c.bar_height) * k;
        c.bar_fade += (target.bar_fade - c.bar_fade) * k;

        self.update_particles();
        if self.emission {
            self.emit();
        }
        self.trim();
    }

    /// Move every particle. A particle that dies or leaves the canvas is
    /// respawned in place, unless the pool sits above the ceiling, in which
    /// case it is retired so the pool shrinks toward it.
    fn update_particles(&mut self) {
        let exit_x = self.width + self.params.exit_margin;
        let ceiling = self.ceiling();
        let mut i = 0;
        while i < self.particles.len() {
            let p = &mut self.particles[i];
            p.pos += p.vel;
            p.time += 1.0;
            p.alpha = p.base_alpha * p.life + (p.time * p.twinkle_speed).sin() * p.twinkle_amount;
            p.life -= p.decay;
            if p.pos.x > exit_x || p.life <= 0.0 {
                if self.particles.len() > ceiling {
                    // The swapped-in tail particle has not moved yet; revisit index i.
                    self.particles.swap_remove(i);
                    continue;
                }
                self.particles[i] = self.spawn();
            }
            i += 1;
        }
    }

    fn emit(&mut self) {
        let ceiling = self.ceiling();
        let intensity = self.current.intensity;
        if self.rng.gen::<f32>() < intensity && self.particles.len() < ceiling {
            let p = self.spawn();
            self.particles.push(p);
        }
        let ratio = self.intensity_ratio();
        for roll in BURST_ROLLS {
            if ratio <= roll.above {
                break;
            }
            let chance = (ratio - roll.offset) * roll.gain;
            if self.rng.gen::<f32>() < chance && self.particles.len() < ceiling {
                let p = self.spawn();
                self.particles.push(p);
            }
        }
    }

    /// Shed at most `trim_batch` particles per frame from the tail once the
    /// pool overshoots the ceiling by more than `trim_slack`.
    fn trim(&mut self) {
        let ceiling = self.ceiling();
        let len = self.particles.len();
        if len > ceiling.saturating_add(self.params.trim_slack) {
            let excess = (len - ceiling).min(self.params.trim_batch);
            self.particles.truncate(len - excess);
        }
    }

    fn spawn(&mut self) -> ScanParticle {
        let ratio = self.intensity_ratio();
        let speed = 1.0 + (ratio - 1.0) * SPEED_GAIN;
        let size = 1.0 + (ratio - 1.0) * SIZE_GAIN;
        let half_bar = self.params.bar_width * 0.5;
        let rng = &mut self.rng;
        let alpha = uniform(rng, 0.6, 1.0);
        ScanParticle {
            pos: Vec2::new(
                self.bar_x + uniform(rng, -half_bar, half_bar),
                uniform(rng, 0.0, self.height),
            ),
            vel: Vec2::new(
                uniform(rng, 0.2, 1.0) * speed,
                uniform(rng, -0.15, 0.15) * speed,
            ),
            radius: uniform(rng, 0.4, 1.0) * size,
            base_alpha: alpha,
            alpha,
            decay: (uniform(rng, 0.005, 0.025) * (2.0 - ratio * DECAY_RATIO_WEIGHT))
                .max(super::constants::MIN_PARTICLE_DECAY),
            life: 1.0,
            time: 0.0,
            twinkle_speed: uniform(rng, 0.02, 0.08) * speed,
            twinkle_amount: uniform(rng, 0.1, 0.25),
        }
    }

    /// Geometry and layer alphas of the light bar for this frame.
    pub fn light_bar(&self) -> LightBar {
        let c = &self.current;
        let height = c.bar_height.max(0.0);
        let top = (self.height - height) * 0.5;
        let ratio = if height > 0.0 { c.bar_fade / height } else { 0.5 };
        let t = self.regime_progress();
        let w = self.params.bar_width;
        let glow = c.glow;

        let mut passes = SmallVec::new();
        passes.push(GlowPass {
            kind: PassKind::Core,
            half_width: w * 0.5,
            corner_radius: 15.0,
            peak_alpha: glow,
            layer_alpha: 1.0,
        });
        passes.push(GlowPass {
            kind: PassKind::Halo,
            half_width: w * 2.0,
            corner_radius: 25.0,
            peak_alpha: 0.8 * glow,
            layer_alpha: lerp(0.8, 1.0, t),
        });
        passes.push(GlowPass {
            kind: PassKind::Halo,
            half_width: w * 4.0,
            corner_radius: 35.0,
            peak_alpha: 0.4 * glow,
            layer_alpha: lerp(0.6, 0.8, t),
        });
        if self.active {
            passes.push(GlowPass {
                kind: PassKind::Halo,
                half_width: w * 8.0,
                corner_radius: 45.0,
                peak_alpha: 0.2,
                layer_alpha: lerp(0.4, 0.6, t),
            });
        }

        LightBar {
            x: self.bar_x,
            top,
            height,
            fade_top: ratio.min(0.5),
            fade_bottom: (1.0 - ratio).max(0.5),
            passes,
        }
    }

    /// Drop all particles. Safe to call more than once.
    pub fn release(&mut self) {
        self.emission = false;
        self.particles.clear();
        self.particles.shrink_to_fit();
    }
}

#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.gen::<f32>()
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
