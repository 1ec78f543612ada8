use super::config::StreamParams;

/// Kinetic scroll state for the card strip.
///
/// `position` is the strip's horizontal translation in CSS pixels. Autoplay
/// steps and wheel nudges keep it inside `[-content_width, viewport_width]`
/// by wrapping to the opposite bound; a drag moves it freely and the next
/// autoplay step wraps it back.
#[derive(Clone, Debug)]
pub struct StreamState {
    pub params: StreamParams,
    pub position: f32,
    pub velocity: f32,
    pub direction: f32,
    pub autoplay: bool,
    pub dragging: bool,
    /// Reduced-motion mode: releasing a drag does not restart the drift.
    pub autoplay_allowed: bool,
    last_pointer_x: f32,
    pointer_velocity: f32,
    content_width: f32,
    viewport_width: f32,
}

impl StreamState {
    pub fn new(params: StreamParams) -> Self {
        Self {
            position: 0.0,
            velocity: params.default_velocity,
            direction: -1.0,
            autoplay: true,
            dragging: false,
            autoplay_allowed: true,
            last_pointer_x: 0.0,
            pointer_velocity: 0.0,
            content_width: 0.0,
            viewport_width: 0.0,
            params,
        }
    }

    pub fn set_autoplay_allowed(&mut self, allowed: bool) {
        self.autoplay_allowed = allowed;
        if !allowed {
            self.autoplay = false;
        } else if !self.dragging {
            self.autoplay = true;
        }
    }

    /// Resize / remeasure. Position is left alone.
    pub fn set_extent(&mut self, content_width: f32, viewport_width: f32) {
        self.content_width = content_width.max(0.0);
        self.viewport_width = viewport_width.max(0.0);
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn pointer_velocity(&self) -> f32 {
        self.pointer_velocity
    }

    /// Enter dragging. `rendered_offset` is the translation currently on
    /// screen; it wins over `position` so grabbing a moving strip never jumps.
    pub fn begin_drag(&mut self, pointer_x: f32, rendered_offset: Option<f32>) {
        self.dragging = true;
        self.autoplay = false;
        self.last_pointer_x = pointer_x;
        self.pointer_velocity = 0.0;
        if let Some(offset) = rendered_offset.filter(|o| o.is_finite()) {
            self.position = offset;
        }
    }

    /// Follow the pointer. Returns `false` when no drag is in progress.
    pub fn drag_to(&mut self, pointer_x: f32) -> bool {
        if !self.dragging {
            return false;
        }
        let delta = pointer_x - self.last_pointer_x;
        self.position += delta;
        self.pointer_velocity = delta * self.params.drag_sample_rate_hz;
        self.last_pointer_x = pointer_x;
        true
    }

    /// Leave dragging, seeding the drift from the last pointer motion when it
    /// was fast enough. Returns `false` when no drag was in progress.
    pub fn end_drag(&mut self) -> bool {
        if !self.dragging {
            return false;
        }
        self.dragging = false;
        if self.pointer_velocity.abs() > self.params.min_velocity {
            self.velocity = self.pointer_velocity.abs();
            self.direction = self.pointer_velocity.signum();
        } else {
            self.velocity = self.params.default_velocity;
        }
        self.autoplay = self.autoplay_allowed;
        true
    }

    /// Fixed nudge per wheel event, independent of drag/autoplay.
    /// Scrolling down moves the strip left. Returns `false` for a zero delta.
    pub fn wheel(&mut self, delta_y: f32) -> bool {
        if delta_y > 0.0 {
            self.position -= self.params.wheel_step;
        } else if delta_y < 0.0 {
            self.position += self.params.wheel_step;
        } else {
            return false;
        }
        self.wrap();
        true
    }

    /// Advance the drift by `dt` seconds. Returns whether the position moved.
    pub fn step(&mut self, dt: f32) -> bool {
        if !self.autoplay || self.dragging {
            return false;
        }
        let dt = dt.clamp(0.0, self.params.max_frame_dt);
        self.velocity = (self.velocity * self.params.friction).max(self.params.min_velocity);
        self.position += self.velocity * self.direction * dt;
        self.wrap();
        true
    }

    pub fn wrap(&mut self) {
        if self.position < -self.content_width {
            self.position = self.viewport_width;
        } else if self.position > self.viewport_width {
            self.position = -self.content_width;
        }
    }
}
