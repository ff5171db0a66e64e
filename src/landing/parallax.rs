/// Horizontal travel at the hero edge, in pixels.
const MAX_X_PX: f64 = 24.0;
/// Vertical travel at the hero edge, in pixels.
const MAX_Y_PX: f64 = 18.0;

/// A client rectangle, as returned by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pixel offset written into the hero's custom properties.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub fn css_vars(&self) -> [(&'static str, String); 2] {
        [
            ("--sh-mx", format!("{}px", self.x)),
            ("--sh-my", format!("{}px", self.y)),
        ]
    }
}

/// Ask the host for one animation frame, then call [`Parallax::on_frame`].
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRequest;

/// Pointer parallax for the hero region. Pointer events are coalesced to at
/// most one pending frame.
#[derive(Clone, Debug, Default)]
pub struct Parallax {
    enabled: bool,
    latest: Offset,
    frame_pending: bool,
}

impl Parallax {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            enabled: !reduced_motion,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn on_pointer_move(&mut self, hero: Rect, x: f64, y: f64) -> Option<FrameRequest> {
        if !self.enabled {
            return None;
        }
        let cx = hero.left + hero.width / 2.0;
        let cy = hero.top + hero.height / 2.0;
        let dx = ((x - cx) / (hero.width / 2.0).max(1.0)).clamp(-1.0, 1.0);
        let dy = ((y - cy) / (hero.height / 2.0).max(1.0)).clamp(-1.0, 1.0);
        self.latest = Offset {
            x: round_half_up(dx * MAX_X_PX),
            y: round_half_up(dy * MAX_Y_PX),
        };
        self.schedule()
    }

    pub fn on_pointer_leave(&mut self) -> Option<FrameRequest> {
        if !self.enabled {
            return None;
        }
        self.latest = Offset::default();
        self.schedule()
    }

    /// The offset to apply in this frame.
    pub fn on_frame(&mut self) -> Offset {
        self.frame_pending = false;
        self.latest
    }

    fn schedule(&mut self) -> Option<FrameRequest> {
        if self.frame_pending {
            return None;
        }
        self.frame_pending = true;
        Some(FrameRequest)
    }
}

// Browser rounding: halves go towards +inf, so -0.5 becomes 0.
fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

#[cfg(test)]
#[path = "../tests/landing/parallax_tests.rs"]
mod tests;
