//! Landing-page effects as renderer-independent state machines.
//!
//! A host feeds in viewport intersections and pointer positions and applies
//! the resulting classes and CSS variables. Nothing here is shared with the
//! admin panel.

mod parallax;
mod reveal;

pub use self::parallax::{FrameRequest, Offset, Parallax, Rect};
pub use self::reveal::{
    Intersection, MotionEnv, OBSERVER_OPTIONS, ObserverOptions, REVEAL_CLASS, REVEAL_SELECTORS,
    REVEALED_CLASS, Reveal,
};
