//! Built-in animations.

mod lissajous;
mod sine;

pub use lissajous::Lissajous;
pub use sine::SineWave;

use anima_core::{Animation, AnimationKind};

/// Build the animation selected by `kind`.
pub fn animation_for(kind: AnimationKind) -> Box<dyn Animation> {
    match kind {
        AnimationKind::SineWave => Box::new(SineWave::default()),
        AnimationKind::Lissajous => Box::new(Lissajous::default()),
    }
}
