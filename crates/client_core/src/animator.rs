//! One-way entrance reveal for content blocks entering the viewport.

use std::time::Duration;

use shared::{
    domain::{AnimatedIndex, ElementRef},
    protocol::{DomPatch, Schedule, Task},
};
use tracing::debug;

use crate::{config::AnimationConfig, surface::Surface};

/// Content blocks that start hidden and are revealed on entry.
pub const ANIMATED_SELECTOR: &str =
    ".timeline-item, .skill-category, .education-card, .certification-card";
/// Children of an animated block that reveal one after another.
pub const STAGGERED_CHILD_SELECTOR: &str = ".skill-tag, li";

const HIDDEN_TRANSFORM: &str = "translateY(30px)";
const SHOWN_TRANSFORM: &str = "translateY(0)";
const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

#[derive(Debug, Clone, Copy, Default)]
struct Tracked {
    revealed: bool,
    children: usize,
}

pub struct EntranceAnimator {
    config: AnimationConfig,
    tracked: Vec<Tracked>,
}

impl EntranceAnimator {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            tracked: Vec::new(),
        }
    }

    pub fn is_revealed(&self, index: AnimatedIndex) -> bool {
        self.tracked.get(index.0).is_some_and(|t| t.revealed)
    }

    /// Hides every animated block (and its staggered children) and starts observing it.
    pub fn prepare(&mut self, surface: &dyn Surface) {
        let count = surface.animated_count();
        self.tracked = (0..count)
            .map(|index| Tracked {
                revealed: false,
                children: if self.config.stagger_children {
                    surface.animated_children(AnimatedIndex(index))
                } else {
                    0
                },
            })
            .collect();

        for (index, tracked) in self.tracked.iter().enumerate() {
            let parent = AnimatedIndex(index);
            hide(ElementRef::Animated(parent), surface);
            for child in 0..tracked.children {
                hide(ElementRef::AnimatedChild { parent, child }, surface);
            }
            surface.apply(DomPatch::Observe(ElementRef::Animated(parent)));
        }
        debug!(count, "entrance animation prepared");
    }

    pub fn on_intersection(
        &mut self,
        target: AnimatedIndex,
        intersecting: bool,
        surface: &dyn Surface,
    ) {
        if !intersecting {
            return;
        }
        let Some(tracked) = self.tracked.get_mut(target.0) else {
            return;
        };
        if tracked.revealed {
            return;
        }
        tracked.revealed = true;

        reveal(ElementRef::Animated(target), surface);
        let stagger = Duration::from_millis(self.config.stagger_ms);
        for child in 0..tracked.children {
            surface.schedule(
                Schedule::After(stagger * child as u32),
                Task::RevealChild {
                    parent: target,
                    child,
                },
            );
        }
    }

    pub fn reveal_child(&self, parent: AnimatedIndex, child: usize, surface: &dyn Surface) {
        reveal(ElementRef::AnimatedChild { parent, child }, surface);
    }
}

fn hide(target: ElementRef, surface: &dyn Surface) {
    set_style(&target, "opacity", "0", surface);
    set_style(&target, "transform", HIDDEN_TRANSFORM, surface);
    set_style(&target, "transition", TRANSITION, surface);
}

fn reveal(target: ElementRef, surface: &dyn Surface) {
    set_style(&target, "opacity", "1", surface);
    set_style(&target, "transform", SHOWN_TRANSFORM, surface);
}

fn set_style(target: &ElementRef, property: &'static str, value: &str, surface: &dyn Surface) {
    surface.apply(DomPatch::SetStyle {
        target: target.clone(),
        property,
        value: value.to_string(),
    });
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;
