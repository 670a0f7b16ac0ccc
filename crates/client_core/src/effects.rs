//! Decorative effects: hero typing, hover/touch feedback, page fade-in.

use std::time::Duration;

use shared::{
    domain::{ElementRef, HoverTarget},
    protocol::{DomPatch, Schedule, Task},
};

use crate::{
    config::{EffectsConfig, FadeSchedule},
    surface::Surface,
};

pub struct Typewriter {
    chars: Vec<char>,
    next: usize,
    speed: Duration,
    cursor_hold: Option<Duration>,
}

impl Typewriter {
    pub fn new(config: &EffectsConfig) -> Self {
        Self {
            chars: Vec::new(),
            next: 0,
            speed: Duration::from_millis(config.typing_speed_ms),
            cursor_hold: config
                .typing_cursor
                .then(|| Duration::from_millis(config.cursor_hold_ms)),
        }
    }

    pub fn is_done(&self) -> bool {
        self.next >= self.chars.len()
    }

    /// Clears the hero title and types its original text back.
    pub fn start(&mut self, surface: &dyn Surface) {
        let Some(text) = surface.text_of(&ElementRef::HeroTitle) else {
            return;
        };
        if text.is_empty() {
            return;
        }
        self.chars = text.chars().collect();
        self.next = 0;
        surface.apply(DomPatch::SetText {
            target: ElementRef::HeroTitle,
            text: String::new(),
        });
        self.tick(surface);
    }

    pub fn tick(&mut self, surface: &dyn Surface) {
        let Some(ch) = self.chars.get(self.next) else {
            return;
        };
        surface.apply(DomPatch::AppendText {
            target: ElementRef::HeroTitle,
            text: ch.to_string(),
        });
        self.next += 1;

        if !self.is_done() {
            surface.schedule(Schedule::After(self.speed), Task::TypeNextChar);
        } else if let Some(hold) = self.cursor_hold {
            surface.apply(DomPatch::ShowTypingCursor {
                target: ElementRef::HeroTitle,
            });
            surface.schedule(Schedule::After(hold), Task::RemoveTypingCursor);
        }
    }

    pub fn remove_cursor(&self, surface: &dyn Surface) {
        surface.apply(DomPatch::RemoveTypingCursor {
            target: ElementRef::HeroTitle,
        });
    }
}

pub struct HoverEffects {
    touch_reset: Duration,
}

impl HoverEffects {
    pub fn new(config: &EffectsConfig) -> Self {
        Self {
            touch_reset: Duration::from_millis(config.touch_reset_ms),
        }
    }

    pub fn on_enter(&self, target: HoverTarget, surface: &dyn Surface) {
        let element = target.element();
        match target {
            HoverTarget::SkillTag(_) => {
                style(&element, "transform", "scale(1.05)", surface);
                style(&element, "transition", "transform 0.2s ease", surface);
            }
            HoverTarget::TimelineCard(_) => {
                style(&element, "transform", "translateY(-5px)", surface);
                style(&element, "box-shadow", "0 8px 25px rgba(0, 0, 0, 0.1)", surface);
                style(
                    &element,
                    "transition",
                    "transform 0.3s ease, box-shadow 0.3s ease",
                    surface,
                );
            }
        }
    }

    pub fn on_leave(&self, target: HoverTarget, surface: &dyn Surface) {
        let element = target.element();
        match target {
            HoverTarget::SkillTag(_) => style(&element, "transform", "scale(1)", surface),
            HoverTarget::TimelineCard(_) => {
                style(&element, "transform", "translateY(0)", surface);
                style(&element, "box-shadow", "0 4px 6px rgba(0, 0, 0, 0.05)", surface);
            }
        }
    }

    pub fn on_touch_start(&self, target: HoverTarget, surface: &dyn Surface) {
        self.on_enter(target, surface);
    }

    /// Keeps the raised state briefly so a tap is visible.
    pub fn on_touch_end(&self, target: HoverTarget, surface: &dyn Surface) {
        surface.schedule(Schedule::After(self.touch_reset), Task::ResetHover(target));
    }
}

pub struct PageFade {
    schedule: FadeSchedule,
}

impl PageFade {
    pub fn new(config: &EffectsConfig) -> Self {
        Self {
            schedule: config.fade,
        }
    }

    pub fn on_load(&self, surface: &dyn Surface) {
        style(&ElementRef::Body, "opacity", "0", surface);
        style(&ElementRef::Body, "transition", "opacity 0.5s ease", surface);
        let when = match self.schedule {
            FadeSchedule::Delay { ms } => Schedule::After(Duration::from_millis(ms)),
            FadeSchedule::NextFrame => Schedule::NextFrame,
        };
        surface.schedule(when, Task::FadeInBody);
    }

    pub fn fade_in(&self, surface: &dyn Surface) {
        style(&ElementRef::Body, "opacity", "1", surface);
    }
}

fn style(target: &ElementRef, property: &'static str, value: &str, surface: &dyn Surface) {
    surface.apply(DomPatch::SetStyle {
        target: target.clone(),
        property,
        value: value.to_string(),
    });
}

#[cfg(test)]
#[path = "tests/effects_tests.rs"]
mod tests;
