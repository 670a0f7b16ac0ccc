use super::*;
use crate::surface::HeadlessSurface;
use shared::domain::{SkillTagIndex, TimelineCardIndex};

fn typed_text(surface: &HeadlessSurface) -> String {
    surface
        .patches()
        .iter()
        .fold(String::new(), |mut text, patch| {
            match patch {
                DomPatch::SetText {
                    target: ElementRef::HeroTitle,
                    text: replacement,
                } => text = replacement.clone(),
                DomPatch::AppendText {
                    target: ElementRef::HeroTitle,
                    text: appended,
                } => text.push_str(appended),
                _ => {}
            }
            text
        })
}

#[test]
fn typewriter_types_one_character_per_tick() {
    let surface = HeadlessSurface::default().with_text(ElementRef::HeroTitle, "Hi!");
    let mut typewriter = Typewriter::new(&EffectsConfig::default());

    typewriter.start(&surface);
    assert_eq!(typed_text(&surface), "H");
    assert_eq!(
        surface.take_scheduled(),
        vec![(
            Schedule::After(Duration::from_millis(150)),
            Task::TypeNextChar
        )]
    );

    typewriter.tick(&surface);
    typewriter.tick(&surface);
    assert_eq!(typed_text(&surface), "Hi!");
    assert!(typewriter.is_done());
}

#[test]
fn cursor_shows_after_typing_then_is_removed() {
    let surface = HeadlessSurface::default().with_text(ElementRef::HeroTitle, "A");
    let mut typewriter = Typewriter::new(&EffectsConfig::default());

    typewriter.start(&surface);

    assert!(surface.patches().contains(&DomPatch::ShowTypingCursor {
        target: ElementRef::HeroTitle
    }));
    assert_eq!(
        surface.take_scheduled(),
        vec![(
            Schedule::After(Duration::from_millis(3000)),
            Task::RemoveTypingCursor
        )]
    );

    typewriter.remove_cursor(&surface);
    assert_eq!(
        surface.patches().last(),
        Some(&DomPatch::RemoveTypingCursor {
            target: ElementRef::HeroTitle
        })
    );
}

#[test]
fn typewriter_without_cursor_stops_silently() {
    let surface = HeadlessSurface::default().with_text(ElementRef::HeroTitle, "A");
    let mut typewriter = Typewriter::new(&EffectsConfig {
        typing_cursor: false,
        ..EffectsConfig::default()
    });

    typewriter.start(&surface);

    assert!(surface.scheduled().is_empty());
    typewriter.tick(&surface);
    assert_eq!(typed_text(&surface), "A");
}

#[test]
fn missing_or_empty_title_is_left_alone() {
    let surface = HeadlessSurface::default().with_text(ElementRef::HeroTitle, "");
    let mut typewriter = Typewriter::new(&EffectsConfig::default());
    typewriter.start(&surface);
    assert!(surface.patches().is_empty());

    let surface = HeadlessSurface::default();
    typewriter.start(&surface);
    assert!(surface.patches().is_empty());
}

#[test]
fn skill_tag_scales_on_hover() {
    let surface = HeadlessSurface::default();
    let hover = HoverEffects::new(&EffectsConfig::default());
    let target = HoverTarget::SkillTag(SkillTagIndex(1));

    hover.on_enter(target, &surface);
    assert_eq!(
        surface.style_of(&target.element(), "transform").as_deref(),
        Some("scale(1.05)")
    );

    hover.on_leave(target, &surface);
    assert_eq!(
        surface.style_of(&target.element(), "transform").as_deref(),
        Some("scale(1)")
    );
}

#[test]
fn timeline_card_lifts_and_settles() {
    let surface = HeadlessSurface::default();
    let hover = HoverEffects::new(&EffectsConfig::default());
    let target = HoverTarget::TimelineCard(TimelineCardIndex(0));

    hover.on_enter(target, &surface);
    assert_eq!(
        surface.style_of(&target.element(), "transform").as_deref(),
        Some("translateY(-5px)")
    );

    hover.on_leave(target, &surface);
    assert_eq!(
        surface.style_of(&target.element(), "box-shadow").as_deref(),
        Some("0 4px 6px rgba(0, 0, 0, 0.05)")
    );
}

#[test]
fn touch_end_delays_reset() {
    let surface = HeadlessSurface::default();
    let hover = HoverEffects::new(&EffectsConfig::default());
    let target = HoverTarget::SkillTag(SkillTagIndex(0));

    hover.on_touch_start(target, &surface);
    hover.on_touch_end(target, &surface);

    assert_eq!(
        surface.style_of(&target.element(), "transform").as_deref(),
        Some("scale(1.05)")
    );
    assert_eq!(
        surface.scheduled(),
        vec![(
            Schedule::After(Duration::from_millis(150)),
            Task::ResetHover(target)
        )]
    );
}

#[test]
fn page_fade_starts_transparent_and_fades_in() {
    let surface = HeadlessSurface::default();
    let fade = PageFade::new(&EffectsConfig::default());

    fade.on_load(&surface);
    assert_eq!(
        surface.style_of(&ElementRef::Body, "opacity").as_deref(),
        Some("0")
    );
    assert_eq!(
        surface.scheduled(),
        vec![(
            Schedule::After(Duration::from_millis(100)),
            Task::FadeInBody
        )]
    );

    fade.fade_in(&surface);
    assert_eq!(
        surface.style_of(&ElementRef::Body, "opacity").as_deref(),
        Some("1")
    );
}

#[test]
fn page_fade_can_wait_for_next_frame() {
    let surface = HeadlessSurface::default();
    let fade = PageFade::new(&EffectsConfig {
        fade: FadeSchedule::NextFrame,
        ..EffectsConfig::default()
    });

    fade.on_load(&surface);

    assert_eq!(
        surface.scheduled(),
        vec![(Schedule::NextFrame, Task::FadeInBody)]
    );
}
