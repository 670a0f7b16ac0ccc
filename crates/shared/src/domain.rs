use serde::{Deserialize, Serialize};

macro_rules! index_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub usize);
    };
}

index_newtype!(NavLinkIndex);
index_newtype!(AnimatedIndex);
index_newtype!(SkillTagIndex);
index_newtype!(TimelineCardIndex);

/// Symbolic handle for every element the page behavior reads or patches.
///
/// Indexed variants refer to document order within their selector, as the
/// front end resolved them when it bound the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementRef {
    Body,
    Hamburger,
    NavMenu,
    Navbar,
    NavLink(NavLinkIndex),
    Section(String),
    Animated(AnimatedIndex),
    AnimatedChild { parent: AnimatedIndex, child: usize },
    HeroTitle,
    SkillTag(SkillTagIndex),
    TimelineCard(TimelineCardIndex),
    ContactForm,
    ContactStatus,
    SubmitButton,
    FormMessage,
}

/// Document-space geometry of one `section[id]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Success,
    Error,
}

/// Which hover treatment an element receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    SkillTag(SkillTagIndex),
    TimelineCard(TimelineCardIndex),
}

impl HoverTarget {
    pub fn element(self) -> ElementRef {
        match self {
            HoverTarget::SkillTag(index) => ElementRef::SkillTag(index),
            HoverTarget::TimelineCard(index) => ElementRef::TimelineCard(index),
        }
    }
}
