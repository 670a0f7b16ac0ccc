use client_core::animator::{ANIMATED_SELECTOR, STAGGERED_CHILD_SELECTOR};
use shared::domain::ElementRef;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

use crate::markup::{
    ANCHOR_SELECTOR, CONFIG_BLOCK_ID, CONTACT_FORM_SELECTOR, CONTACT_STATUS_SELECTOR,
    FORM_MODE_ATTR, HAMBURGER_SELECTOR, HERO_TITLE_SELECTOR, MAIL_LINK_SELECTOR,
    NAVBAR_SELECTOR, NAV_LINK_SELECTOR, NAV_MENU_SELECTOR, REVEAL_INDEX_ATTR,
    SKILL_TAG_SELECTOR, SUBMIT_BUTTON_SELECTOR, TIMELINE_CARD_SELECTOR,
};

/// Every element the page behavior addresses, resolved once after parse.
///
/// Indexed lists keep document order, which is what the `ElementRef`
/// indices refer to.
pub struct Elements {
    pub document: Document,
    pub body: Option<HtmlElement>,
    pub navbar: Option<HtmlElement>,
    pub hamburger: Option<HtmlElement>,
    pub nav_menu: Option<HtmlElement>,
    pub nav_links: Vec<HtmlElement>,
    pub anchors: Vec<HtmlElement>,
    pub animated: Vec<HtmlElement>,
    pub animated_children: Vec<Vec<HtmlElement>>,
    pub hero_title: Option<HtmlElement>,
    pub skill_tags: Vec<HtmlElement>,
    pub timeline_cards: Vec<HtmlElement>,
    pub contact_form: Option<HtmlFormElement>,
    pub contact_status: Option<HtmlElement>,
    pub mail_link: Option<Element>,
}

impl Elements {
    pub fn bind(document: &Document) -> Result<Self, JsValue> {
        let animated = query_all(document, ANIMATED_SELECTOR)?;
        let mut animated_children = Vec::with_capacity(animated.len());
        for (index, block) in animated.iter().enumerate() {
            block.set_attribute(REVEAL_INDEX_ATTR, &index.to_string())?;
            animated_children.push(children_of(block, STAGGERED_CHILD_SELECTOR)?);
        }

        Ok(Self {
            document: document.clone(),
            body: document.body(),
            navbar: query(document, NAVBAR_SELECTOR),
            hamburger: query(document, HAMBURGER_SELECTOR),
            nav_menu: query(document, NAV_MENU_SELECTOR),
            nav_links: query_all(document, NAV_LINK_SELECTOR)?,
            anchors: query_all(document, ANCHOR_SELECTOR)?,
            animated,
            animated_children,
            hero_title: query(document, HERO_TITLE_SELECTOR),
            skill_tags: query_all(document, SKILL_TAG_SELECTOR)?,
            timeline_cards: query_all(document, TIMELINE_CARD_SELECTOR)?,
            contact_form: document
                .query_selector(CONTACT_FORM_SELECTOR)?
                .and_then(|el| el.dyn_into().ok()),
            contact_status: query(document, CONTACT_STATUS_SELECTOR),
            mail_link: document.query_selector(MAIL_LINK_SELECTOR)?,
        })
    }

    /// Text of the embedded `<script type="application/json" id="site-config">`.
    pub fn config_block(&self) -> Option<String> {
        self.document
            .get_element_by_id(CONFIG_BLOCK_ID)
            .and_then(|el| el.text_content())
    }

    pub fn form_mode_override(&self) -> Option<String> {
        self.contact_form
            .as_ref()
            .and_then(|form| form.get_attribute(FORM_MODE_ATTR))
    }

    pub fn mail_link_href(&self) -> Option<String> {
        self.mail_link
            .as_ref()
            .and_then(|link| link.get_attribute("href"))
    }

    pub fn submit_button(&self) -> Option<HtmlElement> {
        let form = self.contact_form.as_ref()?;
        form.query_selector(SUBMIT_BUTTON_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into().ok())
    }

    /// Resolves a symbolic handle; `FormMessage` is owned by the surface and
    /// never resolves here.
    pub fn resolve(&self, target: &ElementRef) -> Option<HtmlElement> {
        match target {
            ElementRef::Body => self.body.clone(),
            ElementRef::Hamburger => self.hamburger.clone(),
            ElementRef::NavMenu => self.nav_menu.clone(),
            ElementRef::Navbar => self.navbar.clone(),
            ElementRef::NavLink(index) => self.nav_links.get(index.0).cloned(),
            ElementRef::Section(id) => self
                .document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into().ok()),
            ElementRef::Animated(index) => self.animated.get(index.0).cloned(),
            ElementRef::AnimatedChild { parent, child } => self
                .animated_children
                .get(parent.0)
                .and_then(|children| children.get(*child))
                .cloned(),
            ElementRef::HeroTitle => self.hero_title.clone(),
            ElementRef::SkillTag(index) => self.skill_tags.get(index.0).cloned(),
            ElementRef::TimelineCard(index) => self.timeline_cards.get(index.0).cloned(),
            ElementRef::ContactForm => self
                .contact_form
                .as_ref()
                .map(|form| HtmlElement::clone(form)),
            ElementRef::ContactStatus => self.contact_status.clone(),
            ElementRef::SubmitButton => self.submit_button(),
            ElementRef::FormMessage => None,
        }
    }
}

fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into().ok())
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    Ok(collect(document.query_selector_all(selector)?))
}

fn children_of(parent: &Element, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    Ok(collect(parent.query_selector_all(selector)?))
}

fn collect(nodes: web_sys::NodeList) -> Vec<HtmlElement> {
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}
