//! Page wiring: rules panel, section scrolling, navbar styling, and the
//! `data-action` controls

use crate::consts::{NAVBAR_OFFSET, NAVBAR_SOLID_AFTER};

pub const RULES_PANEL_ID: &str = "rulesPanel";
pub const NAVBAR_SELECTOR: &str = ".navbar";

/// Actions a page control can trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    SimulateCollision,
    ResetBalls,
    ShowRules,
    ScrollToSection(String),
}

impl PageAction {
    /// Parse a `data-action` name; `section` comes from `data-section`
    pub fn parse(name: &str, section: Option<&str>) -> Option<Self> {
        match name {
            "simulateCollision" => Some(PageAction::SimulateCollision),
            "resetBalls" => Some(PageAction::ResetBalls),
            "showRules" => Some(PageAction::ShowRules),
            "scrollToSection" => section.map(|s| PageAction::ScrollToSection(s.to_string())),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PageAction::SimulateCollision => "simulateCollision",
            PageAction::ResetBalls => "resetBalls",
            PageAction::ShowRules => "showRules",
            PageAction::ScrollToSection(_) => "scrollToSection",
        }
    }
}

/// Next inline `display` value for the rules panel
pub fn toggle_display(current: &str) -> &'static str {
    if current == "none" { "block" } else { "none" }
}

/// Window scroll position that puts a section just under the navbar
pub fn scroll_target(offset_top: f64) -> f64 {
    offset_top - NAVBAR_OFFSET
}

/// Navbar `(background, box-shadow)` for a scroll depth
pub fn navbar_style(scroll_y: f64) -> (&'static str, &'static str) {
    if scroll_y > NAVBAR_SOLID_AFTER {
        ("rgba(44, 62, 80, 0.98)", "0 2px 20px rgba(0,0,0,0.1)")
    } else {
        ("rgba(44, 62, 80, 0.95)", "none")
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

    use super::*;
    use crate::PageError;
    use crate::platform::input::PageInteraction;

    /// Toggle the rules panel between hidden and shown
    pub fn show_rules(document: &Document) -> Result<(), PageError> {
        let panel: HtmlElement = document
            .get_element_by_id(RULES_PANEL_ID)
            .ok_or_else(|| PageError::MissingElement(RULES_PANEL_ID.to_string()))?
            .dyn_into()
            .map_err(|_| PageError::WrongElement {
                id: RULES_PANEL_ID.to_string(),
                expected: "html element",
            })?;
        let style = panel.style();
        let current = style.get_property_value("display")?;
        style.set_property("display", toggle_display(&current))?;
        Ok(())
    }

    /// Smooth-scroll to a section; a missing section is ignored
    pub fn scroll_to_section(window: &Window, document: &Document, id: &str) {
        let Some(section) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            log::warn!("No section #{}", id);
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(scroll_target(section.offset_top() as f64));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }

    fn apply_navbar_style(window: &Window, document: &Document) {
        let Some(navbar) = document
            .query_selector(NAVBAR_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let (background, shadow) = navbar_style(scroll_y);
        let style = navbar.style();
        let _ = style.set_property("background", background);
        let _ = style.set_property("box-shadow", shadow);
    }

    pub fn setup_navbar_scroll(window: &Window, document: &Document) {
        let window_clone = window.clone();
        let document = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            apply_navbar_style(&window_clone, &document);
        });
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Run one page action
    pub fn perform(
        action: &PageAction,
        app: &Rc<RefCell<PageInteraction>>,
        window: &Window,
        document: &Document,
    ) {
        match action {
            PageAction::SimulateCollision => {
                app.borrow_mut().simulate_collision();
            }
            PageAction::ResetBalls => app.borrow_mut().reset(),
            PageAction::ShowRules => {
                if let Err(e) = show_rules(document) {
                    log::error!("showRules: {}", e);
                }
            }
            PageAction::ScrollToSection(id) => scroll_to_section(window, document, id),
        }
    }

    /// Bind every `[data-action]` element to its action on click
    pub fn setup_actions(
        window: &Window,
        document: &Document,
        app: Rc<RefCell<PageInteraction>>,
    ) -> Result<usize, PageError> {
        let nodes = document.query_selector_all("[data-action]")?;
        let mut bound = 0;
        for i in 0..nodes.length() {
            let Some(el) = nodes
                .item(i)
                .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
            else {
                continue;
            };
            let name = el.get_attribute("data-action").unwrap_or_default();
            let section = el.get_attribute("data-section");
            let Some(action) = PageAction::parse(&name, section.as_deref()) else {
                log::warn!("Ignoring unknown page action {:?}", name);
                continue;
            };

            let app = app.clone();
            let window = window.clone();
            let document = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
                perform(&action, &app, &window, &document);
            });
            el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
            bound += 1;
        }
        Ok(bound)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{perform, scroll_to_section, setup_actions, setup_navbar_scroll, show_rules};
