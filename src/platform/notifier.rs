//! DOM notification overlays
//!
//! Each notice becomes a `<div>` appended to `<body>` with two chained
//! `setTimeout`s: delay then fade, fade then remove. Timer callbacks are
//! handed to JS with `once_into_js` so they are freed after firing, and a
//! single click listener shared by every notice handles early dismissal.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::PageError;
use crate::ui::notice::style;
use crate::ui::{NoticeBoard, NoticeId, NoticeKind, Notify};

const NOTICE_ID_ATTR: &str = "data-notice-id";

/// Board plus the elements currently on screen
struct LiveNotices {
    board: RefCell<NoticeBoard>,
    elements: RefCell<HashMap<NoticeId, HtmlElement>>,
}

impl LiveNotices {
    fn dismiss(&self, id: NoticeId) -> bool {
        let removed = self.board.borrow_mut().dismiss(id);
        if let Some(el) = self.elements.borrow_mut().remove(&id) {
            el.remove();
        }
        removed
    }

    fn begin_leave(&self, id: NoticeId) {
        if !self.board.borrow_mut().begin_leave(id) {
            return;
        }
        if let Some(el) = self.elements.borrow().get(&id) {
            let css = el.style();
            let _ = css.set_property("opacity", style::LEAVING_OPACITY);
            let _ = css.set_property("transform", style::LEAVING_TRANSFORM);
        }
    }

    fn finish(&self, id: NoticeId) {
        self.board.borrow_mut().remove(id);
        if let Some(el) = self.elements.borrow_mut().remove(&id) {
            // Already detached if the page dropped it
            if el.parent_node().is_some() {
                el.remove();
            }
        }
    }
}

fn set_timeout(window: &Window, ms: f64, f: impl FnOnce() + 'static) -> Result<(), PageError> {
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        ms as i32,
    )?;
    Ok(())
}

#[derive(Clone)]
pub struct DomNotifier {
    window: Window,
    document: Document,
    live: Rc<LiveNotices>,
    on_click: Rc<Closure<dyn FnMut(web_sys::Event)>>,
}

impl DomNotifier {
    pub fn new(window: Window, document: Document, board: NoticeBoard) -> Self {
        let live = Rc::new(LiveNotices {
            board: RefCell::new(board),
            elements: RefCell::new(HashMap::new()),
        });

        // Click to dismiss early; the id rides on the element
        let live_clone = live.clone();
        let on_click = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            let id = event
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.get_attribute(NOTICE_ID_ATTR))
                .and_then(|v| NoticeId::from_attr(&v));
            if let Some(id) = id {
                live_clone.dismiss(id);
            }
        });

        Self {
            window,
            document,
            live,
            on_click: Rc::new(on_click),
        }
    }

    /// Remove a notice now; its pending timers become no-ops
    pub fn dismiss(&self, id: NoticeId) -> bool {
        self.live.dismiss(id)
    }

    fn create_element(
        &self,
        id: NoticeId,
        message: &str,
        kind: NoticeKind,
    ) -> Result<HtmlElement, PageError> {
        let el: HtmlElement = self
            .document
            .create_element("div")?
            .dyn_into()
            .map_err(|_| PageError::Js("div is not an HtmlElement".into()))?;
        el.set_text_content(Some(message));
        el.style().set_css_text(&style::overlay_css(kind));
        el.set_attribute(NOTICE_ID_ATTR, &id.to_attr())?;
        el.add_event_listener_with_callback("click", (*self.on_click).as_ref().unchecked_ref())?;
        let body = self
            .document
            .body()
            .ok_or(PageError::MissingElement("body".into()))?;
        body.append_child(&el)?;
        Ok(el)
    }

    fn schedule(&self, id: NoticeId) -> Result<(), PageError> {
        let (display_ms, fade_ms) = {
            let board = self.live.board.borrow();
            (board.display_ms(), board.fade_ms())
        };
        let live = self.live.clone();
        let window = self.window.clone();
        set_timeout(&self.window, display_ms, move || {
            live.begin_leave(id);
            let inner = live.clone();
            if let Err(e) = set_timeout(&window, fade_ms, move || inner.finish(id)) {
                log::error!("Failed to schedule notice removal: {}", e);
            }
        })
    }

    fn show(&mut self, message: &str, kind: NoticeKind) -> NoticeId {
        let now = js_sys::Date::now();
        let id = self.live.board.borrow_mut().post(message, kind, now);
        match self.create_element(id, message, kind) {
            Ok(el) => {
                self.live.elements.borrow_mut().insert(id, el);
                if let Err(e) = self.schedule(id) {
                    log::error!("Failed to schedule notice {}: {}", id.0, e);
                }
            }
            Err(e) => {
                log::error!("Notification failed: {}", e);
                self.live.board.borrow_mut().remove(id);
            }
        }
        id
    }
}

impl Notify for DomNotifier {
    fn notify(&mut self, message: &str, kind: NoticeKind) -> NoticeId {
        log::info!("[{}] {}", kind.as_str(), message);
        self.show(message, kind)
    }
}
