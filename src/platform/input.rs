//! Pointer and touch input
//!
//! Raw browser events become field-relative press events. Only the first
//! touch point is used; there is no multi-touch handling.

use glam::Vec2;

/// Logical press event in field coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressEvent {
    Start(Vec2),
    Move(Vec2),
    End,
}

/// Client coordinates relative to the canvas bounding rect
#[inline]
pub fn to_field(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Vec2 {
    Vec2::new((client_x - rect_left) as f32, (client_y - rect_top) as f32)
}

/// Browser event names mapped to press events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressPhase {
    Start,
    Move,
    End,
}

impl PressPhase {
    pub const MOUSE_EVENTS: [(&'static str, PressPhase); 3] = [
        ("mousedown", PressPhase::Start),
        ("mousemove", PressPhase::Move),
        ("mouseup", PressPhase::End),
    ];

    pub const TOUCH_EVENTS: [(&'static str, PressPhase); 3] = [
        ("touchstart", PressPhase::Start),
        ("touchmove", PressPhase::Move),
        ("touchend", PressPhase::End),
    ];

    /// Build the press event; `point` is ignored for `End`
    pub fn event(self, point: Option<Vec2>) -> Option<PressEvent> {
        match (self, point) {
            (PressPhase::Start, Some(p)) => Some(PressEvent::Start(p)),
            (PressPhase::Move, Some(p)) => Some(PressEvent::Move(p)),
            (PressPhase::End, _) => Some(PressEvent::End),
            _ => None,
        }
    }
}

/// Route a press event into the controller
pub fn dispatch<S, N>(app: &mut crate::Interaction<S, N>, event: PressEvent)
where
    S: crate::renderer::Surface,
    N: crate::ui::Notify,
{
    match event {
        PressEvent::Start(p) => {
            app.press_start(p.x, p.y);
        }
        PressEvent::Move(p) => app.press_move(p.x, p.y),
        PressEvent::End => app.press_end(),
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use super::{PressPhase, dispatch, to_field};
    use crate::platform::notifier::DomNotifier;
    use crate::renderer::CanvasSurface;
    use crate::Interaction;

    pub type PageInteraction = Interaction<CanvasSurface, DomNotifier>;

    fn mouse_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        to_field(
            event.client_x() as f64,
            event.client_y() as f64,
            rect.left(),
            rect.top(),
        )
    }

    fn touch_point(canvas: &HtmlCanvasElement, event: &TouchEvent) -> Option<Vec2> {
        let touch = event.touches().get(0)?;
        let rect = canvas.get_bounding_client_rect();
        Some(to_field(
            touch.client_x() as f64,
            touch.client_y() as f64,
            rect.left(),
            rect.top(),
        ))
    }

    /// Attach mouse and touch listeners to the canvas
    pub fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<PageInteraction>>) {
        for (name, phase) in PressPhase::MOUSE_EVENTS {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let point = mouse_point(&canvas_clone, &event);
                if let Some(press) = phase.event(Some(point)) {
                    dispatch(&mut *app.borrow_mut(), press);
                }
            });
            if let Err(e) =
                canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                log::error!("Failed to attach {}: {:?}", name, e);
            }
            closure.forget();
        }

        for (name, phase) in PressPhase::TOUCH_EVENTS {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let point = touch_point(&canvas_clone, &event);
                if let Some(press) = phase.event(point) {
                    dispatch(&mut *app.borrow_mut(), press);
                }
            });
            if let Err(e) =
                canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                log::error!("Failed to attach {}: {:?}", name, e);
            }
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{PageInteraction, setup_input_handlers};
