//! Disc Field entry point
//!
//! On wasm: wires the canvas, input, page controls and notifications.
//! Natively: runs a short scripted session headless and logs the outcome.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::RefCell;
    use std::rc::Rc;

    use disc_field::consts::CANVAS_SIZE;
    use disc_field::platform::input::{PageInteraction, setup_input_handlers};
    use disc_field::platform::notifier::DomNotifier;
    use disc_field::platform::page::{setup_actions, setup_navbar_scroll};
    use disc_field::renderer::CanvasSurface;
    use disc_field::ui::NoticeBoard;
    use disc_field::{FieldConfig, Interaction, PageError};

    const CANVAS_ID: &str = "gameCanvas";

    pub fn run() -> Result<(), PageError> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
        }

        log::info!("Disc Field starting...");

        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let document = window.document().ok_or(PageError::NoDocument)?;

        let surface = CanvasSurface::from_document(&document, CANVAS_ID, CANVAS_SIZE as u32)?;
        let config = FieldConfig::load(surface.canvas())?;
        log::info!("Drag policy: {}", config.drag_policy.as_str());

        let canvas = surface.canvas().clone();
        let notifier = DomNotifier::new(window.clone(), document.clone(), NoticeBoard::new(&config));
        let app: Rc<RefCell<PageInteraction>> =
            Rc::new(RefCell::new(Interaction::new(config, surface, notifier)));

        setup_input_handlers(&canvas, app.clone());
        let bound = setup_actions(&window, &document, app)?;
        setup_navbar_scroll(&window, &document);

        log::info!("Disc Field running ({} page controls bound)", bound);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_page::run().map_err(|e| {
        log::error!("Startup failed: {}", e);
        JsValue::from(e)
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use disc_field::renderer::DrawRecorder;
    use disc_field::sim::DiscId;
    use disc_field::ui::NoticeBoard;
    use disc_field::{FieldConfig, Interaction};

    env_logger::init();
    log::info!("Disc Field (native) starting...");
    log::info!("The page runs in the browser - build for wasm32 to serve it");

    let config = FieldConfig::default();
    let board = NoticeBoard::new(&config);
    let lifetime = config.notice_lifetime_ms();
    let mut app = Interaction::new(config, DrawRecorder::default(), board);
    log::info!("Drag policy: {}", app.field().policy().as_str());

    // Drag blue next to red, collide, then reset
    let blue = app.field().disc(DiscId::Blue).pos;
    app.press_start(blue.x, blue.y);
    app.press_move(150.0, 100.0);
    app.press_end();
    let outcome = app.simulate_collision();
    log::info!("Collision outcome: {:?}", outcome);
    log::info!("Blue now at {:?}", app.field().blue().pos);

    app.reset();
    log::info!(
        "After reset: red {:?}, blue {:?}",
        app.field().red().pos,
        app.field().blue().pos
    );

    log::info!(
        "{} redraws, {} live notices",
        app.surface().frames(),
        app.notifier().len()
    );
    app.notifier_mut().advance_to(lifetime);
    log::info!("{} live notices after {}ms", app.notifier().len(), lifetime);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
