//! Interaction controller
//!
//! Owns the field state and is the only thing that mutates it. Input and page
//! actions call in here; every visible change is followed by a redraw.

use glam::Vec2;

use crate::renderer::{Surface, render_field};
use crate::settings::FieldConfig;
use crate::sim::{CollisionOutcome, DiscId, FieldState, simulate_collision};
use crate::ui::{NoticeKind, Notify};

pub const MSG_COLLIDED: &str = "碰撞成功！蓝球被击退";
pub const MSG_TOO_FAR: &str = "距离过远，未发生碰撞";
pub const MSG_RESET: &str = "位置已重置";

pub struct Interaction<S: Surface, N: Notify> {
    config: FieldConfig,
    field: FieldState,
    surface: S,
    notifier: N,
}

impl<S: Surface, N: Notify> Interaction<S, N> {
    /// Build the controller and draw the initial field
    pub fn new(config: FieldConfig, surface: S, notifier: N) -> Self {
        let field = FieldState::new(&config);
        let mut this = Self {
            config,
            field,
            surface,
            notifier,
        };
        this.redraw();
        this
    }

    pub fn field(&self) -> &FieldState {
        &self.field
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn redraw(&mut self) {
        render_field(&mut self.surface, &self.config, &self.field.discs);
    }

    /// Pointer pressed at field coordinates
    pub fn press_start(&mut self, x: f32, y: f32) -> Vec<DiscId> {
        let captured = self.field.press_start(Vec2::new(x, y));
        if !captured.is_empty() {
            let names: Vec<&str> = captured.iter().map(DiscId::as_str).collect();
            log::debug!("Drag started: {}", names.join(", "));
        }
        captured
    }

    /// Pointer moved; redraws only while a drag is active
    pub fn press_move(&mut self, x: f32, y: f32) {
        if self.field.press_move(Vec2::new(x, y)) {
            self.redraw();
        }
    }

    pub fn press_end(&mut self) {
        self.field.press_end();
    }

    pub fn simulate_collision(&mut self) -> CollisionOutcome {
        let outcome = simulate_collision(
            &mut self.field,
            self.config.collision_range,
            self.config.push_distance,
        );
        match outcome {
            CollisionOutcome::Pushed { from, to } => {
                log::info!("Collision: blue {:?} -> {:?}", from, to);
                self.redraw();
                self.notifier.notify(MSG_COLLIDED, NoticeKind::Success);
            }
            CollisionOutcome::TooFar { distance } => {
                log::info!("No collision, discs {:.1}px apart", distance);
                self.notifier.notify(MSG_TOO_FAR, NoticeKind::Warning);
            }
        }
        outcome
    }

    pub fn reset(&mut self) {
        self.field.reset();
        self.redraw();
        log::info!("Discs reset");
        self.notifier.notify(MSG_RESET, NoticeKind::Info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawRecorder;
    use crate::ui::NoticeBoard;

    type TestInteraction = Interaction<DrawRecorder, NoticeBoard>;

    fn setup() -> TestInteraction {
        Interaction::new(
            FieldConfig::default(),
            DrawRecorder::default(),
            NoticeBoard::default(),
        )
    }

    fn last_kind(app: &TestInteraction) -> Option<NoticeKind> {
        app.notifier().latest().map(|n| n.kind)
    }

    #[test]
    fn test_initial_draw() {
        let app = setup();
        assert_eq!(app.surface().frames(), 1);
        assert_eq!(
            app.surface().disc_centers(),
            vec![Vec2::new(100.0, 100.0), Vec2::new(300.0, 300.0)]
        );
    }

    #[test]
    fn test_drag_redraws_on_move() {
        let mut app = setup();
        assert_eq!(app.press_start(100.0, 100.0), vec![DiscId::Red]);
        assert_eq!(app.surface().frames(), 1);
        app.press_move(150.0, 120.0);
        assert_eq!(app.surface().frames(), 2);
        assert_eq!(app.surface().disc_centers()[0], Vec2::new(150.0, 120.0));
        app.press_end();
        app.press_move(200.0, 200.0);
        assert_eq!(app.surface().frames(), 2);
        assert_eq!(app.field().red().pos, Vec2::new(150.0, 120.0));
    }

    #[test]
    fn test_missed_press_moves_nothing() {
        let mut app = setup();
        assert!(app.press_start(200.0, 200.0).is_empty());
        app.press_move(250.0, 250.0);
        assert_eq!(app.surface().frames(), 1);
    }

    #[test]
    fn test_collision_in_range() {
        let mut app = setup();
        app.press_start(300.0, 300.0);
        app.press_move(150.0, 100.0);
        app.press_end();

        let outcome = app.simulate_collision();
        assert!(outcome.is_hit());
        assert!((app.field().blue().pos - Vec2::new(200.0, 100.0)).length() < 1e-4);
        assert_eq!(last_kind(&app), Some(NoticeKind::Success));
        assert_eq!(
            app.notifier().latest().map(|n| n.message.as_str()),
            Some("碰撞成功！蓝球被击退")
        );
        assert_eq!(app.surface().frames(), 3);
    }

    #[test]
    fn test_collision_out_of_range() {
        let mut app = setup();
        let outcome = app.simulate_collision();
        assert!(!outcome.is_hit());
        assert_eq!(app.field().blue().pos, Vec2::new(300.0, 300.0));
        assert_eq!(last_kind(&app), Some(NoticeKind::Warning));
        assert_eq!(
            app.notifier().latest().map(|n| n.message.as_str()),
            Some("距离过远，未发生碰撞")
        );
        assert_eq!(app.surface().frames(), 1);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut app = setup();
        app.press_start(100.0, 100.0);
        app.press_move(330.0, 70.0);
        app.reset();
        assert_eq!(app.field().red().pos, Vec2::new(100.0, 100.0));
        assert_eq!(app.field().blue().pos, Vec2::new(300.0, 300.0));
        assert!(!app.field().is_dragging());
        assert_eq!(last_kind(&app), Some(NoticeKind::Info));
        assert_eq!(app.notifier().latest().map(|n| n.message.as_str()), Some("位置已重置"));
    }

    #[test]
    fn test_notice_expires_after_lifetime() {
        let mut app = setup();
        app.reset();
        let id = app.notifier().latest().map(|n| n.id).unwrap();
        app.notifier_mut().advance_to(3300.0);
        assert!(!app.notifier().contains(id));
    }
}
