//! Disc and field state
//!
//! The field owns exactly two discs for the whole session. All mutation goes
//! through `FieldState` so the clamping invariant holds after every call.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp_square;
use crate::settings::{DragPolicy, FieldConfig};

/// Identity of a disc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscId {
    /// Disc A, the striker
    Red,
    /// Disc B, the one that gets knocked back
    Blue,
}

impl DiscId {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscId::Red => "red",
            DiscId::Blue => "blue",
        }
    }

    /// Single-character label drawn on the disc
    pub fn label(&self) -> &'static str {
        match self {
            DiscId::Red => "红",
            DiscId::Blue => "蓝",
        }
    }
}

/// A draggable disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    pub id: DiscId,
    pub pos: Vec2,
    pub radius: f32,
    pub dragging: bool,
}

impl Disc {
    pub fn new(id: DiscId, pos: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            radius,
            dragging: false,
        }
    }

    /// Strict hit test: a point on the rim does not count
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance(point) < self.radius
    }
}

/// The two discs plus the bounds they live in
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    /// Draw order: red first, blue on top
    pub discs: [Disc; 2],
    min: f32,
    max: f32,
    policy: DragPolicy,
    red_start: Vec2,
    blue_start: Vec2,
}

impl FieldState {
    pub fn new(config: &FieldConfig) -> Self {
        let min = config.min_coord();
        let max = config.max_coord();
        let red_start = clamp_square(config.red_start, min, max);
        let blue_start = clamp_square(config.blue_start, min, max);
        Self {
            discs: [
                Disc::new(DiscId::Red, red_start, config.disc_radius),
                Disc::new(DiscId::Blue, blue_start, config.disc_radius),
            ],
            min,
            max,
            policy: config.drag_policy,
            red_start,
            blue_start,
        }
    }

    pub fn disc(&self, id: DiscId) -> &Disc {
        match id {
            DiscId::Red => &self.discs[0],
            DiscId::Blue => &self.discs[1],
        }
    }

    fn disc_mut(&mut self, id: DiscId) -> &mut Disc {
        match id {
            DiscId::Red => &mut self.discs[0],
            DiscId::Blue => &mut self.discs[1],
        }
    }

    pub fn red(&self) -> &Disc {
        self.disc(DiscId::Red)
    }

    pub fn blue(&self) -> &Disc {
        self.disc(DiscId::Blue)
    }

    pub fn policy(&self) -> DragPolicy {
        self.policy
    }

    /// Clamp a point into the region disc centers may occupy
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        clamp_square(pos, self.min, self.max)
    }

    /// Move a disc, keeping it inside the field
    pub fn place(&mut self, id: DiscId, pos: Vec2) {
        let pos = self.clamp(pos);
        self.disc_mut(id).pos = pos;
    }

    pub fn is_dragging(&self) -> bool {
        self.discs.iter().any(|d| d.dragging)
    }

    /// Discs currently captured by a press, in draw order
    pub fn dragged(&self) -> Vec<DiscId> {
        self.discs
            .iter()
            .filter(|d| d.dragging)
            .map(|d| d.id)
            .collect()
    }

    /// Begin a drag at `point`. Returns the discs captured by this press.
    pub fn press_start(&mut self, point: Vec2) -> Vec<DiscId> {
        match self.policy {
            DragPolicy::Single => {
                // A release can be missed (button let go off the canvas), so a
                // new press drops any stale capture first
                if self.is_dragging() {
                    self.press_end();
                }
                // Topmost hit wins; blue is drawn over red
                let hit = self.discs.iter_mut().rev().find(|d| d.contains(point));
                match hit {
                    Some(disc) => {
                        disc.dragging = true;
                        vec![disc.id]
                    }
                    None => Vec::new(),
                }
            }
            DragPolicy::MultiCapture => {
                let mut captured = Vec::new();
                for disc in self.discs.iter_mut() {
                    if disc.contains(point) {
                        disc.dragging = true;
                        captured.push(disc.id);
                    }
                }
                captured
            }
        }
    }

    /// Move every dragged disc to `point` (clamped). Returns false when
    /// nothing is being dragged.
    pub fn press_move(&mut self, point: Vec2) -> bool {
        if !self.is_dragging() {
            return false;
        }
        let pos = self.clamp(point);
        for disc in self.discs.iter_mut().filter(|d| d.dragging) {
            disc.pos = pos;
        }
        true
    }

    /// Release: clears the drag flag on every disc
    pub fn press_end(&mut self) {
        for disc in self.discs.iter_mut() {
            disc.dragging = false;
        }
    }

    /// Restore default positions and drop any drag
    pub fn reset(&mut self) {
        self.discs[0] = Disc::new(DiscId::Red, self.red_start, self.discs[0].radius);
        self.discs[1] = Disc::new(DiscId::Blue, self.blue_start, self.discs[1].radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> FieldState {
        FieldState::new(&FieldConfig::default())
    }

    fn multi_field() -> FieldState {
        FieldState::new(&FieldConfig {
            drag_policy: DragPolicy::MultiCapture,
            ..FieldConfig::default()
        })
    }

    #[test]
    fn test_defaults() {
        let f = field();
        assert_eq!(f.red().pos, Vec2::new(100.0, 100.0));
        assert_eq!(f.blue().pos, Vec2::new(300.0, 300.0));
        assert_eq!(f.red().radius, 15.0);
        assert!(!f.is_dragging());
    }

    #[test]
    fn test_labels() {
        assert_eq!(DiscId::Red.label(), "红");
        assert_eq!(DiscId::Blue.label(), "蓝");
        assert_eq!(DiscId::Blue.label().chars().count(), 1);
    }

    #[test]
    fn test_press_at_center_starts_drag() {
        let mut f = field();
        assert_eq!(f.press_start(Vec2::new(100.0, 100.0)), vec![DiscId::Red]);
        assert!(f.red().dragging);
        assert!(!f.blue().dragging);
    }

    #[test]
    fn test_press_on_rim_misses() {
        let mut f = field();
        assert!(f.press_start(Vec2::new(115.0, 100.0)).is_empty());
        assert!(f.press_start(Vec2::new(114.9, 100.0)) == vec![DiscId::Red]);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut f = field();
        assert!(!f.press_move(Vec2::new(200.0, 200.0)));
        assert_eq!(f, field());
    }

    #[test]
    fn test_drag_clamps_to_field() {
        let mut f = field();
        f.press_start(Vec2::new(100.0, 100.0));
        assert!(f.press_move(Vec2::new(10.0, 500.0)));
        assert_eq!(f.red().pos, Vec2::new(65.0, 335.0));
        assert_eq!(f.blue().pos, Vec2::new(300.0, 300.0));
    }

    #[test]
    fn test_release_clears_every_disc() {
        let mut f = multi_field();
        f.discs[1].pos = Vec2::new(105.0, 100.0);
        f.press_start(Vec2::new(102.0, 100.0));
        assert_eq!(f.dragged(), vec![DiscId::Red, DiscId::Blue]);
        f.press_end();
        assert!(f.dragged().is_empty());
    }

    // Single capture is a deliberate change from capturing every overlapping
    // disc: only the disc drawn on top follows the pointer.
    #[test]
    fn test_single_policy_captures_topmost_only() {
        let mut f = field();
        f.discs[1].pos = Vec2::new(105.0, 100.0);
        assert_eq!(f.press_start(Vec2::new(102.0, 100.0)), vec![DiscId::Blue]);
        f.press_move(Vec2::new(200.0, 200.0));
        assert_eq!(f.red().pos, Vec2::new(100.0, 100.0));
        assert_eq!(f.blue().pos, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_single_policy_second_press_without_release() {
        let mut f = field();
        assert_eq!(f.press_start(Vec2::new(100.0, 100.0)), vec![DiscId::Red]);
        // Release happened off the canvas and was never seen
        assert_eq!(f.press_start(Vec2::new(300.0, 300.0)), vec![DiscId::Blue]);
        assert_eq!(f.dragged(), vec![DiscId::Blue]);
        f.press_move(Vec2::new(200.0, 200.0));
        assert_eq!(f.red().pos, Vec2::new(100.0, 100.0));
        assert_eq!(f.blue().pos, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_single_policy_missed_press_drops_stale_drag() {
        let mut f = field();
        f.press_start(Vec2::new(100.0, 100.0));
        assert!(f.press_start(Vec2::new(200.0, 200.0)).is_empty());
        assert!(!f.is_dragging());
    }

    #[test]
    fn test_multi_capture_moves_overlapping_discs_together() {
        let mut f = multi_field();
        f.discs[1].pos = Vec2::new(105.0, 100.0);
        f.press_start(Vec2::new(102.0, 100.0));
        f.press_move(Vec2::new(200.0, 250.0));
        assert_eq!(f.red().pos, Vec2::new(200.0, 250.0));
        assert_eq!(f.blue().pos, Vec2::new(200.0, 250.0));
    }

    #[test]
    fn test_reset_after_drag() {
        let mut f = field();
        f.press_start(Vec2::new(300.0, 300.0));
        f.press_move(Vec2::new(120.0, 80.0));
        f.reset();
        assert_eq!(f.red().pos, Vec2::new(100.0, 100.0));
        assert_eq!(f.blue().pos, Vec2::new(300.0, 300.0));
        assert!(!f.is_dragging());
    }

    #[test]
    fn test_place_clamps() {
        let mut f = field();
        f.place(DiscId::Blue, Vec2::new(400.0, 0.0));
        assert_eq!(f.blue().pos, Vec2::new(335.0, 65.0));
    }

    proptest! {
        #[test]
        fn prop_drag_stays_in_field(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0) {
            let mut f = field();
            f.press_start(Vec2::new(100.0, 100.0));
            f.press_move(Vec2::new(x, y));
            let p = f.red().pos;
            prop_assert!((65.0..=335.0).contains(&p.x));
            prop_assert!((65.0..=335.0).contains(&p.y));
        }

        #[test]
        fn prop_far_press_starts_no_drag(x in 0.0f32..400.0, y in 0.0f32..400.0) {
            let mut f = field();
            let point = Vec2::new(x, y);
            prop_assume!(f.discs.iter().all(|d| d.pos.distance(point) >= d.radius));
            prop_assert!(f.press_start(point).is_empty());
            prop_assert!(!f.is_dragging());
        }

        #[test]
        fn prop_press_off_moved_discs_starts_no_drag(
            rx in 65.0f32..335.0, ry in 65.0f32..335.0,
            bx in 65.0f32..335.0, by in 65.0f32..335.0,
            angle in 0.0f32..std::f32::consts::TAU,
            which in 0usize..2,
        ) {
            let mut f = field();
            f.place(DiscId::Red, Vec2::new(rx, ry));
            f.place(DiscId::Blue, Vec2::new(bx, by));
            // A point on the rim of one disc
            let point = f.discs[which].pos + crate::polar_to_cartesian(15.0, angle);
            prop_assume!(f.discs.iter().all(|d| d.pos.distance(point) >= d.radius));
            prop_assert!(f.press_start(point).is_empty());
        }

        #[test]
        fn prop_press_at_center_always_captures(x in 65.0f32..335.0, y in 65.0f32..335.0) {
            let mut f = field();
            f.place(DiscId::Red, Vec2::new(x, y));
            let captured = f.press_start(f.red().pos);
            prop_assert!(!captured.is_empty());
        }
    }
}
