//! Window registry for lifecycle, focus, and stacking order

use crate::math::{FrameStyle, Vec2};
use super::{WindowDescriptor, WindowId, WindowRecord, WindowRegion};

/// Where the first window lands when nothing is open
pub const DEFAULT_CASCADE_ORIGIN: Vec2 = Vec2::new(100.0, 100.0);

/// Offset applied per already-open window, on both axes
pub const DEFAULT_CASCADE_STEP: f32 = 30.0;

/// What `open` did with a descriptor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new record was appended
    Created,
    /// The id was already open and was brought to the front
    Refocused,
}

/// Ordered collection of open windows plus the front-most counter
///
/// Records keep insertion order; stacking is carried by `stack_order`,
/// which is drawn from a counter that only ever increases.
#[derive(Clone, Debug)]
pub struct WindowRegistry {
    /// Open windows, in the order they were first opened
    records: Vec<WindowRecord>,
    /// Next stacking value to hand out
    next_order: u64,
    cascade_origin: Vec2,
    cascade_step: f32,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowRegistry {
    /// Create an empty registry with the default cascade
    pub fn new() -> Self {
        Self::with_cascade(DEFAULT_CASCADE_ORIGIN, DEFAULT_CASCADE_STEP)
    }

    /// Create an empty registry with a custom cascade
    pub fn with_cascade(cascade_origin: Vec2, cascade_step: f32) -> Self {
        Self {
            records: Vec::new(),
            next_order: 1,
            cascade_origin,
            cascade_step,
        }
    }

    fn take_order(&mut self) -> u64 {
        let order = self.next_order;
        self.next_order += 1;
        order
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Open a window, or bring it to the front if its id is already open
    pub fn open(&mut self, descriptor: WindowDescriptor) -> OpenOutcome {
        if let Some(index) = self.index_of(&descriptor.id) {
            let order = self.take_order();
            self.records[index].stack_order = order;
            log::debug!("refocused window {} (order {})", descriptor.id, order);
            return OpenOutcome::Refocused;
        }

        let position =
            self.cascade_origin + Vec2::splat(self.cascade_step) * self.records.len() as f32;
        let stack_order = self.take_order();

        log::debug!(
            "opened window {} ({}) at ({}, {}) order {}",
            descriptor.id,
            descriptor.kind,
            position.x,
            position.y,
            stack_order
        );

        self.records.push(WindowRecord {
            id: descriptor.id,
            title: descriptor.title,
            kind: descriptor.kind,
            icon: descriptor.icon,
            position,
            stack_order,
        });

        OpenOutcome::Created
    }

    /// Close a window. Returns whether anything was removed.
    pub fn close(&mut self, id: &str) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.records.remove(index);
                log::debug!("closed window {}", id);
                true
            }
            None => false,
        }
    }

    /// Move a window to a new position
    pub fn move_window(&mut self, id: &str, position: Vec2) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            record.position = position;
            log::trace!("moved window {} to ({}, {})", id, position.x, position.y);
        }
    }

    /// Bring a window to the front
    pub fn focus(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let order = self.take_order();
        self.records[index].stack_order = order;
        log::debug!("focused window {} (order {})", id, order);
    }

    /// Get a window by id
    pub fn get(&self, id: &str) -> Option<&WindowRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Check whether an id is open
    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Number of open windows
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// True when nothing is open
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Open windows in insertion order
    pub fn records(&self) -> &[WindowRecord] {
        &self.records
    }

    /// Open windows back to front
    pub fn by_stack_order(&self) -> Vec<&WindowRecord> {
        let mut records: Vec<&WindowRecord> = self.records.iter().collect();
        records.sort_by_key(|r| r.stack_order);
        records
    }

    /// The front-most window, if any
    pub fn focused(&self) -> Option<&WindowRecord> {
        self.records.iter().max_by_key(|r| r.stack_order)
    }

    /// Owned copy of the open windows for rendering
    pub fn snapshot(&self) -> Vec<WindowRecord> {
        self.records.clone()
    }

    /// Find the top-most window under a point and which part of it was hit
    pub fn region_at(&self, pos: Vec2, style: &FrameStyle) -> Option<(WindowId, WindowRegion)> {
        let record = self
            .by_stack_order()
            .into_iter()
            .rev()
            .find(|r| r.rect(style).contains(pos))?;

        let region = if record.close_button_rect(style).contains(pos) {
            WindowRegion::CloseButton
        } else if record.title_bar_rect(style).contains(pos) {
            WindowRegion::TitleBar
        } else {
            WindowRegion::Content
        };

        Some((record.id.clone(), region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::FRAME_STYLE;
    use crate::window::WindowKind;

    fn open(registry: &mut WindowRegistry, kind: WindowKind) -> OpenOutcome {
        registry.open(WindowDescriptor::for_kind(kind))
    }

    fn order_of(registry: &WindowRegistry, id: &str) -> u64 {
        registry.get(id).map(|r| r.stack_order).unwrap_or(0)
    }

    #[test]
    fn test_open_appends_with_increasing_order() {
        let mut reg = WindowRegistry::new();
        assert_eq!(open(&mut reg, WindowKind::About), OpenOutcome::Created);
        assert_eq!(open(&mut reg, WindowKind::Skills), OpenOutcome::Created);

        let ids: Vec<&str> = reg.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["about", "skills"]);
        assert_eq!(order_of(&reg, "about"), 1);
        assert_eq!(order_of(&reg, "skills"), 2);
    }

    #[test]
    fn test_open_cascades_from_count() {
        let mut reg = WindowRegistry::new();
        open(&mut reg, WindowKind::About);
        open(&mut reg, WindowKind::Skills);
        open(&mut reg, WindowKind::Experience);

        let third = reg.get("experience").unwrap();
        assert!((third.position.x - 160.0).abs() < 0.001);
        assert!((third.position.y - 160.0).abs() < 0.001);
    }

    #[test]
    fn test_cascade_uses_current_count_after_close() {
        let mut reg = WindowRegistry::with_cascade(Vec2::new(10.0, 40.0), 20.0);
        open(&mut reg, WindowKind::About);
        open(&mut reg, WindowKind::Skills);
        reg.close("about");
        open(&mut reg, WindowKind::Contact);

        let contact = reg.get("contact").unwrap();
        assert!((contact.position.x - 30.0).abs() < 0.001);
        assert!((contact.position.y - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_reopen_refocuses_without_moving() {
        let mut reg = WindowRegistry::new();
        open(&mut reg, WindowKind::About);
        open(&mut reg, WindowKind::Skills);
        reg.move_window("about", Vec2::new(300.0, 250.0));

        assert_eq!(open(&mut reg, WindowKind::About), OpenOutcome::Refocused);
        assert_eq!(reg.count(), 2);

        let about = reg.get("about").unwrap();
        assert_eq!(about.stack_order, 3);
        assert_eq!(about.position, Vec2::new(300.0, 250.0));
        assert_eq!(reg.focused().map(|r| r.id.as_str()), Some("about"));
    }

    #[test]
    fn test_reopen_keeps_original_title() {
        let mut reg = WindowRegistry::new();
        reg.open(WindowDescriptor::new("contact", "Contact", WindowKind::Contact, "📧"));
        reg.open(WindowDescriptor::new("contact", "Mail", WindowKind::Contact, "✉️"));

        let contact = reg.get("contact").unwrap();
        assert_eq!(contact.title, "Contact");
        assert_eq!(contact.icon, "📧");
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut reg = WindowRegistry::new();
        open(&mut reg, WindowKind::Resume);

        assert!(reg.close("resume"));
        assert!(!reg.close("resume"));
        assert!(reg.is_empty());
    }

    #[test]
    fn test_focus_missing_does_not_consume_order() {
        let mut reg = WindowRegistry::new();
        open(&mut reg, WindowKind::About);
        reg.focus("nope");
        open(&mut reg, WindowKind::Skills);

        assert_eq!(order_of(&reg, "skills"), 2);
    }

    #[test]
    fn test_focus_front_most_still_advances() {
        let mut reg = WindowRegistry::new();
        open(&mut reg, WindowKind::About);
        reg.focus("about");
        assert_eq!(order_of(&reg, "about"), 2);
    }

    #[test]
    fn test_move_missing_is_noop() {
        let mut reg = WindowRegistry::new();
        open(&mut reg, WindowKind::About);
        let before = reg.snapshot();

        reg.move_window("skills", Vec2::new(1.0, 1.0));
        assert_eq!(reg.snapshot(), before);
    }

    #[test]
    fn test_by_stack_order_back_to_front() {
        let mut reg = WindowRegistry::new();
        open(&mut reg, WindowKind::About);
        open(&mut reg, WindowKind::Skills);
        open(&mut reg, WindowKind::Contact);
        reg.focus("about");

        let ids: Vec<&str> = reg.by_stack_order().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["skills", "contact", "about"]);
    }

    #[test]
    fn test_focused_empty() {
        let reg = WindowRegistry::new();
        assert!(reg.focused().is_none());
    }

    #[test]
    fn test_hit_testing() {
        let mut reg = WindowRegistry::new();
        open(&mut reg, WindowKind::About);

        // Title bar (window at 100,100)
        let (id, region) = reg.region_at(Vec2::new(300.0, 116.0), &FRAME_STYLE).unwrap();
        assert_eq!(id, "about");
        assert_eq!(region, WindowRegion::TitleBar);

        // Close control
        let (_, region) = reg.region_at(Vec2::new(121.0, 115.0), &FRAME_STYLE).unwrap();
        assert_eq!(region, WindowRegion::CloseButton);

        // Content
        let (_, region) = reg.region_at(Vec2::new(300.0, 300.0), &FRAME_STYLE).unwrap();
        assert_eq!(region, WindowRegion::Content);

        // Outside
        assert!(reg.region_at(Vec2::new(50.0, 50.0), &FRAME_STYLE).is_none());
    }

    #[test]
    fn test_hit_testing_prefers_top_most() {
        let mut reg = WindowRegistry::new();
        open(&mut reg, WindowKind::About);
        open(&mut reg, WindowKind::Skills);

        // (200, 200) is inside both panels; skills is on top
        let (id, _) = reg.region_at(Vec2::new(200.0, 200.0), &FRAME_STYLE).unwrap();
        assert_eq!(id, "skills");

        reg.focus("about");
        let (id, _) = reg.region_at(Vec2::new(200.0, 200.0), &FRAME_STYLE).unwrap();
        assert_eq!(id, "about");
    }
}
