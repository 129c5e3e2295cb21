//! Draggable toggle switch widget.
//!
//! A switch is a track with a circular handle. Pressing on either arms a drag
//! gesture; releasing anywhere (or the pointer leaving the switch) commits it
//! by flipping the state and invoking the matching callback.

use crate::label::{Label, Labels};
use crate::theme::SwitchTheme;
use flick_core::{
    widget::LayoutResult, Canvas, Node, Point, PointerEvent, Rect, Size, Style, Widget, WidgetId,
};
use std::any::Any;
use std::fmt;
use tracing::{debug, trace};

/// Message emitted when a drag gesture commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchChanged {
    /// The new switch state
    pub on: bool,
}

/// Transition callback.
pub type Callback = Box<dyn FnMut()>;

/// Optional initial-state pair.
///
/// Only a true `on` starts the switch on. `off` is accepted but never
/// consulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchProps {
    /// Initial on flag
    pub on: Option<bool>,
    /// Initial off flag
    pub off: Option<bool>,
}

impl SwitchProps {
    /// Resolve the initial logical state.
    #[must_use]
    pub const fn initial_on(&self) -> bool {
        matches!(self.on, Some(true))
    }
}

/// Toggle switch widget.
pub struct Switch {
    id: WidgetId,
    /// Logical state
    on: bool,
    /// True between a qualifying down and its release
    dragging: bool,
    theme: SwitchTheme,
    labels: Option<Labels>,
    on_switch_on: Option<Callback>,
    on_switch_off: Option<Callback>,
    test_id_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
}

impl Default for Switch {
    fn default() -> Self {
        let theme = SwitchTheme::default();
        let (width, height) = theme.outer_size();
        Self {
            id: WidgetId::next(),
            on: false,
            dragging: false,
            theme,
            labels: None,
            on_switch_on: None,
            on_switch_off: None,
            test_id_value: None,
            bounds: Rect::new(0.0, 0.0, width, height),
        }
    }
}

impl Switch {
    /// Create a switch in the off state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a switch with initial state.
    #[must_use]
    pub fn with_state(on: bool) -> Self {
        Self::default().on(on)
    }

    /// Create a switch from an optional on/off pair.
    #[must_use]
    pub fn from_props(props: SwitchProps) -> Self {
        Self::with_state(props.initial_on())
    }

    /// Set the initial state.
    #[must_use]
    pub const fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    /// Accept the `off` flag. The initial state is decided by `on` alone.
    #[must_use]
    pub const fn off(self, _off: bool) -> Self {
        self
    }

    /// Set the theme. Keeps the current origin and resizes the bounds.
    #[must_use]
    pub fn theme(mut self, theme: SwitchTheme) -> Self {
        self.theme = theme;
        let (width, height) = theme.outer_size();
        self.bounds = Rect::at(self.bounds.origin(), Size::new(width, height));
        self
    }

    /// Show a text label inside the track.
    #[must_use]
    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Called after a drag commits to on.
    #[must_use]
    pub fn switch_on(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_switch_on = Some(Box::new(callback));
        self
    }

    /// Called after a drag commits to off.
    #[must_use]
    pub fn switch_off(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_switch_off = Some(Box::new(callback));
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get current state.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Check whether a drag gesture is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Get the theme.
    #[must_use]
    pub const fn get_theme(&self) -> &SwitchTheme {
        &self.theme
    }

    /// Get the labels.
    #[must_use]
    pub const fn get_labels(&self) -> Option<&Labels> {
        self.labels.as_ref()
    }

    /// Set the state without firing callbacks.
    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    /// Class names: `switch`, `dragging` while dragging, and `on`/`off`.
    #[must_use]
    pub fn class_name(&self) -> String {
        let mut classes = vec!["switch"];
        if self.dragging {
            classes.push("dragging");
        }
        classes.push(if self.on { "on" } else { "off" });
        classes.join(" ")
    }

    /// Track style for the current state.
    #[must_use]
    pub fn track_style(&self) -> Style {
        self.theme.track_style()
    }

    /// Circle style for the current state.
    #[must_use]
    pub fn circle_style(&self) -> Style {
        self.theme.circle_style(self.on, self.dragging)
    }

    /// Outer track region.
    #[must_use]
    pub fn track_rect(&self) -> Rect {
        let (width, height) = self.theme.outer_size();
        Rect::at(self.bounds.origin(), Size::new(width, height))
    }

    /// Track content region (inside border and padding).
    fn content_rect(&self) -> Rect {
        let inset = self.theme.track.border.width + self.theme.track.padding;
        Rect::new(
            self.bounds.x + inset,
            self.bounds.y + inset,
            self.theme.track.width,
            self.theme.circle.height,
        )
    }

    /// Circle handle region for the current state.
    #[must_use]
    pub fn circle_rect(&self) -> Rect {
        let content = self.content_rect();
        Rect::new(
            content.x + self.theme.translation(self.on, self.dragging),
            content.y,
            self.theme.circle_width(self.dragging),
            self.theme.circle.height,
        )
    }

    /// Check whether a press at `point` belongs to this switch.
    fn hit_test(&self, point: &Point) -> bool {
        self.track_rect().contains_point(point) || self.circle_rect().contains_point(point)
    }

    fn press(&mut self, position: Point) -> Option<Box<dyn Any + Send>> {
        if self.hit_test(&position) {
            if !self.dragging {
                debug!(widget = self.id.0, x = position.x, y = position.y, "drag started");
            }
            self.dragging = true;
        } else {
            trace!(widget = self.id.0, x = position.x, y = position.y, "press outside switch");
        }
        None
    }

    /// Commit an armed drag: flip, clear dragging, fire the callback for the
    /// new state. A release without an armed drag changes nothing.
    fn release(&mut self) -> Option<Box<dyn Any + Send>> {
        if !self.dragging {
            trace!(widget = self.id.0, "release without drag ignored");
            return None;
        }

        self.dragging = false;
        self.on = !self.on;
        debug!(widget = self.id.0, on = self.on, "switch toggled");

        let callback = if self.on {
            self.on_switch_on.as_mut()
        } else {
            self.on_switch_off.as_mut()
        };
        if let Some(callback) = callback {
            callback();
        }

        Some(Box::new(SwitchChanged { on: self.on }))
    }

    fn label(&self) -> Option<Label> {
        self.labels.as_ref().map(|labels| {
            let mut label = Label::new(labels.clone()).active(self.on);
            label.layout(self.content_rect());
            label
        })
    }
}

impl Widget for Switch {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn measure(&self) -> Size {
        self.track_rect().size()
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = Rect::at(bounds.origin(), self.measure());
        LayoutResult {
            size: self.bounds.size(),
        }
    }

    fn render(&self) -> Node {
        let circle = Node::new("span")
            .class_name("circle")
            .style(self.circle_style());

        let mut track = Node::new("div")
            .class_name(self.class_name())
            .style(self.track_style())
            .widget_id(self.id)
            .test_id(self.test_id_value.clone())
            .child(circle);

        if let Some(label) = self.label() {
            track = track.child(label.render());
        }
        track
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let track = self.track_rect();
        let radius = self.theme.track_radius();
        canvas.fill_rounded_rect(track, radius, self.theme.track.background);
        if self.theme.track.border.width > 0.0 {
            canvas.stroke_rounded_rect(
                track,
                radius,
                self.theme.track.border.color,
                self.theme.track.border.width,
            );
        }

        if let Some(label) = self.label() {
            label.paint(canvas);
        }

        canvas.fill_rounded_rect(
            self.circle_rect(),
            self.theme.circle.border_radius,
            self.theme.circle_color(self.on),
        );
    }

    fn event(&mut self, event: &PointerEvent) -> Option<Box<dyn Any + Send>> {
        match *event {
            PointerEvent::Down { position, .. } => self.press(position),
            PointerEvent::Up { .. } => self.release(),
            PointerEvent::Leave { target } if target == self.id => self.release(),
            PointerEvent::Leave { .. } => None,
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl fmt::Debug for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Switch")
            .field("id", &self.id)
            .field("on", &self.on)
            .field("dragging", &self.dragging)
            .field("theme", &self.theme)
            .field("labels", &self.labels)
            .field("has_switch_on", &self.on_switch_on.is_some())
            .field("has_switch_off", &self.on_switch_off.is_some())
            .field("test_id", &self.test_id_value)
            .field("bounds", &self.bounds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flick_core::Transform;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn circle_center(switch: &Switch) -> Point {
        switch.circle_rect().center()
    }

    fn track_point(switch: &Switch) -> Point {
        let r = switch.track_rect();
        // right end of the track, away from an off circle
        Point::new(r.x + r.width - 5.0, r.y + r.height / 2.0)
    }

    fn translation(switch: &Switch) -> Option<Transform> {
        switch.circle_style().transform
    }

    fn down_up(switch: &mut Switch, at: Point) -> Option<Box<dyn Any + Send>> {
        switch.event(&PointerEvent::mouse_down(at));
        switch.event(&PointerEvent::mouse_up(at))
    }

    // ===== SwitchChanged Tests =====

    #[test]
    fn test_switch_changed_message() {
        assert!(SwitchChanged { on: true }.on);
        assert!(!SwitchChanged { on: false }.on);
    }

    // ===== Construction Tests =====

    #[test]
    fn test_switch_default_off() {
        let switch = Switch::new();
        assert!(!switch.is_on());
        assert!(!switch.is_dragging());
        assert!(switch.class_name().contains("off"));
        assert_eq!(translation(&switch), Some(Transform::TranslateX(0.0)));
    }

    #[test]
    fn test_switch_initial_on() {
        let switch = Switch::with_state(true);
        assert!(switch.is_on());
        assert_eq!(switch.class_name(), "switch on");
        assert_eq!(translation(&switch), Some(Transform::TranslateX(65.0)));
    }

    #[test]
    fn test_switch_off_builder() {
        assert!(!Switch::new().off(true).is_on());
        assert!(!Switch::new().off(false).is_on());
        assert!(Switch::with_state(true).off(true).is_on());
    }

    #[test]
    fn test_switch_props_resolution() {
        let cases = [
            (None, None, false),
            (Some(true), None, true),
            (Some(false), None, false),
            (None, Some(true), false),
            (None, Some(false), false),
            (Some(true), Some(false), true),
            (Some(true), Some(true), true),
            (Some(false), Some(false), false),
        ];
        for (on, off, expected) in cases {
            let props = SwitchProps { on, off };
            assert_eq!(props.initial_on(), expected, "on={on:?} off={off:?}");
            assert_eq!(Switch::from_props(props).is_on(), expected);
        }
    }

    #[test]
    fn test_switch_builder() {
        let switch = Switch::new()
            .on(true)
            .labels(Labels::new("ON", "OFF"))
            .test_id("wifi");
        assert!(switch.is_on());
        assert_eq!(switch.get_labels(), Some(&Labels::new("ON", "OFF")));
        assert_eq!(Widget::test_id(&switch), Some("wifi"));
        assert_eq!(switch.get_theme(), &SwitchTheme::default());
    }

    // ===== Drag Gesture Tests =====

    #[test]
    fn test_press_on_circle_starts_drag() {
        let mut switch = Switch::new();
        let at = circle_center(&switch);
        assert!(switch.event(&PointerEvent::mouse_down(at)).is_none());
        assert!(switch.is_dragging());
        assert_eq!(switch.class_name(), "switch dragging off");
        assert_eq!(switch.circle_style().width, Some(52.5));
    }

    #[test]
    fn test_press_on_track_starts_drag() {
        let mut switch = Switch::new();
        let at = track_point(&switch);
        assert!(!switch.circle_rect().contains_point(&at));
        switch.event(&PointerEvent::mouse_down(at));
        assert!(switch.is_dragging());
    }

    #[test]
    fn test_press_elsewhere_ignored() {
        let mut switch = Switch::new();
        switch.event(&PointerEvent::mouse_down(Point::new(500.0, 500.0)));
        assert!(!switch.is_dragging());
        assert!(switch
            .event(&PointerEvent::mouse_up(Point::new(500.0, 500.0)))
            .is_none());
        assert!(!switch.is_on());
    }

    #[test]
    fn test_click_circle_turns_on() {
        let mut switch = Switch::new();
        let at = circle_center(&switch);
        let msg = down_up(&mut switch, at).expect("toggle message");
        assert_eq!(
            msg.downcast_ref::<SwitchChanged>(),
            Some(&SwitchChanged { on: true })
        );
        assert!(switch.is_on());
        assert!(!switch.is_dragging());
        assert_eq!(translation(&switch), Some(Transform::TranslateX(65.0)));
    }

    #[test]
    fn test_release_anywhere_commits() {
        let mut switch = Switch::new();
        switch.event(&PointerEvent::mouse_down(circle_center(&switch)));
        switch.event(&PointerEvent::mouse_up(Point::new(-300.0, 900.0)));
        assert!(switch.is_on());
    }

    #[test]
    fn test_touch_toggles() {
        let mut switch = Switch::new();
        let at = circle_center(&switch);
        switch.event(&PointerEvent::touch_start(at));
        switch.event(&PointerEvent::touch_end(at));
        assert!(switch.is_on());
    }

    #[test]
    fn test_release_without_drag_is_noop() {
        let calls = Rc::new(RefCell::new(0));
        let c1 = Rc::clone(&calls);
        let c2 = Rc::clone(&calls);
        let mut switch = Switch::new()
            .switch_on(move || *c1.borrow_mut() += 1)
            .switch_off(move || *c2.borrow_mut() += 1);

        let at = circle_center(&switch);
        assert!(switch.event(&PointerEvent::mouse_up(at)).is_none());
        assert!(!switch.is_on());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_dragging_on_anticipates_release() {
        let mut switch = Switch::with_state(true);
        switch.event(&PointerEvent::mouse_down(circle_center(&switch)));
        assert_eq!(translation(&switch), Some(Transform::TranslateX(43.5)));
    }

    #[test]
    fn test_repeated_press_keeps_single_drag() {
        let mut switch = Switch::new();
        let at = circle_center(&switch);
        switch.event(&PointerEvent::mouse_down(at));
        switch.event(&PointerEvent::mouse_down(at));
        switch.event(&PointerEvent::mouse_up(at));
        assert!(switch.is_on());
        assert!(switch.event(&PointerEvent::mouse_up(at)).is_none());
        assert!(switch.is_on());
    }

    // ===== Leave Tests =====

    #[test]
    fn test_leave_commits_drag() {
        let mut switch = Switch::new();
        switch.event(&PointerEvent::mouse_down(circle_center(&switch)));
        let msg = switch.event(&PointerEvent::leave(switch.id()));
        assert!(msg.is_some());
        assert!(switch.is_on());
        assert!(!switch.is_dragging());
    }

    #[test]
    fn test_leave_other_widget_ignored() {
        let mut switch = Switch::new();
        switch.event(&PointerEvent::mouse_down(circle_center(&switch)));
        switch.event(&PointerEvent::leave(WidgetId::next()));
        assert!(switch.is_dragging());
        assert!(!switch.is_on());
    }

    #[test]
    fn test_leave_without_drag_is_noop() {
        let mut switch = Switch::new();
        assert!(switch.event(&PointerEvent::leave(switch.id())).is_none());
        assert!(!switch.is_on());
    }

    // ===== Callback Tests =====

    #[test]
    fn test_callbacks_fire_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let on_log = Rc::clone(&log);
        let off_log = Rc::clone(&log);
        let mut switch = Switch::new()
            .switch_on(move || on_log.borrow_mut().push("on"))
            .switch_off(move || off_log.borrow_mut().push("off"));

        let at = circle_center(&switch);
        down_up(&mut switch, at);
        let at = circle_center(&switch);
        down_up(&mut switch, at);

        assert_eq!(*log.borrow(), vec!["on", "off"]);
        assert!(!switch.is_on());
        assert_eq!(translation(&switch), Some(Transform::TranslateX(0.0)));
    }

    #[test]
    fn test_missing_callbacks_are_tolerated() {
        let mut switch = Switch::new();
        let at = circle_center(&switch);
        assert!(down_up(&mut switch, at).is_some());
        assert!(switch.is_on());
    }

    // ===== Geometry Tests =====

    #[test]
    fn test_switch_measure() {
        assert_eq!(Switch::new().measure(), Size::new(110.0, 45.0));
    }

    #[test]
    fn test_switch_layout_moves_hit_area() {
        let mut switch = Switch::new();
        let result = switch.layout(Rect::new(200.0, 100.0, 500.0, 500.0));
        assert_eq!(result.size, Size::new(110.0, 45.0));
        assert_eq!(switch.bounds(), Rect::new(200.0, 100.0, 110.0, 45.0));

        switch.event(&PointerEvent::mouse_down(Point::new(10.0, 10.0)));
        assert!(!switch.is_dragging());
        switch.event(&PointerEvent::mouse_down(Point::new(210.0, 110.0)));
        assert!(switch.is_dragging());
    }

    #[test]
    fn test_circle_rect_follows_state() {
        let mut switch = Switch::new();
        assert_eq!(switch.circle_rect(), Rect::new(5.0, 5.0, 35.0, 35.0));
        switch.set_on(true);
        assert_eq!(switch.circle_rect(), Rect::new(70.0, 5.0, 35.0, 35.0));
    }

    #[test]
    fn test_theme_resizes_bounds() {
        let mut theme = SwitchTheme::default();
        theme.track.width = 200.0;
        let switch = Switch::new().theme(theme);
        assert_eq!(switch.measure(), Size::new(210.0, 45.0));
        assert_eq!(
            Switch::with_state(true).theme(theme).circle_style().transform,
            Some(Transform::TranslateX(165.0))
        );
    }

    // ===== Render Tests =====

    #[test]
    fn test_render_tree() {
        let switch = Switch::new().test_id("sw");
        let node = switch.render();
        assert_eq!(node.tag, "div");
        assert!(node.has_class("switch"));
        assert!(node.has_class("off"));
        assert_eq!(node.widget_id, Some(switch.id()));
        assert_eq!(node.test_id.as_deref(), Some("sw"));
        assert_eq!(node.style.border_radius, Some(50.0));

        let circle = node.find_by_class("circle").expect("circle node");
        assert_eq!(
            circle.style.to_css(),
            "display: block; width: 35px; height: 35px; border-radius: 35px; \
             background-color: #cfcfcf; transform: translateX(0px); \
             transition: transform 200ms, width 200ms, background-color 200ms"
        );
        assert!(node.find_by_class("label").is_none());
    }

    #[test]
    fn test_render_with_label_follows_state() {
        let mut switch = Switch::new().labels(Labels::new("ON", "OFF"));
        let label = switch.render();
        let label = label.find_by_class("label").expect("label node");
        assert_eq!(label.text.as_deref(), Some("OFF"));

        let at = circle_center(&switch);
        down_up(&mut switch, at);
        let node = switch.render();
        assert_eq!(
            node.find_by_class("label").and_then(|n| n.text.as_deref()),
            Some("ON")
        );
    }

    #[test]
    fn test_switch_is_interactive() {
        assert!(Switch::new().is_interactive());
    }

    #[test]
    fn test_debug_omits_callbacks() {
        let debug = format!("{:?}", Switch::new().switch_on(|| {}));
        assert!(debug.contains("has_switch_on: true"));
        assert!(debug.contains("has_switch_off: false"));
    }

    // ===== Property Tests =====

    #[derive(Debug, Clone, Copy)]
    enum Op {
        DownInside,
        DownOutside,
        Up,
        LeaveSelf,
        LeaveOther,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::DownInside),
            Just(Op::DownOutside),
            Just(Op::Up),
            Just(Op::LeaveSelf),
            Just(Op::LeaveOther),
        ]
    }

    proptest! {
        #[test]
        fn prop_state_machine_matches_model(initial: bool, ops in prop::collection::vec(op(), 0..40)) {
            let toggles = Rc::new(RefCell::new(Vec::new()));
            let on_log = Rc::clone(&toggles);
            let off_log = Rc::clone(&toggles);
            let mut switch = Switch::with_state(initial)
                .switch_on(move || on_log.borrow_mut().push(true))
                .switch_off(move || off_log.borrow_mut().push(false));
            let other = WidgetId::next();

            let mut model_on = initial;
            let mut model_dragging = false;
            let mut expected = Vec::new();

            for op in ops {
                let event = match op {
                    Op::DownInside => PointerEvent::mouse_down(circle_center(&switch)),
                    Op::DownOutside => PointerEvent::mouse_down(Point::new(-50.0, -50.0)),
                    Op::Up => PointerEvent::mouse_up(Point::new(-50.0, -50.0)),
                    Op::LeaveSelf => PointerEvent::leave(switch.id()),
                    Op::LeaveOther => PointerEvent::leave(other),
                };
                let msg = switch.event(&event);

                let mut committed = false;
                match op {
                    Op::DownInside => model_dragging = true,
                    Op::Up | Op::LeaveSelf if model_dragging => {
                        model_dragging = false;
                        model_on = !model_on;
                        expected.push(model_on);
                        committed = true;
                    }
                    _ => {}
                }

                prop_assert_eq!(msg.is_some(), committed);
                prop_assert_eq!(switch.is_on(), model_on);
                prop_assert_eq!(switch.is_dragging(), model_dragging);
            }

            prop_assert_eq!(&*toggles.borrow(), &expected);
        }
    }
}
