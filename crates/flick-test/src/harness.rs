//! Test harness for Flick widgets.

use flick_core::{Mounted, Node, Point, PointerBus, PointerEvent, Rect, Widget, WidgetId};

/// Test harness for interacting with a mounted widget.
pub struct Harness<W: Widget + 'static> {
    /// Event source standing in for the host
    bus: PointerBus,
    /// Widget under test
    mounted: Mounted<W>,
}

impl<W: Widget + 'static> Harness<W> {
    /// Mount `widget` on a fresh bus.
    pub fn new(widget: W) -> Self {
        Self::on_bus(widget, &PointerBus::new())
    }

    /// Mount `widget` on an existing bus, e.g. one shared with other harnesses.
    pub fn on_bus(widget: W, bus: &PointerBus) -> Self {
        let mounted = Mounted::mount(widget, bus);
        Self {
            bus: bus.clone(),
            mounted,
        }
    }

    /// Mount `widget` laid out at `bounds`.
    pub fn laid_out(mut widget: W, bounds: Rect, bus: &PointerBus) -> Self {
        widget.layout(bounds);
        Self::on_bus(widget, bus)
    }

    /// The event source.
    pub fn bus(&self) -> &PointerBus {
        &self.bus
    }

    /// Identity of the widget under test.
    pub fn id(&self) -> WidgetId {
        self.mounted.id()
    }

    /// Read the widget.
    pub fn widget<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        self.mounted.with(f)
    }

    /// Check whether the widget still receives events.
    pub fn is_attached(&self) -> bool {
        self.mounted.is_attached()
    }

    // === Event Simulation ===

    /// Dispatch an arbitrary event.
    pub fn dispatch(&mut self, event: PointerEvent) -> &mut Self {
        self.bus.dispatch(&event);
        self
    }

    /// Mouse button pressed at `at`.
    pub fn mouse_down_at(&mut self, at: Point) -> &mut Self {
        self.dispatch(PointerEvent::mouse_down(at))
    }

    /// Mouse button released at `at`.
    pub fn mouse_up_at(&mut self, at: Point) -> &mut Self {
        self.dispatch(PointerEvent::mouse_up(at))
    }

    /// Touch started at `at`.
    pub fn touch_start_at(&mut self, at: Point) -> &mut Self {
        self.dispatch(PointerEvent::touch_start(at))
    }

    /// Touch ended at `at`.
    pub fn touch_end_at(&mut self, at: Point) -> &mut Self {
        self.dispatch(PointerEvent::touch_end(at))
    }

    /// Pointer left the widget under test.
    pub fn leave(&mut self) -> &mut Self {
        let id = self.id();
        self.dispatch(PointerEvent::leave(id))
    }

    /// Mouse down then up at `at`.
    pub fn click_at(&mut self, at: Point) -> &mut Self {
        self.mouse_down_at(at).mouse_up_at(at)
    }

    /// Touch start then end at `at`.
    pub fn tap_at(&mut self, at: Point) -> &mut Self {
        self.touch_start_at(at).touch_end_at(at)
    }

    /// Click the center of the widget's bounds.
    pub fn click(&mut self) -> &mut Self {
        let center = self.widget(|w| w.bounds().center());
        self.click_at(center)
    }

    // === Queries ===

    /// Render the widget's current state.
    pub fn node(&self) -> Node {
        self.mounted.render()
    }

    /// Inline CSS of the first node carrying `class`.
    pub fn css(&self, class: &str) -> Option<String> {
        self.node().find_by_class(class).map(|n| n.style.to_css())
    }

    /// Text of the first node carrying `class`.
    pub fn text(&self, class: &str) -> Option<String> {
        self.node().find_by_class(class).and_then(|n| n.text.clone())
    }

    /// Drain emitted messages of type `T`, dropping messages of other types.
    pub fn messages<T: Clone + 'static>(&self) -> Vec<T> {
        self.mounted
            .take_messages()
            .iter()
            .filter_map(|m| m.downcast_ref::<T>().cloned())
            .collect()
    }

    /// Detach the widget and hand it back.
    pub fn unmount(self) -> Option<W> {
        self.mounted.unmount()
    }

    // === Assertions ===

    /// Assert that the root node carries `class`.
    ///
    /// # Panics
    ///
    /// Panics if the class is missing.
    pub fn assert_class(&self, class: &str) -> &Self {
        let node = self.node();
        assert!(
            node.has_class(class),
            "Expected class '{class}' but root has '{}'",
            node.class_name
        );
        self
    }

    /// Assert that the root node does not carry `class`.
    ///
    /// # Panics
    ///
    /// Panics if the class is present.
    pub fn assert_not_class(&self, class: &str) -> &Self {
        let node = self.node();
        assert!(
            !node.has_class(class),
            "Expected no class '{class}' but root has '{}'",
            node.class_name
        );
        self
    }

    /// Assert the text of the first node carrying `class`.
    ///
    /// # Panics
    ///
    /// Panics if the node is missing or the text differs.
    pub fn assert_text(&self, class: &str, expected: &str) -> &Self {
        let actual = self.text(class);
        assert_eq!(
            actual.as_deref(),
            Some(expected),
            "Expected text '{expected}' for '.{class}'"
        );
        self
    }

    /// Assert that the inline CSS of the first node carrying `class`
    /// contains `declaration`.
    ///
    /// # Panics
    ///
    /// Panics if the node is missing or the declaration is absent.
    pub fn assert_css_contains(&self, class: &str, declaration: &str) -> &Self {
        let css = self
            .css(class)
            .unwrap_or_else(|| panic!("Expected a node with class '{class}'"));
        assert!(
            css.contains(declaration),
            "Expected '.{class}' style to contain '{declaration}' but got '{css}'"
        );
        self
    }
}

impl<W: Widget + std::fmt::Debug + 'static> std::fmt::Debug for Harness<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harness")
            .field("bus", &self.bus)
            .field("mounted", &self.mounted)
            .finish()
    }
}
