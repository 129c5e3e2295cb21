//! Mounting widgets onto a pointer source.

use crate::event::PointerEvent;
use crate::node::Node;
use crate::source::{PointerSource, Subscription};
use crate::widget::{Widget, WidgetId};
use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, warn};

type Outbox = Rc<RefCell<Vec<Box<dyn Any + Send>>>>;

/// A widget attached to a pointer source.
///
/// The widget receives every event the source dispatches for as long as the
/// handle is alive. Dropping the handle, or calling [`Mounted::unmount`],
/// releases the subscription; the widget then never sees another event.
pub struct Mounted<W: Widget + 'static> {
    id: WidgetId,
    widget: Rc<RefCell<W>>,
    outbox: Outbox,
    subscription: Subscription,
}

impl<W: Widget + 'static> Mounted<W> {
    /// Subscribe `widget` to `source`.
    pub fn mount(widget: W, source: &dyn PointerSource) -> Self {
        let id = widget.id();
        let widget = Rc::new(RefCell::new(widget));
        let outbox: Outbox = Rc::new(RefCell::new(Vec::new()));

        let weak = Rc::downgrade(&widget);
        let messages = Rc::clone(&outbox);
        let subscription = source.subscribe(Box::new(move |event: &PointerEvent| {
            let Some(cell) = weak.upgrade() else {
                return;
            };
            let Ok(mut target) = cell.try_borrow_mut() else {
                warn!(widget = id.0, ?event, "widget busy, pointer event dropped");
                return;
            };
            if let Some(message) = target.event(event) {
                messages.borrow_mut().push(message);
            }
        }));

        debug!(widget = id.0, listener = subscription.id().0, "widget mounted");
        Self {
            id,
            widget,
            outbox,
            subscription,
        }
    }

    /// Identity of the mounted widget.
    pub const fn id(&self) -> WidgetId {
        self.id
    }

    /// Check whether the widget is still subscribed.
    pub fn is_attached(&self) -> bool {
        self.subscription.is_active()
    }

    /// Read the widget.
    ///
    /// # Panics
    ///
    /// Panics if called from inside the widget's own event handling.
    pub fn with<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        f(&self.widget.borrow())
    }

    /// Mutate the widget (e.g. to lay it out).
    ///
    /// # Panics
    ///
    /// Panics if called from inside the widget's own event handling.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.widget.borrow_mut())
    }

    /// Render the widget's current state.
    pub fn render(&self) -> Node {
        self.with(|widget| widget.render())
    }

    /// Take the messages emitted since the last call.
    pub fn take_messages(&self) -> Vec<Box<dyn Any + Send>> {
        std::mem::take(&mut *self.outbox.borrow_mut())
    }

    /// Release the subscription and hand the widget back.
    ///
    /// Returns `None` when the widget is still borrowed elsewhere, which only
    /// happens when unmounting from inside its own event handling.
    pub fn unmount(self) -> Option<W> {
        let Self {
            id,
            widget,
            subscription,
            ..
        } = self;
        drop(subscription);
        debug!(widget = id.0, "widget unmounted");
        Rc::try_unwrap(widget).ok().map(RefCell::into_inner)
    }
}

impl<W: Widget + fmt::Debug + 'static> fmt::Debug for Mounted<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mounted")
            .field("id", &self.id)
            .field("widget", &self.widget)
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}
