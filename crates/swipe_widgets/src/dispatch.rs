//! Action notifications
//!
//! A committed swipe fires a single `action` event carrying the configured
//! action's name. Listeners register on the widget; the event never travels
//! further and nothing is returned to the widget.

use swipe_core::events::{event_types, Event, EventDispatcher, ListenerId};

use crate::config::SwipeConfig;
use crate::gesture::Direction;
use crate::widget::WidgetId;

/// Emits `action` events for one widget
#[derive(Debug)]
pub struct ActionDispatcher {
    widget: WidgetId,
    listeners: EventDispatcher,
}

impl ActionDispatcher {
    pub fn new(widget: WidgetId) -> Self {
        Self {
            widget,
            listeners: EventDispatcher::new(),
        }
    }

    /// Register a listener receiving the `action` event
    pub fn on_action<F>(&mut self, handler: F) -> ListenerId
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.listeners
            .register(self.widget.raw(), event_types::ACTION, handler)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unregister(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.listener_count()
    }

    /// Fire the action configured for `direction`
    ///
    /// Returns the dispatched name, or `None` when the side has no action
    /// (or an empty name) and nothing was sent.
    pub fn dispatch(&self, direction: Direction, config: &SwipeConfig) -> Option<String> {
        let name = config
            .action(direction)
            .map(|action| action.name.as_str())
            .filter(|name| !name.is_empty());

        let Some(name) = name else {
            tracing::debug!(
                direction = direction.as_str(),
                "no action configured, dispatch skipped"
            );
            return None;
        };

        let mut event = Event::action(self.widget.raw(), name);
        let delivered = self.listeners.dispatch(&mut event);
        tracing::debug!(
            widget = self.widget.raw(),
            action = name,
            delivered,
            "swipe action dispatched"
        );
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActionSpec;
    use std::sync::{Arc, Mutex};

    fn recorder(dispatcher: &mut ActionDispatcher) -> Arc<Mutex<Vec<String>>> {
        let names = Arc::new(Mutex::new(Vec::new()));
        let sink = names.clone();
        dispatcher.on_action(move |event| {
            if let Some(name) = event.action_name() {
                sink.lock().unwrap().push(name.to_string());
            }
        });
        names
    }

    #[test]
    fn test_dispatch_resolves_side() {
        let mut dispatcher = ActionDispatcher::new(WidgetId::new(1));
        let names = recorder(&mut dispatcher);
        let config = SwipeConfig::new()
            .left_action(ActionSpec::new("delete", "Delete"))
            .right_action(ActionSpec::new("archive", "Archive"));

        assert_eq!(
            dispatcher.dispatch(Direction::Left, &config).as_deref(),
            Some("delete")
        );
        assert_eq!(
            dispatcher.dispatch(Direction::Right, &config).as_deref(),
            Some("archive")
        );
        assert_eq!(*names.lock().unwrap(), vec!["delete", "archive"]);
    }

    #[test]
    fn test_missing_or_empty_action_is_silent() {
        let mut dispatcher = ActionDispatcher::new(WidgetId::new(1));
        let names = recorder(&mut dispatcher);
        let config = SwipeConfig::new().left_action(ActionSpec::new("", "Nameless"));

        assert_eq!(dispatcher.dispatch(Direction::Left, &config), None);
        assert_eq!(dispatcher.dispatch(Direction::Right, &config), None);
        assert!(names.lock().unwrap().is_empty());
    }

    #[test]
    fn test_removed_listener_stops_receiving() {
        let mut dispatcher = ActionDispatcher::new(WidgetId::new(1));
        let names = Arc::new(Mutex::new(0));
        let sink = names.clone();
        let id = dispatcher.on_action(move |_| *sink.lock().unwrap() += 1);
        let config = SwipeConfig::new().left_action(ActionSpec::new("delete", "Delete"));

        dispatcher.dispatch(Direction::Left, &config);
        assert!(dispatcher.remove_listener(id));
        dispatcher.dispatch(Direction::Left, &config);

        assert_eq!(*names.lock().unwrap(), 1);
        assert_eq!(dispatcher.listener_count(), 0);
    }
}
