//! Project event bus.
//!
//! The orchestrator publishes committed changes, undo, redo, rejections and
//! file events here. Listeners attach as synchronous handlers or take a
//! broadcast receiver. Project events are also kept in a bounded journal,
//! numbered in publication order, so a late listener can catch up on what a
//! project went through.

use parking_lot::RwLock;
use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;

use super::events::{AppEvent, EventCategory, ProjectEvent};

/// Handle returned by [`EventBus::subscribe`]. Ids grow with each
/// subscription, and handlers run in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Which events a handler receives
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    #[default]
    All,
    Categories(Vec<EventCategory>),
    /// Events about one project id. File, settings and renderer events
    /// carry no project and never match.
    Project(String),
}

impl EventFilter {
    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
            EventFilter::Project(id) => event.project_id() == Some(id.as_str()),
        }
    }
}

type EventHandler = Box<dyn Fn(AppEvent) + Send + Sync>;

#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Capacity of the broadcast channel behind [`EventBus::receiver`]
    pub channel_capacity: usize,
    /// Project events kept in the journal; 0 disables it
    pub journal_capacity: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
            journal_capacity: 500,
        }
    }
}

/// One journaled project event
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    /// Position in publication order, starting at 1
    pub sequence: u64,
    pub event: ProjectEvent,
}

#[derive(Debug, Default)]
struct Journal {
    entries: VecDeque<JournalEntry>,
    last_sequence: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventBusError {
    /// Neither a handler nor a receiver was attached
    #[error("No active subscribers")]
    NoSubscribers,
}

pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
    handlers: RwLock<BTreeMap<SubscriptionId, (EventFilter, EventHandler)>>,
    next_subscription: AtomicU64,
    journal: RwLock<Journal>,
    config: EventBusConfig,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    pub fn with_config(config: EventBusConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity.max(1));
        Self {
            sender,
            handlers: RwLock::new(BTreeMap::new()),
            next_subscription: AtomicU64::new(1),
            journal: RwLock::new(Journal::default()),
            config,
        }
    }

    /// Journals project events, runs matching handlers on the calling
    /// thread, then broadcasts to receivers.
    ///
    /// Returns how many receivers got the event. The event is still
    /// journaled when nobody listens.
    pub fn publish(&self, event: AppEvent) -> Result<usize, EventBusError> {
        if let AppEvent::Project(project_event) = &event {
            self.record(project_event);
        }

        let handlers = self.handlers.read();
        for (filter, handler) in handlers.values() {
            if filter.matches(&event) {
                handler(event.clone());
            }
        }

        match self.sender.send(event) {
            Ok(count) => Ok(count),
            Err(_) if handlers.is_empty() => Err(EventBusError::NoSubscribers),
            Err(_) => Ok(0),
        }
    }

    /// Registers `handler` for events matching `filter`. Handlers run on the
    /// publishing thread and must not publish themselves.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(AppEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.handlers.write().insert(id, (filter, Box::new(handler)));
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.handlers.write().remove(&id).is_some();
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Receiver for listeners polling from another task or thread
    pub fn receiver(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Journaled events of `project_id` published after sequence `after`,
    /// oldest first.
    pub fn journal(&self, project_id: &str, after: Option<u64>) -> Vec<JournalEntry> {
        let after = after.unwrap_or(0);
        self.journal
            .read()
            .entries
            .iter()
            .filter(|e| e.sequence > after && e.event.project_id() == project_id)
            .cloned()
            .collect()
    }

    /// Sequence of the most recent journaled event, 0 before the first
    pub fn last_sequence(&self) -> u64 {
        self.journal.read().last_sequence
    }

    pub fn config(&self) -> &EventBusConfig {
        &self.config
    }

    fn record(&self, event: &ProjectEvent) {
        let capacity = self.config.journal_capacity;
        if capacity == 0 {
            return;
        }

        let mut journal = self.journal.write();
        journal.last_sequence += 1;
        let sequence = journal.last_sequence;
        journal.entries.push_back(JournalEntry {
            sequence,
            event: event.clone(),
        });
        while journal.entries.len() > capacity {
            journal.entries.pop_front();
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("last_sequence", &self.last_sequence())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_bus::events::{ErrorEvent, FileEvent};
    use std::sync::{Arc, Mutex};

    fn changed(project_id: &str, operation: &str) -> AppEvent {
        AppEvent::Project(ProjectEvent::Changed {
            project_id: project_id.to_string(),
            operation: operation.to_string(),
            component_count: 12,
        })
    }

    fn saved() -> AppEvent {
        AppEvent::File(FileEvent::Saved {
            path: "wardrobe.dressing".into(),
        })
    }

    fn collect(bus: &EventBus, filter: EventFilter) -> Arc<Mutex<Vec<AppEvent>>> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        bus.subscribe(filter, move |event| sink.lock().unwrap().push(event));
        received
    }

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let bus = EventBus::new();
        assert_eq!(bus.subscriber_count(), 0);

        let id = bus.subscribe(EventFilter::All, |_| {});
        assert_eq!(bus.subscriber_count(), 1);

        assert!(bus.unsubscribe(id));
        assert_eq!(bus.subscriber_count(), 0);
        assert!(!bus.unsubscribe(id));
    }

    #[test]
    fn test_handlers_run_in_subscription_order() {
        let bus = EventBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for name in ["renderer", "autosave", "status"] {
            let order = Arc::clone(&order);
            bus.subscribe(EventFilter::All, move |_| order.lock().unwrap().push(name));
        }

        bus.publish(changed("p1", "Add divider")).unwrap();
        assert_eq!(*order.lock().unwrap(), vec!["renderer", "autosave", "status"]);
    }

    #[test]
    fn test_publish_without_subscribers() {
        let bus = EventBus::new();
        assert!(matches!(
            bus.publish(changed("p1", "Rename project")),
            Err(EventBusError::NoSubscribers)
        ));
        // still journaled
        assert_eq!(bus.journal("p1", None).len(), 1);
    }

    #[test]
    fn test_category_filter() {
        let bus = EventBus::new();
        let projects = collect(&bus, EventFilter::Categories(vec![EventCategory::Project]));
        let files = collect(&bus, EventFilter::Categories(vec![EventCategory::File]));

        bus.publish(changed("p1", "Move divider")).unwrap();
        bus.publish(saved()).unwrap();

        assert_eq!(projects.lock().unwrap().len(), 1);
        assert_eq!(*files.lock().unwrap(), vec![saved()]);
    }

    #[test]
    fn test_project_filter() {
        let bus = EventBus::new();
        let received = collect(&bus, EventFilter::Project("p2".to_string()));

        bus.publish(changed("p1", "Add divider")).unwrap();
        bus.publish(changed("p2", "Add divider")).unwrap();
        bus.publish(AppEvent::Error(ErrorEvent::Generation {
            project_id: "p2".to_string(),
            message: "degenerate dimensions".to_string(),
        }))
        .unwrap();
        bus.publish(saved()).unwrap();

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 2);
        assert!(received.iter().all(|e| e.project_id() == Some("p2")));
    }

    #[test]
    fn test_journal_keeps_project_events_per_project() {
        let bus = EventBus::new();
        bus.publish(changed("p1", "Add divider")).ok();
        bus.publish(saved()).ok();
        bus.publish(changed("p2", "Rename project")).ok();
        bus.publish(changed("p1", "Update dimensions")).ok();

        let p1 = bus.journal("p1", None);
        assert_eq!(
            p1.iter().map(|e| e.sequence).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(bus.last_sequence(), 3);

        let since = bus.journal("p1", Some(1));
        assert_eq!(since.len(), 1);
        assert_eq!(since[0].event.description(), "Update dimensions (12 components)");
    }

    #[test]
    fn test_journal_is_bounded() {
        let bus = EventBus::with_config(EventBusConfig {
            journal_capacity: 5,
            ..Default::default()
        });
        for i in 0..10 {
            bus.publish(changed("p1", &format!("op{}", i))).ok();
        }

        let journal = bus.journal("p1", None);
        assert_eq!(journal.len(), 5);
        assert_eq!(journal[0].sequence, 6);
        assert_eq!(AppEvent::Project(journal[4].event.clone()), changed("p1", "op9"));
    }

    #[test]
    fn test_disabled_journal() {
        let bus = EventBus::with_config(EventBusConfig {
            journal_capacity: 0,
            ..Default::default()
        });
        bus.publish(changed("p1", "Add divider")).ok();
        assert!(bus.journal("p1", None).is_empty());
        assert_eq!(bus.last_sequence(), 0);
    }

    #[tokio::test]
    async fn test_async_receiver() {
        let bus = EventBus::new();
        let mut receiver = bus.receiver();

        assert_eq!(bus.publish(changed("p1", "Update dimensions")).unwrap(), 1);

        match receiver.recv().await {
            Ok(AppEvent::Project(ProjectEvent::Changed { operation, .. })) => {
                assert_eq!(operation, "Update dimensions");
            }
            other => panic!("Wrong event received: {:?}", other),
        }
    }
}
