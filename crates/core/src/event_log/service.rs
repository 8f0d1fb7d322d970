use parking_lot::Mutex;
use querytap_common::collections::RingBuffer;
use querytap_domain::{Event, EventKind, EventLogConfig};

use super::ports::{EventSink, EventSource};

/// Append-only event store with a fixed capacity.
///
/// A single mutex guards both the ring and the sequence counter, so `seq`
/// order, timestamp order and storage order always agree. Once the capacity
/// is reached the oldest event is evicted; appending never fails.
///
/// The log is a plain value: share it with `Arc` and inject it where needed.
///
/// ```rust
/// use querytap_core::EventLog;
/// use querytap_domain::EventKind;
///
/// let log = EventLog::new(3);
/// for n in 0..5 {
///     log.append(EventKind::Query, format!("q{n}"));
/// }
///
/// let details: Vec<_> = log.recent(2).into_iter().map(|e| e.detail).collect();
/// assert_eq!(details, vec!["q3", "q4"]);
/// assert_eq!(log.evicted(), 2);
/// ```
#[derive(Debug)]
pub struct EventLog {
    state: Mutex<LogState>,
}

#[derive(Debug)]
struct LogState {
    ring: RingBuffer<Event>,
    next_seq: u64,
}

impl EventLog {
    /// Create a log holding at most `capacity` events (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { state: Mutex::new(LogState { ring: RingBuffer::new(capacity), next_seq: 0 }) }
    }

    #[must_use]
    pub fn from_config(config: &EventLogConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Append an event stamped with the current time and return a copy.
    pub fn append(&self, kind: EventKind, detail: impl Into<String>) -> Event {
        let detail = detail.into();
        let event = {
            let mut state = self.state.lock();
            let seq = state.next_seq;
            state.next_seq = seq.wrapping_add(1);
            let event = Event::new(seq, kind, detail);
            state.ring.push(event.clone());
            event
        };
        tracing::debug!(seq = event.seq, kind = %event.kind, "event recorded");
        event
    }

    /// The newest `n` events in append order, or all of them if fewer exist.
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<Event> {
        self.state.lock().ring.tail_vec(n)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().ring.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().ring.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.state.lock().ring.capacity()
    }

    /// Events appended since creation, including evicted ones.
    #[must_use]
    pub fn total_appended(&self) -> u64 {
        self.state.lock().next_seq
    }

    /// Events dropped because the ring was full.
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.state.lock().ring.evicted()
    }

    /// Drop every stored event. Administrative reset; sequence numbers keep
    /// counting from where they were.
    pub fn clear(&self) {
        self.state.lock().ring.clear();
        tracing::info!("event log cleared");
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::from_config(&EventLogConfig::default())
    }
}

impl EventSink for EventLog {
    fn record(&self, kind: EventKind, detail: String) {
        self.append(kind, detail);
    }
}

impl EventSource for EventLog {
    fn recent(&self, n: usize) -> Vec<Event> {
        EventLog::recent(self, n)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn recent_returns_last_n_in_append_order() {
        let log = EventLog::new(100);
        for n in 0..10 {
            log.append(EventKind::Query, format!("event-{n}"));
        }

        let recent = log.recent(3);
        let details: Vec<_> = recent.iter().map(|e| e.detail.as_str()).collect();
        assert_eq!(details, vec!["event-7", "event-8", "event-9"]);
        assert_eq!(recent.iter().map(|e| e.seq).collect::<Vec<_>>(), vec![7, 8, 9]);
    }

    #[test]
    fn recent_with_large_n_returns_everything() {
        let log = EventLog::new(100);
        log.append(EventKind::Query, "only");

        assert_eq!(log.recent(50).len(), 1);
        assert!(EventLog::new(4).recent(10).is_empty());
    }

    #[test]
    fn capacity_bounds_memory_and_counts_evictions() {
        let log = EventLog::new(4);
        for n in 0..10 {
            log.append(EventKind::Response, n.to_string());
        }

        assert_eq!(log.len(), 4);
        assert_eq!(log.capacity(), 4);
        assert_eq!(log.total_appended(), 10);
        assert_eq!(log.evicted(), 6);
        assert_eq!(log.recent(10).first().map(|e| e.seq), Some(6));
    }

    #[test]
    fn append_returns_the_stored_event() {
        let log = EventLog::new(8);
        let first = log.append(EventKind::Query, "a");
        let second = log.append(EventKind::Error, "b");

        assert_eq!(first.seq + 1, second.seq);
        assert_eq!(log.recent(2), vec![first, second]);
    }

    #[test]
    fn clear_keeps_sequence_monotonic() {
        let log = EventLog::new(8);
        log.append(EventKind::Query, "before");
        log.clear();
        assert!(log.is_empty());

        let after = log.append(EventKind::Query, "after");
        assert_eq!(after.seq, 1);
    }

    #[test]
    fn sink_and_source_views_share_storage() {
        let log = Arc::new(EventLog::new(8));
        let sink: Arc<dyn EventSink> = log.clone();
        let source: Arc<dyn EventSource> = log.clone();

        sink.record(EventKind::Error, "boom".to_string());
        assert_eq!(source.recent(1)[0].detail, "boom");
    }

    #[test]
    fn concurrent_appends_lose_nothing() {
        let log = Arc::new(EventLog::new(10_000));
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let log = Arc::clone(&log);
                thread::spawn(move || {
                    for step in 0..250 {
                        log.append(EventKind::Query, format!("{worker}:{step}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let events = log.recent(2_000);
        assert_eq!(events.len(), 2_000);
        let seqs: Vec<_> = events.iter().map(|e| e.seq).collect();
        assert_eq!(seqs, (0..2_000).collect::<Vec<_>>());
    }
}
