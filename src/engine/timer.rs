//! Repeating wall-clock timers with cancelable handles.

/// Handle to a looping timer event. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct LoopEvent {
    handle: TimerHandle,
    period_ms: u64,
    elapsed_ms: u64,
}

/// A set of looping timers advanced explicitly by the host loop.
#[derive(Debug, Clone, Default)]
pub struct TimerEvents {
    events: Vec<LoopEvent>,
    next_id: u64,
}

impl TimerEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a loop that fires every `period_ms`. A zero period is treated as 1 ms.
    pub fn add_loop(&mut self, period_ms: u64) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.events.push(LoopEvent {
            handle,
            period_ms: period_ms.max(1),
            elapsed_ms: 0,
        });
        handle
    }

    /// Cancel a loop. Returns false if the handle was not active.
    pub fn remove(&mut self, handle: TimerHandle) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.handle != handle);
        self.events.len() != before
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Advance all loops by `dt_ms` and return every firing in chronological
    /// order. Loops registered earlier win ties.
    pub fn advance(&mut self, dt_ms: u64) -> Vec<TimerHandle> {
        let mut fired: Vec<(u64, usize, TimerHandle)> = Vec::new();

        for (order, event) in self.events.iter_mut().enumerate() {
            let mut until_next = event.period_ms - event.elapsed_ms;
            let mut offset = 0;
            let mut remaining = dt_ms;

            while remaining >= until_next {
                offset += until_next;
                remaining -= until_next;
                fired.push((offset, order, event.handle));
                until_next = event.period_ms;
            }

            event.elapsed_ms = event.period_ms - until_next + remaining;
        }

        fired.sort_by_key(|&(offset, order, _)| (offset, order));
        fired.into_iter().map(|(_, _, handle)| handle).collect()
    }
}
