/// Fixed-capacity ring of per-interval request counts.
///
/// Each tick overwrites the oldest slot, so memory stays constant for the lifetime of the
/// monitor. Slots start at zero.
#[derive(Debug, Clone)]
pub struct AlertWindow {
    slots: Box<[u64]>,
    next: usize,
}

impl AlertWindow {
    /// A window of `capacity` slots. A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity.max(1)].into_boxed_slice(),
            next: 0,
        }
    }

    pub fn record(&mut self, count: u64) {
        self.slots[self.next] = count;
        self.next = (self.next + 1) % self.slots.len();
    }

    /// Requests counted over the trailing window.
    pub fn total(&self) -> u64 {
        self.slots.iter().fold(0u64, |acc, c| acc.saturating_add(*c))
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
