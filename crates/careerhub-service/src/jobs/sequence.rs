//! Request sequencing for out-of-order responses.

/// A sequence number handed out when a request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// The raw sequence number.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing tickets and recognises the latest one.
///
/// Only the response carrying the most recently issued ticket may update
/// listing state; anything older has been superseded.
#[derive(Debug, Clone, Default)]
pub struct ResultSequencer {
    latest: u64,
}

impl ResultSequencer {
    /// Create a sequencer that has issued nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Whether `ticket` is the most recently issued one.
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest != 0 && ticket.0 == self.latest
    }
}
