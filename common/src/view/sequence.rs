/// Hands out tickets for in-flight requests so a view can drop responses
/// that arrive after a newer request was issued.
///
/// A view keeps one sequence, calls [`RequestSequence::issue`] before each
/// fetch and tags the response message with the ticket. On arrival only the
/// current ticket is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestSequence {
    latest: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl RequestSequence {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}
