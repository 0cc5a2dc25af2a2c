pub mod clock_in;
pub mod record_completion;
pub mod record_seen;
pub mod rsvp;
pub mod set_watch;
pub mod subscribers;
