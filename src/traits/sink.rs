use crate::input::InputEvent;

/// Receiver for platform-neutral input events.
///
/// A sink only records intent, drag and orbit state. Positions are advanced
/// by the frame update, never from inside `handle`.
pub trait InputSink {
    /// Returns true if the event was used.
    fn handle(&mut self, event: &InputEvent) -> bool;
}
