/// The `Loggable` trait represents an interface for objects that can be logged.
pub trait Loggable {
    /// Returns a one-line description of the object for the log.
    fn log(&self) -> String;
}
