//! Button trait

/// A momentary push button
///
/// Implementations hide the electrical polarity: the glasses' switch pulls
/// the pin low when pressed, but callers only ask whether it is pressed.
pub trait Button {
    /// Check if the button is currently held down
    fn is_pressed(&self) -> bool;
}

impl<T: Button + ?Sized> Button for &T {
    fn is_pressed(&self) -> bool {
        (**self).is_pressed()
    }
}
