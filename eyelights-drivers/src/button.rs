//! GPIO push button
//!
//! The button on the glasses' controller closes to ground, with the pin
//! pulled up, so it reads low while held. Other boards may wire it the
//! other way round.

use eyelights_core::traits::Button;
use eyelights_hal::InputPin;

/// Push button on a digital input pin
pub struct GpioButton<P> {
    pin: P,
    /// If true, pressed = pin LOW
    inverted: bool,
}

impl<P: InputPin> GpioButton<P> {
    /// Create a new GPIO button
    ///
    /// # Arguments
    /// - `pin`: The input pin the button is wired to
    /// - `inverted`: If true, the button is pressed when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }

    /// Create a button that reads high while pressed
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a button that reads low while pressed (pull-up wiring)
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Release the pin
    pub fn free(self) -> P {
        self.pin
    }
}

impl<P: InputPin> Button for GpioButton<P> {
    fn is_pressed(&self) -> bool {
        self.pin.is_high() != self.inverted
    }
}
