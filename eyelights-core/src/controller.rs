//! Countdown controller
//!
//! Owns every collaborator (LED surface, radio, button, clock, delay) and
//! drives the frame loop:
//!
//! ```text
//! init ──► negotiate (radio or button) ──► frame loop
//!                                           │
//!            ┌──────────────────────────────┘
//!            ▼
//!   remaining = end - (now + adjustment)
//!   remaining <= 0      → Done, idle display forever
//!   remaining < 60      → two-digit seconds, both sides
//!   otherwise           → ring arc + hours + minutes
//!   show(), sleep one frame interval
//! ```

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use eyelights_display::LedSurface;
use eyelights_hal::{Radio, WallClock};

use crate::config::Config;
use crate::error::Result;
use crate::render::DigitRenderer;
use crate::state::{Countdown, View};
use crate::sync::{Negotiator, Trigger};
use crate::traits::Button;

/// Countdown controller
pub struct Controller<S, R, B, C, D> {
    surface: S,
    radio: R,
    button: B,
    clock: C,
    delay: D,
    config: Config,
    renderer: DigitRenderer,
    negotiator: Negotiator,
    countdown: Countdown,
    /// View shown by the previous frame, for logging mode changes
    last_view: Option<View>,
}

impl<S, R, B, C, D> Controller<S, R, B, C, D>
where
    S: LedSurface,
    R: Radio,
    B: Button,
    C: WallClock,
    D: DelayNs,
{
    /// Create a new controller
    pub fn new(config: Config, surface: S, radio: R, button: B, clock: C, delay: D) -> Self {
        let renderer = DigitRenderer::new(&config.display);
        let negotiator = Negotiator::new(&config.sync, &config.countdown);
        let countdown = Countdown::new(config.countdown.short_threshold_s);
        Self {
            surface,
            radio,
            button,
            clock,
            delay,
            config,
            renderer,
            negotiator,
            countdown,
            last_view: None,
        }
    }

    /// LED surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Radio
    pub fn radio(&self) -> &R {
        &self.radio
    }

    /// Countdown state
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Clear leftovers from before reset and set brightness
    pub fn init(&mut self) -> Result<()> {
        self.surface.show()?;
        self.surface
            .set_global_current(self.config.display.global_current)?;
        info!(
            "Display initialized, global current {=u8}",
            self.config.display.global_current
        );
        Ok(())
    }

    /// Wait for a time sync or button press and start the countdown
    pub fn synchronize(&mut self) -> Result<Trigger> {
        let trigger = self.negotiator.negotiate(
            &mut self.radio,
            &self.button,
            &self.clock,
            &mut self.delay,
        )?;
        self.countdown.start(&trigger);
        info!(
            "Countdown started by {}, ends at {=i64}",
            trigger.source,
            trigger.end_time.as_i64()
        );
        Ok(trigger)
    }

    /// Render and show one frame, then sleep one frame interval
    pub fn step(&mut self) -> Result<View> {
        let view = self.countdown.update(self.clock.now());
        self.render(view)?;
        self.surface.show()?;
        self.log_mode_change(view);
        self.delay.delay_ms(self.config.countdown.frame_interval_ms);
        Ok(view)
    }

    fn render(&mut self, view: View) -> Result<()> {
        match view {
            View::Waiting => {}
            View::Short(seconds) => {
                // A frame can skip the 60 s mark, leaving the last arc lit
                self.renderer.display_ring_progress(&mut self.surface, 0)?;
                self.renderer.display_digits(&mut self.surface, seconds)?;
            }
            View::Full(value) => self.renderer.display_digits_full(&mut self.surface, value)?,
            View::Idle => self.renderer.display_idle(
                &mut self.surface,
                self.config.display.idle_left,
                self.config.display.idle_right,
            )?,
        }
        Ok(())
    }

    fn log_mode_change(&mut self, view: View) {
        let changed = self
            .last_view
            .map_or(true, |last| !last.same_mode(&view));
        if changed {
            match view {
                View::Idle => info!("Countdown done"),
                _ => debug!("Display mode {}", view),
            }
        }
        self.last_view = Some(view);
    }

    /// Run forever
    ///
    /// Only returns on a hardware or time failure, which the board should
    /// treat as fatal.
    pub fn run(mut self) -> Result<Infallible> {
        self.init()?;
        self.synchronize()?;
        loop {
            self.step()?;
        }
    }
}
