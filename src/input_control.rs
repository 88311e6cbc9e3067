//! Mouse input injection for X11-based systems.
//!
//! Relative cursor movement uses pointer warping; clicks and wheel scrolling
//! are synthesized through the XTEST extension. All commands are
//! fire-and-forget, the caller gets no acknowledgment beyond the Result.

use crate::{
    error::Error,
    utils::f64_to_i16_clamp,
    Result,
};
use log::{debug, info};
use x11rb::{
    connection::Connection,
    protocol::{
        xproto::{ConnectionExt as _, Screen, BUTTON_PRESS_EVENT, BUTTON_RELEASE_EVENT},
        xtest::ConnectionExt as _,
    },
    rust_connection::RustConnection,
};

/// Mouse buttons that can be clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
}

impl MouseButton {
    /// X11 button detail code
    const fn detail(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Right => 3,
        }
    }
}

/// X11 wheel button codes
const SCROLL_UP: u8 = 4;
const SCROLL_DOWN: u8 = 5;

/// Sink for discrete input commands emitted by the tracker
pub trait InputSink {
    /// Click a mouse button
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be delivered.
    fn click(&mut self, button: MouseButton) -> Result<()>;

    /// Double-click the primary button
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be delivered.
    fn double_click(&mut self) -> Result<()>;

    /// Move the cursor relative to its current position
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be delivered.
    fn move_relative(&mut self, dx: f64, dy: f64) -> Result<()>;

    /// Scroll vertically; positive is up, one unit per wheel step
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be delivered.
    fn scroll(&mut self, amount: i32) -> Result<()>;
}

/// Input injection implementation for X11
pub struct X11InputController {
    connection: RustConnection,
    screen: Screen,
    screen_width: u16,
    screen_height: u16,
}

impl X11InputController {
    /// Create a new input controller
    ///
    /// # Errors
    ///
    /// Returns an error if the X11 server cannot be reached.
    pub fn new() -> Result<Self> {
        info!("Initializing X11 input controller");

        let (connection, screen_num) = RustConnection::connect(None)
            .map_err(|e| Error::InputInjection(format!("Failed to connect to X11: {e}")))?;

        let screen = connection
            .setup()
            .roots
            .get(screen_num)
            .ok_or_else(|| Error::InputInjection("Failed to get screen".to_string()))?
            .clone();

        let screen_width = screen.width_in_pixels;
        let screen_height = screen.height_in_pixels;

        info!(
            "Connected to X11 display, screen: {}x{}",
            screen_width, screen_height
        );

        Ok(Self {
            connection,
            screen,
            screen_width,
            screen_height,
        })
    }

    /// Get current cursor position
    ///
    /// # Errors
    ///
    /// Returns an error if the pointer query fails.
    pub fn position(&self) -> Result<(i16, i16)> {
        let reply = self
            .connection
            .query_pointer(self.screen.root)
            .map_err(|e| Error::InputInjection(format!("Failed to send query pointer: {e}")))?
            .reply()
            .map_err(|e| Error::InputInjection(format!("Failed to query pointer: {e}")))?;

        Ok((reply.root_x, reply.root_y))
    }

    /// Get screen dimensions
    #[must_use]
    pub const fn screen_size(&self) -> (u16, u16) {
        (self.screen_width, self.screen_height)
    }

    fn warp_to(&self, x: i16, y: i16) -> Result<()> {
        let max_x = i16::try_from(self.screen_width.saturating_sub(1)).unwrap_or(i16::MAX);
        let max_y = i16::try_from(self.screen_height.saturating_sub(1)).unwrap_or(i16::MAX);
        let x = x.clamp(0, max_x);
        let y = y.clamp(0, max_y);

        debug!("Warping cursor to ({x}, {y})");

        self.connection
            .warp_pointer(x11rb::NONE, self.screen.root, 0, 0, 0, 0, x, y)
            .map_err(|e| Error::InputInjection(format!("Failed to warp pointer: {e}")))?;

        self.connection
            .flush()
            .map_err(|e| Error::InputInjection(format!("Failed to flush connection: {e}")))?;

        Ok(())
    }

    fn press_release(&self, detail: u8) -> Result<()> {
        for event_type in [BUTTON_PRESS_EVENT, BUTTON_RELEASE_EVENT] {
            self.connection
                .xtest_fake_input(
                    event_type,
                    detail,
                    x11rb::CURRENT_TIME,
                    self.screen.root,
                    0,
                    0,
                    0,
                )
                .map_err(|e| Error::InputInjection(format!("Failed to send button event: {e}")))?;
        }
        self.connection
            .flush()
            .map_err(|e| Error::InputInjection(format!("Failed to flush connection: {e}")))?;
        Ok(())
    }
}

impl InputSink for X11InputController {
    fn click(&mut self, button: MouseButton) -> Result<()> {
        debug!("Click {button:?}");
        self.press_release(button.detail())
    }

    fn double_click(&mut self) -> Result<()> {
        debug!("Double click");
        self.press_release(MouseButton::Left.detail())?;
        self.press_release(MouseButton::Left.detail())
    }

    fn move_relative(&mut self, dx: f64, dy: f64) -> Result<()> {
        let (current_x, current_y) = self.position()?;
        let new_x = f64_to_i16_clamp(f64::from(current_x) + dx, i16::MIN, i16::MAX);
        let new_y = f64_to_i16_clamp(f64::from(current_y) + dy, i16::MIN, i16::MAX);

        self.warp_to(new_x, new_y)
    }

    fn scroll(&mut self, amount: i32) -> Result<()> {
        let detail = if amount >= 0 { SCROLL_UP } else { SCROLL_DOWN };
        for _ in 0..amount.unsigned_abs() {
            self.press_release(detail)?;
        }
        Ok(())
    }
}
