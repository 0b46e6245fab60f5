#![no_std]

mod char_map;
mod constants;
pub mod frame;
pub mod text;

pub use char_map::*;
pub use constants::*;
pub use text::{encode, Cells, OverlongText};

use core::fmt;
use embedded_hal::i2c::I2c;
use num_traits::ToPrimitive;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkRate {
    Off = 0,
    TwoHz = 1,
    OneHz = 2,
    HalfHz = 3,
}

/// Four 14-segment characters behind an HT16K33.
///
/// Glyphs come from a borrowed [`CharMap`]; the built-in
/// [`DEFAULT_CHAR_MAP`] is used when none is given.
pub struct AlphaNum4<'a, I2C> {
    pub i2c: I2C,
    pub address: u8,
    char_map: &'a CharMap,
}

impl<'a, I2C, E> AlphaNum4<'a, I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C, address: u8, char_map: Option<&'a CharMap>) -> Self {
        Self {
            i2c,
            address,
            char_map: char_map.unwrap_or(&DEFAULT_CHAR_MAP),
        }
    }

    /// Creates the driver and runs [`init`](Self::init).
    pub fn initialize(
        i2c: I2C,
        address: u8,
        char_map: Option<&'a CharMap>,
    ) -> Result<Self, AlphaNumError<E>> {
        let mut display = Self::new(i2c, address, char_map);
        display.init()?;
        Ok(display)
    }

    pub fn destroy(self) -> I2C {
        self.i2c
    }

    pub fn char_map(&self) -> &'a CharMap {
        self.char_map
    }

    /// Bring-up: oscillator on, display on without blinking, full brightness.
    /// Stops at the first failed write.
    pub fn init(&mut self) -> Result<(), AlphaNumError<E>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("ht16k33 {=u8:#x}: init", self.address);

        self.write_command(command::SYSTEM_SETUP | command::system_setup::OSCILLATOR_ON)?;
        self.set_blink(BlinkRate::Off)?;
        self.set_brightness(MAX_BRIGHTNESS)?;

        Ok(())
    }

    /// Blanks the display, then stops the oscillator.
    pub fn shutdown(&mut self) -> Result<(), AlphaNumError<E>> {
        self.write_command(command::DISPLAY_SETUP | command::display_setup::DISPLAY_OFF)?;
        self.write_command(command::SYSTEM_SETUP | command::system_setup::STANDBY)?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), AlphaNumError<E>> {
        self.write_cells(&[])
    }

    pub fn encode(&self, text: &str) -> Result<Cells, AlphaNumError<E>> {
        text::encode(text, self.char_map).map_err(|e| AlphaNumError::OverlongText(e.cells))
    }

    /// Shows up to four characters, left aligned; a `.` after a character
    /// lights its decimal point.
    pub fn show(&mut self, text: &str) -> Result<(), AlphaNumError<E>> {
        let cells = self.encode(text)?;
        self.write_cells(&cells)
    }

    /// Right-aligned decimal, `-999..=9999`.
    pub fn show_number<T>(&mut self, number: T) -> Result<(), AlphaNumError<E>>
    where
        T: ToPrimitive,
    {
        let value = number.to_i32().ok_or(AlphaNumError::InvalidValue)?;
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&value) {
            return Err(AlphaNumError::InvalidValue);
        }

        let mut cells = [self.char_map.lookup(' '); CELL_COUNT];
        let mut magnitude = value.unsigned_abs();
        let mut index = CELL_COUNT;
        loop {
            index -= 1;
            let digit = char::from(b'0' + (magnitude % 10) as u8);
            cells[index] = self.char_map.lookup(digit);
            magnitude /= 10;
            if magnitude == 0 {
                break;
            }
        }
        if value < 0 {
            cells[index - 1] = self.char_map.lookup('-');
        }

        self.write_cells(&cells)
    }

    /// Sends one frame with `cells` in display RAM order. Cells not given are
    /// turned off.
    pub fn write_cells(&mut self, cells: &[u16]) -> Result<(), AlphaNumError<E>> {
        let frame = frame::build(cells).map_err(|e| AlphaNumError::OverlongText(e.cells))?;

        #[cfg(feature = "defmt")]
        defmt::trace!("ht16k33 {=u8:#x}: frame {=[u8]:#x}", self.address, &frame[..]);

        self.i2c.write(self.address, &frame)?;
        Ok(())
    }

    pub fn set_brightness(&mut self, level: u8) -> Result<(), AlphaNumError<E>> {
        if level > MAX_BRIGHTNESS {
            return Err(AlphaNumError::InvalidValue);
        }
        self.write_command(command::DIMMING | level)?;
        Ok(())
    }

    pub fn set_blink(&mut self, rate: BlinkRate) -> Result<(), AlphaNumError<E>> {
        self.write_command(
            command::DISPLAY_SETUP
                | command::display_setup::DISPLAY_ON
                | (rate as u8) << command::display_setup::BLINK_SHIFT,
        )?;
        Ok(())
    }

    fn write_command(&mut self, command: u8) -> Result<(), AlphaNumError<E>> {
        self.i2c.write(self.address, &[command])?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlphaNumError<E> {
    I2cError(E),
    /// Text needed this many cells; the display has [`CELL_COUNT`].
    OverlongText(usize),
    InvalidValue,
}

impl<E> From<E> for AlphaNumError<E> {
    fn from(error: E) -> Self {
        AlphaNumError::I2cError(error)
    }
}

impl<E: fmt::Debug> fmt::Display for AlphaNumError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlphaNumError::I2cError(e) => write!(f, "I2C error: {:?}", e),
            AlphaNumError::OverlongText(cells) => {
                write!(f, "Text needs {} cells, display has {}", cells, CELL_COUNT)
            }
            AlphaNumError::InvalidValue => write!(f, "Invalid value"),
        }
    }
}
