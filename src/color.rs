//! RGB color values with saturating channel arithmetic
//!
//! Every constructor and transform clamps into 0..=255, so a `ColorValue`
//! is always a valid 8-bit color.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::ValidationError;

/// One of the three color channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

impl ColorValue {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build a color from arbitrary integers, clamping each into 0..=255
    pub fn from_color(red: i32, green: i32, blue: i32) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
        }
    }

    /// Sample every channel uniformly from the thread-local RNG
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen())
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Shift a single channel by `amount`, saturating at 0 and 255
    pub fn increase_channel(self, channel: Channel, amount: i32) -> Self {
        let shifted = clamp_channel((self.channel(channel) as i32).saturating_add(amount));
        match channel {
            Channel::Red => Self { red: shifted, ..self },
            Channel::Green => Self { green: shifted, ..self },
            Channel::Blue => Self { blue: shifted, ..self },
        }
    }

    pub fn increase_all(self, red: i32, green: i32, blue: i32) -> Self {
        self.increase_channel(Channel::Red, red)
            .increase_channel(Channel::Green, green)
            .increase_channel(Channel::Blue, blue)
    }

    /// Linear blend towards `other`.
    ///
    /// Each channel becomes `round(a + (b - a) * ratio)`, rounding half away
    /// from zero. A `ratio` outside `0.0..=1.0` (or NaN) is a caller bug and
    /// returns [`ValidationError::RatioOutOfRange`]; this never panics.
    pub fn mix_with(self, other: Self, ratio: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(ValidationError::RatioOutOfRange(ratio));
        }

        let lerp = |a: u8, b: u8| {
            let a = a as f64;
            (a + (b as f64 - a) * ratio).round().clamp(0.0, 255.0) as u8
        };

        Ok(Self {
            red: lerp(self.red, other.red),
            green: lerp(self.green, other.green),
            blue: lerp(self.blue, other.blue),
        })
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Parse a hex color.
    ///
    /// Surrounding whitespace and one leading `#` are ignored, digits are
    /// case-insensitive. Accepted bodies:
    /// - `RGB`: each digit is doubled (`f` becomes `ff`)
    /// - `RRGGBB`
    /// - `XXRRGGBB`: the leading byte is skipped
    ///
    /// Any other length or a non-hex character gives `None`.
    pub fn from_hex(input: &str) -> Option<Self> {
        let body = input.trim();
        let body = body.strip_prefix('#').unwrap_or(body);

        if !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let digits = match body.len() {
            3 => body.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => body.to_string(),
            8 => body[2..].to_string(),
            _ => return None,
        };

        let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::new(byte(0..2)?, byte(2..4)?, byte(4..6)?))
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ColorValue {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| ValidationError::MalformedHex(s.to_string()))
    }
}
