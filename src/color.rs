/// Color utilities for card backgrounds.
use std::fmt;

use rand::{RngExt, SeedableRng, rngs::StdRng, rngs::ThreadRng};

use crate::error::{Error, Result};

/// Raw channels below this value are lifted by the same amount.
pub const BOOST: u8 = 75;

/// Exclusive upper bound of a raw channel draw. 255 itself is never produced.
pub const CHANNEL_LIMIT: u8 = 255;

/// Anything that can hand out raw channel values in `[0, CHANNEL_LIMIT)`.
pub trait ChannelSource {
    fn next_channel(&mut self) -> u8;
}

impl<S: ChannelSource + ?Sized> ChannelSource for &mut S {
    fn next_channel(&mut self) -> u8 {
        (**self).next_channel()
    }
}

/// Uniform channel draws backed by a `rand` generator.
pub struct RandomChannels<R>(pub R);

impl<R: RngExt> ChannelSource for RandomChannels<R> {
    fn next_channel(&mut self) -> u8 {
        self.0.random_range(0..CHANNEL_LIMIT)
    }
}

impl RandomChannels<ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl RandomChannels<StdRng> {
    /// Reproducible draws for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

/// Replays a fixed list of raw channels, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct SequenceChannels {
    values: Vec<u8>,
    pos: usize,
}

impl SequenceChannels {
    /// Every value must be a possible raw draw, i.e. below `CHANNEL_LIMIT`.
    pub fn new(values: impl Into<Vec<u8>>) -> Result<Self> {
        let values = values.into();
        if let Some(&bad) = values.iter().find(|&&v| v >= CHANNEL_LIMIT) {
            return Err(Error::ChannelOutOfRange(bad));
        }
        Ok(Self { values, pos: 0 })
    }
}

impl ChannelSource for SequenceChannels {
    /// An empty sequence always yields 0.
    fn next_channel(&mut self) -> u8 {
        let Some(&value) = self.values.get(self.pos) else {
            return 0;
        };
        self.pos = (self.pos + 1) % self.values.len();
        value
    }
}

/// Lift dark channels: `c < 75` maps to `c + 75`, everything else is kept.
pub fn boost(channel: u8) -> u8 {
    if channel < BOOST {
        channel + BOOST
    } else {
        channel
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Draw red, green and blue in that order, then boost each channel.
    pub fn random<S: ChannelSource + ?Sized>(source: &mut S) -> Self {
        let r = source.next_channel();
        let g = source.next_channel();
        let b = source.next_channel();
        Self::new(r, g, b).boosted()
    }

    pub fn boosted(self) -> Self {
        Self::new(boost(self.r), boost(self.g), boost(self.b))
    }

    /// Parse `#rrggbb`, accepting either letter case.
    pub fn from_hex(s: &str) -> Result<Self> {
        if !is_valid_hex(s) {
            return Err(Error::InvalidHex(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|_| Error::InvalidHex(s.to_string()))
        };
        Ok(Self::new(channel(1..3)?, channel(3..5)?, channel(5..7)?))
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Generate a random boosted color as `#rrggbb`.
pub fn random_color<S: ChannelSource + ?Sized>(source: &mut S) -> String {
    Rgb::random(source).to_hex()
}
