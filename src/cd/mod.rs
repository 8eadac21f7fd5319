use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub const FRAMES_PER_SECOND: u64 = 75;
pub const SECONDS_PER_MINUTE: u64 = 60;
/// Two second lead-in preceding LBA 0 on a disc.
pub const LEAD_IN_FRAMES: u64 = 2 * FRAMES_PER_SECOND;

/// Disc time as an absolute count of 1/75 second units (one CD sector each).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// Fields are 32 bit so the combined count always fits in a `u64`.
    pub fn from_msf(minutes: u32, seconds: u32, frames: u32) -> Self {
        let minutes = u64::from(minutes);
        let seconds = u64::from(seconds);
        Self((minutes * SECONDS_PER_MINUTE + seconds) * FRAMES_PER_SECOND + u64::from(frames))
    }

    /// Splits the frame count into minutes, seconds and frames.
    pub fn msf(&self) -> (u64, u64, u64) {
        let seconds = self.0 / FRAMES_PER_SECOND;
        (
            seconds / SECONDS_PER_MINUTE,
            seconds % SECONDS_PER_MINUTE,
            self.0 % FRAMES_PER_SECOND,
        )
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn to_lba(&self) -> u64 {
        self.0.saturating_sub(LEAD_IN_FRAMES)
    }
}

impl From<u64> for Frame {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (minutes, seconds, frames) = self.msf();
        write!(f, "{:02}:{:02}:{:02}", minutes, seconds, frames)
    }
}

/// Lenient `MM:SS:FF` parsing: anything that is not three colon separated parts
/// is frame zero, and a part that is not a 32 bit number counts as zero.
impl FromStr for Frame {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Ok(Frame::ZERO);
        }

        let part = |p: &str| p.parse::<u32>().unwrap_or(0);
        Ok(Frame::from_msf(part(parts[0]), part(parts[1]), part(parts[2])))
    }
}
