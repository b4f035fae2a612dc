//! Staggered entrance ("flyin") schedules for segmented characters.
//!
//! A plan turns the character paths returned by [`crate::segment`] into one
//! timing entry per character: when it starts, how long it takes and the
//! keyframe it animates from. It is pure data; driving a clock and applying
//! the keyframes is left to the host.
//!
//! ```
//! use theatre_text::{Container, FlyinPlan, FlyinStyle, segment};
//!
//! let mut container = Container::with_font_size("20px");
//! let chars = segment("Hi!", "en", &mut container);
//! let timings = FlyinPlan::new(FlyinStyle::Fadein).speed_ms(25).schedule(&chars);
//!
//! assert_eq!(timings[2].delay_ms, 50);
//! assert_eq!(timings[2].path, chars[2]);
//! ```

use crate::error::{Error, Result};
use crate::node::CharPath;

/// Default delay between consecutive characters.
pub const DEFAULT_SPEED_MS: u32 = 30;

/// Entrance animation style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlyinStyle {
    /// Characters pop in one after another.
    #[default]
    Typewriter,
    Fadein,
    /// Rise from slightly below the baseline.
    Slideup,
    Scalein,
    /// Drop in from above.
    Fall,
    Spin,
    /// Shrink into place from an enlarged outline.
    Outline,
    /// Spiral in from alternating sides.
    Vortex,
    /// Converge from scattered positions.
    Assemble,
    /// Fade in starting from the last character.
    Reverse,
}

impl FlyinStyle {
    /// All styles, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Typewriter,
        Self::Fadein,
        Self::Slideup,
        Self::Scalein,
        Self::Fall,
        Self::Spin,
        Self::Outline,
        Self::Vortex,
        Self::Assemble,
        Self::Reverse,
    ];

    /// Parse a style name.
    pub fn from_name(name: &str) -> Result<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.name() == name)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown flyin style: {name}")))
    }

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Typewriter => "typewriter",
            Self::Fadein => "fadein",
            Self::Slideup => "slideup",
            Self::Scalein => "scalein",
            Self::Fall => "fall",
            Self::Spin => "spin",
            Self::Outline => "outline",
            Self::Vortex => "vortex",
            Self::Assemble => "assemble",
            Self::Reverse => "reverse",
        }
    }

    /// Duration of one character's entrance.
    #[must_use]
    pub const fn duration_ms(self) -> u32 {
        match self {
            Self::Typewriter => 0,
            Self::Fadein | Self::Reverse | Self::Fall => 400,
            Self::Slideup | Self::Scalein | Self::Outline => 300,
            Self::Spin => 500,
            Self::Vortex | Self::Assemble => 600,
        }
    }

    /// Keyframe the character at `index` starts from.
    #[must_use]
    pub fn from_keyframe(self, index: usize) -> Keyframe {
        let hidden = Keyframe {
            opacity: 0.0,
            ..Keyframe::REST
        };
        match self {
            Self::Typewriter | Self::Fadein | Self::Reverse => hidden,
            Self::Slideup => Keyframe {
                y_em: 0.5,
                ..hidden
            },
            Self::Scalein => Keyframe {
                scale: 0.0,
                ..hidden
            },
            Self::Fall => Keyframe {
                y_em: -1.5,
                ..hidden
            },
            Self::Spin => Keyframe {
                scale: 0.0,
                rotation_deg: -360.0,
                ..hidden
            },
            Self::Outline => Keyframe {
                scale: 1.5,
                ..hidden
            },
            Self::Vortex => Keyframe {
                x_em: if index % 2 == 0 { -1.0 } else { 1.0 },
                scale: 0.0,
                rotation_deg: 720.0,
                ..hidden
            },
            Self::Assemble => {
                let (x, y) = scatter(index);
                Keyframe {
                    x_em: x,
                    y_em: y,
                    ..hidden
                }
            }
        }
    }
}

/// Deterministic offsets in `[-2, 2)` em for the assemble style.
fn scatter(index: usize) -> (f32, f32) {
    let mut state = (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ 0xD1B5_4A32_D192_ED03;
    let mut next = || {
        state ^= state >> 33;
        state = state.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
        state ^= state >> 33;
        (state % 4000) as f32 / 1000.0 - 2.0
    };
    let x = next();
    let y = next();
    (x, y)
}

/// Visual state of a character at the start (or end) of its entrance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub opacity: f32,
    /// Horizontal offset in em.
    pub x_em: f32,
    /// Vertical offset in em, positive is down.
    pub y_em: f32,
    pub scale: f32,
    pub rotation_deg: f32,
}

impl Keyframe {
    /// The resting state every entrance ends in.
    pub const REST: Self = Self {
        opacity: 1.0,
        x_em: 0.0,
        y_em: 0.0,
        scale: 1.0,
        rotation_deg: 0.0,
    };
}

/// Timing of one character's entrance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharTiming {
    pub path: CharPath,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub from: Keyframe,
}

impl CharTiming {
    /// Time at which this character is at rest.
    #[must_use]
    pub const fn end_ms(&self) -> u32 {
        self.delay_ms.saturating_add(self.duration_ms)
    }
}

/// Builder for a staggered entrance schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlyinPlan {
    style: FlyinStyle,
    speed_ms: u32,
}

impl Default for FlyinPlan {
    fn default() -> Self {
        Self::new(FlyinStyle::default())
    }
}

impl FlyinPlan {
    /// Create a plan with the default stagger.
    #[must_use]
    pub const fn new(style: FlyinStyle) -> Self {
        Self {
            style,
            speed_ms: DEFAULT_SPEED_MS,
        }
    }

    /// Set the delay between consecutive characters.
    #[must_use]
    pub const fn speed_ms(mut self, speed_ms: u32) -> Self {
        self.speed_ms = speed_ms;
        self
    }

    /// The style of this plan.
    #[must_use]
    pub const fn style(&self) -> FlyinStyle {
        self.style
    }

    /// One timing per path, in the order given.
    #[must_use]
    pub fn schedule(&self, paths: &[CharPath]) -> Vec<CharTiming> {
        let count = paths.len();
        paths
            .iter()
            .enumerate()
            .map(|(index, &path)| {
                let slot = if self.style == FlyinStyle::Reverse {
                    count - 1 - index
                } else {
                    index
                };
                CharTiming {
                    path,
                    delay_ms: stagger(slot, self.speed_ms),
                    duration_ms: self.style.duration_ms(),
                    from: self.style.from_keyframe(index),
                }
            })
            .collect()
    }

    /// Time until every one of `count` characters is at rest.
    #[must_use]
    pub fn total_ms(&self, count: usize) -> u32 {
        if count == 0 {
            return 0;
        }
        stagger(count - 1, self.speed_ms).saturating_add(self.style.duration_ms())
    }
}

fn stagger(slot: usize, speed_ms: u32) -> u32 {
    u32::try_from(slot)
        .unwrap_or(u32::MAX)
        .saturating_mul(speed_ms)
}
