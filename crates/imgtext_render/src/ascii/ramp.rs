use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::{InvalidInput, RenderError};

const LOW: &[char] = &[' ', '.', '+', '#', '@'];

const SIMPLE: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '%', '#', '@'];

const HIGH: &[char] = &[
    ' ', '.', '\'', '`', '^', '"', ',', ':', ';', 'I', 'l', '!', 'i', '>', '<', '~', '+', '_',
    '-', '?', ']', '[', '}', '{', '1', ')', '(', '|', '\\', '/', 't', 'f', 'j', 'r', 'x', 'n',
    'u', 'v', 'c', 'z', 'X', 'Y', 'U', 'J', 'C', 'L', 'Q', '0', 'O', 'Z', 'm', 'w', 'q', 'p',
    'd', 'b', 'k', 'h', 'a', 'o', '*', '#', 'M', 'W', '&', '8', '%', 'B', '@', '$',
];

/// Built-in glyph ramps, ordered from darkest to lightest glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RampKind {
    Low,
    #[default]
    Simple,
    High,
}

impl RampKind {
    pub const ALL: [RampKind; 3] = [RampKind::Low, RampKind::Simple, RampKind::High];

    pub fn name(self) -> &'static str {
        match self {
            RampKind::Low => "low",
            RampKind::Simple => "simple",
            RampKind::High => "high",
        }
    }

    pub fn glyphs(self) -> &'static [char] {
        match self {
            RampKind::Low => LOW,
            RampKind::Simple => SIMPLE,
            RampKind::High => HIGH,
        }
    }

    pub fn ramp(self) -> Ramp {
        Ramp { glyphs: Cow::Borrowed(self.glyphs()) }
    }
}

impl fmt::Display for RampKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RampKind {
    type Err = RenderError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        RampKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| RenderError::InvalidInput(InvalidInput::UnknownRamp(name.to_owned())))
    }
}

/// An ordered glyph sequence; index 0 is the darkest glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ramp {
    glyphs: Cow<'static, [char]>,
}

impl Ramp {
    /// Build a ramp from caller-supplied glyphs, darkest first.
    pub fn new(glyphs: impl Into<String>) -> Result<Self, RenderError> {
        let glyphs: Vec<char> = glyphs.into().chars().collect();
        if glyphs.len() < 2 {
            return Err(RenderError::InvalidInput(InvalidInput::RampTooShort(glyphs.len())));
        }
        Ok(Self { glyphs: Cow::Owned(glyphs) })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index.min(self.glyphs.len() - 1)]
    }

    /// Position of `glyph` in the ramp, if present.
    pub fn position(&self, glyph: char) -> Option<usize> {
        self.glyphs.iter().position(|&candidate| candidate == glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ramps_start_dark_and_end_light() {
        for kind in RampKind::ALL {
            let ramp = kind.ramp();
            assert!(ramp.len() >= 2);
            assert_eq!(ramp.glyph(0), ' ');
        }
        assert_eq!(RampKind::Simple.ramp().glyph(9), '@');
        assert_eq!(RampKind::High.ramp().len(), 70);
        assert_eq!(RampKind::High.ramp().glyph(69), '$');
    }

    #[test]
    fn glyph_index_is_clamped() {
        let ramp = RampKind::Low.ramp();
        assert_eq!(ramp.glyph(100), '@');
    }

    #[test]
    fn parse_ramp_names() {
        assert_eq!("low".parse::<RampKind>().unwrap(), RampKind::Low);
        assert_eq!("HIGH".parse::<RampKind>().unwrap(), RampKind::High);
        for kind in RampKind::ALL {
            assert_eq!(kind.to_string().parse::<RampKind>().unwrap(), kind);
        }

        let err = "sepia".parse::<RampKind>().unwrap_err();
        assert!(matches!(err, RenderError::InvalidInput(InvalidInput::UnknownRamp(_))));
    }

    #[test]
    fn custom_ramp_needs_two_glyphs() {
        let err = Ramp::new("#").unwrap_err();
        assert!(matches!(err, RenderError::InvalidInput(InvalidInput::RampTooShort(1))));

        let ramp = Ramp::new(" ░▒▓█").unwrap();
        assert_eq!(ramp.len(), 5);
        assert_eq!(ramp.position('▒'), Some(2));
    }
}
