use std::fmt;

/// Required state of a single trigger signal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// `'1'`: the signal must be present.
    Present,
    /// `'0'`: the signal must be absent.
    Absent,
    /// `'X'`: either state matches.
    DontCare,
}

impl Signal {
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Signal::Present),
            '0' => Some(Signal::Absent),
            'X' => Some(Signal::DontCare),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Signal::Present => '1',
            Signal::Absent => '0',
            Signal::DontCare => 'X',
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
