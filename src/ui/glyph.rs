//! Mapping from raw bytes to screen glyphs.

/// Default number of cells a tab token spans, counting its `\t`.
pub const TAB_WIDTH: usize = 4;

/// Widest tab token accepted from the command line or a config file.
pub const MAX_TAB_WIDTH: usize = 64;

/// Glyph drawn after a line's last byte.
pub const TERMINATOR: char = '\\';

/// How a single byte is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Printable ASCII, drawn as-is.
    Literal(char),
    /// Two-cell escape token such as `\b`.
    Escape(char),
    /// `\t` followed by blank padding.
    Tab,
    /// One special-styled cell standing in for a non-printable byte.
    Symbol(char),
}

impl Glyph {
    /// Classify a byte.
    pub fn of(byte: u8) -> Self {
        match byte {
            0x08 => Self::Escape('b'),
            0x0d => Self::Escape('r'),
            b'\t' => Self::Tab,
            0x20..=0x7e => Self::Literal(char::from(byte)),
            _ => Self::Symbol(symbol_for(byte)),
        }
    }

    /// Number of screen cells the glyph occupies.
    pub const fn width(self, tab_width: usize) -> usize {
        match self {
            Self::Literal(_) | Self::Symbol(_) => 1,
            Self::Escape(_) => 2,
            Self::Tab => tab_width.saturating_sub(1).saturating_add(2),
        }
    }

    /// Whether the glyph is drawn with the special style.
    pub const fn is_special(self) -> bool {
        !matches!(self, Self::Literal(_))
    }
}

/// Cell width of a byte.
pub fn width(byte: u8, tab_width: usize) -> usize {
    Glyph::of(byte).width(tab_width)
}

/// Total cell width of a byte run.
pub fn run_width(bytes: &[u8], tab_width: usize) -> usize {
    bytes
        .iter()
        .fold(0, |cells, &b| cells.saturating_add(width(b, tab_width)))
}

// C0 controls use the Unicode control pictures, Latin-1 keeps its own
// character; C1 controls and the soft hyphen have no stable single-cell form.
fn symbol_for(byte: u8) -> char {
    match byte {
        0x00..=0x1f => char::from_u32(0x2400 + u32::from(byte)).unwrap_or('?'),
        0x7f => '\u{2421}',
        0xa0..=0xff if byte != 0xad => char::from(byte),
        _ => '\u{00b7}',
    }
}
