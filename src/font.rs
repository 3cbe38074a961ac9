//! Built-in glyph tables
//!
//! Two fixed fonts cover printable ASCII (`' '` to `'~'`):
//!
//! | Size | Columns | Pages | Chars per line |
//! |------|---------|-------|----------------|
//! | [`FontSize::Small`] | 6 | 1 | 21 |
//! | [`FontSize::Large`] | 8 | 2 | 16 |
//!
//! Glyphs are stored column-major in controller RAM order: each byte is one
//! column, bit 0 at the top. Large glyphs hold the 8 top-page columns followed
//! by the 8 bottom-page columns.
//!
//! Characters outside the table render as a blank glyph.

/// First character code in both tables
pub const FIRST_CHAR: u8 = b' ';

/// Last character code in both tables
pub const LAST_CHAR: u8 = b'~';

/// Number of glyphs per table
pub const GLYPH_COUNT: usize = (LAST_CHAR - FIRST_CHAR) as usize + 1;

/// Text size
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FontSize {
    /// 6x8 glyphs, one page tall
    Small,
    /// 8x16 glyphs, two pages tall
    Large,
}

impl FontSize {
    /// Map the numeric size used by the command layer (1 or 2)
    ///
    /// Any other value has no font and yields `None`.
    pub fn from_raw(size: u8) -> Option<Self> {
        match size {
            1 => Some(Self::Small),
            2 => Some(Self::Large),
            _ => None,
        }
    }

    /// Glyph width in columns
    pub fn glyph_width(self) -> u8 {
        match self {
            Self::Small => 6,
            Self::Large => 8,
        }
    }

    /// Number of pages a glyph covers
    pub fn pages(self) -> u8 {
        match self {
            Self::Small => 1,
            Self::Large => 2,
        }
    }

    /// Characters in one full-width line
    pub fn line_budget(self) -> usize {
        match self {
            Self::Small => 21,
            Self::Large => 16,
        }
    }

    /// Largest starting column before a glyph wraps to the next page
    pub fn wrap_threshold(self) -> u16 {
        match self {
            Self::Small => 126,
            Self::Large => 120,
        }
    }

    /// Pixel column of character cell `cell`
    pub fn pixel_column(self, cell: u8) -> u16 {
        u16::from(cell) * u16::from(self.glyph_width())
    }
}

fn glyph_index(ch: char) -> usize {
    match u8::try_from(ch) {
        Ok(code) if (FIRST_CHAR..=LAST_CHAR).contains(&code) => (code - FIRST_CHAR) as usize,
        _ => 0,
    }
}

/// Columns of the 6x8 glyph for `ch`
pub fn small_glyph(ch: char) -> &'static [u8; 6] {
    &FONT_6X8[glyph_index(ch)]
}

/// Columns of the 8x16 glyph for `ch`: top page then bottom page
pub fn large_glyph(ch: char) -> &'static [u8; 16] {
    &FONT_8X16[glyph_index(ch)]
}

/// 6x8 font, one entry per character from `' '` to `'~'`
#[rustfmt::skip]
pub static FONT_6X8: [[u8; 6]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x00, 0x2F, 0x00, 0x00], // !
    [0x00, 0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x00, 0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x00, 0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x00, 0x62, 0x64, 0x08, 0x13, 0x23], // %
    [0x00, 0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x00, 0x14, 0x08, 0x3E, 0x08, 0x14], // *
    [0x00, 0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x00, 0x00, 0xA0, 0x60, 0x00], // ,
    [0x00, 0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x00, 0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x00, 0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x00, 0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x00, 0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x00, 0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x00, 0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x00, 0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x00, 0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x00, 0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x00, 0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x00, 0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x00, 0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x00, 0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x00, 0x32, 0x49, 0x59, 0x51, 0x3E], // @
    [0x00, 0x7C, 0x12, 0x11, 0x12, 0x7C], // A
    [0x00, 0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x00, 0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x00, 0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x00, 0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x00, 0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x00, 0x3E, 0x41, 0x49, 0x49, 0x7A], // G
    [0x00, 0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x00, 0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x00, 0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x00, 0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x00, 0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
    [0x00, 0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x00, 0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x00, 0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x00, 0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x00, 0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x00, 0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x00, 0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x00, 0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x00, 0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x00, 0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x00, 0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x00, 0x07, 0x08, 0x70, 0x08, 0x07], // Y
    [0x00, 0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x00, 0x02, 0x04, 0x08, 0x10, 0x20], // \
    [0x00, 0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x00, 0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x00, 0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x00, 0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x00, 0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x00, 0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x00, 0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x00, 0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x00, 0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x00, 0x18, 0xA4, 0xA4, 0xA4, 0x7C], // g
    [0x00, 0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x00, 0x40, 0x80, 0x84, 0x7D, 0x00], // j
    [0x00, 0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x00, 0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x00, 0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x00, 0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x00, 0xFC, 0x24, 0x24, 0x24, 0x18], // p
    [0x00, 0x18, 0x24, 0x24, 0x18, 0xFC], // q
    [0x00, 0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x00, 0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x00, 0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x00, 0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x00, 0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x00, 0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x00, 0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x00, 0x1C, 0xA0, 0xA0, 0xA0, 0x7C], // y
    [0x00, 0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x00, 0x08, 0x04, 0x08, 0x10, 0x08], // ~
];

/// 8x16 font, one entry per character from `' '` to `'~'`
#[rustfmt::skip]
pub static FONT_8X16: [[u8; 16]; GLYPH_COUNT] = [
    [0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00, 0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00], // ' '
    [0x00,0x00,0x00,0xF8,0x00,0x00,0x00,0x00, 0x00,0x00,0x00,0x33,0x30,0x00,0x00,0x00], // !
    [0x00,0x10,0x0C,0x06,0x10,0x0C,0x06,0x00, 0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00], // "
    [0x40,0xC0,0x78,0x40,0xC0,0x78,0x40,0x00, 0x04,0x3F,0x04,0x04,0x3F,0x04,0x04,0x00], // #
    [0x00,0x70,0x88,0xFC,0x08,0x30,0x00,0x00, 0x00,0x18,0x20,0xFF,0x21,0x1E,0x00,0x00], // $
    [0xF0,0x08,0xF0,0x00,0xE0,0x18,0x00,0x00, 0x00,0x21,0x1C,0x03,0x1E,0x21,0x1E,0x00], // %
    [0x00,0xF0,0x08,0x88,0x70,0x00,0x00,0x00, 0x1E,0x21,0x23,0x24,0x19,0x27,0x21,0x10], // &
    [0x10,0x16,0x0E,0x00,0x00,0x00,0x00,0x00, 0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00], // '
    [0x00,0x00,0x00,0xE0,0x18,0x04,0x02,0x00, 0x00,0x00,0x00,0x07,0x18,0x20,0x40,0x00], // (
    [0x00,0x02,0x04,0x18,0xE0,0x00,0x00,0x00, 0x00,0x40,0x20,0x18,0x07,0x00,0x00,0x00], // )
    [0x40,0x40,0x80,0xF0,0x80,0x40,0x40,0x00, 0x02,0x02,0x01,0x0F,0x01,0x02,0x02,0x00], // *
    [0x00,0x00,0x00,0xF0,0x00,0x00,0x00,0x00, 0x01,0x01,0x01,0x1F,0x01,0x01,0x01,0x00], // +
    [0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00, 0x80,0xB0,0x70,0x00,0x00,0x00,0x00,0x00], // ,
    [0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00, 0x00,0x01,0x01,0x01,0x01,0x01,0x01,0x01], // -
    [0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00, 0x00,0x30,0x30,0x00,0x00,0x00,0x00,0x00], // .
    [0x00,0x00,0x00,0x00,0x80,0x60,0x18,0x04, 0x00,0x60,0x18,0x06,0x01,0x00,0x00,0x00], // /
    [0x00,0xE0,0x10,0x08,0x08,0x10,0xE0,0x00, 0x00,0x0F,0x10,0x20,0x20,0x10,0x0F,0x00], // 0
    [0x00,0x10,0x10,0xF8,0x00,0x00,0x00,0x00, 0x00,0x20,0x20,0x3F,0x20,0x20,0x00,0x00], // 1
    [0x00,0x70,0x08,0x08,0x08,0x88,0x70,0x00, 0x00,0x30,0x28,0x24,0x22,0x21,0x30,0x00], // 2
    [0x00,0x30,0x08,0x88,0x88,0x48,0x30,0x00, 0x00,0x18,0x20,0x20,0x20,0x11,0x0E,0x00], // 3
    [0x00,0x00,0xC0,0x20,0x10,0xF8,0x00,0x00, 0x00,0x07,0x04,0x24,0x24,0x3F,0x24,0x00], // 4
    [0x00,0xF8,0x08,0x88,0x88,0x08,0x08,0x00, 0x00,0x19,0x21,0x20,0x20,0x11,0x0E,0x00], // 5
    [0x00,0xE0,0x10,0x88,0x88,0x18,0x00,0x00, 0x00,0x0F,0x11,0x20,0x20,0x11,0x0E,0x00], // 6
    [0x00,0x38,0x08,0x08,0xC8,0x38,0x08,0x00, 0x00,0x00,0x00,0x3F,0x00,0x00,0x00,0x00], // 7
    [0x00,0x70,0x88,0x08,0x08,0x88,0x70,0x00, 0x00,0x1C,0x22,0x21,0x21,0x22,0x1C,0x00], // 8
    [0x00,0xE0,0x10,0x08,0x08,0x10,0xE0,0x00, 0x00,0x00,0x31,0x22,0x22,0x11,0x0F,0x00], // 9
    [0x00,0x00,0x00,0xC0,0xC0,0x00,0x00,0x00, 0x00,0x00,0x00,0x30,0x30,0x00,0x00,0x00], // :
    [0x00,0x00,0x00,0x80,0x00,0x00,0x00,0x00, 0x00,0x00,0x80,0x60,0x00,0x00,0x00,0x00], // ;
    [0x00,0x00,0x80,0x40,0x20,0x10,0x08,0x00, 0x00,0x01,0x02,0x04,0x08,0x10,0x20,0x00], // <
    [0x40,0x40,0x40,0x40,0x40,0x40,0x40,0x00, 0x04,0x04,0x04,0x04,0x04,0x04,0x04,0x00], // =
    [0x00,0x08,0x10,0x20,0x40,0x80,0x00,0x00, 0x00,0x20,0x10,0x08,0x04,0x02,0x01,0x00], // >
    [0x00,0x70,0x48,0x08,0x08,0x08,0xF0,0x00, 0x00,0x00,0x00,0x30,0x36,0x01,0x00,0x00], // ?
    [0xC0,0x30,0xC8,0x28,0xE8,0x10,0xE0,0x00, 0x07,0x18,0x27,0x24,0x23,0x14,0x0B,0x00], // @
    [0x00,0x00,0xC0,0x38,0xE0,0x00,0x00,0x00, 0x20,0x3C,0x23,0x02,0x02,0x27,0x38,0x20], // A
    [0x08,0xF8,0x88,0x88,0x88,0x70,0x00,0x00, 0x20,0x3F,0x20,0x20,0x20,0x11,0x0E,0x00], // B
    [0xC0,0x30,0x08,0x08,0x08,0x08,0x38,0x00, 0x07,0x18,0x20,0x20,0x20,0x10,0x08,0x00], // C
    [0x08,0xF8,0x08,0x08,0x08,0x10,0xE0,0x00, 0x20,0x3F,0x20,0x20,0x20,0x10,0x0F,0x00], // D
    [0x08,0xF8,0x88,0x88,0xE8,0x08,0x10,0x00, 0x20,0x3F,0x20,0x20,0x23,0x20,0x18,0x00], // E
    [0x08,0xF8,0x88,0x88,0xE8,0x08,0x10,0x00, 0x20,0x3F,0x20,0x00,0x03,0x00,0x00,0x00], // F
    [0xC0,0x30,0x08,0x08,0x08,0x38,0x00,0x00, 0x07,0x18,0x20,0x20,0x22,0x1E,0x02,0x00], // G
    [0x08,0xF8,0x08,0x00,0x00,0x08,0xF8,0x08, 0x20,0x3F,0x21,0x01,0x01,0x21,0x3F,0x20], // H
    [0x00,0x08,0x08,0xF8,0x08,0x08,0x00,0x00, 0x00,0x20,0x20,0x3F,0x20,0x20,0x00,0x00], // I
    [0x00,0x00,0x08,0x08,0xF8,0x08,0x08,0x00, 0xC0,0x80,0x80,0x80,0x7F,0x00,0x00,0x00], // J
    [0x08,0xF8,0x88,0xC0,0x28,0x18,0x08,0x00, 0x20,0x3F,0x20,0x01,0x26,0x38,0x20,0x00], // K
    [0x08,0xF8,0x08,0x00,0x00,0x00,0x00,0x00, 0x20,0x3F,0x20,0x20,0x20,0x20,0x30,0x00], // L
    [0x08,0xF8,0xF8,0x00,0xF8,0xF8,0x08,0x00, 0x20,0x3F,0x00,0x3F,0x00,0x3F,0x20,0x00], // M
    [0x08,0xF8,0x30,0xC0,0x00,0x08,0xF8,0x08, 0x20,0x3F,0x20,0x00,0x07,0x18,0x3F,0x00], // N
    [0xE0,0x10,0x08,0x08,0x08,0x10,0xE0,0x00, 0x0F,0x10,0x20,0x20,0x20,0x10,0x0F,0x00], // O
    [0x08,0xF8,0x08,0x08,0x08,0x08,0xF0,0x00, 0x20,0x3F,0x21,0x01,0x01,0x01,0x00,0x00], // P
    [0xE0,0x10,0x08,0x08,0x08,0x10,0xE0,0x00, 0x0F,0x18,0x24,0x24,0x38,0x50,0x4F,0x00], // Q
    [0x08,0xF8,0x88,0x88,0x88,0x88,0x70,0x00, 0x20,0x3F,0x20,0x00,0x03,0x0C,0x30,0x20], // R
    [0x00,0x70,0x88,0x08,0x08,0x08,0x38,0x00, 0x00,0x38,0x20,0x21,0x21,0x22,0x1C,0x00], // S
    [0x18,0x08,0x08,0xF8,0x08,0x08,0x18,0x00, 0x00,0x00,0x20,0x3F,0x20,0x00,0x00,0x00], // T
    [0x08,0xF8,0x08,0x00,0x00,0x08,0xF8,0x08, 0x00,0x1F,0x20,0x20,0x20,0x20,0x1F,0x00], // U
    [0x08,0x78,0x88,0x00,0x00,0xC8,0x38,0x08, 0x00,0x00,0x07,0x38,0x0E,0x01,0x00,0x00], // V
    [0xF8,0x08,0x00,0xF8,0x00,0x08,0xF8,0x00, 0x03,0x3C,0x07,0x00,0x07,0x3C,0x03,0x00], // W
    [0x08,0x18,0x68,0x80,0x80,0x68,0x18,0x08, 0x20,0x30,0x2C,0x03,0x03,0x2C,0x30,0x20], // X
    [0x08,0x38,0xC8,0x00,0xC8,0x38,0x08,0x00, 0x00,0x00,0x20,0x3F,0x20,0x00,0x00,0x00], // Y
    [0x10,0x08,0x08,0x08,0xC8,0x38,0x08,0x00, 0x20,0x38,0x26,0x21,0x20,0x20,0x18,0x00], // Z
    [0x00,0x00,0x00,0xFE,0x02,0x02,0x02,0x00, 0x00,0x00,0x00,0x7F,0x40,0x40,0x40,0x00], // [
    [0x00,0x0C,0x30,0xC0,0x00,0x00,0x00,0x00, 0x00,0x00,0x00,0x01,0x06,0x38,0xC0,0x00], // \
    [0x00,0x02,0x02,0x02,0xFE,0x00,0x00,0x00, 0x00,0x40,0x40,0x40,0x7F,0x00,0x00,0x00], // ]
    [0x00,0x00,0x04,0x02,0x02,0x02,0x04,0x00, 0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00], // ^
    [0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00, 0x80,0x80,0x80,0x80,0x80,0x80,0x80,0x80], // _
    [0x00,0x02,0x02,0x04,0x00,0x00,0x00,0x00, 0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00], // `
    [0x00,0x00,0x80,0x80,0x80,0x80,0x00,0x00, 0x00,0x19,0x24,0x22,0x22,0x22,0x3F,0x20], // a
    [0x08,0xF8,0x00,0x80,0x80,0x00,0x00,0x00, 0x00,0x3F,0x11,0x20,0x20,0x11,0x0E,0x00], // b
    [0x00,0x00,0x00,0x80,0x80,0x80,0x00,0x00, 0x00,0x0E,0x11,0x20,0x20,0x20,0x11,0x00], // c
    [0x00,0x00,0x00,0x80,0x80,0x88,0xF8,0x00, 0x00,0x0E,0x11,0x20,0x20,0x10,0x3F,0x20], // d
    [0x00,0x00,0x80,0x80,0x80,0x80,0x00,0x00, 0x00,0x1F,0x22,0x22,0x22,0x22,0x13,0x00], // e
    [0x00,0x80,0x80,0xF0,0x88,0x88,0x88,0x18, 0x00,0x20,0x20,0x3F,0x20,0x20,0x00,0x00], // f
    [0x00,0x00,0x80,0x80,0x80,0x80,0x80,0x00, 0x00,0x6B,0x94,0x94,0x94,0x93,0x60,0x00], // g
    [0x08,0xF8,0x00,0x80,0x80,0x80,0x00,0x00, 0x20,0x3F,0x21,0x00,0x00,0x20,0x3F,0x20], // h
    [0x00,0x80,0x98,0x98,0x00,0x00,0x00,0x00, 0x00,0x20,0x20,0x3F,0x20,0x20,0x00,0x00], // i
    [0x00,0x00,0x00,0x80,0x98,0x98,0x00,0x00, 0x00,0xC0,0x80,0x80,0x80,0x7F,0x00,0x00], // j
    [0x08,0xF8,0x00,0x00,0x80,0x80,0x80,0x00, 0x20,0x3F,0x24,0x02,0x2D,0x30,0x20,0x00], // k
    [0x00,0x08,0x08,0xF8,0x00,0x00,0x00,0x00, 0x00,0x20,0x20,0x3F,0x20,0x20,0x00,0x00], // l
    [0x80,0x80,0x80,0x80,0x80,0x80,0x80,0x00, 0x20,0x3F,0x20,0x00,0x3F,0x20,0x00,0x3F], // m
    [0x80,0x80,0x00,0x80,0x80,0x80,0x00,0x00, 0x20,0x3F,0x21,0x00,0x00,0x20,0x3F,0x20], // n
    [0x00,0x00,0x80,0x80,0x80,0x80,0x00,0x00, 0x00,0x1F,0x20,0x20,0x20,0x20,0x1F,0x00], // o
    [0x80,0x80,0x00,0x80,0x80,0x00,0x00,0x00, 0x80,0xFF,0xA1,0x20,0x20,0x11,0x0E,0x00], // p
    [0x00,0x00,0x00,0x80,0x80,0x80,0x80,0x00, 0x00,0x0E,0x11,0x20,0x20,0xA0,0xFF,0x80], // q
    [0x80,0x80,0x80,0x00,0x80,0x80,0x80,0x00, 0x20,0x20,0x3F,0x21,0x20,0x00,0x01,0x00], // r
    [0x00,0x00,0x80,0x80,0x80,0x80,0x80,0x00, 0x00,0x33,0x24,0x24,0x24,0x24,0x19,0x00], // s
    [0x00,0x80,0x80,0xE0,0x80,0x80,0x00,0x00, 0x00,0x00,0x00,0x1F,0x20,0x20,0x00,0x00], // t
    [0x80,0x80,0x00,0x00,0x00,0x80,0x80,0x00, 0x00,0x1F,0x20,0x20,0x20,0x10,0x3F,0x20], // u
    [0x80,0x80,0x80,0x00,0x00,0x80,0x80,0x80, 0x00,0x01,0x0E,0x30,0x08,0x06,0x01,0x00], // v
    [0x80,0x80,0x00,0x80,0x00,0x80,0x80,0x80, 0x0F,0x30,0x0C,0x03,0x0C,0x30,0x0F,0x00], // w
    [0x00,0x80,0x80,0x00,0x80,0x80,0x80,0x00, 0x00,0x20,0x31,0x2E,0x0E,0x31,0x20,0x00], // x
    [0x80,0x80,0x80,0x00,0x00,0x80,0x80,0x80, 0x80,0x81,0x8E,0x70,0x18,0x06,0x01,0x00], // y
    [0x00,0x80,0x80,0x80,0x80,0x80,0x80,0x00, 0x00,0x21,0x30,0x2C,0x22,0x21,0x30,0x00], // z
    [0x00,0x00,0x00,0x00,0x80,0x7C,0x02,0x02, 0x00,0x00,0x00,0x00,0x00,0x3F,0x40,0x40], // {
    [0x00,0x00,0x00,0x00,0xFF,0x00,0x00,0x00, 0x00,0x00,0x00,0x00,0xFF,0x00,0x00,0x00], // |
    [0x00,0x02,0x02,0x7C,0x80,0x00,0x00,0x00, 0x00,0x40,0x40,0x3F,0x00,0x00,0x00,0x00], // }
    [0x00,0x06,0x01,0x01,0x02,0x02,0x04,0x04, 0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00], // ~
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        assert_eq!(FontSize::from_raw(1), Some(FontSize::Small));
        assert_eq!(FontSize::from_raw(2), Some(FontSize::Large));
        assert_eq!(FontSize::from_raw(0), None);
        assert_eq!(FontSize::from_raw(3), None);
    }

    #[test]
    fn test_pixel_column_scaling() {
        assert_eq!(FontSize::Small.pixel_column(5), 30);
        assert_eq!(FontSize::Large.pixel_column(5), 40);
        assert_eq!(FontSize::Small.pixel_column(255), 1530);
    }

    #[test]
    fn test_line_budget_fills_one_row() {
        let small = FontSize::Small;
        let large = FontSize::Large;
        assert_eq!(small.line_budget(), 21);
        assert_eq!(large.line_budget(), 16);
        // Last glyph of a full line still starts before the wrap threshold
        assert!((small.line_budget() as u16 - 1) * 6 <= small.wrap_threshold());
        assert!((large.line_budget() as u16 - 1) * 8 <= large.wrap_threshold());
    }

    #[test]
    fn test_space_is_blank() {
        assert_eq!(small_glyph(' '), &[0u8; 6]);
        assert_eq!(large_glyph(' '), &[0u8; 16]);
    }

    #[test]
    fn test_out_of_table_chars_fall_back_to_blank() {
        assert_eq!(small_glyph('\n'), &[0u8; 6]);
        assert_eq!(small_glyph('\u{7F}'), &[0u8; 6]);
        assert_eq!(large_glyph('é'), &[0u8; 16]);
    }

    #[test]
    fn test_glyph_lookup_offsets_from_space() {
        assert_eq!(small_glyph('A'), &FONT_6X8[33]);
        assert_eq!(large_glyph('A'), &FONT_8X16[33]);
        assert_eq!(small_glyph('~'), &FONT_6X8[GLYPH_COUNT - 1]);
    }

    #[test]
    fn test_small_glyphs_leave_first_column_blank() {
        for glyph in FONT_6X8.iter() {
            assert_eq!(glyph[0], 0x00);
        }
    }

    #[test]
    fn test_every_printable_large_glyph_has_ink() {
        for (i, glyph) in FONT_8X16.iter().enumerate().skip(1) {
            assert!(glyph.iter().any(|b| *b != 0), "glyph {i} is empty");
        }
    }
}
