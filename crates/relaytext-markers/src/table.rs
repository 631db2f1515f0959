//! The marker code table.
//!
//! Every code character of the marker alphabet is a [`MarkerCode`]
//! variant. The table mapping codes to ANSI suffixes is expressed as
//! `match` arms, so it is fixed at compile time.

/// Terminal foreground colors reachable from a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Gray,
    Red,
    Green,
    Yellow,
    Blue,
    Pink,
    Cyan,
    White,
}

impl AnsiColor {
    /// SGR foreground parameter (30-37).
    pub fn sgr_code(self) -> u8 {
        match self {
            AnsiColor::Gray => 30,
            AnsiColor::Red => 31,
            AnsiColor::Green => 32,
            AnsiColor::Yellow => 33,
            AnsiColor::Blue => 34,
            AnsiColor::Pink => 35,
            AnsiColor::Cyan => 36,
            AnsiColor::White => 37,
        }
    }

    /// The escape suffix without its leading control character.
    ///
    /// # Example
    ///
    /// ```
    /// use relaytext_markers::AnsiColor;
    /// assert_eq!(AnsiColor::Red.suffix(), "[31m");
    /// ```
    pub fn suffix(self) -> &'static str {
        match self {
            AnsiColor::Gray => "[30m",
            AnsiColor::Red => "[31m",
            AnsiColor::Green => "[32m",
            AnsiColor::Yellow => "[33m",
            AnsiColor::Blue => "[34m",
            AnsiColor::Pink => "[35m",
            AnsiColor::Cyan => "[36m",
            AnsiColor::White => "[37m",
        }
    }
}

/// What a marker code does once translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Switches the foreground color.
    Color(AnsiColor),
    /// Style or reset; has no ANSI counterpart and is dropped.
    Style,
    /// Legal code without a table entry (`8`).
    Unmapped,
}

/// One code character of the marker alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerCode {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

impl MarkerCode {
    /// All codes in alphabet order.
    pub const ALL: [MarkerCode; 22] = [
        MarkerCode::Black,
        MarkerCode::DarkBlue,
        MarkerCode::DarkGreen,
        MarkerCode::DarkAqua,
        MarkerCode::DarkRed,
        MarkerCode::DarkPurple,
        MarkerCode::Gold,
        MarkerCode::Gray,
        MarkerCode::DarkGray,
        MarkerCode::Blue,
        MarkerCode::Green,
        MarkerCode::Aqua,
        MarkerCode::Red,
        MarkerCode::LightPurple,
        MarkerCode::Yellow,
        MarkerCode::White,
        MarkerCode::Obfuscated,
        MarkerCode::Bold,
        MarkerCode::Strikethrough,
        MarkerCode::Underline,
        MarkerCode::Italic,
        MarkerCode::Reset,
    ];

    /// Look up the code for the character following the prefix.
    ///
    /// # Example
    ///
    /// ```
    /// use relaytext_markers::MarkerCode;
    /// assert_eq!(MarkerCode::from_char('c'), Some(MarkerCode::Red));
    /// assert_eq!(MarkerCode::from_char('C'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        let code = match c {
            '0' => MarkerCode::Black,
            '1' => MarkerCode::DarkBlue,
            '2' => MarkerCode::DarkGreen,
            '3' => MarkerCode::DarkAqua,
            '4' => MarkerCode::DarkRed,
            '5' => MarkerCode::DarkPurple,
            '6' => MarkerCode::Gold,
            '7' => MarkerCode::Gray,
            '8' => MarkerCode::DarkGray,
            '9' => MarkerCode::Blue,
            'a' => MarkerCode::Green,
            'b' => MarkerCode::Aqua,
            'c' => MarkerCode::Red,
            'd' => MarkerCode::LightPurple,
            'e' => MarkerCode::Yellow,
            'f' => MarkerCode::White,
            'k' => MarkerCode::Obfuscated,
            'l' => MarkerCode::Bold,
            'm' => MarkerCode::Strikethrough,
            'n' => MarkerCode::Underline,
            'o' => MarkerCode::Italic,
            'r' => MarkerCode::Reset,
            _ => return None,
        };
        Some(code)
    }

    /// The code character, without the prefix.
    pub fn as_char(self) -> char {
        match self {
            MarkerCode::Black => '0',
            MarkerCode::DarkBlue => '1',
            MarkerCode::DarkGreen => '2',
            MarkerCode::DarkAqua => '3',
            MarkerCode::DarkRed => '4',
            MarkerCode::DarkPurple => '5',
            MarkerCode::Gold => '6',
            MarkerCode::Gray => '7',
            MarkerCode::DarkGray => '8',
            MarkerCode::Blue => '9',
            MarkerCode::Green => 'a',
            MarkerCode::Aqua => 'b',
            MarkerCode::Red => 'c',
            MarkerCode::LightPurple => 'd',
            MarkerCode::Yellow => 'e',
            MarkerCode::White => 'f',
            MarkerCode::Obfuscated => 'k',
            MarkerCode::Bold => 'l',
            MarkerCode::Strikethrough => 'm',
            MarkerCode::Underline => 'n',
            MarkerCode::Italic => 'o',
            MarkerCode::Reset => 'r',
        }
    }

    /// The full two-character marker, e.g. `§c`.
    pub fn marker(self) -> &'static str {
        match self {
            MarkerCode::Black => "§0",
            MarkerCode::DarkBlue => "§1",
            MarkerCode::DarkGreen => "§2",
            MarkerCode::DarkAqua => "§3",
            MarkerCode::DarkRed => "§4",
            MarkerCode::DarkPurple => "§5",
            MarkerCode::Gold => "§6",
            MarkerCode::Gray => "§7",
            MarkerCode::DarkGray => "§8",
            MarkerCode::Blue => "§9",
            MarkerCode::Green => "§a",
            MarkerCode::Aqua => "§b",
            MarkerCode::Red => "§c",
            MarkerCode::LightPurple => "§d",
            MarkerCode::Yellow => "§e",
            MarkerCode::White => "§f",
            MarkerCode::Obfuscated => "§k",
            MarkerCode::Bold => "§l",
            MarkerCode::Strikethrough => "§m",
            MarkerCode::Underline => "§n",
            MarkerCode::Italic => "§o",
            MarkerCode::Reset => "§r",
        }
    }

    /// Classify the code.
    ///
    /// Several game colors share one terminal color: `§0` and `§7`
    /// both land on gray, the dark and light variants of a hue collapse.
    pub fn kind(self) -> MarkerKind {
        match self {
            MarkerCode::Black | MarkerCode::Gray => MarkerKind::Color(AnsiColor::Gray),
            MarkerCode::DarkBlue | MarkerCode::Blue => MarkerKind::Color(AnsiColor::Blue),
            MarkerCode::DarkGreen | MarkerCode::Green => MarkerKind::Color(AnsiColor::Green),
            MarkerCode::DarkAqua | MarkerCode::Aqua => MarkerKind::Color(AnsiColor::Cyan),
            MarkerCode::DarkRed | MarkerCode::Red => MarkerKind::Color(AnsiColor::Red),
            MarkerCode::DarkPurple | MarkerCode::LightPurple => MarkerKind::Color(AnsiColor::Pink),
            MarkerCode::Gold | MarkerCode::Yellow => MarkerKind::Color(AnsiColor::Yellow),
            MarkerCode::White => MarkerKind::Color(AnsiColor::White),
            MarkerCode::Obfuscated
            | MarkerCode::Bold
            | MarkerCode::Strikethrough
            | MarkerCode::Underline
            | MarkerCode::Italic
            | MarkerCode::Reset => MarkerKind::Style,
            MarkerCode::DarkGray => MarkerKind::Unmapped,
        }
    }

    /// The ANSI suffix this code translates to.
    ///
    /// `Some("")` for style codes, `None` for unmapped ones.
    pub fn ansi_suffix(self) -> Option<&'static str> {
        match self.kind() {
            MarkerKind::Color(color) => Some(color.suffix()),
            MarkerKind::Style => Some(""),
            MarkerKind::Unmapped => None,
        }
    }
}
