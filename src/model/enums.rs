//! Document enums.
//!
//! Every enum here is a closed set validated on assignment, except
//! [`SymbolName`], which by long-standing writer convention also accepts
//! raw code points.

use crate::values::{dom_enum, DomEnum};
use serde::Serialize;

dom_enum! {
    /// Horizontal alignment of a paragraph.
    ParagraphAlignment {
        Left = 0,
        Center = 1,
        Right = 2,
        Justify = 3,
    }
}

dom_enum! {
    /// Underline decoration of a font.
    Underline {
        None = 0,
        Single = 1,
        Words = 2,
        Dotted = 3,
        Dash = 4,
        DotDash = 5,
        DotDotDash = 6,
    }
}

dom_enum! {
    /// Line style of a single border edge.
    BorderStyle {
        None = 0,
        Single = 1,
        Dot = 2,
        DashSmallGap = 3,
        DashLargeGap = 4,
        DashDot = 5,
        DashDotDot = 6,
    }
}

dom_enum! {
    /// How text is positioned relative to a tab stop.
    TabAlignment {
        Left = 0,
        Center = 1,
        Right = 2,
        Decimal = 3,
    }
}

dom_enum! {
    /// Fill characters leading up to a tab stop.
    TabLeader {
        Spaces = 0,
        Dots = 1,
        Dashes = 2,
        Lines = 3,
        MiddleDot = 4,
        Heavy = 5,
    }
}

dom_enum! {
    /// Page orientation.
    Orientation {
        Portrait = 0,
        Landscape = 1,
    }
}

dom_enum! {
    /// Outline level of a paragraph, used for document structure.
    OutlineLevel {
        BodyText = 0,
        Level1 = 1,
        Level2 = 2,
        Level3 = 3,
        Level4 = 4,
        Level5 = 5,
        Level6 = 6,
    }
}

dom_enum! {
    /// Whether a style applies to whole paragraphs or character runs.
    StyleType {
        Paragraph = 0,
        Character = 1,
    }
}

dom_enum! {
    /// Chart flavor.
    ChartType {
        Line = 0,
        Column2D = 1,
        ColumnStacked2D = 2,
        Bar2D = 3,
        BarStacked2D = 4,
        Area2D = 5,
        Pie2D = 6,
    }
}

/// A named special character.
///
/// This is the one open-set document enum: besides the named members,
/// any non-negative raw value is accepted as a literal code point via
/// [`SymbolName::Chr`]. Writers have always emitted `\symbol(0x20AC)`
/// style markup for arbitrary characters, so assignment must not reject
/// undeclared values here. Do not tighten this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolName {
    Blank,
    En,
    Em,
    QuarterEm,
    NonBreakableBlank,
    Bullet,
    Copyright,
    EmDash,
    EnDash,
    Euro,
    Not,
    RegisteredTrademark,
    Trademark,
    /// A literal Unicode code point.
    Chr(u32),
}

impl Default for SymbolName {
    fn default() -> Self {
        SymbolName::Blank
    }
}

impl DomEnum for SymbolName {
    const NAME: &'static str = "SymbolName";

    fn from_raw(raw: i32) -> Option<Self> {
        let named = match raw as u32 {
            0x0020 => Some(SymbolName::Blank),
            0x2002 => Some(SymbolName::En),
            0x2003 => Some(SymbolName::Em),
            0x2005 => Some(SymbolName::QuarterEm),
            0x00A0 => Some(SymbolName::NonBreakableBlank),
            0x2022 => Some(SymbolName::Bullet),
            0x00A9 => Some(SymbolName::Copyright),
            0x2014 => Some(SymbolName::EmDash),
            0x2013 => Some(SymbolName::EnDash),
            0x20AC => Some(SymbolName::Euro),
            0x00AC => Some(SymbolName::Not),
            0x00AE => Some(SymbolName::RegisteredTrademark),
            0x2122 => Some(SymbolName::Trademark),
            _ => None,
        };
        if let Some(name) = named {
            return Some(name);
        }
        // Open set: any non-negative value is a literal code point.
        if raw >= 0 {
            Some(SymbolName::Chr(raw as u32))
        } else {
            None
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        const NAMES: &[(&str, SymbolName)] = &[
            ("Blank", SymbolName::Blank),
            ("En", SymbolName::En),
            ("Em", SymbolName::Em),
            ("QuarterEm", SymbolName::QuarterEm),
            ("NonBreakableBlank", SymbolName::NonBreakableBlank),
            ("Bullet", SymbolName::Bullet),
            ("Copyright", SymbolName::Copyright),
            ("EmDash", SymbolName::EmDash),
            ("EnDash", SymbolName::EnDash),
            ("Euro", SymbolName::Euro),
            ("Not", SymbolName::Not),
            ("RegisteredTrademark", SymbolName::RegisteredTrademark),
            ("Trademark", SymbolName::Trademark),
        ];
        NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, v)| v)
    }

    fn raw(self) -> i32 {
        let code = match self {
            SymbolName::Blank => 0x0020,
            SymbolName::En => 0x2002,
            SymbolName::Em => 0x2003,
            SymbolName::QuarterEm => 0x2005,
            SymbolName::NonBreakableBlank => 0x00A0,
            SymbolName::Bullet => 0x2022,
            SymbolName::Copyright => 0x00A9,
            SymbolName::EmDash => 0x2014,
            SymbolName::EnDash => 0x2013,
            SymbolName::Euro => 0x20AC,
            SymbolName::Not => 0x00AC,
            SymbolName::RegisteredTrademark => 0x00AE,
            SymbolName::Trademark => 0x2122,
            SymbolName::Chr(c) => c,
        };
        code as i32
    }

    fn ddl_text(self) -> String {
        match self {
            SymbolName::Blank => "Blank".to_string(),
            SymbolName::En => "En".to_string(),
            SymbolName::Em => "Em".to_string(),
            SymbolName::QuarterEm => "QuarterEm".to_string(),
            SymbolName::NonBreakableBlank => "NonBreakableBlank".to_string(),
            SymbolName::Bullet => "Bullet".to_string(),
            SymbolName::Copyright => "Copyright".to_string(),
            SymbolName::EmDash => "EmDash".to_string(),
            SymbolName::EnDash => "EnDash".to_string(),
            SymbolName::Euro => "Euro".to_string(),
            SymbolName::Not => "Not".to_string(),
            SymbolName::RegisteredTrademark => "RegisteredTrademark".to_string(),
            SymbolName::Trademark => "Trademark".to_string(),
            SymbolName::Chr(c) => format!("0x{c:04X}"),
        }
    }
}
