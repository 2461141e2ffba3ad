//! Block Colors
//!
//! Packed `0xRRGGBB` colors, `#RRGGBB` parsing, and the palette every placed
//! block is drawn with.

/// Wireframe edge color of a placed block.
pub const EDGE_COLOR_HEX: &str = "#B58F65";
/// Opaque fill color shared by all faces of a placed block.
pub const FACE_COLOR_HEX: &str = "#DEC091";

pub const EDGE_COLOR: u32 = 0xB58F65;
pub const FACE_COLOR: u32 = 0xDEC091;

/// Red, green and blue bytes of a packed `0xRRGGBB` color.
fn channels(packed: u32) -> [u8; 3] {
    let [_, r, g, b] = packed.to_be_bytes();
    [r, g, b]
}

/// Parse `#RRGGBB` (leading `#` optional) into a packed color.
pub fn parse_hex_color(text: &str) -> Option<u32> {
    let digits = text.trim().strip_prefix('#').unwrap_or(text.trim());
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Format a packed color as `#RRGGBB`.
pub fn format_hex_color(packed: u32) -> String {
    let [r, g, b] = channels(packed);
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Packed color to an opaque RGBA float quadruple.
pub fn to_rgba(packed: u32) -> [f32; 4] {
    let [r, g, b] = channels(packed).map(|c| c as f32 / 255.0);
    [r, g, b, 1.0]
}

/// Colors applied to every cube the builder produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubePalette {
    pub edge: u32,
    pub face: u32,
}

impl Default for CubePalette {
    fn default() -> Self {
        Self {
            edge: EDGE_COLOR,
            face: FACE_COLOR,
        }
    }
}
