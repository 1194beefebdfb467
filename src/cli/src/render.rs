//! Draws the serialized cube as an unfolded net:
//!
//! ```text
//!       U
//!     L F R B
//!       D
//! ```

use facelet_core::{Color, FACELET_COUNT, Face};
use owo_colors::OwoColorize;

const NET_WIDTH: usize = 12;
const NET_HEIGHT: usize = 9;

/// Top left cell of each face in the net, in (column, row)
const fn offset(face: Face) -> (usize, usize) {
    match face {
        Face::U => (3, 0),
        Face::L => (0, 3),
        Face::F => (3, 3),
        Face::R => (6, 3),
        Face::B => (9, 3),
        Face::D => (3, 6),
    }
}

fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::White => (255, 255, 255),
        Color::Yellow => (255, 255, 0),
        Color::Green => (0, 255, 0),
        Color::Blue => (0, 0, 255),
        Color::Orange => (255, 128, 0),
        Color::Red => (255, 0, 0),
    }
}

/// Render the 54 character serialized form of a cube. With `plain`, each
/// sticker is its letter; otherwise it is a colored block. Unknown symbols are
/// drawn as `?`.
pub fn render_net(state: &str, plain: bool) -> String {
    debug_assert_eq!(state.chars().count(), FACELET_COUNT);

    let mut grid = [[None; NET_WIDTH]; NET_HEIGHT];
    for (position, symbol) in state.chars().take(FACELET_COUNT).enumerate() {
        let (column, row) = offset(Face::ALL[position / 9]);
        let index = position % 9;
        grid[row + index / 3][column + index % 3] = Some(symbol);
    }

    let mut out = String::new();
    for row in grid {
        let mut line = String::new();
        for cell in row {
            match (cell, plain) {
                (None, _) => line.push_str("  "),
                (Some(symbol), true) => {
                    line.push(symbol);
                    line.push(' ');
                }
                (Some(symbol), false) => match Color::from_symbol(symbol) {
                    Some(color) => {
                        let (r, g, b) = rgb(color);
                        line.push_str(&"  ".on_truecolor(r, g, b).to_string());
                    }
                    None => line.push_str("? "),
                },
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}
