//! Presentation helpers for the tile sandbox

use super::session::TileSession;
use crate::constants::tiles::{SPAWN_X, SPAWN_Y, TILE_SIZE};
use crate::world::BlockId;

pub const NIGHT_SKY: u32 = 0x1A237E;
pub const DAY_SKY: u32 = 0x64B5F6;
pub const DUSK_SKY: u32 = 0xFF6F00;
pub const PLAYER_COLOR: u32 = 0xFF5722;

/// Pure function - sky colour for a day progress in [0, 1)
///
/// Night in the first and last quarter, day in the second, dusk in the third.
pub fn sky_color(day_progress: f32) -> u32 {
    if !(0.25..=0.75).contains(&day_progress) {
        NIGHT_SKY
    } else if day_progress < 0.5 {
        DAY_SKY
    } else {
        DUSK_SKY
    }
}

/// Pixel scroll of the view; zero while the player stands on the spawn tile
pub fn camera_offset(player: (i32, i32)) -> (i32, i32) {
    let tile = TILE_SIZE as i32;
    ((player.0 - SPAWN_X) * tile, (player.1 - SPAWN_Y) * tile)
}

/// Grid cell under a pixel of the view
pub fn screen_to_tile(pixel: (i32, i32), camera: (i32, i32)) -> (i32, i32) {
    let tile = TILE_SIZE as i32;
    ((pixel.0 + camera.0).div_euclid(tile), (pixel.1 + camera.1).div_euclid(tile))
}

fn tile_glyph(block: BlockId) -> char {
    match block {
        BlockId::AIR => '.',
        BlockId::GRASS => '"',
        BlockId::DIRT => '%',
        BlockId::STONE => '#',
        BlockId::WOOD => '|',
        BlockId::LEAVES => '*',
        BlockId::SAND => ':',
        BlockId::WATER => '~',
        _ => '?',
    }
}

/// Text rendering of the grid with the player drawn as `@`
pub fn render_text(session: &TileSession) -> String {
    let (player_x, player_y) = session.player();
    let mut out = String::new();
    for (y, row) in session.world().rows().enumerate() {
        for (x, block) in row.iter().enumerate() {
            if (x as i32, y as i32) == (player_x, player_y) {
                out.push('@');
            } else {
                out.push(tile_glyph(*block));
            }
        }
        out.push('\n');
    }
    out
}

/// One-line status: vitals, clock and selected tile
pub fn status_line(session: &TileSession) -> String {
    format!(
        "HP {:.0} | Food {:.0} | Time {} | Sky #{:06X} | {} x{}",
        session.health(),
        session.hunger(),
        session.time_of_day(),
        sky_color(session.day_progress()),
        session.selected(),
        session.stock().count(session.selected())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::TileWorld;

    #[test]
    fn test_sky_phases() {
        assert_eq!(sky_color(0.0), NIGHT_SKY);
        assert_eq!(sky_color(0.25), DAY_SKY);
        assert_eq!(sky_color(0.49), DAY_SKY);
        assert_eq!(sky_color(0.5), DUSK_SKY);
        assert_eq!(sky_color(0.75), DUSK_SKY);
        assert_eq!(sky_color(0.76), NIGHT_SKY);
    }

    #[test]
    fn test_screen_to_tile_follows_camera() {
        assert_eq!(screen_to_tile((0, 0), (0, 0)), (0, 0));
        assert_eq!(screen_to_tile((17, 31), (0, 0)), (1, 1));
        let camera = camera_offset((SPAWN_X + 2, SPAWN_Y));
        assert_eq!(camera, (32, 0));
        assert_eq!(screen_to_tile((0, 0), camera), (2, 0));
    }

    #[test]
    fn test_render_text_marks_player() {
        let mut world = TileWorld::empty();
        world.set(0, 0, BlockId::STONE);
        let session = TileSession::with_world(world);
        let text = render_text(&session);
        let rows: Vec<_> = text.lines().collect();

        assert_eq!(rows.len(), 20);
        assert!(rows.iter().all(|row| row.chars().count() == 32));
        assert!(rows[0].starts_with('#'));
        assert_eq!(rows[10].chars().nth(16), Some('@'));
    }
}
