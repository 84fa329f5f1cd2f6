//! Camera math shared by painting, picking and rendering.

use crate::config::ScreenSize;
use crate::cursor::Cursor;
use macroquad::prelude::{ivec2, IVec2, Vec2};

/// Pixel offset that puts the cursor's tile at the centre of the screen.
pub fn offset_for_cursor(cursor: &Cursor, screen: ScreenSize, tile_size: i32) -> IVec2 {
    ivec2(
        cursor.x * tile_size - screen.width / 2,
        cursor.y * tile_size - screen.height / 2,
    )
}

/// Grid cell under a screen-space pixel.
#[inline]
pub fn screen_to_grid(mouse: Vec2, offset: IVec2, tile_size: i32) -> IVec2 {
    let ts = tile_size as f32;
    ivec2(
        ((mouse.x + offset.x as f32) / ts).floor() as i32,
        ((mouse.y + offset.y as f32) / ts).floor() as i32,
    )
}

/// Screen position of a grid cell's top-left corner.
#[inline]
pub fn grid_to_screen(cell: IVec2, offset: IVec2, tile_size: i32) -> IVec2 {
    cell * tile_size - offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::vec2;

    const SCREEN: ScreenSize = ScreenSize {
        width: 800,
        height: 640,
    };

    #[test]
    fn cursor_tile_sits_at_screen_centre() {
        for (x, y) in [(0, 0), (3, 7), (-4, 12), (63, 63)] {
            let cursor = Cursor { x, y };
            let offset = offset_for_cursor(&cursor, SCREEN, 32);
            let on_screen = grid_to_screen(ivec2(x, y), offset, 32);
            assert_eq!(on_screen, ivec2(400, 320));
            let centre = screen_to_grid(vec2(400.0, 320.0), offset, 32);
            assert_eq!(centre, ivec2(x, y));
        }
    }

    #[test]
    fn screen_to_grid_floors_negative_positions() {
        let offset = ivec2(-400, -320);
        assert_eq!(screen_to_grid(vec2(399.0, 319.0), offset, 32), ivec2(-1, -1));
        assert_eq!(screen_to_grid(vec2(368.0, 320.0), offset, 32), ivec2(-1, 0));
        assert_eq!(screen_to_grid(vec2(367.9, 320.0), offset, 32), ivec2(-2, 0));
    }

    #[test]
    fn zero_offset_maps_pixels_directly() {
        assert_eq!(screen_to_grid(vec2(33.0, 95.0), IVec2::ZERO, 32), ivec2(1, 2));
    }
}
