use crate::textures::TextureCache;
use macroquad::prelude::*;
use macroquad_tile_editor::view::grid_to_screen;
use macroquad_tile_editor::{DrawCommand, DrawLayer, Editor, PromptSequence};

const HIGHLIGHT: Color = GREEN;
const HIGHLIGHT_WIDTH: f32 = 3.0;
const FONT_SIZE: f32 = 24.0;
const PROMPT_W: f32 = 320.0;
const PROMPT_H: f32 = 36.0;
const PROMPT_EDGE: f32 = 4.0;

pub fn draw_commands(cmds: &[DrawCommand], textures: &TextureCache, tile_size: f32, grid: bool) {
    for cmd in cmds {
        let (x, y) = (cmd.dest.x as f32, cmd.dest.y as f32);
        if let Some(tex) = textures.get(cmd.tile) {
            draw_texture_ex(
                tex,
                x,
                y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(tile_size, tile_size)),
                    ..Default::default()
                },
            );
        }
        if grid && cmd.layer == DrawLayer::Foreground {
            draw_rectangle_lines(x, y, tile_size, tile_size, 1.0, BLACK);
        }
    }
}

/// Map, cursor and the info overlay.
pub fn draw_map_view(editor: &Editor, textures: &TextureCache, status: &str) {
    let ts = editor.config().tile_size as f32;
    draw_commands(&editor.render_plan(), textures, ts, editor.show_grid());

    let cursor = grid_to_screen(editor.cursor().position(), editor.offset(), ts as i32);
    draw_rectangle_lines(
        cursor.x as f32,
        cursor.y as f32,
        ts,
        ts,
        HIGHLIGHT_WIDTH,
        HIGHLIGHT,
    );

    if let Some(tex) = textures.get(editor.palette().selected()) {
        draw_texture_ex(
            tex,
            10.0,
            10.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(ts, ts)),
                ..Default::default()
            },
        );
    }
    draw_rectangle_lines(10.0, 10.0, ts, ts, HIGHLIGHT_WIDTH, HIGHLIGHT);

    let (mx, my) = mouse_position();
    let hovered = editor.hovered_cell(vec2(mx, my));
    draw_text(editor.map().name(), 10.0, 76.0, FONT_SIZE, WHITE);
    draw_text(
        &format!("{} {}", hovered.x, hovered.y),
        10.0,
        106.0,
        FONT_SIZE,
        WHITE,
    );
    if !status.is_empty() {
        draw_text(status, 10.0, screen_height() - 10.0, FONT_SIZE, YELLOW);
    }
}

pub fn draw_palette(editor: &Editor, textures: &TextureCache) {
    let layout = editor.palette_layout();
    let plan = editor.palette().render_plan(&layout, editor.tileset());
    draw_commands(&plan, textures, layout.tile_size as f32, false);

    let (mx, my) = mouse_position();
    if let Some(cell) = layout.cell_at(vec2(mx, my)) {
        let ts = layout.tile_size as f32;
        draw_rectangle_lines(
            cell.x as f32 * ts,
            cell.y as f32 * ts,
            ts,
            ts,
            HIGHLIGHT_WIDTH,
            HIGHLIGHT,
        );
    }
}

/// Centred input box showing the question and what has been typed.
pub fn draw_prompt(seq: &PromptSequence) {
    let x = (screen_width() - PROMPT_W) / 2.0;
    let y = (screen_height() - PROMPT_H) / 2.0;
    draw_rectangle(x, y, PROMPT_W, PROMPT_H, WHITE);
    draw_rectangle(
        x + PROMPT_EDGE,
        y + PROMPT_EDGE,
        PROMPT_W - PROMPT_EDGE * 2.0,
        PROMPT_H - PROMPT_EDGE * 2.0,
        BLACK,
    );
    draw_text(
        &format!("{} {}", seq.question(), seq.input()),
        x + PROMPT_EDGE * 2.0,
        y + PROMPT_H - PROMPT_EDGE * 3.0,
        FONT_SIZE,
        WHITE,
    );
}
