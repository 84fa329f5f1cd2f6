use anyhow::Context;
use macroquad::prelude::*;
use macroquad_tile_editor::{
    Command, Editor, EditorConfig, PromptEvent, PromptKey, PromptSequence,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod textures;
mod ui;

use textures::TextureCache;

fn config_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("editor.json"))
}

fn window_conf() -> Conf {
    // run() reports a broken config; the window just falls back to defaults
    let cfg = EditorConfig::load_or_default(&config_path()).unwrap_or_default();
    let screen = cfg.screen_size();
    Conf {
        window_title: "Map Editor".into(),
        window_width: screen.width,
        window_height: screen.height,
        window_resizable: false,
        ..Default::default()
    }
}

/// Keys typed this frame, in the order the prompt should see them.
fn prompt_keys() -> Vec<PromptKey> {
    let mut keys = Vec::new();
    while let Some(c) = get_char_pressed() {
        keys.push(PromptKey::Char(c));
    }
    if is_key_pressed(KeyCode::Backspace) {
        keys.push(PromptKey::Backspace);
    }
    if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
        keys.push(PromptKey::Enter);
    }
    if is_key_pressed(KeyCode::Escape) {
        keys.push(PromptKey::Escape);
    }
    keys
}

fn open_prompt(command: Command) -> (Command, PromptSequence) {
    // the key that opened the prompt must not become its first character
    while get_char_pressed().is_some() {}
    (command, PromptSequence::new(command.questions()))
}

fn run_command(editor: &mut Editor, command: Command, answers: &[String]) -> String {
    match editor.apply(command, answers) {
        Ok(()) => match command {
            Command::NewMap => format!("New map {}", editor.map().name()),
            Command::Save => format!("Saved {}", editor.map().name()),
            Command::Load => format!("Loaded {}", editor.map().name()),
        },
        Err(e) => {
            tracing::warn!(?command, error = %e, "command failed");
            e.to_string()
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let path = config_path();
    let cfg = EditorConfig::load_or_default(&path)
        .with_context(|| format!("Reading config {}", path.display()))?;
    let mut editor = Editor::new(cfg).context("Starting editor")?;
    let mut textures = TextureCache::load(editor.tileset(), editor.config().tile_size).await;

    let mut prompt: Option<(Command, PromptSequence)> = None;
    let mut status = String::new();
    // a click that closes the palette must be released before it can paint
    let mut paint_armed = true;

    loop {
        clear_background(BLACK);

        if let Some((command, mut seq)) = prompt.take() {
            ui::draw_map_view(&editor, &textures, &status);
            let mut finished = false;
            for key in prompt_keys() {
                match seq.feed(key) {
                    PromptEvent::Pending => {}
                    PromptEvent::Committed(answers) => {
                        status = run_command(&mut editor, command, &answers);
                        finished = true;
                        break;
                    }
                    PromptEvent::Cancelled => {
                        finished = true;
                        break;
                    }
                }
            }
            if !finished {
                ui::draw_prompt(&seq);
                prompt = Some((command, seq));
            }
        } else {
            if is_key_pressed(KeyCode::Escape) {
                break;
            }
            if is_key_pressed(KeyCode::Space) {
                editor.palette_mut().toggle();
            }

            if editor.palette().is_visible() {
                if is_mouse_button_pressed(MouseButton::Left) {
                    let (mx, my) = mouse_position();
                    if editor.click_palette(vec2(mx, my)) {
                        paint_armed = false;
                    }
                }
                ui::draw_palette(&editor, &textures);
            } else {
                if is_key_pressed(KeyCode::G) {
                    editor.toggle_grid();
                }
                if is_key_pressed(KeyCode::R) {
                    editor.reset_cursor();
                }
                if is_key_pressed(KeyCode::N) {
                    prompt = Some(open_prompt(Command::NewMap));
                } else if is_key_pressed(KeyCode::S) {
                    prompt = Some(open_prompt(Command::Save));
                } else if is_key_pressed(KeyCode::L) {
                    prompt = Some(open_prompt(Command::Load));
                }

                editor.steer(
                    is_key_down(KeyCode::Down),
                    is_key_down(KeyCode::Left),
                    is_key_down(KeyCode::Right),
                    is_key_down(KeyCode::Up),
                );

                let (mx, my) = mouse_position();
                if !is_mouse_button_down(MouseButton::Left) {
                    paint_armed = true;
                }
                if is_mouse_button_down(MouseButton::Left) && paint_armed {
                    editor.paint_at(vec2(mx, my));
                } else if is_mouse_button_down(MouseButton::Right) {
                    editor.pick_at(vec2(mx, my));
                }

                ui::draw_map_view(&editor, &textures, &status);
            }
        }

        if !textures.is_current(editor.tileset()) {
            textures = TextureCache::load(editor.tileset(), editor.config().tile_size).await;
        }

        next_frame().await;
    }
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!("{:#}", e);
    }
}
