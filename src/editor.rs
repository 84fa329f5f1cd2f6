use crate::config::EditorConfig;
use crate::cursor::{Cursor, Direction};
use crate::error::MapError;
use crate::map::GridMap;
use crate::palette::{Palette, PaletteLayout};
use crate::prompt::PromptService;
use crate::render::{visible_range, DrawCommand, VisibleRange};
use crate::tile::TileId;
use crate::tileset::TileSet;
use crate::view::{offset_for_cursor, screen_to_grid};
use macroquad::prelude::{IVec2, Vec2};

/// Commands that need text from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Blank map from a name, dimensions and fill tile
    NewMap,
    /// Write the map under a name and reload it
    Save,
    /// Replace the map with a saved one
    Load,
}

impl Command {
    /// Questions asked, in order, before the command runs.
    pub fn questions(self) -> &'static [&'static str] {
        match self {
            Command::NewMap => &["NAME?", "ROW?", "COL?", "DEFAULT?"],
            Command::Save => &["SAVE?"],
            Command::Load => &["LOAD?"],
        }
    }
}

/// Everything one editing session owns.
pub struct Editor {
    config: EditorConfig,
    tileset: TileSet,
    map: GridMap,
    palette: Palette,
    cursor: Cursor,
    show_grid: bool,
}

impl Editor {
    /// Scans the configured tile directory and opens the initial blank map.
    pub fn new(config: EditorConfig) -> Result<Self, MapError> {
        let tileset = TileSet::scan_directory(&config)?;
        Self::with_tileset(config, tileset)
    }

    /// Starts a session on an already built tile set.
    pub fn with_tileset(config: EditorConfig, tileset: TileSet) -> Result<Self, MapError> {
        config.validate()?;
        let initial = &config.initial_map;
        let map = GridMap::new(
            initial.name.clone(),
            initial.rows,
            initial.cols,
            tileset.default_id(),
        )?;
        Ok(Editor {
            config,
            tileset,
            map,
            palette: Palette::new(),
            cursor: Cursor::default(),
            show_grid: false,
        })
    }

    /// Settings the session started with.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Tile set from the last scan or load.
    pub fn tileset(&self) -> &TileSet {
        &self.tileset
    }

    /// Map being edited.
    pub fn map(&self) -> &GridMap {
        &self.map
    }

    /// Tile selection and palette visibility.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Mutable palette state.
    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    /// Cell the camera is centred on.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Whether cell outlines are drawn.
    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    /// Flips the grid overlay.
    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    /// Moves the cursor back to (0, 0).
    pub fn reset_cursor(&mut self) {
        self.cursor.reset();
    }

    /// Applies this tick's held arrow keys.
    pub fn steer(&mut self, down: bool, left: bool, right: bool, up: bool) {
        if let Some(dir) = Direction::from_held(down, left, right, up) {
            self.cursor.step(dir);
        }
    }

    fn tile_size(&self) -> i32 {
        self.config.tile_size as i32
    }

    /// Camera offset for the current cursor.
    pub fn offset(&self) -> IVec2 {
        offset_for_cursor(&self.cursor, self.config.screen_size(), self.tile_size())
    }

    /// Cells to draw for the current camera.
    pub fn visible_range(&self) -> VisibleRange {
        visible_range(self.offset(), self.config.screen_size(), self.tile_size())
    }

    /// Map blits for the current camera.
    pub fn render_plan(&self) -> Vec<DrawCommand> {
        self.map
            .render_plan(self.visible_range(), self.offset(), &self.tileset, self.tile_size())
    }

    /// Palette grid covering the whole screen.
    pub fn palette_layout(&self) -> PaletteLayout {
        PaletteLayout {
            cols: self.config.screen_cols as i32,
            rows: self.config.screen_rows as i32,
            tile_size: self.tile_size(),
        }
    }

    /// Forwards a click to the open palette.
    pub fn click_palette(&mut self, mouse: Vec2) -> bool {
        let layout = self.palette_layout();
        self.palette.click(&layout, mouse, &self.tileset)
    }

    /// Grid cell under a screen pixel.
    pub fn hovered_cell(&self, mouse: Vec2) -> IVec2 {
        screen_to_grid(mouse, self.offset(), self.tile_size())
    }

    /// Paints the selected tile under the mouse. A selection the tile set
    /// does not hold paints nothing.
    pub fn paint_at(&mut self, mouse: Vec2) -> bool {
        let tile = self.palette.selected();
        if !self.tileset.contains(tile) {
            tracing::warn!(%tile, len = self.tileset.len(), "selected tile not in tile set");
            return false;
        }
        let cell = self.hovered_cell(mouse);
        self.map.paint(cell, tile)
    }

    /// Selects the tile under the mouse; off-map clicks keep the selection.
    pub fn pick_at(&mut self, mouse: Vec2) -> bool {
        let cell = self.hovered_cell(mouse);
        match self.map.pick(cell) {
            Some(tile) => {
                self.palette.select(tile);
                true
            }
            None => false,
        }
    }

    /// Replaces the map with a blank one. Invalid input leaves the current
    /// map alone.
    pub fn new_map(
        &mut self,
        name: &str,
        rows: i32,
        cols: i32,
        default_id: TileId,
    ) -> Result<(), MapError> {
        if !self.tileset.contains(default_id) {
            return Err(MapError::UnknownTile {
                id: default_id.raw(),
                len: self.tileset.len(),
            });
        }
        self.map = GridMap::new(name, rows, cols, default_id)?;
        tracing::info!(name, rows, cols, default = %default_id, "created map");
        Ok(())
    }

    /// Writes the map under `name`, then reloads it so the tile set and ids
    /// match the files just written.
    pub fn save(&mut self, name: &str) -> Result<(), MapError> {
        self.map.save_files(&self.tileset, &self.config, name)?;
        self.palette.select(TileId(0));
        self.load(name)
    }

    /// Replaces tile set and map with the saved map `name`. On error nothing
    /// changes. A selection past the new tile set falls back to tile 0.
    pub fn load(&mut self, name: &str) -> Result<(), MapError> {
        let (map, tileset) = GridMap::load(&self.config, name)?;
        self.tileset.replace(tileset);
        self.map = map;
        if !self.tileset.contains(self.palette.selected()) {
            self.palette.select(TileId(0));
        }
        Ok(())
    }

    /// Runs `command` with answers to its [`Command::questions`].
    pub fn apply(&mut self, command: Command, answers: &[String]) -> Result<(), MapError> {
        let questions = command.questions();
        if answers.len() != questions.len() {
            return Err(MapError::Cancelled);
        }
        match command {
            Command::NewMap => {
                let name = required_name(questions[0], &answers[0])?;
                let rows = parse_number(questions[1], &answers[1])?;
                let cols = parse_number(questions[2], &answers[2])?;
                let default = parse_number(questions[3], &answers[3])?;
                if default < 0 {
                    return Err(invalid(questions[3], &answers[3]));
                }
                self.new_map(name, rows, cols, TileId(default as u32))
            }
            Command::Save => self.save(required_name(questions[0], &answers[0])?),
            Command::Load => self.load(required_name(questions[0], &answers[0])?),
        }
    }

    /// Asks the command's questions through `prompt`, then runs it.
    /// A cancelled question aborts without touching any state.
    pub fn execute(
        &mut self,
        command: Command,
        prompt: &mut dyn PromptService,
    ) -> Result<(), MapError> {
        let mut answers = Vec::with_capacity(command.questions().len());
        for question in command.questions() {
            let answer = prompt.prompt_line(question).ok_or(MapError::Cancelled)?;
            answers.push(answer);
        }
        self.apply(command, &answers)
    }
}

fn invalid(question: &str, answer: &str) -> MapError {
    MapError::InvalidAnswer {
        question: question.to_owned(),
        answer: answer.to_owned(),
    }
}

fn required_name<'a>(question: &str, answer: &'a str) -> Result<&'a str, MapError> {
    let name = answer.trim();
    if name.is_empty() {
        return Err(invalid(question, answer));
    }
    Ok(name)
}

fn parse_number(question: &str, answer: &str) -> Result<i32, MapError> {
    answer.trim().parse().map_err(|_| invalid(question, answer))
}
