pub mod flappy_scene;
pub mod game_common;

use flappy::engine::AssetCatalog;
use flappy::Session;
use rand::Rng;
use ratatui::Frame;

/// Main UI drawing function.
pub fn draw_ui<R: Rng>(frame: &mut Frame, session: &Session<R>, catalog: &AssetCatalog) {
    let area = frame.size();
    flappy_scene::render_flappy(frame, area, session, catalog);
}
