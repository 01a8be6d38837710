//! UI module for rendering the TUI

mod components;
mod landing;
mod layout;
mod privacy;
mod signup;
mod splash;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Splash takes over the whole screen
    if let View::Splash = app.state.current_view {
        if let Some(splash_state) = &app.splash_state {
            splash::draw(frame, area, splash_state);
        }
        return;
    }

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Splash => {}
        View::Landing => landing::draw(frame, main_area, app),
        View::Signup => signup::draw(frame, main_area, app),
        View::Privacy => privacy::draw(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
