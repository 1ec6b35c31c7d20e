//! Rendering logic for the demo app.

use ratatui::Frame;

use crate::app::App;
use crate::ui::HostView;

impl App {
    /// Render the host with both sheets attached. The quarter sheet stacks above the half sheet.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();
        let host = HostView::new(self.theme);
        f.render_widget(self.quarter.attach(self.half.attach(host)), f.area());
    }
}
