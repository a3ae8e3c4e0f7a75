use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

/// Single dimmed line reminding the user how to leave.
pub struct HelpBar;

impl HelpBar {
    pub const TEXT: &'static str = "q / esc / ctrl+c: quit";
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM);
        frame.render_widget(Span::styled(Self::TEXT, style), area);
    }
}
