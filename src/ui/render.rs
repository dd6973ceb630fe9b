use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::home::HomeScreen;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.country(), app.view_state()), header);
    frame.render_widget(Clear, body);
    let screen = HomeScreen::new(app.view_state(), app.messages())
        .list_state(app.list_state())
        .name_max_width(app.ui_config().name_max_width)
        .overscan(app.ui_config().overscan_rows);
    frame.render_widget(screen, body);
    frame.render_widget(Footer::new().widget(footer), footer);
}
