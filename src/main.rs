use gpui::*;
use gpui_component::Root;
use kwl_board::app::KwlBoard;
use kwl_board::settings::Settings;

fn main() {
    kwl_board::logging::init();

    let settings = Settings::load();
    tracing::info!("Starting KWL Board");

    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        let window_size = size(px(settings.window_width), px(settings.window_height));
        let bounds = Bounds::centered(None, window_size, cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("KWL Board".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            let view = cx.new(|cx| KwlBoard::new(settings, window, cx));
            cx.new(|cx| Root::new(AnyView::from(view), window, cx))
        });
        if let Err(e) = opened {
            tracing::error!("Failed to open window: {:#}", e);
            cx.quit();
            return;
        }

        cx.on_window_closed(|cx| cx.quit()).detach();
        cx.activate(true);
    });
}
