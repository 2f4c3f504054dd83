use chess_dashboard_egui::*;
use chess_lib::openings::OpeningsMode;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    config::init_logging();
    let args = config::OpeningsArgs::parse();
    let data = args.load()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                constants::INIT_WINDOW_SIZE[0] as f32,
                constants::INIT_WINDOW_SIZE[1] as f32,
            ])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Chess Analysis Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(dashboard::Dashboard::<OpeningsMode>::new(data)))),
    )
    .map_err(|error| anyhow::anyhow!("{error}"))
}
