use anyhow::Result;
use clap::Parser;
use gridbar::gpui::*;
use gridbar::gpui_component::Root;
use gridbar::gpui_component_assets::Assets;
use gridbar::logging::{self, LogTarget};
use std::path::PathBuf;
use story::{StoryView, sample_members};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "story", about = "Interactive showcase for the gridbar toolbar")]
struct Args {
    /// Number of sample rows to generate
    #[arg(long, default_value_t = 24)]
    rows: usize,

    /// Write logs to this file instead of stdout
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let target = match args.log_file {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Stdout,
    };
    let _logging = logging::init(target, LevelFilter::INFO)?;

    let members = sample_members(args.rows);

    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gridbar::gpui_component::init(cx);

        let options = WindowOptions {
            titlebar: Some(TitlebarOptions {
                title: Some("Gridbar Story".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.open_window(options, move |window, cx| {
            let view = cx.new(|cx| StoryView::new(members.clone(), window, cx));
            cx.new(|cx| Root::new(view.into(), window, cx))
        })
        .ok();
    });

    Ok(())
}
