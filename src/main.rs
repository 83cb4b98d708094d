use clap::Parser;
use rendertransport::{
    cli::Args,
    config::Settings,
    logging,
    render::OfflineRender,
    ui::{
        create_render_progress, format_block, timeline_header, update_render_progress,
        with_render_progress,
    },
    ClockError,
};

fn main() {
    initialize_logging();
    let args = Args::parse();

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => exit_with_error(e),
    };

    if let Err(e) = run_render(settings, args.quiet) {
        exit_with_error(e);
    }
}

fn initialize_logging() {
    if let Err(e) = logging::init_logger() {
        eprintln!("Logging disabled: {}", e);
        return;
    }
    log::info!("Application starting");
}

fn load_settings(args: &Args) -> Result<Settings, ClockError> {
    let settings = Settings::load(args.config.as_deref())?;
    args.apply(settings)
}

fn run_render(settings: Settings, quiet: bool) -> Result<(), ClockError> {
    let mut render = OfflineRender::new(settings)?;
    let total = render.settings().length;
    let progress = create_render_progress(total, quiet);

    println!("{}", timeline_header());
    let end = with_render_progress(&progress, |pb| {
        render.run_with(total, |block| {
            update_render_progress(pb, block);
            pb.suspend(|| println!("{}", format_block(block)));
        })
    })?;

    log::info!("Rendered {} samples", end);
    println!("Rendered {} samples", end);
    Ok(())
}

fn exit_with_error(error: ClockError) -> ! {
    let error_msg = format!("Error: {}", error);
    log::error!("{}", error_msg);
    eprintln!("{}", error_msg);
    std::process::exit(1);
}
