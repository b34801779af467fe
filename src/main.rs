use log::info;

fn main() {
    // ロガーが無くても描画は続ける / Keep running without a logger.
    if let Err(e) = ribbon_trail::logging::init() {
        eprintln!("logging disabled: {}", e);
    }
    info!("left-drag to draw, release to fade; R restarts, S stops");
    ribbon_trail::app::run();
}
