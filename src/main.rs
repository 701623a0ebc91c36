use lvlog::Level;

fn main() {
    lvlog::set_level(Level::DEBUG);
    if let Err(err) = lvlog::init_from_env() {
        lvlog::fatal!("{err}");
    }

    lvlog::trace!("test message");
    lvlog::debug!("test message");
    lvlog::info!("test message");
    lvlog::warn!("test message");
    lvlog::error!("test message");
    lvlog::stats!("test message");
    lvlog::fatal!("test message");
}
