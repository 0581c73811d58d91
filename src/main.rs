use breakplan::commands::Cli;
use breakplan::libs::messages::macros::is_debug_mode;
use breakplan::msg_error;
use tracing_subscriber::{prelude::*, EnvFilter};

fn main() {
    if is_debug_mode() {
        let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("breakplan=debug"));
        tracing_subscriber::registry()
            .with(filter_layer)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }

    if let Err(e) = Cli::menu() {
        msg_error!(format!("{:#}", e));
        std::process::exit(1);
    }
}
