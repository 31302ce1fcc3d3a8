mod components;
mod effects;
mod error;
mod model;
mod projection;
mod state;
mod util;

use components::app::App;

fn main() {
    util::init_logging();
    tracing::info!("Habitual Adventure v{} starting", env!("CARGO_PKG_VERSION"));
    yew::Renderer::<App>::new().render();
}
