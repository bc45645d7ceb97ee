mod api;
mod components;
mod config;
mod model;
mod solution;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
