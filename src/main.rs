// CanvasBike landing page (Rust + Yew + WASM)
// Static service/artist listings plus a four-step booking dialog.
// All state is in-memory; nothing is sent or stored.

mod app;
mod booking;
mod catalog;
mod components;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<app::App>::new().render();
}
