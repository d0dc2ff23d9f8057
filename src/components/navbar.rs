use yew::prelude::*;

use super::{icon, scroll_callback};
use crate::catalog::{Icon, ARTISTS_ANCHOR, BRAND, PROCESS_ANCHOR, SERVICES_ANCHOR};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <nav class="navbar">
          <div class="brand">
            <div class="brand-mark">{ icon(Icon::Bike, "neon") }</div>
            <span class="brand-name">{ BRAND }</span>
          </div>
          <div class="nav-links">
            <a href={format!("#{SERVICES_ANCHOR}")}>{ "Services" }</a>
            <a href={format!("#{ARTISTS_ANCHOR}")}>{ "Artists" }</a>
            <a href={format!("#{PROCESS_ANCHOR}")}>{ "Process" }</a>
          </div>
          <button class="brutal-btn btn-sm" onclick={scroll_callback(SERVICES_ANCHOR)}>{ "Get Started" }</button>
        </nav>
    }
}
