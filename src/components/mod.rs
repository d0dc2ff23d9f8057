mod artists;
mod booking_dialog;
mod footer;
mod hero;
mod navbar;
mod process;
mod services;

pub use artists::ArtistsSection;
pub use booking_dialog::BookingDialog;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use process::ProcessSection;
pub use services::ServicesSection;

use web_sys::window;
use yew::prelude::*;

use crate::catalog::Icon;

fn icon(icon: Icon, class: &'static str) -> Html {
    let extra = (!class.is_empty()).then_some(class);
    html! { <span class={classes!("icon", extra)} aria-hidden="true">{ icon.glyph() }</span> }
}

// Smooth scroll is handled by `scroll-behavior` in the stylesheet.
fn scroll_to_section(id: &str) {
    let Some(w) = window() else { return; };
    let Some(doc) = w.document() else { return; };
    if let Some(el) = doc.get_element_by_id(id) {
        el.scroll_into_view();
    }
}

fn scroll_callback(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_| scroll_to_section(id))
}
