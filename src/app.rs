use gloo::console::log;
use yew::prelude::*;

use crate::booking::{BookingAction, BookingSession};
use crate::components::{ArtistsSection, BookingDialog, Footer, Hero, Navbar, ProcessSection, ServicesSection};

#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer(BookingSession::default);

    // Snapshot every session change to the console
    {
        use_effect_with((*session).clone(), |s: &BookingSession| {
            match serde_json::to_string(s) {
                Ok(json) => log!("booking session", json),
                Err(e) => log!("booking session snapshot failed:", e.to_string()),
            }
            || ()
        });
    }

    let on_action = {
        let dispatcher = session.dispatcher();
        Callback::from(move |action: BookingAction| {
            log!(format!("booking action: {action:?}"));
            dispatcher.dispatch(action);
        })
    };
    let on_book = on_action.reform(BookingAction::Start);

    html! {
        <div class="page">
          <Navbar />
          <Hero />
          <ServicesSection {on_book} />
          <ArtistsSection />
          <ProcessSection />
          <Footer />
          if session.is_open() {
            <BookingDialog session={(*session).clone()} {on_action} />
          }
        </div>
    }
}
