use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::icon;
use crate::booking::{BookingAction, BookingSession, Step};
use crate::catalog::{self, Icon, SCHEDULE_SLOTS};

#[derive(Properties, PartialEq)]
pub struct BookingDialogProps {
    pub session: BookingSession,
    pub on_action: Callback<BookingAction>,
}

/// Header text. Unknown or missing services leave the title empty.
pub fn dialog_title(step: Step, service_id: Option<&str>) -> String {
    match step {
        Step::Confirmation => "Booking Confirmed!".to_string(),
        _ => format!("Book {}", catalog::service_title(service_id)),
    }
}

fn step_heading(step: Step) -> Html {
    html! {
        <div class="step-heading">
          <div class="step-badge">{ step.number() }</div>
          <h3>{ step.title() }</h3>
        </div>
    }
}

fn location_step(next: Callback<MouseEvent>) -> Html {
    html! {
        <div class="stack">
          { step_heading(Step::Location) }
          <label class="field-label">{ "Street Address" }</label>
          <div class="input-icon">
            { icon(Icon::MapPin, "muted") }
            <input type="text" placeholder="123 BIKE LANE" class="brutal-border" />
          </div>
          <div class="grid grid-2">
            <div>
              <label class="field-label">{ "City" }</label>
              <input type="text" placeholder="ART CITY" class="brutal-border" />
            </div>
            <div>
              <label class="field-label">{ "Zip Code" }</label>
              <input type="text" placeholder="12345" class="brutal-border" />
            </div>
          </div>
          <button class="brutal-btn wide" onclick={next}>{ "Next Step" }</button>
        </div>
    }
}

fn schedule_step(
    picked: Option<usize>,
    on_pick: Callback<usize>,
    back: Callback<MouseEvent>,
    next: Callback<MouseEvent>,
) -> Html {
    html! {
        <div class="stack">
          { step_heading(Step::Schedule) }
          <div class="grid grid-2">
            { for SCHEDULE_SLOTS.iter().enumerate().map(|(i, slot)| {
                let onclick = on_pick.reform(move |_: MouseEvent| i);
                html! {
                  <button key={*slot} class={classes!("slot", "brutal-border", (picked == Some(i)).then_some("picked"))} {onclick}>
                    { icon(Icon::Calendar, "") }
                    <span class="bold block">{ *slot }</span>
                    <span class="small muted">{ "Available" }</span>
                  </button>
                }
            }) }
          </div>
          <div class="row">
            <button class="ghost-btn" onclick={back}>{ "Back" }</button>
            <button class="brutal-btn grow" onclick={next}>{ "Next Step" }</button>
          </div>
        </div>
    }
}

fn bike_details_step(service_id: Option<&str>, back: Callback<MouseEvent>, next: Callback<MouseEvent>) -> Html {
    html! {
        <div class="stack">
          { step_heading(Step::BikeDetails) }
          <textarea
            class="brutal-border"
            placeholder="TELL US ABOUT YOUR BIKE (BRAND, MODEL, COLOR) AND YOUR VISION FOR THE DESIGN..."
          />
          <div class="summary brutal-border">
            <div class="summary-row bold">
              <span>{ "Service:" }</span>
              <span>{ catalog::service_title(service_id) }</span>
            </div>
            <div class="summary-row summary-total bold">
              <span>{ "Total:" }</span>
              <span>{ catalog::service_price(service_id) }</span>
            </div>
          </div>
          <div class="row">
            <button class="ghost-btn" onclick={back}>{ "Back" }</button>
            <button class="brutal-btn grow" onclick={next}>{ "Confirm Booking" }</button>
          </div>
        </div>
    }
}

// No booking record or email is produced; the copy is all there is.
fn confirmation_step(close: Callback<MouseEvent>) -> Html {
    html! {
        <div class="confirmation">
          <div class="check-badge brutal-border">{ icon(Icon::Check, "") }</div>
          <h3>{ Step::Confirmation.title() }</h3>
          <p>{ "We've sent a confirmation email. An artist will reach out within 24 hours to discuss your design." }</p>
          <button class="brutal-btn" onclick={close}>{ "Back to Site" }</button>
        </div>
    }
}

#[function_component(BookingDialog)]
pub fn booking_dialog(props: &BookingDialogProps) -> Html {
    // Picked slot survives Back/Next but not closing the dialog.
    let picked_slot = use_state(|| None::<usize>);

    // Escape closes. The listener lives as long as the dialog is mounted.
    {
        let on_action = props.on_action.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|w| {
                EventListener::new(&w, "keydown", move |event| {
                    let escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|k| k.key() == "Escape");
                    if escape {
                        on_action.emit(BookingAction::Close);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let Some(step) = props.session.step() else {
        return html! {};
    };
    let service_id = props.session.selected_service_id();

    let emit = |action: BookingAction| props.on_action.reform(move |_: MouseEvent| action.clone());
    let close = emit(BookingAction::Close);
    let back = emit(BookingAction::Retreat);
    let next = emit(BookingAction::Advance);
    let on_pick = {
        let picked_slot = picked_slot.clone();
        Callback::from(move |i: usize| picked_slot.set(Some(i)))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let body = match step {
        Step::Location => location_step(next),
        Step::Schedule => schedule_step(*picked_slot, on_pick, back, next),
        Step::BikeDetails => bike_details_step(service_id, back, next),
        Step::Confirmation => confirmation_step(close.clone()),
    };

    html! {
        <div class="backdrop" onclick={close.clone()}>
          <div class="dialog brutal-border pop-in" role="dialog" aria-modal="true" onclick={keep_open}>
            <div class="dialog-head">
              <h2>{ dialog_title(step, service_id) }</h2>
              <button class="icon-btn" aria-label="Close" onclick={close}>{ icon(Icon::Zap, "") }</button>
            </div>
            <div class="dialog-body">
              { body }
            </div>
          </div>
        </div>
    }
}
