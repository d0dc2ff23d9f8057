//! Booking flow state machine.
//!
//! The dialog walks through four fixed steps for one selected service:
//! location, schedule, bike details, confirmation. Nothing is validated or
//! sent anywhere; the only state is which service was picked and where the
//! dialog currently is.

use std::rc::Rc;

use serde::Serialize;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Step {
    Location,
    Schedule,
    BikeDetails,
    Confirmation,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::Location => 1,
            Step::Schedule => 2,
            Step::BikeDetails => 3,
            Step::Confirmation => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Location => "Your Location",
            Step::Schedule => "Schedule",
            Step::BikeDetails => "Bike Details",
            Step::Confirmation => "You're All Set!",
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Location => Some(Step::Schedule),
            Step::Schedule => Some(Step::BikeDetails),
            Step::BikeDetails => Some(Step::Confirmation),
            Step::Confirmation => None,
        }
    }

    pub fn prev(self) -> Option<Step> {
        match self {
            Step::Location => None,
            Step::Schedule => Some(Step::Location),
            Step::BikeDetails => Some(Step::Schedule),
            Step::Confirmation => Some(Step::BikeDetails),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DialogState {
    Closed,
    Open(Step),
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingAction {
    Start(String),
    Advance,
    Retreat,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSession {
    selected_service_id: Option<String>,
    dialog: DialogState,
}

impl Default for BookingSession {
    fn default() -> Self {
        Self {
            selected_service_id: None,
            dialog: DialogState::Closed,
        }
    }
}

impl BookingSession {
    pub fn selected_service_id(&self) -> Option<&str> {
        self.selected_service_id.as_deref()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.dialog, DialogState::Open(_))
    }

    pub fn step(&self) -> Option<Step> {
        match self.dialog {
            DialogState::Open(step) => Some(step),
            DialogState::Closed => None,
        }
    }

    /// Opens the dialog on the first step for `service_id`. The id is stored
    /// even if the catalog does not know it.
    pub fn start_booking(&mut self, service_id: impl Into<String>) {
        self.selected_service_id = Some(service_id.into());
        self.dialog = DialogState::Open(Step::Location);
    }

    /// Returns false when already on the last step or closed.
    pub fn advance(&mut self) -> bool {
        let Some(next) = self.step().and_then(Step::next) else {
            return false;
        };
        self.dialog = DialogState::Open(next);
        true
    }

    pub fn retreat(&mut self) -> bool {
        let Some(prev) = self.step().and_then(Step::prev) else {
            return false;
        };
        self.dialog = DialogState::Open(prev);
        true
    }

    /// Hides the dialog. The selected service is kept until the next start.
    pub fn close_booking(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.dialog = DialogState::Closed;
        true
    }

    pub fn apply(&mut self, action: BookingAction) -> bool {
        match action {
            BookingAction::Start(id) => {
                let before = self.clone();
                self.start_booking(id);
                *self != before
            }
            BookingAction::Advance => self.advance(),
            BookingAction::Retreat => self.retreat(),
            BookingAction::Close => self.close_booking(),
        }
    }
}

impl Reducible for BookingSession {
    type Action = BookingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn started(id: &str) -> BookingSession {
        let mut s = BookingSession::default();
        s.start_booking(id);
        s
    }

    #[test]
    fn starts_closed_with_nothing_selected() {
        let s = BookingSession::default();
        assert!(!s.is_open());
        assert_eq!(s.step(), None);
        assert_eq!(s.selected_service_id(), None);
    }

    #[test]
    fn start_opens_on_first_step_for_every_service() {
        for service in catalog::SERVICES {
            let s = started(service.id);
            assert_eq!(s.selected_service_id(), Some(service.id));
            assert!(s.is_open());
            assert_eq!(s.step(), Some(Step::Location));
            assert_eq!(s.selected_service_id().and_then(catalog::find_service), Some(service));
        }
    }

    #[test]
    fn advance_walks_to_confirmation_and_stops() {
        let mut s = started("draw");
        assert!(s.advance());
        assert!(s.advance());
        assert!(s.advance());
        assert_eq!(s.step(), Some(Step::Confirmation));
        assert_eq!(s.step().map(Step::number), Some(4));

        let before = s.clone();
        assert!(!s.advance());
        assert_eq!(s, before);
    }

    #[test]
    fn retreat_on_first_step_is_noop() {
        let mut s = started("spray");
        let before = s.clone();
        assert!(!s.retreat());
        assert_eq!(s, before);
    }

    #[test]
    fn advance_then_retreat_restores_step() {
        let mut s = started("paint");
        for _ in 0..3 {
            let step = s.step();
            assert!(s.advance());
            assert!(s.retreat());
            assert_eq!(s.step(), step);
            s.advance();
        }
    }

    #[test]
    fn close_always_closes_and_keeps_selection() {
        let mut s = started("design");
        s.advance();
        s.advance();
        assert!(s.close_booking());
        assert!(!s.is_open());
        assert_eq!(s.selected_service_id(), Some("design"));

        // closing twice changes nothing
        assert!(!s.close_booking());
        assert!(!s.is_open());
    }

    #[test]
    fn transitions_while_closed_are_noops() {
        let mut s = BookingSession::default();
        assert!(!s.advance());
        assert!(!s.retreat());
        assert_eq!(s, BookingSession::default());
    }

    #[test]
    fn reopening_overwrites_selection_and_resets_step() {
        let mut s = started("draw");
        s.advance();
        s.advance();
        s.advance();
        s.close_booking();

        s.start_booking("paint");
        assert_eq!(s.selected_service_id(), Some("paint"));
        assert!(s.is_open());
        assert_eq!(s.step(), Some(Step::Location));
    }

    #[test]
    fn start_while_open_resets_to_first_step() {
        let mut s = started("draw");
        s.advance();
        s.start_booking("spray");
        assert_eq!(s.step(), Some(Step::Location));
        assert_eq!(s.selected_service_id(), Some("spray"));
    }

    #[test]
    fn unknown_service_still_opens_dialog() {
        let s = started("nonexistent-id");
        assert_eq!(s.selected_service_id(), Some("nonexistent-id"));
        assert!(s.is_open());
        assert_eq!(s.step(), Some(Step::Location));
        assert_eq!(catalog::service_title(s.selected_service_id()), "");
    }

    #[test]
    fn reducer_returns_same_rc_for_noops() {
        let s = Rc::new(BookingSession::default());
        let same = s.clone().reduce(BookingAction::Advance);
        assert!(Rc::ptr_eq(&s, &same));

        let opened = s.clone().reduce(BookingAction::Start("draw".into()));
        assert!(!Rc::ptr_eq(&s, &opened));
        assert_eq!(opened.step(), Some(Step::Location));

        let again = opened.clone().reduce(BookingAction::Start("draw".into()));
        assert!(Rc::ptr_eq(&opened, &again));

        let back = opened.clone().reduce(BookingAction::Retreat);
        assert!(Rc::ptr_eq(&opened, &back));
    }

    #[test]
    fn reducer_runs_full_flow() {
        let mut s = Rc::new(BookingSession::default());
        for action in [
            BookingAction::Start("draw".into()),
            BookingAction::Advance,
            BookingAction::Advance,
            BookingAction::Retreat,
            BookingAction::Advance,
            BookingAction::Advance,
            BookingAction::Advance,
        ] {
            s = s.reduce(action);
        }
        assert_eq!(s.step(), Some(Step::Confirmation));

        s = s.reduce(BookingAction::Close);
        assert!(!s.is_open());
        assert_eq!(s.selected_service_id(), Some("draw"));
    }

    #[test]
    fn session_snapshot_serializes() {
        let s = started("draw");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"selected_service_id":"draw","dialog":{"Open":"Location"}}"#);
    }
}
