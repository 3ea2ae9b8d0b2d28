use std::rc::Rc;
use yew::prelude::*;

use crate::relay::ContactFields;

pub const FAILURE_ALERT: &str = "Oops! Something went wrong. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

pub enum ContactAction {
    Edit(Field, String),
    Submitted,
    Delivered,
    Failed,
    ClosePopup,
}

/// Form fields plus the popup flag. The relay outcome only ever arrives
/// through `Delivered` or `Failed`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactState {
    pub fields: ContactFields,
    pub sending: bool,
    pub popup_open: bool,
}

impl Reducible for ContactState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => {
                let slot = match field {
                    Field::Name => &mut next.fields.name,
                    Field::Email => &mut next.fields.email,
                    Field::Message => &mut next.fields.message,
                };
                *slot = value;
            }
            ContactAction::Submitted => next.sending = true,
            ContactAction::Delivered => {
                next.sending = false;
                next.popup_open = true;
                next.fields = ContactFields::default();
            }
            ContactAction::Failed => next.sending = false,
            ContactAction::ClosePopup => next.popup_open = false,
        }
        Rc::new(next)
    }
}
