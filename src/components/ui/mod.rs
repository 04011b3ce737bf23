mod accordion;
mod alert;
mod button;
mod game_card;
mod popup_warning;
mod spinner;
mod testimonial_card;

pub(crate) use accordion::Accordion;
pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use game_card::GameCard;
pub(crate) use popup_warning::PopupBlockerWarning;
pub(crate) use spinner::Spinner;
pub(crate) use testimonial_card::TestimonialCard;
