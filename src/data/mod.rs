//! Static marketing content rendered by the public pages.

pub(crate) mod faqs;
pub(crate) mod games;
pub(crate) mod testimonials;
