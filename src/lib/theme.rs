//! Shared Tailwind class constants to keep form styling consistent across
//! routes.

pub struct Theme;

impl Theme {
    /// Standard text/email/password input.
    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-violet-500 focus:border-violet-500 block w-full p-2.5";

    /// Label above a form input.
    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-gray-900";
}
