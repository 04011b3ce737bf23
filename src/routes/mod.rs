mod approach;
mod contact;
mod create_account;
mod games;
mod home;
mod login;
mod not_found;
mod parents;
mod pricing;
mod reset_password;
mod success;
mod verify_account;

pub(crate) use approach::ApproachPage;
pub(crate) use contact::ContactPage;
pub(crate) use create_account::CreateAccountPage;
pub(crate) use games::GamesPage;
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use parents::ForParentsPage;
pub(crate) use pricing::PricingPage;
pub(crate) use reset_password::ResetPasswordPage;
pub(crate) use success::SuccessPage;
pub(crate) use verify_account::VerifyAccountPage;

use crate::features::auth::guards::RequireAuth;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/approach") view=ApproachPage />
            <Route path=path!("/games") view=GamesPage />
            <Route path=path!("/parents") view=ForParentsPage />
            <Route path=path!("/contact") view=ContactPage />
            <Route path=path!("/pricing") view=PricingPage />
            <Route path=path!("/auth/login") view=LoginPage />
            <Route path=path!("/auth/signup") view=CreateAccountPage />
            // Legacy alias kept so old emails and bookmarks still work.
            <Route path=path!("/create-account") view=CreateAccountPage />
            <Route path=path!("/reset-pass") view=ResetPasswordPage />
            <Route path=path!("/verify-account") view=VerifyAccountPage />
            <Route
                path=path!("/success")
                view=|| {
                    view! {
                        <RequireAuth>
                            <SuccessPage />
                        </RequireAuth>
                    }
                }
            />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
