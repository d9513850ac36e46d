mod home;
mod not_found;

pub(crate) use home::HomePage;
pub(crate) use not_found::NotFoundPage;

use crate::components::layout::GatedLayout;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <ParentRoute path=path!("") view=GatedLayout>
                <Route path=path!("") view=HomePage />
            </ParentRoute>
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
