//! Shell layout for authenticated routes: navbar above a centered column.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::navbar::Navbar;

/// Wraps protected pages with the navigation shell.
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <Navbar/>
        <main class="layout__main">
            <div class="layout__column">
                <Outlet/>
            </div>
        </main>
    }
}
