//! App component: routing table and context provision.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store and notice state are created once here and provided
//! through context, so every page and the navigation shell observe the same
//! principal. Protected routes wrap their page in `ProtectedRoute` with the
//! role the view requires.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::components::layout::Layout;
use crate::components::notice_stack::NoticeStack;
use crate::components::protected_route::ProtectedRoute;
use crate::net::types::Role;
use crate::pages::employee::EmployeeDashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::manager::ManagerDashboardPage;
use crate::pages::placeholders::{AnonymousFeedbackPage, RequestFeedbackPage};
use crate::pages::signup::SignupPage;
use crate::pages::unauthorized::UnauthorizedPage;
use crate::state::notices::NoticeState;
use crate::state::session::SessionStore;

/// Root component: provides shared state and mounts the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SessionStore::restore());
    provide_context(RwSignal::new(NoticeState::default()));

    view! {
        <Title text="Feedback System"/>
        <NoticeStack/>
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=path!("/") view=LoginPage/>
                <Route path=path!("/signup") view=SignupPage/>
                <Route path=path!("/unauthorized") view=UnauthorizedPage/>
                <ParentRoute path=path!("") view=Layout>
                    <Route
                        path=path!("manager-dashboard")
                        view=|| {
                            view! {
                                <ProtectedRoute role=Role::Manager>
                                    <ManagerDashboardPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=path!("employee-dashboard")
                        view=|| {
                            view! {
                                <ProtectedRoute role=Role::Employee>
                                    <EmployeeDashboardPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=path!("request-feedback")
                        view=|| {
                            view! {
                                <ProtectedRoute role=Role::Employee>
                                    <RequestFeedbackPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=path!("anonymous-feedback")
                        view=|| {
                            view! {
                                <ProtectedRoute role=Role::Employee>
                                    <AnonymousFeedbackPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
