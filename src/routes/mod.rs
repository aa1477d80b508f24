mod dashboard;
mod items;
mod login;
mod not_found;
mod otp;
mod products;
mod register;
mod users;

pub(crate) use dashboard::DashboardPage;
pub(crate) use items::{CreateItemPage, EditItemPage, ItemDetailPage, ItemsListPage};
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use otp::OtpPage;
pub(crate) use products::ProductsPage;
pub(crate) use register::RegisterPage;
pub(crate) use users::UsersListPage;

use crate::features::auth::{ProtectedRoute, PublicRoute};
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route path constants shared by navigation and guards.
pub(crate) mod paths {
    pub const DASHBOARD: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const OTP: &str = "/otp";
    pub const REGISTER: &str = "/register";
    pub const PRODUCTS: &str = "/products";
    pub const ITEMS: &str = "/items";
    pub const ITEM_CREATE: &str = "/items/create";
    pub const USERS: &str = "/users";

    pub fn item_detail(id: &str) -> String {
        format!("/items/{id}")
    }

    pub fn item_edit(id: &str) -> String {
        format!("/items/{id}/edit")
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route
                path=path!("/login")
                view=|| view! { <PublicRoute><LoginPage /></PublicRoute> }
            />
            <Route
                path=path!("/otp")
                view=|| view! { <PublicRoute><OtpPage /></PublicRoute> }
            />
            <Route
                path=path!("/register")
                view=|| view! { <PublicRoute><RegisterPage /></PublicRoute> }
            />
            <Route
                path=path!("/")
                view=|| view! { <ProtectedRoute><DashboardPage /></ProtectedRoute> }
            />
            <Route
                path=path!("/products")
                view=|| view! { <ProtectedRoute><ProductsPage /></ProtectedRoute> }
            />
            <Route
                path=path!("/items")
                view=|| view! { <ProtectedRoute><ItemsListPage /></ProtectedRoute> }
            />
            <Route
                path=path!("/items/create")
                view=|| view! { <ProtectedRoute><CreateItemPage /></ProtectedRoute> }
            />
            <Route
                path=path!("/items/:id")
                view=|| view! { <ProtectedRoute><ItemDetailPage /></ProtectedRoute> }
            />
            <Route
                path=path!("/items/:id/edit")
                view=|| view! { <ProtectedRoute><EditItemPage /></ProtectedRoute> }
            />
            <Route
                path=path!("/users")
                view=|| view! { <ProtectedRoute><UsersListPage /></ProtectedRoute> }
            />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
