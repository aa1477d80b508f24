//! Users directory route. It keeps the list view minimal and relies on the
//! backend for authorization.

use crate::components::{Alert, AlertKind, Navbar, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::users::client;
use leptos::prelude::*;

/// Renders the users table and fetches data on mount.
#[component]
pub fn UsersListPage() -> impl IntoView {
    let auth = use_auth();
    let users = LocalResource::new(move || {
        let token = auth.token();
        async move { client::list_users(token.as_deref()).await }
    });

    view! {
        <Navbar>
            <div class="space-y-6">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Users"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "All registered Productr accounts."
                    </p>
                </div>

                <div class="overflow-hidden rounded-lg border border-gray-200 bg-white shadow-sm dark:border-gray-700 dark:bg-gray-800">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <thead class="bg-gray-50 dark:bg-gray-900/50">
                            <tr>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">
                                    "Name"
                                </th>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">
                                    "Email"
                                </th>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">
                                    "Role"
                                </th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            {move || match users.get() {
                                None => view! {
                                    <tr>
                                        <td colspan="3" class="px-6 py-12 text-center">
                                            <Spinner />
                                        </td>
                                    </tr>
                                }
                                .into_any(),
                                Some(Ok(list)) if list.is_empty() => view! {
                                    <tr>
                                        <td colspan="3" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                            "No users found."
                                        </td>
                                    </tr>
                                }
                                .into_any(),
                                Some(Ok(list)) => list
                                    .into_iter()
                                    .map(|user| {
                                        let role = if user.role.is_empty() {
                                            "-".to_string()
                                        } else {
                                            user.role.clone()
                                        };
                                        view! {
                                            <tr class="transition-colors hover:bg-gray-50 dark:hover:bg-gray-700/50">
                                                <td class="whitespace-nowrap px-6 py-4 text-sm font-medium text-gray-900 dark:text-white">
                                                    {user.name.clone()}
                                                </td>
                                                <td class="whitespace-nowrap px-6 py-4 text-sm text-gray-500 dark:text-gray-400">
                                                    {user.email.clone()}
                                                </td>
                                                <td class="whitespace-nowrap px-6 py-4 text-sm text-gray-500 dark:text-gray-400">
                                                    {role}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any(),
                                Some(Err(err)) => view! {
                                    <tr>
                                        <td colspan="3" class="px-6 py-4">
                                            <Alert kind=AlertKind::Error message=err.to_string() />
                                        </td>
                                    </tr>
                                }
                                .into_any(),
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </Navbar>
    }
}
