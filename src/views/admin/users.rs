// ============================================================================
// ADMIN USERS - alta de cuentas internas y roles (solo Admin)
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{use_toast, AdminSidebar};
use crate::models::{AccountUser, NewUser, Role};
use crate::services::user_service;

#[function_component(AdminUsers)]
pub fn admin_users() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let role_id = use_state(|| Role::ProductManager.id().to_string());
    let new_role_name = use_state(String::new);
    // Cuentas creadas en esta sesión de pantalla; el backend no expone listado
    let created = use_state(Vec::<AccountUser>::new);
    let toast = use_toast();

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_role = {
        let role_id = role_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            role_id.set(select.value());
        })
    };

    let on_register = {
        let username = username.clone();
        let password = password.clone();
        let role_id = role_id.clone();
        let created = created.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if username.trim().is_empty() || password.is_empty() {
                toast.error("Username and password are required.");
                return;
            }
            let Ok(role) = role_id.parse::<u8>() else {
                toast.error("Pick a role.");
                return;
            };
            let new_user = NewUser {
                username: username.trim().to_string(),
                password: (*password).clone(),
                role_id: role,
            };

            let username = username.clone();
            let password = password.clone();
            let created = created.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match user_service::register_user(&new_user).await {
                    Ok(user) => {
                        toast.success(format!("User {} created", user.username));
                        let mut list = (*created).clone();
                        list.push(user);
                        created.set(list);
                        username.set(String::new());
                        password.set(String::new());
                    }
                    Err(e) => toast.error(format!("Could not create user: {}", e)),
                }
            });
        })
    };

    let on_role_input = {
        let new_role_name = new_role_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_role_name.set(input.value());
        })
    };

    let on_create_role = {
        let new_role_name = new_role_name.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = new_role_name.trim().to_string();
            if name.is_empty() {
                toast.error("Role name is required.");
                return;
            }
            let new_role_name = new_role_name.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match user_service::create_role(&name).await {
                    Ok(record) => {
                        toast.success(format!("Role '{}' created (id {})", record.name, record.id));
                        new_role_name.set(String::new());
                    }
                    Err(e) => toast.error(format!("Could not create role: {}", e)),
                }
            });
        })
    };

    html! {
        <div class="admin-layout">
            <AdminSidebar />
            <main class="admin-content users">
                <h1>{"Users"}</h1>

                <form class="user-form" onsubmit={on_register}>
                    <h2>{"Register account"}</h2>
                    <input type="text" placeholder="Username"
                           value={(*username).clone()} oninput={on_username} />
                    <input type="password" placeholder="Password"
                           value={(*password).clone()} oninput={on_password} />
                    <select onchange={on_role}>
                        {
                            Role::ALL.iter().map(|role| html! {
                                <option value={role.id().to_string()}
                                        selected={*role_id == role.id().to_string()}>
                                    {role.display_name()}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                    <button type="submit">{"Create user"}</button>
                </form>

                {
                    if created.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <table class="admin-table">
                                <thead>
                                    <tr>
                                        <th>{"#"}</th>
                                        <th>{"Username"}</th>
                                        <th>{"Role"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {
                                        created.iter().map(|user| {
                                            let role_name = user
                                                .role_id
                                                .and_then(|id| Role::from_id(u64::from(id)))
                                                .map(|r| r.display_name().to_string())
                                                .unwrap_or_else(|| "—".to_string());
                                            html! {
                                                <tr key={user.id}>
                                                    <td>{user.id}</td>
                                                    <td>{&user.username}</td>
                                                    <td>{role_name}</td>
                                                </tr>
                                            }
                                        }).collect::<Html>()
                                    }
                                </tbody>
                            </table>
                        }
                    }
                }

                <form class="role-form" onsubmit={on_create_role}>
                    <h2>{"New role"}</h2>
                    <input type="text" placeholder="Role name"
                           value={(*new_role_name).clone()} oninput={on_role_input} />
                    <button type="submit">{"Create role"}</button>
                </form>
            </main>
        </div>
    }
}
