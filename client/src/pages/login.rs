//! Login page: email + password, then a TOTP code when the account has
//! two-factor enabled.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, LoginStage};
use crate::util::auth::{TOTP_CODE_LEN, normalize_totp_code};

fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn validate_totp(raw: &str) -> Result<String, &'static str> {
    normalize_totp_code(raw).ok_or("Enter the 6-digit code from your authenticator app.")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());

    // Already signed in: go straight to the dashboard.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if auth.with(|a| a.user.is_some()) {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let on_credentials = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|a| a.submitting) {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
            Ok(values) => values,
            Err(msg) => {
                auth.update(|a| a.error = Some(msg.to_owned()));
                return;
            }
        };
        auth.update(AuthState::begin_submit);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::login(&email_value, &password_value).await;
            let signed_in = auth.try_update(|a| a.apply_login(result)).unwrap_or(false);
            if signed_in {
                let user = crate::net::api::fetch_current_user().await;
                auth.update(|a| a.set_user(user));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    let on_totp = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|a| a.submitting) {
            return;
        }
        let LoginStage::Totp { mfa_token } = auth.with_untracked(|a| a.stage.clone()) else {
            return;
        };
        let code_value = match validate_totp(&code.get_untracked()) {
            Ok(value) => value,
            Err(msg) => {
                auth.update(|a| a.error = Some(msg.to_owned()));
                return;
            }
        };
        auth.update(AuthState::begin_submit);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::verify_mfa(&mfa_token, &code_value).await;
            let verified = auth.try_update(|a| a.apply_verify(result)).unwrap_or(false);
            if verified {
                code.set(String::new());
                let user = crate::net::api::fetch_current_user().await;
                auth.update(|a| a.set_user(user));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (mfa_token, code_value);
        }
    };

    let is_totp = move || auth.with(|a| matches!(a.stage, LoginStage::Totp { .. }));
    let busy = move || auth.with(|a| a.submitting);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"K2M Analytics"</h1>
                <Show
                    when=is_totp
                    fallback=move || {
                        view! {
                            <p class="login-card__subtitle">"Sign in"</p>
                            <form class="login-form" on:submit=on_credentials>
                                <input
                                    class="login-input"
                                    type="email"
                                    autocomplete="username"
                                    placeholder="you@company.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="password"
                                    autocomplete="current-password"
                                    placeholder="Password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <button class="btn btn--primary login-button" type="submit" disabled=busy>
                                    {move || if busy() { "Signing in..." } else { "Sign in" }}
                                </button>
                            </form>
                        }
                    }
                >
                    <p class="login-card__subtitle">"Two-factor authentication"</p>
                    <form class="login-form" on:submit=on_totp>
                        <input
                            class="login-input login-input--code"
                            type="text"
                            inputmode="numeric"
                            autocomplete="one-time-code"
                            maxlength=(TOTP_CODE_LEN + 1).to_string()
                            placeholder="123456"
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary login-button" type="submit" disabled=busy>
                            {move || if busy() { "Verifying..." } else { "Verify" }}
                        </button>
                        <button class="btn login-button--secondary" type="button" on:click=move |_| auth.update(AuthState::restart)>
                            "Use a different account"
                        </button>
                    </form>
                </Show>
                <Show when=move || auth.with(|a| a.error.is_some())>
                    <p class="login-message">{move || auth.with(|a| a.error.clone().unwrap_or_default())}</p>
                </Show>
            </div>
        </div>
    }
}
