/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::config::api_client;
use kitchen_api_client::form::{FormField, RegistrationForm, NO_PLAN};
use kitchen_api_client::kitchen_api_types::ServicePlan;
use kitchen_api_client::submission::SUCCESS_DISPLAY;
use kitchen_api_client::{PlanCatalogLoader, RegistrationDialog, SubmissionState};
use leptos::*;
use wasm_bindgen::JsValue;

/// The dialog is open while the location hash is `#register`, so any plain
/// link on the page can open it.
pub const REGISTER_HREF: &str = "#register";

pub fn is_register_hash(hash: &str) -> bool {
    let hash = hash.strip_prefix('#').unwrap_or(hash);
    REGISTER_HREF.strip_prefix('#') == Some(hash)
}

fn hash_is_register() -> bool {
    is_register_hash(&window().location().hash().unwrap_or_default())
}

/// Drop the hash without adding a history entry or scrolling.
fn clear_hash() {
    let window = window();
    let location = window.location();
    let url = format!(
        "{}{}",
        location.pathname().unwrap_or_default(),
        location.search().unwrap_or_default()
    );
    let result = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
    if let Err(e) = result {
        log::warn!("Failed to clear location hash: {e:?}");
    }
}

type FieldSetter = fn(&mut RegistrationForm, String);

#[island]
pub fn RegisterDialog() -> impl IntoView {
    let dialog = create_rw_signal(RegistrationDialog::default());
    let open = create_memo(move |_| dialog.with(|d| d.open));
    let state = create_memo(move |_| dialog.with(|d| d.state.clone()));
    let plans = create_rw_signal(Vec::<ServicePlan>::new());
    let loader = store_value(PlanCatalogLoader::new(api_client()));

    // Effects only run in the browser.
    create_effect(move |_| {
        dialog.update(|d| d.set_open(hash_is_register()));
        let listener = window_event_listener(ev::hashchange, move |_| {
            dialog.update(|d| d.set_open(hash_is_register()));
        });
        on_cleanup(move || listener.remove());
    });

    // Plans are refetched on every open; a slower earlier load is dropped.
    let fetched = create_local_resource(
        move || open.get(),
        move |is_open| async move {
            if is_open {
                loader.get_value().load().await
            } else {
                None
            }
        },
    );
    let plans_loading = fetched.loading();
    create_effect(move |_| {
        if let Some(Some(catalog)) = fetched.get() {
            plans.set(catalog.selectable_plans().to_vec());
        }
    });

    let close = move || {
        if state.with_untracked(SubmissionState::is_submitting) {
            return;
        }
        dialog.update(|d| d.set_open(false));
        clear_hash();
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        dialog.update(|d| request = d.submit());
        let Some(request) = request else {
            return;
        };

        let client = loader.with_value(|loader| loader.client().clone());
        spawn_local(async move {
            let result = client.register_tenant(&request).await;
            if let Err(e) = &result {
                log::warn!("Registration rejected: {e}");
            }
            dialog.update(|d| d.finish(&result));
            if result.is_ok() {
                set_timeout(
                    move || {
                        dialog.update(RegistrationDialog::confirmation_elapsed);
                        clear_hash();
                    },
                    SUCCESS_DISPLAY,
                );
            }
        });
    };

    let field_value = move |get: fn(&RegistrationForm) -> &String| {
        Signal::derive(move || dialog.with(|d| get(&d.form).clone()))
    };
    let field_error = move |field: FormField| {
        Signal::derive(move || dialog.with(|d| d.field_errors.get(field)))
    };
    let bind = move |set: FieldSetter| {
        move |ev: ev::Event| dialog.update(|d| set(&mut d.form, event_target_value(&ev)))
    };

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/60 px-4">
                <div
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="register-title"
                    class="card-apple w-full max-w-lg max-h-[90vh] overflow-y-auto"
                >
                    <Show
                        when=move || state.with(SubmissionState::is_success)
                        fallback=move || {
                            view! {
                                <form on:submit=on_submit novalidate=true class="space-y-6">
                                    <h2 id="register-title" class="text-subheadline text-foreground">
                                        "Register Your Kitchen"
                                    </h2>

                                    <fieldset class="space-y-3">
                                        <legend class="text-sm font-semibold text-foreground mb-2">"Kitchen Details"</legend>
                                        <FormInput
                                            kind="text"
                                            placeholder="Kitchen Name *"
                                            value=field_value(|f| &f.kitchen_name)
                                            on_input=bind(|f, v| f.kitchen_name = v)
                                            error=field_error(FormField::KitchenName)
                                        />
                                        <FormInput
                                            kind="text"
                                            placeholder="Subdomain (e.g. downtown-kitchen) *"
                                            value=field_value(|f| &f.subdomain)
                                            on_input=bind(|f, v| f.subdomain = v)
                                            error=field_error(FormField::Subdomain)
                                            hint="Used for your kitchen URL. Letters, numbers, hyphens, underscores."
                                        />
                                    </fieldset>

                                    <fieldset class="space-y-3">
                                        <legend class="text-sm font-semibold text-foreground mb-2">"Subscription"</legend>
                                        <select
                                            class="w-full rounded-lg border border-border bg-background px-4 py-3"
                                            prop:value=move || dialog.with(|d| d.form.plan.clone())
                                            on:change=bind(|f, v| f.plan = v)
                                            disabled=move || plans_loading.get()
                                        >
                                            <option value=NO_PLAN>"No Plan (assign later)"</option>
                                            {move || {
                                                plans.with(|plans| {
                                                    plans
                                                        .iter()
                                                        .map(|plan| view! {
                                                            <option value=plan.id.to_string()>{plan.option_label()}</option>
                                                        })
                                                        .collect_view()
                                                })
                                            }}
                                        </select>
                                        {move || plans_loading.get().then(|| view! {
                                            <p class="text-xs text-foreground-tertiary">"Loading plans..."</p>
                                        })}
                                        <FieldError error=field_error(FormField::Plan)/>
                                    </fieldset>

                                    <fieldset class="space-y-3">
                                        <legend class="text-sm font-semibold text-foreground mb-2">"Admin Account"</legend>
                                        <FormInput
                                            kind="email"
                                            placeholder="Admin Email *"
                                            value=field_value(|f| &f.admin_email)
                                            on_input=bind(|f, v| f.admin_email = v)
                                            error=field_error(FormField::AdminEmail)
                                        />
                                        <FormInput
                                            kind="password"
                                            placeholder="Admin Password (min 8 characters) *"
                                            value=field_value(|f| &f.admin_password)
                                            on_input=bind(|f, v| f.admin_password = v)
                                            error=field_error(FormField::AdminPassword)
                                        />
                                    </fieldset>

                                    {move || {
                                        state
                                            .with(|s| s.error().map(str::to_string))
                                            .map(|message| view! {
                                                <p role="alert" class="whitespace-pre-line rounded-lg bg-red-500/10 px-4 py-3 text-sm text-red-600">
                                                    {message}
                                                </p>
                                            })
                                    }}

                                    <div class="flex justify-end gap-3">
                                        <button
                                            type="button"
                                            class="btn-secondary px-6 py-3"
                                            on:click=move |_| close()
                                            disabled=move || state.with(SubmissionState::is_submitting)
                                        >
                                            "Cancel"
                                        </button>
                                        <button
                                            type="submit"
                                            class="btn-primary px-6 py-3"
                                            disabled=move || !state.with(SubmissionState::can_submit)
                                        >
                                            {move || {
                                                if state.with(SubmissionState::is_submitting) {
                                                    "Submitting..."
                                                } else {
                                                    "Submit Request"
                                                }
                                            }}
                                        </button>
                                    </div>
                                </form>
                            }
                        }
                    >
                        <div class="text-center py-8">
                            <h2 id="register-title" class="text-subheadline text-foreground mb-4">
                                "Request Received!"
                            </h2>
                            <p class="text-body text-foreground-secondary">
                                "We'll review your request and activate your kitchen dashboard shortly. You'll receive an email once it's ready."
                            </p>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn FormInput<F>(
    kind: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    on_input: F,
    error: Signal<Option<&'static str>>,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView
where
    F: Fn(ev::Event) + 'static,
{
    view! {
        <div>
            <input
                type=kind
                placeholder=placeholder
                aria-label=placeholder
                aria-invalid=move || error.with(Option::is_some).to_string()
                class="w-full rounded-lg border border-border bg-background px-4 py-3"
                prop:value=move || value.get()
                on:input=on_input
            />
            {hint.map(|hint| view! { <p class="mt-1 text-xs text-foreground-tertiary">{hint}</p> })}
            <FieldError error=error/>
        </div>
    }
}

#[component]
fn FieldError(error: Signal<Option<&'static str>>) -> impl IntoView {
    move || error.get().map(|message| view! { <p class="mt-1 text-xs text-red-600">{message}</p> })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_hash_opens_dialog() {
        assert!(is_register_hash("#register"));
        assert!(is_register_hash("register"));
        assert!(!is_register_hash(""));
        assert!(!is_register_hash("#pricing"));
        assert!(!is_register_hash("#register-now"));
    }
}
