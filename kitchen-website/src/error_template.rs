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

use crate::errors::AppError;
use cfg_if::cfg_if;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match (outside_errors, errors) {
        (Some(outside), _) => create_rw_signal(outside),
        (None, Some(errors)) => errors,
        (None, None) => create_rw_signal(Errors::default()),
    };

    let errors: Vec<AppError> = errors
        .get_untracked()
        .into_iter()
        .filter_map(|(_, error)| error.downcast_ref::<AppError>().cloned())
        .collect();

    cfg_if! {
        if #[cfg(feature = "ssr")] {
            if let (Some(error), Some(response)) =
                (errors.first(), use_context::<leptos_axum::ResponseOptions>())
            {
                response.set_status(error.status_code());
            }
        }
    }

    view! {
        <Title text="Not Found"/>
        <section class="min-h-screen flex flex-col items-center justify-center gap-6 px-4 text-center">
            {errors
                .into_iter()
                .map(|error| {
                    let status = error.status_code();
                    view! {
                        <h1 class="text-hero text-foreground">{status.as_u16()}</h1>
                        <p class="text-body-large text-foreground-secondary">{error.to_string()}</p>
                    }
                })
                .collect_view()}
            <a href="/" class="btn-primary px-6 py-3">"Back to Fun Adventure Kitchen"</a>
        </section>
    }
}
