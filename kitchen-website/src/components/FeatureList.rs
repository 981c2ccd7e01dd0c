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

use leptos::*;

#[component]
pub fn FeatureListItem(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <li class="flex items-center text-foreground-secondary">
            <div class="w-5 h-5 rounded-full bg-primary/10 flex items-center justify-center mr-3 flex-shrink-0">
                <svg class="w-3 h-3 text-primary" fill="currentColor" viewBox="0 0 20 20">
                    <path
                        fill-rule="evenodd"
                        d="M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z"
                        clip-rule="evenodd"
                    />
                </svg>
            </div>
            <span class="text-sm">{text}</span>
        </li>
    }
}

/// Check-marked bullet list, used for plan features.
#[component]
pub fn FeatureList(items: Vec<String>) -> impl IntoView {
    view! {
        <ul class="space-y-4 mb-8">
            {items
                .into_iter()
                .map(|text| view! { <FeatureListItem text=text/> })
                .collect_view()}
        </ul>
    }
}
