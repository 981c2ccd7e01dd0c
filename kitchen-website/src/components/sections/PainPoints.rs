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

const PAIN_POINTS: [(&str, &str); 3] = [
    (
        "Chaos on WhatsApp",
        "Orders, changes and cancellations scattered across hundreds of chats.",
    ),
    (
        "Manual Billing Nightmares",
        "Hours every month reconciling subscriptions and chasing payments.",
    ),
    (
        "Kitchen Confusion",
        "Cooks and drivers working from outdated lists and handwritten notes.",
    ),
];

#[component]
pub fn PainPointsSection() -> impl IntoView {
    view! {
        <section id="problems" class="py-24 bg-background-secondary">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="text-headline text-foreground text-center mb-16">
                    "Running a kitchen shouldn't feel like this"
                </h2>
                <div class="grid md:grid-cols-3 gap-8">
                    {PAIN_POINTS
                        .into_iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="card-apple">
                                    <h3 class="text-subheadline text-foreground mb-3">{title}</h3>
                                    <p class="text-body text-foreground-secondary">{body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
