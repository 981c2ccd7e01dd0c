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

const STATS: [(&str, &str); 3] = [
    ("100+", "Active Kitchens"),
    ("50,000+", "Meals Managed Daily"),
    ("99.9%", "Uptime"),
];

#[component]
pub fn SocialProofSection() -> impl IntoView {
    view! {
        <section id="testimonials" class="py-24 bg-background-secondary">
            <div class="max-w-5xl mx-auto px-4 text-center">
                <h2 class="text-headline text-foreground mb-16">
                    "Trusted by Kitchens in Sharjah and Dubai"
                </h2>
                <div class="grid sm:grid-cols-3 gap-8">
                    {STATS
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <div>
                                    <div class="text-4xl font-bold text-primary mb-2">{value}</div>
                                    <div class="text-body text-foreground-secondary">{label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
