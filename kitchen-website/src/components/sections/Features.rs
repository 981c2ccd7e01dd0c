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

struct Feature {
    title: &'static str,
    description: &'static str,
    coming_soon: bool,
}

static FEATURES: [Feature; 4] = [
    Feature {
        title: "Daily Rotating Menus",
        description: "Plan weekly menus once and let customers see what's cooking each day.",
        coming_soon: false,
    },
    Feature {
        title: "Subscription Management",
        description: "Pauses, skips and renewals handled by customers in their own app.",
        coming_soon: false,
    },
    Feature {
        title: "Automated Invoicing",
        description: "Invoices generated and sent automatically at the end of every cycle.",
        coming_soon: false,
    },
    Feature {
        title: "Driver Routing",
        description: "Optimised delivery routes for every driver, every day.",
        coming_soon: true,
    },
];

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="py-24">
            <div class="max-w-6xl mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-headline text-foreground mb-6">"Everything your kitchen needs"</h2>
                    <p class="text-body-large text-foreground-secondary max-w-3xl mx-auto">
                        "From the first order to the last delivery, in one dashboard."
                    </p>
                </div>
                <div class="grid md:grid-cols-2 gap-8">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="card-apple relative">
                                    {feature.coming_soon.then(|| view! {
                                        <span class="absolute top-4 right-4 bg-primary/10 text-primary px-3 py-1 rounded-full text-xs font-medium">
                                            "Coming Soon"
                                        </span>
                                    })}
                                    <h3 class="text-subheadline text-foreground mb-3">{feature.title}</h3>
                                    <p class="text-body text-foreground-secondary">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
