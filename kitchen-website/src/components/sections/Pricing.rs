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

use crate::components::CTAButton::{ButtonVariant, CTAButton};
use crate::components::FeatureList::FeatureList;
use crate::components::RegisterDialog::REGISTER_HREF;
use crate::config::api_client;
use kitchen_api_client::kitchen_api_types::{PlanCatalog, ServicePlan};
use kitchen_api_client::PlanCatalogLoader;
use leptos::*;

/// Plans from the backend, or the built-in catalog until (or unless) they
/// arrive. The server render always shows the built-in catalog.
#[island]
pub fn PricingSection() -> impl IntoView {
    let loader = store_value(PlanCatalogLoader::new(api_client()));
    let catalog = create_rw_signal(PlanCatalog::default_catalog());

    let fetched = create_local_resource(
        || (),
        move |_| async move { loader.get_value().load().await },
    );
    let loading = fetched.loading();

    create_effect(move |_| {
        if let Some(Some(latest)) = fetched.get() {
            log::debug!("Showing {} plans ({:?})", latest.plans().len(), latest.source());
            catalog.set(latest);
        }
    });

    view! {
        <section id="pricing" class="py-24">
            <div class="text-center mb-20 px-4">
                <h2 class="text-headline text-foreground mb-6">"Simple, Transparent Pricing"</h2>
                <p class="text-body-large text-foreground-secondary max-w-3xl mx-auto">
                    "Start free and upgrade as you grow. No hidden fees, no surprises."
                </p>
            </div>

            <div
                class=move || {
                    format!(
                        "grid md:grid-cols-2 gap-8 lg:gap-12 max-w-4xl mx-auto px-4 transition-opacity {}",
                        if loading.get() { "opacity-50" } else { "opacity-100" },
                    )
                }
                aria-busy=move || loading.get().to_string()
            >
                {move || {
                    catalog.with(|catalog| {
                        catalog
                            .plans()
                            .iter()
                            .cloned()
                            .map(|plan| view! { <PricingCard plan=plan/> })
                            .collect_view()
                    })
                }}
            </div>
        </section>
    }
}

#[component]
fn PricingCard(plan: ServicePlan) -> impl IntoView {
    let highlighted = plan.is_highlighted();
    let card_class = if highlighted {
        "card-apple relative transform scale-105 ring-2 ring-primary/20"
    } else {
        "card-apple relative"
    };
    let variant = if highlighted {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Secondary
    };
    let yearly = plan.yearly_label();

    view! {
        <div class=format!("{card_class} group hover:shadow-lg transition-all duration-300")>
            {highlighted.then(|| view! {
                <div class="absolute -top-4 left-1/2 transform -translate-x-1/2">
                    <span class="bg-primary text-white px-4 py-1 rounded-full text-sm font-medium">
                        "Most Popular"
                    </span>
                </div>
            })}

            <div class="text-center mb-8">
                <h3 class="text-subheadline text-foreground mb-2">{plan.name.clone()}</h3>
                <div class="text-4xl font-bold text-foreground mb-2">
                    {plan.price_label()}
                    <span class="text-base font-normal text-foreground-secondary">{plan.price_period()}</span>
                </div>
                {yearly.map(|label| view! { <p class="text-sm text-foreground-tertiary mb-2">{label}</p> })}
                <p class="text-body text-foreground-secondary">{plan.description.clone()}</p>
            </div>

            <FeatureList items=plan.feature_bullets()/>

            <CTAButton href=REGISTER_HREF variant=variant class="w-full">
                "Get Started"
            </CTAButton>
        </div>
    }
}
