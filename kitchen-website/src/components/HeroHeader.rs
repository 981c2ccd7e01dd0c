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

use crate::components::CTAButton::{ButtonSize, ButtonVariant, CTAButton};
use crate::components::RegisterDialog::REGISTER_HREF;
use leptos::*;

const NAV_LINKS: [(&str, &str); 3] = [
    ("#features", "Features"),
    ("#pricing", "Pricing"),
    ("#testimonials", "Testimonials"),
];

#[component]
pub fn HeroHeader() -> impl IntoView {
    view! {
        <MobileMenuProvider>
            <nav class="sticky top-0 z-50 backdrop-blur-md bg-background/90 border-b border-border/10">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center h-16">
                        <a href="/" class="flex items-center gap-2 flex-shrink-0 transition-opacity hover:opacity-80">
                            <img class="h-10 w-auto" src="/assets/logo.png" alt="Fun Adventure Kitchen"/>
                            <span class="font-semibold text-foreground">"Fun Adventure Kitchen"</span>
                        </a>

                        <div class="hidden md:flex items-center space-x-8">
                            {NAV_LINKS
                                .into_iter()
                                .map(|(href, text)| view! { <NavLink href=href text=text/> })
                                .collect_view()}
                        </div>

                        <div class="flex items-center space-x-4">
                            <a href=REGISTER_HREF class="hidden md:inline-flex btn-primary text-sm px-4 py-2">
                                "Register Kitchen"
                            </a>
                            <MobileMenuButton/>
                        </div>
                    </div>
                </div>

                <MobileMenu/>
            </nav>

            <section class="relative overflow-hidden bg-background">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="pt-24 pb-32 lg:pt-32 lg:pb-40">
                        <div class="text-center max-w-4xl mx-auto">
                            <span class="inline-block mb-6 px-4 py-1 rounded-full bg-primary/10 text-primary text-sm font-medium">
                                "Trusted by 100+ kitchens in UAE"
                            </span>
                            <h1 class="text-hero text-foreground mb-6">
                                "Automate Your "
                                <span class="text-primary">"Tiffin & Meal Prep"</span>
                                " Business."
                            </h1>
                            <p class="text-body-large text-foreground-secondary mb-12 max-w-2xl mx-auto">
                                "Stop managing orders on WhatsApp. Get a dedicated Customer App, Auto-Invoicing, and Smart Menu Planning in minutes."
                            </p>
                            <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                                <CTAButton href=REGISTER_HREF size=ButtonSize::Large>
                                    "Get Started for Free"
                                </CTAButton>
                                <CTAButton href="#features" variant=ButtonVariant::Secondary size=ButtonSize::Large>
                                    "See How It Works"
                                </CTAButton>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </MobileMenuProvider>
    }
}

#[component]
fn NavLink(href: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            class="text-foreground-secondary hover:text-foreground transition-colors duration-200 text-sm font-medium"
        >
            {text}
        </a>
    }
}

#[island]
fn MobileMenuProvider(children: Children) -> impl IntoView {
    provide_context(create_rw_signal(false));
    children()
}

#[island]
fn MobileMenuButton() -> impl IntoView {
    let (menu_open, set_menu_open) = expect_context::<RwSignal<bool>>().split();

    view! {
        <button
            class="md:hidden p-2 text-foreground-secondary hover:text-foreground transition-colors"
            on:click=move |_| set_menu_open.update(|open| *open = !*open)
            aria-label="Toggle navigation menu"
        >
            <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                <path
                    class=move || if menu_open.get() { "hidden" } else { "" }
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M4 6h16M4 12h16M4 18h16"
                />
                <path
                    class=move || if menu_open.get() { "" } else { "hidden" }
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M6 18L18 6M6 6l12 12"
                />
            </svg>
        </button>
    }
}

#[island]
fn MobileMenu() -> impl IntoView {
    let (menu_open, set_menu_open) = expect_context::<RwSignal<bool>>().split();
    let close = move || set_menu_open.set(false);

    view! {
        <div class=move || {
            format!(
                "md:hidden absolute top-full left-0 right-0 bg-background-secondary/95 backdrop-blur-md border-b border-border {}",
                if menu_open.get() { "block" } else { "hidden" },
            )
        }>
            <div class="px-4 py-6 space-y-4">
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, text)| view! { <MobileNavLink href=href text=text on_click=close/> })
                    .collect_view()}
                <MobileNavLink href=REGISTER_HREF text="Register Kitchen" on_click=close/>
            </div>
        </div>
    }
}

#[component]
fn MobileNavLink<F>(href: &'static str, text: &'static str, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <a
            href=href
            class="block text-foreground-secondary hover:text-foreground transition-colors duration-200 text-base font-medium py-2"
            on:click=move |_| on_click()
        >
            {text}
        </a>
    }
}
