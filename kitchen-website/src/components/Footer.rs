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

use crate::config::SUPPORT_EMAIL;
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-16 px-6 relative overflow-hidden border-t border-border/10">
            <div class="max-w-5xl mx-auto flex flex-col md:flex-row justify-between items-center gap-8">
                <a href="/" class="flex items-center gap-3">
                    <img class="h-10 w-auto" src="/assets/logo.png" alt="Fun Adventure Kitchen"/>
                    <span class="text-lg font-semibold text-foreground">"Fun Adventure Kitchen"</span>
                </a>
                <nav class="flex items-center gap-6 text-sm text-foreground-secondary">
                    <a href="#features" class="hover:text-foreground transition-colors">"Features"</a>
                    <a href="#pricing" class="hover:text-foreground transition-colors">"Pricing"</a>
                    <a href=format!("mailto:{SUPPORT_EMAIL}") class="hover:text-foreground transition-colors">
                        "Contact"
                    </a>
                </nav>
            </div>
            <p class="mt-12 text-center text-xs text-foreground-tertiary">
                "© 2026 Fun Adventure. All rights reserved."
            </p>
        </footer>
    }
}
