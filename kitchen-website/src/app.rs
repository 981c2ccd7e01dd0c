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

use crate::pages::Home::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

const DESCRIPTION: &str = "Kitchen management software for tiffin services and meal prep businesses in the UAE. Customer app, auto-invoicing and smart menu planning.";

#[component]
pub fn App() -> impl IntoView {
    let formatter = |text| format!("{text} - Fun Adventure Kitchen");
    provide_meta_context();

    view! {
        <Html lang="en"/>
        <Stylesheet id="leptos" href="/pkg/kitchen_website.css"/>
        <Title formatter/>
        <Meta name="description" content=DESCRIPTION/>

        <Router>
            <Routes>
                <Route path="" view=Home ssr=SsrMode::Async/>
            </Routes>
        </Router>
    }
}
