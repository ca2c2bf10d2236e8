use leptos::prelude::*;

use crate::content::{Anchor, PROFILE, SOCIAL_LINKS};

const NAV_LINK_CLASS: &str = "hover:text-secondary transition-colors";
const NAV_CTA_CLASS: &str =
    "px-5 py-2.5 bg-slate-900 text-white rounded-full hover:bg-secondary transition-colors";

#[component]
pub fn SectionTitle(
    children: Children,
    #[prop(default = "mb-12")] margin: &'static str,
) -> impl IntoView {
    view! {
        <h2 class=format!("text-3xl md:text-5xl font-bold tracking-tight {margin}")>
            {children()}
        </h2>
    }
}

#[component]
pub fn Badge(
    children: Children,
    #[prop(default = "bg-slate-100")] color: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("px-4 py-2 rounded-full text-sm font-medium {color} text-slate-800")>
            {children()}
        </span>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    // The last anchor is rendered as the call to action.
    let links = Anchor::ALL
        .into_iter()
        .map(|anchor| {
            let class = if anchor == Anchor::Contact {
                NAV_CTA_CLASS
            } else {
                NAV_LINK_CLASS
            };
            view! { <a href=anchor.href() class=class>{anchor.label()}</a> }
        })
        .collect_view();

    view! {
        <nav class="fixed top-0 w-full bg-white/80 backdrop-blur-md z-50 border-b border-slate-100">
            <div class="container mx-auto px-6 h-20 flex items-center justify-between">
                <a href="#" class="text-2xl font-bold tracking-tighter hover:text-secondary transition-colors">
                    {PROFILE.name.to_uppercase()}<span class="text-accent">"."</span>
                </a>
                <div class="hidden md:flex space-x-8 text-sm font-medium text-slate-600">
                    {links}
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = crate::current_year();
    log::debug!("rendering footer for {year}");

    view! {
        <footer class="bg-slate-900 text-slate-400 py-12 border-t border-slate-800">
            <div class="container mx-auto px-6 flex flex-col md:flex-row justify-between items-center gap-6">
                <div class="text-sm">
                    {format!("\u{a9} {year} {}. Tous droits réservés.", PROFILE.name)}
                </div>
                <div class="flex space-x-6">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| view! {
                            <a href=link.href class="hover:text-white transition-colors">{link.label}</a>
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
