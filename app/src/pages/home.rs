use leptos::prelude::*;

use crate::components::{Badge, Footer, NavBar, SectionTitle};
use crate::content::{Anchor, PROFILE, PROJECTS, SKILL_CATEGORIES};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-xl border border-slate-200 focus:border-secondary focus:ring-2 focus:ring-secondary/20 outline-none transition-all bg-white";

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <main class="flex min-h-screen flex-col bg-slate-50">
            <NavBar />
            <Hero />
            <Skills />
            <Projects />
            <Contact />
            <Footer />
        </main>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=Anchor::About.id() class="min-h-screen flex items-center pt-20 relative overflow-hidden">
            <div class="absolute top-20 right-0 w-[500px] h-[500px] bg-primary/20 rounded-full blur-3xl -z-10 animate-pulse"></div>
            <div class="absolute bottom-0 left-0 w-[400px] h-[400px] bg-secondary/20 rounded-full blur-3xl -z-10"></div>

            <div class="container mx-auto px-6 grid md:grid-cols-2 gap-12 items-center">
                <div class="space-y-8 animate-fade-in-up">
                    <div class="inline-flex items-center space-x-2 bg-white border border-slate-200 rounded-full px-4 py-1.5 shadow-sm">
                        <span class="w-2 h-2 bg-green-500 rounded-full animate-pulse"></span>
                        <span class="text-xs font-semibold text-slate-600 uppercase tracking-wide">
                            "Disponible pour opportunités"
                        </span>
                    </div>

                    <h1 class="text-5xl md:text-7xl font-bold leading-tight text-balance">
                        "Développeuse "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-secondary to-accent">"Full Stack"</span>
                        " & Créative."
                    </h1>

                    <p class="text-xl text-slate-600 max-w-lg leading-relaxed text-balance">
                        {format!("Je suis {}. Actuellement en ", PROFILE.name)}
                        <strong>"Master 2 à MyDigitalSchool Nantes"</strong>
                        " et en alternance à la "
                        <strong>"DGFiP"</strong>
                        ". Je conçois des expériences web modernes et performantes."
                    </p>

                    <div class="flex flex-wrap gap-4 pt-4">
                        <a
                            href=Anchor::Projects.href()
                            class="px-8 py-4 bg-slate-900 text-white font-medium rounded-full hover:bg-secondary hover:scale-105 transition-all duration-300 shadow-lg shadow-slate-900/20"
                        >
                            "Voir mes projets"
                        </a>
                        <a
                            href=Anchor::Contact.href()
                            class="px-8 py-4 bg-white text-slate-900 border border-slate-200 font-medium rounded-full hover:border-secondary hover:text-secondary transition-all duration-300"
                        >
                            "En savoir plus"
                        </a>
                    </div>
                </div>

                <div class="relative h-[500px] w-full hidden md:block">
                    <div class="absolute inset-0 bg-gradient-to-tr from-primary via-white to-secondary rounded-[2rem] opacity-50 rotate-3 transform hover:rotate-0 transition-transform duration-700 ease-out"></div>
                    <div class="absolute inset-0 bg-slate-50 rounded-[2rem] border border-slate-100 shadow-2xl flex items-center justify-center overflow-hidden">
                        <div class="text-center p-8">
                            <div class="w-32 h-32 bg-slate-200 rounded-full mx-auto mb-6 animate-pulse"></div>
                            <p class="text-slate-400 font-mono text-sm">"Photo de profil / Illustration 3D"</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    log::debug!("rendering {} skill categories", SKILL_CATEGORIES.len());

    let categories = SKILL_CATEGORIES
        .iter()
        .map(|category| {
            let badges = category
                .skills
                .iter()
                .map(|skill| view! { <Badge color="bg-white border border-slate-200">{*skill}</Badge> })
                .collect_view();
            view! {
                <div class="p-8 rounded-3xl border border-slate-100 bg-slate-50 hover:shadow-xl hover:-translate-y-1 transition-all duration-300">
                    <div class=format!("w-12 h-12 {} rounded-xl mb-6 flex items-center justify-center", category.color)>
                        <div class="w-6 h-6 bg-slate-900/10 rounded-full"></div>
                    </div>
                    <h3 class="text-xl font-bold mb-6">{category.title}</h3>
                    <div class="flex flex-wrap gap-2">{badges}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=Anchor::Skills.id() class="py-32 bg-white">
            <div class="container mx-auto px-6">
                <SectionTitle>"Expertise Technique"</SectionTitle>
                <div class="grid md:grid-cols-3 gap-8">{categories}</div>
            </div>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    log::debug!("rendering {} project cards", PROJECTS.len());

    let cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| {
            // Every other card is pushed down to stagger the two columns.
            let offset = if index % 2 != 0 { "md:mt-24" } else { "" };
            view! {
                <div class=format!("group cursor-pointer {offset}")>
                    <div class="relative aspect-[4/3] bg-white rounded-2xl overflow-hidden mb-6 shadow-sm border border-slate-100">
                        <div class="absolute inset-0 bg-slate-200 group-hover:scale-105 transition-transform duration-700 ease-out"></div>
                        <div class="absolute inset-0 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-300 bg-black/5">
                            <span class="bg-white px-6 py-3 rounded-full text-sm font-bold shadow-lg">"Voir le projet"</span>
                        </div>
                    </div>
                    <div class="flex justify-between items-start">
                        <div>
                            <h3 class="text-2xl font-bold mb-2 group-hover:text-secondary transition-colors">
                                {project.name()}
                            </h3>
                            <p class="text-slate-500">{project.stack}</p>
                        </div>
                        <div class="w-10 h-10 rounded-full border border-slate-200 flex items-center justify-center group-hover:bg-secondary group-hover:border-secondary group-hover:text-white transition-all">
                            "\u{2197}"
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=Anchor::Projects.id() class="py-32 bg-slate-50">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row md:items-end justify-between mb-16">
                    <SectionTitle margin="mb-0">"Projets Sélectionnés"</SectionTitle>
                    <a href="#" class="text-slate-500 hover:text-secondary border-b border-slate-300 pb-1 hover:border-secondary transition-all">
                        "Voir tout le portfolio"
                    </a>
                </div>
                <div class="grid md:grid-cols-2 gap-x-12 gap-y-24">{cards}</div>
            </div>
        </section>
    }
}

/// The form is not wired to anything: the button does not submit and the
/// only validation is the browser's handling of `required` and `type`.
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Anchor::Contact.id() class="py-32 bg-white">
            <div class="container mx-auto px-6 max-w-4xl">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-6xl font-bold mb-6">"Parlons de votre projet."</h2>
                    <p class="text-xl text-slate-600">
                        "À la recherche d'une opportunité en agence ou d'une collaboration technique ?"
                    </p>
                </div>

                <form class="space-y-6 bg-slate-50 p-8 md:p-12 rounded-3xl border border-slate-100">
                    <div class="grid md:grid-cols-2 gap-6">
                        <div class="space-y-2">
                            <label for="name" class="text-sm font-medium text-slate-700">"Nom complet"</label>
                            <input type="text" id="name" name="name" required=true class=INPUT_CLASS placeholder="John Doe" />
                        </div>
                        <div class="space-y-2">
                            <label for="email" class="text-sm font-medium text-slate-700">"Email professionnel"</label>
                            <input type="email" id="email" name="email" required=true class=INPUT_CLASS placeholder="john@agence.com" />
                        </div>
                    </div>
                    <div class="space-y-2">
                        <label for="message" class="text-sm font-medium text-slate-700">"Message"</label>
                        <textarea
                            id="message"
                            name="message"
                            rows=4
                            required=true
                            class=format!("{INPUT_CLASS} resize-none")
                            placeholder="Dites-m'en plus sur le poste..."
                        ></textarea>
                    </div>
                    <button type="button" class="w-full py-4 bg-slate-900 text-white font-bold rounded-xl hover:bg-secondary transition-colors shadow-lg shadow-slate-900/10">
                        "Envoyer le message"
                    </button>
                </form>
            </div>
        </section>
    }
}
