use leptos::prelude::*;
use leptos_meta::Title;

use super::content::*;
use super::scroll::{BackToTop, ScrollAnimations};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <ScrollAnimations />
        <div class="w-full overflow-x-hidden">
            <Hero />
            <About />
            <Skills />
            <Experience />
            <Projects />
            <Services />
            <Certificates />
            <Contact />
        </div>
        <footer class="py-10 text-center text-sm text-muted border-t border-muted/20">
            <p>{format!("© {NAME}. Built with Rust, Leptos and WebAssembly.")}</p>
        </footer>
        <BackToTop />
    }
}

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="relative z-10 mb-12 text-center">
            <h2 data-gsap-heading="" class="text-4xl font-bold">
                {title}
            </h2>
            <p data-gsap-subheading="" class="mt-3 text-lg text-muted">
                {subtitle}
            </p>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="hero-blob absolute -top-24 -left-24 w-96 h-96 rounded-full bg-blue/30 blur-3xl"></div>
            <div class="hero-blob absolute top-1/3 -right-32 w-[28rem] h-[28rem] rounded-full bg-purple/30 blur-3xl"></div>
            <div class="hero-blob absolute bottom-0 left-1/4 w-80 h-80 rounded-full bg-cyan/20 blur-3xl"></div>
            <div class="hero-content relative z-10 text-center px-6">
                <p class="text-cyan font-medium mb-4">"Hi, I'm"</p>
                <h1 class="text-5xl lg:text-7xl font-bold">{NAME}</h1>
                <p class="mt-6 text-xl text-muted">{TAGLINE}</p>
                <div class="mt-10 flex justify-center gap-4">
                    <a href="#projects" class="px-6 py-3 rounded-md bg-blue/20 border border-blue/40">
                        "See my work"
                    </a>
                    <a href="#contact" class="px-6 py-3 rounded-md border border-muted/40">
                        "Get in touch"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-32 px-6">
            <SectionHeading title="About Me" subtitle="A little background" />
            <div class="relative z-10 max-w-5xl mx-auto grid lg:grid-cols-2 gap-12 items-center">
                <div class="gsap-about-card p-8 rounded-2xl bg-brightBlack/30 border border-muted/20">
                    {BIO.iter().map(|p| view! { <p class="gsap-bio-text mb-4 leading-relaxed">{*p}</p> }).collect_view()}
                </div>
                <div class="grid grid-cols-3 gap-6 text-center">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div>
                                    <span
                                        class="gsap-stat-number block text-4xl font-bold text-cyan"
                                        data-target=stat.value.to_string()
                                    >
                                        {format!("{}+", stat.value)}
                                    </span>
                                    <span class="text-sm text-muted">{stat.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-32 px-6">
            <SectionHeading title="Skills" subtitle="What I reach for" />
            <div class="relative z-10 max-w-5xl mx-auto grid md:grid-cols-3 gap-6">
                {SKILL_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="gsap-skill-item p-6 rounded-xl bg-brightBlack/30">
                                <h3 class="font-bold mb-3">{group.title}</h3>
                                <ul class="space-y-1 text-muted">
                                    {group.skills.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="relative z-10 max-w-4xl mx-auto mt-12 flex flex-wrap justify-center gap-3">
                {TECH_CHIPS
                    .iter()
                    .map(|chip| {
                        view! {
                            <span class="gsap-tech-chip px-3 py-1 rounded-full text-sm border border-cyan/30 text-cyan">
                                {*chip}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-32 px-6">
            <SectionHeading title="Experience" subtitle="Where I've been" />
            <div class="relative z-10 max-w-4xl mx-auto">
                <div class="gsap-timeline-line absolute left-1/2 top-0 h-full w-px bg-gradient-to-b from-blue to-purple"></div>
                {ROLES
                    .iter()
                    .enumerate()
                    .map(|(i, role)| {
                        let side = if i % 2 == 0 { "mr-auto pr-12" } else { "ml-auto pl-12" };
                        view! {
                            <div class=format!("gsap-exp-card relative w-1/2 mb-12 {side}")>
                                <div class="p-6 rounded-xl bg-brightBlack/30 border border-muted/20">
                                    <p class="text-sm text-cyan">{role.period}</p>
                                    <h3 class="text-xl font-bold mt-1">{role.title}</h3>
                                    <p class="text-muted">{role.company}</p>
                                    <p class="mt-3 leading-relaxed">{role.summary}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-32 px-6">
            <SectionHeading title="Projects" subtitle="Things I've built" />
            <div class="relative z-10 max-w-5xl mx-auto grid md:grid-cols-2 gap-8">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <a
                                href=project.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="gsap-project-card block p-6 rounded-xl bg-brightBlack/30 border border-muted/20 hover:border-cyan/40"
                            >
                                <h3 class="text-xl font-bold">{project.name}</h3>
                                <p class="mt-2 text-muted">{project.description}</p>
                                <div class="mt-4 flex gap-2">
                                    {project
                                        .tech
                                        .iter()
                                        .map(|t| view! { <span class="text-xs px-2 py-1 rounded bg-blue/20">{*t}</span> })
                                        .collect_view()}
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Services() -> impl IntoView {
    view! {
        <section id="services" class="relative py-32 px-6 overflow-hidden">
            <div class="gsap-section-bg absolute inset-0 bg-gradient-to-br from-emerald/10 to-transparent"></div>
            <SectionHeading title="Services" subtitle="How I can help" />
            <div class="relative z-10 max-w-5xl mx-auto grid md:grid-cols-3 gap-6">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <div class="gsap-service-card p-6 rounded-xl bg-brightBlack/30 border border-muted/20">
                                <div class="text-3xl">{service.icon}</div>
                                <h3 class="text-lg font-bold mt-3">{service.title}</h3>
                                <p class="mt-2 text-muted">{service.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Certificates() -> impl IntoView {
    view! {
        <section id="certificates" class="py-32 px-6">
            <SectionHeading title="Certificates" subtitle="Paper that backs it up" />
            <div class="relative z-10 max-w-4xl mx-auto grid sm:grid-cols-2 gap-4">
                {CERTIFICATES
                    .iter()
                    .map(|cert| {
                        view! {
                            <div class="gsap-cert-item p-4 rounded-lg bg-brightBlack/30 border-l-4 border-amber">
                                <p class="font-bold">{cert.name}</p>
                                <p class="text-sm text-muted">{format!("{} · {}", cert.issuer, cert.year)}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="relative z-10 mt-16 space-y-4 overflow-hidden">
                {CAROUSEL
                    .iter()
                    .map(|row| {
                        view! {
                            <div class="gsap-carousel-row flex justify-center gap-8 text-muted whitespace-nowrap">
                                {row.iter().map(|logo| view! { <span>{*logo}</span> }).collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-32 px-6">
            <SectionHeading title="Let's Talk" subtitle="Always happy to hear about interesting problems" />
            <div class="relative z-10 max-w-5xl mx-auto grid lg:grid-cols-2 gap-12">
                <ul class="space-y-4">
                    {CONTACT
                        .iter()
                        .map(|item| {
                            view! {
                                <li class="gsap-contact-item">
                                    <a href=item.href class="block p-4 rounded-lg bg-brightBlack/30 hover:bg-brightBlack/50">
                                        <span class="text-sm text-muted">{item.label}</span>
                                        <span class="block font-medium">{item.value}</span>
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <form class="gsap-contact-form space-y-4" action="mailto:hello@example.com" method="post" enctype="text/plain">
                    <input name="name" type="text" placeholder="Your name" class="w-full px-4 py-2 rounded-md border border-gray-700 bg-gray-800" />
                    <input name="email" type="email" placeholder="Your email" class="w-full px-4 py-2 rounded-md border border-gray-700 bg-gray-800" />
                    <textarea name="message" rows="5" placeholder="What are you working on?" class="w-full px-4 py-2 rounded-md border border-gray-700 bg-gray-800"></textarea>
                    <button type="submit" class="px-6 py-3 rounded-md bg-cyan/20 text-cyan border border-cyan/30">
                        "Send"
                    </button>
                </form>
            </div>
        </section>
    }
}
