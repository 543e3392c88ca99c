// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in translation catalog for the site.
//!
//! Embeds every user-facing string of the site as a compile-time static
//! table, one per locale. [`LocaleTable::builtin`](super::LocaleTable::builtin)
//! turns these tables into the locale table the site renders with.
//!
//! ## Adding a new locale
//!
//! 1. Append its identifier to [`LOCALES`]
//! 2. Create a `const XX: &[(&str, &str)]` table below
//! 3. Add the `"xx" => Some(XX)` arm to `catalog_for()`
//!
//! ## Adding a new key
//!
//! 1. Add the Portuguese entry to `PT_BR` (the default locale owns the
//!    canonical key set)
//! 2. Add translations to the other tables (missing keys fall back to
//!    Portuguese)

/// Supported locales, in the order the language picker lists them.
pub const LOCALES: &[&str] = &["pt-br", "en"];

/// Locale served at the unprefixed paths of the site.
pub const DEFAULT_LOCALE: &str = "pt-br";

/// Whether the default locale also gets a `/pt-br/...` path prefix.
pub const SHOW_DEFAULT_LOCALE: bool = false;

pub(crate) type Catalog = &'static [(&'static str, &'static str)];

pub(crate) fn catalog_for(locale: &str) -> Option<Catalog> {
    match locale {
        "pt-br" => Some(PT_BR),
        "en" => Some(EN),
        _ => None,
    }
}

// ─── Portuguese (default locale, all keys defined here) ─────────────

const PT_BR: &[(&str, &str)] = &[
    // Home page
    ("home.meta.title", "Início"),
    (
        "home.meta.description",
        "Escrevo sobre desenvolvimento web, engenharia de software e outros tópicos sobre os quais sou apaixonado.",
    ),
    ("home.title", "Oi, eu sou Vitebo"),
    (
        "home.welcome",
        "Eu sou um desenvolvedor de software e este é o meu site pessoal. Aqui você pode encontrar informações sobre mim, meus projetos e artigos que escrevo. Seja bem-vindo!",
    ),
    ("home.latest-posts", "Últimos artigos"),
    ("home.see-all-posts", "Ver todos os artigos"),
    ("home.contact-me-title", "Entre em contato comigo"),
    (
        "home.contact-me-description",
        "Se você quiser entrar em contato comigo sobre algo ou apenas dizer um oi, entre em contato pelas redes sociais ou envie-me um e-mail.",
    ),
    // Blog index
    ("blog.meta.title", "Blog"),
    (
        "blog.meta.description",
        "Uma coleção de artigos sobre tópicos sobre os quais sou apaixonado.",
    ),
    // Language picker (key spelling is referenced by the templates as-is)
    ("langugae-picker.pt-br", "Português"),
    ("langugae-picker.en", "Inglês"),
    // Navigation
    ("nav.blog", "Blog"),
];

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    ("home.meta.title", "Home"),
    (
        "home.meta.description",
        "I write about web development, software engineering, and other topics I am passionate about.",
    ),
    ("home.title", "Hi, I'm Vitebo"),
    (
        "home.welcome",
        "I am a software developer and this is my personal website. Here you can find information about me, my projects and articles I write. Welcome!",
    ),
    ("home.latest-posts", "Latest posts"),
    ("home.see-all-posts", "See all posts"),
    ("home.contact-me-title", "Let's Connect\n"),
    (
        "home.contact-me-description",
        "If you want to get in touch with me about something or just to say hi, reach out on social media or send me an email.",
    ),
    ("blog.meta.title", "Blog"),
    (
        "blog.meta.description",
        "A collection of articles on topics I am passionate about.",
    ),
    ("langugae-picker.pt-br", "Portuguese"),
    ("langugae-picker.en", "English"),
    ("nav.blog", "Blog"),
];
