//! Built-in technology ruleset.
//!
//! A small Wappalyzer-style table: each rule names a technology, its
//! category and the signals that identify it. Patterns are regular
//! expressions matched case-insensitively.

/// Category whose matches populate `ScanResult::platforms`.
pub const WEB_FRAMEWORKS: &str = "web-frameworks";

/// One technology fingerprint.
#[derive(Debug, Clone, Copy)]
pub struct PlatformRule {
    pub name: &'static str,
    pub category: &'static str,
    /// `(header name, value pattern)`; an empty pattern means "header present".
    pub headers: &'static [(&'static str, &'static str)],
    /// Cookie names (exact, case-insensitive) set by the technology.
    pub cookies: &'static [&'static str],
    /// Pattern for `<meta name="generator" content="...">`.
    pub generator: Option<&'static str>,
    /// Patterns searched in the raw HTML.
    pub html: &'static [&'static str],
}

const NONE: PlatformRule = PlatformRule {
    name: "",
    category: WEB_FRAMEWORKS,
    headers: &[],
    cookies: &[],
    generator: None,
    html: &[],
};

pub static DEFAULT_RULES: &[PlatformRule] = &[
    PlatformRule {
        name: "Django",
        cookies: &["csrftoken", "django_language"],
        html: &[r#"name=["']csrfmiddlewaretoken["']"#],
        ..NONE
    },
    PlatformRule {
        name: "Ruby on Rails",
        headers: &[("x-powered-by", r"phusion passenger|rails")],
        cookies: &["_rails_session"],
        html: &[r#"<meta[^>]+name=["']csrf-param["'][^>]+authenticity_token"#],
        ..NONE
    },
    PlatformRule {
        name: "Laravel",
        cookies: &["laravel_session"],
        ..NONE
    },
    PlatformRule {
        name: "Symfony",
        headers: &[("x-debug-token", "")],
        cookies: &["sf_redirect"],
        ..NONE
    },
    PlatformRule {
        name: "CodeIgniter",
        cookies: &["ci_session"],
        ..NONE
    },
    PlatformRule {
        name: "Express",
        headers: &[("x-powered-by", r"^express$")],
        ..NONE
    },
    PlatformRule {
        name: "Microsoft ASP.NET",
        headers: &[("x-powered-by", r"asp\.net"), ("x-aspnet-version", "")],
        cookies: &["asp.net_sessionid", "aspxauth"],
        html: &[r#"name=["']__VIEWSTATE["']"#],
        ..NONE
    },
    PlatformRule {
        name: "Next.js",
        headers: &[("x-powered-by", r"next\.js")],
        html: &[r#"id=["']__NEXT_DATA__["']"#, r"/_next/static/"],
        ..NONE
    },
    PlatformRule {
        name: "Nuxt.js",
        html: &[r"window\.__NUXT__", r"/_nuxt/"],
        ..NONE
    },
    PlatformRule {
        name: "Gatsby",
        generator: Some(r"^gatsby"),
        html: &[r#"id=["']___gatsby["']"#],
        ..NONE
    },
    PlatformRule {
        name: "Angular",
        html: &[r"ng-version="],
        ..NONE
    },
    PlatformRule {
        name: "Hugo",
        generator: Some(r"^hugo"),
        ..NONE
    },
    PlatformRule {
        name: "WordPress",
        category: "cms",
        generator: Some(r"^wordpress"),
        html: &[r"/wp-content/", r"/wp-includes/"],
        ..NONE
    },
    PlatformRule {
        name: "Drupal",
        category: "cms",
        headers: &[("x-drupal-cache", ""), ("x-generator", r"drupal")],
        generator: Some(r"^drupal"),
        ..NONE
    },
    PlatformRule {
        name: "PHP",
        category: "programming-languages",
        headers: &[("x-powered-by", r"php")],
        cookies: &["phpsessid"],
        ..NONE
    },
    PlatformRule {
        name: "Nginx",
        category: "web-servers",
        headers: &[("server", r"nginx")],
        ..NONE
    },
    PlatformRule {
        name: "Apache",
        category: "web-servers",
        headers: &[("server", r"^apache")],
        ..NONE
    },
];
