//! Server-rendered HTML for the landing page, the lobby, and domain pages.
//!
//! Views are plain functions of their inputs; links are built from the mount
//! path so the same markup works at `/` and under a prefix.

use arcade_kernel::domain::catalog::{DomainCatalogEntry, PageView};
use std::borrow::Cow;
use std::fmt::Write;

const STYLES: &str = r"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    background: #0a0a0a;
    min-height: 100vh;
    font-family: 'Press Start 2P', monospace;
    color: #00ff41;
    padding: 2rem;
}
a { color: inherit; }
h1 { font-size: clamp(1.2rem, 4vw, 2.4rem); text-shadow: 0 0 10px #00ff41; margin-bottom: 2rem; }
.subtitle { font-size: 0.7rem; color: #888; margin-top: 2rem; }
.landing { display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 80vh; text-align: center; }
.enter-btn, .nav-btn {
    display: inline-block;
    padding: 1rem 2rem;
    border: 3px solid #00ff41;
    background: linear-gradient(180deg, #1a1a2e 0%, #0f0f1a 100%);
    text-decoration: none;
    box-shadow: 0 0 10px rgba(0, 255, 65, 0.3);
}
.enter-btn:hover, .nav-btn:hover { background: #00ff41; color: #0a0a0a; }
.nav-btn.disabled { opacity: 0.3; pointer-events: none; }
.cabinets { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1.5rem; }
.cabinet-card { border: 3px solid #00ff41; padding: 1.5rem; }
.cabinet-card h2 { font-size: 0.9rem; margin: 1rem 0; }
.cabinet-card p, .standards { font-size: 0.6rem; color: #aaa; margin-bottom: 1rem; }
.page-header { display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 1rem; }
.progress-bar { height: 0.75rem; border: 2px solid #00ff41; margin-bottom: 2rem; }
.progress-bar-fill { height: 100%; background: #00ff41; }
.page-content { border: 3px solid #00ff41; min-height: 50vh; padding: 2rem; margin-bottom: 2rem; }
.page-nav { display: flex; justify-content: space-between; gap: 1rem; font-size: 0.7rem; }
";

/// Escapes text for HTML element content and quoted attribute values.
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// URL of a domain page under `mount`.
#[must_use]
pub fn page_href(mount: &str, domain_num: u32, page_num: u32) -> String {
    format!("{mount}/domain/{domain_num}/page/{page_num}")
}

/// URL of the lobby under `mount`.
#[must_use]
pub fn lobby_href(mount: &str) -> String {
    format!("{mount}/")
}

fn document(title: &str, body: &str, script: Option<&str>) -> String {
    let script = script.map(|js| format!("<script>{js}</script>")).unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Press+Start+2P&display=swap" rel="stylesheet">
    <style>{STYLES}</style>
</head>
<body>
{body}
{script}
</body>
</html>"#,
        title = escape(title),
    )
}

/// The "insert coin" splash served at `/` when the lobby is mounted under a prefix.
#[must_use]
pub fn render_landing(title: &str, mount: &str) -> String {
    let body = format!(
        r#"<main class="landing">
    <h1>{heading}</h1>
    <a href="{href}" class="enter-btn">INSERT COIN</a>
    <p class="subtitle">Professional Development Edition</p>
</main>"#,
        heading = escape(&title.to_uppercase()),
        href = escape(&lobby_href(mount)),
    );
    document(title, &body, None)
}

/// One cabinet card per domain, each starting at page 1.
#[must_use]
pub fn render_lobby(title: &str, mount: &str, domains: &[DomainCatalogEntry]) -> String {
    let mut cards = String::new();
    for domain in domains {
        let standards =
            domain.standards.iter().map(|code| escape(code)).collect::<Vec<_>>().join(" · ");
        let _ = write!(
            cards,
            r#"
    <article class="cabinet-card" id="{id}" data-domain-num="{number}" data-total-pages="{total}">
        <span class="cabinet-number">DOMAIN {number}</span>
        <h2>{domain_title}</h2>
        <p class="progress-text">{total} pages</p>
        <p class="standards">Standards: {standards}</p>
        <a class="enter-btn" href="{href}">START</a>
    </article>"#,
            id = escape(&domain.id),
            number = domain.number,
            total = domain.total_pages,
            domain_title = escape(&domain.title),
            href = escape(&page_href(mount, domain.number, 1)),
        );
    }

    let body = format!(
        r#"<header>
    <h1>{heading}</h1>
</header>
<main class="cabinets">{cards}
</main>"#,
        heading = escape(title),
    );
    document(title, &body, None)
}

/// A domain page with progress and prev/next controls.
///
/// Missing neighbours render as disabled controls without a link.
#[must_use]
pub fn render_page(title: &str, mount: &str, view: &PageView) -> String {
    let nav_link = |target: Option<u32>, class: &str, label: &str| match target {
        Some(page) => format!(
            r#"<a class="nav-btn {class}" rel="{class}" href="{href}">{label}</a>"#,
            href = escape(&page_href(mount, view.domain_num, page)),
        ),
        None => format!(r#"<span class="nav-btn {class} disabled">{label}</span>"#),
    };

    let prev = nav_link(view.prev_page(), "prev", "&#9664; PREV");
    let next = nav_link(view.next_page(), "next", "NEXT &#9654;");
    let lobby = escape(&lobby_href(mount)).into_owned();

    let body = format!(
        r#"<header class="page-header">
    <h1>{domain_title}</h1>
    <span class="progress-text">PAGE {page} / {total}</span>
</header>
<div class="progress-bar"><div class="progress-bar-fill" style="width: {percent}%"></div></div>
<main class="page-content" data-domain-num="{domain}" data-page-num="{page}" data-total-pages="{total}">
    <p>Domain {domain} &middot; Page {page}</p>
</main>
<nav class="page-nav">
    {prev}
    <a class="nav-btn lobby" href="{lobby}">LOBBY</a>
    {next}
</nav>"#,
        domain_title = escape(&view.domain_title),
        domain = view.domain_num,
        page = view.page_num,
        total = view.total_pages,
        percent = view.progress_percent(),
    );

    let script = keyboard_script(mount, view);
    let page_title = format!("{} · {}", view.domain_title, title);
    document(&page_title, &body, Some(&script))
}

/// A JSON string literal that is also safe inside an inline `<script>`.
fn js_string(value: &str) -> String {
    serde_json::to_string(value)
        .map_or_else(|_| "null".to_owned(), |json| json.replace('<', "\\u003c"))
}

/// Left/Right follow prev/next when available, Escape returns to the lobby.
fn keyboard_script(mount: &str, view: &PageView) -> String {
    let target = |page: Option<u32>| {
        page.map_or_else(
            || "null".to_owned(),
            |page| js_string(&page_href(mount, view.domain_num, page)),
        )
    };

    format!(
        r#"
document.addEventListener('keydown', function (e) {{
    var prev = {prev}, next = {next}, lobby = {lobby};
    if (e.key === 'ArrowLeft' && prev) {{ e.preventDefault(); window.location.href = prev; }}
    if (e.key === 'ArrowRight' && next) {{ e.preventDefault(); window.location.href = next; }}
    if (e.key === 'Escape') {{ e.preventDefault(); window.location.href = lobby; }}
}});
"#,
        prev = target(view.prev_page()),
        next = target(view.next_page()),
        lobby = js_string(&lobby_href(mount)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(page_num: u32, total_pages: u32) -> PageView {
        PageView {
            domain_num: 2,
            page_num,
            domain_title: "Programming for Games".to_owned(),
            total_pages,
            has_prev: page_num > 1,
            has_next: page_num < total_pages,
        }
    }

    #[test]
    fn escape_handles_markup() {
        assert_eq!(escape("plain"), "plain");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn hrefs_respect_mount() {
        assert_eq!(page_href("", 1, 2), "/domain/1/page/2");
        assert_eq!(page_href("/gamedev-pd", 1, 2), "/gamedev-pd/domain/1/page/2");
        assert_eq!(lobby_href(""), "/");
        assert_eq!(lobby_href("/gamedev-pd"), "/gamedev-pd/");
    }

    #[test]
    fn first_page_has_no_prev_link() {
        let html = render_page("Arcade", "", &view(1, 39));
        assert!(!html.contains(r#"href="/domain/2/page/0""#));
        assert!(html.contains(r#"<span class="nav-btn prev disabled">"#));
        assert!(html.contains(r#"href="/domain/2/page/2""#));
        assert!(html.contains("PAGE 1 / 39"));
    }

    #[test]
    fn last_page_has_no_next_link() {
        let html = render_page("Arcade", "/pd", &view(39, 39));
        assert!(html.contains(r#"href="/pd/domain/2/page/38""#));
        assert!(html.contains(r#"<span class="nav-btn next disabled">"#));
        assert!(html.contains("width: 100%"));
        assert!(html.contains(r#"lobby = "/pd/""#));
    }

    #[test]
    fn script_values_are_encoded_as_js_strings() {
        let html = render_page("Arcade", r#"/a"b</script>"#, &view(2, 39));
        let script = html.split("<script>").nth(1).expect("keyboard script");
        let script = script.split("</script>").next().expect("closed script");

        assert!(script.contains(r#"lobby = "/a\"b\u003c/script>/""#));
        assert!(script.contains(r#"prev = "/a\"b\u003c/script>/domain/2/page/1""#));
        assert_eq!(html.matches("</script>").count(), 1);
    }

    #[test]
    fn lobby_lists_every_domain_with_start_link() {
        let domains = vec![
            DomainCatalogEntry::new(1, "Game Design Fundamentals", 38, ["1.1", "1.2"]),
            DomainCatalogEntry::new(2, "Art & Sound", 12, ["2.1"]),
        ];
        let html = render_lobby("Game Dev Arcade PD", "", &domains);

        assert!(html.contains("Game Design Fundamentals"));
        assert!(html.contains("Art &amp; Sound"));
        assert!(html.contains("38 pages"));
        assert!(html.contains("Standards: 1.1 · 1.2"));
        assert!(html.contains(r#"href="/domain/2/page/1""#));
        assert_eq!(html.matches("cabinet-card\"").count(), 2);
    }

    #[test]
    fn landing_links_to_the_mounted_lobby() {
        let html = render_landing("Game Dev Arcade", "/gamedev-pd");
        assert!(html.contains("GAME DEV ARCADE"));
        assert!(html.contains(r#"href="/gamedev-pd/" class="enter-btn""#));
    }
}
