//! Storefront shell: navigation, greeting, logout, footer.
//!
//! The main region stays empty; catalog and offer listings are filled in by
//! whatever maintains the static catalog pages.

use crate::config::LOGOUT_PATH;
use crate::pages::html_escape;
use crate::session::Session;

pub const STORE_NAME: &str = "Xteam";

/// Navigation bar entries, in display order: store, library, cart, reviews, about.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("index.html", "Tienda"),
    ("biblioteca.html", "Biblioteca"),
    ("carrito.html", "Carrito"),
    ("reviews.html", "Reseñas"),
    ("nosotros.html", "Acerca de"),
];

pub const CONTACT_LINK: &str = "nosotros.html#contacto";

/// Outcome of checking a session against the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access<'a> {
    Anonymous,
    Member(&'a str),
}

pub fn check_access(session: &Session) -> Access<'_> {
    match session.username() {
        Some(username) => Access::Member(username),
        None => Access::Anonymous,
    }
}

pub fn render_storefront(username: &str) -> String {
    let nav_items: String = NAV_LINKS
        .iter()
        .map(|(href, label)| format!(r#"                <li><a href="{href}">{label}</a></li>"#))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r##"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{store} - Tu tienda de videojuegos</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <header>
        <nav class="navbar">
            <a href="index.html" class="logo">{store}</a>
            <ul class="nav-links">
{nav_items}
            </ul>
            <div class="nav-actions">
                <p>Hola <u>{username}</u></p>
                <a href="{logout}">Cerrar sesión</a>
            </div>
        </nav>
    </header>

    <main class="container">
    </main>

    <footer>
        <a href="{contact}">Contáctanos</a><br><br>
        <p>&copy; 2025 {store}. Todos los derechos reservados.</p>
    </footer>
</body>
</html>
"##,
        store = STORE_NAME,
        nav_items = nav_items,
        username = html_escape(username),
        logout = LOGOUT_PATH,
        contact = CONTACT_LINK,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::USER_ATTRIBUTE;

    fn nav_hrefs(page: &str) -> Vec<&str> {
        let start = page.find(r#"<ul class="nav-links">"#).expect("nav list");
        let end = start + page[start..].find("</ul>").expect("nav list end");
        page[start..end]
            .split(r#"href=""#)
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn anonymous_without_usuario() {
        let session = Session::new().with("cart", "2");
        assert_eq!(check_access(&session), Access::Anonymous);
    }

    #[test]
    fn member_with_usuario() {
        let session = Session::new().with(USER_ATTRIBUTE, "admin");
        assert_eq!(check_access(&session), Access::Member("admin"));
    }

    #[test]
    fn username_is_escaped() {
        let page = render_storefront("Alice<script>");
        assert!(page.contains("Hola <u>Alice&lt;script&gt;</u>"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn five_nav_destinations_and_logout() {
        let page = render_storefront("admin");
        assert_eq!(
            nav_hrefs(&page),
            [
                "index.html",
                "biblioteca.html",
                "carrito.html",
                "reviews.html",
                "nosotros.html"
            ]
        );
        assert!(page.contains(r#"<a href="/logout">Cerrar sesión</a>"#));
    }

    #[test]
    fn main_region_is_empty_and_footer_fixed() {
        let page = render_storefront("admin");
        assert!(page.contains("<main class=\"container\">\n    </main>"));
        assert!(page.contains(r#"<a href="nosotros.html#contacto">Contáctanos</a>"#));
        assert!(page.contains("&copy; 2025 Xteam. Todos los derechos reservados."));
    }
}
