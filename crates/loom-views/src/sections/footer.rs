//! Site footer.

/// Marketplace name shown in the footer.
pub const SHOP_NAME: &str = "LoomCart";

const LINK_COLUMNS: &[(&str, &[(&str, &str)])] = &[
    (
        "Shop",
        &[
            ("Sarees", "/category/sarees"),
            ("Shawls & Stoles", "/category/shawls"),
            ("Rugs & Dhurries", "/category/rugs"),
            ("Home Linen", "/category/home"),
        ],
    ),
    (
        "Help",
        &[
            ("Shipping", "/help/shipping"),
            ("Returns", "/help/returns"),
            ("Care Guide", "/help/care"),
            ("Contact", "/contact"),
        ],
    ),
    (
        "About",
        &[
            ("Our Weavers", "/about/weavers"),
            ("Craft Traditions", "/about/crafts"),
            ("Sell With Us", "/sell"),
        ],
    ),
];

/// Render the site footer.
pub fn render_footer(year: i32) -> String {
    let columns: String = LINK_COLUMNS
        .iter()
        .map(|(title, links)| {
            let items: String = links
                .iter()
                .map(|(label, href)| {
                    format!(
                        r#"<li><a href="{}">{}</a></li>"#,
                        href,
                        crate::html_escape(label)
                    )
                })
                .collect();
            format!(
                r#"<nav class="footer-column" aria-label="{title}">
            <h4>{title}</h4>
            <ul>{items}</ul>
        </nav>"#,
                title = title,
                items = items
            )
        })
        .collect();

    format!(
        r#"<footer class="site-footer" data-section="footer">
    <div class="footer-brand">
        <span class="footer-logo">{shop}</span>
        <p>Handcrafted textiles, straight from the loom.</p>
    </div>
    <div class="footer-links">
        {columns}
    </div>
    <p class="footer-copyright">&copy; {year} {shop}. All rights reserved.</p>
</footer>"#,
        shop = SHOP_NAME,
        columns = columns,
        year = year
    )
}
