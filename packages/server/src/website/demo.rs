//! Deterministic demo generator.
//!
//! The fallback generation path used whenever no AI backend is available.
//! A pure function of the request: no I/O, no randomness, byte-identical
//! output for identical input.

use super::types::{GeneratedContent, GenerationRequest};

/// Section labels used when navigation is requested.
const NAV_ITEMS: [&str; 4] = ["Home", "About", "Services", "Contact"];

/// Generate a complete website without any external call.
pub fn generate_demo_website(request: &GenerationRequest) -> GeneratedContent {
    let nav_items: Vec<String> = if request.include_navigation {
        NAV_ITEMS.iter().map(|s| s.to_string()).collect()
    } else {
        Vec::new()
    };

    GeneratedContent {
        html: build_html(request, &nav_items),
        css: build_css(request),
        navigation_items: nav_items,
        footer_content: format!(
            "Professional footer with contact information and links for {}",
            request.name
        ),
    }
}

/// Anchor list rendered in both the nav menu and the footer quick links.
fn nav_links(nav_items: &[String]) -> String {
    nav_items
        .iter()
        .map(|item| format!("<li><a href=\"#{}\">{}</a></li>", item.to_lowercase(), item))
        .collect::<Vec<_>>()
        .join("\n            ")
}

fn build_html(request: &GenerationRequest, nav_items: &[String]) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"website-container\">\n");

    if request.include_navigation {
        html.push_str(&format!(
            r#"    <nav class="main-nav">
        <div class="nav-brand">{name}</div>
        <ul class="nav-menu">
            {links}
        </ul>
    </nav>
"#,
            name = request.name,
            links = nav_links(nav_items),
        ));
    }

    html.push_str("    <main class=\"main-content\">\n");

    // Hero: the first image becomes a full-bleed background behind the copy.
    html.push_str("        <section class=\"hero\">\n");
    if let Some(first_image) = request.image_urls.first() {
        html.push_str(&format!(
            r#"            <div class="hero-image">
                <img src="{}" alt="Hero image" />
            </div>
"#,
            first_image
        ));
    }
    html.push_str(&format!(
        r#"            <div class="hero-content">
                <h1>{name}</h1>
                <p class="hero-description">{description}</p>
                <button class="cta-button">Get Started</button>
            </div>
        </section>
"#,
        name = request.name,
        description = request.description,
    ));

    html.push_str(
        r#"        <section class="features">
            <div class="container">
                <h2>Our Features</h2>
                <div class="feature-grid">
                    <div class="feature-card">
                        <h3>Professional Design</h3>
                        <p>Modern and clean design that reflects your brand perfectly.</p>
                    </div>
                    <div class="feature-card">
                        <h3>Responsive Layout</h3>
                        <p>Looks great on all devices - desktop, tablet, and mobile.</p>
                    </div>
                    <div class="feature-card">
                        <h3>Fast Performance</h3>
                        <p>Optimized for speed and excellent user experience.</p>
                    </div>
                </div>
            </div>
        </section>
"#,
    );

    if !request.image_urls.is_empty() {
        // Every provided URL appears in the gallery, first image included.
        let gallery_items = request
            .image_urls
            .iter()
            .enumerate()
            .map(|(index, url)| {
                format!(
                    r#"                    <div class="gallery-item">
                        <img src="{}" alt="Gallery image {}" loading="lazy" />
                    </div>"#,
                    url,
                    index + 1
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        html.push_str(&format!(
            r#"        <section class="image-gallery">
            <div class="container">
                <h2>Gallery</h2>
                <div class="gallery-grid">
{gallery_items}
                </div>
            </div>
        </section>
"#,
        ));
    }

    if request.include_contact_form {
        html.push_str(
            r#"        <section class="contact">
            <div class="container">
                <h2>Contact Us</h2>
                <form class="contact-form">
                    <input type="text" placeholder="Your Name" required>
                    <input type="email" placeholder="Your Email" required>
                    <textarea placeholder="Your Message" required></textarea>
                    <button type="submit">Send Message</button>
                </form>
            </div>
        </section>
"#,
        );
    }

    html.push_str("    </main>\n");

    if request.include_footer {
        html.push_str(&format!(
            r#"    <footer class="main-footer">
        <div class="container">
            <div class="footer-content">
                <div class="footer-section">
                    <h3>{name}</h3>
                    <p>Thank you for visiting our website. We look forward to working with you.</p>
                </div>
                <div class="footer-section">
                    <h4>Quick Links</h4>
                    <ul>
                        {links}
                    </ul>
                </div>
                <div class="footer-section">
                    <h4>Contact Info</h4>
                    <p>Email: info@{email_slug}.com</p>
                    <p>Phone: (555) 123-4567</p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>&copy; 2024 {name}. All rights reserved.</p>
            </div>
        </div>
    </footer>
"#,
            name = request.name,
            links = nav_links(nav_items),
            email_slug = email_slug(&request.name),
        ));
    }

    html.push_str("</div>\n");
    html
}

/// Synthesized contact address: lowercase the name and strip whitespace.
fn email_slug(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect()
}

fn build_css(request: &GenerationRequest) -> String {
    // The hero stretches to viewport height only when it carries an image.
    let hero_layout = if request.image_urls.is_empty() {
        ""
    } else {
        "\n    min-height: 80vh;\n    display: flex;\n    align-items: center;\n    justify-content: center;"
    };

    let mut css = format!(
        r#"* {{
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}}

body {{
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    line-height: 1.6;
    color: #333;
}}

.website-container {{
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}}

.main-nav {{
    background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);
    padding: 1rem 2rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
    color: white;
}}

.nav-brand {{
    font-size: 1.5rem;
    font-weight: bold;
}}

.nav-menu {{
    display: flex;
    list-style: none;
    gap: 2rem;
}}

.nav-menu a {{
    color: white;
    text-decoration: none;
    transition: opacity 0.3s;
}}

.nav-menu a:hover {{
    opacity: 0.8;
}}

.main-content {{
    flex: 1;
}}

.hero {{
    background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);
    color: white;
    text-align: center;
    padding: 5rem 2rem;
    position: relative;{hero_layout}
}}

.hero-image {{
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    bottom: 0;
    z-index: 1;
}}

.hero-image img {{
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0.3;
}}

.hero-content {{
    position: relative;
    z-index: 2;
}}

.hero h1 {{
    font-size: 3rem;
    margin-bottom: 1rem;
}}

.hero-description {{
    font-size: 1.2rem;
    margin-bottom: 2rem;
    max-width: 600px;
    margin-left: auto;
    margin-right: auto;
}}

.cta-button {{
    background: #ff6b6b;
    color: white;
    border: none;
    padding: 1rem 2rem;
    font-size: 1.1rem;
    border-radius: 5px;
    cursor: pointer;
    transition: background 0.3s;
}}

.cta-button:hover {{
    background: #ee5a5a;
}}

.features {{
    padding: 5rem 2rem;
    background: #f8f9fa;
}}

.container {{
    max-width: 1200px;
    margin: 0 auto;
}}

.features h2 {{
    text-align: center;
    margin-bottom: 3rem;
    font-size: 2.5rem;
}}

.feature-grid {{
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 2rem;
}}

.feature-card {{
    background: white;
    padding: 2rem;
    border-radius: 10px;
    box-shadow: 0 5px 15px rgba(0,0,0,0.1);
    text-align: center;
}}

.feature-card h3 {{
    margin-bottom: 1rem;
    color: {primary};
}}

.image-gallery {{
    padding: 5rem 2rem;
    background: #f8f9fa;
}}

.image-gallery h2 {{
    text-align: center;
    margin-bottom: 3rem;
    font-size: 2.5rem;
}}

.gallery-grid {{
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 2rem;
}}

.gallery-item {{
    background: white;
    border-radius: 10px;
    overflow: hidden;
    box-shadow: 0 5px 15px rgba(0,0,0,0.1);
}}

.gallery-item img {{
    width: 100%;
    height: 250px;
    object-fit: cover;
    transition: transform 0.3s ease;
}}

.gallery-item:hover img {{
    transform: scale(1.05);
}}

.contact {{
    padding: 5rem 2rem;
}}

.contact h2 {{
    text-align: center;
    margin-bottom: 3rem;
    font-size: 2.5rem;
}}

.contact-form {{
    max-width: 600px;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}}

.contact-form input,
.contact-form textarea {{
    padding: 1rem;
    border: 1px solid #ddd;
    border-radius: 5px;
    font-size: 1rem;
}}

.contact-form textarea {{
    min-height: 120px;
    resize: vertical;
}}

.contact-form button {{
    background: {primary};
    color: white;
    border: none;
    padding: 1rem;
    border-radius: 5px;
    cursor: pointer;
    font-size: 1rem;
    transition: background 0.3s;
}}

.contact-form button:hover {{
    background: {secondary};
}}

.main-footer {{
    background: #2c3e50;
    color: white;
    padding: 3rem 2rem 1rem;
}}

.footer-content {{
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
    gap: 2rem;
    margin-bottom: 2rem;
}}

.footer-section h3,
.footer-section h4 {{
    margin-bottom: 1rem;
}}

.footer-section ul {{
    list-style: none;
}}

.footer-section ul li {{
    margin-bottom: 0.5rem;
}}

.footer-section a {{
    color: #bdc3c7;
    text-decoration: none;
    transition: color 0.3s;
}}

.footer-section a:hover {{
    color: white;
}}

.footer-bottom {{
    border-top: 1px solid #34495e;
    padding-top: 1rem;
    text-align: center;
    color: #bdc3c7;
}}
"#,
        primary = request.primary_color,
        secondary = request.secondary_color,
        hero_layout = hero_layout,
    );

    if request.is_responsive {
        css.push_str(
            r#"
@media (max-width: 768px) {
    .nav-menu {
        display: none;
    }

    .hero h1 {
        font-size: 2rem;
    }

    .hero-description {
        font-size: 1rem;
    }

    .feature-grid {
        grid-template-columns: 1fr;
    }
}
"#,
        );
    }

    css
}
