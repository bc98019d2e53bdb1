//! Placeholder content for modules the generator did not fill.
//!
//! Every category cycles through a fixed list. Cursors live on a
//! [`Placeholders`] value created per run, so two runs over the same tree
//! produce the same content.

use crate::structure::STEP_ROLE;
use pagewright_core::{Attrs, LayoutNode, SectionKind};
use serde_json::{Value, json};

pub const DEFAULT_TEXT: &str =
    "<p>Professional services tailored to your needs. We deliver excellence with every project.</p>";

const STATS: &[(i64, &str, &str)] = &[
    (500, "+", "Happy Clients"),
    (98, "%", "Success Rate"),
    (10, "+", "Years Experience"),
    (24, "/7", "Support"),
];

const TESTIMONIALS: &[(&str, &str, &str, &str)] = &[
    (
        "Excellent service and results. Highly recommended!",
        "John Smith",
        "CEO",
        "TechCorp",
    ),
    (
        "Professional team that delivers on their promises.",
        "Sarah Johnson",
        "Director",
        "InnovateCo",
    ),
    (
        "Outstanding work that exceeded our expectations.",
        "Michael Brown",
        "Manager",
        "GlobalTech",
    ),
];

const BLURBS: &[(&str, &str)] = &[
    ("Quality Service", "star"),
    ("Expert Team", "shield"),
    ("Fast Delivery", "zap"),
    ("Best Value", "heart"),
    ("Trusted Partner", "check"),
    ("24/7 Support", "users"),
];

const BLURB_TEXT: &str = "<p>Brief description of this feature or benefit.</p>";

const STEPS: &[(&str, &str)] = &[
    ("Consultation", "<p>We learn about your goals and requirements.</p>"),
    ("Strategy", "<p>We design a plan tailored to your needs.</p>"),
    ("Execution", "<p>Our team delivers with care and precision.</p>"),
    ("Results", "<p>You see measurable outcomes and ongoing support.</p>"),
];

struct Plan {
    title: &'static str,
    price: &'static str,
    featured: bool,
    features: &'static [&'static str],
}

const PRICING: &[Plan] = &[
    Plan {
        title: "Starter",
        price: "29",
        featured: false,
        features: &["Up to 5 projects", "Basic analytics", "Email support"],
    },
    Plan {
        title: "Professional",
        price: "79",
        featured: true,
        features: &[
            "Unlimited projects",
            "Advanced analytics",
            "Priority support",
            "Custom integrations",
        ],
    },
    Plan {
        title: "Enterprise",
        price: "199",
        featured: false,
        features: &[
            "Everything in Professional",
            "Dedicated account manager",
            "24/7 phone support",
            "Custom SLA",
        ],
    },
];

const TEAM: &[(&str, &str)] = &[
    ("Alex Morgan", "Founder & CEO"),
    ("Jordan Lee", "Head of Operations"),
    ("Taylor Kim", "Lead Designer"),
    ("Casey Rivera", "Client Success Manager"),
];

const FAQ: &[(&str, &str)] = &[
    (
        "What services do you offer?",
        "<p>We offer a full range of professional services tailored to your needs.</p>",
    ),
    (
        "How long does a typical project take?",
        "<p>Most projects are completed within two to six weeks.</p>",
    ),
    (
        "How much does it cost?",
        "<p>Pricing depends on scope. Contact us for a free quote.</p>",
    ),
    (
        "How do I get started?",
        "<p>Reach out through the contact form and we will get back to you within one business day.</p>",
    ),
];

const FOOTER_HEADINGS: &[&str] = &["About Us", "Quick Links", "Contact"];

const FOOTER_TEXTS: &[&str] = &[
    "<p>We help businesses grow with professional services and dedicated support.</p>",
    "<p><a href=\"/\">Home</a><br><a href=\"/about\">About</a><br><a href=\"/contact\">Contact</a></p>",
    "<p>hello@example.com<br>(555) 123-4567</p>",
];

/// Menu pages used when a site lists none.
pub const DEFAULT_PAGES: &[&str] = &["home", "about", "services", "contact"];

/// Take the next item of `items`, advancing `cursor`.
fn cycle<T: Copy>(items: &[T], cursor: &mut usize) -> T {
    let item = items[*cursor % items.len()];
    *cursor += 1;
    item
}

/// `"real_estate"` → `"Real Estate"`.
pub fn title_case(slug: &str) -> String {
    slug.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn is_named(section: &SectionKind, name: &str) -> bool {
    matches!(section, SectionKind::Other(other) if other == name)
}

#[derive(Debug, Default)]
struct Cursors {
    stat: usize,
    testimonial: usize,
    blurb: usize,
    step: usize,
    pricing: usize,
    team: usize,
    faq: usize,
    footer_heading: usize,
    footer_text: usize,
}

/// Per-run placeholder source.
#[derive(Debug)]
pub struct Placeholders {
    site_name: String,
    pages: Vec<String>,
    cursors: Cursors,
}

impl Placeholders {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            pages: Vec::new(),
            cursors: Cursors::default(),
        }
    }

    /// Page slugs for menu items. Defaults to a four-page site.
    pub fn with_pages(mut self, pages: Vec<String>) -> Self {
        self.pages = pages;
        self
    }

    /// Fill every module of `sections` with placeholder content. Fields a
    /// module already carries are kept. Returns the number of modules that
    /// gained at least one field.
    pub fn fill(&mut self, sections: &mut [LayoutNode]) -> usize {
        let mut filled = 0;
        for section in sections.iter_mut() {
            let kind = section
                .section_kind
                .clone()
                .unwrap_or_else(|| SectionKind::Other("default".into()));
            for module in section.modules_mut() {
                let content = self.content_for(module, &kind);
                let mut gained = false;
                for (key, value) in content {
                    if !module.attrs.contains_key(&key) {
                        module.attrs.insert(key, value);
                        gained = true;
                    }
                }
                if gained {
                    filled += 1;
                }
            }
        }
        filled
    }

    /// Placeholder fields for one module in `section`.
    pub fn content_for(&mut self, module: &LayoutNode, section: &SectionKind) -> Attrs {
        let Some(module_type) = module.module_type() else {
            return Attrs::new();
        };
        let is_step = module.role.as_deref() == Some(STEP_ROLE);

        let value = match module_type {
            "heading" => json!({"text": self.heading_text(section)}),
            "text" => {
                let content = if is_named(section, "footer") {
                    cycle(FOOTER_TEXTS, &mut self.cursors.footer_text)
                } else {
                    DEFAULT_TEXT
                };
                json!({"content": content})
            }
            "button" => {
                let text = if matches!(section, SectionKind::Cta) {
                    "Get Started Today"
                } else {
                    "Learn More"
                };
                json!({"text": text, "link_url": "#"})
            }
            "image" => json!({"src": "", "alt": "Image"}),
            "blurb" if is_step => {
                let (title, content) = cycle(STEPS, &mut self.cursors.step);
                let number = self.cursors.step;
                json!({"title": title, "content": content, "icon": number.to_string()})
            }
            "blurb" => {
                let (title, icon) = cycle(BLURBS, &mut self.cursors.blurb);
                json!({"title": title, "content": BLURB_TEXT, "icon": icon})
            }
            "number_counter" | "circle_counter" => {
                let (number, suffix, title) = cycle(STATS, &mut self.cursors.stat);
                json!({"number": number, "suffix": suffix, "title": title})
            }
            "testimonial" => {
                let (content, author, job_title, company) =
                    cycle(TESTIMONIALS, &mut self.cursors.testimonial);
                json!({
                    "content": content,
                    "author": author,
                    "job_title": job_title,
                    "company": company,
                    "portrait_url": "",
                })
            }
            "pricing_table" => {
                let index = self.cursors.pricing % PRICING.len();
                self.cursors.pricing += 1;
                let plan = &PRICING[index];
                json!({
                    "title": plan.title,
                    "price": plan.price,
                    "currency": "$",
                    "period": "/month",
                    "features": plan.features,
                    "featured": plan.featured,
                    "button_text": "Choose Plan",
                    "button_url": "#",
                })
            }
            "team_member" => {
                let (name, position) = cycle(TEAM, &mut self.cursors.team);
                json!({
                    "name": name,
                    "position": position,
                    "content": "<p>Dedicated to delivering great results for every client.</p>",
                    "image_url": "",
                })
            }
            "accordion" => {
                let items: Vec<Value> = FAQ
                    .iter()
                    .map(|(title, content)| json!({"title": title, "content": content}))
                    .collect();
                json!({"items": items})
            }
            "accordion_item" | "toggle" => {
                let (title, content) = cycle(FAQ, &mut self.cursors.faq);
                json!({"title": title, "content": content})
            }
            "cta" => json!({
                "title": "Ready to Get Started?",
                "content": "<p>Contact us today and let us help you reach your goals.</p>",
                "button_text": "Contact Us",
                "button_url": "#contact",
            }),
            "contact_form" => json!({
                "title": "Send us a message",
                "fields": [
                    {"name": "name", "label": "Name", "type": "text", "required": true},
                    {"name": "email", "label": "Email", "type": "email", "required": true},
                    {"name": "phone", "label": "Phone", "type": "tel", "required": false},
                    {"name": "message", "label": "Message", "type": "textarea", "required": true},
                ],
                "button_text": "Send Message",
                "success_message": "Thank you! We will be in touch soon.",
            }),
            "site_logo" => json!({"text": self.site_name, "src": "", "link_url": "/"}),
            "menu" => json!({"items": self.menu_items()}),
            "header_button" => json!({"text": "Get Started", "link_url": "#contact"}),
            "social_follow" | "social_icons" => json!({
                "items": (["facebook", "twitter", "linkedin", "instagram"]
                    .iter()
                    .map(|network| json!({"network": network, "url": "#"}))
                    .collect::<Vec<Value>>()),
            }),
            "copyright" => json!({
                "text": format!("© {}. All rights reserved.", self.site_name),
            }),
            "icon" => json!({"icon": "star"}),
            _ => return Attrs::new(),
        };

        match value {
            Value::Object(map) => map,
            _ => Attrs::new(),
        }
    }

    fn heading_text(&mut self, section: &SectionKind) -> String {
        if is_named(section, "footer") {
            return cycle(FOOTER_HEADINGS, &mut self.cursors.footer_heading).to_string();
        }
        match section {
            SectionKind::Hero => self.site_name.clone(),
            other => title_case(other.as_str()),
        }
    }

    fn menu_items(&self) -> Vec<Value> {
        let slugs: Vec<&str> = if self.pages.is_empty() {
            DEFAULT_PAGES.to_vec()
        } else {
            self.pages.iter().map(String::as_str).collect()
        };
        slugs
            .into_iter()
            .map(|slug| {
                let url = if slug == "home" {
                    "/".to_string()
                } else {
                    format!("/{}", slug.replace('_', "-"))
                };
                json!({"label": title_case(slug), "url": url})
            })
            .collect()
    }
}

/// Fill `sections` with a fresh placeholder source.
pub fn apply_placeholders(sections: &mut [LayoutNode], site_name: &str) -> usize {
    Placeholders::new(site_name).fill(sections)
}
