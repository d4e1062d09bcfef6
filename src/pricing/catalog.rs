//! Static plan, feature, and quote-builder data.
//!
//! Everything in this module is immutable for the lifetime of the process;
//! the only mutable state in the pricing path is
//! [`super::quote::SelectionState`]. All prices are authored in USD and
//! converted at render time by [`super::rounding`].

use thiserror::Error;

/// Base package price for the quote builder.
pub const BASE_PRICE_USD: u32 = 299;

/// Ceiling for the capped portion of a quote. Cap-exempt options are billed
/// on top in full.
pub const QUOTE_PRICE_CAP_USD: u32 = 1_200;

/// Master feature rows, shared by every plan card so the matrix stays
/// aligned across the grid.
pub const FEATURE_LIST: [&str; 12] = [
    "Mobile-First Design (Ads Ready)",
    "Click-to-Call & SMS Buttons",
    "Services & Pricing Menu",
    "Google Maps Integration",
    "Contact Form & Lead Email",
    "Portfolio/Gallery Section",
    "Automated Booking System",
    "Accept Deposits (Stripe/Square)",
    "Google Reviews Sync",
    "Advanced Quote Calculator",
    "SEO 'Detailing near me'",
    "Admin Revenue Dashboard",
];

/// A one-time package on the pricing page.
pub struct Plan {
    pub name: &'static str,
    pub base_price_usd: u32,
    pub blurb: &'static str,
    pub delivery: &'static str,
    pub revisions: &'static str,
    pub pages: &'static str,
    /// Indices into [`FEATURE_LIST`].
    pub included: &'static [usize],
    pub popular: bool,
    /// Launch-offer discount as a fraction of the base price.
    pub launch_discount: Option<f64>,
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "STARTER WASH",
        base_price_usd: 299,
        blurb: "Perfect for new detailers. A professional 2-page site to replace your Linktree.",
        delivery: "3-5 days",
        revisions: "2 Rounds",
        pages: "2 Pages (Home + Services)",
        included: &[0, 1, 2, 3, 4, 5],
        popular: false,
        launch_discount: None,
    },
    Plan {
        name: "PRO DETAILER",
        base_price_usd: 699,
        blurb: "The growth engine. Automate bookings, take deposits, and stop no-shows.",
        delivery: "7-10 days",
        revisions: "3 Rounds",
        pages: "Up to 6 Pages",
        included: &[0, 1, 2, 3, 4, 5, 6, 7, 8],
        popular: true,
        launch_discount: Some(0.10),
    },
    Plan {
        name: "EMPIRE",
        base_price_usd: 1_199,
        blurb: "Dominance package. Custom dashboards, SEO ranking, and full automation.",
        delivery: "2-3 Weeks",
        revisions: "Unlimited",
        pages: "Up to 12 Pages",
        included: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        popular: false,
        launch_discount: None,
    },
];

/// An à-la-carte extra, priced with the add-on rounding style.
pub struct AddOn {
    pub name: &'static str,
    pub base_price_usd: u32,
    pub blurb: &'static str,
}

pub const ADD_ONS: [AddOn; 4] = [
    AddOn {
        name: "Extra Page",
        base_price_usd: 100,
        blurb: "Per additional page (About, FAQ, etc).",
    },
    AddOn {
        name: "Extra Revision Round",
        base_price_usd: 50,
        blurb: "Per round of design changes.",
    },
    AddOn {
        name: "Urgent Delivery",
        base_price_usd: 300,
        blurb: "Jump the queue (48hr turnaround).",
    },
    AddOn {
        name: "Professional Copywriting",
        base_price_usd: 150,
        blurb: "We write sales-focused text for you.",
    },
];

/// A monthly retainer.
pub struct CarePlan {
    pub name: &'static str,
    pub base_price_usd: u32,
    pub features: &'static [&'static str],
}

pub const CARE_PLANS: [CarePlan; 2] = [
    CarePlan {
        name: "Basic Maintenance",
        base_price_usd: 20,
        features: &["Hosting Included", "Security Patches", "Monthly Backups"],
    },
    CarePlan {
        name: "Growth Partner",
        base_price_usd: 150,
        features: &[
            "2 SEO Blog Posts / mo",
            "Seasonal Banner Updates",
            "Priority Support",
        ],
    },
];

/// How a quote group accepts selections.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GroupMode {
    /// Exactly one option active; the first option is the free default.
    Single,
    /// Zero or more options active.
    Multi,
}

/// One selectable option inside a quote group.
pub struct PriceableOption {
    /// Unique within its group.
    pub id: &'static str,
    pub label: &'static str,
    pub base_price_usd: u32,
    pub blurb: &'static str,
    /// Billed in full on top of the capped subtotal.
    pub cap_exempt: bool,
}

/// One step of the quote builder.
pub struct SelectionGroup {
    pub id: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub mode: GroupMode,
    pub options: &'static [PriceableOption],
}

pub const QUOTE_GROUPS: [SelectionGroup; 5] = [
    SelectionGroup {
        id: "pages",
        title: "Website Scale",
        blurb: "How big does your digital shop need to be?",
        mode: GroupMode::Single,
        options: &[
            PriceableOption {
                id: "p1",
                label: "Two-Page Landing",
                base_price_usd: 0,
                blurb: "Perfect for Ads & Bio Links",
                cap_exempt: false,
            },
            PriceableOption {
                id: "p2",
                label: "3-5 Pages",
                base_price_usd: 300,
                blurb: "Home, Services, Gallery, About, etc.",
                cap_exempt: false,
            },
            PriceableOption {
                id: "p3",
                label: "5+ Pages (Empire)",
                base_price_usd: 600,
                blurb: "Full SEO Structure & Location Pages",
                cap_exempt: false,
            },
        ],
    },
    SelectionGroup {
        id: "booking",
        title: "Booking Engine",
        blurb: "How should customers book an appointment?",
        mode: GroupMode::Single,
        options: &[
            PriceableOption {
                id: "b1",
                label: "Call / Text Only",
                base_price_usd: 0,
                blurb: "Click-to-call buttons only",
                cap_exempt: false,
            },
            PriceableOption {
                id: "b2",
                label: "Request Form",
                base_price_usd: 150,
                blurb: "Form sent to your email",
                cap_exempt: false,
            },
            PriceableOption {
                id: "b3",
                label: "Full Auto-Booking",
                base_price_usd: 200,
                blurb: "Live Calendar Sync + Reminders",
                cap_exempt: false,
            },
        ],
    },
    SelectionGroup {
        id: "payments",
        title: "Payment Gateway",
        blurb: "Do you want to secure cash flow upfront?",
        mode: GroupMode::Single,
        options: &[
            PriceableOption {
                id: "pay1",
                label: "No / Cash Only",
                base_price_usd: 0,
                blurb: "Pay in person",
                cap_exempt: false,
            },
            PriceableOption {
                id: "pay2",
                label: "Deposits Only",
                base_price_usd: 150,
                blurb: "Take $30 to hold the slot (Stripe)",
                cap_exempt: false,
            },
            PriceableOption {
                id: "pay3",
                label: "Full Pre-Payment",
                base_price_usd: 250,
                blurb: "Full checkout cart functionality",
                cap_exempt: false,
            },
        ],
    },
    SelectionGroup {
        id: "quoting",
        title: "Smart Quoting System",
        blurb: "Allow clients to get estimates based on vehicle size & condition.",
        mode: GroupMode::Multi,
        options: &[PriceableOption {
            id: "q1",
            label: "Interactive Quote Form",
            base_price_usd: 250,
            blurb: "Clients select SUV + condition and get price range",
            cap_exempt: false,
        }],
    },
    SelectionGroup {
        id: "extras",
        title: "Growth Power-Ups",
        blurb: "Essential tools to rank higher and look better.",
        mode: GroupMode::Multi,
        options: &[
            PriceableOption {
                id: "x1",
                label: "Google Reviews Sync",
                base_price_usd: 100,
                blurb: "Showcase your 5-star rating live",
                cap_exempt: false,
            },
            PriceableOption {
                id: "x2",
                label: "SEO Dominance Setup",
                base_price_usd: 150,
                blurb: "Rank for detailing near me",
                cap_exempt: false,
            },
            PriceableOption {
                id: "x3",
                label: "Logo & Branding",
                base_price_usd: 150,
                blurb: "Billed in full, never absorbed by the price cap",
                cap_exempt: true,
            },
        ],
    },
];

/// Catalog integrity failure. Only reachable from a bad edit to the static
/// data above, so it is checked in tests and at debug start-up rather than
/// handled at runtime.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate group id {0:?}")]
    DuplicateGroup(&'static str),
    #[error("duplicate option id {0:?} in group {1:?}")]
    DuplicateOption(&'static str, &'static str),
    #[error("single-select group {0:?} has no options")]
    EmptyGroup(&'static str),
    #[error("single-select group {0:?} must lead with a free default option")]
    PaidDefault(&'static str),
}

/// Checks the quote catalog invariants: unique group ids, option ids unique
/// within their group, and a zero-cost default leading every single-select
/// group.
pub fn validate(groups: &[SelectionGroup]) -> Result<(), CatalogError> {
    let mut group_ids: Vec<&str> = Vec::with_capacity(groups.len());
    for group in groups {
        if group_ids.contains(&group.id) {
            return Err(CatalogError::DuplicateGroup(group.id));
        }
        group_ids.push(group.id);

        let mut option_ids: Vec<&str> = Vec::with_capacity(group.options.len());
        for option in group.options {
            if option_ids.contains(&option.id) {
                return Err(CatalogError::DuplicateOption(option.id, group.id));
            }
            option_ids.push(option.id);
        }

        if group.mode == GroupMode::Single {
            match group.options.first() {
                None => return Err(CatalogError::EmptyGroup(group.id)),
                Some(first) if first.base_price_usd != 0 => {
                    return Err(CatalogError::PaidDefault(group.id))
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_catalog_is_valid() {
        assert_eq!(validate(&QUOTE_GROUPS), Ok(()));
    }

    #[test]
    fn plan_feature_indices_stay_in_range() {
        for plan in &PLANS {
            for &index in plan.included {
                assert!(index < FEATURE_LIST.len(), "{} references row {index}", plan.name);
            }
        }
    }

    #[test]
    fn plans_are_ordered_by_price() {
        assert!(PLANS.windows(2).all(|pair| pair[0].base_price_usd < pair[1].base_price_usd));
    }

    #[test]
    fn launch_discounts_are_fractions() {
        for plan in &PLANS {
            if let Some(pct) = plan.launch_discount {
                assert!((0.0..=1.0).contains(&pct), "{} discount out of range", plan.name);
            }
        }
    }

    #[test]
    fn only_branding_escapes_the_cap() {
        let exempt: Vec<&str> = QUOTE_GROUPS
            .iter()
            .flat_map(|group| group.options)
            .filter(|option| option.cap_exempt)
            .map(|option| option.id)
            .collect();
        assert_eq!(exempt, vec!["x3"]);
    }

    #[test]
    fn duplicate_group_ids_are_rejected() {
        let groups = [
            SelectionGroup {
                id: "pages",
                title: "A",
                blurb: "",
                mode: GroupMode::Multi,
                options: &[],
            },
            SelectionGroup {
                id: "pages",
                title: "B",
                blurb: "",
                mode: GroupMode::Multi,
                options: &[],
            },
        ];
        assert_eq!(validate(&groups), Err(CatalogError::DuplicateGroup("pages")));
    }

    #[test]
    fn duplicate_option_ids_are_rejected() {
        let groups = [SelectionGroup {
            id: "extras",
            title: "Extras",
            blurb: "",
            mode: GroupMode::Multi,
            options: &[
                PriceableOption {
                    id: "x1",
                    label: "One",
                    base_price_usd: 100,
                    blurb: "",
                    cap_exempt: false,
                },
                PriceableOption {
                    id: "x1",
                    label: "Two",
                    base_price_usd: 150,
                    blurb: "",
                    cap_exempt: false,
                },
            ],
        }];
        assert_eq!(
            validate(&groups),
            Err(CatalogError::DuplicateOption("x1", "extras"))
        );
    }

    #[test]
    fn paid_defaults_are_rejected() {
        let groups = [SelectionGroup {
            id: "scale",
            title: "Scale",
            blurb: "",
            mode: GroupMode::Single,
            options: &[PriceableOption {
                id: "s1",
                label: "Paid",
                base_price_usd: 100,
                blurb: "",
                cap_exempt: false,
            }],
        }];
        assert_eq!(validate(&groups), Err(CatalogError::PaidDefault("scale")));
    }

    #[test]
    fn empty_single_groups_are_rejected() {
        let groups = [SelectionGroup {
            id: "scale",
            title: "Scale",
            blurb: "",
            mode: GroupMode::Single,
            options: &[],
        }];
        assert_eq!(validate(&groups), Err(CatalogError::EmptyGroup("scale")));
    }
}
