//! The fixed roster of target companies for career-page searches.
//!
//! Static metadata only; the career URLs are fetch targets for the
//! best-effort scrape call, never a live integration.

use crate::constants::limits;

#[derive(Debug, Clone, Copy)]
pub struct CompanyProfile {
    pub name: &'static str,
    pub domain: &'static str,
    pub careers_url: &'static str,
    pub industry: &'static str,
    pub size: &'static str,
    pub description: &'static str,
}

pub const TARGET_COMPANIES: &[CompanyProfile] = &[
    CompanyProfile {
        name: "Mercado Libre",
        domain: "mercadolibre.com",
        careers_url: "https://careers.mercadolibre.com/jobs",
        industry: "E-commerce",
        size: "10,000+ employees",
        description: "Leading e-commerce platform in Latin America",
    },
    CompanyProfile {
        name: "Globant",
        domain: "globant.com",
        careers_url: "https://www.globant.com/careers",
        industry: "Technology Consulting",
        size: "25,000+ employees",
        description: "Digital transformation and software development company",
    },
    CompanyProfile {
        name: "Despegar",
        domain: "despegar.com",
        careers_url: "https://careers.despegar.com",
        industry: "Travel Technology",
        size: "5,000+ employees",
        description: "Leading online travel agency in Latin America",
    },
    CompanyProfile {
        name: "Auth0",
        domain: "auth0.com",
        careers_url: "https://auth0.com/careers",
        industry: "Identity & Security",
        size: "1,000+ employees",
        description: "Identity platform for application builders",
    },
    CompanyProfile {
        name: "Ualá",
        domain: "uala.com.ar",
        careers_url: "https://www.uala.com.ar/careers",
        industry: "Fintech",
        size: "1,000+ employees",
        description: "Digital financial services platform",
    },
    CompanyProfile {
        name: "Rappi",
        domain: "rappi.com",
        careers_url: "https://careers.rappi.com",
        industry: "Delivery & Logistics",
        size: "5,000+ employees",
        description: "On-demand delivery platform",
    },
    CompanyProfile {
        name: "Nubank",
        domain: "nubank.com.br",
        careers_url: "https://nubank.com.br/careers",
        industry: "Fintech",
        size: "5,000+ employees",
        description: "Digital banking and financial services",
    },
    CompanyProfile {
        name: "Stone",
        domain: "stone.com.br",
        careers_url: "https://stone.com.br/careers",
        industry: "Fintech",
        size: "3,000+ employees",
        description: "Payment solutions and financial technology",
    },
    CompanyProfile {
        name: "iFood",
        domain: "ifood.com.br",
        careers_url: "https://careers.ifood.com.br",
        industry: "Food Delivery",
        size: "3,000+ employees",
        description: "Food delivery and restaurant technology platform",
    },
    CompanyProfile {
        name: "Cornershop",
        domain: "cornershopapp.com",
        careers_url: "https://cornershopapp.com/careers",
        industry: "Grocery Delivery",
        size: "1,000+ employees",
        description: "On-demand grocery delivery service",
    },
];

/// Resolves the companies a request targets.
///
/// Name matching is case-insensitive containment in either direction,
/// so "mercado" selects Mercado Libre and "Globant S.A." selects
/// Globant. The result is capped to keep a single request bounded.
#[must_use]
pub fn select(requested: &[String], industry: Option<&str>) -> Vec<&'static CompanyProfile> {
    let mut selected: Vec<&'static CompanyProfile> = TARGET_COMPANIES
        .iter()
        .filter(|profile| {
            if requested.is_empty() {
                return true;
            }
            let name = profile.name.to_lowercase();
            requested.iter().any(|r| {
                let r = r.to_lowercase();
                name.contains(&r) || r.contains(&name)
            })
        })
        .filter(|profile| {
            industry.is_none_or(|i| profile.industry.to_lowercase().contains(&i.to_lowercase()))
        })
        .collect();

    selected.truncate(limits::MAX_COMPANIES_PER_SEARCH);
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_is_capped() {
        let selected = select(&[], None);
        assert_eq!(selected.len(), limits::MAX_COMPANIES_PER_SEARCH);
    }

    #[test]
    fn test_select_by_partial_name() {
        let requested = vec!["mercado".to_string()];
        let selected = select(&requested, None);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Mercado Libre");
    }

    #[test]
    fn test_select_name_containment_both_directions() {
        let requested = vec!["Globant S.A.".to_string()];
        let selected = select(&requested, None);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Globant");
    }

    #[test]
    fn test_select_by_industry() {
        let selected = select(&[], Some("fintech"));
        assert_eq!(selected.len(), 3);
        assert!(selected.iter().all(|p| p.industry == "Fintech"));
    }

    #[test]
    fn test_select_unknown_name_is_empty() {
        let requested = vec!["Initech".to_string()];
        assert!(select(&requested, None).is_empty());
    }
}
