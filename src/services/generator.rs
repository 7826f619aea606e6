//! Synthetic job-posting generator.
//!
//! Everything produced here is simulated from fixed pools and lookup
//! tables; postings are stamped `synthetic: true` so no consumer can
//! mistake them for scraped data.

use rand::Rng;
use rand::distr::Alphanumeric;

use crate::constants::limits;
use crate::models::{JobPosting, Platform, PostingCompanyInfo, PostingContact};

use super::roster::CompanyProfile;

struct SeedCompany {
    name: &'static str,
    industry: &'static str,
    size: &'static str,
    website: &'static str,
    description: &'static str,
}

const SEED_COMPANIES: &[SeedCompany] = &[
    SeedCompany {
        name: "TechCorp Solutions",
        industry: "Technology",
        size: "51-200 employees",
        website: "https://techcorp.com",
        description: "Leading software development company",
    },
    SeedCompany {
        name: "FinanceFlow Inc",
        industry: "Finance",
        size: "201-1000 employees",
        website: "https://financeflow.com",
        description: "Innovative fintech company",
    },
    SeedCompany {
        name: "HealthTech Innovations",
        industry: "Healthcare",
        size: "11-50 employees",
        website: "https://healthtech.com",
        description: "Medical technology solutions",
    },
    SeedCompany {
        name: "RetailMax Group",
        industry: "Retail",
        size: "1001-5000 employees",
        website: "https://retailmax.com",
        description: "E-commerce and retail solutions",
    },
    SeedCompany {
        name: "EduLearn Platform",
        industry: "Education",
        size: "51-200 employees",
        website: "https://edulearn.com",
        description: "Online education platform",
    },
];

const JOB_TITLES: &[&str] = &[
    "Software Engineer",
    "Product Manager",
    "Data Analyst",
    "Marketing Manager",
    "Sales Representative",
    "DevOps Engineer",
    "UX Designer",
    "Business Analyst",
    "Project Manager",
    "Customer Success Manager",
];

const LOCATIONS: &[&str] = &[
    "Buenos Aires, Argentina",
    "São Paulo, Brazil",
    "Mexico City, Mexico",
    "Bogotá, Colombia",
    "Lima, Peru",
    "Santiago, Chile",
    "Montevideo, Uruguay",
    "Remote - Latin America",
];

const FIRST_NAMES: &[&str] = &[
    "Ana", "Carlos", "Maria", "Diego", "Sofia", "Luis", "Carmen", "Roberto", "Elena", "Miguel",
];

const LAST_NAMES: &[&str] = &[
    "Rodriguez", "Silva", "Garcia", "Martinez", "Lopez", "Gonzalez", "Perez", "Sanchez",
    "Ramirez", "Torres",
];

const CONTACT_TITLES: &[&str] = &[
    "HR Manager",
    "Talent Acquisition Specialist",
    "Hiring Manager",
    "Recruiter",
    "People Operations Manager",
];

struct JobTemplate {
    titles: &'static [&'static str],
    departments: &'static [&'static str],
}

const ECOMMERCE_TEMPLATES: &[JobTemplate] = &[
    JobTemplate {
        titles: &["Senior Software Engineer", "Full Stack Developer", "Backend Engineer"],
        departments: &["Engineering", "Technology"],
    },
    JobTemplate {
        titles: &["Product Manager", "Senior Product Manager"],
        departments: &["Product"],
    },
    JobTemplate {
        titles: &["Data Analyst", "Data Scientist"],
        departments: &["Analytics", "Data"],
    },
    JobTemplate {
        titles: &["UX Designer", "UI/UX Designer"],
        departments: &["Design"],
    },
    JobTemplate {
        titles: &["Marketing Manager", "Growth Marketing Lead"],
        departments: &["Marketing", "Growth"],
    },
];

const CONSULTING_TEMPLATES: &[JobTemplate] = &[
    JobTemplate {
        titles: &["Senior Consultant", "Technical Consultant", "Solution Architect"],
        departments: &["Consulting", "Solutions"],
    },
    JobTemplate {
        titles: &["Project Manager", "Delivery Manager"],
        departments: &["Project Management"],
    },
    JobTemplate {
        titles: &["Business Analyst", "Systems Analyst"],
        departments: &["Analysis"],
    },
    JobTemplate {
        titles: &["DevOps Engineer", "Cloud Engineer"],
        departments: &["Infrastructure"],
    },
];

const FINTECH_TEMPLATES: &[JobTemplate] = &[
    JobTemplate {
        titles: &["Software Engineer", "Backend Developer", "Mobile Developer"],
        departments: &["Engineering"],
    },
    JobTemplate {
        titles: &["Risk Analyst", "Compliance Manager"],
        departments: &["Risk & Compliance"],
    },
    JobTemplate {
        titles: &["Product Owner", "Product Manager"],
        departments: &["Product"],
    },
    JobTemplate {
        titles: &["Data Engineer", "ML Engineer"],
        departments: &["Data Science"],
    },
];

const TRAVEL_TEMPLATES: &[JobTemplate] = &[
    JobTemplate {
        titles: &["Software Developer", "Frontend Engineer"],
        departments: &["Engineering"],
    },
    JobTemplate {
        titles: &["Travel Operations Manager", "Customer Success Manager"],
        departments: &["Operations"],
    },
    JobTemplate {
        titles: &["Marketing Specialist", "Content Manager"],
        departments: &["Marketing"],
    },
];

const SECURITY_TEMPLATES: &[JobTemplate] = &[
    JobTemplate {
        titles: &["Security Engineer", "DevSecOps Engineer"],
        departments: &["Security"],
    },
    JobTemplate {
        titles: &["Software Engineer", "Platform Engineer"],
        departments: &["Engineering"],
    },
    JobTemplate {
        titles: &["Solutions Engineer", "Customer Engineer"],
        departments: &["Customer Success"],
    },
];

fn templates_for_industry(industry: &str) -> &'static [JobTemplate] {
    match industry {
        "E-commerce" => ECOMMERCE_TEMPLATES,
        "Fintech" => FINTECH_TEMPLATES,
        "Travel Technology" => TRAVEL_TEMPLATES,
        "Identity & Security" => SECURITY_TEMPLATES,
        _ => CONSULTING_TEMPLATES,
    }
}

fn salary_for_title(title: &str) -> &'static str {
    match title {
        "Senior Software Engineer" => "$80,000 - $120,000 USD",
        "Software Engineer" => "$60,000 - $90,000 USD",
        "Full Stack Developer" => "$70,000 - $100,000 USD",
        "Backend Engineer" => "$75,000 - $110,000 USD",
        "Frontend Engineer" => "$65,000 - $95,000 USD",
        "Product Manager" => "$90,000 - $130,000 USD",
        "Senior Product Manager" => "$110,000 - $150,000 USD",
        "Data Analyst" => "$55,000 - $80,000 USD",
        "Data Scientist" => "$85,000 - $120,000 USD",
        "Marketing Manager" => "$60,000 - $90,000 USD",
        "UX Designer" => "$65,000 - $95,000 USD",
        "DevOps Engineer" => "$80,000 - $115,000 USD",
        _ => "$50,000 - $80,000 USD",
    }
}

fn requirements_for_title(title: &str) -> String {
    let items: &[&str] = match title {
        "Software Engineer" => &[
            "3+ years of software development experience",
            "Proficiency in modern programming languages",
            "Experience with agile methodologies",
        ],
        "Senior Software Engineer" => &[
            "5+ years of software development experience",
            "Leadership and mentoring skills",
            "System design experience",
        ],
        "Product Manager" => &[
            "3+ years of product management experience",
            "Data-driven decision making",
            "Cross-functional collaboration",
        ],
        "Data Analyst" => &[
            "SQL and data analysis expertise",
            "Experience with BI tools",
            "Statistical analysis skills",
        ],
        "Marketing Manager" => &[
            "Digital marketing experience",
            "Campaign management",
            "Analytics and reporting",
        ],
        "UX Designer" => &[
            "User experience design portfolio",
            "Prototyping tools proficiency",
            "User research experience",
        ],
        _ => &[
            "Relevant experience in the field",
            "Strong communication skills",
            "Team collaboration",
        ],
    };
    items.join(" • ")
}

fn pick<'a, T>(rng: &mut impl Rng, pool: &'a [T]) -> &'a T {
    &pool[rng.random_range(0..pool.len())]
}

fn random_token(rng: &mut impl Rng, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}

fn backdated_date(rng: &mut impl Rng, min_days: i64, max_days: i64) -> String {
    let days_ago = rng.random_range(min_days..=max_days);
    (chrono::Utc::now() - chrono::Duration::days(days_ago))
        .format("%Y-%m-%d")
        .to_string()
}

fn slugify(text: &str) -> String {
    text.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

/// Case-insensitive substring match of the keyword filter against a
/// posting's title, department and industry. Empty filter matches all.
fn matches_keywords(keywords: &str, title: &str, department: &str, industry: &str) -> bool {
    if keywords.is_empty() {
        return true;
    }
    let needle = keywords.to_lowercase();
    title.to_lowercase().contains(&needle)
        || department.to_lowercase().contains(&needle)
        || industry.to_lowercase().contains(&needle)
}

/// Simulates a platform search: 3–10 postings drawn from the seed
/// pools, each with one synthesized hiring contact. The keyword filter
/// only shapes the platform query URL, not the generated set.
#[must_use]
pub fn platform_jobs(platform: Platform, location: &str) -> Vec<JobPosting> {
    let mut rng = rand::rng();
    let count = rng.random_range(limits::PLATFORM_JOBS_MIN..=limits::PLATFORM_JOBS_MAX);
    let now_millis = chrono::Utc::now().timestamp_millis();

    (0..count)
        .map(|i| {
            let company = pick(&mut rng, SEED_COMPANIES);
            let title = *pick(&mut rng, JOB_TITLES);
            let job_location = if location.is_empty() {
                (*pick(&mut rng, LOCATIONS)).to_string()
            } else {
                location.to_string()
            };

            let employment_type = if rng.random_bool(0.7) {
                "Full-time"
            } else {
                "Contract"
            };
            let salary = format!(
                "${}k - ${}k USD",
                rng.random_range(50..100),
                rng.random_range(100..150)
            );

            let first = *pick(&mut rng, FIRST_NAMES);
            let last = *pick(&mut rng, LAST_NAMES);
            let company_slug: String = company
                .name
                .to_lowercase()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();

            let description = format!(
                "We are looking for a talented {title} to join our {} team. \
                 This is an excellent opportunity to work with cutting-edge technology \
                 and make a real impact.",
                company.industry.to_lowercase()
            );

            JobPosting {
                id: format!("{platform}_{now_millis}_{i}"),
                company_name: company.name.to_string(),
                title: title.to_string(),
                department: None,
                location: job_location,
                platform: Some(platform),
                url: format!("https://{platform}.com/jobs/{}", random_token(&mut rng, 9)),
                posted_date: backdated_date(&mut rng, 0, 7),
                description,
                requirements: Some(requirements_for_title(title)),
                salary_range: Some(salary),
                employment_type: Some(employment_type.to_string()),
                company_info: Some(PostingCompanyInfo {
                    industry: Some(company.industry.to_string()),
                    size: Some(company.size.to_string()),
                    website: Some(company.website.to_string()),
                    description: Some(company.description.to_string()),
                    domain: None,
                }),
                contacts: vec![PostingContact {
                    name: format!("{first} {last}"),
                    title: (*pick(&mut rng, CONTACT_TITLES)).to_string(),
                    linkedin: Some(format!(
                        "https://linkedin.com/in/{}",
                        random_token(&mut rng, 9)
                    )),
                    email: Some(format!("hiring@{company_slug}.com")),
                }],
                synthetic: true,
            }
        })
        .collect()
}

/// Simulates a career-page scan for one roster company: 1–4 postings
/// from the company's industry templates, keyword-filtered.
#[must_use]
pub fn company_jobs(profile: &CompanyProfile, keywords: &str, location: &str) -> Vec<JobPosting> {
    let mut rng = rand::rng();
    let templates = templates_for_industry(profile.industry);
    let count = rng.random_range(limits::COMPANY_JOBS_MIN..=limits::COMPANY_JOBS_MAX);
    let now_millis = chrono::Utc::now().timestamp_millis();

    let mut jobs = Vec::new();
    for i in 0..count {
        let template = pick(&mut rng, templates);
        let title = *pick(&mut rng, template.titles);
        let department = *pick(&mut rng, template.departments);

        if !matches_keywords(keywords, title, department, profile.industry) {
            continue;
        }

        let job_location = if location.is_empty() {
            (*pick(&mut rng, LOCATIONS)).to_string()
        } else {
            location.to_string()
        };

        let first = *pick(&mut rng, FIRST_NAMES);
        let last = *pick(&mut rng, LAST_NAMES);

        jobs.push(JobPosting {
            id: format!("{}-{}-{now_millis}", slugify(profile.name), i + 1),
            company_name: profile.name.to_string(),
            title: title.to_string(),
            department: Some(department.to_string()),
            location: job_location,
            platform: None,
            url: format!("{}/job/{}-{}", profile.careers_url, slugify(title), i + 1),
            posted_date: backdated_date(&mut rng, 1, 14),
            description: company_job_description(&mut rng, profile, title, department),
            requirements: Some(requirements_for_title(title)),
            salary_range: Some(salary_for_title(title).to_string()),
            employment_type: Some("Full-time".to_string()),
            company_info: Some(PostingCompanyInfo {
                industry: Some(profile.industry.to_string()),
                size: Some(profile.size.to_string()),
                website: Some(format!("https://{}", profile.domain)),
                description: Some(profile.description.to_string()),
                domain: Some(profile.domain.to_string()),
            }),
            contacts: vec![PostingContact {
                name: format!("{first} {last}"),
                title: (*pick(&mut rng, CONTACT_TITLES)).to_string(),
                linkedin: Some(format!(
                    "https://linkedin.com/in/{}-{}-{}",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    random_token(&mut rng, 6)
                )),
                email: Some(format!(
                    "{}.{}@{}",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    profile.domain
                )),
            }],
            synthetic: true,
        });
    }

    jobs
}

fn company_job_description(
    rng: &mut impl Rng,
    profile: &CompanyProfile,
    title: &str,
    department: &str,
) -> String {
    let industry = profile.industry.to_lowercase();
    let name = profile.name;
    let variants = [
        format!(
            "Join {name} as a {title} in our {department} team. We're looking for talented \
             individuals to help drive our mission forward in the {industry} space."
        ),
        format!(
            "{name} is seeking a {title} to join our dynamic {department} team. You'll work on \
             cutting-edge projects that impact millions of users across Latin America."
        ),
        format!(
            "We're hiring a {title} for our {department} team at {name}. This role offers the \
             opportunity to work with modern technologies and contribute to our growth in \
             {industry}."
        ),
        format!(
            "{name} is expanding our {department} team and looking for a {title}. Join us in \
             building the future of {industry} in Latin America."
        ),
    ];
    variants[rng.random_range(0..variants.len())].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::roster::TARGET_COMPANIES;

    #[test]
    fn test_platform_jobs_count_and_labels() {
        for _ in 0..20 {
            let jobs = platform_jobs(Platform::Linkedin, "");
            assert!((3..=10).contains(&jobs.len()));
            for job in &jobs {
                assert!(job.synthetic);
                assert_eq!(job.platform, Some(Platform::Linkedin));
                assert!(job.id.starts_with("linkedin_"));
                assert_eq!(job.contacts.len(), 1);
            }
        }
    }

    #[test]
    fn test_platform_jobs_honor_requested_location() {
        let jobs = platform_jobs(Platform::Bumeran, "Córdoba, Argentina");
        assert!(jobs.iter().all(|j| j.location == "Córdoba, Argentina"));
    }

    #[test]
    fn test_company_jobs_keyword_filter() {
        let globant = TARGET_COMPANIES
            .iter()
            .find(|p| p.name == "Globant")
            .unwrap();

        for _ in 0..20 {
            let jobs = company_jobs(globant, "xyzzy-no-match", "");
            assert!(jobs.is_empty());

            // "consulting" matches the industry, so nothing is filtered.
            let jobs = company_jobs(globant, "consulting", "");
            assert!(jobs.len() <= 4);
        }
    }

    #[test]
    fn test_company_jobs_carry_domain_contact_email() {
        let nubank = TARGET_COMPANIES
            .iter()
            .find(|p| p.name == "Nubank")
            .unwrap();

        let jobs = company_jobs(nubank, "", "");
        for job in jobs {
            assert!(job.synthetic);
            assert!(job.platform.is_none());
            let email = job.contacts[0].email.as_deref().unwrap();
            assert!(email.ends_with("@nubank.com.br"), "unexpected email {email}");
        }
    }

    #[test]
    fn test_salary_table_has_default() {
        assert_eq!(salary_for_title("Chief Vibe Officer"), "$50,000 - $80,000 USD");
        assert_eq!(salary_for_title("Product Manager"), "$90,000 - $130,000 USD");
    }

    #[test]
    fn test_backdated_date_is_in_range() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let date = backdated_date(&mut rng, 1, 14);
            let parsed = chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").unwrap();
            let age = (chrono::Utc::now().date_naive() - parsed).num_days();
            assert!((1..=14).contains(&age), "age {age} out of range");
        }
    }
}
