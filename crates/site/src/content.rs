//! Résumé content compiled into the site binary.
//!
//! The public site is intentionally static: every section renders from this
//! module rather than from the admin store. Content edits ship as code, the
//! same way the hero copy does in a templated storefront.

use chrono::NaiveDate;
use serde::Serialize;

use folio_core::{
    EducationEntry, EducationKind, ExperienceEntry, ItemId, Project, PublishStatus, Skill,
    SkillCategory,
};

/// Identity and contact details shown in the hero and footer.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub open_to_work: bool,
    pub github_url: String,
    pub linkedin_url: String,
    pub twitter_url: String,
}

/// Document-level SEO metadata.
#[derive(Debug, Clone, Serialize)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// A hobby card.
#[derive(Debug, Clone, Serialize)]
pub struct Hobby {
    pub name: String,
    pub icon: String,
    pub blurb: String,
}

/// Everything the résumé page renders.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeContent {
    pub profile: Profile,
    pub seo: SeoMeta,
    pub about: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<EducationEntry>,
    pub hobbies: Vec<Hobby>,
}

impl ResumeContent {
    /// Projects shown on the public site, newest first. Drafts and archived
    /// work stay hidden.
    #[must_use]
    pub fn published_projects(&self) -> Vec<&Project> {
        let mut published: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| p.status == PublishStatus::Published)
            .collect();
        published.sort_by(|a, b| b.date.cmp(&a.date));
        published
    }
}

#[allow(clippy::too_many_lines)]
impl Default for ResumeContent {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "V Chaitanya Chowdari".to_string(),
                tagline: "AI Generalist · Automation Expert · Full Stack Developer".to_string(),
                email: "chaitanya@vc.com".to_string(),
                phone: "+91 99999 00000".to_string(),
                location: "Hyderabad, India".to_string(),
                bio: "Building AI-powered products and automation systems that scale. \
                      Passionate about the intersection of engineering and intelligent systems."
                    .to_string(),
                open_to_work: true,
                github_url: "https://github.com/vchaitanya".to_string(),
                linkedin_url: "https://linkedin.com/in/vchaitanya".to_string(),
                twitter_url: "https://twitter.com/vchaitanya".to_string(),
            },
            seo: SeoMeta {
                title: "VC Portfolio — AI & Full Stack Developer".to_string(),
                description:
                    "Portfolio of V Chaitanya Chowdari — AI, Automation, and Full Stack Development."
                        .to_string(),
                keywords: vec![
                    "AI developer".to_string(),
                    "full stack".to_string(),
                    "automation".to_string(),
                    "React".to_string(),
                    "Python".to_string(),
                    "OpenAI".to_string(),
                ],
            },
            about: vec![
                "I design and ship AI-first products end to end: data plumbing, model \
                 integration, backend services, and the interfaces people actually use."
                    .to_string(),
                "Over the last few years I have led teams building applications that serve \
                 tens of thousands of daily users, and delivered dozens of automation \
                 projects for small businesses on the side."
                    .to_string(),
            ],
            experience: vec![
                ExperienceEntry {
                    id: ItemId::new(1),
                    company: "TechCorp AI".to_string(),
                    role: "Senior Full Stack Developer".to_string(),
                    engagement: "Full-time".to_string(),
                    start: "2023-06".to_string(),
                    end: String::new(),
                    current: true,
                    description: "Leading development of AI-powered applications using React, \
                                  Python, and OpenAI APIs. Architected microservices \
                                  infrastructure serving 50K+ daily users."
                        .to_string(),
                    technologies: vec![
                        "React".to_string(),
                        "Python".to_string(),
                        "OpenAI".to_string(),
                        "Docker".to_string(),
                        "PostgreSQL".to_string(),
                    ],
                    location: "Hyderabad, India".to_string(),
                },
                ExperienceEntry {
                    id: ItemId::new(2),
                    company: "StartupXYZ".to_string(),
                    role: "Full Stack Developer".to_string(),
                    engagement: "Full-time".to_string(),
                    start: "2022-01".to_string(),
                    end: "2023-05".to_string(),
                    current: false,
                    description: "Built and maintained the core product from scratch. \
                                  Implemented real-time features using WebSockets and \
                                  developed the mobile app."
                        .to_string(),
                    technologies: vec![
                        "Next.js".to_string(),
                        "Node.js".to_string(),
                        "MongoDB".to_string(),
                        "Socket.io".to_string(),
                        "React Native".to_string(),
                    ],
                    location: "Remote".to_string(),
                },
                ExperienceEntry {
                    id: ItemId::new(3),
                    company: "Freelance / Self".to_string(),
                    role: "AI Automation Consultant".to_string(),
                    engagement: "Freelance".to_string(),
                    start: "2021-03".to_string(),
                    end: "2022-01".to_string(),
                    current: false,
                    description: "Delivered 20+ automation projects for SMBs including web \
                                  scrapers, data pipelines, and workflow automation tools."
                        .to_string(),
                    technologies: vec![
                        "Python".to_string(),
                        "Selenium".to_string(),
                        "Zapier".to_string(),
                        "REST APIs".to_string(),
                    ],
                    location: "Remote".to_string(),
                },
            ],
            projects: default_projects(),
            skills: vec![
                SkillCategory {
                    id: ItemId::new(1),
                    category: "Frontend".to_string(),
                    skills: vec![
                        skill("React", 95),
                        skill("TypeScript", 88),
                        skill("Next.js", 85),
                        skill("CSS/SCSS", 90),
                        skill("Framer Motion", 78),
                    ],
                },
                SkillCategory {
                    id: ItemId::new(2),
                    category: "Backend".to_string(),
                    skills: vec![
                        skill("Node.js", 87),
                        skill("Python", 92),
                        skill("FastAPI", 83),
                        skill("PostgreSQL", 80),
                        skill("Redis", 72),
                    ],
                },
                SkillCategory {
                    id: ItemId::new(3),
                    category: "AI/ML".to_string(),
                    skills: vec![
                        skill("OpenAI API", 90),
                        skill("LangChain", 82),
                        skill("TensorFlow", 68),
                        skill("Prompt Engineering", 95),
                        skill("RAG Systems", 80),
                    ],
                },
                SkillCategory {
                    id: ItemId::new(4),
                    category: "DevOps & Cloud".to_string(),
                    skills: vec![
                        skill("Docker", 85),
                        skill("GitHub Actions", 88),
                        skill("AWS", 75),
                        skill("Vercel", 92),
                        skill("Linux", 80),
                    ],
                },
            ],
            education: vec![EducationEntry {
                id: ItemId::new(1),
                institution: "JNTU Hyderabad".to_string(),
                degree: "B.Tech in Computer Science".to_string(),
                year: "2020".to_string(),
                grade: "8.2 CGPA".to_string(),
                description: "Specialized in Software Engineering and Data Structures. Final \
                              year project on ML-based code review automation."
                    .to_string(),
                kind: EducationKind::Degree,
            }],
            certifications: vec![
                EducationEntry {
                    id: ItemId::new(2),
                    institution: "Coursera / DeepLearning.AI".to_string(),
                    degree: "Deep Learning Specialization".to_string(),
                    year: "2021".to_string(),
                    grade: "Certificate".to_string(),
                    description: "5-course specialization covering Neural Networks, CNN, RNN, \
                                  and Sequence Models."
                        .to_string(),
                    kind: EducationKind::Certification,
                },
                EducationEntry {
                    id: ItemId::new(3),
                    institution: "AWS".to_string(),
                    degree: "AWS Solutions Architect Associate".to_string(),
                    year: "2022".to_string(),
                    grade: "SAA-C03".to_string(),
                    description: "Cloud architecture, security, and deployment best practices \
                                  on Amazon Web Services."
                        .to_string(),
                    kind: EducationKind::Certification,
                },
            ],
            hobbies: vec![
                Hobby {
                    name: "Photography".to_string(),
                    icon: "📷".to_string(),
                    blurb: "Street and landscape photography around Hyderabad.".to_string(),
                },
                Hobby {
                    name: "Chess".to_string(),
                    icon: "♟️".to_string(),
                    blurb: "Rapid games and endgame studies.".to_string(),
                },
                Hobby {
                    name: "Open Source".to_string(),
                    icon: "🔧".to_string(),
                    blurb: "Maintaining small automation tools and CLI utilities.".to_string(),
                },
            ],
        }
    }
}

fn skill(name: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        level,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            id: ItemId::new(1),
            title: "AI Resume Builder".to_string(),
            category: "AI/ML".to_string(),
            tech: vec![
                "Python".to_string(),
                "OpenAI".to_string(),
                "FastAPI".to_string(),
                "React".to_string(),
            ],
            description: "An intelligent resume builder powered by GPT-4 that tailors resumes \
                          to job descriptions with ATS optimization."
                .to_string(),
            status: PublishStatus::Published,
            featured: true,
            live_url: "https://example.com".to_string(),
            github_url: "https://github.com".to_string(),
            image: String::new(),
            date: date(2024, 12, 1),
            views: 1240,
        },
        Project {
            id: ItemId::new(2),
            title: "Appwrite CMS Dashboard".to_string(),
            category: "Full Stack".to_string(),
            tech: vec![
                "React".to_string(),
                "Appwrite".to_string(),
                "TypeScript".to_string(),
            ],
            description: "A fully-featured content management system connected to Appwrite \
                          backend with real-time sync."
                .to_string(),
            status: PublishStatus::Published,
            featured: true,
            live_url: String::new(),
            github_url: "https://github.com".to_string(),
            image: String::new(),
            date: date(2025, 1, 15),
            views: 875,
        },
        Project {
            id: ItemId::new(3),
            title: "Portfolio Analytics".to_string(),
            category: "Data".to_string(),
            tech: vec![
                "Python".to_string(),
                "Recharts".to_string(),
                "D3.js".to_string(),
            ],
            description: "Real-time analytics dashboard for tracking portfolio performance \
                          and visitor engagement."
                .to_string(),
            status: PublishStatus::Draft,
            featured: false,
            live_url: String::new(),
            github_url: String::new(),
            image: String::new(),
            date: date(2025, 2, 10),
            views: 0,
        },
        Project {
            id: ItemId::new(4),
            title: "E-Commerce Platform".to_string(),
            category: "Full Stack".to_string(),
            tech: vec![
                "Next.js".to_string(),
                "Stripe".to_string(),
                "PostgreSQL".to_string(),
                "Redis".to_string(),
            ],
            description: "Complete e-commerce solution with inventory management, payments, \
                          and order tracking."
                .to_string(),
            status: PublishStatus::Published,
            featured: false,
            live_url: "https://example.com".to_string(),
            github_url: String::new(),
            image: String::new(),
            date: date(2024, 10, 20),
            views: 2100,
        },
        Project {
            id: ItemId::new(5),
            title: "Automation Workflow Engine".to_string(),
            category: "DevOps".to_string(),
            tech: vec![
                "Node.js".to_string(),
                "Docker".to_string(),
                "GitHub Actions".to_string(),
            ],
            description: "CI/CD pipeline automation with custom workflow triggers and \
                          notification system."
                .to_string(),
            status: PublishStatus::Archived,
            featured: false,
            live_url: String::new(),
            github_url: "https://github.com".to_string(),
            image: String::new(),
            date: date(2024, 8, 5),
            views: 430,
        },
    ]
}
