//! Seed defaults installed on a collection's first read.
//!
//! The demo panel ships with believable content so every page renders
//! something before the first edit.

use chrono::{NaiveDate, NaiveDateTime};

use folio_core::{
    AccountStatus, AdminRole, CollectionKind, ContentRecord, EducationEntry, EducationKind, Email,
    ExperienceEntry, ItemId, MediaAsset, Message, MessageStatus, PageViewStat, Project,
    PublishStatus, SiteSettings, Skill, SkillCategory, UserRecord,
};

/// Seed for a typed collection; empty when the kind has no seed.
#[must_use]
pub fn collection<R: ContentRecord>() -> Vec<R> {
    serde_json::from_value(seed_value(R::KIND)).unwrap_or_default()
}

/// Seed for a collection kind as a JSON document.
#[must_use]
pub fn seed_value(kind: CollectionKind) -> serde_json::Value {
    let value = match kind {
        CollectionKind::Projects => serde_json::to_value(projects()),
        CollectionKind::Skills => serde_json::to_value(skills()),
        CollectionKind::Experience => serde_json::to_value(experience()),
        CollectionKind::Education => serde_json::to_value(education()),
        CollectionKind::Messages => serde_json::to_value(messages()),
        CollectionKind::Media => serde_json::to_value(media()),
        CollectionKind::Users => serde_json::to_value(users()),
        CollectionKind::PageViews => serde_json::to_value(page_views()),
    };
    value.unwrap_or_else(|_| serde_json::Value::Array(Vec::new()))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap_or_default()
}

fn email(s: &str) -> Email {
    Email::parse(s).unwrap_or_else(|_| {
        // Seed addresses are static and valid; this arm never runs.
        Email::parse("seed@example.com").expect("fallback email is valid")
    })
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Five demo projects across statuses.
#[must_use]
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: ItemId::new(1),
            title: "AI Resume Builder".to_string(),
            category: "AI/ML".to_string(),
            tech: strings(&["Python", "OpenAI", "FastAPI", "React"]),
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
            tech: strings(&["React", "Appwrite", "TypeScript"]),
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
            tech: strings(&["Python", "Recharts", "D3.js"]),
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
            tech: strings(&["Next.js", "Stripe", "PostgreSQL", "Redis"]),
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
            tech: strings(&["Node.js", "Docker", "GitHub Actions"]),
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

fn skill(name: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        level,
    }
}

/// Four skill categories with leveled skills.
#[must_use]
pub fn skills() -> Vec<SkillCategory> {
    vec![
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
    ]
}

/// Three work history entries.
#[must_use]
pub fn experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            id: ItemId::new(1),
            company: "TechCorp AI".to_string(),
            role: "Senior Full Stack Developer".to_string(),
            engagement: "Full-time".to_string(),
            start: "2023-06".to_string(),
            end: String::new(),
            current: true,
            description: "Leading development of AI-powered applications using React, Python, \
                          and OpenAI APIs. Architected microservices infrastructure serving \
                          50K+ daily users."
                .to_string(),
            technologies: strings(&["React", "Python", "OpenAI", "Docker", "PostgreSQL"]),
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
            description: "Built and maintained the core product from scratch. Implemented \
                          real-time features using WebSockets and developed the mobile app."
                .to_string(),
            technologies: strings(&["Next.js", "Node.js", "MongoDB", "Socket.io", "React Native"]),
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
            description: "Delivered 20+ automation projects for SMBs including web scrapers, \
                          data pipelines, and workflow automation tools."
                .to_string(),
            technologies: strings(&["Python", "Selenium", "Zapier", "Make.com", "REST APIs"]),
            location: "Remote".to_string(),
        },
    ]
}

/// One degree and two certifications.
#[must_use]
pub fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            id: ItemId::new(1),
            institution: "JNTU Hyderabad".to_string(),
            degree: "B.Tech in Computer Science".to_string(),
            year: "2020".to_string(),
            grade: "8.2 CGPA".to_string(),
            description: "Specialized in Software Engineering and Data Structures. Final year \
                          project on ML-based code review automation."
                .to_string(),
            kind: EducationKind::Degree,
        },
        EducationEntry {
            id: ItemId::new(2),
            institution: "Coursera / DeepLearning.AI".to_string(),
            degree: "Deep Learning Specialization".to_string(),
            year: "2021".to_string(),
            grade: "Certificate".to_string(),
            description: "5-course specialization covering Neural Networks, CNN, RNN, and \
                          Sequence Models."
                .to_string(),
            kind: EducationKind::Certification,
        },
        EducationEntry {
            id: ItemId::new(3),
            institution: "AWS".to_string(),
            degree: "AWS Solutions Architect Associate".to_string(),
            year: "2022".to_string(),
            grade: "SAA-C03".to_string(),
            description: "Cloud architecture, security, and deployment best practices on \
                          Amazon Web Services."
                .to_string(),
            kind: EducationKind::Certification,
        },
    ]
}

/// Five inbox messages, two unread.
#[must_use]
pub fn messages() -> Vec<Message> {
    vec![
        Message {
            id: ItemId::new(1),
            name: "Sarah Johnson".to_string(),
            email: email("sarah@example.com"),
            subject: "Project Collaboration".to_string(),
            message: "Hi! I came across your portfolio and was really impressed with the AI \
                      Resume Builder project. I'd love to discuss a potential collaboration \
                      on a similar AI-driven project for our HR platform."
                .to_string(),
            date: datetime(2025, 2, 20, 10, 30),
            status: MessageStatus::Unread,
        },
        Message {
            id: ItemId::new(2),
            name: "Alex Kumar".to_string(),
            email: email("alex.kumar@startup.io"),
            subject: "Freelance Opportunity".to_string(),
            message: "We're building a startup in the edtech space and need an experienced \
                      full-stack developer. Our budget is $5-8K for a 3-month contract. \
                      Would you be interested?"
                .to_string(),
            date: datetime(2025, 2, 18, 14, 22),
            status: MessageStatus::Read,
        },
        Message {
            id: ItemId::new(3),
            name: "Priya Sharma".to_string(),
            email: email("priya@techco.com"),
            subject: "Speaking at Hyderabad DevFest".to_string(),
            message: "We'd love to have you speak at our upcoming DevFest event in March \
                      about AI-powered development workflows. Can you share your availability?"
                .to_string(),
            date: datetime(2025, 2, 15, 9, 15),
            status: MessageStatus::Read,
        },
        Message {
            id: ItemId::new(4),
            name: "Marcus Wu".to_string(),
            email: email("marcus@vc.fund"),
            subject: "Investment Inquiry".to_string(),
            message: "I'm a VC partner looking for talented builders working on AI tools. \
                      Your work caught our attention. Would you be open to a 30-minute call \
                      next week?"
                .to_string(),
            date: datetime(2025, 2, 10, 16, 45),
            status: MessageStatus::Unread,
        },
        Message {
            id: ItemId::new(5),
            name: "Emma Davis".to_string(),
            email: email("emma@agency.com"),
            subject: "Website Redesign Project".to_string(),
            message: "We have a client who needs a complete website overhaul with a modern \
                      design. Timeline is 6 weeks. Looking at React + headless CMS. Could \
                      you share your rate?"
                .to_string(),
            date: datetime(2025, 2, 5, 11, 0),
            status: MessageStatus::Read,
        },
    ]
}

/// Six media assets.
#[must_use]
pub fn media() -> Vec<MediaAsset> {
    let asset = |id: i64, name: &str, content_type: &str, size: &str, d: NaiveDate, thumb: &str| {
        MediaAsset {
            id: ItemId::new(id),
            name: name.to_string(),
            content_type: content_type.to_string(),
            size: size.to_string(),
            url: String::new(),
            date: d,
            thumb: thumb.to_string(),
        }
    };

    vec![
        asset(1, "profile-photo.jpg", "image/jpeg", "245 KB", date(2025, 1, 10), "🖼️"),
        asset(2, "project-ai-builder.png", "image/png", "512 KB", date(2025, 1, 15), "🖼️"),
        asset(3, "resume-v4.pdf", "application/pdf", "189 KB", date(2025, 2, 1), "📄"),
        asset(4, "certifications.zip", "application/zip", "2.4 MB", date(2025, 2, 5), "🗜️"),
        asset(5, "hero-bg.webp", "image/webp", "128 KB", date(2025, 2, 10), "🖼️"),
        asset(6, "project-ecommerce.png", "image/png", "890 KB", date(2025, 2, 15), "🖼️"),
    ]
}

/// Three user records.
#[must_use]
pub fn users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: ItemId::new(1),
            name: "V Chaitanya".to_string(),
            email: email("admin@vc.com"),
            role: AdminRole::SuperAdmin,
            status: AccountStatus::Active,
            last_login: datetime(2025, 2, 22, 10, 0),
            initials: "VC".to_string(),
        },
        UserRecord {
            id: ItemId::new(2),
            name: "Editor User".to_string(),
            email: email("editor@vc.com"),
            role: AdminRole::Editor,
            status: AccountStatus::Active,
            last_login: datetime(2025, 2, 20, 14, 30),
            initials: "EU".to_string(),
        },
        UserRecord {
            id: ItemId::new(3),
            name: "Viewer Only".to_string(),
            email: email("viewer@vc.com"),
            role: AdminRole::Viewer,
            status: AccountStatus::Inactive,
            last_login: datetime(2025, 1, 15, 9, 0),
            initials: "VO".to_string(),
        },
    ]
}

/// Seven days of page-view counts.
#[must_use]
pub fn page_views() -> Vec<PageViewStat> {
    let stat = |id: i64, d: NaiveDate, views: u64| PageViewStat {
        id: ItemId::new(id),
        date: d,
        views,
    };

    vec![
        stat(1, date(2025, 2, 16), 120),
        stat(2, date(2025, 2, 17), 180),
        stat(3, date(2025, 2, 18), 150),
        stat(4, date(2025, 2, 19), 220),
        stat(5, date(2025, 2, 20), 310),
        stat(6, date(2025, 2, 21), 280),
        stat(7, date(2025, 2, 22), 195),
    ]
}

/// Seed settings record.
#[must_use]
pub fn settings() -> SiteSettings {
    SiteSettings {
        site_name: "V Chaitanya Chowdari — Portfolio".to_string(),
        tagline: "AI Generalist · Automation Expert · Full Stack Developer".to_string(),
        email: "chaitanya@vc.com".to_string(),
        phone: "+91 99999 00000".to_string(),
        location: "Hyderabad, India".to_string(),
        bio: "Building AI-powered products and automation systems that scale. Passionate \
              about the intersection of engineering and intelligent systems."
            .to_string(),
        site_title: "VC Portfolio — AI & Full Stack Developer".to_string(),
        meta_desc: "Portfolio of V Chaitanya Chowdari — AI, Automation, and Full Stack \
                    Development."
            .to_string(),
        meta_keywords: "AI developer, full stack, automation, React, Python, OpenAI".to_string(),
        open_to_work: true,
        github_url: "https://github.com".to_string(),
        linkedin_url: "https://linkedin.com".to_string(),
        twitter_url: "https://twitter.com".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_parsable_seed() {
        assert_eq!(collection::<Project>().len(), 5);
        assert_eq!(collection::<SkillCategory>().len(), 4);
        assert_eq!(collection::<ExperienceEntry>().len(), 3);
        assert_eq!(collection::<EducationEntry>().len(), 3);
        assert_eq!(collection::<Message>().len(), 5);
        assert_eq!(collection::<MediaAsset>().len(), 6);
        assert_eq!(collection::<UserRecord>().len(), 3);
        assert_eq!(collection::<PageViewStat>().len(), 7);
    }

    #[test]
    fn test_seed_ids_are_unique_and_ascending() {
        let ids: Vec<_> = projects().iter().map(|p| p.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_seed_settings_populated() {
        let settings = settings();
        assert!(!settings.site_name.is_empty());
        assert!(settings.open_to_work);
    }
}
