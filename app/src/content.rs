//! Everything the page displays. The fragments in [`crate::components`] and
//! [`crate::pages`] only map these literals to markup.

pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub language: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Thaïs",
    title: "Thaïs | Développeuse Full Stack",
    description: "Portfolio de Thaïs, développeuse Full Stack en Master 2 à MyDigitalSchool Nantes.",
    language: "fr",
};

/// In-page navigation targets, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    About,
    Skills,
    Projects,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 4] = [
        Anchor::About,
        Anchor::Skills,
        Anchor::Projects,
        Anchor::Contact,
    ];

    /// The `id` attribute of the section this anchor points to.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::About => "about",
            Anchor::Skills => "skills",
            Anchor::Projects => "projects",
            Anchor::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::About => "À propos",
            Anchor::Skills => "Compétences",
            Anchor::Projects => "Projets",
            Anchor::Contact => "Me contacter",
        }
    }
}

pub const SKILLS_PER_CATEGORY: usize = 5;

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: [&'static str; SKILLS_PER_CATEGORY],
    // Tailwind background class of the category's icon tile
    pub color: &'static str,
}

pub static SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "Frontend",
        skills: ["React", "Next.js 16", "Tailwind CSS", "TypeScript", "Framer Motion"],
        color: "bg-primary/30",
    },
    SkillCategory {
        title: "Backend",
        skills: ["Node.js", "PostgreSQL", "Prisma", "API REST", "Auth.js"],
        color: "bg-secondary/30",
    },
    SkillCategory {
        title: "Outils & Design",
        skills: ["Figma", "Git/GitHub", "Vercel", "Docker", "Agile/Scrum"],
        color: "bg-accent/30",
    },
];

/// Placeholder entry of the project gallery.
pub struct Project {
    pub number: u8,
    pub stack: &'static str,
}

impl Project {
    pub fn name(&self) -> String {
        format!("Nom du Projet {}", self.number)
    }
}

pub static PROJECTS: [Project; 4] = [
    Project {
        number: 1,
        stack: "Next.js • Tailwind • Supabase",
    },
    Project {
        number: 2,
        stack: "Next.js • Tailwind • Supabase",
    },
    Project {
        number: 3,
        stack: "Next.js • Tailwind • Supabase",
    },
    Project {
        number: 4,
        stack: "Next.js • Tailwind • Supabase",
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

// Profiles are not published yet, the links point back to the top of the page.
pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "LinkedIn",
        href: "#",
    },
    SocialLink {
        label: "GitHub",
        href: "#",
    },
    SocialLink {
        label: "Twitter",
        href: "#",
    },
];
