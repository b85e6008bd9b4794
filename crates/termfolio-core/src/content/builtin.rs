//! Built-in portfolio content, used whenever no `content_path` is
//! configured.

use super::models::{
    About, Badge, ContactLink, EducationEntry, ExperienceEntry, Footer, PortfolioContent, Profile,
    Project, Skill, SkillCategory,
};

fn skill(name: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        level,
    }
}

fn badge(text: &str, color: &str) -> Badge {
    Badge {
        text: text.to_string(),
        color: color.to_string(),
    }
}

fn link(label: &str, url: &str) -> ContactLink {
    ContactLink {
        label: label.to_string(),
        url: url.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl PortfolioContent {
    /// The default page: a full-stack developer profile with enough
    /// entries to exercise every section effect.
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "John Developer".to_string(),
                tagline: "Full Stack Developer | Tech Enthusiast".to_string(),
                subtitle: "Building beautiful, accessible, and performant web applications \
                           that solve real-world problems."
                    .to_string(),
                links: vec![
                    link("View My Work", "#projects"),
                    link("Contact Me", "#contact"),
                ],
            },
            about: About {
                paragraphs: strings(&[
                    "Hi there! I'm a passionate software engineer with a love for building \
                     clean, efficient, and user-friendly web applications. My journey into \
                     tech began during college when I built my first website, and I've been \
                     hooked ever since.",
                    "With 5+ years of experience across the full stack, I specialize in \
                     React-based front-end development and Node.js backends. I'm constantly \
                     learning and exploring new technologies to stay at the cutting edge.",
                    "When I'm not coding, you can find me hiking, reading about new tech \
                     trends, or contributing to open-source projects. I believe in writing \
                     clean code that tells a story and delivers exceptional user experiences.",
                ]),
                facts: strings(&[
                    "Computer Science degree from Tech University",
                    "Currently working as a Senior Developer at TechCorp",
                    "Remote worker based in Seattle, Washington",
                    "Currently learning TypeScript and GraphQL",
                    "Contributor to 5+ open source projects",
                ]),
            },
            skills: vec![
                SkillCategory {
                    title: "Frontend".to_string(),
                    icon: "🎨".to_string(),
                    skills: vec![
                        skill("React", 95),
                        skill("Next.js", 90),
                        skill("Tailwind CSS", 85),
                        skill("JavaScript", 90),
                        skill("TypeScript", 80),
                    ],
                },
                SkillCategory {
                    title: "Backend".to_string(),
                    icon: "⚙️".to_string(),
                    skills: vec![
                        skill("Node.js", 90),
                        skill("Express", 85),
                        skill("Laravel", 75),
                        skill("Python", 70),
                        skill("API Development", 90),
                    ],
                },
                SkillCategory {
                    title: "Databases".to_string(),
                    icon: "🗄️".to_string(),
                    skills: vec![
                        skill("MySQL", 85),
                        skill("MongoDB", 80),
                        skill("Firebase", 90),
                        skill("PostgreSQL", 75),
                        skill("Redis", 65),
                    ],
                },
                SkillCategory {
                    title: "DevOps & Tools".to_string(),
                    icon: "🛠️".to_string(),
                    skills: vec![
                        skill("Git", 95),
                        skill("Docker", 80),
                        skill("CI/CD", 85),
                        skill("AWS", 70),
                        skill("Vercel", 90),
                    ],
                },
            ],
            projects: vec![
                Project {
                    title: "E-Commerce Platform".to_string(),
                    description: "A complete e-commerce solution with product management, \
                                  cart functionality, and payment processing using Stripe."
                        .to_string(),
                    badges: vec![badge("Full Stack", "blue"), badge("React", "green")],
                    technologies: strings(&["Next.js", "Node.js", "MongoDB", "Stripe"]),
                    demo: Some("#".to_string()),
                    repo: Some("#".to_string()),
                },
                Project {
                    title: "Task Management App".to_string(),
                    description: "A responsive task manager with drag-and-drop interface, \
                                  reminders, and collaborative features."
                        .to_string(),
                    badges: vec![badge("Frontend", "purple"), badge("Mobile", "yellow")],
                    technologies: strings(&["React", "Firebase", "Tailwind CSS"]),
                    demo: Some("#".to_string()),
                    repo: Some("#".to_string()),
                },
                Project {
                    title: "Real Estate Dashboard".to_string(),
                    description: "An analytics dashboard for real estate agents with property \
                                  management and client tracking."
                        .to_string(),
                    badges: vec![badge("Dashboard", "red"), badge("SaaS", "indigo")],
                    technologies: strings(&["React", "Node.js", "Express", "Chart.js"]),
                    demo: Some("#".to_string()),
                    repo: Some("#".to_string()),
                },
                Project {
                    title: "Social Media App".to_string(),
                    description: "A social platform with real-time chat, post management, \
                                  and user profiles."
                        .to_string(),
                    badges: vec![badge("Full Stack", "blue"), badge("Real-time", "green")],
                    technologies: strings(&["React", "Socket.io", "Express", "MongoDB"]),
                    demo: Some("#".to_string()),
                    repo: Some("#".to_string()),
                },
                Project {
                    title: "Recipe Finder".to_string(),
                    description: "A web app to discover recipes based on available \
                                  ingredients with favoriting and meal planning."
                        .to_string(),
                    badges: vec![badge("Frontend", "purple"), badge("API", "teal")],
                    technologies: strings(&["React", "Redux", "Spoonacular API"]),
                    demo: Some("#".to_string()),
                    repo: Some("#".to_string()),
                },
                Project {
                    title: "Fitness Tracker".to_string(),
                    description: "A fitness tracking application with workout plans, \
                                  progress graphs, and social features."
                        .to_string(),
                    badges: vec![badge("Mobile", "yellow"), badge("Health", "pink")],
                    technologies: strings(&["React Native", "Firebase", "Redux"]),
                    demo: Some("#".to_string()),
                    repo: Some("#".to_string()),
                },
            ],
            experience: vec![
                ExperienceEntry {
                    role: "Senior Full Stack Developer".to_string(),
                    company: "TechCorp Inc.".to_string(),
                    period: "Jan 2022 - Present".to_string(),
                    location: "Seattle, WA (Remote)".to_string(),
                    responsibilities: strings(&[
                        "Lead a team of 5 developers in building and maintaining enterprise \
                         SaaS applications",
                        "Architected and implemented microservices-based backend systems \
                         using Node.js and Express",
                        "Developed React component libraries and design systems used across \
                         multiple products",
                        "Improved CI/CD pipelines resulting in 40% faster deployment cycles",
                        "Mentored junior developers and conducted code reviews to maintain \
                         code quality",
                    ]),
                    technologies: strings(&[
                        "React", "Next.js", "Node.js", "MongoDB", "AWS", "Docker",
                    ]),
                },
                ExperienceEntry {
                    role: "Full Stack Developer".to_string(),
                    company: "WebSolutions Ltd.".to_string(),
                    period: "Mar 2019 - Dec 2021".to_string(),
                    location: "San Francisco, CA".to_string(),
                    responsibilities: strings(&[
                        "Built responsive web applications using React and Laravel",
                        "Implemented authentication and authorization systems",
                        "Created RESTful APIs and integrated third-party services",
                        "Optimized database queries leading to 30% improved performance",
                        "Participated in agile development processes with bi-weekly sprints",
                    ]),
                    technologies: strings(&["React", "Laravel", "MySQL", "Redis", "AWS"]),
                },
                ExperienceEntry {
                    role: "Junior Web Developer".to_string(),
                    company: "CreativeTech Studios".to_string(),
                    period: "Jun 2017 - Feb 2019".to_string(),
                    location: "Portland, OR".to_string(),
                    responsibilities: strings(&[
                        "Developed and maintained client websites using HTML, CSS, and \
                         JavaScript",
                        "Created custom WordPress themes and plugins",
                        "Collaborated with designers to implement UI/UX designs",
                        "Assisted in troubleshooting and fixing bugs in existing applications",
                        "Participated in client meetings and gathered requirements",
                    ]),
                    technologies: strings(&["JavaScript", "WordPress", "PHP", "HTML/CSS", "jQuery"]),
                },
            ],
            education: vec![
                EducationEntry {
                    degree: "Bachelor of Science in Software Engineering".to_string(),
                    school: "University of Technology".to_string(),
                    location: "San Francisco, CA".to_string(),
                    period: "2022 - Present".to_string(),
                    gpa: "3.9 / 4.0".to_string(),
                    courses: strings(&[
                        "Data Structures",
                        "Web Development",
                        "AI Fundamentals",
                        "Cloud Computing",
                    ]),
                },
                EducationEntry {
                    degree: "High School Diploma in Computer Science".to_string(),
                    school: "Tech High School".to_string(),
                    location: "Los Angeles, CA".to_string(),
                    period: "2018 - 2022".to_string(),
                    gpa: "4.0 / 4.0".to_string(),
                    courses: strings(&["Programming Basics", "Mathematics", "Physics"]),
                },
            ],
            footer: Footer {
                heading: "Get In Touch".to_string(),
                links: vec![
                    link("GitHub", "https://github.com/johndeveloper"),
                    link("LinkedIn", "https://linkedin.com/in/johndeveloper"),
                    link("Email", "mailto:john@johndeveloper.dev"),
                ],
                note: "Designed & built by John Developer".to_string(),
            },
        }
    }
}
