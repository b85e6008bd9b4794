mod builtin;
mod models;

pub use models::{
    About, Badge, ContactLink, EducationEntry, ExperienceEntry, Footer, PortfolioContent, Profile,
    Project, Skill, SkillCategory,
};
