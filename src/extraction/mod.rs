pub mod job_skills;
pub mod requirements;
pub mod resume_skills;

pub use job_skills::extract_job_skills;
pub use requirements::{
    education_rank, highest_education_level, parse_job_requirements, JobRequirements,
    RequirementOverrides,
};
pub use resume_skills::extract_resume_skills;
