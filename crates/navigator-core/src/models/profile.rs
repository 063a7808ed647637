//! Student profile snapshot consumed by the template matcher.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Normalizes user-facing spellings ("Full Stack Developer",
/// "full-stack-developer") to the snake_case storage form.
fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

/// Engineering branch of a student.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Cse,
    Mechanical,
    Ece,
    Eee,
    Civil,
    Chemical,
    Aerospace,
    Biomedical,
}

impl Branch {
    /// Every branch, in declaration order.
    pub const ALL: [Branch; 8] = [
        Branch::Cse,
        Branch::Mechanical,
        Branch::Ece,
        Branch::Eee,
        Branch::Civil,
        Branch::Chemical,
        Branch::Aerospace,
        Branch::Biomedical,
    ];

    /// Database and wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Cse => "cse",
            Branch::Mechanical => "mechanical",
            Branch::Ece => "ece",
            Branch::Eee => "eee",
            Branch::Civil => "civil",
            Branch::Chemical => "chemical",
            Branch::Aerospace => "aerospace",
            Branch::Biomedical => "biomedical",
        }
    }

    /// Human readable name
    pub fn label(&self) -> &'static str {
        match self {
            Branch::Cse => "CSE",
            Branch::Mechanical => "Mechanical",
            Branch::Ece => "ECE",
            Branch::Eee => "EEE",
            Branch::Civil => "Civil",
            Branch::Chemical => "Chemical",
            Branch::Aerospace => "Aerospace",
            Branch::Biomedical => "Biomedical",
        }
    }
}

impl FromStr for Branch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        Branch::ALL
            .into_iter()
            .find(|b| b.as_str() == normalized)
            .ok_or_else(|| format!("Invalid branch: {s}"))
    }
}

/// Career goal a roadmap leads towards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CareerGoal {
    PythonBackendDeveloper,
    DataEngineer,
    DevopsEngineer,
    CloudEngineer,
    FrontendDeveloper,
    FullStackDeveloper,
    MachineLearningEngineer,
    MobileDeveloper,
}

impl CareerGoal {
    /// Every career goal, in declaration order.
    pub const ALL: [CareerGoal; 8] = [
        CareerGoal::PythonBackendDeveloper,
        CareerGoal::DataEngineer,
        CareerGoal::DevopsEngineer,
        CareerGoal::CloudEngineer,
        CareerGoal::FrontendDeveloper,
        CareerGoal::FullStackDeveloper,
        CareerGoal::MachineLearningEngineer,
        CareerGoal::MobileDeveloper,
    ];

    /// Database and wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerGoal::PythonBackendDeveloper => "python_backend_developer",
            CareerGoal::DataEngineer => "data_engineer",
            CareerGoal::DevopsEngineer => "devops_engineer",
            CareerGoal::CloudEngineer => "cloud_engineer",
            CareerGoal::FrontendDeveloper => "frontend_developer",
            CareerGoal::FullStackDeveloper => "full_stack_developer",
            CareerGoal::MachineLearningEngineer => "machine_learning_engineer",
            CareerGoal::MobileDeveloper => "mobile_developer",
        }
    }

    /// Human readable name
    pub fn label(&self) -> &'static str {
        match self {
            CareerGoal::PythonBackendDeveloper => "Python Backend Developer",
            CareerGoal::DataEngineer => "Data Engineer",
            CareerGoal::DevopsEngineer => "DevOps Engineer",
            CareerGoal::CloudEngineer => "Cloud Engineer",
            CareerGoal::FrontendDeveloper => "Frontend Developer",
            CareerGoal::FullStackDeveloper => "Full Stack Developer",
            CareerGoal::MachineLearningEngineer => "Machine Learning Engineer",
            CareerGoal::MobileDeveloper => "Mobile Developer",
        }
    }
}

impl FromStr for CareerGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        CareerGoal::ALL
            .into_iter()
            .find(|g| g.as_str() == normalized)
            .ok_or_else(|| format!("Invalid career goal: {s}"))
    }
}

/// Read-only snapshot of a student profile.
///
/// Owned by the profile subsystem, which has already range-checked the year
/// (1-4) and semester (1-2). The engine uses the values only as matching
/// inputs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub branch: Branch,
    pub career_goal: CareerGoal,
    pub current_year: u8,
    pub current_semester: u8,
}
