//! Canned learning plans. Each plan has three phases.

use crate::roadmap::{Phase, RoadmapPlan};

fn phase(
    number: u8,
    title: &str,
    duration: &str,
    skills: &[&str],
    description: &str,
    milestones: &[&str],
) -> Phase {
    Phase {
        phase: number,
        title: title.to_string(),
        duration: duration.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
        milestones: milestones.iter().map(|s| s.to_string()).collect(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn builtin_plans() -> Vec<(&'static str, RoadmapPlan)> {
    vec![
        ("Frontend Developer", frontend_developer()),
        ("Backend Developer", backend_developer()),
        ("Data Analyst", data_analyst()),
    ]
}

fn frontend_developer() -> RoadmapPlan {
    RoadmapPlan {
        phases: vec![
            phase(
                1,
                "Foundations",
                "1-2 months",
                &["HTML", "CSS", "JavaScript Basics", "Git & GitHub"],
                "Build a strong foundation in web technologies",
                &[
                    "Create 3 static websites using HTML/CSS",
                    "Learn JavaScript fundamentals (variables, functions, loops)",
                    "Set up Git and push projects to GitHub",
                    "Understand DOM manipulation",
                ],
            ),
            phase(
                2,
                "Modern Frontend",
                "2-3 months",
                &["React", "Component Design", "State Management", "API Integration"],
                "Master modern frontend frameworks",
                &[
                    "Build 2-3 React projects",
                    "Learn hooks (useState, useEffect, custom hooks)",
                    "Integrate REST APIs",
                    "Implement responsive design with Tailwind/CSS",
                ],
            ),
            phase(
                3,
                "Professional Skills",
                "1-2 months",
                &["Next.js", "Testing", "Performance Optimization", "Deployment"],
                "Level up with production-ready skills",
                &[
                    "Build a full-stack app with Next.js",
                    "Learn basic testing (Jest, React Testing Library)",
                    "Deploy projects on Vercel/Netlify",
                    "Build a portfolio website",
                ],
            ),
        ],
        total_duration: "4-7 months".to_string(),
        career_tips: strings(&[
            "Build projects while learning, not after",
            "Contribute to open source after Phase 2",
            "Network with other developers on Twitter/LinkedIn",
            "Start applying for jobs during Phase 3",
        ]),
    }
}

fn backend_developer() -> RoadmapPlan {
    RoadmapPlan {
        phases: vec![
            phase(
                1,
                "Java & Programming Fundamentals",
                "1-2 months",
                &["Java Basics", "OOP Concepts", "Data Structures", "Git"],
                "Master Java programming and core concepts",
                &[
                    "Learn Java syntax, classes, and objects",
                    "Understand OOP principles (inheritance, polymorphism, encapsulation)",
                    "Implement common data structures (ArrayList, HashMap)",
                    "Set up Git and version control",
                ],
            ),
            phase(
                2,
                "Backend Development",
                "2-3 months",
                &["Spring Boot", "SQL & Databases", "REST APIs", "Authentication"],
                "Build robust backend systems",
                &[
                    "Create REST APIs with Spring Boot",
                    "Design and query SQL databases",
                    "Implement CRUD operations",
                    "Add JWT authentication",
                    "Learn Postman for API testing",
                ],
            ),
            phase(
                3,
                "Production & Deployment",
                "1-2 months",
                &["Docker", "Deployment", "System Design", "Project Work"],
                "Prepare for production environments",
                &[
                    "Containerize applications with Docker",
                    "Deploy backend on AWS/Heroku/Railway",
                    "Learn basic system design patterns",
                    "Build 1-2 full-stack projects",
                    "Understand CI/CD basics",
                ],
            ),
        ],
        total_duration: "4-7 months".to_string(),
        career_tips: strings(&[
            "Focus on writing clean, maintainable code",
            "Document your APIs properly",
            "Learn to read and debug logs effectively",
            "Practice coding problems on LeetCode (Easy/Medium)",
        ]),
    }
}

fn data_analyst() -> RoadmapPlan {
    RoadmapPlan {
        phases: vec![
            phase(
                1,
                "Data Fundamentals",
                "1-2 months",
                &["Excel Advanced", "Statistics Basics", "SQL Fundamentals"],
                "Build foundation in data manipulation",
                &[
                    "Master Excel (VLOOKUP, PivotTables, formulas)",
                    "Learn descriptive statistics (mean, median, standard deviation)",
                    "Write SQL queries (SELECT, JOIN, GROUP BY)",
                    "Analyze sample datasets",
                ],
            ),
            phase(
                2,
                "Programming & Analysis",
                "2-3 months",
                &["Python", "Pandas", "Data Visualization", "Advanced SQL"],
                "Automate analysis with programming",
                &[
                    "Learn Python basics and Pandas library",
                    "Create visualizations with Matplotlib/Seaborn",
                    "Write complex SQL queries (subqueries, window functions)",
                    "Clean and transform real-world datasets",
                    "Perform exploratory data analysis (EDA)",
                ],
            ),
            phase(
                3,
                "Dashboard & Reporting",
                "1-2 months",
                &["Tableau/Power BI", "Dashboard Design", "Business Intelligence"],
                "Create impactful visual reports",
                &[
                    "Build interactive dashboards in Tableau/Power BI",
                    "Connect to databases and APIs",
                    "Learn data storytelling principles",
                    "Create a portfolio of 3-4 analysis projects",
                    "Present insights effectively",
                ],
            ),
        ],
        total_duration: "4-7 months".to_string(),
        career_tips: strings(&[
            "Always start with business questions, not data",
            "Focus on communicating insights clearly",
            "Build a portfolio showcasing real analysis",
            "Network on LinkedIn and share your work",
        ]),
    }
}

/// Plan returned for any role without a canned entry.
pub fn generic_plan(role: &str) -> RoadmapPlan {
    RoadmapPlan {
        phases: vec![
            phase(
                1,
                "Research & Planning",
                "1 month",
                &["Industry Research", "Skill Identification"],
                "Understand the role requirements",
                &[
                    "Research job descriptions for this role",
                    "Identify common skills and technologies",
                    "Connect with professionals in this field",
                    "Create a personalized learning plan",
                ],
            ),
            phase(
                2,
                "Core Learning",
                "3-4 months",
                &["Role-specific technical skills"],
                "Learn the fundamental skills",
                &[
                    "Complete online courses for core skills",
                    "Build practice projects",
                    "Join relevant communities",
                    "Get feedback on your work",
                ],
            ),
            phase(
                3,
                "Apply & Build",
                "2-3 months",
                &["Portfolio", "Networking", "Interviews"],
                "Prepare for job market",
                &[
                    "Build a professional portfolio",
                    "Start networking actively",
                    "Apply for positions",
                    "Practice interviews",
                ],
            ),
        ],
        total_duration: "6-8 months".to_string(),
        career_tips: vec![
            format!("Research the {role} role thoroughly"),
            "Connect with people already in this role".to_string(),
            "Build projects relevant to the field".to_string(),
            "Stay updated with industry trends".to_string(),
        ],
    }
}
