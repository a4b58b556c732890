/// Canned advice selected by match-percentage bracket.
///
/// Brackets: 100 | [60, 100) | [40, 60) | [0, 40). The foundation tier names at
/// most the first three missing skills.
pub fn recommendations_for(role: &str, missing: &[String], percentage: u32) -> Vec<String> {
    if percentage == 100 {
        vec![
            format!("Congratulations! You have all the required skills for {role}."),
            "Focus on building projects and gaining practical experience.".to_string(),
            "Consider learning advanced topics to stand out.".to_string(),
        ]
    } else if percentage >= 60 {
        vec![
            format!("You're {percentage}% ready for the {role} role!"),
            format!("Focus on learning: {}", missing.join(", ")),
            "You can start applying for junior positions while learning.".to_string(),
        ]
    } else if percentage >= 40 {
        let priority: Vec<&str> = missing.iter().take(3).map(String::as_str).collect();
        vec![
            format!("You have a good foundation ({percentage}% match)."),
            format!("Priority skills to learn: {}", priority.join(", ")),
            "Dedicate 2-3 months of focused learning before applying.".to_string(),
        ]
    } else {
        vec![
            format!("You're at the beginning of your {role} journey ({percentage}% match)."),
            "Follow the suggested learning order below.".to_string(),
            "Expect 4-6 months of dedicated learning.".to_string(),
        ]
    }
}

pub fn unrecognized_role(role: &str) -> String {
    format!("The role \"{role}\" is not recognized. Please provide a valid role.")
}
