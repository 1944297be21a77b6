//! Questionnaire-to-simulation transformation.

use shared_types::{PersonaSpec, Questionnaire, SimulationRequest};

/// Build a simulation request from a backend-generated questionnaire.
///
/// One persona per stakeholder; stakeholders without questions are skipped.
/// Persona names are derived from the stakeholder and its position so the
/// transform is deterministic across retries.
pub fn simulation_request_from_questionnaire(
    questionnaire: &Questionnaire,
    interviews_per_stakeholder: u32,
) -> SimulationRequest {
    let personas: Vec<PersonaSpec> = questionnaire
        .stakeholders
        .iter()
        .filter(|group| !group.questions.is_empty())
        .enumerate()
        .map(|(index, group)| PersonaSpec {
            name: format!("{} {}", group.stakeholder, index + 1),
            stakeholder: group.stakeholder.clone(),
            background: group.role_description.clone(),
            questions: group.questions.clone(),
        })
        .collect();

    SimulationRequest {
        session_id: questionnaire.session_id.clone(),
        personas,
        interviews_per_stakeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::StakeholderQuestions;

    fn questionnaire() -> Questionnaire {
        Questionnaire {
            session_id: "session-7".to_string(),
            stakeholders: vec![
                StakeholderQuestions {
                    stakeholder: "Technical User".to_string(),
                    role_description: Some("Maintains the integration".to_string()),
                    questions: vec![
                        "How do you monitor failures?".to_string(),
                        "What would you automate first?".to_string(),
                    ],
                },
                StakeholderQuestions {
                    stakeholder: "Buyer".to_string(),
                    role_description: None,
                    questions: Vec::new(),
                },
                StakeholderQuestions {
                    stakeholder: "Analyst".to_string(),
                    role_description: None,
                    questions: vec!["How do you share findings?".to_string()],
                },
            ],
            generated_at: 1700000000,
        }
    }

    #[test]
    fn test_transform_skips_empty_stakeholders() {
        let request = simulation_request_from_questionnaire(&questionnaire(), 2);

        assert_eq!(request.session_id, "session-7");
        assert_eq!(request.interviews_per_stakeholder, 2);
        assert_eq!(request.personas.len(), 2);
        assert_eq!(request.personas[0].stakeholder, "Technical User");
        assert_eq!(request.personas[1].stakeholder, "Analyst");
    }

    #[test]
    fn test_transform_copies_questions_and_background() {
        let request = simulation_request_from_questionnaire(&questionnaire(), 1);

        assert_eq!(request.personas[0].questions.len(), 2);
        assert_eq!(
            request.personas[0].background.as_deref(),
            Some("Maintains the integration")
        );
    }

    #[test]
    fn test_transform_is_deterministic() {
        let q = questionnaire();
        let a = simulation_request_from_questionnaire(&q, 1);
        let b = simulation_request_from_questionnaire(&q, 1);
        assert_eq!(a.personas[0].name, b.personas[0].name);
        assert_eq!(a.personas.len(), b.personas.len());
    }
}
