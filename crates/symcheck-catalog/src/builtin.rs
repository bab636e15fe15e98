use crate::condition::{Condition, SeverityClass};

/// The reference catalog, in definition order.
///
/// Order matters: it is the tie-break order when several conditions share
/// the best score.
pub(crate) fn conditions() -> Vec<Condition> {
    use SeverityClass::{Minor, Other};

    let entries: [(&str, &[&str], &str, SeverityClass); 7] = [
        (
            "Flu",
            &["fever", "cough", "sore throat", "body ache", "fatigue"],
            "General Practitioner",
            Minor,
        ),
        (
            "COVID-19",
            &[
                "fever",
                "dry cough",
                "loss of smell",
                "fatigue",
                "shortness of breath",
            ],
            "General Practitioner or Infectious Disease Specialist",
            Other,
        ),
        (
            "Malaria",
            &["fever", "chills", "sweating", "nausea", "headache"],
            "Infectious Disease Specialist",
            Other,
        ),
        (
            "Diabetes",
            &[
                "increased thirst",
                "frequent urination",
                "fatigue",
                "blurred vision",
            ],
            "Endocrinologist",
            Other,
        ),
        (
            "Hypertension",
            &["headache", "dizziness", "chest pain", "shortness of breath"],
            "Cardiologist",
            Other,
        ),
        (
            "Common Cold",
            &["cough", "sore throat", "runny nose", "sneezing", "mild fever"],
            "General Practitioner",
            Minor,
        ),
        (
            "Migraine",
            &["headache", "nausea", "sensitivity to light", "blurred vision"],
            "Neurologist",
            Minor,
        ),
    ];

    entries
        .iter()
        .map(|(name, symptoms, specialist, severity)| {
            Condition::from_static(name, symptoms, specialist, *severity)
        })
        .collect()
}
