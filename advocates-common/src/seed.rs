//! Bundled seed advocates
//!
//! Inserted by `POST /api/seed` so a fresh database has something to browse.

use crate::model::NewAdvocate;

/// Specialty catalogue the seed records draw from
pub const SPECIALTIES: &[&str] = &[
    "Bipolar",
    "LGBTQ",
    "Medication/Prescribing",
    "Suicide History/Attempts",
    "General Mental Health (anxiety, depression, stress, grief, life transitions)",
    "Men's issues",
    "Relationship Issues (family, friends, couple, etc)",
    "Trauma & PTSD",
    "Personality disorders",
    "Personal growth",
    "Substance use/abuse",
    "Pediatrics",
    "Women's issues (post-partum, infertility, family planning)",
    "Chronic pain",
    "Weight loss & nutrition",
    "Eating disorders",
    "Diabetic Diet and nutrition",
    "Coaching (leadership, career, academic and wellness)",
    "Life coaching",
    "Obsessive-compulsive disorders",
    "Neuropsychological evaluations & testing (ADHD testing)",
    "Attention and Hyperactivity (ADHD)",
    "Sleep issues",
    "Schizophrenia and psychotic disorders",
    "Learning disorders",
    "Domestic abuse",
];

/// (first, last, city, degree, years, phone)
const PEOPLE: &[(&str, &str, &str, &str, u32, &str)] = &[
    ("John", "Doe", "New York", "MD", 10, "5551234567"),
    ("Jane", "Smith", "Los Angeles", "PhD", 8, "5559876543"),
    ("Alice", "Johnson", "Chicago", "MSW", 5, "5554567890"),
    ("Michael", "Brown", "Houston", "MD", 12, "5556543210"),
    ("Emily", "Davis", "Phoenix", "PhD", 7, "5553210987"),
    ("Chris", "Martinez", "Philadelphia", "MSW", 9, "5557890123"),
    ("Jessica", "Taylor", "San Antonio", "MD", 11, "5554561234"),
    ("David", "Harris", "San Diego", "PhD", 6, "5557896543"),
    ("Laura", "Clark", "Dallas", "MSW", 4, "5550123456"),
    ("Daniel", "Lewis", "San Jose", "MD", 13, "5553217654"),
    ("Sarah", "Lee", "Austin", "PhD", 10, "5551238765"),
    ("James", "King", "Jacksonville", "MSW", 5, "5556540987"),
    ("Megan", "Green", "San Francisco", "MD", 14, "5559873456"),
    ("Joshua", "Walker", "Columbus", "PhD", 9, "5556781234"),
    ("Amanda", "Hall", "Fort Worth", "MSW", 3, "5559872345"),
];

/// Pick a deterministic run of specialties for the nth seed record.
fn specialties_for(index: usize) -> Vec<String> {
    let start = (index * 7) % SPECIALTIES.len();
    let count = 1 + index % 4;
    (0..count)
        .map(|offset| SPECIALTIES[(start + offset * 3) % SPECIALTIES.len()].to_string())
        .collect()
}

/// Seed advocates, in insertion order
pub fn seed_advocates() -> Vec<NewAdvocate> {
    PEOPLE
        .iter()
        .enumerate()
        .map(|(index, &(first, last, city, degree, years, phone))| NewAdvocate {
            first_name: first.to_string(),
            last_name: last.to_string(),
            city: city.to_string(),
            degree: degree.to_string(),
            specialties: specialties_for(index),
            years_of_experience: years,
            phone_number: phone.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_specialties_come_from_catalogue() {
        let catalogue: HashSet<&str> = SPECIALTIES.iter().copied().collect();
        for advocate in seed_advocates() {
            assert!(!advocate.specialties.is_empty());
            for specialty in &advocate.specialties {
                assert!(catalogue.contains(specialty.as_str()), "unknown specialty {specialty}");
            }
        }
    }

    #[test]
    fn test_seed_specialties_have_no_duplicates() {
        for advocate in seed_advocates() {
            let unique: HashSet<&String> = advocate.specialties.iter().collect();
            assert_eq!(unique.len(), advocate.specialties.len());
        }
    }

    #[test]
    fn test_seed_phone_numbers_are_numeric() {
        for advocate in seed_advocates() {
            assert!(advocate.phone_number.parse::<i64>().is_ok());
        }
    }
}
