use std::fmt;

/// One of the three trivia questions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Pet,
    City,
    Job,
}

impl Field {
    /// All fields in concatenation order
    pub const ALL: [Field; 3] = [Field::Pet, Field::City, Field::Job];

    /// The question shown to the user for this field
    pub fn question(&self) -> &'static str {
        match self {
            Field::Pet => "What was your childhood pet's name?",
            Field::City => "What's a city you'd love to visit?",
            Field::Job => "What was your dream job as a child?",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Pet => write!(f, "pet"),
            Field::City => write!(f, "city"),
            Field::Job => write!(f, "job"),
        }
    }
}

/// Answers to the three trivia questions
#[derive(Clone, Debug, Default)]
pub struct TriviaAnswers {
    /// Childhood pet's name
    pub pet: String,
    /// City the user would love to visit
    pub city: String,
    /// Childhood dream job
    pub job: String,
}

impl TriviaAnswers {
    pub fn new(pet: impl Into<String>, city: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            pet: pet.into(),
            city: city.into(),
            job: job.into(),
        }
    }

    /// Get the answer for a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Pet => &self.pet,
            Field::City => &self.city,
            Field::Job => &self.job,
        }
    }

    /// Set the answer for a field
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Pet => self.pet = value,
            Field::City => self.city = value,
            Field::Job => self.job = value,
        }
    }

    /// Fields that are empty or whitespace-only
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&field| self.get(field).trim().is_empty())
            .collect()
    }

    /// Characters of pet, city and job in that order, with no separator
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        Field::ALL.into_iter().flat_map(move |field| self.get(field).chars())
    }

    /// Upper bound on the number of characters in `chars`
    pub fn byte_len(&self) -> usize {
        self.pet.len() + self.city.len() + self.job.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_none() {
        let answers = TriviaAnswers::new("Rex", "Lima", "Chef");
        assert!(answers.missing_fields().is_empty());
    }

    #[test]
    fn test_missing_fields_whitespace_only() {
        let answers = TriviaAnswers::new(" \t", "Lima", "");
        assert_eq!(answers.missing_fields(), vec![Field::Pet, Field::Job]);
    }

    #[test]
    fn test_chars_in_field_order() {
        let answers = TriviaAnswers::new("Mr Fluffy", "Lima", "Chef");
        assert_eq!(answers.chars().collect::<String>(), "Mr FluffyLimaChef");
        assert_eq!(answers.byte_len(), 17);
    }

    #[test]
    fn test_set_and_get() {
        let mut answers = TriviaAnswers::default();
        answers.set(Field::City, "Tokyo".to_string());
        assert_eq!(answers.get(Field::City), "Tokyo");
        assert_eq!(answers.missing_fields(), vec![Field::Pet, Field::Job]);
    }
}
