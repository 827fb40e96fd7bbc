use super::Country;

pub const NUM_OPTIONS: usize = 4;

/// One round: a flag to identify and four candidate countries.
#[derive(Debug, Clone)]
pub struct Question {
    pub options: [Country; NUM_OPTIONS],
    pub correct_index: usize,
}

impl Question {
    pub fn correct(&self) -> &Country {
        &self.options[self.correct_index]
    }

    pub fn option_index(&self, country_id: &str) -> Option<usize> {
        self.options.iter().position(|c| c.id == country_id)
    }

    pub fn is_correct(&self, country_id: &str) -> bool {
        self.correct().id == country_id
    }
}
