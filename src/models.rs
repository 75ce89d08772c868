use crate::state::filter::Categorized;

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: &'static str,
    pub tech_stack: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub repo_url: Option<&'static str>,
}

impl Categorized for Project {
    fn category(&self) -> &str {
        self.category
    }
}

impl Project {
    pub fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title, self.description, self.category];
        fields.extend_from_slice(self.tech_stack);
        fields
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

impl Categorized for FaqEntry {
    fn category(&self) -> &str {
        self.category
    }
}

impl FaqEntry {
    /// Fields the FAQ search box looks at.
    pub fn search_fields(&self) -> Vec<&str> {
        vec![self.question, self.answer, self.category]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub rating: u8,
    pub avatar: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessStep {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub deliverables: &'static [&'static str],
    pub duration: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub description: &'static str,
}
