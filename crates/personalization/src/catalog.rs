//! Built-in Catalogs
//!
//! The static connection-request template set and the bundled sample
//! prospect list. Both are loaded once at startup and never mutated.

use crate::models::{MessageTemplate, PersonalizationError, Prospect};

/// An ordered, non-empty set of message templates.
///
/// Variation generation walks the catalog in order; single-message
/// generation picks uniformly at random.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<MessageTemplate>,
}

impl TemplateCatalog {
    /// Build a catalog from a template list, rejecting empty lists and
    /// templates with out-of-domain metrics.
    pub fn try_new(templates: Vec<MessageTemplate>) -> Result<Self, PersonalizationError> {
        if templates.is_empty() {
            return Err(PersonalizationError::EmptyCatalog);
        }
        for template in &templates {
            template.validate()?;
        }
        Ok(Self { templates })
    }

    /// The built-in connection-request templates
    pub fn connection_request_defaults() -> Self {
        Self {
            templates: vec![
                MessageTemplate::new(
                    "Hi {{name}}, noticed your recent work on {{recent_topic}} at {{company}}. \
                     I work with {{target_role}} helping them {{value_proposition}}. \
                     Would love to connect and share insights!",
                    96,
                    0.41,
                ),
                MessageTemplate::new(
                    "Hello {{name}}, your insights on {{recent_topic}} at {{company}} caught \
                     my attention. I help {{target_role}} optimize their {{focus_area}}. \
                     Let's connect!",
                    93,
                    0.38,
                ),
                MessageTemplate::new(
                    "Hi {{name}}, saw your post about {{recent_topic}} - completely agree! \
                     I've helped similar companies at {{company}} achieve {{specific_benefit}}. \
                     Worth connecting?",
                    91,
                    0.35,
                ),
            ],
        }
    }

    pub fn templates(&self) -> &[MessageTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MessageTemplate> {
        self.templates.get(index)
    }
}

/// The bundled sample prospect list, in load order
pub fn sample_prospects() -> Vec<Prospect> {
    vec![
        Prospect {
            id: 1,
            name: "Anjali Mehta".to_string(),
            title: "HR Director".to_string(),
            company: "TechFlow Solutions".to_string(),
            location: "Mumbai, India".to_string(),
            score: 94,
            recent_activity: "Posted about AI transformation in HR processes".to_string(),
            talking_points: vec![
                "AI in HR".to_string(),
                "Digital transformation".to_string(),
                "Team scaling".to_string(),
                "Remote work policies".to_string(),
            ],
            profile_insights: "Leading HR digital transformation at 200+ employee tech company. \
                               Recently implemented AI-powered hiring tools with 40% efficiency \
                               improvement."
                .to_string(),
            personalization_opportunities: vec![
                "Recent AI adoption".to_string(),
                "Mumbai tech ecosystem".to_string(),
                "HR automation expertise".to_string(),
                "Team growth achievements".to_string(),
            ],
            profile_url: "https://linkedin.com/in/anjali-mehta-hr".to_string(),
        },
        Prospect {
            id: 2,
            name: "Rahul Kumar".to_string(),
            title: "CTO".to_string(),
            company: "StartupForge".to_string(),
            location: "Bangalore, India".to_string(),
            score: 91,
            recent_activity: "Shared insights on cloud-native architecture patterns".to_string(),
            talking_points: vec![
                "Cloud migration".to_string(),
                "Microservices".to_string(),
                "DevOps".to_string(),
                "Tech leadership".to_string(),
            ],
            profile_insights: "Technical visionary building scalable cloud infrastructure. Led \
                               successful migration of monolith to microservices, reducing costs \
                               by 60%."
                .to_string(),
            personalization_opportunities: vec![
                "Cloud architecture expertise".to_string(),
                "Bangalore startup scene".to_string(),
                "Cost optimization focus".to_string(),
                "Technical leadership".to_string(),
            ],
            profile_url: "https://linkedin.com/in/rahul-kumar-cto".to_string(),
        },
        Prospect {
            id: 3,
            name: "Priya Sharma".to_string(),
            title: "VP Marketing".to_string(),
            company: "GrowthLabs".to_string(),
            location: "Delhi, India".to_string(),
            score: 89,
            recent_activity: "Celebrated 200% growth achievement in Q3 2025".to_string(),
            talking_points: vec![
                "Growth marketing".to_string(),
                "Performance metrics".to_string(),
                "B2B strategies".to_string(),
                "Team leadership".to_string(),
            ],
            profile_insights: "Growth marketing expert with proven track record. Led team that \
                               achieved 200% growth in 8 months using data-driven strategies."
                .to_string(),
            personalization_opportunities: vec![
                "Recent growth milestone".to_string(),
                "B2B marketing expertise".to_string(),
                "Delhi market knowledge".to_string(),
                "Data-driven approach".to_string(),
            ],
            profile_url: "https://linkedin.com/in/priya-sharma-vp".to_string(),
        },
        Prospect {
            id: 4,
            name: "Arjun Patel".to_string(),
            title: "Sales Director".to_string(),
            company: "CloudVenture".to_string(),
            location: "Pune, India".to_string(),
            score: 87,
            recent_activity: "Announced successful expansion to Southeast Asia markets".to_string(),
            talking_points: vec![
                "International expansion".to_string(),
                "Sales strategy".to_string(),
                "Market development".to_string(),
                "Team scaling".to_string(),
            ],
            profile_insights: "Sales leader driving global expansion. Successfully launched in 3 \
                               new markets with 150% revenue increase in international segments."
                .to_string(),
            personalization_opportunities: vec![
                "Expansion achievement".to_string(),
                "International sales".to_string(),
                "Pune business hub".to_string(),
                "Strategic planning".to_string(),
            ],
            profile_url: "https://linkedin.com/in/arjun-patel-sales".to_string(),
        },
        Prospect {
            id: 5,
            name: "Meera Gupta".to_string(),
            title: "Head of Marketing".to_string(),
            company: "InnovateTech".to_string(),
            location: "Chennai, India".to_string(),
            score: 88,
            recent_activity: "Published comprehensive whitepaper on B2B marketing automation \
                              trends"
                .to_string(),
            talking_points: vec![
                "Marketing automation".to_string(),
                "B2B trends".to_string(),
                "Content strategy".to_string(),
                "Industry insights".to_string(),
            ],
            profile_insights: "Marketing thought leader and content creator. Her automation \
                               strategies helped reduce customer acquisition costs by 45% while \
                               increasing lead quality."
                .to_string(),
            personalization_opportunities: vec![
                "Thought leadership".to_string(),
                "Automation expertise".to_string(),
                "Chennai market".to_string(),
                "Cost optimization".to_string(),
            ],
            profile_url: "https://linkedin.com/in/meera-gupta-marketing".to_string(),
        },
    ]
}
