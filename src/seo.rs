use serde::Serialize;
use serde_json::{json, Value};

use crate::config;
use crate::content::{self, FaqEntry};

#[derive(Serialize)]
struct Answer {
    #[serde(rename = "@type")]
    kind: &'static str,
    text: &'static str,
}

#[derive(Serialize)]
struct Question {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(rename = "acceptedAnswer")]
    accepted_answer: Answer,
}

impl From<&FaqEntry> for Question {
    fn from(entry: &FaqEntry) -> Self {
        Self {
            kind: "Question",
            name: entry.question,
            accepted_answer: Answer {
                kind: "Answer",
                text: entry.answer,
            },
        }
    }
}

/// schema.org graph for the page: the course with its offer, and the FAQ.
pub fn structured_data() -> Value {
    let questions: Vec<Question> = content::FAQS.iter().map(Question::from).collect();

    json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "Course",
                "name": content::COURSE_NAME,
                "provider": {
                    "@type": "Organization",
                    "name": content::BRAND,
                },
                "instructor": {
                    "@type": "Person",
                    "name": content::INSTRUCTOR,
                },
                "offers": {
                    "@type": "Offer",
                    "price": content::OFFER_PRICE_USD.to_string(),
                    "priceCurrency": "USD",
                    "url": config::PAYMENT_LINK,
                },
            },
            {
                "@type": "FAQPage",
                "mainEntity": questions,
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_offer_points_at_checkout() {
        let data = structured_data();
        let course = &data["@graph"][0];
        assert_eq!(course["@type"], "Course");
        assert_eq!(course["offers"]["price"], "347");
        assert_eq!(course["offers"]["url"], config::PAYMENT_LINK);
    }

    #[test]
    fn faq_page_lists_every_question() {
        let data = structured_data();
        let questions = data["@graph"][1]["mainEntity"]
            .as_array()
            .cloned()
            .unwrap_or_default();
        assert_eq!(questions.len(), content::FAQS.len());
        assert_eq!(questions[0]["name"], content::FAQS[0].question);
        assert_eq!(questions[0]["acceptedAnswer"]["@type"], "Answer");
    }
}
