//! Built-in keyword responder.
//!
//! Offline fallback used when no remote responder endpoint is configured.
//! Answers common cyber-law questions from a canned table, keyed by
//! substring match on the lowercased query.

use async_trait::async_trait;

use crate::error::ChatResult;
use crate::responder::Responder;

/// Canned answers for common cyber-law questions
const RESPONSES: &[(&str, &str)] = &[
    (
        "what is cyber law",
        "Cyber law refers to the legal issues related to the use of the internet, \
         computers, and technology. It covers areas such as data protection, privacy, \
         electronic commerce, intellectual property, and cybercrime.",
    ),
    (
        "what is cybercrime",
        "Cybercrime refers to criminal activities carried out using computers and the \
         internet. This includes hacking, phishing, identity theft, online fraud, cyber \
         stalking, and distribution of illegal content.",
    ),
    (
        "data protection",
        "Data protection laws regulate how personal data should be collected, processed, \
         and stored. They aim to protect individuals' privacy and give them control over \
         their personal information. Key regulations include GDPR in Europe and various \
         data protection acts worldwide.",
    ),
    (
        "intellectual property online",
        "Digital intellectual property includes copyrights for online content, trademarks \
         for domain names and digital brands, and patents for software innovations. \
         Infringement occurs through unauthorized use, distribution, or reproduction of \
         protected material.",
    ),
    (
        "online privacy rights",
        "Online privacy rights include the right to control personal data, be informed \
         about data collection, access collected data, request data deletion, and object \
         to certain processing activities. Privacy laws aim to protect these rights.",
    ),
    (
        "hacking consequences",
        "Unauthorized access to computer systems (hacking) is a criminal offense in most \
         jurisdictions. Penalties can include fines and imprisonment, with severity \
         depending on the intent, damage caused, and targeted systems.",
    ),
    (
        "gdpr",
        "The General Data Protection Regulation (GDPR) is a comprehensive EU data \
         protection law that came into effect in 2018. It gives individuals control over \
         their personal data and standardizes data protection laws across EU member states.",
    ),
    (
        "digital signature legality",
        "Digital signatures are legally recognized in many countries through legislation \
         like the Electronic Signatures in Global and National Commerce Act (ESIGN) in \
         the US and the eIDAS Regulation in the EU. They're legally binding for most \
         contracts and documents.",
    ),
];

const DEFAULT_RESPONSE: &str = "I'm specialized in cyber law topics. Could you please ask \
     something related to cyber law, such as cybercrime, data protection, online privacy, \
     digital signatures, or intellectual property rights?";

/// Rule-based responder with no network dependency.
#[derive(Debug, Default, Clone)]
pub struct KeywordResponder;

impl KeywordResponder {
    pub fn new() -> Self {
        Self
    }

    fn answer(&self, query: &str) -> String {
        let query = query.to_lowercase();

        for (key, response) in RESPONSES {
            if query.contains(key) {
                return (*response).to_string();
            }
        }

        if query.contains("hello") || query.contains("hi") || query.contains("hey") {
            return "Hello! I'm your Cyber Law Assistant. How can I help you today with \
                    cyber law related questions?"
                .to_string();
        }

        if query.contains("thank") {
            return "You're welcome! If you have more questions about cyber law, feel free \
                    to ask."
                .to_string();
        }

        if query.contains("bye") || query.contains("goodbye") {
            return "Goodbye! Feel free to return if you have more cyber law questions."
                .to_string();
        }

        DEFAULT_RESPONSE.to_string()
    }
}

#[async_trait]
impl Responder for KeywordResponder {
    async fn reply(&self, message: &str) -> ChatResult<String> {
        Ok(self.answer(message))
    }
}
