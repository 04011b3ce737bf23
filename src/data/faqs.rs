#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Is TinyNinza safe for my child to use?",
        answer: "Absolutely! TinyNinza is designed with child safety as a top priority. Our app is completely ad-free and contains no in-app purchases. All content is age-appropriate and reviewed by early childhood education experts.",
    },
    Faq {
        question: "What age group is TinyNinza designed for?",
        answer: "TinyNinza is primarily designed for children aged 3-8 years, with content that adapts to different developmental stages and abilities. The games grow with your child, providing appropriate challenges as they progress.",
    },
    Faq {
        question: "How does the subscription work?",
        answer: "TinyNinza offers a free trial followed by monthly or annual subscription options. The subscription provides unlimited access to all 44 games and any new games we add. You can cancel anytime through your app store account.",
    },
    Faq {
        question: "Is there offline access to TinyNinza games?",
        answer: "Yes! Once downloaded, most TinyNinza games can be played offline, making them perfect for travel or times when you don't have internet access.",
    },
    Faq {
        question: "How do I contact support if I have an issue?",
        answer: "You can reach our support team via email at support@tinyninja.com or through the contact form on this website. We aim to respond to all inquiries within 24 hours.",
    },
    Faq {
        question: "Are the games aligned with educational standards?",
        answer: "Yes, TinyNinza games are designed in collaboration with educators and align with early childhood education standards. Our curriculum covers key learning areas including math, language, science, logic, and creativity.",
    },
];
