//! Built-in bilingual dataset: ten emotion categories with weighted keyword
//! lexicons and template pools, the crisis keyword sets, and the global
//! pools. This is what [`crate::EngineConfig::default`] serves until an
//! administrative collaborator replaces it.

use crate::config::{
    Bilingual, CrisisLexicon, EmotionCategory, GlobalTemplates, LexiconEntry, TemplateSet,
};
use crate::types::Mode;

fn kw(word: &str, weight: u32) -> LexiconEntry {
    LexiconEntry {
        word: word.to_string(),
        weight,
    }
}

fn pool(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

pub fn emotion_categories() -> Vec<EmotionCategory> {
    vec![
        EmotionCategory {
            name: "Stress".to_string(),
            keywords: Bilingual {
                en: vec![
                    kw("stress", 3),
                    kw("pressure", 2),
                    kw("overwhelmed", 4),
                    kw("burden", 2),
                    kw("tension", 3),
                    kw("heavy", 2),
                    kw("too much", 2),
                    kw("busy", 1),
                    kw("hectic", 2),
                ],
                hi: vec![kw("tanaav", 3), kw("bojh", 2), kw("pareshan", 2), kw("dabav", 3)],
            },
            templates: TemplateSet {
                validation: Bilingual {
                    en: pool(&[
                        "I can hear how much pressure you're under right now.",
                        "It sounds like you're carrying a very heavy load.",
                    ]),
                    hi: pool(&[
                        "Main samajh sakta hoon ki aap par is waqt kitna dabav hai.",
                        "Aap kaafi bhari bojh mehsoos kar rahe hain.",
                    ]),
                },
                reflection: Bilingual {
                    en: pool(&[
                        "You're feeling overwhelmed by the weight of everything on your plate.",
                        "It feels like there's 'too much' happening all at once.",
                    ]),
                    hi: pool(&[
                        "Aap har cheez ke bojh se dabe hue mehsoos kar rahe hain.",
                        "Aisa lag raha hai jaise sab kuch ek saath ho raha hai.",
                    ]),
                },
                insight: Bilingual {
                    en: pool(&[
                        "Stress is often our system's way of trying to protect us when we feel out of control.",
                        "Sometimes the only way to manage the 'too much' is to focus on just 'one small thing' at a time.",
                    ]),
                    hi: pool(&[
                        "Tanaav hamare dimag ka ek tareeka hai humein bachane ka jab humein lagta hai ki sab hamare hath se nikal raha hai.",
                        "Kabhi kabhi 'sab kuch' sambhalne ka rasta sirf 'ek choti cheez' par dhyan dena hota hai.",
                    ]),
                },
                action: Bilingual {
                    en: pool(&[
                        "Let's try a 2-minute reset. Pick one small task we can mentally set aside for now.",
                        "Would it help to just breathe through this next minute together?",
                    ]),
                    hi: pool(&[
                        "Chaliye 2-minute ka aaram karte hain. Ek aisi cheez chuniye jise hum abhi ke liye side mein rakh de.",
                        "Kya ek minute ke liye saath saans lena madadgaar hoga?",
                    ]),
                },
                follow_up: Bilingual {
                    en: pool(&[
                        "What is the single loudest thing in your head right now?",
                        "If you could drop one responsibility today without consequences, what would it be?",
                    ]),
                    hi: pool(&[
                        "Is waqt aapke dimag mein sabse badi cheez kya chal rahi hai?",
                        "Agar aap aaj ek zimmedari chhod sakein, toh wo kya hogi?",
                    ]),
                },
            },
            mode: Mode::Calm,
        },
        EmotionCategory {
            name: "Anxiety".to_string(),
            keywords: Bilingual {
                en: vec![
                    kw("anxious", 3),
                    kw("panic", 4),
                    kw("scared", 3),
                    kw("fear", 3),
                    kw("worried", 2),
                    kw("shaking", 3),
                    kw("heart racing", 4),
                    kw("uneasy", 2),
                    kw("nervous", 2),
                ],
                hi: vec![kw("ghabrahat", 4), kw("dar", 3), kw("chinta", 2), kw("bechaini", 3)],
            },
            templates: TemplateSet {
                validation: Bilingual {
                    en: pool(&[
                        "I can feel how tight your chest feels right now. Anxiety is a powerful physical sensation.",
                        "It's okay to feel scared. Your body is just trying to alert you.",
                    ]),
                    hi: pool(&[
                        "Main samajh sakta hoon ki aapka dil kitni tez dhadak raha hai.",
                        "Darna swabhavik hai, aapki body bas aapko alert kar rahi hai.",
                    ]),
                },
                reflection: Bilingual {
                    en: pool(&[
                        "You're feeling a sense of unease or fear about what's coming next.",
                        "It sounds like your mind is racing with 'what-ifs'.",
                    ]),
                    hi: pool(&["Aap is waqt kaafi bechain aur dare hue mehsoos kar rahe hain."]),
                },
                insight: Bilingual {
                    en: pool(&[
                        "Anxiety is often just our imagination projecting a difficult future into the present.",
                        "The body doesn't know the difference between a real threat and a thought.",
                    ]),
                    hi: pool(&[
                        "Chinta aksar hamari kalpana hi hoti hai jo mushkil bhavishya ko aaj mein dikhati hai.",
                    ]),
                },
                action: Bilingual {
                    en: pool(&[
                        "Let's use the Grounding tool—can you name 3 things you can see right now?",
                        "Try slow, even breaths: Inhale for 4, exhale for 6.",
                    ]),
                    hi: pool(&[
                        "Chaliye Grounding karte hain—kya aap 3 aisi cheezein bata sakte hain jo aap abhi dekh rahe hain?",
                    ]),
                },
                follow_up: Bilingual {
                    en: pool(&[
                        "What's one thing in this room that feels very steady and real?",
                        "Is there a small part of you that knows you're safe in this very moment?",
                    ]),
                    hi: pool(&["Is kamre mein aisi kaunsi cheez hai jo bahut mazboot aur sach hai?"]),
                },
            },
            mode: Mode::Clarity,
        },
        EmotionCategory {
            name: "Sadness".to_string(),
            keywords: Bilingual {
                en: vec![
                    kw("sad", 3),
                    kw("unhappy", 2),
                    kw("crying", 3),
                    kw("depressed", 4),
                    kw("hopeless", 4),
                    kw("heartbroken", 3),
                    kw("empty", 2),
                    kw("grief", 3),
                    kw("miserable", 3),
                ],
                hi: vec![
                    kw("dukh", 3),
                    kw("udaas", 3),
                    kw("rona", 2),
                    kw("nirasha", 4),
                    kw("dukhy", 2),
                ],
            },
            templates: TemplateSet {
                validation: Bilingual {
                    en: pool(&[
                        "I can feel the weight of your sadness, and I want you to know it's okay to feel this way.",
                        "It sounds like you're carrying a lot of pain right now.",
                    ]),
                    hi: pool(&["Main aapka dukh samajh sakta hoon, aur ye bilkul swabhavik hai."]),
                },
                reflection: Bilingual {
                    en: pool(&[
                        "You're feeling a deep sense of loss or sadness right now.",
                        "It feels like things are very heavy for you at the moment.",
                    ]),
                    hi: pool(&["Aap is waqt kaafi udaas mehsoos kar rahe hain."]),
                },
                insight: Bilingual {
                    en: pool(&[
                        "Sadness often reminds us of what we truly value in life.",
                        "Sometimes the heart needs time to process things that words can't explain.",
                    ]),
                    hi: pool(&["Dukh humein un cheezon ki yaad dilata hai jo hamare liye mahatvapurna hain."]),
                },
                action: Bilingual {
                    en: pool(&[
                        "Maybe we can start by just taking one slow, deep breath together?",
                        "Would it help to write down one small thing that brought peace today?",
                    ]),
                    hi: pool(&["Kya hum ek gehri saans saath le sakte hain?"]),
                },
                follow_up: Bilingual {
                    en: pool(&[
                        "What feels like the heaviest part of this right now?",
                        "I'm here for as long as you need to talk—what else is on your mind?",
                    ]),
                    hi: pool(&["Is waqt sabse mushkil kya lag raha hai?"]),
                },
            },
            mode: Mode::Calm,
        },
        EmotionCategory {
            name: "Anger".to_string(),
            keywords: Bilingual {
                en: vec![
                    kw("angry", 3),
                    kw("mad", 2),
                    kw("furious", 4),
                    kw("frustrated", 2),
                    kw("hate", 3),
                    kw("annoyed", 2),
                    kw("irritated", 2),
                    kw("rage", 4),
                ],
                hi: vec![kw("gussa", 3), kw("chidchidapan", 2), kw("nafrat", 3)],
            },
            templates: TemplateSet {
                validation: Bilingual {
                    en: pool(&[
                        "It's completely valid to feel angry when things are unfair.",
                        "I can hear the frustration in your words.",
                    ]),
                    hi: pool(&["Gussa aana swabhavik hai jab cheezein galat ho rahi hon."]),
                },
                reflection: Bilingual {
                    en: pool(&[
                        "You're feeling a lot of heat and intensity right now.",
                        "Something has really crossed a line for you.",
                    ]),
                    hi: pool(&["Aap is waqt kaafi gusse mein hain."]),
                },
                insight: Bilingual {
                    en: pool(&[
                        "Anger is often a protector; it tells us our boundaries have been violated.",
                        "Beneath anger, there's often a need for respect.",
                    ]),
                    hi: pool(&["Gussa aksar ek suraksha kavach hota hai."]),
                },
                action: Bilingual {
                    en: pool(&[
                        "Would you like to try a 'Power Release' exercise here?",
                        "How about we channel this energy into one constructive action?",
                    ]),
                    hi: pool(&["Kya aap is gusse ko nikalne ke liye kuch karna chahenge?"]),
                },
                follow_up: Bilingual {
                    en: pool(&[
                        "What is the main thing that triggered this feeling?",
                        "Does this anger feel like it's pointing you toward a change?",
                    ]),
                    hi: pool(&["Sabse zyada gussa kis baat par aa raha hai?"]),
                },
            },
            mode: Mode::Power,
        },
        EmotionCategory {
            name: "Overthinking".to_string(),
            keywords: Bilingual {
                en: vec![
                    kw("overthinking", 4),
                    kw("racing thoughts", 3),
                    kw("stuck in my head", 3),
                    kw("analyzing", 2),
                    kw("what if", 2),
                ],
                hi: vec![kw("soch raha hoon", 2), kw("dimag chal raha hai", 3)],
            },
            templates: TemplateSet {
                validation: Bilingual {
                    en: pool(&[
                        "The mind can be a noisy place, and it's exhausting to be stuck in a loop.",
                        "I see how much energy you're spending trying to figure everything out.",
                    ]),
                    hi: pool(&["Dimag kabhi kabhi bahut zyada sochne lagta hai."]),
                },
                reflection: Bilingual {
                    en: pool(&[
                        "It sounds like your thoughts are racing faster than you can keep up.",
                        "You're caught in a cycle of endless analysis.",
                    ]),
                    hi: pool(&["Aaisa lag raha hai ki aap bahot zyada soch rahe hain."]),
                },
                insight: Bilingual {
                    en: pool(&[
                        "Overthinking is often the brain's way of trying to feel safe.",
                        "Not every thought needs an answer right now.",
                    ]),
                    hi: pool(&["Har vichaar ka jawab hona zaroori nahi hai."]),
                },
                action: Bilingual {
                    en: pool(&[
                        "Let's try a grounding exercise to get back to the present.",
                        "Can we focus on just one thing that is true right now?",
                    ]),
                    hi: pool(&["Chaliye ek exercise karte hain."]),
                },
                follow_up: Bilingual {
                    en: pool(&[
                        "Of all these thoughts, which one feels the loudest?",
                        "Would it help to set a 'worry timer' for later?",
                    ]),
                    hi: pool(&["In sab vichaaron mein se, sabse zyada kya pareshan kar raha hai?"]),
                },
            },
            mode: Mode::Clarity,
        },
        EmotionCategory {
            name: "Loneliness".to_string(),
            keywords: Bilingual {
                en: vec![
                    kw("lonely", 4),
                    kw("alone", 2),
                    kw("no one", 3),
                    kw("disconnected", 3),
                ],
                hi: vec![kw("akela", 3), kw("akelapan", 4)],
            },
            templates: TemplateSet {
                validation: Bilingual {
                    en: pool(&[
                        "Loneliness is a very human feeling, and it's brave to admit it.",
                        "I'm here with you right now.",
                    ]),
                    hi: pool(&["Akelapan mehsoos karna insani hai."]),
                },
                reflection: Bilingual {
                    en: pool(&[
                        "You're feeling a lack of connection or understanding.",
                        "It feels like you're on an island by yourself.",
                    ]),
                    hi: pool(&["Aap khud ko akela mehsoos kar rahe hain."]),
                },
                insight: Bilingual {
                    en: pool(&[
                        "Sometimes being alone is a call to reconnect with our inner self.",
                        "Connection starts with being a friend to ourselves first.",
                    ]),
                    hi: pool(&["Rishte khud se dosti karne se shuru hote hain."]),
                },
                action: Bilingual {
                    en: pool(&[
                        "Could we write down three things you appreciate about yourself?",
                        "Is there one person you could reach out to today?",
                    ]),
                    hi: pool(&["Kya hum teen aisi cheezein likh sakte hain jo aapko pasand hain?"]),
                },
                follow_up: Bilingual {
                    en: pool(&[
                        "What does 'connection' look like to you ideally?",
                        "When do you feel most 'seen'?",
                    ]),
                    hi: pool(&["Aapke liye 'sath' ka kya matlab hai?"]),
                },
            },
            mode: Mode::Calm,
        },
        EmotionCategory {
            name: "Motivation".to_string(),
            keywords: Bilingual {
                en: vec![
                    kw("stuck", 2),
                    kw("procrastinating", 3),
                    kw("no energy", 3),
                    kw("unmotivated", 4),
                    kw("fail", 2),
                    kw("give up", 3),
                ],
                hi: vec![kw("mann nahi kar raha", 3), kw("alas", 2), kw("haar maan", 3)],
            },
            templates: TemplateSet {
                validation: Bilingual {
                    en: pool(&[
                        "It's okay to not have all the energy you want right now. Rest is part of the process.",
                        "Motivation wakes and wanes, and it's normal to feel 'low' sometimes.",
                    ]),
                    hi: pool(&["Zaroori nahi ki har waqt urja rahe. Aaram bhi zaroori hai."]),
                },
                reflection: Bilingual {
                    en: pool(&[
                        "You're feeling a lack of drive or direction at the moment.",
                        "It sounds like you're putting a lot of pressure on yourself to be 'on'.",
                    ]),
                    hi: pool(&["Aapko lag raha hai ki aap kuch nahi kar paa rahe hain."]),
                },
                insight: Bilingual {
                    en: pool(&[
                        "Action often creates motivation, not the other way around.",
                        "Even the smallest step forward is still progress.",
                    ]),
                    hi: pool(&["Ek chota kadam bhi kadam hi hota hai."]),
                },
                action: Bilingual {
                    en: pool(&[
                        "What's the absolute tiniest, 2-minute task you could do right now?",
                        "Let's use the 'Power' mode to find one thing that excites you.",
                    ]),
                    hi: pool(&["Aisa kaunsa chota kaam hai jo aap abhi 2 minute mein kar sakte hain?"]),
                },
                follow_up: Bilingual {
                    en: pool(&[
                        "If you had unlimited energy for just one hour, what would you do?",
                        "What's the biggest barrier you're facing right now?",
                    ]),
                    hi: pool(&["Sabse badi rukavat kya lag rahi hai?"]),
                },
            },
            mode: Mode::Power,
        },
        EmotionCategory {
            name: "Self-Doubt".to_string(),
            keywords: Bilingual {
                en: vec![
                    kw("not good enough", 4),
                    kw("failure", 3),
                    kw("imposter", 3),
                    kw("useless", 4),
                    kw("stupid", 3),
                    kw("doubt", 3),
                ],
                hi: vec![kw("main bekaar hoon", 3), kw("mujhse nahi hoga", 4)],
            },
            templates: TemplateSet {
                validation: Bilingual {
                    en: pool(&[
                        "That inner critic can be very loud, but its voice isn't the truth.",
                        "I'm hearing a lot of self-judgment, and I want to offer you some compassion.",
                    ]),
                    hi: pool(&["Hamara andar ka aalochak kabhi kabhi bahut tez bolta hai."]),
                },
                reflection: Bilingual {
                    en: pool(&[
                        "You're questioning your worth or abilities right now.",
                        "It feels like you're focusing only on what you think are your flaws.",
                    ]),
                    hi: pool(&["Aap apni kshamtaon par shak kar rahe hain."]),
                },
                insight: Bilingual {
                    en: pool(&[
                        "We are often much harder on ourselves than we would ever be to a friend.",
                        "You are a work in progress, and that's a beautiful thing.",
                    ]),
                    hi: pool(&["Hum aksar apne liye jitne sakht hote hain, utne doston ke liye nahi hote."]),
                },
                action: Bilingual {
                    en: pool(&[
                        "Can we name one thing you've accomplished, no matter how small?",
                        "Let's try a 'Self-Compassion' pause together.",
                    ]),
                    hi: pool(&["Kya aap apni kisi ek kamyabi ke baare mein bata sakte hain?"]),
                },
                follow_up: Bilingual {
                    en: pool(&[
                        "What would you say to a dear friend who was feeling this way?",
                        "What's one strength you sometimes forget you have?",
                    ]),
                    hi: pool(&["Agar aapka koi dost aisa mehsoos karta, toh aap usse kya kehte?"]),
                },
            },
            mode: Mode::Clarity,
        },
        EmotionCategory {
            name: "Relationship".to_string(),
            keywords: Bilingual {
                en: vec![
                    kw("breakup", 4),
                    kw("divorce", 4),
                    kw("heartbreak", 3),
                    kw("fight", 2),
                    kw("rejection", 3),
                    kw("partner", 1),
                ],
                hi: vec![kw("dhokha", 4), kw("ladai", 3), kw("rishta", 2)],
            },
            templates: TemplateSet {
                validation: Bilingual {
                    en: pool(&[
                        "Heartache is one of the deepest pains we feel. I'm so sorry you're going through this.",
                        "It's okay to feel lost when a connection changes or ends.",
                    ]),
                    hi: pool(&["Dil ka dukh sabse gehra hota hai."]),
                },
                reflection: Bilingual {
                    en: pool(&[
                        "You're feeling a deep sense of hurt or betrayal in your personal life.",
                        "It sounds like you're struggling with the end of a connection.",
                    ]),
                    hi: pool(&["Aap rishton mein takleef mehsoos kar rahe hain."]),
                },
                insight: Bilingual {
                    en: pool(&[
                        "Your worth is not defined by how someone else treats you.",
                        "Grief for a relationship is proof of your capacity to love deeply.",
                    ]),
                    hi: pool(&["Aapki keemat is baat se nahi hai ki koi aur aapko kaise treat karta hai."]),
                },
                action: Bilingual {
                    en: pool(&[
                        "Could we focus on one act of 'Self-Care' today just for you?",
                        "Let's write down one thing you've learned about yourself.",
                    ]),
                    hi: pool(&["Kyu na aaj aap sirf apne liye kuch karein?"]),
                },
                follow_up: Bilingual {
                    en: pool(&[
                        "What is the hardest part of the 'letting go' process for you?",
                        "How can you be your own best friend today?",
                    ]),
                    hi: pool(&["Is waqt sabse zyada kya yaad aa raha hai?"]),
                },
            },
            mode: Mode::Calm,
        },
        EmotionCategory {
            name: "Career".to_string(),
            keywords: Bilingual {
                en: vec![
                    kw("job", 1),
                    kw("career", 1),
                    kw("boss", 2),
                    kw("fired", 4),
                    kw("unemployment", 3),
                    kw("salary", 1),
                ],
                hi: vec![kw("naukri", 2), kw("kaam ka dabav", 3)],
            },
            templates: TemplateSet {
                validation: Bilingual {
                    en: pool(&[
                        "Work is a huge part of our lives, and it's natural for it to affect your peace.",
                        "I hear the stress you're feeling about your professional path.",
                    ]),
                    hi: pool(&["Kaam hamari zindagi ka bada hissa hai."]),
                },
                reflection: Bilingual {
                    en: pool(&[
                        "You're feeling uncertain or stressed about your career.",
                        "It sounds like the pressure at work is starting to spill over.",
                    ]),
                    hi: pool(&["Aap apne career ko lekar chintit hain."]),
                },
                insight: Bilingual {
                    en: pool(&[
                        "You are more than your job title or your productivity.",
                        "Sometimes a detour in our career is a chance to find a better path.",
                    ]),
                    hi: pool(&["Aap aapki naukri se kahin badkar hain."]),
                },
                action: Bilingual {
                    en: pool(&[
                        "Let's list three skills you have that have nothing to do with your job.",
                        "What's one small professional goal for this week?",
                    ]),
                    hi: pool(&["Teen aisi baatein likhiye jo aapko apne baare mein pasand hain."]),
                },
                follow_up: Bilingual {
                    en: pool(&[
                        "If you could change one thing about your work, what would it be?",
                        "What does 'success' look like to you beyond money?",
                    ]),
                    hi: pool(&["Aapke liye 'safalta' ka kya matlab hai?"]),
                },
            },
            mode: Mode::Clarity,
        },
    ]
}

pub fn crisis_lexicon() -> CrisisLexicon {
    CrisisLexicon {
        suicide_intent: Bilingual {
            en: pool(&[
                "suicide",
                "kill myself",
                "want to die",
                "end my life",
                "zero hope",
                "no point living",
            ]),
            hi: pool(&["आत्महत्या", "मरना चाहता हूँ", "जान दे दूंगा", "जीने का मन नहीं"]),
        },
        self_harm: Bilingual {
            en: pool(&["self harm", "harm myself", "cutting", "overdose"]),
            hi: pool(&["खुद को चोट", "नहा काटना", "जहर"]),
        },
        emergency_message: Bilingual {
            en: "I'm really concerned about what you're sharing. Please know that you're not alone. Reach out to a trusted person immediately or call the iCall helpline at 9152987821. I am an AI and cannot provide professional medical or crisis intervention.".to_string(),
            hi: "मैं वास्तव में आपकी बातों से चिंतित हूं। कृपया जानें कि आप अकेले नहीं हैं। आप तुरंत एक भरोसेमंद व्यक्ति से बात करें या हेल्पलाइन 9152987821 (Vandrevala Foundation) पर कॉल करें। मैं एक AI हूं और पेशेवर मदद की जगह नहीं ले सकता।".to_string(),
        },
    }
}

pub fn global_templates() -> GlobalTemplates {
    GlobalTemplates {
        fallback: Bilingual {
            en: pool(&[
                "I'm here and I'm listening. Could you tell me a bit more about that?",
                "Thank you for sharing. How else can I support you right now?",
            ]),
            hi: pool(&[
                "Main sun raha hoon. Kya aap mujhe thoda aur bata sakte hain?",
                "Bata ne ke liye shukriya. Main aur kaise madad kar sakta hoon?",
            ]),
        },
        greetings: Bilingual {
            en: pool(&[
                "Hello! I'm your wellness companion.",
                "Hey! I'm here to support your mental wellbeing.",
            ]),
            hi: pool(&["नमस्ते! मैं आपका वेलनेस साथी हूं।", "नमस्ते! मैं आपकी मदद के लिए यहां हूं।"]),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_templates_in_both_languages() {
        for category in emotion_categories() {
            let t = &category.templates;
            for (slot, p) in [
                ("validation", &t.validation),
                ("reflection", &t.reflection),
                ("insight", &t.insight),
                ("action", &t.action),
                ("follow_up", &t.follow_up),
            ] {
                assert!(!p.en.is_empty(), "{} missing en {}", category.name, slot);
                assert!(!p.hi.is_empty(), "{} missing hi {}", category.name, slot);
            }
        }
    }

    #[test]
    fn crisis_lexicon_has_both_sets() {
        let crisis = crisis_lexicon();
        assert!(crisis.suicide_intent.en.contains(&"kill myself".to_string()));
        assert!(!crisis.self_harm.hi.is_empty());
        assert!(crisis.emergency_message.en.contains("9152987821"));
        assert!(crisis.emergency_message.hi.contains("9152987821"));
    }

    #[test]
    fn keyword_weights_are_positive() {
        for category in emotion_categories() {
            for entry in category.keywords.en.iter().chain(&category.keywords.hi) {
                assert!(entry.weight >= 1, "{}:{}", category.name, entry.word);
            }
        }
    }
}
