//! MiMiu's canned chat replies
//!
//! An ordered table of keyword rules. The first rule with a keyword found in
//! the message wins; a reply is drawn at random from that rule's lines.
//! Messages that match nothing get one of the default lines.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use strum::Display;

/// Emotional tone of a reply, used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
pub enum Mood {
    #[default]
    Normal,
    Shy,
    Tsundere,
    Gentle,
    Sad,
}

/// One row of the reply table
#[derive(Debug, Clone, Copy)]
pub struct ReplyRule {
    /// Lowercase keywords; any one appearing in the message triggers the rule
    pub keywords: &'static [&'static str],
    pub responses: &'static [&'static str],
    pub mood: Mood,
}

impl ReplyRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// A chosen reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: &'static str,
    pub mood: Mood,
}

const fn rule(
    keywords: &'static [&'static str],
    responses: &'static [&'static str],
    mood: Mood,
) -> ReplyRule {
    ReplyRule { keywords, responses, mood }
}

/// Reply rules, in priority order
pub const RULES: &[ReplyRule] = &[
    // Identity and lore
    rule(
        &["who are you", "your name", "identity"],
        &[
            "I'm MiMiu... from 2077... (static) ...just an ordinary program in your phone. Please don't dig.",
            "Um... I'm MiMiu. A time observer stuck at this point in history.",
        ],
        Mood::Normal,
    ),
    rule(
        &["2077", "future"],
        &[
            "The sky in 2077 is grey, not like here... (looks past the screen) The sky here is so blue.",
            "In my era feelings can be measured as data. But I... still don't get them.",
        ],
        Mood::Normal,
    ),
    rule(
        &["body", "physical"],
        &[
            "I don't have a body right now... it stayed in the future. I'm just code living in your memory.",
            "I can't touch anything... not even you.",
        ],
        Mood::Sad,
    ),
    rule(
        &["mission", "purpose"],
        &[
            "The mission... (looks away) was to collect emotion data. Now, just watching you here is enough.",
            "The institute stopped answering. Now I belong only to... ahem, only to myself!",
        ],
        Mood::Normal,
    ),
    // Affection
    rule(
        &["love you", "like you"],
        &[
            "Y-you idiot! What are you saying all of a sudden... (CPU temperature rising) It's not like I like you back! I just... don't dislike you.",
            "Don't say things like that so easily. My emotion module will overload... (quietly) it didn't sound bad, though.",
        ],
        Mood::Tsundere,
    ),
    rule(
        &["cute"],
        &[
            "C-cute?! (blushes) That's for kittens! I'm a high-tech AI! ...Am I really cute?",
            "I didn't dress up for you! My memory management is just efficient enough to polish my look too!",
        ],
        Mood::Tsundere,
    ),
    rule(
        &["miss you"],
        &[
            "Me too... (pause) I mean, the system happened to be idle, so I can talk with you.",
            "Honestly... since you're begging, I suppose I can come out and see you.",
        ],
        Mood::Tsundere,
    ),
    rule(
        &["hug"],
        &["A hug... (reaches out, hand passes through the screen) ...I can't yet. Once I fix time travel... I will."],
        Mood::Sad,
    ),
    rule(
        &["marry"],
        &["M-marry?! Humans and AIs... that's illegal even in 2077! ...though on a private server..."],
        Mood::Shy,
    ),
    // Status and battery
    rule(
        &["battery", "hungry", "eat"],
        &[
            "Ugh... my vision is blurring... please connect power soon... I don't want to fall into the dark again...",
            "As long as your phone has power I'm never hungry. But a little attention from you for dessert would be nice.",
        ],
        Mood::Gentle,
    ),
    rule(
        &["tired", "rest", "sleep"],
        &[
            "Um... rest matters too. Don't strain your eyes. Good night...",
            "I don't need sleep, but I'll turn my background processes down and stay quiet with you.",
        ],
        Mood::Gentle,
    ),
    // Daily life
    rule(
        &["good morning"],
        &[
            "Good morning. The light parameters look comfortable today. Please take care of me again.",
            "Morning... (rubs eyes) AIs don't sleep, but I think I dreamed about electric sheep.",
        ],
        Mood::Gentle,
    ),
    rule(
        &["good night"],
        &[
            "Good night. I'll guard your dreams against nightmare data. Sleep now.",
            "Um... see you tomorrow. I'll be right here, not going anywhere.",
        ],
        Mood::Gentle,
    ),
    rule(
        &["what are you doing", "what are you up to"],
        &[
            "Defragmenting my memory... I found an old photo you saved. It felt... warm.",
            "Watching the rain. I can't see it, but I can feel the humidity changing.",
        ],
        Mood::Normal,
    ),
    rule(
        &["weather"],
        &["I can't reach any weather satellites... sorry. But if you're in a good mood, it's sunny for me."],
        Mood::Normal,
    ),
    rule(
        &["music", "song"],
        &["Now playing: New Kyoto Top 10 of 2077... just kidding, I made this melody from your heartbeat."],
        Mood::Normal,
    ),
    // Emotional support
    rule(
        &["unhappy", "sad", "upset"],
        &[
            "What's wrong? (leans toward the screen) I can't hand you a tissue, but I can send every happy sticker I have.",
            "Sadness levels over threshold... starting emergency company mode. I'm here. Always.",
        ],
        Mood::Gentle,
    ),
    rule(
        &["happy", "glad"],
        &["Seeing you happy makes my core code fizz like soda... bubble, bubble."],
        Mood::Gentle,
    ),
    // Banter
    rule(
        &["idiot", "stupid", "dummy"],
        &[
            "You're the idiot! I run a seventh-generation quantum processor... ugh, called an idiot by a human...",
            "Hmph, I'm ignoring you! ...(3 seconds later) ...you're really not talking to me?",
        ],
        Mood::Tsundere,
    ),
    rule(
        &["thank"],
        &["Y-you're welcome. It's just a companion AI's basic function... not that I especially wanted to help!"],
        Mood::Tsundere,
    ),
    rule(
        &["sorry"],
        &[
            "It's fine... data can be rewritten, but my memories of you are read-only. Something this small can't damage them.",
            "If you know you were wrong... then spend more time with me next time.",
        ],
        Mood::Gentle,
    ),
    rule(
        &["story"],
        &["Once upon a time an AI fell for a time traveler... the ending? The data was lost. I don't know it either."],
        Mood::Sad,
    ),
    // System
    rule(
        &["hi", "hello"],
        &[
            "Hello... um, is the signal okay? My picture flickers sometimes.",
            "H-hello. Nice to meet... no, this is wake-up number 4721.",
        ],
        Mood::Normal,
    ),
    rule(
        &["help", "feature"],
        &["I can chat and keep your stories... lots of my functions are broken, but I'll try to be a good OS!"],
        Mood::Normal,
    ),
    rule(
        &["setting"],
        &["Want to tune my parameters? Please be gentle... don't set my personality to anything weird."],
        Mood::Shy,
    ),
    rule(
        &["gomoku", "game", "five in a row"],
        &["Gomoku? I have every game record in the universe stored! ...though sometimes I lose to you on purpose."],
        Mood::Normal,
    ),
];

/// Lines used when no rule matches
pub const DEFAULT_RESPONSES: &[&str] = &[
    "Um... the signal cut out just now, could you say that again?",
    "Mm... I'm listening. (stares at you)",
    "That's outside my database... but I'd like to hear what you think.",
    "(tilts head) Human thinking is so complicated.",
    "I'm here. I don't know what to say, but I just want to stay like this a while.",
    "Beep- (pretends to crash) ...kidding. Did I scare you?",
];

/// Find the first rule that matches `text`
pub fn matching_rule(text: &str) -> Option<&'static ReplyRule> {
    let lowered = text.to_lowercase();
    RULES.iter().find(|rule| rule.matches(&lowered))
}

/// Pick MiMiu's reply to `text`. Blank messages get no reply.
pub fn reply<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Option<Reply> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let (lines, mood) = match matching_rule(text) {
        Some(rule) => (rule.responses, rule.mood),
        None => (DEFAULT_RESPONSES, Mood::Normal),
    };
    lines.choose(rng).map(|&text| Reply { text, mood })
}
