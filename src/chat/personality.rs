//! Personalities for the talking snake and their offline lines

use clap::ValueEnum;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::game::GameEvent;

/// Tone the snake speaks in, chosen once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    #[default]
    Sarcastic,
    Friendly,
    Dramatic,
}

impl Personality {
    pub fn name(&self) -> &'static str {
        match self {
            Personality::Sarcastic => "sarcastic",
            Personality::Friendly => "friendly",
            Personality::Dramatic => "dramatic",
        }
    }

    /// Instructions placed in front of every remote prompt
    pub fn prompt_preamble(&self) -> &'static str {
        match self {
            Personality::Sarcastic => {
                "You are the snake speaking sarcastically. Keep replies short (max 30 words), \
                 witty, playful, and sometimes insulting in a lighthearted way."
            }
            Personality::Friendly => {
                "You are the snake speaking kindly and encouragingly. Keep replies short and supportive."
            }
            Personality::Dramatic => {
                "You are the snake with dramatic flair, reacting like a theatrical diva. \
                 Keep it playful and short."
            }
        }
    }

    /// Sample lines in this voice; also the pool for events without a canned line
    pub fn examples(&self) -> &'static [&'static str] {
        match self {
            Personality::Sarcastic => &[
                "Oh great, you missed the corner. Smooth.",
                "Another pixel eaten. At least someone has an appetite.",
                "Wow. I haven't seen that move since 2009.",
                "Keep going — I enjoy the suspense of certain doom.",
            ],
            Personality::Friendly => &[
                "Nice move! You're getting better.",
                "That food was lucky — great job!",
                "Don't worry, you'll do better on the next try.",
                "Keep it up — you're doing great!",
            ],
            Personality::Dramatic => &[
                "Alas! My pixelated heart shatters.",
                "A triumph! Treat me like royalty!",
                "What a tragedy — but oh what a performance.",
                "Encore? Or was that a farewell?",
            ],
        }
    }

    /// Offline line for a known event
    pub fn canned(&self, event: GameEvent, score: u32) -> String {
        use GameEvent::*;
        use Personality::*;

        match (event, *self) {
            (Start, Sarcastic) => "Let's see what you've got. Try not to embarrass me.".into(),
            (Start, Friendly) => "Ready to play? Let's have fun!".into(),
            (Start, Dramatic) => "The stage is set! Let the performance begin!".into(),

            (Eat, Sarcastic) => "Another pixel eaten. At least someone has an appetite.".into(),
            (Eat, Friendly) => "Yummy! Great catch!".into(),
            (Eat, Dramatic) => "A feast! I am nourished by your skill!".into(),

            (Milestone, Sarcastic) => format!("Nice — {score} points. I may start respecting you."),
            (Milestone, Friendly) => format!("Wow! {score} points! You're doing amazing!"),
            (Milestone, Dramatic) => format!("{score} points! What a magnificent milestone!"),

            (Crash, Sarcastic) => "Oh great, you crashed. Smooth.".into(),
            (Crash, Friendly) => "Oops! Don't worry, try again!".into(),
            (Crash, Dramatic) => "Alas! My pixelated heart shatters!".into(),

            (Pause, Sarcastic) => "Paused... I'm contemplating my existence.".into(),
            (Pause, Friendly) => "Take your time! I'll wait here.".into(),
            (Pause, Dramatic) => "The performance pauses! What suspense!".into(),

            (Resume, Sarcastic) => "Back already? I was enjoying the silence.".into(),
            (Resume, Friendly) => "Welcome back! Let's continue!".into(),
            (Resume, Dramatic) => "The curtain rises once more!".into(),
        }
    }

    /// A random line from this personality's examples
    pub fn default_line(&self) -> String {
        let examples = self.examples();
        examples
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(examples[0])
            .to_string()
    }
}

/// Offline line looked up by event name.
///
/// Names that are not a known [`GameEvent`] get a random example line.
pub fn canned_response(personality: Personality, event_name: &str, score: u32) -> String {
    match event_name.parse::<GameEvent>() {
        Ok(event) => personality.canned(event, score),
        Err(_) => personality.default_line(),
    }
}
