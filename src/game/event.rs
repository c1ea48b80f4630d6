use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Something the talking snake can react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameEvent {
    Start,
    Eat,
    Milestone,
    Crash,
    Pause,
    Resume,
}

impl GameEvent {
    /// Stable lowercase name, used in prompts and canned lookups
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Start => "start",
            GameEvent::Eat => "eat",
            GameEvent::Milestone => "milestone",
            GameEvent::Crash => "crash",
            GameEvent::Pause => "pause",
            GameEvent::Resume => "resume",
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(GameEvent::Start),
            "eat" => Ok(GameEvent::Eat),
            "milestone" => Ok(GameEvent::Milestone),
            "crash" => Ok(GameEvent::Crash),
            "pause" => Ok(GameEvent::Pause),
            "resume" => Ok(GameEvent::Resume),
            other => Err(format!("unknown game event: {other}")),
        }
    }
}

/// Which state a pause toggle entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseState {
    Paused,
    Resumed,
}

impl From<PauseState> for GameEvent {
    fn from(state: PauseState) -> Self {
        match state {
            PauseState::Paused => GameEvent::Pause,
            PauseState::Resumed => GameEvent::Resume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_back() {
        for event in [
            GameEvent::Start,
            GameEvent::Eat,
            GameEvent::Milestone,
            GameEvent::Crash,
            GameEvent::Pause,
            GameEvent::Resume,
        ] {
            assert_eq!(event.as_str().parse::<GameEvent>(), Ok(event));
        }
        assert!("victory".parse::<GameEvent>().is_err());
    }

    #[test]
    fn test_pause_state_maps_to_event() {
        assert_eq!(GameEvent::from(PauseState::Paused), GameEvent::Pause);
        assert_eq!(GameEvent::from(PauseState::Resumed), GameEvent::Resume);
    }
}
