use std::time::{Duration, Instant};

/// Session statistics shown in the header. Kept in memory only.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    pub milestones: u32,
    running: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            milestones: 0,
            running: true,
        }
    }

    /// Refresh the round timer; it stops once the round is over
    pub fn update(&mut self) {
        if self.running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.running = true;
    }

    /// Stop the clock while the round is paused
    pub fn on_pause(&mut self) {
        self.update();
        self.running = false;
    }

    /// Carry on counting from where the pause left off
    pub fn on_resume(&mut self) {
        self.start_time = Instant::now()
            .checked_sub(self.elapsed_time)
            .unwrap_or_else(Instant::now);
        self.running = true;
    }

    pub fn on_milestone(&mut self) {
        self.milestones += 1;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.running = false;
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(10);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(5);
        assert_eq!(metrics.high_score, 10); // Should not decrease
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_over(15);
        assert_eq!(metrics.high_score, 15);
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_timer_stops_at_game_over() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_over(0);
        let frozen = metrics.elapsed_time;

        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);

        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert!(metrics.elapsed_time >= Duration::from_millis(20));
    }

    #[test]
    fn test_timer_stops_while_paused() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(10));
        metrics.on_pause();
        let frozen = metrics.elapsed_time;

        std::thread::sleep(Duration::from_millis(30));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);

        metrics.on_resume();
        metrics.update();
        assert!(metrics.elapsed_time >= frozen);
        assert!(metrics.elapsed_time < frozen + Duration::from_millis(30));
    }

    #[test]
    fn test_milestones_counted() {
        let mut metrics = GameMetrics::new();
        metrics.on_milestone();
        metrics.on_milestone();
        assert_eq!(metrics.milestones, 2);
    }
}
