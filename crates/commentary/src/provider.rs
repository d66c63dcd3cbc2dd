//! Commentary providers.
//!
//! A provider turns a game event into a line of commentary and a finished run
//! into a debrief. Providers may be slow; the client runs them off the game
//! loop.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::error::CommentaryError;
use crate::protocol::{parse_commentary, parse_debrief, Request};
use crate::types::{Commentary, Debrief, GameEvent, GameStats, Mood};

/// Source of commentary lines and post-game reports.
#[async_trait]
pub trait CommentaryProvider: Send + Sync {
    /// One short line about `event` at `score`
    async fn commentary(&self, score: u32, event: GameEvent) -> Result<Commentary, CommentaryError>;

    /// Report on a finished run
    async fn debrief(&self, stats: GameStats) -> Result<Debrief, CommentaryError>;
}

/// Offline announcer with canned lines.
///
/// Picks deterministically from the score, so the same run always gets the
/// same lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedProvider;

const START_LINES: &[&str] = &[
    "The grid awakens. Feed it.",
    "Welcome back to the maze, runner.",
    "Power up. Do not blink.",
];

const EAT_LINES: &[&str] = &[
    "Data packet devoured!",
    "Feast mode engaged!",
    "Growing like a botnet!",
    "Unstoppable serpent online!",
];

const DIE_LINES: &[&str] = &[
    "Walls: 1. You: 0.",
    "Bold strategy. Did not work.",
    "Signal lost. Try again?",
];

const DIE_LINES_HIGH: &[&str] = &[
    "A glorious crash, legend.",
    "Epic run. Tragic ending.",
];

fn pick(lines: &[&'static str], score: u32) -> &'static str {
    lines[score as usize % lines.len()]
}

/// Rank title for a final score.
pub fn score_rating(score: u32) -> &'static str {
    match score {
        0..=4 => "Neon Novice",
        5..=14 => "Grid Runner",
        15..=29 => "Circuit Stalker",
        30..=59 => "Chrome Viper",
        _ => "Cyber Warlord",
    }
}

#[async_trait]
impl CommentaryProvider for ScriptedProvider {
    async fn commentary(&self, score: u32, event: GameEvent) -> Result<Commentary, CommentaryError> {
        let line = match event {
            GameEvent::Start => Commentary::new(pick(START_LINES, score), Mood::Neutral),
            GameEvent::Eat => Commentary::new(pick(EAT_LINES, score / 5), Mood::Excited),
            GameEvent::Die if score >= 20 => {
                Commentary::new(pick(DIE_LINES_HIGH, score), Mood::Sarcastic)
            }
            GameEvent::Die => Commentary::new(pick(DIE_LINES, score), Mood::Sarcastic),
        };
        Ok(line)
    }

    async fn debrief(&self, stats: GameStats) -> Result<Debrief, CommentaryError> {
        let per_minute = if stats.duration_secs == 0 {
            0.0
        } else {
            stats.score as f64 * 60.0 / stats.duration_secs as f64
        };
        let moves_per_food = if stats.score == 0 {
            stats.moves as f64
        } else {
            stats.moves as f64 / stats.score as f64
        };

        let analysis = format!(
            "{} points in {}s ({:.1} per minute), {:.1} moves per packet.",
            stats.score, stats.duration_secs, per_minute, moves_per_food
        );

        let mut tips = Vec::with_capacity(3);
        if moves_per_food > 20.0 {
            tips.push("Cut corners: take the shortest path to each packet.".to_string());
        } else {
            tips.push("Your pathing is tight. Keep it up.".to_string());
        }
        if stats.score < 10 {
            tips.push("Hug the walls early while the board is empty.".to_string());
        } else {
            tips.push("Leave yourself an exit before turning into a pocket.".to_string());
        }
        tips.push("Plan two turns ahead as the speed ramps up.".to_string());

        Ok(Debrief {
            analysis,
            score_rating: score_rating(stats.score).to_string(),
            tips,
        })
    }
}

/// Runs an external command per request.
///
/// The command gets one JSON [`Request`] on stdin and must print one JSON
/// reply on stdout.
#[derive(Debug, Clone)]
pub struct CommandProvider {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandProvider {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    /// Split a command line on whitespace. Returns None for a blank line.
    pub fn from_command_line(line: &str, timeout: Duration) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect(), timeout))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    async fn exchange(&self, request: &Request) -> Result<String, CommentaryError> {
        let payload = serde_json::to_vec(request)?;
        match tokio::time::timeout(self.timeout, self.run(payload)).await {
            Ok(result) => result,
            Err(_) => Err(CommentaryError::Timeout(self.timeout)),
        }
    }

    async fn run(&self, payload: Vec<u8>) -> Result<String, CommentaryError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(&payload).await?;
            stdin.shutdown().await?;
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(CommentaryError::CommandFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        debug!(program = %self.program, bytes = output.stdout.len(), "provider replied");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl CommentaryProvider for CommandProvider {
    async fn commentary(&self, score: u32, event: GameEvent) -> Result<Commentary, CommentaryError> {
        let raw = self.exchange(&Request::commentary(event, score)).await?;
        parse_commentary(&raw)
    }

    async fn debrief(&self, stats: GameStats) -> Result<Debrief, CommentaryError> {
        let raw = self.exchange(&Request::debrief(stats)).await?;
        parse_debrief(&raw)
    }
}
