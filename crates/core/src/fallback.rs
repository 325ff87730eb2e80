//! Canned demo-mode content.
//!
//! When no API credential is configured the application still has to work,
//! so every topic id maps to a deterministic canned plan and every question
//! gets a fixed instructional answer. Malformed canned content would be a
//! configuration bug, not a runtime error, which is why nothing here can fail.

use async_trait::async_trait;

use crate::content::ContentService;
use crate::outcome::RequestOutcome;
use crate::plan::{TrainingPlan, TrainingSession};
use crate::topic::TrainingTopic;

/// A [`ContentService`] that serves static content and never touches the
/// network. Selected by the availability gate when no credential exists.
pub struct DemoContentService;

#[async_trait]
impl ContentService for DemoContentService {
    async fn training_plan(&self, topic: &TrainingTopic) -> RequestOutcome<TrainingPlan> {
        RequestOutcome::success(canned_plan(topic.id))
    }

    async fn answer(&self, question: &str) -> RequestOutcome<String> {
        RequestOutcome::success(demo_answer(question))
    }
}

fn session(title: &str, steps: &[&str], tips: &str) -> TrainingSession {
    TrainingSession {
        session_title: title.to_string(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
        tips: tips.to_string(),
    }
}

/// Returns the canned plan for a topic id, keyed explicitly rather than by
/// keyword-matching the prompt text. Unknown ids get the generic plan.
pub fn canned_plan(topic_id: &str) -> TrainingPlan {
    match topic_id {
        "leash" => vec![
            session(
                "Day 1: Standing Still Together",
                &[
                    "Clip the leash on indoors where it is quiet",
                    "Hold treats in the hand closest to your dog",
                    "Reward your dog every time the leash stays loose",
                    "Stop moving the moment the leash goes tight",
                ],
                "Pulling only ever works if it moves you forward. Standing still teaches the opposite.",
            ),
            session(
                "Day 2: Three Steps at a Time",
                &[
                    "Take three slow steps and reward at your side",
                    "Turn around calmly whenever your dog surges ahead",
                    "Keep the session to five minutes",
                ],
                "Reward at the seam of your trouser leg so your dog learns exactly where to be.",
            ),
            session(
                "Day 3: Out the Front Door",
                &[
                    "Repeat the three-step game on the doorstep",
                    "Walk one house length, then rest",
                    "Reward generously for checking in with you",
                    "End while your dog is still succeeding",
                ],
                "New smells are hard work. Lower your expectations outdoors and raise your rewards.",
            ),
        ],
        "balance" => vec![
            session(
                "Day 1: Learning to Stand Close",
                &[
                    "Ask your dog to stand beside you and stay",
                    "Reward only a square, steady stance",
                    "Practice near a wall or sturdy chair for your own safety",
                ],
                "Never let your dog take real weight yet. This week is about position, not pressure.",
            ),
            session(
                "Day 2: Introducing the Brace Cue",
                &[
                    "Say \"steady\" and rest your hand lightly on the harness",
                    "Reward your dog for staying planted",
                    "Release with a cheerful \"all done\"",
                    "Repeat five times, then stop",
                ],
                "A consistent cue word matters more than a long session.",
            ),
            session(
                "Day 3: Short Supported Walks",
                &[
                    "Walk a few steps with your hand resting on the harness",
                    "Keep a handrail or helper within reach",
                    "Reward a slow, matched pace",
                ],
                "Watch your dog for signs of strain and stop at the first one. Safety comes first for both of you.",
            ),
        ],
        "fall_detection" => vec![
            session(
                "Day 1: Noticing the Wobble",
                &[
                    "Sit safely in a chair and sway gently",
                    "Reward your dog for looking at you when you move",
                    "Repeat until the sway reliably earns attention",
                ],
                "You are teaching your dog that unusual movement is worth watching.",
            ),
            session(
                "Day 2: Teaching the Nudge",
                &[
                    "Hold a treat near your hip and reward a nose touch",
                    "Name the touch \"check\" once it is eager",
                    "Ask for a \"check\" right after a gentle sway",
                ],
                "Keep alerts gentle. A nudge should steady you, never startle you.",
            ),
            session(
                "Day 3: Linking Wobble to Alert",
                &[
                    "Sway while standing next to a sturdy chair",
                    "Wait quietly for your dog to offer the nudge",
                    "Reward the alert with a jackpot of treats",
                    "Finish with an easy win your dog already knows",
                ],
                "This training is about alerting, not catching you. Keep real support nearby.",
            ),
        ],
        "fall_help" => vec![
            session(
                "Day 1: Loving the Phone",
                &[
                    "Let your dog sniff and nose-touch an old phone",
                    "Reward any interest in picking it up",
                    "Trade the phone for a treat every time",
                ],
                "A happy trade now prevents keep-away games later.",
            ),
            session(
                "Day 2: Fetch It to Your Hand",
                &[
                    "Place the phone a step away and say \"fetch phone\"",
                    "Reward delivery to your open hand",
                    "Gradually add distance across the room",
                ],
                "Deliveries should be gentle. Reward your dog for placing, not dropping.",
            ),
            session(
                "Day 3: Staying Close",
                &[
                    "Sit on the floor and cue \"with me\"",
                    "Reward your dog for lying calmly against you",
                    "Practice \"fetch phone\" from the floor position",
                    "Keep sessions short and upbeat",
                ],
                "Practicing on the floor now makes the real situation feel familiar instead of frightening.",
            ),
        ],
        _ => vec![
            session(
                "Day 1: Getting Started",
                &[
                    "Start with short 5-minute sessions",
                    "Use high-value treats your dog loves",
                    "Practice in a quiet, familiar environment",
                    "End on a positive note",
                ],
                "Keep it short and fun! Your dog learns better when they're enjoying themselves.",
            ),
            session(
                "Day 2: Building Consistency",
                &[
                    "Repeat yesterday's exercises",
                    "Add one new simple command",
                    "Practice twice today with breaks",
                    "Reward immediately when they succeed",
                ],
                "Consistency is key. Practice a little bit every day rather than long sessions.",
            ),
            session(
                "Day 3: Adding Challenges",
                &[
                    "Practice in a slightly busier environment",
                    "Increase session time to 7-8 minutes",
                    "Introduce mild distractions",
                    "Celebrate all progress, even small wins",
                ],
                "Every dog learns at their own pace. Be patient and encouraging!",
            ),
        ],
    }
}

/// The fixed demo-mode answer. Echoes the submitted question verbatim and
/// explains how to enable live generation.
pub fn demo_answer(question: &str) -> String {
    format!(
        "This is the demo version of the dog training assistant, so answers are not \
         personalized yet. To enable live AI-powered answers, set the GEMINI_API_KEY \
         environment variable to a key from Google AI Studio (https://ai.google.dev/) and \
         restart the service.\n\n\
         For your question about \"{question}\", here's some general advice: focus on \
         positive reinforcement, be consistent with training, keep sessions short and fun, \
         and always end on a successful note. Every dog learns differently, so be patient \
         and celebrate small victories!"
    )
}
