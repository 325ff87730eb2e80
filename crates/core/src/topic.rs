use serde::Serialize;

/// An entry in the fixed training-topic catalog.
///
/// Topics are static configuration: the catalog is defined once at compile
/// time and never mutated. The `prompt` is the exact text sent to the
/// backend when a live training plan is requested for this topic.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TrainingTopic {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
}

static CATALOG: [TrainingTopic; 4] = [
    TrainingTopic {
        id: "leash",
        title: "Loose-Leash Walking",
        description: "Teach your dog to walk calmly by your side without pulling on the leash.",
        prompt: "Generate a simple, step-by-step training plan for an elderly person to teach \
                 their service dog loose-leash walking. The dog currently pulls. The plan should \
                 be broken down into 5 short, daily sessions. Use clear, simple language and \
                 focus on positive reinforcement techniques like using treats and praise.",
    },
    TrainingTopic {
        id: "balance",
        title: "Balance Assistance",
        description: "Train your dog to provide gentle support and help you maintain balance while walking.",
        prompt: "Generate a simple, step-by-step training plan for an elderly person to teach \
                 their service dog how to provide balance assistance (light bracing). The plan \
                 should be broken down into 5 short, daily sessions. Emphasize safety for both \
                 the handler and the dog. Use clear, simple language and positive reinforcement.",
    },
    TrainingTopic {
        id: "fall_detection",
        title: "Fall Alert Training",
        description: "Teach your dog to recognize signs of a potential fall and provide an alert.",
        prompt: "Generate a simple, step-by-step training plan for an elderly person to teach \
                 their service dog how to detect signs of impending falls (like dizziness or \
                 swaying) and provide an alert (like a nudge or bark). Break it down into 5 \
                 short, daily sessions. Use clear, simple language and positive reinforcement. \
                 Note: This is for alerting, not physical prevention.",
    },
    TrainingTopic {
        id: "fall_help",
        title: "Help After a Fall",
        description: "Train your dog to perform helpful tasks if you have fallen, like fetching a phone.",
        prompt: "Generate a simple, step-by-step training plan for an elderly person to teach \
                 their service dog how to help after a fall. Focus on two key tasks: fetching a \
                 specific object (like a phone) and staying close to provide comfort. Break it \
                 down into 5 short, daily sessions. Use clear, simple language and positive \
                 reinforcement.",
    },
];

/// Returns the full topic catalog in display order.
pub fn catalog() -> &'static [TrainingTopic] {
    &CATALOG
}

/// Looks up a catalog topic by its id.
pub fn find_topic(id: &str) -> Option<&'static TrainingTopic> {
    CATALOG.iter().find(|topic| topic.id == id)
}
